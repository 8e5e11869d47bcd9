use super::domain::{PersonalDetails, Ratings, SurveySubmission, ValidatedSubmission};

/// Reasons a submission is turned away. Only the first failing rule is reported.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Personal details cannot be empty.")]
    MissingPersonalDetails,
    #[error("Age must be between {min} and {max}.")]
    InvalidAge { min: i32, max: i32 },
    #[error("All rating questions must be answered.")]
    IncompleteRatings,
}

pub const MIN_AGE: i32 = 5;
pub const MAX_AGE: i32 = 120;

/// Business rules applied to every inbound survey before it reaches the store.
#[derive(Debug, Clone)]
pub struct SurveyValidator {
    min_age: i32,
    max_age: i32,
}

impl Default for SurveyValidator {
    fn default() -> Self {
        Self {
            min_age: MIN_AGE,
            max_age: MAX_AGE,
        }
    }
}

impl SurveyValidator {
    /// Check personal details, then age, then ratings.
    pub fn validate(
        &self,
        submission: SurveySubmission,
    ) -> Result<ValidatedSubmission, ValidationError> {
        let SurveySubmission {
            full_name,
            email,
            contact_number,
            age,
            date_of_birth,
            favorite_foods,
            rating_watch_movies,
            rating_listen_to_radio,
            rating_eat_out,
            rating_watch_tv,
        } = submission;

        let personal = match (
            non_blank(full_name),
            non_blank(email),
            non_blank(contact_number),
            date_of_birth,
        ) {
            (Some(full_name), Some(email), Some(contact_number), Some(date_of_birth)) => {
                PersonalDetails {
                    full_name,
                    email,
                    contact_number,
                    date_of_birth,
                }
            }
            _ => return Err(ValidationError::MissingPersonalDetails),
        };

        let age = age
            .filter(|age| (self.min_age..=self.max_age).contains(age))
            .ok_or(ValidationError::InvalidAge {
                min: self.min_age,
                max: self.max_age,
            })?;

        let ratings = match (
            rating_watch_movies,
            rating_listen_to_radio,
            rating_eat_out,
            rating_watch_tv,
        ) {
            (Some(watch_movies), Some(listen_to_radio), Some(eat_out), Some(watch_tv)) => Ratings {
                watch_movies,
                listen_to_radio,
                eat_out,
                watch_tv,
            },
            _ => return Err(ValidationError::IncompleteRatings),
        };

        Ok(ValidatedSubmission {
            personal,
            age,
            ratings,
            favorite_foods,
        })
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|raw| raw.trim().to_string())
        .filter(|trimmed| !trimmed.is_empty())
}

use std::fmt;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use uuid::Uuid;

/// Identifier of a stored survey response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SurveyId(pub Uuid);

impl SurveyId {
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for SurveyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// Identifier of a single favourite-food row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FoodId(pub Uuid);

impl FoodId {
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }
}

/// Raw payload as received from a respondent. Every field may be absent so the
/// validator, not the decoder, decides what is acceptable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SurveySubmission {
    pub full_name: Option<String>,
    pub email: Option<String>,
    pub contact_number: Option<String>,
    pub age: Option<i32>,
    #[serde(default, deserialize_with = "deserialize_optional_date")]
    pub date_of_birth: Option<NaiveDate>,
    #[serde(default, deserialize_with = "deserialize_food_list")]
    pub favorite_foods: Vec<String>,
    pub rating_watch_movies: Option<i32>,
    pub rating_listen_to_radio: Option<i32>,
    pub rating_eat_out: Option<i32>,
    pub rating_watch_tv: Option<i32>,
}

/// Contact details that passed validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonalDetails {
    pub full_name: String,
    pub email: String,
    pub contact_number: String,
    pub date_of_birth: NaiveDate,
}

/// The four satisfaction answers. Values are stored as given; no scale is enforced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ratings {
    #[serde(rename = "ratingWatchMovies")]
    pub watch_movies: i32,
    #[serde(rename = "ratingListenToRadio")]
    pub listen_to_radio: i32,
    #[serde(rename = "ratingEatOut")]
    pub eat_out: i32,
    #[serde(rename = "ratingWatchTv")]
    pub watch_tv: i32,
}

impl Ratings {
    pub fn get(&self, dimension: RatingDimension) -> i32 {
        match dimension {
            RatingDimension::WatchMovies => self.watch_movies,
            RatingDimension::ListenToRadio => self.listen_to_radio,
            RatingDimension::EatOut => self.eat_out,
            RatingDimension::WatchTv => self.watch_tv,
        }
    }
}

/// Submission accepted by the validator and ready to be persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedSubmission {
    pub personal: PersonalDetails,
    pub age: i32,
    pub ratings: Ratings,
    pub favorite_foods: Vec<String>,
}

/// A persisted survey response together with the food rows it owns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredSurvey {
    pub survey_id: SurveyId,
    #[serde(flatten)]
    pub personal: PersonalDetails,
    pub age: i32,
    #[serde(flatten)]
    pub ratings: Ratings,
    pub favorite_foods: Vec<FavoriteFood>,
    pub created_at: DateTime<Utc>,
}

impl StoredSurvey {
    pub fn lists_food(&self, food_item: &str) -> bool {
        self.favorite_foods
            .iter()
            .any(|food| food.food_item == food_item)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FavoriteFood {
    pub id: FoodId,
    #[serde(skip)]
    pub survey_id: SurveyId,
    pub food_item: String,
}

/// Satisfaction questions asked on every survey.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RatingDimension {
    WatchMovies,
    ListenToRadio,
    EatOut,
    WatchTv,
}

impl RatingDimension {
    pub fn ordered() -> [RatingDimension; 4] {
        [
            RatingDimension::WatchMovies,
            RatingDimension::ListenToRadio,
            RatingDimension::EatOut,
            RatingDimension::WatchTv,
        ]
    }

    pub fn label(&self) -> &'static str {
        match self {
            RatingDimension::WatchMovies => "watch movies",
            RatingDimension::ListenToRadio => "listen to radio",
            RatingDimension::EatOut => "eat out",
            RatingDimension::WatchTv => "watch TV",
        }
    }
}

/// Numeric columns the store can aggregate over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SurveyField {
    Age,
    Rating(RatingDimension),
}

/// Foods whose popularity is reported in the analytics summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TrackedFood {
    Pizza,
    Pasta,
    PapAndWors,
}

impl TrackedFood {
    pub fn ordered() -> [TrackedFood; 3] {
        [TrackedFood::Pizza, TrackedFood::Pasta, TrackedFood::PapAndWors]
    }

    /// Exact food name as respondents submit it.
    pub fn label(&self) -> &'static str {
        match self {
            TrackedFood::Pizza => "Pizza",
            TrackedFood::Pasta => "Pasta",
            TrackedFood::PapAndWors => "Pap and Wors",
        }
    }
}

fn deserialize_optional_date<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(value) => NaiveDate::parse_from_str(value, "%Y-%m-%d")
            .map(Some)
            .map_err(|err| {
                serde::de::Error::custom(format!(
                    "failed to parse '{value}' as YYYY-MM-DD ({err})"
                ))
            }),
    }
}

fn deserialize_food_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<String>>::deserialize(deserializer)?.unwrap_or_default())
}

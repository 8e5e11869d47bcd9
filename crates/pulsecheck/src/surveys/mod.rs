//! Survey intake and aggregate analytics.
//!
//! Submissions pass through [`SurveyValidator`] before [`SurveyStore::insert`]
//! persists the response together with its favourite foods. Analytics are
//! recomputed from store queries on every request.

pub mod analytics;
pub mod domain;
pub mod memory;
pub mod router;
pub mod service;
pub mod store;
pub mod validation;

#[cfg(test)]
mod tests;

pub use analytics::{round_one_decimal, AnalyticsAggregator, SurveyAnalytics};
pub use domain::{
    FavoriteFood, FoodId, PersonalDetails, RatingDimension, Ratings, StoredSurvey, SurveyField,
    SurveyId, SurveySubmission, TrackedFood, ValidatedSubmission,
};
pub use memory::{Clock, InMemorySurveyStore};
pub use router::survey_router;
pub use service::{SurveyService, SurveyServiceError};
pub use store::{StoreError, SurveyStore};
pub use validation::{SurveyValidator, ValidationError, MAX_AGE, MIN_AGE};

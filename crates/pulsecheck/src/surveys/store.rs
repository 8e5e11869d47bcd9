use super::domain::{StoredSurvey, SurveyField, SurveyId, ValidatedSubmission};

/// Durable storage for survey responses and the food rows they own.
///
/// Implementations assign identifiers and creation timestamps. `insert` must be
/// all-or-nothing: either the response and every food row are visible to later
/// queries or none of them are. Aggregates return `None` when no rows exist.
pub trait SurveyStore: Send + Sync {
    fn insert(&self, submission: ValidatedSubmission) -> Result<StoredSurvey, StoreError>;
    fn fetch(&self, id: &SurveyId) -> Result<Option<StoredSurvey>, StoreError>;
    /// All responses in insertion order.
    fn list(&self) -> Result<Vec<StoredSurvey>, StoreError>;
    fn count(&self) -> Result<u64, StoreError>;
    fn average(&self, field: SurveyField) -> Result<Option<f64>, StoreError>;
    fn min(&self, field: SurveyField) -> Result<Option<i32>, StoreError>;
    fn max(&self, field: SurveyField) -> Result<Option<i32>, StoreError>;
    /// Number of distinct responses listing `food_item` at least once.
    fn count_responses_with_food(&self, food_item: &str) -> Result<u64, StoreError>;
}

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("survey {0} not found")]
    NotFound(SurveyId),
    #[error("survey {0} already exists")]
    Conflict(SurveyId),
    #[error("store unavailable: {0}")]
    Unavailable(String),
}

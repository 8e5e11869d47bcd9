use std::sync::Arc;

use tracing::{debug, info, warn};

use super::analytics::{AnalyticsAggregator, SurveyAnalytics};
use super::domain::{StoredSurvey, SurveyId, SurveySubmission};
use super::store::{StoreError, SurveyStore};
use super::validation::{SurveyValidator, ValidationError};

/// Service composing the validator, the store, and the analytics aggregator.
pub struct SurveyService<S> {
    validator: SurveyValidator,
    aggregator: AnalyticsAggregator,
    store: Arc<S>,
}

impl<S> SurveyService<S>
where
    S: SurveyStore + 'static,
{
    pub fn new(store: Arc<S>) -> Self {
        Self {
            validator: SurveyValidator::default(),
            aggregator: AnalyticsAggregator,
            store,
        }
    }

    /// Validate and persist a submission, returning the stored response.
    pub fn submit(&self, submission: SurveySubmission) -> Result<StoredSurvey, SurveyServiceError> {
        let validated = self.validator.validate(submission).map_err(|err| {
            warn!(reason = %err, "survey submission rejected");
            err
        })?;

        let stored = self.store.insert(validated)?;
        info!(
            survey_id = %stored.survey_id,
            favorite_foods = stored.favorite_foods.len(),
            "survey response stored"
        );
        Ok(stored)
    }

    /// Summary statistics, or `None` while no survey has been stored.
    pub fn analytics(&self) -> Result<Option<SurveyAnalytics>, SurveyServiceError> {
        let summary = self.aggregator.summarize(self.store.as_ref())?;
        match &summary {
            Some(analytics) => debug!(total = analytics.total_surveys, "analytics computed"),
            None => debug!("analytics requested before any submission"),
        }
        Ok(summary)
    }

    pub fn get(&self, id: &SurveyId) -> Result<StoredSurvey, SurveyServiceError> {
        let survey = self.store.fetch(id)?.ok_or(StoreError::NotFound(*id))?;
        Ok(survey)
    }

    pub fn list(&self) -> Result<Vec<StoredSurvey>, SurveyServiceError> {
        Ok(self.store.list()?)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum SurveyServiceError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Store(#[from] StoreError),
}

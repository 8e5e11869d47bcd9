use metrics_exporter_prometheus::PrometheusHandle;
use pulsecheck::surveys::{InMemorySurveyStore, SurveyService};
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Survey service backed by the process-local store.
pub(crate) fn in_memory_survey_service() -> Arc<SurveyService<InMemorySurveyStore>> {
    let store = Arc::new(InMemorySurveyStore::default());
    Arc::new(SurveyService::new(store))
}

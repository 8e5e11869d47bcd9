use std::sync::Arc;

use axum::response::Response;
use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use serde_json::Value;

use crate::surveys::domain::{
    PersonalDetails, Ratings, StoredSurvey, SurveyField, SurveyId, SurveySubmission,
    ValidatedSubmission,
};
use crate::surveys::memory::{Clock, InMemorySurveyStore};
use crate::surveys::store::{StoreError, SurveyStore};
use crate::surveys::{survey_router, SurveyService};

pub(crate) fn fixed_clock() -> Clock {
    Arc::new(|| {
        Utc.with_ymd_and_hms(2025, 3, 14, 9, 30, 0)
            .single()
            .expect("valid timestamp")
    })
}

pub(crate) fn fixed_time() -> DateTime<Utc> {
    fixed_clock()()
}

pub(crate) fn submission() -> SurveySubmission {
    SurveySubmission {
        full_name: Some("Thandi Mokoena".to_string()),
        email: Some("thandi@example.com".to_string()),
        contact_number: Some("+27 82 555 0101".to_string()),
        age: Some(34),
        date_of_birth: NaiveDate::from_ymd_opt(1991, 5, 2),
        favorite_foods: vec!["Pizza".to_string(), "Pap and Wors".to_string()],
        rating_watch_movies: Some(4),
        rating_listen_to_radio: Some(2),
        rating_eat_out: Some(5),
        rating_watch_tv: Some(3),
    }
}

pub(crate) fn submission_with(age: i32, foods: &[&str], ratings: [i32; 4]) -> SurveySubmission {
    let [watch_movies, listen_to_radio, eat_out, watch_tv] = ratings;
    SurveySubmission {
        age: Some(age),
        favorite_foods: foods.iter().map(|food| food.to_string()).collect(),
        rating_watch_movies: Some(watch_movies),
        rating_listen_to_radio: Some(listen_to_radio),
        rating_eat_out: Some(eat_out),
        rating_watch_tv: Some(watch_tv),
        ..submission()
    }
}

pub(crate) fn validated(age: i32, foods: &[&str]) -> ValidatedSubmission {
    ValidatedSubmission {
        personal: PersonalDetails {
            full_name: "Sipho Dlamini".to_string(),
            email: "sipho@example.com".to_string(),
            contact_number: "011 555 0199".to_string(),
            date_of_birth: NaiveDate::from_ymd_opt(1990, 1, 1).expect("valid date"),
        },
        age,
        ratings: Ratings {
            watch_movies: 3,
            listen_to_radio: 3,
            eat_out: 3,
            watch_tv: 3,
        },
        favorite_foods: foods.iter().map(|food| food.to_string()).collect(),
    }
}

pub(crate) fn build_service() -> (SurveyService<InMemorySurveyStore>, Arc<InMemorySurveyStore>) {
    let store = Arc::new(InMemorySurveyStore::with_clock(fixed_clock()));
    (SurveyService::new(store.clone()), store)
}

pub(crate) fn router_with_service(service: SurveyService<InMemorySurveyStore>) -> axum::Router {
    survey_router(Arc::new(service))
}

/// Store whose every operation fails, for exercising internal-error paths.
pub(crate) struct UnavailableStore;

impl SurveyStore for UnavailableStore {
    fn insert(&self, _submission: ValidatedSubmission) -> Result<StoredSurvey, StoreError> {
        Err(StoreError::Unavailable("database offline".to_string()))
    }

    fn fetch(&self, _id: &SurveyId) -> Result<Option<StoredSurvey>, StoreError> {
        Err(StoreError::Unavailable("database offline".to_string()))
    }

    fn list(&self) -> Result<Vec<StoredSurvey>, StoreError> {
        Err(StoreError::Unavailable("database offline".to_string()))
    }

    fn count(&self) -> Result<u64, StoreError> {
        Err(StoreError::Unavailable("database offline".to_string()))
    }

    fn average(&self, _field: SurveyField) -> Result<Option<f64>, StoreError> {
        Err(StoreError::Unavailable("database offline".to_string()))
    }

    fn min(&self, _field: SurveyField) -> Result<Option<i32>, StoreError> {
        Err(StoreError::Unavailable("database offline".to_string()))
    }

    fn max(&self, _field: SurveyField) -> Result<Option<i32>, StoreError> {
        Err(StoreError::Unavailable("database offline".to_string()))
    }

    fn count_responses_with_food(&self, _food_item: &str) -> Result<u64, StoreError> {
        Err(StoreError::Unavailable("database offline".to_string()))
    }
}

pub(crate) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}

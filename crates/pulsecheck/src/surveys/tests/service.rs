use std::sync::Arc;

use super::common::*;
use crate::surveys::domain::SurveyId;
use crate::surveys::store::{StoreError, SurveyStore};
use crate::surveys::validation::ValidationError;
use crate::surveys::{SurveyService, SurveyServiceError};

#[test]
fn submit_persists_response_and_food_rows() {
    let (service, store) = build_service();

    let stored = service.submit(submission()).expect("submission accepted");

    assert_eq!(stored.personal.full_name, "Thandi Mokoena");
    assert_eq!(stored.created_at, fixed_time());
    assert!(stored.lists_food("Pizza"));
    assert!(stored.lists_food("Pap and Wors"));
    assert_eq!(store.count().expect("count"), 1);
    assert_eq!(
        store.fetch(&stored.survey_id).expect("fetch"),
        Some(stored.clone())
    );
}

#[test]
fn submit_with_no_foods_stores_zero_food_rows() {
    let (service, store) = build_service();

    let stored = service
        .submit(submission_with(22, &[], [1, 1, 1, 1]))
        .expect("submission accepted");

    assert!(stored.favorite_foods.is_empty());
    let fetched = store
        .fetch(&stored.survey_id)
        .expect("fetch")
        .expect("present");
    assert!(fetched.favorite_foods.is_empty());
}

#[test]
fn rejected_submissions_never_reach_the_store() {
    let (service, store) = build_service();
    let mut invalid = submission();
    invalid.age = Some(3);

    match service.submit(invalid) {
        Err(SurveyServiceError::Validation(ValidationError::InvalidAge { .. })) => {}
        other => panic!("expected invalid age, got {other:?}"),
    }
    assert_eq!(store.count().expect("count"), 0);
}

#[test]
fn submit_propagates_store_failures() {
    let service = SurveyService::new(Arc::new(UnavailableStore));

    match service.submit(submission()) {
        Err(SurveyServiceError::Store(StoreError::Unavailable(_))) => {}
        other => panic!("expected store failure, got {other:?}"),
    }
}

#[test]
fn analytics_is_empty_until_first_submission() {
    let (service, _) = build_service();
    assert!(service.analytics().expect("analytics").is_none());

    service.submit(submission()).expect("submission accepted");
    let summary = service
        .analytics()
        .expect("analytics")
        .expect("summary present");
    assert_eq!(summary.total_surveys, 1);
    assert_eq!(summary.pizza_lovers_percentage, 100.0);
    assert_eq!(summary.pasta_lovers_percentage, 0.0);
}

#[test]
fn get_reports_unknown_ids() {
    let (service, _) = build_service();
    let missing = SurveyId::generate();

    match service.get(&missing) {
        Err(SurveyServiceError::Store(StoreError::NotFound(id))) => assert_eq!(id, missing),
        other => panic!("expected not found, got {other:?}"),
    }
}

#[test]
fn list_returns_every_submission() {
    let (service, _) = build_service();
    let first = service.submit(submission()).expect("accepted");
    let second = service
        .submit(submission_with(61, &["Pasta"], [2, 2, 2, 2]))
        .expect("accepted");

    let listed = service.list().expect("list");
    assert_eq!(listed, vec![first, second]);
}

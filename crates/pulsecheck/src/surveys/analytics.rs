use serde::Serialize;

use super::domain::{RatingDimension, SurveyField, TrackedFood};
use super::store::{StoreError, SurveyStore};

/// Composite statistics over every stored response.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SurveyAnalytics {
    pub total_surveys: u64,
    pub average_age: f64,
    pub youngest_age: i32,
    pub oldest_age: i32,
    pub pizza_lovers_percentage: f64,
    pub pasta_lovers_percentage: f64,
    pub pap_and_wors_lovers_percentage: f64,
    pub average_watch_movies_rating: f64,
    pub average_listen_to_radio_rating: f64,
    pub average_eat_out_rating: f64,
    pub average_watch_tv_rating: f64,
}

impl SurveyAnalytics {
    pub fn food_percentage(&self, food: TrackedFood) -> f64 {
        match food {
            TrackedFood::Pizza => self.pizza_lovers_percentage,
            TrackedFood::Pasta => self.pasta_lovers_percentage,
            TrackedFood::PapAndWors => self.pap_and_wors_lovers_percentage,
        }
    }

    pub fn average_rating(&self, dimension: RatingDimension) -> f64 {
        match dimension {
            RatingDimension::WatchMovies => self.average_watch_movies_rating,
            RatingDimension::ListenToRadio => self.average_listen_to_radio_rating,
            RatingDimension::EatOut => self.average_eat_out_rating,
            RatingDimension::WatchTv => self.average_watch_tv_rating,
        }
    }
}

/// Round to one decimal place, ties going towards positive infinity.
pub fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0 + 0.5).floor() / 10.0
}

/// Computes [`SurveyAnalytics`] straight from store queries on every call.
#[derive(Debug, Clone, Default)]
pub struct AnalyticsAggregator;

impl AnalyticsAggregator {
    /// Returns `Ok(None)` when nothing has been submitted yet.
    pub fn summarize<S>(&self, store: &S) -> Result<Option<SurveyAnalytics>, StoreError>
    where
        S: SurveyStore + ?Sized,
    {
        let total = store.count()?;
        if total == 0 {
            return Ok(None);
        }

        let rounded_average = |field: SurveyField| -> Result<f64, StoreError> {
            Ok(store.average(field)?.map(round_one_decimal).unwrap_or(0.0))
        };
        let percentage = |food: TrackedFood| -> Result<f64, StoreError> {
            let lovers = store.count_responses_with_food(food.label())?;
            Ok(round_one_decimal(lovers as f64 / total as f64 * 100.0))
        };
        let rating = |dimension: RatingDimension| rounded_average(SurveyField::Rating(dimension));

        Ok(Some(SurveyAnalytics {
            total_surveys: total,
            average_age: rounded_average(SurveyField::Age)?,
            youngest_age: store.min(SurveyField::Age)?.unwrap_or(0),
            oldest_age: store.max(SurveyField::Age)?.unwrap_or(0),
            pizza_lovers_percentage: percentage(TrackedFood::Pizza)?,
            pasta_lovers_percentage: percentage(TrackedFood::Pasta)?,
            pap_and_wors_lovers_percentage: percentage(TrackedFood::PapAndWors)?,
            average_watch_movies_rating: rating(RatingDimension::WatchMovies)?,
            average_listen_to_radio_rating: rating(RatingDimension::ListenToRadio)?,
            average_eat_out_rating: rating(RatingDimension::EatOut)?,
            average_watch_tv_rating: rating(RatingDimension::WatchTv)?,
        }))
    }
}

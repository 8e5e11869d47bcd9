use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

use chrono::{DateTime, Utc};

use super::domain::{
    FavoriteFood, FoodId, PersonalDetails, Ratings, StoredSurvey, SurveyField, SurveyId,
    ValidatedSubmission,
};
use super::store::{StoreError, SurveyStore};

pub type Clock = Arc<dyn Fn() -> DateTime<Utc> + Send + Sync>;

/// Process-local store. Responses and food rows live in separate tables, with
/// food rows indexed by the id of the response that owns them.
#[derive(Clone)]
pub struct InMemorySurveyStore {
    tables: Arc<Mutex<Tables>>,
    clock: Clock,
}

#[derive(Default)]
struct Tables {
    responses: Vec<SurveyRow>,
    positions: HashMap<SurveyId, usize>,
    foods: HashMap<SurveyId, Vec<FavoriteFood>>,
}

struct SurveyRow {
    id: SurveyId,
    personal: PersonalDetails,
    age: i32,
    ratings: Ratings,
    created_at: DateTime<Utc>,
}

impl Default for InMemorySurveyStore {
    fn default() -> Self {
        Self::with_clock(Arc::new(Utc::now))
    }
}

impl InMemorySurveyStore {
    pub fn with_clock(clock: Clock) -> Self {
        Self {
            tables: Arc::new(Mutex::new(Tables::default())),
            clock,
        }
    }

    fn lock(&self) -> Result<MutexGuard<'_, Tables>, StoreError> {
        self.tables
            .lock()
            .map_err(|_| StoreError::Unavailable("survey tables poisoned".to_string()))
    }

    fn values(&self, field: SurveyField) -> Result<Vec<i32>, StoreError> {
        let tables = self.lock()?;
        Ok(tables
            .responses
            .iter()
            .map(|row| row.value_of(field))
            .collect())
    }
}

impl SurveyRow {
    fn value_of(&self, field: SurveyField) -> i32 {
        match field {
            SurveyField::Age => self.age,
            SurveyField::Rating(dimension) => self.ratings.get(dimension),
        }
    }
}

impl Tables {
    fn assemble(&self, row: &SurveyRow) -> StoredSurvey {
        StoredSurvey {
            survey_id: row.id,
            personal: row.personal.clone(),
            age: row.age,
            ratings: row.ratings,
            favorite_foods: self.foods.get(&row.id).cloned().unwrap_or_default(),
            created_at: row.created_at,
        }
    }
}

impl SurveyStore for InMemorySurveyStore {
    fn insert(&self, submission: ValidatedSubmission) -> Result<StoredSurvey, StoreError> {
        let ValidatedSubmission {
            personal,
            age,
            ratings,
            favorite_foods,
        } = submission;

        let id = SurveyId::generate();
        let row = SurveyRow {
            id,
            personal,
            age,
            ratings,
            created_at: (self.clock)(),
        };
        let foods: Vec<FavoriteFood> = favorite_foods
            .into_iter()
            .map(|food_item| FavoriteFood {
                id: FoodId::generate(),
                survey_id: id,
                food_item,
            })
            .collect();

        // Both tables change under one guard so readers never see a partial bundle.
        let mut tables = self.lock()?;
        if tables.positions.contains_key(&id) {
            return Err(StoreError::Conflict(id));
        }
        let position = tables.responses.len();
        tables.positions.insert(id, position);
        if !foods.is_empty() {
            tables.foods.insert(id, foods);
        }
        tables.responses.push(row);
        Ok(tables.assemble(&tables.responses[position]))
    }

    fn fetch(&self, id: &SurveyId) -> Result<Option<StoredSurvey>, StoreError> {
        let tables = self.lock()?;
        Ok(tables
            .positions
            .get(id)
            .map(|&position| tables.assemble(&tables.responses[position])))
    }

    fn list(&self) -> Result<Vec<StoredSurvey>, StoreError> {
        let tables = self.lock()?;
        Ok(tables
            .responses
            .iter()
            .map(|row| tables.assemble(row))
            .collect())
    }

    fn count(&self) -> Result<u64, StoreError> {
        Ok(self.lock()?.responses.len() as u64)
    }

    fn average(&self, field: SurveyField) -> Result<Option<f64>, StoreError> {
        let values = self.values(field)?;
        if values.is_empty() {
            return Ok(None);
        }
        let sum: i64 = values.iter().map(|&value| i64::from(value)).sum();
        Ok(Some(sum as f64 / values.len() as f64))
    }

    fn min(&self, field: SurveyField) -> Result<Option<i32>, StoreError> {
        Ok(self.values(field)?.into_iter().min())
    }

    fn max(&self, field: SurveyField) -> Result<Option<i32>, StoreError> {
        Ok(self.values(field)?.into_iter().max())
    }

    fn count_responses_with_food(&self, food_item: &str) -> Result<u64, StoreError> {
        let tables = self.lock()?;
        let owners = tables
            .foods
            .values()
            .filter(|foods| foods.iter().any(|food| food.food_item == food_item))
            .count();
        Ok(owners as u64)
    }
}

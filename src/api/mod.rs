mod client;

pub use client::MealDbClient;

use async_trait::async_trait;

use crate::error::SearchError;
use crate::model::{MealDetails, MealSummary};

/// Read-only source of meals
#[async_trait]
pub trait MealSource: Send + Sync {
    /// Meals that use the given ingredient. No matches is an empty list,
    /// a failed request is an error.
    async fn filter_by_ingredient(&self, ingredient: &str) -> Result<Vec<MealSummary>, SearchError>;

    /// Full record for one meal. Every failure is reported as `None`.
    async fn details_by_id(&self, id: &str) -> Option<MealDetails>;
}

pub mod api;
pub mod builder;
pub mod config;
pub mod criteria;
pub mod error;
pub mod estimate;
pub mod filters;
pub mod ingredients;
pub mod join;
pub mod model;
pub mod render;
pub mod search;

pub use api::{MealDbClient, MealSource};
pub use builder::{MealFinder, MealFinderBuilder};
pub use config::FinderConfig;
pub use criteria::SearchCriteria;
pub use error::SearchError;
pub use estimate::estimate_minutes;
pub use filters::{Diet, Mood, TimeBucket};
pub use ingredients::extract_ingredients;
pub use model::{IngredientLine, MealDetails, MealSummary};
pub use search::{find_meals, intersect_ids, MealSearch, SearchState};

/// Find meals using every ingredient in a comma-separated list, with no
/// other filters and configuration loaded from file and environment
///
/// # Example
/// ```no_run
/// # #[tokio::main]
/// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let meals = meal_finder::search_by_ingredients("chicken, rice").await?;
/// for meal in meals {
///     println!("{}", meal.name);
/// }
/// # Ok(())
/// # }
/// ```
pub async fn search_by_ingredients(ingredients: &str) -> Result<Vec<MealDetails>, SearchError> {
    MealFinder::builder().ingredients(ingredients).build().await
}

use std::time::Duration;

use crate::api::MealDbClient;
use crate::config::FinderConfig;
use crate::criteria::{parse_list, SearchCriteria};
use crate::filters::{Diet, Mood, TimeBucket};
use crate::model::MealDetails;
use crate::search::{find_meals, EMPTY_INGREDIENTS_MESSAGE};
use crate::SearchError;

/// Builder for configuring and running a one-off meal search
#[derive(Debug, Default)]
pub struct MealFinderBuilder {
    criteria: SearchCriteria,
    config: Option<FinderConfig>,
    base_url: Option<String>,
    timeout: Option<Duration>,
    max_candidates: Option<usize>,
}

impl MealFinderBuilder {
    /// Set the ingredients every result must use, as a comma-separated list
    ///
    /// # Example
    /// ```
    /// use meal_finder::MealFinder;
    ///
    /// let builder = MealFinder::builder().ingredients("chicken, rice");
    /// ```
    pub fn ingredients(mut self, ingredients: &str) -> Self {
        self.criteria.ingredients = parse_list(ingredients);
        self
    }

    /// Set ingredients that must not appear, as a comma-separated list
    ///
    /// Matching is by substring, so `"peanut"` also rules out `"Peanuts"`.
    pub fn exclude(mut self, excludes: &str) -> Self {
        self.criteria.excludes = parse_list(excludes);
        self
    }

    pub fn time(mut self, time: TimeBucket) -> Self {
        self.criteria.time = time;
        self
    }

    pub fn mood(mut self, mood: Mood) -> Self {
        self.criteria.mood = mood;
        self
    }

    pub fn diet(mut self, diet: Diet) -> Self {
        self.criteria.diet = diet;
        self
    }

    /// Use a fully specified configuration instead of loading one from
    /// `meal-finder.toml` and the environment
    pub fn config(mut self, config: FinderConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Point the search at a different API root
    ///
    /// # Example
    /// ```
    /// use meal_finder::MealFinder;
    ///
    /// let builder = MealFinder::builder()
    ///     .ingredients("eggs")
    ///     .base_url("http://localhost:8080/api/json/v1/1");
    /// ```
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Set a timeout for HTTP requests
    pub fn timeout(mut self, duration: Duration) -> Self {
        self.timeout = Some(duration);
        self
    }

    /// Limit how many candidate meals have their details fetched
    pub fn max_candidates(mut self, max_candidates: usize) -> Self {
        self.max_candidates = Some(max_candidates);
        self
    }

    /// Build and run the search
    ///
    /// # Errors
    /// Returns `SearchError` if:
    /// - No ingredients were given
    /// - Configuration cannot be loaded
    /// - Any ingredient query fails
    ///
    /// # Example
    /// ```no_run
    /// # use meal_finder::{MealFinder, Diet};
    /// # #[tokio::main]
    /// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let meals = MealFinder::builder()
    ///     .ingredients("chicken, rice")
    ///     .diet(Diet::GlutenFree)
    ///     .build()
    ///     .await?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn build(self) -> Result<Vec<MealDetails>, SearchError> {
        if self.criteria.ingredients.is_empty() {
            return Err(SearchError::Validation(EMPTY_INGREDIENTS_MESSAGE.to_string()));
        }

        let mut config = match self.config {
            Some(config) => config,
            None => FinderConfig::load()?,
        };
        if let Some(base_url) = self.base_url {
            config.base_url = base_url;
        }
        if let Some(timeout) = self.timeout {
            config.timeout = timeout.as_secs().max(1);
        }
        if let Some(max_candidates) = self.max_candidates {
            config.max_candidates = max_candidates;
        }

        let client = MealDbClient::new(&config)?;
        find_meals(client, &self.criteria, config.max_candidates).await
    }
}

/// Main entry point for the builder API
pub struct MealFinder;

impl MealFinder {
    /// Creates a new builder for a meal search
    ///
    /// # Example
    /// ```
    /// use meal_finder::MealFinder;
    ///
    /// let builder = MealFinder::builder();
    /// ```
    pub fn builder() -> MealFinderBuilder {
        MealFinderBuilder::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_build_without_ingredients_fails_fast() {
        let result = MealFinder::builder()
            .ingredients(" , ")
            .base_url("http://127.0.0.1:9")
            .build()
            .await;
        match result {
            Err(SearchError::Validation(message)) => {
                assert_eq!(message, EMPTY_INGREDIENTS_MESSAGE)
            }
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_builder_collects_criteria() {
        let builder = MealFinder::builder()
            .ingredients("Chicken, rice")
            .exclude("Peanut")
            .time(TimeBucket::Under45)
            .mood(Mood::Comfort)
            .diet(Diet::Vegetarian)
            .max_candidates(10);
        assert_eq!(builder.criteria.ingredients, vec!["chicken", "rice"]);
        assert_eq!(builder.criteria.excludes, vec!["peanut"]);
        assert_eq!(builder.criteria.time, TimeBucket::Under45);
        assert_eq!(builder.criteria.mood, Mood::Comfort);
        assert_eq!(builder.criteria.diet, Diet::Vegetarian);
        assert_eq!(builder.max_candidates, Some(10));
    }
}

use async_trait::async_trait;
use log::{debug, warn};
use reqwest::Client;

use crate::api::MealSource;
use crate::config::FinderConfig;
use crate::error::SearchError;
use crate::model::{MealDetails, MealSummary, MealsEnvelope, RawMeal};

/// HTTP client for TheMealDB's filter and lookup endpoints
pub struct MealDbClient {
    client: Client,
    filter_url: String,
    lookup_url: String,
}

impl MealDbClient {
    pub fn new(config: &FinderConfig) -> Result<Self, SearchError> {
        let client = Client::builder()
            .timeout(config.timeout())
            .user_agent(config.user_agent.as_str())
            .build()?;

        Ok(Self {
            client,
            filter_url: config.endpoint("filter.php"),
            lookup_url: config.endpoint("lookup.php"),
        })
    }

    #[doc(hidden)]
    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self, SearchError> {
        let config = FinderConfig {
            base_url: base_url.into(),
            ..FinderConfig::default()
        };
        Self::new(&config)
    }

    async fn lookup(&self, id: &str) -> Result<Option<MealDetails>, reqwest::Error> {
        let envelope: MealsEnvelope<RawMeal> = self
            .client
            .get(&self.lookup_url)
            .query(&[("i", id)])
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        Ok(envelope
            .meals
            .and_then(|meals| meals.into_iter().next())
            .map(MealDetails::from))
    }
}

#[async_trait]
impl MealSource for MealDbClient {
    async fn filter_by_ingredient(&self, ingredient: &str) -> Result<Vec<MealSummary>, SearchError> {
        debug!("Filtering meals by ingredient '{}'", ingredient);
        let envelope: MealsEnvelope<MealSummary> = self
            .client
            .get(&self.filter_url)
            .query(&[("i", ingredient)])
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        let meals = envelope.meals.unwrap_or_default();
        debug!("{} meals use '{}'", meals.len(), ingredient);
        Ok(meals)
    }

    async fn details_by_id(&self, id: &str) -> Option<MealDetails> {
        match self.lookup(id).await {
            Ok(Some(meal)) => Some(meal),
            Ok(None) => {
                debug!("No details for meal {}", id);
                None
            }
            Err(e) => {
                warn!("Skipping meal {}: {}", id, e);
                None
            }
        }
    }
}

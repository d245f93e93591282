use std::collections::HashSet;

use log::{debug, info, warn};
use serde::Serialize;

use crate::api::MealSource;
use crate::criteria::SearchCriteria;
use crate::error::SearchError;
use crate::filters::{matches_diet, matches_exclusions, matches_mood, matches_time};
use crate::join::{join_lenient, join_strict};
use crate::model::MealDetails;

pub const DEFAULT_MAX_CANDIDATES: usize = 24;

pub const EMPTY_INGREDIENTS_MESSAGE: &str = "Please enter at least one ingredient.";

/// Where a search session currently stands
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(tag = "state", content = "value", rename_all = "snake_case")]
pub enum SearchState {
    #[default]
    Idle,
    Loading,
    Success(Vec<MealDetails>),
    Empty,
    Error(String),
}

impl SearchState {
    pub fn results(&self) -> &[MealDetails] {
        match self {
            SearchState::Success(meals) => meals,
            _ => &[],
        }
    }
}

/// IDs present in every list, in the order of the first list
pub fn intersect_ids(lists: &[Vec<String>]) -> Vec<String> {
    let Some((first, rest)) = lists.split_first() else {
        return Vec::new();
    };
    let others: Vec<HashSet<&str>> = rest
        .iter()
        .map(|list| list.iter().map(String::as_str).collect())
        .collect();

    let mut seen = HashSet::new();
    first
        .iter()
        .filter(|id| others.iter().all(|set| set.contains(id.as_str())))
        .filter(|id| seen.insert(id.as_str()))
        .cloned()
        .collect()
}

/// True when the meal passes the time, mood, diet and exclusion predicates
pub fn passes_filters(meal: &MealDetails, criteria: &SearchCriteria) -> bool {
    matches_time(meal, criteria.time)
        && matches_mood(meal, criteria.mood)
        && matches_diet(meal, criteria.diet)
        && matches_exclusions(meal, &criteria.excludes)
}

/// A search session: runs searches against a meal source and owns the
/// resulting state and the set of expanded result cards
pub struct MealSearch<S> {
    source: S,
    max_candidates: usize,
    state: SearchState,
    expanded: HashSet<String>,
}

impl<S: MealSource> MealSearch<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            max_candidates: DEFAULT_MAX_CANDIDATES,
            state: SearchState::Idle,
            expanded: HashSet::new(),
        }
    }

    pub fn with_max_candidates(mut self, max_candidates: usize) -> Self {
        self.max_candidates = max_candidates;
        self
    }

    pub fn state(&self) -> &SearchState {
        &self.state
    }

    /// Run one search and move the session to its outcome state
    pub async fn submit(&mut self, criteria: &SearchCriteria) -> &SearchState {
        if criteria.ingredients.is_empty() {
            self.state = SearchState::Error(EMPTY_INGREDIENTS_MESSAGE.to_string());
            return &self.state;
        }

        self.state = SearchState::Loading;
        let next = match self.run(criteria).await {
            Ok(meals) if meals.is_empty() => SearchState::Empty,
            Ok(meals) => {
                self.expanded.clear();
                SearchState::Success(meals)
            }
            Err(e) => {
                warn!("Search failed: {}", e);
                SearchState::Error(e.user_message())
            }
        };
        self.state = next;
        &self.state
    }

    async fn run(&self, criteria: &SearchCriteria) -> Result<Vec<MealDetails>, SearchError> {
        if criteria.ingredients.is_empty() {
            return Err(SearchError::Validation(EMPTY_INGREDIENTS_MESSAGE.to_string()));
        }

        let per_ingredient = join_strict(
            criteria
                .ingredients
                .iter()
                .map(|ingredient| self.source.filter_by_ingredient(ingredient)),
        )
        .await?;

        let id_lists: Vec<Vec<String>> = per_ingredient
            .into_iter()
            .map(|meals| meals.into_iter().map(|meal| meal.id).collect())
            .collect();
        let candidates = intersect_ids(&id_lists);
        info!(
            "{} candidate meals use all of: {}",
            candidates.len(),
            criteria.ingredients.join(", ")
        );
        if candidates.is_empty() {
            return Ok(Vec::new());
        }

        let details = join_lenient(
            candidates
                .iter()
                .take(self.max_candidates)
                .map(|id| self.source.details_by_id(id)),
        )
        .await;
        debug!("Fetched details for {} meals", details.len());

        let meals: Vec<MealDetails> = details
            .into_iter()
            .filter(|meal| passes_filters(meal, criteria))
            .collect();
        info!("{} meals match the selected filters", meals.len());
        Ok(meals)
    }

    /// Expand a collapsed result card or collapse an expanded one.
    /// Returns whether the card is now expanded.
    pub fn toggle_expanded(&mut self, id: &str) -> bool {
        if self.expanded.remove(id) {
            false
        } else {
            self.expanded.insert(id.to_string());
            true
        }
    }

    pub fn is_expanded(&self, id: &str) -> bool {
        self.expanded.contains(id)
    }
}

/// Run a single search without keeping a session around
pub async fn find_meals<S: MealSource>(
    source: S,
    criteria: &SearchCriteria,
    max_candidates: usize,
) -> Result<Vec<MealDetails>, SearchError> {
    let search = MealSearch::new(source).with_max_candidates(max_candidates);
    search.run(criteria).await
}

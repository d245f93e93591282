//! Basic usage of the MealFinder builder API
//!
//! This example demonstrates the three main use cases:
//! 1. Ingredients only: every meal that uses all of them
//! 2. Filtered search: cook time, mood, diet and exclusions
//! 3. Session search: keep state and expand a result card

use meal_finder::render::{render_state, MealCard};
use meal_finder::{
    Diet, FinderConfig, MealDbClient, MealFinder, MealSearch, Mood, SearchCriteria, TimeBucket,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Use Case 1: ingredients only
    println!("=== Use Case 1: Ingredients only ===");
    let meals = MealFinder::builder()
        .ingredients("chicken, rice")
        .build()
        .await?;

    for meal in &meals {
        println!("{}", MealCard::from(meal).headline());
    }

    // Use Case 2: filtered search
    println!("\n=== Use Case 2: Quick gluten-free comfort food ===");
    let meals = MealFinder::builder()
        .ingredients("beef")
        .exclude("mushroom")
        .time(TimeBucket::Under45)
        .mood(Mood::Comfort)
        .diet(Diet::GlutenFree)
        .build()
        .await?;

    if meals.is_empty() {
        println!("Nothing matched, try looser filters");
    }
    for meal in &meals {
        println!("{}", MealCard::from(meal).headline());
    }

    // Use Case 3: session with an expanded card
    println!("\n=== Use Case 3: Search session ===");
    let config = FinderConfig::load()?;
    let client = MealDbClient::new(&config)?;
    let mut search = MealSearch::new(client).with_max_candidates(config.max_candidates);

    search.submit(&SearchCriteria::parse("eggs", "").with_mood(Mood::Breakfast)).await;
    if let Some(first) = search.state().results().first().map(|m| m.id.clone()) {
        search.toggle_expanded(&first);
    }
    print!("{}", render_state(search.state(), |id| search.is_expanded(id)));

    Ok(())
}

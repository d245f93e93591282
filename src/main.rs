use clap::Parser;
use log::debug;
use serde_json::json;

use meal_finder::render::{describe_criteria, render_state, MealCard};
use meal_finder::{
    Diet, FinderConfig, MealDbClient, MealSearch, Mood, SearchCriteria, SearchState, TimeBucket,
};

/// meal-finder - find recipes that use the ingredients you have
#[derive(Parser)]
#[command(name = "meal-finder")]
#[command(about = "Find recipes on TheMealDB by ingredient", long_about = None)]
struct Cli {
    /// Comma-separated ingredients every recipe must use
    ingredients: String,

    /// Comma-separated ingredients to avoid
    #[arg(long, short = 'x', default_value = "")]
    exclude: String,

    /// Estimated cook time: Any, "Under 15", "Under 30", "Under 45", 60+
    #[arg(long, short, default_value_t = TimeBucket::Any)]
    time: TimeBucket,

    /// Mood: Any, Comfort, Light, Sweet, Adventurous, Breakfast
    #[arg(long, short, default_value_t = Mood::Any)]
    mood: Mood,

    /// Diet: None, Vegetarian, Vegan, Gluten-Free
    #[arg(long, short, default_value_t = Diet::None)]
    diet: Diet,

    /// Show full details for the meal with this id (repeatable)
    #[arg(long, short)]
    expand: Vec<String>,

    /// Show full details for every result
    #[arg(long)]
    expand_all: bool,

    /// Print results as JSON
    #[arg(long)]
    json: bool,

    /// API root (overrides config file)
    #[arg(long)]
    base_url: Option<String>,

    /// Request timeout in seconds (overrides config file)
    #[arg(long)]
    timeout: Option<u64>,

    /// Maximum number of candidate meals to inspect (overrides config file)
    #[arg(long)]
    limit: Option<usize>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let cli = Cli::parse();

    let mut config = FinderConfig::load()?;
    if let Some(base_url) = cli.base_url {
        config.base_url = base_url;
    }
    if let Some(timeout) = cli.timeout {
        config.timeout = timeout;
    }
    if let Some(limit) = cli.limit {
        config.max_candidates = limit;
    }
    debug!("{:#?}", config);

    let criteria = SearchCriteria::parse(&cli.ingredients, &cli.exclude)
        .with_time(cli.time)
        .with_mood(cli.mood)
        .with_diet(cli.diet);

    let client = MealDbClient::new(&config)?;
    let mut search = MealSearch::new(client).with_max_candidates(config.max_candidates);
    search.submit(&criteria).await;

    let to_expand: Vec<String> = if cli.expand_all {
        search.state().results().iter().map(|m| m.id.clone()).collect()
    } else {
        cli.expand
    };
    for id in &to_expand {
        if !search.is_expanded(id) {
            search.toggle_expanded(id);
        }
    }

    let failed = matches!(search.state(), SearchState::Error(_));
    if cli.json {
        let report = match search.state() {
            SearchState::Success(meals) => json!({
                "criteria": &criteria,
                "results": meals.iter().map(MealCard::from).collect::<Vec<_>>(),
            }),
            other => json!({ "criteria": &criteria, "outcome": other }),
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        if !criteria.ingredients.is_empty() {
            println!("Recipes {}\n", describe_criteria(&criteria));
        }
        print!("{}", render_state(search.state(), |id| search.is_expanded(id)));
    }

    if failed {
        std::process::exit(1);
    }
    Ok(())
}

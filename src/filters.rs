//! Pure predicates that narrow the candidate set.
//!
//! Each predicate takes a meal and one user-selected criterion. The search
//! pipeline keeps a meal only when every predicate holds.

use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};

use crate::error::SearchError;
use crate::estimate::estimate_minutes;
use crate::ingredients::ingredient_names_lowercase;
use crate::model::MealDetails;

/// Ingredient name fragments that rule a meal out of a gluten-free search
pub const GLUTEN_SOURCES: [&str; 8] = [
    "flour", "bread", "pasta", "noodles", "wheat", "barley", "bulgur", "semolina",
];

/// Estimated cook-time window
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TimeBucket {
    #[default]
    Any,
    Under15,
    Under30,
    Under45,
    SixtyPlus,
}

/// Dietary restriction
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Diet {
    #[default]
    None,
    Vegetarian,
    Vegan,
    GlutenFree,
}

/// What the user feels like eating
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Mood {
    #[default]
    Any,
    Comfort,
    Light,
    Sweet,
    Adventurous,
    Breakfast,
}

/// Category and tag signals that identify a mood
#[derive(Debug, Clone, Copy)]
pub struct MoodProfile {
    pub categories: &'static [&'static str],
    pub tag_fragments: &'static [&'static str],
}

impl TimeBucket {
    pub const ALL: [TimeBucket; 5] = [
        TimeBucket::Any,
        TimeBucket::Under15,
        TimeBucket::Under30,
        TimeBucket::Under45,
        TimeBucket::SixtyPlus,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            TimeBucket::Any => "Any",
            TimeBucket::Under15 => "Under 15",
            TimeBucket::Under30 => "Under 30",
            TimeBucket::Under45 => "Under 45",
            TimeBucket::SixtyPlus => "60+",
        }
    }

    fn aliases(&self) -> &'static [&'static str] {
        match self {
            TimeBucket::Any => &["any"],
            TimeBucket::Under15 => &["under 15", "under-15", "under15", "15"],
            TimeBucket::Under30 => &["under 30", "under-30", "under30", "30"],
            TimeBucket::Under45 => &["under 45", "under-45", "under45", "45"],
            TimeBucket::SixtyPlus => &["60+", "60-plus", "sixty-plus", "60"],
        }
    }

    pub fn matches_minutes(&self, minutes: u32) -> bool {
        match self {
            TimeBucket::Any => true,
            TimeBucket::Under15 => minutes <= 15,
            TimeBucket::Under30 => minutes <= 30,
            TimeBucket::Under45 => minutes <= 45,
            TimeBucket::SixtyPlus => minutes >= 60,
        }
    }
}

impl Diet {
    pub const ALL: [Diet; 4] = [Diet::None, Diet::Vegetarian, Diet::Vegan, Diet::GlutenFree];

    pub fn label(&self) -> &'static str {
        match self {
            Diet::None => "None",
            Diet::Vegetarian => "Vegetarian",
            Diet::Vegan => "Vegan",
            Diet::GlutenFree => "Gluten-Free",
        }
    }

    fn aliases(&self) -> &'static [&'static str] {
        match self {
            Diet::None => &["none", "any"],
            Diet::Vegetarian => &["vegetarian"],
            Diet::Vegan => &["vegan"],
            Diet::GlutenFree => &["gluten-free", "gluten free", "glutenfree"],
        }
    }
}

impl Mood {
    pub const ALL: [Mood; 6] = [
        Mood::Any,
        Mood::Comfort,
        Mood::Light,
        Mood::Sweet,
        Mood::Adventurous,
        Mood::Breakfast,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Mood::Any => "Any",
            Mood::Comfort => "Comfort",
            Mood::Light => "Light",
            Mood::Sweet => "Sweet",
            Mood::Adventurous => "Adventurous",
            Mood::Breakfast => "Breakfast",
        }
    }

    fn aliases(&self) -> &'static [&'static str] {
        match self {
            Mood::Any => &["any", "none"],
            Mood::Comfort => &["comfort", "cozy", "cosy"],
            Mood::Light => &["light", "fresh"],
            Mood::Sweet => &["sweet", "dessert"],
            Mood::Adventurous => &["adventurous", "adventure"],
            Mood::Breakfast => &["breakfast", "brunch"],
        }
    }

    /// Signals for this mood; `None` for `Any`
    pub fn profile(&self) -> Option<MoodProfile> {
        let profile = match self {
            Mood::Any => return None,
            Mood::Comfort => MoodProfile {
                categories: &["Beef", "Pork", "Pasta", "Lamb", "Goat"],
                tag_fragments: &["comfort", "casserole", "stew", "pie", "warming"],
            },
            Mood::Light => MoodProfile {
                categories: &["Seafood", "Vegetarian", "Vegan", "Side", "Starter"],
                tag_fragments: &["light", "salad", "healthy", "fresh", "soup"],
            },
            Mood::Sweet => MoodProfile {
                categories: &["Dessert"],
                tag_fragments: &["sweet", "cake", "baking", "pudding", "treat"],
            },
            Mood::Adventurous => MoodProfile {
                categories: &["Goat", "Miscellaneous"],
                tag_fragments: &["spicy", "curry", "streetfood", "exotic", "chilli"],
            },
            Mood::Breakfast => MoodProfile {
                categories: &["Breakfast"],
                tag_fragments: &["breakfast", "brunch"],
            },
        };
        Some(profile)
    }
}

macro_rules! label_parsing {
    ($ty:ident) => {
        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.label())
            }
        }

        impl FromStr for $ty {
            type Err = SearchError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let wanted = s.trim().to_lowercase();
                $ty::ALL
                    .into_iter()
                    .find(|value| {
                        value.label().to_lowercase() == wanted
                            || value.aliases().contains(&wanted.as_str())
                    })
                    .ok_or_else(|| SearchError::InvalidCriterion(s.to_string()))
            }
        }

        impl Serialize for $ty {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(self.label())
            }
        }
    };
}

label_parsing!(TimeBucket);
label_parsing!(Diet);
label_parsing!(Mood);

pub fn matches_diet(meal: &MealDetails, diet: Diet) -> bool {
    match diet {
        Diet::None => true,
        Diet::Vegetarian | Diet::Vegan => {
            let name = diet.label().to_lowercase();
            let tagged = meal
                .tags
                .as_deref()
                .is_some_and(|tags| tags.to_lowercase().contains(&name));
            let categorised = meal
                .category
                .as_deref()
                .is_some_and(|category| category.to_lowercase() == name);
            tagged || categorised
        }
        Diet::GlutenFree => ingredient_names_lowercase(meal)
            .iter()
            .all(|name| !GLUTEN_SOURCES.iter().any(|source| name.contains(source))),
    }
}

/// Category OR tag match; a meal needs only one of the two signals
pub fn matches_mood(meal: &MealDetails, mood: Mood) -> bool {
    let Some(profile) = mood.profile() else {
        return true;
    };

    let category_hit = meal
        .category
        .as_deref()
        .is_some_and(|category| {
            profile
                .categories
                .iter()
                .any(|wanted| wanted.eq_ignore_ascii_case(category.trim()))
        });

    category_hit
        || meal.tag_list().iter().any(|tag| {
            let tag = tag.to_lowercase();
            profile
                .tag_fragments
                .iter()
                .any(|fragment| tag.contains(fragment))
        })
}

pub fn matches_time(meal: &MealDetails, bucket: TimeBucket) -> bool {
    bucket == TimeBucket::Any || bucket.matches_minutes(estimate_minutes(meal))
}

/// `excludes` are expected lowercased, as produced by criteria parsing
pub fn matches_exclusions(meal: &MealDetails, excludes: &[String]) -> bool {
    if excludes.is_empty() {
        return true;
    }
    let names = ingredient_names_lowercase(meal);
    !excludes.iter().any(|term| {
        let term = term.to_lowercase();
        names.iter().any(|name| name.contains(&term))
    })
}

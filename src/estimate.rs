use crate::ingredients::extract_ingredients;
use crate::model::MealDetails;

pub const MIN_MINUTES: u32 = 5;
pub const MAX_MINUTES: u32 = 180;

const MINUTES_PER_WORD: f64 = 0.25;
const MINUTES_PER_INGREDIENT: f64 = 2.0;

/// Rough cook time in minutes, derived from instruction length and
/// ingredient count. Always within `[MIN_MINUTES, MAX_MINUTES]`.
pub fn estimate_minutes(meal: &MealDetails) -> u32 {
    let words = meal
        .instructions
        .as_deref()
        .map(|text| text.split_whitespace().count())
        .unwrap_or(0);
    let ingredients = extract_ingredients(meal).len();
    minutes_for(words, ingredients)
}

fn minutes_for(words: usize, ingredients: usize) -> u32 {
    let raw = (words as f64 * MINUTES_PER_WORD + ingredients as f64 * MINUTES_PER_INGREDIENT).round();
    raw.clamp(MIN_MINUTES as f64, MAX_MINUTES as f64) as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::fixtures::meal;

    #[test]
    fn test_empty_meal_floors_at_minimum() {
        let details = meal("1", None, None, None, &[]);
        assert_eq!(estimate_minutes(&details), 5);
    }

    #[test]
    fn test_blank_instructions_count_zero_words() {
        let details = meal("1", None, None, Some("   \n\t "), &[]);
        assert_eq!(estimate_minutes(&details), 5);
    }

    #[test]
    fn test_words_and_ingredients_combine() {
        // 40 words * 0.25 = 10, 6 ingredients * 2 = 12
        let text = vec!["stir"; 40].join(" ");
        let details = meal("1", None, None, Some(&text), &["a", "b", "c", "d", "e", "f"]);
        assert_eq!(estimate_minutes(&details), 22);
    }

    #[test]
    fn test_rounds_half_up() {
        // 2 words * 0.25 = 0.5, 3 ingredients * 2 = 6 -> 6.5 -> 7
        assert_eq!(minutes_for(2, 3), 7);
        // 1 word -> 6.25 -> 6
        assert_eq!(minutes_for(1, 3), 6);
    }

    #[test]
    fn test_caps_at_maximum() {
        assert_eq!(minutes_for(10_000, 20), 180);
    }

    #[test]
    fn test_monotonic_and_bounded() {
        for words in (0..1000).step_by(7) {
            for ingredients in 0..=20 {
                let here = minutes_for(words, ingredients);
                assert!((MIN_MINUTES..=MAX_MINUTES).contains(&here));
                assert!(minutes_for(words + 1, ingredients) >= here);
                assert!(minutes_for(words, ingredients + 1) >= here);
            }
        }
    }
}

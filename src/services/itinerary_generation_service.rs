use log::debug;

use crate::models::{
    itinerary::{Category, Itinerary, ItineraryItem, TimeOfDay},
    trip_preference::TripPreference,
};
use crate::services::date_range::trip_length_days;

use crate::models::itinerary::TimeOfDay::{Afternoon, Evening, Morning};

const DEFAULT_ACTIVITIES_PER_DAY: usize = 3;
const FALLBACK_INTEREST: &str = "sightseeing";
const FALLBACK_TIMES: &[TimeOfDay] = &[Morning, Afternoon, Evening];
const FAREWELL_AFTER_DAYS: u32 = 2;

pub const MAP_EMOJI: &str = "\u{1F5FA}\u{FE0F}";
pub const MOUNTAIN_EMOJI: &str = "\u{1F5FB}";
pub const ISLAND_EMOJI: &str = "\u{1F3DD}\u{FE0F}";
pub const SKYLINE_EMOJI: &str = "\u{1F3D9}\u{FE0F}";
pub const AIRPLANE_EMOJI: &str = "\u{2708}\u{FE0F}";

/// Interest tag (lowercase) -> category and the dayparts it rotates through.
static INTEREST_TABLE: &[(&str, Category, &[TimeOfDay])] = &[
    ("food", Category::Food, &[Morning, Evening]),
    ("museums", Category::Culture, &[Afternoon]),
    ("art", Category::Culture, &[Afternoon, Evening]),
    ("nature", Category::Adventure, &[Morning, Afternoon]),
    ("shopping", Category::Shopping, &[Afternoon, Evening]),
    ("nightlife", Category::Nightlife, &[Evening]),
    ("relax", Category::Relaxation, &[Morning, Afternoon]),
    ("history", Category::Culture, &[Morning]),
];

static PACE_ACTIVITY_COUNTS: &[(&str, usize)] =
    &[("relaxed", 2), ("balanced", 3), ("packed", 4)];

/// Checked in order; the first group with a keyword contained in the
/// destination wins.
static DESTINATION_EMOJI_GROUPS: &[(&[&str], &str)] = &[
    (&["paris", "rome", "florence", "milan"], MAP_EMOJI),
    (&["tokyo", "kyoto", "osaka", "japan"], MOUNTAIN_EMOJI),
    (
        &["beach", "bali", "maldives", "honolulu", "miami"],
        ISLAND_EMOJI,
    ),
    (
        &["new york", "nyc", "los angeles", "la", "london"],
        SKYLINE_EMOJI,
    ),
];

/// Title for a planned stop. `Transport` is only produced by the fixed
/// arrival item; interests never map onto it.
pub fn activity_title(category: Category) -> &'static str {
    match category {
        Category::Sightseeing => "Iconic Landmark Walk",
        Category::Food => "Local Bites & Street Food",
        Category::Culture => "Museum or Cultural Spot",
        Category::Adventure => "Outdoor Adventure",
        Category::Relaxation => "Slow Stroll & Cafe",
        Category::Shopping => "Design + Boutique Crawl",
        Category::Nightlife => "Evening Bars & Live Music",
        Category::Transport => "Transfer/Check-in",
    }
}

pub fn activities_per_day(pace: &str) -> usize {
    PACE_ACTIVITY_COUNTS
        .iter()
        .find(|(name, _)| *name == pace)
        .map(|(_, count)| *count)
        .unwrap_or(DEFAULT_ACTIVITIES_PER_DAY)
}

/// Unknown tags fall back to sightseeing at any daypart.
pub fn categorize_interest(interest: &str) -> (Category, &'static [TimeOfDay]) {
    let key = interest.to_lowercase();
    INTEREST_TABLE
        .iter()
        .find(|(tag, _, _)| *tag == key)
        .map(|(_, category, times)| (*category, *times))
        .unwrap_or((Category::Sightseeing, FALLBACK_TIMES))
}

pub fn pick_emoji(destination: &str) -> &'static str {
    let name = destination.to_lowercase();
    DESTINATION_EMOJI_GROUPS
        .iter()
        .find(|(keywords, _)| keywords.iter().any(|k| name.contains(k)))
        .map(|(_, emoji)| *emoji)
        .unwrap_or(AIRPLANE_EMOJI)
}

fn mood_text(mood: &[String]) -> String {
    let joined = mood.join(", ");
    if joined.is_empty() {
        "explore".to_string()
    } else {
        joined
    }
}

pub fn generate_daily_plan(day: u32, prefs: &TripPreference) -> Vec<ItineraryItem> {
    let count = activities_per_day(prefs.pace.as_str());
    let mood = mood_text(&prefs.mood);

    (0..count)
        .map(|i| {
            let interest = if prefs.interests.is_empty() {
                FALLBACK_INTEREST
            } else {
                prefs.interests[i % prefs.interests.len()].as_str()
            };
            let (category, times) = categorize_interest(interest);
            let time_of_day = times[i % times.len()];

            ItineraryItem::new(
                day,
                activity_title(category),
                format!(
                    "Curated {} stop aligned with your mood: {}.",
                    category, mood
                ),
                category,
                time_of_day,
            )
        })
        .collect()
}

/// Builds the whole plan from preferences alone. Same input, same output.
pub fn generate_itinerary(prefs: &TripPreference) -> Itinerary {
    let days = trip_length_days(&prefs.start_date, &prefs.end_date);
    let mut items = vec![ItineraryItem::new(
        1,
        "Arrival & Check-in",
        "Settle in and take a gentle neighborhood walk.",
        Category::Transport,
        Morning,
    )];

    for day in 1..=days {
        items.extend(generate_daily_plan(day, prefs));
    }

    // Lands on the last day next to that day's regular activities.
    if days > FAREWELL_AFTER_DAYS {
        items.push(ItineraryItem::new(
            days,
            "Farewell Dinner",
            "Wrap up the trip with a memorable final meal.",
            Category::Food,
            Evening,
        ));
    }

    debug!(
        "Generated {} items over {} days for {}",
        items.len(),
        days,
        prefs.destination
    );

    Itinerary {
        name: format!("{}: {} days", prefs.destination, days),
        summary: Some(format!(
            "Personalized plan for {} over {} days, optimized for a {} pace with a {} budget.",
            prefs.destination, days, prefs.pace, prefs.budget_level
        )),
        destination_emoji: Some(pick_emoji(&prefs.destination).to_string()),
        preference: prefs.clone(),
        items,
    }
}

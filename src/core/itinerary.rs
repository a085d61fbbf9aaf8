use crate::domain::model::{DateRange, DayPlan};
use chrono::Days;

pub const DEFAULT_ACTIVITY: &str = "major sites";

/// One day per night of the stay, cycling through `attractions` in order.
pub fn build_itinerary(dates: &DateRange, attractions: &[String]) -> Vec<DayPlan> {
    (0..dates.nights())
        .map(|i| {
            let activity = if attractions.is_empty() {
                DEFAULT_ACTIVITY.to_string()
            } else {
                attractions[i as usize % attractions.len()].clone()
            };
            DayPlan {
                day: i + 1,
                date: dates
                    .start
                    .checked_add_days(Days::new(u64::from(i)))
                    .unwrap_or(dates.end),
                activity,
            }
        })
        .collect()
}

pub fn render_line(day: &DayPlan) -> String {
    format!("Day {}: Visit {}", day.day, day.activity)
}

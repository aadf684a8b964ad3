//! Service history timeline generator.

use crate::cursor::Draw;
use crate::sampling::Sampling;
use crate::tables::{
    CASE_NOTES, DISPATCH_NOTES, DISPATCH_STATUSES, DISPATCH_TYPES, FALLBACK_TECH_TAG,
    INTERACTION_NOTES, INTERACTION_TITLES,
};
use chrono::{Days, NaiveDate};
use techload_types::{HistoryCategory, HistoryEntry};

/// Fewest entries a timeline can have.
pub const MIN_HISTORY_ENTRIES: usize = 3;

/// Most entries a timeline can have.
pub const MAX_HISTORY_ENTRIES: usize = 9;

/// Generate 3 to 9 history entries walking backwards from the day before
/// `reference_date`.
///
/// Each entry steps back 0-6 days from the previous one, so dates are
/// non-increasing in generation order. The list is never sorted afterwards.
/// `key` is written into dispatch tech notes.
pub fn generate_history<D: Draw + ?Sized>(
    draws: &mut D,
    key: &str,
    reference_date: NaiveDate,
) -> Vec<HistoryEntry> {
    let count = draws.below(7) as usize + MIN_HISTORY_ENTRIES;
    let mut last_date = step_back(reference_date, 1);
    let mut entries = Vec::with_capacity(count);

    for _ in 0..count {
        let category = *draws.pick(&HistoryCategory::ALL);
        last_date = step_back(last_date, draws.below(7));

        let info = match category {
            HistoryCategory::Interaction => interaction_info(draws),
            HistoryCategory::Dispatch => dispatch_info(draws, key),
            HistoryCategory::Case => case_info(draws),
        };

        entries.push(HistoryEntry {
            category,
            date: last_date,
            info,
        });
    }

    entries
}

fn step_back(date: NaiveDate, days: u32) -> NaiveDate {
    date.checked_sub_days(Days::new(u64::from(days)))
        .unwrap_or(NaiveDate::MIN)
}

/// Title and note share one draw.
fn interaction_info<D: Draw + ?Sized>(draws: &mut D) -> Vec<String> {
    let kind = draws.index(INTERACTION_TITLES.len());
    vec![
        format!("Title: {}", INTERACTION_TITLES[kind]),
        format!("Interaction Notes: {}", INTERACTION_NOTES[kind]),
    ]
}

fn dispatch_info<D: Draw + ?Sized>(draws: &mut D, key: &str) -> Vec<String> {
    let status = draws.pick(&DISPATCH_STATUSES);
    let dispatch_type = draws.pick(&DISPATCH_TYPES);
    let tag = if key.is_empty() { FALLBACK_TECH_TAG } else { key };
    let note = draws.pick(&DISPATCH_NOTES);

    vec![
        format!("Status: {status}"),
        format!("Dispatch Type: {dispatch_type}"),
        format!("Tech Notes: {tag}; {note}"),
    ]
}

fn case_info<D: Draw + ?Sized>(draws: &mut D) -> Vec<String> {
    let minutes = draws.below(60);
    let hour = draws.ceil_of(12);
    let meridiem = if draws.chance(0.5) { 'A' } else { 'P' };
    let status = if draws.chance(0.2) { "OPEN" } else { "CLOSED" };
    let note = draws.pick(&CASE_NOTES);

    vec![
        format!("Case Creation Time: {hour}:{minutes:02} {meridiem}M"),
        format!("Case Status: {status}"),
        format!("Notes: {note}"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cursor::Cursor;
    use crate::sampling::Scripted;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_scripted_timeline() {
        let mut draws = Scripted::new(&[
            0.0, // 3 entries
            // Interaction, 0 days back, "Customer Chatted"
            0.1, 0.0, 0.5,
            // Dispatch, 3 days back, RETURNED / TFS / second note
            0.5, 0.45, 0.4, 0.2, 0.5,
            // Case, 6 days back, 8:06 PM, OPEN, first note
            0.9, 0.9, 0.1, 0.62, 0.9, 0.1, 0.0,
        ]);
        let history = generate_history(&mut draws, "ab123c", date(2024, 3, 1));

        assert_eq!(history.len(), 3);
        assert_eq!(draws.consumed(), 16);

        assert_eq!(history[0].category, HistoryCategory::Interaction);
        assert_eq!(history[0].display_date(), "2/29/2024");
        assert_eq!(
            history[0].info,
            vec![
                "Title: Customer Chatted",
                "Interaction Notes: Customer wanted to upgrade speed profile. Informed of charges.",
            ]
        );

        assert_eq!(history[1].category, HistoryCategory::Dispatch);
        assert_eq!(history[1].display_date(), "2/26/2024");
        assert_eq!(history[1].info[0], "Status: RETURNED");
        assert_eq!(history[1].info[1], "Dispatch Type: TFS");
        assert!(history[1].info[2].starts_with("Tech Notes: ab123c; Lots of work done"));

        assert_eq!(history[2].category, HistoryCategory::Case);
        assert_eq!(history[2].display_date(), "2/20/2024");
        assert_eq!(history[2].info[0], "Case Creation Time: 8:06 PM");
        assert_eq!(history[2].info[1], "Case Status: OPEN");
        assert!(history[2].info[2].starts_with("Notes: Customer wanted to verify"));
    }

    #[test]
    fn test_empty_key_uses_fallback_tag() {
        // 3 dispatch entries, each: category, step, status, type, note
        let mut draws = Scripted::new(&[
            0.0, //
            0.5, 0.0, 0.0, 0.0, 0.0, //
            0.5, 0.0, 0.0, 0.0, 0.0, //
            0.5, 0.0, 0.0, 0.0, 0.0,
        ]);
        let history = generate_history(&mut draws, "", date(2024, 1, 15));

        assert_eq!(history.len(), 3);
        for entry in &history {
            assert_eq!(entry.category, HistoryCategory::Dispatch);
            assert_eq!(
                entry.info[2],
                format!("Tech Notes: {FALLBACK_TECH_TAG}; {}", DISPATCH_NOTES[0])
            );
        }
    }

    #[test]
    fn test_dates_non_increasing_and_count_bounded() {
        let start = date(2024, 1, 15);
        for seed in [0, 97, 866_948_418, 1_425_925_102, 2_093_879_032] {
            let mut cursor = Cursor::new(seed);
            for _ in 0..50 {
                let history = generate_history(&mut cursor, "zz999z", start);
                assert!((MIN_HISTORY_ENTRIES..=MAX_HISTORY_ENTRIES).contains(&history.len()));
                assert!(history[0].date < start);
                for pair in history.windows(2) {
                    assert!(pair[0].date >= pair[1].date);
                }
            }
        }
    }
}

//! A month-at-a-glance calendar, shared by every role.

use chrono::{Datelike, NaiveDate};

/// Fixed school events until the calendar is wired to a live endpoint.
const EVENTS: [(u32, &str); 4] = [
    (5, "Staff development day"),
    (12, "Science fair"),
    (19, "Parent-teacher conferences"),
    (26, "End of grading period"),
];

/// Render the month containing `today` as a weekday grid, today marked
/// with brackets, followed by the event list.
pub fn render(today: NaiveDate) -> String {
    let first = today.with_day(1).unwrap_or(today);
    let days = days_in_month(first);
    let lead = first.weekday().num_days_from_sunday() as usize;

    let mut out = format!("{}\n\n", today.format("%B %Y"));
    out.push_str(" Su  Mo  Tu  We  Th  Fr  Sa\n");
    let mut line = "    ".repeat(lead);
    for day in 1..=days {
        let cell = if day == today.day() {
            format!("[{day:>2}]")
        } else {
            format!(" {day:>2} ")
        };
        line.push_str(&cell);
        if (lead + day as usize) % 7 == 0 {
            out.push_str(line.trim_end());
            out.push('\n');
            line.clear();
        }
    }
    if !line.trim().is_empty() {
        out.push_str(line.trim_end());
        out.push('\n');
    }

    out.push_str("\nEvents\n");
    for (day, title) in EVENTS {
        if day <= days {
            out.push_str(&format!("  {} {day:>2}  {title}\n", today.format("%b")));
        }
    }
    out
}

fn days_in_month(first: NaiveDate) -> u32 {
    let (year, month) = (first.year(), first.month());
    let next = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)
    };
    match next {
        Some(next) => next.signed_duration_since(first).num_days() as u32,
        None => 31,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Weekday;

    #[test]
    fn test_month_header_and_today_marker() {
        let text = render(NaiveDate::from_ymd_opt(2025, 1, 15).unwrap());
        assert!(text.starts_with("January 2025"));
        assert!(text.contains("[15]"));
    }

    #[test]
    fn test_days_in_month_handles_february_and_leap_years() {
        assert_eq!(
            days_in_month(NaiveDate::from_ymd_opt(2025, 2, 1).unwrap()),
            28
        );
        assert_eq!(
            days_in_month(NaiveDate::from_ymd_opt(2024, 2, 1).unwrap()),
            29
        );
        assert_eq!(
            days_in_month(NaiveDate::from_ymd_opt(2025, 12, 1).unwrap()),
            31
        );
    }

    #[test]
    fn test_grid_starts_on_correct_weekday() {
        // 2025-06-01 is a Sunday, so day 1 is in the first column.
        let text = render(NaiveDate::from_ymd_opt(2025, 6, 10).unwrap());
        let grid_line = text.lines().nth(3).unwrap_or_default();
        assert!(grid_line.trim_start().starts_with('1'));
        assert_eq!(
            NaiveDate::from_ymd_opt(2025, 6, 1).unwrap().weekday(),
            Weekday::Sun
        );
    }
}

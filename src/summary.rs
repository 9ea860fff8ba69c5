use crate::models::{TimePunch, WorkedHours};

/// Orders a day's punches chronologically. Times are zero-padded `HH:mm`
/// strings, so plain string comparison is enough.
pub fn sort_punches(punches: &mut [TimePunch]) {
    punches.sort_by(|a, b| a.time.cmp(&b.time));
}

/// Distinct month labels across all worked-hours rows, in order of first
/// appearance.
pub fn derive_months(rows: &[WorkedHours]) -> Vec<String> {
    let mut months: Vec<String> = Vec::new();
    for row in rows {
        if !months.iter().any(|month| month == &row.month_year) {
            months.push(row.month_year.clone());
        }
    }
    months
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PunchType;

    fn punch(punch_type: PunchType, time: &str) -> TimePunch {
        TimePunch {
            punch_type,
            time: time.to_string(),
        }
    }

    fn row(employee: &str, month_year: &str) -> WorkedHours {
        WorkedHours {
            employee: employee.to_string(),
            month_year: month_year.to_string(),
            total_hours: "160:00".to_string(),
        }
    }

    #[test]
    fn punches_sort_ascending_by_time() {
        let mut punches = vec![
            punch(PunchType::Exit, "17:00"),
            punch(PunchType::Entry, "08:00"),
            punch(PunchType::LunchOut, "12:00"),
        ];
        sort_punches(&mut punches);
        let times: Vec<&str> = punches.iter().map(|p| p.time.as_str()).collect();
        assert_eq!(times, vec!["08:00", "12:00", "17:00"]);
    }

    #[test]
    fn months_keep_first_seen_order_without_duplicates() {
        let rows = vec![
            row("Ana", "2024-01"),
            row("Ana", "2024-02"),
            row("Bruno", "2024-01"),
        ];
        assert_eq!(derive_months(&rows), vec!["2024-01", "2024-02"]);
    }

    #[test]
    fn no_rows_means_no_months() {
        assert!(derive_months(&[]).is_empty());
    }
}

//! Calendar dates for forecast columns.
//!
//! Forecast columns only show a day-of-month. The first column is anchored
//! to the nearest date on or after today with that day-of-month; each later
//! column is one day after its predecessor. Month and year rollover fall out
//! of calendar arithmetic.

use chrono::{Datelike, Days, NaiveDate};
use tracing::trace;

use crate::{Result, WeatherError};

/// Longest run of days between two dates sharing a day-of-month (e.g. 31 March to 31 May).
const MAX_ANCHOR_STEPS: u64 = 62;

/// Finds the first date on or after `today` whose day-of-month is `day`.
///
/// # Errors
///
/// Returns [`WeatherError::InvalidDayNumber`] for days outside 1–31.
///
/// # Example
///
/// ```rust
/// use chrono::NaiveDate;
/// use idokep_core::dates::anchor_date;
///
/// let today = NaiveDate::from_ymd_opt(2026, 1, 29).unwrap();
/// assert_eq!(anchor_date(today, 2).unwrap(), NaiveDate::from_ymd_opt(2026, 2, 2).unwrap());
/// ```
pub fn anchor_date(today: NaiveDate, day: u32) -> Result<NaiveDate> {
    if !(1..=31).contains(&day) {
        return Err(WeatherError::InvalidDayNumber(day));
    }

    let mut candidate = today;
    for _ in 0..=MAX_ANCHOR_STEPS {
        if candidate.day() == day {
            trace!(%today, day, anchor = %candidate, "anchored first forecast column");
            return Ok(candidate);
        }
        candidate = next_day(candidate)?;
    }

    Err(WeatherError::InvalidDayNumber(day))
}

fn next_day(date: NaiveDate) -> Result<NaiveDate> {
    date.checked_add_days(Days::new(1))
        .ok_or_else(|| WeatherError::InvalidDayNumber(date.day()))
}

/// Rolling date assignment for consecutive forecast columns.
///
/// The first call to [`DateCursor::advance`] anchors on its stated day; later
/// calls ignore the stated day and return the previous date plus one.
#[derive(Debug, Clone)]
pub struct DateCursor {
    today: NaiveDate,
    next: Option<NaiveDate>,
}

impl DateCursor {
    pub fn new(today: NaiveDate) -> Self {
        Self { today, next: None }
    }

    /// Assigns the date for the next retained column.
    pub fn advance(&mut self, day: u32) -> Result<NaiveDate> {
        let date = match self.next {
            Some(date) => date,
            None => anchor_date(self.today, day)?,
        };
        self.next = Some(next_day(date)?);
        Ok(date)
    }
}

/// Assigns dates to a whole sequence of column day numbers.
pub fn infer_dates(today: NaiveDate, days: &[u32]) -> Result<Vec<NaiveDate>> {
    let mut cursor = DateCursor::new(today);
    days.iter().map(|&day| cursor.advance(day)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[rstest]
    #[case(ymd(2026, 10, 17), 17, ymd(2026, 10, 17))]
    #[case(ymd(2026, 10, 17), 19, ymd(2026, 10, 19))]
    #[case(ymd(2026, 10, 29), 2, ymd(2026, 11, 2))]
    #[case(ymd(2026, 12, 30), 1, ymd(2027, 1, 1))]
    #[case(ymd(2026, 2, 27), 30, ymd(2026, 3, 30))]
    #[case(ymd(2028, 2, 27), 29, ymd(2028, 2, 29))]
    #[case(ymd(2026, 4, 1), 31, ymd(2026, 5, 31))]
    fn test_anchor_date(#[case] today: NaiveDate, #[case] day: u32, #[case] expected: NaiveDate) {
        assert_eq!(anchor_date(today, day).unwrap(), expected);
    }

    #[test]
    fn test_anchor_is_smallest_matching_date() {
        let today = ymd(2026, 10, 17);
        for day in 1..=31 {
            let anchored = anchor_date(today, day).unwrap();
            assert_eq!(anchored.day(), day);
            assert!(anchored >= today);
            let mut date = today;
            while date < anchored {
                assert_ne!(date.day(), day);
                date = date.succ_opt().unwrap();
            }
        }
    }

    #[test]
    fn test_anchor_worst_case_gap() {
        assert_eq!(anchor_date(ymd(2026, 4, 1), 31).unwrap(), ymd(2026, 5, 31));
        assert_eq!(anchor_date(ymd(2026, 8, 1), 31).unwrap(), ymd(2026, 8, 31));
        assert_eq!(anchor_date(ymd(2026, 3, 1), 31).unwrap(), ymd(2026, 3, 31));
    }

    #[rstest]
    #[case(0)]
    #[case(32)]
    #[case(99)]
    fn test_anchor_rejects_out_of_range_day(#[case] day: u32) {
        assert!(matches!(
            anchor_date(ymd(2026, 10, 17), day),
            Err(WeatherError::InvalidDayNumber(d)) if d == day
        ));
    }

    #[test]
    fn test_cursor_rolls_over_year() {
        let dates = infer_dates(ymd(2026, 12, 29), &[30, 31, 1, 2]).unwrap();
        assert_eq!(
            dates,
            vec![ymd(2026, 12, 30), ymd(2026, 12, 31), ymd(2027, 1, 1), ymd(2027, 1, 2)]
        );
    }

    #[test]
    fn test_cursor_trusts_later_day_numbers() {
        let mut cursor = DateCursor::new(ymd(2026, 10, 17));
        assert_eq!(cursor.advance(18).unwrap(), ymd(2026, 10, 18));
        assert_eq!(cursor.advance(25).unwrap(), ymd(2026, 10, 19));
        assert_eq!(cursor.advance(0).unwrap(), ymd(2026, 10, 20));
    }

    #[test]
    fn test_infer_dates_empty() {
        assert!(infer_dates(ymd(2026, 10, 17), &[]).unwrap().is_empty());
    }
}

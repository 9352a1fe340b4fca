//! Date validation against the event's reference timezone.
//!
//! Every function takes the current instant as an argument instead of
//! reading the clock itself, so tests can pin "now" wherever they need it.

use crate::error::{Error, Result};
use chrono::{DateTime, Datelike, TimeZone, Utc};
use chrono_tz::Tz;

/// First year an event ran.
pub const MIN_YEAR: i32 = 2015;
/// Puzzles only exist for the first 25 days of December.
pub const MAX_DAY: u32 = 25;

/// The current instant in the reference timezone.
pub fn now_in(tz: Tz) -> DateTime<Tz> {
    Utc::now().with_timezone(&tz)
}

/// Whether a (day, year) selection refers to a puzzle that could exist yet.
///
/// Compares the year and the day-of-month separately, not the full calendar
/// date. Asking for day 20 on December 5th is rejected, but asking for day 5
/// of a past year on June 5th is accepted. That looseness is intentional and
/// kept from the original behavior.
pub fn is_valid_date(day: u32, year: i32, today: DateTime<Tz>) -> bool {
    year <= today.year() && day <= today.day()
}

/// Whether a puzzle input can be downloaded yet.
#[derive(Debug, PartialEq)]
pub enum InputReadiness {
    Ready,
    NotReady { unlocks_at: DateTime<Tz> },
}

/// Checks the puzzle's unlock instant (midnight on December `day` in the
/// reference timezone) against `now`. Not-ready is not an error; the caller
/// decides how loudly to say so.
pub fn input_readiness(day: u32, year: i32, now: DateTime<Tz>) -> Result<InputReadiness> {
    let unlocks_at = now
        .timezone()
        .with_ymd_and_hms(year, 12, day, 0, 0, 0)
        .earliest()
        .ok_or(Error::InvalidDate { day, year })?;
    if unlocks_at <= now {
        Ok(InputReadiness::Ready)
    } else {
        Ok(InputReadiness::NotReady { unlocks_at })
    }
}

/// Fills an unset day/year from `now`. Defaults only make sense while the
/// event is running, so both values missing outside December is a
/// configuration error.
pub fn resolve_selection(
    day: Option<u32>,
    year: Option<i32>,
    now: DateTime<Tz>,
) -> Result<(u32, i32)> {
    if day.is_none() && year.is_none() && now.month() != 12 {
        return Err(Error::DefaultsUnavailable);
    }
    Ok((
        day.unwrap_or_else(|| now.day()),
        year.unwrap_or_else(|| now.year()),
    ))
}

/// Full validation pass for a selection, in order: the validity heuristic
/// first, then the day range, then the year range.
pub fn validate_selection(day: u32, year: i32, today: DateTime<Tz>) -> Result<()> {
    if !is_valid_date(day, year, today) {
        return Err(Error::InvalidDate { day, year });
    }
    if !(1..=MAX_DAY).contains(&day) {
        return Err(Error::DayOutOfRange(day));
    }
    if !(MIN_YEAR..=today.year()).contains(&year) {
        return Err(Error::YearOutOfRange {
            year,
            max: today.year(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn eastern() -> Tz {
        "US/Eastern".parse().unwrap()
    }

    /// Midday on 10 Dec 2023, Eastern.
    fn mid_event() -> DateTime<Tz> {
        eastern().with_ymd_and_hms(2023, 12, 10, 12, 0, 0).unwrap()
    }

    #[test]
    fn past_days_and_years_are_valid() {
        let today = mid_event();
        assert!(is_valid_date(10, 2023, today));
        assert!(is_valid_date(1, 2023, today));
        assert!(is_valid_date(5, 2015, today));
    }

    #[test]
    fn future_year_is_invalid() {
        assert!(!is_valid_date(1, 2024, mid_event()));
    }

    #[test]
    fn day_past_today_is_invalid() {
        assert!(!is_valid_date(11, 2023, mid_event()));
    }

    #[test]
    fn day_comparison_ignores_month() {
        // June 5th: day 5 of a past event passes, day 6 does not.
        let today = eastern().with_ymd_and_hms(2024, 6, 5, 9, 0, 0).unwrap();
        assert!(is_valid_date(5, 2023, today));
        assert!(!is_valid_date(6, 2023, today));
    }

    #[test]
    fn input_ready_once_unlock_has_passed() {
        let now = mid_event();
        assert_eq!(input_readiness(10, 2023, now).unwrap(), InputReadiness::Ready);
        assert_eq!(input_readiness(25, 2022, now).unwrap(), InputReadiness::Ready);
    }

    #[test]
    fn input_ready_exactly_at_unlock() {
        let now = eastern().with_ymd_and_hms(2023, 12, 10, 0, 0, 0).unwrap();
        assert_eq!(input_readiness(10, 2023, now).unwrap(), InputReadiness::Ready);
    }

    #[test]
    fn input_not_ready_before_unlock() {
        let now = mid_event();
        let readiness = input_readiness(11, 2023, now).unwrap();
        let expected_unlock = eastern().with_ymd_and_hms(2023, 12, 11, 0, 0, 0).unwrap();
        assert_eq!(
            readiness,
            InputReadiness::NotReady {
                unlocks_at: expected_unlock
            }
        );
    }

    #[test]
    fn defaults_fill_from_now_during_december() {
        let now = mid_event();
        assert_eq!(resolve_selection(None, None, now).unwrap(), (10, 2023));
        assert_eq!(resolve_selection(Some(3), None, now).unwrap(), (3, 2023));
        assert_eq!(
            resolve_selection(None, Some(2020), now).unwrap(),
            (10, 2020)
        );
    }

    #[test]
    fn bare_defaults_outside_december_are_rejected() {
        let now = eastern().with_ymd_and_hms(2024, 6, 5, 9, 0, 0).unwrap();
        assert!(matches!(
            resolve_selection(None, None, now),
            Err(Error::DefaultsUnavailable)
        ));
        // An explicit value on either side keeps defaults usable.
        assert_eq!(resolve_selection(Some(5), None, now).unwrap(), (5, 2024));
    }

    #[test]
    fn validate_selection_accepts_in_range_past_dates() {
        let today = mid_event();
        for day in 1..=10 {
            for year in MIN_YEAR..=2023 {
                assert!(validate_selection(day, year, today).is_ok());
            }
        }
    }

    #[test]
    fn validate_selection_rejects_future_date_first() {
        let today = mid_event();
        assert!(matches!(
            validate_selection(11, 2023, today),
            Err(Error::InvalidDate { day: 11, year: 2023 })
        ));
    }

    #[test]
    fn validate_selection_rejects_day_zero() {
        assert!(matches!(
            validate_selection(0, 2023, mid_event()),
            Err(Error::DayOutOfRange(0))
        ));
    }

    #[test]
    fn validate_selection_rejects_year_before_first_event() {
        assert!(matches!(
            validate_selection(10, 2014, mid_event()),
            Err(Error::YearOutOfRange { year: 2014, .. })
        ));
    }
}

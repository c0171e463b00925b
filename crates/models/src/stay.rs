use chrono::NaiveDate;
use std::fmt::{Display, Formatter, Result as FmtResult};

/// Custom error type for rejecting a stay's date pair
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StayDatesError {
    DepartureNotAfterArrival,
    ArrivalInPast,
}

impl Display for StayDatesError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Self::DepartureNotAfterArrival => {
                write!(f, "Departure date must be after the arrival date")
            }
            Self::ArrivalInPast => write!(f, "Arrival date cannot be in the past"),
        }
    }
}

/// Validates a stay before anything touches storage. `today` is passed in so
/// callers (and tests) control the clock.
pub fn validate_stay(
    arrival: NaiveDate,
    departure: NaiveDate,
    today: NaiveDate,
) -> Result<(), StayDatesError> {
    if departure <= arrival {
        return Err(StayDatesError::DepartureNotAfterArrival);
    }

    if arrival < today {
        return Err(StayDatesError::ArrivalInPast);
    }

    Ok(())
}

/// Number of nights in the half-open interval `[arrival, departure)`
pub fn nights(arrival: NaiveDate, departure: NaiveDate) -> i64 {
    (departure - arrival).num_days()
}

/// Standard half-open interval overlap test: two stays share at least one
/// night exactly when `a.arrival < b.departure && a.departure > b.arrival`.
pub fn overlaps(
    a_arrival: NaiveDate,
    a_departure: NaiveDate,
    b_arrival: NaiveDate,
    b_departure: NaiveDate,
) -> bool {
    a_arrival < b_departure && a_departure > b_arrival
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_nights() {
        assert_eq!(nights(date(2025, 6, 1), date(2025, 6, 3)), 2);
        assert_eq!(nights(date(2025, 6, 1), date(2025, 6, 2)), 1);
        assert_eq!(nights(date(2025, 12, 30), date(2026, 1, 2)), 3);
    }

    #[test]
    fn test_validate_stay_accepts_future_stays() {
        let today = date(2025, 5, 1);
        assert!(validate_stay(date(2025, 6, 1), date(2025, 6, 3), today).is_ok());
        // Arriving today is allowed
        assert!(validate_stay(today, date(2025, 5, 2), today).is_ok());
    }

    #[test]
    fn test_validate_stay_rejects_bad_order() {
        let today = date(2025, 5, 1);
        assert_eq!(
            validate_stay(date(2025, 6, 3), date(2025, 6, 1), today),
            Err(StayDatesError::DepartureNotAfterArrival)
        );
        // Zero-night stays are also rejected
        assert_eq!(
            validate_stay(date(2025, 6, 1), date(2025, 6, 1), today),
            Err(StayDatesError::DepartureNotAfterArrival)
        );
    }

    #[test]
    fn test_validate_stay_rejects_past_arrival() {
        let today = date(2025, 5, 1);
        assert_eq!(
            validate_stay(date(2025, 4, 30), date(2025, 5, 3), today),
            Err(StayDatesError::ArrivalInPast)
        );
    }

    #[test]
    fn test_overlapping_stays() {
        // Identical intervals overlap
        assert!(overlaps(
            date(2025, 6, 1),
            date(2025, 6, 3),
            date(2025, 6, 1),
            date(2025, 6, 3)
        ));
        // Partial overlap on either side
        assert!(overlaps(
            date(2025, 6, 1),
            date(2025, 6, 5),
            date(2025, 6, 4),
            date(2025, 6, 8)
        ));
        assert!(overlaps(
            date(2025, 6, 4),
            date(2025, 6, 8),
            date(2025, 6, 1),
            date(2025, 6, 5)
        ));
        // Containment
        assert!(overlaps(
            date(2025, 6, 1),
            date(2025, 6, 30),
            date(2025, 6, 10),
            date(2025, 6, 12)
        ));
    }

    #[test]
    fn test_back_to_back_stays_do_not_overlap() {
        // One guest departs the morning another arrives
        assert!(!overlaps(
            date(2025, 6, 1),
            date(2025, 6, 3),
            date(2025, 6, 3),
            date(2025, 6, 5)
        ));
        assert!(!overlaps(
            date(2025, 6, 3),
            date(2025, 6, 5),
            date(2025, 6, 1),
            date(2025, 6, 3)
        ));
        // Fully disjoint
        assert!(!overlaps(
            date(2025, 6, 1),
            date(2025, 6, 3),
            date(2025, 7, 1),
            date(2025, 7, 3)
        ));
    }
}

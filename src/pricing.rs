//! Stay arithmetic shared by the reservation handler and by clients that
//! want to show a total before submitting. Both sides must use the same
//! formula, otherwise the displayed total can differ from the persisted one.

use chrono::NaiveDate;
use thiserror::Error;

use crate::models::room::Room;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum BookingError {
    #[error("Check-in date cannot be in the past")]
    CheckInInPast,
    #[error("Check-out must be after check-in")]
    CheckOutNotAfterCheckIn,
    #[error("Maximum {capacity} guests for this room")]
    OverCapacity { capacity: i64 },
    #[error("Number of nights must be greater than 0")]
    EmptyStay,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Quote {
    pub nights: i64,
    pub total_price: i64,
}

/// Whole days between the two dates. Negative or zero means an invalid stay.
pub fn nights(check_in: NaiveDate, check_out: NaiveDate) -> i64 {
    (check_out - check_in).num_days()
}

pub fn total_price(nightly_price: i64, nights: i64) -> i64 {
    nightly_price * nights
}

/// Pre-submission validation: everything a client checks before making the
/// network call. The server repeats the date and capacity checks but not the
/// past-check-in rule.
pub fn validate_booking(
    room: &Room,
    check_in: NaiveDate,
    check_out: NaiveDate,
    guests: i64,
    today: NaiveDate,
) -> Result<Quote, BookingError> {
    if check_in < today {
        return Err(BookingError::CheckInInPast);
    }
    if check_out <= check_in {
        return Err(BookingError::CheckOutNotAfterCheckIn);
    }
    if guests > room.capacity {
        return Err(BookingError::OverCapacity {
            capacity: room.capacity,
        });
    }
    let nights = nights(check_in, check_out);
    let total_price = total_price(room.price, nights);
    if total_price == 0 {
        return Err(BookingError::EmptyStay);
    }
    Ok(Quote {
        nights,
        total_price,
    })
}

#[cfg(test)]
mod tests {
    use sqlx::types::Json;

    use super::*;

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    fn deluxe() -> Room {
        Room {
            id: "1".to_string(),
            name: "Deluxe Room".to_string(),
            room_type: "Deluxe".to_string(),
            price: 1_500_000,
            capacity: 2,
            description: String::new(),
            amenities: Json(vec![]),
            available: true,
            image: String::new(),
        }
    }

    #[test]
    fn two_nights_at_deluxe_rate() {
        let n = nights(date("2025-01-10"), date("2025-01-12"));
        assert_eq!(n, 2);
        assert_eq!(total_price(1_500_000, n), 3_000_000);
    }

    #[test]
    fn single_night() {
        assert_eq!(nights(date("2025-01-10"), date("2025-01-11")), 1);
    }

    #[test]
    fn same_day_and_reversed_dates_are_not_a_stay() {
        assert_eq!(nights(date("2025-01-10"), date("2025-01-10")), 0);
        assert!(nights(date("2025-01-12"), date("2025-01-10")) < 0);
    }

    #[test]
    fn valid_booking_quotes_the_full_stay() {
        let quote = validate_booking(
            &deluxe(),
            date("2025-01-10"),
            date("2025-01-12"),
            2,
            date("2025-01-01"),
        )
        .unwrap();
        assert_eq!(quote.nights, 2);
        assert_eq!(quote.total_price, 3_000_000);
    }

    #[test]
    fn past_check_in_is_rejected() {
        let err = validate_booking(
            &deluxe(),
            date("2025-01-01"),
            date("2025-01-03"),
            2,
            date("2025-01-02"),
        )
        .unwrap_err();
        assert_eq!(err, BookingError::CheckInInPast);
    }

    #[test]
    fn check_out_must_be_after_check_in() {
        let err = validate_booking(
            &deluxe(),
            date("2025-01-10"),
            date("2025-01-10"),
            2,
            date("2025-01-01"),
        )
        .unwrap_err();
        assert_eq!(err, BookingError::CheckOutNotAfterCheckIn);
    }

    #[test]
    fn guest_count_over_capacity_is_rejected() {
        let err = validate_booking(
            &deluxe(),
            date("2025-01-10"),
            date("2025-01-12"),
            5,
            date("2025-01-01"),
        )
        .unwrap_err();
        assert_eq!(err, BookingError::OverCapacity { capacity: 2 });
    }

    #[test]
    fn free_room_yields_no_quote() {
        let mut room = deluxe();
        room.price = 0;
        let err = validate_booking(
            &room,
            date("2025-01-10"),
            date("2025-01-12"),
            2,
            date("2025-01-01"),
        )
        .unwrap_err();
        assert_eq!(err, BookingError::EmptyStay);
    }
}

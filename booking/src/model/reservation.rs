//! Reservation records and the joined reservation view.

use chrono::{DateTime, SubsecRound, Utc};
use serde::{Deserialize, Serialize};

use super::ids::{CustomerId, ReservationId, RestaurantId};
use super::party::PartyCount;

/// A stored reservation.
///
/// A customer holds at most one reservation per restaurant: the pair
/// `(restaurant_id, customer_id)` is the table's primary key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reservation {
    /// Generated identifier.
    pub id: ReservationId,
    /// Number of guests.
    pub party_count: PartyCount,
    /// The booked restaurant.
    pub restaurant_id: RestaurantId,
    /// The customer holding the reservation.
    pub customer_id: CustomerId,
    /// When the party is expected.
    pub date: DateTime<Utc>,
}

impl Reservation {
    /// Starts building a reservation request.
    ///
    /// # Examples
    ///
    /// ```
    /// use booking::{CustomerId, PartyCount, Reservation, RestaurantId};
    ///
    /// let request = Reservation::builder(
    ///     CustomerId::generate(),
    ///     RestaurantId::generate(),
    ///     PartyCount::try_from(2).unwrap(),
    /// )
    /// .build();
    /// assert_eq!(request.party_count().value(), 2);
    /// ```
    #[must_use]
    pub const fn builder(
        customer_id: CustomerId,
        restaurant_id: RestaurantId,
        party_count: PartyCount,
    ) -> NewReservationBuilder {
        NewReservationBuilder {
            customer_id,
            restaurant_id,
            party_count,
            date: None,
        }
    }
}

/// A reservation that has not been stored yet.
///
/// The date is always resolved by the time this value exists: an omitted
/// date becomes the wall-clock time at which [`NewReservationBuilder::build`]
/// was called, truncated to the millisecond precision of the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewReservation {
    customer_id: CustomerId,
    restaurant_id: RestaurantId,
    party_count: PartyCount,
    date: DateTime<Utc>,
}

impl NewReservation {
    /// Returns the customer making the reservation.
    #[must_use]
    pub const fn customer_id(&self) -> CustomerId {
        self.customer_id
    }

    /// Returns the restaurant being booked.
    #[must_use]
    pub const fn restaurant_id(&self) -> RestaurantId {
        self.restaurant_id
    }

    /// Returns the number of guests.
    #[must_use]
    pub const fn party_count(&self) -> PartyCount {
        self.party_count
    }

    /// Returns the reservation date.
    #[must_use]
    pub const fn date(&self) -> DateTime<Utc> {
        self.date
    }
}

/// Builder for [`NewReservation`].
#[derive(Debug)]
pub struct NewReservationBuilder {
    customer_id: CustomerId,
    restaurant_id: RestaurantId,
    party_count: PartyCount,
    date: Option<DateTime<Utc>>,
}

impl NewReservationBuilder {
    /// Sets the reservation date. `None` means "now".
    #[must_use]
    pub fn date(mut self, date: Option<DateTime<Utc>>) -> Self {
        self.date = date;
        self
    }

    /// Resolves the date and finishes the request.
    #[must_use]
    pub fn build(self) -> NewReservation {
        let date = self.date.unwrap_or_else(Utc::now).trunc_subsecs(3);
        NewReservation {
            customer_id: self.customer_id,
            restaurant_id: self.restaurant_id,
            party_count: self.party_count,
            date,
        }
    }
}

/// A reservation joined with its customer and restaurant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReservationView {
    /// The reservation id.
    pub reservation_id: ReservationId,
    /// Number of guests.
    pub party_count: PartyCount,
    /// When the party is expected.
    pub date: DateTime<Utc>,
    /// The customer holding the reservation.
    pub customer_id: CustomerId,
    /// The customer's name.
    pub customer_name: String,
    /// The booked restaurant.
    pub restaurant_id: RestaurantId,
    /// The restaurant's name, if it has one.
    pub restaurant_name: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn party(n: i64) -> PartyCount {
        PartyCount::try_from(n).unwrap()
    }

    #[test]
    fn test_builder_defaults_date_to_now() {
        let before = Utc::now() - Duration::milliseconds(1);
        let request =
            Reservation::builder(CustomerId::generate(), RestaurantId::generate(), party(3))
                .build();
        let after = Utc::now();

        assert!(request.date() >= before);
        assert!(request.date() <= after);
    }

    #[test]
    fn test_builder_keeps_explicit_date() {
        let date = Utc.with_ymd_and_hms(2025, 4, 26, 19, 30, 0).unwrap();
        let request =
            Reservation::builder(CustomerId::generate(), RestaurantId::generate(), party(2))
                .date(Some(date))
                .build();
        assert_eq!(request.date(), date);
    }

    #[test]
    fn test_builder_truncates_to_millis() {
        let date = Utc.timestamp_opt(1_700_000_000, 123_456_789).unwrap();
        let request =
            Reservation::builder(CustomerId::generate(), RestaurantId::generate(), party(2))
                .date(Some(date))
                .build();
        assert_eq!(request.date().timestamp_subsec_nanos(), 123_000_000);
    }

    #[test]
    fn test_view_json_field_names() {
        let view = ReservationView {
            reservation_id: ReservationId::generate(),
            party_count: party(4),
            date: Utc.with_ymd_and_hms(2025, 4, 26, 19, 30, 0).unwrap(),
            customer_id: CustomerId::generate(),
            customer_name: "John Doe".into(),
            restaurant_id: RestaurantId::generate(),
            restaurant_name: Some("Fine Diner".into()),
        };
        let json = serde_json::to_value(&view).unwrap();
        for field in [
            "reservation_id",
            "party_count",
            "date",
            "customer_id",
            "customer_name",
            "restaurant_id",
            "restaurant_name",
        ] {
            assert!(json.get(field).is_some(), "missing {field}");
        }
        assert_eq!(json["date"], "2025-04-26T19:30:00Z");
    }
}

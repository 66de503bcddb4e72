//! Domain records for the reservation store.
//!
//! - [`Customer`] and [`Restaurant`]: independently created, immutable
//! - [`Reservation`]: a party booked by a customer at a restaurant
//! - [`ReservationView`]: a reservation joined with both of its parents
//! - [`CustomerId`], [`RestaurantId`], [`ReservationId`]: generated UUIDs
//! - [`PartyCount`]: a validated, positive guest count

mod customer;
mod ids;
mod party;
mod reservation;

#[cfg(test)]
mod proptests;

pub use customer::{
    validate_customer_name, validate_restaurant_name, Customer, Restaurant, MAX_NAME_LENGTH,
};
pub use ids::{CustomerId, ReservationId, RestaurantId};
pub use party::{InvalidPartyCountError, PartyCount};
pub use reservation::{NewReservation, NewReservationBuilder, Reservation, ReservationView};

/// Error type for field validation failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// The field that failed validation.
    pub field: String,
    /// A description of the validation failure.
    pub message: String,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "validation error for '{}': {}", self.field, self.message)
    }
}

impl std::error::Error for ValidationError {}

impl From<InvalidPartyCountError> for ValidationError {
    fn from(err: InvalidPartyCountError) -> Self {
        Self {
            field: "party_count".into(),
            message: err.to_string(),
        }
    }
}

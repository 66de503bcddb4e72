//! Customer and restaurant records.
//!
//! Both entities are created once and never updated or deleted. Names are
//! limited to [`MAX_NAME_LENGTH`] characters.

use serde::{Deserialize, Serialize};

use super::ids::{CustomerId, RestaurantId};
use super::ValidationError;

/// Maximum length of a customer or restaurant name, in characters.
pub const MAX_NAME_LENGTH: usize = 100;

/// A customer who can hold reservations.
///
/// # Examples
///
/// ```
/// use booking::{Customer, CustomerId};
///
/// let customer = Customer {
///     id: CustomerId::generate(),
///     name: "Ada".to_string(),
/// };
/// assert_eq!(customer.name, "Ada");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    /// Generated identifier.
    pub id: CustomerId,
    /// Display name (required).
    pub name: String,
}

/// A restaurant that accepts reservations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Restaurant {
    /// Generated identifier.
    pub id: RestaurantId,
    /// Display name, if one was given.
    pub name: Option<String>,
}

/// Validates a customer name.
///
/// The name is returned unchanged. Any string that fits in
/// [`MAX_NAME_LENGTH`] characters is accepted, including the empty string.
///
/// # Errors
///
/// Returns an error if the name is too long.
///
/// # Examples
///
/// ```
/// use booking::model::validate_customer_name;
///
/// assert_eq!(validate_customer_name("Ada").unwrap(), "Ada");
/// assert_eq!(validate_customer_name("").unwrap(), "");
/// assert!(validate_customer_name(&"x".repeat(101)).is_err());
/// ```
pub fn validate_customer_name(name: &str) -> Result<&str, ValidationError> {
    check_length(name)?;
    Ok(name)
}

/// Validates an optional restaurant name.
///
/// # Errors
///
/// Returns an error if the name is longer than [`MAX_NAME_LENGTH`] characters.
pub fn validate_restaurant_name(name: Option<&str>) -> Result<Option<&str>, ValidationError> {
    if let Some(name) = name {
        check_length(name)?;
    }
    Ok(name)
}

fn check_length(name: &str) -> Result<(), ValidationError> {
    let length = name.chars().count();
    if length > MAX_NAME_LENGTH {
        return Err(ValidationError {
            field: "name".into(),
            message: format!("name is {length} characters, maximum is {MAX_NAME_LENGTH}"),
        });
    }
    Ok(())
}

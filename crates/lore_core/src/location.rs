//! Location queries and device coordinates.

use lore_error::ValidationError;
use serde::{Deserialize, Serialize};

/// Free-form text naming a place.
///
/// The text is kept exactly as entered; the only check is that it is not
/// empty or whitespace.
///
/// # Examples
///
/// ```
/// use lore_core::LocationQuery;
///
/// let query = LocationQuery::new("Eiffel Tower, Paris").unwrap();
/// assert_eq!(query.as_str(), "Eiffel Tower, Paris");
/// assert!(LocationQuery::new("   ").is_err());
/// ```
#[derive(
    Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, derive_more::Display,
)]
#[serde(try_from = "String", into = "String")]
pub struct LocationQuery(String);

impl LocationQuery {
    /// Wrap `text`, rejecting empty input.
    #[track_caller]
    pub fn new(text: impl Into<String>) -> Result<Self, ValidationError> {
        let text = text.into();
        if text.trim().is_empty() {
            return Err(ValidationError::new("Please provide a location."));
        }
        Ok(Self(text))
    }

    /// The query text.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume the query, returning its text.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl AsRef<str> for LocationQuery {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for LocationQuery {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<LocationQuery> for String {
    fn from(value: LocationQuery) -> Self {
        value.0
    }
}

/// A device-reported position.
///
/// # Examples
///
/// ```
/// use lore_core::Coordinates;
///
/// let here = Coordinates::new(48.85837, 2.29448).unwrap();
/// assert_eq!(here.to_query().as_str(), "48.8584, 2.2945");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, derive_more::Display)]
#[display("{:.4}, {:.4}", latitude, longitude)]
pub struct Coordinates {
    /// Degrees north, -90 to 90
    pub latitude: f64,
    /// Degrees east, -180 to 180
    pub longitude: f64,
}

impl Coordinates {
    /// Validate and wrap a latitude/longitude pair.
    #[track_caller]
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, ValidationError> {
        if !latitude.is_finite() || !(-90.0..=90.0).contains(&latitude) {
            return Err(ValidationError::new(format!(
                "Latitude must be between -90 and 90, got {latitude}"
            )));
        }
        if !longitude.is_finite() || !(-180.0..=180.0).contains(&longitude) {
            return Err(ValidationError::new(format!(
                "Longitude must be between -180 and 180, got {longitude}"
            )));
        }
        Ok(Self {
            latitude,
            longitude,
        })
    }

    /// The location text used for generation: `"{lat:.4}, {lon:.4}"`.
    pub fn to_query(&self) -> LocationQuery {
        LocationQuery(self.to_string())
    }
}

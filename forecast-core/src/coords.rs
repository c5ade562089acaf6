use thiserror::Error;

/// A validated pair of geographic coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

/// Validation failures for the `latitude`/`longitude` query parameters.
///
/// The display texts are part of the public HTTP contract and must not be
/// reworded (including the `parametes` typo carried over from the v1 API).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoordinateError {
    #[error("Missing query parametes `latitude` and `longitude`")]
    MissingBoth,
    #[error("Missing the latitude value")]
    MissingLatitude,
    #[error("Missing the longitude value")]
    MissingLongitude,
    #[error("'{0}' is an invalid latitude value")]
    InvalidLatitude(String),
    #[error("'{0}' is an invalid longitude value")]
    InvalidLongitude(String),
}

impl Coordinates {
    /// Parse raw query-parameter values into coordinates.
    ///
    /// An absent parameter is passed as the empty string. Latitude is checked
    /// before longitude, so when both are invalid the latitude failure is the
    /// one reported. Values are only required to parse as `f64`; the v1
    /// contract performs no range checks.
    pub fn parse(latitude: &str, longitude: &str) -> Result<Self, CoordinateError> {
        match (latitude.is_empty(), longitude.is_empty()) {
            (true, true) => return Err(CoordinateError::MissingBoth),
            (true, false) => return Err(CoordinateError::MissingLatitude),
            (false, true) => return Err(CoordinateError::MissingLongitude),
            (false, false) => {}
        }

        let lat: f64 = latitude
            .parse()
            .map_err(|_| CoordinateError::InvalidLatitude(latitude.to_owned()))?;
        let lon: f64 = longitude
            .parse()
            .map_err(|_| CoordinateError::InvalidLongitude(longitude.to_owned()))?;

        Ok(Self {
            latitude: lat,
            longitude: lon,
        })
    }
}

//! Coordinate input validation

use crate::error::ValidationError;
use crate::models::Coordinate;

/// Parser for user-entered coordinate strings
pub struct CoordinateParser;

impl CoordinateParser {
    /// Parse input in the form `"<lat>, <lon>"`
    ///
    /// The separator is the literal comma-space sequence; the split must
    /// yield exactly two tokens and both must parse as floating-point
    /// numbers. Range is not checked.
    pub fn parse(raw: &str) -> Result<Coordinate, ValidationError> {
        let tokens: Vec<&str> = raw.split(", ").collect();

        if tokens.len() != 2 {
            return Err(ValidationError::MalformedFormat);
        }

        let latitude = tokens[0]
            .parse::<f64>()
            .map_err(|_| ValidationError::NotANumber)?;
        let longitude = tokens[1]
            .parse::<f64>()
            .map_err(|_| ValidationError::NotANumber)?;

        Ok(Coordinate::new(latitude, longitude))
    }
}

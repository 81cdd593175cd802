//! Station code types.

use std::fmt;

use serde::{Serialize, Serializer};

/// Error returned when parsing an invalid station code.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid station code {input:?}: {reason}")]
pub struct InvalidCrs {
    input: String,
    reason: &'static str,
}

/// A 3-character CRS (Computer Reservation System) station code.
///
/// Codes are case-insensitive on the way in and always stored uppercase, so
/// two `Crs` values compare equal exactly when the codes match ignoring case.
///
/// # Examples
///
/// ```
/// use commute_server::domain::Crs;
///
/// let kgx = Crs::parse("kgx").unwrap();
/// assert_eq!(kgx.as_str(), "KGX");
/// assert_eq!(kgx, Crs::parse("KGX").unwrap());
///
/// assert!(Crs::parse("KG").is_err());
/// assert!(Crs::parse("K-X").is_err());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Crs([u8; 3]);

impl Crs {
    /// Parse a station code, normalizing it to uppercase.
    ///
    /// The input must be exactly 3 ASCII letters or digits.
    pub fn parse(s: &str) -> Result<Self, InvalidCrs> {
        let bytes = s.as_bytes();

        if bytes.len() != 3 {
            return Err(InvalidCrs {
                input: s.to_string(),
                reason: "must be exactly 3 characters",
            });
        }

        if !bytes.iter().all(u8::is_ascii_alphanumeric) {
            return Err(InvalidCrs {
                input: s.to_string(),
                reason: "must be ASCII letters or digits",
            });
        }

        Ok(Crs([
            bytes[0].to_ascii_uppercase(),
            bytes[1].to_ascii_uppercase(),
            bytes[2].to_ascii_uppercase(),
        ]))
    }

    /// Parse after trimming surrounding whitespace, as typed by a user.
    pub fn parse_trimmed(s: &str) -> Result<Self, InvalidCrs> {
        Self::parse(s.trim())
    }

    /// Returns the code as a string slice.
    pub fn as_str(&self) -> &str {
        // Only ASCII alphanumerics are ever stored.
        std::str::from_utf8(&self.0).unwrap_or("???")
    }
}

impl fmt::Debug for Crs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Crs({})", self.as_str())
    }
}

impl fmt::Display for Crs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Crs {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

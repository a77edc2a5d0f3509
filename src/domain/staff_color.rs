use super::ValidationError;
use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Colour used for shifts whose staff member no longer exists.
pub const FALLBACK_STAFF_COLOR: &str = "#6B7280";

lazy_static! {
    static ref HEX_COLOR: Regex = Regex::new(r"^#[0-9A-Fa-f]{6}$")
        .expect("Regex for StaffColor parser is invalid");
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct StaffColor(String);

impl StaffColor {
    pub fn parse(color: &str) -> Result<Self, ValidationError> {
        if HEX_COLOR.is_match(color) {
            Ok(Self(color.to_ascii_uppercase()))
        } else {
            Err(ValidationError::new(format!(
                "Invalid colour, expected #RRGGBB: {color}"
            )))
        }
    }
}

impl Default for StaffColor {
    fn default() -> Self {
        Self(FALLBACK_STAFF_COLOR.to_owned())
    }
}

impl AsRef<str> for StaffColor {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for StaffColor {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<StaffColor> for String {
    fn from(color: StaffColor) -> Self {
        color.0
    }
}

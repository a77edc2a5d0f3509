use super::ValidationError;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct StaffName(String);

impl StaffName {
    pub fn parse(name: String) -> Result<Self, ValidationError> {
        match name.trim().chars().count() {
            x if x < 1 => Err(ValidationError::new(
                "Staff name cannot be empty".to_string(),
            )),
            x if x > 255 => Err(ValidationError::new(
                "Max name length is 255 characters".to_string(),
            )),
            _ => Ok(Self(name.trim().to_owned())),
        }
    }
}

impl AsRef<String> for StaffName {
    fn as_ref(&self) -> &String {
        &self.0
    }
}

impl TryFrom<String> for StaffName {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl From<StaffName> for String {
    fn from(name: StaffName) -> Self {
        name.0
    }
}

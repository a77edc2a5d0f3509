use super::ValidationError;
use serde::{Deserialize, Serialize};

const STAFF_ID_MAX_LENGTH: usize = 128;

#[derive(
    Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(try_from = "String", into = "String")]
pub struct StaffId(String);

impl StaffId {
    pub fn parse(id: &str) -> Result<Self, ValidationError> {
        let trimmed = id.trim();
        match trimmed.chars().count() {
            0 => Err(ValidationError::new(String::from(
                "Staff ID cannot be empty",
            ))),
            x if x > STAFF_ID_MAX_LENGTH => Err(ValidationError::new(format!(
                "Max staff ID length is {STAFF_ID_MAX_LENGTH} characters"
            ))),
            _ => Ok(Self(trimmed.to_owned())),
        }
    }
}

impl Default for StaffId {
    fn default() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }
}

impl AsRef<str> for StaffId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for StaffId {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<StaffId> for String {
    fn from(id: StaffId) -> Self {
        id.0
    }
}

#[test]
fn test_valid_ids() {
    for valid_id in ["1", "42", "5e90ca28-e1ad-4795-a190-089959c16e0b"] {
        let parsed = StaffId::parse(valid_id).expect(valid_id);
        assert_eq!(
            parsed.as_ref(),
            valid_id,
            "ID does not match expected value"
        );
    }
}

#[test]
fn test_ids_are_trimmed() {
    let parsed = StaffId::parse(" 3 ").expect("Failed to parse staff ID");
    assert_eq!(parsed.as_ref(), "3");
}

#[test]
fn test_invalid_ids() {
    let result = StaffId::parse("   ");
    let error = result.expect_err("blank staff ID");
    assert_eq!(error.as_ref(), "Staff ID cannot be empty");

    let result = StaffId::parse(&"a".repeat(129));
    assert!(result.is_err());
}

#[test]
fn test_generated_ids_are_unique() {
    assert_ne!(StaffId::default(), StaffId::default());
}

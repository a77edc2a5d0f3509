use serde::{Deserialize, Serialize};

use super::{StaffColor, StaffId, StaffName};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StaffMember {
    pub id: StaffId,
    pub name: StaffName,
    pub color: StaffColor,
}

impl StaffMember {
    pub fn new(name: StaffName, color: StaffColor) -> Self {
        Self {
            id: StaffId::default(),
            name,
            color,
        }
    }

    pub fn with_id(id: StaffId, name: StaffName, color: StaffColor) -> Self {
        Self { id, name, color }
    }
}

/// The reception roster every fresh deployment starts with.
pub fn default_roster() -> Vec<StaffMember> {
    [
        ("1", "田中 花子", "#3B82F6"),
        ("2", "佐藤 太郎", "#10B981"),
        ("3", "山田 美咲", "#F59E0B"),
        ("4", "鈴木 一郎", "#EF4444"),
    ]
    .into_iter()
    .filter_map(|(id, name, color)| {
        Some(StaffMember::with_id(
            StaffId::parse(id).ok()?,
            StaffName::parse(name.to_owned()).ok()?,
            StaffColor::parse(color).ok()?,
        ))
    })
    .collect()
}

#[test]
fn test_default_roster() {
    let roster = default_roster();
    assert_eq!(roster.len(), 4);
    assert_eq!(roster[0].id.as_ref(), "1");
    assert_eq!(roster[0].name.as_ref(), "田中 花子");
    assert_eq!(roster[3].color.as_ref(), "#EF4444");
}

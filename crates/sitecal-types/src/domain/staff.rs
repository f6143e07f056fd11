use serde::{Deserialize, Serialize};
use std::fmt;

/// Staff identifier, assigned at creation and never changed
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StaffId(String);

impl StaffId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StaffId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for StaffId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for StaffId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl AsRef<str> for StaffId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StaffMember {
    pub id: StaffId,
    pub name: String,
    /// Palette identifier (`bg-blue-500`) or `#rrggbb` literal
    pub color: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

impl StaffMember {
    pub fn new(id: impl Into<StaffId>, name: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            color: color.into(),
            position: None,
            phone: None,
            email: None,
        }
    }

    pub fn with_position(mut self, position: impl Into<String>) -> Self {
        self.position = Some(position.into());
        self
    }

    pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = Some(phone.into());
        self
    }

    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }
}

/// Read-only view over the roster.
///
/// Lookups are partial: jobs may reference staff that were deleted after the
/// job was created, and callers must treat a miss as "absent", not an error.
#[derive(Debug, Clone, Copy)]
pub struct StaffDirectory<'a> {
    members: &'a [StaffMember],
}

impl<'a> StaffDirectory<'a> {
    pub fn new(members: &'a [StaffMember]) -> Self {
        Self { members }
    }

    pub fn get(&self, id: &StaffId) -> Option<&'a StaffMember> {
        self.members.iter().find(|m| &m.id == id)
    }

    pub fn contains(&self, id: &StaffId) -> bool {
        self.get(id).is_some()
    }

    pub fn members(&self) -> &'a [StaffMember] {
        self.members
    }

    /// Resolve ids in order, silently dropping dangling references.
    pub fn resolve<'b>(self, ids: &'b [StaffId]) -> impl Iterator<Item = &'a StaffMember> + 'b
    where
        'a: 'b,
    {
        let members = self.members;
        ids.iter()
            .filter_map(move |id| members.iter().find(|m| &m.id == id))
    }
}

/// Roster used when nothing has been saved yet.
pub fn default_roster() -> Vec<StaffMember> {
    vec![
        StaffMember::new("1", "田中太郎", "bg-blue-500")
            .with_position("主任")
            .with_phone("090-1234-5678")
            .with_email("tanaka@company.com"),
        StaffMember::new("2", "佐藤花子", "bg-green-500")
            .with_position("技術者")
            .with_phone("090-2345-6789")
            .with_email("sato@company.com"),
        StaffMember::new("3", "鈴木一郎", "bg-orange-500")
            .with_position("技術者")
            .with_phone("090-3456-7890")
            .with_email("suzuki@company.com"),
        StaffMember::new("4", "高橋美咲", "bg-purple-500")
            .with_position("アシスタント")
            .with_phone("090-4567-8901"),
        StaffMember::new("5", "山田健太", "bg-red-500")
            .with_position("技術者")
            .with_phone("090-5678-9012"),
    ]
}

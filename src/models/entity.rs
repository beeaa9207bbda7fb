use std::fmt::{Display, Formatter, Result};

use serde::{Deserialize, Serialize};

pub const TYPE_CUSTOMER: i32 = 0;

/// Discriminates the three party roles a lookup can target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityKind {
    Seller,
    Contractor,
    Employee,
}

impl Display for EntityKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            EntityKind::Seller => write!(f, "seller"),
            EntityKind::Contractor => write!(f, "contractor"),
            EntityKind::Employee => write!(f, "employee"),
        }
    }
}

/// A party referenced by a return-notification request.
///
/// One struct covers all three kinds; role and expertise area are only ever
/// populated for employees.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entity {
    pub id: i64,
    pub kind: EntityKind,
    pub customer_type: i32,
    pub name: String,
    pub email: Option<String>,
    pub role: Option<String>,
    pub expertise_area: Option<String>,
}

impl Entity {
    pub fn new(id: i64, kind: EntityKind, name: impl Into<String>) -> Self {
        Self {
            id,
            kind,
            customer_type: TYPE_CUSTOMER,
            name: name.into(),
            email: None,
            role: None,
            expertise_area: None,
        }
    }

    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    pub fn with_role(mut self, role: impl Into<String>) -> Self {
        self.role = Some(role.into());
        self
    }

    pub fn with_expertise_area(mut self, area: impl Into<String>) -> Self {
        self.expertise_area = Some(area.into());
        self
    }

    /// Display name used in notification content: the stored name followed by
    /// the numeric id.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.name, self.id)
    }
}

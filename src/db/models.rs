use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A persisted student row.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, FromRow)]
pub struct Student {
    pub id: i64,
    pub name: String,
    pub department: String,
    pub email: String,
}

/// Replacement field set for create and update. Any `id` in the payload is ignored.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NewStudent {
    pub name: String,
    pub department: String,
    pub email: String,
}

#[cfg(test)]
impl NewStudent {
    pub fn new(
        name: impl Into<String>,
        department: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            department: department.into(),
            email: email.into(),
        }
    }
}

#[cfg(test)]
impl From<Student> for NewStudent {
    fn from(s: Student) -> Self {
        Self {
            name: s.name,
            department: s.department,
            email: s.email,
        }
    }
}

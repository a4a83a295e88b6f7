//! SQL DDL for the student store, as an ordered list of migrations.
//! The applied version is tracked in SQLite's `PRAGMA user_version`.

/// One schema step. Versions start at 1 and increase strictly.
#[derive(Debug, Clone, Copy)]
pub struct Migration {
    pub version: i64,
    pub description: &'static str,
    pub sql: &'static str,
}

/// `students` table with:
/// - `id` INTEGER PRIMARY KEY AUTOINCREMENT (ids are never reused)
/// - three required text columns, no uniqueness constraints
pub const MIGRATIONS: &[Migration] = &[Migration {
    version: 1,
    description: "create students table",
    sql: r#"
CREATE TABLE IF NOT EXISTS students (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL,
    department TEXT NOT NULL,
    email TEXT NOT NULL
);
"#,
}];

/// Highest version in [`MIGRATIONS`].
pub fn latest_version() -> i64 {
    MIGRATIONS.iter().map(|m| m.version).max().unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn versions_strictly_increase() {
        assert!(MIGRATIONS.windows(2).all(|w| w[0].version < w[1].version));
        assert!(MIGRATIONS.first().is_some_and(|m| m.version == 1));
    }
}

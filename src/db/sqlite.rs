use crate::db::models::{NewStudent, Student};
use crate::db::schema::{MIGRATIONS, Migration, latest_version};
use crate::error::StudentError;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{Pool, Sqlite};
use std::str::FromStr;
use tracing::{debug, info};

pub type SqlitePool = Pool<Sqlite>;

/// Open a pool for `database_url` (creating the file if missing) and bring the schema up to date.
pub async fn connect(database_url: &str) -> Result<StudentStorage, StudentError> {
    let connect_opts = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);
    let pool = SqlitePoolOptions::new().connect_with(connect_opts).await?;
    let storage = StudentStorage::new(pool);
    storage.migrate().await?;
    Ok(storage)
}

#[derive(Clone)]
pub struct StudentStorage {
    pool: SqlitePool,
}

impl StudentStorage {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Current `PRAGMA user_version`.
    pub async fn schema_version(&self) -> Result<i64, StudentError> {
        let rec: (i64,) = sqlx::query_as("PRAGMA user_version")
            .fetch_one(&self.pool)
            .await?;
        Ok(rec.0)
    }

    /// Apply every migration newer than the recorded schema version.
    pub async fn migrate(&self) -> Result<(), StudentError> {
        let current = self.schema_version().await?;
        let latest = latest_version();
        if current > latest {
            return Err(StudentError::Migration(format!(
                "database schema version {current} is newer than supported version {latest}"
            )));
        }
        for migration in MIGRATIONS.iter().filter(|m| m.version > current) {
            self.apply(migration).await?;
            info!(
                version = migration.version,
                description = migration.description,
                "applied schema migration"
            );
        }
        Ok(())
    }

    async fn apply(&self, migration: &Migration) -> Result<(), StudentError> {
        let mut tx = self.pool.begin().await?;
        // sqlx::query runs a single statement at a time
        for stmt in migration.sql.split(';') {
            let s = stmt.trim();
            if s.is_empty() {
                continue;
            }
            sqlx::query(s).execute(&mut *tx).await?;
        }
        // PRAGMA does not accept bound parameters
        let pragma = format!("PRAGMA user_version = {}", migration.version);
        sqlx::query(&pragma).execute(&mut *tx).await?;
        tx.commit().await?;
        Ok(())
    }

    /// Insert a new row. The store assigns the id.
    pub async fn create(&self, student: NewStudent) -> Result<Student, StudentError> {
        let created: Student = sqlx::query_as(
            r#"INSERT INTO students (name, department, email)
               VALUES (?, ?, ?)
               RETURNING id, name, department, email"#,
        )
        .bind(student.name)
        .bind(student.department)
        .bind(student.email)
        .fetch_one(&self.pool)
        .await?;
        debug!(id = created.id, "inserted student row");
        Ok(created)
    }

    /// All rows in insertion order.
    pub async fn list_all(&self) -> Result<Vec<Student>, StudentError> {
        let rows = sqlx::query_as::<_, Student>(
            "SELECT id, name, department, email FROM students ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    pub async fn get_by_id(&self, id: i64) -> Result<Student, StudentError> {
        sqlx::query_as::<_, Student>(
            "SELECT id, name, department, email FROM students WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or(StudentError::NotFound(id))
    }

    /// Overwrite all fields of an existing row. Never inserts.
    pub async fn update(&self, id: i64, student: NewStudent) -> Result<Student, StudentError> {
        sqlx::query_as::<_, Student>(
            r#"UPDATE students SET
                name = ?,
                department = ?,
                email = ?
              WHERE id = ?
              RETURNING id, name, department, email"#,
        )
        .bind(student.name)
        .bind(student.department)
        .bind(student.email)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or(StudentError::NotFound(id))
    }

    /// Returns whether a row was removed.
    pub async fn delete_by_id(&self, id: i64) -> Result<bool, StudentError> {
        let result = sqlx::query("DELETE FROM students WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

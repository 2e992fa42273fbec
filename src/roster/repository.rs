//! Repository layer for roster queries

use sqlx::PgPool;

/// Row shape of the `students` table.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct Student {
    pub id: i32,
    pub name: String,
    pub age: i32,
    pub score: f64,
}

/// Read/maintenance operations outside the ingest session.
pub struct RosterRepository;

impl RosterRepository {
    /// Load the full roster ordered by id.
    pub async fn list_all(pool: &PgPool) -> Result<Vec<Student>, sqlx::Error> {
        let rows: Vec<Student> =
            sqlx::query_as(r#"SELECT id, name, age, score FROM students ORDER BY id"#)
                .fetch_all(pool)
                .await?;

        Ok(rows)
    }

    /// Delete one student by id, returning the affected-row count.
    pub async fn delete(pool: &PgPool, id: i32) -> Result<u64, sqlx::Error> {
        let result = sqlx::query(r#"DELETE FROM students WHERE id = $1"#)
            .bind(id)
            .execute(pool)
            .await?;

        Ok(result.rows_affected())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DatabaseConfig;
    use crate::db::Database;

    fn test_config() -> DatabaseConfig {
        DatabaseConfig {
            url: "postgresql://localhost:5432/campus_test".to_string(),
            user: "campus".to_string(),
            password: "campus123".to_string(),
        }
    }

    #[tokio::test]
    #[ignore] // Requires PostgreSQL with the students table
    async fn test_delete_missing_student_affects_no_rows() {
        let db = Database::connect(&test_config())
            .await
            .expect("Failed to connect");

        let affected = RosterRepository::delete(db.pool(), -1)
            .await
            .expect("Should execute delete");
        assert_eq!(affected, 0, "No row should match a missing id");
    }

    #[tokio::test]
    #[ignore]
    async fn test_list_all_returns_ordered_ids() {
        let db = Database::connect(&test_config())
            .await
            .expect("Failed to connect");

        let students = RosterRepository::list_all(db.pool())
            .await
            .expect("Should load roster");

        let mut ids: Vec<i32> = students.iter().map(|s| s.id).collect();
        ids.sort_unstable();
        assert_eq!(
            ids,
            students.iter().map(|s| s.id).collect::<Vec<_>>(),
            "Roster should come back ordered by id"
        );
    }
}

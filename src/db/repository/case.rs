//! Repository for case database operations

use sqlx::PgPool;
use uuid::Uuid;

use super::super::models::{
    case_status_to_string, total_pages, CaseRow, ListCasesQuery, PaginatedCases,
};
use super::super::DbError;
use crate::model::{Case, CaseInput, CaseStatus};

const DEFAULT_PAGE_SIZE: u32 = 10;
const MAX_PAGE_SIZE: u32 = 100;

/// Normalize client-supplied paging: page defaults to 1 and is floored at 1,
/// page_size is clamped to 1..=MAX_PAGE_SIZE. The offset is computed in i64
/// so an extreme page number cannot overflow before reaching the query.
fn normalize_paging(page: Option<u32>, page_size: Option<u32>) -> (u32, u32, i64) {
    let page = page.unwrap_or(1).max(1);
    let page_size = page_size.unwrap_or(DEFAULT_PAGE_SIZE).clamp(1, MAX_PAGE_SIZE);
    let offset = (i64::from(page) - 1) * i64::from(page_size);

    (page, page_size, offset)
}

/// Select clause joining every case with its view count
const SELECT_CASE: &str = r#"
    SELECT c.*, COALESCE(v.count, 0) AS view_count
    FROM cases c
    LEFT JOIN view_counts v ON v.case_id = c.id
"#;

/// Repository for case operations
#[derive(Clone)]
pub struct CaseRepository {
    pool: PgPool,
}

impl CaseRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create a case and initialize its view count in one transaction
    pub async fn create(&self, input: &CaseInput, user_id: Uuid) -> Result<Case, DbError> {
        let mut tx = self.pool.begin().await?;

        let row: CaseRow = sqlx::query_as(
            r#"
            INSERT INTO cases (
                title, description, person_a, person_b,
                relationship, duration, category, tags, status, user_id, fcm_token
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            RETURNING *
            "#,
        )
        .bind(&input.title)
        .bind(&input.description)
        .bind(&input.person_a)
        .bind(&input.person_b)
        .bind(&input.relationship)
        .bind(&input.duration)
        .bind(&input.category)
        .bind(&input.tags)
        .bind(case_status_to_string(&CaseStatus::Pending))
        .bind(user_id)
        .bind(&input.fcm_token)
        .fetch_one(&mut *tx)
        .await?;

        sqlx::query("INSERT INTO view_counts (case_id, count) VALUES ($1, 0)")
            .bind(row.id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        tracing::debug!(id = %row.id, "Created case");

        row.into_domain().map_err(DbError::Serialization)
    }

    /// Get a case by ID without touching its view count
    pub async fn get_by_id(&self, id: i64) -> Result<Case, DbError> {
        let row: CaseRow = sqlx::query_as(&format!("{} WHERE c.id = $1", SELECT_CASE))
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| DbError::NotFound(id.to_string()))?;

        row.into_domain().map_err(DbError::Serialization)
    }

    /// Get a case by ID and atomically increment its view count.
    /// The returned case carries the incremented count.
    pub async fn get_and_touch(&self, id: i64) -> Result<Case, DbError> {
        let mut tx = self.pool.begin().await?;

        sqlx::query("UPDATE view_counts SET count = count + 1 WHERE case_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        let row: Option<CaseRow> = sqlx::query_as(&format!("{} WHERE c.id = $1", SELECT_CASE))
            .bind(id)
            .fetch_optional(&mut *tx)
            .await?;

        tx.commit().await?;

        row.ok_or_else(|| DbError::NotFound(id.to_string()))?
            .into_domain()
            .map_err(DbError::Serialization)
    }

    /// Check if a case exists by ID
    pub async fn exists(&self, id: i64) -> Result<bool, DbError> {
        let result: Option<(i32,)> = sqlx::query_as("SELECT 1 FROM cases WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(result.is_some())
    }

    /// Delete a case by ID, cascading to its verdict, votes, bookmarks and comments.
    /// Returns true if the case was deleted, false if it didn't exist.
    pub async fn delete(&self, id: i64) -> Result<bool, DbError> {
        let result = sqlx::query("DELETE FROM cases WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        let deleted = result.rows_affected() > 0;
        if deleted {
            tracing::debug!(id = %id, "Deleted case");
        }

        Ok(deleted)
    }

    /// List cases newest-first with pagination and an optional category filter
    pub async fn list(&self, query: ListCasesQuery) -> Result<PaginatedCases, DbError> {
        let (page, page_size, offset) = normalize_paging(query.page, query.page_size);

        let where_clause = if query.category.is_some() {
            "WHERE c.category = $1"
        } else {
            ""
        };

        // Get total count
        let count_query = format!("SELECT COUNT(*) FROM cases c {}", where_clause);

        let total_count: i64 = {
            let mut q = sqlx::query_scalar(&count_query);
            if let Some(ref category) = query.category {
                q = q.bind(category);
            }
            q.fetch_one(&self.pool).await?
        };

        // Get cases
        let select_query = format!(
            r#"
            {}
            {}
            ORDER BY c.created_at DESC
            LIMIT {} OFFSET {}
            "#,
            SELECT_CASE, where_clause, page_size, offset
        );

        let rows: Vec<CaseRow> = {
            let mut q = sqlx::query_as(&select_query);
            if let Some(ref category) = query.category {
                q = q.bind(category);
            }
            q.fetch_all(&self.pool).await?
        };

        let cases: Vec<Case> = rows
            .into_iter()
            .map(|row| row.into_domain().map_err(DbError::Serialization))
            .collect::<Result<_, _>>()?;

        Ok(PaginatedCases {
            cases,
            page,
            page_size,
            total_count,
            total_pages: total_pages(total_count, page_size),
        })
    }

    /// List all cases submitted by a user, newest-first
    pub async fn list_by_user(&self, user_id: Uuid) -> Result<Vec<Case>, DbError> {
        let rows: Vec<CaseRow> = sqlx::query_as(&format!(
            "{} WHERE c.user_id = $1 ORDER BY c.created_at DESC",
            SELECT_CASE
        ))
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter()
            .map(|row| row.into_domain().map_err(DbError::Serialization))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paging_defaults() {
        let (page, page_size, offset) = normalize_paging(None, None);
        assert_eq!(page, 1);
        assert_eq!(page_size, DEFAULT_PAGE_SIZE);
        assert_eq!(offset, 0);
    }

    #[test]
    fn test_paging_clamps_page_size() {
        let (_, page_size, _) = normalize_paging(Some(1), Some(0));
        assert_eq!(page_size, 1);

        let (_, page_size, _) = normalize_paging(Some(1), Some(5000));
        assert_eq!(page_size, MAX_PAGE_SIZE);
    }

    #[test]
    fn test_paging_floors_page_at_one() {
        let (page, _, offset) = normalize_paging(Some(0), Some(10));
        assert_eq!(page, 1);
        assert_eq!(offset, 0);
    }

    #[test]
    fn test_paging_extreme_page_does_not_overflow() {
        let (page, page_size, offset) = normalize_paging(Some(u32::MAX), Some(100));
        assert_eq!(page, u32::MAX);
        assert_eq!(page_size, 100);
        assert_eq!(offset, (i64::from(u32::MAX) - 1) * 100);
    }

    #[test]
    fn test_paging_offset_progression() {
        let (_, _, offset) = normalize_paging(Some(3), Some(25));
        assert_eq!(offset, 50);
    }
}

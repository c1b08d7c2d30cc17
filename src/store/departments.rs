//! Department database operations

use sqlx::PgPool;

use crate::error::Result;
use crate::models::{BudgetRow, Department};

pub async fn list(pool: &PgPool) -> Result<Vec<Department>> {
    let rows: Vec<Department> =
        sqlx::query_as("SELECT id, name FROM departments ORDER BY id")
            .fetch_all(pool)
            .await?;
    Ok(rows)
}

/// Utilized budget: sum of salaries over the department's filled positions.
/// `None` when the department has no employees (or does not exist).
pub async fn budget(pool: &PgPool, department_id: i64) -> Result<Option<BudgetRow>> {
    let row: Option<BudgetRow> = sqlx::query_as(
        r#"
        SELECT d.name AS department, SUM(r.salary) AS budget
        FROM employees e
        JOIN roles r ON e.role_id = r.id
        JOIN departments d ON r.department_id = d.id
        WHERE d.id = $1
        GROUP BY d.name
        "#,
    )
    .bind(department_id)
    .fetch_optional(pool)
    .await?;
    Ok(row)
}

pub async fn insert(pool: &PgPool, name: &str) -> Result<i64> {
    let (id,): (i64,) = sqlx::query_as(
        r#"
        INSERT INTO departments (name)
        VALUES ($1)
        RETURNING id
        "#,
    )
    .bind(name)
    .fetch_one(pool)
    .await?;
    Ok(id)
}

pub async fn delete(pool: &PgPool, id: i64) -> Result<u64> {
    let result = sqlx::query("DELETE FROM departments WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected())
}

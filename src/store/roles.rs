//! Role database operations

use sqlx::PgPool;

use crate::error::Result;
use crate::models::{NewRole, RoleRow};

pub async fn list(pool: &PgPool) -> Result<Vec<RoleRow>> {
    let rows: Vec<RoleRow> = sqlx::query_as(
        r#"
        SELECT r.id, r.title, r.salary, d.name AS department
        FROM roles r
        JOIN departments d ON r.department_id = d.id
        ORDER BY r.id
        "#,
    )
    .fetch_all(pool)
    .await?;
    Ok(rows)
}

pub async fn insert(pool: &PgPool, new: &NewRole) -> Result<i64> {
    let (id,): (i64,) = sqlx::query_as(
        r#"
        INSERT INTO roles (title, salary, department_id)
        VALUES ($1, $2, $3)
        RETURNING id
        "#,
    )
    .bind(&new.title)
    .bind(new.salary)
    .bind(new.department_id)
    .fetch_one(pool)
    .await?;
    Ok(id)
}

pub async fn delete(pool: &PgPool, id: i64) -> Result<u64> {
    let result = sqlx::query("DELETE FROM roles WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected())
}

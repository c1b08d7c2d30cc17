//! Employee database operations

use sqlx::PgPool;

use crate::error::Result;
use crate::models::{EmployeeRow, ManagerRow, NewEmployee};

// ── Views ──

pub async fn list(pool: &PgPool) -> Result<Vec<EmployeeRow>> {
    let rows: Vec<EmployeeRow> = sqlx::query_as(
        r#"
        SELECT e.id, e.first_name, e.last_name, r.title,
               d.name AS department, r.salary,
               m.first_name || ' ' || m.last_name AS manager
        FROM employees e
        JOIN roles r ON e.role_id = r.id
        JOIN departments d ON r.department_id = d.id
        LEFT JOIN employees m ON e.manager_id = m.id
        ORDER BY e.id
        "#,
    )
    .fetch_all(pool)
    .await?;
    Ok(rows)
}

pub async fn list_by_department(pool: &PgPool, department: &str) -> Result<Vec<EmployeeRow>> {
    let rows: Vec<EmployeeRow> = sqlx::query_as(
        r#"
        SELECT e.id, e.first_name, e.last_name, r.title,
               d.name AS department, r.salary,
               m.first_name || ' ' || m.last_name AS manager
        FROM employees e
        JOIN roles r ON e.role_id = r.id
        JOIN departments d ON r.department_id = d.id
        LEFT JOIN employees m ON e.manager_id = m.id
        WHERE d.name = $1
        ORDER BY e.id
        "#,
    )
    .bind(department)
    .fetch_all(pool)
    .await?;
    Ok(rows)
}

pub async fn list_by_manager(pool: &PgPool, manager_id: i64) -> Result<Vec<EmployeeRow>> {
    let rows: Vec<EmployeeRow> = sqlx::query_as(
        r#"
        SELECT e.id, e.first_name, e.last_name, r.title,
               d.name AS department, r.salary,
               m.first_name || ' ' || m.last_name AS manager
        FROM employees e
        JOIN roles r ON e.role_id = r.id
        JOIN departments d ON r.department_id = d.id
        LEFT JOIN employees m ON e.manager_id = m.id
        WHERE e.manager_id = $1
        ORDER BY e.id
        "#,
    )
    .bind(manager_id)
    .fetch_all(pool)
    .await?;
    Ok(rows)
}

/// Employees that currently manage at least one other employee
pub async fn list_managers(pool: &PgPool) -> Result<Vec<ManagerRow>> {
    let rows: Vec<ManagerRow> = sqlx::query_as(
        r#"
        SELECT DISTINCT m.id, m.first_name, m.last_name
        FROM employees m
        JOIN employees e ON e.manager_id = m.id
        ORDER BY m.id
        "#,
    )
    .fetch_all(pool)
    .await?;
    Ok(rows)
}

// ── Writes ──

pub async fn insert(pool: &PgPool, new: &NewEmployee) -> Result<i64> {
    let (id,): (i64,) = sqlx::query_as(
        r#"
        INSERT INTO employees (first_name, last_name, role_id, manager_id)
        VALUES ($1, $2, $3, $4)
        RETURNING id
        "#,
    )
    .bind(&new.first_name)
    .bind(&new.last_name)
    .bind(new.role_id)
    .bind(new.manager_id)
    .fetch_one(pool)
    .await?;
    Ok(id)
}

pub async fn set_role(pool: &PgPool, employee_id: i64, role_id: i64) -> Result<u64> {
    let result = sqlx::query("UPDATE employees SET role_id = $1 WHERE id = $2")
        .bind(role_id)
        .bind(employee_id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected())
}

pub async fn set_manager(
    pool: &PgPool,
    employee_id: i64,
    manager_id: Option<i64>,
) -> Result<u64> {
    let result = sqlx::query("UPDATE employees SET manager_id = $1 WHERE id = $2")
        .bind(manager_id)
        .bind(employee_id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected())
}

pub async fn delete(pool: &PgPool, id: i64) -> Result<u64> {
    let result = sqlx::query("DELETE FROM employees WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected())
}

//! Data access layer
//!
//! `Store` is the seam between the menu handlers and the backing database.
//! The production implementation is [`Database`], which owns the single
//! pooled PostgreSQL connection and delegates each operation to a literal
//! parameterized statement in the per-entity modules. Tests substitute an
//! in-memory store behind the same trait.

pub mod departments;
pub mod employees;
pub mod roles;

use async_trait::async_trait;
use sqlx::PgPool;
use sqlx::postgres::{PgConnectOptions, PgPoolOptions};

use crate::config::Config;
use crate::error::{Result, TrackerError};
use crate::models::{
    BudgetRow, Department, EmployeeRow, ManagerRow, NewEmployee, NewRole, RoleRow,
};

#[async_trait]
pub trait Store: Send + Sync {
    // ── Employees ──
    async fn employees(&self) -> Result<Vec<EmployeeRow>>;
    async fn employees_by_department(&self, department: &str) -> Result<Vec<EmployeeRow>>;
    async fn employees_by_manager(&self, manager_id: i64) -> Result<Vec<EmployeeRow>>;
    async fn managers(&self) -> Result<Vec<ManagerRow>>;
    async fn add_employee(&self, new: &NewEmployee) -> Result<i64>;
    async fn set_employee_role(&self, employee_id: i64, role_id: i64) -> Result<u64>;
    async fn set_employee_manager(
        &self,
        employee_id: i64,
        manager_id: Option<i64>,
    ) -> Result<u64>;
    async fn delete_employee(&self, id: i64) -> Result<u64>;

    // ── Roles ──
    async fn roles(&self) -> Result<Vec<RoleRow>>;
    async fn add_role(&self, new: &NewRole) -> Result<i64>;
    async fn delete_role(&self, id: i64) -> Result<u64>;

    // ── Departments ──
    async fn departments(&self) -> Result<Vec<Department>>;
    async fn department_budget(&self, department_id: i64) -> Result<Option<BudgetRow>>;
    async fn add_department(&self, name: &str) -> Result<i64>;
    async fn delete_department(&self, id: i64) -> Result<u64>;
}

/// PostgreSQL-backed store owning the process's only database session
pub struct Database {
    pool: PgPool,
}

impl Database {
    /// Establish the session. The pool is capped at one connection, so the
    /// process holds exactly one live session for its entire lifetime.
    pub async fn connect(config: &Config) -> Result<Self> {
        let options = PgConnectOptions::new()
            .host(config.host)
            .port(config.port)
            .username(config.user)
            .password(&config.password)
            .database(config.database);

        let pool = PgPoolOptions::new()
            .max_connections(1)
            .connect_with(options)
            .await
            .map_err(TrackerError::Connection)?;

        Ok(Self { pool })
    }

    /// Release the session. Safe to call on an already-closed pool.
    pub async fn close(&self) {
        self.pool.close().await;
    }
}

#[async_trait]
impl Store for Database {
    async fn employees(&self) -> Result<Vec<EmployeeRow>> {
        employees::list(&self.pool).await
    }

    async fn employees_by_department(&self, department: &str) -> Result<Vec<EmployeeRow>> {
        employees::list_by_department(&self.pool, department).await
    }

    async fn employees_by_manager(&self, manager_id: i64) -> Result<Vec<EmployeeRow>> {
        employees::list_by_manager(&self.pool, manager_id).await
    }

    async fn managers(&self) -> Result<Vec<ManagerRow>> {
        employees::list_managers(&self.pool).await
    }

    async fn add_employee(&self, new: &NewEmployee) -> Result<i64> {
        employees::insert(&self.pool, new).await
    }

    async fn set_employee_role(&self, employee_id: i64, role_id: i64) -> Result<u64> {
        employees::set_role(&self.pool, employee_id, role_id).await
    }

    async fn set_employee_manager(
        &self,
        employee_id: i64,
        manager_id: Option<i64>,
    ) -> Result<u64> {
        employees::set_manager(&self.pool, employee_id, manager_id).await
    }

    async fn delete_employee(&self, id: i64) -> Result<u64> {
        employees::delete(&self.pool, id).await
    }

    async fn roles(&self) -> Result<Vec<RoleRow>> {
        roles::list(&self.pool).await
    }

    async fn add_role(&self, new: &NewRole) -> Result<i64> {
        roles::insert(&self.pool, new).await
    }

    async fn delete_role(&self, id: i64) -> Result<u64> {
        roles::delete(&self.pool, id).await
    }

    async fn departments(&self) -> Result<Vec<Department>> {
        departments::list(&self.pool).await
    }

    async fn department_budget(&self, department_id: i64) -> Result<Option<BudgetRow>> {
        departments::budget(&self.pool, department_id).await
    }

    async fn add_department(&self, name: &str) -> Result<i64> {
        departments::insert(&self.pool, name).await
    }

    async fn delete_department(&self, id: i64) -> Result<u64> {
        departments::delete(&self.pool, id).await
    }
}

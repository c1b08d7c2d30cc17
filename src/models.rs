//! Row and payload models for the tracker schema
//!
//! View rows carry the joined, human-readable foreign fields (role title,
//! department name, manager full name) so the handlers never re-query to
//! label anything. Payload types are the create shapes; identity is always
//! assigned by the database.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::ui::table::Tabular;

/// Joined employee view row, ordered by id in every view
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct EmployeeRow {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub title: String,
    pub department: String,
    pub salary: Decimal,
    /// Manager full name; `None` = no manager
    pub manager: Option<String>,
}

impl EmployeeRow {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// An employee that currently manages at least one other employee
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct ManagerRow {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
}

impl ManagerRow {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Role view row with its department resolved
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct RoleRow {
    pub id: i64,
    pub title: String,
    pub salary: Decimal,
    pub department: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Department {
    pub id: i64,
    pub name: String,
}

/// Sum of salaries over a department's filled positions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct BudgetRow {
    pub department: String,
    pub budget: Decimal,
}

/// Create-employee payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewEmployee {
    pub first_name: String,
    pub last_name: String,
    pub role_id: i64,
    pub manager_id: Option<i64>,
}

/// Create-role payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewRole {
    pub title: String,
    pub salary: Decimal,
    pub department_id: i64,
}

// ── Table rendering ──

impl Tabular for EmployeeRow {
    fn headers() -> &'static [&'static str] {
        &[
            "id",
            "first_name",
            "last_name",
            "title",
            "department",
            "salary",
            "manager",
        ]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.first_name.clone(),
            self.last_name.clone(),
            self.title.clone(),
            self.department.clone(),
            self.salary.to_string(),
            self.manager.clone().unwrap_or_else(|| "NULL".into()),
        ]
    }
}

impl Tabular for ManagerRow {
    fn headers() -> &'static [&'static str] {
        &["id", "first_name", "last_name"]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.first_name.clone(),
            self.last_name.clone(),
        ]
    }
}

impl Tabular for RoleRow {
    fn headers() -> &'static [&'static str] {
        &["id", "title", "salary", "department"]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.title.clone(),
            self.salary.to_string(),
            self.department.clone(),
        ]
    }
}

impl Tabular for Department {
    fn headers() -> &'static [&'static str] {
        &["id", "name"]
    }

    fn cells(&self) -> Vec<String> {
        vec![self.id.to_string(), self.name.clone()]
    }
}

impl Tabular for BudgetRow {
    fn headers() -> &'static [&'static str] {
        &["department", "budget"]
    }

    fn cells(&self) -> Vec<String> {
        vec![self.department.clone(), self.budget.to_string()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_name_joins_with_single_space() {
        let row = ManagerRow {
            id: 1,
            first_name: "Ann".into(),
            last_name: "Lee".into(),
        };
        assert_eq!(row.full_name(), "Ann Lee");
    }

    #[test]
    fn missing_manager_renders_as_null() {
        let row = EmployeeRow {
            id: 1,
            first_name: "Ann".into(),
            last_name: "Lee".into(),
            title: "Rep".into(),
            department: "Sales".into(),
            salary: Decimal::from(50000),
            manager: None,
        };
        assert_eq!(row.cells()[6], "NULL");
    }
}

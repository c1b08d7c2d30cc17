//! Main menu registry
//!
//! A flat ordered list of (label, command) pairs; the dispatch loop renders
//! the labels verbatim and matches on the command. `Quit` is the sentinel
//! and always sits last.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    ViewEmployees,
    ViewEmployeesByDepartment,
    ViewEmployeesByManager,
    AddEmployee,
    RemoveEmployee,
    UpdateEmployeeRole,
    UpdateEmployeeManager,
    ViewRoles,
    AddRole,
    RemoveRole,
    ViewDepartments,
    ViewDepartmentBudget,
    AddDepartment,
    RemoveDepartment,
    Quit,
}

pub const MENU: &[(&str, Command)] = &[
    ("View All Employees", Command::ViewEmployees),
    (
        "View All Employees by Department",
        Command::ViewEmployeesByDepartment,
    ),
    (
        "View All Employees by Manager",
        Command::ViewEmployeesByManager,
    ),
    ("Add Employee", Command::AddEmployee),
    ("Remove Employee", Command::RemoveEmployee),
    ("Update Employee Role", Command::UpdateEmployeeRole),
    ("Update Employee Manager", Command::UpdateEmployeeManager),
    ("View All Roles", Command::ViewRoles),
    ("Add Role", Command::AddRole),
    ("Remove Role", Command::RemoveRole),
    ("View All Departments", Command::ViewDepartments),
    ("View Department Budgets", Command::ViewDepartmentBudget),
    ("Add Department", Command::AddDepartment),
    ("Remove Department", Command::RemoveDepartment),
    ("Quit", Command::Quit),
];

pub fn labels() -> Vec<&'static str> {
    MENU.iter().map(|(label, _)| *label).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn labels_are_unique() {
        let unique: HashSet<&str> = labels().into_iter().collect();
        assert_eq!(unique.len(), MENU.len());
    }

    #[test]
    fn quit_sentinel_is_last() {
        let (label, command) = MENU[MENU.len() - 1];
        assert_eq!(label, "Quit");
        assert_eq!(command, Command::Quit);
        assert_eq!(
            MENU.iter().filter(|(_, c)| *c == Command::Quit).count(),
            1
        );
    }
}

//! Menu dispatch loop and action handlers
//!
//! The loop has two states: running and terminated. Quit or a fatal error
//! terminates; every other handler error is reported in red and the loop
//! keeps running — for reads and writes alike.

use crate::error::Result;
use crate::menu::{self, Command};
use crate::models::{EmployeeRow, ManagerRow, NewEmployee, NewRole};
use crate::store::Store;
use crate::ui::table::{Tabular, render};
use crate::ui::{output, prompt};

/// Run the dispatch loop until the user quits or a fatal error occurs.
/// The caller releases the database session afterwards in either case.
pub async fn run(store: &dyn Store) -> Result<()> {
    let labels = menu::labels();
    loop {
        let choice = prompt::main_menu(&labels)?;
        let (_, command) = menu::MENU[choice];
        if command == Command::Quit {
            return Ok(());
        }

        if let Err(e) = dispatch(store, command).await {
            if e.is_fatal() {
                return Err(e);
            }
            tracing::debug!(error = %e, "action failed");
            output::error(&format!("ERROR: {e}"));
        }
    }
}

async fn dispatch(store: &dyn Store, command: Command) -> Result<()> {
    match command {
        Command::ViewEmployees => print_rows(&store.employees().await?),
        Command::ViewEmployeesByDepartment => view_by_department(store).await?,
        Command::ViewEmployeesByManager => view_by_manager(store).await?,
        Command::AddEmployee => add_employee(store).await?,
        Command::RemoveEmployee => remove_employee(store).await?,
        Command::UpdateEmployeeRole => update_role(store).await?,
        Command::UpdateEmployeeManager => update_manager(store).await?,
        Command::ViewRoles => print_rows(&store.roles().await?),
        Command::AddRole => add_role(store).await?,
        Command::RemoveRole => remove_role(store).await?,
        Command::ViewDepartments => print_rows(&store.departments().await?),
        Command::ViewDepartmentBudget => view_budget(store).await?,
        Command::AddDepartment => add_department(store).await?,
        Command::RemoveDepartment => remove_department(store).await?,
        Command::Quit => {}
    }
    Ok(())
}

// ── Shared routines ──

fn print_rows<T: Tabular>(rows: &[T]) {
    if rows.is_empty() {
        output::error("No Records Found!");
    } else {
        println!("{}", render(rows));
    }
}

/// Secondary selection: present the labels, hand back the matching row.
/// Aborts with a message on an empty list, silently on cancellation.
fn pick_from<T>(display: &str, mut items: Vec<T>, labels: Vec<String>) -> Result<Option<T>> {
    if items.is_empty() {
        output::error("No Items Found!");
        return Ok(None);
    }
    match prompt::choose(display, &labels)? {
        Some(idx) => Ok(Some(items.swap_remove(idx))),
        None => Ok(None),
    }
}

/// Report an affected-row count. Zero means the target vanished between the
/// selection and the write — a distinct "not found", never an error.
fn report_write(count: u64, success: &str, target: &str) {
    if count == 0 {
        output::error(&format!("{target} was not found"));
    } else {
        output::info(success);
    }
}

// ── Filtered views ──

async fn view_by_department(store: &dyn Store) -> Result<()> {
    let departments = store.departments().await?;
    let labels: Vec<String> = departments.iter().map(|d| d.name.clone()).collect();
    let Some(dept) = pick_from("Select a Department", departments, labels)? else {
        return Ok(());
    };
    print_rows(&store.employees_by_department(&dept.name).await?);
    Ok(())
}

async fn view_by_manager(store: &dyn Store) -> Result<()> {
    let managers = store.managers().await?;
    let labels: Vec<String> = managers.iter().map(ManagerRow::full_name).collect();
    let Some(manager) = pick_from("Select a Manager", managers, labels)? else {
        return Ok(());
    };
    print_rows(&store.employees_by_manager(manager.id).await?);
    Ok(())
}

async fn view_budget(store: &dyn Store) -> Result<()> {
    let departments = store.departments().await?;
    let labels: Vec<String> = departments.iter().map(|d| d.name.clone()).collect();
    let Some(dept) = pick_from("Select a Department", departments, labels)? else {
        return Ok(());
    };
    match store.department_budget(dept.id).await? {
        Some(row) => print_rows(&[row]),
        None => output::error(&format!("No filled positions in {}", dept.name)),
    }
    Ok(())
}

// ── Adds ──

async fn add_employee(store: &dyn Store) -> Result<()> {
    // Both lists feed the prompts; no ordering dependency between the two.
    let (employees, roles) = tokio::try_join!(store.employees(), store.roles())?;
    if roles.is_empty() {
        output::error("You must define at least 1 role before adding employees");
        return Ok(());
    }

    let first_name = prompt::text("What is the employee's first name?")?;
    let last_name = prompt::text("What is the employee's last name?")?;

    let role_labels: Vec<String> = roles.iter().map(|r| r.title.clone()).collect();
    let Some(role_idx) = prompt::choose("What is the employee's role?", &role_labels)? else {
        return Ok(());
    };

    let mut manager_labels = vec!["[None]".to_string()];
    manager_labels.extend(employees.iter().map(EmployeeRow::full_name));
    let manager_id = match prompt::choose("Who is the employee's manager?", &manager_labels)? {
        None => return Ok(()),
        Some(0) => None,
        Some(idx) => Some(employees[idx - 1].id),
    };

    let new = NewEmployee {
        first_name,
        last_name,
        role_id: roles[role_idx].id,
        manager_id,
    };
    let id = store.add_employee(&new).await?;
    output::info(&format!(
        "Employee Added: {} {} (ID={id})",
        new.first_name, new.last_name
    ));
    Ok(())
}

async fn add_role(store: &dyn Store) -> Result<()> {
    let departments = store.departments().await?;
    if departments.is_empty() {
        output::error("You must add a department first");
        return Ok(());
    }

    let title = prompt::text("What is the job title?")?;
    let salary = prompt::salary("What is the annual salary?")?;

    let labels: Vec<String> = departments.iter().map(|d| d.name.clone()).collect();
    let Some(idx) = prompt::choose("What department is the role under?", &labels)? else {
        return Ok(());
    };

    let new = NewRole {
        title,
        salary,
        department_id: departments[idx].id,
    };
    let id = store.add_role(&new).await?;
    output::info(&format!("Role Added: {} (ID={id})", new.title));
    Ok(())
}

async fn add_department(store: &dyn Store) -> Result<()> {
    let name = prompt::text("What is the department name?")?;
    let id = store.add_department(&name).await?;
    output::info(&format!("Department Added: {name} (ID={id})"));
    Ok(())
}

// ── Updates ──

async fn update_role(store: &dyn Store) -> Result<()> {
    let employees = store.employees().await?;
    let labels: Vec<String> = employees.iter().map(EmployeeRow::full_name).collect();
    let Some(employee) = pick_from("Select an Employee", employees, labels)? else {
        return Ok(());
    };

    let roles = store.roles().await?;
    let role_labels: Vec<String> = roles.iter().map(|r| r.title.clone()).collect();
    let Some(role) = pick_from("Select a Role", roles, role_labels)? else {
        return Ok(());
    };

    let count = store.set_employee_role(employee.id, role.id).await?;
    report_write(
        count,
        &format!("Updated {} to {}", employee.full_name(), role.title),
        &employee.full_name(),
    );
    Ok(())
}

async fn update_manager(store: &dyn Store) -> Result<()> {
    let employees = store.employees().await?;
    let labels: Vec<String> = employees.iter().map(EmployeeRow::full_name).collect();
    let Some(employee) = pick_from("Select an Employee", employees, labels)? else {
        return Ok(());
    };

    // An employee cannot manage themselves.
    let candidates: Vec<EmployeeRow> = store
        .employees()
        .await?
        .into_iter()
        .filter(|e| e.id != employee.id)
        .collect();
    let mut manager_labels = vec!["[None]".to_string()];
    manager_labels.extend(candidates.iter().map(EmployeeRow::full_name));
    let manager_id = match prompt::choose("Select a Manager", &manager_labels)? {
        None => return Ok(()),
        Some(0) => None,
        Some(idx) => Some(candidates[idx - 1].id),
    };

    let count = store.set_employee_manager(employee.id, manager_id).await?;
    report_write(
        count,
        &format!("Updated manager for {}", employee.full_name()),
        &employee.full_name(),
    );
    Ok(())
}

// ── Removes ──

async fn remove_employee(store: &dyn Store) -> Result<()> {
    let employees = store.employees().await?;
    let labels: Vec<String> = employees.iter().map(EmployeeRow::full_name).collect();
    let Some(employee) = pick_from("Select an Employee to Remove", employees, labels)? else {
        return Ok(());
    };
    let count = store.delete_employee(employee.id).await?;
    report_write(
        count,
        &format!("Removed {}", employee.full_name()),
        &employee.full_name(),
    );
    Ok(())
}

async fn remove_role(store: &dyn Store) -> Result<()> {
    let roles = store.roles().await?;
    let labels: Vec<String> = roles.iter().map(|r| r.title.clone()).collect();
    let Some(role) = pick_from("Select a Role to Remove", roles, labels)? else {
        return Ok(());
    };
    let count = store.delete_role(role.id).await?;
    report_write(count, &format!("Removed {}", role.title), &role.title);
    Ok(())
}

async fn remove_department(store: &dyn Store) -> Result<()> {
    let departments = store.departments().await?;
    let labels: Vec<String> = departments.iter().map(|d| d.name.clone()).collect();
    let Some(dept) = pick_from("Select a Department to Remove", departments, labels)? else {
        return Ok(());
    };
    let count = store.delete_department(dept.id).await?;
    report_write(count, &format!("Removed {}", dept.name), &dept.name);
    Ok(())
}

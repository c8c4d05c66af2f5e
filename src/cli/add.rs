use std::io::{BufRead, Write};

use roster::{DepartmentName, Employee, RosterStore, WriteError};
use tracing::instrument;

use crate::cli::console::{Console, PromptError};

/// Creates a new department and records its employees.
///
/// A blank department name cancels the operation, and an existing department
/// is never overwritten. Write failures are reported and the collected
/// employees are discarded.
#[instrument(skip_all)]
pub fn run<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    store: &impl RosterStore,
) -> Result<(), PromptError> {
    let palette = console.palette();
    console.say(palette.info("\n=== Add New Department ==="))?;

    let Some(name) = console.optional_text("Enter department name: ")? else {
        console.say(palette.warning("Department name can't be empty!"))?;
        return Ok(());
    };
    let name = DepartmentName::new(name);

    let key = name.key();
    if store.exists(&key) {
        tracing::debug!(%key, "department already exists");
        report_duplicate(console, &name)?;
        return Ok(());
    }

    let count = console.integer_at_least("How many employees would you like to add? ", 1)?;
    console.say(format_args!("\nAdding {count} employee(s) to {name}:"))?;

    let mut employees = Vec::new();
    for number in 1..=count {
        console.say(format_args!("\n--- Employee {number} ---"))?;
        employees.push(read_employee(console)?);
    }

    match store.write(&key, &employees) {
        Ok(path) => {
            tracing::info!(%key, count, "department created");
            console.say(palette.success(&format!(
                "\nSuccess! Created '{name}' department with {count} employee(s)."
            )))?;
            console.say(format_args!("Data saved to: {}", path.display()))?;
        }
        // Another writer created the file after the existence check.
        Err(WriteError::AlreadyExists { .. }) => report_duplicate(console, &name)?,
        Err(e) => {
            tracing::error!(%key, "failed to write roster: {e}");
            console.say(palette.warning(&format!("Error: {e}")))?;
        }
    }

    Ok(())
}

fn read_employee<R: BufRead, W: Write>(console: &mut Console<R, W>) -> Result<Employee, PromptError> {
    let first_name = console.text("First name: ", "First name can't be empty!")?;
    let last_name = console.text("Last name: ", "Last name can't be empty!")?;
    let employee_id = console.text("Employee ID: ", "Employee ID can't be empty!")?;
    let seniority = console.seniority()?;
    Ok(Employee::new(first_name, last_name, employee_id, seniority))
}

fn report_duplicate<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    name: &DepartmentName,
) -> Result<(), PromptError> {
    let palette = console.palette();
    console.say(palette.warning(&format!("Error: Department '{name}' already exists!")))?;
    console.say(palette.dim(
        "   Choose a different name or use 'View Department' to see existing data.",
    ))
}

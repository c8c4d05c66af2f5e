use std::io::{BufRead, Write};

use roster::{DepartmentName, Employee, ReadError, RosterStore};
use tracing::instrument;

use crate::cli::console::{Console, PromptError};

const RULE_WIDTH: usize = 60;

/// Displays a department's roster.
///
/// If the department does not exist the user may try another name. Any other
/// read failure is reported and ends the operation.
#[instrument(skip_all)]
pub fn run<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    store: &impl RosterStore,
) -> Result<(), PromptError> {
    let palette = console.palette();
    console.say(palette.info("\n=== View Department Roster ==="))?;

    loop {
        let name = DepartmentName::new(console.text(
            "Enter department name to view: ",
            "Please enter a department name!",
        )?);
        let key = name.key();

        match store.read(&key) {
            Ok(lines) => return show(console, &name, &lines),
            Err(ReadError::NotFound { .. }) => {
                tracing::debug!(%key, "department not found");
                console.say(palette.warning(&format!("Error: Department '{name}' not found!")))?;
                if !console.confirm("   Try another department? (y/n): ")? {
                    console.say(palette.dim("   Returning to main menu..."))?;
                    return Ok(());
                }
            }
            Err(e) => {
                tracing::error!(%key, "failed to read roster: {e}");
                return console.say(palette.warning(&format!("Error: {e}")));
            }
        }
    }
}

/// Prints the non-blank lines of a roster between rules.
///
/// Each record is numbered by its line in the file, so blank lines leave gaps
/// in the numbering. The total counts only non-blank lines.
fn show<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    name: &DepartmentName,
    lines: &[String],
) -> Result<(), PromptError> {
    let records: Vec<(usize, &str)> = lines
        .iter()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(index, line)| (index + 1, line.as_str()))
        .collect();

    let rule = "=".repeat(RULE_WIDTH);
    console.say(format_args!(
        "\nEmployee Roster for '{}':",
        name.title_case()
    ))?;
    console.say(&rule)?;

    if records.is_empty() {
        console.say("   (No employees found in this department)")?;
    }
    for &(number, record) in &records {
        if let Err(e) = record.parse::<Employee>() {
            tracing::warn!("Malformed record on line {number} of roster for '{name}': {e}");
        }
        console.say(format_args!("   {number:2}. {record}"))?;
    }

    console.say(&rule)?;
    console.say(format_args!("   Total employees: {}", records.len()))
}

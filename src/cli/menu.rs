use std::io::{BufRead, Write};

use roster::RosterStore;

use crate::cli::{
    add,
    console::{Console, PromptError},
    view,
};

/// Printed when the session is cut short by an interrupt or closed input.
pub const INTERRUPTED: &str = "\n\nProgram interrupted. Goodbye!";

/// An entry on the main menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Add,
    View,
    Exit,
}

impl MenuChoice {
    /// Only the literal option numbers are accepted.
    pub fn parse(input: &str) -> Option<Self> {
        match input {
            "1" => Some(Self::Add),
            "2" => Some(Self::View),
            "3" => Some(Self::Exit),
            _ => None,
        }
    }
}

enum Flow {
    Continue,
    Exit,
}

/// Runs the main menu until the user exits or input ends.
///
/// Failures inside an operation are reported and the menu is shown again.
///
/// # Errors
///
/// Returns an error only if a failure cannot even be reported, which means
/// the console itself is unusable.
pub fn run<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    store: &impl RosterStore,
) -> Result<(), PromptError> {
    console.say("Welcome to the Employee Roster Manager!")?;
    console.say("Your one-stop shop for department employee tracking")?;

    loop {
        match step(console, store) {
            Ok(Flow::Continue) => {}
            Ok(Flow::Exit) => return Ok(()),
            Err(PromptError::Closed) => {
                tracing::debug!("input closed");
                return console.say(INTERRUPTED);
            }
            Err(PromptError::Io(e)) => {
                tracing::error!("unexpected error: {e}");
                console.say(format_args!("Unexpected error: {e}"))?;
                console.say("The program will continue, but you might want to restart.")?;
            }
        }
    }
}

fn step<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    store: &impl RosterStore,
) -> Result<Flow, PromptError> {
    show_menu(console)?;

    let answer = console.optional_text("Choose an option (1-3): ")?;
    match answer.and_then(|answer| MenuChoice::parse(answer.as_str())) {
        Some(MenuChoice::Add) => add::run(console, store)?,
        Some(MenuChoice::View) => view::run(console, store)?,
        Some(MenuChoice::Exit) => {
            let palette = console.palette();
            console.say(palette.success("\nThanks for using Employee Roster Manager!"))?;
            console.say("Have a great day!")?;
            return Ok(Flow::Exit);
        }
        None => {
            let palette = console.palette();
            console.say(palette.warning("Invalid choice! Please enter 1, 2, or 3."))?;
        }
    }
    Ok(Flow::Continue)
}

fn show_menu<R: BufRead, W: Write>(console: &mut Console<R, W>) -> Result<(), PromptError> {
    let rule = "=".repeat(50);
    console.say(format_args!("\n{rule}"))?;
    console.say("EMPLOYEE ROSTER MANAGER")?;
    console.say(&rule)?;
    console.say("1. Add New Department")?;
    console.say("2. View Existing Department")?;
    console.say("3. Exit Program")?;
    console.say("-".repeat(50))
}

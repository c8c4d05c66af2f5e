//! Line-oriented prompts with validation.
//!
//! Every prompt trims its input and re-prompts until the input is valid.
//! Nothing here requires a terminal; any [`BufRead`]/[`Write`] pair works.

use std::{
    fmt,
    io::{self, BufRead, StdinLock, Stdout, Write},
    num::IntErrorKind,
};

use non_empty_string::NonEmptyString;
use roster::Seniority;

use crate::cli::terminal::Palette;

/// Error from an interactive prompt.
#[derive(Debug, thiserror::Error)]
pub enum PromptError {
    /// Input reached end-of-file; no answer will ever arrive.
    #[error("input closed")]
    Closed,

    /// Reading input or writing output failed.
    #[error(transparent)]
    Io(#[from] io::Error),
}

/// An interactive session over an input and an output stream.
pub struct Console<R, W> {
    input: R,
    output: W,
    palette: Palette,
}

impl Console<StdinLock<'static>, Stdout> {
    /// A console on the process's standard input and output.
    pub fn stdio(palette: Palette) -> Self {
        Self::new(io::stdin().lock(), io::stdout(), palette)
    }
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub const fn new(input: R, output: W, palette: Palette) -> Self {
        Self {
            input,
            output,
            palette,
        }
    }

    pub const fn palette(&self) -> Palette {
        self.palette
    }

    /// Writes one line of output.
    pub fn say(&mut self, line: impl fmt::Display) -> Result<(), PromptError> {
        writeln!(self.output, "{line}")?;
        Ok(())
    }

    /// Shows `prompt` and reads one trimmed line.
    fn ask(&mut self, prompt: &str) -> Result<String, PromptError> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(PromptError::Closed);
        }
        Ok(line.trim().to_string())
    }

    /// Reads one line, returning `None` if it is blank.
    pub fn optional_text(&mut self, prompt: &str) -> Result<Option<NonEmptyString>, PromptError> {
        Ok(NonEmptyString::new(self.ask(prompt)?).ok())
    }

    /// Re-prompts until a non-blank line is entered, reporting
    /// `empty_message` after each blank one.
    pub fn text(&mut self, prompt: &str, empty_message: &str) -> Result<NonEmptyString, PromptError> {
        loop {
            if let Some(text) = self.optional_text(prompt)? {
                return Ok(text);
            }
            let message = self.palette.warning(empty_message);
            self.say(message)?;
        }
    }

    /// Re-prompts until an integer no smaller than `min` is entered.
    ///
    /// There is no upper bound.
    pub fn integer_at_least(&mut self, prompt: &str, min: i64) -> Result<i64, PromptError> {
        loop {
            let answer = self.ask(prompt)?;
            let message = if answer.is_empty() {
                "Please enter a number, don't leave it blank.".to_string()
            } else {
                match answer.parse::<i64>() {
                    Ok(value) if value >= min => return Ok(value),
                    Ok(_) => format!("Please enter a number >= {min}."),
                    Err(e) => match e.kind() {
                        IntErrorKind::PosOverflow => {
                            "That number is too large. Try a smaller one.".to_string()
                        }
                        IntErrorKind::NegOverflow => format!("Please enter a number >= {min}."),
                        _ => "That's not a valid number. Try again!".to_string(),
                    },
                }
            };
            let message = self.palette.warning(&message);
            self.say(message)?;
        }
    }

    /// Lists the seniority levels and re-prompts until one is chosen by
    /// position or by case-insensitive name.
    ///
    /// The returned level is canonically cased regardless of how it was
    /// entered.
    pub fn seniority(&mut self) -> Result<Seniority, PromptError> {
        self.say("\nAvailable Seniority Levels:")?;
        for level in Seniority::ALL {
            self.say(format_args!("   {}. {level}", level.position()))?;
        }

        loop {
            let answer = self.ask("\nEnter seniority level (name or number): ")?;
            let message = match parse_seniority(&answer) {
                Ok(level) => return Ok(level),
                Err(message) => message,
            };
            let message = self.palette.warning(&message);
            self.say(message)?;
        }
    }

    /// Asks a yes/no question. Only `y` or `yes`, in any case, is affirmative.
    pub fn confirm(&mut self, prompt: &str) -> Result<bool, PromptError> {
        let answer = self.ask(prompt)?.to_lowercase();
        Ok(matches!(answer.as_str(), "y" | "yes"))
    }

    #[cfg(test)]
    pub const fn output(&self) -> &W {
        &self.output
    }
}

/// Resolves a seniority answer, or describes why it was rejected.
fn parse_seniority(answer: &str) -> Result<Seniority, String> {
    if answer.is_empty() {
        return Err("Please enter something! Can't leave this blank.".to_string());
    }

    let out_of_range = || {
        format!(
            "'{answer}' is out of range. Number must be between 1 and {}.",
            Seniority::ALL.len()
        )
    };
    match answer.parse::<i64>() {
        Ok(position) => {
            return usize::try_from(position)
                .ok()
                .and_then(Seniority::from_position)
                .ok_or_else(out_of_range);
        }
        Err(e) if matches!(e.kind(), IntErrorKind::PosOverflow | IntErrorKind::NegOverflow) => {
            return Err(out_of_range());
        }
        Err(_) => {}
    }

    answer
        .parse()
        .map_err(|e| format!("{e}. Please try again."))
}

#[cfg(test)]
pub mod tests {
    use test_case::test_case;

    use super::*;

    /// A console reading `input` and recording output in memory.
    pub fn scripted(input: &str) -> Console<&[u8], Vec<u8>> {
        scripted_bytes(input.as_bytes())
    }

    /// A console reading raw bytes, which need not be valid UTF-8.
    pub fn scripted_bytes(input: &[u8]) -> Console<&[u8], Vec<u8>> {
        Console::new(input, Vec::new(), Palette::new(false))
    }

    /// Everything written to a scripted console so far.
    pub fn transcript(console: &Console<&[u8], Vec<u8>>) -> String {
        String::from_utf8(console.output().clone()).unwrap()
    }

    #[test]
    fn integer_accepts_first_valid_value() {
        let mut console = scripted("\nabc\n0\n-4\n3\n");

        let value = console.integer_at_least("Count? ", 1).unwrap();

        assert_eq!(value, 3);
        let output = transcript(&console);
        assert_eq!(output.matches("Count? ").count(), 5);
        assert!(output.contains("Please enter a number, don't leave it blank."));
        assert!(output.contains("That's not a valid number. Try again!"));
        assert_eq!(output.matches("Please enter a number >= 1.").count(), 2);
    }

    #[test]
    fn integer_respects_custom_minimum() {
        let mut console = scripted("4\n5\n");
        assert_eq!(console.integer_at_least("? ", 5).unwrap(), 5);
        assert!(transcript(&console).contains("Please enter a number >= 5."));
    }

    #[test]
    fn integer_has_no_upper_bound() {
        let mut console = scripted("  1000000  \n");
        assert_eq!(console.integer_at_least("? ", 1).unwrap(), 1_000_000);
    }

    #[test]
    fn integer_overflow_is_not_called_invalid() {
        let mut console = scripted("99999999999999999999\n-99999999999999999999\n2\n");

        assert_eq!(console.integer_at_least("? ", 1).unwrap(), 2);

        let output = transcript(&console);
        assert!(output.contains("That number is too large. Try a smaller one."));
        assert!(output.contains("Please enter a number >= 1."));
        assert!(!output.contains("That's not a valid number."));
    }

    #[test]
    fn text_trims_and_reprompts_on_blank() {
        let mut console = scripted("\n   \n  Jane  \n");

        let text = console.text("First name: ", "First name can't be empty!").unwrap();

        assert_eq!(text.as_str(), "Jane");
        assert_eq!(
            transcript(&console).matches("First name can't be empty!").count(),
            2
        );
    }

    #[test]
    fn optional_text_returns_none_for_blank() {
        let mut console = scripted("   \n");
        assert_eq!(console.optional_text("Name: ").unwrap(), None);
    }

    #[test_case("3", Seniority::Middle; "by position")]
    #[test_case("1", Seniority::Entry; "first position")]
    #[test_case("6", Seniority::Executive; "last position")]
    #[test_case("senior", Seniority::Senior; "lowercase name")]
    #[test_case("EXECUTIVE", Seniority::Executive; "uppercase name")]
    #[test_case("  Junior  ", Seniority::Junior; "padded name")]
    fn seniority_is_canonicalised(answer: &str, expected: Seniority) {
        let input = format!("{answer}\n");
        let mut console = scripted(&input);
        assert_eq!(console.seniority().unwrap(), expected);
    }

    #[test]
    fn seniority_lists_levels_and_names_bad_input() {
        let mut console = scripted("\n0\n7\nintern\nmanagement\n");

        assert_eq!(console.seniority().unwrap(), Seniority::Management);

        let output = transcript(&console);
        assert!(output.contains("Available Seniority Levels:\n   1. Entry\n   2. Junior\n"));
        assert!(output.contains("   6. Executive\n"));
        assert!(output.contains("Please enter something! Can't leave this blank."));
        assert!(output.contains("'0' is out of range. Number must be between 1 and 6."));
        assert!(output.contains("'7' is out of range. Number must be between 1 and 6."));
        assert!(output.contains("'intern' isn't a valid seniority level. Please try again."));
    }

    #[test_case("99999999999999999999"; "too large")]
    #[test_case("-99999999999999999999"; "too small")]
    fn seniority_overflow_is_out_of_range(answer: &str) {
        let input = format!("{answer}\n2\n");
        let mut console = scripted(&input);

        assert_eq!(console.seniority().unwrap(), Seniority::Junior);

        let output = transcript(&console);
        assert!(output.contains(&format!(
            "'{answer}' is out of range. Number must be between 1 and 6."
        )));
        assert!(!output.contains("isn't a valid seniority level"));
    }

    #[test_case("y", true; "y")]
    #[test_case("YES", true; "uppercase yes")]
    #[test_case(" Yes ", true; "padded yes")]
    #[test_case("n", false; "n")]
    #[test_case("", false; "blank")]
    #[test_case("yep", false; "anything else")]
    fn confirm_accepts_only_y_or_yes(answer: &str, expected: bool) {
        let input = format!("{answer}\n");
        let mut console = scripted(&input);
        assert_eq!(console.confirm("Again? ").unwrap(), expected);
    }

    #[test]
    fn end_of_input_is_closed() {
        let mut console = scripted("\n");
        let error = console.text("Name: ", "Name can't be empty!").unwrap_err();
        assert!(matches!(error, PromptError::Closed));
    }
}

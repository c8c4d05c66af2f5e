use std::{fmt, str::FromStr};

use non_empty_string::NonEmptyString;

use crate::domain::{InvalidSeniority, Seniority};

/// Separator between fields of a stored record.
///
/// Fields are not escaped, so a comma inside a field cannot be told apart
/// from a separator when reading a record back.
pub const FIELD_SEPARATOR: char = ',';

/// A single employee record.
///
/// On disk a record is one line with the fields in a fixed order:
/// `first,last,id,seniority`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Employee {
    first_name: NonEmptyString,
    last_name: NonEmptyString,
    employee_id: NonEmptyString,
    seniority: Seniority,
}

impl Employee {
    /// Creates a record from pre-validated fields.
    #[must_use]
    pub const fn new(
        first_name: NonEmptyString,
        last_name: NonEmptyString,
        employee_id: NonEmptyString,
        seniority: Seniority,
    ) -> Self {
        Self {
            first_name,
            last_name,
            employee_id,
            seniority,
        }
    }

    /// Returns the first name.
    #[must_use]
    pub fn first_name(&self) -> &str {
        self.first_name.as_str()
    }

    /// Returns the last name.
    #[must_use]
    pub fn last_name(&self) -> &str {
        self.last_name.as_str()
    }

    /// Returns the employee ID. IDs are not required to be unique.
    #[must_use]
    pub fn employee_id(&self) -> &str {
        self.employee_id.as_str()
    }

    /// Returns the seniority level.
    #[must_use]
    pub const fn seniority(&self) -> Seniority {
        self.seniority
    }
}

impl fmt::Display for Employee {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{FIELD_SEPARATOR}{}{FIELD_SEPARATOR}{}{FIELD_SEPARATOR}{}",
            self.first_name, self.last_name, self.employee_id, self.seniority
        )
    }
}

impl FromStr for Employee {
    type Err = ParseEmployeeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let fields: Vec<&str> = s.split(FIELD_SEPARATOR).collect();
        let &[first, last, id, seniority] = fields.as_slice() else {
            return Err(ParseEmployeeError::FieldCount(fields.len()));
        };

        let field = |name: &'static str, value: &str| {
            NonEmptyString::new(value.to_string()).map_err(|_| ParseEmployeeError::EmptyField(name))
        };

        Ok(Self {
            first_name: field("first name", first)?,
            last_name: field("last name", last)?,
            employee_id: field("employee ID", id)?,
            seniority: seniority.parse()?,
        })
    }
}

/// Error returned when a stored line is not a well-formed record.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ParseEmployeeError {
    /// The line did not split into exactly four fields.
    #[error("expected 4 comma-separated fields, found {0}")]
    FieldCount(usize),

    /// A required field was empty.
    #[error("the {0} field is empty")]
    EmptyField(&'static str),

    /// The last field was not a seniority level.
    #[error(transparent)]
    Seniority(#[from] InvalidSeniority),
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::*;

    fn text(s: &str) -> NonEmptyString {
        NonEmptyString::new(s.to_string()).unwrap()
    }

    #[test]
    fn displays_fields_in_storage_order() {
        let employee = Employee::new(text("John"), text("Doe"), text("E001"), Seniority::Senior);
        assert_eq!(employee.to_string(), "John,Doe,E001,Senior");
    }

    #[test]
    fn parses_stored_line() {
        let employee: Employee = "Jane,Smith,E002,Middle".parse().unwrap();
        assert_eq!(employee.first_name(), "Jane");
        assert_eq!(employee.last_name(), "Smith");
        assert_eq!(employee.employee_id(), "E002");
        assert_eq!(employee.seniority(), Seniority::Middle);
    }

    #[test_case("John,Doe,E001", ParseEmployeeError::FieldCount(3); "too few fields")]
    #[test_case("John,Van,Doe,E001,Senior", ParseEmployeeError::FieldCount(5); "embedded comma")]
    #[test_case(",Doe,E001,Senior", ParseEmployeeError::EmptyField("first name"); "empty first name")]
    #[test_case("John,Doe,,Senior", ParseEmployeeError::EmptyField("employee ID"); "empty id")]
    fn rejects_malformed_lines(line: &str, expected: ParseEmployeeError) {
        assert_eq!(line.parse::<Employee>().unwrap_err(), expected);
    }

    #[test]
    fn rejects_unknown_seniority() {
        let error = "John,Doe,E001,Intern".parse::<Employee>().unwrap_err();
        assert_eq!(
            error,
            ParseEmployeeError::Seniority(InvalidSeniority("Intern".to_string()))
        );
    }
}

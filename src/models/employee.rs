//! Employee model.
//!
//! This module defines the [`Employee`] record supplied by the external record store.

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// Represents an employee whose vacations are scored and ranked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    /// Unique identifier for the employee.
    pub id: u64,
    /// The employee's display name. Rankings iterate employees alphabetically by name.
    pub name: String,
}

impl Employee {
    /// Creates an employee, trimming the name and rejecting blank names.
    ///
    /// # Examples
    ///
    /// ```
    /// use vacation_points::models::Employee;
    ///
    /// let employee = Employee::new(1, "  Ana Souza ").unwrap();
    /// assert_eq!(employee.name, "Ana Souza");
    ///
    /// assert!(Employee::new(2, "   ").is_err());
    /// ```
    pub fn new(id: u64, name: impl AsRef<str>) -> EngineResult<Self> {
        let name = name.as_ref().trim();
        if name.is_empty() {
            return Err(EngineError::InvalidEmployee {
                field: "name".to_string(),
                message: "must not be blank".to_string(),
            });
        }

        Ok(Self {
            id,
            name: name.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_trims_name() {
        let employee = Employee::new(1, "\tMaria  ").unwrap();
        assert_eq!(employee.id, 1);
        assert_eq!(employee.name, "Maria");
    }

    #[test]
    fn test_new_rejects_blank_name() {
        match Employee::new(1, "") {
            Err(EngineError::InvalidEmployee { field, .. }) => assert_eq!(field, "name"),
            other => panic!("Expected InvalidEmployee, got {:?}", other),
        }
    }

    #[test]
    fn test_new_rejects_whitespace_name() {
        assert!(Employee::new(1, "   ").is_err());
    }

    #[test]
    fn test_deserialize_employee() {
        let json = r#"{"id": 12, "name": "Carlos"}"#;
        let employee: Employee = serde_json::from_str(json).unwrap();
        assert_eq!(employee.id, 12);
        assert_eq!(employee.name, "Carlos");
    }

    #[test]
    fn test_serialize_employee() {
        let employee = Employee::new(3, "Beatriz").unwrap();
        let json = serde_json::to_string(&employee).unwrap();
        assert_eq!(json, r#"{"id":3,"name":"Beatriz"}"#);
    }
}

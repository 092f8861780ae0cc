use crate::domain::common::validation::{
    optional_date, require_date, require_non_negative, require_ref, require_text,
};
use crate::domain::common::AggregateRoot;
use crate::enums::AttendanceStatus;
use serde::{Deserialize, Serialize};

// ============================================================================
// Employee
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    #[serde(default)]
    pub id: Option<i64>,
    pub full_name: String,
    #[serde(default)]
    pub position: String,
    #[serde(default)]
    pub department: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub hire_date: Option<String>,
    #[serde(default)]
    pub salary: f64,
    #[serde(default = "default_active")]
    pub is_active: bool,
}

fn default_active() -> bool {
    true
}

impl Default for Employee {
    fn default() -> Self {
        Self {
            id: None,
            full_name: String::new(),
            position: String::new(),
            department: String::new(),
            phone: String::new(),
            hire_date: None,
            salary: 0.0,
            is_active: true,
        }
    }
}

impl AggregateRoot for Employee {
    type Id = i64;

    fn id(&self) -> Option<i64> {
        self.id
    }

    fn validate(&self) -> Result<(), String> {
        require_text(&self.full_name, "Full name")?;
        require_text(&self.position, "Position")?;
        require_non_negative(self.salary, "Salary")?;
        optional_date(&self.hire_date, "Hire date")
    }

    fn aggregate_index() -> &'static str {
        "a008"
    }

    fn collection_name() -> &'static str {
        "employees"
    }

    fn element_name() -> &'static str {
        "Employee"
    }

    fn list_name() -> &'static str {
        "Employees"
    }
}

// ============================================================================
// Attendance
// ============================================================================

/// One employee's attendance mark for one day
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Attendance {
    #[serde(default)]
    pub id: Option<i64>,
    pub employee_id: Option<i64>,
    pub date: String,
    #[serde(default)]
    pub status: AttendanceStatus,
    #[serde(default)]
    pub check_in: Option<String>,
    #[serde(default)]
    pub check_out: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
}

impl AggregateRoot for Attendance {
    type Id = i64;

    fn id(&self) -> Option<i64> {
        self.id
    }

    fn validate(&self) -> Result<(), String> {
        require_ref(self.employee_id, "Employee")?;
        require_date(&self.date, "Date")
    }

    fn aggregate_index() -> &'static str {
        "a008"
    }

    fn collection_name() -> &'static str {
        "attendance"
    }

    fn element_name() -> &'static str {
        "Attendance record"
    }

    fn list_name() -> &'static str {
        "Attendance"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn employee_requires_name_and_position() {
        let mut e = Employee {
            full_name: "Jane Doe".into(),
            ..Default::default()
        };
        assert_eq!(e.validate(), Err("Position is required".to_string()));
        e.position = "Driver".into();
        assert!(e.validate().is_ok());
        e.hire_date = Some("yesterday".into());
        assert!(e.validate().is_err());
    }

    #[test]
    fn attendance_defaults_to_present() {
        let a: Attendance =
            serde_json::from_str(r#"{"employee_id": 3, "date": "2024-08-01"}"#).unwrap();
        assert_eq!(a.status, AttendanceStatus::Present);
        assert!(a.validate().is_ok());
    }
}

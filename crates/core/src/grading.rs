//! Grading domain model: grading-system types, periods, component types,
//! and the fixed component plan used by the final-only scheme.

use serde::{Deserialize, Serialize};

/// How a class computes grades.
///
/// Stored as TEXT in `classes.grading_system_type`; the string forms here
/// must match the `ck_classes_grading_system_type` check constraint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GradingSystemType {
    /// Weighted numeric components managed by the teacher.
    Numerical,
    /// A fixed three-component scheme: attendance for prelim and midterm,
    /// a single manually-scored final grade carrying all the weight.
    FinalOnlyNumerical,
}

impl GradingSystemType {
    /// The TEXT form stored in the database.
    pub fn as_str(self) -> &'static str {
        match self {
            GradingSystemType::Numerical => "numerical",
            GradingSystemType::FinalOnlyNumerical => "final_only_numerical",
        }
    }

    /// Parse the TEXT form. Returns `None` for unknown values.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "numerical" => Some(GradingSystemType::Numerical),
            "final_only_numerical" => Some(GradingSystemType::FinalOnlyNumerical),
            _ => None,
        }
    }

    /// Whether this scheme's components are fixed and may not be edited
    /// individually.
    pub fn has_locked_components(self) -> bool {
        matches!(self, GradingSystemType::FinalOnlyNumerical)
    }
}

impl std::fmt::Display for GradingSystemType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Grading period a component belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GradingPeriod {
    Prelim,
    Midterm,
    Final,
}

impl GradingPeriod {
    pub fn as_str(self) -> &'static str {
        match self {
            GradingPeriod::Prelim => "prelim",
            GradingPeriod::Midterm => "midterm",
            GradingPeriod::Final => "final",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "prelim" => Some(GradingPeriod::Prelim),
            "midterm" => Some(GradingPeriod::Midterm),
            "final" => Some(GradingPeriod::Final),
            _ => None,
        }
    }
}

/// How a component's score is produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComponentType {
    /// Derived from attendance records.
    Attendance,
    /// Entered by the teacher.
    Manual,
}

impl ComponentType {
    pub fn as_str(self) -> &'static str {
        match self {
            ComponentType::Attendance => "attendance",
            ComponentType::Manual => "manual",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "attendance" => Some(ComponentType::Attendance),
            "manual" => Some(ComponentType::Manual),
            _ => None,
        }
    }
}

/// Blueprint for one grade component row, independent of any class.
#[derive(Debug, Clone, PartialEq)]
pub struct ComponentPlan {
    pub component_name: &'static str,
    pub period: GradingPeriod,
    pub component_type: ComponentType,
    pub max_score: f64,
    pub is_attendance_based: bool,
    pub is_locked: bool,
    pub weight: f64,
}

/// The fixed rows a `final_only_numerical` class must carry.
///
/// Switching a class to that scheme deletes all of its components and
/// inserts exactly these three, in this order.
pub fn final_only_component_plan() -> [ComponentPlan; 3] {
    [
        ComponentPlan {
            component_name: "Prelim",
            period: GradingPeriod::Prelim,
            component_type: ComponentType::Attendance,
            max_score: 100.0,
            is_attendance_based: true,
            is_locked: true,
            weight: 0.0,
        },
        ComponentPlan {
            component_name: "Midterm",
            period: GradingPeriod::Midterm,
            component_type: ComponentType::Attendance,
            max_score: 100.0,
            is_attendance_based: true,
            is_locked: true,
            weight: 0.0,
        },
        ComponentPlan {
            component_name: "Final",
            period: GradingPeriod::Final,
            component_type: ComponentType::Manual,
            max_score: 100.0,
            is_attendance_based: false,
            is_locked: true,
            weight: 100.0,
        },
    ]
}

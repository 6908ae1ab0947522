//! Pay estimate and fairness analytics. Both are computed server-side.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Estimated earnings for the signed-in employee.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PayEstimate {
    #[serde(deserialize_with = "crate::types::decimal::deserialize")]
    pub current_month: f64,
    #[serde(deserialize_with = "crate::types::decimal::deserialize")]
    pub previous_month: f64,
}

/// Organisation-wide shift distribution.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FairnessReport {
    pub total_employees: u32,
    pub average_shifts: f64,
    pub fairness_score: f64,
    #[serde(default)]
    pub shift_distribution: Vec<EmployeeShare>,
}

/// One employee's row in a [`FairnessReport`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmployeeShare {
    pub employee: EmployeeSummary,
    pub shifts: u32,
    /// Hours keyed by ISO week label.
    #[serde(default)]
    pub weekly_hours: BTreeMap<String, f64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeSummary {
    #[serde(default)]
    pub id: Option<i64>,
    pub username: String,
    #[serde(default)]
    pub full_name: Option<String>,
}

impl EmployeeSummary {
    pub fn label(&self) -> &str {
        self.full_name
            .as_deref()
            .filter(|s| !s.trim().is_empty())
            .unwrap_or(&self.username)
    }
}

impl FairnessReport {
    /// Total hours across all weeks for each employee, highest first.
    pub fn total_hours(&self) -> Vec<(&EmployeeSummary, f64)> {
        let mut totals: Vec<_> = self
            .shift_distribution
            .iter()
            .map(|share| (&share.employee, share.weekly_hours.values().sum::<f64>()))
            .collect();
        totals.sort_by(|a, b| b.1.total_cmp(&a.1));
        totals
    }
}

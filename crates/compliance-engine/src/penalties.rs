//! Penalty schedule and enforcement actions by severity
//!
//! Deadlines count calendar days from the date a notice is issued.

use billboard_types::{ComplianceReport, Severity};
use chrono::{Days, NaiveDate};
use serde::Serialize;

/// Days allowed to file an appeal after a notice is issued
pub const APPEAL_WINDOW_DAYS: u64 = 30;

/// What enforcement looks like for one severity tier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EnforcementAction {
    pub severity: Severity,
    pub min_fine: u64,
    pub max_fine: u64,
    /// Days to cure; zero means immediate
    pub notice_days: u64,
    pub actions: &'static [&'static str],
}

impl EnforcementAction {
    pub fn for_severity(severity: Severity) -> Self {
        match severity {
            Severity::Critical => Self {
                severity,
                min_fine: 1500,
                max_fine: 2000,
                notice_days: 0,
                actions: &[
                    "Immediate removal order",
                    "Maximum fines",
                    "Potential legal action",
                ],
            },
            Severity::High => Self {
                severity,
                min_fine: 500,
                max_fine: 1000,
                notice_days: 30,
                actions: &[
                    "30-day compliance notice",
                    "Escalating fines",
                    "Permit suspension",
                ],
            },
            Severity::Medium => Self {
                severity,
                min_fine: 250,
                max_fine: 400,
                notice_days: 60,
                actions: &[
                    "60-day compliance notice",
                    "Standard fines",
                    "Warning letters",
                ],
            },
            Severity::Low => Self {
                severity,
                min_fine: 100,
                max_fine: 250,
                notice_days: 90,
                actions: &[
                    "90-day compliance notice",
                    "Minimal fines",
                    "Educational resources",
                ],
            },
        }
    }

    pub fn is_immediate(&self) -> bool {
        self.notice_days == 0
    }

    /// Date by which the violation must be cured.
    pub fn compliance_deadline(&self, issued_on: NaiveDate) -> Option<NaiveDate> {
        issued_on.checked_add_days(Days::new(self.notice_days))
    }
}

/// Full schedule, most severe first.
pub fn penalty_schedule() -> Vec<EnforcementAction> {
    Severity::ALL
        .into_iter()
        .rev()
        .map(EnforcementAction::for_severity)
        .collect()
}

/// Last day to file an appeal against a notice issued on `issued_on`.
pub fn appeal_deadline(issued_on: NaiveDate) -> Option<NaiveDate> {
    issued_on.checked_add_days(Days::new(APPEAL_WINDOW_DAYS))
}

/// Enforcement driven by the most severe violation; `None` when compliant.
pub fn required_enforcement(report: &ComplianceReport) -> Option<EnforcementAction> {
    report
        .highest_severity()
        .map(EnforcementAction::for_severity)
}

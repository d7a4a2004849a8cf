//! Rendering of command results as JSON or plain-text tables

use crate::commands::EvaluationOutput;
use crate::config::OutputFormat;
use crate::error::CliError;
use billboard_types::RuleMetadata;
use compliance_engine::EnforcementAction;
use serde::Serialize;
use std::fmt::Write;

/// Values that can be printed as a plain-text table.
pub trait Tabular {
    fn table(&self) -> String;
}

pub fn render<T: Serialize + Tabular + ?Sized>(
    value: &T,
    format: OutputFormat,
) -> Result<String, CliError> {
    match format {
        OutputFormat::Json => serde_json::to_string(value).map_err(CliError::Encode),
        OutputFormat::Pretty => serde_json::to_string_pretty(value).map_err(CliError::Encode),
        OutputFormat::Table => Ok(value.table()),
    }
}

impl Tabular for EvaluationOutput {
    fn table(&self) -> String {
        let report = &self.report;
        let mut out = String::new();
        let _ = writeln!(out, "Status:      {}", self.status);
        let _ = writeln!(out, "Score:       {}/100", report.compliance_score);
        let _ = writeln!(out, "Risk:        {}", report.risk_level);
        let _ = writeln!(out, "Total fines: ${}", report.total_fines);
        let _ = writeln!(
            out,
            "Violations:  {} of {} rules",
            report.violations.len(),
            report.rules_evaluated
        );

        for violation in &report.violations {
            let _ = writeln!(
                out,
                "  [{}] {:<15} ${:<6} {}",
                violation.rule.severity,
                violation.rule.id,
                violation.finding.fine(),
                violation.finding.message
            );
            let _ = writeln!(out, "      -> {}", violation.finding.recommended_action);
        }

        if let Some(enforcement) = &self.enforcement {
            let _ = writeln!(out, "Enforcement ({}):", enforcement.severity);
            for action in &enforcement.actions {
                let _ = writeln!(out, "  - {}", action);
            }
            if let Some(deadline) = enforcement.compliance_deadline {
                let _ = writeln!(out, "Comply by:   {}", deadline);
            }
            if let Some(deadline) = enforcement.appeal_deadline {
                let _ = writeln!(out, "Appeal by:   {}", deadline);
            }
        }

        out.trim_end().to_string()
    }
}

impl Tabular for RuleMetadata {
    fn table(&self) -> String {
        format!(
            "{:<15} {:<11} {:<9} {}\n{:<15} {}",
            self.id, self.category, self.severity, self.name, "", self.description
        )
    }
}

impl Tabular for [RuleMetadata] {
    fn table(&self) -> String {
        if self.is_empty() {
            return "No rules".to_string();
        }
        self.iter()
            .map(RuleMetadata::table)
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl Tabular for Vec<RuleMetadata> {
    fn table(&self) -> String {
        self.as_slice().table()
    }
}

impl Tabular for [EnforcementAction] {
    fn table(&self) -> String {
        self.iter()
            .map(|action| {
                let notice = if action.is_immediate() {
                    "immediate".to_string()
                } else {
                    format!("{} days", action.notice_days)
                };
                format!(
                    "{:<9} ${}-${:<6} {:<10} {}",
                    action.severity,
                    action.min_fine,
                    action.max_fine,
                    notice,
                    action.actions.join(", ")
                )
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl Tabular for Vec<EnforcementAction> {
    fn table(&self) -> String {
        self.as_slice().table()
    }
}

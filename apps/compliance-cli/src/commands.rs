//! Command implementations
//!
//! Each command returns a serialisable value; rendering happens in
//! [`crate::output`] so the commands stay testable without a terminal.

use crate::cli::Command;
use crate::config::CliConfig;
use crate::error::CliError;
use crate::output::render;
use billboard_types::{
    BillboardRecord, ComplianceReport, ReportStatus, RuleCategory, RuleMetadata, Severity,
};
use chrono::NaiveDate;
use compliance_engine::{
    appeal_deadline, penalty_schedule, required_enforcement, ComplianceEngine, ComplianceRule,
    EnforcementAction,
};
use serde::Serialize;
use std::fs::File;
use std::io::{BufReader, Read, Write};
use tracing::{info, warn};

/// Report plus the enforcement it triggers.
#[derive(Debug, Clone, Serialize)]
pub struct EvaluationOutput {
    pub status: ReportStatus,
    pub report: ComplianceReport,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enforcement: Option<EnforcementSummary>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EnforcementSummary {
    pub severity: Severity,
    pub actions: Vec<String>,
    pub issued_on: NaiveDate,
    pub compliance_deadline: Option<NaiveDate>,
    pub appeal_deadline: Option<NaiveDate>,
}

impl EnforcementSummary {
    fn new(action: &EnforcementAction, issued_on: NaiveDate) -> Self {
        Self {
            severity: action.severity,
            actions: action.actions.iter().map(|a| a.to_string()).collect(),
            issued_on,
            compliance_deadline: action.compliance_deadline(issued_on),
            appeal_deadline: appeal_deadline(issued_on),
        }
    }
}

/// Parse a record from `reader` and evaluate it.
pub fn evaluate_record<R: Read>(
    engine: &ComplianceEngine,
    reader: R,
    validate: bool,
    issued_on: NaiveDate,
) -> Result<EvaluationOutput, CliError> {
    let record: BillboardRecord = serde_json::from_reader(reader)?;

    let report = if validate {
        engine.evaluate_validated(&record)?
    } else {
        engine.evaluate(&record)
    };

    info!(
        score = report.compliance_score,
        violations = report.violations.len(),
        total_fines = report.total_fines,
        risk = %report.risk_level,
        "billboard evaluated"
    );

    let enforcement =
        required_enforcement(&report).map(|action| EnforcementSummary::new(&action, issued_on));

    Ok(EvaluationOutput {
        status: report.status(),
        report,
        enforcement,
    })
}

/// Rule metadata, optionally filtered by category name.
pub fn list_rules(
    engine: &ComplianceEngine,
    category: Option<&str>,
) -> Result<Vec<RuleMetadata>, CliError> {
    let rules: Vec<&ComplianceRule> = match category {
        Some(name) => {
            let category = RuleCategory::parse(name)
                .ok_or_else(|| CliError::UnknownCategory(name.to_string()))?;
            engine.rules_by_category(category)
        }
        None => engine.catalogue().iter().collect(),
    };

    Ok(rules.into_iter().map(|rule| rule.metadata().clone()).collect())
}

pub fn show_rule(engine: &ComplianceEngine, id: &str) -> Result<RuleMetadata, CliError> {
    engine
        .rule_by_id(id)
        .map(|rule| rule.metadata().clone())
        .ok_or_else(|| CliError::UnknownRule(id.to_string()))
}

pub fn penalties() -> Vec<EnforcementAction> {
    penalty_schedule()
}

/// Dispatch `command` and write the rendered result to `out`.
pub fn run<W: Write>(
    command: &Command,
    config: &CliConfig,
    engine: &ComplianceEngine,
    stdin: impl Read,
    out: &mut W,
) -> Result<(), CliError> {
    let rendered = match command {
        Command::Evaluate {
            input,
            validate,
            issued_on,
        } => {
            let issued_on = issued_on.unwrap_or_else(|| chrono::Local::now().date_naive());
            let output = match input {
                Some(path) => {
                    info!(path = %path.display(), "reading billboard record");
                    let file = File::open(path)?;
                    evaluate_record(engine, BufReader::new(file), *validate, issued_on)?
                }
                None => evaluate_record(engine, stdin, *validate, issued_on)?,
            };
            if output.status == ReportStatus::Violation {
                warn!("critical violations found");
            }
            render(&output, config.output)?
        }
        Command::Rules { category } => {
            render(&list_rules(engine, category.as_deref())?, config.output)?
        }
        Command::Rule { id } => render(&show_rule(engine, id)?, config.output)?,
        Command::Penalties => render(&penalties(), config.output)?,
    };

    writeln!(out, "{}", rendered)?;
    Ok(())
}

//! Compliance rule: metadata plus a pure evaluation capability

use billboard_types::{
    BillboardRecord, ComplianceOutcome, RuleCategory, RuleMetadata, Severity,
};
use std::fmt;
use std::sync::Arc;

/// Evaluation half of a rule.
///
/// Implementations must be total over well-formed records and treat
/// missing optional fields as "does not apply".
pub trait RuleCheck: Send + Sync {
    fn check(&self, record: &BillboardRecord) -> ComplianceOutcome;
}

impl<F> RuleCheck for F
where
    F: Fn(&BillboardRecord) -> ComplianceOutcome + Send + Sync,
{
    fn check(&self, record: &BillboardRecord) -> ComplianceOutcome {
        self(record)
    }
}

/// A catalogue entry.
#[derive(Clone)]
pub struct ComplianceRule {
    metadata: RuleMetadata,
    check: Arc<dyn RuleCheck>,
}

impl ComplianceRule {
    pub fn new(metadata: RuleMetadata, check: impl RuleCheck + 'static) -> Self {
        Self {
            metadata,
            check: Arc::new(check),
        }
    }

    pub fn id(&self) -> &str {
        &self.metadata.id
    }

    pub fn category(&self) -> RuleCategory {
        self.metadata.category
    }

    pub fn name(&self) -> &str {
        &self.metadata.name
    }

    pub fn description(&self) -> &str {
        &self.metadata.description
    }

    pub fn severity(&self) -> Severity {
        self.metadata.severity
    }

    pub fn metadata(&self) -> &RuleMetadata {
        &self.metadata
    }

    pub fn evaluate(&self, record: &BillboardRecord) -> ComplianceOutcome {
        self.check.check(record)
    }
}

impl fmt::Debug for ComplianceRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ComplianceRule")
            .field("metadata", &self.metadata)
            .finish_non_exhaustive()
    }
}

/// Shorthand for building rule metadata.
pub fn metadata(
    id: &str,
    category: RuleCategory,
    name: &str,
    description: &str,
    severity: Severity,
) -> RuleMetadata {
    RuleMetadata {
        id: id.to_string(),
        category,
        name: name.to_string(),
        description: description.to_string(),
        severity,
    }
}

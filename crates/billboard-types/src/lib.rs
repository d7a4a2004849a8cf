pub mod billboard;
pub mod types;

pub use billboard::{
    BillboardRecord, Content, Dimensions, Location, Permit, Structural, SupportCondition,
    ZoneType,
};
pub use types::{
    ComplianceOutcome, ComplianceReport, Finding, ReportStatus, RiskLevel, RuleCategory,
    RuleMetadata, RuleViolation, Severity, SeverityCounts,
};

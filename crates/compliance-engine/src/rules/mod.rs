//! Built-in regulatory checks
//!
//! Each module declares the rules for one category. `builtin_rules` fixes
//! the catalogue order: size, placement, permit, structural, content.

pub mod content;
pub mod permit;
pub mod placement;
pub mod size;
pub mod structural;

use crate::rule::ComplianceRule;

/// All built-in rules in catalogue order
pub fn builtin_rules() -> Vec<ComplianceRule> {
    let mut rules = Vec::new();
    rules.extend(size::rules());
    rules.extend(placement::rules());
    rules.extend(permit::rules());
    rules.extend(structural::rules());
    rules.extend(content::rules());
    rules
}

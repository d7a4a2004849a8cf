//! Ordered, immutable collection of compliance rules
//!
//! A catalogue is assembled during setup and then only read. Composition
//! methods take `self` by value, so a catalogue shared by reference can
//! never change underneath an evaluation.

use crate::rule::ComplianceRule;
use crate::rules;
use billboard_types::{RuleCategory, RuleMetadata, SeverityCounts};
use std::collections::HashSet;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogueError {
    #[error("Duplicate rule id: {0}")]
    DuplicateRuleId(String),
}

#[derive(Debug, Clone, Default)]
pub struct Catalogue {
    rules: Vec<ComplianceRule>,
}

impl Catalogue {
    /// Build a catalogue, rejecting duplicate rule ids.
    pub fn new(rules: Vec<ComplianceRule>) -> Result<Self, CatalogueError> {
        let mut seen = HashSet::new();
        for rule in &rules {
            if !seen.insert(rule.id()) {
                return Err(CatalogueError::DuplicateRuleId(rule.id().to_string()));
            }
        }
        Ok(Self { rules })
    }

    /// The built-in regulatory rules.
    pub fn builtin() -> Self {
        // Built-in ids are distinct constants
        Self {
            rules: rules::builtin_rules(),
        }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    /// Append a rule at the end of the catalogue.
    pub fn with_rule(mut self, rule: ComplianceRule) -> Result<Self, CatalogueError> {
        if self.rule_by_id(rule.id()).is_some() {
            return Err(CatalogueError::DuplicateRuleId(rule.id().to_string()));
        }
        self.rules.push(rule);
        Ok(self)
    }

    /// Drop the rule with `id`. Unknown ids leave the catalogue unchanged.
    pub fn without_rule(mut self, id: &str) -> Self {
        self.rules.retain(|rule| rule.id() != id);
        self
    }

    pub fn rules(&self) -> &[ComplianceRule] {
        &self.rules
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ComplianceRule> {
        self.rules.iter()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Rule metadata in catalogue order, without evaluating anything.
    pub fn metadata(&self) -> Vec<&RuleMetadata> {
        self.rules.iter().map(ComplianceRule::metadata).collect()
    }

    /// Rules in `category`, catalogue order preserved.
    pub fn rules_by_category(&self, category: RuleCategory) -> Vec<&ComplianceRule> {
        self.rules
            .iter()
            .filter(|rule| rule.category() == category)
            .collect()
    }

    pub fn rule_by_id(&self, id: &str) -> Option<&ComplianceRule> {
        self.rules.iter().find(|rule| rule.id() == id)
    }

    /// Number of rules declared at each severity.
    pub fn severity_counts(&self) -> SeverityCounts {
        self.rules.iter().map(ComplianceRule::severity).collect()
    }
}

impl<'a> IntoIterator for &'a Catalogue {
    type Item = &'a ComplianceRule;
    type IntoIter = std::slice::Iter<'a, ComplianceRule>;

    fn into_iter(self) -> Self::IntoIter {
        self.rules.iter()
    }
}

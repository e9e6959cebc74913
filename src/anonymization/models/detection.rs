//! Detection result models

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Per-rule-name "found" flags produced by a detection pass.
///
/// This is an open mapping: every rule evaluated gets an entry, whatever its
/// name. Rules sharing a name are reported as one entry, found if any of
/// them matched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DetectionResult {
    found: BTreeMap<String, bool>,
}

impl DetectionResult {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a rule outcome, OR-ing with any earlier outcome for the same name
    pub fn record(&mut self, name: impl Into<String>, found: bool) {
        let entry = self.found.entry(name.into()).or_insert(false);
        *entry |= found;
    }

    /// `None` when no rule with this name was evaluated
    pub fn get(&self, name: &str) -> Option<bool> {
        self.found.get(name).copied()
    }

    /// `true` only if a rule with this name was evaluated and matched
    pub fn is_found(&self, name: &str) -> bool {
        self.get(name).unwrap_or(false)
    }

    /// Whether any rule matched
    pub fn any(&self) -> bool {
        self.found.values().any(|found| *found)
    }

    /// Names of the rules that matched, in name order
    pub fn found_rules(&self) -> impl Iterator<Item = &str> {
        self.found
            .iter()
            .filter(|(_, found)| **found)
            .map(|(name, _)| name.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, bool)> {
        self.found.iter().map(|(name, found)| (name.as_str(), *found))
    }

    pub fn len(&self) -> usize {
        self.found.len()
    }

    pub fn is_empty(&self) -> bool {
        self.found.is_empty()
    }

    pub fn into_inner(self) -> BTreeMap<String, bool> {
        self.found
    }
}

/// Fixed-schema view of a [`DetectionResult`] covering the default catalog.
///
/// Rule names outside these five are silently dropped by the projection, and
/// names that weren't evaluated read as `false`. Integrators relying on this
/// view must name their rules exactly like the default catalog does.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DefaultCatalogResult {
    #[serde(rename = "brazilian_CNPJ")]
    pub brazilian_cnpj: bool,

    #[serde(rename = "brazilian_CPF")]
    pub brazilian_cpf: bool,

    pub credit_card: bool,

    pub email_address: bool,

    pub ip_address: bool,
}

impl DefaultCatalogResult {
    pub fn any(&self) -> bool {
        self.brazilian_cnpj
            || self.brazilian_cpf
            || self.credit_card
            || self.email_address
            || self.ip_address
    }
}

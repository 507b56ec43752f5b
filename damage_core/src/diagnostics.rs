//! Non-fatal anomaly reporting
//!
//! Nothing in the engine aborts: malformed or partially-populated
//! inputs degrade to a numeric default and surface here instead. The
//! sink is injected at every call site so tests can capture emissions
//! and hosts can route them into their own logging.

use thiserror::Error;

use crate::types::DamageSourceKind;

/// A non-fatal anomaly observed during damage resolution
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Diagnostic {
    /// The strategy table had no entry for this source kind
    #[error("no base-damage strategy registered for {0:?}, treating base damage as 0")]
    UnknownDamageSource(DamageSourceKind),
    /// A percent-based strategy ran against a defender with no health capability
    #[error("{0:?} requires a health capability on the defender, treating base damage as 0")]
    MissingHealthCapability(DamageSourceKind),
}

/// Destination for diagnostics
pub trait DiagnosticSink {
    fn emit(&mut self, diagnostic: Diagnostic);
}

/// Forwards diagnostics to `tracing` at warn level
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn emit(&mut self, diagnostic: Diagnostic) {
        tracing::warn!(target: "damage_core", "{diagnostic}");
    }
}

/// Discards all diagnostics
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl DiagnosticSink for NullSink {
    fn emit(&mut self, _diagnostic: Diagnostic) {}
}

/// Collects diagnostics in order of emission, mainly for tests
#[derive(Debug, Default, Clone)]
pub struct VecSink {
    pub emitted: Vec<Diagnostic>,
}

impl VecSink {
    pub fn new() -> Self {
        Self::default()
    }
}

impl DiagnosticSink for VecSink {
    fn emit(&mut self, diagnostic: Diagnostic) {
        self.emitted.push(diagnostic);
    }
}

//! Compatibility evaluation
//!
//! A candidate component is checked against every assigned component it has
//! a physical or electrical dependency on. Each applicable rule produces a
//! [`Finding`]; the verdict is the conjunction of all findings:
//!
//! - `Incompatible` if any rule fails
//! - `Unknown` if no rule applied, or a rule could not be checked
//! - `Compatible` otherwise
//!
//! Rules only ever add findings as the build grows, and the count and power
//! rules only get stricter, so an incompatible candidate stays incompatible
//! when more components are assigned.

mod rules;

use crate::{BuildSnapshot, Component, ComponentId};
use serde::{Deserialize, Serialize};
use std::fmt;

pub use rules::{RuleDef, RULES};

/// Outcome of a compatibility check
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Verdict {
    Compatible,
    Incompatible,
    Unknown,
}

impl Verdict {
    /// Conjunction of rule outcomes. An empty set of outcomes is `Unknown`.
    pub fn all(verdicts: impl IntoIterator<Item = Verdict>) -> Verdict {
        let mut any = false;
        let mut unknown = false;
        for verdict in verdicts {
            any = true;
            match verdict {
                Verdict::Incompatible => return Verdict::Incompatible,
                Verdict::Unknown => unknown = true,
                Verdict::Compatible => {}
            }
        }
        if !any || unknown {
            Verdict::Unknown
        } else {
            Verdict::Compatible
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verdict::Compatible => write!(f, "compatible"),
            Verdict::Incompatible => write!(f, "incompatible"),
            Verdict::Unknown => write!(f, "unknown"),
        }
    }
}

/// Identifies a compatibility rule
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Rule {
    CpuSocket,
    RamType,
    RamSlots,
    RamCapacity,
    M2Slots,
    SataPorts,
    GpuSlots,
    CoolerCpuSocket,
    CoolerTdp,
    CoolerBoardSocket,
    PsuWattage,
}

/// One rule's outcome against one counterpart
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Finding {
    pub rule: Rule,
    /// The assigned component the candidate was checked against
    pub counterpart: ComponentId,
    pub verdict: Verdict,
    pub reason: String,
}

/// Verdict plus the findings that produced it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Evaluation {
    pub verdict: Verdict,
    pub findings: Vec<Finding>,
}

impl Evaluation {
    /// Evaluation outside any build context
    pub fn unknown() -> Self {
        Self {
            verdict: Verdict::Unknown,
            findings: Vec::new(),
        }
    }

    fn from_findings(findings: Vec<Finding>) -> Self {
        Self {
            verdict: Verdict::all(findings.iter().map(|f| f.verdict)),
            findings,
        }
    }

    /// Findings that failed
    pub fn failures(&self) -> impl Iterator<Item = &Finding> {
        self.findings
            .iter()
            .filter(|f| f.verdict == Verdict::Incompatible)
    }
}

/// Tunables for the power rule
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EvaluatorConfig {
    /// Extra capacity the PSU must have above the estimated load, in percent
    pub psu_headroom_percent: u32,
    /// Flat allowance for drives, fans, USB devices
    pub peripheral_watts: u32,
}

impl Default for EvaluatorConfig {
    fn default() -> Self {
        Self {
            psu_headroom_percent: 20,
            peripheral_watts: 75,
        }
    }
}

/// Applies the rule table to candidates
#[derive(Debug, Clone, Default)]
pub struct Evaluator {
    config: EvaluatorConfig,
}

impl Evaluator {
    /// Create an evaluator with the given tunables
    pub fn new(config: EvaluatorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &EvaluatorConfig {
        &self.config
    }

    /// Evaluate a candidate against a build, if there is one.
    ///
    /// A candidate for a single-slot kind (CPU, motherboard, PSU, cooler)
    /// takes the place of whatever fills that slot; other kinds are checked
    /// as additions.
    pub fn evaluate(&self, candidate: &Component, build: Option<&BuildSnapshot>) -> Evaluation {
        let Some(build) = build else {
            return Evaluation::unknown();
        };
        let kind = candidate.kind();
        let replaced;
        let build = if kind.allows_multiple() {
            build
        } else {
            replaced = build.without_kind(kind);
            &replaced
        };
        let cx = rules::RuleContext {
            candidate,
            build,
            config: &self.config,
        };
        let findings = RULES.iter().flat_map(|rule| rule.apply(&cx)).collect();
        Evaluation::from_findings(findings)
    }

    /// Just the verdict
    pub fn verdict(&self, candidate: &Component, build: Option<&BuildSnapshot>) -> Verdict {
        self.evaluate(candidate, build).verdict
    }
}

#[cfg(test)]
mod tests;

use serde::{Deserialize, Serialize};

use super::Decision;
use crate::values::{Info, Observation};

/// What one agent did with one stimulus
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgentDecision {
    pub agent: String,
    pub decision: Decision,
}

/// Record of one completed simulation step
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StepSnapshot {
    /// Index of the step that produced this record (0-based)
    pub step: u64,
    pub observation: Observation,
    pub reward: f64,
    /// Action vector handed to the market environment
    pub actions: Vec<i64>,
    pub done: bool,
    pub info: Info,
    /// Agent reactions in broadcast order
    pub decisions: Vec<AgentDecision>,
}

impl StepSnapshot {
    pub fn trades(&self) -> usize {
        self.decisions
            .iter()
            .filter(|d| d.decision.is_trade())
            .count()
    }
}

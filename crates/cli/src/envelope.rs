//! JSON result envelope written to stdout.
//!
//! Invariants:
//! - Exactly one envelope is printed per invocation, on a single line.
//! - A failure envelope never carries `results` or `changed: true`.

use serde::Serialize;
use serde_json::Value;

use crate::operator::Outcome;

#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum Envelope {
    Success {
        changed: bool,
        results: Vec<Value>,
    },
    Failure {
        failed: bool,
        msg: String,
        /// Cause chain of the error, outermost first, joined with `": "`.
        /// Never includes a backtrace.
        exception: String,
    },
}

impl Envelope {
    pub fn success(outcome: Outcome) -> Self {
        Envelope::Success {
            changed: outcome.changed,
            results: outcome.results,
        }
    }

    pub fn failure(err: &anyhow::Error) -> Self {
        Envelope::Failure {
            failed: true,
            msg: err.to_string(),
            exception: format!("{:#}", err),
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

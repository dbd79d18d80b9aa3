//! A single corpus record

use serde::{Deserialize, Serialize};

use super::label::Label;

/// One premise/hypothesis sentence pair with its gold label
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NliExample {
    /// Premise sentence
    pub premise: String,
    /// Hypothesis sentence
    pub hypothesis: String,
    /// Gold relation class
    pub label: Label,
}

impl NliExample {
    /// Create a new record
    #[must_use]
    pub fn new(premise: impl Into<String>, hypothesis: impl Into<String>, label: Label) -> Self {
        Self { premise: premise.into(), hypothesis: hypothesis.into(), label }
    }
}

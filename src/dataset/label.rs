//! Gold relation classes

use serde::{Deserialize, Serialize};

use crate::error::JsnliError;

/// Logical relation between a premise and a hypothesis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Label {
    /// The hypothesis follows from the premise
    Entailment,
    /// The hypothesis is unrelated to the premise
    Neutral,
    /// The hypothesis contradicts the premise
    Contradiction,
}

impl Label {
    /// Declared class names, in class-id order
    pub const NAMES: [&'static str; 3] = ["entailment", "neutral", "contradiction"];

    /// Class name
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Entailment => "entailment",
            Self::Neutral => "neutral",
            Self::Contradiction => "contradiction",
        }
    }

    /// Stable class id matching declaration order
    #[must_use]
    pub fn id(self) -> usize {
        self as usize
    }
}

impl std::str::FromStr for Label {
    type Err = JsnliError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "entailment" => Ok(Self::Entailment),
            "neutral" => Ok(Self::Neutral),
            "contradiction" => Ok(Self::Contradiction),
            _ => Err(JsnliError::UnknownLabel { label: s.to_string() }),
        }
    }
}

impl std::fmt::Display for Label {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

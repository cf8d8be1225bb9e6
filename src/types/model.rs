//! Vertex models: whether slots exist implicitly or must be added.

use std::fmt;

use serde::{Deserialize, Serialize};

/// How vertex slots come into existence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VertexModel {
    /// Every index in `[0, capacity)` is always a vertex.
    #[default]
    Implicit,
    /// A slot is a vertex only after `add_vertex`.
    Explicit,
}

impl VertexModel {
    /// Return a human-readable name for this model.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Implicit => "implicit",
            Self::Explicit => "explicit",
        }
    }

    /// Parse a model from a string name.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "implicit" | "i" => Some(Self::Implicit),
            "explicit" | "e" => Some(Self::Explicit),
            _ => None,
        }
    }
}

impl fmt::Display for VertexModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

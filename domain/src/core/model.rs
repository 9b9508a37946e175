//! Model value object representing a backend model

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Backend models known to the arena (Value Object)
///
/// Any other tag the backend understands can be used through [`Model::Custom`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Model {
    Llama31,
    Llama32,
    Mistral,
    Qwen25,
    Gemma2,
    Phi3,
    // Custom
    Custom(String),
}

impl Model {
    /// Get the string identifier for this model
    pub fn as_str(&self) -> &str {
        match self {
            Model::Llama31 => "llama3.1",
            Model::Llama32 => "llama3.2",
            Model::Mistral => "mistral",
            Model::Qwen25 => "qwen2.5",
            Model::Gemma2 => "gemma2",
            Model::Phi3 => "phi3",
            Model::Custom(s) => s,
        }
    }
}

impl Default for Model {
    /// Returns the default model (llama3.1)
    fn default() -> Self {
        Model::Llama31
    }
}

impl std::fmt::Display for Model {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Model {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(match s {
            "llama3.1" => Model::Llama31,
            "llama3.2" => Model::Llama32,
            "mistral" => Model::Mistral,
            "qwen2.5" => Model::Qwen25,
            "gemma2" => Model::Gemma2,
            "phi3" => Model::Phi3,
            other => Model::Custom(other.to_string()),
        })
    }
}

impl From<&str> for Model {
    fn from(s: &str) -> Self {
        match s.parse() {
            Ok(model) => model,
            Err(never) => match never {},
        }
    }
}

impl Serialize for Model {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Model {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(Model::from(s.as_str()))
    }
}

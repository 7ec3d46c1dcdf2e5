//! Generator configuration.

use std::fmt;
use std::str::FromStr;

use crate::model::KindSet;

/// How the generated renderer formats a diagnostic.
///
/// The two policies produce different output for the same diagnostic, so the
/// active one is written into the banner of the definitions artifact.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub enum RendererPolicy {
    /// Literals verbatim, placeholders through the per-kind formatters.
    #[default]
    Full,
    /// Every diagnostic renders as one generic message; payload is ignored.
    Fallback,
}

impl RendererPolicy {
    pub fn as_str(self) -> &'static str {
        match self {
            RendererPolicy::Full => "full",
            RendererPolicy::Fallback => "fallback",
        }
    }
}

impl fmt::Display for RendererPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RendererPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "full" => Ok(RendererPolicy::Full),
            "fallback" => Ok(RendererPolicy::Fallback),
            other => Err(format!(
                "unknown renderer policy `{other}` (expected `full` or `fallback`)"
            )),
        }
    }
}

/// Everything that varies between generator runs besides the input text.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub struct GeneratorConfig {
    /// Markers the parser turns into placeholders.
    pub kinds: KindSet,
    pub policy: RendererPolicy,
}

impl GeneratorConfig {
    pub fn with_kinds(mut self, kinds: KindSet) -> Self {
        self.kinds = kinds;
        self
    }

    pub fn with_policy(mut self, policy: RendererPolicy) -> Self {
        self.policy = policy;
        self
    }
}

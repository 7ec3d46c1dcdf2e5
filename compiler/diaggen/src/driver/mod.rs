//! Read a spec, emit one artifact, write it out.
//!
//! Output is staged in a temporary file next to the destination and only
//! renamed into place once the whole artifact has been generated and written,
//! so a failed run never leaves a truncated file behind.

use std::fmt;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::str::FromStr;

use tempfile::NamedTempFile;
use thiserror::Error;
use tracing::debug;

use crate::config::{GeneratorConfig, RendererPolicy};
use crate::emit::{emit_declarations, emit_definitions};
use crate::model::Model;
use crate::parser::{parse, SpecError};

/// Which file to generate.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Artifact {
    /// Enum, payload union, record type and prototypes.
    Declarations,
    /// Constructor bodies and the renderer.
    Definitions,
}

impl Artifact {
    pub fn as_str(self) -> &'static str {
        match self {
            Artifact::Declarations => "header",
            Artifact::Definitions => "source",
        }
    }
}

impl fmt::Display for Artifact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Artifact {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "header" | "declarations" => Ok(Artifact::Declarations),
            "source" | "definitions" => Ok(Artifact::Definitions),
            other => Err(format!(
                "unknown artifact `{other}` (expected `header` or `source`)"
            )),
        }
    }
}

/// Anything that stops a generator run.
#[derive(Debug, Error)]
pub enum GenerateError {
    #[error("cannot read `{}`: {source}", .path.display())]
    Read { path: PathBuf, source: io::Error },

    #[error("{}: {source}", .path.display())]
    Spec { path: PathBuf, source: SpecError },

    #[error("`{}` declares no diagnostics", .path.display())]
    EmptySpec { path: PathBuf },

    #[error("cannot write `{}`: {source}", .path.display())]
    Write { path: PathBuf, source: io::Error },
}

/// Emit `artifact` for an already-parsed model.
pub fn render_artifact(model: &Model, artifact: Artifact, policy: RendererPolicy) -> String {
    match artifact {
        Artifact::Declarations => emit_declarations(model),
        Artifact::Definitions => emit_definitions(model, policy),
    }
}

/// Parse the spec at `input` into a model.
pub fn load_model(input: &Path, config: &GeneratorConfig) -> Result<Model, GenerateError> {
    let text = fs::read_to_string(input).map_err(|source| GenerateError::Read {
        path: input.to_path_buf(),
        source,
    })?;

    let model = parse(&text, config.kinds).map_err(|source| GenerateError::Spec {
        path: input.to_path_buf(),
        source,
    })?;

    if model.is_empty() {
        return Err(GenerateError::EmptySpec {
            path: input.to_path_buf(),
        });
    }
    Ok(model)
}

/// Generate `artifact` from the spec at `input` and write it to `output`.
pub fn run(
    artifact: Artifact,
    input: &Path,
    output: &Path,
    config: &GeneratorConfig,
) -> Result<(), GenerateError> {
    let model = load_model(input, config)?;
    let text = render_artifact(&model, artifact, config.policy);

    write_staged(output, &text).map_err(|source| GenerateError::Write {
        path: output.to_path_buf(),
        source,
    })?;

    debug!(
        %artifact,
        input = %input.display(),
        output = %output.display(),
        bytes = text.len(),
        "wrote artifact"
    );
    Ok(())
}

/// Write `contents` to a temp file in `path`'s directory, then rename it over
/// `path`. The temp file is removed if any step fails.
fn write_staged(path: &Path, contents: &str) -> io::Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut staged = NamedTempFile::new_in(dir)?;
    staged.write_all(contents.as_bytes())?;
    staged.as_file().sync_all()?;
    staged.persist(path).map_err(|err| err.error)?;
    Ok(())
}

#[cfg(test)]
mod tests;

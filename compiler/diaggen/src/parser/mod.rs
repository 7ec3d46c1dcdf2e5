//! Spec parser.
//!
//! A spec is a text file with one diagnostic per line:
//!
//! ```text
//! <name> <category> <template-token>...
//! ```
//!
//! Lines are split with shell quoting rules, so literal text containing
//! spaces or punctuation is written in quotes. A template token is a
//! placeholder only when it is exactly a recognized marker (`%t`, `%p`, `%c`,
//! `%d`); every other token is literal text, kept verbatim. Blank lines and
//! lines whose first non-blank character is `#` produce no record. Inside a
//! record `#` is ordinary text, so `#42` is a literal token.

use std::borrow::Cow;

use rustc_hash::FxHashMap;
use thiserror::Error;
use tracing::{debug, trace};

use crate::model::{DiagnosticDef, FormatToken, KindSet, Model, PlaceholderKind};

/// A fatal problem with one spec record.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
#[error("line {line}: {kind}")]
pub struct SpecError {
    /// 1-based line of the offending record.
    pub line: usize,
    pub kind: SpecErrorKind,
}

#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum SpecErrorKind {
    #[error("malformed quoting: {0}")]
    MalformedQuoting(String),

    #[error("diagnostic `{name}` has no category")]
    MissingCategory { name: String },

    #[error("`{name}` is not a valid C identifier")]
    InvalidName { name: String },

    #[error("duplicate diagnostic `{name}` (first defined on line {first_line})")]
    DuplicateName { name: String, first_line: usize },

    #[error("tag `{tag}` of `{name}` collides with `{other}` (line {first_line})")]
    TagCollision {
        tag: String,
        name: String,
        other: String,
        first_line: usize,
    },
}

/// Parse spec text into a [`Model`].
///
/// `kinds` selects which markers are placeholders; markers outside the set
/// stay literal.
pub fn parse(source: &str, kinds: KindSet) -> Result<Model, SpecError> {
    let mut defs = Vec::new();
    // name -> line, tag -> (name, line)
    let mut names: FxHashMap<String, usize> = FxHashMap::default();
    let mut tags: FxHashMap<String, (String, usize)> = FxHashMap::default();

    for (index, text) in source.lines().enumerate() {
        let line = index + 1;
        let Some(def) = parse_record(text, kinds).map_err(|kind| SpecError { line, kind })? else {
            continue;
        };

        if let Some(&first_line) = names.get(def.name()) {
            return Err(SpecError {
                line,
                kind: SpecErrorKind::DuplicateName {
                    name: def.name().to_string(),
                    first_line,
                },
            });
        }

        let tag = def.tag();
        if let Some((other, first_line)) = tags.get(&tag) {
            return Err(SpecError {
                line,
                kind: SpecErrorKind::TagCollision {
                    tag,
                    name: def.name().to_string(),
                    other: other.clone(),
                    first_line: *first_line,
                },
            });
        }

        trace!(line, name = def.name(), tokens = def.template().len(), "parsed record");
        names.insert(def.name().to_string(), line);
        tags.insert(tag, (def.name().to_string(), line));
        defs.push(def);
    }

    debug!(diagnostics = defs.len(), "parsed diagnostic spec");
    Ok(Model::from_defs(defs))
}

/// Parse one line. `Ok(None)` for blank and comment-only lines.
fn parse_record(text: &str, kinds: KindSet) -> Result<Option<DiagnosticDef>, SpecErrorKind> {
    if text.trim_start().starts_with('#') {
        return Ok(None);
    }
    let tokens = shell_words::split(&escape_word_hashes(text))
        .map_err(|err| SpecErrorKind::MalformedQuoting(err.to_string()))?;

    let mut tokens = tokens.into_iter();
    let Some(name) = tokens.next() else {
        return Ok(None);
    };
    if !is_c_identifier(&name) {
        return Err(SpecErrorKind::InvalidName { name });
    }
    let Some(category) = tokens.next() else {
        return Err(SpecErrorKind::MissingCategory { name });
    };

    let template = tokens.map(|token| classify(token, kinds)).collect();
    Ok(Some(DiagnosticDef::new(name, category, template)))
}

/// Classify one template token.
fn classify(token: String, kinds: KindSet) -> FormatToken {
    match PlaceholderKind::from_marker(&token) {
        Some(kind) if kinds.recognizes(kind) => FormatToken::Placeholder(kind),
        _ => FormatToken::Literal(token),
    }
}

/// Backslash-escape each unquoted `#` that starts a word.
///
/// The shell splitter reads such a `#` as the start of a comment and drops the
/// rest of the line. Escaped, it stays part of the token.
fn escape_word_hashes(text: &str) -> Cow<'_, str> {
    if !text.contains('#') {
        return Cow::Borrowed(text);
    }

    let mut out = String::with_capacity(text.len() + 2);
    let mut quote: Option<char> = None;
    let mut word_start = true;
    let mut chars = text.chars();
    while let Some(c) = chars.next() {
        out.push(c);
        match (quote, c) {
            (Some('\''), '\'') | (Some('"'), '"') => quote = None,
            (Some('"') | None, '\\') => {
                out.extend(chars.next());
                word_start = false;
            }
            (Some(_), _) => {}
            (None, '\'' | '"') => {
                quote = Some(c);
                word_start = false;
            }
            (None, ' ' | '\t') => word_start = true,
            (None, '#') if word_start => {
                out.pop();
                out.push_str("\\#");
                word_start = false;
            }
            (None, _) => word_start = false,
        }
    }
    Cow::Owned(out)
}

/// C99/C11 reserved words. A diagnostic name becomes a union member, so these
/// cannot be used.
const C_KEYWORDS: &[&str] = &[
    "auto", "break", "case", "char", "const", "continue", "default", "do", "double", "else",
    "enum", "extern", "float", "for", "goto", "if", "inline", "int", "long", "register",
    "restrict", "return", "short", "signed", "sizeof", "static", "struct", "switch", "typedef",
    "union", "unsigned", "void", "volatile", "while", "_Alignas", "_Alignof", "_Atomic", "_Bool",
    "_Complex", "_Generic", "_Imaginary", "_Noreturn", "_Static_assert", "_Thread_local",
];

fn is_c_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    matches!(chars.next(), Some(c) if c.is_ascii_alphabetic() || c == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        && !C_KEYWORDS.contains(&name)
}

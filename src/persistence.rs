// File: src/persistence.rs
use crate::config::Spacing;
use crate::errors::Result;
use crate::tally::ResolvedDictionary;
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use std::fs;
use std::io::{BufWriter, ErrorKind, Write};
use std::path::Path;
use tempfile::NamedTempFile;

/// Loads the dictionary of an earlier run as prior knowledge.
///
/// Never fails: a missing, unreadable or malformed file yields an empty
/// dictionary and the run goes on without prior knowledge.
pub fn load_bootstrap(path: &Path) -> ResolvedDictionary {
    let text = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            tracing::debug!(path = %path.display(), "no previous dictionary, starting empty");
            return ResolvedDictionary::default();
        }
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "could not read previous dictionary");
            return ResolvedDictionary::default();
        }
    };

    match serde_json::from_str(&text) {
        Ok(dictionary) => {
            tracing::info!(path = %path.display(), "loaded previous dictionary");
            dictionary
        }
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "ignoring malformed previous dictionary");
            ResolvedDictionary::default()
        }
    }
}

/// Serializes the dictionary, compact or indented with `spacing`.
pub fn to_json(dictionary: &ResolvedDictionary, spacing: &Spacing) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    write_json(&mut buf, dictionary, spacing)?;
    Ok(buf)
}

fn write_json<W: Write>(writer: W, dictionary: &ResolvedDictionary, spacing: &Spacing) -> Result<()> {
    match spacing.indent() {
        Some(indent) => {
            let mut ser = Serializer::with_formatter(writer, PrettyFormatter::with_indent(indent));
            dictionary.serialize(&mut ser)?;
        }
        None => serde_json::to_writer(writer, dictionary)?,
    }
    Ok(())
}

/// Writes the dictionary atomically: into a temporary file next to `path`,
/// then renamed over it.
pub fn save_to_disk(dictionary: &ResolvedDictionary, path: &Path, spacing: &Spacing) -> Result<()> {
    let parent_dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    fs::create_dir_all(parent_dir)?;

    let temp_file = NamedTempFile::new_in(parent_dir)?;
    {
        let mut writer = BufWriter::new(&temp_file);
        write_json(&mut writer, dictionary, spacing)?;
        writer.flush()?;
    }

    temp_file.persist(path)?;
    tracing::info!(path = %path.display(), "dictionary written");
    Ok(())
}

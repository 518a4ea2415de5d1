//! Line-oriented persistence for the registry.
//!
//! One artist per line: `id|name|status|related_json|genres_json`. Names are stored with
//! `\\`, `|`, `\n` and `\r` backslash-escaped; the JSON columns are read with a streaming
//! parser, so `|` inside a genre is fine.

use crate::artist::{Artist, Status};
use crate::registry::Registry;
use std::{
    fs,
    io::{self, Write},
    path::Path,
};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LineError {
    #[error("expected 5 pipe-delimited fields")]
    MissingFields,
    #[error("empty artist id")]
    EmptyId,
    #[error("unknown status symbol '{0}'")]
    UnknownStatus(String),
    #[error("invalid JSON column: {0}")]
    InvalidJson(#[from] serde_json::Error),
}

pub fn encode_line(artist: &Artist) -> String {
    format!(
        "{}|{}|{}|{}|{}",
        artist.id,
        escape_name(&artist.name),
        artist.status.symbol(),
        json_array(&artist.related),
        json_array(&artist.genres)
    )
}

pub fn decode_line(line: &str) -> Result<Artist, LineError> {
    let (id, rest) = line.split_once('|').ok_or(LineError::MissingFields)?;
    if id.is_empty() {
        return Err(LineError::EmptyId);
    }

    let (name, rest) = split_escaped_name(rest)?;
    let (status_symbol, json_columns) = rest.split_once('|').ok_or(LineError::MissingFields)?;
    let status = Status::from_symbol(status_symbol)
        .ok_or_else(|| LineError::UnknownStatus(status_symbol.to_string()))?;
    let (related, genres) = split_json_columns(json_columns)?;

    Ok(Artist {
        id: id.to_string(),
        name,
        status,
        related,
        genres,
    })
}

// Names are the only free-text column, so `\`, `|` and line breaks are escaped there.
fn escape_name(name: &str) -> String {
    let mut escaped = String::with_capacity(name.len());
    for c in name.chars() {
        match c {
            '\\' => escaped.push_str("\\\\"),
            '|' => escaped.push_str("\\|"),
            '\n' => escaped.push_str("\\n"),
            '\r' => escaped.push_str("\\r"),
            c => escaped.push(c),
        }
    }
    escaped
}

fn split_escaped_name(columns: &str) -> Result<(String, &str), LineError> {
    let mut name = String::new();
    let mut chars = columns.char_indices();

    while let Some((index, c)) = chars.next() {
        match c {
            '|' => return Ok((name, &columns[index + 1..])),
            '\\' => match chars.next() {
                Some((_, 'n')) => name.push('\n'),
                Some((_, 'r')) => name.push('\r'),
                Some((_, escaped)) => name.push(escaped),
                None => return Err(LineError::MissingFields),
            },
            c => name.push(c),
        }
    }

    Err(LineError::MissingFields)
}

/// Reads `related_json|genres_json`; the JSON strings themselves may contain `|`.
fn split_json_columns(columns: &str) -> Result<(Vec<String>, Vec<String>), LineError> {
    let mut stream = serde_json::Deserializer::from_str(columns).into_iter::<Vec<String>>();
    let related = stream.next().ok_or(LineError::MissingFields)??;

    let genres_json = columns[stream.byte_offset()..]
        .strip_prefix('|')
        .ok_or(LineError::MissingFields)?;
    let genres = serde_json::from_str(genres_json)?;

    Ok((related, genres))
}

/// Parses a registry snapshot, skipping blank and malformed lines.
pub fn parse_registry(contents: &str) -> Registry {
    let mut registry = Registry::new();

    for (line_index, line) in contents.lines().enumerate() {
        let line = line.trim_end_matches('\r');
        if line.trim().is_empty() {
            continue;
        }

        match decode_line(line) {
            Ok(artist) => {
                let artist_id = artist.id.clone();
                if !registry.insert_loaded(artist) {
                    tracing::warn!(line = line_index + 1, artist = %artist_id, "duplicate artist line skipped");
                }
            }
            Err(error) => {
                tracing::warn!(line = line_index + 1, %error, "malformed artist line skipped");
            }
        }
    }

    registry
}

pub fn load_registry(path: &Path) -> io::Result<Registry> {
    if !path.exists() {
        tracing::info!(path = %path.display(), "no registry file found, starting empty");
        return Ok(Registry::new());
    }

    let bytes = fs::read(path)?;
    let registry = parse_registry(&String::from_utf8_lossy(&bytes));
    tracing::info!(path = %path.display(), artists = registry.len(), "registry loaded");
    Ok(registry)
}

pub fn save_registry(registry: &Registry, path: &Path) -> io::Result<()> {
    let lines = registry.iter().map(encode_line);
    write_lines_atomically(path, lines)
}

/// Regenerates the derived list of potential artists as `id|name` lines.
pub fn save_potentials(registry: &Registry, path: &Path) -> io::Result<()> {
    let lines = registry
        .iter()
        .filter(|artist| artist.status == Status::Potential)
        .map(|artist| format!("{}|{}", artist.id, escape_name(artist.display_name())));
    write_lines_atomically(path, lines)
}

fn json_array(values: &[String]) -> String {
    // Serializing a slice of strings cannot fail.
    serde_json::to_string(values).unwrap_or_else(|_| "[]".to_string())
}

fn write_lines_atomically(path: &Path, lines: impl Iterator<Item = String>) -> io::Result<()> {
    let temp_path = path.with_extension("txt.tmp");
    {
        let mut file = io::BufWriter::new(fs::File::create(&temp_path)?);
        for line in lines {
            writeln!(file, "{}", line)?;
        }
        file.flush()?;
    }
    fs::rename(&temp_path, path)
}

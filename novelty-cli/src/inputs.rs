//! Loading recommendation lists and popularity counts from JSON files.

use std::io::{BufReader, ErrorKind, Write};

use camino::Utf8Path;
use cap_std::{ambient_authority, fs_utf8};
use novelty_core::{PopularityTable, RankedListCollection};
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::{ARG_POPULARITY, ARG_RECOMMENDATIONS, CliError};

/// Load per-context ranked lists, e.g. `[[{"item": 1, "score": 0.9}], []]`.
pub(crate) fn load_recommendations(path: &Utf8Path) -> Result<RankedListCollection, CliError> {
    let collection: RankedListCollection = load_json(path, ARG_RECOMMENDATIONS)?;
    log::debug!("loaded {} ranked lists from {path}", collection.len());
    Ok(collection)
}

/// Load popularity counts from either a dense array indexed by item id
/// (`[3, 0, 5]`) or an object keyed by item id (`{"17": 4}`).
pub(crate) fn load_popularity(path: &Utf8Path) -> Result<PopularityTable, CliError> {
    let document: serde_json::Value = load_json(path, ARG_POPULARITY)?;
    let table = parse_popularity(document).map_err(|source| CliError::ParseInput {
        field: ARG_POPULARITY,
        path: path.to_path_buf(),
        source,
    })?;
    log::debug!("loaded popularity for {} items from {path}", table.len());
    Ok(table)
}

fn parse_popularity(document: serde_json::Value) -> Result<PopularityTable, serde_json::Error> {
    if document.is_array() {
        let dense: Vec<i64> = serde_json::from_value(document)?;
        Ok(PopularityTable::from_dense(dense))
    } else {
        serde_json::from_value(document)
    }
}

fn load_json<T: DeserializeOwned>(path: &Utf8Path, field: &'static str) -> Result<T, CliError> {
    let file = open_input(path, field)?;
    serde_json::from_reader(BufReader::new(file)).map_err(|source| CliError::ParseInput {
        field,
        path: path.to_path_buf(),
        source,
    })
}

fn open_input(path: &Utf8Path, field: &'static str) -> Result<fs_utf8::File, CliError> {
    let inspect = |source: std::io::Error| {
        if source.kind() == ErrorKind::NotFound {
            CliError::MissingSourceFile {
                field,
                path: path.to_path_buf(),
            }
        } else {
            CliError::InspectSourcePath {
                field,
                path: path.to_path_buf(),
                source,
            }
        }
    };
    let file = fs_utf8::File::open_ambient(path, ambient_authority()).map_err(inspect)?;
    if file.metadata().map_err(inspect)?.is_file() {
        Ok(file)
    } else {
        Err(CliError::SourcePathNotFile {
            field,
            path: path.to_path_buf(),
        })
    }
}

/// Write `report` as pretty-printed JSON followed by a newline.
pub(crate) fn write_report<T: Serialize>(writer: &mut dyn Write, report: &T) -> Result<(), CliError> {
    let payload = serde_json::to_string_pretty(report).map_err(CliError::SerialiseReport)?;
    writer
        .write_all(payload.as_bytes())
        .map_err(CliError::WriteReport)?;
    writer.write_all(b"\n").map_err(CliError::WriteReport)?;
    Ok(())
}

//! Bazis cloud CSV generator.

use crate::config::{
    BAZIS_HEADER, FORBIDDEN_FILENAME_CHARS, NAME_JOINER, NO_ORIENTATION_FLAG, OUTPUT_DELIMITER,
    OUTPUT_EXTENSION,
};
use crate::error::{ConvertError, Result};
use crate::model::{Edge, Item};
use crate::transform::GroupKey;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Format an edge dimension for the bazis CSV.
///
/// Whole numbers print without a fractional part and both zeros print as `0`.
pub fn format_decimal(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }

    if value.fract() == 0.0 && value.abs() < 1e15 {
        return format!("{}", value as i64);
    }

    format!("{}", value)
}

fn edge_thickness(edge: Option<&Edge>) -> String {
    edge.map(|e| format_decimal(e.thickness()))
        .unwrap_or_default()
}

/// Build the bazis row of one item, in [`BAZIS_HEADER`] column order.
///
/// Edge material and width are not part of the bazis schema.
pub fn bazis_record(item: &Item) -> [String; BAZIS_HEADER.len()] {
    let [l1, l2, w1, w2] = item.edges().map(|(_, edge)| edge_thickness(edge));
    [
        item.position().to_string(),
        format!("{}{}{}", item.name(), NAME_JOINER, item.root()),
        item.length().to_string(),
        item.width().to_string(),
        item.count().to_string(),
        if item.oriented() {
            String::new()
        } else {
            NO_ORIENTATION_FLAG.to_string()
        },
        l1,
        l2,
        w1,
        w2,
        String::new(),
    ]
}

/// Write a header row and one row per item to `writer`.
///
/// The header is written even when `items` is empty.
pub fn write_bazis_csv<W: io::Write>(items: &[Item], writer: W) -> Result<()> {
    let mut wtr = csv::WriterBuilder::new()
        .delimiter(OUTPUT_DELIMITER)
        .terminator(csv::Terminator::CRLF)
        .from_writer(writer);

    wtr.write_record(BAZIS_HEADER)?;
    for item in items {
        wtr.write_record(bazis_record(item))?;
    }
    wtr.flush().map_err(csv::Error::from)?;
    Ok(())
}

/// Render items as a bazis CSV string.
pub fn generate_bazis_csv(items: &[Item]) -> Result<String> {
    let mut buffer = Vec::new();
    write_bazis_csv(items, &mut buffer)?;
    Ok(String::from_utf8_lossy(&buffer).into_owned())
}

/// Create (or overwrite) `path` with the bazis CSV of `items`.
///
/// The rows are rendered before the file is opened, so a failure leaves no
/// partially written file behind.
pub fn write_bazis_file(path: &Path, items: &[Item]) -> Result<()> {
    let mut buffer = Vec::new();
    write_bazis_csv(items, &mut buffer)?;
    fs::write(path, buffer).map_err(|e| ConvertError::io(path, e))
}

/// Replace characters that cannot appear in a file name.
pub fn sanitize_file_component(value: &str) -> String {
    value
        .chars()
        .map(|c| {
            if FORBIDDEN_FILENAME_CHARS.contains(&c) {
                '_'
            } else {
                c
            }
        })
        .collect()
}

/// File name for one group: `<input stem> # <material> # <thickness>mm.csv`.
pub fn output_file_name(input: &Path, key: &GroupKey) -> String {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    format!(
        "{}{}{}{}{}mm.{}",
        stem,
        NAME_JOINER,
        sanitize_file_component(&key.material),
        NAME_JOINER,
        key.thickness,
        OUTPUT_EXTENSION
    )
}

/// Full output path for one group inside `dir`.
pub fn output_path(dir: &Path, input: &Path, key: &GroupKey) -> PathBuf {
    dir.join(output_file_name(input, key))
}

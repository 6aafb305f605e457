//! Field-level parsers for the webcut record format.
//!
//! Each function handles one kind of sub-field and reports a [`FieldError`]
//! naming the field, so grammar validation stays separate from numeric parsing.

use crate::config::{
    FIELD_SEPARATOR, LEADING_TABS, MATERIAL_SEPARATOR, NAME_SEPARATOR, RECORD_FIELD_COUNT,
};
use crate::error::FieldError;
use crate::model::{Edge, EdgeSide};

/// Split a raw line into its record fields.
///
/// The line must start with exactly [`LEADING_TABS`] tab characters and carry
/// [`RECORD_FIELD_COUNT`] tab-separated fields after them. A trailing line
/// terminator (`\n` or `\r\n`) is ignored.
pub fn split_record(line: &str) -> Result<[&str; RECORD_FIELD_COUNT], FieldError> {
    let line = line.trim_end_matches(|c: char| c == '\n' || c == '\r');
    let prefix = FIELD_SEPARATOR.to_string().repeat(LEADING_TABS);
    let body = line
        .strip_prefix(prefix.as_str())
        .ok_or(FieldError::MissingLeadingTabs {
            expected: LEADING_TABS,
        })?;

    let fields: Vec<&str> = body.split(FIELD_SEPARATOR).collect();
    let found = fields.len();
    fields.try_into().map_err(|_| FieldError::FieldCount {
        expected: RECORD_FIELD_COUNT,
        found,
    })
}

/// Parse an unsigned integer made of ASCII digits only.
pub fn parse_int(field: &'static str, value: &str) -> Result<u32, FieldError> {
    let not_an_integer = || FieldError::NotAnInteger {
        field,
        value: value.to_string(),
    };
    if value.is_empty() || !value.bytes().all(|b| b.is_ascii_digit()) {
        return Err(not_an_integer());
    }
    value.parse().map_err(|_| not_an_integer())
}

/// Parse an unsigned decimal that may use a comma as the decimal separator.
pub fn parse_decimal(field: &'static str, value: &str) -> Result<f64, FieldError> {
    Some(value)
        .filter(|v| !v.starts_with(|c: char| c == '-' || c == '+'))
        .map(|v| v.replace(',', "."))
        .and_then(|v| v.parse::<f64>().ok())
        .filter(|v| v.is_finite() && *v >= 0.0)
        .ok_or_else(|| FieldError::InvalidDecimal {
            field,
            value: value.to_string(),
        })
}

/// Split `root.name` on the first dot.
pub fn split_root_name(value: &str) -> Result<(&str, &str), FieldError> {
    value
        .split_once(NAME_SEPARATOR)
        .ok_or(FieldError::MissingSeparator {
            field: "root.name",
            separator: NAME_SEPARATOR,
        })
}

/// Split `material_thickness` on the last underscore.
pub fn split_material(value: &str) -> Result<(&str, u32), FieldError> {
    let (material, thickness) =
        value
            .rsplit_once(MATERIAL_SEPARATOR)
            .ok_or(FieldError::MissingSeparator {
                field: "material_thickness",
                separator: MATERIAL_SEPARATOR,
            })?;
    Ok((material, parse_int("thickness", thickness)?))
}

/// Parse an edge descriptor `material_thickness_width`.
///
/// An empty descriptor means the side has no banding.
pub fn parse_edge(side: EdgeSide, value: &str) -> Result<Option<Edge>, FieldError> {
    if value.is_empty() {
        return Ok(None);
    }

    let missing_separator = || FieldError::MissingSeparator {
        field: side.name(),
        separator: MATERIAL_SEPARATOR,
    };
    let (rest, width) = value
        .rsplit_once(MATERIAL_SEPARATOR)
        .ok_or_else(missing_separator)?;
    let (material, thickness) = rest
        .rsplit_once(MATERIAL_SEPARATOR)
        .ok_or_else(missing_separator)?;

    let thickness = parse_decimal(side.name(), thickness)?;
    let width = parse_decimal(side.name(), width)?;
    Edge::new(side, material, thickness, width).map(Some)
}

//! Webcut cutting-list parser.

use crate::error::{ConvertError, FieldError, Result};
use crate::model::{EdgeSide, Item, Orientation};
use std::path::Path;

use super::fields::*;

/// Parse one webcut line into an [`Item`].
///
/// The line is tokenized first, then each field goes through its own
/// sub-parser. Any mismatch yields [`ConvertError::Format`] carrying the raw line.
pub fn parse_item(line: &str) -> Result<Item> {
    parse_fields(line).map_err(|reason| ConvertError::format(line, reason))
}

fn parse_fields(line: &str) -> std::result::Result<Item, FieldError> {
    let [position, root_name, count, material, length, width, orientation, l1, l2, w1, w2] =
        split_record(line)?;

    let (root, name) = split_root_name(root_name)?;
    let (material, thickness) = split_material(material)?;

    Ok(Item {
        position: parse_int("position", position)?,
        root: root.to_string(),
        name: name.to_string(),
        material: material.to_string(),
        thickness,
        length: parse_int("length", length)?,
        width: parse_int("width", width)?,
        count: parse_int("count", count)?,
        oriented: Orientation::from_flag(orientation)?.is_oriented(),
        l1: parse_edge(EdgeSide::L1, l1)?,
        l2: parse_edge(EdgeSide::L2, l2)?,
        w1: parse_edge(EdgeSide::W1, w1)?,
        w2: parse_edge(EdgeSide::W2, w2)?,
    })
}

/// Webcut file parser.
pub struct WebcutParser<'a> {
    content: &'a str,
}

impl<'a> WebcutParser<'a> {
    /// Create a new parser over file content.
    pub fn new(content: &'a str) -> Self {
        Self { content }
    }

    /// Parse every record, skipping blank lines.
    ///
    /// Stops at the first malformed line; its 1-based number is attached to the error.
    pub fn parse(&self) -> Result<Vec<Item>> {
        self.content
            .lines()
            .enumerate()
            .filter(|(_, line)| !line.trim().is_empty())
            .map(|(idx, line)| parse_item(line).map_err(|e| e.at_line(idx + 1)))
            .collect()
    }
}

/// Parse a webcut file from a path.
pub fn parse_webcut_file(path: &Path) -> Result<Vec<Item>> {
    if !path.exists() {
        return Err(ConvertError::FileNotFound {
            path: path.to_path_buf(),
        });
    }

    let content = std::fs::read_to_string(path).map_err(|e| ConvertError::io(path, e))?;
    let items = WebcutParser::new(&content).parse()?;
    tracing::debug!("Parsed {} items from {}", items.len(), path.display());
    Ok(items)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const DOOR: &str = "\t\t1\tCabinet1.Door\t2\tOak_18\t600\t400\tN\tPVC_1_20\t\tPVC_1_20\t\n";

    #[test]
    fn test_parse_item_reference_line() {
        let item = parse_item(DOOR).unwrap();
        assert_eq!(item.position(), 1);
        assert_eq!(item.root(), "Cabinet1");
        assert_eq!(item.name(), "Door");
        assert_eq!(item.material(), "Oak");
        assert_eq!(item.thickness(), 18);
        assert_eq!(item.length(), 600);
        assert_eq!(item.width(), 400);
        assert_eq!(item.count(), 2);
        assert!(item.oriented());

        let l1 = item.edge(EdgeSide::L1).unwrap();
        assert_eq!(
            (l1.material(), l1.thickness(), l1.width()),
            ("PVC", 1.0, 20.0)
        );
        assert!(item.edge(EdgeSide::L2).is_none());
        assert_eq!(item.edge(EdgeSide::W1), item.edge(EdgeSide::L1));
        assert!(item.edge(EdgeSide::W2).is_none());
    }

    #[test]
    fn test_parse_item_not_oriented() {
        let item = parse_item("\t\t7\tK.Side\t1\tChipboard_16\t720\t560\tA\t\t\t\t").unwrap();
        assert!(!item.oriented());
        assert!(item.edges().iter().all(|(_, edge)| edge.is_none()));
    }

    #[test]
    fn test_parse_item_invalid_orientation() {
        let line = "\t\t1\tCabinet1.Door\t2\tOak_18\t600\t400\tX\t\t\t\t\n";
        let err = parse_item(line).unwrap_err();
        match err {
            ConvertError::Format {
                line: raw, reason, ..
            } => {
                assert_eq!(raw, line);
                assert_eq!(reason, FieldError::InvalidOrientation { value: "X".into() });
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_parse_item_missing_orientation() {
        let err = parse_item("\t\t1\tCabinet1.Door\t2\tOak_18\t600\t400\t\t\t\t\n").unwrap_err();
        assert!(err.is_format());
    }

    #[test]
    fn test_parse_item_non_numeric_length() {
        let err = parse_item("\t\t1\tC.D\t2\tOak_18\tlong\t400\tN\t\t\t\t").unwrap_err();
        assert!(err.is_numeric());
    }

    #[test]
    fn test_parse_item_bad_edge() {
        let err = parse_item("\t\t1\tC.D\t2\tOak_18\t600\t400\tN\tPVC\t\t\t").unwrap_err();
        assert!(err.is_format());
        assert!(!err.is_numeric());
    }

    #[test]
    fn test_parser_skips_blank_lines() {
        let content = format!("\n{DOOR}   \n\t\t2\tCabinet1.Shelf\t1\tOak_18\t560\t300\tA\t\t\t\t\n\n");
        let items = WebcutParser::new(&content).parse().unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[1].position(), 2);
    }

    #[test]
    fn test_parser_empty_content() {
        assert!(WebcutParser::new("").parse().unwrap().is_empty());
    }

    #[test]
    fn test_parser_reports_line_number() {
        let content = format!("{DOOR}\n\t\t2\tbroken\n");
        let err = WebcutParser::new(&content).parse().unwrap_err();
        match err {
            ConvertError::Format {
                line_number, line, ..
            } => {
                assert_eq!(line_number, Some(3));
                assert_eq!(line, "\t\t2\tbroken");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_parse_missing_file() {
        let err = parse_webcut_file(Path::new("does/not/exist.txt")).unwrap_err();
        assert!(matches!(err, ConvertError::FileNotFound { .. }));
    }
}

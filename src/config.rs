//! Configuration constants and settings for the converter.

use std::path::{Path, PathBuf};

/// Separator between fields of a webcut line.
pub const FIELD_SEPARATOR: char = '\t';

/// Number of empty tab-separated slots every webcut line starts with.
pub const LEADING_TABS: usize = 2;

/// Number of data fields in a webcut record (position through W2).
pub const RECORD_FIELD_COUNT: usize = 11;

/// Separator between root and name in the combined identifier field.
pub const NAME_SEPARATOR: char = '.';

/// Separator inside `material_thickness` and edge descriptors.
pub const MATERIAL_SEPARATOR: char = '_';

/// Field delimiter of the bazis cloud CSV.
pub const OUTPUT_DELIMITER: u8 = b';';

/// Column names of the bazis cloud CSV, in output order.
pub const BAZIS_HEADER: [&str; 11] = [
    "position",
    "name",
    "length",
    "width",
    "count",
    "noOrientation",
    "thicknessL1",
    "thicknessL2",
    "thicknessW1",
    "thicknessW2",
    "remark",
];

/// Value of `noOrientation` for panels whose texture direction does not matter.
pub const NO_ORIENTATION_FLAG: &str = "Y";

/// Joiner between part name and root in the `name` column.
pub const NAME_JOINER: &str = " # ";

/// Extension of generated files.
pub const OUTPUT_EXTENSION: &str = "csv";

/// Characters replaced with `_` when a material becomes part of a file name.
pub const FORBIDDEN_FILENAME_CHARS: [char; 9] = ['/', '\\', ':', '*', '?', '"', '<', '>', '|'];

/// Conversion settings.
#[derive(Debug, Clone, Default)]
pub struct ConvertConfig {
    /// Directory for generated files. `None` writes next to the input file.
    pub output_dir: Option<PathBuf>,
}

impl ConvertConfig {
    /// Create a configuration writing into `dir`.
    pub fn with_output_dir(dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: Some(dir.into()),
        }
    }

    /// Resolve the directory outputs for `input` are written to.
    pub fn output_dir_for(&self, input: &Path) -> PathBuf {
        match &self.output_dir {
            Some(dir) => dir.clone(),
            None => input.parent().map(Path::to_path_buf).unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_output_dir_defaults_to_input_parent() {
        let config = ConvertConfig::default();
        assert_eq!(
            config.output_dir_for(Path::new("/data/orders/kitchen.txt")),
            PathBuf::from("/data/orders")
        );
    }

    #[test]
    fn test_output_dir_bare_filename() {
        let config = ConvertConfig::default();
        assert_eq!(config.output_dir_for(Path::new("kitchen.txt")), PathBuf::new());
    }

    #[test]
    fn test_output_dir_override() {
        let config = ConvertConfig::with_output_dir("/tmp/out");
        assert_eq!(
            config.output_dir_for(Path::new("/data/kitchen.txt")),
            PathBuf::from("/tmp/out")
        );
    }

    #[test]
    fn test_header_column_count() {
        assert_eq!(BAZIS_HEADER.len(), 11);
        assert_eq!(
            BAZIS_HEADER.join(";"),
            "position;name;length;width;count;noOrientation;\
             thicknessL1;thicknessL2;thicknessW1;thicknessW2;remark"
        );
    }
}

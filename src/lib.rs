//! webcut2bazis - Convert webcut cutting lists to bazis cloud CSV files.
//!
//! A webcut export is a tab-separated list of panels. Each panel is parsed
//! into an [`Item`], items are grouped by board material and thickness, and
//! every group is written as its own semicolon-separated bazis CSV file.
//!
//! # Example
//!
//! ```no_run
//! use webcut2bazis::{convert_webcut_to_bazis, ConvertConfig};
//! use std::path::Path;
//!
//! let config = ConvertConfig::default();
//! let written = convert_webcut_to_bazis(Path::new("kitchen.txt"), &config).unwrap();
//! for file in &written {
//!     println!("{} items -> {}", file.item_count, file.path.display());
//! }
//! ```

pub mod config;
pub mod error;
pub mod generator;
pub mod model;
pub mod parser;
pub mod transform;

// Re-exports for convenience
pub use config::ConvertConfig;
pub use error::{ConvertError, FieldError, Result};
pub use generator::{generate_bazis_csv, write_bazis_file};
pub use model::{Edge, EdgeSide, Item, Orientation};
pub use parser::{parse_item, parse_webcut_file, WebcutParser};
pub use transform::{group_items, Group, GroupKey};

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tracing::info;

/// One generated bazis file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrittenFile {
    /// Material and thickness shared by the file's items.
    pub key: GroupKey,
    /// Number of rows written (excluding the header).
    pub item_count: usize,
    /// Destination path.
    pub path: PathBuf,
}

/// Group already parsed items and write one bazis file per group.
///
/// Fails with [`ConvertError::OutputCollision`] before writing anything if two
/// groups map to the same file name.
///
/// `input` only provides the output directory (unless overridden by
/// `config`) and the stem of the generated file names.
pub fn write_groups(
    items: Vec<Item>,
    input: &Path,
    config: &ConvertConfig,
) -> Result<Vec<WrittenFile>> {
    let dir = config.output_dir_for(input);
    if config.output_dir.is_some() {
        std::fs::create_dir_all(&dir).map_err(|e| ConvertError::io(&dir, e))?;
    }
    let planned = plan_outputs(group_items(items), &dir, input)?;
    let mut written = Vec::with_capacity(planned.len());

    for (path, group) in planned {
        write_bazis_file(&path, &group.items)?;
        info!("Saved {} items to {}", group.len(), path.display());
        written.push(WrittenFile {
            item_count: group.len(),
            key: group.key,
            path,
        });
    }

    Ok(written)
}

/// Assign an output path to every group, refusing two groups on one file.
///
/// Paths are compared case-insensitively so the check also holds on
/// Windows file systems.
fn plan_outputs(
    groups: Vec<Group>,
    dir: &Path,
    input: &Path,
) -> Result<Vec<(PathBuf, Group)>> {
    let mut seen: HashMap<String, GroupKey> = HashMap::new();
    let mut planned = Vec::with_capacity(groups.len());

    for group in groups {
        let path = generator::output_path(dir, input, &group.key);
        let folded = path.to_string_lossy().to_lowercase();
        if let Some(first) = seen.get(&folded) {
            return Err(ConvertError::OutputCollision {
                path,
                first: first.to_string(),
                second: group.key.to_string(),
            });
        }
        seen.insert(folded, group.key.clone());
        planned.push((path, group));
    }

    Ok(planned)
}

/// Convert a webcut file into bazis cloud CSV files.
///
/// This is the main high-level function that performs the full conversion pipeline:
/// 1. Parse every line of the webcut file
/// 2. Group the items by material and thickness
/// 3. Write one CSV file per group
///
/// The run stops at the first error; no file is written if parsing fails.
pub fn convert_webcut_to_bazis(
    input: &Path,
    config: &ConvertConfig,
) -> Result<Vec<WrittenFile>> {
    let items = parse_webcut_file(input)?;
    info!("Parsed {} items", items.len());
    write_groups(items, input, config)
}

//! Webcut file parser module.

mod fields;
mod webcut;

pub use fields::*;
pub use webcut::{parse_item, parse_webcut_file, WebcutParser};

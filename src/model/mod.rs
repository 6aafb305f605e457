//! Data model types for webcut to bazis conversion.

mod edge;
mod item;

pub use edge::{Edge, EdgeSide};
pub use item::{Item, Orientation};

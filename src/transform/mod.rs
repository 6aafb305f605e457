//! Transformation of parsed items before serialization.

mod group;

pub use group::{group_items, Group, GroupKey};

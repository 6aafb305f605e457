//! Item definition representing one cut panel of a webcut list.

use serde::Serialize;

use super::edge::{Edge, EdgeSide};
use crate::error::FieldError;

/// Texture direction flag of a webcut record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Orientation {
    /// `N`: grain direction must be preserved.
    Oriented,
    /// `A`: panel may be rotated freely.
    Free,
}

impl Orientation {
    /// Parse the single-letter webcut flag.
    pub fn from_flag(s: &str) -> Result<Self, FieldError> {
        match s {
            "N" => Ok(Orientation::Oriented),
            "A" => Ok(Orientation::Free),
            _ => Err(FieldError::InvalidOrientation {
                value: s.to_string(),
            }),
        }
    }

    /// Whether grain direction matters.
    pub fn is_oriented(&self) -> bool {
        matches!(self, Orientation::Oriented)
    }
}

/// One panel of the cutting list. Items are built once by the parser and
/// only read afterwards.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Item {
    pub(crate) position: u32,
    pub(crate) root: String,
    pub(crate) name: String,
    pub(crate) material: String,
    pub(crate) thickness: u32,
    pub(crate) length: u32,
    pub(crate) width: u32,
    pub(crate) count: u32,
    pub(crate) oriented: bool,
    pub(crate) l1: Option<Edge>,
    pub(crate) l2: Option<Edge>,
    pub(crate) w1: Option<Edge>,
    pub(crate) w2: Option<Edge>,
}

impl Item {
    /// Sequence number of the source line.
    pub fn position(&self) -> u32 {
        self.position
    }

    /// Project or cabinet identifier (text before the first dot).
    pub fn root(&self) -> &str {
        &self.root
    }

    /// Part identifier (text after the first dot).
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Board material.
    pub fn material(&self) -> &str {
        &self.material
    }

    /// Board thickness in millimeters.
    pub fn thickness(&self) -> u32 {
        self.thickness
    }

    /// Panel length in millimeters.
    pub fn length(&self) -> u32 {
        self.length
    }

    /// Panel width in millimeters.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Number of identical panels.
    pub fn count(&self) -> u32 {
        self.count
    }

    /// Whether grain direction must be preserved.
    pub fn oriented(&self) -> bool {
        self.oriented
    }

    /// Edge banding on one side, if any.
    pub fn edge(&self, side: EdgeSide) -> Option<&Edge> {
        match side {
            EdgeSide::L1 => self.l1.as_ref(),
            EdgeSide::L2 => self.l2.as_ref(),
            EdgeSide::W1 => self.w1.as_ref(),
            EdgeSide::W2 => self.w2.as_ref(),
        }
    }

    /// Edge banding of all four sides in L1, L2, W1, W2 order.
    pub fn edges(&self) -> [(EdgeSide, Option<&Edge>); 4] {
        EdgeSide::ALL.map(|side| (side, self.edge(side)))
    }
}

//! Edge-banding strip applied to one side of a panel.

use serde::Serialize;

use crate::error::FieldError;

/// Side of a panel an edge strip is glued to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum EdgeSide {
    /// First long side.
    L1,
    /// Second long side.
    L2,
    /// First short side.
    W1,
    /// Second short side.
    W2,
}

impl EdgeSide {
    /// All sides in record order.
    pub const ALL: [EdgeSide; 4] = [EdgeSide::L1, EdgeSide::L2, EdgeSide::W1, EdgeSide::W2];

    /// Field name used in webcut records and error messages.
    pub fn name(&self) -> &'static str {
        match self {
            EdgeSide::L1 => "L1",
            EdgeSide::L2 => "L2",
            EdgeSide::W1 => "W1",
            EdgeSide::W2 => "W2",
        }
    }
}

impl std::fmt::Display for EdgeSide {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// One edge-banding strip. Absence of banding is `Option::None` on the item,
/// never a zero-sized `Edge`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Edge {
    material: String,
    thickness: f64,
    width: f64,
}

impl Edge {
    /// Create an edge, checking the material is present and both
    /// dimensions are finite and non-negative.
    pub fn new(
        side: EdgeSide,
        material: impl Into<String>,
        thickness: f64,
        width: f64,
    ) -> Result<Self, FieldError> {
        let material = material.into();
        if material.is_empty() {
            return Err(FieldError::EmptyField { field: side.name() });
        }
        for value in [thickness, width] {
            if !value.is_finite() || value < 0.0 {
                return Err(FieldError::InvalidDecimal {
                    field: side.name(),
                    value: value.to_string(),
                });
            }
        }
        Ok(Self {
            material,
            thickness,
            width,
        })
    }

    /// Banding material identifier.
    pub fn material(&self) -> &str {
        &self.material
    }

    /// Strip thickness in millimeters.
    pub fn thickness(&self) -> f64 {
        self.thickness
    }

    /// Strip width in millimeters.
    pub fn width(&self) -> f64 {
        self.width
    }
}

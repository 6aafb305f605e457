//! Bazis cloud CSV generator module.

mod bazis;

pub use bazis::*;

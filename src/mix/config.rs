//! Configuration types for diagram assembly.
//!
//! This module defines the structures that control the behavior of the
//! [`assemble`](super::assemble) function. Settings cover canvas geometry
//! and the optional seeded position variation.
//!
//! # Overview
//!
//! - [`MixOptions`] — Top-level options struct
//! - [`LayoutConfig`] — Canvas and hexagon geometry

use serde::{Deserialize, Serialize};

/// Canvas and hexagon geometry for the layout engine.
///
/// All distances are in canvas units. Final node coordinates are clamped to
/// `[padding, dimension - padding]` on both axes.
///
/// # Examples
///
/// ```
/// use mixmol::LayoutConfig;
///
/// // Default 500x500 canvas
/// let default = LayoutConfig::default();
/// assert_eq!(default.dimension, 500.0);
///
/// // A tighter canvas for thumbnails
/// let thumb = LayoutConfig {
///     dimension: 200.0,
///     padding: 16.0,
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutConfig {
    /// Square canvas side length.
    pub dimension: f64,

    /// Minimum distance from any node center to the canvas edge.
    pub padding: f64,

    /// Circumradius of each spirit hexagon.
    pub hex_radius: f64,

    /// Node circle radius for non-spirit ingredients.
    pub node_radius: f64,

    /// Node circle radius for spirit ingredients.
    pub spirit_radius: f64,

    /// Distance between chained nodes; every rendered chain edge has this
    /// length.
    pub bond_length: f64,

    /// Apply small seeded positional variation to attached nodes.
    ///
    /// The seed derives from the ingredient-name sequence, so identical
    /// input still yields identical output.
    pub variation: bool,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            dimension: 500.0,
            padding: 40.0,
            hex_radius: 50.0,
            node_radius: 14.0,
            spirit_radius: 18.0,
            bond_length: 50.0,
            variation: false,
        }
    }
}

/// Top-level options for [`assemble`](super::assemble).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct MixOptions {
    pub layout: LayoutConfig,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_values() {
        let config = LayoutConfig::default();
        assert_eq!(config.dimension, 500.0);
        assert_eq!(config.padding, 40.0);
        assert_eq!(config.hex_radius, 50.0);
        assert_eq!(config.spirit_radius, 18.0);
        assert!(!config.variation);
    }

    #[test]
    fn padding_leaves_usable_area() {
        let config = LayoutConfig::default();
        assert!(config.dimension - 2.0 * config.padding > 4.0 * config.hex_radius);
    }
}

//! A pure Rust library that turns cocktail recipes into chemistry-styled
//! molecular diagrams. It parses free-text ingredient lines, classifies each
//! into one of nine categories, lays nodes out on a hexagonal honeycomb
//! around the spirit core, and connects them with typed bonds — plus an
//! independent generator for compact chemical-formula notation.
//!
//! # Features
//!
//! - **Ingredient parsing** — Amounts (decimals, fractions, mixed numbers,
//!   Unicode glyphs), a fixed unit vocabulary, and modifier stripping
//! - **Classification** — Keyword table with ranked tie-breaks and a fuzzy
//!   fallback cascade over nine ingredient categories
//! - **Honeycomb layout** — Spirit cores at the center, non-spirits chained
//!   zig-zag off hexagon corners, same-category groups closing into rings
//! - **Typed bonds** — Single, double, dashed, wedge, and hydrogen bonds
//!   assigned by a rule cascade over the connected pair
//! - **Formula notation** — GCD-simplified ratio formulas with Unicode
//!   subscripts, like `Tq₂ · Ol · Li` for a margarita
//!
//! # Quick Start
//!
//! The main entry point is the [`assemble`] function, which takes raw
//! ingredient lines and produces a complete [`MoleculeRecipe`]:
//!
//! ```
//! use mixmol::{assemble, generate_formula, MixOptions};
//!
//! let ingredients: Vec<String> = [
//!     "2 oz tequila",
//!     "1 oz cointreau",
//!     "1 oz lime juice",
//!     "lime wheel",
//! ]
//! .iter()
//! .map(|s| s.to_string())
//! .collect();
//!
//! let recipe = assemble(
//!     "Margarita",
//!     &ingredients,
//!     Some("Shake with ice and strain"),
//!     Some("coupe"),
//!     &MixOptions::default(),
//! );
//!
//! // One node per ingredient, one bond per non-spirit attachment
//! assert_eq!(recipe.node_count(), 4);
//! assert_eq!(recipe.bond_count(), 3);
//! assert_eq!(recipe.method.as_deref(), Some("Shaken · Coupe"));
//!
//! // The single spirit sits at the canvas center
//! let core = recipe.nodes.iter().find(|n| n.parent_id.is_none()).unwrap();
//! assert_eq!((core.x, core.y), (250.0, 250.0));
//!
//! // The parallel formula pipeline works from the same raw lines
//! assert_eq!(generate_formula(&ingredients), "Tq₂ · Ol · Li");
//! ```
//!
//! # Module Organization
//!
//! - [`mix`] — The diagram pipeline: parser, classifier, layout, bonds,
//!   method derivation, and boundary validation
//! - [`formula`] — The independent formula notation generator
//! - [`model`] — Plain data types shared by both pipelines
//!
//! # Data Types
//!
//! ## Input Structures
//!
//! - [`ParsedIngredient`] — One ingredient line after text extraction
//! - [`ClassifiedIngredient`] — A parsed ingredient with category and color
//! - [`IngredientType`] — The nine ingredient categories
//!
//! ## Output Structures
//!
//! - [`MoleculeRecipe`] — Complete diagram: nodes, bonds, backbone, method
//! - [`MoleculeNode`] — A positioned ingredient node
//! - [`MoleculeBond`] — A typed connection between two nodes
//! - [`BondType`] — Single, Double, Dashed, Wedge, DashedWedge, Wavy, Hydrogen
//! - [`MoleculeBackbone`] — The central hexagon or triangle outline
//!
//! ## Configuration
//!
//! - [`LayoutConfig`] — Canvas dimension, padding, radii, bond length
//! - [`MixOptions`] — Top-level pipeline options

pub mod formula;
pub mod mix;
pub mod model;

pub use model::ingredient::{ClassifiedIngredient, IngredientType, ParsedIngredient};
pub use model::molecule::{
    BackboneShape, BondType, MoleculeBackbone, MoleculeBond, MoleculeNode, MoleculeRecipe,
};

pub use mix::{
    assemble, collect_warnings, split_ingredient_list, validate_request, Error, LayoutConfig,
    MixOptions, ValidatedRequest, Warning,
};

pub use formula::{
    formula_elements, generate_formula, parse_formula_symbols, FormulaElement, FormulaSymbol,
};
pub use formula::symbols::FormulaCategory;

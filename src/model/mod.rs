//! Core data structures for cocktail molecule diagrams.
//!
//! This module provides the foundational types that flow through `mixmol`:
//!
//! - [`ingredient`] – Parsed ingredient lines and their nine-way classification.
//! - [`molecule`] – Positioned nodes, typed bonds, the backbone shape, and the
//!   composed recipe model.
//!
//! The data model intentionally separates raw parsed text
//! ([`ParsedIngredient`]) from the positioned diagram ([`MoleculeRecipe`]),
//! allowing the [`crate::mix`] pipeline to transform one into the other while
//! keeping the original input line inside every node.
//!
//! [`ParsedIngredient`]: ingredient::ParsedIngredient
//! [`MoleculeRecipe`]: molecule::MoleculeRecipe

pub mod ingredient;
pub mod molecule;

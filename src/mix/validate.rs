//! Boundary validation and advisory quality warnings.
//!
//! Validation rejects structurally invalid requests (missing or non-string
//! name, ingredients that are neither an array nor a string) before the
//! pipeline runs. Warnings never fail a request; they flag quality concerns
//! a caller may want to surface: empty ingredient lists, non-string entries,
//! nodes pressed against the canvas edge, or node pairs closer than the
//! minimum render distance.

use std::fmt;

use serde::Serialize;
use serde_json::Value;

use super::config::LayoutConfig;
use super::error::Error;
use crate::model::molecule::MoleculeRecipe;

/// Node pairs closer than this are flagged as overlapping.
const MIN_NODE_DISTANCE: f64 = 24.0;

/// Nodes within this distance of the clamp bound count as edge-pressed.
const EDGE_SLACK: f64 = 1.0;

/// Advisory quality findings; never failures.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase", tag = "kind")]
pub enum Warning {
    EmptyIngredients,
    NonStringEntry { index: usize },
    NodeNearEdge { id: String },
    NodesTooClose { a: String, b: String, distance: f64 },
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Warning::EmptyIngredients => write!(f, "ingredient list is empty"),
            Warning::NonStringEntry { index } => {
                write!(f, "ingredient entry {} is not a string and was skipped", index)
            }
            Warning::NodeNearEdge { id } => {
                write!(f, "node {} sits at the canvas edge", id)
            }
            Warning::NodesTooClose { a, b, distance } => {
                write!(f, "nodes {} and {} are only {:.1} units apart", a, b, distance)
            }
        }
    }
}

/// A structurally valid request, ready for the pipeline.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedRequest {
    pub name: String,
    pub ingredients: Vec<String>,
    pub warnings: Vec<Warning>,
}

/// Splits a raw ingredient string into individual entries.
///
/// A JSON-encoded array string is decoded; anything else falls back to
/// delimiter splitting, preferring `;`, then `|`, then comma.
pub fn split_ingredient_list(raw: &str) -> Vec<String> {
    if let Ok(Value::Array(items)) = serde_json::from_str::<Value>(raw) {
        return items
            .into_iter()
            .filter_map(|v| match v {
                Value::String(s) => Some(s),
                _ => None,
            })
            .collect();
    }
    let delimiter = if raw.contains(';') {
        ';'
    } else if raw.contains('|') {
        '|'
    } else {
        ','
    };
    raw.split(delimiter)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Validates a raw request at the boundary.
///
/// Non-string array entries are skipped with a warning rather than failing
/// the request; an empty resulting list is also only a warning.
pub fn validate_request(name: &Value, ingredients: &Value) -> Result<ValidatedRequest, Error> {
    let name = match name {
        Value::String(s) if !s.trim().is_empty() => s.trim().to_string(),
        _ => return Err(Error::InvalidName),
    };

    let mut warnings = Vec::new();
    let ingredients = match ingredients {
        Value::Array(items) => {
            let mut lines = Vec::with_capacity(items.len());
            for (index, item) in items.iter().enumerate() {
                match item {
                    Value::String(s) => lines.push(s.clone()),
                    _ => warnings.push(Warning::NonStringEntry { index }),
                }
            }
            lines
        }
        Value::String(s) => split_ingredient_list(s),
        other => {
            let type_name = match other {
                Value::Null => "null",
                Value::Bool(_) => "a boolean",
                Value::Number(_) => "a number",
                Value::Object(_) => "an object",
                _ => "an unsupported value",
            };
            return Err(Error::InvalidIngredients(type_name.to_string()));
        }
    };

    if ingredients.is_empty() {
        warnings.push(Warning::EmptyIngredients);
    }

    Ok(ValidatedRequest {
        name,
        ingredients,
        warnings,
    })
}

/// Collects post-layout advisory warnings for an assembled recipe.
pub fn collect_warnings(recipe: &MoleculeRecipe, config: &LayoutConfig) -> Vec<Warning> {
    let mut warnings = Vec::new();
    if recipe.nodes.is_empty() {
        warnings.push(Warning::EmptyIngredients);
    }

    let lo = config.padding + EDGE_SLACK;
    let hi = config.dimension - config.padding - EDGE_SLACK;
    for node in &recipe.nodes {
        if node.x <= lo || node.x >= hi || node.y <= lo || node.y >= hi {
            warnings.push(Warning::NodeNearEdge {
                id: node.id.clone(),
            });
        }
    }

    for (i, a) in recipe.nodes.iter().enumerate() {
        for b in recipe.nodes.iter().skip(i + 1) {
            let distance = (a.x - b.x).hypot(a.y - b.y);
            if distance < MIN_NODE_DISTANCE {
                warnings.push(Warning::NodesTooClose {
                    a: a.id.clone(),
                    b: b.id.clone(),
                    distance,
                });
            }
        }
    }

    warnings
}

use std::fmt;

use serde::{Deserialize, Serialize};

use super::ingredient::ClassifiedIngredient;

/// A positioned diagram node, one per classified ingredient.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoleculeNode {
    /// Unique id, derived from insertion order ("n0", "n1", ...).
    pub id: String,
    #[serde(flatten)]
    pub ingredient: ClassifiedIngredient,
    pub x: f64,
    pub y: f64,
    pub radius: f64,
    pub label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sublabel: Option<String>,
    /// Node this one was chained or attached from.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<String>,
    /// Multi-vertex attachment group membership.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ring_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ring_index: Option<usize>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum BondType {
    Single,
    Double,
    Dashed,
    Wedge,
    DashedWedge,
    Wavy,
    Hydrogen,
}

impl fmt::Display for BondType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            BondType::Single => "single",
            BondType::Double => "double",
            BondType::Dashed => "dashed",
            BondType::Wedge => "wedge",
            BondType::DashedWedge => "dashedWedge",
            BondType::Wavy => "wavy",
            BondType::Hydrogen => "hydrogen",
        };
        f.write_str(s)
    }
}

/// A typed edge between two nodes. The endpoint pair is unordered;
/// the constructor normalizes it so equal pairs compare equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoleculeBond {
    pub from: String,
    pub to: String,
    #[serde(rename = "type")]
    pub kind: BondType,
}

impl MoleculeBond {
    pub fn new(a: impl Into<String>, b: impl Into<String>, kind: BondType) -> Self {
        let (a, b) = (a.into(), b.into());
        if a <= b {
            Self { from: a, to: b, kind }
        } else {
            Self { from: b, to: a, kind }
        }
    }

    /// Canonical key for unordered-pair deduplication.
    pub fn pair_key(&self) -> (String, String) {
        (self.from.clone(), self.to.clone())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BackboneShape {
    Hexagon,
    Triangle,
}

/// The central shape anchoring the diagram, derived from spirit positions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoleculeBackbone {
    #[serde(rename = "type")]
    pub shape: BackboneShape,
    pub cx: f64,
    pub cy: f64,
    pub radius: f64,
}

/// The composed diagram model handed to a rendering layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoleculeRecipe {
    pub name: String,
    /// Derived display hint (technique + glass shorthand).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub method: Option<String>,
    pub nodes: Vec<MoleculeNode>,
    pub bonds: Vec<MoleculeBond>,
    pub backbone: MoleculeBackbone,
}

impl MoleculeRecipe {
    #[inline]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn bond_count(&self) -> usize {
        self.bonds.len()
    }

    pub fn node(&self, id: &str) -> Option<&MoleculeNode> {
        self.nodes.iter().find(|n| n.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bond_constructor_normalizes_pair_order() {
        let a = MoleculeBond::new("n3", "n1", BondType::Single);
        let b = MoleculeBond::new("n1", "n3", BondType::Single);
        assert_eq!(a, b);
        assert_eq!(a.from, "n1");
        assert_eq!(a.to, "n3");
    }

    #[test]
    fn pair_key_ignores_input_order() {
        let a = MoleculeBond::new("n9", "n2", BondType::Wavy);
        let b = MoleculeBond::new("n2", "n9", BondType::Double);
        assert_eq!(a.pair_key(), b.pair_key());
    }

    #[test]
    fn bond_type_display_names() {
        assert_eq!(BondType::DashedWedge.to_string(), "dashedWedge");
        assert_eq!(BondType::Hydrogen.to_string(), "hydrogen");
    }

    #[test]
    fn bond_serializes_with_type_field() {
        let bond = MoleculeBond::new("n0", "n1", BondType::DashedWedge);
        let json = serde_json::to_value(&bond).unwrap();
        assert_eq!(json["type"], "dashedWedge");
        assert_eq!(json["from"], "n0");
    }
}

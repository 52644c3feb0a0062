//! Bond generation over positioned nodes.
//!
//! Ring groups get one bond per adjacent pair around the cycle plus one bond
//! from the attachment vertex to its external parent; every other non-spirit
//! node with a parent gets a single bond to it. The bond type is resolved by
//! a rule cascade where the first match wins.

use std::collections::HashSet;

use crate::model::ingredient::IngredientType;
use crate::model::molecule::{BondType, MoleculeBond, MoleculeNode};

/// Mixers whose bond renders dashed.
const CARBONATED: &[&str] = &[
    "soda",
    "seltzer",
    "sparkling",
    "tonic",
    "cola",
    "ginger beer",
    "ginger ale",
    "champagne",
    "prosecco",
    "cava",
    "beer",
];

fn is_optional(node: &MoleculeNode) -> bool {
    node.ingredient
        .ingredient
        .modifiers
        .iter()
        .any(|m| m == "optional")
        || node.ingredient.ingredient.raw.to_lowercase().contains("optional")
}

fn is_carbonated(node: &MoleculeNode) -> bool {
    let name = &node.ingredient.ingredient.name;
    CARBONATED.iter().any(|c| name.contains(c))
}

/// Resolves the bond type for the edge attaching `subject` to `other`.
/// First matching rule wins.
fn resolve_bond_type(subject: &MoleculeNode, other: &MoleculeNode) -> BondType {
    let raw = subject.ingredient.ingredient.raw.to_lowercase();
    if is_optional(subject) {
        return BondType::Hydrogen;
    }
    if subject.ingredient.ingredient.amount.is_none() && !subject.ingredient.is_spirit() {
        return BondType::Wavy;
    }
    if subject.ingredient.kind == IngredientType::Garnish {
        return BondType::Wedge;
    }
    if subject.ingredient.kind == IngredientType::Bitter
        || raw.contains("dash")
        || raw.contains("drop")
    {
        return BondType::DashedWedge;
    }
    if is_carbonated(subject) {
        return BondType::Dashed;
    }
    let pair = (subject.ingredient.kind, other.ingredient.kind);
    if matches!(
        pair,
        (IngredientType::Acid, IngredientType::Sweet)
            | (IngredientType::Sweet, IngredientType::Acid)
    ) {
        return BondType::Double;
    }
    BondType::Single
}

/// Generates the bond set for a node list. Each unordered node pair appears
/// at most once.
pub fn generate_bonds(nodes: &[MoleculeNode]) -> Vec<MoleculeBond> {
    let mut bonds = Vec::new();
    let mut seen: HashSet<(String, String)> = HashSet::new();

    let mut push = |bond: MoleculeBond, bonds: &mut Vec<MoleculeBond>| {
        if seen.insert(bond.pair_key()) {
            bonds.push(bond);
        }
    };

    let find = |id: &str| nodes.iter().find(|n| n.id == id);

    // Ring groups first: cycle bonds plus the attachment bond.
    let mut ring_ids: Vec<&str> = Vec::new();
    for node in nodes {
        if let Some(rid) = node.ring_id.as_deref() {
            if !ring_ids.contains(&rid) {
                ring_ids.push(rid);
            }
        }
    }
    for rid in ring_ids {
        let mut members: Vec<&MoleculeNode> = nodes
            .iter()
            .filter(|n| n.ring_id.as_deref() == Some(rid))
            .collect();
        members.sort_by_key(|n| n.ring_index.unwrap_or(0));
        if members.len() < 2 {
            continue;
        }
        for i in 0..members.len() {
            let a = members[i];
            let b = members[(i + 1) % members.len()];
            let kind = resolve_bond_type(b, a);
            push(MoleculeBond::new(&a.id, &b.id, kind), &mut bonds);
        }
        let attachment = members[0];
        if let Some(parent) = attachment.parent_id.as_deref().and_then(find) {
            let kind = resolve_bond_type(attachment, parent);
            push(MoleculeBond::new(&attachment.id, &parent.id, kind), &mut bonds);
        }
    }

    // Everything else bonds to its parent.
    for node in nodes {
        if node.ring_id.is_some() || node.ingredient.is_spirit() {
            continue;
        }
        if let Some(parent) = node.parent_id.as_deref().and_then(find) {
            let kind = resolve_bond_type(node, parent);
            push(MoleculeBond::new(&node.id, &parent.id, kind), &mut bonds);
        }
    }

    bonds
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mix::classifier::classify;
    use crate::mix::config::LayoutConfig;
    use crate::mix::layout::compute_layout;
    use crate::mix::parser::parse;

    fn nodes_for(lines: &[&str]) -> Vec<MoleculeNode> {
        let classified: Vec<_> = lines.iter().map(|l| classify(parse(l))).collect();
        compute_layout(&classified, &LayoutConfig::default()).0
    }

    fn bond_to(nodes: &[MoleculeNode], bonds: &[MoleculeBond], name: &str) -> BondType {
        let node = nodes
            .iter()
            .find(|n| n.ingredient.ingredient.name == name)
            .unwrap();
        bonds
            .iter()
            .find(|b| b.from == node.id || b.to == node.id)
            .unwrap()
            .kind
    }

    #[test]
    fn every_bond_references_existing_nodes() {
        let nodes = nodes_for(&[
            "2 oz gin",
            "1 oz lime juice",
            "3/4 oz simple syrup",
            "2 dashes orange bitters",
        ]);
        let bonds = generate_bonds(&nodes);
        assert!(!bonds.is_empty());
        for bond in &bonds {
            assert!(nodes.iter().any(|n| n.id == bond.from));
            assert!(nodes.iter().any(|n| n.id == bond.to));
        }
    }

    #[test]
    fn no_duplicate_unordered_pairs() {
        let nodes = nodes_for(&[
            "2 oz rum",
            "1 oz lime juice",
            "mint sprig",
            "cherry",
            "lime wheel",
        ]);
        let bonds = generate_bonds(&nodes);
        let mut keys: Vec<_> = bonds.iter().map(|b| b.pair_key()).collect();
        keys.sort();
        keys.dedup();
        assert_eq!(keys.len(), bonds.len());
    }

    #[test]
    fn optional_ingredient_gets_hydrogen_bond() {
        let nodes = nodes_for(&["2 oz gin", "1 oz lime juice (optional)"]);
        let bonds = generate_bonds(&nodes);
        assert_eq!(bond_to(&nodes, &bonds, "lime juice"), BondType::Hydrogen);
    }

    #[test]
    fn missing_amount_gets_wavy_bond() {
        let nodes = nodes_for(&["2 oz vodka", "splash of cranberry juice"]);
        let bonds = generate_bonds(&nodes);
        assert_eq!(bond_to(&nodes, &bonds, "cranberry juice"), BondType::Wavy);
    }

    #[test]
    fn garnish_gets_wedge_bond() {
        let nodes = nodes_for(&["2 oz gin", "1 lime wheel"]);
        let bonds = generate_bonds(&nodes);
        assert_eq!(bond_to(&nodes, &bonds, "lime wheel"), BondType::Wedge);
    }

    #[test]
    fn bitters_and_dashes_get_dashed_wedge() {
        let nodes = nodes_for(&["2 oz rye whiskey", "2 dashes angostura bitters"]);
        let bonds = generate_bonds(&nodes);
        assert_eq!(
            bond_to(&nodes, &bonds, "angostura bitters"),
            BondType::DashedWedge
        );
    }

    #[test]
    fn carbonated_mixer_gets_dashed_bond() {
        let nodes = nodes_for(&["2 oz vodka", "4 oz ginger beer"]);
        let bonds = generate_bonds(&nodes);
        assert_eq!(bond_to(&nodes, &bonds, "ginger beer"), BondType::Dashed);
    }

    #[test]
    fn acid_adjacent_to_sweet_resolves_double() {
        let nodes = nodes_for(&["1 oz lime juice", "3/4 oz simple syrup"]);
        let acid = nodes
            .iter()
            .find(|n| n.ingredient.kind == IngredientType::Acid)
            .unwrap();
        let sweet = nodes
            .iter()
            .find(|n| n.ingredient.kind == IngredientType::Sweet)
            .unwrap();
        assert_eq!(resolve_bond_type(acid, sweet), BondType::Double);
        assert_eq!(resolve_bond_type(sweet, acid), BondType::Double);
    }

    #[test]
    fn measured_acid_bonded_to_spirit_stays_single() {
        let nodes = nodes_for(&["2 oz gin", "1 oz lime juice"]);
        let bonds = generate_bonds(&nodes);
        assert_eq!(bond_to(&nodes, &bonds, "lime juice"), BondType::Single);
    }

    #[test]
    fn ring_groups_bond_cyclically_plus_attachment() {
        let nodes = nodes_for(&["2 oz rum", "mint sprig", "cherry", "lime wheel"]);
        let bonds = generate_bonds(&nodes);
        let ring_ids: Vec<&str> = nodes.iter().filter_map(|n| n.ring_id.as_deref()).collect();
        assert_eq!(ring_ids.len(), 3);
        // 3-cycle plus one attachment bond to the spirit.
        assert_eq!(bonds.len(), 4);
        let spirit = nodes.iter().find(|n| n.ingredient.is_spirit()).unwrap();
        assert_eq!(
            bonds
                .iter()
                .filter(|b| b.from == spirit.id || b.to == spirit.id)
                .count(),
            1
        );
    }

    #[test]
    fn spirits_never_bond_to_each_other() {
        let nodes = nodes_for(&["1 oz gin", "1 oz vodka"]);
        let bonds = generate_bonds(&nodes);
        assert!(bonds.is_empty());
    }
}

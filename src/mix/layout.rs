//! Hexagonal honeycomb layout for classified ingredients.
//!
//! Spirits form the fused-ring core: one to three hexagons in fixed
//! arrangements, four or more in a vertical stack at honeycomb pitch
//! (`hex_radius * sqrt(3)`). Every non-spirit ingredient attaches to a spirit
//! hexagon at one of six fixed corner angles, assigned by ingredient-type
//! group and round-robined across spirits. Same-group overflow at a corner
//! chains outward in a constant-bond-length zig-zag; three or more members
//! become a closed ring. All placement is rule-based and deterministic; the
//! name-seeded generator only drives optional positional variation.

use crate::mix::classifier::{display_label, spirit_family};
use crate::mix::config::LayoutConfig;
use crate::model::ingredient::{ClassifiedIngredient, IngredientType};
use crate::model::molecule::{BackboneShape, MoleculeBackbone, MoleculeNode};

/// Corner angles of a flat-top hexagon (vertex-top rotated 30°).
///
/// The honeycomb-adjacency exclusion depends on exact angle correspondence,
/// so these stay named constants rather than recomputed modulo arithmetic.
pub const CORNER_ANGLES_DEG: [f64; 6] = [-60.0, 0.0, 60.0, 120.0, 180.0, -120.0];

/// Hex-edge directions; chains alternate between the two edges flanking
/// their corner (corner angle ∓ 30°).
pub const EDGE_ANGLES_DEG: [f64; 6] = [-30.0, 30.0, 90.0, 150.0, -150.0, -90.0];

/// Corners within this angular distance of a neighboring spirit's direction
/// are reserved for the shared edge and never assigned to ingredients.
const ADJACENCY_EXCLUSION_DEG: f64 = 61.0;

/// Same-group members at one corner from this count upward form a ring
/// instead of a chain.
const RING_THRESHOLD: usize = 3;

fn corner_preferences(kind: IngredientType) -> &'static [usize] {
    match kind {
        IngredientType::Acid => &[1, 2],
        IngredientType::Sweet => &[4, 3],
        IngredientType::Garnish => &[0, 5],
        IngredientType::Bitter => &[3, 2],
        _ => &[0, 1, 2, 3, 4, 5],
    }
}

#[inline]
fn dir(angle_deg: f64) -> (f64, f64) {
    let r = angle_deg.to_radians();
    (r.cos(), r.sin())
}

fn angular_distance_deg(a: f64, b: f64) -> f64 {
    let mut d = (a - b).rem_euclid(360.0);
    if d > 180.0 {
        d = 360.0 - d;
    }
    d
}

/// FNV-1a over the ingredient-name sequence; seeds the variation generator.
fn name_sequence_hash(classified: &[ClassifiedIngredient]) -> u64 {
    let mut hash: u64 = 0xcbf29ce484222325;
    for ing in classified {
        for byte in ing.ingredient.name.bytes() {
            hash ^= byte as u64;
            hash = hash.wrapping_mul(0x100000001b3);
        }
        hash ^= 0x1f;
        hash = hash.wrapping_mul(0x100000001b3);
    }
    hash
}

/// Linear-congruential generator for controlled variation only; core
/// placement never consults it.
struct Lcg(u64);

impl Lcg {
    fn new(seed: u64) -> Self {
        Self(seed)
    }

    fn next_f64(&mut self) -> f64 {
        self.0 = self
            .0
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        (self.0 >> 11) as f64 / (1u64 << 53) as f64
    }

    fn jitter(&mut self, span: f64) -> f64 {
        (self.next_f64() * 2.0 - 1.0) * span
    }
}

/// Positions for the spirit cluster, centered on the canvas midpoint, and
/// the backbone shape the cluster implies.
fn place_spirits(
    families: &[&'static str],
    center: (f64, f64),
    pitch: f64,
) -> (Vec<(f64, f64)>, BackboneShape) {
    let (cx, cy) = center;
    match families.len() {
        0 => (Vec::new(), BackboneShape::Hexagon),
        1 => (vec![(cx, cy)], BackboneShape::Hexagon),
        2 => (
            vec![(cx, cy - pitch / 2.0), (cx, cy + pitch / 2.0)],
            BackboneShape::Hexagon,
        ),
        3 if families.iter().all(|f| *f == families[0]) => {
            // Compact mutually-touching triangle: anchor plus 30°/330°
            // offsets, recentered on the triangle centroid.
            let d30 = dir(30.0);
            let d330 = dir(330.0);
            let off_x = pitch * (d30.0 + d330.0) / 3.0;
            let off_y = pitch * (d30.1 + d330.1) / 3.0;
            let anchor = (cx - off_x, cy - off_y);
            (
                vec![
                    anchor,
                    (anchor.0 + pitch * d30.0, anchor.1 + pitch * d30.1),
                    (anchor.0 + pitch * d330.0, anchor.1 + pitch * d330.1),
                ],
                BackboneShape::Triangle,
            )
        }
        3 => {
            // Mixed families: V-shape, anchor plus 210°/330° offsets.
            let d210 = dir(210.0);
            let d330 = dir(330.0);
            let off_x = pitch * (d210.0 + d330.0) / 3.0;
            let off_y = pitch * (d210.1 + d330.1) / 3.0;
            let anchor = (cx - off_x, cy - off_y);
            (
                vec![
                    anchor,
                    (anchor.0 + pitch * d210.0, anchor.1 + pitch * d210.1),
                    (anchor.0 + pitch * d330.0, anchor.1 + pitch * d330.1),
                ],
                BackboneShape::Hexagon,
            )
        }
        n => {
            let positions = (0..n)
                .map(|i| (cx, cy + (i as f64 - (n as f64 - 1.0) / 2.0) * pitch))
                .collect();
            (positions, BackboneShape::Hexagon)
        }
    }
}

/// Corners of a spirit not pointing at a honeycomb neighbor.
fn available_corners(spirit: usize, positions: &[(f64, f64)], pitch: f64) -> Vec<usize> {
    let (sx, sy) = positions[spirit];
    let mut reserved = [false; 6];
    for (other, &(ox, oy)) in positions.iter().enumerate() {
        if other == spirit {
            continue;
        }
        let (dx, dy) = (ox - sx, oy - sy);
        if dx.hypot(dy) > pitch * 1.05 {
            continue;
        }
        let toward = dy.atan2(dx).to_degrees();
        for (c, &angle) in CORNER_ANGLES_DEG.iter().enumerate() {
            if angular_distance_deg(angle, toward) < ADJACENCY_EXCLUSION_DEG {
                reserved[c] = true;
            }
        }
    }
    (0..6).filter(|&c| !reserved[c]).collect()
}

fn choose_corner(
    kind: IngredientType,
    available: &[usize],
    occupied: &[bool; 6],
) -> usize {
    let prefs = corner_preferences(kind);
    if let Some(&c) = prefs
        .iter()
        .find(|&&c| available.contains(&c) && !occupied[c])
    {
        return c;
    }
    if let Some(&c) = available.iter().find(|&&c| !occupied[c]) {
        return c;
    }
    // Every usable corner taken; double up on the group's first preference.
    *prefs
        .iter()
        .find(|&&c| available.contains(&c))
        .or(available.first())
        .unwrap_or(&prefs[0])
}

/// Amount and unit as a short display string ("2 oz", "1 dash").
fn measure_text(ingredient: &ClassifiedIngredient) -> Option<String> {
    let amount = ingredient.ingredient.amount?;
    let amount_text = if amount.fract() == 0.0 {
        format!("{}", amount as i64)
    } else {
        format!("{}", amount)
    };
    Some(match &ingredient.ingredient.unit {
        Some(unit) => format!("{} {}", amount_text, unit),
        None => amount_text,
    })
}

fn make_node(
    index: usize,
    ingredient: &ClassifiedIngredient,
    x: f64,
    y: f64,
    radius: f64,
) -> MoleculeNode {
    MoleculeNode {
        id: format!("n{}", index),
        ingredient: ingredient.clone(),
        x,
        y,
        radius,
        label: display_label(ingredient),
        sublabel: measure_text(ingredient),
        parent_id: None,
        ring_id: None,
        ring_index: None,
    }
}

/// Computes positioned nodes and the backbone for a classified ingredient
/// list. Pure and deterministic: identical input yields identical output.
pub fn compute_layout(
    classified: &[ClassifiedIngredient],
    config: &LayoutConfig,
) -> (Vec<MoleculeNode>, MoleculeBackbone) {
    let center = (config.dimension / 2.0, config.dimension / 2.0);
    let pitch = config.hex_radius * 3.0_f64.sqrt();
    let mut rng = Lcg::new(name_sequence_hash(classified));

    let spirit_indices: Vec<usize> = classified
        .iter()
        .enumerate()
        .filter(|(_, ing)| ing.is_spirit())
        .map(|(i, _)| i)
        .collect();

    let families: Vec<&'static str> = spirit_indices
        .iter()
        .map(|&i| spirit_family(&classified[i].ingredient.name))
        .collect();

    let (spirit_positions, shape) = place_spirits(&families, center, pitch);

    let backbone_center = if spirit_positions.is_empty() {
        center
    } else {
        let n = spirit_positions.len() as f64;
        (
            spirit_positions.iter().map(|p| p.0).sum::<f64>() / n,
            spirit_positions.iter().map(|p| p.1).sum::<f64>() / n,
        )
    };
    let backbone = MoleculeBackbone {
        shape,
        cx: backbone_center.0,
        cy: backbone_center.1,
        radius: config.hex_radius,
    };

    let mut nodes: Vec<Option<MoleculeNode>> = vec![None; classified.len()];

    if spirit_indices.is_empty() {
        // No anchor hexagon: distribute everything evenly on a circle.
        let count = classified.len().max(1) as f64;
        for (i, ing) in classified.iter().enumerate() {
            let angle = -90.0 + i as f64 * 360.0 / count;
            let d = dir(angle);
            let r = config.hex_radius * 2.0;
            nodes[i] = Some(make_node(
                i,
                ing,
                center.0 + d.0 * r,
                center.1 + d.1 * r,
                config.node_radius,
            ));
        }
        return finalize(nodes, backbone, config);
    }

    for (si, &ci) in spirit_indices.iter().enumerate() {
        let (x, y) = spirit_positions[si];
        nodes[ci] = Some(make_node(ci, &classified[ci], x, y, config.spirit_radius));
    }

    let corners: Vec<Vec<usize>> = (0..spirit_positions.len())
        .map(|s| available_corners(s, &spirit_positions, pitch))
        .collect();

    // Round-robin each type group across spirits in insertion order, then
    // place per (spirit, group) bucket so overflow chains stay together.
    let mut group_counts: Vec<(IngredientType, usize)> = Vec::new();
    let mut buckets: Vec<((usize, IngredientType), Vec<usize>)> = Vec::new();
    for (i, ing) in classified.iter().enumerate() {
        if ing.is_spirit() {
            continue;
        }
        let count = match group_counts.iter_mut().find(|(k, _)| *k == ing.kind) {
            Some((_, c)) => {
                let current = *c;
                *c += 1;
                current
            }
            None => {
                group_counts.push((ing.kind, 1));
                0
            }
        };
        let spirit = count % spirit_indices.len();
        let key = (spirit, ing.kind);
        match buckets.iter_mut().find(|(k, _)| *k == key) {
            Some((_, members)) => members.push(i),
            None => buckets.push((key, vec![i])),
        }
    }

    let mut occupied: Vec<[bool; 6]> = vec![[false; 6]; spirit_positions.len()];
    let mut ring_seq = 0usize;

    for ((spirit, kind), members) in buckets {
        let corner = choose_corner(kind, &corners[spirit], &occupied[spirit]);
        occupied[spirit][corner] = true;

        let spirit_id = format!("n{}", spirit_indices[spirit]);
        let (sx, sy) = spirit_positions[spirit];
        let corner_angle = CORNER_ANGLES_DEG[corner];
        let cd = dir(corner_angle);
        let anchor = (
            sx + cd.0 * (config.hex_radius + config.bond_length),
            sy + cd.1 * (config.hex_radius + config.bond_length),
        );

        if members.len() >= RING_THRESHOLD {
            let m = members.len() as f64;
            let ring_radius =
                config.bond_length / (2.0 * (std::f64::consts::PI / m).sin());
            let ring_center = (anchor.0 + cd.0 * ring_radius, anchor.1 + cd.1 * ring_radius);
            let ring_id = format!("g{}", ring_seq);
            ring_seq += 1;
            for (k, &idx) in members.iter().enumerate() {
                let angle = corner_angle + 180.0 + k as f64 * 360.0 / m;
                let d = dir(angle);
                let mut node = make_node(
                    idx,
                    &classified[idx],
                    ring_center.0 + d.0 * ring_radius,
                    ring_center.1 + d.1 * ring_radius,
                    config.node_radius,
                );
                node.ring_id = Some(ring_id.clone());
                node.ring_index = Some(k);
                if k == 0 {
                    node.parent_id = Some(spirit_id.clone());
                }
                nodes[idx] = Some(node);
            }
        } else {
            let mut pos = anchor;
            let mut parent = spirit_id.clone();
            for (k, &idx) in members.iter().enumerate() {
                if k > 0 {
                    // Zig-zag: alternate between the two hex-edge directions
                    // flanking the corner, keeping every edge at bond length.
                    let zig = if k % 2 == 1 {
                        EDGE_ANGLES_DEG[(corner + 5) % 6]
                    } else {
                        EDGE_ANGLES_DEG[corner]
                    };
                    let d = dir(zig);
                    pos = (
                        pos.0 + d.0 * config.bond_length,
                        pos.1 + d.1 * config.bond_length,
                    );
                }
                let (mut x, mut y) = pos;
                if config.variation {
                    x += rng.jitter(config.node_radius * 0.25);
                    y += rng.jitter(config.node_radius * 0.25);
                }
                let mut node =
                    make_node(idx, &classified[idx], x, y, config.node_radius);
                node.parent_id = Some(parent.clone());
                parent = node.id.clone();
                nodes[idx] = Some(node);
            }
        }
    }

    finalize(nodes, backbone, config)
}

/// Clamps every coordinate into the padded canvas and unwraps the node slots.
fn finalize(
    nodes: Vec<Option<MoleculeNode>>,
    backbone: MoleculeBackbone,
    config: &LayoutConfig,
) -> (Vec<MoleculeNode>, MoleculeBackbone) {
    // Padding beyond half the dimension collapses the usable area to the
    // canvas center instead of inverting the clamp range.
    let lo = config.padding.min(config.dimension / 2.0);
    let hi = (config.dimension - config.padding).max(lo);
    let nodes = nodes
        .into_iter()
        .flatten()
        .map(|mut node| {
            node.x = node.x.clamp(lo, hi);
            node.y = node.y.clamp(lo, hi);
            node
        })
        .collect();
    (nodes, backbone)
}

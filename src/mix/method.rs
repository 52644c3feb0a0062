//! Display method derivation from free-text instructions and glassware.
//!
//! Produces the short "technique · glass" hint shown under a diagram. The
//! first matched technique keyword wins; glass names go through an exact
//! lookup after normalization.

/// Technique vocabulary in match order; the first hit wins.
const TECHNIQUES: &[(&str, &str)] = &[
    ("shake", "Shaken"),
    ("stir", "Stirred"),
    ("swizzle", "Swizzled"),
    ("muddle", "Muddled"),
    ("blend", "Blended"),
    // "buil" so both "build" and "built" match.
    ("buil", "Built"),
    ("throw", "Thrown"),
    ("roll", "Rolled"),
    ("layer", "Layered"),
];

/// Exact glass lookup: normalized input → short display name.
const GLASSES: &[(&str, &str)] = &[
    ("coupe", "Coupe"),
    ("coupe glass", "Coupe"),
    ("rocks", "Rocks"),
    ("rocks glass", "Rocks"),
    ("old fashioned glass", "Rocks"),
    ("double rocks glass", "Rocks"),
    ("highball", "Highball"),
    ("highball glass", "Highball"),
    ("collins", "Collins"),
    ("collins glass", "Collins"),
    ("martini", "Martini"),
    ("martini glass", "Martini"),
    ("cocktail glass", "Martini"),
    ("nick & nora", "Nick & Nora"),
    ("nick and nora", "Nick & Nora"),
    ("flute", "Flute"),
    ("champagne flute", "Flute"),
    ("copper mug", "Mug"),
    ("mule mug", "Mug"),
    ("mug", "Mug"),
    ("hurricane", "Hurricane"),
    ("hurricane glass", "Hurricane"),
    ("tiki mug", "Tiki"),
    ("julep tin", "Julep"),
    ("wine glass", "Wine"),
    ("shot glass", "Shot"),
];

fn technique_for(instructions: &str) -> Option<&'static str> {
    let lowered = instructions.to_lowercase();
    TECHNIQUES
        .iter()
        .find(|(root, _)| lowered.contains(root))
        .map(|(_, label)| *label)
}

fn glass_for(glass: &str) -> Option<&'static str> {
    let normalized = glass.trim().to_lowercase();
    GLASSES
        .iter()
        .find(|(name, _)| *name == normalized)
        .map(|(_, label)| *label)
}

/// Derives the display method hint; `None` when neither input matched.
pub fn derive_method(instructions: Option<&str>, glass: Option<&str>) -> Option<String> {
    let technique = instructions.and_then(technique_for);
    let glass = glass.and_then(glass_for);
    match (technique, glass) {
        (Some(t), Some(g)) => Some(format!("{} · {}", t, g)),
        (Some(t), None) => Some(t.to_string()),
        (None, Some(g)) => Some(g.to_string()),
        (None, None) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_technique_keyword_wins() {
        let m = derive_method(Some("Shake hard, then stir gently"), None);
        assert_eq!(m.as_deref(), Some("Shaken"));
    }

    #[test]
    fn technique_and_glass_join_with_interpunct() {
        let m = derive_method(Some("Stir with ice and strain"), Some("coupe"));
        assert_eq!(m.as_deref(), Some("Stirred · Coupe"));
    }

    #[test]
    fn glass_lookup_is_exact_after_normalization() {
        assert_eq!(derive_method(None, Some("  Rocks Glass ")).as_deref(), Some("Rocks"));
        assert_eq!(derive_method(None, Some("old fashioned glass")).as_deref(), Some("Rocks"));
        assert_eq!(derive_method(None, Some("mystery goblet")), None);
    }

    #[test]
    fn no_inputs_yield_none() {
        assert_eq!(derive_method(None, None), None);
        assert_eq!(derive_method(Some("garnish and serve"), None), None);
    }
}

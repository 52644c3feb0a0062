//! Free-text ingredient line parsing.
//!
//! [`parse`] extracts, in order: a leading amount (decimal, simple fraction,
//! mixed number, or Unicode fraction glyph), an optional unit token from a
//! fixed vocabulary, modifier words, and the residual lowercased name.
//! [`parse_ingredients`] additionally expands the `"<amount> <unit> each: a,
//! b, and c"` shorthand into one entry per listed name before per-item
//! parsing. Parsing never fails; missing pieces stay `None`.

use crate::model::ingredient::ParsedIngredient;

/// Unit vocabulary: accepted token → canonical short form.
const UNIT_ALIASES: &[(&str, &str)] = &[
    ("oz", "oz"),
    ("ounce", "oz"),
    ("ounces", "oz"),
    ("ml", "ml"),
    ("cl", "cl"),
    ("dash", "dash"),
    ("dashes", "dash"),
    ("drop", "drop"),
    ("drops", "drop"),
    ("barspoon", "barspoon"),
    ("barspoons", "barspoon"),
    ("bsp", "barspoon"),
    ("tsp", "tsp"),
    ("teaspoon", "tsp"),
    ("teaspoons", "tsp"),
    ("tbsp", "tbsp"),
    ("tablespoon", "tbsp"),
    ("tablespoons", "tbsp"),
    ("cup", "cup"),
    ("cups", "cup"),
    ("part", "part"),
    ("parts", "part"),
    ("shot", "shot"),
    ("shots", "shot"),
    ("pony", "pony"),
    ("splash", "splash"),
    ("splashes", "splash"),
    ("rinse", "rinse"),
    ("slice", "slice"),
    ("slices", "slice"),
    ("piece", "piece"),
    ("pieces", "piece"),
    ("sprig", "sprig"),
    ("sprigs", "sprig"),
    ("leaf", "leaf"),
    ("leaves", "leaf"),
    ("wheel", "wheel"),
    ("wheels", "wheel"),
    ("wedge", "wedge"),
    ("wedges", "wedge"),
    ("twist", "twist"),
    ("twists", "twist"),
    ("cube", "cube"),
    ("cubes", "cube"),
    ("whole", "whole"),
];

/// Descriptor words stripped from the residual name.
const MODIFIERS: &[&str] = &[
    "fresh",
    "freshly",
    "chilled",
    "muddled",
    "large",
    "small",
    "aged",
    "premium",
    "quality",
    "homemade",
    "ripe",
    "squeezed",
    "cracked",
    "crushed",
    "optional",
];

/// Conversion factors to ounces for each canonical unit.
const OUNCE_FACTORS: &[(&str, f64)] = &[
    ("oz", 1.0),
    ("ml", 1.0 / 30.0),
    ("cl", 1.0 / 3.0),
    ("dash", 1.0 / 32.0),
    ("drop", 1.0 / 96.0),
    ("barspoon", 1.0 / 8.0),
    ("tsp", 1.0 / 6.0),
    ("tbsp", 0.5),
    ("cup", 8.0),
    ("part", 1.0),
    ("shot", 1.5),
    ("pony", 1.0),
    ("splash", 1.0 / 8.0),
    ("rinse", 1.0 / 32.0),
    ("slice", 0.5),
    ("piece", 0.5),
    ("sprig", 0.5),
    ("leaf", 0.5),
    ("wheel", 0.5),
    ("wedge", 0.5),
    ("twist", 0.5),
    ("cube", 0.5),
    ("whole", 1.0),
];

/// Amount assumed when an ingredient states no quantity.
pub const DEFAULT_AMOUNT_OZ: f64 = 0.5;

/// Factor used when the unit is not in the vocabulary.
const UNKNOWN_UNIT_FACTOR: f64 = 0.5;

pub fn normalize_unit(token: &str) -> Option<&'static str> {
    let t = token.trim_matches(|c: char| !c.is_alphanumeric()).to_lowercase();
    UNIT_ALIASES
        .iter()
        .find(|(alias, _)| *alias == t)
        .map(|(_, canonical)| *canonical)
}

fn unicode_fraction(c: char) -> Option<f64> {
    match c {
        '½' => Some(0.5),
        '⅓' => Some(1.0 / 3.0),
        '⅔' => Some(2.0 / 3.0),
        '¼' => Some(0.25),
        '¾' => Some(0.75),
        '⅕' => Some(0.2),
        '⅙' => Some(1.0 / 6.0),
        '⅛' => Some(0.125),
        '⅜' => Some(0.375),
        '⅝' => Some(0.625),
        '⅞' => Some(0.875),
        _ => None,
    }
}

/// Parses a token that is purely a fraction: `1/2` or a single glyph like `¾`.
fn fraction_token(token: &str) -> Option<f64> {
    if let Some((num, den)) = token.split_once('/') {
        let n: f64 = num.trim().parse().ok()?;
        let d: f64 = den.trim().parse().ok()?;
        if d == 0.0 {
            return None;
        }
        return Some(n / d);
    }
    let mut chars = token.chars();
    let first = chars.next()?;
    if chars.next().is_none() {
        return unicode_fraction(first);
    }
    None
}

/// Parses a single token as a numeric amount.
///
/// Accepts decimals (`1.5`), simple fractions (`3/4`), bare glyphs (`½`),
/// and glyph-suffixed integers (`1½`).
fn amount_token(token: &str) -> Option<f64> {
    if let Ok(v) = token.parse::<f64>() {
        if v.is_finite() && v >= 0.0 {
            return Some(v);
        }
        return None;
    }
    if let Some(frac) = fraction_token(token) {
        return Some(frac);
    }
    // Glyph-suffixed integer, e.g. "1½".
    let mut chars = token.chars().peekable();
    let mut digits = String::new();
    while let Some(&c) = chars.peek() {
        if c.is_ascii_digit() {
            digits.push(c);
            chars.next();
        } else {
            break;
        }
    }
    let glyph = chars.next()?;
    if chars.next().is_some() || digits.is_empty() {
        return None;
    }
    let whole: f64 = digits.parse().ok()?;
    unicode_fraction(glyph).map(|f| whole + f)
}

/// Extracts a leading amount from the token stream.
///
/// Returns the amount and the number of tokens consumed. A mixed number
/// (`"1 1/2"` or `"1 ½"`) consumes two tokens.
fn leading_amount(tokens: &[&str]) -> (Option<f64>, usize) {
    let Some(first) = tokens.first() else {
        return (None, 0);
    };
    let Some(value) = amount_token(first) else {
        return (None, 0);
    };
    if value.fract() == 0.0 {
        if let Some(frac) = tokens.get(1).and_then(|t| fraction_token(t)) {
            return (Some(value + frac), 2);
        }
    }
    (Some(value), 1)
}

fn clean_word(word: &str) -> String {
    word.trim_matches(|c: char| !c.is_alphanumeric() && c != '-')
        .to_lowercase()
}

/// Parses one raw ingredient line.
///
/// Empty or whitespace-only input yields an all-empty result, not an error.
pub fn parse(raw: &str) -> ParsedIngredient {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return ParsedIngredient {
            raw: raw.to_string(),
            ..ParsedIngredient::default()
        };
    }

    let tokens: Vec<&str> = trimmed.split_whitespace().collect();
    let (amount, consumed) = leading_amount(&tokens);
    let mut rest = &tokens[consumed..];

    let unit = rest.first().and_then(|t| normalize_unit(t));
    if unit.is_some() {
        rest = &rest[1..];
        // "2 oz of gin" — the connective carries no information.
        if rest.first().is_some_and(|t| t.eq_ignore_ascii_case("of")) {
            rest = &rest[1..];
        }
    }

    let mut modifiers = Vec::new();
    let mut name_words = Vec::new();
    for word in rest {
        let cleaned = clean_word(word);
        if cleaned.is_empty() {
            continue;
        }
        if MODIFIERS.contains(&cleaned.as_str()) {
            modifiers.push(cleaned);
        } else {
            name_words.push(cleaned);
        }
    }

    ParsedIngredient {
        raw: raw.to_string(),
        name: name_words.join(" "),
        amount,
        unit: unit.map(str::to_string),
        modifiers,
    }
}

/// Splits the tail of an "each:" line into individual names.
fn split_each_names(tail: &str) -> Vec<String> {
    tail.split(',')
        .flat_map(|part| part.split(" and "))
        .map(|part| part.trim().trim_start_matches("and ").trim())
        .filter(|part| !part.is_empty())
        .map(str::to_string)
        .collect()
}

/// Expands an `"<amount> <unit> each[:] a, b, and c"` line into synthetic
/// per-name lines. Returns `None` when the line does not match the pattern.
fn expand_each(raw: &str) -> Option<Vec<String>> {
    let tokens: Vec<&str> = raw.split_whitespace().collect();
    let (amount, consumed) = leading_amount(&tokens);
    amount?;
    let unit_token = tokens.get(consumed)?;
    normalize_unit(unit_token)?;
    let each = tokens.get(consumed + 1)?;
    let each_clean = each.trim_end_matches(':').to_lowercase();
    if each_clean != "each" {
        return None;
    }

    let prefix: String = tokens[..=consumed].join(" ");
    let tail = tokens[consumed + 2..].join(" ");
    let names = split_each_names(&tail);
    if names.is_empty() {
        return None;
    }
    Some(
        names
            .into_iter()
            .map(|name| format!("{} {}", prefix, name))
            .collect(),
    )
}

/// Parses a list of raw ingredient lines, applying "each:" macro-expansion
/// before per-item parsing.
pub fn parse_ingredients(lines: &[String]) -> Vec<ParsedIngredient> {
    let mut parsed = Vec::with_capacity(lines.len());
    for line in lines {
        match expand_each(line) {
            Some(expanded) => parsed.extend(expanded.iter().map(|l| parse(l))),
            None => parsed.push(parse(line)),
        }
    }
    parsed
}

/// Converts an amount in the given canonical unit to ounces.
///
/// A `None` amount defaults to [`DEFAULT_AMOUNT_OZ`]; unknown units use a
/// fixed fallback factor.
pub fn to_ounces(amount: Option<f64>, unit: Option<&str>) -> f64 {
    let amount = amount.unwrap_or(DEFAULT_AMOUNT_OZ);
    let factor = match unit {
        Some(u) => OUNCE_FACTORS
            .iter()
            .find(|(name, _)| *name == u)
            .map(|(_, f)| *f)
            .unwrap_or(UNKNOWN_UNIT_FACTOR),
        None => 1.0,
    };
    amount * factor
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_decimal_amount_and_unit() {
        let p = parse("1.5 oz gin");
        assert_eq!(p.amount, Some(1.5));
        assert_eq!(p.unit.as_deref(), Some("oz"));
        assert_eq!(p.name, "gin");
    }

    #[test]
    fn parses_simple_fraction_exactly() {
        assert_eq!(parse("1/2 oz lime juice").amount, Some(0.5));
        assert_eq!(parse("3/4 oz simple syrup").amount, Some(0.75));
    }

    #[test]
    fn parses_mixed_number_exactly() {
        let p = parse("1 1/2 oz bourbon");
        assert_eq!(p.amount, Some(1.5));
        assert_eq!(p.name, "bourbon");
    }

    #[test]
    fn parses_unicode_fractions() {
        assert_eq!(parse("¾ oz lemon juice").amount, Some(0.75));
        assert_eq!(parse("½ oz orgeat").amount, Some(0.5));
        assert_eq!(parse("¼ oz maraschino").amount, Some(0.25));
    }

    #[test]
    fn parses_glyph_suffixed_integer() {
        let p = parse("1½ oz rye whiskey");
        assert_eq!(p.amount, Some(1.5));
        assert_eq!(p.name, "rye whiskey");
    }

    #[test]
    fn parses_mixed_number_with_glyph_second_token() {
        assert_eq!(parse("1 ½ oz rum").amount, Some(1.5));
    }

    #[test]
    fn normalizes_unit_aliases() {
        assert_eq!(parse("2 ounces vodka").unit.as_deref(), Some("oz"));
        assert_eq!(parse("2 dashes angostura bitters").unit.as_deref(), Some("dash"));
        assert_eq!(parse("1 bsp absinthe").unit.as_deref(), Some("barspoon"));
        assert_eq!(parse("2 leaves mint").unit.as_deref(), Some("leaf"));
    }

    #[test]
    fn strips_modifiers_into_their_own_list() {
        let p = parse("1 oz fresh lime juice");
        assert_eq!(p.modifiers, vec!["fresh"]);
        assert_eq!(p.name, "lime juice");
    }

    #[test]
    fn optional_marker_is_a_modifier() {
        let p = parse("1 dash absinthe (optional)");
        assert_eq!(p.modifiers, vec!["optional"]);
        assert_eq!(p.name, "absinthe");
    }

    #[test]
    fn lowercases_the_residual_name() {
        assert_eq!(parse("2 oz London Dry Gin").name, "london dry gin");
    }

    #[test]
    fn skips_of_after_unit() {
        assert_eq!(parse("2 oz of mezcal").name, "mezcal");
    }

    #[test]
    fn empty_input_yields_empty_result() {
        let p = parse("   ");
        assert_eq!(p.name, "");
        assert_eq!(p.amount, None);
        assert_eq!(p.unit, None);
        assert!(p.modifiers.is_empty());
    }

    #[test]
    fn no_amount_leaves_none() {
        let p = parse("mint sprig");
        assert_eq!(p.amount, None);
        assert_eq!(p.unit, None);
        assert_eq!(p.name, "mint sprig");
    }

    #[test]
    fn each_pattern_expands_to_one_entry_per_name() {
        let lines = vec!["3/4 oz each: lime juice, triple sec, and blanco tequila".to_string()];
        let parsed = parse_ingredients(&lines);
        assert_eq!(parsed.len(), 3);
        for p in &parsed {
            assert_eq!(p.amount, Some(0.75));
            assert_eq!(p.unit.as_deref(), Some("oz"));
        }
        assert_eq!(parsed[0].name, "lime juice");
        assert_eq!(parsed[1].name, "triple sec");
        assert_eq!(parsed[2].name, "blanco tequila");
    }

    #[test]
    fn each_without_colon_also_expands() {
        let lines = vec!["1 dash each orange bitters and angostura bitters".to_string()];
        let parsed = parse_ingredients(&lines);
        assert_eq!(parsed.len(), 2);
        assert_eq!(parsed[0].name, "orange bitters");
        assert_eq!(parsed[1].name, "angostura bitters");
    }

    #[test]
    fn non_each_lines_parse_individually() {
        let lines = vec!["2 oz gin".to_string(), "1 oz lime juice".to_string()];
        let parsed = parse_ingredients(&lines);
        assert_eq!(parsed.len(), 2);
    }

    #[test]
    fn to_ounces_fixed_factors() {
        assert_eq!(to_ounces(Some(2.0), Some("oz")), 2.0);
        assert_eq!(to_ounces(Some(1.0), Some("dash")), 1.0 / 32.0);
        assert_eq!(to_ounces(Some(1.0), Some("barspoon")), 0.125);
        assert_eq!(to_ounces(Some(2.0), Some("tbsp")), 1.0);
        assert_eq!(to_ounces(Some(1.0), Some("cup")), 8.0);
    }

    #[test]
    fn to_ounces_defaults() {
        // Missing amount → half an ounce.
        assert_eq!(to_ounces(None, Some("oz")), 0.5);
        // Unknown unit → half factor.
        assert_eq!(to_ounces(Some(2.0), Some("jigger")), 1.0);
        // No unit at all → amount taken as ounces.
        assert_eq!(to_ounces(Some(1.5), None), 1.5);
    }
}

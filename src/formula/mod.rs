//! Compact chemical-formula notation for a recipe.
//!
//! An independent pipeline from diagram assembly: the same raw ingredient
//! lines go through symbol lookup, quantity normalization to quarter-ounce
//! integers, grouping, GCD ratio simplification, and rendering with Unicode
//! subscripts. A margarita comes out as `Tq₂ · Ol · Li`.

pub mod symbols;

use std::cmp::Reverse;

use serde::Serialize;

use crate::mix::classifier;
use crate::mix::parser;
use crate::model::ingredient::IngredientType;
use symbols::{FormulaCategory, GENERIC_SPIRIT_NAME, GENERIC_SPIRIT_SYMBOL};

/// Quantities below this many ounces count as traces, as do dash/drop/
/// barspoon/rinse units regardless of amount.
const TRACE_THRESHOLD_OZ: f64 = 0.125;

/// Ratios are rescaled so the largest never exceeds this.
const MAX_RATIO: u32 = 8;

/// A rendered formula never shows more than this many terms.
const MAX_TERMS: usize = 5;

const TRACE_UNITS: &[&str] = &["dash", "drop", "barspoon", "rinse"];

/// One term of a generated formula, exposed for explanation output.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormulaElement {
    pub symbol: String,
    pub name: String,
    #[serde(serialize_with = "serialize_category")]
    pub category: FormulaCategory,
    /// Number of distinct ingredients merged into this term.
    pub coefficient: u32,
    /// Simplified proportion; 1 is rendered without a subscript.
    pub ratio: u32,
    /// Trace quantities carry no subscript and are excluded from ratios.
    pub trace: bool,
}

fn serialize_category<S>(category: &FormulaCategory, s: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    s.collect_str(category)
}

/// A symbol parsed back out of a rendered formula string.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormulaSymbol {
    pub symbol: String,
    /// Display name, when the symbol is in the table.
    pub name: Option<String>,
    pub coefficient: u32,
    pub ratio: u32,
}

/// Internal accumulator keyed by symbol before grouping.
#[derive(Debug, Clone)]
struct Term {
    symbol: String,
    name: String,
    category: FormulaCategory,
    members: u32,
    quarters: u32,
    trace: bool,
}

fn gcd(a: u32, b: u32) -> u32 {
    if b == 0 {
        a
    } else {
        gcd(b, a % b)
    }
}

fn subscript(n: u32) -> String {
    const DIGITS: [char; 10] = ['₀', '₁', '₂', '₃', '₄', '₅', '₆', '₇', '₈', '₉'];
    n.to_string()
        .chars()
        .map(|c| DIGITS[(c as u8 - b'0') as usize])
        .collect()
}

fn subscript_digit(c: char) -> Option<u32> {
    "₀₁₂₃₄₅₆₇₈₉"
        .chars()
        .position(|d| d == c)
        .map(|p| p as u32)
}

fn is_trace(amount: Option<f64>, unit: Option<&str>) -> bool {
    if unit.is_some_and(|u| TRACE_UNITS.contains(&u)) {
        return true;
    }
    parser::to_ounces(amount, unit) < TRACE_THRESHOLD_OZ
}

/// Fallback mapping for names absent from the symbol table: classify the
/// ingredient and use its category's group symbol directly.
fn classified_fallback(name: &str) -> Option<(&'static str, &'static str, FormulaCategory)> {
    match classifier::classify_name(name) {
        IngredientType::Spirit => Some((
            GENERIC_SPIRIT_SYMBOL,
            GENERIC_SPIRIT_NAME,
            FormulaCategory::Spirit,
        )),
        IngredientType::Acid => Some(("Ac", "Citrus & Acid", FormulaCategory::Acid)),
        IngredientType::Sweet => Some(("Sw", "Sweetener", FormulaCategory::Sweet)),
        IngredientType::Bitter => Some(("Bt", "Bitters", FormulaCategory::Bitter)),
        IngredientType::Dairy | IngredientType::Egg => {
            Some(("Dy", "Dairy", FormulaCategory::Dairy))
        }
        _ => None,
    }
}

fn collect_terms(ingredients: &[String]) -> Vec<Term> {
    let mut terms: Vec<Term> = Vec::new();

    for parsed in parser::parse_ingredients(ingredients) {
        if parsed.name.is_empty() {
            continue;
        }

        // Signature first, so "ginger beer" survives the "beer" omission.
        let (symbol, name, category) = if let Some(entry) = symbols::find_signature(&parsed.name) {
            (entry.symbol, entry.name, entry.category)
        } else if symbols::is_omitted(&parsed.name) {
            continue;
        } else if let Some(entry) = symbols::find_generic(&parsed.name) {
            (entry.symbol, entry.name, entry.category)
        } else if let Some(fallback) = classified_fallback(&parsed.name) {
            fallback
        } else {
            continue;
        };

        let trace = is_trace(parsed.amount, parsed.unit.as_deref());
        let ounces = parser::to_ounces(parsed.amount, parsed.unit.as_deref());
        let quarters = ((ounces * 4.0).round() as u32).max(1);

        // Identical symbols merge immediately.
        if let Some(term) = terms.iter_mut().find(|t| t.symbol == symbol) {
            term.members += 1;
            term.quarters += quarters;
            term.trace = term.trace && trace;
        } else {
            terms.push(Term {
                symbol: symbol.to_string(),
                name: name.to_string(),
                category,
                members: 1,
                quarters,
                trace,
            });
        }
    }

    terms
}

/// Collapses four or more distinct spirit types into a single generic term,
/// and two or more generics of the same groupable category into the
/// category's group symbol. Signature terms never group.
fn group_terms(mut terms: Vec<Term>) -> Vec<Term> {
    let spirit_count = terms
        .iter()
        .filter(|t| t.category == FormulaCategory::Spirit)
        .count();
    if spirit_count >= 4 {
        let mut merged = Term {
            symbol: GENERIC_SPIRIT_SYMBOL.to_string(),
            name: GENERIC_SPIRIT_NAME.to_string(),
            category: FormulaCategory::Spirit,
            members: 0,
            quarters: 0,
            trace: true,
        };
        let mut grouped = Vec::with_capacity(terms.len());
        let mut inserted = false;
        for term in terms {
            if term.category == FormulaCategory::Spirit {
                merged.members += term.members;
                merged.quarters += term.quarters;
                merged.trace = merged.trace && term.trace;
                if !inserted {
                    grouped.push(merged.clone());
                    inserted = true;
                }
            } else {
                grouped.push(term.clone());
            }
        }
        // The merged placeholder was pushed before the tallies finished.
        if let Some(slot) = grouped
            .iter_mut()
            .find(|t| t.symbol == GENERIC_SPIRIT_SYMBOL)
        {
            *slot = merged;
        }
        terms = grouped;
    }

    for category in [
        FormulaCategory::Acid,
        FormulaCategory::Sweet,
        FormulaCategory::Bitter,
        FormulaCategory::Dairy,
    ] {
        let in_category = terms.iter().filter(|t| t.category == category).count();
        if in_category < 2 {
            continue;
        }
        let symbol = category.group_symbol().unwrap_or_default().to_string();
        let name = category.group_name().unwrap_or_default().to_string();
        let mut merged = Term {
            symbol: symbol.clone(),
            name,
            category,
            members: 0,
            quarters: 0,
            trace: true,
        };
        let mut grouped = Vec::with_capacity(terms.len());
        let mut inserted = false;
        for term in &terms {
            if term.category == category {
                merged.members += 1;
                merged.quarters += term.quarters;
                merged.trace = merged.trace && term.trace;
                if !inserted {
                    grouped.push(merged.clone());
                    inserted = true;
                }
            } else {
                grouped.push(term.clone());
            }
        }
        if let Some(slot) = grouped.iter_mut().find(|t| t.symbol == symbol) {
            *slot = merged;
        }
        terms = grouped;
    }

    terms
}

/// Computes formula terms for raw ingredient lines: the explanation-level
/// view behind [`generate_formula`].
pub fn formula_elements(ingredients: &[String]) -> Vec<FormulaElement> {
    let terms = group_terms(collect_terms(ingredients));

    let g = terms
        .iter()
        .filter(|t| !t.trace)
        .map(|t| t.quarters)
        .fold(0, gcd);
    let g = g.max(1);

    let mut elements: Vec<FormulaElement> = terms
        .into_iter()
        .map(|t| FormulaElement {
            symbol: t.symbol,
            name: t.name,
            category: t.category,
            coefficient: t.members,
            ratio: if t.trace { 1 } else { t.quarters / g },
            trace: t.trace,
        })
        .collect();

    let max_ratio = elements.iter().map(|e| e.ratio).max().unwrap_or(1);
    if max_ratio > MAX_RATIO {
        let scale = f64::from(MAX_RATIO) / f64::from(max_ratio);
        for element in &mut elements {
            if !element.trace {
                element.ratio = ((f64::from(element.ratio) * scale).round() as u32).max(1);
            }
        }
    }

    elements.sort_by_key(|e| (e.category.priority(), Reverse(e.ratio)));
    elements.truncate(MAX_TERMS);
    elements
}

/// Generates the compact formula string for raw ingredient lines.
pub fn generate_formula(ingredients: &[String]) -> String {
    let rendered: Vec<String> = formula_elements(ingredients)
        .iter()
        .map(|e| {
            let mut s = String::new();
            if e.coefficient > 1 {
                s.push_str(&e.coefficient.to_string());
            }
            s.push_str(&e.symbol);
            if e.ratio > 1 && !e.trace {
                s.push_str(&subscript(e.ratio));
            }
            s
        })
        .collect();
    rendered.join(" · ")
}

/// Parses a rendered formula string back into its symbols.
///
/// Inverse of [`generate_formula`] up to trace flags: coefficient and ratio
/// default to 1 when absent.
pub fn parse_formula_symbols(formula: &str) -> Vec<FormulaSymbol> {
    formula
        .split('·')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .filter_map(|token| {
            let mut coefficient = 0u32;
            let mut symbol = String::new();
            let mut ratio = 0u32;
            for c in token.chars() {
                if c.is_ascii_digit() && symbol.is_empty() {
                    coefficient = coefficient * 10 + u32::from(c as u8 - b'0');
                } else if let Some(d) = subscript_digit(c) {
                    ratio = ratio * 10 + d;
                } else if c.is_ascii_alphabetic() && ratio == 0 {
                    symbol.push(c);
                } else {
                    return None;
                }
            }
            if symbol.is_empty() {
                return None;
            }
            Some(FormulaSymbol {
                name: symbols::symbol_name(&symbol).map(str::to_string),
                symbol,
                coefficient: coefficient.max(1),
                ratio: ratio.max(1),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn margarita_formula() {
        let formula = generate_formula(&lines(&[
            "2 oz tequila",
            "1 oz cointreau",
            "1 oz lime juice",
        ]));
        assert_eq!(formula, "Tq₂ · Ol · Li");
    }

    #[test]
    fn plain_mixers_are_omitted() {
        let formula = generate_formula(&lines(&["2 oz vodka", "4 oz soda water"]));
        assert_eq!(formula, "Vd");
    }

    #[test]
    fn negroni_formula_is_insertion_stable() {
        let formula = generate_formula(&lines(&[
            "1 oz gin",
            "1 oz campari",
            "1 oz sweet vermouth",
        ]));
        assert_eq!(formula, "Gn · Cp · Sv");
    }

    #[test]
    fn trace_quantities_render_without_subscripts() {
        let formula = generate_formula(&lines(&["2 oz rye", "2 dashes angostura bitters"]));
        assert_eq!(formula, "Ry · Ao");
    }

    #[test]
    fn same_category_generics_group_with_coefficient() {
        let formula = generate_formula(&lines(&[
            "2 oz gin",
            "1 oz lime juice",
            "1 oz lemon juice",
        ]));
        assert_eq!(formula, "Gn · 2Ac");
    }

    #[test]
    fn four_spirits_collapse_to_generic() {
        let formula = generate_formula(&lines(&[
            "1/2 oz vodka",
            "1/2 oz gin",
            "1/2 oz rum",
            "1/2 oz tequila",
            "1 oz lime juice",
        ]));
        assert_eq!(formula, "4Sp₂ · Li");
    }

    #[test]
    fn three_spirits_keep_their_symbols() {
        let elements = formula_elements(&lines(&["1 oz gin", "1 oz rum", "1 oz vodka"]));
        let symbols: Vec<_> = elements.iter().map(|e| e.symbol.as_str()).collect();
        assert_eq!(symbols, vec!["Gn", "Rm", "Vd"]);
    }

    #[test]
    fn ratios_are_capped_at_eight() {
        let formula = generate_formula(&lines(&["8 oz rum", "1/4 oz lime juice"]));
        assert_eq!(formula, "Rm₈ · Li");
    }

    #[test]
    fn formulas_never_exceed_five_terms() {
        let elements = formula_elements(&lines(&[
            "2 oz gin",
            "1 oz campari",
            "1 oz sweet vermouth",
            "1 oz aperol",
            "1 oz cointreau",
            "1 oz lime juice",
        ]));
        assert_eq!(elements.len(), 5);
        let formula = generate_formula(&lines(&[
            "2 oz gin",
            "1 oz campari",
            "1 oz sweet vermouth",
            "1 oz aperol",
            "1 oz cointreau",
            "1 oz lime juice",
        ]));
        assert_eq!(formula, "Gn₂ · Cp · Sv · Ap · Ol");
    }

    #[test]
    fn categories_sort_spirit_signature_acid_sweet() {
        let formula = generate_formula(&lines(&[
            "3/4 oz simple syrup",
            "1 oz lime juice",
            "1 oz cointreau",
            "2 oz rum",
        ]));
        assert_eq!(formula, "Rm₈ · Ol₄ · Li₄ · Ss₃");
    }

    #[test]
    fn missing_amount_falls_back_to_default() {
        // "splash of grenadine" has no stated amount; the splash unit still
        // puts it below the trace threshold.
        let formula = generate_formula(&lines(&["2 oz gin", "splash of grenadine"]));
        assert_eq!(formula, "Gn · Gd");
    }

    #[test]
    fn unknown_liqueurs_hit_the_catchall_entry() {
        let formula = generate_formula(&lines(&["2 oz quandong liqueur"]));
        assert_eq!(formula, "Lq");
    }

    #[test]
    fn names_outside_the_table_fall_back_to_classified_groups() {
        // "citric acid" has no table entry; classification puts it in the
        // acid group directly.
        let formula = generate_formula(&lines(&["2 oz gin", "1 oz citric acid"]));
        assert_eq!(formula, "Gn₂ · Ac");
    }

    #[test]
    fn parse_recovers_symbols_coefficients_and_ratios() {
        let parsed = parse_formula_symbols("Tq₂ · Ol · Li");
        assert_eq!(parsed.len(), 3);
        assert_eq!(parsed[0].symbol, "Tq");
        assert_eq!(parsed[0].ratio, 2);
        assert_eq!(parsed[0].coefficient, 1);
        assert_eq!(parsed[0].name.as_deref(), Some("Tequila"));
        assert_eq!(parsed[1].symbol, "Ol");
        assert_eq!(parsed[1].ratio, 1);
        assert_eq!(parsed[2].name.as_deref(), Some("Lime Juice"));
    }

    #[test]
    fn parse_handles_coefficients_and_multidigit_subscripts() {
        let parsed = parse_formula_symbols("4Sp₂ · 2Ac₁₂");
        assert_eq!(parsed[0].coefficient, 4);
        assert_eq!(parsed[0].ratio, 2);
        assert_eq!(parsed[1].coefficient, 2);
        assert_eq!(parsed[1].ratio, 12);
    }

    #[test]
    fn generated_formulas_round_trip() {
        let ingredients = lines(&["2 oz tequila", "1 oz cointreau", "1 oz lime juice"]);
        let formula = generate_formula(&ingredients);
        let parsed = parse_formula_symbols(&formula);
        let elements = formula_elements(&ingredients);
        assert_eq!(parsed.len(), elements.len());
        for (p, e) in parsed.iter().zip(&elements) {
            assert_eq!(p.symbol, e.symbol);
            assert_eq!(p.coefficient, e.coefficient);
            assert_eq!(p.ratio, e.ratio);
        }
    }
}

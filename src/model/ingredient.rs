use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid ingredient type: '{0}'")]
pub struct ParseIngredientTypeError(String);

/// The nine ingredient categories a cocktail component can classify into.
///
/// Ordering of the variants is not significant; ranking between categories
/// goes through [`IngredientType::priority`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IngredientType {
    Spirit,
    Acid,
    Sweet,
    Bitter,
    Salt,
    Dilution,
    Garnish,
    Dairy,
    Egg,
}

impl IngredientType {
    /// Tie-break priority used by the classifier: lower wins.
    pub fn priority(&self) -> u8 {
        match self {
            IngredientType::Spirit => 0,
            IngredientType::Acid => 1,
            IngredientType::Sweet => 2,
            IngredientType::Bitter => 3,
            IngredientType::Salt => 4,
            IngredientType::Dairy => 5,
            IngredientType::Egg => 6,
            IngredientType::Dilution => 7,
            IngredientType::Garnish => 8,
        }
    }

    /// Display color for diagram rendering.
    pub fn color(&self) -> &'static str {
        match self {
            IngredientType::Spirit => "#f59e0b",
            IngredientType::Acid => "#84cc16",
            IngredientType::Sweet => "#ec4899",
            IngredientType::Bitter => "#b45309",
            IngredientType::Salt => "#94a3b8",
            IngredientType::Dilution => "#38bdf8",
            IngredientType::Garnish => "#22c55e",
            IngredientType::Dairy => "#e2e8f0",
            IngredientType::Egg => "#fde68a",
        }
    }

    /// Two-letter element-style abbreviation for non-spirit node labels.
    pub fn abbreviation(&self) -> &'static str {
        match self {
            IngredientType::Spirit => "Sp",
            IngredientType::Acid => "Ac",
            IngredientType::Sweet => "Sw",
            IngredientType::Bitter => "Bt",
            IngredientType::Salt => "Na",
            IngredientType::Dilution => "Mx",
            IngredientType::Garnish => "Ga",
            IngredientType::Dairy => "Da",
            IngredientType::Egg => "Eg",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            IngredientType::Spirit => "spirit",
            IngredientType::Acid => "acid",
            IngredientType::Sweet => "sweet",
            IngredientType::Bitter => "bitter",
            IngredientType::Salt => "salt",
            IngredientType::Dilution => "dilution",
            IngredientType::Garnish => "garnish",
            IngredientType::Dairy => "dairy",
            IngredientType::Egg => "egg",
        }
    }
}

impl fmt::Display for IngredientType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for IngredientType {
    type Err = ParseIngredientTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "spirit" => Ok(IngredientType::Spirit),
            "acid" => Ok(IngredientType::Acid),
            "sweet" => Ok(IngredientType::Sweet),
            "bitter" => Ok(IngredientType::Bitter),
            "salt" => Ok(IngredientType::Salt),
            "dilution" => Ok(IngredientType::Dilution),
            "garnish" => Ok(IngredientType::Garnish),
            "dairy" => Ok(IngredientType::Dairy),
            "egg" => Ok(IngredientType::Egg),
            _ => Err(ParseIngredientTypeError(s.to_string())),
        }
    }
}

/// One ingredient line after text extraction, before classification.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ParsedIngredient {
    /// The original input line, untouched.
    pub raw: String,
    /// Residual ingredient name, lowercased.
    pub name: String,
    /// Stated amount, if any.
    pub amount: Option<f64>,
    /// Canonical short unit ("oz", "dash", ...), if any.
    pub unit: Option<String>,
    /// Modifier words stripped from the name ("fresh", "muddled", ...).
    pub modifiers: Vec<String>,
}

/// A parsed ingredient with its category and display color assigned.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassifiedIngredient {
    #[serde(flatten)]
    pub ingredient: ParsedIngredient,
    #[serde(rename = "type")]
    pub kind: IngredientType,
    pub color: String,
}

impl ClassifiedIngredient {
    pub fn new(ingredient: ParsedIngredient, kind: IngredientType) -> Self {
        Self {
            ingredient,
            kind,
            color: kind.color().to_string(),
        }
    }

    #[inline]
    pub fn is_spirit(&self) -> bool {
        self.kind == IngredientType::Spirit
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn type_from_str_valid() {
        assert_eq!(
            IngredientType::from_str("spirit").unwrap(),
            IngredientType::Spirit
        );
        assert_eq!(
            IngredientType::from_str("GARNISH").unwrap(),
            IngredientType::Garnish
        );
    }

    #[test]
    fn type_from_str_invalid() {
        let err = IngredientType::from_str("umami").unwrap_err();
        assert_eq!(err.to_string(), "invalid ingredient type: 'umami'");
    }

    #[test]
    fn priority_order_matches_classifier_tie_break() {
        let order = [
            IngredientType::Spirit,
            IngredientType::Acid,
            IngredientType::Sweet,
            IngredientType::Bitter,
            IngredientType::Salt,
            IngredientType::Dairy,
            IngredientType::Egg,
            IngredientType::Dilution,
            IngredientType::Garnish,
        ];
        for pair in order.windows(2) {
            assert!(pair[0].priority() < pair[1].priority());
        }
    }

    #[test]
    fn abbreviations_are_two_letters() {
        for kind in [
            IngredientType::Spirit,
            IngredientType::Acid,
            IngredientType::Sweet,
            IngredientType::Bitter,
            IngredientType::Salt,
            IngredientType::Dilution,
            IngredientType::Garnish,
            IngredientType::Dairy,
            IngredientType::Egg,
        ] {
            assert_eq!(kind.abbreviation().len(), 2);
        }
    }

    #[test]
    fn display_roundtrips_through_from_str() {
        let kind = IngredientType::Dilution;
        assert_eq!(
            IngredientType::from_str(&kind.to_string()).unwrap(),
            kind
        );
    }
}

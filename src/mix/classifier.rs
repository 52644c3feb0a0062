//! Keyword-based ingredient classification.
//!
//! A static table of `{type, keywords[]}` rows is scanned exhaustively for
//! every call. All keywords matching the ingredient name at a word boundary
//! become candidates, ranked by: exact full-string match first, keyword
//! word-count descending (compound beats single word), fixed type priority,
//! then keyword character length. Names with no keyword match fall through an
//! ordered fuzzy substring cascade and finally default to garnish.

use crate::model::ingredient::{ClassifiedIngredient, IngredientType, ParsedIngredient};

struct KeywordRow {
    kind: IngredientType,
    keywords: &'static [&'static str],
}

const KEYWORD_TABLE: &[KeywordRow] = &[
    KeywordRow {
        kind: IngredientType::Spirit,
        keywords: &[
            "vodka",
            "gin",
            "london dry gin",
            "old tom gin",
            "genever",
            "rum",
            "white rum",
            "dark rum",
            "light rum",
            "spiced rum",
            "overproof rum",
            "rhum agricole",
            "cachaca",
            "tequila",
            "blanco tequila",
            "reposado tequila",
            "anejo tequila",
            "mezcal",
            "whiskey",
            "whisky",
            "bourbon",
            "bourbon whiskey",
            "rye",
            "rye whiskey",
            "scotch",
            "irish whiskey",
            "japanese whisky",
            "brandy",
            "cognac",
            "armagnac",
            "calvados",
            "pisco",
            "grappa",
            "absinthe",
            "aquavit",
            "soju",
            "shochu",
            "sake",
        ],
    },
    KeywordRow {
        kind: IngredientType::Acid,
        keywords: &[
            "lime juice",
            "lemon juice",
            "grapefruit juice",
            "orange juice",
            "pineapple juice",
            "cranberry juice",
            "passion fruit juice",
            "passionfruit juice",
            "apple juice",
            "yuzu juice",
            "yuzu",
            "verjus",
            "citric acid",
            "vinegar",
            "shrub",
        ],
    },
    KeywordRow {
        kind: IngredientType::Sweet,
        keywords: &[
            "simple syrup",
            "sugar",
            "sugar cube",
            "demerara syrup",
            "honey",
            "honey syrup",
            "agave",
            "agave nectar",
            "maple syrup",
            "grenadine",
            "orgeat",
            "falernum",
            "vanilla syrup",
            "cinnamon syrup",
            "ginger syrup",
            "cream of coconut",
            "triple sec",
            "cointreau",
            "curacao",
            "orange curacao",
            "maraschino",
            "maraschino liqueur",
            "amaretto",
            "coffee liqueur",
            "kahlua",
            "elderflower liqueur",
            "st germain",
            "chartreuse",
            "green chartreuse",
            "yellow chartreuse",
            "benedictine",
            "drambuie",
            "midori",
            "creme de cassis",
            "creme de violette",
            "creme de menthe",
            "creme de cacao",
            "vermouth",
            "sweet vermouth",
            "dry vermouth",
            "blanc vermouth",
            "sherry",
            "port",
            "banana liqueur",
        ],
    },
    KeywordRow {
        kind: IngredientType::Bitter,
        keywords: &[
            "bitters",
            "angostura",
            "angostura bitters",
            "peychaud",
            "peychauds bitters",
            "orange bitters",
            "chocolate bitters",
            "mole bitters",
            "celery bitters",
            "amaro",
            "campari",
            "aperol",
            "fernet",
            "fernet branca",
            "cynar",
            "suze",
            "averna",
            "montenegro",
        ],
    },
    KeywordRow {
        kind: IngredientType::Salt,
        keywords: &[
            "salt",
            "sea salt",
            "saline",
            "saline solution",
            "salt rim",
            "brine",
            "olive brine",
        ],
    },
    KeywordRow {
        kind: IngredientType::Dilution,
        keywords: &[
            "water",
            "soda water",
            "club soda",
            "sparkling water",
            "seltzer",
            "tonic",
            "tonic water",
            "ginger beer",
            "ginger ale",
            "cola",
            "champagne",
            "prosecco",
            "cava",
            "sparkling wine",
            "beer",
            "ice",
            "coffee",
            "espresso",
            "cold brew",
            "tea",
            "coconut water",
        ],
    },
    KeywordRow {
        kind: IngredientType::Garnish,
        keywords: &[
            "cherry",
            "maraschino cherry",
            "brandied cherry",
            "olive",
            "lime",
            "lemon",
            "orange",
            "grapefruit",
            "pineapple",
            "strawberry",
            "raspberry",
            "blackberry",
            "banana",
            "apple",
            "peel",
            "zest",
            "twist",
            "wheel",
            "wedge",
            "orange peel",
            "lemon peel",
            "lime wheel",
            "mint",
            "mint sprig",
            "basil",
            "rosemary",
            "thyme",
            "sage",
            "cucumber",
            "celery",
            "ginger",
            "jalapeno",
            "nutmeg",
            "cinnamon stick",
            "star anise",
            "edible flower",
            "umbrella",
        ],
    },
    KeywordRow {
        kind: IngredientType::Dairy,
        keywords: &[
            "cream",
            "heavy cream",
            "whipped cream",
            "half and half",
            "milk",
            "whole milk",
            "oat milk",
            "coconut milk",
            "condensed milk",
            "butter",
        ],
    },
    KeywordRow {
        kind: IngredientType::Egg,
        keywords: &["egg", "egg white", "egg yolk", "whole egg", "aquafaba"],
    },
];

/// Spirit base families for canonical display labels.
const SPIRIT_FAMILIES: &[(&str, &str)] = &[
    ("bourbon", "WHISKEY"),
    ("rye", "WHISKEY"),
    ("scotch", "WHISKEY"),
    ("whiskey", "WHISKEY"),
    ("whisky", "WHISKEY"),
    ("cognac", "BRANDY"),
    ("armagnac", "BRANDY"),
    ("calvados", "BRANDY"),
    ("pisco", "BRANDY"),
    ("brandy", "BRANDY"),
    ("grappa", "BRANDY"),
    ("genever", "GIN"),
    ("gin", "GIN"),
    ("vodka", "VODKA"),
    ("cachaca", "RUM"),
    ("rhum", "RUM"),
    ("rum", "RUM"),
    ("mezcal", "TEQUILA"),
    ("tequila", "TEQUILA"),
    ("absinthe", "ABSINTHE"),
    ("aquavit", "AQUAVIT"),
    ("soju", "SOJU"),
    ("shochu", "SOJU"),
    ("sake", "SAKE"),
];

struct Candidate {
    kind: IngredientType,
    keyword: &'static str,
    exact: bool,
}

fn word_boundary_match(name: &str, keyword: &str) -> bool {
    let padded_name = format!(" {} ", name);
    let padded_kw = format!(" {} ", keyword);
    padded_name.contains(&padded_kw)
}

fn rank(a: &Candidate, b: &Candidate) -> std::cmp::Ordering {
    b.exact
        .cmp(&a.exact)
        .then_with(|| {
            let wa = a.keyword.split_whitespace().count();
            let wb = b.keyword.split_whitespace().count();
            wb.cmp(&wa)
        })
        .then_with(|| a.kind.priority().cmp(&b.kind.priority()))
        .then_with(|| b.keyword.len().cmp(&a.keyword.len()))
}

/// Ordered fuzzy fallback over substring roots, applied only when no keyword
/// matched at a word boundary.
fn fuzzy_fallback(name: &str) -> Option<IngredientType> {
    if ["proof", "aged", "barrel"].iter().any(|r| name.contains(r)) {
        return Some(IngredientType::Spirit);
    }
    if ["nectar", "puree"].iter().any(|r| name.contains(r)) {
        return Some(IngredientType::Sweet);
    }
    if name.contains("juice") {
        return Some(IngredientType::Acid);
    }
    if ["syrup", "liqueur", "schnapps"].iter().any(|r| name.contains(r)) {
        return Some(IngredientType::Sweet);
    }
    if ["bitter", "amaro"].iter().any(|r| name.contains(r)) {
        return Some(IngredientType::Bitter);
    }
    if ["soda", "tonic", "beer"].iter().any(|r| name.contains(r)) {
        return Some(IngredientType::Dilution);
    }
    const GARNISH_SHAPES: &[&str] = &[
        "peel", "twist", "wheel", "wedge", "slice", "sprig", "leaf", "zest", "rim", "berry",
        "flower",
    ];
    if GARNISH_SHAPES.iter().any(|r| name.contains(r)) {
        return Some(IngredientType::Garnish);
    }
    if name.contains("cream") || name.contains("milk") {
        if name.contains("cream of coconut") {
            return Some(IngredientType::Sweet);
        }
        return Some(IngredientType::Dairy);
    }
    None
}

/// Resolves the ingredient type for a name that has already been parsed.
pub fn classify_name(name: &str) -> IngredientType {
    let mut candidates = Vec::new();
    for row in KEYWORD_TABLE {
        for keyword in row.keywords {
            if word_boundary_match(name, keyword) {
                candidates.push(Candidate {
                    kind: row.kind,
                    keyword,
                    exact: name == *keyword,
                });
            }
        }
    }

    if let Some(best) = candidates.iter().min_by(|a, b| rank(a, b)) {
        return best.kind;
    }

    fuzzy_fallback(name).unwrap_or(IngredientType::Garnish)
}

/// Classifies a parsed ingredient, attaching its type and display color.
pub fn classify(parsed: ParsedIngredient) -> ClassifiedIngredient {
    let kind = classify_name(&parsed.name);
    ClassifiedIngredient::new(parsed, kind)
}

/// Display label for a classified ingredient: canonical spirit family names
/// for spirits, fixed two-letter abbreviations otherwise.
pub fn display_label(ingredient: &ClassifiedIngredient) -> String {
    if ingredient.is_spirit() {
        return spirit_family(&ingredient.ingredient.name).to_string();
    }
    ingredient.kind.abbreviation().to_string()
}

/// Canonical base family for a spirit name ("SPIRIT" when unrecognized).
pub fn spirit_family(name: &str) -> &'static str {
    SPIRIT_FAMILIES
        .iter()
        .find(|(root, _)| name.contains(root))
        .map(|(_, family)| *family)
        .unwrap_or("SPIRIT")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mix::parser::parse;

    fn kind_of(line: &str) -> IngredientType {
        classify(parse(line)).kind
    }

    #[test]
    fn compound_keyword_beats_single_word() {
        // "lime juice" (acid, 2 words) must beat "lime" (garnish, 1 word).
        assert_eq!(kind_of("1 oz lime juice"), IngredientType::Acid);
    }

    #[test]
    fn exact_match_beats_everything() {
        // "maraschino cherry" is an exact garnish entry even though
        // "maraschino" alone is sweet.
        assert_eq!(kind_of("maraschino cherry"), IngredientType::Garnish);
    }

    #[test]
    fn classifies_all_nine_types() {
        assert_eq!(kind_of("2 oz gin"), IngredientType::Spirit);
        assert_eq!(kind_of("1 oz lemon juice"), IngredientType::Acid);
        assert_eq!(kind_of("3/4 oz simple syrup"), IngredientType::Sweet);
        assert_eq!(kind_of("2 dashes angostura bitters"), IngredientType::Bitter);
        assert_eq!(kind_of("1 barspoon saline solution"), IngredientType::Salt);
        assert_eq!(kind_of("2 oz soda water"), IngredientType::Dilution);
        assert_eq!(kind_of("mint sprig"), IngredientType::Garnish);
        assert_eq!(kind_of("1 oz heavy cream"), IngredientType::Dairy);
        assert_eq!(kind_of("1 egg white"), IngredientType::Egg);
    }

    #[test]
    fn type_priority_breaks_ties() {
        // "ginger beer" (dilution, 2 words) beats "ginger" (garnish, 1 word)
        // on word count, and "beer" alone never gets a look-in.
        assert_eq!(kind_of("4 oz ginger beer"), IngredientType::Dilution);
    }

    #[test]
    fn compound_juice_entries_beat_garnish_fruits() {
        // "orange juice" (acid, 2 words) must beat "orange" (garnish),
        // same as the lime case.
        assert_eq!(kind_of("2 oz orange juice"), IngredientType::Acid);
        assert_eq!(kind_of("2 oz pineapple juice"), IngredientType::Acid);
        assert_eq!(kind_of("1 oz cranberry juice"), IngredientType::Acid);
        assert_eq!(kind_of("1 oz passion fruit juice"), IngredientType::Acid);
    }

    #[test]
    fn fuzzy_juice_falls_to_acid() {
        assert_eq!(kind_of("1 oz watermelon juice"), IngredientType::Acid);
    }

    #[test]
    fn fuzzy_syrup_falls_to_sweet() {
        assert_eq!(kind_of("1/2 oz raspberry syrup"), IngredientType::Sweet);
        assert_eq!(kind_of("1 oz peach schnapps"), IngredientType::Sweet);
    }

    #[test]
    fn fuzzy_proof_falls_to_spirit() {
        assert_eq!(kind_of("1 oz 100 proof applejack"), IngredientType::Spirit);
    }

    #[test]
    fn fuzzy_cream_of_coconut_is_sweet_not_dairy() {
        // The keyword table carries it, but the fallback must agree.
        assert_eq!(
            fuzzy_fallback("cream of coconut"),
            Some(IngredientType::Sweet)
        );
        assert_eq!(fuzzy_fallback("almond cream"), Some(IngredientType::Dairy));
    }

    #[test]
    fn unresolved_defaults_to_garnish() {
        assert_eq!(kind_of("mystery dust"), IngredientType::Garnish);
    }

    #[test]
    fn spirit_labels_map_to_families() {
        assert_eq!(spirit_family("bourbon"), "WHISKEY");
        assert_eq!(spirit_family("rye whiskey"), "WHISKEY");
        assert_eq!(spirit_family("cognac"), "BRANDY");
        assert_eq!(spirit_family("blanco tequila"), "TEQUILA");
        assert_eq!(spirit_family("mezcal"), "TEQUILA");
        assert_eq!(spirit_family("white rum"), "RUM");
    }

    #[test]
    fn non_spirit_labels_are_abbreviations() {
        let acid = classify(parse("1 oz lime juice"));
        assert_eq!(display_label(&acid), "Ac");
        let garnish = classify(parse("lime wedge"));
        assert_eq!(display_label(&garnish), "Ga");
    }

    #[test]
    fn classification_is_deterministic() {
        for _ in 0..3 {
            assert_eq!(kind_of("1 oz campari"), IngredientType::Bitter);
        }
    }
}

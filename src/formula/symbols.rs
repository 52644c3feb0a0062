//! The formula symbol table.
//!
//! Entries split into **signature** ingredients (specific liqueurs, amari,
//! vermouths, signature syrups — never grouped into a category symbol) and
//! **generic** ones (spirit/acid/sweet/bitter/dairy — groupable). Plain
//! mixers and garnish-only words are omitted from formulas entirely, unless
//! a signature keyword overrides the omission (ginger beer stays despite
//! "beer"). Matching is word-boundary based, longest keyword first.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FormulaCategory {
    Spirit,
    Signature,
    Acid,
    Sweet,
    Bitter,
    Dairy,
}

impl FormulaCategory {
    /// Sort priority in the rendered formula: lower first.
    pub fn priority(&self) -> u8 {
        match self {
            FormulaCategory::Spirit => 0,
            FormulaCategory::Signature => 1,
            FormulaCategory::Acid => 2,
            FormulaCategory::Sweet => 3,
            FormulaCategory::Bitter => 4,
            FormulaCategory::Dairy => 5,
        }
    }

    /// Group symbol used when several generic ingredients collapse.
    pub fn group_symbol(&self) -> Option<&'static str> {
        match self {
            FormulaCategory::Acid => Some("Ac"),
            FormulaCategory::Sweet => Some("Sw"),
            FormulaCategory::Bitter => Some("Bt"),
            FormulaCategory::Dairy => Some("Dy"),
            _ => None,
        }
    }

    pub fn group_name(&self) -> Option<&'static str> {
        match self {
            FormulaCategory::Acid => Some("Citrus & Acid"),
            FormulaCategory::Sweet => Some("Sweetener"),
            FormulaCategory::Bitter => Some("Bitters"),
            FormulaCategory::Dairy => Some("Dairy"),
            _ => None,
        }
    }
}

impl fmt::Display for FormulaCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            FormulaCategory::Spirit => "spirit",
            FormulaCategory::Signature => "signature",
            FormulaCategory::Acid => "acid",
            FormulaCategory::Sweet => "sweet",
            FormulaCategory::Bitter => "bitter",
            FormulaCategory::Dairy => "dairy",
        };
        f.write_str(s)
    }
}

/// Symbol used when four or more distinct spirit types collapse.
pub const GENERIC_SPIRIT_SYMBOL: &str = "Sp";
pub const GENERIC_SPIRIT_NAME: &str = "Spirits";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SymbolEntry {
    pub keyword: &'static str,
    pub symbol: &'static str,
    pub name: &'static str,
    pub category: FormulaCategory,
}

const fn e(
    keyword: &'static str,
    symbol: &'static str,
    name: &'static str,
    category: FormulaCategory,
) -> SymbolEntry {
    SymbolEntry {
        keyword,
        symbol,
        name,
        category,
    }
}

use FormulaCategory::{Acid, Bitter, Dairy, Signature, Spirit, Sweet};

pub const SYMBOL_TABLE: &[SymbolEntry] = &[
    // Spirits: each type keeps its own symbol until 4+ collapse to Sp.
    e("vodka", "Vd", "Vodka", Spirit),
    e("gin", "Gn", "Gin", Spirit),
    e("london dry gin", "Gn", "Gin", Spirit),
    e("old tom gin", "Gn", "Gin", Spirit),
    e("sloe gin", "Gn", "Gin", Spirit),
    e("genever", "Gv", "Genever", Spirit),
    e("rum", "Rm", "Rum", Spirit),
    e("white rum", "Rm", "Rum", Spirit),
    e("light rum", "Rm", "Rum", Spirit),
    e("dark rum", "Rm", "Rum", Spirit),
    e("spiced rum", "Rm", "Rum", Spirit),
    e("overproof rum", "Rm", "Rum", Spirit),
    e("rhum agricole", "Rm", "Rum", Spirit),
    e("rhum", "Rm", "Rum", Spirit),
    e("cachaca", "Cc", "Cachaça", Spirit),
    e("tequila", "Tq", "Tequila", Spirit),
    e("blanco tequila", "Tq", "Tequila", Spirit),
    e("reposado tequila", "Tq", "Tequila", Spirit),
    e("anejo tequila", "Tq", "Tequila", Spirit),
    e("reposado", "Tq", "Tequila", Spirit),
    e("mezcal", "Mz", "Mezcal", Spirit),
    e("whiskey", "Wh", "Whiskey", Spirit),
    e("whisky", "Wh", "Whiskey", Spirit),
    e("bourbon", "Bn", "Bourbon", Spirit),
    e("bourbon whiskey", "Bn", "Bourbon", Spirit),
    e("rye", "Ry", "Rye Whiskey", Spirit),
    e("rye whiskey", "Ry", "Rye Whiskey", Spirit),
    e("scotch", "Sc", "Scotch", Spirit),
    e("irish whiskey", "Iw", "Irish Whiskey", Spirit),
    e("japanese whisky", "Jw", "Japanese Whisky", Spirit),
    e("brandy", "Br", "Brandy", Spirit),
    e("apple brandy", "Br", "Brandy", Spirit),
    e("applejack", "Br", "Brandy", Spirit),
    e("cognac", "Cg", "Cognac", Spirit),
    e("armagnac", "An", "Armagnac", Spirit),
    e("calvados", "Cv", "Calvados", Spirit),
    e("pisco", "Ps", "Pisco", Spirit),
    e("grappa", "Gp", "Grappa", Spirit),
    e("absinthe", "Ab", "Absinthe", Spirit),
    e("aquavit", "Aq", "Aquavit", Spirit),
    e("soju", "Sj", "Soju", Spirit),
    e("shochu", "Sh", "Shochu", Spirit),
    e("sake", "Sk", "Sake", Spirit),
    // Acids: groupable as Ac.
    e("lime juice", "Li", "Lime Juice", Acid),
    e("lime", "Li", "Lime Juice", Acid),
    e("lemon juice", "Le", "Lemon Juice", Acid),
    e("lemon", "Le", "Lemon Juice", Acid),
    e("grapefruit juice", "Gf", "Grapefruit Juice", Acid),
    e("grapefruit", "Gf", "Grapefruit Juice", Acid),
    e("orange juice", "Oj", "Orange Juice", Acid),
    e("pineapple juice", "Pj", "Pineapple Juice", Acid),
    e("cranberry juice", "Cj", "Cranberry Juice", Acid),
    e("passion fruit juice", "Pf", "Passion Fruit", Acid),
    e("passionfruit juice", "Pf", "Passion Fruit", Acid),
    e("yuzu juice", "Yz", "Yuzu", Acid),
    e("yuzu", "Yz", "Yuzu", Acid),
    e("verjus", "Vj", "Verjus", Acid),
    e("vinegar", "Vr", "Vinegar", Acid),
    e("shrub", "Sb", "Shrub", Acid),
    e("juice", "Ac", "Juice", Acid),
    // Sweets: groupable as Sw.
    e("simple syrup", "Ss", "Simple Syrup", Sweet),
    e("sugar", "Su", "Sugar", Sweet),
    e("sugar cube", "Su", "Sugar", Sweet),
    e("demerara syrup", "Dm", "Demerara Syrup", Sweet),
    e("demerara", "Dm", "Demerara Syrup", Sweet),
    e("honey syrup", "Hn", "Honey", Sweet),
    e("honey", "Hn", "Honey", Sweet),
    e("agave nectar", "Ag", "Agave Nectar", Sweet),
    e("agave syrup", "Ag", "Agave Nectar", Sweet),
    e("agave", "Ag", "Agave Nectar", Sweet),
    e("maple syrup", "Mp", "Maple Syrup", Sweet),
    e("cream of coconut", "Co", "Cream of Coconut", Sweet),
    e("coconut cream", "Co", "Cream of Coconut", Sweet),
    e("vanilla syrup", "Sy", "Syrup", Sweet),
    e("cinnamon syrup", "Sy", "Syrup", Sweet),
    e("ginger syrup", "Sy", "Syrup", Sweet),
    e("raspberry syrup", "Sy", "Syrup", Sweet),
    e("syrup", "Sy", "Syrup", Sweet),
    e("nectar", "Sw", "Nectar", Sweet),
    e("puree", "Sw", "Purée", Sweet),
    // Signature: never grouped.
    e("cointreau", "Ol", "Orange Liqueur", Signature),
    e("orange liqueur", "Ol", "Orange Liqueur", Signature),
    e("triple sec", "Ts", "Triple Sec", Signature),
    e("curacao", "Cu", "Curaçao", Signature),
    e("blue curacao", "Cu", "Curaçao", Signature),
    e("orange curacao", "Cu", "Curaçao", Signature),
    e("grand marnier", "Gm", "Grand Marnier", Signature),
    e("maraschino liqueur", "Mq", "Maraschino Liqueur", Signature),
    e("luxardo", "Mq", "Maraschino Liqueur", Signature),
    e("amaretto", "Am", "Amaretto", Signature),
    e("kahlua", "Kh", "Coffee Liqueur", Signature),
    e("coffee liqueur", "Kh", "Coffee Liqueur", Signature),
    e("st germain", "Sg", "Elderflower Liqueur", Signature),
    e("elderflower liqueur", "Sg", "Elderflower Liqueur", Signature),
    e("elderflower", "Sg", "Elderflower Liqueur", Signature),
    e("chartreuse", "Ch", "Chartreuse", Signature),
    e("green chartreuse", "Ch", "Chartreuse", Signature),
    e("yellow chartreuse", "Yc", "Yellow Chartreuse", Signature),
    e("benedictine", "Bd", "Bénédictine", Signature),
    e("drambuie", "Db", "Drambuie", Signature),
    e("midori", "Md", "Midori", Signature),
    e("creme de cassis", "Cs", "Crème de Cassis", Signature),
    e("cassis", "Cs", "Crème de Cassis", Signature),
    e("creme de violette", "Vl", "Crème de Violette", Signature),
    e("creme de menthe", "Cm", "Crème de Menthe", Signature),
    e("creme de cacao", "Ca", "Crème de Cacao", Signature),
    e("creme de mure", "Mu", "Crème de Mûre", Signature),
    e("banana liqueur", "Bl", "Banana Liqueur", Signature),
    e("sweet vermouth", "Sv", "Sweet Vermouth", Signature),
    e("dry vermouth", "Dv", "Dry Vermouth", Signature),
    e("blanc vermouth", "Bv", "Blanc Vermouth", Signature),
    e("vermouth", "Vm", "Vermouth", Signature),
    e("lillet", "Ly", "Lillet", Signature),
    e("lillet blanc", "Ly", "Lillet", Signature),
    e("cocchi americano", "Ly", "Lillet", Signature),
    e("dubonnet", "Dn", "Dubonnet", Signature),
    e("sherry", "Sr", "Sherry", Signature),
    e("fino sherry", "Sr", "Sherry", Signature),
    e("oloroso", "Sr", "Sherry", Signature),
    e("port", "Pt", "Port", Signature),
    e("tawny port", "Pt", "Port", Signature),
    e("madeira", "Ma", "Madeira", Signature),
    e("campari", "Cp", "Campari", Signature),
    e("aperol", "Ap", "Aperol", Signature),
    e("fernet", "Fr", "Fernet", Signature),
    e("fernet branca", "Fr", "Fernet", Signature),
    e("cynar", "Cy", "Cynar", Signature),
    e("suze", "Sz", "Suze", Signature),
    e("averna", "Av", "Averna", Signature),
    e("montenegro", "Mn", "Amaro Montenegro", Signature),
    e("amaro montenegro", "Mn", "Amaro Montenegro", Signature),
    e("amaro nonino", "Nn", "Amaro Nonino", Signature),
    e("nonino", "Nn", "Amaro Nonino", Signature),
    e("pimms", "Pm", "Pimm's", Signature),
    e("pimm's", "Pm", "Pimm's", Signature),
    e("falernum", "Fl", "Falernum", Signature),
    e("orgeat", "Og", "Orgeat", Signature),
    e("grenadine", "Gd", "Grenadine", Signature),
    e("ginger beer", "Gb", "Ginger Beer", Signature),
    e("ginger ale", "Ga", "Ginger Ale", Signature),
    e("schnapps", "Sn", "Schnapps", Signature),
    e("peach schnapps", "Sn", "Schnapps", Signature),
    e("aperitivo", "Ap", "Aperol", Signature),
    e("liqueur", "Lq", "Liqueur", Signature),
    // Bitters: groupable as Bt.
    e("angostura bitters", "Ao", "Angostura Bitters", Bitter),
    e("angostura", "Ao", "Angostura Bitters", Bitter),
    e("peychauds bitters", "Py", "Peychaud's Bitters", Bitter),
    e("peychaud's bitters", "Py", "Peychaud's Bitters", Bitter),
    e("peychaud", "Py", "Peychaud's Bitters", Bitter),
    e("orange bitters", "Ob", "Orange Bitters", Bitter),
    e("chocolate bitters", "Cb", "Chocolate Bitters", Bitter),
    e("mole bitters", "Mb", "Mole Bitters", Bitter),
    e("celery bitters", "Bt", "Bitters", Bitter),
    e("bitters", "Bt", "Bitters", Bitter),
    e("amaro", "Ar", "Amaro", Bitter),
    // Dairy: groupable as Dy.
    e("cream", "Cr", "Cream", Dairy),
    e("heavy cream", "Cr", "Cream", Dairy),
    e("milk", "Mk", "Milk", Dairy),
    e("whole milk", "Mk", "Milk", Dairy),
    e("coconut milk", "Cn", "Coconut Milk", Dairy),
    e("half and half", "Hh", "Half and Half", Dairy),
    e("egg white", "Ew", "Egg White", Dairy),
    e("egg", "Ew", "Egg White", Dairy),
    e("aquafaba", "Af", "Aquafaba", Dairy),
];

/// Word-boundary omission keywords: plain mixers and garnish-only words,
/// dropped from formulas unless a signature keyword overrides.
pub const OMIT_KEYWORDS: &[&str] = &[
    "soda water",
    "club soda",
    "sparkling water",
    "seltzer",
    "soda",
    "tonic water",
    "tonic",
    "water",
    "ice",
    "beer",
    "wedge",
    "slice",
    "sprig",
    "peel",
    "twist",
    "wheel",
    "leaf",
    "leaves",
    "zest",
    "garnish",
    "umbrella",
    "cherry",
    "olive",
    "mint",
];

fn word_boundary_match(name: &str, keyword: &str) -> bool {
    let padded_name = format!(" {} ", name);
    let padded_kw = format!(" {} ", keyword);
    padded_name.contains(&padded_kw)
}

fn best_match<'a, I>(name: &str, entries: I) -> Option<&'a SymbolEntry>
where
    I: Iterator<Item = &'a SymbolEntry>,
{
    entries
        .filter(|entry| word_boundary_match(name, entry.keyword))
        .max_by_key(|entry| {
            (
                entry.keyword.split_whitespace().count(),
                entry.keyword.len(),
            )
        })
}

/// First pass: signature ingredients, checked before omission.
pub fn find_signature(name: &str) -> Option<&'static SymbolEntry> {
    best_match(
        name,
        SYMBOL_TABLE
            .iter()
            .filter(|e| e.category == FormulaCategory::Signature),
    )
}

/// Second pass: omission keywords.
pub fn is_omitted(name: &str) -> bool {
    OMIT_KEYWORDS.iter().any(|kw| word_boundary_match(name, kw))
}

/// Third pass: generic groupable entries.
pub fn find_generic(name: &str) -> Option<&'static SymbolEntry> {
    best_match(
        name,
        SYMBOL_TABLE
            .iter()
            .filter(|e| e.category != FormulaCategory::Signature),
    )
}

/// Reverse lookup for tooltip rendering, covering group symbols too.
pub fn symbol_name(symbol: &str) -> Option<&'static str> {
    if symbol == GENERIC_SPIRIT_SYMBOL {
        return Some(GENERIC_SPIRIT_NAME);
    }
    for category in [
        FormulaCategory::Acid,
        FormulaCategory::Sweet,
        FormulaCategory::Bitter,
        FormulaCategory::Dairy,
    ] {
        if category.group_symbol() == Some(symbol) {
            return category.group_name();
        }
    }
    SYMBOL_TABLE
        .iter()
        .find(|e| e.symbol == symbol)
        .map(|e| e.name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn signature_overrides_omission() {
        // "ginger beer" must match a signature entry before the "beer"
        // omission keyword gets a chance.
        let entry = find_signature("ginger beer").unwrap();
        assert_eq!(entry.symbol, "Gb");
        assert!(is_omitted("ginger beer"));
    }

    #[test]
    fn plain_mixers_and_garnish_words_are_omitted() {
        assert!(is_omitted("soda water"));
        assert!(is_omitted("tonic"));
        assert!(is_omitted("ice"));
        assert!(is_omitted("lime wedge"));
        assert!(is_omitted("mint sprig"));
        assert!(!is_omitted("watermelon juice"));
    }

    #[test]
    fn maraschino_cherry_is_not_signature() {
        assert!(find_signature("maraschino cherry").is_none());
        assert!(is_omitted("maraschino cherry"));
        assert_eq!(find_signature("maraschino liqueur").unwrap().symbol, "Mq");
    }

    #[test]
    fn longest_keyword_wins() {
        // "rye whiskey" must resolve through the compound entry, not "whiskey".
        assert_eq!(find_generic("rye whiskey").unwrap().symbol, "Ry");
        assert_eq!(find_generic("lime juice").unwrap().symbol, "Li");
    }

    #[test]
    fn common_ingredient_symbols_resolve() {
        assert_eq!(find_generic("tequila").unwrap().symbol, "Tq");
        assert_eq!(find_signature("cointreau").unwrap().symbol, "Ol");
        assert_eq!(find_generic("vodka").unwrap().symbol, "Vd");
        assert_eq!(find_generic("gin").unwrap().symbol, "Gn");
        assert_eq!(find_signature("campari").unwrap().symbol, "Cp");
        assert_eq!(find_signature("sweet vermouth").unwrap().symbol, "Sv");
        assert_eq!(find_generic("simple syrup").unwrap().symbol, "Ss");
        assert_eq!(find_generic("rum").unwrap().symbol, "Rm");
    }

    #[test]
    fn reverse_lookup_covers_entries_and_groups() {
        assert_eq!(symbol_name("Tq"), Some("Tequila"));
        assert_eq!(symbol_name("Ac"), Some("Citrus & Acid"));
        assert_eq!(symbol_name("Sp"), Some("Spirits"));
        assert_eq!(symbol_name("Zz"), None);
    }

    #[test]
    fn generic_syrup_catchall_applies() {
        assert_eq!(find_generic("passionfruit syrup").unwrap().symbol, "Sy");
    }
}

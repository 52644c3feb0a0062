//! The diagram assembly pipeline: parse → classify → layout → bonds.

pub mod bonds;
pub mod classifier;
pub mod config;
pub mod error;
pub mod layout;
pub mod method;
pub mod parser;
pub mod validate;

pub use config::{LayoutConfig, MixOptions};
pub use error::Error;
pub use validate::{collect_warnings, split_ingredient_list, validate_request, ValidatedRequest, Warning};

use crate::model::molecule::MoleculeRecipe;

/// Assembles a complete [`MoleculeRecipe`] from raw ingredient lines.
///
/// Total function: given well-typed input it cannot fail; missing
/// information degrades to documented defaults at each stage.
pub fn assemble(
    name: &str,
    ingredients: &[String],
    instructions: Option<&str>,
    glass: Option<&str>,
    options: &MixOptions,
) -> MoleculeRecipe {
    let parsed = parser::parse_ingredients(ingredients);
    let classified: Vec<_> = parsed.into_iter().map(classifier::classify).collect();
    let (nodes, backbone) = layout::compute_layout(&classified, &options.layout);
    let bonds = bonds::generate_bonds(&nodes);
    let method = method::derive_method(instructions, glass);

    MoleculeRecipe {
        name: name.to_string(),
        method,
        nodes,
        bonds,
        backbone,
    }
}

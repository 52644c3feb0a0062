use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "mixmol",
    about = "Cocktail recipes as chemistry-styled molecular diagrams",
    version,
    author,
    propagate_version = true
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Assemble a molecular diagram from ingredient lines (JSON output)
    #[command(visible_alias = "d")]
    Diagram(DiagramArgs),

    /// Generate compact formula notation from ingredient lines
    #[command(visible_alias = "f")]
    Formula(FormulaArgs),
}

/// I/O options shared by all commands.
#[derive(Args)]
pub struct IoOptions {
    /// Ingredient lines; read from --input or stdin if omitted
    #[arg(value_name = "INGREDIENT")]
    pub ingredients: Vec<String>,

    /// Input file with one ingredient per line, or a JSON array (stdin if omitted)
    #[arg(short, long, value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Output file (stdout if omitted)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}

/// Layout tuning options for the diagram command.
#[derive(Args)]
#[command(next_help_heading = "Layout Options")]
pub struct LayoutOptions {
    /// Square canvas side length
    #[arg(long, value_name = "UNITS", default_value = "500")]
    pub dimension: f64,

    /// Clamp margin inside the canvas edge
    #[arg(long, value_name = "UNITS", default_value = "40")]
    pub padding: f64,

    /// Circumradius of the central hexagon
    #[arg(long = "hex-radius", value_name = "UNITS", default_value = "50")]
    pub hex_radius: f64,

    /// Radius of non-spirit nodes
    #[arg(long = "node-radius", value_name = "UNITS", default_value = "14")]
    pub node_radius: f64,

    /// Radius of spirit core nodes
    #[arg(long = "spirit-radius", value_name = "UNITS", default_value = "18")]
    pub spirit_radius: f64,

    /// Distance between chained nodes
    #[arg(long = "bond-length", value_name = "UNITS", default_value = "50")]
    pub bond_length: f64,

    /// Apply deterministic name-seeded position jitter
    #[arg(long)]
    pub variation: bool,
}

#[derive(Args)]
pub struct DiagramArgs {
    #[command(flatten)]
    pub io: IoOptions,

    /// Recipe name shown on the diagram
    #[arg(short, long, value_name = "NAME", default_value = "Untitled")]
    pub name: String,

    /// Free-text preparation instructions (for the method hint)
    #[arg(long, value_name = "TEXT")]
    pub instructions: Option<String>,

    /// Glassware name (for the method hint)
    #[arg(long, value_name = "GLASS")]
    pub glass: Option<String>,

    #[command(flatten)]
    pub layout: LayoutOptions,

    /// Include advisory layout warnings in the output
    #[arg(short, long)]
    pub warnings: bool,

    /// Pretty-print the JSON output
    #[arg(short, long)]
    pub pretty: bool,
}

#[derive(Args)]
pub struct FormulaArgs {
    #[command(flatten)]
    pub io: IoOptions,

    /// Explain each formula term (symbol, name, coefficient, ratio)
    #[arg(short, long)]
    pub explain: bool,

    /// Emit the explanation as JSON instead of a table
    #[arg(long, requires = "explain")]
    pub json: bool,
}

pub fn parse() -> Cli {
    Cli::parse()
}

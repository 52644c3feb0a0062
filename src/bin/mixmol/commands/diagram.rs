use std::io::Write;

use anyhow::{Context, Result};
use serde::Serialize;

use mixmol::{assemble, collect_warnings, LayoutConfig, MixOptions, MoleculeRecipe, Warning};

use crate::cli::DiagramArgs;
use crate::input::{create_output, read_ingredients};

#[derive(Serialize)]
struct DiagramReport<'a> {
    #[serde(flatten)]
    recipe: &'a MoleculeRecipe,
    warnings: &'a [Warning],
}

pub fn run_diagram(args: DiagramArgs) -> Result<()> {
    let ingredients = read_ingredients(&args.io)?;

    let layout = LayoutConfig {
        dimension: args.layout.dimension,
        padding: args.layout.padding,
        hex_radius: args.layout.hex_radius,
        node_radius: args.layout.node_radius,
        spirit_radius: args.layout.spirit_radius,
        bond_length: args.layout.bond_length,
        variation: args.layout.variation,
    };
    let options = MixOptions {
        layout: layout.clone(),
    };

    let recipe = assemble(
        &args.name,
        &ingredients,
        args.instructions.as_deref(),
        args.glass.as_deref(),
        &options,
    );

    let mut writer = create_output(args.io.output.as_deref())?;
    if args.warnings {
        let warnings = collect_warnings(&recipe, &layout);
        write_json(
            &mut writer,
            &DiagramReport {
                recipe: &recipe,
                warnings: &warnings,
            },
            args.pretty,
        )?;
    } else {
        write_json(&mut writer, &recipe, args.pretty)?;
    }
    writeln!(writer)?;
    writer.flush().context("Failed to flush output")?;

    Ok(())
}

fn write_json<W: Write, T: Serialize>(writer: &mut W, value: &T, pretty: bool) -> Result<()> {
    if pretty {
        serde_json::to_writer_pretty(writer, value).context("Failed to write diagram JSON")
    } else {
        serde_json::to_writer(writer, value).context("Failed to write diagram JSON")
    }
}

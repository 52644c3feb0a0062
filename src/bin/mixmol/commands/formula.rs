use std::io::Write;

use anyhow::{Context, Result};

use mixmol::{generate_formula, parse_formula_symbols};

use crate::cli::FormulaArgs;
use crate::input::{create_output, read_ingredients};

pub fn run_formula(args: FormulaArgs) -> Result<()> {
    let ingredients = read_ingredients(&args.io)?;
    let formula = generate_formula(&ingredients);

    let mut writer = create_output(args.io.output.as_deref())?;
    writeln!(writer, "{}", formula)?;

    if args.explain {
        let symbols = parse_formula_symbols(&formula);
        if args.json {
            serde_json::to_writer_pretty(&mut writer, &symbols)
                .context("Failed to write explanation JSON")?;
            writeln!(writer)?;
        } else {
            writeln!(writer)?;
            writeln!(writer, "  {:<8} {:<24} {:>3} {:>6}", "symbol", "name", "×", "ratio")?;
            for sym in &symbols {
                writeln!(
                    writer,
                    "  {:<8} {:<24} {:>3} {:>6}",
                    sym.symbol,
                    sym.name.as_deref().unwrap_or("?"),
                    sym.coefficient,
                    sym.ratio
                )?;
            }
        }
    }

    writer.flush().context("Failed to flush output")?;
    Ok(())
}

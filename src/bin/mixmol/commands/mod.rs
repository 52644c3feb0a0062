mod diagram;
mod formula;

use diagram::run_diagram;
use formula::run_formula;

use anyhow::Result;

use crate::cli::Command;

pub fn dispatch(command: Command) -> Result<()> {
    match command {
        Command::Diagram(args) => run_diagram(args),
        Command::Formula(args) => run_formula(args),
    }
}

//! Command-line entry point: reads a JSON room description, runs the
//! placement solver, prints a summary, and writes the placement report.

use std::path::PathBuf;

use clap::Parser;

use roomplan::io::{save_report, to_report, LayoutInput};
use roomplan::solver::{LayoutSolver, Placement};
use roomplan::Result;

#[derive(Parser)]
#[command(name = "roomplan")]
#[command(about = "Places rectangular items inside a polygonal room")]
#[command(version)]
struct Cli {
    /// Path to the JSON room description
    #[arg(default_value = "data/example1.json")]
    input: PathBuf,

    /// Output file for the placement report (default: `<input>_result.json`)
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let input = LayoutInput::load(&cli.input)?;
    let solver = LayoutSolver::new(input.room())?;
    let result = solver.solve(&input.to_items())?;

    let placed = result.iter().filter(|(_, p)| p.is_placed()).count();
    println!("placed {placed} of {} items", result.len());
    for (name, placement) in result.iter() {
        match placement {
            Placement::Placed { center, rotation } => {
                println!("  {name}: center ({:.2}, {:.2}), rotation {rotation}", center.x, center.y);
            }
            Placement::Rejected { reason } => {
                println!("  {name}: not placed ({reason})");
            }
        }
    }
    println!("feasible: {}", result.is_feasible());

    let output = cli.output.unwrap_or_else(|| {
        let stem = cli
            .input
            .file_stem()
            .map_or_else(|| "layout".into(), |s| s.to_string_lossy().into_owned());
        cli.input.with_file_name(format!("{stem}_result.json"))
    });
    save_report(&to_report(&result), &output)?;
    println!("report written to {}", output.display());

    Ok(())
}

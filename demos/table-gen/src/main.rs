mod matrix_parse;
mod render;

use std::env;
use std::fs;

use anyhow::{bail, Context};
use simplelog::*;
use spf::concepts::graph::Graph;
use spf::concepts::label::Labeling;
use spf::table::build_all_tables;

/// Computes every router's forwarding table from a link cost matrix.
///
/// With a file argument the matrix is read from it (first line is the
/// router count, then one row per router); without one the rows are asked
/// for interactively. `--numbers` labels routers 1, 2, ... instead of
/// A, B, ...; `--json` dumps the tables as JSON instead of text.
fn main() -> anyhow::Result<()> {
    CombinedLogger::init(vec![TermLogger::new(
        LevelFilter::Info,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )])?;

    let mut labeling = Labeling::Letters;
    let mut json = false;
    let mut path: Option<String> = None;
    for arg in env::args().skip(1) {
        match arg.as_str() {
            "--numbers" => labeling = Labeling::Numbers { start: 1 },
            "--json" => json = true,
            _ if arg.starts_with("--") => bail!("unknown flag {arg}"),
            _ => path = Some(arg),
        }
    }

    let matrix = match &path {
        Some(file) => {
            let text =
                fs::read_to_string(file).with_context(|| format!("cannot read {file}"))?;
            matrix_parse::from_text(&text)?
        }
        None => matrix_parse::from_prompts()?,
    };

    let graph = Graph::from_matrix(&matrix, labeling)?;
    let tables = build_all_tables(&graph)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&tables)?);
    } else {
        for table in &tables {
            render::print_table(&graph, table);
        }
    }
    Ok(())
}

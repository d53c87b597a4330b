use anyhow::{bail, Context};
use inquire::{prompt_text, prompt_u32};
use log::error;

/// Parses a whole matrix file: the first non-empty line is the router
/// count, then one whitespace-separated row per router.
pub fn from_text(text: &str) -> anyhow::Result<Vec<Vec<i64>>> {
    let mut lines = text.lines().filter(|l| !l.trim().is_empty());
    let count: usize = lines
        .next()
        .context("input is empty, expected a router count")?
        .trim()
        .parse()
        .context("the first line must be the router count")?;
    if count == 0 {
        bail!("there is nothing to compute for zero routers");
    }

    let mut matrix = Vec::with_capacity(count);
    for i in 0..count {
        let line = lines
            .next()
            .with_context(|| format!("expected {count} matrix rows, found only {i}"))?;
        matrix.push(parse_row(line, i)?);
    }
    Ok(matrix)
}

/// Asks for the router count and then one matrix row per router. Rows
/// that fail to parse are asked for again.
pub fn from_prompts() -> anyhow::Result<Vec<Vec<i64>>> {
    println!("Preparing to compute the link state tables...");
    let count = prompt_u32("Please enter the number of routers:")?;
    if count == 0 {
        bail!("there is nothing to compute for zero routers");
    }

    let mut matrix = Vec::with_capacity(count as usize);
    for i in 0..count as usize {
        loop {
            let line = prompt_text(format!("Row {} of the cost matrix (-1 for no link):", i + 1))?;
            match parse_row(&line, i) {
                Ok(row) if row.len() == count as usize => {
                    matrix.push(row);
                    break;
                }
                Ok(row) => error!("expected {count} entries, got {}. Try again.", row.len()),
                Err(err) => error!("{err:#}. Try again."),
            }
        }
    }
    Ok(matrix)
}

fn parse_row(line: &str, row: usize) -> anyhow::Result<Vec<i64>> {
    line.split_whitespace()
        .enumerate()
        .map(|(col, token)| {
            token
                .parse::<i64>()
                .with_context(|| format!("row {row}, column {col}: {token:?} is not an integer"))
        })
        .collect()
}

use std::fs;

use anyhow::{Context, Result};

use molspin::io::{ReadOptions, mmb, mmt};

use crate::cli::Cli;
use crate::display::{self, Context as DisplayContext, Progress};
use crate::input;

const TOTAL_STEPS: u8 = 3;

pub fn run(args: Cli, ctx: DisplayContext) -> Result<()> {
    let source = input::resolve(args.src)?;
    let options = ReadOptions {
        value_terminator: if args.no_terminator {
            None
        } else {
            Some(args.terminator)
        },
    };

    let mut progress = Progress::new(ctx.interactive, TOTAL_STEPS);

    progress.step("Parsing device description");
    let reader = input::open(&source)?;
    let (mol, warnings) = mmt::read_with(reader, options)
        .with_context(|| format!("Failed to compile {source}"))?;

    let parse_substeps = vec![
        format!("{} nodes, {} edges", mol.node_count(), mol.edge_count()),
        format!(
            "leads: left={}, right={}",
            lead_text(mol.left_lead()),
            lead_text(mol.right_lead())
        ),
    ];
    let parse_substeps: Vec<&str> = parse_substeps.iter().map(|s| s.as_str()).collect();
    progress.complete_step("Parsing device description", &parse_substeps);

    for warning in &warnings {
        display::print_warning(warning);
    }

    progress.step("Encoding binary artifact");
    let bytes = mmb::encode(&mol);

    let encode_substeps = vec![format!("{} bytes", bytes.len())];
    let encode_substeps: Vec<&str> = encode_substeps.iter().map(|s| s.as_str()).collect();
    progress.complete_step("Encoding binary artifact", &encode_substeps);

    // The artifact is fully encoded in memory first; a failed compilation
    // never leaves a partial file behind.
    progress.step("Writing output");
    fs::write(&args.output, &bytes)
        .with_context(|| format!("Failed to write output file: {}", args.output.display()))?;

    let write_substeps = vec![args.output.display().to_string()];
    let write_substeps: Vec<&str> = write_substeps.iter().map(|s| s.as_str()).collect();
    progress.complete_step("Writing output", &write_substeps);

    progress.finish();

    Ok(())
}

fn lead_text(lead: Option<u32>) -> String {
    match lead {
        Some(i) => i.to_string(),
        None => "unset".to_string(),
    }
}

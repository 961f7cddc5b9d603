use std::process::ExitCode;

use clap::Parser;

use bin_packer_core::{pack_all, PackError, Package, PackingReport};

#[derive(Parser)]
#[command(name = "packer")]
#[command(about = "Groups a string of digit-sized items into capacity-10 packages.")]
struct CommandLine {
    /// Digit string to pack; exactly one expected
    ///
    /// Captured as a list so that missing or extra tokens surface as
    /// the engine's own validation errors rather than as clap errors.
    #[arg(value_name = "DIGITS")]
    input: Vec<String>,

    /// Print the packing result as JSON
    #[arg(long)]
    json: bool,
}

fn main() -> ExitCode {
    let command_line = CommandLine::parse();

    match run(&command_line) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            report_error(&err);
            ExitCode::FAILURE
        }
    }
}

fn run(command_line: &CommandLine) -> anyhow::Result<()> {
    if !command_line.json {
        println!("Received arguments:");
        for arg in &command_line.input {
            println!("{arg}");
        }
    }

    let packages = pack_all(&command_line.input)?;

    if command_line.json {
        let report = PackingReport::from_packages(&packages);
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("Packing result:");
        println!("{}", Package::render_all(&packages));
        println!("{} package(s)", packages.len());
    }

    Ok(())
}

/// Maps both engine error kinds to one diagnostic channel: a labelled
/// message on stderr, with the process exiting non-zero.
fn report_error(err: &anyhow::Error) {
    let kind = match err.downcast_ref::<PackError>() {
        Some(pack_err) if pack_err.is_format_error() => "format error",
        Some(_) => "invalid argument",
        None => "error",
    };
    eprintln!("packer: {kind}: {err}");
}

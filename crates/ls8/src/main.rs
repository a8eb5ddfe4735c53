//! CLI entry point for the LS-8 runner binary.

use std::env;
use std::ffi::OsString;
use std::io::{self, Write};
use std::path::PathBuf;

use ls8::loader::load_file;
use ls8_core::{run, AluCompat, CoreConfig, CoreState};
#[cfg(test)]
use tempfile as _;
use thiserror as _;

const USAGE_TEXT: &str = "\
Usage: ls8 [options] <program.ls8>

Options:
      --compat-alu     Route NOT, OR and XOR through AND like the reference machine
  -r, --registers      Print the final register file to stderr
  -h, --help           Show this help message

Set RUST_LOG=trace to log every executed instruction to stderr.

Examples:
  ls8 demos/print8.ls8
  ls8 --registers demos/mult.ls8
";

#[derive(Debug, PartialEq, Eq)]
struct RunArgs {
    program: PathBuf,
    compat_alu: bool,
    dump_registers: bool,
}

impl RunArgs {
    const fn config(&self) -> CoreConfig {
        CoreConfig {
            alu_compat: if self.compat_alu {
                AluCompat::AliasToAnd
            } else {
                AluCompat::Named
            },
        }
    }
}

#[derive(Debug)]
enum ParseResult {
    Run(RunArgs),
    Help,
}

fn parse_args(args: impl Iterator<Item = OsString>) -> Result<ParseResult, String> {
    let mut program: Option<PathBuf> = None;
    let mut compat_alu = false;
    let mut dump_registers = false;

    for arg in args {
        if arg == "--help" || arg == "-h" {
            return Ok(ParseResult::Help);
        }

        if arg == "--compat-alu" {
            compat_alu = true;
            continue;
        }

        if arg == "--registers" || arg == "-r" {
            dump_registers = true;
            continue;
        }

        if arg.to_string_lossy().starts_with('-') {
            return Err(format!("unknown option: {}", arg.to_string_lossy()));
        }

        if program.is_some() {
            return Err("multiple program paths provided".to_string());
        }
        program = Some(PathBuf::from(arg));
    }

    let program = program.ok_or_else(|| "missing program path".to_string())?;
    Ok(ParseResult::Run(RunArgs {
        program,
        compat_alu,
        dump_registers,
    }))
}

fn run_program(args: &RunArgs) -> Result<(), i32> {
    let image = load_file(&args.program).map_err(|e| {
        eprintln!("error: {e}");
        1
    })?;

    let mut state = CoreState::from_image(&image).map_err(|e| {
        eprintln!("error: {e}");
        1
    })?;

    let mut out = io::stdout().lock();
    let outcome = run(&mut state, &mut out, &args.config())
        .and_then(|outcome| {
            out.flush()?;
            Ok(outcome)
        })
        .map_err(|e| {
            eprintln!("error: {e}");
            1
        })?;

    log::debug!(
        "{} finished after {} instructions: {:?}",
        args.program.display(),
        outcome.steps,
        outcome.halted
    );

    if args.dump_registers {
        eprintln!("{}", state.registers);
    }

    Ok(())
}

fn main() {
    env_logger::init();

    let exit_code = match parse_args(env::args_os().skip(1)) {
        Ok(ParseResult::Help) => {
            println!("{USAGE_TEXT}");
            0
        }
        Ok(ParseResult::Run(args)) => match run_program(&args) {
            Ok(()) => 0,
            Err(code) => code,
        },
        Err(error) => {
            eprintln!("error: {error}");
            eprintln!("{USAGE_TEXT}");
            1
        }
    };

    std::process::exit(exit_code);
}

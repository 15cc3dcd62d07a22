//! prodsys CLI entry point.

use std::env;
use std::path::PathBuf;
use std::process::ExitCode;

use prodsys_foundation::{Error, NumericPolicy};
use prodsys_runtime::session::out_dir_or_default;
use prodsys_runtime::{RunOptions, run_files};
use tracing_subscriber::EnvFilter;

/// CLI configuration parsed from arguments.
#[derive(Default)]
struct CliConfig {
    inputs: Vec<PathBuf>,
    out_dir: Option<PathBuf>,
    report: Option<PathBuf>,
    json_trace: bool,
    lenient_numbers: bool,
    print_summary: bool,
    show_help: bool,
    show_version: bool,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = env::args().collect();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            let message = e
                .downcast_ref::<Error>()
                .map_or_else(|| e.to_string(), Error::report);
            eprintln!("\x1b[31mError: {message}\x1b[0m");
            ExitCode::FAILURE
        }
    }
}

fn parse_args(args: Vec<String>) -> Result<CliConfig, Box<dyn std::error::Error>> {
    let mut config = CliConfig::default();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-h" | "--help" => config.show_help = true,
            "-V" | "--version" => config.show_version = true,
            "--json-trace" => config.json_trace = true,
            "--lenient-numbers" => config.lenient_numbers = true,
            "--print" => config.print_summary = true,
            "-o" | "--out-dir" => {
                i += 1;
                let dir = args.get(i).ok_or("--out-dir requires a directory")?;
                config.out_dir = Some(PathBuf::from(dir));
            }
            "--report" => {
                i += 1;
                let path = args.get(i).ok_or("--report requires a path")?;
                config.report = Some(PathBuf::from(path));
            }
            arg if arg.starts_with('-') => {
                return Err(format!("unknown option: {arg}").into());
            }
            path => config.inputs.push(PathBuf::from(path)),
        }
        i += 1;
    }

    Ok(config)
}

fn run(args: Vec<String>) -> Result<(), Box<dyn std::error::Error>> {
    let cli = parse_args(args)?;

    if cli.show_help {
        print_help();
        return Ok(());
    }

    if cli.show_version {
        println!("prodsys {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    let [config_path, facts_path, kb_path] = <[PathBuf; 3]>::try_from(cli.inputs)
        .map_err(|inputs| {
            format!(
                "expected 3 input files (CONFIG FACTS KB), got {}; see --help",
                inputs.len()
            )
        })?;

    let mut options = RunOptions::new(config_path, facts_path, kb_path)
        .with_out_dir(out_dir_or_default(cli.out_dir.as_deref()))
        .with_json_trace(cli.json_trace);
    if let Some(report) = cli.report {
        options = options.with_report(report);
    }
    if cli.lenient_numbers {
        options = options.with_numeric_policy(NumericPolicy::ZeroFallback);
    }

    let outcome = run_files(options)?;

    if cli.print_summary {
        print!("{}", outcome.summary);
    }
    Ok(())
}

fn print_help() {
    println!(
        "\x1b[1mprodsys\x1b[0m - Forward-chaining production system

\x1b[1mUSAGE:\x1b[0m
    prodsys [OPTIONS] <CONFIG> <FACTS> <KB>

\x1b[1mARGUMENTS:\x1b[0m
    <CONFIG>    Attribute registry, goal, and rule priorities
    <FACTS>     Initial facts
    <KB>        Knowledge base (domain and rules)

\x1b[1mOPTIONS:\x1b[0m
    -h, --help             Print help information
    -V, --version          Print version information
    -o, --out-dir DIR      Directory for the trace and summary files (default: .)
    --json-trace           Write the step trace as JSON lines
    --report PATH          Also write a JSON report of the whole run
    --lenient-numbers      Treat non-integer numeric values as 0 (with a warning)
    --print                Print the summary to stdout

\x1b[1mOUTPUTS:\x1b[0m
    Salida1-<FACTS>        Step-by-step reasoning trace
    Salida2-<FACTS>        Goal and the chain of rules that reached it

\x1b[1mENVIRONMENT:\x1b[0m
    RUST_LOG               Log filter for diagnostics on stderr (default: warn)

\x1b[1mEXAMPLES:\x1b[0m
    prodsys Config.txt BH-1.txt BC.txt
    prodsys -o out --print Config.txt BH-1.txt BC.txt
    prodsys --report run.json --json-trace Config.txt BH-1.txt BC.txt"
    );
}

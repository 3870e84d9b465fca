use anyhow::Context;
use clap::{value_parser, Arg, ArgMatches, Command};
use space_export::{industry, metadata, technology};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

fn cli() -> Command {
    Command::new("space-export")
        .version("0.1.0")
        .about("Flatten industry/technology space graph JSON into CSV tables")
        .subcommand_required(true)
        .subcommand(
            Command::new("technology-space")
                .about("Decode plot traces into node and edge tables")
                .arg(
                    Arg::new("input")
                        .long("input")
                        .default_value(technology::DEFAULT_INPUT)
                        .value_parser(value_parser!(PathBuf))
                        .help("Plot-trace JSON file to convert"),
                )
                .arg(
                    Arg::new("out-dir")
                        .long("out-dir")
                        .default_value(technology::DEFAULT_OUT_DIR)
                        .value_parser(value_parser!(PathBuf))
                        .help("Directory the CSV tables are written to"),
                ),
        )
        .subcommand(
            Command::new("industry-space")
                .about("Flatten a nodes/links document into two tables")
                .arg(
                    Arg::new("input")
                        .long("input")
                        .default_value(industry::DEFAULT_INPUT)
                        .value_parser(value_parser!(PathBuf))
                        .help("Industry space JSON file to convert"),
                )
                .arg(
                    Arg::new("out-dir")
                        .long("out-dir")
                        .default_value(".")
                        .value_parser(value_parser!(PathBuf))
                        .help("Directory the CSV tables are written to"),
                ),
        )
        .subcommand(
            Command::new("metadata")
                .about("Derive a name,color lookup from a nodes table")
                .arg(
                    Arg::new("input")
                        .long("input")
                        .default_value(metadata::DEFAULT_INPUT)
                        .value_parser(value_parser!(PathBuf))
                        .help("Nodes CSV to scan"),
                )
                .arg(
                    Arg::new("output")
                        .long("output")
                        .default_value(metadata::DEFAULT_OUTPUT)
                        .value_parser(value_parser!(PathBuf))
                        .help("Lookup CSV to write"),
                ),
        )
}

fn path_arg(args: &ArgMatches, name: &str) -> PathBuf {
    args.get_one::<PathBuf>(name)
        .expect("argument has a default")
        .clone()
}

fn run(matches: &ArgMatches) -> anyhow::Result<()> {
    match matches.subcommand() {
        Some(("technology-space", args)) => {
            let input = path_arg(args, "input");
            let report = technology::run(&input, &path_arg(args, "out-dir"))
                .with_context(|| format!("converting {}", input.display()))?;
            println!("Nodes: {}", report.nodes);
            println!("Links: {}", report.edges);
        }
        Some(("industry-space", args)) => {
            let input = path_arg(args, "input");
            let report = industry::run(&input, &path_arg(args, "out-dir"))
                .with_context(|| format!("converting {}", input.display()))?;
            println!("Nodes: {}", report.nodes);
            println!("Links: {}", report.links);
        }
        Some(("metadata", args)) => {
            let input = path_arg(args, "input");
            let names = metadata::run(&input, &path_arg(args, "output"))
                .with_context(|| format!("deriving metadata from {}", input.display()))?;
            println!("Categories: {names}");
        }
        _ => unreachable!("subcommand is required"),
    }
    Ok(())
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let matches = cli().get_matches();
    match run(&matches) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

mod cli;

use clap::Parser;
use cli::Cli;
use colored::Colorize;
use tracing_subscriber::EnvFilter;
use validate_frontmatter::{config, output, parser, schema, validate};

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if cli.check_engines {
        print_engines();
        return;
    }

    let Some(path) = cli.path else {
        println!("Usage: validate-frontmatter <file.md>");
        std::process::exit(2);
    };

    if !path.exists() {
        println!("File not found: {}", path.display());
        std::process::exit(2);
    }

    let mut config = config::Config::load(cli.config.as_deref()).unwrap_or_else(|e| {
        eprintln!("Error: {e}");
        std::process::exit(2);
    });

    if let Some(dir) = cli.schema_dir {
        config.schema.dir = dir;
    }
    if cli.no_schema {
        config.schema.enabled = false;
    }
    if cli.builtin_parser {
        config.parser.engine = parser::ParserEngine::Builtin;
    }

    let report = validate::validate_path(&path, &config).unwrap_or_else(|e| {
        eprintln!("Error: {e}");
        std::process::exit(2);
    });
    let formatted = output::format_report(&report, &cli.format);

    if let Some(out_path) = cli.output {
        std::fs::write(&out_path, &formatted).unwrap_or_else(|e| {
            eprintln!("Error writing output: {e}");
            std::process::exit(2);
        });
        eprintln!("Output written to {}", out_path.display());
    } else {
        print!("{formatted}");
    }

    std::process::exit(report.exit_code());
}

/// Logs go to stderr so stdout carries only the report. `RUST_LOG` wins
/// over `-v`.
fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn print_engines() {
    println!("{}", "Engine Availability".bold().underline());
    println!();

    let status = |available: bool| {
        if available {
            "READY".green().bold().to_string()
        } else {
            "NOT AVAILABLE".red().to_string()
        }
    };

    for p in parser::all_parsers() {
        println!(
            "  [{}] {name:<12} {desc}",
            status(p.is_available()),
            name = p.name(),
            desc = p.description(),
        );
    }
    println!(
        "  [{}] {name:<12} {desc}",
        status(schema::engine_available()),
        name = "jsonschema",
        desc = "JSON Schema validation of agent and skill frontmatter",
    );

    println!();
    println!("Note: the builtin parser and basic checks require no optional engine.");
}

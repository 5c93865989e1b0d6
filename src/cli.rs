use clap::Parser;
use std::path::PathBuf;
use validate_frontmatter::output::OutputFormat;

#[derive(Parser)]
#[command(
    name = "validate-frontmatter",
    version,
    about = "Validate the YAML frontmatter of agent and skill Markdown files"
)]
pub struct Cli {
    /// Markdown file to validate
    pub path: Option<PathBuf>,

    /// Output format
    #[arg(long, short, default_value = "pretty", value_enum)]
    pub format: OutputFormat,

    /// Write output to file instead of stdout
    #[arg(long, short)]
    pub output: Option<PathBuf>,

    /// Directory holding agent.schema.json and skill.schema.json
    #[arg(long)]
    pub schema_dir: Option<PathBuf>,

    /// Skip JSON Schema lookup and run the basic checks only
    #[arg(long)]
    pub no_schema: bool,

    /// Use the builtin line-oriented parser instead of the YAML engine
    #[arg(long)]
    pub builtin_parser: bool,

    /// Custom config file path
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(long, short, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Show which parsing and schema engines are available, then exit
    #[arg(long)]
    pub check_engines: bool,
}

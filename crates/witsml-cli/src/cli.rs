use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "witsml",
    about = "Browse a WITSML catalog: resolve locators into child resources",
    version,
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[arg(long, global = true, default_value = "text")]
    pub format: OutputFormat,

    /// Catalog snapshot (JSON) to browse
    #[arg(long, global = true)]
    pub catalog: Option<PathBuf>,

    /// TOML configuration file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Reject malformed locators instead of degrading them
    #[arg(long, global = true)]
    pub strict: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Subcommand)]
pub enum Command {
    /// List the children of a well, wellbore, or the whole server
    Ls(LsArgs),
    /// Fetch every object of one type under a wellbore, or one by `--id`
    Get(GetArgs),
    /// Show the supported object types
    Types(TypesArgs),
}

#[derive(Args)]
pub struct LsArgs {
    /// Locator such as `/Well(w1)/Wellbore(wb1)`
    #[arg(default_value = "/")]
    pub uri: String,
    /// Object type to list at wellbore level (repeatable)
    #[arg(short = 't', long = "type")]
    pub types: Vec<String>,
    /// Well name filter at server level
    #[arg(long, default_value = "")]
    pub filter: String,
    /// Issue per-type listings one at a time
    #[arg(long)]
    pub sequential: bool,
}

#[derive(Args)]
pub struct GetArgs {
    pub well_id: String,
    pub wellbore_id: String,
    pub object_type: String,
    /// Fetch only the object with this id
    #[arg(long)]
    pub id: Option<String>,
}

#[derive(Args)]
pub struct TypesArgs {}

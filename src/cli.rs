use crate::config::Locale;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Main CLI interface for `sqlmaker`
#[derive(Parser)]
#[command(name = "sqlmaker")]
#[command(version = crate::VERSION)]
#[command(about = "sqlmaker - MyBatis mapper SQL generator")]
#[command(
    long_about = "Turn a table name, a column list and WHERE conditions into a MyBatis mapper statement"
)]
pub struct Cli {
    /// Configuration file (defaults to ./sqlmaker.toml when present)
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// The command to execute
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Generate a mapper statement
    Generate(GenerateArgs),
    /// Write a default sqlmaker.toml
    Init {
        /// Directory to write the configuration into
        #[arg(long, value_name = "DIR", default_value = ".")]
        dir: PathBuf,
        /// Language of user-facing messages
        #[arg(long, value_enum, default_value_t = Locale::En)]
        locale: Locale,
        /// Overwrite an existing configuration file
        #[arg(long)]
        force: bool,
    },
}

/// Form fields for the generate command
#[derive(Args, Debug, Default)]
pub struct GenerateArgs {
    /// Statement type: select, insert, update or delete
    #[arg(value_name = "OPERATION", required_unless_present = "request")]
    pub operation: Option<String>,

    /// Read the whole request from a .toml or .json file
    #[arg(long, value_name = "FILE", conflicts_with_all = ["operation", "table"])]
    pub request: Option<PathBuf>,

    /// Table name
    #[arg(long, short, value_name = "NAME")]
    pub table: Option<String>,

    /// Comma-separated column list
    #[arg(long, short, value_name = "COLUMNS", default_value = "")]
    pub columns: String,

    /// Structured condition `column OP value`, repeatable
    #[arg(long = "where", short = 'w', value_name = "CONDITION")]
    pub conditions: Vec<String>,

    /// Free-text WHERE content, copied verbatim
    #[arg(long, value_name = "TEXT", conflicts_with = "conditions")]
    pub where_text: Option<String>,

    /// Table to LEFT JOIN (SELECT only)
    #[arg(long, value_name = "TABLE", requires = "join_on")]
    pub join_table: Option<String>,

    /// ON clause for the join
    #[arg(long, value_name = "CLAUSE", requires = "join_table")]
    pub join_on: Option<String>,

    /// Statement id (defaults to operation + table)
    #[arg(long, value_name = "ID")]
    pub id: Option<String>,

    /// parameterType attribute
    #[arg(long, value_name = "TYPE")]
    pub parameter_type: Option<String>,

    /// resultType attribute (SELECT only)
    #[arg(long, value_name = "TYPE")]
    pub result_type: Option<String>,

    /// Literal INSERT values instead of #{column} placeholders
    #[arg(long, value_name = "TEXT")]
    pub values: Option<String>,

    /// Literal comma-separated SET assignments instead of column = #{column}
    #[arg(long, value_name = "TEXT")]
    pub set: Option<String>,

    /// Write the statement to a file instead of stdout
    #[arg(long, short, value_name = "FILE")]
    pub output: Option<PathBuf>,
}

impl Cli {
    /// Parse command line arguments
    #[must_use]
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }
}

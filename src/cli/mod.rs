// CLI module for command-line interface

pub mod compare;
pub mod parse;
pub mod sort;

use clap::{Parser, Subcommand};
use serde::Serialize;
use std::path::PathBuf;

use crate::models::comparison::Relation;
use crate::utils::config::{Config, OutputFormat};
use crate::utils::error::Result;

use self::compare::{CompareCommand, RelationArgs};
use self::parse::ParseCommand;
use self::sort::SortCommand;

/// Main CLI structure
#[derive(Parser)]
#[command(name = "vcmp")]
#[command(about = "Parse and compare dot-separated numeric version strings")]
#[command(long_about = r#"vcmp compares versions made of dot-separated non-negative integers
such as 2.13.4. Sections are compared left to right; when all shared sections
are equal, the version with more sections is greater.

Comparison commands print true, false or error and exit with 0, 1 or 2, so
they can be used directly in shell conditionals.

Examples:
  vcmp gt 2.13.4 2.3.4          Is 2.13.4 greater than 2.3.4?
  vcmp compare 1.2 '>=' 1.2.0   Compare using an operator
  vcmp parse 2.13.4             Show the numeric sections
  vcmp sort 1.10 1.2 1.9        Print versions in ascending order"#)]
#[command(version)]
pub struct Cli {
    /// Output results in JSON format
    #[arg(long, global = true)]
    pub json: bool,

    /// Path to a config.toml file
    #[arg(long, global = true, env = "VCMP_CONFIG", value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Enable debug logging on stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// All available CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// A equals B
    Eq(RelationArgs),
    /// A does not equal B
    Ne(RelationArgs),
    /// A is greater than B
    Gt(RelationArgs),
    /// A is greater than or equal to B
    Ge(RelationArgs),
    /// A is less than B
    Lt(RelationArgs),
    /// A is less than or equal to B
    Le(RelationArgs),
    /// Compare two versions with an operator (==, !=, >, >=, <, <=)
    Compare(CompareCommand),
    /// Show the numeric sections of one or more versions
    Parse(ParseCommand),
    /// Sort versions in ascending order
    Sort(SortCommand),
}

/// Output settings resolved from flags and configuration
#[derive(Debug, Clone, Copy)]
pub struct OutputContext {
    pub format: OutputFormat,
}

impl OutputContext {
    pub fn resolve(json_flag: bool, config: &Config) -> Self {
        let format = if json_flag { OutputFormat::Json } else { config.output };
        Self { format }
    }

    pub fn is_json(&self) -> bool {
        self.format == OutputFormat::Json
    }

    /// Print a value as pretty JSON
    pub fn print_json<T: Serialize>(&self, value: &T) -> Result<()> {
        println!("{}", serde_json::to_string_pretty(value)?);
        Ok(())
    }
}

/// Command dispatcher
pub struct CliDispatcher;

impl CliDispatcher {
    /// Run a command and return the process exit code
    pub fn execute(command: Commands, output: OutputContext) -> Result<i32> {
        match command {
            Commands::Eq(args) => args.execute(Relation::Eq, output),
            Commands::Ne(args) => args.execute(Relation::Ne, output),
            Commands::Gt(args) => args.execute(Relation::Gt, output),
            Commands::Ge(args) => args.execute(Relation::Ge, output),
            Commands::Lt(args) => args.execute(Relation::Lt, output),
            Commands::Le(args) => args.execute(Relation::Le, output),
            Commands::Compare(cmd) => cmd.execute(output),
            Commands::Parse(cmd) => cmd.execute(output),
            Commands::Sort(cmd) => cmd.execute(output),
        }
    }
}

use clap::Args;
use serde::Serialize;

use crate::cli::OutputContext;
use crate::models::version::{self, Version};
use crate::utils::error::{Result, VcmpError};

/// Show the numeric sections of versions
#[derive(Debug, Args)]
pub struct ParseCommand {
    /// Versions to parse
    #[arg(required = true)]
    pub versions: Vec<String>,
}

#[derive(Debug, Serialize)]
struct ParsedEntry<'a> {
    input: &'a str,
    version: Version,
    sections: Vec<u64>,
}

impl ParseCommand {
    pub fn execute(&self, output: OutputContext) -> Result<i32> {
        let entries = self
            .versions
            .iter()
            .map(|input| {
                let version = version::parse(input)
                    .map_err(|e| VcmpError::parse(input.as_str(), e))?;
                let sections = version.sections().to_vec();
                Ok(ParsedEntry { input: input.as_str(), version, sections })
            })
            .collect::<Result<Vec<_>>>()?;

        if output.is_json() {
            output.print_json(&entries)?;
        } else {
            for entry in &entries {
                let sections: Vec<String> =
                    entry.sections.iter().map(ToString::to_string).collect();
                println!("{} -> [{}]", entry.input, sections.join(", "));
            }
        }

        Ok(0)
    }
}

use clap::Args;
use tracing::debug;

use crate::cli::OutputContext;
use crate::models::version::{self, Version};
use crate::utils::error::{Result, VcmpError};

/// Sort versions
#[derive(Debug, Args)]
pub struct SortCommand {
    /// Versions to sort
    #[arg(required = true)]
    pub versions: Vec<String>,

    /// Sort in descending order
    #[arg(short, long)]
    pub reverse: bool,
}

impl SortCommand {
    pub fn execute(&self, output: OutputContext) -> Result<i32> {
        let mut parsed = self
            .versions
            .iter()
            .map(|input| {
                version::parse(input)
                    .map(|v| (v, input.as_str()))
                    .map_err(|e| VcmpError::parse(input.as_str(), e))
            })
            .collect::<Result<Vec<(Version, &str)>>>()?;

        // Stable, so inputs that parse equal ("1.2" and "01.2") keep their order
        if self.reverse {
            parsed.sort_by(|(a, _), (b, _)| b.cmp(a));
        } else {
            parsed.sort_by(|(a, _), (b, _)| a.cmp(b));
        }
        debug!("sorted {} versions", parsed.len());

        let sorted: Vec<&str> = parsed.iter().map(|(_, input)| *input).collect();
        if output.is_json() {
            output.print_json(&sorted)?;
        } else {
            for input in sorted {
                println!("{}", input);
            }
        }

        Ok(0)
    }
}

use clap::Args;
use serde::Serialize;

use crate::cli::OutputContext;
use crate::models::comparison::{Comparison, Relation};
use crate::models::version;
use crate::services::comparator;
use crate::utils::error::Result;

/// Operands for the eq/ne/gt/ge/lt/le commands
#[derive(Debug, Args)]
pub struct RelationArgs {
    /// Left-hand version
    pub left: String,

    /// Right-hand version
    pub right: String,
}

/// Compare two versions with an explicit operator
#[derive(Debug, Args)]
pub struct CompareCommand {
    /// Left-hand version
    pub left: String,

    /// Operator: eq, ne, gt, ge, lt, le or ==, !=, >, >=, <, <=
    #[arg(value_name = "OP")]
    pub relation: Relation,

    /// Right-hand version
    pub right: String,
}

#[derive(Debug, Serialize)]
struct ComparisonReport<'a> {
    left: &'a str,
    relation: &'static str,
    right: &'a str,
    result: Comparison,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    errors: Vec<String>,
}

impl RelationArgs {
    pub fn execute(&self, relation: Relation, output: OutputContext) -> Result<i32> {
        run_comparison(&self.left, relation, &self.right, output)
    }
}

impl CompareCommand {
    pub fn execute(&self, output: OutputContext) -> Result<i32> {
        run_comparison(&self.left, self.relation, &self.right, output)
    }
}

fn run_comparison(
    left: &str,
    relation: Relation,
    right: &str,
    output: OutputContext,
) -> Result<i32> {
    let result = comparator::compare(relation, left, right);

    let errors: Vec<String> = if result.is_error() {
        [left, right]
            .iter()
            .filter_map(|input| {
                version::parse(input)
                    .err()
                    .map(|e| format!("Invalid version '{}': {}", input, e))
            })
            .collect()
    } else {
        Vec::new()
    };

    if output.is_json() {
        output.print_json(&ComparisonReport {
            left,
            relation: relation.symbol(),
            right,
            result,
            errors,
        })?;
    } else {
        println!("{}", result);
        for error in &errors {
            eprintln!("error: {}", error);
        }
    }

    Ok(result.exit_code())
}

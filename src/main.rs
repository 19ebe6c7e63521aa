// vcmp - dot-separated numeric version comparison
// Main CLI entry point

use clap::Parser;
use std::process;
use tracing::debug;
use vcmp::cli::{Cli, CliDispatcher, OutputContext};
use vcmp::utils::config::ConfigParser;
use vcmp::utils::error::UserError;
use vcmp::utils::logging::init_logging;

fn main() {
    let cli = Cli::parse();

    let result = ConfigParser::load(cli.config.as_deref()).and_then(|config| {
        init_logging(cli.verbose, &config.log_level);
        debug!(?config, "loaded configuration");
        let output = OutputContext::resolve(cli.json, &config);
        CliDispatcher::execute(cli.command, output)
    });

    match result {
        Ok(code) => process::exit(code),
        Err(err) => {
            let user_error = UserError::from_vcmp_error(&err);
            user_error.print();
            process::exit(user_error.exit_code);
        }
    }
}

//! Rebate calculator CLI

use std::{
    io::{self, BufRead, Write},
    process,
};

use clap::Parser;
use rust_decimal::Decimal;
use tracing::error;

use rebates::{
    calculation::{CalculateRebateRequest, CalculateRebateResult},
    fixtures::Fixture,
    registry::CalculatorRegistry,
    service::RebateService,
};

use crate::config::Cli;

mod config;
mod logging;

fn main() {
    let _env = dotenvy::dotenv();

    let cli = Cli::parse();

    if let Err(error) = logging::init_subscriber(&cli.logging) {
        #[expect(
            clippy::print_stderr,
            reason = "logging not initialized, must use eprintln for subscriber errors"
        )]
        {
            eprintln!("failed to initialise logging: {error}");
        }

        process::exit(1);
    }

    match run(cli) {
        Ok(result) => report(&result),
        Err(message) => {
            error!(%message, "rebate calculation aborted");

            #[expect(clippy::print_stderr, reason = "CLI error output")]
            {
                eprintln!("{message}");
            }

            process::exit(1);
        }
    }
}

fn run(cli: Cli) -> Result<CalculateRebateResult, String> {
    let mut fixture = Fixture::with_base_path(&cli.fixtures);

    fixture
        .load_rebates(&cli.fixture_set)
        .and_then(|fixture| fixture.load_products(&cli.fixture_set))
        .map_err(|error| format!("failed to load fixtures: {error}"))?;

    let (rebates, products) = fixture.into_stores();
    let service = RebateService::new(rebates, products, CalculatorRegistry::standard());

    let request = read_request(cli.rebate, cli.product, cli.volume)?;

    service
        .calculate(&request)
        .map_err(|error| format!("failed to calculate rebate: {error}"))
}

/// Build the request, prompting on stdin for anything not passed as a flag.
fn read_request(
    rebate: Option<String>,
    product: Option<String>,
    volume: Option<Decimal>,
) -> Result<CalculateRebateRequest, String> {
    let rebate_identifier = match rebate {
        Some(rebate) => rebate,
        None => prompt("Enter Rebate Identifier: ")?,
    };

    let product_identifier = match product {
        Some(product) => product,
        None => prompt("Enter Product Identifier: ")?,
    };

    let volume = match volume {
        Some(volume) => volume,
        None => {
            let input = prompt("Enter Volume: ")?;

            input
                .parse::<Decimal>()
                .map_err(|error| format!("invalid volume {input:?}: {error}"))?
        }
    };

    Ok(CalculateRebateRequest::new(
        rebate_identifier,
        product_identifier,
        volume,
    ))
}

fn prompt(label: &str) -> Result<String, String> {
    let mut stdout = io::stdout().lock();

    stdout
        .write_all(label.as_bytes())
        .and_then(|()| stdout.flush())
        .map_err(|error| format!("failed to write prompt: {error}"))?;

    let mut line = String::new();

    io::stdin()
        .lock()
        .read_line(&mut line)
        .map_err(|error| format!("failed to read input: {error}"))?;

    Ok(line.trim().to_string())
}

#[expect(clippy::print_stdout, reason = "CLI result output")]
fn report(result: &CalculateRebateResult) {
    if result.success {
        println!("Result: Success");
    } else {
        println!("Result: Failure");
    }

    if let Some(amount) = result.amount {
        println!("Amount: {amount}");
    }

    if let Some(reason) = result.failure {
        println!("Reason: {reason}");
    }
}

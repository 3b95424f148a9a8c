// Copyright 2015 Pierre Talbot (IRCAM)

// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Runs the overflow and underflow boundary scenarios on every supported primitive type.

use clap::{Parser, ValueEnum};
use num_traits::NumCast;
use safestep::{BoundaryReport, Numeric, ReportError};
use serde::Serialize;
use std::ops::Div;
use std::process::ExitCode;
use thiserror::Error;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "overflow-report",
  about = "Adds and subtracts a fraction of the maximum of each primitive type until its range is exceeded.")]
struct Cli {
  #[arg(long, default_value_t = 5, value_parser = clap::value_parser!(u64).range(1..),
    help = "Number of steps expected to stay in range. One more step is attempted afterwards.")]
  steps: u64,
  #[arg(long, value_enum, default_value_t = Format::Text)]
  format: Format,
  #[arg(long, value_enum, default_value_t = Scenario::Both)]
  direction: Scenario,
}

#[derive(ValueEnum, Clone, Copy, PartialEq, Eq, Debug)]
enum Format {
  Text,
  Json,
}

#[derive(ValueEnum, Clone, Copy, PartialEq, Eq, Debug)]
enum Scenario {
  Overflow,
  Underflow,
  Both,
}

#[derive(Error, Debug)]
enum CliError {
  #[error(transparent)]
  Report(#[from] ReportError),
  #[error("cannot serialize report: {0}")]
  Json(#[from] serde_json::Error),
}

#[derive(Default)]
struct Output {
  text: String,
  json: Vec<serde_json::Value>,
}

impl Output {
  fn push<T>(&mut self, format: Format, report: &BoundaryReport<T>) -> Result<(), CliError>
  where
    T: Numeric + Serialize,
  {
    match format {
      Format::Text => self.text.push_str(&report.to_string()),
      Format::Json => self.json.push(serde_json::to_value(report)?),
    }
    Ok(())
  }
}

fn run<T>(cli: &Cli, output: &mut Output, overflow: bool) -> Result<(), CliError>
where
  T: Numeric + NumCast + Div<Output = T> + Serialize,
{
  let report = if overflow {
    BoundaryReport::<T>::overflow(cli.steps)
  } else {
    BoundaryReport::<T>::underflow(cli.steps)
  };
  match report {
    Ok(report) => output.push(cli.format, &report),
    Err(ReportError::StepsNotRepresentable { steps, type_name }) => {
      warn!(steps, type_name, "skipping type");
      Ok(())
    }
    Err(err) => Err(err.into()),
  }
}

macro_rules! run_all {
  ( $cli:expr, $output:expr, $overflow:expr; $( $t:ty ),* ) => {
    $( run::<$t>($cli, $output, $overflow)?; )*
  };
}

fn report(cli: &Cli) -> Result<String, CliError> {
  let mut output = Output::default();
  let passes: &[bool] = match cli.direction {
    Scenario::Overflow => &[true],
    Scenario::Underflow => &[false],
    Scenario::Both => &[true, false],
  };
  for &overflow in passes {
    info!(steps = cli.steps, overflow, "running boundary scenarios");
    run_all!(cli, &mut output, overflow;
      i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64);
  }
  match cli.format {
    Format::Text => Ok(output.text),
    Format::Json => Ok(serde_json::to_string_pretty(&output.json)?),
  }
}

fn main() -> ExitCode {
  tracing_subscriber::fmt()
    .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
    .with_writer(std::io::stderr)
    .init();

  let cli = Cli::parse();
  match report(&cli) {
    Ok(out) => {
      println!("{}", out);
      ExitCode::SUCCESS
    }
    Err(err) => {
      error!(%err, "overflow report failed");
      ExitCode::FAILURE
    }
  }
}

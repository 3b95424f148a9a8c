// Copyright 2015 Pierre Talbot (IRCAM)

// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Boundary scenarios over a whole numeric type.
//!
//! A scenario divides the maximum value of a type into `steps` equal deltas and walks them from one end of the range: first `steps` times, which must stay in range for integers, then once more to probe the opposite bound. Both outcomes are recorded; the report does not judge them. For instance, walking down from `i8::MAX` never reaches `i8::MIN`.

use crate::error::ReportError;
use crate::kind::{Numeric, NumericKind};
use crate::limits::RangeLimits;
use crate::step::{safe_add, safe_subtract, Direction};
use num_traits::NumCast;
use serde::Serialize;
use std::any::type_name;
use std::fmt::{self, Display};
use std::ops::Div;
use tracing::debug;

/// One run of a scenario.
#[derive(Clone, Copy, PartialEq, Debug, Serialize)]
pub struct StepOutcome<T>
{
  pub steps: u64,
  pub ok: bool,
  pub value: T
}

impl<T> StepOutcome<T>
{
  fn new(steps: u64, (ok, value): (bool, T)) -> StepOutcome<T> {
    StepOutcome { steps, ok, value }
  }
}

#[derive(Clone, PartialEq, Debug, Serialize)]
pub struct BoundaryReport<T>
{
  pub type_name: &'static str,
  pub kind: NumericKind,
  pub direction: Direction,
  pub start: T,
  pub delta: T,
  /// `steps` applications of `delta`.
  pub within: StepOutcome<T>,
  /// `steps + 1` applications of `delta`.
  pub beyond: StepOutcome<T>
}

impl<T> BoundaryReport<T> where
  T: Numeric + NumCast + Div<Output=T>
{
  /// Adds `MAX / steps` to zero, `steps` then `steps + 1` times.
  pub fn overflow(steps: u64) -> Result<BoundaryReport<T>, ReportError> {
    let delta = Self::delta(steps)?;
    Self::scenario(Direction::Add, T::zero(), delta, steps)
  }

  /// Subtracts `MAX / steps` from `MAX`, `steps` then `steps + 1` times.
  pub fn underflow(steps: u64) -> Result<BoundaryReport<T>, ReportError> {
    let delta = Self::delta(steps)?;
    Self::scenario(Direction::Subtract, <T as RangeLimits>::max_value(), delta, steps)
  }

  fn delta(steps: u64) -> Result<T, ReportError> {
    if steps == 0 {
      return Err(ReportError::ZeroSteps);
    }
    let divisor = <T as NumCast>::from(steps)
      .ok_or(ReportError::StepsNotRepresentable { steps, type_name: type_name::<T>() })?;
    Ok(<T as RangeLimits>::max_value() / divisor)
  }
}

impl<T: Numeric> BoundaryReport<T>
{
  /// Runs `direction` from `start` by `delta`, `steps` then `steps + 1` times.
  pub fn scenario(direction: Direction, start: T, delta: T, steps: u64)
    -> Result<BoundaryReport<T>, ReportError>
  {
    let extra = steps.checked_add(1).ok_or(ReportError::TooManySteps { steps })?;
    let run = |n| match direction {
      Direction::Add => safe_add(start, delta, n),
      Direction::Subtract => safe_subtract(start, delta, n)
    };
    let report = BoundaryReport {
      type_name: type_name::<T>(),
      kind: T::KIND,
      direction,
      start,
      delta,
      within: StepOutcome::new(steps, run(steps)),
      beyond: StepOutcome::new(extra, run(extra))
    };
    debug!(type_name = report.type_name, %direction, steps,
      within = report.within.ok, beyond = report.beyond.ok, "boundary scenario");
    Ok(report)
  }

  /// `true` if the extra step was rejected while the first run was not.
  pub fn hits_bound(&self) -> bool {
    self.within.ok && !self.beyond.ok
  }
}

impl<T: Display> Display for BoundaryReport<T>
{
  fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
    let (title, verb, event) = match self.direction {
      Direction::Add => ("Overflow", "Adding", "overflow"),
      Direction::Subtract => ("Underflow", "Subtracting", "underflow")
    };
    writeln!(formatter, "{} test of type = {} ({})", title, self.type_name, self.kind)?;
    for (label, outcome) in [("without", &self.within), ("with", &self.beyond)].iter() {
      writeln!(formatter, "\t{} numbers {} {} ({}, {}, {}) = {} | {}: {}",
        verb, label, event, self.start, self.delta, outcome.steps, outcome.value, event, !outcome.ok)?;
    }
    Ok(())
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn signed_overflow_report() {
    let report = BoundaryReport::<i8>::overflow(5).unwrap();
    assert_eq!(report.type_name, "i8");
    assert_eq!(report.kind, NumericKind::SignedInteger);
    assert_eq!(report.start, 0);
    assert_eq!(report.delta, 25);
    assert_eq!(report.within, StepOutcome { steps: 5, ok: true, value: 125 });
    assert_eq!(report.beyond, StepOutcome { steps: 6, ok: false, value: 125 });
    assert!(report.hits_bound());
  }

  #[test]
  fn unsigned_underflow_report() {
    let report = BoundaryReport::<u8>::underflow(5).unwrap();
    assert_eq!(report.start, 255);
    assert_eq!(report.delta, 51);
    assert_eq!(report.within, StepOutcome { steps: 5, ok: true, value: 0 });
    assert_eq!(report.beyond, StepOutcome { steps: 6, ok: false, value: 0 });
    assert!(report.hits_bound());
  }

  #[test]
  fn signed_underflow_stays_in_range() {
    let report = BoundaryReport::<i8>::underflow(5).unwrap();
    assert_eq!(report.within.value, 2);
    assert_eq!(report.beyond, StepOutcome { steps: 6, ok: true, value: -23 });
    assert!(!report.hits_bound());
  }

  #[test]
  fn float_overflow_report() {
    let report = BoundaryReport::<f32>::overflow(5).unwrap();
    assert_eq!(report.kind, NumericKind::FloatingPoint);
    assert!(report.hits_bound());
    assert_eq!(report.beyond.value, report.within.value);
    assert!(report.beyond.value.is_finite());
  }

  #[test]
  fn invalid_steps() {
    assert_eq!(BoundaryReport::<u32>::overflow(0), Err(ReportError::ZeroSteps));
    assert_eq!(BoundaryReport::<u8>::underflow(300),
      Err(ReportError::StepsNotRepresentable { steps: 300, type_name: "u8" }));
    assert_eq!(BoundaryReport::<u64>::overflow(u64::MAX),
      Err(ReportError::TooManySteps { steps: u64::MAX }));
  }

  #[test]
  fn explicit_scenario() {
    let report = BoundaryReport::scenario(Direction::Subtract, 10u8, 3, 3).unwrap();
    assert_eq!(report.within, StepOutcome { steps: 3, ok: true, value: 1 });
    assert_eq!(report.beyond, StepOutcome { steps: 4, ok: false, value: 1 });
    assert!(report.hits_bound());
  }

  #[test]
  fn text_output() {
    let report = BoundaryReport::<i8>::overflow(5).unwrap();
    let expected = "Overflow test of type = i8 (signed integer)\n\
      \tAdding numbers without overflow (0, 25, 5) = 125 | overflow: false\n\
      \tAdding numbers with overflow (0, 25, 6) = 125 | overflow: true\n";
    assert_eq!(report.to_string(), expected);
  }

  #[test]
  fn json_output() {
    let report = BoundaryReport::<u8>::underflow(5).unwrap();
    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json, serde_json::json!({
      "type_name": "u8",
      "kind": "unsigned_integer",
      "direction": "subtract",
      "start": 255,
      "delta": 51,
      "within": { "steps": 5, "ok": true, "value": 0 },
      "beyond": { "steps": 6, "ok": false, "value": 0 }
    }));
  }
}

// Copyright 2015 Pierre Talbot (IRCAM)

// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use crate::kind::NumericKind;
use crate::step::Direction;
use thiserror::Error;

/// The next step would move the accumulator out of the range of its type.
///
/// `last_safe` is the accumulator before the rejected step: the start value when `step == 1`, otherwise the result of the `step - 1` steps already applied.
#[derive(Error, Clone, Copy, PartialEq, Eq, Debug)]
#[error("{direction} step {step} of {steps} would leave the {kind} range (last safe value: {last_safe:?})")]
pub struct RangeViolation<T>
{
  pub direction: Direction,
  pub kind: NumericKind,
  pub step: u64,
  pub steps: u64,
  pub last_safe: T
}

impl<T> RangeViolation<T>
{
  /// Number of steps applied before the rejected one.
  pub fn completed(&self) -> u64 {
    self.step.saturating_sub(1)
  }

  pub fn into_last_safe(self) -> T {
    self.last_safe
  }
}

#[derive(Error, Clone, PartialEq, Eq, Debug)]
pub enum ReportError
{
  #[error("a boundary report needs at least one step")]
  ZeroSteps,
  #[error("{steps} steps cannot be represented as a `{type_name}`")]
  StepsNotRepresentable { steps: u64, type_name: &'static str },
  #[error("{steps} steps leave no room for the extra step of the boundary scenario")]
  TooManySteps { steps: u64 }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn violation_message() {
    let violation = RangeViolation {
      direction: Direction::Add,
      kind: NumericKind::SignedInteger,
      step: 6,
      steps: 6,
      last_safe: 125i8
    };
    assert_eq!(violation.to_string(),
      "addition step 6 of 6 would leave the signed integer range (last safe value: 125)");
    assert_eq!(violation.completed(), 5);
    assert_eq!(violation.into_last_safe(), 125);
  }

  #[test]
  fn completed_of_hand_built_violation() {
    let violation = RangeViolation {
      direction: Direction::Subtract,
      kind: NumericKind::UnsignedInteger,
      step: 0,
      steps: 0,
      last_safe: 0u8
    };
    assert_eq!(violation.completed(), 0);
  }

  #[test]
  fn report_error_message() {
    let err = ReportError::StepsNotRepresentable { steps: 300, type_name: "u8" };
    assert_eq!(err.to_string(), "300 steps cannot be represented as a `u8`");
    assert_eq!(ReportError::ZeroSteps.to_string(), "a boundary report needs at least one step");
  }
}

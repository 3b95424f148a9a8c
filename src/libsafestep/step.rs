// Copyright 2015 Pierre Talbot (IRCAM)

// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Repeated addition and subtraction with range checks.
//!
//! Each operation applies the same delta `steps` times to an accumulator. Before every step, the rules of the accumulator's numeric kind decide whether the step stays in range. The first step that would not is never applied: the operation stops and hands back the accumulator as it was.
//!
//! # Examples
//!
//! ```rust
//! use safestep::{safe_add, safe_subtract, try_add};
//!
//! assert_eq!(safe_add(0i8, 25, 5), (true, 125));
//! assert_eq!(safe_add(0i8, 25, 6), (false, 125));
//! assert_eq!(safe_subtract(10u8, 3, 5), (false, 1));
//!
//! let violation = try_add(0i8, 25, 6).unwrap_err();
//! assert_eq!(violation.step, 6);
//! assert_eq!(violation.last_safe, 125);
//! ```

use crate::error::RangeViolation;
use crate::kind::{Numeric, StepRules};
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};
use tracing::trace;

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
  Add,
  Subtract
}

impl Display for Direction
{
  fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
    match *self {
      Direction::Add => formatter.write_str("addition"),
      Direction::Subtract => formatter.write_str("subtraction")
    }
  }
}

impl Direction
{
  fn can_step<T: Numeric>(self, acc: T, delta: T) -> bool {
    match self {
      Direction::Add => <T::Kind as StepRules<T>>::can_add(acc, delta),
      Direction::Subtract => <T::Kind as StepRules<T>>::can_subtract(acc, delta)
    }
  }

  fn step<T: Numeric>(self, acc: T, delta: T) -> T {
    match self {
      Direction::Add => acc + delta,
      Direction::Subtract => acc - delta
    }
  }
}

fn accumulate<T: Numeric>(direction: Direction, start: T, delta: T, steps: u64)
  -> Result<T, RangeViolation<T>>
{
  // A zero delta is always in range and leaves the accumulator untouched.
  if delta == T::zero() {
    return Ok(start);
  }
  let mut acc = start;
  for step in 1..=steps {
    if !direction.can_step(acc, delta) {
      let kind = T::KIND;
      trace!(%direction, %kind, step, steps, last_safe = ?acc, "step rejected");
      return Err(RangeViolation { direction, kind, step, steps, last_safe: acc });
    }
    acc = direction.step(acc, delta);
  }
  Ok(acc)
}

/// Adds `increment` to `start`, `steps` times.
///
/// Returns `(true, sum)` when every step stayed in range and `(false, last_safe)` otherwise, where `last_safe` is the accumulator before the first step that would have overflowed.
pub fn safe_add<T: Numeric>(start: T, increment: T, steps: u64) -> (bool, T) {
  into_pair(try_add(start, increment, steps))
}

/// Subtracts `decrement` from `start`, `steps` times.
///
/// Same contract as [`safe_add`](fn.safe_add.html).
pub fn safe_subtract<T: Numeric>(start: T, decrement: T, steps: u64) -> (bool, T) {
  into_pair(try_subtract(start, decrement, steps))
}

/// Like [`safe_add`](fn.safe_add.html) but reports the rejected step as an error.
pub fn try_add<T: Numeric>(start: T, increment: T, steps: u64) -> Result<T, RangeViolation<T>> {
  accumulate(Direction::Add, start, increment, steps)
}

/// Like [`safe_subtract`](fn.safe_subtract.html) but reports the rejected step as an error.
pub fn try_subtract<T: Numeric>(start: T, decrement: T, steps: u64) -> Result<T, RangeViolation<T>> {
  accumulate(Direction::Subtract, start, decrement, steps)
}

fn into_pair<T>(result: Result<T, RangeViolation<T>>) -> (bool, T) {
  match result {
    Ok(value) => (true, value),
    Err(violation) => (false, violation.into_last_safe())
  }
}

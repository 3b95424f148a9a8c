// Copyright 2015 Pierre Talbot (IRCAM)

// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! This library repeats an addition or a subtraction on a primitive number while predicting, before each step, whether the step would leave the representable range of the type. The first step that would overflow (or underflow) is not performed and the last value in range is returned instead.
//!
//! The range rules depend on the kind of number (signed integer, unsigned integer or floating point) and are selected at compile time, see the [kind module](kind/index.html). For floating point types, the lower bound is the most-negative finite value and the result never becomes infinite.
//!
//! # Examples
//!
//! ```rust
//! use safestep::{safe_add, safe_subtract};
//!
//! assert_eq!(safe_add(0i8, 25, 5), (true, 125));
//! assert_eq!(safe_add(0i8, 25, 6), (false, 125));
//!
//! let (ok, value) = safe_subtract(0.0f64, f64::MAX / 5.0, 6);
//! assert!(!ok);
//! assert!(value.is_finite());
//! ```
//!
//! The [report module](report/index.html) runs the same operations over the whole range of a type, as done by the `overflow-report` binary.

pub mod error;
pub mod kind;
pub mod limits;
pub mod report;
pub mod step;

pub use crate::error::{RangeViolation, ReportError};
pub use crate::kind::{Numeric, NumericKind};
pub use crate::limits::RangeLimits;
pub use crate::report::{BoundaryReport, StepOutcome};
pub use crate::step::{safe_add, safe_subtract, try_add, try_subtract, Direction};

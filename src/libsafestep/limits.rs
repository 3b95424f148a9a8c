// Copyright 2015 Pierre Talbot (IRCAM)

// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Representable range of the primitive numeric types.

use num_traits::{Bounded, Float};

/// Limits of the values a type can represent.
///
/// `lowest()` is the most-negative finite value. For integers it is the same as `min_value()`, but for floating point types `min_value()` is the smallest positive normal value and is never a valid lower bound for range checks.
pub trait RangeLimits : Copy + PartialOrd
{
  const IS_INTEGER: bool;
  const IS_SIGNED: bool;

  fn min_value() -> Self;
  fn max_value() -> Self;
  fn lowest() -> Self;
}

macro_rules! integer_limits_impl
{
  ( $signed:expr; $( $t: ty ),* ) =>
  {$(
    impl RangeLimits for $t
    {
      const IS_INTEGER: bool = true;
      const IS_SIGNED: bool = $signed;

      fn min_value() -> $t {
        <$t as Bounded>::min_value()
      }

      fn max_value() -> $t {
        <$t as Bounded>::max_value()
      }

      fn lowest() -> $t {
        <$t as Bounded>::min_value()
      }
    }
  )*}
}

macro_rules! float_limits_impl
{
  ( $( $t: ty ),* ) =>
  {$(
    impl RangeLimits for $t
    {
      const IS_INTEGER: bool = false;
      const IS_SIGNED: bool = true;

      fn min_value() -> $t {
        <$t as Float>::min_positive_value()
      }

      fn max_value() -> $t {
        <$t as Float>::max_value()
      }

      // `Float::min_value` is the most-negative finite value, not the smallest positive one.
      fn lowest() -> $t {
        <$t as Float>::min_value()
      }
    }
  )*}
}

integer_limits_impl!(true; i8, i16, i32, i64, isize);
integer_limits_impl!(false; u8, u16, u32, u64, usize);
float_limits_impl!(f32, f64);

// Copyright 2015 Pierre Talbot (IRCAM)

// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Numeric kinds and their range rules.
//!
//! Every supported primitive names its kind through `Numeric::Kind`, a zero-sized marker implementing `StepRules`. The rules are thus selected by monomorphization and no branching on the kind happens at runtime.
//!
//! A rule answers whether a single step keeps the accumulator in range without ever computing the step itself: the bound is moved by the delta instead, which cannot overflow when the delta has the right sign. Floating point rules also look at the rounded step, which is always defined, to reject a finite accumulator turning infinite.

use crate::limits::RangeLimits;
use num_traits::{Float, PrimInt, Signed, Unsigned, Zero};
use serde::{Deserialize, Serialize};
use std::fmt::{self, Debug, Display};
use std::ops::{Add, Sub};

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NumericKind {
  SignedInteger,
  UnsignedInteger,
  FloatingPoint
}

impl Display for NumericKind
{
  fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
    let name = match *self {
      NumericKind::SignedInteger => "signed integer",
      NumericKind::UnsignedInteger => "unsigned integer",
      NumericKind::FloatingPoint => "floating point"
    };
    formatter.write_str(name)
  }
}

pub trait Kind
{
  const KIND: NumericKind;
}

/// Range checks of one numeric kind.
pub trait StepRules<T> : Kind
{
  /// `true` if `acc + increment` is representable.
  fn can_add(acc: T, increment: T) -> bool;

  /// `true` if `acc - decrement` is representable.
  fn can_subtract(acc: T, decrement: T) -> bool;
}

#[derive(Clone, Copy, Debug)]
pub struct SignedInteger;

#[derive(Clone, Copy, Debug)]
pub struct UnsignedInteger;

#[derive(Clone, Copy, Debug)]
pub struct FloatingPoint;

impl Kind for SignedInteger {
  const KIND: NumericKind = NumericKind::SignedInteger;
}

impl Kind for UnsignedInteger {
  const KIND: NumericKind = NumericKind::UnsignedInteger;
}

impl Kind for FloatingPoint {
  const KIND: NumericKind = NumericKind::FloatingPoint;
}

fn max<T: RangeLimits>() -> T {
  <T as RangeLimits>::max_value()
}

fn min<T: RangeLimits>() -> T {
  <T as RangeLimits>::min_value()
}

impl<T> StepRules<T> for SignedInteger where
  T: RangeLimits + PrimInt + Signed
{
  fn can_add(acc: T, increment: T) -> bool {
    if increment > T::zero() {
      acc <= max::<T>() - increment
    }
    else if increment < T::zero() {
      acc >= min::<T>() - increment
    }
    else { true }
  }

  fn can_subtract(acc: T, decrement: T) -> bool {
    if decrement > T::zero() {
      acc >= min::<T>() + decrement
    }
    else if decrement < T::zero() {
      acc <= max::<T>() + decrement
    }
    else { true }
  }
}

// A negative delta cannot be expressed in an unsigned type, so each operation only has one bound to watch.
impl<T> StepRules<T> for UnsignedInteger where
  T: RangeLimits + PrimInt + Unsigned
{
  fn can_add(acc: T, increment: T) -> bool {
    increment == T::zero() || acc <= max::<T>() - increment
  }

  fn can_subtract(acc: T, decrement: T) -> bool {
    decrement == T::zero() || acc >= min::<T>() + decrement
  }
}

// The moved bound is itself rounded: near the top of the range it can admit a step whose result rounds to infinity.
// Float arithmetic is total, so such a step is caught by looking at the rounded result.
fn stays_finite<T: Float>(acc: T, next: T) -> bool {
  !acc.is_finite() || !next.is_infinite()
}

// Comparisons with NaN are false, so a NaN accumulator or delta never trips a bound.
impl<T> StepRules<T> for FloatingPoint where
  T: RangeLimits + Float
{
  fn can_add(acc: T, increment: T) -> bool {
    if increment > T::zero() {
      !(acc > max::<T>() - increment) && stays_finite(acc, acc + increment)
    }
    else if increment < T::zero() {
      !(acc < T::lowest() - increment) && stays_finite(acc, acc + increment)
    }
    else { true }
  }

  fn can_subtract(acc: T, decrement: T) -> bool {
    if decrement > T::zero() {
      !(acc < T::lowest() + decrement) && stays_finite(acc, acc - decrement)
    }
    else if decrement < T::zero() {
      !(acc > max::<T>() + decrement) && stays_finite(acc, acc - decrement)
    }
    else { true }
  }
}

/// Primitive types supported by the stepping operations.
pub trait Numeric :
    RangeLimits + Zero + Add<Output=Self> + Sub<Output=Self> + Debug + Display
{
  type Kind: StepRules<Self>;

  const KIND: NumericKind = <Self::Kind as Kind>::KIND;
}

macro_rules! numeric_impl
{
  ( $kind:ty; $( $t: ty ),* ) =>
  {$(
    impl Numeric for $t {
      type Kind = $kind;
    }
  )*}
}

numeric_impl!(SignedInteger; i8, i16, i32, i64, isize);
numeric_impl!(UnsignedInteger; u8, u16, u32, u64, usize);
numeric_impl!(FloatingPoint; f32, f64);

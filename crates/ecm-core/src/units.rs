//! Newtype wrappers for the physical quantities a cell record carries.
//!
//! Capacity, efficiency, voltage, current, and temperature all travel as
//! `f64` on the wire, which makes it easy to hand a temperature to a
//! function expecting a percentage. These `#[repr(transparent)]` wrappers
//! catch that at compile time with no runtime overhead.
//!
//! ```
//! use ecm_core::units::{Percent, Volts};
//!
//! let capacity = Percent(92.0);
//! assert_eq!((capacity + Percent(3.0)).value(), 95.0);
//!
//! let v = Volts(12.0);
//! assert_eq!((v * 2.0).value(), 24.0);
//! ```

use serde::{Deserialize, Serialize};
use std::ops::{Add, Div, Mul, Sub};

/// Implements the shared arithmetic and accessor surface for a unit type.
macro_rules! impl_unit_ops {
    ($type:ty, $unit_name:literal) => {
        impl Add for $type {
            type Output = Self;
            fn add(self, rhs: Self) -> Self::Output {
                Self(self.0 + rhs.0)
            }
        }

        impl Sub for $type {
            type Output = Self;
            fn sub(self, rhs: Self) -> Self::Output {
                Self(self.0 - rhs.0)
            }
        }

        impl Mul<f64> for $type {
            type Output = Self;
            fn mul(self, rhs: f64) -> Self::Output {
                Self(self.0 * rhs)
            }
        }

        impl Div<f64> for $type {
            type Output = Self;
            fn div(self, rhs: f64) -> Self::Output {
                Self(self.0 / rhs)
            }
        }

        impl std::fmt::Display for $type {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{} {}", self.0, $unit_name)
            }
        }

        impl $type {
            /// Create a new value
            #[inline]
            pub const fn new(value: f64) -> Self {
                Self(value)
            }

            /// Get the raw numeric value
            #[inline]
            pub const fn value(self) -> f64 {
                self.0
            }
        }
    };
}

/// Percentage of rated value (capacity, efficiency)
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[repr(transparent)]
pub struct Percent(pub f64);

impl_unit_ops!(Percent, "%");

impl Percent {
    /// Whether the value sits inside the closed 0..=100 range.
    pub fn in_bounds(self) -> bool {
        (0.0..=100.0).contains(&self.0)
    }
}

/// Temperature in degrees Celsius
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[repr(transparent)]
pub struct Celsius(pub f64);

impl_unit_ops!(Celsius, "°C");

/// Terminal voltage in volts
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[repr(transparent)]
pub struct Volts(pub f64);

impl_unit_ops!(Volts, "V");

/// Current draw in amperes
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[repr(transparent)]
pub struct Amperes(pub f64);

impl_unit_ops!(Amperes, "A");

//! Special-value classification of complex numbers.
//!
//! Every complex value falls into exactly one of five classes. The guard
//! order lives in [`Classification::from_kinds`]; all classifiers, generic and
//! `const`, go through it.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{ComplexValue, FloatComponent};

/// Special-value category of a single floating-point component.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ComponentKind {
    /// +0 or -0.
    Zero,
    /// Finite and non-zero (normal or subnormal).
    Finite,
    Infinite,
    NaN,
}

/// Special-value class of a complex number.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Classification {
    /// Both components are zero.
    #[serde(rename = "zero")]
    Zero,
    /// Both components finite, at least one non-zero.
    #[serde(rename = "non_zero")]
    NonZero,
    /// An infinite component and no NaN.
    #[serde(rename = "inf")]
    Inf,
    /// A NaN component whose partner is not infinite.
    #[serde(rename = "NaN")]
    NaN,
    /// One NaN component and one infinite component.
    #[serde(rename = "non_zero_nan")]
    NonZeroNaN,
}

impl Classification {
    /// All classes, in expectation-table order.
    pub const ALL: [Classification; 5] = [
        Classification::Zero,
        Classification::NonZero,
        Classification::Inf,
        Classification::NaN,
        Classification::NonZeroNaN,
    ];

    /// Classify from the kinds of the real and imaginary parts.
    ///
    /// The arms are an ordered sequence of guards: NaN paired with infinity
    /// must be matched before either the generic NaN or the generic infinity
    /// arm.
    pub const fn from_kinds(re: ComponentKind, im: ComponentKind) -> Self {
        use ComponentKind as K;
        match (re, im) {
            (K::NaN, K::Infinite) | (K::Infinite, K::NaN) => Classification::NonZeroNaN,
            (K::NaN, _) | (_, K::NaN) => Classification::NaN,
            (K::Infinite, _) | (_, K::Infinite) => Classification::Inf,
            (K::Zero, K::Zero) => Classification::Zero,
            _ => Classification::NonZero,
        }
    }

    /// Row/column of this class in the expectation table.
    pub const fn index(self) -> usize {
        match self {
            Classification::Zero => 0,
            Classification::NonZero => 1,
            Classification::Inf => 2,
            Classification::NaN => 3,
            Classification::NonZeroNaN => 4,
        }
    }

    /// Tag name as used in tables and reports.
    pub const fn name(self) -> &'static str {
        match self {
            Classification::Zero => "zero",
            Classification::NonZero => "non_zero",
            Classification::Inf => "inf",
            Classification::NaN => "NaN",
            Classification::NonZeroNaN => "non_zero_nan",
        }
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown classification: {0:?}")]
pub struct ParseClassificationError(pub String);

impl FromStr for Classification {
    type Err = ParseClassificationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Classification::ALL
            .into_iter()
            .find(|class| class.name() == s)
            .ok_or_else(|| ParseClassificationError(s.to_string()))
    }
}

/// Classify a complex value of any supported width.
#[inline]
pub fn classify<T: FloatComponent>(z: &ComplexValue<T>) -> Classification {
    Classification::from_kinds(z.re.kind(), z.im.kind())
}

macro_rules! const_classifier {
    ($kind_fn:ident, $classify_fn:ident, $t:ty) => {
        /// Component kind, usable in constant expressions.
        pub const fn $kind_fn(x: $t) -> ComponentKind {
            if x.is_nan() {
                ComponentKind::NaN
            } else if x.is_infinite() {
                ComponentKind::Infinite
            } else if x == 0.0 {
                ComponentKind::Zero
            } else {
                ComponentKind::Finite
            }
        }

        /// Classify `re + im·i`, usable in constant expressions.
        pub const fn $classify_fn(re: $t, im: $t) -> Classification {
            Classification::from_kinds($kind_fn(re), $kind_fn(im))
        }
    };
}

const_classifier!(f32_kind, classify_f32, f32);
const_classifier!(f64_kind, classify_f64, f64);

//! Complex division with IEEE-754 special-value handling.
//!
//! [`classify`] sorts a complex value into one of five special-value classes
//! and [`divide`] computes quotients whose class is fixed by the classes of
//! the operands, at f32, f64 and extended ([`FloatExp`]) width.

pub mod classify;
pub mod complex;
pub mod divide;
pub mod float;
pub mod floatexp;

pub use classify::{
    classify, classify_f32, classify_f64, f32_kind, f64_kind, Classification, ComponentKind,
    ParseClassificationError,
};
pub use complex::{ComplexValue, F32Complex, F64Complex, FloatExpComplex};
pub use divide::divide;
pub use float::FloatComponent;
pub use floatexp::FloatExp;

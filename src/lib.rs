//! Quaternion and vector math for 3D rotations.
//!
//! # Motivation
//!
//! Applications that only need to *carry* rotations around — compose them, convert them to and
//! from Euler angles, measure the angle between two of them — rarely want to pull in a
//! full-featured linear algebra stack to do so. This library covers exactly that slice: a
//! [`Quat`] value type with the handful of closed-form operations used for 3D rotation, plus the
//! small const-generic [`Vector`] type its API is expressed in terms of.
//!
//! # Goals & Non-Goals
//!
//! - Be generic over the element type via a small set of capability traits ([`Trig`], [`Sqrt`],
//!   [`MinMax`], …), implemented for [`f32`] and [`f64`]. Non-[`Copy`] element types (eg. "big
//!   decimals") are out of scope.
//! - Support only fixed-size, unpadded storage, relying on const generics for vector dimensions.
//!   Dynamically-sized objects are out of scope.
//! - Don't enforce invariants the caller didn't ask for: quaternions are not kept normalized,
//!   axis vectors are not validated, and division by zero follows IEEE semantics instead of
//!   panicking. The only defensive measure is clamping inverse-trigonometric arguments against
//!   floating-point drift.
//! - Put at least some effort into designing an ergonomic API that adheres to the
//!   [Rust API Guidelines].
//!
//! [Rust API Guidelines]: https://rust-lang.github.io/api-guidelines/

mod quat;
mod traits;
mod vector;

pub use quat::*;
pub use traits::*;
pub use vector::*;

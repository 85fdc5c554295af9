//! Evaluation kernel for Bezier curves given by a control polygon in an
//! affine point space. Points are evaluated by de Casteljau reduction and
//! blossoming, and a polygon can be subdivided so that [0, 1] maps onto an
//! arbitrary sub-range of the original curve. Point types are
//! caller-supplied; anything supporting `point + scalar * (point - point)`
//! works.

// clippy
#![cfg_attr(
    feature = "cargo-clippy",
    allow(clippy::many_single_char_names, clippy::float_cmp)
)]

pub mod bezier;
pub mod core;

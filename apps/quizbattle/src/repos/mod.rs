//! Repository traits for the service layer.

pub mod questions;
pub mod roster;

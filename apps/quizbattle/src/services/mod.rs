//! Service layer: persistence-aware orchestration over the pure domain.

pub mod match_flow;
pub mod reset;
pub mod roster;

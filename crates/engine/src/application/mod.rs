//! Application layer: generators and the simulation driver
//!
//! Contains:
//! - **generators**: timer, price step, liquidity chain and quote model
//! - **simulation**: the `Instrument` that ties them into a history

pub mod generators;
pub mod simulation;

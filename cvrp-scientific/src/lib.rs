//! Scientific crate contains logic to read CVRP instances written in a TSPLIB like text format and
//! to convert them into a normalized description consumed by solvers and renderers.
//!
//!
//! # Supported formats
//!
//! - **tsplib**: a subset of TSPLIB95 format: node coordinates, demands, depots, vehicle capacity
//!   and edge weight type.
//! - **json**: a normalized instance description, optionally wrapped together with solver output.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

#[cfg(test)]
#[path = "../tests/helpers/mod.rs"]
#[macro_use]
pub(crate) mod helpers;

#[cfg(test)]
#[path = "../tests/integration/known_instances_test.rs"]
mod known_instances_test;

pub mod common;
pub mod models;
pub mod tsplib;

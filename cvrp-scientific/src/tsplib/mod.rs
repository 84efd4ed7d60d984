//! Contains reader and writer for a subset of tsplib95 format used to describe CVRP instances.
//!
//! An example of supported input:
//!
//! ```text
//! NAME : example
//! CAPACITY : 50
//! EDGE_WEIGHT_TYPE : EUC_2D
//! NODE_COORD_SECTION
//! 1 0.0 0.0
//! 2 10.0 0.0
//! DEMAND_SECTION
//! 1 0
//! 2 5
//! DEPOT_SECTION
//! 1
//! -1
//! EOF
//! ```

mod config;
pub use self::config::*;

mod error;
pub use self::error::*;

mod reader;
pub use self::reader::*;

mod writer;
pub use self::writer::*;

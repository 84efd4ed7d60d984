//! Contains data model of a parsed instance and the record which bundles it with a solver output.

mod node;
pub use self::node::*;

mod instance;
pub use self::instance::*;

mod envelope;
pub use self::envelope::*;

#[cfg(test)]
#[path = "../../tests/unit/models/envelope_test.rs"]
mod envelope_test;

use super::{Instance, NodeId};
use crate::common::GenericResult;
use serde::{Deserialize, Serialize};
use std::io::{BufReader, BufWriter, Read, Write};

/// A route cost reported by a solver.
pub type Cost = i64;

/// An enclosing record which bundles the instance with a solver output. It is consumed by
/// renderers; paths and performance trace are passed through as they are.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Envelope {
    /// The instance description.
    pub description: Instance,
    /// Routes of the best found solution, each is a sequence of node ids.
    #[serde(default)]
    pub best_path: Vec<Vec<NodeId>>,
    /// A sequence of (generation, cost) pairs at which the best known cost was improved.
    #[serde(default)]
    pub best_solution_performance: Vec<(usize, Cost)>,
}

impl Envelope {
    /// Creates an envelope without solver output.
    pub fn new(description: Instance) -> Self {
        Self { description, best_path: vec![], best_solution_performance: vec![] }
    }
}

/// Reads envelope from json.
pub fn read_envelope<R: Read>(reader: BufReader<R>) -> GenericResult<Envelope> {
    serde_json::from_reader(reader).map_err(|err| format!("cannot deserialize envelope: '{err}'").into())
}

/// Writes envelope as json.
pub fn write_envelope<W: Write>(writer: &mut BufWriter<W>, envelope: &Envelope) -> GenericResult<()> {
    serde_json::to_writer(&mut *writer, envelope)?;
    writer.flush().map_err(|err| format!("cannot write envelope: '{err}'").into())
}

#[cfg(test)]
#[path = "../../tests/unit/models/instance_test.rs"]
mod instance_test;

use super::{Node, NodeId, Nodes};
use crate::common::GenericResult;
use serde::{Deserialize, Serialize};
use std::io::{BufReader, BufWriter, Read, Write};

/// A vehicle capacity.
pub type Capacity = u32;

/// A parsed CVRP instance description: nodes and global parameters.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Instance {
    /// Nodes keyed by their ids in the order they were declared.
    pub nodes: Nodes,
    /// Vehicle capacity.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub capacity: Option<Capacity>,
    /// A token naming the distance metric, e.g. `EUC_2D`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub edge_weight_type: Option<String>,
}

impl Instance {
    /// Iterates over depot nodes in declaration order.
    pub fn depots(&self) -> impl Iterator<Item = (&NodeId, &Node)> + '_ {
        self.nodes.iter().filter(|(_, node)| node.is_depot)
    }

    /// Returns sum of all known demands.
    pub fn total_demand(&self) -> u64 {
        self.nodes.iter().filter_map(|(_, node)| node.demand).map(u64::from).sum()
    }
}

/// Deserializes instance from json.
pub fn deserialize_instance<R: Read>(reader: BufReader<R>) -> GenericResult<Instance> {
    serde_json::from_reader(reader).map_err(|err| format!("cannot deserialize instance: '{err}'").into())
}

/// Serializes instance into json, optionally pretty printed.
pub fn serialize_instance<W: Write>(writer: &mut BufWriter<W>, instance: &Instance, pretty: bool) -> GenericResult<()> {
    if pretty {
        serde_json::to_writer_pretty(&mut *writer, instance)?;
    } else {
        serde_json::to_writer(&mut *writer, instance)?;
    }

    writer.flush().map_err(|err| format!("cannot write instance: '{err}'").into())
}

#[cfg(test)]
#[path = "../../tests/unit/models/node_test.rs"]
mod node_test;

use rustc_hash::FxHashMap;
use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A node identifier as it is read from the text.
pub type NodeId = String;

/// A node demand.
pub type Demand = u32;

/// Represents a single node of the instance: a customer or a depot.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Node {
    /// X coordinate.
    pub x: f64,
    /// Y coordinate.
    pub y: f64,
    /// Whether the node is a depot.
    #[serde(default)]
    pub is_depot: bool,
    /// A node demand, if it was specified.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub demand: Option<Demand>,
}

impl Node {
    /// Creates a new node at given coordinates without demand.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y, is_depot: false, demand: None }
    }
}

/// Keeps nodes keyed by their ids in insertion order.
#[derive(Clone, Debug, Default)]
pub struct Nodes {
    entries: Vec<(NodeId, Node)>,
    index: FxHashMap<NodeId, usize>,
}

impl Nodes {
    /// Returns a node with given id.
    pub fn get(&self, id: &str) -> Option<&Node> {
        self.index.get(id).map(|&idx| &self.entries[idx].1)
    }

    /// Returns a mutable node with given id.
    pub fn get_mut(&mut self, id: &str) -> Option<&mut Node> {
        self.index.get(id).map(|&idx| &mut self.entries[idx].1)
    }

    /// Inserts the node keeping its original position when the id is already known.
    /// Returns a previous node stored under the same id.
    pub fn insert(&mut self, id: NodeId, node: Node) -> Option<Node> {
        match self.index.get(&id) {
            Some(&idx) => Some(std::mem::replace(&mut self.entries[idx].1, node)),
            None => {
                self.index.insert(id.clone(), self.entries.len());
                self.entries.push((id, node));
                None
            }
        }
    }

    /// Checks whether the node with given id is known.
    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    /// Returns amount of nodes.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if there are no nodes.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over nodes in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&NodeId, &Node)> + '_ {
        self.entries.iter().map(|(id, node)| (id, node))
    }

    /// Iterates over node ids in insertion order.
    pub fn ids(&self) -> impl Iterator<Item = &NodeId> + '_ {
        self.entries.iter().map(|(id, _)| id)
    }
}

impl PartialEq for Nodes {
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries
    }
}

impl FromIterator<(NodeId, Node)> for Nodes {
    fn from_iter<T: IntoIterator<Item = (NodeId, Node)>>(iter: T) -> Self {
        let mut nodes = Nodes::default();
        iter.into_iter().for_each(|(id, node)| {
            nodes.insert(id, node);
        });

        nodes
    }
}

impl Serialize for Nodes {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (id, node) in self.iter() {
            map.serialize_entry(id, node)?;
        }
        map.end()
    }
}

struct NodesVisitor;

impl<'de> Visitor<'de> for NodesVisitor {
    type Value = Nodes;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a map of node ids to nodes")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
        let mut nodes = Nodes::default();
        while let Some((id, node)) = access.next_entry::<NodeId, Node>()? {
            nodes.insert(id, node);
        }

        Ok(nodes)
    }
}

impl<'de> Deserialize<'de> for Nodes {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(NodesVisitor)
    }
}

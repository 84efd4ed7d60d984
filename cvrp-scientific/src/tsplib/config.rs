#[cfg(test)]
#[path = "../../tests/unit/tsplib/config_test.rs"]
mod config_test;

use crate::common::GenericResult;
use serde::Deserialize;
use std::io::{BufReader, Read};

/// Specifies how a repeated id inside the coordinate section is handled.
#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq)]
#[serde(rename_all = "camelCase")]
pub enum DuplicateNodePolicy {
    /// Overwrites coordinates, keeps demand and depot flag set before.
    #[default]
    Merge,
    /// Replaces the whole node record: demand and depot flag are reset.
    Replace,
    /// Fails parsing.
    Reject,
}

/// A parser configuration.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ParserConfig {
    /// A duplicate node id policy.
    #[serde(default)]
    pub duplicate_nodes: DuplicateNodePolicy,
}

impl ParserConfig {
    /// Sets duplicate node id policy.
    pub fn with_duplicate_nodes(mut self, policy: DuplicateNodePolicy) -> Self {
        self.duplicate_nodes = policy;
        self
    }
}

/// Reads parser config from json.
pub fn read_config<R: Read>(reader: BufReader<R>) -> GenericResult<ParserConfig> {
    serde_json::from_reader(reader).map_err(|err| format!("cannot deserialize config: '{err}'").into())
}

#[cfg(test)]
#[path = "../../tests/unit/tsplib/writer_test.rs"]
mod writer_test;

use super::reader::{is_data_token, is_edge_weight_type_token};
use crate::common::GenericResult;
use crate::models::Instance;
use std::io::{BufWriter, Write};

/// A trait to write an instance in the canonical tsplib95 like layout which can be read back.
pub trait TsplibWriter<W: Write> {
    /// Writes tsplib95 instance.
    fn write_tsplib(&self, writer: BufWriter<W>) -> GenericResult<()>;
}

impl<W: Write> TsplibWriter<W> for Instance {
    fn write_tsplib(&self, mut writer: BufWriter<W>) -> GenericResult<()> {
        validate_tokens(self)?;

        if let Some(capacity) = self.capacity {
            writeln!(writer, "CAPACITY : {capacity}")?;
        }

        if let Some(edge_weight_type) = self.edge_weight_type.as_ref() {
            writeln!(writer, "EDGE_WEIGHT_TYPE : {edge_weight_type}")?;
        }

        writeln!(writer, "NODE_COORD_SECTION")?;
        for (id, node) in self.nodes.iter() {
            writeln!(writer, "{id} {} {}", node.x, node.y)?;
        }

        writeln!(writer, "DEMAND_SECTION")?;
        for (id, demand) in self.nodes.iter().filter_map(|(id, node)| node.demand.map(|demand| (id, demand))) {
            writeln!(writer, "{id} {demand}")?;
        }

        writeln!(writer, "DEPOT_SECTION")?;
        for (id, _) in self.depots() {
            writeln!(writer, "{id}")?;
        }
        writeln!(writer, "-1")?;
        writeln!(writer, "EOF")?;

        writer.flush()?;

        Ok(())
    }
}

fn validate_tokens(instance: &Instance) -> GenericResult<()> {
    if let Some(id) = instance.nodes.ids().find(|id| id.is_empty() || id.contains(char::is_whitespace)) {
        return Err(format!("node id cannot be written as a single token: '{id}'").into());
    }

    if let Some(id) = instance.nodes.ids().find(|id| !is_data_token(id)) {
        return Err(format!("node id is reserved by the format: '{id}'").into());
    }

    if let Some((id, _)) = instance
        .depots()
        .find(|(id, _)| !id.parse::<i64>().is_ok_and(|value| value >= 0 && value.to_string() == **id))
    {
        return Err(format!("depot id is expected to be a non-negative integer in canonical form, got: '{id}'").into());
    }

    let edge_weight_type = instance.edge_weight_type.as_deref();
    if let Some(edge_weight_type) = edge_weight_type.filter(|token| !is_edge_weight_type_token(token)) {
        return Err(format!("edge weight type cannot be read back: '{edge_weight_type}'").into());
    }

    Ok(())
}

use serde::Serialize;
use std::fmt::Write;

use super::error::Result;
use super::graph::Graph;

pub const TARGET: &str = "diagnostics";

/// Startup snapshot of the map, written to stderr and never read back by the protocol
#[derive(Serialize,Debug,Clone,PartialEq,Eq)]
#[serde(rename_all = "camelCase")]
pub struct GraphDump {
    pub cell_count: usize,
    pub text: String,
}
impl GraphDump {
    pub fn capture(graph: &Graph) -> Self {
        let mut text = String::new();
        for (id, cell) in graph.cells().enumerate() {
            if id > 0 {
                text.push('\n');
            }
            // Writing into a String cannot fail
            let _ = write!(text, "{}: {} {} -> {:?}", id, cell.resource_type, cell.resources, cell.neighbors);
        }

        Self {
            cell_count: graph.cell_count(),
            text,
        }
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn emit(&self) {
        match self.to_json() {
            Ok(json) => tracing::info!(target: TARGET, "{}", json),
            Err(err) => tracing::warn!(target: TARGET, "unable to serialize graph dump: {}", err),
        }
    }
}

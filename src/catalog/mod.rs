pub mod network_diagram;
pub mod shared;
pub mod utility_network;

use crate::domain::model::{ToolDef, Toolbox};
use crate::utils::error::{GpError, Result};
use serde_json::json;
use std::io::Write;

/// Read-only view over every toolbox table.
#[derive(Debug, Clone, Copy, Default)]
pub struct Catalog;

impl Catalog {
    pub fn new() -> Self {
        Self
    }

    pub fn toolbox(&self, toolbox: Toolbox) -> &'static [ToolDef] {
        match toolbox {
            Toolbox::NetworkDiagram => network_diagram::TOOLS,
            Toolbox::UtilityNetwork => utility_network::TOOLS,
        }
    }

    pub fn tools(&self) -> impl Iterator<Item = &'static ToolDef> {
        network_diagram::TOOLS.iter().chain(utility_network::TOOLS.iter())
    }

    pub fn len(&self) -> usize {
        network_diagram::TOOLS.len() + utility_network::TOOLS.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Accepts `nd.ApplyGridLayout`, `ApplyGridLayout` or any casing of either.
    pub fn find(&self, name: &str) -> Result<&'static ToolDef> {
        let name = name.trim();
        let unknown = || GpError::UnknownTool {
            name: name.to_string(),
        };

        if let Some((alias, tool_name)) = name.split_once('.') {
            let toolbox = Toolbox::from_alias(alias).ok_or_else(unknown)?;
            return self
                .toolbox(toolbox)
                .iter()
                .find(|t| t.name.eq_ignore_ascii_case(tool_name))
                .ok_or_else(unknown);
        }

        let mut matches = self.tools().filter(|t| t.name.eq_ignore_ascii_case(name));
        match (matches.next(), matches.next()) {
            (Some(tool), None) => Ok(tool),
            (Some(_), Some(_)) => Err(GpError::UnknownTool {
                name: format!("{} (ambiguous, qualify it with a toolbox alias)", name),
            }),
            (None, _) => Err(unknown()),
        }
    }

    pub fn search(&self, query: &str) -> Vec<&'static ToolDef> {
        let query = query.to_lowercase();
        self.tools()
            .filter(|t| {
                t.name.to_lowercase().contains(&query)
                    || t.label.to_lowercase().contains(&query)
                    || t.summary.to_lowercase().contains(&query)
            })
            .collect()
    }

    pub fn tool_json(tool: &ToolDef) -> Result<serde_json::Value> {
        let mut value = serde_json::to_value(tool)?;
        if let serde_json::Value::Object(map) = &mut value {
            map.insert("execute_name".to_string(), json!(tool.execute_name()));
            map.insert("signature".to_string(), json!(tool.signature()));
        }
        Ok(value)
    }

    pub fn to_json(&self) -> Result<serde_json::Value> {
        let mut toolboxes = Vec::new();
        for toolbox in Toolbox::ALL {
            let tools = self
                .toolbox(toolbox)
                .iter()
                .map(Self::tool_json)
                .collect::<Result<Vec<_>>>()?;
            toolboxes.push(json!({
                "alias": toolbox.alias(),
                "label": toolbox.label(),
                "tools": tools,
            }));
        }
        Ok(json!({ "toolboxes": toolboxes }))
    }

    /// One CSV row per parameter.
    pub fn write_csv<W: Write>(&self, tools: &[&ToolDef], writer: W) -> Result<()> {
        let mut csv_writer = csv::Writer::from_writer(writer);
        csv_writer.write_record([
            "execute_name",
            "position",
            "parameter",
            "display_name",
            "data_type",
            "direction",
            "requirement",
            "multi_value",
            "default",
            "domain",
        ])?;

        for tool in tools {
            let execute_name = tool.execute_name();
            for (position, param) in tool.parameters.iter().enumerate() {
                let record: [String; 10] = [
                    execute_name.clone(),
                    position.to_string(),
                    param.name.to_string(),
                    param.display_name.to_string(),
                    param.data_type.to_string(),
                    param.direction.to_string(),
                    param.requirement.to_string(),
                    param.multi_value.to_string(),
                    param.default_wire_value().unwrap_or_default(),
                    param.domain.map(|d| d.to_string()).unwrap_or_default(),
                ];
                csv_writer.write_record(&record)?;
            }
        }

        csv_writer.flush()?;
        Ok(())
    }
}

use crate::domain::model::{DataType, Domain, ParameterDef, ToolDef, Toolbox};
use crate::utils::error::{GpError, Result};
use serde::Serialize;
use serde_json::Value;
use std::collections::HashMap;

/// A tool plus the caller's parameter dictionary, before validation.
#[derive(Debug, Clone)]
pub struct ToolRequest {
    tool: &'static ToolDef,
    /// Keyed by lowercase parameter name.
    values: HashMap<String, Value>,
    /// Names given more than once in a single map under different spellings.
    conflicts: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ResolvedParameter {
    pub name: &'static str,
    pub data_type: DataType,
    pub value: String,
    /// True when the value came from the catalog default rather than the caller.
    pub defaulted: bool,
}

/// Wire-ready request: every input parameter in signature order.
#[derive(Debug, Clone, Serialize)]
pub struct ResolvedRequest {
    pub toolbox: Toolbox,
    pub tool_name: &'static str,
    pub execute_name: String,
    pub parameters: Vec<ResolvedParameter>,
}

impl ToolRequest {
    pub fn new(tool: &'static ToolDef) -> Self {
        Self {
            tool,
            values: HashMap::new(),
            conflicts: Vec::new(),
        }
    }

    /// Builds a request from an unordered map. Two spellings of the same
    /// parameter cannot be ordered, so `resolve` rejects them.
    pub fn from_map(tool: &'static ToolDef, values: impl IntoIterator<Item = (String, Value)>) -> Self {
        let mut request = Self::new(tool);
        for (name, value) in values {
            let key = normalize(&name);
            if request.values.insert(key, value).is_some() {
                request.conflicts.push(name);
            }
        }
        request
    }

    /// Parses `name=value` pairs as typed on a command line.
    pub fn from_pairs(tool: &'static ToolDef, pairs: &[String]) -> Result<Self> {
        let mut request = Self::new(tool);
        for pair in pairs {
            request.insert_pair(pair)?;
        }
        Ok(request)
    }

    /// Adds one `name=value` pair, replacing any earlier value for that name.
    pub fn insert_pair(&mut self, pair: &str) -> Result<()> {
        let (name, value) = pair.split_once('=').ok_or_else(|| GpError::InvalidValue {
            tool: self.tool.execute_name(),
            parameter: pair.to_string(),
            value: pair.to_string(),
            reason: "expected NAME=VALUE".to_string(),
        })?;
        self.insert(name, Value::String(value.to_string()));
        Ok(())
    }

    pub fn set(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(name, value);
        self
    }

    /// Later values replace earlier ones, whatever their case.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        self.values.insert(normalize(&name.into()), value.into());
    }

    pub fn tool(&self) -> &'static ToolDef {
        self.tool
    }

    fn lookup(&self, name: &str) -> Option<&Value> {
        self.values.get(&normalize(name))
    }

    pub fn resolve(&self) -> Result<ResolvedRequest> {
        let tool = self.tool;
        let execute_name = tool.execute_name();

        if let Some(name) = self.conflicts.first() {
            return Err(GpError::DuplicateParameter {
                tool: execute_name,
                name: normalize(name),
            });
        }

        for name in self.values.keys() {
            let param = tool.parameter(name).ok_or_else(|| GpError::UnknownParameter {
                tool: execute_name.clone(),
                name: name.clone(),
            })?;
            if param.is_derived() {
                return Err(GpError::ReadOnlyParameter {
                    tool: execute_name.clone(),
                    name: param.name.to_string(),
                });
            }
        }

        let mut parameters = Vec::new();
        for param in tool.input_parameters() {
            let supplied = self.lookup(param.name).filter(|v| !is_blank(v));
            let (value, defaulted) = match supplied {
                Some(value) => (coerce(&execute_name, param, value)?, false),
                None if param.is_required() => {
                    return Err(GpError::MissingParameter {
                        tool: execute_name,
                        name: param.name.to_string(),
                    });
                }
                None => (param.default_wire_value().unwrap_or_default(), true),
            };
            parameters.push(ResolvedParameter {
                name: param.name,
                data_type: param.data_type,
                value,
                defaulted,
            });
        }

        tracing::debug!(
            "Resolved {} with {} parameters ({} supplied)",
            execute_name,
            parameters.len(),
            parameters.iter().filter(|p| !p.defaulted).count()
        );

        Ok(ResolvedRequest {
            toolbox: tool.toolbox,
            tool_name: tool.name,
            execute_name,
            parameters,
        })
    }
}

impl ResolvedRequest {
    pub fn value(&self, name: &str) -> Option<&str> {
        self.parameters
            .iter()
            .find(|p| p.name == name)
            .map(|p| p.value.as_str())
    }

    pub fn runs_async(&self) -> bool {
        self.value("run_async") == Some("RUN_ASYNCHRONOUSLY")
    }

    /// Form fields for the REST endpoint, in signature order.
    pub fn to_form(&self) -> Vec<(String, String)> {
        self.parameters
            .iter()
            .map(|p| (p.name.to_string(), p.value.clone()))
            .collect()
    }

    /// The equivalent ArcPy call, keyword arguments for non-empty values only.
    pub fn arcpy_call(&self) -> String {
        let args: Vec<String> = self
            .parameters
            .iter()
            .filter(|p| !p.value.is_empty())
            .map(|p| format!("{}={:?}", p.name, p.value))
            .collect();
        format!("arcpy.{}({})", self.execute_name, args.join(", "))
    }
}

fn normalize(name: &str) -> String {
    name.trim().to_ascii_lowercase()
}

fn is_blank(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => s.trim().is_empty(),
        Value::Array(items) => items.is_empty(),
        _ => false,
    }
}

fn invalid(tool: &str, param: &ParameterDef, value: &Value, reason: impl Into<String>) -> GpError {
    GpError::InvalidValue {
        tool: tool.to_string(),
        parameter: param.name.to_string(),
        value: match value {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        },
        reason: reason.into(),
    }
}

fn coerce(tool: &str, param: &ParameterDef, value: &Value) -> Result<String> {
    if !param.multi_value || param.data_type == DataType::ValueTable {
        return coerce_single(tool, param, value);
    }

    let items: Vec<Value> = match value {
        Value::Array(items) => items.clone(),
        Value::String(s) => s
            .split(';')
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .map(|part| Value::String(part.to_string()))
            .collect(),
        other => vec![other.clone()],
    };

    let parts = items
        .iter()
        .map(|item| coerce_single(tool, param, item))
        .collect::<Result<Vec<_>>>()?;
    Ok(parts.join(";"))
}

fn coerce_single(tool: &str, param: &ParameterDef, value: &Value) -> Result<String> {
    match (&param.domain, value) {
        (Some(domain @ Domain::Boolean { .. }), Value::Bool(b)) => {
            return Ok(domain.boolean_token(*b).unwrap_or_default().to_string());
        }
        (Some(domain @ (Domain::Boolean { .. } | Domain::Coded { .. })), Value::String(s)) => {
            return domain.token_for(s).map(str::to_string).ok_or_else(|| {
                invalid(
                    tool,
                    param,
                    value,
                    format!("allowed values: {}", domain.tokens().join(", ")),
                )
            });
        }
        (Some(domain @ (Domain::Boolean { .. } | Domain::Coded { .. })), _) => {
            return Err(invalid(
                tool,
                param,
                value,
                format!("allowed values: {}", domain.tokens().join(", ")),
            ));
        }
        _ => {}
    }

    match param.data_type {
        DataType::Long => {
            let number = match value {
                Value::Number(n) => n
                    .as_i64()
                    .or_else(|| n.as_f64().filter(|x| x.fract() == 0.0).map(|x| x as i64)),
                Value::String(s) => s.trim().parse::<i64>().ok(),
                _ => None,
            }
            .ok_or_else(|| invalid(tool, param, value, "expected an integer"))?;
            check_range(tool, param, value, number as f64)?;
            Ok(number.to_string())
        }
        DataType::Double => {
            let number = match value {
                Value::Number(n) => n.as_f64(),
                Value::String(s) => s.trim().parse::<f64>().ok(),
                _ => None,
            }
            .filter(|x| x.is_finite())
            .ok_or_else(|| invalid(tool, param, value, "expected a number"))?;
            check_range(tool, param, value, number)?;
            Ok(number.to_string())
        }
        DataType::LinearUnit => linear_unit(value)
            .ok_or_else(|| invalid(tool, param, value, "expected a non-negative distance such as '2 Unknown'")),
        DataType::ValueTable => Ok(value_table(value)),
        _ => Ok(match value {
            Value::String(s) => s.trim().to_string(),
            Value::Number(n) => n.to_string(),
            Value::Bool(b) => b.to_string(),
            other => other.to_string(),
        }),
    }
}

fn check_range(tool: &str, param: &ParameterDef, value: &Value, number: f64) -> Result<()> {
    match &param.domain {
        Some(domain @ Domain::Range { .. }) if !domain.contains(number) => {
            Err(invalid(tool, param, value, format!("must be within {}", domain)))
        }
        _ => Ok(()),
    }
}

/// Distances are finite and non-negative; a bare number is in `Unknown` units.
fn linear_unit(value: &Value) -> Option<String> {
    let (amount, unit) = match value {
        Value::Number(n) => (n.as_f64()?, "Unknown"),
        Value::String(s) => {
            let mut parts = s.split_whitespace();
            let amount = parts.next()?.parse::<f64>().ok()?;
            let unit = parts.next().unwrap_or("Unknown");
            if parts.next().is_some() {
                return None;
            }
            (amount, unit)
        }
        _ => return None,
    };
    if !amount.is_finite() || amount < 0.0 {
        return None;
    }
    Some(format!("{} {}", amount, unit))
}

/// Rows separated by `;`, columns by spaces. Null and empty cells become `#`;
/// cells holding whitespace, `;` or `'` are single-quoted with `'` doubled.
fn value_table(value: &Value) -> String {
    fn cell(value: &Value) -> String {
        let text = match value {
            Value::String(s) => s.clone(),
            Value::Null => return "#".to_string(),
            other => other.to_string(),
        };
        if text.is_empty() {
            "#".to_string()
        } else if text.chars().any(|c| c.is_whitespace() || c == ';' || c == '\'') {
            format!("'{}'", text.replace('\'', "''"))
        } else {
            text
        }
    }

    match value {
        Value::Array(rows) => rows
            .iter()
            .map(|row| match row {
                Value::Array(cells) => cells.iter().map(cell).collect::<Vec<_>>().join(" "),
                other => cell(other),
            })
            .collect::<Vec<_>>()
            .join(";"),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use serde_json::json;

    fn tool(name: &str) -> &'static ToolDef {
        Catalog::new().find(name).unwrap()
    }

    #[test]
    fn test_defaults_fill_optional_parameters() {
        let resolved = ToolRequest::new(tool("nd.ApplyForceDirectedLayout"))
            .set("in_network_diagram_layer", "Network Diagram")
            .resolve()
            .unwrap();

        let form = resolved.to_form();
        let names: Vec<&str> = form.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(
            names,
            vec![
                "in_network_diagram_layer",
                "preserve_container_layout",
                "number_iterations",
                "repel_factor",
                "degree_freedom",
                "run_async"
            ]
        );
        assert_eq!(resolved.value("preserve_container_layout"), Some("IGNORE_CONTAINERS"));
        assert_eq!(resolved.value("number_iterations"), Some("20"));
        assert_eq!(resolved.value("degree_freedom"), Some("MEDIUM"));
        assert!(!resolved.runs_async());
    }

    #[test]
    fn test_boolean_and_coded_values_become_tokens() {
        let resolved = ToolRequest::new(tool("nd.ApplyForceDirectedLayout"))
            .set("in_network_diagram_layer", "Network Diagram")
            .set("preserve_container_layout", true)
            .set("degree_freedom", "high")
            .set("run_async", "RUN_ASYNCHRONOUSLY")
            .resolve()
            .unwrap();

        assert_eq!(resolved.value("preserve_container_layout"), Some("PRESERVE_CONTAINERS"));
        assert_eq!(resolved.value("degree_freedom"), Some("HIGH"));
        assert!(resolved.runs_async());
    }

    #[test]
    fn test_missing_required_parameter() {
        let err = ToolRequest::new(tool("un.Trace"))
            .set("in_utility_network", "Utility Network")
            .resolve()
            .unwrap_err();
        assert!(matches!(err, GpError::MissingParameter { ref name, .. } if name == "trace_type"));
    }

    #[test]
    fn test_unknown_and_derived_parameters_are_rejected() {
        let base = ToolRequest::new(tool("nd.UpdateDiagram")).set("in_network_diagram_layer", "D");
        assert!(matches!(
            base.clone().set("bogus", 1).resolve(),
            Err(GpError::UnknownParameter { .. })
        ));
        assert!(matches!(
            base.set("out_network_diagram_layer", "X").resolve(),
            Err(GpError::ReadOnlyParameter { .. })
        ));
    }

    #[test]
    fn test_invalid_coded_value_lists_allowed_tokens() {
        let err = ToolRequest::new(tool("un.Trace"))
            .set("in_utility_network", "UN")
            .set("trace_type", "sideways")
            .resolve()
            .unwrap_err();
        match err {
            GpError::InvalidValue { parameter, reason, .. } => {
                assert_eq!(parameter, "trace_type");
                assert!(reason.contains("UPSTREAM"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_numeric_coercion_and_range() {
        let base = ToolRequest::new(tool("nd.ApplyForceDirectedLayout")).set("in_network_diagram_layer", "D");

        let resolved = base.clone().set("number_iterations", "50").resolve().unwrap();
        assert_eq!(resolved.value("number_iterations"), Some("50"));

        assert!(base.clone().set("number_iterations", 2.5).resolve().is_err());
        assert!(base.clone().set("number_iterations", 0).resolve().is_err());
        assert!(base.set("repel_factor", "ten").resolve().is_err());
    }

    #[test]
    fn test_linear_unit_forms() {
        let base = ToolRequest::new(tool("nd.ApplyGridLayout")).set("in_network_diagram_layer", "D");
        assert_eq!(
            base.clone().set("cell_size", 3).resolve().unwrap().value("cell_size"),
            Some("3 Unknown")
        );
        assert_eq!(
            base.clone().set("cell_size", "2.5 Meters").resolve().unwrap().value("cell_size"),
            Some("2.5 Meters")
        );
        assert!(base.clone().set("cell_size", "wide").resolve().is_err());
        assert!(base.clone().set("cell_size", "NaN Meters").resolve().is_err());
        assert!(base.clone().set("cell_size", "inf").resolve().is_err());
        assert!(base.clone().set("cell_size", "-5 Meters").resolve().is_err());
        assert!(base.set("cell_size", -1).resolve().is_err());
    }

    #[test]
    fn test_double_range() {
        let compression = ToolRequest::new(tool("nd.ApplyCompressionLayout")).set("in_network_diagram_layer", "D");
        assert_eq!(
            compression.clone().set("compression_ratio", 75).resolve().unwrap().value("compression_ratio"),
            Some("75")
        );
        assert!(matches!(
            compression.set("compression_ratio", 150).resolve(),
            Err(GpError::InvalidValue { ref parameter, .. }) if parameter == "compression_ratio"
        ));

        let rotate = ToolRequest::new(tool("nd.ApplyRotateTreeLayout")).set("in_network_diagram_layer", "D");
        assert_eq!(
            rotate.clone().set("rotation_angle", "-45").resolve().unwrap().value("rotation_angle"),
            Some("-45")
        );
        assert!(rotate.set("rotation_angle", "400").resolve().is_err());
    }

    #[test]
    fn test_multi_value_parameters() {
        let resolved = ToolRequest::new(tool("nd.ExtendDiagram"))
            .set("in_network_diagram_layer", "D")
            .set("extend_type", json!(["by connectivity", "EXTEND_BY_CONTAINMENT"]))
            .resolve()
            .unwrap();
        assert_eq!(
            resolved.value("extend_type"),
            Some("EXTEND_BY_CONNECTIVITY;EXTEND_BY_CONTAINMENT")
        );

        let resolved = ToolRequest::new(tool("nd.DeleteDiagram"))
            .set("in_utility_network", "UN")
            .set("diagram_name", "North; South")
            .resolve()
            .unwrap();
        assert_eq!(resolved.value("diagram_name"), Some("North;South"));
    }

    #[test]
    fn test_value_table_rows() {
        let resolved = ToolRequest::new(tool("un.Trace"))
            .set("in_utility_network", "UN")
            .set("trace_type", "upstream")
            .set(
                "condition_barriers",
                json!([["Device Status", "IS_EQUAL_TO", "SPECIFIC_VALUE", 1, "OR"]]),
            )
            .resolve()
            .unwrap();
        assert_eq!(
            resolved.value("condition_barriers"),
            Some("'Device Status' IS_EQUAL_TO SPECIFIC_VALUE 1 OR")
        );
    }

    #[test]
    fn test_value_table_quoting_and_placeholders() {
        let resolved = ToolRequest::new(tool("un.Trace"))
            .set("in_utility_network", "UN")
            .set("trace_type", "upstream")
            .set(
                "condition_barriers",
                json!([
                    ["Name", "IS_EQUAL_TO", "SPECIFIC_VALUE", "A;B", "OR"],
                    ["O'Brien St", "", null]
                ]),
            )
            .resolve()
            .unwrap();
        assert_eq!(
            resolved.value("condition_barriers"),
            Some("Name IS_EQUAL_TO SPECIFIC_VALUE 'A;B' OR;'O''Brien St' # #")
        );
    }

    #[test]
    fn test_later_spelling_replaces_earlier() {
        let base = ToolRequest::new(tool("nd.ApplyGridLayout")).set("in_network_diagram_layer", "D");
        for _ in 0..20 {
            let resolved = base
                .clone()
                .set("RUN_ASYNC", true)
                .set("run_async", false)
                .resolve()
                .unwrap();
            assert_eq!(resolved.value("run_async"), Some("RUN_SYNCHRONOUSLY"));
        }

        let mut request = base.clone();
        request.insert_pair("run_async=false").unwrap();
        request.insert_pair("Run_Async=true").unwrap();
        assert!(request.resolve().unwrap().runs_async());
    }

    #[test]
    fn test_map_with_two_spellings_is_rejected() {
        let values: HashMap<String, Value> = [
            ("in_network_diagram_layer".to_string(), json!("D")),
            ("run_async".to_string(), json!(true)),
            ("RUN_ASYNC".to_string(), json!(false)),
        ]
        .into_iter()
        .collect();
        let err = ToolRequest::from_map(tool("nd.ApplyGridLayout"), values)
            .resolve()
            .unwrap_err();
        assert!(matches!(err, GpError::DuplicateParameter { ref name, .. } if name == "run_async"));
    }

    #[test]
    fn test_boolean_pairs_accept_words_and_tokens() {
        let pairs = vec![
            "in_network_diagram_layer=D".to_string(),
            "preserve_container_layout=true".to_string(),
            "run_async=RUN_ASYNCHRONOUSLY".to_string(),
        ];
        let resolved = ToolRequest::from_pairs(tool("nd.ApplyGridLayout"), &pairs)
            .unwrap()
            .resolve()
            .unwrap();
        assert_eq!(resolved.value("preserve_container_layout"), Some("PRESERVE_CONTAINERS"));
        assert!(resolved.runs_async());

        let pairs = vec![
            "in_network_diagram_layer=D".to_string(),
            "preserve_container_layout=IGNORE_CONTAINERS".to_string(),
            "run_async=False".to_string(),
        ];
        let resolved = ToolRequest::from_pairs(tool("nd.ApplyGridLayout"), &pairs)
            .unwrap()
            .resolve()
            .unwrap();
        assert_eq!(resolved.value("preserve_container_layout"), Some("IGNORE_CONTAINERS"));
        assert!(!resolved.runs_async());

        let pairs = vec![
            "in_network_diagram_layer=D".to_string(),
            "run_async=maybe".to_string(),
        ];
        assert!(ToolRequest::from_pairs(tool("nd.ApplyGridLayout"), &pairs)
            .unwrap()
            .resolve()
            .is_err());
    }

    #[test]
    fn test_from_pairs_and_arcpy_call() {
        let pairs = vec![
            "in_network_diagram_layer=Diagram".to_string(),
            "access_right_type=private".to_string(),
            "diagram_name=Feeder 12".to_string(),
        ];
        let resolved = ToolRequest::from_pairs(tool("StoreDiagram"), &pairs)
            .unwrap()
            .resolve()
            .unwrap();
        assert_eq!(
            resolved.arcpy_call(),
            "arcpy.nd.StoreDiagram(in_network_diagram_layer=\"Diagram\", diagram_name=\"Feeder 12\", access_right_type=\"PRIVATE\")"
        );

        assert!(ToolRequest::from_pairs(tool("StoreDiagram"), &["no_equals".to_string()]).is_err());
    }
}

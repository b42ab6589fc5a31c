//! Schema vocabulary for geoprocessing tool descriptors.
//!
//! Everything here is plain `'static` data so the catalog tables can be
//! written as `static` items and serialized without allocation.

use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Toolbox {
    #[serde(rename = "nd")]
    NetworkDiagram,
    #[serde(rename = "un")]
    UtilityNetwork,
}

impl Toolbox {
    pub const ALL: [Toolbox; 2] = [Toolbox::NetworkDiagram, Toolbox::UtilityNetwork];

    pub fn alias(&self) -> &'static str {
        match self {
            Toolbox::NetworkDiagram => "nd",
            Toolbox::UtilityNetwork => "un",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Toolbox::NetworkDiagram => "Network Diagram Tools",
            Toolbox::UtilityNetwork => "Utility Network Tools",
        }
    }

    pub fn from_alias(alias: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|toolbox| toolbox.alias().eq_ignore_ascii_case(alias))
    }
}

impl fmt::Display for Toolbox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.alias())
    }
}

/// ArcGIS parameter data types, serialized under their ArcGIS names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum DataType {
    #[serde(rename = "GPString")]
    String,
    #[serde(rename = "GPLong")]
    Long,
    #[serde(rename = "GPDouble")]
    Double,
    #[serde(rename = "GPBoolean")]
    Boolean,
    #[serde(rename = "GPLinearUnit")]
    LinearUnit,
    #[serde(rename = "GPNetworkDiagramLayer")]
    NetworkDiagramLayer,
    #[serde(rename = "GPUtilityNetworkLayer")]
    UtilityNetworkLayer,
    #[serde(rename = "GPFeatureLayer")]
    FeatureLayer,
    #[serde(rename = "GPFeatureRecordSetLayer")]
    FeatureRecordSetLayer,
    #[serde(rename = "GPTableView")]
    TableView,
    #[serde(rename = "DEFeatureClass")]
    FeatureClass,
    #[serde(rename = "DEFeatureDataset")]
    FeatureDataset,
    #[serde(rename = "DEFile")]
    File,
    #[serde(rename = "DEFolder")]
    Folder,
    #[serde(rename = "DEWorkspace")]
    Workspace,
    #[serde(rename = "GPValueTable")]
    ValueTable,
    #[serde(rename = "GPEnvelope")]
    Envelope,
}

impl DataType {
    pub fn as_str(&self) -> &'static str {
        match self {
            DataType::String => "GPString",
            DataType::Long => "GPLong",
            DataType::Double => "GPDouble",
            DataType::Boolean => "GPBoolean",
            DataType::LinearUnit => "GPLinearUnit",
            DataType::NetworkDiagramLayer => "GPNetworkDiagramLayer",
            DataType::UtilityNetworkLayer => "GPUtilityNetworkLayer",
            DataType::FeatureLayer => "GPFeatureLayer",
            DataType::FeatureRecordSetLayer => "GPFeatureRecordSetLayer",
            DataType::TableView => "GPTableView",
            DataType::FeatureClass => "DEFeatureClass",
            DataType::FeatureDataset => "DEFeatureDataset",
            DataType::File => "DEFile",
            DataType::Folder => "DEFolder",
            DataType::Workspace => "DEWorkspace",
            DataType::ValueTable => "GPValueTable",
            DataType::Envelope => "GPEnvelope",
        }
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    Input,
    Output,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Input => f.pad("input"),
            Direction::Output => f.pad("output"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Requirement {
    Required,
    Optional,
    /// Reported by the service after execution; callers never set it.
    Derived,
}

impl fmt::Display for Requirement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Requirement::Required => f.pad("required"),
            Requirement::Optional => f.pad("optional"),
            Requirement::Derived => f.pad("derived"),
        }
    }
}

/// One entry of a coded-value domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CodedValue {
    pub label: &'static str,
    pub token: &'static str,
}

impl CodedValue {
    pub const fn new(label: &'static str, token: &'static str) -> Self {
        Self { label, token }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Domain {
    /// A checkbox whose two states travel as keywords.
    Boolean {
        on: &'static str,
        off: &'static str,
    },
    Coded {
        values: &'static [CodedValue],
    },
    Range {
        min: f64,
        max: f64,
    },
}

impl Domain {
    /// Maps a label or a token (either case) to its wire token.
    pub fn token_for(&self, input: &str) -> Option<&'static str> {
        let input = input.trim();
        match self {
            Domain::Boolean { on, off } => {
                if input.eq_ignore_ascii_case("true") || input.eq_ignore_ascii_case(on) {
                    Some(*on)
                } else if input.eq_ignore_ascii_case("false") || input.eq_ignore_ascii_case(off) {
                    Some(*off)
                } else {
                    None
                }
            }
            Domain::Coded { values } => values
                .iter()
                .find(|v| v.token.eq_ignore_ascii_case(input) || v.label.eq_ignore_ascii_case(input))
                .map(|v| v.token),
            Domain::Range { .. } => None,
        }
    }

    pub fn label_for(&self, token: &str) -> Option<&'static str> {
        match self {
            Domain::Boolean { on, off } => {
                if token == *on {
                    Some("true")
                } else if token == *off {
                    Some("false")
                } else {
                    None
                }
            }
            Domain::Coded { values } => values.iter().find(|v| v.token == token).map(|v| v.label),
            Domain::Range { .. } => None,
        }
    }

    pub fn boolean_token(&self, value: bool) -> Option<&'static str> {
        match self {
            Domain::Boolean { on, off } => Some(if value { *on } else { *off }),
            _ => None,
        }
    }

    pub fn tokens(&self) -> Vec<&'static str> {
        match self {
            Domain::Boolean { on, off } => vec![*on, *off],
            Domain::Coded { values } => values.iter().map(|v| v.token).collect(),
            Domain::Range { .. } => Vec::new(),
        }
    }

    pub fn contains(&self, value: f64) -> bool {
        match self {
            Domain::Range { min, max } => value >= *min && value <= *max,
            _ => true,
        }
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Domain::Range { min, max } => write!(f, "{}..{}", min, max),
            other => f.write_str(&other.tokens().join("|")),
        }
    }
}

/// A default value as written in the tool's documentation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Literal {
    Bool(bool),
    Long(i64),
    Double(f64),
    Text(&'static str),
}

impl Literal {
    /// Wire form of the literal; booleans go through their keyword domain.
    pub fn render(&self, domain: Option<&Domain>) -> String {
        match self {
            Literal::Bool(b) => domain
                .and_then(|d| d.boolean_token(*b))
                .map(str::to_string)
                .unwrap_or_else(|| b.to_string()),
            Literal::Long(n) => n.to_string(),
            Literal::Double(x) => x.to_string(),
            Literal::Text(s) => s.to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct ParameterDef {
    pub name: &'static str,
    pub display_name: &'static str,
    pub data_type: DataType,
    pub direction: Direction,
    pub requirement: Requirement,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default: Option<Literal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domain: Option<Domain>,
    pub multi_value: bool,
}

impl ParameterDef {
    pub const fn required(name: &'static str, display_name: &'static str, data_type: DataType) -> Self {
        Self {
            name,
            display_name,
            data_type,
            direction: Direction::Input,
            requirement: Requirement::Required,
            default: None,
            domain: None,
            multi_value: false,
        }
    }

    pub const fn optional(name: &'static str, display_name: &'static str, data_type: DataType) -> Self {
        Self {
            requirement: Requirement::Optional,
            ..Self::required(name, display_name, data_type)
        }
    }

    pub const fn derived(name: &'static str, display_name: &'static str, data_type: DataType) -> Self {
        Self {
            direction: Direction::Output,
            requirement: Requirement::Derived,
            ..Self::required(name, display_name, data_type)
        }
    }

    /// Optional checkbox sent as one of two keywords.
    pub const fn flag(
        name: &'static str,
        display_name: &'static str,
        on: &'static str,
        off: &'static str,
        default: bool,
    ) -> Self {
        Self::optional(name, display_name, DataType::Boolean)
            .with_domain(Domain::Boolean { on, off })
            .with_default(Literal::Bool(default))
    }

    /// Optional string restricted to a coded-value domain.
    pub const fn choice(
        name: &'static str,
        display_name: &'static str,
        values: &'static [CodedValue],
        default: &'static str,
    ) -> Self {
        Self::optional(name, display_name, DataType::String)
            .with_domain(Domain::Coded { values })
            .with_default(Literal::Text(default))
    }

    pub const fn with_default(self, default: Literal) -> Self {
        Self {
            default: Some(default),
            ..self
        }
    }

    pub const fn with_domain(self, domain: Domain) -> Self {
        Self {
            domain: Some(domain),
            ..self
        }
    }

    pub const fn multi(self) -> Self {
        Self {
            multi_value: true,
            ..self
        }
    }

    /// Caller-provided output such as an output file path.
    pub const fn output(self) -> Self {
        Self {
            direction: Direction::Output,
            ..self
        }
    }

    pub fn is_derived(&self) -> bool {
        self.requirement == Requirement::Derived
    }

    pub fn is_required(&self) -> bool {
        self.requirement == Requirement::Required
    }

    pub fn default_wire_value(&self) -> Option<String> {
        self.default.map(|d| d.render(self.domain.as_ref()))
    }
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct ToolDef {
    pub toolbox: Toolbox,
    pub name: &'static str,
    pub label: &'static str,
    pub summary: &'static str,
    pub parameters: &'static [ParameterDef],
}

impl ToolDef {
    pub fn execute_name(&self) -> String {
        format!("{}.{}", self.toolbox.alias(), self.name)
    }

    pub fn parameter(&self, name: &str) -> Option<&'static ParameterDef> {
        let parameters: &'static [ParameterDef] = self.parameters;
        parameters.iter().find(|p| p.name.eq_ignore_ascii_case(name))
    }

    /// Parameters a caller may supply, in signature order.
    pub fn input_parameters(&self) -> impl Iterator<Item = &'static ParameterDef> {
        let parameters: &'static [ParameterDef] = self.parameters;
        parameters.iter().filter(|p| !p.is_derived())
    }

    pub fn output_parameters(&self) -> impl Iterator<Item = &'static ParameterDef> {
        let parameters: &'static [ParameterDef] = self.parameters;
        parameters.iter().filter(|p| p.direction == Direction::Output)
    }

    pub fn signature(&self) -> String {
        let args: Vec<String> = self
            .input_parameters()
            .map(|p| {
                if p.is_required() {
                    p.name.to_string()
                } else {
                    format!("{{{}}}", p.name)
                }
            })
            .collect();
        format!("{}({})", self.name, args.join(", "))
    }
}

impl fmt::Display for ToolDef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.execute_name(), self.label)
    }
}

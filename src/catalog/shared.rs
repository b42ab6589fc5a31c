//! Parameters and domains reused across toolboxes.

use crate::domain::model::{CodedValue, DataType, ParameterDef};

pub const IN_NETWORK_DIAGRAM_LAYER: ParameterDef = ParameterDef::required(
    "in_network_diagram_layer",
    "Input Network Diagram Layer",
    DataType::NetworkDiagramLayer,
);

pub const OUT_NETWORK_DIAGRAM_LAYER: ParameterDef = ParameterDef::derived(
    "out_network_diagram_layer",
    "Updated Network Diagram Layer",
    DataType::NetworkDiagramLayer,
);

pub const IN_UTILITY_NETWORK: ParameterDef = ParameterDef::required(
    "in_utility_network",
    "Input Utility Network",
    DataType::UtilityNetworkLayer,
);

pub const OUT_UTILITY_NETWORK: ParameterDef = ParameterDef::derived(
    "out_utility_network",
    "Updated Utility Network",
    DataType::UtilityNetworkLayer,
);

pub const PRESERVE_CONTAINER_LAYOUT: ParameterDef = ParameterDef::flag(
    "preserve_container_layout",
    "Preserve container layout",
    "PRESERVE_CONTAINERS",
    "IGNORE_CONTAINERS",
    false,
);

pub const RUN_ASYNC: ParameterDef = ParameterDef::flag(
    "run_async",
    "Run in asynchronous mode on the server",
    "RUN_ASYNCHRONOUSLY",
    "RUN_SYNCHRONOUSLY",
    false,
);

pub const TEMPLATE_NAME: ParameterDef =
    ParameterDef::required("template_name", "Template Name", DataType::String);

pub const DOMAIN_NETWORK: ParameterDef =
    ParameterDef::required("domain_network", "Domain Network", DataType::String);

pub const INCLUDE_DOMAIN_DESCRIPTIONS: ParameterDef = ParameterDef::flag(
    "include_domain_descriptions",
    "Include domain descriptions",
    "INCLUDE_DOMAIN_DESCRIPTIONS",
    "EXCLUDE_DOMAIN_DESCRIPTIONS",
    false,
);

pub const INCLUDE_GEOMETRY: ParameterDef = ParameterDef::flag(
    "include_geometry",
    "Include geometry",
    "INCLUDE_GEOMETRY",
    "EXCLUDE_GEOMETRY",
    false,
);

pub const INCLUDE_BARRIERS: ParameterDef = ParameterDef::flag(
    "include_barriers",
    "Include barrier features",
    "INCLUDE_BARRIERS",
    "EXCLUDE_BARRIERS",
    true,
);

pub const DEGREE_OF_FREEDOM: &[CodedValue] = &[
    CodedValue::new("Low", "LOW"),
    CodedValue::new("Medium", "MEDIUM"),
    CodedValue::new("High", "HIGH"),
];

pub const TREE_DIRECTION: &[CodedValue] = &[
    CodedValue::new("From left to right", "FROM_LEFT_TO_RIGHT"),
    CodedValue::new("From right to left", "FROM_RIGHT_TO_LEFT"),
    CodedValue::new("From bottom to top", "FROM_BOTTOM_TO_TOP"),
    CodedValue::new("From top to bottom", "FROM_TOP_TO_BOTTOM"),
];

pub const TRAVERSABILITY_SCOPE: &[CodedValue] = &[
    CodedValue::new("Junctions and edges", "BOTH_JUNCTIONS_AND_EDGES"),
    CodedValue::new("Junctions only", "JUNCTIONS_ONLY"),
    CodedValue::new("Edges only", "EDGES_ONLY"),
];

pub const ACCESS_RIGHT: &[CodedValue] = &[
    CodedValue::new("Public", "PUBLIC"),
    CodedValue::new("Protected", "PROTECTED"),
    CodedValue::new("Private", "PRIVATE"),
];

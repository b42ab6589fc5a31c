//! Utility Network toolbox (`un`).

use super::shared::{
    DOMAIN_NETWORK, INCLUDE_BARRIERS, INCLUDE_DOMAIN_DESCRIPTIONS, INCLUDE_GEOMETRY,
    IN_UTILITY_NETWORK, OUT_UTILITY_NETWORK, RUN_ASYNC, TRAVERSABILITY_SCOPE,
};
use crate::domain::model::{CodedValue, DataType, Domain, Literal, ParameterDef, ToolDef, Toolbox};

const UN: Toolbox = Toolbox::UtilityNetwork;

const fn text(name: &'static str, display_name: &'static str) -> ParameterDef {
    ParameterDef::optional(name, display_name, DataType::String)
}

const fn value_table(name: &'static str, display_name: &'static str) -> ParameterDef {
    ParameterDef::optional(name, display_name, DataType::ValueTable)
}

const fn coded(name: &'static str, display_name: &'static str, values: &'static [CodedValue]) -> ParameterDef {
    ParameterDef::required(name, display_name, DataType::String).with_domain(Domain::Coded { values })
}

pub const TRACE_TYPE: &[CodedValue] = &[
    CodedValue::new("Connected", "CONNECTED"),
    CodedValue::new("Subnetwork", "SUBNETWORK"),
    CodedValue::new("Subnetwork controllers", "SUBNETWORK_CONTROLLERS"),
    CodedValue::new("Upstream", "UPSTREAM"),
    CodedValue::new("Downstream", "DOWNSTREAM"),
    CodedValue::new("Loops", "LOOPS"),
    CodedValue::new("Shortest path", "SHORTEST_PATH"),
    CodedValue::new("Isolation", "ISOLATION"),
];

const RESULT_TYPES: &[CodedValue] = &[
    CodedValue::new("Selection", "SELECTION"),
    CodedValue::new("Aggregated geometry", "AGGREGATED_GEOMETRY"),
    CodedValue::new("Network layers", "NETWORK_LAYERS"),
    CodedValue::new("Connectivity", "CONNECTIVITY"),
    CodedValue::new("Features", "FEATURES"),
    CodedValue::new("Containment and attachment", "CONTAINMENT_AND_ATTACHMENT"),
];

const SELECTION_TYPE: &[CodedValue] = &[
    CodedValue::new("New selection", "NEW_SELECTION"),
    CodedValue::new("Add to the current selection", "ADD_TO_SELECTION"),
    CodedValue::new("Remove from the current selection", "REMOVE_FROM_SELECTION"),
    CodedValue::new("Subset the current selection", "SUBSET_SELECTION"),
    CodedValue::new("Switch the current selection", "SWITCH_SELECTION"),
    CodedValue::new("Clear the current selection", "CLEAR_SELECTION"),
];

const TIER_DEFINITION: &[CodedValue] = &[
    CodedValue::new("Hierarchical", "HIERARCHICAL"),
    CodedValue::new("Partitioned", "PARTITIONED"),
];

const SUBNETWORK_CONTROLLER_TYPE: &[CodedValue] = &[
    CodedValue::new("Source", "SOURCE"),
    CodedValue::new("Sink", "SINK"),
];

const TIER_TOPOLOGY: &[CodedValue] = &[
    CodedValue::new("Radial", "RADIAL"),
    CodedValue::new("Mesh", "MESH"),
];

const ATTRIBUTE_TYPE: &[CodedValue] = &[
    CodedValue::new("Short integer", "SHORT"),
    CodedValue::new("Long integer", "LONG"),
    CodedValue::new("Big integer", "BIG_INTEGER"),
    CodedValue::new("Double", "DOUBLE"),
    CodedValue::new("Date", "DATE"),
];

const TRAVERSABILITY_MODEL: &[CodedValue] = &[
    CodedValue::new("Bidirectional", "BIDIRECTIONAL"),
    CodedValue::new("Directional", "DIRECTIONAL"),
];

const ASSOCIATION_ROLE: &[CodedValue] = &[
    CodedValue::new("Container", "CONTAINER"),
    CodedValue::new("Structure", "STRUCTURE"),
    CodedValue::new("None", "NONE"),
];

const DELETION_TYPE: &[CodedValue] = &[
    CodedValue::new("None", "NONE"),
    CodedValue::new("Cascade", "CASCADE"),
    CodedValue::new("Restricted", "RESTRICTED"),
];

const EDGE_CONNECTIVITY_POLICY: &[CodedValue] = &[
    CodedValue::new("End vertex", "END_VERTEX"),
    CodedValue::new("Any vertex", "ANY_VERTEX"),
];

const RULE_TYPE: &[CodedValue] = &[
    CodedValue::new("Junction-junction connectivity", "JUNCTION_JUNCTION_CONNECTIVITY"),
    CodedValue::new("Junction-edge connectivity", "JUNCTION_EDGE_CONNECTIVITY"),
    CodedValue::new("Edge-junction-edge connectivity", "EDGE_JUNCTION_EDGE_CONNECTIVITY"),
    CodedValue::new("Containment", "CONTAINMENT"),
    CodedValue::new("Structural attachment", "STRUCTURAL_ATTACHMENT"),
];

const EDIT_MODE: &[CodedValue] = &[
    CodedValue::new("Without eventing", "WITHOUT_EVENTS"),
    CodedValue::new("With eventing", "WITH_EVENTS"),
];

const TABLE: ParameterDef = ParameterDef::required("table", "Table", DataType::TableView);
const ASSET_GROUP: ParameterDef = ParameterDef::required("asset_group", "Asset Group", DataType::String);
const ASSET_TYPE: ParameterDef = ParameterDef::required("asset_type", "Asset Type", DataType::String);
const TIER: ParameterDef = ParameterDef::required("tier", "Tier", DataType::String);

const TRAVERSABILITY_SCOPE_PARAM: ParameterDef = ParameterDef::choice(
    "traversability_scope",
    "Apply Traversability To",
    TRAVERSABILITY_SCOPE,
    "BOTH_JUNCTIONS_AND_EDGES",
);

/// Shared by AddRule and DeleteRule.
const RULE_PARAMETERS: &[ParameterDef] = &[
    IN_UTILITY_NETWORK,
    coded("rule_type", "Rule Type", RULE_TYPE),
    ParameterDef::required("from_table", "From Table", DataType::String),
    ParameterDef::required("from_assetgroup", "From Asset Group", DataType::String),
    ParameterDef::required("from_assettype", "From Asset Type", DataType::String),
    ParameterDef::required("to_table", "To Table", DataType::String),
    ParameterDef::required("to_assetgroup", "To Asset Group", DataType::String),
    ParameterDef::required("to_assettype", "To Asset Type", DataType::String),
    text("from_terminal", "From Terminal"),
    text("to_terminal", "To Terminal"),
    text("via_table", "Via Table"),
    text("via_assetgroup", "Via Asset Group"),
    text("via_assettype", "Via Asset Type"),
    text("via_terminal", "Via Terminal"),
    OUT_UTILITY_NETWORK,
];

pub static TOOLS: &[ToolDef] = &[
    // Tracing
    ToolDef {
        toolbox: UN,
        name: "Trace",
        label: "Trace",
        summary: "Runs a trace on a utility network from starting points and barriers.",
        parameters: &[
            IN_UTILITY_NETWORK,
            coded("trace_type", "Trace Type", TRACE_TYPE),
            ParameterDef::optional("starting_points", "Starting Points", DataType::FeatureRecordSetLayer),
            ParameterDef::optional("barriers", "Barriers", DataType::FeatureRecordSetLayer),
            text("domain_network", "Domain Network"),
            text("tier", "Tier"),
            text("target_tier", "Target Tier"),
            text("subnetwork_name", "Subnetwork Name"),
            text("shortest_path_network_attribute_name", "Shortest Path Network Attribute Name"),
            ParameterDef::flag(
                "include_containers",
                "Include containers",
                "INCLUDE_CONTAINERS",
                "EXCLUDE_CONTAINERS",
                false,
            ),
            ParameterDef::flag("include_content", "Include content", "INCLUDE_CONTENT", "EXCLUDE_CONTENT", false),
            ParameterDef::flag(
                "include_structures",
                "Include structures",
                "INCLUDE_STRUCTURES",
                "EXCLUDE_STRUCTURES",
                false,
            ),
            INCLUDE_BARRIERS,
            ParameterDef::flag(
                "validate_consistency",
                "Validate consistency",
                "VALIDATE_CONSISTENCY",
                "DO_NOT_VALIDATE_CONSISTENCY",
                true,
            ),
            value_table("condition_barriers", "Condition Barriers"),
            value_table("function_barriers", "Function Barriers"),
            TRAVERSABILITY_SCOPE_PARAM,
            value_table("filter_barriers", "Filter Barriers"),
            value_table("filter_function_barriers", "Filter Function Barriers"),
            ParameterDef::choice("filter_scope", "Apply Filter To", TRAVERSABILITY_SCOPE, "BOTH_JUNCTIONS_AND_EDGES"),
            text("filter_bitset_network_attribute_name", "Filter Bitset Network Attribute"),
            value_table("functions", "Functions"),
            value_table("propagators", "Propagators"),
            text("output_assettypes", "Output Asset Types").multi(),
            value_table("output_conditions", "Output Conditions"),
            ParameterDef::flag(
                "include_isolated_features",
                "Include isolated features",
                "INCLUDE_ISOLATED_FEATURES",
                "EXCLUDE_ISOLATED_FEATURES",
                false,
            ),
            ParameterDef::flag(
                "ignore_barriers_at_starting_points",
                "Ignore barriers at starting points",
                "IGNORE_BARRIERS_AT_STARTING_POINTS",
                "DO_NOT_IGNORE_BARRIERS_AT_STARTING_POINTS",
                false,
            ),
            ParameterDef::flag(
                "include_up_to_first_spatial_container",
                "Include up to first spatial container",
                "INCLUDE_UP_TO_FIRST_SPATIAL_CONTAINER",
                "DO_NOT_INCLUDE_UP_TO_FIRST_SPATIAL_CONTAINER",
                false,
            ),
            ParameterDef::choice("result_types", "Result Types", RESULT_TYPES, "SELECTION").multi(),
            ParameterDef::choice("selection_type", "Selection Type", SELECTION_TYPE, "NEW_SELECTION"),
            ParameterDef::flag(
                "clear_all_previous_trace_results",
                "Clear all previous trace results",
                "CLEAR_ALL_PREVIOUS_TRACE_RESULTS",
                "DO_NOT_CLEAR_ALL_PREVIOUS_TRACE_RESULTS",
                true,
            ),
            text("trace_name", "Trace Name"),
            ParameterDef::optional("aggregated_points", "Aggregated Points", DataType::FeatureClass).output(),
            ParameterDef::optional("aggregated_lines", "Aggregated Lines", DataType::FeatureClass).output(),
            ParameterDef::flag(
                "use_trace_config",
                "Use trace configuration",
                "USE_TRACE_CONFIGURATION",
                "DO_NOT_USE_TRACE_CONFIGURATION",
                false,
            ),
            text("trace_config_name", "Trace Configuration Name"),
            ParameterDef::optional("out_json_file", "Output JSON File", DataType::File).output(),
            RUN_ASYNC,
            INCLUDE_GEOMETRY,
            INCLUDE_DOMAIN_DESCRIPTIONS,
            text("result_network_attributes", "Result Network Attributes").multi(),
            value_table("result_fields", "Result Fields"),
            ParameterDef::flag(
                "allow_indeterminate_flow",
                "Allow indeterminate flow",
                "TRACE_INDETERMINATE_FLOW",
                "IGNORE_INDETERMINATE_FLOW",
                false,
            ),
            ParameterDef::flag(
                "validate_locatability",
                "Validate locatability",
                "VALIDATE_LOCATABILITY",
                "DO_NOT_VALIDATE_LOCATABILITY",
                false,
            ),
            ParameterDef::flag(
                "use_digitized_direction",
                "Use digitized direction",
                "USE_DIGITIZED_DIRECTION",
                "DO_NOT_USE_DIGITIZED_DIRECTION",
                false,
            ),
            ParameterDef::flag(
                "synthesize_geometries",
                "Synthesize geometries",
                "SYNTHESIZE_GEOMETRIES",
                "DO_NOT_SYNTHESIZE_GEOMETRIES",
                false,
            ),
            OUT_UTILITY_NETWORK,
        ],
    },
    ToolDef {
        toolbox: UN,
        name: "AddTraceConfiguration",
        label: "Add Trace Configuration",
        summary: "Stores a named, reusable trace configuration on a utility network.",
        parameters: &[
            IN_UTILITY_NETWORK,
            ParameterDef::required("trace_config_name", "Trace Configuration Name", DataType::String),
            coded("trace_type", "Trace Type", TRACE_TYPE),
            text("description", "Description"),
            text("tags", "Tags").multi(),
            text("domain_network", "Domain Network"),
            text("tier", "Tier"),
            text("target_tier", "Target Tier"),
            INCLUDE_BARRIERS,
            value_table("condition_barriers", "Condition Barriers"),
            value_table("function_barriers", "Function Barriers"),
            TRAVERSABILITY_SCOPE_PARAM,
            value_table("functions", "Functions"),
            value_table("propagators", "Propagators"),
            text("output_assettypes", "Output Asset Types").multi(),
            ParameterDef::choice("result_types", "Result Types", RESULT_TYPES, "SELECTION").multi(),
            OUT_UTILITY_NETWORK,
        ],
    },
    ToolDef {
        toolbox: UN,
        name: "DeleteTraceConfiguration",
        label: "Delete Trace Configuration",
        summary: "Deletes named trace configurations from a utility network.",
        parameters: &[
            IN_UTILITY_NETWORK,
            ParameterDef::required("trace_config_name", "Trace Configuration Names", DataType::String).multi(),
            OUT_UTILITY_NETWORK,
        ],
    },
    // Topology
    ToolDef {
        toolbox: UN,
        name: "EnableNetworkTopology",
        label: "Enable Network Topology",
        summary: "Builds the network topology of a utility network.",
        parameters: &[
            IN_UTILITY_NETWORK,
            ParameterDef::optional("max_errors", "Maximum Number of Errors", DataType::Long)
                .with_default(Literal::Long(10000))
                .with_domain(Domain::Range { min: 1.0, max: 1_000_000.0 }),
            ParameterDef::flag(
                "only_generate_errors",
                "Only generate errors",
                "ONLY_GENERATE_ERRORS",
                "ENABLE_TOPOLOGY",
                false,
            ),
            OUT_UTILITY_NETWORK,
        ],
    },
    ToolDef {
        toolbox: UN,
        name: "DisableNetworkTopology",
        label: "Disable Network Topology",
        summary: "Drops the network topology of a utility network.",
        parameters: &[IN_UTILITY_NETWORK, OUT_UTILITY_NETWORK],
    },
    ToolDef {
        toolbox: UN,
        name: "ValidateNetworkTopology",
        label: "Validate Network Topology",
        summary: "Validates dirty areas of the network topology within an extent.",
        parameters: &[
            IN_UTILITY_NETWORK,
            ParameterDef::optional("extent", "Extent", DataType::Envelope),
            OUT_UTILITY_NETWORK,
        ],
    },
    ToolDef {
        toolbox: UN,
        name: "UpdateIsConnected",
        label: "Update Is Connected",
        summary: "Recomputes the connectivity status of every network feature.",
        parameters: &[IN_UTILITY_NETWORK, OUT_UTILITY_NETWORK],
    },
    // Subnetworks
    ToolDef {
        toolbox: UN,
        name: "UpdateSubnetwork",
        label: "Update Subnetwork",
        summary: "Updates the subnetwork features and attributes of a tier.",
        parameters: &[
            IN_UTILITY_NETWORK,
            DOMAIN_NETWORK,
            TIER,
            ParameterDef::flag(
                "all_subnetworks_in_tier",
                "All subnetworks in tier",
                "ALL_SUBNETWORKS_IN_TIER",
                "SPECIFIC_SUBNETWORK",
                false,
            ),
            text("subnetwork_name", "Subnetwork Name"),
            ParameterDef::flag(
                "continue_on_failure",
                "Continue on failure",
                "CONTINUE_ON_FAILURE",
                "STOP_ON_FAILURE",
                false,
            ),
            OUT_UTILITY_NETWORK,
        ],
    },
    ToolDef {
        toolbox: UN,
        name: "ExportSubnetwork",
        label: "Export Subnetwork",
        summary: "Exports the features and connectivity of a subnetwork to a JSON file.",
        parameters: &[
            IN_UTILITY_NETWORK,
            DOMAIN_NETWORK,
            TIER,
            ParameterDef::required("subnetwork_name", "Subnetwork Name", DataType::String),
            ParameterDef::required("out_json_file", "Output JSON File", DataType::File).output(),
            ParameterDef::flag(
                "set_export_acknowledged",
                "Set export acknowledged",
                "ACKNOWLEDGE",
                "DO_NOT_ACKNOWLEDGE",
                false,
            ),
            value_table("condition_barriers", "Condition Barriers"),
            value_table("function_barriers", "Function Barriers"),
            INCLUDE_BARRIERS,
            TRAVERSABILITY_SCOPE_PARAM,
            value_table("propagators", "Propagators"),
            INCLUDE_GEOMETRY,
            ParameterDef::choice("result_types", "Result Types", RESULT_TYPES, "FEATURES").multi(),
            value_table("result_fields", "Result Fields"),
            RUN_ASYNC,
            INCLUDE_DOMAIN_DESCRIPTIONS,
        ],
    },
    ToolDef {
        toolbox: UN,
        name: "SetSubnetworkDefinition",
        label: "Set Subnetwork Definition",
        summary: "Defines how subnetworks of a tier are traced and maintained.",
        parameters: &[
            IN_UTILITY_NETWORK,
            DOMAIN_NETWORK,
            ParameterDef::required("tier_name", "Tier Name", DataType::String),
            value_table("subnetwork_controllers", "Subnetwork Controllers"),
            text("valid_devices", "Valid Devices").multi(),
            text("valid_lines", "Valid Lines").multi(),
            text("aggregated_line_for_subnetline", "Aggregated Lines for SubnetLine Feature Class").multi(),
            text("diagram_templates", "Diagram Templates").multi(),
            ParameterDef::flag(
                "update_structure_features",
                "Update structure network containers",
                "UPDATE_STRUCTURE",
                "DO_NOT_UPDATE_STRUCTURE",
                false,
            ),
            ParameterDef::flag(
                "update_container_features",
                "Update domain network containers",
                "UPDATE_CONTAINER",
                "DO_NOT_UPDATE_CONTAINER",
                false,
            ),
            ParameterDef::choice(
                "edit_mode_for_default_version",
                "Edit Mode for Default Version",
                EDIT_MODE,
                "WITHOUT_EVENTS",
            ),
            ParameterDef::choice(
                "edit_mode_for_named_version",
                "Edit Mode for Named Version",
                EDIT_MODE,
                "WITHOUT_EVENTS",
            ),
            INCLUDE_BARRIERS,
            TRAVERSABILITY_SCOPE_PARAM,
            OUT_UTILITY_NETWORK,
        ],
    },
    ToolDef {
        toolbox: UN,
        name: "ImportSubnetworkControllers",
        label: "Import Subnetwork Controllers",
        summary: "Sets subnetwork controllers from a CSV file.",
        parameters: &[
            IN_UTILITY_NETWORK,
            ParameterDef::required("subnetwork_controller_csv", "Subnetwork Controller CSV", DataType::File),
            OUT_UTILITY_NETWORK,
        ],
    },
    ToolDef {
        toolbox: UN,
        name: "ExportSubnetworkControllers",
        label: "Export Subnetwork Controllers",
        summary: "Writes the subnetwork controllers of a utility network to a CSV file.",
        parameters: &[
            IN_UTILITY_NETWORK,
            ParameterDef::required("out_csv_file", "Output CSV File", DataType::File).output(),
            text("domain_network", "Domain Network"),
            text("tier", "Tier"),
        ],
    },
    // Schema
    ToolDef {
        toolbox: UN,
        name: "CreateUtilityNetwork",
        label: "Create Utility Network",
        summary: "Creates a utility network in a feature dataset.",
        parameters: &[
            ParameterDef::required("in_feature_dataset", "Input Feature Dataset", DataType::FeatureDataset),
            ParameterDef::required("in_utility_network_name", "Utility Network Name", DataType::String),
            ParameterDef::required(
                "service_territory_feature_class",
                "Service Territory Feature Class",
                DataType::FeatureLayer,
            ),
            ParameterDef::derived("out_utility_network", "Output Utility Network", DataType::UtilityNetworkLayer),
        ],
    },
    ToolDef {
        toolbox: UN,
        name: "ApplyAssetPackage",
        label: "Apply Asset Package",
        summary: "Applies the schema and data of an asset package to a utility network.",
        parameters: &[
            ParameterDef::required("in_asset_package", "Input Asset Package", DataType::Workspace),
            ParameterDef::required("target_utility_network", "Target Utility Network", DataType::UtilityNetworkLayer),
            text("domain_networks", "Domain Networks").multi(),
            text("configuration_keyword", "Configuration Keyword"),
            ParameterDef::flag("load_data", "Load data", "LOAD_DATA", "SCHEMA_ONLY", true),
            OUT_UTILITY_NETWORK,
        ],
    },
    ToolDef {
        toolbox: UN,
        name: "AddDomainNetwork",
        label: "Add Domain Network",
        summary: "Adds a domain network to a utility network.",
        parameters: &[
            IN_UTILITY_NETWORK,
            ParameterDef::required("domain_network_name", "Domain Network Name", DataType::String),
            coded("tier_definition", "Tier Definition", TIER_DEFINITION),
            coded("subnetwork_controller_type", "Subnetwork Controller Type", SUBNETWORK_CONTROLLER_TYPE),
            text("domain_network_alias_name", "Alias"),
            OUT_UTILITY_NETWORK,
        ],
    },
    ToolDef {
        toolbox: UN,
        name: "AddTierGroup",
        label: "Add Tier Group",
        summary: "Adds a tier group to a hierarchical domain network.",
        parameters: &[
            IN_UTILITY_NETWORK,
            DOMAIN_NETWORK,
            ParameterDef::required("name", "Name", DataType::String),
            OUT_UTILITY_NETWORK,
        ],
    },
    ToolDef {
        toolbox: UN,
        name: "AddTier",
        label: "Add Tier",
        summary: "Adds a tier to a domain network.",
        parameters: &[
            IN_UTILITY_NETWORK,
            DOMAIN_NETWORK,
            ParameterDef::required("tier_name", "Tier Name", DataType::String),
            ParameterDef::required("tier_rank", "Tier Rank", DataType::Long)
                .with_domain(Domain::Range { min: 1.0, max: 1000.0 }),
            ParameterDef::choice("tier_topology", "Tier Topology", TIER_TOPOLOGY, "RADIAL"),
            text("tier_group_name", "Tier Group Name"),
            OUT_UTILITY_NETWORK,
        ],
    },
    ToolDef {
        toolbox: UN,
        name: "AddNetworkAttribute",
        label: "Add Network Attribute",
        summary: "Adds a network attribute to a utility network.",
        parameters: &[
            IN_UTILITY_NETWORK,
            ParameterDef::required("attribute_name", "Attribute Name", DataType::String),
            coded("attribute_type", "Attribute Type", ATTRIBUTE_TYPE),
            text("attribute_domain", "Attribute Domain"),
            ParameterDef::flag("is_apportionable", "Apportionable", "APPORTIONABLE", "NOT_APPORTIONABLE", false),
            ParameterDef::flag("is_substitution", "Use for substitution", "SUBSTITUTION", "NO_SUBSTITUTION", false),
            ParameterDef::flag("is_nullable", "Nullable", "NULLABLE", "NOT_NULLABLE", true),
            ParameterDef::flag("is_overridable", "Overridable", "OVERRIDABLE", "NOT_OVERRIDABLE", false),
            OUT_UTILITY_NETWORK,
        ],
    },
    ToolDef {
        toolbox: UN,
        name: "SetNetworkAttribute",
        label: "Set Network Attribute",
        summary: "Assigns a network attribute to a field of a network feature class.",
        parameters: &[
            IN_UTILITY_NETWORK,
            ParameterDef::required("network_attribute", "Network Attribute", DataType::String),
            DOMAIN_NETWORK,
            ParameterDef::required("input_table", "Input Table", DataType::TableView),
            text("field", "Field"),
            OUT_UTILITY_NETWORK,
        ],
    },
    ToolDef {
        toolbox: UN,
        name: "AddTerminalConfiguration",
        label: "Add Terminal Configuration",
        summary: "Adds a terminal configuration describing device terminals and their paths.",
        parameters: &[
            IN_UTILITY_NETWORK,
            ParameterDef::required("configuration_name", "Configuration Name", DataType::String),
            coded("traversability_model", "Traversability Model", TRAVERSABILITY_MODEL),
            ParameterDef::required("terminals", "Terminals", DataType::ValueTable),
            value_table("valid_paths", "Valid Paths"),
            text("default_path", "Default Path"),
            OUT_UTILITY_NETWORK,
        ],
    },
    ToolDef {
        toolbox: UN,
        name: "SetTerminalConfiguration",
        label: "Set Terminal Configuration",
        summary: "Assigns a terminal configuration to an asset type.",
        parameters: &[
            IN_UTILITY_NETWORK,
            DOMAIN_NETWORK,
            TABLE,
            ASSET_GROUP,
            ASSET_TYPE,
            ParameterDef::required("terminal_configuration", "Terminal Configuration", DataType::String),
            OUT_UTILITY_NETWORK,
        ],
    },
    ToolDef {
        toolbox: UN,
        name: "SetAssociationRole",
        label: "Set Association Role",
        summary: "Sets whether an asset type acts as a container or structure.",
        parameters: &[
            IN_UTILITY_NETWORK,
            DOMAIN_NETWORK,
            TABLE,
            ASSET_GROUP,
            ASSET_TYPE,
            coded("association_role_type", "Association Role Type", ASSOCIATION_ROLE),
            ParameterDef::optional("container_view_scale", "Container View Scale", DataType::Double)
                .with_domain(Domain::Range { min: 0.0, max: 1.0e9 }),
            ParameterDef::choice("deletion_type", "Deletion Type", DELETION_TYPE, "NONE"),
            OUT_UTILITY_NETWORK,
        ],
    },
    ToolDef {
        toolbox: UN,
        name: "SetEdgeConnectivity",
        label: "Set Edge Connectivity",
        summary: "Sets where an edge asset type may connect to other features.",
        parameters: &[
            IN_UTILITY_NETWORK,
            DOMAIN_NETWORK,
            TABLE,
            ASSET_GROUP,
            ASSET_TYPE,
            coded("edge_connectivity_policy", "Edge Connectivity Policy", EDGE_CONNECTIVITY_POLICY),
            OUT_UTILITY_NETWORK,
        ],
    },
    // Rules and associations
    ToolDef {
        toolbox: UN,
        name: "AddRule",
        label: "Add Rule",
        summary: "Adds a connectivity, containment or attachment rule.",
        parameters: RULE_PARAMETERS,
    },
    ToolDef {
        toolbox: UN,
        name: "DeleteRule",
        label: "Delete Rule",
        summary: "Deletes a connectivity, containment or attachment rule.",
        parameters: RULE_PARAMETERS,
    },
    ToolDef {
        toolbox: UN,
        name: "ImportRules",
        label: "Import Rules",
        summary: "Adds rules from a CSV file.",
        parameters: &[
            IN_UTILITY_NETWORK,
            ParameterDef::required("rules_csv", "Rules CSV", DataType::File),
            OUT_UTILITY_NETWORK,
        ],
    },
    ToolDef {
        toolbox: UN,
        name: "ExportRules",
        label: "Export Rules",
        summary: "Writes the rules of a utility network to a CSV file.",
        parameters: &[
            IN_UTILITY_NETWORK,
            ParameterDef::required("output_file", "Output CSV File", DataType::File).output(),
        ],
    },
    ToolDef {
        toolbox: UN,
        name: "ImportAssociations",
        label: "Import Associations",
        summary: "Creates associations between network features from a CSV file.",
        parameters: &[
            IN_UTILITY_NETWORK,
            ParameterDef::required("association_csv", "Association CSV", DataType::File),
            OUT_UTILITY_NETWORK,
        ],
    },
];

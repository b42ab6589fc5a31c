//! Network Diagram toolbox (`nd`).

use super::shared::{
    ACCESS_RIGHT, DEGREE_OF_FREEDOM, INCLUDE_DOMAIN_DESCRIPTIONS, IN_NETWORK_DIAGRAM_LAYER,
    IN_UTILITY_NETWORK, OUT_NETWORK_DIAGRAM_LAYER, OUT_UTILITY_NETWORK, PRESERVE_CONTAINER_LAYOUT,
    RUN_ASYNC, TEMPLATE_NAME, TREE_DIRECTION,
};
use crate::domain::model::{CodedValue, DataType, Domain, Literal, ParameterDef, ToolDef, Toolbox};

const ND: Toolbox = Toolbox::NetworkDiagram;

const fn distance(name: &'static str, display_name: &'static str, default: &'static str) -> ParameterDef {
    ParameterDef::optional(name, display_name, DataType::LinearUnit).with_default(Literal::Text(default))
}

const fn count(name: &'static str, display_name: &'static str, default: i64, max: f64) -> ParameterDef {
    ParameterDef::optional(name, display_name, DataType::Long)
        .with_default(Literal::Long(default))
        .with_domain(Domain::Range { min: 1.0, max })
}

const EXTEND_TYPE: &[CodedValue] = &[
    CodedValue::new("By connectivity", "EXTEND_BY_CONNECTIVITY"),
    CodedValue::new("By attachment", "EXTEND_BY_ATTACHMENT"),
    CodedValue::new("By containment", "EXTEND_BY_CONTAINMENT"),
    CodedValue::new("By traversability", "EXTEND_BY_TRAVERSABILITY"),
];

const FLAG_TYPE: &[CodedValue] = &[
    CodedValue::new("Root junction", "ROOT_JUNCTION"),
    CodedValue::new("End junction", "END_JUNCTION"),
    CodedValue::new("Pivot junction", "PIVOT_JUNCTION"),
    CodedValue::new("Barrier", "BARRIER"),
];

const RADIAL_PLACEMENT: &[CodedValue] = &[
    CodedValue::new("Concentric circles", "CONCENTRIC"),
    CodedValue::new("Spiral", "SPIRAL"),
];

const ALIGNMENT: &[CodedValue] = &[
    CodedValue::new("Top", "ALIGN_TOP"),
    CodedValue::new("Center", "ALIGN_CENTER"),
    CodedValue::new("Bottom", "ALIGN_BOTTOM"),
];

const ENABLE_DIAGRAM_STORAGE: ParameterDef = ParameterDef::flag(
    "enable_diagram_storage",
    "Enable network diagram storage",
    "ENABLE_DIAGRAM_STORAGE",
    "DISABLE_DIAGRAM_STORAGE",
    true,
);

const ENABLE_DIAGRAM_EXTEND: ParameterDef = ParameterDef::flag(
    "enable_diagram_extend",
    "Enable network diagram extension",
    "ENABLE_DIAGRAM_EXTEND",
    "DISABLE_DIAGRAM_EXTEND",
    true,
);

pub static TOOLS: &[ToolDef] = &[
    // Diagrams
    ToolDef {
        toolbox: ND,
        name: "CreateDiagram",
        label: "Create Diagram",
        summary: "Creates a temporary network diagram from a set of network features.",
        parameters: &[
            IN_UTILITY_NETWORK,
            TEMPLATE_NAME,
            ParameterDef::required("in_features", "Input Features", DataType::FeatureLayer).multi(),
            OUT_NETWORK_DIAGRAM_LAYER,
        ],
    },
    ToolDef {
        toolbox: ND,
        name: "AppendToDiagram",
        label: "Append To Diagram",
        summary: "Appends network features to an existing network diagram.",
        parameters: &[
            IN_NETWORK_DIAGRAM_LAYER,
            ParameterDef::required("in_features", "Input Features", DataType::FeatureLayer).multi(),
            OUT_NETWORK_DIAGRAM_LAYER,
        ],
    },
    ToolDef {
        toolbox: ND,
        name: "ExtendDiagram",
        label: "Extend Diagram",
        summary: "Extends a network diagram with the network features connected to its content.",
        parameters: &[
            IN_NETWORK_DIAGRAM_LAYER,
            ParameterDef::choice("extend_type", "Extend By", EXTEND_TYPE, "EXTEND_BY_CONNECTIVITY").multi(),
            ParameterDef::flag(
                "extend_once",
                "Extend only one level",
                "EXTEND_ONCE",
                "EXTEND_RECURSIVELY",
                true,
            ),
            OUT_NETWORK_DIAGRAM_LAYER,
        ],
    },
    ToolDef {
        toolbox: ND,
        name: "UpdateDiagram",
        label: "Update Diagram",
        summary: "Synchronizes a network diagram with the current state of the network.",
        parameters: &[IN_NETWORK_DIAGRAM_LAYER, OUT_NETWORK_DIAGRAM_LAYER],
    },
    ToolDef {
        toolbox: ND,
        name: "StoreDiagram",
        label: "Store Diagram",
        summary: "Stores a temporary network diagram in the database under a name.",
        parameters: &[
            IN_NETWORK_DIAGRAM_LAYER,
            ParameterDef::required("diagram_name", "Diagram Name", DataType::String),
            ParameterDef::choice("access_right_type", "Access Right", ACCESS_RIGHT, "PUBLIC"),
            OUT_NETWORK_DIAGRAM_LAYER,
        ],
    },
    ToolDef {
        toolbox: ND,
        name: "DeleteDiagram",
        label: "Delete Diagram",
        summary: "Deletes stored network diagrams.",
        parameters: &[
            IN_UTILITY_NETWORK,
            ParameterDef::required("diagram_name", "Diagram Names", DataType::String).multi(),
            OUT_UTILITY_NETWORK,
        ],
    },
    ToolDef {
        toolbox: ND,
        name: "MakeDiagramLayer",
        label: "Make Diagram Layer",
        summary: "Creates a network diagram layer from a stored network diagram.",
        parameters: &[
            IN_UTILITY_NETWORK,
            ParameterDef::required("diagram_name", "Diagram Name", DataType::String),
            ParameterDef::optional("out_layer_name", "Output Layer Name", DataType::String),
            OUT_NETWORK_DIAGRAM_LAYER,
        ],
    },
    ToolDef {
        toolbox: ND,
        name: "ExportDiagramContent",
        label: "Export Diagram Content",
        summary: "Exports the features and associations of a network diagram to a JSON file.",
        parameters: &[
            IN_NETWORK_DIAGRAM_LAYER,
            ParameterDef::required("output_json", "Output JSON File", DataType::File).output(),
            ParameterDef::flag(
                "include_aggregations",
                "Include aggregations",
                "INCLUDE_AGGREGATIONS",
                "EXCLUDE_AGGREGATIONS",
                false,
            ),
            ParameterDef::flag(
                "include_diagram_properties",
                "Include diagram properties",
                "INCLUDE_DIAGRAM_PROPERTIES",
                "EXCLUDE_DIAGRAM_PROPERTIES",
                false,
            ),
            ParameterDef::flag(
                "include_geometries",
                "Include geometries",
                "INCLUDE_GEOMETRIES",
                "EXCLUDE_GEOMETRIES",
                true,
            ),
            INCLUDE_DOMAIN_DESCRIPTIONS,
        ],
    },
    ToolDef {
        toolbox: ND,
        name: "ClearFlags",
        label: "Clear Flags",
        summary: "Removes layout flags of one type from a network diagram.",
        parameters: &[
            IN_NETWORK_DIAGRAM_LAYER,
            ParameterDef::choice("flag_type", "Flag Type", FLAG_TYPE, "ROOT_JUNCTION"),
            OUT_NETWORK_DIAGRAM_LAYER,
        ],
    },
    // Templates
    ToolDef {
        toolbox: ND,
        name: "CreateDiagramTemplate",
        label: "Create Diagram Template",
        summary: "Creates an empty diagram template on a utility network.",
        parameters: &[
            IN_UTILITY_NETWORK,
            TEMPLATE_NAME,
            ParameterDef::optional("template_description", "Template Description", DataType::String),
            ENABLE_DIAGRAM_STORAGE,
            ENABLE_DIAGRAM_EXTEND,
            OUT_UTILITY_NETWORK,
        ],
    },
    ToolDef {
        toolbox: ND,
        name: "DeleteDiagramTemplate",
        label: "Delete Diagram Template",
        summary: "Deletes diagram templates and the diagrams built from them.",
        parameters: &[
            IN_UTILITY_NETWORK,
            ParameterDef::required("template_name", "Template Names", DataType::String).multi(),
            OUT_UTILITY_NETWORK,
        ],
    },
    ToolDef {
        toolbox: ND,
        name: "ExportDiagramTemplateDefinitions",
        label: "Export Diagram Template Definitions",
        summary: "Exports the rule and layout definitions of a diagram template to a folder.",
        parameters: &[
            IN_UTILITY_NETWORK,
            TEMPLATE_NAME,
            ParameterDef::required("output_folder", "Output Folder", DataType::Folder).output(),
        ],
    },
    ToolDef {
        toolbox: ND,
        name: "ImportDiagramTemplateDefinitions",
        label: "Import Diagram Template Definitions",
        summary: "Creates or replaces a diagram template from exported definition files.",
        parameters: &[
            IN_UTILITY_NETWORK,
            TEMPLATE_NAME,
            ParameterDef::required("in_template_definitions", "Template Definitions File", DataType::File),
            ParameterDef::optional("in_layer_definition", "Layer Definition File", DataType::File),
            ENABLE_DIAGRAM_STORAGE,
            ENABLE_DIAGRAM_EXTEND,
            OUT_UTILITY_NETWORK,
        ],
    },
    ToolDef {
        toolbox: ND,
        name: "ExportDiagramLayerDefinition",
        label: "Export Diagram Layer Definition",
        summary: "Exports the layer definition of a diagram template to a layer file.",
        parameters: &[
            IN_UTILITY_NETWORK,
            TEMPLATE_NAME,
            ParameterDef::required("output_layer_file", "Output Layer File", DataType::File).output(),
        ],
    },
    ToolDef {
        toolbox: ND,
        name: "ImportDiagramLayerDefinition",
        label: "Import Diagram Layer Definition",
        summary: "Replaces the layer definition of a diagram template from a layer file.",
        parameters: &[
            IN_UTILITY_NETWORK,
            TEMPLATE_NAME,
            ParameterDef::required("input_layer_file", "Input Layer File", DataType::File),
            OUT_UTILITY_NETWORK,
        ],
    },
    // Layouts
    ToolDef {
        toolbox: ND,
        name: "ApplyAngleDirectedLayout",
        label: "Apply Angle Directed Layout",
        summary: "Places diagram content so that edges follow a small set of directions.",
        parameters: &[
            IN_NETWORK_DIAGRAM_LAYER,
            PRESERVE_CONTAINER_LAYOUT,
            ParameterDef::flag("break_edges", "Break edges", "BREAK_EDGES", "DO_NOT_BREAK_EDGES", false),
            distance("edge_length", "Edge Length", "1 Unknown"),
            count("number_iterations", "Number of Iterations", 20, 1000.0),
            RUN_ASYNC,
            OUT_NETWORK_DIAGRAM_LAYER,
        ],
    },
    ToolDef {
        toolbox: ND,
        name: "ApplyCompressionLayout",
        label: "Apply Compression Layout",
        summary: "Shrinks the empty space of a diagram while keeping its topology.",
        parameters: &[
            IN_NETWORK_DIAGRAM_LAYER,
            PRESERVE_CONTAINER_LAYOUT,
            ParameterDef::optional("compression_ratio", "Compression Ratio (%)", DataType::Double)
                .with_default(Literal::Double(50.0))
                .with_domain(Domain::Range { min: 0.0, max: 100.0 }),
            distance("minimal_distance", "Minimal Distance", "2 Unknown"),
            RUN_ASYNC,
            OUT_NETWORK_DIAGRAM_LAYER,
        ],
    },
    ToolDef {
        toolbox: ND,
        name: "ApplyForceDirectedLayout",
        label: "Apply Force Directed Layout",
        summary: "Spreads diagram content using repulsion between junctions and attraction along edges.",
        parameters: &[
            IN_NETWORK_DIAGRAM_LAYER,
            PRESERVE_CONTAINER_LAYOUT,
            count("number_iterations", "Number of Iterations", 20, 1000.0),
            ParameterDef::optional("repel_factor", "Repel Factor", DataType::Long)
                .with_default(Literal::Long(1))
                .with_domain(Domain::Range { min: -9.0, max: 9.0 }),
            ParameterDef::choice("degree_freedom", "Degree of Freedom", DEGREE_OF_FREEDOM, "MEDIUM"),
            RUN_ASYNC,
            OUT_NETWORK_DIAGRAM_LAYER,
        ],
    },
    ToolDef {
        toolbox: ND,
        name: "ApplyGeoPositionsLayout",
        label: "Apply Geo Positions Layout",
        summary: "Moves diagram content back to the geographic positions of the network features.",
        parameters: &[
            IN_NETWORK_DIAGRAM_LAYER,
            PRESERVE_CONTAINER_LAYOUT,
            ParameterDef::flag("reset_vertices", "Reset edge vertices", "RESET_VERTICES", "KEEP_VERTICES", true),
            RUN_ASYNC,
            OUT_NETWORK_DIAGRAM_LAYER,
        ],
    },
    ToolDef {
        toolbox: ND,
        name: "ApplyGridLayout",
        label: "Apply Grid Layout",
        summary: "Snaps diagram junctions onto the cells of a regular grid.",
        parameters: &[
            IN_NETWORK_DIAGRAM_LAYER,
            PRESERVE_CONTAINER_LAYOUT,
            distance("cell_size", "Grid Cell Size", "1 Unknown"),
            ParameterDef::flag(
                "optimize_edges",
                "Optimize edges",
                "OPTIMIZE_EDGES",
                "DO_NOT_OPTIMIZE_EDGES",
                false,
            ),
            RUN_ASYNC,
            OUT_NETWORK_DIAGRAM_LAYER,
        ],
    },
    ToolDef {
        toolbox: ND,
        name: "ApplyLinearDispatchLayout",
        label: "Apply Linear Dispatch Layout",
        summary: "Distributes junctions placed along edges at regular intervals.",
        parameters: &[
            IN_NETWORK_DIAGRAM_LAYER,
            PRESERVE_CONTAINER_LAYOUT,
            distance("minimal_distance", "Minimal Distance", "1 Unknown"),
            RUN_ASYNC,
            OUT_NETWORK_DIAGRAM_LAYER,
        ],
    },
    ToolDef {
        toolbox: ND,
        name: "ApplyMainlineTreeLayout",
        label: "Apply Mainline Tree Layout",
        summary: "Arranges a tree along a main line with its branches on both sides.",
        parameters: &[
            IN_NETWORK_DIAGRAM_LAYER,
            PRESERVE_CONTAINER_LAYOUT,
            ParameterDef::choice("mainline_direction", "Mainline Direction", TREE_DIRECTION, "FROM_LEFT_TO_RIGHT"),
            distance("mainline_spacing", "Spacing Along the Main Line", "2 Unknown"),
            distance("branch_spacing", "Spacing Between Branches", "2 Unknown"),
            RUN_ASYNC,
            OUT_NETWORK_DIAGRAM_LAYER,
        ],
    },
    ToolDef {
        toolbox: ND,
        name: "ApplyMainRingLayout",
        label: "Apply Main Ring Layout",
        summary: "Places the main cycle of a diagram on a ring and its trees around it.",
        parameters: &[
            IN_NETWORK_DIAGRAM_LAYER,
            PRESERVE_CONTAINER_LAYOUT,
            ParameterDef::choice("tree_direction", "Tree Direction", TREE_DIRECTION, "FROM_TOP_TO_BOTTOM"),
            distance("ring_spacing", "Spacing Between Ring Junctions", "1 Unknown"),
            distance("tree_spacing", "Spacing Between Tree Junctions", "1 Unknown"),
            RUN_ASYNC,
            OUT_NETWORK_DIAGRAM_LAYER,
        ],
    },
    ToolDef {
        toolbox: ND,
        name: "ApplyPartialOverlappingEdgesLayout",
        label: "Apply Partial Overlapping Edges Layout",
        summary: "Offsets edges whose segments partially overlap.",
        parameters: &[
            IN_NETWORK_DIAGRAM_LAYER,
            PRESERVE_CONTAINER_LAYOUT,
            distance("edges_offset", "Offset Between Edges", "0.2 Unknown"),
            ParameterDef::flag(
                "optimize_edges",
                "Optimize edges",
                "OPTIMIZE_EDGES",
                "DO_NOT_OPTIMIZE_EDGES",
                true,
            ),
            RUN_ASYNC,
            OUT_NETWORK_DIAGRAM_LAYER,
        ],
    },
    ToolDef {
        toolbox: ND,
        name: "ApplyRadialTreeLayout",
        label: "Apply Radial Tree Layout",
        summary: "Places a tree on circles centered on its root junction.",
        parameters: &[
            IN_NETWORK_DIAGRAM_LAYER,
            PRESERVE_CONTAINER_LAYOUT,
            ParameterDef::choice("placement", "Placement", RADIAL_PLACEMENT, "CONCENTRIC"),
            distance("circle_spacing", "Spacing Between Circles", "2 Unknown"),
            ParameterDef::flag("clockwise", "Clockwise", "CLOCKWISE", "COUNTERCLOCKWISE", true),
            RUN_ASYNC,
            OUT_NETWORK_DIAGRAM_LAYER,
        ],
    },
    ToolDef {
        toolbox: ND,
        name: "ApplyReduceVerticesLayout",
        label: "Apply Reduce Vertices Layout",
        summary: "Removes edge vertices that do not change an edge's direction.",
        parameters: &[
            IN_NETWORK_DIAGRAM_LAYER,
            PRESERVE_CONTAINER_LAYOUT,
            ParameterDef::flag(
                "keep_orthogonal_vertices",
                "Keep orthogonal vertices",
                "KEEP_ORTHOGONAL_VERTICES",
                "REMOVE_ORTHOGONAL_VERTICES",
                false,
            ),
            RUN_ASYNC,
            OUT_NETWORK_DIAGRAM_LAYER,
        ],
    },
    ToolDef {
        toolbox: ND,
        name: "ApplyRelativeMainlineLayout",
        label: "Apply Relative Mainline Layout",
        summary: "Straightens a main line and places branches relative to it.",
        parameters: &[
            IN_NETWORK_DIAGRAM_LAYER,
            PRESERVE_CONTAINER_LAYOUT,
            ParameterDef::choice("mainline_direction", "Mainline Direction", TREE_DIRECTION, "FROM_LEFT_TO_RIGHT"),
            distance("branch_spacing", "Spacing Between Branches", "1 Unknown"),
            RUN_ASYNC,
            OUT_NETWORK_DIAGRAM_LAYER,
        ],
    },
    ToolDef {
        toolbox: ND,
        name: "ApplyRotateTreeLayout",
        label: "Apply Rotate Tree Layout",
        summary: "Rotates the subtrees hanging from flagged pivot junctions.",
        parameters: &[
            IN_NETWORK_DIAGRAM_LAYER,
            PRESERVE_CONTAINER_LAYOUT,
            ParameterDef::optional("rotation_angle", "Rotation Angle", DataType::Double)
                .with_default(Literal::Double(90.0))
                .with_domain(Domain::Range { min: -360.0, max: 360.0 }),
            RUN_ASYNC,
            OUT_NETWORK_DIAGRAM_LAYER,
        ],
    },
    ToolDef {
        toolbox: ND,
        name: "ApplySeparateOverlappingEdgesLayout",
        label: "Apply Separate Overlapping Edges Layout",
        summary: "Separates edges that fully overlap between the same junctions.",
        parameters: &[
            IN_NETWORK_DIAGRAM_LAYER,
            PRESERVE_CONTAINER_LAYOUT,
            distance("edges_offset", "Offset Between Edges", "1 Unknown"),
            distance("junction_offset", "Offset From Junctions", "1 Unknown"),
            ParameterDef::flag(
                "optimize_edges",
                "Optimize edges",
                "OPTIMIZE_EDGES",
                "DO_NOT_OPTIMIZE_EDGES",
                false,
            ),
            RUN_ASYNC,
            OUT_NETWORK_DIAGRAM_LAYER,
        ],
    },
    ToolDef {
        toolbox: ND,
        name: "ApplySmartTreeLayout",
        label: "Apply Smart Tree Layout",
        summary: "Places a tree hierarchically from its root junctions.",
        parameters: &[
            IN_NETWORK_DIAGRAM_LAYER,
            PRESERVE_CONTAINER_LAYOUT,
            ParameterDef::choice("tree_direction", "Tree Direction", TREE_DIRECTION, "FROM_TOP_TO_BOTTOM"),
            distance("junction_spacing", "Spacing Between Junctions", "1 Unknown"),
            distance("level_spacing", "Spacing Between Levels", "2 Unknown"),
            ParameterDef::choice("alignment", "Alignment", ALIGNMENT, "ALIGN_CENTER"),
            RUN_ASYNC,
            OUT_NETWORK_DIAGRAM_LAYER,
        ],
    },
    ToolDef {
        toolbox: ND,
        name: "ApplySpatialDispatchLayout",
        label: "Apply Spatial Dispatch Layout",
        summary: "Moves overlapping junctions apart around their original positions.",
        parameters: &[
            IN_NETWORK_DIAGRAM_LAYER,
            PRESERVE_CONTAINER_LAYOUT,
            distance("dispatch_distance", "Dispatch Distance", "1 Unknown"),
            ParameterDef::flag(
                "keep_edge_directions",
                "Keep edge directions",
                "KEEP_EDGE_DIRECTIONS",
                "IGNORE_EDGE_DIRECTIONS",
                false,
            ),
            RUN_ASYNC,
            OUT_NETWORK_DIAGRAM_LAYER,
        ],
    },
];

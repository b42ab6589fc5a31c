use gp_catalog::domain::model::{DataType, Direction, Domain, Literal, Requirement, Toolbox};
use gp_catalog::Catalog;
use std::collections::HashSet;

fn names(tool: &str) -> Vec<&'static str> {
    Catalog::new()
        .find(tool)
        .unwrap()
        .parameters
        .iter()
        .map(|p| p.name)
        .collect()
}

#[test]
fn test_catalog_covers_both_toolboxes() {
    let catalog = Catalog::new();
    assert_eq!(catalog.toolbox(Toolbox::NetworkDiagram).len(), 31);
    assert_eq!(catalog.toolbox(Toolbox::UtilityNetwork).len(), 28);
    assert_eq!(catalog.len(), 59);

    let execute_names: HashSet<String> = catalog.tools().map(|t| t.execute_name()).collect();
    assert_eq!(execute_names.len(), catalog.len());
}

#[test]
fn test_parameter_order_matches_signatures() {
    assert_eq!(
        names("nd.ApplyForceDirectedLayout"),
        vec![
            "in_network_diagram_layer",
            "preserve_container_layout",
            "number_iterations",
            "repel_factor",
            "degree_freedom",
            "run_async",
            "out_network_diagram_layer",
        ]
    );
    assert_eq!(
        names("nd.StoreDiagram"),
        vec![
            "in_network_diagram_layer",
            "diagram_name",
            "access_right_type",
            "out_network_diagram_layer",
        ]
    );
    assert_eq!(
        &names("un.Trace")[..4],
        &["in_utility_network", "trace_type", "starting_points", "barriers"]
    );
    assert_eq!(
        names("un.AddRule"),
        names("un.DeleteRule"),
        "AddRule and DeleteRule share a signature"
    );
}

#[test]
fn test_parameter_names_unique_within_tool() {
    for tool in Catalog::new().tools() {
        let mut seen = HashSet::new();
        for param in tool.parameters {
            assert!(seen.insert(param.name), "{} repeats {}", tool.execute_name(), param.name);
        }
    }
}

#[test]
fn test_required_parameters_come_first() {
    for tool in Catalog::new().tools() {
        let mut optional_seen = false;
        for param in tool.input_parameters() {
            match param.requirement {
                Requirement::Optional => optional_seen = true,
                Requirement::Required => assert!(
                    !optional_seen,
                    "{}: required {} follows an optional parameter",
                    tool.execute_name(),
                    param.name
                ),
                Requirement::Derived => unreachable!(),
            }
        }
    }
}

#[test]
fn test_derived_parameters_are_outputs_without_defaults() {
    for tool in Catalog::new().tools() {
        for param in tool.parameters.iter().filter(|p| p.is_derived()) {
            assert_eq!(param.direction, Direction::Output, "{}", tool.execute_name());
            assert!(param.default.is_none(), "{}", tool.execute_name());
        }
    }
}

#[test]
fn test_coded_domains_round_trip() {
    for tool in Catalog::new().tools() {
        for param in tool.parameters {
            if let Some(domain @ Domain::Coded { values }) = &param.domain {
                for value in values.iter() {
                    assert_eq!(domain.token_for(value.label), Some(value.token));
                    assert_eq!(domain.label_for(value.token), Some(value.label));
                    assert_eq!(domain.token_for(&value.token.to_lowercase()), Some(value.token));
                }
            }
        }
    }
}

#[test]
fn test_booleans_carry_keyword_domains() {
    for tool in Catalog::new().tools() {
        for param in tool.parameters.iter().filter(|p| p.data_type == DataType::Boolean) {
            let Some(domain @ Domain::Boolean { on, off }) = &param.domain else {
                panic!("{}.{} has no keyword domain", tool.execute_name(), param.name);
            };
            assert_ne!(on, off);
            assert_eq!(domain.token_for("true"), Some(*on));
            assert_eq!(domain.token_for("false"), Some(*off));
            assert!(matches!(param.default, Some(Literal::Bool(_))));
        }
    }
}

#[test]
fn test_defaults_belong_to_their_domains() {
    for tool in Catalog::new().tools() {
        for param in tool.parameters {
            let (Some(default), Some(domain)) = (param.default, &param.domain) else {
                continue;
            };
            match (domain, default) {
                (Domain::Coded { .. }, Literal::Text(token)) => {
                    assert!(domain.tokens().contains(&token), "{}.{}", tool.execute_name(), param.name)
                }
                (Domain::Range { .. }, Literal::Long(n)) => assert!(domain.contains(n as f64)),
                (Domain::Range { .. }, Literal::Double(x)) => assert!(domain.contains(x)),
                (Domain::Boolean { .. }, Literal::Bool(_)) => {}
                other => panic!("{}.{}: mismatched default {:?}", tool.execute_name(), param.name, other),
            }
        }
    }
}

#[test]
fn test_documented_defaults() {
    let catalog = Catalog::new();
    let default = |tool: &str, param: &str| {
        catalog
            .find(tool)
            .unwrap()
            .parameter(param)
            .and_then(|p| p.default_wire_value())
    };

    assert_eq!(default("ApplyForceDirectedLayout", "number_iterations").as_deref(), Some("20"));
    assert_eq!(default("ApplyForceDirectedLayout", "degree_freedom").as_deref(), Some("MEDIUM"));
    assert_eq!(default("ApplyCompressionLayout", "compression_ratio").as_deref(), Some("50"));
    assert_eq!(default("ApplySmartTreeLayout", "tree_direction").as_deref(), Some("FROM_TOP_TO_BOTTOM"));
    assert_eq!(default("ApplyGridLayout", "run_async").as_deref(), Some("RUN_SYNCHRONOUSLY"));
    assert_eq!(default("StoreDiagram", "access_right_type").as_deref(), Some("PUBLIC"));
    assert_eq!(default("EnableNetworkTopology", "max_errors").as_deref(), Some("10000"));
    assert_eq!(default("Trace", "include_barriers").as_deref(), Some("INCLUDE_BARRIERS"));
    assert_eq!(default("Trace", "trace_type"), None);
}

#[test]
fn test_required_flags() {
    let catalog = Catalog::new();
    let trace = catalog.find("un.Trace").unwrap();
    let required: Vec<&str> = trace
        .input_parameters()
        .filter(|p| p.is_required())
        .map(|p| p.name)
        .collect();
    assert_eq!(required, vec!["in_utility_network", "trace_type"]);

    let create = catalog.find("nd.CreateDiagram").unwrap();
    assert!(create.parameters.iter().take(3).all(|p| p.is_required()));
    assert!(create.parameter("in_features").unwrap().multi_value);
}

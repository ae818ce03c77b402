use flowdiff_graph::{stratify, Endpoint, GraphDocument, GraphError};
use pretty_assertions::assert_eq;

fn resource(name: &str) -> String {
    let path = format!("{}/tests/resources/{}", env!("CARGO_MANIFEST_DIR"), name);
    std::fs::read_to_string(&path).unwrap_or_else(|e| panic!("cannot read {}: {}", path, e))
}

#[test]
fn test_parse_preserves_source_order() {
    let graph = GraphDocument::parse(&resource("order_pipeline.json")).unwrap();

    let ids: Vec<&str> = graph.nodes().iter().map(|node| node.id.as_str()).collect();
    assert_eq!(ids, vec!["ingest", "validate", "enrich", "store"]);

    let edges: Vec<(&str, &str)> = graph.connections().iter().map(|c| c.key()).collect();
    assert_eq!(
        edges,
        vec![("ingest", "validate"), ("validate", "enrich"), ("enrich", "store")]
    );

    let attribute_keys: Vec<&str> = graph.nodes()[0].data.keys().map(String::as_str).collect();
    assert_eq!(attribute_keys, vec!["name", "component", "config"]);

    assert_eq!(graph.parameters().unwrap()["retries"], 3);
    assert!(graph.nodes().iter().all(|node| node.status.is_none()));
}

#[test]
fn test_node_and_connection_counts_match_source() {
    for n in 0..6 {
        let nodes: Vec<String> = (0..n).map(|i| format!("\"n{}\": {{\"name\": \"N{}\"}}", i, i)).collect();
        let connections: Vec<String> = (1..n)
            .map(|i| {
                format!(
                    "{{\"sourcePort\": {{\"node\": \"n{}\"}}, \"targetPort\": {{\"node\": \"n{}\"}}}}",
                    i - 1,
                    i
                )
            })
            .collect();
        let json = format!(
            "{{\"nodes\": {{{}}}, \"connections\": [{}], \"parameters\": null}}",
            nodes.join(","),
            connections.join(",")
        );

        let graph = GraphDocument::parse(&json).unwrap();
        assert_eq!(graph.nodes().len(), n);
        assert_eq!(graph.connections().len(), n.saturating_sub(1));
    }
}

#[test]
fn test_invalid_source_port() {
    let err = GraphDocument::parse(&resource("invalid_source_port.json")).unwrap_err();
    assert_eq!(err.to_string(), "Not valid source port");

    match err {
        GraphError::DanglingEndpoint { endpoint, node_id, index } => {
            assert_eq!(endpoint, Endpoint::Source);
            assert_eq!(node_id, "missing");
            assert_eq!(index, 1);
        }
        err => panic!("Expected DanglingEndpoint, got {:?}", err),
    }
}

#[test]
fn test_invalid_target_port() {
    let err = GraphDocument::parse(&resource("invalid_target_port.json")).unwrap_err();
    assert_eq!(err.to_string(), "Not valid target port");
    assert_eq!(err.error_code(), "ERR_GRAPH_DANGLING_TARGET");
}

#[test]
fn test_not_json() {
    let err = GraphDocument::parse("this is not json").unwrap_err();
    assert_eq!(err.to_string(), "Not a valid JSON string");
    assert!(std::error::Error::source(&err).is_some());
}

#[test]
fn test_missing_parameters() {
    let err = GraphDocument::parse(r#"{"nodes": {}, "connections": []}"#).unwrap_err();
    assert_eq!(err.to_string(), "JSON file is not formatted correctly");
}

#[test]
fn test_connection_may_reference_a_later_node_key() {
    // All nodes are materialized before any connection is checked.
    let json = r#"{
        "nodes": {"first": {}, "second": {}},
        "connections": [{"sourcePort": {"node": "second"}, "targetPort": {"node": "first"}}],
        "parameters": {}
    }"#;
    let graph = GraphDocument::parse(json).unwrap();
    assert_eq!(graph.connections()[0].key(), ("second", "first"));
}

#[test]
fn test_stratify_parsed_pipeline() {
    let graph = GraphDocument::parse(&resource("order_pipeline.json")).unwrap();
    let forest = stratify(&graph);

    assert_eq!(forest.len(), 1);
    assert_eq!(
        forest[0].node_ids_preorder(),
        vec!["ingest", "validate", "enrich", "store"]
    );
    assert_eq!(forest[0].layout_size(), (4, 1));
}

//! Unit tests for NodeQuery
//!
//! These tests verify the fluent query interface for finding nodes.

use nodegraph::{Graph, NodeIndex, RelationType};

// api -calls-> auth, api -calls-> db, auth -calls-> db, worker -> db
fn service_graph() -> (Graph, [NodeIndex; 4]) {
    let mut graph = Graph::new();
    let api = graph.add_node("svc-api", "Public API");
    let auth = graph.add_node("svc-auth", "Auth Service");
    let db = graph.add_node("store-db", "Database");
    let worker = graph.add_node("job-worker", "Background worker");

    graph.add_category(api, "service").unwrap();
    graph.add_category(api, "public").unwrap();
    graph.add_category(auth, "service").unwrap();
    graph.add_category(db, "storage").unwrap();

    let calls = RelationType::named("calls");
    graph.new_edge_with_type(calls.clone(), "login", api, auth).unwrap();
    graph.new_edge_with_type(calls.clone(), "read", api, db).unwrap();
    graph.new_edge_with_type(calls, "lookup", auth, db).unwrap();
    graph.new_edge("poll", worker, db).unwrap();

    (graph, [api, auth, db, worker])
}

#[test]
fn test_query_builder_category_filter() {
    let (graph, [api, auth, _, _]) = service_graph();

    let results = graph.query().category("service").execute();

    assert_eq!(results, vec![api, auth]);
}

#[test]
fn test_query_builder_label_contains_ignores_case() {
    let (graph, [api, auth, _, _]) = service_graph();

    assert_eq!(graph.query().label_contains("API").execute(), vec![api]);
    assert_eq!(graph.find_nodes("service"), vec![auth]);
}

#[test]
fn test_query_builder_exact_label_and_pattern() {
    let (graph, [_, _, db, worker]) = service_graph();

    assert_eq!(graph.query().label("Database").execute(), vec![db]);
    assert!(graph.query().label("database").execute().is_empty());
    assert_eq!(graph.query().label_matches("^Back").execute(), vec![worker]);
    assert_eq!(graph.query().label_matches("base$").execute(), vec![db]);
    assert_eq!(graph.query().label_matches("^Database$").execute(), vec![db]);
}

#[test]
fn test_query_builder_id_prefix() {
    let (graph, [api, auth, _, _]) = service_graph();

    assert_eq!(graph.query().id_prefix("svc-").execute(), vec![api, auth]);
}

#[test]
fn test_query_builder_degree_filters() {
    let (graph, [api, auth, db, _]) = service_graph();

    assert_eq!(graph.query().min_out_degree(2).execute(), vec![api]);
    assert_eq!(graph.query().min_in_degree(3).execute(), vec![db]);
    assert_eq!(
        graph.query().min_in_degree(1).execute(),
        vec![db, auth]
    );
}

#[test]
fn test_query_builder_relation_filter() {
    let (graph, [api, auth, _, worker]) = service_graph();

    assert_eq!(graph.query().has_out_relation("calls").execute(), vec![api, auth]);
    assert_eq!(
        graph.query().has_out_relation(RelationType::Default).execute(),
        vec![worker]
    );
}

#[test]
fn test_query_builder_multiple_filters() {
    let (graph, [api, _, _, _]) = service_graph();

    let results = graph
        .query()
        .category("service")
        .category("public")
        .min_out_degree(1)
        .execute();

    assert_eq!(results, vec![api]);
}

#[test]
fn test_query_builder_custom_filter() {
    let (graph, [_, _, db, _]) = service_graph();

    let sinks = graph
        .query()
        .custom(|node| node.out_edges().is_empty())
        .execute();

    assert_eq!(sinks, vec![db]);
}

#[test]
fn test_query_builder_limit_count_exists() {
    let (graph, _) = service_graph();

    assert_eq!(graph.query().limit(2).execute().len(), 2);
    assert_eq!(graph.query().count(), 4);
    assert_eq!(graph.query().category("service").count(), 2);
    assert!(graph.query().category("storage").exists());
    assert!(!graph.query().category("cache").exists());
}

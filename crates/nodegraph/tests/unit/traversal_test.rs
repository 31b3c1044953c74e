//! Unit tests for depth-first and breadth-first walks.
//!
//! Visitors fail on a second visit of the same node, so every walk here also
//! checks that each node is handed to the visitor once.

use crate::common::{tree, tree_for_undirected_walk, tree_with_back_edges, Fixture};
use nodegraph::traversal::{
    breadth_first, breadth_first_with_flags, depth_first, depth_first_with_flags,
    depth_first_with_post,
};
use nodegraph::{Graph, NodeIndex, TraversalFlags, VisitResult};

const DEPTH_FIRST_ORDER: &[&str] = &[
    "root", "1", "11", "12", "2", "21", "211", "212", "22", "221", "222", "223", "3", "31", "32",
    "33",
];

fn record_once(visited: &mut Vec<NodeIndex>, node: NodeIndex) -> VisitResult {
    if visited.contains(&node) {
        return Err(format!("Double visit of node {node}").into());
    }
    visited.push(node);
    Ok(true)
}

#[test]
fn test_depth_first_without_cycle_and_without_error() {
    let mut fx = tree();
    let mut visited = Vec::new();

    let start = fx.n("root");
    let status = depth_first(&mut fx.graph, start, |_, n, _| record_once(&mut visited, n));

    assert_eq!(visited, fx.all(DEPTH_FIRST_ORDER));
    assert!(!status.has_cycles());
    assert!(!status.has_errors());
}

#[test]
fn test_depth_first_with_cycle_and_without_error() {
    let mut fx = tree_with_back_edges();
    let mut visited = Vec::new();

    let start = fx.n("root");
    let status = depth_first(&mut fx.graph, start, |_, n, _| record_once(&mut visited, n));

    assert_eq!(visited, fx.all(DEPTH_FIRST_ORDER));
    assert!(status.has_cycles());
    assert_eq!(status.cycle_count(), 2);
    assert_eq!(status.cycle_nodes(), &fx.all(&["2", "root"])[..]);
    assert!(!status.has_errors());
}

#[test]
fn test_depth_first_with_cycle_and_with_error() {
    let mut fx = tree_with_back_edges();
    let failing = fx.all(&["223", "33", "212"]);
    let mut visited = Vec::new();

    let start = fx.n("root");
    let status = depth_first(&mut fx.graph, start, |g, n, _| {
        record_once(&mut visited, n)?;
        if failing.contains(&n) {
            return Err(format!("Error for node {}", g.node(n).unwrap()).into());
        }
        Ok(true)
    });

    assert_eq!(visited, fx.all(DEPTH_FIRST_ORDER));
    assert_eq!(status.cycle_count(), 2);
    assert!(status.has_errors());
    assert_eq!(status.error_count(), 3);
    assert_eq!(status.errors()[0].node(), fx.n("212"));
    assert_eq!(status.errors()[0].message(), "Error for node 212(212)");
    assert!(status
        .errors()
        .iter()
        .all(|e| e.message().starts_with("Error for node")));
}

#[test]
fn test_depth_first_stops_at_first_error_without_continue_on_error() {
    let mut fx = tree_with_back_edges();
    let failing = fx.all(&["223", "33", "212"]);
    let mut visited = Vec::new();

    let start = fx.n("root");
    let status = depth_first_with_flags(
        &mut fx.graph,
        start,
        |_, n, _| {
            visited.push(n);
            if failing.contains(&n) {
                return Err("stop here".into());
            }
            Ok(true)
        },
        TraversalFlags::default().with_continue_on_error(false),
    );

    assert_eq!(
        fx.names(&visited),
        vec!["root", "1", "11", "12", "2", "21", "211", "212"]
    );
    assert_eq!(status.error_count(), 1);
    assert_eq!(status.errors()[0].node(), fx.n("212"));
    assert!(!status.has_cycles());
}

#[test]
fn test_depth_first_stops_when_visitor_declines() {
    let mut fx = tree();
    let stop_at = fx.n("21");
    let mut visited = Vec::new();

    let start = fx.n("root");
    let status = depth_first(&mut fx.graph, start, |_, n, _| {
        visited.push(n);
        Ok(n != stop_at)
    });

    assert_eq!(fx.names(&visited), vec!["root", "1", "11", "12", "2", "21"]);
    assert!(!status.has_errors());
}

#[test]
fn test_depth_first_children_in_edge_order() {
    let mut fx = Fixture::new(&["A", "B", "C"], &[("A", "B"), ("A", "C")]);
    let mut visited = Vec::new();

    let start = fx.n("A");
    depth_first(&mut fx.graph, start, |_, n, _| record_once(&mut visited, n));

    assert_eq!(visited, fx.all(&["A", "B", "C"]));
}

#[test]
fn test_depth_first_back_edge_example() {
    // A -> B, A -> C, B -> D, D -> A
    let mut fx = Fixture::new(
        &["A", "B", "C", "D"],
        &[("A", "B"), ("A", "C"), ("B", "D"), ("D", "A")],
    );
    let mut visited = Vec::new();

    let start = fx.n("A");
    let status = depth_first(&mut fx.graph, start, |_, n, _| record_once(&mut visited, n));

    assert_eq!(visited, fx.all(&["A", "B", "D", "C"]));
    assert_eq!(status.cycle_count(), 1);
    assert_eq!(status.cycle_nodes(), &[fx.n("A")]);
}

#[test]
fn test_depth_first_cross_edge_is_not_a_cycle() {
    // Diamond: D is reached a second time after it finished.
    let mut fx = Fixture::new(
        &["A", "B", "C", "D"],
        &[("A", "B"), ("A", "C"), ("B", "D"), ("C", "D")],
    );

    let start = fx.n("A");
    let status = depth_first(&mut fx.graph, start, |_, _, _| Ok(true));
    assert!(!status.has_cycles());

    // C is pushed twice and reached again from E after it finished.
    let mut fx = Fixture::new(
        &["A", "B", "C", "E"],
        &[("A", "B"), ("A", "C"), ("B", "C"), ("B", "E"), ("E", "C")],
    );

    let start = fx.n("A");
    let status = depth_first(&mut fx.graph, start, |_, _, _| Ok(true));
    assert!(!status.has_cycles());
}

#[test]
fn test_depth_first_post_visit_order() {
    let mut fx = Fixture::new(
        &["A", "B", "C", "D"],
        &[("A", "B"), ("A", "C"), ("B", "D"), ("C", "D")],
    );
    let mut pre = Vec::new();
    let mut post = Vec::new();

    let start = fx.n("A");
    depth_first_with_post(
        &mut fx.graph,
        start,
        |_, n, _| {
            pre.push(n);
            Ok(true)
        },
        |_, n, _| {
            post.push(n);
            Ok(true)
        },
        TraversalFlags::default(),
    );

    assert_eq!(pre, fx.all(&["A", "B", "D", "C"]));
    assert_eq!(post, fx.all(&["D", "B", "C", "A"]));
}

#[test]
fn test_depth_first_post_visit_can_stop_and_fail() {
    let mut fx = tree();
    let mut post = Vec::new();

    let start = fx.n("root");
    let status = depth_first_with_post(
        &mut fx.graph,
        start,
        |_, _, _| Ok(true),
        |g, n, _| {
            post.push(n);
            if g.node(n).unwrap().label() == "12" {
                return Err("post failed".into());
            }
            Ok(g.node(n).unwrap().label() != "1")
        },
        TraversalFlags::default(),
    );

    assert_eq!(fx.names(&post), vec!["11", "12", "1"]);
    assert_eq!(status.error_count(), 1);
    assert_eq!(status.errors()[0].node(), fx.n("12"));
}

#[test]
fn test_depth_first_undirected_follows_incoming_edges() {
    let mut fx = Fixture::new(&["A", "B", "C"], &[("A", "B"), ("B", "C")]);
    let mut visited = Vec::new();

    let start = fx.n("C");
    let status = depth_first_with_flags(
        &mut fx.graph,
        start,
        |_, n, _| record_once(&mut visited, n),
        TraversalFlags::new(false, true),
    );

    assert_eq!(visited, fx.all(&["C", "B", "A"]));
    // Each tree edge is seen again from the child side.
    assert_eq!(status.cycle_nodes(), &fx.all(&["C", "B"])[..]);
    assert!(!status.has_errors());
}

#[test]
fn test_depth_first_visitor_may_remove_edges() {
    let mut fx = Fixture::new(&["A", "B", "C"], &[("A", "B"), ("B", "C")]);
    let b = fx.n("B");
    let mut visited = Vec::new();

    let start = fx.n("A");
    let status = depth_first(&mut fx.graph, start, |g, n, _| {
        visited.push(n);
        if n == b {
            let edge = g.out_edges(b)[0];
            g.remove_edge(edge)?;
        }
        Ok(true)
    });

    assert_eq!(visited, fx.all(&["A", "B"]));
    assert!(!status.has_errors());
    assert_eq!(fx.graph.edge_count(), 1);
}

#[test]
fn test_depth_first_over_shared_borrow() {
    let fx = tree();
    let mut view: &Graph = &fx.graph;
    let mut count = 0;

    depth_first(&mut view, fx.n("2"), |_, _, _| {
        count += 1;
        Ok(true)
    });

    assert_eq!(count, 8);
}

#[test]
fn test_breadth_first_without_cycles_and_without_error() {
    let mut fx = tree();
    let mut visited = Vec::new();

    let start = fx.n("root");
    let status = breadth_first(&mut fx.graph, start, |_, n, _| record_once(&mut visited, n));

    assert_eq!(
        fx.names(&visited),
        vec![
            "root", "1", "2", "3", "11", "12", "21", "22", "31", "32", "33", "211", "212", "221",
            "222", "223"
        ]
    );
    assert!(!status.has_cycles());
    assert!(!status.has_errors());
}

#[test]
fn test_breadth_first_directed_does_not_report_cycles() {
    let mut fx = tree_for_undirected_walk();

    let start = fx.n("root");
    let status = breadth_first(&mut fx.graph, start, |_, _, _| Ok(true));

    assert!(!status.has_cycles());
}

#[test]
fn test_breadth_first_with_cycles_and_without_error() {
    let mut fx = tree_for_undirected_walk();
    let mut visited = Vec::new();

    let start = fx.n("root");
    let status = breadth_first_with_flags(
        &mut fx.graph,
        start,
        |_, n, _| record_once(&mut visited, n),
        TraversalFlags::new(false, true),
    );

    assert_eq!(
        fx.names(&visited),
        vec![
            "root", "1", "2", "3", "223", "11", "12", "21", "22", "31", "32", "33", "211", "212",
            "221", "222"
        ]
    );
    assert!(status.has_cycles());
    // Every redundant edge into a seen node counts in an undirected walk.
    assert_eq!(status.cycle_count(), 19);
    assert!(!status.has_errors());
}

#[test]
fn test_breadth_first_with_cycles_and_with_error() {
    let mut fx = tree_for_undirected_walk();
    let failing = fx.all(&["212", "31", "21"]);
    let mut visited = Vec::new();

    let start = fx.n("root");
    let status = breadth_first_with_flags(
        &mut fx.graph,
        start,
        |_, n, _| {
            record_once(&mut visited, n)?;
            if failing.contains(&n) {
                return Err(format!("Error on node: {n}").into());
            }
            Ok(true)
        },
        TraversalFlags::new(false, true),
    );

    assert_eq!(visited.len(), 16);
    assert_eq!(status.cycle_count(), 19);
    assert_eq!(status.error_count(), 3);
    assert_eq!(status.errors()[0].node(), fx.n("21"));
    assert!(status.errors()[0].message().starts_with("Error on node"));
}

#[test]
fn test_breadth_first_stops_at_first_error_without_continue_on_error() {
    let mut fx = tree();
    let failing = fx.n("3");
    let mut visited = Vec::new();

    let start = fx.n("root");
    let status = breadth_first_with_flags(
        &mut fx.graph,
        start,
        |_, n, _| {
            visited.push(n);
            if n == failing {
                return Err("boom".into());
            }
            Ok(true)
        },
        TraversalFlags::new(true, false),
    );

    assert_eq!(fx.names(&visited), vec!["root", "1", "2", "3"]);
    assert_eq!(status.error_count(), 1);
    assert_eq!(status.errors()[0].message(), "boom");
}

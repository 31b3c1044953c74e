//! Query builder for finding nodes.
//!
//! Provides a fluent interface for filtering the nodes of a [`Graph`] by
//! label, id, category, degree and relation type.

use crate::graph::{Category, Graph, Node, NodeIndex, RelationType};

/// A filter predicate that can be applied to nodes.
type FilterFn<'a> = Box<dyn Fn(&Graph, &Node) -> bool + 'a>;

/// Fluent node query over a graph.
///
/// Filters are combined with AND; results come back in node id order.
///
/// # Examples
///
/// ```
/// use nodegraph::Graph;
///
/// let mut graph = Graph::new();
/// let api = graph.add_node("api", "Public API");
/// graph.add_category(api, "service").unwrap();
/// graph.add_node("db", "Database");
///
/// let services = graph.query()
///     .category("service")
///     .label_contains("api")
///     .execute();
/// assert_eq!(services, vec![api]);
/// ```
pub struct NodeQuery<'a> {
    graph: &'a Graph,
    filters: Vec<FilterFn<'a>>,
    limit_value: Option<usize>,
}

impl<'a> NodeQuery<'a> {
    /// Create a new query for the given graph.
    pub fn new(graph: &'a Graph) -> Self {
        Self {
            graph,
            filters: Vec::new(),
            limit_value: None,
        }
    }

    /// Filter nodes whose label contains a substring (case-insensitive).
    pub fn label_contains(mut self, substring: &str) -> Self {
        let substring = substring.to_lowercase();
        self.filters
            .push(Box::new(move |_, node| node.label().to_lowercase().contains(&substring)));
        self
    }

    /// Filter nodes whose label equals `label` exactly.
    pub fn label(mut self, label: &str) -> Self {
        let label = label.to_string();
        self.filters.push(Box::new(move |_, node| node.label() == label));
        self
    }

    /// Filter nodes by label pattern.
    ///
    /// Supports `^` (start) and `$` (end) anchors; otherwise a substring match.
    pub fn label_matches(mut self, pattern: &str) -> Self {
        let pattern = pattern.to_string();
        self.filters
            .push(Box::new(move |_, node| anchored_match(&pattern, node.label())));
        self
    }

    /// Filter nodes whose id starts with `prefix`.
    pub fn id_prefix(mut self, prefix: &str) -> Self {
        let prefix = prefix.to_string();
        self.filters
            .push(Box::new(move |_, node| node.id().starts_with(&prefix)));
        self
    }

    /// Filter nodes carrying a category.
    pub fn category(mut self, category: impl Into<Category>) -> Self {
        let category = category.into();
        self.filters
            .push(Box::new(move |_, node| node.has_category(&category)));
        self
    }

    /// Filter nodes with at least `n` outgoing edges.
    pub fn min_out_degree(mut self, n: usize) -> Self {
        self.filters
            .push(Box::new(move |_, node| node.out_edges().len() >= n));
        self
    }

    /// Filter nodes with at least `n` incoming edges.
    pub fn min_in_degree(mut self, n: usize) -> Self {
        self.filters
            .push(Box::new(move |_, node| node.in_edges().len() >= n));
        self
    }

    /// Filter nodes with an outgoing edge of the given relation type.
    pub fn has_out_relation(mut self, relation_type: impl Into<RelationType>) -> Self {
        let relation_type = relation_type.into();
        self.filters.push(Box::new(move |graph, node| {
            node.out_edges().iter().any(|&e| {
                graph
                    .edge(e)
                    .is_some_and(|edge| *edge.relation_type() == relation_type)
            })
        }));
        self
    }

    /// Filter nodes using a custom predicate function.
    ///
    /// # Examples
    ///
    /// ```
    /// # use nodegraph::Graph;
    /// # let graph = Graph::new();
    /// // Leaves: nodes without outgoing edges
    /// let leaves = graph.query()
    ///     .custom(|node| node.out_edges().is_empty())
    ///     .execute();
    /// # assert!(leaves.is_empty());
    /// ```
    pub fn custom<F>(mut self, predicate: F) -> Self
    where
        F: Fn(&Node) -> bool + 'a,
    {
        self.filters.push(Box::new(move |_, node| predicate(node)));
        self
    }

    /// Limit the number of results returned.
    pub fn limit(mut self, n: usize) -> Self {
        self.limit_value = Some(n);
        self
    }

    /// Execute the query and return matching node handles.
    pub fn execute(&self) -> Vec<NodeIndex> {
        let limit = self.limit_value.unwrap_or(usize::MAX);
        self.graph
            .nodes()
            .filter(|(_, node)| self.matches_filters(node))
            .map(|(ix, _)| ix)
            .take(limit)
            .collect()
    }

    /// Count the matching nodes without allocating a result vector.
    pub fn count(&self) -> usize {
        self.graph
            .nodes()
            .filter(|(_, node)| self.matches_filters(node))
            .count()
    }

    /// Check if any node matches (short-circuits on first match).
    pub fn exists(&self) -> bool {
        self.graph
            .nodes()
            .any(|(_, node)| self.matches_filters(node))
    }

    /// Check if a node matches all filters.
    fn matches_filters(&self, node: &Node) -> bool {
        self.filters.iter().all(|filter| filter(self.graph, node))
    }
}

/// Substring match with optional `^` and `$` anchors.
fn anchored_match(pattern: &str, text: &str) -> bool {
    let starts_with = pattern.starts_with('^');
    let ends_with = pattern.len() > 1 && pattern.ends_with('$');

    let pattern = pattern.trim_start_matches('^').trim_end_matches('$');

    if starts_with && ends_with {
        text == pattern
    } else if starts_with {
        text.starts_with(pattern)
    } else if ends_with {
        text.ends_with(pattern)
    } else {
        text.contains(pattern)
    }
}

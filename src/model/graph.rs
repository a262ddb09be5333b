use super::{Edge, Node, PortDirection};
use crate::geometry::Point;
use std::sync::atomic::{AtomicU64, Ordering};

/// Shared by every graph so no two graph states ever report the same revision.
static NEXT_REVISION: AtomicU64 = AtomicU64::new(1);

fn next_revision() -> u64 {
    NEXT_REVISION.fetch_add(1, Ordering::Relaxed)
}

/// Owns the nodes and edges of one editor session and every mutation on them.
///
/// Nodes are kept in insertion order, which is also paint order. Edges are not checked
/// against the node list: duplicate ids, dangling edges and self-loops are all accepted
/// here and left to the renderer to skip or warn about.
#[derive(Debug, Clone)]
pub struct GraphModel {
    nodes: Vec<Node>,
    edges: Vec<Edge>,
    selected: Option<String>,
    revision: u64,
}

impl Default for GraphModel {
    fn default() -> Self {
        Self::from_parts(Vec::new(), Vec::new())
    }
}

/// Graphs compare by content; the revision only identifies a state for change detection.
impl PartialEq for GraphModel {
    fn eq(&self, other: &Self) -> bool {
        self.nodes == other.nodes && self.edges == other.edges && self.selected == other.selected
    }
}

impl GraphModel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_parts(nodes: Vec<Node>, edges: Vec<Edge>) -> Self {
        Self {
            nodes,
            edges,
            selected: None,
            revision: next_revision(),
        }
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty() && self.edges.is_empty()
    }

    /// Changes with every mutation of the node or edge collections. Values are unique across
    /// all graphs in the process, so a swapped-in graph never matches a stale revision.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    fn touch(&mut self) {
        self.revision = next_revision();
    }

    pub fn add_node(&mut self, node: Node) {
        log::debug!("Adding node '{}' ({})", node.id, node.kind);
        self.nodes.push(node);
        self.touch();
    }

    /// Replaces every node sharing `node.id` wholesale. Returns `false` when no node matched.
    pub fn update_node(&mut self, node: Node) -> bool {
        let mut matched = false;
        for existing in self.nodes.iter_mut().filter(|n| n.id == node.id) {
            *existing = node.clone();
            matched = true;
        }
        if matched {
            self.touch();
        } else {
            log::debug!("update_node: no node with id '{}'", node.id);
        }
        matched
    }

    /// Moves a node. Only `metadata.position` changes; other metadata keys and fields stay.
    pub fn update_node_position(&mut self, node_id: &str, position: Point) -> bool {
        let mut matched = false;
        for node in self.nodes.iter_mut().filter(|n| n.id == node_id) {
            node.metadata.position = position;
            matched = true;
        }
        if matched {
            log::debug!(
                "Node '{}' moved to ({}, {})",
                node_id,
                position.x,
                position.y
            );
            self.touch();
        } else {
            log::debug!("update_node_position: no node with id '{}'", node_id);
        }
        matched
    }

    pub fn node(&self, node_id: &str) -> Option<&Node> {
        self.nodes.iter().find(|n| n.id == node_id)
    }

    pub fn contains_node(&self, node_id: &str) -> bool {
        self.node(node_id).is_some()
    }

    /// Direction of `port` on `node_id`, or `None` when either does not exist.
    pub fn port_direction(&self, node_id: &str, port: &str) -> Option<PortDirection> {
        self.node(node_id)?.port_direction(port)
    }

    pub fn add_edge(&mut self, edge: Edge) {
        log::debug!(
            "Adding edge {}:{} -> {}:{}",
            edge.from_node,
            edge.from_port,
            edge.to_node,
            edge.to_port
        );
        self.edges.push(edge);
        self.touch();
    }

    /// Removes every edge running between `edge.from_node` and `edge.to_node`.
    ///
    /// Ports are not compared, so parallel edges between the same two nodes are removed
    /// together. Returns the number of edges removed.
    pub fn remove_edge(&mut self, edge: &Edge) -> usize {
        let before = self.edges.len();
        self.edges.retain(|e| !e.same_node_pair(edge));
        let removed = before - self.edges.len();
        if removed > 0 {
            log::debug!("Removed {} edge(s) {}", removed, edge.key());
            self.touch();
        }
        removed
    }

    /// Removes every node with this id and every edge that starts or ends at it. Returns the
    /// first removed node.
    pub fn remove_node(&mut self, node_id: &str) -> Option<Node> {
        let (removed, kept): (Vec<Node>, Vec<Node>) = std::mem::take(&mut self.nodes)
            .into_iter()
            .partition(|n| n.id == node_id);
        self.nodes = kept;
        let node = removed.into_iter().next()?;
        self.edges.retain(|e| !e.touches(node_id));
        if self.selected.as_deref() == Some(node_id) {
            self.selected = None;
        }
        log::debug!("Removed node '{}'", node_id);
        self.touch();
        Some(node)
    }

    /// Swaps in a whole new graph. Used by document loading; there is no merge.
    pub fn replace(&mut self, nodes: Vec<Node>, edges: Vec<Edge>) {
        self.nodes = nodes;
        self.edges = edges;
        if let Some(id) = self.selected.take() {
            if self.contains_node(&id) {
                self.selected = Some(id);
            }
        }
        self.touch();
    }

    /// Selects a single node, or clears the selection with `None`.
    /// Selecting an unknown id clears the selection and returns `false`.
    pub fn select_node(&mut self, node_id: Option<&str>) -> bool {
        match node_id {
            Some(id) if self.contains_node(id) => {
                log::debug!("Selected node '{}'", id);
                self.selected = Some(id.to_string());
                true
            }
            Some(id) => {
                log::debug!("select_node: no node with id '{}'", id);
                self.selected = None;
                false
            }
            None => {
                self.selected = None;
                true
            }
        }
    }

    pub fn selected_node_id(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    pub fn selected_node(&self) -> Option<&Node> {
        self.node(self.selected.as_deref()?)
    }

    /// Edges whose source or target does not resolve to a node.
    pub fn dangling_edges(&self) -> impl Iterator<Item = &Edge> {
        self.edges
            .iter()
            .filter(|e| !self.contains_node(&e.from_node) || !self.contains_node(&e.to_node))
    }
}

//! Directed graph whose nodes can be nested into groups.
//!
//! Node and edge ids are internal to the graph (`n1`, `n2`, … and `e1`, `e2`, …). They are not the
//! ids that end up in the GraphML document: the writer allocates its own scoped ids while the graph
//! is traversed.

use indexmap::IndexMap;

use crate::error::{Error, Result};

#[derive(Debug, Clone)]
pub struct Node<N> {
    id: String,
    data: N,
    parent: Option<String>,
    children: Vec<String>,
}

impl<N> Node<N> {
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn data(&self) -> &N {
        &self.data
    }

    pub fn parent_id(&self) -> Option<&str> {
        self.parent.as_deref()
    }

    /// Ids of the direct children, in the order they were attached.
    pub fn child_ids(&self) -> impl Iterator<Item = &str> {
        self.children.iter().map(String::as_str)
    }

    /// A node with at least one child is rendered as a group.
    pub fn is_group(&self) -> bool {
        !self.children.is_empty()
    }
}

#[derive(Debug, Clone)]
pub struct Edge<E> {
    id: String,
    source: String,
    target: String,
    data: E,
}

impl<E> Edge<E> {
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn target(&self) -> &str {
        &self.target
    }

    pub fn data(&self) -> &E {
        &self.data
    }
}

/// Nodes and edges are kept in insertion order, which is also the order they are rendered in.
#[derive(Debug, Clone)]
pub struct DirectedGraph<N, E> {
    nodes: IndexMap<String, Node<N>>,
    edges: IndexMap<String, Edge<E>>,
    node_seq: u64,
    edge_seq: u64,
}

impl<N, E> Default for DirectedGraph<N, E> {
    fn default() -> Self {
        Self {
            nodes: IndexMap::new(),
            edges: IndexMap::new(),
            node_seq: 0,
            edge_seq: 0,
        }
    }
}

impl<N, E> DirectedGraph<N, E> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a node at the root of the graph and returns its id.
    pub fn add_node(&mut self, data: N) -> String {
        self.node_seq += 1;
        let id = format!("n{}", self.node_seq);
        self.nodes.insert(
            id.clone(),
            Node {
                id: id.clone(),
                data,
                parent: None,
                children: Vec::new(),
            },
        );
        id
    }

    /// Adds a node nested under `parent`, which becomes a group.
    pub fn add_child(&mut self, parent: &str, data: N) -> Result<String> {
        if !self.nodes.contains_key(parent) {
            return Err(Error::UnknownNode { id: parent.into() });
        }
        let id = self.add_node(data);
        self.link(&id, parent);
        Ok(id)
    }

    /// Moves `child` under `parent`, or back to the root of the graph when `parent` is `None`.
    pub fn set_parent(&mut self, child: &str, parent: Option<&str>) -> Result<()> {
        if !self.nodes.contains_key(child) {
            return Err(Error::UnknownNode { id: child.into() });
        }
        if let Some(parent) = parent {
            if !self.nodes.contains_key(parent) {
                return Err(Error::UnknownNode { id: parent.into() });
            }
            if self.is_ancestor_or_self(child, parent) {
                return Err(Error::Cycle {
                    child: child.into(),
                    parent: parent.into(),
                });
            }
        }

        self.unlink(child);
        if let Some(parent) = parent {
            self.link(child, parent);
        }
        Ok(())
    }

    /// Moves the node back to the root of the graph. It stays in the graph.
    pub fn detach(&mut self, child: &str) -> Result<()> {
        self.set_parent(child, None)
    }

    pub fn has_node(&self, id: &str) -> bool {
        self.nodes.contains_key(id)
    }

    pub fn node(&self, id: &str) -> Option<&Node<N>> {
        self.nodes.get(id)
    }

    pub fn node_data_mut(&mut self, id: &str) -> Option<&mut N> {
        self.nodes.get_mut(id).map(|n| &mut n.data)
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Every node of the graph, nested or not.
    pub fn nodes(&self) -> impl DoubleEndedIterator<Item = &Node<N>> {
        self.nodes.values()
    }

    /// Nodes without a parent.
    pub fn roots(&self) -> impl DoubleEndedIterator<Item = &Node<N>> {
        self.nodes.values().filter(|n| n.parent.is_none())
    }

    /// Direct children of `id`; empty for unknown ids and leaves.
    pub fn children(&self, id: &str) -> impl DoubleEndedIterator<Item = &Node<N>> {
        self.nodes
            .get(id)
            .into_iter()
            .flat_map(|n| n.children.iter())
            .filter_map(|c| self.nodes.get(c))
    }

    pub fn parent(&self, id: &str) -> Option<&Node<N>> {
        let parent = self.nodes.get(id)?.parent.as_deref()?;
        self.nodes.get(parent)
    }

    /// Adds an edge between two nodes of this graph and returns its id.
    pub fn add_edge(&mut self, source: &str, target: &str, data: E) -> Result<String> {
        for (role, id) in [("source", source), ("target", target)] {
            if !self.nodes.contains_key(id) {
                return Err(Error::NotInGraph {
                    role,
                    id: id.into(),
                });
            }
        }

        self.edge_seq += 1;
        let id = format!("e{}", self.edge_seq);
        self.edges.insert(
            id.clone(),
            Edge {
                id: id.clone(),
                source: source.into(),
                target: target.into(),
                data,
            },
        );
        Ok(id)
    }

    pub fn has_edge(&self, id: &str) -> bool {
        self.edges.contains_key(id)
    }

    pub fn edge(&self, id: &str) -> Option<&Edge<E>> {
        self.edges.get(id)
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn edges(&self) -> impl DoubleEndedIterator<Item = &Edge<E>> {
        self.edges.values()
    }

    fn link(&mut self, child: &str, parent: &str) {
        if let Some(node) = self.nodes.get_mut(child) {
            node.parent = Some(parent.to_string());
        }
        if let Some(node) = self.nodes.get_mut(parent) {
            node.children.push(child.to_string());
        }
    }

    fn unlink(&mut self, child: &str) {
        let Some(prev) = self.nodes.get_mut(child).and_then(|n| n.parent.take()) else {
            return;
        };
        if let Some(node) = self.nodes.get_mut(&prev) {
            node.children.retain(|c| c != child);
        }
    }

    fn is_ancestor_or_self(&self, candidate: &str, of: &str) -> bool {
        let mut cursor = Some(of);
        while let Some(id) = cursor {
            if id == candidate {
                return true;
            }
            cursor = self.nodes.get(id).and_then(|n| n.parent.as_deref());
        }
        false
    }
}

impl<N: PartialEq, E> DirectedGraph<N, E> {
    /// First node (in insertion order) carrying `data`.
    pub fn node_by_data(&self, data: &N) -> Option<&Node<N>> {
        self.nodes.values().find(|n| &n.data == data)
    }
}

impl<N, E: PartialEq> DirectedGraph<N, E> {
    pub fn edge_by_data(&self, data: &E) -> Option<&Edge<E>> {
        self.edges.values().find(|e| &e.data == data)
    }
}

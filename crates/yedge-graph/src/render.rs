use std::fmt::Display;
use std::io::Write;

use indexmap::IndexMap;
use yedge_core::{EdgeStyle, GraphMLWriter, GroupStyles, NodeStyle};

use crate::error::{Error, Result};
use crate::graph::{DirectedGraph, Edge, Node};

/// Resolves the label and styles of every element while a graph is written.
///
/// Only `node_label` is required; the other hooks fall back to the writer defaults and render
/// groups closed.
pub trait Renderer<N, E> {
    fn node_label(&self, node: &Node<N>) -> String;

    fn node_style(&self, _node: &Node<N>) -> NodeStyle {
        NodeStyle::default()
    }

    fn edge_style(&self, _edge: &Edge<E>) -> EdgeStyle {
        EdgeStyle::default()
    }

    fn group_styles(&self, _node: &Node<N>) -> GroupStyles {
        GroupStyles::default()
    }

    fn is_group_open(&self, _node: &Node<N>) -> bool {
        false
    }
}

/// Labels nodes with the `Display` form of their data.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultRenderer;

impl<N: Display, E> Renderer<N, E> for DefaultRenderer {
    fn node_label(&self, node: &Node<N>) -> String {
        node.data().to_string()
    }
}

enum Step<'a> {
    Enter(&'a str),
    Leave,
}

/// Id the writer allocated for the internal node `id`.
fn document_id<'m>(written: &'m IndexMap<&str, String>, id: &str) -> Result<&'m str> {
    written
        .get(id)
        .map(String::as_str)
        .ok_or_else(|| Error::UnknownNode { id: id.into() })
}

impl<N, E> DirectedGraph<N, E> {
    /// Writes the graph with [`DefaultRenderer`] and closes the writer.
    pub fn to_graphml<W: Write>(&self, out: W) -> Result<()>
    where
        N: Display,
    {
        self.to_graphml_with(out, &DefaultRenderer)
    }

    /// Writes the graph with `renderer` and closes the writer, even when writing failed.
    pub fn to_graphml_with<W, R>(&self, out: W, renderer: &R) -> Result<()>
    where
        W: Write,
        R: Renderer<N, E> + ?Sized,
    {
        let mut writer = GraphMLWriter::new(out);
        let written = self.write_graph(&mut writer, renderer);
        let closed = writer.close();
        written?;
        closed?;
        Ok(())
    }

    /// Writes the whole graph through an existing writer: nodes depth-first, then every edge.
    ///
    /// The writer must not have opened its graph yet. It is left in the `DocumentClosed` state.
    pub fn write_graph<W, R>(&self, writer: &mut GraphMLWriter<W>, renderer: &R) -> Result<()>
    where
        W: Write,
        R: Renderer<N, E> + ?Sized,
    {
        writer.open_graph()?;

        // Internal node id -> id allocated by the writer.
        let mut written: IndexMap<&str, String> = IndexMap::with_capacity(self.node_count());

        let mut stack: Vec<Step<'_>> = self.roots().rev().map(|n| Step::Enter(n.id())).collect();
        while let Some(step) = stack.pop() {
            let Step::Enter(id) = step else {
                writer.close_group()?;
                continue;
            };
            let Some(node) = self.node(id) else {
                continue;
            };
            let label = renderer.node_label(node);

            if node.is_group() {
                writer.set_group_styles(&renderer.group_styles(node))?;
                let group_id = writer.group(&label, renderer.is_group_open(node))?;
                written.insert(node.id(), group_id);

                stack.push(Step::Leave);
                let children: Vec<&str> = node.child_ids().collect();
                stack.extend(children.into_iter().rev().map(Step::Enter));
            } else {
                writer.set_node_style(&renderer.node_style(node))?;
                let node_id = writer.node(&label)?;
                written.insert(node.id(), node_id);
            }
        }

        for edge in self.edges() {
            let source = document_id(&written, edge.source())?;
            let target = document_id(&written, edge.target())?;
            writer.set_edge_style(&renderer.edge_style(edge))?;
            writer.edge(source, target)?;
        }

        tracing::debug!(
            nodes = written.len(),
            edges = self.edge_count(),
            "graph written"
        );
        writer.close_graph()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_renderer_uses_display() {
        let mut g: DirectedGraph<u32, ()> = DirectedGraph::new();
        let id = g.add_node(42);
        let node = g.node(&id).unwrap();
        assert_eq!(Renderer::<u32, ()>::node_label(&DefaultRenderer, node), "42");
        assert!(!Renderer::<u32, ()>::is_group_open(&DefaultRenderer, node));
    }

    #[test]
    fn unwritten_endpoints_are_reported() {
        let mut written: IndexMap<&str, String> = IndexMap::new();
        written.insert("n1", "n0::n3".to_string());

        assert_eq!(document_id(&written, "n1").unwrap(), "n0::n3");
        let err = document_id(&written, "n2").unwrap_err();
        assert!(matches!(&err, Error::UnknownNode { id } if id == "n2"));
        assert_eq!(err.to_string(), "The node with id 'n2' doesn't exist");
    }
}

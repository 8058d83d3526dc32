//! Streaming GraphML writer for yEd.
//!
//! Typical usage:
//! - create a writer over any `std::io::Write`
//! - open the graph
//! - add nodes, possibly inside (nested) groups
//! - add edges between the returned ids
//! - close the graph, then close the writer

mod ids;
pub(crate) mod sink;
mod state;

use std::io::Write;

use rustc_hash::FxHashSet;

use crate::config::WriterOptions;
use crate::error::{Error, Result};
use crate::style::{EdgePath, EdgeStyle, GroupStyles, NodeStyle};

use ids::IdAllocator;
use sink::{Tag, XmlSink};

pub use ids::SCOPE_SEPARATOR;
pub use state::WriterState;

pub const NS_GRAPHML: &str = "http://graphml.graphdrawing.org/xmlns";
pub const NS_XSI: &str = "http://www.w3.org/2001/XMLSchema-instance";
pub const NS_Y: &str = "http://www.yworks.com/xml/graphml";
pub const NS_YED: &str = "http://www.yworks.com/xml/yed/3";
pub const SCHEMA_LOCATION: &str =
    "http://graphml.graphdrawing.org/xmlns http://www.yworks.com/xml/schema/graphml/1.1/ygraphml.xsd";

pub const KEY_NODE_URL: &str = "d4";
pub const KEY_NODE_DESCRIPTION: &str = "d5";
pub const KEY_NODE_GRAPHICS: &str = "d6";
pub const KEY_GRAPH_DESCRIPTION: &str = "d7";
pub const KEY_EDGE_URL: &str = "d8";
pub const KEY_EDGE_DESCRIPTION: &str = "d9";
pub const KEY_EDGE_GRAPHICS: &str = "d10";

/// One `<key>` registration of the document prologue.
struct KeyDecl {
    id: &'static str,
    target: &'static str,
    attr_name: Option<&'static str>,
    yfiles_type: Option<&'static str>,
}

const fn yfiles_key(id: &'static str, target: &'static str, ty: &'static str) -> KeyDecl {
    KeyDecl {
        id,
        target,
        attr_name: None,
        yfiles_type: Some(ty),
    }
}

const fn attr_key(id: &'static str, target: &'static str, name: &'static str) -> KeyDecl {
    KeyDecl {
        id,
        target,
        attr_name: Some(name),
        yfiles_type: None,
    }
}

/// yEd only recognizes a document whose keys use exactly these ids and targets.
const PROLOGUE_KEYS: [KeyDecl; 11] = [
    yfiles_key("d0", "graphml", "resources"),
    yfiles_key("d1", "port", "portgraphics"),
    yfiles_key("d2", "port", "portgeometry"),
    yfiles_key("d3", "port", "portuserdata"),
    attr_key(KEY_NODE_URL, "node", "url"),
    attr_key(KEY_NODE_DESCRIPTION, "node", "description"),
    yfiles_key(KEY_NODE_GRAPHICS, "node", "nodegraphics"),
    attr_key(KEY_GRAPH_DESCRIPTION, "graph", "Description"),
    attr_key(KEY_EDGE_URL, "edge", "url"),
    attr_key(KEY_EDGE_DESCRIPTION, "edge", "description"),
    yfiles_key(KEY_EDGE_GRAPHICS, "edge", "edgegraphics"),
];

/// Streaming writer producing GraphML for yEd.
///
/// The writer validates the order of calls against [`WriterState`], allocates scoped ids and
/// renders every element with the styles that are current when the element is created. It is not
/// `Sync`-safe in any meaningful sense: callers serialize access.
///
/// A failed write may leave a partial element in the output; the document should then be
/// discarded. [`close`](Self::close) still releases the sink in that case.
pub struct GraphMLWriter<W: Write> {
    sink: Option<XmlSink<W>>,
    options: WriterOptions,
    state: WriterState,
    ids: IdAllocator,
    known_nodes: FxHashSet<String>,
    node_style: NodeStyle,
    edge_style: EdgeStyle,
    group_styles: GroupStyles,
}

impl<W: Write> GraphMLWriter<W> {
    pub fn new(out: W) -> Self {
        Self::with_options(out, WriterOptions::default())
    }

    pub fn with_options(out: W, options: WriterOptions) -> Self {
        Self {
            sink: Some(XmlSink::new(out, options.indent)),
            options,
            state: WriterState::Initial,
            ids: IdAllocator::default(),
            known_nodes: FxHashSet::default(),
            node_style: NodeStyle::default(),
            edge_style: EdgeStyle::default(),
            group_styles: GroupStyles::default(),
        }
    }

    pub fn state(&self) -> WriterState {
        self.state
    }

    pub fn options(&self) -> &WriterOptions {
        &self.options
    }

    /// Number of currently open groups; 0 at the top level of the graph.
    pub fn depth(&self) -> usize {
        self.ids.depth()
    }

    pub fn is_known_node(&self, id: &str) -> bool {
        self.known_nodes.contains(id)
    }

    /// Returns a copy of the style applied to new nodes.
    pub fn node_style(&self) -> NodeStyle {
        self.node_style.clone()
    }

    /// Replaces the style applied to new nodes.
    pub fn set_node_style(&mut self, style: &NodeStyle) -> Result<()> {
        style.validate()?;
        self.node_style.apply(style);
        Ok(())
    }

    pub fn edge_style(&self) -> EdgeStyle {
        self.edge_style.clone()
    }

    pub fn set_edge_style(&mut self, style: &EdgeStyle) -> Result<()> {
        style.validate()?;
        self.edge_style.apply(style);
        Ok(())
    }

    pub fn group_styles(&self) -> GroupStyles {
        self.group_styles.clone()
    }

    pub fn set_group_styles(&mut self, styles: &GroupStyles) -> Result<()> {
        styles.validate()?;
        self.group_styles.apply(styles);
        Ok(())
    }

    /// Writes the XML declaration, the `<graphml>` root and the fixed key prologue.
    pub fn open_document(&mut self) -> Result<()> {
        self.expect_state(WriterState::Initial)?;

        let sink = live_sink(&mut self.sink)?;
        sink.declaration()?;
        sink.start(
            Tag::new("graphml")
                .attr("xmlns", NS_GRAPHML)
                .attr("xmlns:xsi", NS_XSI)
                .attr("xmlns:y", NS_Y)
                .attr("xmlns:yed", NS_YED)
                .attr("xsi:schemaLocation", SCHEMA_LOCATION),
        )?;

        for key in &PROLOGUE_KEYS {
            let mut tag = Tag::new("key");
            if let Some(name) = key.attr_name {
                tag = tag.attr("attr.name", name).attr("attr.type", "string");
            }
            tag = tag.attr("for", key.target).attr("id", key.id);
            if let Some(ty) = key.yfiles_type {
                tag = tag.attr("yfiles.type", ty);
            }
            sink.empty(tag)?;
        }

        self.set_state(WriterState::DocumentOpened)
    }

    fn close_document(&mut self) -> Result<()> {
        self.expect_state(WriterState::GraphClosed)?;

        let sink = live_sink(&mut self.sink)?;
        sink.end()?; // </graphml>
        sink.flush()?;

        self.set_state(WriterState::DocumentClosed)
    }

    /// Opens the root graph, opening the document first when that has not happened yet. The graph
    /// can only be opened once.
    pub fn open_graph(&mut self) -> Result<()> {
        if self.state == WriterState::Initial {
            self.open_document()?;
        }
        self.expect_state(WriterState::DocumentOpened)?;

        live_sink(&mut self.sink)?.start(
            Tag::new("graph")
                .attr("edgedefault", &self.options.edge_default)
                .attr("id", &self.options.graph_id),
        )?;

        self.set_state(WriterState::GraphOpened)
    }

    /// Closes the root graph and the document. Fails while a group is still open.
    pub fn close_graph(&mut self) -> Result<()> {
        self.expect_state(WriterState::GraphOpened)?;
        if self.ids.depth() > 0 {
            return Err(Error::GroupsStillOpen {
                depth: self.ids.depth(),
            });
        }

        live_sink(&mut self.sink)?.end()?; // </graph>
        self.set_state(WriterState::GraphClosed)?;

        self.close_document()
    }

    /// Creates a node at the origin and returns its id.
    pub fn node(&mut self, label: &str) -> Result<String> {
        self.node_at(label, 0.0, 0.0)
    }

    pub fn node_at(&mut self, label: &str, x: f64, y: f64) -> Result<String> {
        self.expect_state(WriterState::GraphOpened)?;

        let node_id = self.ids.next_node_id();
        let sink = live_sink(&mut self.sink)?;

        sink.start(Tag::new("node").attr("id", &node_id))?;
        sink.start(Tag::new("data").attr("key", KEY_NODE_GRAPHICS))?;
        sink.start(Tag::new("y:ShapeNode"))?;
        self.node_style.write_to(sink, label, x, y)?;
        sink.end()?; // </y:ShapeNode>
        sink.end()?; // </data>
        sink.end()?; // </node>

        tracing::debug!(id = %node_id, depth = self.ids.depth(), "node written");
        self.known_nodes.insert(node_id.clone());
        Ok(node_id)
    }

    /// Creates a group at the origin and enters it. Nodes created until the matching
    /// [`close_group`](Self::close_group) belong to the group.
    ///
    /// Both realizers are always written; `open` only selects the one yEd displays first.
    pub fn group(&mut self, label: &str, open: bool) -> Result<String> {
        self.group_at(label, open, 0.0, 0.0)
    }

    pub fn group_at(&mut self, label: &str, open: bool, x: f64, y: f64) -> Result<String> {
        self.expect_state(WriterState::GraphOpened)?;

        // A group is a node as far as ids are concerned.
        let group_id = self.ids.next_node_id();
        let sink = live_sink(&mut self.sink)?;

        sink.start(
            Tag::new("node")
                .attr("id", &group_id)
                .attr("yfiles.foldertype", if open { "group" } else { "folder" }),
        )?;
        sink.empty(Tag::new("data").attr("key", KEY_NODE_URL))?;
        sink.empty(Tag::new("data").attr("key", KEY_NODE_DESCRIPTION))?;
        sink.start(Tag::new("data").attr("key", KEY_NODE_GRAPHICS))?;
        sink.start(Tag::new("y:ProxyAutoBoundsNode"))?;
        sink.start(Tag::new("y:Realizers").attr("active", if open { "0" } else { "1" }))?;

        sink.start(Tag::new("y:GroupNode"))?;
        self.group_styles.open().write_to(sink, label, false, x, y)?;
        sink.end()?;

        sink.start(Tag::new("y:GroupNode"))?;
        self.group_styles.closed().write_to(sink, label, true, x, y)?;
        sink.end()?;

        sink.end()?; // </y:Realizers>
        sink.end()?; // </y:ProxyAutoBoundsNode>
        sink.end()?; // </data>

        sink.start(
            Tag::new("graph")
                .attr("edgedefault", &self.options.edge_default)
                .attr("id", format!("{group_id}:")),
        )?;

        tracing::debug!(id = %group_id, open, depth = self.ids.depth(), "group opened");
        self.ids.push_scope(group_id.clone());
        self.known_nodes.insert(group_id.clone());
        Ok(group_id)
    }

    /// Closes the innermost open group. Fails when no group is open.
    pub fn close_group(&mut self) -> Result<()> {
        self.expect_state(WriterState::GraphOpened)?;
        if self.ids.depth() == 0 {
            return Err(Error::NotInsideGroup);
        }

        let sink = live_sink(&mut self.sink)?;
        sink.end()?; // </graph>
        sink.end()?; // </node>

        let closed = self.ids.pop_scope();
        tracing::debug!(id = ?closed, "group closed");
        Ok(())
    }

    /// Creates an edge between two previously created nodes (or groups) and returns its id.
    ///
    /// Self-loops, parallel edges and edges crossing group boundaries are all accepted.
    pub fn edge(&mut self, source: &str, target: &str) -> Result<String> {
        self.edge_with_path(source, target, &EdgePath::default())
    }

    pub fn edge_with_path(&mut self, source: &str, target: &str, path: &EdgePath) -> Result<String> {
        self.expect_known(source, "source")?;
        self.expect_known(target, "target")?;
        self.expect_state(WriterState::GraphOpened)?;

        let edge_id = self.ids.next_edge_id();
        let sink = live_sink(&mut self.sink)?;

        sink.start(
            Tag::new("edge")
                .attr("id", &edge_id)
                .attr("source", source)
                .attr("target", target),
        )?;
        sink.start(Tag::new("data").attr("key", KEY_EDGE_GRAPHICS))?;
        sink.start(Tag::new("y:PolyLineEdge"))?;
        self.edge_style.write_to(sink, path)?;
        sink.end()?; // </y:PolyLineEdge>
        sink.end()?; // </data>
        sink.end()?; // </edge>

        tracing::debug!(id = %edge_id, source, target, "edge written");
        Ok(edge_id)
    }

    /// Flushes and releases the underlying sink. Once closed, the writer can't be reused.
    ///
    /// Closing twice is an error. Failures while flushing are logged, not returned: by then the
    /// outcome of the document is already decided.
    pub fn close(&mut self) -> Result<()> {
        if self.state == WriterState::Closed {
            return Err(Error::AlreadyClosed);
        }

        if let Some(mut sink) = self.sink.take() {
            if let Err(err) = sink.flush() {
                tracing::warn!(error = %err, "failed to flush the GraphML sink while closing");
            }
            drop(sink.into_inner());
        }

        self.set_state(WriterState::Closed)
    }

    fn expect_known(&self, id: &str, role: &'static str) -> Result<()> {
        if self.known_nodes.contains(id) {
            Ok(())
        } else {
            Err(Error::UnknownNode {
                role,
                id: id.to_string(),
            })
        }
    }

    /// Checks that the writer sits in `expected` before running an operation.
    fn expect_state(&self, expected: WriterState) -> Result<()> {
        if self.state != expected {
            tracing::trace!(actual = %self.state, %expected, "operation rejected");
            return Err(Error::InvalidState {
                actual: self.state,
                expected,
            });
        }
        Ok(())
    }

    fn set_state(&mut self, target: WriterState) -> Result<()> {
        if !self.state.can_transition_to(target) {
            return Err(Error::ForbiddenTransition {
                from: self.state,
                to: target,
            });
        }
        tracing::trace!(from = %self.state, to = %target, "state transition");
        self.state = target;
        Ok(())
    }
}

fn live_sink<W: Write>(sink: &mut Option<XmlSink<W>>) -> Result<&mut XmlSink<W>> {
    sink.as_mut().ok_or(Error::AlreadyClosed)
}

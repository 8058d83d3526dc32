#![forbid(unsafe_code)]

//! In-memory directed graph with nested groups, written out as yEd GraphML.
//!
//! Build the graph first, then hand it a sink: groups become yEd group nodes, and edges are written
//! last, once every node has received its document id.

pub mod error;
pub mod graph;
pub mod render;

pub use error::{Error, Result};
pub use graph::{DirectedGraph, Edge, Node};
pub use render::{DefaultRenderer, Renderer};

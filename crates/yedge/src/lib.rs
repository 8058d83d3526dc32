#![forbid(unsafe_code)]

//! `yedge` writes GraphML documents for the yEd graph editor.
//!
//! The streaming [`GraphMLWriter`] is always available. Nodes get a style made of geometry, fill,
//! border, shape and label settings; groups carry an open and a closed realizer so yEd can fold
//! them; edges get a line style and arrows.
//!
//! # Features
//!
//! - `graph` (default): the in-memory [`graph::DirectedGraph`] with nested groups and the
//!   [`graph::Renderer`] hook that resolves labels and styles while it is written out

pub use yedge_core::*;

#[cfg(feature = "graph")]
pub mod graph {
    pub use yedge_graph::{
        DefaultRenderer, DirectedGraph, Edge, Error, Node, Renderer, Result,
    };
}

#![forbid(unsafe_code)]

//! Streaming GraphML writer for the yEd graph editor.
//!
//! The crate has three parts:
//! - a style model: [`NodeStyle`] composed of geometry/fill/border, shape and label aspects,
//!   [`GroupStyle`] (a node style plus group-only fields, written once per open/closed realizer)
//!   and [`EdgeStyle`]
//! - scoped identifiers: `n<k>` at the top level, `<group id>::n<k>` inside groups, `e<k>` for edges
//! - [`GraphMLWriter`], a state machine that rejects out-of-order calls instead of producing
//!   malformed markup
//!
//! Layout is left to yEd: coordinates are optional hints.

pub mod color;
pub mod config;
pub mod error;
pub mod style;
pub mod vocab;
pub mod writer;

pub use color::Color;
pub use config::WriterOptions;
pub use error::{Error, ErrorKind, Result};
pub use style::{
    EdgePath, EdgeStyle, GeneralStyle, GroupStyle, GroupStyles, LabelStyle, NodeStyle, ShapeStyle,
};
pub use vocab::{Alignment, Arrow, FontStyle, LineType, Placement, Position, Shape, SizePolicy};
pub use writer::{GraphMLWriter, WriterState};

#[cfg(test)]
mod tests;

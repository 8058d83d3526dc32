use std::io::Write;

use crate::color::Color;
use crate::error::Result;
use crate::vocab::Shape;
use crate::writer::sink::{Tag, XmlSink};

/// Outline and drop shadow of a node.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ShapeStyle {
    pub(crate) shape: Shape,
    /// No drop shadow is written when absent.
    pub(crate) shadow_color: Option<Color>,
    pub(crate) shadow_offset_x: i32,
    pub(crate) shadow_offset_y: i32,
}

impl Default for ShapeStyle {
    fn default() -> Self {
        Self {
            shape: Shape::RoundedRectangle,
            shadow_color: Some(Color::rgb(0xB3, 0xA6, 0x91)),
            shadow_offset_x: 3,
            shadow_offset_y: 3,
        }
    }
}

impl ShapeStyle {
    pub fn apply(&mut self, other: &ShapeStyle) {
        self.shape = other.shape;
        self.shadow_color = other.shadow_color;
        self.shadow_offset_x = other.shadow_offset_x;
        self.shadow_offset_y = other.shadow_offset_y;
    }

    pub fn shape(&self) -> Shape {
        self.shape
    }

    pub fn set_shape(&mut self, shape: Shape) {
        self.shape = shape;
    }

    pub fn shadow_color(&self) -> Option<Color> {
        self.shadow_color
    }

    pub fn set_shadow_color(&mut self, color: Option<Color>) {
        self.shadow_color = color;
    }

    pub fn shadow_offset_x(&self) -> i32 {
        self.shadow_offset_x
    }

    pub fn set_shadow_offset_x(&mut self, offset: i32) {
        self.shadow_offset_x = offset;
    }

    pub fn shadow_offset_y(&self) -> i32 {
        self.shadow_offset_y
    }

    pub fn set_shadow_offset_y(&mut self, offset: i32) {
        self.shadow_offset_y = offset;
    }

    pub fn has_drop_shadow(&self) -> bool {
        self.shadow_color.is_some() && (self.shadow_offset_x != 0 || self.shadow_offset_y != 0)
    }

    pub(crate) fn write_to<W: Write>(&self, sink: &mut XmlSink<W>) -> Result<()> {
        sink.empty(Tag::new("y:Shape").attr("type", self.shape))?;

        match self.shadow_color {
            Some(color) if self.has_drop_shadow() => sink.empty(
                Tag::new("y:DropShadow")
                    .attr("color", color)
                    .attr("offsetX", self.shadow_offset_x)
                    .attr("offsetY", self.shadow_offset_y),
            ),
            _ => Ok(()),
        }
    }
}

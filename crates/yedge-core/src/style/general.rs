use std::io::Write;

use crate::color::Color;
use crate::error::{Result, positive};
use crate::vocab::LineType;
use crate::writer::sink::{Tag, XmlSink, fmt_f1};

/// Geometry, fill and border of a node.
///
/// `x`/`y` are not part of the style: they belong to each element and are passed at write time.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GeneralStyle {
    pub(crate) height: f64,
    pub(crate) width: f64,
    /// Omitted from the markup when absent.
    pub(crate) fill_color: Option<Color>,
    /// Second gradient color, omitted when absent.
    pub(crate) fill_color2: Option<Color>,
    pub(crate) transparent_fill: bool,
    pub(crate) border_color: Color,
    pub(crate) border_type: LineType,
    pub(crate) border_width: f64,
}

impl Default for GeneralStyle {
    fn default() -> Self {
        Self {
            height: 40.0,
            width: 40.0,
            fill_color: Some(Color::rgb(0x99, 0xCC, 0x00)),
            fill_color2: None,
            transparent_fill: false,
            border_color: Color::BLACK,
            border_type: LineType::Line,
            border_width: 2.0,
        }
    }
}

impl GeneralStyle {
    pub fn apply(&mut self, other: &GeneralStyle) {
        self.height = other.height;
        self.width = other.width;
        self.fill_color = other.fill_color;
        self.fill_color2 = other.fill_color2;
        self.transparent_fill = other.transparent_fill;
        self.border_color = other.border_color;
        self.border_type = other.border_type;
        self.border_width = other.border_width;
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn set_height(&mut self, height: f64) -> Result<()> {
        self.height = positive("height", height)?;
        Ok(())
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn set_width(&mut self, width: f64) -> Result<()> {
        self.width = positive("width", width)?;
        Ok(())
    }

    pub fn fill_color(&self) -> Option<Color> {
        self.fill_color
    }

    pub fn set_fill_color(&mut self, color: Option<Color>) {
        self.fill_color = color;
    }

    pub fn fill_color2(&self) -> Option<Color> {
        self.fill_color2
    }

    pub fn set_fill_color2(&mut self, color: Option<Color>) {
        self.fill_color2 = color;
    }

    pub fn transparent_fill(&self) -> bool {
        self.transparent_fill
    }

    pub fn set_transparent_fill(&mut self, transparent: bool) {
        self.transparent_fill = transparent;
    }

    pub fn border_color(&self) -> Color {
        self.border_color
    }

    pub fn set_border_color(&mut self, color: Color) {
        self.border_color = color;
    }

    pub fn border_type(&self) -> LineType {
        self.border_type
    }

    pub fn set_border_type(&mut self, border_type: LineType) {
        self.border_type = border_type;
    }

    pub fn border_width(&self) -> f64 {
        self.border_width
    }

    pub fn set_border_width(&mut self, width: f64) -> Result<()> {
        self.border_width = positive("border width", width)?;
        Ok(())
    }

    pub(crate) fn validate(&self) -> Result<()> {
        positive("height", self.height)?;
        positive("width", self.width)?;
        positive("border width", self.border_width)?;
        Ok(())
    }

    pub(crate) fn write_to<W: Write>(&self, sink: &mut XmlSink<W>, x: f64, y: f64) -> Result<()> {
        // Coordinates are only a hint; yEd recomputes them when laying the graph out.
        sink.empty(
            Tag::new("y:Geometry")
                .attr("height", fmt_f1(self.height))
                .attr("width", fmt_f1(self.width))
                .attr("x", fmt_f1(x))
                .attr("y", fmt_f1(y)),
        )?;

        let mut fill = Tag::new("y:Fill");
        if let Some(color) = self.fill_color {
            fill = fill.attr("color", color);
        }
        if let Some(color) = self.fill_color2 {
            fill = fill.attr("color2", color);
        }
        sink.empty(fill.attr("transparent", self.transparent_fill))?;

        sink.empty(
            Tag::new("y:BorderStyle")
                .attr("color", self.border_color)
                .attr("type", self.border_type)
                .attr("width", fmt_f1(self.border_width)),
        )
    }
}

use std::io::Write;

use crate::color::Color;
use crate::error::{Result, positive};
use crate::vocab::{Arrow, LineType};
use crate::writer::sink::{Tag, XmlSink, fmt_f1};

/// Offsets of an edge's end points relative to the centers of its source and target nodes.
#[derive(Debug, Clone, Copy, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct EdgePath {
    pub sx: f64,
    pub sy: f64,
    pub tx: f64,
    pub ty: f64,
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EdgeStyle {
    color: Color,
    line_type: LineType,
    width: f64,
    source_arrow: Arrow,
    target_arrow: Arrow,
    smoothed: bool,
}

impl Default for EdgeStyle {
    fn default() -> Self {
        Self {
            color: Color::BLACK,
            line_type: LineType::Line,
            width: 1.0,
            source_arrow: Arrow::None,
            target_arrow: Arrow::Standard,
            smoothed: false,
        }
    }
}

impl EdgeStyle {
    pub fn apply(&mut self, other: &EdgeStyle) {
        self.color = other.color;
        self.line_type = other.line_type;
        self.width = other.width;
        self.source_arrow = other.source_arrow;
        self.target_arrow = other.target_arrow;
        self.smoothed = other.smoothed;
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    pub fn line_type(&self) -> LineType {
        self.line_type
    }

    pub fn set_line_type(&mut self, line_type: LineType) {
        self.line_type = line_type;
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn set_width(&mut self, width: f64) -> Result<()> {
        self.width = positive("edge width", width)?;
        Ok(())
    }

    pub fn source_arrow(&self) -> Arrow {
        self.source_arrow
    }

    pub fn set_source_arrow(&mut self, arrow: Arrow) {
        self.source_arrow = arrow;
    }

    pub fn target_arrow(&self) -> Arrow {
        self.target_arrow
    }

    pub fn set_target_arrow(&mut self, arrow: Arrow) {
        self.target_arrow = arrow;
    }

    pub fn smoothed(&self) -> bool {
        self.smoothed
    }

    pub fn set_smoothed(&mut self, smoothed: bool) {
        self.smoothed = smoothed;
    }

    pub fn validate(&self) -> Result<()> {
        positive("edge width", self.width)?;
        Ok(())
    }

    /// Writes the content of a `y:PolyLineEdge`.
    pub(crate) fn write_to<W: Write>(&self, sink: &mut XmlSink<W>, path: &EdgePath) -> Result<()> {
        sink.empty(
            Tag::new("y:Path")
                .attr("sx", fmt_f1(path.sx))
                .attr("sy", fmt_f1(path.sy))
                .attr("tx", fmt_f1(path.tx))
                .attr("ty", fmt_f1(path.ty)),
        )?;
        sink.empty(
            Tag::new("y:LineStyle")
                .attr("color", self.color)
                .attr("type", self.line_type)
                .attr("width", fmt_f1(self.width)),
        )?;
        sink.empty(
            Tag::new("y:Arrows")
                .attr("source", self.source_arrow)
                .attr("target", self.target_arrow),
        )?;
        sink.empty(Tag::new("y:BendStyle").attr("smoothed", self.smoothed))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let style = EdgeStyle::default();
        assert_eq!(style.source_arrow(), Arrow::None);
        assert_eq!(style.target_arrow(), Arrow::Standard);
        assert_eq!(style.width(), 1.0);
        assert!(!style.smoothed());
    }

    #[test]
    fn width_must_be_positive() {
        let mut style = EdgeStyle::default();
        assert!(style.set_width(0.0).is_err());
        assert!(style.set_width(-2.0).is_err());
        style.set_width(3.0).unwrap();
        assert_eq!(style.width(), 3.0);
    }

    #[test]
    fn apply_detaches_from_the_source() {
        let mut other = EdgeStyle::default();
        other.set_smoothed(true);
        other.set_target_arrow(Arrow::Delta);

        let mut style = EdgeStyle::default();
        style.apply(&other);
        other.set_target_arrow(Arrow::Circle);

        assert!(style.smoothed());
        assert_eq!(style.target_arrow(), Arrow::Delta);
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let style: EdgeStyle =
            serde_json::from_str(r#"{"sourceArrow": "diamond", "lineType": "dashed"}"#).unwrap();
        assert_eq!(style.source_arrow(), Arrow::Diamond);
        assert_eq!(style.line_type(), LineType::Dashed);
        assert_eq!(style.target_arrow(), Arrow::Standard);
    }
}

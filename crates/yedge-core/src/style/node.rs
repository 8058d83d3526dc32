use std::io::Write;

use crate::error::Result;
use crate::style::{GeneralStyle, LabelStyle, ShapeStyle};
use crate::writer::sink::XmlSink;

/// Style of a plain node: the three aspects, plus a flattened accessor surface over them.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct NodeStyle {
    general: GeneralStyle,
    shape: ShapeStyle,
    label: LabelStyle,
}

impl NodeStyle {
    pub fn new(general: GeneralStyle, shape: ShapeStyle, label: LabelStyle) -> Self {
        Self {
            general,
            shape,
            label,
        }
    }

    pub fn apply(&mut self, other: &NodeStyle) {
        self.general.apply(&other.general);
        self.shape.apply(&other.shape);
        self.label.apply(&other.label);
    }

    pub fn general(&self) -> &GeneralStyle {
        &self.general
    }

    pub fn general_mut(&mut self) -> &mut GeneralStyle {
        &mut self.general
    }

    pub fn shape_style(&self) -> &ShapeStyle {
        &self.shape
    }

    pub fn shape_style_mut(&mut self) -> &mut ShapeStyle {
        &mut self.shape
    }

    pub fn label(&self) -> &LabelStyle {
        &self.label
    }

    pub fn label_mut(&mut self) -> &mut LabelStyle {
        &mut self.label
    }

    forward_node_accessors!();

    /// Checks the invariants a deserialized style may have skipped.
    pub fn validate(&self) -> Result<()> {
        self.general.validate()?;
        self.label.validate()
    }

    /// Writes the content of a shape element: geometry, fill, border, label, shape, shadow.
    pub(crate) fn write_to<W: Write>(
        &self,
        sink: &mut XmlSink<W>,
        label: &str,
        x: f64,
        y: f64,
    ) -> Result<()> {
        self.general.write_to(sink, x, y)?;
        self.label.write_to(sink, label)?;
        self.shape.write_to(sink)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Color;
    use crate::vocab::{FontStyle, LineType, Shape};

    #[test]
    fn accessors_reach_the_aspects() {
        let mut style = NodeStyle::default();
        style.set_width(60.0).unwrap();
        style.set_shape(Shape::Ellipse);
        style.set_font_style(FontStyle::Italic);
        style.set_font_family("Serif");
        style.set_label_insets(2);

        assert_eq!(style.general().width(), 60.0);
        assert_eq!(style.shape_style().shape(), Shape::Ellipse);
        assert_eq!(style.label().font_style(), FontStyle::Italic);
        assert_eq!(style.font_family(), "Serif");
        assert_eq!(style.label().bottom_inset(), 2);
    }

    #[test]
    fn apply_is_a_full_overwrite_and_detaches() {
        let mut other = NodeStyle::default();
        other.set_border_type(LineType::Dashed);
        other.set_fill_color(None);
        other.set_shadow_color(None);
        other.set_text_color(Color::GRAY);

        let mut style = NodeStyle::default();
        style.apply(&other);
        assert_eq!(style, other);

        other.set_border_type(LineType::Dotted);
        assert_eq!(style.border_type(), LineType::Dashed);
    }

    #[test]
    fn rejected_dimension_leaves_the_style_untouched() {
        let mut style = NodeStyle::default();
        assert!(style.set_width(0.0).is_err());
        assert!(style.set_height(-3.0).is_err());
        assert!(style.set_font_size(0).is_err());
        assert_eq!(style, NodeStyle::default());
    }

    #[test]
    fn validate_catches_deserialized_dimensions() {
        let style: NodeStyle = serde_json::from_str(r#"{"general": {"width": -5.0}}"#).unwrap();
        assert!(style.validate().is_err());

        let style: NodeStyle =
            serde_json::from_str(r##"{"label": {"fontFamily": "Serif", "textColor": "#FF0000"}}"##)
                .unwrap();
        style.validate().unwrap();
        assert_eq!(style.text_color(), Color::rgb(0xFF, 0, 0));
        assert_eq!(style.height(), 40.0);
    }
}

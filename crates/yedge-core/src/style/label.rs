use std::io::Write;

use crate::color::Color;
use crate::error::{Error, Result};
use crate::vocab::{Alignment, FontStyle, Placement, Position, SizePolicy};
use crate::writer::sink::{Tag, XmlSink, fmt_f1};

/// Text styling and placement of a node label.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LabelStyle {
    pub(crate) visible: bool,
    pub(crate) text_color: Color,
    /// Written as `hasBackgroundColor="false"` when absent.
    pub(crate) background_color: Option<Color>,
    /// Written as `hasLineColor="false"` when absent.
    pub(crate) line_color: Option<Color>,
    pub(crate) text_alignment: Alignment,
    pub(crate) font_style: FontStyle,
    pub(crate) font_family: String,
    pub(crate) font_size: u32,
    pub(crate) border_distance: f64,
    pub(crate) rotation_angle: f64,
    pub(crate) underlined_text: bool,
    pub(crate) placement: Placement,
    pub(crate) position: Position,
    pub(crate) left_inset: i32,
    pub(crate) right_inset: i32,
    pub(crate) top_inset: i32,
    pub(crate) bottom_inset: i32,
    pub(crate) size_policy: SizePolicy,
}

impl Default for LabelStyle {
    fn default() -> Self {
        Self {
            visible: true,
            text_color: Color::BLACK,
            background_color: None,
            line_color: None,
            text_alignment: Alignment::Center,
            font_style: FontStyle::Plain,
            font_family: "Dialog".to_string(),
            font_size: 12,
            border_distance: 0.0,
            rotation_angle: 0.0,
            underlined_text: false,
            placement: Placement::Internal,
            position: Position::Center,
            left_inset: 0,
            right_inset: 0,
            top_inset: 0,
            bottom_inset: 0,
            size_policy: SizePolicy::Content,
        }
    }
}

impl LabelStyle {
    pub fn apply(&mut self, other: &LabelStyle) {
        self.visible = other.visible;
        self.text_color = other.text_color;
        self.background_color = other.background_color;
        self.line_color = other.line_color;
        self.text_alignment = other.text_alignment;
        self.font_style = other.font_style;
        self.font_family.clone_from(&other.font_family);
        self.font_size = other.font_size;
        self.border_distance = other.border_distance;
        self.rotation_angle = other.rotation_angle;
        self.underlined_text = other.underlined_text;
        self.placement = other.placement;
        self.position = other.position;
        self.left_inset = other.left_inset;
        self.right_inset = other.right_inset;
        self.top_inset = other.top_inset;
        self.bottom_inset = other.bottom_inset;
        self.size_policy = other.size_policy;
    }

    pub fn visible(&self) -> bool {
        self.visible
    }

    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    pub fn text_color(&self) -> Color {
        self.text_color
    }

    pub fn set_text_color(&mut self, color: Color) {
        self.text_color = color;
    }

    pub fn background_color(&self) -> Option<Color> {
        self.background_color
    }

    pub fn set_background_color(&mut self, color: Option<Color>) {
        self.background_color = color;
    }

    pub fn line_color(&self) -> Option<Color> {
        self.line_color
    }

    pub fn set_line_color(&mut self, color: Option<Color>) {
        self.line_color = color;
    }

    pub fn text_alignment(&self) -> Alignment {
        self.text_alignment
    }

    pub fn set_text_alignment(&mut self, alignment: Alignment) {
        self.text_alignment = alignment;
    }

    pub fn font_style(&self) -> FontStyle {
        self.font_style
    }

    pub fn set_font_style(&mut self, style: FontStyle) {
        self.font_style = style;
    }

    pub fn font_family(&self) -> &str {
        &self.font_family
    }

    pub fn set_font_family(&mut self, family: impl Into<String>) {
        self.font_family = family.into();
    }

    pub fn font_size(&self) -> u32 {
        self.font_size
    }

    pub fn set_font_size(&mut self, size: u32) -> Result<()> {
        if size == 0 {
            return Err(Error::NonPositive {
                what: "font size",
                value: 0.0,
            });
        }
        self.font_size = size;
        Ok(())
    }

    pub fn border_distance(&self) -> f64 {
        self.border_distance
    }

    pub fn set_border_distance(&mut self, distance: f64) {
        self.border_distance = distance;
    }

    pub fn rotation_angle(&self) -> f64 {
        self.rotation_angle
    }

    pub fn set_rotation_angle(&mut self, angle: f64) {
        self.rotation_angle = angle;
    }

    pub fn underlined_text(&self) -> bool {
        self.underlined_text
    }

    pub fn set_underlined_text(&mut self, underlined: bool) {
        self.underlined_text = underlined;
    }

    pub fn placement(&self) -> Placement {
        self.placement
    }

    pub fn set_placement(&mut self, placement: Placement) {
        self.placement = placement;
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn set_position(&mut self, position: Position) {
        self.position = position;
    }

    pub fn left_inset(&self) -> i32 {
        self.left_inset
    }

    pub fn set_left_inset(&mut self, inset: i32) {
        self.left_inset = inset;
    }

    pub fn right_inset(&self) -> i32 {
        self.right_inset
    }

    pub fn set_right_inset(&mut self, inset: i32) {
        self.right_inset = inset;
    }

    pub fn top_inset(&self) -> i32 {
        self.top_inset
    }

    pub fn set_top_inset(&mut self, inset: i32) {
        self.top_inset = inset;
    }

    pub fn bottom_inset(&self) -> i32 {
        self.bottom_inset
    }

    pub fn set_bottom_inset(&mut self, inset: i32) {
        self.bottom_inset = inset;
    }

    pub fn set_insets(&mut self, inset: i32) {
        self.left_inset = inset;
        self.right_inset = inset;
        self.top_inset = inset;
        self.bottom_inset = inset;
    }

    pub fn has_insets(&self) -> bool {
        self.left_inset != 0 || self.right_inset != 0 || self.top_inset != 0 || self.bottom_inset != 0
    }

    pub fn size_policy(&self) -> SizePolicy {
        self.size_policy
    }

    pub fn set_size_policy(&mut self, policy: SizePolicy) {
        self.size_policy = policy;
    }

    pub(crate) fn validate(&self) -> Result<()> {
        if self.font_size == 0 {
            return Err(Error::NonPositive {
                what: "font size",
                value: 0.0,
            });
        }
        Ok(())
    }

    pub(crate) fn write_to<W: Write>(&self, sink: &mut XmlSink<W>, text: &str) -> Result<()> {
        let mut tag = Tag::new("y:NodeLabel")
            .attr("alignment", self.text_alignment)
            .attr("autoSizePolicy", self.size_policy)
            .attr("fontFamily", &self.font_family)
            .attr("fontSize", self.font_size)
            .attr("fontStyle", self.font_style)
            .attr("modelName", self.placement)
            .attr("modelPosition", self.position)
            .attr_if(
                self.border_distance != 0.0,
                "borderDistance",
                fmt_f1(self.border_distance),
            )
            .attr_if(
                self.rotation_angle != 0.0,
                "rotationAngle",
                fmt_f1(self.rotation_angle),
            );

        tag = match self.background_color {
            Some(color) => tag.attr("backgroundColor", color),
            None => tag.attr("hasBackgroundColor", false),
        };
        tag = match self.line_color {
            Some(color) => tag.attr("lineColor", color),
            None => tag.attr("hasLineColor", false),
        };

        if self.has_insets() {
            tag = tag
                .attr("bottomInset", self.bottom_inset)
                .attr("topInset", self.top_inset)
                .attr("leftInset", self.left_inset)
                .attr("rightInset", self.right_inset);
        }

        let tag = tag
            .attr("textColor", self.text_color)
            .attr("visible", self.visible)
            .attr_if(self.underlined_text, "underlinedText", true);

        sink.text_element(tag, text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorKind;

    #[test]
    fn zero_font_size_is_rejected() {
        let mut style = LabelStyle::default();
        let err = style.set_font_size(0).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::IllegalArgument);
        assert_eq!(style.font_size(), 12);
        style.set_font_size(9).unwrap();
        assert_eq!(style.font_size(), 9);
    }

    #[test]
    fn insets_are_all_or_nothing_for_has_insets() {
        let mut style = LabelStyle::default();
        assert!(!style.has_insets());
        style.set_top_inset(4);
        assert!(style.has_insets());
        style.set_insets(0);
        assert!(!style.has_insets());
    }

    #[test]
    fn apply_copies_the_font_family() {
        let mut other = LabelStyle::default();
        other.set_font_family("Monospaced");
        other.set_background_color(Some(Color::WHITE));
        let mut style = LabelStyle::default();
        style.apply(&other);
        other.set_font_family("Serif");
        assert_eq!(style.font_family(), "Monospaced");
        assert_eq!(style.background_color(), Some(Color::WHITE));
    }
}

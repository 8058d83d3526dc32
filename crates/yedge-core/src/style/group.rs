use std::io::Write;

use crate::color::Color;
use crate::error::{Result, non_negative, positive};
use crate::style::{GeneralStyle, LabelStyle, NodeStyle, ShapeStyle};
use crate::vocab::{FontStyle, Position, SizePolicy};
use crate::writer::sink::{Tag, XmlSink, fmt_f0, fmt_f1};

/// Style of one group realizer: a [`NodeStyle`] plus the group-only fields.
///
/// The embedded node style is reachable through [`GroupStyle::node`] and through the same flattened
/// accessors `NodeStyle` offers.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GroupStyle {
    node: NodeStyle,
    /// Inner margin between the group border and its content.
    insets: f64,
    border_insets: f64,
    /// Size of the group once collapsed.
    closed_height: f64,
    closed_width: f64,
}

impl Default for GroupStyle {
    fn default() -> Self {
        let general = GeneralStyle {
            height: 80.0,
            width: 140.0,
            fill_color: Some(Color::rgb(0xF5, 0xF5, 0xF5)),
            ..GeneralStyle::default()
        };
        let label = LabelStyle {
            font_size: 15,
            font_style: FontStyle::Bold,
            background_color: Some(Color::rgb(0x99, 0xCC, 0xFF)),
            size_policy: SizePolicy::NodeWidth,
            position: Position::Top,
            // Keeps the label band inside the rounded corners.
            border_distance: 1.0,
            ..LabelStyle::default()
        };

        Self {
            node: NodeStyle::new(general, ShapeStyle::default(), label),
            insets: 15.0,
            border_insets: 0.0,
            closed_height: 50.0,
            closed_width: 50.0,
        }
    }
}

impl GroupStyle {
    pub fn apply(&mut self, other: &GroupStyle) {
        self.node.apply(&other.node);

        self.insets = other.insets;
        self.border_insets = other.border_insets;
        self.closed_height = other.closed_height;
        self.closed_width = other.closed_width;
    }

    pub fn node(&self) -> &NodeStyle {
        &self.node
    }

    pub fn node_mut(&mut self) -> &mut NodeStyle {
        &mut self.node
    }

    pub fn general(&self) -> &GeneralStyle {
        self.node.general()
    }

    pub fn general_mut(&mut self) -> &mut GeneralStyle {
        self.node.general_mut()
    }

    pub fn shape_style(&self) -> &ShapeStyle {
        self.node.shape_style()
    }

    pub fn shape_style_mut(&mut self) -> &mut ShapeStyle {
        self.node.shape_style_mut()
    }

    pub fn label(&self) -> &LabelStyle {
        self.node.label()
    }

    pub fn label_mut(&mut self) -> &mut LabelStyle {
        self.node.label_mut()
    }

    forward_node_accessors!();

    pub fn insets(&self) -> f64 {
        self.insets
    }

    pub fn set_insets(&mut self, insets: f64) -> Result<()> {
        self.insets = non_negative("insets", insets)?;
        Ok(())
    }

    pub fn border_insets(&self) -> f64 {
        self.border_insets
    }

    pub fn set_border_insets(&mut self, insets: f64) -> Result<()> {
        self.border_insets = non_negative("border insets", insets)?;
        Ok(())
    }

    pub fn closed_height(&self) -> f64 {
        self.closed_height
    }

    pub fn set_closed_height(&mut self, height: f64) -> Result<()> {
        self.closed_height = positive("closed height", height)?;
        Ok(())
    }

    pub fn closed_width(&self) -> f64 {
        self.closed_width
    }

    pub fn set_closed_width(&mut self, width: f64) -> Result<()> {
        self.closed_width = positive("closed width", width)?;
        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        self.node.validate()?;
        non_negative("insets", self.insets)?;
        non_negative("border insets", self.border_insets)?;
        positive("closed height", self.closed_height)?;
        positive("closed width", self.closed_width)?;
        Ok(())
    }

    /// Writes the content of one `y:GroupNode` realizer.
    pub(crate) fn write_to<W: Write>(
        &self,
        sink: &mut XmlSink<W>,
        label: &str,
        closed: bool,
        x: f64,
        y: f64,
    ) -> Result<()> {
        self.node.write_to(sink, label, x, y)?;

        sink.empty(
            Tag::new("y:State")
                .attr("closed", closed)
                .attr("closedHeight", fmt_f1(self.closed_height))
                .attr("closedWidth", fmt_f1(self.closed_width))
                .attr("innerGraphDisplayEnabled", !closed),
        )?;
        sink.empty(insets_tag("y:Insets", self.insets))?;
        sink.empty(insets_tag("y:BorderInsets", self.border_insets))
    }
}

fn insets_tag(name: &str, value: f64) -> Tag<'_> {
    let rounded = fmt_f0(value);
    let precise = fmt_f1(value);
    Tag::new(name)
        .attr("bottom", &rounded)
        .attr("bottomF", &precise)
        .attr("left", &rounded)
        .attr("leftF", &precise)
        .attr("right", &rounded)
        .attr("rightF", &precise)
        .attr("top", &rounded)
        .attr("topF", &precise)
}

/// The open and closed realizers of a group, written side by side so yEd can toggle between them.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct GroupStyles {
    open: GroupStyle,
    closed: GroupStyle,
}

impl GroupStyles {
    pub fn new(open: GroupStyle, closed: GroupStyle) -> Self {
        Self { open, closed }
    }

    pub fn apply(&mut self, other: &GroupStyles) {
        self.open.apply(&other.open);
        self.closed.apply(&other.closed);
    }

    pub fn open(&self) -> &GroupStyle {
        &self.open
    }

    pub fn open_mut(&mut self) -> &mut GroupStyle {
        &mut self.open
    }

    pub fn set_open(&mut self, style: &GroupStyle) {
        self.open.apply(style);
    }

    pub fn closed(&self) -> &GroupStyle {
        &self.closed
    }

    pub fn closed_mut(&mut self) -> &mut GroupStyle {
        &mut self.closed
    }

    pub fn set_closed(&mut self, style: &GroupStyle) {
        self.closed.apply(style);
    }

    /// Applies the same edit to both realizers, stopping at the first failure.
    pub fn update_both<F>(&mut self, mut f: F) -> Result<()>
    where
        F: FnMut(&mut GroupStyle) -> Result<()>,
    {
        f(&mut self.open)?;
        f(&mut self.closed)
    }

    pub fn validate(&self) -> Result<()> {
        self.open.validate()?;
        self.closed.validate()
    }
}

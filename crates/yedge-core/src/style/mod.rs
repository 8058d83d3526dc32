//! Layered style model.
//!
//! A node style is the composition of three independent aspects (geometry/fill/border, shape,
//! label). A group style embeds a node style and adds the group-only fields. Every style value
//! supports `apply(&other)`, a full field-wise overwrite used by the writer to copy styles in.

/// Generates forwarding accessors onto an embedded aspect, reached through the `$get()` /
/// `$get_mut()` methods of the implementing type.
macro_rules! forward_aspect {
    ($aspect:ident, $aspect_mut:ident => { $($kind:ident $field:ident, $setter:ident: $ty:ty;)* }) => {
        $( forward_aspect!(@one $aspect $aspect_mut $kind $field $setter $ty); )*
    };
    (@one $aspect:ident $aspect_mut:ident copy $field:ident $setter:ident $ty:ty) => {
        pub fn $field(&self) -> $ty {
            self.$aspect().$field()
        }

        pub fn $setter(&mut self, value: $ty) {
            self.$aspect_mut().$setter(value)
        }
    };
    (@one $aspect:ident $aspect_mut:ident checked $field:ident $setter:ident $ty:ty) => {
        pub fn $field(&self) -> $ty {
            self.$aspect().$field()
        }

        pub fn $setter(&mut self, value: $ty) -> $crate::error::Result<()> {
            self.$aspect_mut().$setter(value)
        }
    };
}

/// The full accessor surface of [`NodeStyle`], shared by [`GroupStyle`].
macro_rules! forward_node_accessors {
    () => {
        forward_aspect!(general, general_mut => {
            checked height, set_height: f64;
            checked width, set_width: f64;
            copy fill_color, set_fill_color: Option<$crate::Color>;
            copy fill_color2, set_fill_color2: Option<$crate::Color>;
            copy transparent_fill, set_transparent_fill: bool;
            copy border_color, set_border_color: $crate::Color;
            copy border_type, set_border_type: $crate::vocab::LineType;
            checked border_width, set_border_width: f64;
        });

        forward_aspect!(shape_style, shape_style_mut => {
            copy shape, set_shape: $crate::vocab::Shape;
            copy shadow_color, set_shadow_color: Option<$crate::Color>;
            copy shadow_offset_x, set_shadow_offset_x: i32;
            copy shadow_offset_y, set_shadow_offset_y: i32;
        });

        forward_aspect!(label, label_mut => {
            copy visible, set_visible: bool;
            copy text_color, set_text_color: $crate::Color;
            copy background_color, set_background_color: Option<$crate::Color>;
            copy line_color, set_line_color: Option<$crate::Color>;
            copy text_alignment, set_text_alignment: $crate::vocab::Alignment;
            copy font_style, set_font_style: $crate::vocab::FontStyle;
            checked font_size, set_font_size: u32;
            copy border_distance, set_border_distance: f64;
            copy rotation_angle, set_rotation_angle: f64;
            copy underlined_text, set_underlined_text: bool;
            copy placement, set_placement: $crate::vocab::Placement;
            copy position, set_position: $crate::vocab::Position;
            copy left_inset, set_left_inset: i32;
            copy right_inset, set_right_inset: i32;
            copy top_inset, set_top_inset: i32;
            copy bottom_inset, set_bottom_inset: i32;
            copy size_policy, set_size_policy: $crate::vocab::SizePolicy;
        });

        pub fn font_family(&self) -> &str {
            self.label().font_family()
        }

        pub fn set_font_family(&mut self, family: impl Into<String>) {
            self.label_mut().set_font_family(family)
        }

        /// Sets the four label insets at once.
        pub fn set_label_insets(&mut self, value: i32) {
            self.label_mut().set_insets(value)
        }
    };
}

mod edge;
mod general;
mod group;
mod label;
mod node;
mod shape;

pub use edge::{EdgePath, EdgeStyle};
pub use general::GeneralStyle;
pub use group::{GroupStyle, GroupStyles};
pub use label::LabelStyle;
pub use node::NodeStyle;
pub use shape::ShapeStyle;

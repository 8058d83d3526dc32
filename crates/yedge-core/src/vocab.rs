//! Closed vocabularies understood by yEd, each with its literal attribute encoding.

use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

macro_rules! vocabulary {
    (
        $(#[$meta:meta])*
        $name:ident ($label:literal) {
            $( $(#[$vmeta:meta])* $variant:ident => $value:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
        pub enum $name {
            $(
                $(#[$vmeta])*
                #[serde(rename = $value)]
                $variant,
            )+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $value,)+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = Error;

            fn from_str(s: &str) -> Result<Self> {
                match s.trim() {
                    $($value => Ok($name::$variant),)+
                    other => Err(Error::UnknownValue {
                        vocabulary: $label,
                        value: other.to_string(),
                    }),
                }
            }
        }
    };
}

vocabulary! {
    /// Stroke pattern of borders and edges.
    LineType ("line type") {
        Line => "line",
        Dashed => "dashed",
        Dotted => "dotted",
        DashedDotted => "dashed_dotted",
    }
}

vocabulary! {
    /// Arrow head drawn at an edge end.
    Arrow ("arrow") {
        None => "none",
        Standard => "standard",
        Delta => "delta",
        WhiteDelta => "white_delta",
        Diamond => "diamond",
        WhiteDiamond => "white_diamond",
        Short => "short",
        Plain => "plain",
        Concave => "concave",
        Convex => "convex",
        Circle => "circle",
        TransparentCircle => "transparent_circle",
        Dash => "dash",
        SkewedDash => "skewed_dash",
        TShape => "t_shape",
        CrowsFootOneMandatory => "crows_foot_one_mandatory",
        CrowsFootManyMandatory => "crows_foot_many_mandatory",
        CrowsFootOneOptional => "crows_foot_one_optional",
        CrowsFootManyOptional => "crows_foot_many_optional",
        CrowsFootOne => "crows_foot_one",
        CrowsFootMany => "crows_foot_many",
        CrowsFootOptional => "crows_foot_optional",
    }
}

vocabulary! {
    /// Outline of a shape node.
    Shape ("shape") {
        Rectangle => "rectangle",
        Triangle => "triangle",
        RoundedRectangle => "roundrectangle",
        Ellipse => "ellipse",
        Parallelogram => "parallelogram",
        Hexagon => "hexagon",
        Rectangle3d => "rectangle3d",
        Octagon => "octagon",
        Diamond => "diamond",
        Trapezoid => "trapezoid",
        Trapezoid2 => "trapezoid2",
    }
}

vocabulary! {
    Alignment ("alignment") {
        Center => "center",
        Left => "left",
        Right => "right",
    }
}

vocabulary! {
    FontStyle ("font style") {
        Plain => "plain",
        Bold => "bold",
        Italic => "italic",
        BoldItalic => "bolditalic",
    }
}

vocabulary! {
    /// Label model (`modelName`).
    Placement ("label placement") {
        Internal => "internal",
        Custom => "custom",
        EdgeOpposite => "edge_opposite",
        EightPosition => "eight_pos",
        Free => "free",
        Corners => "corners",
        Sandwich => "sandwich",
        Sides => "sides",
    }
}

vocabulary! {
    /// Label position inside its model (`modelPosition`).
    Position ("label position") {
        Center => "c",
        Top => "t",
        Bottom => "b",
        Left => "l",
        Right => "r",
        TopLeft => "tl",
        TopRight => "tr",
        BottomLeft => "bl",
        BottomRight => "br",
        NorthWest => "nw",
        NorthEast => "ne",
        SouthWest => "sw",
        SouthEast => "se",
        North => "n",
        South => "s",
        East => "e",
        West => "w",
    }
}

vocabulary! {
    /// How a label sizes itself relative to its node (`autoSizePolicy`).
    SizePolicy ("size policy") {
        Content => "content",
        NodeWidth => "node_width",
        NodeHeight => "node_height",
        NodeSize => "node_size",
    }
}

// Copyright 2026 the Zoetrope Authors
// SPDX-License-Identifier: Apache-2.0

/// An element's axis-aligned bounding box in viewport coordinates.
///
/// This is what a [`LayoutQuery`](crate::LayoutQuery) reports, and mirrors the
/// `top`, `left`, `width` and `height` of a DOM `DOMRect`.
/// Width and height are stored as measured rather than derived from edges.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ClientRect {
    /// Distance of the top edge from the top of the viewport.
    pub top: f64,
    /// Distance of the left edge from the left of the viewport.
    pub left: f64,
    /// Width of the box.
    pub width: f64,
    /// Height of the box.
    pub height: f64,
}

impl ClientRect {
    /// Creates a new bounding box.
    pub const fn new(top: f64, left: f64, width: f64, height: f64) -> Self {
        Self {
            top,
            left,
            width,
            height,
        }
    }
}

/// How far an element's content box is inset from its border box, on the top and left edges.
///
/// Each component is the border width plus the padding on that edge.
/// Components are `NaN` when the underlying style value wasn't numeric.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ContentOffset {
    /// `border-top-width + padding-top`.
    pub top: f64,
    /// `border-left-width + padding-left`.
    pub left: f64,
}

/// A child element's box, in the coordinate space of an ancestor's content box.
///
/// `bottom` and `right` are derived from `top + height` and `left + width`,
/// so they always agree exactly with the other fields.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct RelativeRect {
    /// Width of the child box.
    pub width: f64,
    /// Height of the child box.
    pub height: f64,
    /// Distance of the child's top edge below the ancestor's content box top.
    pub top: f64,
    /// Distance of the child's left edge right of the ancestor's content box left.
    pub left: f64,
    /// `top + height`.
    pub bottom: f64,
    /// `left + width`.
    pub right: f64,
}

impl RelativeRect {
    /// Creates a rect from its origin and size, deriving `bottom` and `right`.
    pub fn from_origin_size(top: f64, left: f64, width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            top,
            left,
            bottom: top + height,
            right: left + width,
        }
    }

    /// Whether any component is `NaN`, typically because the ancestor's style wasn't numeric.
    pub fn has_nan(&self) -> bool {
        [
            self.width,
            self.height,
            self.top,
            self.left,
            self.bottom,
            self.right,
        ]
        .iter()
        .any(|v| v.is_nan())
    }
}

#[cfg(feature = "kurbo")]
mod kurbo_interop {
    use super::{ClientRect, RelativeRect};
    use kurbo::{Point, Rect, Size};

    impl RelativeRect {
        /// The top-left corner, as a point with `x = left` and `y = top`.
        pub fn origin(&self) -> Point {
            Point::new(self.left, self.top)
        }

        /// The width and height.
        pub fn size(&self) -> Size {
            Size::new(self.width, self.height)
        }
    }

    impl From<RelativeRect> for Rect {
        fn from(rect: RelativeRect) -> Self {
            Self::new(rect.left, rect.top, rect.right, rect.bottom)
        }
    }

    impl From<ClientRect> for Rect {
        fn from(rect: ClientRect) -> Self {
            Self::from_origin_size((rect.left, rect.top), (rect.width, rect.height))
        }
    }

    impl From<Rect> for ClientRect {
        fn from(rect: Rect) -> Self {
            let rect = rect.abs();
            Self::new(rect.y0, rect.x0, rect.width(), rect.height())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::RelativeRect;

    #[test]
    fn derived_edges() {
        let rect = RelativeRect::from_origin_size(0.1, 0.7, 0.2, 0.3);
        assert_eq!(rect.bottom, rect.top + rect.height);
        assert_eq!(rect.right, rect.left + rect.width);
        assert!(!rect.has_nan());
    }

    #[test]
    fn nan_is_reported() {
        let rect = RelativeRect::from_origin_size(f64::NAN, 0.0, 1.0, 1.0);
        assert!(rect.has_nan());
        assert!(rect.bottom.is_nan());
        assert_eq!(rect.right, 1.0);
    }

    #[cfg(feature = "kurbo")]
    #[test]
    fn kurbo_conversions() {
        use super::ClientRect;
        use kurbo::{Point, Rect, Size};

        let rect = RelativeRect::from_origin_size(50.0, 30.0, 20.0, 10.0);
        assert_eq!(rect.origin(), Point::new(30.0, 50.0));
        assert_eq!(rect.size(), Size::new(20.0, 10.0));
        assert_eq!(Rect::from(rect), Rect::new(30.0, 50.0, 50.0, 60.0));

        let client = ClientRect::from(Rect::new(80.0, 150.0, 100.0, 160.0));
        assert_eq!(client, ClientRect::new(150.0, 80.0, 20.0, 10.0));
        assert_eq!(Rect::from(client), Rect::new(80.0, 150.0, 100.0, 160.0));
    }
}

// Copyright 2026 the Zoetrope Authors
// SPDX-License-Identifier: Apache-2.0

use tracing::{debug, trace};

use crate::{
    BoxEdgeProperty, ComputedStyle, ContentOffset, LayoutQuery, MissingElement, RectError,
    RelativeRect, StyleResolution,
};

/// Measures `child` relative to the content box of `ancestor`.
///
/// `None` stands for an absent element, in which case [`RectError::InvalidArgument`] is
/// returned before either capability is queried.
///
/// The result is only meaningful if `ancestor` is a layout ancestor of `child`; this isn't checked.
/// Non-numeric border or padding values on the ancestor turn the affected coordinates into `NaN`.
pub fn compute_relative_rect<E, L, S>(
    layout: &L,
    style: &S,
    child: Option<&E>,
    ancestor: Option<&E>,
) -> Result<RelativeRect, RectError>
where
    E: ?Sized,
    L: LayoutQuery<E> + ?Sized,
    S: StyleResolution<E> + ?Sized,
{
    let (Some(child), Some(ancestor)) = (child, ancestor) else {
        let missing = MissingElement::classify(child.is_some(), ancestor.is_some())
            .unwrap_or(MissingElement::Both);
        debug!(%missing, "relative rect requested without both elements");
        return Err(RectError::InvalidArgument(missing));
    };

    let child_rect = layout.bounding_client_rect(child);
    let ancestor_rect = layout.bounding_client_rect(ancestor);
    let insets = BoxInsets::read(&style.computed_style(ancestor));

    // Subtracted one term at a time, left to right, so that results agree bit for bit
    // with the equivalent `getBoundingClientRect` arithmetic.
    let top = child_rect.top - ancestor_rect.top - insets.border_top - insets.padding_top;
    let left = child_rect.left - ancestor_rect.left - insets.border_left - insets.padding_left;

    let rect = RelativeRect::from_origin_size(top, left, child_rect.width, child_rect.height);
    trace!(?rect, "computed relative rect");
    Ok(rect)
}

/// A pair of capabilities bundled up for repeated measurements.
///
/// ```
/// # use zoetrope_core::{ClientRect, LayoutQuery, RelativeRectCalculator};
/// # use zoetrope_core::{BoxEdgeProperty, ComputedStyle, StyleResolution};
/// # struct Layout;
/// # impl LayoutQuery<ClientRect> for Layout {
/// #     fn bounding_client_rect(&self, element: &ClientRect) -> ClientRect { *element }
/// # }
/// # struct NoInsets;
/// # impl ComputedStyle for NoInsets {
/// #     fn property_value(&self, _: BoxEdgeProperty) -> Option<String> { Some("0px".into()) }
/// # }
/// # struct Styles;
/// # impl StyleResolution<ClientRect> for Styles {
/// #     type Style = NoInsets;
/// #     fn computed_style(&self, _: &ClientRect) -> NoInsets { NoInsets }
/// # }
/// let calculator = RelativeRectCalculator::new(Layout, Styles);
/// let ancestor = ClientRect::new(100., 50., 200., 200.);
/// let child = ClientRect::new(150., 80., 20., 10.);
///
/// let rect = calculator.compute(Some(&child), Some(&ancestor)).unwrap();
/// assert_eq!((rect.top, rect.left, rect.bottom, rect.right), (50., 30., 60., 50.));
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct RelativeRectCalculator<L, S> {
    layout: L,
    style: S,
}

impl<L, S> RelativeRectCalculator<L, S> {
    /// Bundles a layout query and a style resolution capability.
    pub fn new(layout: L, style: S) -> Self {
        Self { layout, style }
    }

    /// The layout query capability.
    pub fn layout(&self) -> &L {
        &self.layout
    }

    /// The style resolution capability.
    pub fn style(&self) -> &S {
        &self.style
    }

    /// See [`compute_relative_rect`].
    pub fn compute<E>(
        &self,
        child: Option<&E>,
        ancestor: Option<&E>,
    ) -> Result<RelativeRect, RectError>
    where
        E: ?Sized,
        L: LayoutQuery<E>,
        S: StyleResolution<E>,
    {
        compute_relative_rect(&self.layout, &self.style, child, ancestor)
    }

    /// How far `element`'s content box is inset from its border box.
    pub fn content_offset<E>(&self, element: &E) -> ContentOffset
    where
        E: ?Sized,
        S: StyleResolution<E>,
    {
        BoxInsets::read(&self.style.computed_style(element)).content_offset()
    }
}

/// Border and padding on the top and left edges, in pixels.
#[derive(Clone, Copy, Debug)]
struct BoxInsets {
    padding_top: f64,
    padding_left: f64,
    border_top: f64,
    border_left: f64,
}

impl BoxInsets {
    fn read(style: &impl ComputedStyle) -> Self {
        Self {
            padding_top: style.length(BoxEdgeProperty::PaddingTop),
            padding_left: style.length(BoxEdgeProperty::PaddingLeft),
            border_top: style.length(BoxEdgeProperty::BorderTopWidth),
            border_left: style.length(BoxEdgeProperty::BorderLeftWidth),
        }
    }

    fn content_offset(self) -> ContentOffset {
        ContentOffset {
            top: self.border_top + self.padding_top,
            left: self.border_left + self.padding_left,
        }
    }
}

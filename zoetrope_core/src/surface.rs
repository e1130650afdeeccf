// Copyright 2026 the Zoetrope Authors
// SPDX-License-Identifier: Apache-2.0

//! The capabilities a rendering surface provides to the calculator.

use alloc::string::String;

use crate::ClientRect;

/// Reports where elements are rendered.
///
/// Implementations answer from the surface's current layout, which already
/// reflects scrolling, transforms and zoom.
pub trait LayoutQuery<E: ?Sized> {
    /// The axis-aligned bounding box of `element`, in viewport coordinates.
    fn bounding_client_rect(&self, element: &E) -> ClientRect;
}

/// Resolves the computed style of elements.
pub trait StyleResolution<E: ?Sized> {
    /// A snapshot of one element's resolved style.
    type Style: ComputedStyle;

    /// The fully cascaded style of `element`.
    fn computed_style(&self, element: &E) -> Self::Style;
}

/// One element's resolved style, read as serialized CSS values.
pub trait ComputedStyle {
    /// The serialized value of `property`, e.g. `"12px"`.
    ///
    /// `None` means the property couldn't be read; it is treated like a non-numeric value.
    fn property_value(&self, property: BoxEdgeProperty) -> Option<String>;

    /// The value of `property` in pixels, `NaN` if it isn't numeric.
    fn length(&self, property: BoxEdgeProperty) -> f64 {
        self.property_value(property)
            .map_or(f64::NAN, |value| crate::parse_css_float(&value))
    }
}

/// The box model properties needed to locate an element's content box.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BoxEdgeProperty {
    /// `padding-top`
    PaddingTop,
    /// `padding-left`
    PaddingLeft,
    /// `border-top-width`
    BorderTopWidth,
    /// `border-left-width`
    BorderLeftWidth,
}

impl BoxEdgeProperty {
    /// All properties, in the order they are read.
    pub const ALL: [Self; 4] = [
        Self::PaddingTop,
        Self::PaddingLeft,
        Self::BorderTopWidth,
        Self::BorderLeftWidth,
    ];

    /// The CSS property name, as accepted by `getPropertyValue`.
    pub const fn css_name(self) -> &'static str {
        match self {
            Self::PaddingTop => "padding-top",
            Self::PaddingLeft => "padding-left",
            Self::BorderTopWidth => "border-top-width",
            Self::BorderLeftWidth => "border-left-width",
        }
    }
}

impl<E: ?Sized, T: LayoutQuery<E> + ?Sized> LayoutQuery<E> for &T {
    fn bounding_client_rect(&self, element: &E) -> ClientRect {
        (**self).bounding_client_rect(element)
    }
}

impl<E: ?Sized, T: StyleResolution<E> + ?Sized> StyleResolution<E> for &T {
    type Style = T::Style;

    fn computed_style(&self, element: &E) -> Self::Style {
        (**self).computed_style(element)
    }
}

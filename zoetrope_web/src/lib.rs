// Copyright 2026 the Zoetrope Authors
// SPDX-License-Identifier: Apache-2.0

//! Zoetrope Web measures DOM elements relative to an ancestor's content box.
//!
//! It implements the capabilities of [`zoetrope_core`] on top of the browser:
//!
//! - [`DomLayout`] reads bounding boxes with `Element.getBoundingClientRect()`,
//! - [`DomStyle`] reads resolved styles with `Window.getComputedStyle()`.
//!
//! [`relative_bounding_client_rect`] combines both for the global window.
//! JavaScript callers can use the exported `getRelativeBoundingClientRect` function instead.
//!
//! ## Feature Flags
//!
//! - `intern_strings`: Interns the CSS property names passed to the browser.

#![cfg_attr(docsrs, feature(doc_auto_cfg))]
// LINEBENDER LINT SET - v1
// See https://linebender.org/wiki/canonical-lints/
// These lints aren't included in Cargo.toml because they
// shouldn't apply to examples and tests
#![warn(unused_crate_dependencies)]
#![warn(clippy::print_stdout, clippy::print_stderr)]

use wasm_bindgen::UnwrapThrowExt;
use zoetrope_core::{
    BoxEdgeProperty, ClientRect, ComputedStyle, LayoutQuery, MissingElement, RectError,
    RelativeRect, RelativeRectCalculator, StyleResolution,
};

mod js;
mod util;

pub use js::{JsRelativeRect, get_relative_bounding_client_rect};
pub use util::{document, document_body};
pub use zoetrope_core as core;

/// Reads element bounding boxes from the browser's layout.
#[derive(Clone, Copy, Debug, Default)]
pub struct DomLayout;

impl LayoutQuery<web_sys::Element> for DomLayout {
    fn bounding_client_rect(&self, element: &web_sys::Element) -> ClientRect {
        let rect = element.get_bounding_client_rect();
        ClientRect::new(rect.top(), rect.left(), rect.width(), rect.height())
    }
}

/// Reads resolved styles through a [`web_sys::Window`].
#[derive(Clone, Debug)]
pub struct DomStyle {
    window: web_sys::Window,
}

impl DomStyle {
    /// Resolves styles through `window`.
    pub fn new(window: web_sys::Window) -> Self {
        Self { window }
    }

    /// Resolves styles through the global `window`.
    ///
    /// Throws if there is no global `window`, e.g. inside a worker.
    pub fn from_global() -> Self {
        Self::new(web_sys::window().expect_throw("no global `window` exists"))
    }
}

impl StyleResolution<web_sys::Element> for DomStyle {
    type Style = DomComputedStyle;

    fn computed_style(&self, element: &web_sys::Element) -> DomComputedStyle {
        let declaration = match self.window.get_computed_style(element) {
            Ok(declaration) => declaration,
            Err(err) => {
                tracing::warn!(?err, "getComputedStyle failed");
                None
            }
        };
        DomComputedStyle(declaration)
    }
}

/// The resolved style of one element, as returned by `getComputedStyle`.
///
/// An absent declaration reads every property as absent, so every length is `NaN`.
#[derive(Clone, Debug)]
pub struct DomComputedStyle(Option<web_sys::CssStyleDeclaration>);

impl ComputedStyle for DomComputedStyle {
    fn property_value(&self, property: BoxEdgeProperty) -> Option<String> {
        self.0
            .as_ref()?
            .get_property_value(wasm_bindgen::intern(property.css_name()))
            .ok()
    }
}

/// Measures `child` relative to the content box of `ancestor`, using the global `window`.
///
/// `None` stands for a missing element and yields [`RectError::InvalidArgument`].
/// See [`zoetrope_core::compute_relative_rect`] for the details.
pub fn relative_bounding_client_rect(
    child: Option<&web_sys::Element>,
    ancestor: Option<&web_sys::Element>,
) -> Result<RelativeRect, RectError> {
    // Don't touch the global window for a call that is rejected anyway.
    if let Some(missing) = MissingElement::classify(child.is_some(), ancestor.is_some()) {
        return Err(RectError::InvalidArgument(missing));
    }
    RelativeRectCalculator::new(DomLayout, DomStyle::from_global()).compute(child, ancestor)
}

#[cfg(test)]
mod tests {
    use super::*;

    // These tests run on the host, so they only cover what doesn't call into JavaScript.

    #[test]
    fn missing_elements_are_rejected_without_a_window() {
        assert_eq!(
            relative_bounding_client_rect(None, None),
            Err(RectError::InvalidArgument(MissingElement::Both))
        );
    }

    #[test]
    fn export_keeps_every_field() {
        let rect = RelativeRect::from_origin_size(50.0, 30.0, 20.0, 10.0);
        assert_eq!(
            JsRelativeRect::from(rect),
            JsRelativeRect {
                width: 20.0,
                height: 10.0,
                top: 50.0,
                left: 30.0,
                bottom: 60.0,
                right: 50.0,
            }
        );
    }
}

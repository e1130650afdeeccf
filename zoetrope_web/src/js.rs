// Copyright 2026 the Zoetrope Authors
// SPDX-License-Identifier: Apache-2.0

//! The JavaScript-facing export.

#![allow(unsafe_code, reason = "`#[wasm_bindgen]` exports expand to unsafe glue")]

use wasm_bindgen::prelude::*;
use zoetrope_core::{RectError, RelativeRect};

/// A [`RelativeRect`] as handed to JavaScript, exported as `RelativeRect`.
#[wasm_bindgen(js_name = RelativeRect)]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct JsRelativeRect {
    /// Width of the child box.
    pub width: f64,
    /// Height of the child box.
    pub height: f64,
    /// Top edge, relative to the top of the parent's content box.
    pub top: f64,
    /// Left edge, relative to the left of the parent's content box.
    pub left: f64,
    /// `top + height`.
    pub bottom: f64,
    /// `left + width`.
    pub right: f64,
}

impl From<RelativeRect> for JsRelativeRect {
    fn from(rect: RelativeRect) -> Self {
        Self {
            width: rect.width,
            height: rect.height,
            top: rect.top,
            left: rect.left,
            bottom: rect.bottom,
            right: rect.right,
        }
    }
}

/// `getRelativeBoundingClientRect(childElement, parentElement)`
///
/// Measures `child` relative to the content box of `parent`.
/// Throws an `Error` if either argument is `null` or `undefined`.
#[wasm_bindgen(js_name = getRelativeBoundingClientRect)]
pub fn get_relative_bounding_client_rect(
    child: Option<web_sys::Element>,
    parent: Option<web_sys::Element>,
) -> Result<JsRelativeRect, JsError> {
    crate::relative_bounding_client_rect(child.as_ref(), parent.as_ref())
        .map(JsRelativeRect::from)
        .map_err(|err| match err {
            RectError::InvalidArgument(_) => {
                JsError::new("Both childElement and parentElement must be provided")
            }
        })
}

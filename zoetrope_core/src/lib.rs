// Copyright 2026 the Zoetrope Authors
// SPDX-License-Identifier: Apache-2.0

//! Zoetrope Core measures where a rendered element sits inside the content box of one of its ancestors.
//!
//! A rendering surface (usually a browser document) is not accessed directly.
//! Instead, two capabilities are injected:
//!
//! - [`LayoutQuery`], which reports an element's bounding box in viewport coordinates, and
//! - [`StyleResolution`], which reports an element's resolved style as CSS length strings.
//!
//! Given both, [`compute_relative_rect`] (or a [`RelativeRectCalculator`] holding them)
//! translates a child's box into the coordinate space whose origin is the top-left corner
//! of the ancestor's content box, i.e. inside its border and padding.
//!
//! The computation is a snapshot: nothing is cached, observed, or recomputed when layout changes.
//! It does not check that the ancestor actually contains the child.
//!
//! ## Feature Flags
//!
//! - `kurbo`: Conversions from [`ClientRect`] and [`RelativeRect`] into [`kurbo`] shapes.
//!
//! The web binding of these capabilities lives in the `zoetrope_web` crate.

#![cfg_attr(not(test), no_std)]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
// LINEBENDER LINT SET - v1
// See https://linebender.org/wiki/canonical-lints/
// These lints aren't included in Cargo.toml because they
// shouldn't apply to examples and tests
#![warn(unused_crate_dependencies)]
#![warn(clippy::print_stdout, clippy::print_stderr)]
#![deny(clippy::trivially_copy_pass_by_ref)]

extern crate alloc;

mod error;
pub use error::{MissingElement, RectError};

mod length;
pub use length::parse_css_float;

mod rect;
pub use rect::{ClientRect, ContentOffset, RelativeRect};

mod surface;
pub use surface::{BoxEdgeProperty, ComputedStyle, LayoutQuery, StyleResolution};

mod calculator;
pub use calculator::{RelativeRectCalculator, compute_relative_rect};

#[cfg(feature = "kurbo")]
pub use kurbo;

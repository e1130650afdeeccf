// Copyright 2026 the Zoetrope Authors
// SPDX-License-Identifier: Apache-2.0

use std::cell::Cell;
use std::collections::HashMap;

use zoetrope_core::*;

/// A stand-in for a DOM element.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub(crate) struct TestElement(pub u32);

/// A rendering surface whose layout and styles are set up by hand.
///
/// It counts how often it is queried, so tests can check that nothing is read
/// when arguments are rejected.
#[derive(Default)]
pub(crate) struct TestSurface {
    rects: HashMap<TestElement, ClientRect>,
    styles: HashMap<TestElement, TestStyle>,
    pub layout_queries: Cell<u32>,
    pub style_queries: Cell<u32>,
}

/// Serialized style values of one element; unset properties read as absent.
#[derive(Clone, Default, Debug)]
pub(crate) struct TestStyle(pub HashMap<BoxEdgeProperty, String>);

impl TestStyle {
    /// Border and padding on the top and left edges, given in pixels.
    pub(crate) fn insets(
        padding_top: f64,
        padding_left: f64,
        border_top: f64,
        border_left: f64,
    ) -> Self {
        Self::default()
            .with(BoxEdgeProperty::PaddingTop, &format!("{padding_top}px"))
            .with(BoxEdgeProperty::PaddingLeft, &format!("{padding_left}px"))
            .with(BoxEdgeProperty::BorderTopWidth, &format!("{border_top}px"))
            .with(BoxEdgeProperty::BorderLeftWidth, &format!("{border_left}px"))
    }

    pub(crate) fn with(mut self, property: BoxEdgeProperty, value: &str) -> Self {
        self.0.insert(property, value.to_owned());
        self
    }
}

impl ComputedStyle for TestStyle {
    fn property_value(&self, property: BoxEdgeProperty) -> Option<String> {
        self.0.get(&property).cloned()
    }
}

impl TestSurface {
    pub(crate) fn element(&mut self, id: u32, rect: ClientRect, style: TestStyle) -> TestElement {
        let element = TestElement(id);
        self.rects.insert(element, rect);
        self.styles.insert(element, style);
        element
    }

    pub(crate) fn queries(&self) -> u32 {
        self.layout_queries.get() + self.style_queries.get()
    }
}

impl LayoutQuery<TestElement> for TestSurface {
    fn bounding_client_rect(&self, element: &TestElement) -> ClientRect {
        self.layout_queries.set(self.layout_queries.get() + 1);
        // Detached elements have an all-zero box, like in a browser.
        self.rects.get(element).copied().unwrap_or_default()
    }
}

impl StyleResolution<TestElement> for TestSurface {
    type Style = TestStyle;

    fn computed_style(&self, element: &TestElement) -> TestStyle {
        self.style_queries.set(self.style_queries.get() + 1);
        self.styles.get(element).cloned().unwrap_or_default()
    }
}

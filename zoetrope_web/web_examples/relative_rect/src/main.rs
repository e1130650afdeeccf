// Copyright 2026 the Zoetrope Authors
// SPDX-License-Identifier: Apache-2.0

//! Measures a box nested in a padded, bordered container and logs the result.

use tracing::Level;
use tracing_subscriber::layer::SubscriberExt;
use wasm_bindgen::{JsCast, UnwrapThrowExt};
use zoetrope_web::{document, document_body, relative_bounding_client_rect};

fn styled_div(styles: &[(&str, &str)]) -> web_sys::HtmlElement {
    let div: web_sys::HtmlElement = document()
        .create_element("div")
        .unwrap_throw()
        .dyn_into()
        .unwrap_throw();
    let style = div.style();
    for (name, value) in styles {
        style.set_property(name, value).unwrap_throw();
    }
    div
}

fn init_tracing() {
    // Ignored if the panic hook is already set
    console_error_panic_hook::set_once();

    let config = tracing_wasm::WASMLayerConfigBuilder::new()
        .set_max_level(Level::TRACE)
        .build();
    let subscriber =
        tracing_subscriber::Registry::default().with(tracing_wasm::WASMLayer::new(config));
    _ = tracing::subscriber::set_global_default(subscriber);
}

pub fn main() {
    init_tracing();

    let container = styled_div(&[
        ("position", "absolute"),
        ("top", "100px"),
        ("left", "50px"),
        ("width", "300px"),
        ("height", "200px"),
        ("padding", "10px 0 0 5px"),
        ("border", "solid black"),
        ("border-width", "2px 0 0 1px"),
    ]);
    let child = styled_div(&[
        ("margin-top", "40px"),
        ("margin-left", "30px"),
        ("width", "20px"),
        ("height", "10px"),
        ("background", "tomato"),
    ]);
    container.append_child(&child).unwrap_throw();
    document_body().append_child(&container).unwrap_throw();

    // The margins are exactly the child's offset within the container's content box.
    match relative_bounding_client_rect(Some(&*child), Some(&*container)) {
        Ok(rect) => tracing::info!(?rect, "child relative to the container's content box"),
        Err(err) => tracing::error!(%err, "couldn't measure the child"),
    }

    match relative_bounding_client_rect(Some(&*child), None) {
        Ok(rect) => tracing::error!(?rect, "measured without an ancestor"),
        Err(err) => tracing::info!(%err, "rejected as expected"),
    }
}

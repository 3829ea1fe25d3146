//! Attach the widget to the host page.
//!
//! The host page is expected to provide `#ai-chatbot-root`. Pages without it
//! get the widget in `#root`, which is created at the end of `<body>` when
//! missing.

#[cfg(test)]
#[path = "mount_test.rs"]
mod mount_test;

use crate::config::WidgetConfig;

/// Where the widget will be mounted.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MountTarget {
    /// The configured host element exists.
    Preferred(String),
    /// Only the generic fallback element exists.
    Fallback(String),
    /// Neither exists; a fallback element must be created.
    Create(String),
}

impl MountTarget {
    pub fn element_id(&self) -> &str {
        match self {
            Self::Preferred(id) | Self::Fallback(id) | Self::Create(id) => id,
        }
    }
}

/// Pick the mount target given a predicate telling which element ids exist.
pub fn resolve_mount_target(config: &WidgetConfig, exists: impl Fn(&str) -> bool) -> MountTarget {
    if exists(&config.mount_element_id) {
        MountTarget::Preferred(config.mount_element_id.clone())
    } else if exists(&config.fallback_element_id) {
        MountTarget::Fallback(config.fallback_element_id.clone())
    } else {
        MountTarget::Create(config.fallback_element_id.clone())
    }
}

#[cfg(feature = "csr")]
fn create_host(document: &web_sys::Document, id: &str) -> Option<web_sys::Element> {
    let el = document.create_element("div").ok()?;
    el.set_id(id);
    document.body()?.append_child(&el).ok()?;
    Some(el)
}

/// Mount the widget into the resolved host element for the lifetime of the page.
#[cfg(feature = "csr")]
pub fn mount_widget(config: WidgetConfig) {
    use leptos::prelude::*;
    use wasm_bindgen::JsCast;

    use crate::app::App;

    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        log::error!("no document available; widget not mounted");
        return;
    };

    let target = resolve_mount_target(&config, |id| document.get_element_by_id(id).is_some());
    let element = match &target {
        MountTarget::Preferred(id) => document.get_element_by_id(id),
        MountTarget::Fallback(id) => {
            log::warn!("#{} not found; mounting into #{id}", config.mount_element_id);
            document.get_element_by_id(id)
        }
        MountTarget::Create(id) => {
            log::warn!("#{} not found; creating #{id}", config.mount_element_id);
            create_host(&document, id)
        }
    };
    let Some(host) = element.and_then(|el| el.dyn_into::<web_sys::HtmlElement>().ok()) else {
        log::error!("could not resolve #{} as an HTML element", target.element_id());
        return;
    };

    log::debug!("mounting widget into #{}", target.element_id());
    leptos::mount::mount_to(host, move || view! { <App config=config/> }).forget();
}

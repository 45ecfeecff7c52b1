// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! WebAssembly bindings for the site search widget.
//!
//! The page script owns the DOM and the timers; this side owns every
//! decision. Each event method returns the list of effects to apply, in
//! order, as plain objects tagged by `type`.
//!
//! ```js
//! const search = await loadSiteSearch({ indexPath: "/search.json" });
//! document.addEventListener("keydown", (e) => {
//!     apply(search.keydown(e.key, e.ctrlKey, e.metaKey), e);
//! });
//! input.addEventListener("input", () => apply(search.input(input.value, Date.now())));
//! ```
//!
//! If the index cannot be fetched, `loadSiteSearch` still resolves: the
//! handle is disabled, the failure goes to `console.error`, and every event
//! method returns an empty effect list.

use crate::config::SearchConfig;
use crate::error::LoadError;
use crate::loader::parse_response;
use crate::modal::{Key, KeyPress, ModalEvent};
use crate::render::modal_markup;
use crate::site::SiteSearch;
use crate::types::Document;
use serde::Serialize;
use serde_wasm_bindgen::to_value;
use std::fmt::Display;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

fn js_error(e: impl Display) -> JsValue {
    JsValue::from_str(&e.to_string())
}

fn to_js<T: Serialize + ?Sized>(value: &T) -> Result<JsValue, JsValue> {
    to_value(value).map_err(js_error)
}

/// Host timestamps arrive as `Date.now()` doubles.
fn millis(now: f64) -> u64 {
    if now.is_finite() && now > 0.0 {
        now as u64
    } else {
        0
    }
}

fn parse_config(config: JsValue) -> Result<SearchConfig, JsValue> {
    let config: SearchConfig = if config.is_undefined() || config.is_null() {
        SearchConfig::default()
    } else {
        serde_wasm_bindgen::from_value(config)
            .map_err(|e| JsValue::from_str(&format!("Invalid config: {}", e)))?
    };
    config.validate().map_err(js_error)?;
    Ok(config)
}

/// The search widget for one page.
#[wasm_bindgen]
pub struct SiteSearchHandle {
    inner: SiteSearch,
}

#[wasm_bindgen]
impl SiteSearchHandle {
    /// Create a handle in the loading state. `config` may be omitted.
    #[wasm_bindgen(constructor)]
    pub fn new(config: JsValue) -> Result<SiteSearchHandle, JsValue> {
        Ok(SiteSearchHandle {
            inner: SiteSearch::new(parse_config(config)?),
        })
    }

    /// Attach an index response fetched by the page. Returns the readiness.
    #[wasm_bindgen(js_name = "attachResponse")]
    pub fn attach_response(&mut self, status: u16, body: &str) -> Result<JsValue, JsValue> {
        let loaded = parse_response(&self.inner.config().index_path, status, body.as_bytes());
        let readiness = self.inner.attach(loaded);
        to_js(&readiness)
    }

    /// Record a failed fetch. The handle becomes disabled.
    #[wasm_bindgen(js_name = "attachError")]
    pub fn attach_error(&mut self, message: &str) -> Result<JsValue, JsValue> {
        let readiness = self
            .inner
            .attach(Err(LoadError::Network(message.to_string())));
        to_js(&readiness)
    }

    /// `"loading"`, `"ready"` or `"disabled"`.
    pub fn readiness(&self) -> Result<JsValue, JsValue> {
        to_js(&self.inner.readiness())
    }

    /// `"closed"`, `"openEmpty"`, `"openResults"` or `"openNoResults"`.
    pub fn state(&self) -> Result<JsValue, JsValue> {
        to_js(&self.inner.state())
    }

    #[wasm_bindgen(js_name = "indexPath")]
    pub fn index_path(&self) -> String {
        self.inner.config().index_path.clone()
    }

    pub fn keydown(&mut self, key: &str, ctrl: bool, meta: bool) -> Result<JsValue, JsValue> {
        let press = KeyPress {
            key: Key::from_dom(key),
            ctrl,
            meta,
        };
        self.dispatch(ModalEvent::Key(press))
    }

    pub fn input(&mut self, value: String, now: f64) -> Result<JsValue, JsValue> {
        self.dispatch(ModalEvent::Input {
            value,
            now_ms: millis(now),
        })
    }

    #[wasm_bindgen(js_name = "debounceElapsed")]
    pub fn debounce_elapsed(&mut self, now: f64) -> Result<JsValue, JsValue> {
        self.dispatch(ModalEvent::DebounceElapsed { now_ms: millis(now) })
    }

    #[wasm_bindgen(js_name = "openButton")]
    pub fn open_button(&mut self) -> Result<JsValue, JsValue> {
        self.dispatch(ModalEvent::OpenButton)
    }

    #[wasm_bindgen(js_name = "backdropClick")]
    pub fn backdrop_click(&mut self) -> Result<JsValue, JsValue> {
        self.dispatch(ModalEvent::BackdropClick)
    }

    #[wasm_bindgen(js_name = "closeButton")]
    pub fn close_button(&mut self) -> Result<JsValue, JsValue> {
        self.dispatch(ModalEvent::CloseButton)
    }

    #[wasm_bindgen(js_name = "resultClick")]
    pub fn result_click(&mut self, index: usize) -> Result<JsValue, JsValue> {
        self.dispatch(ModalEvent::ResultClick { index })
    }

    /// Dispatch an event object, e.g. `{ type: "backdropClick" }`.
    #[wasm_bindgen(js_name = "handleEvent")]
    pub fn handle_event(&mut self, event: JsValue) -> Result<JsValue, JsValue> {
        let event: ModalEvent = serde_wasm_bindgen::from_value(event)
            .map_err(|e| JsValue::from_str(&format!("Invalid event: {}", e)))?;
        self.dispatch(event)
    }

    /// The inner HTML for `#site-search-results`.
    #[wasm_bindgen(js_name = "resultsHtml")]
    pub fn results_html(&self) -> String {
        self.inner.view().to_html()
    }

    /// The structured view, for hosts that build their own DOM.
    pub fn view(&self) -> Result<JsValue, JsValue> {
        to_js(&self.inner.view())
    }
}

impl SiteSearchHandle {
    fn dispatch(&mut self, event: ModalEvent) -> Result<JsValue, JsValue> {
        let effects = self.inner.handle(event);
        to_js(&effects)
    }
}

/// Create a handle, fetch its index, and attach the outcome.
///
/// Resolves to a ready or disabled handle. Rejects only on invalid config.
#[wasm_bindgen(js_name = "loadSiteSearch")]
pub async fn load_site_search(config: JsValue) -> Result<SiteSearchHandle, JsValue> {
    let mut handle = SiteSearchHandle::new(config)?;
    let path = handle.inner.config().index_path.clone();
    let loaded = fetch_index(&path).await;
    if let Err(e) = &loaded {
        web_sys::console::error_2(
            &JsValue::from_str("Search initialization failed:"),
            &JsValue::from_str(&e.to_string()),
        );
    }
    handle.inner.attach(loaded);
    Ok(handle)
}

/// The static modal skeleton the page should contain once.
#[wasm_bindgen(js_name = "modalMarkup")]
pub fn modal_markup_js() -> String {
    modal_markup()
}

async fn fetch_index(path: &str) -> Result<Vec<Document>, LoadError> {
    use js_sys::{Function, Promise, Reflect};
    use wasm_bindgen_futures::JsFuture;

    let global = js_sys::global();
    let fetch_fn = Reflect::get(&global, &JsValue::from_str("fetch"))
        .map_err(|_| LoadError::Network("fetch API unavailable".to_string()))?
        .dyn_into::<Function>()
        .map_err(|_| LoadError::Network("fetch is not callable".to_string()))?;

    let promise = fetch_fn
        .call1(&global, &JsValue::from_str(path))
        .map_err(|e| LoadError::Network(format!("fetch call failed: {:?}", e)))?;
    let resp_value = JsFuture::from(Promise::from(promise))
        .await
        .map_err(|e| LoadError::Network(format!("fetch failed: {:?}", e)))?;
    let resp: web_sys::Response = resp_value
        .dyn_into()
        .map_err(|_| LoadError::Network("not a Response".to_string()))?;

    let status = resp.status();
    if !resp.ok() {
        return Err(LoadError::Status {
            path: path.to_string(),
            status,
        });
    }

    let text = JsFuture::from(
        resp.text()
            .map_err(|e| LoadError::Network(format!("failed to read body: {:?}", e)))?,
    )
    .await
    .map_err(|e| LoadError::Network(format!("failed to read body: {:?}", e)))?;
    let body = text.as_string().unwrap_or_default();

    parse_response(path, status, body.as_bytes())
}

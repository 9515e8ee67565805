// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! WebAssembly bindings.
//!
//! Exposes one class, `SiteSearch`, that a page constructs at startup. The
//! host keeps ownership of the DOM and of timers; this side keeps the index
//! and decides what to show.
//!
//! ```js
//! const search = new SiteSearch({ maxResults: 10 });
//! search.load((path) => fetch(path).then((r) => {
//!   if (!r.ok) throw r.status;
//!   return r.text();
//! })).catch(console.error);
//!
//! input.addEventListener('input', () => {
//!   const delay = search.onInput(input.value, performance.now());
//!   setTimeout(() => {
//!     const view = search.flush(performance.now());
//!     if (view) show(view);
//!   }, delay);
//! });
//! ```
//!
//! Every keystroke arms a timer, but `flush` only returns a view for the
//! last keystroke once its quiet period is over; earlier timers get
//! `undefined`.

use crate::config::SearchConfig;
use crate::error::LoadError;
use crate::loader::{Fetch, IndexLoader};
use crate::render::RenderedView;
use crate::session::SearchSession;
use crate::types::SearchMode;
use js_sys::{Function, Math, Promise};
use serde_wasm_bindgen::{from_value, to_value};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::{future_to_promise, JsFuture};

/// Text of a thrown JS value, for error messages.
fn describe(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}

/// Fetches through a JS function `(path) => Promise<string>`.
///
/// A rejection with a number is read as an HTTP status, anything else as a
/// transport failure.
struct JsFetcher {
    fetch: Function,
}

impl Fetch for JsFetcher {
    async fn fetch(&self, path: &str) -> Result<String, LoadError> {
        let failed = |value: JsValue| match value.as_f64() {
            Some(status) => LoadError::Status {
                path: path.to_string(),
                status: status as u16,
            },
            None => LoadError::Transport {
                path: path.to_string(),
                reason: describe(&value),
            },
        };

        let pending = self
            .fetch
            .call1(&JsValue::NULL, &JsValue::from_str(path))
            .map_err(failed)?;
        let body = JsFuture::from(Promise::resolve(&pending))
            .await
            .map_err(failed)?;

        body.as_string().ok_or_else(|| LoadError::Transport {
            path: path.to_string(),
            reason: "fetch callback did not resolve to a string".to_string(),
        })
    }
}

fn view_to_js(view: &RenderedView) -> Result<JsValue, JsValue> {
    to_value(view).map_err(JsValue::from)
}

/// WASM-accessible search session.
#[wasm_bindgen]
pub struct SiteSearch {
    session: Rc<RefCell<SearchSession>>,
}

#[wasm_bindgen]
impl SiteSearch {
    /// Create a session with nothing loaded. `options` is an optional
    /// `SearchConfig`-shaped object (camelCase keys, all optional).
    #[wasm_bindgen(constructor)]
    pub fn new(options: JsValue) -> Result<SiteSearch, JsValue> {
        let config: SearchConfig = if options.is_undefined() || options.is_null() {
            SearchConfig::default()
        } else {
            from_value(options).map_err(|e| e.to_string())?
        };
        let seed = (Math::random() * u64::MAX as f64) as u64;
        Ok(SiteSearch {
            session: Rc::new(RefCell::new(SearchSession::new(config, seed))),
        })
    }

    /// Load the configured index path through `fetch`. Resolves with the
    /// number of entries kept, rejects with the load error message.
    #[wasm_bindgen]
    pub fn load(&self, fetch: Function) -> Promise {
        let session = Rc::clone(&self.session);
        let loader = IndexLoader::from_config(session.borrow().config());

        future_to_promise(async move {
            let index = loader
                .load(&JsFetcher { fetch })
                .await
                .map_err(|e| JsValue::from_str(&e.to_string()))?;
            let kept = index.len();
            session.borrow_mut().set_index(index);
            Ok(JsValue::from(kept as u32))
        })
    }

    #[wasm_bindgen(js_name = isLoaded)]
    pub fn is_loaded(&self) -> bool {
        self.session.borrow().is_loaded()
    }

    /// Keyword search, immediately.
    #[wasm_bindgen]
    pub fn search(&self, query: &str) -> Result<JsValue, JsValue> {
        let view = self.session.borrow_mut().search(query, SearchMode::Keyword);
        view_to_js(&view)
    }

    /// Phrase search with snippet windows, for the dedicated search page.
    #[wasm_bindgen(js_name = searchPhrase)]
    pub fn search_phrase(&self, query: &str) -> Result<JsValue, JsValue> {
        let view = self.session.borrow_mut().search(query, SearchMode::Phrase);
        view_to_js(&view)
    }

    /// Record a keystroke; returns how long the host should wait before `flush`.
    #[wasm_bindgen(js_name = onInput)]
    pub fn on_input(&self, query: &str, now_ms: f64) -> f64 {
        let mut session = self.session.borrow_mut();
        session.on_input(now_ms as u64, query, SearchMode::Keyword);
        session.config().debounce_ms as f64
    }

    /// The view for the pending keystroke if it is due, else `undefined`.
    #[wasm_bindgen]
    pub fn flush(&self, now_ms: f64) -> Result<JsValue, JsValue> {
        match self.session.borrow_mut().poll(now_ms as u64) {
            Some(view) => view_to_js(&view),
            None => Ok(JsValue::UNDEFINED),
        }
    }

    /// The clear button.
    #[wasm_bindgen]
    pub fn clear(&self) -> Result<JsValue, JsValue> {
        let view = self.session.borrow_mut().clear();
        view_to_js(&view)
    }
}

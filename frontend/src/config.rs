use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:3000/api";

/// Deploy-time settings, served next to the bundle as `config.json`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RuntimeConfig {
    pub api_base_url: Option<String>,
}

static API_BASE_URL: OnceLock<String> = OnceLock::new();

/// Reads `window.<global>.api_base_url` (or the upper-case key), e.g.
/// `window.__WORKSHIFT_ENV = { API_BASE_URL: "..." }`.
fn read_global(global: &str) -> Option<String> {
    let window = web_sys::window()?;
    let value = js_sys::Reflect::get(&window, &global.into()).ok()?;
    if value.is_undefined() || value.is_null() {
        return None;
    }
    let obj = js_sys::Object::from(value);
    ["api_base_url", "API_BASE_URL"]
        .iter()
        .filter_map(|key| js_sys::Reflect::get(&obj, &(*key).into()).ok())
        .find_map(|v| v.as_string())
}

fn snapshot_from_globals() -> Option<String> {
    read_global("__WORKSHIFT_ENV").or_else(|| read_global("__WORKSHIFT_CONFIG"))
}

fn cache_base_url(value: &str) -> String {
    let value = value.to_string();
    let _ = API_BASE_URL.set(value.clone());
    value
}

/// Mirrors a fetched config back onto the window so later page scripts can
/// read it without refetching.
fn write_window_config(cfg: &RuntimeConfig) {
    let Some(url) = &cfg.api_base_url else {
        return;
    };
    let Some(window) = web_sys::window() else {
        return;
    };
    let obj = js_sys::Object::new();
    let _ = js_sys::Reflect::set(
        &obj,
        &"api_base_url".into(),
        &wasm_bindgen::JsValue::from_str(url),
    );
    let _ = js_sys::Reflect::set(&window, &"__WORKSHIFT_CONFIG".into(), &obj);
}

async fn fetch_runtime_config() -> Option<RuntimeConfig> {
    let resp = reqwest::get("./config.json").await.ok()?;
    if !resp.status().is_success() {
        return None;
    }
    resp.json::<RuntimeConfig>().await.ok()
}

pub async fn await_api_base_url() -> String {
    if let Some(cached) = API_BASE_URL.get() {
        return cached.clone();
    }
    if let Some(existing) = snapshot_from_globals() {
        return cache_base_url(&existing);
    }
    if let Some(cfg) = fetch_runtime_config().await {
        write_window_config(&cfg);
        if let Some(url) = cfg.api_base_url {
            return cache_base_url(&url);
        }
    }
    cache_base_url(DEFAULT_API_BASE_URL)
}

pub async fn init() {
    let _ = await_api_base_url().await;
}

//! Host bridge over the Tauri `invoke` API.
//!
//! Commands are sent as `window.__TAURI__.core.invoke(cmd, { path })`. The
//! host replies with JSON-compatible values or rejects with a string.

use glance_core::error::HostError;
use glance_core::host::{HostBridge, PathArgs, commands};
use glance_core::DirectoryEntry;
use js_sys::{Function, Promise, Reflect, Uint8Array};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;

use super::dom;

/// [`HostBridge`] backed by the Tauri command bridge.
#[derive(Clone, Copy, Debug, Default)]
pub struct TauriHost;

/// Get a property of a JS object, treating `undefined`/`null` as missing.
fn property(target: &JsValue, key: &str) -> Option<JsValue> {
    Reflect::get(target, &JsValue::from_str(key))
        .ok()
        .filter(|value| !value.is_undefined() && !value.is_null())
}

/// The `window.__TAURI__.core` namespace, if the bridge has been injected.
fn bridge() -> Option<JsValue> {
    let window = dom::window()?;
    let tauri = property(&window, "__TAURI__")?;
    property(&tauri, "core")
}

/// Check whether the host bridge is present.
pub fn is_available() -> bool {
    bridge().is_some()
}

/// Best-effort text of a rejection value.
fn js_message(value: &JsValue) -> String {
    if let Some(text) = value.as_string() {
        return text;
    }
    if let Some(error) = value.dyn_ref::<js_sys::Error>() {
        return String::from(error.message());
    }
    format!("{:?}", value)
}

/// Encode the `{ path }` argument object of a command.
fn encode_args(path: &str) -> Result<JsValue, HostError> {
    serde_wasm_bindgen::to_value(&PathArgs { path })
        .map_err(|e| HostError::InvalidRequest(e.to_string()))
}

async fn invoke(cmd: &str, path: &str) -> Result<JsValue, HostError> {
    let core = bridge().ok_or(HostError::Unavailable)?;
    let invoke = property(&core, "invoke")
        .and_then(|f| f.dyn_into::<Function>().ok())
        .ok_or(HostError::Unavailable)?;

    let args = encode_args(path)?;

    let promise = invoke
        .call2(&core, &JsValue::from_str(cmd), &args)
        .map_err(|e| HostError::Rejected(js_message(&e)))?
        .dyn_into::<Promise>()
        .map_err(|_| HostError::InvalidReply(format!("{cmd} did not return a promise")))?;

    JsFuture::from(promise)
        .await
        .map_err(|e| HostError::Rejected(js_message(&e)))
}

impl HostBridge for TauriHost {
    async fn read_directory(&self, path: &str) -> Result<Vec<DirectoryEntry>, HostError> {
        let reply = invoke(commands::READ_DIRECTORY, path).await?;
        serde_wasm_bindgen::from_value(reply).map_err(|e| HostError::InvalidReply(e.to_string()))
    }

    async fn read_file_binary(&self, path: &str) -> Result<Vec<u8>, HostError> {
        let reply = invoke(commands::READ_FILE_BINARY, path).await?;
        if let Some(bytes) = reply.dyn_ref::<Uint8Array>() {
            return Ok(bytes.to_vec());
        }
        serde_wasm_bindgen::from_value(reply).map_err(|e| HostError::InvalidReply(e.to_string()))
    }

    async fn open_file(&self, path: &str) -> Result<(), HostError> {
        invoke(commands::OPEN_FILE, path).await.map(|_| ())
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_bridge_missing_outside_tauri() {
        assert!(!is_available());
    }

    #[wasm_bindgen_test]
    async fn test_commands_fail_without_bridge() {
        let err = TauriHost.read_directory("/").await.unwrap_err();
        assert_eq!(err, HostError::Unavailable);
    }

    #[wasm_bindgen_test]
    fn test_encode_args() {
        let args = encode_args("/home/").unwrap();
        assert_eq!(property(&args, "path").and_then(|p| p.as_string()).as_deref(), Some("/home/"));
    }

    #[wasm_bindgen_test]
    fn test_js_message() {
        assert_eq!(js_message(&JsValue::from_str("denied")), "denied");
        let error = js_sys::Error::new("boom");
        assert_eq!(js_message(&error.into()), "boom");
    }
}

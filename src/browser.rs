//! Browser Glue
//!
//! localStorage, window events, page title, navigation and file downloads.

use gloo_timers::callback::Timeout;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use whitepaperiq_core::{SessionStorage, StorageChange};

/// In-page event fired after a login in this tab
pub const LOGGED_IN_EVENT: &str = "user-logged-in";
/// Delay before a download's object URL is released
const REVOKE_DELAY_MS: u32 = 1_000;

/// `window.localStorage`; silently empty when storage is unavailable
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorage;

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

impl SessionStorage for LocalStorage {
    fn get(&self, key: &str) -> Option<String> {
        local_storage()?.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) {
        let stored = local_storage().map(|storage| storage.set_item(key, value).is_ok());
        if stored != Some(true) {
            tracing::warn!(key, "localStorage write failed");
        }
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = local_storage() {
            let _ = storage.remove_item(key);
        }
    }
}

/// Full page load; drops all in-memory state
pub fn redirect(path: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.location().set_href(path);
    }
}

pub fn origin() -> String {
    web_sys::window()
        .and_then(|window| window.location().origin().ok())
        .unwrap_or_default()
}

pub fn set_page_title(title: &str) {
    if let Some(document) = web_sys::window().and_then(|window| window.document()) {
        document.set_title(&format!("{title} - WhitepaperIQ"));
    }
}

pub fn dispatch_logged_in() {
    let Some(window) = web_sys::window() else { return };
    match web_sys::Event::new(LOGGED_IN_EVENT) {
        Ok(event) => {
            let _ = window.dispatch_event(&event);
        }
        Err(_) => tracing::warn!("could not create {LOGGED_IN_EVENT} event"),
    }
}

/// Storage changes made by other tabs
pub fn on_storage_change(handler: impl Fn(StorageChange) + 'static) {
    let callback = Closure::<dyn FnMut(web_sys::StorageEvent)>::new(move |ev: web_sys::StorageEvent| {
        handler(StorageChange {
            key: ev.key(),
            new_value: ev.new_value(),
        });
    });
    if let Some(window) = web_sys::window() {
        let _ = window.add_event_listener_with_callback("storage", callback.as_ref().unchecked_ref());
    }
    callback.forget();
}

pub fn on_logged_in(handler: impl Fn() + 'static) {
    let callback = Closure::<dyn FnMut(web_sys::Event)>::new(move |_ev: web_sys::Event| handler());
    if let Some(window) = web_sys::window() {
        let _ = window.add_event_listener_with_callback(LOGGED_IN_EVENT, callback.as_ref().unchecked_ref());
    }
    callback.forget();
}

/// Save bytes as a file through a temporary object URL
pub fn download_bytes(bytes: &[u8], filename: &str, mime: &str) -> Result<(), String> {
    let document = web_sys::window()
        .and_then(|window| window.document())
        .ok_or("document unavailable")?;

    let parts = js_sys::Array::new();
    parts.push(&js_sys::Uint8Array::from(bytes));
    let options = web_sys::BlobPropertyBag::new();
    options.set_type(mime);
    let blob = web_sys::Blob::new_with_u8_array_sequence_and_options(&parts, &options)
        .map_err(|_| "could not create file")?;
    let url = web_sys::Url::create_object_url_with_blob(&blob).map_err(|_| "could not create download link")?;

    let anchor = document
        .create_element("a")
        .map_err(|_| "could not create download link")?
        .dyn_into::<web_sys::HtmlAnchorElement>()
        .map_err(|_| "could not create download link")?;
    anchor.set_href(&url);
    anchor.set_download(filename);
    anchor.click();

    // Revoking in the same tick can cancel the download
    Timeout::new(REVOKE_DELAY_MS, move || {
        let _ = web_sys::Url::revoke_object_url(&url);
    })
    .forget();
    Ok(())
}

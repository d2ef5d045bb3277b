//! Application Context
//!
//! Shared state provided via Leptos Context API.

use leptos::prelude::*;

use crate::api::HttpBackend;

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// REST back end every widget fetches from
    backend: StoredValue<HttpBackend>,
    /// Item names from the price stats table - read
    pub item_names: ReadSignal<Vec<String>>,
    /// Item names from the price stats table - write
    set_item_names: WriteSignal<Vec<String>>,
}

impl AppContext {
    pub fn new(backend: HttpBackend, item_names: (ReadSignal<Vec<String>>, WriteSignal<Vec<String>>)) -> Self {
        Self {
            backend: StoredValue::new(backend),
            item_names: item_names.0,
            set_item_names: item_names.1,
        }
    }

    pub fn backend(&self) -> HttpBackend {
        self.backend.get_value()
    }

    /// Publish the known item names for the score selectors
    pub fn set_item_names(&self, names: Vec<String>) {
        self.set_item_names.set(names);
    }
}

/// Get the app context
pub fn use_app_context() -> AppContext {
    use_context::<AppContext>().expect("AppContext should be provided")
}

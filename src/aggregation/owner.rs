// Owner resolution: which tab, browser UI group or extension a sample belongs to

use crate::models::{OwnerId, RawSample};

use super::ExtensionHostIndex;

/// Window id of the browser UI group; workers without a real window land here.
pub const BROWSER_UI_WINDOW_ID: u64 = 1;

/// Window id reported by workers with no associated window
/// (`18446744073709552000` once the upstream double is saturated).
pub const NO_WINDOW_SENTINEL: u64 = u64::MAX;

/// Window id after the worker remap. Only workers are remapped; a document
/// reporting window 0 keeps it.
pub fn effective_window_id(sample: &RawSample) -> u64 {
    let window_id = sample.window_id;
    if sample.is_worker && (window_id == NO_WINDOW_SENTINEL || window_id == 0) {
        BROWSER_UI_WINDOW_ID
    } else {
        window_id
    }
}

/// Extension hosts win over window ids, so an extension's pages and workers
/// group together whatever window they report.
pub fn resolve_owner(sample: &RawSample, index: &ExtensionHostIndex) -> OwnerId {
    match index.get(&sample.host) {
        Some(extension_id) => OwnerId::Extension(extension_id.to_string()),
        None => OwnerId::Window(effective_window_id(sample)),
    }
}

//! Refresh notification for dependent settings pages
//!
//! After a reload or import changes [`AppData`](crate::AppData), every
//! settings page needs to re-read its fields into its own view. Pages
//! register a named callback here; the store invokes them in registration
//! order once the new data is in place.

use crate::data::AppData;
use crate::sync::RwLockExt;
use std::sync::Arc;
use std::sync::RwLock;

/// Type alias for a refresh callback
pub type RefreshCallback = Arc<dyn Fn(&AppData) + Send + Sync>;

/// Registry of named refresh listeners
pub struct RefreshRegistry {
    /// Listeners in registration order. Small and iterated whole, so a Vec
    /// beats a map here.
    listeners: RwLock<Vec<(String, RefreshCallback)>>,
}

impl RefreshRegistry {
    /// Create an empty registry
    #[must_use]
    pub fn new() -> Self {
        Self {
            listeners: RwLock::new(Vec::new()),
        }
    }

    /// Register a refresh listener under a page name.
    ///
    /// Re-registering the same name replaces the previous callback while
    /// keeping its position in the notification order.
    pub fn register<F>(&self, page: &str, callback: F)
    where
        F: Fn(&AppData) + Send + Sync + 'static,
    {
        let mut guard = self.listeners.write_recovered();
        match guard.iter_mut().find(|(name, _)| name == page) {
            Some((_, existing)) => *existing = Arc::new(callback),
            None => guard.push((page.to_string(), Arc::new(callback))),
        }
    }

    /// Remove the listener registered under `page`, if any
    pub fn unregister(&self, page: &str) {
        self.listeners
            .write_recovered()
            .retain(|(name, _)| name != page);
    }

    /// Invoke every registered listener with the freshly reloaded data
    pub fn notify(&self, data: &AppData) {
        // Clone the callbacks out so a listener can re-register during
        // notification without deadlocking.
        let callbacks: Vec<RefreshCallback> = self
            .listeners
            .read_recovered()
            .iter()
            .map(|(_, cb)| cb.clone())
            .collect();

        log::debug!("Notifying {} refresh listener(s)", callbacks.len());
        for callback in callbacks {
            callback(data);
        }
    }

    /// Remove all listeners
    pub fn clear(&self) {
        self.listeners.write_recovered().clear();
    }

    /// Number of registered listeners
    pub fn len(&self) -> usize {
        self.listeners.read_recovered().len()
    }

    /// Whether no listeners are registered
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for RefreshRegistry {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Tests
// =============================================================================

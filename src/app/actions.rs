//! Collaborator callbacks invoked from mode transitions.
//!
//! Both calls are fire-and-forget: the event loop does not inspect a result and continues
//! immediately after the call returns.

use log::info;

/// Receiver of the dashboard's outward-facing requests.
pub trait DashboardActions {
    /// A search was submitted from the search bar.
    fn on_search(&mut self, query: &str);

    /// A library entry was activated.
    fn on_activate(&mut self, index: usize);
}

/// Default collaborator: records requests in the log.
#[derive(Debug, Default)]
pub struct LoggingActions;

impl DashboardActions for LoggingActions {
    fn on_search(&mut self, query: &str) {
        info!("search requested: {query:?}");
    }

    fn on_activate(&mut self, index: usize) {
        info!("library entry {index} activated");
    }
}

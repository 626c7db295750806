//! Initialization observations.

use std::time::Duration;

/// Sink for informational observations emitted during initialization.
///
/// Injected into the registrar so hosts and tests control where
/// observations go. The default implementation forwards to `tracing`.
pub trait ObservationSink: Send + Sync {
    /// The registration pass started.
    fn initialization_started(&self);

    /// One entity type was registered.
    fn entity_registered(&self, type_name: &str);

    /// The registration pass completed.
    fn initialization_completed(&self, registered: usize, elapsed: Duration);
}

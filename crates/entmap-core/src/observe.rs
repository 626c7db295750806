//! Observation sinks.

use std::time::Duration;

use tracing::info;

use entmap_protocols::observe::ObservationSink;

/// Default sink forwarding observations to `tracing` at info level.
pub struct TracingSink;

impl ObservationSink for TracingSink {
    fn initialization_started(&self) {
        info!("Initialization started");
    }

    fn entity_registered(&self, type_name: &str) {
        info!("Registered entity type [{}]", type_name);
    }

    fn initialization_completed(&self, registered: usize, elapsed: Duration) {
        info!(
            "Initialization completed in {} ms, {} entities registered",
            elapsed.as_millis(),
            registered
        );
    }
}

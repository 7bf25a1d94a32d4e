//=========================================================================
// Location Bridge
//=========================================================================
//
// Lifecycle of the single GPS subscription and forwarding of its fixes.
//
// Architecture:
//   enable()  → provider enabled? → request_updates() → last-known fix
//   disable() → remove_updates() (best effort)
//   host delivery → on_location_changed() → EngineBoundary
//
// Service failures never propagate: enable reports them in its outcome
// and logs, disable swallows them and counts as success.
//
//=========================================================================

//=== External Dependencies ===============================================

use log::{debug, error, trace};

//=== Internal Dependencies ===============================================

use crate::core::engine_bridge::EngineBoundary;
use crate::core::host::{LocationFix, LocationService, ServiceError, GPS_PROVIDER};

//=== LocationOutcome =====================================================

/// Result of [`LocationBridge::enable`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LocationOutcome {
    /// Subscription created.
    Subscribed,

    /// A subscription was already active; nothing changed.
    AlreadyActive,

    /// The GPS provider is switched off; nothing was registered.
    ProviderDisabled,

    /// The service failed; the bridge stays inactive.
    Failed(ServiceError),
}

//=== LocationBridge ======================================================

/// Owns at most one GPS update subscription.
pub struct LocationBridge {
    service: Box<dyn LocationService>,
    active: bool,
}

impl LocationBridge {
    pub fn new(service: Box<dyn LocationService>) -> Self {
        Self {
            service,
            active: false,
        }
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    //--- Lifecycle --------------------------------------------------------

    /// Subscribes to GPS updates with no time or distance threshold and
    /// immediately forwards the last known fix, if any.
    pub fn enable<E: EngineBoundary + ?Sized>(&mut self, engine: &mut E) -> LocationOutcome {
        if self.active {
            trace!(target: "shim::location", "GPS already enabled");
            return LocationOutcome::AlreadyActive;
        }

        match self.service.is_provider_enabled(GPS_PROVIDER) {
            Ok(true) => {}
            Ok(false) => {
                debug!(target: "shim::location", "GPS provider disabled, not subscribing");
                return LocationOutcome::ProviderDisabled;
            }
            Err(e) => {
                error!(target: "shim::location", "GPS provider query failed: {}", e);
                return LocationOutcome::Failed(e);
            }
        }

        if let Err(e) = self.service.request_updates(GPS_PROVIDER, 0, 0.0) {
            error!(target: "shim::location", "GPS subscribe failed: {}", e);
            return LocationOutcome::Failed(e);
        }
        self.active = true;
        debug!(target: "shim::location", "GPS enabled");

        // The subscription stands even if the cached fix is unreadable
        match self.service.last_known_fix(GPS_PROVIDER) {
            Ok(Some(fix)) => self.on_location_changed(&fix, engine),
            Ok(None) => trace!(target: "shim::location", "No last known GPS fix"),
            Err(e) => error!(target: "shim::location", "Last known GPS fix unavailable: {}", e),
        }

        LocationOutcome::Subscribed
    }

    /// Removes the subscription. Always leaves the bridge inactive.
    ///
    /// Removal is attempted even when inactive, so a half-completed
    /// enable cannot leave a listener behind.
    pub fn disable(&mut self) {
        if let Err(e) = self.service.remove_updates() {
            debug!(target: "shim::location", "GPS unsubscribe failed (ignored): {}", e);
        }
        if self.active {
            debug!(target: "shim::location", "GPS disabled");
        }
        self.active = false;
    }

    //--- Delivery ---------------------------------------------------------

    pub fn on_location_changed<E: EngineBoundary + ?Sized>(&self, fix: &LocationFix, engine: &mut E) {
        engine.gps(
            fix.latitude,
            fix.longitude,
            fix.accuracy,
            fix.altitude as f32,
            fix.speed,
            fix.bearing,
        );
    }

    pub fn on_provider_enabled(&self, _provider: &str) {}

    pub fn on_provider_disabled(&self, _provider: &str) {}

    pub fn on_status_changed(&self, _provider: &str, _status: i32) {}
}

//=========================================================================
// Unit Tests
//=========================================================================

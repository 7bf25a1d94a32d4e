//=========================================================================
// Activity
//
// Host-facing composition of the shim: one object per foreground screen.
//
// Architecture:
// ```text
//     ActivityBuilder  ──build()──>  Activity
//         │                            │
//         ├─ with_key_repeat_filter()  ├─ on_resume / on_pause / on_destroy
//         ├─ with_sensors()            ├─ on_key_* / on_generic_motion / on_touch
//         ├─ with_location()           ├─ on_sensor_changed / on_location_changed
//         ├─ with_sampling_rate()      └─ drain_commands()
//         └─ with_command_capacity()
// ```
//
// Every method runs on the host UI thread. The only thing handed to
// other threads is a `CommandSender`.
//
//=========================================================================

//=== External Dependencies ===============================================

use log::{debug, info};

//=== Internal Dependencies ===============================================

use crate::core::command::{Capability, Command, CommandDispatcher, CommandSender};
use crate::core::engine_bridge::EngineBoundary;
use crate::core::host::{
    DisplayRotation, LocationFix, LocationService, RenderSurface, SamplingRate, SensorKind,
    SensorSample, SensorService,
};
use crate::core::input::{Disposition, EventNormalizer, GenericMotion, KeyInput, TouchEvent};
use crate::core::sensors::{LocationBridge, SensorBridge};

//=== ActivityConfig ======================================================

/// Resolved activity settings.
///
/// # Default Values
///
/// - **Key repeat filter**: on
/// - **Command queue**: unbounded
/// - **Sampling rate**: `SamplingRate::Game`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActivityConfig {
    filter_key_repeat: bool,
    command_capacity: Option<usize>,
    sampling_rate: SamplingRate,
}

impl ActivityConfig {
    pub fn filter_key_repeat(&self) -> bool {
        self.filter_key_repeat
    }

    pub fn command_capacity(&self) -> Option<usize> {
        self.command_capacity
    }

    pub fn sampling_rate(&self) -> SamplingRate {
        self.sampling_rate
    }
}

impl Default for ActivityConfig {
    fn default() -> Self {
        Self {
            filter_key_repeat: true,
            command_capacity: None,
            sampling_rate: SamplingRate::Game,
        }
    }
}

//=== ActivityBuilder =====================================================

/// Builder for an [`Activity`].
///
/// Sensor and GPS bridging exist only when their host services are
/// supplied; without them the matching commands are logged and ignored.
///
/// # Examples
///
/// ```no_run
/// use loax_shim::prelude::*;
///
/// let activity = ActivityBuilder::new(RecordingBoundary::new(), Box::new(NullRenderSurface))
///     .with_key_repeat_filter(false)
///     .with_sensors(Box::new(NullSensorService), Box::new(FixedRotation(Rotation::Deg0)))
///     .with_location(Box::new(NullLocationService))
///     .with_command_capacity(32)
///     .build();
/// ```
pub struct ActivityBuilder<E: EngineBoundary> {
    engine: E,
    surface: Box<dyn RenderSurface>,
    sensors: Option<(Box<dyn SensorService>, Box<dyn DisplayRotation>)>,
    location: Option<Box<dyn LocationService>>,
    config: ActivityConfig,
}

impl<E: EngineBoundary> ActivityBuilder<E> {
    pub fn new(engine: E, surface: Box<dyn RenderSurface>) -> Self {
        Self {
            engine,
            surface,
            sensors: None,
            location: None,
            config: ActivityConfig::default(),
        }
    }

    /// Drops auto-repeated key-downs when `true`.
    ///
    /// Default: `true`
    pub fn with_key_repeat_filter(mut self, enabled: bool) -> Self {
        self.config.filter_key_repeat = enabled;
        self
    }

    /// Enables motion-sensor bridging.
    pub fn with_sensors(
        mut self,
        service: Box<dyn SensorService>,
        display: Box<dyn DisplayRotation>,
    ) -> Self {
        self.sensors = Some((service, display));
        self
    }

    /// Enables GPS bridging.
    pub fn with_location(mut self, service: Box<dyn LocationService>) -> Self {
        self.location = Some(service);
        self
    }

    /// Sensor delivery rate.
    ///
    /// Default: `SamplingRate::Game`
    pub fn with_sampling_rate(mut self, rate: SamplingRate) -> Self {
        self.config.sampling_rate = rate;
        self
    }

    /// Bounds the command queue. Posts to a full queue are dropped.
    ///
    /// Default: unbounded
    ///
    /// # Panics
    ///
    /// Panics if `capacity == 0`.
    pub fn with_command_capacity(mut self, capacity: usize) -> Self {
        assert!(capacity > 0, "Command capacity must be positive");
        self.config.command_capacity = Some(capacity);
        self
    }

    pub fn build(self) -> Activity<E> {
        let config = self.config;
        info!(
            target: "shim",
            "Building activity (repeat filter: {}, sensors: {}, gps: {}, queue: {:?})",
            config.filter_key_repeat,
            self.sensors.is_some(),
            self.location.is_some(),
            config.command_capacity
        );

        Activity {
            engine: self.engine,
            surface: self.surface,
            normalizer: EventNormalizer::new(config.filter_key_repeat),
            sensors: self
                .sensors
                .map(|(service, display)| SensorBridge::new(service, display, config.sampling_rate)),
            location: self.location.map(LocationBridge::new),
            dispatcher: CommandDispatcher::new(config.command_capacity),
            state: LifecycleState::Created,
            config,
        }
    }
}

//=== LifecycleState ======================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifecycleState {
    Created,
    Resumed,
    Paused,
    Destroyed,
}

//=== Activity ============================================================

/// The shim for one foreground screen.
///
/// Owns the normalizer, the sensor/location bridges, the command
/// dispatcher and the engine boundary. Not `Send`: it stays on the UI
/// thread.
pub struct Activity<E: EngineBoundary> {
    engine: E,
    surface: Box<dyn RenderSurface>,
    normalizer: EventNormalizer,
    sensors: Option<SensorBridge>,
    location: Option<LocationBridge>,
    dispatcher: CommandDispatcher,
    state: LifecycleState,
    config: ActivityConfig,
}

impl<E: EngineBoundary> Activity<E> {
    //--- Accessors --------------------------------------------------------

    pub fn engine(&self) -> &E {
        &self.engine
    }

    pub fn engine_mut(&mut self) -> &mut E {
        &mut self.engine
    }

    pub fn config(&self) -> &ActivityConfig {
        &self.config
    }

    pub fn state(&self) -> LifecycleState {
        self.state
    }

    /// Engine-side command endpoint. Posts after `on_destroy` are dropped.
    pub fn command_sender(&self) -> CommandSender {
        self.dispatcher.sender()
    }

    pub fn is_sensor_enabled(&self, kind: SensorKind) -> bool {
        self.sensors.as_ref().is_some_and(|s| s.is_bound(kind))
    }

    pub fn is_gps_enabled(&self) -> bool {
        self.location.as_ref().is_some_and(LocationBridge::is_active)
    }

    //--- Lifecycle --------------------------------------------------------

    pub fn on_resume(&mut self) {
        if self.state == LifecycleState::Destroyed {
            debug!(target: "shim", "Resume after destroy ignored");
            return;
        }
        info!(target: "shim", "Activity resumed");
        self.surface.resume();
        self.state = LifecycleState::Resumed;
    }

    /// Pauses rendering, then disables every sensor and GPS regardless of
    /// which are active.
    pub fn on_pause(&mut self) {
        if self.state == LifecycleState::Destroyed {
            return;
        }
        info!(target: "shim", "Activity paused");
        self.surface.pause();
        self.release_capabilities();
        self.state = LifecycleState::Paused;
    }

    /// Stops rendering and tears down the command dispatcher. Idempotent.
    pub fn on_destroy(&mut self) {
        if self.state == LifecycleState::Destroyed {
            return;
        }
        info!(target: "shim", "Activity destroyed");
        self.surface.stop();
        self.release_capabilities();
        self.dispatcher.teardown();
        self.state = LifecycleState::Destroyed;
    }

    fn release_capabilities(&mut self) {
        if let Some(sensors) = self.sensors.as_mut() {
            sensors.disable(SensorKind::Accelerometer);
            sensors.disable(SensorKind::MagneticField);
        }
        if let Some(location) = self.location.as_mut() {
            location.disable();
        }
        if let Some(sensors) = self.sensors.as_mut() {
            sensors.disable(SensorKind::Gyroscope);
        }
    }

    //--- Input ------------------------------------------------------------

    pub fn on_key_down(&mut self, event: &KeyInput) -> Disposition {
        self.normalizer.key_down(event, &mut self.engine)
    }

    pub fn on_key_up(&mut self, event: &KeyInput) -> Disposition {
        self.normalizer.key_up(event, &mut self.engine)
    }

    /// `Unhandled` means the host should run its default handling.
    pub fn on_generic_motion(&mut self, event: &GenericMotion) -> Disposition {
        self.normalizer.generic_motion(event, &mut self.engine)
    }

    pub fn on_touch(&mut self, event: &TouchEvent<'_>) -> Disposition {
        self.normalizer.touch(event, &mut self.engine)
    }

    //--- Host Callbacks ---------------------------------------------------

    pub fn on_sensor_changed(&mut self, sample: &SensorSample) {
        if let Some(sensors) = &self.sensors {
            sensors.on_sensor_changed(sample, &mut self.engine);
        }
    }

    pub fn on_accuracy_changed(&mut self, kind: SensorKind, accuracy: i32) {
        if let Some(sensors) = &self.sensors {
            sensors.on_accuracy_changed(kind, accuracy);
        }
    }

    pub fn on_location_changed(&mut self, fix: &LocationFix) {
        if let Some(location) = &self.location {
            location.on_location_changed(fix, &mut self.engine);
        }
    }

    pub fn on_provider_enabled(&mut self, provider: &str) {
        if let Some(location) = &self.location {
            location.on_provider_enabled(provider);
        }
    }

    pub fn on_provider_disabled(&mut self, provider: &str) {
        if let Some(location) = &self.location {
            location.on_provider_disabled(provider);
        }
    }

    pub fn on_status_changed(&mut self, provider: &str, status: i32) {
        if let Some(location) = &self.location {
            location.on_status_changed(provider, status);
        }
    }

    //--- Commands ---------------------------------------------------------

    /// Executes queued engine commands in posting order. Returns how many
    /// ran. Hosts call this whenever the UI thread is woken for commands.
    pub fn drain_commands(&mut self) -> usize {
        let Self { dispatcher, sensors, location, engine, .. } = self;
        dispatcher.drain(|command| execute(command, sensors, location, engine))
    }
}

//--- Command Execution ---------------------------------------------------

fn execute<E: EngineBoundary>(
    command: Command,
    sensors: &mut Option<SensorBridge>,
    location: &mut Option<LocationBridge>,
    engine: &mut E,
) {
    match (command.capability(), command.enables()) {
        (Capability::Sensor(kind), enable) => match sensors {
            Some(bridge) if enable => bridge.enable(kind),
            Some(bridge) => bridge.disable(kind),
            None => debug!(target: "shim::command", "{:?} ignored: no sensor bridging", command),
        },
        (Capability::Gps, enable) => match location {
            Some(bridge) if enable => {
                bridge.enable(engine);
            }
            Some(bridge) => bridge.disable(),
            None => debug!(target: "shim::command", "{:?} ignored: no GPS bridging", command),
        },
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

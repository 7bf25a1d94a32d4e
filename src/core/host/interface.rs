//=========================================================================
// Host Capability Interface
//=========================================================================
//
// Services the shim consumes from the host platform.
//
// The host owns the actual sensor manager, location manager, display and
// render surface. The shim only sees these narrow traits, all of which
// are called from the UI thread.
//
//=========================================================================

//=== ServiceError ========================================================

/// Failure reported by a host service call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ServiceError {
    /// The host refused the call (missing runtime permission).
    PermissionDenied,

    /// The service failed for a reason that may not recur.
    Transient(String),
}

impl std::fmt::Display for ServiceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::PermissionDenied => write!(f, "Permission denied"),
            Self::Transient(e) => write!(f, "Transient service failure: {}", e),
        }
    }
}

impl std::error::Error for ServiceError {}

//=== SensorKind ==========================================================

/// Motion sensor categories bridged to the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SensorKind {
    Accelerometer,
    MagneticField,
    Gyroscope,
}

impl SensorKind {
    pub const ALL: [SensorKind; 3] = [
        SensorKind::Accelerometer,
        SensorKind::MagneticField,
        SensorKind::Gyroscope,
    ];

    /// Dense index, used for per-kind storage.
    pub fn index(self) -> usize {
        match self {
            Self::Accelerometer => 0,
            Self::MagneticField => 1,
            Self::Gyroscope => 2,
        }
    }
}

//=== SensorId ============================================================

/// Opaque host handle for one hardware sensor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SensorId(pub u32);

//=== SamplingRate ========================================================

/// Requested sensor delivery rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SamplingRate {
    Fastest,
    /// Rate suitable for games (the default).
    #[default]
    Game,
    Ui,
    Normal,
}

impl SamplingRate {
    /// Host delay constant for this rate.
    pub fn delay_code(self) -> i32 {
        match self {
            Self::Fastest => 0,
            Self::Game => 1,
            Self::Ui => 2,
            Self::Normal => 3,
        }
    }
}

//=== SensorSample ========================================================

/// One delivery from a sensor listener. Only the first three values are
/// carried; all bridged kinds are 3-axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SensorSample {
    pub kind: SensorKind,
    pub values: [f32; 3],
}

impl SensorSample {
    pub fn new(kind: SensorKind, x: f32, y: f32, z: f32) -> Self {
        Self { kind, values: [x, y, z] }
    }
}

//=== SensorService =======================================================

/// Host sensor manager.
pub trait SensorService {
    /// The default sensor of `kind`, or `None` if the device lacks one.
    fn default_sensor(&mut self, kind: SensorKind) -> Option<SensorId>;

    /// Starts continuous delivery from `sensor`.
    fn register_listener(&mut self, sensor: SensorId, rate: SamplingRate);

    /// Stops delivery from `sensor`.
    fn unregister_listener(&mut self, sensor: SensorId);
}

//=== Rotation ============================================================

/// Display rotation relative to the device's natural orientation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Rotation {
    #[default]
    Deg0,
    Deg90,
    Deg180,
    Deg270,
}

impl Rotation {
    /// Converts a host surface-rotation index (0..=3).
    pub fn from_index(index: i32) -> Option<Self> {
        match index {
            0 => Some(Self::Deg0),
            1 => Some(Self::Deg90),
            2 => Some(Self::Deg180),
            3 => Some(Self::Deg270),
            _ => None,
        }
    }

    pub fn degrees(self) -> i32 {
        match self {
            Self::Deg0 => 0,
            Self::Deg90 => 90,
            Self::Deg180 => 180,
            Self::Deg270 => 270,
        }
    }
}

/// Host query for the current display rotation.
pub trait DisplayRotation {
    fn rotation(&self) -> Rotation;
}

/// A display that never rotates.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixedRotation(pub Rotation);

impl DisplayRotation for FixedRotation {
    fn rotation(&self) -> Rotation {
        self.0
    }
}

//=== Location ============================================================

/// Provider name of the satellite positioning source.
pub const GPS_PROVIDER: &str = "gps";

/// One position fix from the host location service.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LocationFix {
    pub latitude: f64,
    pub longitude: f64,
    pub accuracy: f32,
    pub altitude: f64,
    pub speed: f32,
    pub bearing: f32,
}

/// Host location manager.
pub trait LocationService {
    fn is_provider_enabled(&self, provider: &str) -> Result<bool, ServiceError>;

    /// Subscribes to updates from `provider`. Zero thresholds mean every
    /// fix is delivered.
    fn request_updates(
        &mut self,
        provider: &str,
        min_time_ms: u64,
        min_distance_m: f32,
    ) -> Result<(), ServiceError>;

    fn last_known_fix(&self, provider: &str) -> Result<Option<LocationFix>, ServiceError>;

    /// Removes the shim's subscription, if any.
    fn remove_updates(&mut self) -> Result<(), ServiceError>;
}

//=== RenderSurface =======================================================

/// Controller of the engine's render thread.
pub trait RenderSurface {
    fn resume(&mut self);
    fn pause(&mut self);
    fn stop(&mut self);
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rotation_degrees_are_ninety_times_index() {
        for index in 0..4 {
            let rotation = Rotation::from_index(index).unwrap();
            assert_eq!(rotation.degrees(), 90 * index);
        }
    }

    #[test]
    fn rotation_rejects_out_of_range_index() {
        assert_eq!(Rotation::from_index(4), None);
        assert_eq!(Rotation::from_index(-1), None);
    }

    #[test]
    fn sensor_kind_indices_are_dense() {
        let indices: Vec<usize> = SensorKind::ALL.iter().map(|k| k.index()).collect();
        assert_eq!(indices, vec![0, 1, 2]);
    }

    #[test]
    fn game_rate_is_default() {
        assert_eq!(SamplingRate::default(), SamplingRate::Game);
        assert_eq!(SamplingRate::Game.delay_code(), 1);
    }

    #[test]
    fn service_error_display() {
        let e = ServiceError::Transient("binder died".to_string());
        assert_eq!(e.to_string(), "Transient service failure: binder died");
        assert_eq!(ServiceError::PermissionDenied.to_string(), "Permission denied");
    }
}

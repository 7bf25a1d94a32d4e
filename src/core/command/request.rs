//=========================================================================
// Commands
//=========================================================================
//
// Closed set of hardware-control requests the engine may issue.
//
// Tags are the engine's integer wire values; they cross the boundary
// unchanged.
//
//=========================================================================

//=== Internal Dependencies ===============================================

use crate::core::host::SensorKind;

//=== Capability ==========================================================

/// The host capability a command targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Capability {
    Sensor(SensorKind),
    Gps,
}

//=== Command =============================================================

/// Enable/disable request for one capability.
#[repr(i32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    AccelerometerEnable = 0x0001_0000,
    AccelerometerDisable = 0x0001_0001,
    MagnetometerEnable = 0x0001_0002,
    MagnetometerDisable = 0x0001_0003,
    GpsEnable = 0x0001_0004,
    GpsDisable = 0x0001_0005,
    GyroscopeEnable = 0x0001_0006,
    GyroscopeDisable = 0x0001_0007,
}

impl Command {
    pub const ALL: [Command; 8] = [
        Command::AccelerometerEnable,
        Command::AccelerometerDisable,
        Command::MagnetometerEnable,
        Command::MagnetometerDisable,
        Command::GpsEnable,
        Command::GpsDisable,
        Command::GyroscopeEnable,
        Command::GyroscopeDisable,
    ];

    /// Integer wire value.
    pub fn tag(self) -> i32 {
        self as i32
    }

    /// Parses a wire value. Unknown tags yield `None`.
    pub fn from_tag(tag: i32) -> Option<Self> {
        Self::ALL.into_iter().find(|cmd| cmd.tag() == tag)
    }

    pub fn capability(self) -> Capability {
        match self {
            Self::AccelerometerEnable | Self::AccelerometerDisable => {
                Capability::Sensor(SensorKind::Accelerometer)
            }
            Self::MagnetometerEnable | Self::MagnetometerDisable => {
                Capability::Sensor(SensorKind::MagneticField)
            }
            Self::GyroscopeEnable | Self::GyroscopeDisable => {
                Capability::Sensor(SensorKind::Gyroscope)
            }
            Self::GpsEnable | Self::GpsDisable => Capability::Gps,
        }
    }

    /// `true` for the enable half of each pair.
    pub fn enables(self) -> bool {
        matches!(
            self,
            Self::AccelerometerEnable
                | Self::MagnetometerEnable
                | Self::GpsEnable
                | Self::GyroscopeEnable
        )
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tags_match_engine_constants() {
        assert_eq!(Command::AccelerometerEnable.tag(), 0x00010000);
        assert_eq!(Command::MagnetometerDisable.tag(), 0x00010003);
        assert_eq!(Command::GpsEnable.tag(), 0x00010004);
        assert_eq!(Command::GyroscopeDisable.tag(), 0x00010007);
    }

    #[test]
    fn every_tag_parses_back() {
        for cmd in Command::ALL {
            assert_eq!(Command::from_tag(cmd.tag()), Some(cmd));
        }
    }

    #[test]
    fn unknown_tags_are_rejected() {
        assert_eq!(Command::from_tag(0), None);
        assert_eq!(Command::from_tag(0x00010008), None);
        assert_eq!(Command::from_tag(-1), None);
    }

    #[test]
    fn capability_and_direction() {
        assert_eq!(
            Command::MagnetometerEnable.capability(),
            Capability::Sensor(SensorKind::MagneticField)
        );
        assert_eq!(Command::GpsDisable.capability(), Capability::Gps);
        assert!(Command::GyroscopeEnable.enables());
        assert!(!Command::GyroscopeDisable.enables());
    }
}

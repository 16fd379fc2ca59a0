//! Sensors produced by tag through a simple factory.
//!
//! | tag           | variant                 | `data()` |
//! |---------------|-------------------------|----------|
//! | `CO2`         | [`CarbonDioxideSensor`] | `'c'`    |
//! | `SO2`         | [`SulfurDioxideSensor`] | `'s'`    |
//! | `temperature` | [`TemperatureSensor`]   | `'t'`    |
//! | anything else | [`GenericSensor`]       | `'n'`    |
//!
//! # Examples
//!
//! ```
//! use singleton_patterns::{SensorFactory, SensorType};
//!
//! let co2 = SensorFactory::create_sensor(&SensorType::new("CO2"));
//! assert_eq!(co2.data(), 'c');
//!
//! // Unknown tags are accepted and produce the generic sensor.
//! let other = SensorFactory::create("TEMP");
//! assert_eq!(other.data(), 'n');
//! ```

use std::sync::LazyLock;

use tracing::{debug, trace};

use crate::CapabilityFactory;

/// A sensor that yields a single data reading.
pub trait Sensor: Send + Sync {
    /// The sensor's type name.
    fn kind(&self) -> &'static str;

    /// Take a reading.
    fn data(&self) -> char;
}

/// Measures carbon dioxide.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CarbonDioxideSensor;

/// Measures sulfur dioxide.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SulfurDioxideSensor;

/// Measures temperature.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct TemperatureSensor;

/// Fallback sensor for unrecognized tags.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct GenericSensor;

impl Sensor for CarbonDioxideSensor {
    fn kind(&self) -> &'static str {
        "CO2"
    }

    fn data(&self) -> char {
        trace!(sensor = "CarbonDioxideSensor", "reading");
        'c'
    }
}

impl Sensor for SulfurDioxideSensor {
    fn kind(&self) -> &'static str {
        "SO2"
    }

    fn data(&self) -> char {
        trace!(sensor = "SulfurDioxideSensor", "reading");
        's'
    }
}

impl Sensor for TemperatureSensor {
    fn kind(&self) -> &'static str {
        "temperature"
    }

    fn data(&self) -> char {
        trace!(sensor = "TemperatureSensor", "reading");
        't'
    }
}

impl Sensor for GenericSensor {
    fn kind(&self) -> &'static str {
        "NONE"
    }

    fn data(&self) -> char {
        trace!(sensor = "GenericSensor", "reading");
        'n'
    }
}

// -------------------------------------------------------------------------------------------------
// Sensor type
// -------------------------------------------------------------------------------------------------

/// Name of the sensor a caller asks for.
///
/// Any name is accepted. `is_registered` tells whether it is one of the known names, but
/// construction never rejects a name: unknown names produce a [`GenericSensor`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct SensorType {
    name: String,
}

impl SensorType {
    /// Names with a meaning to the factory. `none` explicitly asks for the generic sensor.
    pub const KNOWN: [&'static str; 4] = ["CO2", "SO2", "temperature", "none"];

    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        if !Self::KNOWN.contains(&name.as_str()) {
            debug!(name = %name, "unregistered sensor type accepted");
        }
        Self { name }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether the name is one of [`SensorType::KNOWN`].
    pub fn is_registered(&self) -> bool {
        Self::KNOWN.contains(&self.name.as_str())
    }
}

impl From<&str> for SensorType {
    fn from(name: &str) -> Self {
        SensorType::new(name)
    }
}

impl From<String> for SensorType {
    fn from(name: String) -> Self {
        SensorType::new(name)
    }
}

// -------------------------------------------------------------------------------------------------
// Factory
// -------------------------------------------------------------------------------------------------

static SENSORS: LazyLock<CapabilityFactory<dyn Sensor>> = LazyLock::new(|| {
    CapabilityFactory::<dyn Sensor>::new("sensor", "GenericSensor", || Box::new(GenericSensor))
        .with("CO2", "CarbonDioxideSensor", || Box::new(CarbonDioxideSensor))
        .with("SO2", "SulfurDioxideSensor", || Box::new(SulfurDioxideSensor))
        .with("temperature", "TemperatureSensor", || {
            Box::new(TemperatureSensor)
        })
});

/// Creates sensors by name.
pub struct SensorFactory;

impl SensorFactory {
    /// Creates the sensor matching `sensor_type`, or a [`GenericSensor`].
    pub fn create_sensor(sensor_type: &SensorType) -> Box<dyn Sensor> {
        SENSORS.create(sensor_type.name())
    }

    /// Creates the sensor matching `tag`, or a [`GenericSensor`].
    pub fn create(tag: &str) -> Box<dyn Sensor> {
        SENSORS.create(tag)
    }

    /// The dispatch table behind this factory.
    pub fn table() -> &'static CapabilityFactory<dyn Sensor> {
        &SENSORS
    }
}

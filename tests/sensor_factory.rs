//! Integration tests for creating sensors by name.

use singleton_patterns::{
    CapabilityFactory, CarbonDioxideSensor, GenericSensor, Sensor, SensorFactory, SensorType,
};

#[test]
fn test_documented_readings() {
    let cases = [("CO2", 'c'), ("SO2", 's'), ("temperature", 't')];

    for (tag, reading) in cases {
        let sensor = SensorFactory::create_sensor(&SensorType::new(tag));
        assert_eq!(sensor.kind(), tag);
        assert_eq!(sensor.data(), reading);
    }
}

#[test]
fn test_unknown_and_empty_tags_yield_default() {
    assert_eq!(SensorFactory::create("unknown").data(), 'n');
    assert_eq!(SensorFactory::create("").data(), 'n');
    assert_eq!(SensorFactory::create("TEMP").kind(), "NONE");
}

#[test]
fn test_each_call_returns_independent_sensor() {
    let a = SensorFactory::create("CO2");
    let b = SensorFactory::create("CO2");

    assert_eq!(a.data(), b.data());
    drop(a);
    assert_eq!(b.data(), 'c');
}

#[test]
fn test_sensors_move_across_threads() {
    let sensor = SensorFactory::create("SO2");
    let reading = std::thread::spawn(move || sensor.data()).join().unwrap();
    assert_eq!(reading, 's');
}

#[test]
fn test_custom_sensor_table() {
    struct Humidity;

    impl Sensor for Humidity {
        fn kind(&self) -> &'static str {
            "humidity"
        }

        fn data(&self) -> char {
            'h'
        }
    }

    let factory = CapabilityFactory::<dyn Sensor>::new("lab", "GenericSensor", || {
        Box::new(GenericSensor)
    })
    .with("CO2", "CarbonDioxideSensor", || Box::new(CarbonDioxideSensor))
    .with("humidity", "Humidity", || Box::new(Humidity));

    assert_eq!(factory.create("humidity").data(), 'h');
    assert_eq!(factory.create("CO2").data(), 'c');
    assert_eq!(factory.create("SO2").data(), 'n');
    assert_eq!(factory.name(), "lab");
}

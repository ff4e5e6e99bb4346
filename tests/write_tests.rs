//! Write-path tests: validation, dispatch, and the outbound service surface

mod common;

use common::*;
use hass_point_driver::mock::{MockHassClient, ServiceCall};
use hass_point_driver::HassError;
use serde_json::json;

#[tokio::test]
async fn test_switch_write_end_to_end() {
    let mock = MockHassClient::new();
    let rows = vec![row("lamp", "switch.lamp", "state", "int", true)];
    let mut driver = driver_with(&mock, &rows);

    let written = driver.set_point("lamp", json!(1)).await.unwrap();
    assert_eq!(written, json!(1));

    assert_eq!(
        mock.calls(),
        vec![ServiceCall {
            domain: "switch".to_string(),
            service: "turn_on".to_string(),
            payload: json!({ "entity_id": "switch.lamp" }),
        }]
    );
}

#[tokio::test]
async fn test_light_state_on_off() {
    let mock = MockHassClient::new();
    let rows = vec![row("hall", "light.hall", "state", "int", true)];
    let mut driver = driver_with(&mock, &rows);

    driver.set_point("hall", json!(1)).await.unwrap();
    driver.set_point("hall", json!(0)).await.unwrap();

    let calls = mock.calls();
    assert_eq!(calls[0].domain, "light");
    assert_eq!(calls[0].service, "turn_on");
    assert_eq!(calls[1].service, "turn_off");

    // Out-of-set state codes never reach the hub
    let before = mock.call_count();
    let err = driver.set_point("hall", json!(2)).await.unwrap_err();
    assert!(matches!(err, HassError::InvalidValue(_)));
    assert!(err.to_string().contains("light.hall"));
    assert_eq!(mock.call_count(), before);
}

#[tokio::test]
async fn test_light_brightness_boundaries() {
    let mock = MockHassClient::new();
    let rows = vec![row("dim", "light.hall", "brightness", "int", true)];
    let mut driver = driver_with(&mock, &rows);

    driver.set_point("dim", json!(0)).await.unwrap();
    driver.set_point("dim", json!(255)).await.unwrap();

    let calls = mock.calls();
    assert_eq!(calls.len(), 2);
    assert_eq!(calls[1].service, "turn_on");
    assert_eq!(
        calls[1].payload,
        json!({ "entity_id": "light.hall", "brightness": 255 })
    );

    assert!(driver.set_point("dim", json!(256)).await.is_err());
    assert!(driver.set_point("dim", json!(-1)).await.is_err());
    assert_eq!(mock.call_count(), 2);
}

#[tokio::test]
async fn test_input_boolean_state_write() {
    let mock = MockHassClient::new();
    let rows = vec![row("flag", "input_boolean.flag", "state", "int", true)];
    let mut driver = driver_with(&mock, &rows);

    driver.set_point("flag", json!(0)).await.unwrap();
    let calls = mock.calls();
    assert_eq!(calls[0].domain, "input_boolean");
    assert_eq!(calls[0].service, "turn_off");
}

#[tokio::test]
async fn test_fan_points() {
    let mock = MockHassClient::new();
    let rows = vec![
        row("fan_state", "fan.bedroom", "state", "int", true),
        row("fan_speed", "fan.bedroom", "percentage", "float", true),
        row("fan_preset", "fan.bedroom", "preset_mode", "string", true),
        row("fan_dir", "fan.bedroom", "direction", "string", true),
        row("fan_osc", "fan.bedroom", "oscillating", "int", true),
    ];
    let mut driver = driver_with(&mock, &rows);

    driver.set_point("fan_state", json!(1)).await.unwrap();
    driver.set_point("fan_speed", json!(100)).await.unwrap();
    driver.set_point("fan_preset", json!("auto")).await.unwrap();
    driver.set_point("fan_dir", json!("reverse")).await.unwrap();
    driver.set_point("fan_osc", json!(1)).await.unwrap();

    let calls = mock.calls();
    assert_eq!(calls[0].service, "turn_on");
    assert_eq!(calls[0].payload, json!({ "entity_id": "fan.bedroom" }));
    assert_eq!(calls[1].service, "set_percentage");
    assert_eq!(calls[2].service, "set_preset_mode");
    assert_eq!(
        calls[3].payload,
        json!({ "entity_id": "fan.bedroom", "direction": "reverse" })
    );
    // Oscillation flag goes out as a boolean payload
    assert_eq!(calls[4].service, "oscillate");
    assert_eq!(
        calls[4].payload,
        json!({ "entity_id": "fan.bedroom", "oscillating": true })
    );
}

#[tokio::test]
async fn test_fan_rejects_bad_values() {
    let mock = MockHassClient::new();
    let rows = vec![
        row("fan_speed", "fan.bedroom", "percentage", "float", true),
        row("fan_preset", "fan.bedroom", "preset_mode", "string", true),
        row("fan_dir", "fan.bedroom", "direction", "string", true),
    ];
    let mut driver = driver_with(&mock, &rows);

    assert!(driver.set_point("fan_speed", json!(101)).await.is_err());
    assert!(driver.set_point("fan_preset", json!("")).await.is_err());
    assert!(driver.set_point("fan_dir", json!("up")).await.is_err());
    assert_eq!(mock.call_count(), 0);
}

#[tokio::test]
async fn test_climate_mode_bijection() {
    let mock = MockHassClient::new();
    let rows = vec![row("hvac", "climate.hall", "state", "int", true)];
    let mut driver = driver_with(&mock, &rows);

    for (code, mode) in [(0, "off"), (2, "heat"), (3, "cool"), (4, "auto")] {
        driver.set_point("hvac", json!(code)).await.unwrap();
        let call = mock.calls().pop().unwrap();
        assert_eq!(call.domain, "climate");
        assert_eq!(call.service, "set_hvac_mode");
        assert_eq!(
            call.payload,
            json!({ "entity_id": "climate.hall", "hvac_mode": mode })
        );
    }

    // 1 is deliberately not an HVAC code
    for bad in [1, 5, -1] {
        let err = driver.set_point("hvac", json!(bad)).await.unwrap_err();
        assert!(matches!(err, HassError::InvalidValue(_)));
    }
    assert_eq!(mock.call_count(), 4);
}

#[tokio::test]
async fn test_temperature_converted_when_units_celsius() {
    let mock = MockHassClient::new();
    let mut celsius = row("setpoint", "climate.hall", "temperature", "float", true);
    celsius.units = "C".to_string();
    let mut driver = driver_with(&mock, &[celsius]);

    let written = driver.set_point("setpoint", json!(212)).await.unwrap();
    // Caller sees the value it wrote; the hub sees Celsius
    assert_eq!(written, json!(212.0));
    assert_eq!(
        mock.calls()[0].payload,
        json!({ "entity_id": "climate.hall", "temperature": 100.0 })
    );
}

#[tokio::test]
async fn test_temperature_passthrough_without_celsius_units() {
    let mock = MockHassClient::new();
    let mut fahrenheit = row("setpoint", "climate.hall", "temperature", "float", true);
    fahrenheit.units = "F".to_string();
    let mut driver = driver_with(&mock, &[fahrenheit]);

    driver.set_point("setpoint", json!(72.5)).await.unwrap();
    assert_eq!(
        mock.calls()[0].payload,
        json!({ "entity_id": "climate.hall", "temperature": 72.5 })
    );
}

#[tokio::test]
async fn test_cover_state_commands() {
    let mock = MockHassClient::new();
    let rows = vec![row("garage", "cover.garage", "state", "int", true)];
    let mut driver = driver_with(&mock, &rows);

    for (code, service) in [(0, "close_cover"), (1, "open_cover"), (2, "stop_cover")] {
        driver.set_point("garage", json!(code)).await.unwrap();
        let call = mock.calls().pop().unwrap();
        assert_eq!(call.domain, "cover");
        assert_eq!(call.service, service);
    }

    assert!(driver.set_point("garage", json!(3)).await.is_err());
}

#[tokio::test]
async fn test_cover_position_truncated_to_int() {
    let mock = MockHassClient::new();
    let rows = vec![
        row("pos", "cover.garage", "position", "float", true),
        row("tilt", "cover.garage", "tilt_position", "float", true),
    ];
    let mut driver = driver_with(&mock, &rows);

    driver.set_point("pos", json!(50.9)).await.unwrap();
    driver.set_point("tilt", json!(100)).await.unwrap();

    let calls = mock.calls();
    assert_eq!(calls[0].service, "set_cover_position");
    assert_eq!(
        calls[0].payload,
        json!({ "entity_id": "cover.garage", "position": 50 })
    );
    assert_eq!(
        calls[1].payload,
        json!({ "entity_id": "cover.garage", "tilt_position": 100 })
    );

    assert!(driver.set_point("pos", json!(101)).await.is_err());
}

#[tokio::test]
async fn test_read_only_register_issues_no_hub_calls() {
    let mock = MockHassClient::new();
    let rows = vec![row("sensor", "switch.lamp", "state", "int", false)];
    let mut driver = driver_with(&mock, &rows);

    let err = driver.set_point("sensor", json!(1)).await.unwrap_err();
    assert!(matches!(err, HassError::ReadOnly(_)));
    assert_eq!(mock.call_count(), 0);
}

#[tokio::test]
async fn test_unsupported_entity_class_is_a_write_error() {
    let mock = MockHassClient::new();
    let rows = vec![row("bogus", "bogus.entity", "state", "int", true)];
    let mut driver = driver_with(&mock, &rows);

    let err = driver.set_point("bogus", json!(1)).await.unwrap_err();
    assert!(matches!(err, HassError::UnsupportedEntity(_)));
    assert!(err.to_string().contains("bogus.entity"));
    assert_eq!(mock.call_count(), 0);
}

#[tokio::test]
async fn test_unsupported_entity_point_lists_supported_set() {
    let mock = MockHassClient::new();
    let rows = vec![row("lamp", "switch.lamp", "brightness", "int", true)];
    let mut driver = driver_with(&mock, &rows);

    let err = driver.set_point("lamp", json!(1)).await.unwrap_err();
    assert!(matches!(err, HassError::UnsupportedPoint(_)));
    assert!(err.to_string().contains("Supported points: state"));
}

#[tokio::test]
async fn test_unknown_point_name() {
    let mock = MockHassClient::new();
    let mut driver = driver_with(&mock, &[]);

    let err = driver.set_point("ghost", json!(1)).await.unwrap_err();
    assert!(matches!(err, HassError::NotFound(_)));
}

#[tokio::test]
async fn test_write_value_is_coerced_to_register_type() {
    let mock = MockHassClient::new();
    let rows = vec![row("lamp", "switch.lamp", "state", "int", true)];
    let mut driver = driver_with(&mock, &rows);

    // Stringly "1" coerces to the integer state code
    let written = driver.set_point("lamp", json!("1")).await.unwrap();
    assert_eq!(written, json!(1));
    assert_eq!(mock.calls()[0].service, "turn_on");

    let err = driver.set_point("lamp", json!("on")).await.unwrap_err();
    assert!(matches!(err, HassError::InvalidValue(_)));
}

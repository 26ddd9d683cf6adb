//! Unit tests for GATT characteristic value codecs

use super::*;
use crate::error::CodecError;
use crate::uuid::Uuid;

#[test]
fn test_session_run_time_without_crc() {
    let value = CgmSessionRunTime::decode(&[0x0A, 0x00]).unwrap();
    assert_eq!(value.session_run_time, 10);
    assert_eq!(value.e2e_crc, None);
    assert_eq!(value.encode(), vec![0x0A, 0x00]);
}

#[test]
fn test_session_run_time_with_recognized_crc() {
    let data = [0x50, 0x01, 0xFF, 0xFF];
    let value = CgmSessionRunTime::decode(&data).unwrap();
    assert_eq!(value.session_run_time, 0x0150);
    assert_eq!(value.e2e_crc, Some(E2eCrc::NotSupported));
    assert_eq!(value.encode(), data.to_vec());
}

#[test]
fn test_session_run_time_with_unrecognized_crc() {
    let value = CgmSessionRunTime::decode(&[0x18, 0x00, 0x34, 0x12]).unwrap();
    assert_eq!(value, CgmSessionRunTime::new(24, None));
    assert_eq!(value.encode(), vec![0x18, 0x00]);
}

#[test]
fn test_session_run_time_three_bytes_ignores_trailing_byte() {
    let value = CgmSessionRunTime::decode(&[0x18, 0x00, 0xFF]).unwrap();
    assert_eq!(value, CgmSessionRunTime::new(24, None));
}

#[test]
fn test_session_run_time_too_short() {
    assert_eq!(
        CgmSessionRunTime::decode(&[0x18]),
        Err(CodecError::InsufficientLength {
            expected: 2,
            actual: 1
        })
    );
    assert!(CgmSessionRunTime::decode(&[]).is_err());
}

#[test]
fn test_session_run_time_metadata() {
    assert_eq!(CgmSessionRunTime::UUID, Uuid::from_u16(0x2AAB));
    assert_eq!(CgmSessionRunTime::MIN_LENGTH, 2);
    assert_eq!(CgmSessionRunTime::MAX_LENGTH, 4);
    assert_eq!(E2eCrc::from_raw(0xFFFF), Some(E2eCrc::NotSupported));
    assert_eq!(E2eCrc::from_raw(0x0000), None);
    assert_eq!(
        CgmSessionRunTime::new(12, Some(E2eCrc::NotSupported)).to_string(),
        "12 h (E2E-CRC 0xFFFF)"
    );
}

#[test]
fn test_battery_level() {
    let level = BatteryLevel::decode(&[0x64]).unwrap();
    assert_eq!(level.percentage(), 100);
    assert_eq!(level.encode(), vec![0x64]);
    assert_eq!(level.to_string(), "100%");

    assert!(matches!(
        BatteryLevel::decode(&[0x65]),
        Err(CodecError::InvalidValue(_))
    ));
    assert_eq!(
        BatteryLevel::decode(&[0x10, 0x00]),
        Err(CodecError::LengthMismatch {
            expected: 1,
            actual: 2
        })
    );
    assert!(BatteryLevel::new(101).is_err());
}

#[test]
fn test_client_characteristic_configuration() {
    let value = ClientCharacteristicConfiguration::decode(&[0x02, 0x00]).unwrap();
    assert!(value.configuration.contains(ClientConfiguration::Indicate));
    assert!(!value.configuration.contains(ClientConfiguration::Notify));

    let enabled = ClientCharacteristicConfiguration {
        configuration: ClientConfigurations::from([
            ClientConfiguration::Notify,
            ClientConfiguration::Indicate,
        ]),
    };
    assert_eq!(enabled.encode(), vec![0x03, 0x00]);

    // Reserved bits survive a round trip
    let reserved = ClientCharacteristicConfiguration::decode(&[0x01, 0x80]).unwrap();
    assert_eq!(reserved.configuration.count(), 1);
    assert_eq!(reserved.encode(), vec![0x01, 0x80]);

    assert!(ClientCharacteristicConfiguration::decode(&[0x01]).is_err());
    assert!(ClientCharacteristicConfiguration::decode(&[0x01, 0x00, 0x00]).is_err());
}

#[test]
fn test_characteristic_declaration_16bit() {
    let data = [0x12, 0x03, 0x00, 0x19, 0x2A];
    let declaration = CharacteristicDeclaration::decode(&data).unwrap();
    assert!(declaration.properties.can_read());
    assert!(declaration.properties.can_notify());
    assert!(!declaration.properties.can_write());
    assert_eq!(declaration.value_handle, 0x0003);
    assert_eq!(declaration.uuid, Uuid::BATTERY_LEVEL);
    assert_eq!(declaration.encode(), data.to_vec());
}

#[test]
fn test_characteristic_declaration_128bit() {
    let uuid: Uuid = "60F14FE2-F972-11E5-B84F-23E070D5A8C0".parse().unwrap();
    let declaration = CharacteristicDeclaration {
        properties: CharacteristicProperties::from([
            CharacteristicProperty::Write,
            CharacteristicProperty::WriteWithoutResponse,
        ]),
        value_handle: 0x0102,
        uuid,
    };

    let data = declaration.encode();
    assert_eq!(data.len(), 19);
    assert_eq!(&data[..3], &[0x0C, 0x02, 0x01]);
    assert_eq!(CharacteristicDeclaration::decode(&data).unwrap(), declaration);
}

#[test]
fn test_characteristic_declaration_32bit_written_as_128bit() {
    let declaration = CharacteristicDeclaration {
        properties: CharacteristicProperties::from(CharacteristicProperty::Read),
        value_handle: 0x0005,
        uuid: Uuid::from_u32(0x1234_5678),
    };

    let data = declaration.encode();
    assert_eq!(data.len(), 19);
    let decoded = CharacteristicDeclaration::decode(&data).unwrap();
    assert_eq!(decoded.uuid, Uuid::from_u32(0x1234_5678).to_uuid128());
}

#[test]
fn test_characteristic_declaration_rejects_bad_lengths() {
    assert!(matches!(
        CharacteristicDeclaration::decode(&[0x02, 0x03, 0x00, 0x19]),
        Err(CodecError::InsufficientLength { .. })
    ));
    assert_eq!(
        CharacteristicDeclaration::decode(&[0x02, 0x03, 0x00, 0x78, 0x56, 0x34, 0x12]),
        Err(CodecError::InvalidByteLength(4))
    );
}

#[test]
fn test_property_helpers() {
    let properties = CharacteristicProperties::from_raw(0x3A);
    assert!(properties.can_read());
    assert!(properties.can_write());
    assert!(properties.can_notify());
    assert!(properties.can_indicate());
    assert!(!properties.can_write_without_response());
    assert_eq!(CharacteristicProperties::all().raw_value(), 0xFF);
}

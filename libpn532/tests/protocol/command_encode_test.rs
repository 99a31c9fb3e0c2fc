use libpn532::protocol::commands::{self, Command, TargetConfig};
use libpn532::types::{BaudRate, KeyType, SamMode, Uid, MIFARE_KEY_DEFAULT};

#[test]
fn system_commands() {
    assert_eq!(commands::encode_get_firmware_version(), vec![0x02]);
    assert_eq!(
        commands::encode_sam_configuration(SamMode::Normal, 0x14, true),
        vec![0x14, 0x01, 0x14, 0x01]
    );
    assert_eq!(
        commands::encode_rf_max_retries(0xff, 0x01, 0x05),
        vec![0x32, 0x05, 0xff, 0x01, 0x05]
    );
}

#[test]
fn write_gpio_keeps_reserved_pins_high() {
    let cmd = commands::encode_write_gpio(0x00, 0x00);
    assert_eq!(cmd[0], 0x0e);
    assert_eq!(cmd[1], 0x94);
    let cmd = commands::encode_write_gpio(0xff, 0x00);
    assert_eq!(cmd[1] & 0x94, 0x94);
}

#[test]
fn in_list_passive_target() {
    assert_eq!(
        commands::encode_in_list_passive_target(1, BaudRate::Iso14443A),
        vec![0x4a, 0x01, 0x00]
    );
}

#[test]
fn command_enum_matches_free_encoders() {
    let uid = Uid::try_from(&[1u8, 2, 3, 4][..]).unwrap();
    let auth = commands::encode_mifare_auth(&uid, 7, KeyType::A, &MIFARE_KEY_DEFAULT);
    assert_eq!(&auth[..4], &[0x40, 0x01, 0x60, 0x07]);

    let cmd = Command::InDataExchange {
        target: 1,
        data: vec![0x30, 0x04],
    };
    assert_eq!(cmd.encode(), vec![0x40, 0x01, 0x30, 0x04]);
    assert_eq!(cmd.command_code(), 0x40);
    assert_eq!(cmd.response_code(), 0x41);
}

#[test]
fn tg_init_as_target_default_profile() {
    let cmd = Command::TgInitAsTarget(TargetConfig::default());
    let bytes = cmd.encode();
    assert_eq!(bytes.len(), 38);
    assert_eq!(bytes[0], 0x8c);
    assert!(cmd.to_frame().is_ok());
}

#[test]
fn oversized_command_does_not_frame() {
    let cmd = Command::InDataExchange {
        target: 1,
        data: vec![0u8; 60],
    };
    assert!(cmd.to_frame().is_err());
}

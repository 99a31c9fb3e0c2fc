// libpn532/src/protocol/commands/system.rs

use crate::constants::{
    PN532_COMMAND_GETFIRMWAREVERSION, PN532_COMMAND_READGPIO, PN532_COMMAND_RFCONFIGURATION,
    PN532_COMMAND_SAMCONFIGURATION, PN532_COMMAND_SETPARAMETERS, PN532_COMMAND_WRITEGPIO,
    PN532_GPIO_P32, PN532_GPIO_P34, PN532_GPIO_VALIDATIONBIT, PN532_RFCONFIG_MAX_RETRIES,
};
use crate::types::SamMode;

/// GetFirmwareVersion (0x02)
pub fn encode_get_firmware_version() -> Vec<u8> {
    vec![PN532_COMMAND_GETFIRMWAREVERSION]
}

/// SAMConfiguration (0x14). `timeout` is in 50 ms units.
pub fn encode_sam_configuration(mode: SamMode, timeout: u8, use_irq: bool) -> Vec<u8> {
    vec![
        PN532_COMMAND_SAMCONFIGURATION,
        mode as u8,
        timeout,
        use_irq as u8,
    ]
}

/// SetParameters (0x12)
pub fn encode_set_parameters(flags: u8) -> Vec<u8> {
    vec![PN532_COMMAND_SETPARAMETERS, flags]
}

/// RFConfiguration item 5: MxRtyATR, MxRtyPSL, MxRtyPassiveActivation
pub fn encode_rf_max_retries(atr: u8, psl: u8, passive_activation: u8) -> Vec<u8> {
    vec![
        PN532_COMMAND_RFCONFIGURATION,
        PN532_RFCONFIG_MAX_RETRIES,
        atr,
        psl,
        passive_activation,
    ]
}

/// ReadGPIO (0x0C)
pub fn encode_read_gpio() -> Vec<u8> {
    vec![PN532_COMMAND_READGPIO]
}

/// WriteGPIO (0x0E). P32 and P34 are reserved and always driven high;
/// the validation bit is set on P3.
pub fn encode_write_gpio(p3: u8, p7: u8) -> Vec<u8> {
    let p3 = p3 | (1 << PN532_GPIO_P32) | (1 << PN532_GPIO_P34);
    vec![PN532_COMMAND_WRITEGPIO, PN532_GPIO_VALIDATIONBIT | p3, p7]
}

// passport-reader-rs/passport-reader/src/protocol/commands.rs

use crate::constants::*;
use crate::protocol::apdu::Apdu;

/// PN532 host commands used by the driver. Each encodes to the frame
/// payload `opcode args...`; the module answers with `opcode + 1`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Query IC and firmware version.
    GetFirmwareVersion,
    /// Configure the secure access module.
    SamConfiguration {
        /// Operating mode, 0x01 is normal
        mode: u8,
        /// Timeout in 50 ms units
        timeout: u8,
        /// Use the IRQ pin
        use_irq: u8,
    },
    /// Poll for passive targets.
    InListPassiveTarget {
        /// Targets to activate, at most two
        max_targets: u8,
        /// Baud rate and modulation
        brty: u8,
    },
    /// Exchange an APDU with an activated target.
    InDataExchange {
        /// Logical target number
        target: u8,
        /// Command APDU
        apdu: Apdu,
    },
}

impl Command {
    /// SAM in normal mode (no secure element), 1 s virtual-card timeout, IRQ on.
    pub fn sam_normal() -> Self {
        Self::SamConfiguration {
            mode: SAM_NORMAL_MODE,
            timeout: SAM_TIMEOUT,
            use_irq: SAM_USE_IRQ,
        }
    }

    /// Look for a single ISO14443-A target at 106 kbps.
    pub fn list_single_iso14443a() -> Self {
        Self::InListPassiveTarget {
            max_targets: 1,
            brty: BRTY_ISO14443A_106K,
        }
    }

    /// Command code sent after the TFI.
    pub fn opcode(&self) -> u8 {
        match self {
            Self::GetFirmwareVersion => CMD_GET_FIRMWARE_VERSION,
            Self::SamConfiguration { .. } => CMD_SAM_CONFIGURATION,
            Self::InListPassiveTarget { .. } => CMD_IN_LIST_PASSIVE_TARGET,
            Self::InDataExchange { .. } => CMD_IN_DATA_EXCHANGE,
        }
    }

    /// Opcode the module echoes in its answer.
    pub fn response_code(&self) -> u8 {
        self.opcode().wrapping_add(1)
    }

    /// Encode into the frame payload (opcode + arguments).
    pub fn encode(&self) -> Vec<u8> {
        match self {
            Self::GetFirmwareVersion => vec![CMD_GET_FIRMWARE_VERSION],
            Self::SamConfiguration {
                mode,
                timeout,
                use_irq,
            } => vec![CMD_SAM_CONFIGURATION, *mode, *timeout, *use_irq],
            Self::InListPassiveTarget { max_targets, brty } => {
                vec![CMD_IN_LIST_PASSIVE_TARGET, *max_targets, *brty]
            }
            Self::InDataExchange { target, apdu } => {
                let mut v = Vec::with_capacity(2 + apdu.len());
                v.push(CMD_IN_DATA_EXCHANGE);
                v.push(*target);
                v.extend_from_slice(apdu.as_bytes());
                v
            }
        }
    }
}

use embedded_hal::delay::DelayNs;
use log::{debug, warn};

use crate::card::Target;
use crate::device::Device;
use crate::protocol::{Apdu, Command, Response, StatusWord};
use crate::transport::Transport;
use crate::{Error, Result};

/// Send `apdu` to `target` through InDataExchange and return the module
/// status byte together with the response APDU.
pub fn exchange_apdu<T: Transport, D: DelayNs>(
    device: &mut Device<T, D>,
    target: &Target,
    apdu: &Apdu,
) -> Result<(u8, Vec<u8>)> {
    let cmd = Command::InDataExchange {
        target: target.number,
        apdu: *apdu,
    };
    match device.execute(&cmd)? {
        Response::InDataExchange { status, data } => Ok((status, data)),
        other => Err(Error::FrameFormat(format!(
            "unexpected answer to InDataExchange: {:?}",
            other
        ))),
    }
}

/// SELECT the eMRTD application on `target`. Succeeds only when the
/// response ends in `90 00`.
pub fn select_application<T: Transport, D: DelayNs>(
    device: &mut Device<T, D>,
    target: &Target,
) -> Result<()> {
    let (status, data) = exchange_apdu(device, target, &Apdu::select_emrtd())?;

    match StatusWord::from_response(&data) {
        Some(sw) if sw.is_success() => {
            debug!("eMRTD application selected on target {}", target.number);
            Ok(())
        }
        sw => {
            let (sw1, sw2) = sw.map_or((0, 0), |sw| (sw.sw1, sw.sw2));
            warn!(
                "SELECT rejected: status={:#04x} sw={:02x}{:02x}",
                status, sw1, sw2
            );
            Err(Error::ApplicationSelect { status, sw1, sw2 })
        }
    }
}

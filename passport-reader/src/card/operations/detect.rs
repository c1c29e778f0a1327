use embedded_hal::delay::DelayNs;
use log::debug;

use crate::card::Target;
use crate::device::Device;
use crate::protocol::{Command, Response};
use crate::transport::Transport;
use crate::{Error, Result};

/// Ask the module for one ISO 14443-A target at 106 kbps.
///
/// Zero targets is reported as [`Error::NoCardPresent`]; a busy module as
/// [`Error::RetryLater`].
pub fn detect_target<T: Transport, D: DelayNs>(device: &mut Device<T, D>) -> Result<Target> {
    let cmd = Command::list_single_iso14443a();
    match device.execute(&cmd)? {
        Response::InListPassiveTarget { targets } => {
            let target = targets.into_iter().next().ok_or(Error::NoCardPresent)?;
            debug!(
                "target {} uid={} sens_res={:#06x} sel_res={:#04x}",
                target.number,
                target.uid.to_hex(),
                target.sens_res,
                target.sel_res
            );
            Ok(target)
        }
        other => Err(Error::FrameFormat(format!(
            "unexpected answer to InListPassiveTarget: {:?}",
            other
        ))),
    }
}

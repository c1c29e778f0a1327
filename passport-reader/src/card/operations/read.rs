use embedded_hal::delay::DelayNs;
use log::info;

use crate::Result;
use crate::card::document::{DocumentRecord, DocumentSource};
use crate::card::Target;
use crate::device::Device;
use crate::transport::Transport;

/// Acquire the document record for a selected target from `source`.
pub fn read_data_group<T, D, S>(
    device: &mut Device<T, D>,
    target: &Target,
    source: &mut S,
) -> Result<DocumentRecord>
where
    T: Transport,
    D: DelayNs,
    S: DocumentSource,
{
    let record = source.read_document(device, target)?;
    info!(
        "document {} read from target {}",
        record.document_number,
        target.uid.to_hex()
    );
    Ok(record)
}

//! Scan → render → send, once per invocation.

use crate::buffer::SourceBuffer;
use crate::notify::Notifier;
use crate::render::{GeneratedScript, render_reload_script};
use crate::scan::{OperatorName, scan_operators};
use crate::settings::Settings;
use crate::transmit::{TransmitError, send_script};

#[derive(Debug, thiserror::Error)]
pub enum ReloadError {
    #[error("failed to compile operator pattern: {0}")]
    Pattern(#[from] regex::Error),
    #[error(transparent)]
    Transmit(#[from] TransmitError),
}

#[derive(Debug, Clone)]
pub struct ReloadReport {
    pub operators: Vec<OperatorName>,
    pub bytes_sent: usize,
}

/// Scan `buffer` and render its reload script without sending anything.
pub fn prepare(buffer: &SourceBuffer) -> Result<(Vec<OperatorName>, GeneratedScript), ReloadError> {
    let operators = scan_operators(&buffer.text)?;
    tracing::debug!(path = %buffer.path, count = operators.len(), "scanned operators");
    if operators.is_empty() {
        tracing::warn!(path = %buffer.path, "no operator declarations found");
    }

    let script = render_reload_script(&buffer.path, &operators);
    Ok((operators, script))
}

/// Ask Maya to reload every Splice node whose entry operator is declared in
/// `buffer`.
///
/// Everything is derived from the buffer as it is now. Network failures are
/// reported through `notifier` before being returned unchanged inside
/// [`ReloadError::Transmit`].
pub fn run(
    buffer: &SourceBuffer,
    settings: &Settings,
    notifier: &mut dyn Notifier,
) -> Result<ReloadReport, ReloadError> {
    let (operators, script) = prepare(buffer)?;
    let bytes_sent = send_script(&script, settings, notifier)?;
    Ok(ReloadReport {
        operators,
        bytes_sent,
    })
}

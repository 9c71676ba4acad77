//! Command orchestration helpers from UI actions to backend command queue.

use crossbeam_channel::{Sender, TrySendError};

use crate::backend_bridge::commands::BackendCommand;

/// Queues `cmd` for the backend worker. Returns `false` and explains why in
/// `status` when the queue cannot take it.
pub fn dispatch_backend_command(
    cmd_tx: &Sender<BackendCommand>,
    cmd: BackendCommand,
    status: &mut String,
) -> bool {
    let cmd_name = cmd.name();

    match cmd_tx.try_send(cmd) {
        Ok(()) => {
            tracing::debug!(command = cmd_name, "queued ui->backend command");
            true
        }
        Err(TrySendError::Full(_)) => {
            *status = "The quiz helper is busy; please try again".to_string();
            false
        }
        Err(TrySendError::Disconnected(_)) => {
            *status = "Quiz helper disconnected (possible startup/runtime failure)".to_string();
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use crossbeam_channel::bounded;

    use super::*;

    #[test]
    fn reports_full_queue() {
        let (tx, _rx) = bounded(1);
        let mut status = String::new();
        assert!(dispatch_backend_command(&tx, BackendCommand::RequestQuestion, &mut status));
        assert!(status.is_empty());
        assert!(!dispatch_backend_command(&tx, BackendCommand::RequestQuestion, &mut status));
        assert!(status.contains("busy"));
    }

    #[test]
    fn reports_disconnected_worker() {
        let (tx, rx) = bounded(1);
        drop(rx);
        let mut status = String::new();
        assert!(!dispatch_backend_command(&tx, BackendCommand::RequestQuestion, &mut status));
        assert!(status.contains("disconnected"));
    }
}

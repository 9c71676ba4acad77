//! Runtime bridge between UI command queue and backend event intake.

use std::thread;

use crossbeam_channel::{Receiver, Sender};
use quiz_client::QuizService;

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::{UiError, UiErrorContext, UiEvent};

/// Runs one quiz command to completion and returns the event for the UI.
///
/// The service never fails outward; a broken AI call comes back as fallback
/// content.
pub async fn handle_command(service: &QuizService, cmd: BackendCommand) -> UiEvent {
    match cmd {
        BackendCommand::RequestQuestion => UiEvent::QuestionReady(service.request_question().await),
        BackendCommand::Evaluate { check } => {
            UiEvent::FeedbackReady(service.evaluate_check(&check).await)
        }
    }
}

pub fn launch(cmd_rx: Receiver<BackendCommand>, ui_tx: Sender<UiEvent>, service: QuizService) {
    thread::spawn(move || {
        let runtime = match tokio::runtime::Builder::new_multi_thread()
            .worker_threads(1)
            .enable_all()
            .build()
        {
            Ok(runtime) => runtime,
            Err(err) => {
                let _ = ui_tx.try_send(UiEvent::Error(UiError::from_message(
                    UiErrorContext::BackendStartup,
                    format!("quiz helper startup failure: failed to build runtime: {err}"),
                )));
                tracing::error!("failed to build backend runtime: {err}");
                return;
            }
        };

        runtime.block_on(async move {
            tracing::info!("quiz helper ready");
            while let Ok(cmd) = cmd_rx.recv() {
                let name = cmd.name();
                let event = handle_command(&service, cmd).await;
                if ui_tx.try_send(event).is_err() {
                    tracing::warn!(command = name, "ui event queue unavailable, dropping result");
                }
            }
            tracing::info!("quiz helper stopped");
        });
    });
}

use std::sync::Arc;

mod backend_bridge;
mod controller;
mod settings;
mod ui;

use clap::Parser;
use crossbeam_channel::{bounded, Sender};
use eframe::egui;
use quiz_client::{GeminiConfig, GeminiQuizSource, QuizService};

use crate::{
    backend_bridge::commands::BackendCommand,
    controller::events::{UiError, UiErrorContext, UiEvent},
    settings::{load_settings, Args, Settings},
    ui::ClockQuizApp,
};

const APP_TITLE: &str = "Clock Quiz";

/// Picks the quiz source for this launch. Without a usable key the quiz still
/// runs, on fallback questions only.
fn build_quiz_service(settings: &Settings, ui_tx: &Sender<UiEvent>) -> (QuizService, bool) {
    let Some(api_key) = settings.ai_api_key.clone() else {
        tracing::info!("no AI API key configured; quiz will use built-in questions");
        return (QuizService::unavailable("no AI API key configured"), false);
    };

    let config = GeminiConfig {
        api_key,
        base_url: settings.ai_base_url.clone(),
        model: settings.ai_model.clone(),
    };
    match GeminiQuizSource::new(config) {
        Ok(source) => {
            tracing::info!(endpoint = source.endpoint(), "quiz questions from AI service");
            (QuizService::new(Arc::new(source)), true)
        }
        Err(err) => {
            tracing::warn!("AI quiz source disabled: {err}");
            let _ = ui_tx.try_send(UiEvent::Error(UiError::from_message(
                UiErrorContext::Quiz,
                err.to_string(),
            )));
            (QuizService::unavailable(err.to_string()), false)
        }
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    let settings = load_settings(&args)?;

    let (cmd_tx, cmd_rx) = bounded::<BackendCommand>(16);
    let (ui_tx, ui_rx) = bounded::<UiEvent>(64);
    let (service, ai_enabled) = build_quiz_service(&settings, &ui_tx);
    backend_bridge::runtime::launch(cmd_rx, ui_tx, service);

    let start_time = settings.start_time.resolve();
    tracing::info!(%start_time, "starting clock");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(APP_TITLE)
            .with_inner_size([960.0, 680.0])
            .with_min_inner_size([720.0, 520.0]),
        ..Default::default()
    };
    eframe::run_native(
        APP_TITLE,
        options,
        Box::new(move |_cc| {
            Ok(Box::new(ClockQuizApp::new(
                cmd_tx, ui_rx, start_time, ai_enabled,
            )))
        }),
    )
    .map_err(|err| anyhow::anyhow!("failed to run {APP_TITLE}: {err}"))
}

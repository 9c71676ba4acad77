//! App shell: drains backend events, lays out the readout, clock, and quiz
//! panel, and maps UI actions onto the controller and the command queue.

use std::time::Duration;

use clock_core::{
    quiz::FALLBACK_FEEDBACK,
    sky::{sky_color, SkyPhase},
    ClockController, ClockTime, QuizQuestion,
};
use crossbeam_channel::{Receiver, Sender};
use eframe::egui;
use egui::{Color32, RichText};

use crate::{
    backend_bridge::commands::BackendCommand,
    controller::{events::UiEvent, orchestration::dispatch_backend_command},
    ui::{
        clock_face,
        quiz_panel::{self, QuizAction},
    },
};

const LIGHT_TEXT: Color32 = Color32::from_rgb(245, 245, 250);
const DARK_TEXT: Color32 = Color32::from_rgb(25, 30, 50);

pub struct ClockQuizApp {
    cmd_tx: Sender<BackendCommand>,
    ui_rx: Receiver<UiEvent>,
    controller: ClockController,
    ai_enabled: bool,
    status: String,
}

impl ClockQuizApp {
    pub fn new(
        cmd_tx: Sender<BackendCommand>,
        ui_rx: Receiver<UiEvent>,
        start_time: ClockTime,
        ai_enabled: bool,
    ) -> Self {
        let status = if ai_enabled {
            "Drag the hands to set the time".to_string()
        } else {
            "Drag the hands to set the time (quiz uses built-in questions)".to_string()
        };
        Self {
            cmd_tx,
            ui_rx,
            controller: ClockController::new(start_time),
            ai_enabled,
            status,
        }
    }

    pub fn controller(&self) -> &ClockController {
        &self.controller
    }

    pub fn status(&self) -> &str {
        &self.status
    }

    pub fn process_ui_events(&mut self) {
        while let Ok(event) = self.ui_rx.try_recv() {
            match event {
                UiEvent::QuestionReady(question) => {
                    if !self.controller.question_received(question) {
                        tracing::debug!("dropping question that arrived after the quiz closed");
                    }
                }
                UiEvent::FeedbackReady(feedback) => {
                    if !self.controller.feedback_received(feedback) {
                        tracing::debug!("dropping feedback for a finished round");
                    }
                }
                UiEvent::Error(err) => {
                    tracing::warn!("backend error: {}", err.message());
                    self.status = err.status_text();
                }
            }
        }
    }

    pub fn apply_quiz_action(&mut self, action: QuizAction) {
        match action {
            QuizAction::Start | QuizAction::Next => {
                if !self.controller.begin_quiz_request() {
                    return;
                }
                let queued = dispatch_backend_command(
                    &self.cmd_tx,
                    BackendCommand::RequestQuestion,
                    &mut self.status,
                );
                if !queued {
                    self.controller.question_received(QuizQuestion::fallback());
                }
            }
            QuizAction::Submit => {
                let Some(check) = self.controller.submit_answer() else {
                    return;
                };
                tracing::info!(
                    submitted = %check.submitted,
                    target = %check.target,
                    correct = check.correct,
                    "answer submitted"
                );
                let queued = dispatch_backend_command(
                    &self.cmd_tx,
                    BackendCommand::Evaluate { check },
                    &mut self.status,
                );
                if !queued {
                    self.controller
                        .feedback_received(FALLBACK_FEEDBACK.to_string());
                }
            }
            QuizAction::Exit => self.controller.exit_quiz(),
        }
    }

    fn show_readout(&self, ui: &mut egui::Ui, text_color: Color32) {
        let time = self.controller.time();
        let phase = SkyPhase::of(time);
        ui.vertical_centered(|ui| {
            ui.label(
                RichText::new(time.to_string())
                    .size(48.0)
                    .strong()
                    .monospace()
                    .color(text_color),
            );
            ui.label(
                RichText::new(format!("{} · {}", time.to_24h_string(), phase.label()))
                    .size(16.0)
                    .color(text_color),
            );
        });
    }

    fn show_adjusters(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            let steps = [("-1 hour", -60), ("-1 min", -1), ("+1 min", 1), ("+1 hour", 60)];
            for (label, delta) in steps {
                if ui.button(label).clicked() {
                    self.controller.nudge_minutes(delta);
                }
            }
            if ui.button("Now").clicked() {
                self.controller.set_now();
            }
        });
    }
}

impl eframe::App for ClockQuizApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.process_ui_events();

        let time = self.controller.time();
        let [r, g, b] = sky_color(time);
        let sky = Color32::from_rgb(r, g, b);
        let text_color = if SkyPhase::of(time).is_dark() {
            LIGHT_TEXT
        } else {
            DARK_TEXT
        };

        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(&self.status);
                if !self.ai_enabled {
                    ui.weak("offline questions");
                }
            });
        });

        egui::SidePanel::right("quiz_panel")
            .resizable(false)
            .default_width(280.0)
            .show(ctx, |ui| {
                ui.heading("Clock quiz");
                ui.separator();
                if let Some(action) = quiz_panel::show(ui, &self.controller) {
                    self.apply_quiz_action(action);
                }
                ui.add_space(16.0);
                ui.separator();
                ui.label("Move the clock");
                self.show_adjusters(ui);
            });

        egui::CentralPanel::default()
            .frame(egui::Frame::new().fill(sky).inner_margin(egui::Margin::same(16)))
            .show(ctx, |ui| {
                self.show_readout(ui, text_color);
                ui.add_space(8.0);
                ui.vertical_centered(|ui| {
                    clock_face::show(ui, &mut self.controller);
                });
            });

        if self.controller.is_loading() || self.controller.is_evaluating() {
            ctx.request_repaint_after(Duration::from_millis(100));
        }
    }
}

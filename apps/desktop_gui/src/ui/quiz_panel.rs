use clock_core::{ClockController, QuizPhase};
use egui::{Color32, RichText};

/// What the child asked for this frame. The app turns these into controller
/// transitions and backend commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizAction {
    Start,
    Submit,
    Next,
    Exit,
}

const CORRECT: Color32 = Color32::from_rgb(46, 160, 67);
const TRY_AGAIN: Color32 = Color32::from_rgb(214, 120, 40);

pub fn show(ui: &mut egui::Ui, controller: &ClockController) -> Option<QuizAction> {
    let mut action = None;

    match controller.quiz() {
        QuizPhase::Off => {
            ui.label("Ready to practise?");
            if ui.button(RichText::new("Start quiz").size(18.0)).clicked() {
                action = Some(QuizAction::Start);
            }
        }
        QuizPhase::Loading => {
            ui.horizontal(|ui| {
                ui.spinner();
                ui.label("Thinking of a question...");
            });
        }
        phase => {
            if let Some(question) = phase.question() {
                ui.label(RichText::new(&question.question_text).size(20.0).strong());
                ui.collapsing("Need a hint?", |ui| {
                    ui.label(&question.hint);
                });
            }

            match phase {
                QuizPhase::Evaluating { .. } => {
                    ui.horizontal(|ui| {
                        ui.spinner();
                        ui.label("Checking...");
                    });
                }
                QuizPhase::Answered {
                    check, feedback, ..
                } => {
                    let (headline, color) = if check.correct {
                        ("You got it!", CORRECT)
                    } else {
                        ("Not quite yet", TRY_AGAIN)
                    };
                    ui.label(RichText::new(headline).size(18.0).strong().color(color));
                    ui.label(feedback);
                }
                _ => {}
            }

            ui.add_space(8.0);
            ui.horizontal(|ui| {
                let submit = egui::Button::new(RichText::new("Check my answer").size(16.0));
                if ui.add_enabled(controller.can_submit(), submit).clicked() {
                    action = Some(QuizAction::Submit);
                }
                if matches!(phase, QuizPhase::Answered { .. }) && ui.button("Next question").clicked()
                {
                    action = Some(QuizAction::Next);
                }
            });
        }
    }

    if controller.is_quiz_active() && ui.button("Exit quiz").clicked() {
        action = Some(QuizAction::Exit);
    }

    action
}

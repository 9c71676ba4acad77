//! Single owner of the toy's mutable state.
//!
//! The GUI never edits fields directly; every change goes through one of the
//! transition methods below so drag and quiz behaviour can be exercised
//! without a window.

use crate::{
    drag::{DragState, DragTarget},
    geometry::Hand,
    quiz::{AnswerCheck, QuizQuestion},
    time::ClockTime,
};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum QuizPhase {
    #[default]
    Off,
    /// A question request is in flight.
    Loading,
    Asking {
        question: QuizQuestion,
    },
    /// Answer checked locally, waiting for the encouragement text.
    Evaluating {
        question: QuizQuestion,
        check: AnswerCheck,
    },
    Answered {
        question: QuizQuestion,
        check: AnswerCheck,
        feedback: String,
    },
}

impl QuizPhase {
    pub fn question(&self) -> Option<&QuizQuestion> {
        match self {
            Self::Off | Self::Loading => None,
            Self::Asking { question }
            | Self::Evaluating { question, .. }
            | Self::Answered { question, .. } => Some(question),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct ClockController {
    time: ClockTime,
    drag: DragState,
    quiz: QuizPhase,
}

impl ClockController {
    pub fn new(time: ClockTime) -> Self {
        Self {
            time,
            ..Self::default()
        }
    }

    pub fn time(&self) -> ClockTime {
        self.time
    }

    pub fn drag_target(&self) -> DragTarget {
        self.drag.target()
    }

    pub fn quiz(&self) -> &QuizPhase {
        &self.quiz
    }

    pub fn set_time(&mut self, time: ClockTime) {
        self.time = time;
    }

    pub fn set_now(&mut self) {
        self.time = ClockTime::now_local();
    }

    pub fn nudge_minutes(&mut self, delta: i64) {
        self.time = self.time.add_minutes(delta);
    }

    pub fn pointer_down(&mut self, hand: Hand) -> bool {
        self.drag.pointer_down(hand)
    }

    /// Applies a drag to `angle`; returns the new time if a hand is held.
    pub fn pointer_move(&mut self, angle: f32) -> Option<ClockTime> {
        let next = self.drag.pointer_move(self.time, angle)?;
        self.time = next;
        Some(next)
    }

    pub fn pointer_up(&mut self) {
        self.drag.pointer_up();
    }

    pub fn pointer_leave(&mut self) {
        self.drag.pointer_leave();
    }

    pub fn is_loading(&self) -> bool {
        self.quiz == QuizPhase::Loading
    }

    pub fn is_evaluating(&self) -> bool {
        matches!(self.quiz, QuizPhase::Evaluating { .. })
    }

    pub fn is_quiz_active(&self) -> bool {
        self.quiz != QuizPhase::Off
    }

    /// Starts a question request. Returns `false` while one is already
    /// outstanding, in which case nothing changes and no request should be
    /// sent.
    pub fn begin_quiz_request(&mut self) -> bool {
        if self.is_loading() {
            return false;
        }
        self.quiz = QuizPhase::Loading;
        true
    }

    /// Accepts a question only if one was requested and the quiz is still open.
    pub fn question_received(&mut self, question: QuizQuestion) -> bool {
        if !self.is_loading() {
            return false;
        }
        self.quiz = QuizPhase::Asking { question };
        true
    }

    pub fn can_submit(&self) -> bool {
        matches!(
            self.quiz,
            QuizPhase::Asking { .. } | QuizPhase::Answered { .. }
        )
    }

    /// Checks the current time against the question target and waits for
    /// feedback. Answered rounds may be retried.
    pub fn submit_answer(&mut self) -> Option<AnswerCheck> {
        if !self.can_submit() {
            return None;
        }
        let question = self.quiz.question()?.clone();
        let check = AnswerCheck::new(self.time, question.target());
        self.quiz = QuizPhase::Evaluating { question, check };
        Some(check)
    }

    pub fn feedback_received(&mut self, feedback: String) -> bool {
        let QuizPhase::Evaluating { question, check } = &self.quiz else {
            return false;
        };
        self.quiz = QuizPhase::Answered {
            question: question.clone(),
            check: *check,
            feedback,
        };
        true
    }

    pub fn exit_quiz(&mut self) {
        self.quiz = QuizPhase::Off;
    }
}

#[cfg(test)]
#[path = "tests/controller_tests.rs"]
mod tests;

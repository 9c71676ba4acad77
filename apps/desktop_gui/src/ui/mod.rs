//! UI layer for the desktop GUI: app shell, clock face widget, and quiz panel.

pub mod app;
pub mod clock_face;
pub mod quiz_panel;

pub use app::ClockQuizApp;

//! Background worker that talks to the quiz service off the UI thread.

pub mod commands;
pub mod runtime;

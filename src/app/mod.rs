//! Application-Layer: Controller, State, Events und Editor-Sitzung.

pub mod command_log;
pub mod controller;
pub mod events;
pub mod handlers;
mod intent_mapping;
pub mod session;
/// Application State
///
/// Hält Sitzung, Optionen und Command-Log der laufenden Anwendung.
pub mod state;

pub use command_log::{CommandLog, DEFAULT_LOG_LIMIT};
pub use controller::AppController;
pub use events::{AppCommand, AppIntent, EditorKey, PointerButton, WheelDirection};
pub use session::{
    CurvePalette, DisplayMode, DragState, EditorSession, PressOutcome, SessionConfig,
};
pub use state::AppState;

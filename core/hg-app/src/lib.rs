pub mod app_state;
pub mod app_state_machine;
pub mod context;
pub mod error;
pub mod logger;

pub use app_state::AppState;
pub use app_state_machine::AppStateMachine;
pub use context::AppContext;
pub use error::{AppError, Result};

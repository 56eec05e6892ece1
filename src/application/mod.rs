//! Application layer: the relay use case and its status notification handle.

mod relay_use_case;
mod status;

pub use relay_use_case::{RelaySettings, RelayUseCase};
pub use status::StatusNotification;

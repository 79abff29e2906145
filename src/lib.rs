pub mod config;
pub mod error;
pub mod io_struct;
pub mod logging;
pub mod provider;
pub mod relay_state;
pub mod server;

pub use error::{RelayError, RelayResult};
pub use relay_state::{RelayConfig, RelayState};

pub mod state;
pub mod mission;
pub mod missions;
pub mod control_loop;
pub mod telemetry;

pub use state::*;
pub use mission::*;
pub use control_loop::*;
pub use telemetry::*;

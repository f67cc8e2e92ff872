//! Clock adapters.
//!
//! - `SystemClock` - Host wall clock
//! - `ManualClock` - Settable clock for tests and simulations

mod manual;
mod system;

pub use manual::ManualClock;
pub use system::SystemClock;

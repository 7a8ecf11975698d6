//! The stream host application.
//!
//! - `session`: exclusive lock on the data directory
//! - `stop`: shared stop request flag
//! - `stream_host`: the [`Application`](crate::traits::Application) itself

pub mod session;
pub mod stop;
pub mod stream_host;

pub use session::{SessionLock, SessionRecord, LOCK_FILE_NAME};
pub use stop::StopSignal;
pub use stream_host::{HostState, StopReason, StreamHost};

//! Client-side core of the talent matching flow: a cursor-based matching
//! queue over a fetched candidate batch, fire-and-forget interaction
//! recording, and a locally persisted notification inbox with both an
//! observer interface and a polling refresh loop.

pub mod cli;
pub mod environment;
pub mod notifications;
pub mod persistence;
pub mod poller;
pub mod queue;
pub mod recorder;
pub mod service_client;
pub mod session;
pub mod toast;
pub mod types;

pub use environment::EnvironmentConfig;
pub use notifications::{NotificationStore, NotificationSummary};
pub use persistence::{FileStorage, MemoryStorage, StorageAdapter};
pub use poller::NotificationPoller;
pub use queue::{Advance, MatchQueue};
pub use recorder::InteractionRecorder;
pub use service_client::{InteractionSink, MatchServiceClient};
pub use session::{Decision, MatchSession, SessionStep};
pub use toast::{Toast, ToastSeverity, ToastSink};

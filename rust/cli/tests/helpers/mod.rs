//! Shared utilities for the CLI integration tests.
//!
//! - `log_capture`: `TestLogSubscriber` records tracing events so a test can
//!   assert on what a session logged.
//!
//! ```ignore
//! use crate::helpers::TestLogSubscriber;
//! use tracing_subscriber::{Registry, layer::SubscriberExt};
//!
//! let logs = TestLogSubscriber::new();
//! let registry = Registry::default().with(logs.clone().into_layer::<Registry>());
//! tracing::subscriber::with_default(registry, || tracing::info!("street dealt"));
//! assert_eq!(logs.with_message("street dealt").len(), 1);
//! ```

pub mod log_capture;

pub use log_capture::TestLogSubscriber;

//! Domain types shared by the Shopfront client crates.
//!
//! Nothing in here performs I/O.

pub mod category;
pub mod config;
pub mod envelope;
pub mod error;
pub mod session;
pub mod wire;

// Re-export common types
pub use category::{Breadcrumb, Category, find_category_path};
pub use config::{ClientConfig, ClientSettings};
pub use envelope::Envelope;
pub use error::{BusinessError, ErrorCode};
pub use session::{SessionContext, SessionState};

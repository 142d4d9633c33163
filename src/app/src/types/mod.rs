//! Domain-based type organization
//!
//! Types are organized by domain to match the structure in `update/`:
//! - permission: Camera permission state
//! - credentials: Scanned client credentials and their storage keys
//! - submission: Submission guard state
//! - notice: User notices
//! - error: Error taxonomy

pub mod credentials;
pub mod error;
pub mod notice;
pub mod permission;
pub mod submission;

pub use credentials::*;
pub use error::*;
pub use notice::*;
pub use permission::*;
pub use submission::*;

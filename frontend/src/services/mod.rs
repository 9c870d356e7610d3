//! Browser and backend services.
//!
//! # Services
//!
//! - [`upload`] - document upload to the docintel host
//! - [`download`] - client-side CSV download
//! - [`notify`] - blocking alerts and console logging of failures

pub mod upload;
pub mod download;
pub mod notify;

pub use upload::*;
pub use download::*;
pub use notify::*;

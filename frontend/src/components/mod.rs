//! UI Components for the upload widget.
//!
//! # Layout Components
//! - [`Header`] - Title bar
//! - [`Hero`] - Main title and description
//! - [`Footer`] - Page footer
//!
//! # Feature Components
//! - [`UploadSection`] - File picker, drag & drop and the process button
//! - [`LoadingIndicator`] - Shown while a document is processed
//! - [`ResultsSection`] - Extracted fields and CSV download

mod header;
mod hero;
mod upload;
mod results;
mod progress;
mod footer;

pub use header::*;
pub use hero::*;
pub use upload::*;
pub use results::*;
pub use progress::*;
pub use footer::*;

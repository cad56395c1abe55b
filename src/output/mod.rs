//! Output module for console output and progress.
//!
//! Provides:
//! - Colored console output
//! - Progress bars
//! - Batch outcome reporting

pub mod console;
pub mod progress;
pub mod stats;

pub use console::{
    print_banner, print_config_summary, print_debug, print_error, print_info, print_success,
    print_warning,
};
pub use progress::{create_byte_spinner, create_download_bar, create_spinner};
pub use stats::print_batch_summary;

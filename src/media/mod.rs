//! Media model: identifiers, format selection and playback descriptors.

pub mod descriptor;
pub mod format;
pub mod id;

pub use descriptor::{select_streams, AdaptiveStreams, PlaybackDescriptor, ProgressiveStream};
pub use format::{FormatFlags, StreamRequest};
pub use id::VideoId;

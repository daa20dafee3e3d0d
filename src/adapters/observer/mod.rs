//! Session observer implementations.

mod recording;

pub use recording::{Dismissal, RecordingObserver};

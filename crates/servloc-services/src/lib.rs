//! Sample capabilities for the service locator: audio playback and message
//! logging, each with a null and a console implementation.

pub mod audio;
pub mod locators;
pub mod logger;
pub mod sink;

pub use crate::audio::{AudioLocator, AudioService, ConsoleAudio, NullAudio};
pub use crate::locators::Locators;
pub use crate::logger::{ConsoleLog, LogLocator, LogService, NullLog};
pub use crate::sink::{Capture, Sink};

use servloc_core::{Capability, Locator};

use crate::sink::Sink;

/// Sound playback.
pub trait AudioService: Send + Sync {
    fn play_sound(&self, id: i32);
}

pub type AudioLocator<'a> = Locator<'a, dyn AudioService>;

impl Capability for dyn AudioService {
    const NAME: &'static str = "audio";

    fn null_service() -> Box<Self> {
        Box::new(NullAudio::default())
    }
}

/// Plays nothing, only reports the call.
#[derive(Debug, Default)]
pub struct NullAudio {
    sink: Sink,
}

impl NullAudio {
    pub fn with_sink(sink: Sink) -> Self {
        Self { sink }
    }
}

impl AudioService for NullAudio {
    fn play_sound(&self, id: i32) {
        log::trace!("null audio: play_sound({id})");
        self.sink.line(format_args!("NullAudio::play_sound({id})"));
    }
}

/// Console-backed audio.
#[derive(Debug, Default)]
pub struct ConsoleAudio {
    sink: Sink,
}

impl ConsoleAudio {
    pub fn with_sink(sink: Sink) -> Self {
        Self { sink }
    }
}

impl AudioService for ConsoleAudio {
    fn play_sound(&self, id: i32) {
        self.sink.line(format_args!("ConsoleAudio::play_sound({id})"));
    }
}

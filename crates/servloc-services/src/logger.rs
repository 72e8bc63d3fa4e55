use servloc_core::{Capability, Locator};

use crate::sink::Sink;

/// Message logging, as a locatable capability.
pub trait LogService: Send + Sync {
    fn log(&self, msg: &str);
}

pub type LogLocator<'a> = Locator<'a, dyn LogService>;

impl Capability for dyn LogService {
    const NAME: &'static str = "log";

    fn null_service() -> Box<Self> {
        Box::new(NullLog::default())
    }
}

#[derive(Debug, Default)]
pub struct NullLog {
    sink: Sink,
}

impl NullLog {
    pub fn with_sink(sink: Sink) -> Self {
        Self { sink }
    }
}

impl LogService for NullLog {
    fn log(&self, msg: &str) {
        log::trace!("null log: log({msg:?})");
        self.sink.line(format_args!("NullLog::log({msg})"));
    }
}

/// Writes messages to the console.
#[derive(Debug, Default)]
pub struct ConsoleLog {
    sink: Sink,
}

impl ConsoleLog {
    pub fn with_sink(sink: Sink) -> Self {
        Self { sink }
    }
}

impl LogService for ConsoleLog {
    fn log(&self, msg: &str) {
        self.sink.line(format_args!("ConsoleLog::log({msg})"));
    }
}

//! Shared test doubles for logger integration tests.

use std::fmt;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use taglog::color::FixedPicker;
use taglog::output::{DebugPretty, MemorySink, PrettyPrinter};
use taglog::{DebugConfig, Logger};

/// Pretty printer that counts how often it is asked to format.
#[derive(Debug, Default)]
pub struct CountingPrinter {
    calls: AtomicUsize,
}

impl CountingPrinter {
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl PrettyPrinter for CountingPrinter {
    fn pretty(&self, value: &dyn fmt::Debug) -> Result<String, fmt::Error> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        DebugPretty.pretty(value)
    }

    fn pretty_args(&self, args: fmt::Arguments<'_>) -> Result<String, fmt::Error> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        DebugPretty.pretty_args(args)
    }
}

/// Printer that ignores its input and returns fixed text.
#[derive(Debug)]
pub struct CannedPrinter(pub &'static str);

impl PrettyPrinter for CannedPrinter {
    fn pretty(&self, _value: &dyn fmt::Debug) -> Result<String, fmt::Error> {
        Ok(self.0.to_string())
    }

    fn pretty_args(&self, _args: fmt::Arguments<'_>) -> Result<String, fmt::Error> {
        Ok(self.0.to_string())
    }
}

/// Everything a test needs to observe one logger.
pub struct Harness {
    pub logger: Logger,
    pub printer: Arc<CountingPrinter>,
    pub buffer: MemorySink,
}

/// Build a logger with a counting printer, memory sink and fixed color.
pub fn harness(tag: &str, config: DebugConfig) -> Harness {
    let printer = Arc::new(CountingPrinter::default());
    let buffer = MemorySink::new();
    let logger = Logger::builder(tag)
        .config(config)
        .picker(FixedPicker(208))
        .printer(printer.clone())
        .sink_factory(buffer.factory())
        .build();

    Harness {
        logger,
        printer,
        buffer,
    }
}

/// Config as it would be read from a given environment.
#[allow(dead_code)]
pub fn env_config(pairs: &[(&str, &str)]) -> DebugConfig {
    DebugConfig::from_lookup(|key| {
        pairs
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.to_string())
    })
}

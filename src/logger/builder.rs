//! Logger construction.

use std::sync::Arc;

use crate::color::{colorize, ColorPicker, RandomPicker, PALETTE};
use crate::config::DebugConfig;
use crate::logger::Logger;
use crate::matching::is_enabled;
use crate::output::{DebugPretty, PrettyPrinter, SinkFactory, StderrSink};

/// Assembles a [`Logger`] from a config and its collaborators.
///
/// Defaults: empty config (disabled), [`RandomPicker`], [`DebugPretty`] and a
/// stderr sink.
pub struct LoggerBuilder {
    tag: String,
    config: DebugConfig,
    picker: Box<dyn ColorPicker>,
    printer: Arc<dyn PrettyPrinter>,
    sink_factory: SinkFactory,
}

impl LoggerBuilder {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            config: DebugConfig::default(),
            picker: Box::new(RandomPicker::new()),
            printer: Arc::new(DebugPretty),
            sink_factory: StderrSink::factory(),
        }
    }

    pub fn config(mut self, config: DebugConfig) -> Self {
        self.config = config;
        self
    }

    pub fn picker(mut self, picker: impl ColorPicker + 'static) -> Self {
        self.picker = Box::new(picker);
        self
    }

    pub fn printer(mut self, printer: Arc<dyn PrettyPrinter>) -> Self {
        self.printer = printer;
        self
    }

    pub fn sink_factory(mut self, factory: SinkFactory) -> Self {
        self.sink_factory = factory;
        self
    }

    pub fn build(self) -> Logger {
        let LoggerBuilder {
            tag,
            config,
            picker,
            printer,
            sink_factory,
        } = self;

        // No allow-list at all: off, and color is off with it
        let enabled = config.is_active() && is_enabled(&tag, &config.allow_list);
        let color = if enabled && !config.color_suppressed {
            picker.pick(&PALETTE)
        } else {
            None
        };

        let label = format!("{tag} ");
        let prefix = match color {
            Some(code) => colorize(code, &label),
            None => label,
        };

        let sink = enabled.then(|| sink_factory(&prefix));

        tracing::debug!(tag = %tag, enabled, color = ?color, "logger constructed");

        Logger {
            tag,
            enabled,
            color,
            prefix,
            sink,
            printer,
        }
    }
}

impl std::fmt::Debug for LoggerBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoggerBuilder")
            .field("tag", &self.tag)
            .field("config", &self.config)
            .field("picker", &self.picker)
            .field("printer", &self.printer)
            .finish_non_exhaustive()
    }
}

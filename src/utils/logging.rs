//! Tracing setup.
//!
//! In the browser every event is forwarded to the devtools console through
//! [`ConsoleLayer`]. Native builds (tests, tooling) use the `fmt` subscriber.
//! `RUST_LOG` takes precedence over the configured directive where the
//! environment is available.

use std::fmt::{self, Write as _};

use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::{Context, Layer};
use tracing_subscriber::EnvFilter;

use crate::config::DEFAULT_LOG_LEVEL;

/// Install the global subscriber. Later calls are ignored.
pub fn init(directive: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(directive))
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_LEVEL));

    #[cfg(target_arch = "wasm32")]
    {
        use tracing_subscriber::prelude::*;

        if tracing_subscriber::registry()
            .with(filter)
            .with(ConsoleLayer::new())
            .try_init()
            .is_err()
        {
            tracing::debug!("subscriber already installed");
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        if tracing_subscriber::fmt()
            .with_env_filter(filter)
            .try_init()
            .is_err()
        {
            tracing::debug!("subscriber already installed");
        }
    }
}

// =============================================================================
// Console Layer
// =============================================================================

/// Layer writing one line per event: `LEVEL target: message key=value ...`.
pub struct ConsoleLayer {
    sink: fn(Level, &str),
}

impl ConsoleLayer {
    pub fn new() -> Self {
        Self { sink: console_sink }
    }
}

impl Default for ConsoleLayer {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: Subscriber> Layer<S> for ConsoleLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let metadata = event.metadata();
        let mut visitor = LineVisitor::default();
        event.record(&mut visitor);
        let line = format!(
            "{} {}: {}",
            metadata.level(),
            metadata.target(),
            visitor.finish()
        );
        (self.sink)(*metadata.level(), &line);
    }
}

#[cfg_attr(not(target_arch = "wasm32"), allow(unused_variables))]
fn console_sink(level: Level, line: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        let value = wasm_bindgen::JsValue::from_str(line);
        if level == Level::ERROR {
            web_sys::console::error_1(&value);
        } else if level == Level::WARN {
            web_sys::console::warn_1(&value);
        } else if level == Level::INFO {
            web_sys::console::info_1(&value);
        } else {
            web_sys::console::debug_1(&value);
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        eprintln!("{line}");
    }
}

/// Collects the message and the remaining fields of an event.
#[derive(Default)]
struct LineVisitor {
    message: String,
    fields: String,
}

impl LineVisitor {
    fn finish(self) -> String {
        format!("{}{}", self.message, self.fields)
    }
}

impl Visit for LineVisitor {
    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "message" {
            self.message.push_str(value);
        } else {
            let _ = write!(self.fields, " {}={}", field.name(), value);
        }
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        if field.name() == "message" {
            let _ = write!(self.message, "{:?}", value);
        } else {
            let _ = write!(self.fields, " {}={:?}", field.name(), value);
        }
    }
}

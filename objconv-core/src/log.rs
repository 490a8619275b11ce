//! Logging capability injected into the converter
//!
//! The converter never logs through a global. Callers hand it something that
//! implements [`ConvertLog`]; [`TracingLog`] forwards to `tracing` so whatever
//! subscriber the host installed decides where messages end up.

/// Leveled sink for conversion messages. `site` names the operation that
/// produced the message.
pub trait ConvertLog {
    fn debug(&self, site: &str, message: &str);
    fn error(&self, site: &str, message: &str);
}

/// Forwards every message to the `tracing` macros
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingLog;

impl ConvertLog for TracingLog {
    fn debug(&self, site: &str, message: &str) {
        tracing::debug!(site, "{}", message);
    }

    fn error(&self, site: &str, message: &str) {
        tracing::error!(site, "{}", message);
    }
}

impl<L: ConvertLog + ?Sized> ConvertLog for &L {
    fn debug(&self, site: &str, message: &str) {
        (**self).debug(site, message)
    }

    fn error(&self, site: &str, message: &str) {
        (**self).error(site, message)
    }
}

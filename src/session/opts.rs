use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::time::Duration;

use serde::Deserialize;

use crate::animation::spec::DEFAULT_DURATION;
use crate::foundation::error::{Ui4Error, Ui4Result};

/// Options controlling one session's wire output and bookkeeping.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SessionOpts {
    /// Endpoint rendered into `hx-post` for event bindings.
    pub event_endpoint: String,
    /// Continuations older than this are dropped. Seconds in JSON.
    #[serde(deserialize_with = "duration_secs")]
    pub continuation_ttl: Duration,
    /// Upper bound on in-flight continuations; the oldest go first.
    pub max_continuations: usize,
    /// Duration (seconds) used by an animation context that defines nothing.
    pub default_animation_duration: f64,
    /// Delay (seconds) for bindings created with `BindingOptions::debounced()`.
    pub debounce_delay: f64,
}

impl Default for SessionOpts {
    fn default() -> Self {
        Self {
            event_endpoint: "/event".to_owned(),
            continuation_ttl: Duration::from_secs(300),
            max_continuations: 64,
            default_animation_duration: DEFAULT_DURATION,
            debounce_delay: 0.5,
        }
    }
}

fn duration_secs<'de, D>(deserializer: D) -> Result<Duration, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let secs = f64::deserialize(deserializer)?;
    Duration::try_from_secs_f64(secs).map_err(serde::de::Error::custom)
}

impl SessionOpts {
    /// Parse options from a JSON reader and validate them.
    pub fn from_reader<R: std::io::Read>(r: R) -> Ui4Result<Self> {
        let opts: SessionOpts = serde_json::from_reader(r)
            .map_err(|e| Ui4Error::validation(format!("parse session options JSON: {e}")))?;
        opts.validate()?;
        Ok(opts)
    }

    pub fn from_json_str(s: &str) -> Ui4Result<Self> {
        Self::from_reader(s.as_bytes())
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Ui4Result<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            Ui4Error::validation(format!("open session options '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    pub fn validate(&self) -> Ui4Result<()> {
        if self.event_endpoint.is_empty() {
            return Err(Ui4Error::validation("event_endpoint must not be empty"));
        }
        if self.max_continuations == 0 {
            return Err(Ui4Error::validation("max_continuations must be > 0"));
        }
        if self.continuation_ttl.is_zero() {
            return Err(Ui4Error::validation("continuation_ttl must be > 0"));
        }
        if !(self.default_animation_duration.is_finite() && self.default_animation_duration >= 0.0)
        {
            return Err(Ui4Error::validation(
                "default_animation_duration must be finite and >= 0",
            ));
        }
        if !(self.debounce_delay.is_finite() && self.debounce_delay >= 0.0) {
            return Err(Ui4Error::validation("debounce_delay must be finite and >= 0"));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/session/opts.rs"]
mod tests;

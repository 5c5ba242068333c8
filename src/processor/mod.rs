//! Configurable stub processors.
//!
//! A processor carries an immutable configuration mapping and exposes a
//! single transform over an opaque payload. Every processor in this crate is
//! a placeholder: `process` returns its input unchanged and does no
//! asynchronous work, so it is a plain synchronous call.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::sync::Arc;

/// Opaque key/value data handed to [`Processor::process`].
pub type Payload = Map<String, Value>;

/// Immutable configuration mapping shared by a processor.
///
/// Cloning is cheap and never aliases mutable state: each instance built
/// from `ProcessorConfig::default()` owns its own empty map.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "Map<String, Value>", into = "Map<String, Value>")]
pub struct ProcessorConfig {
    entries: Arc<Map<String, Value>>,
}

impl ProcessorConfig {
    pub fn new(entries: Map<String, Value>) -> Self {
        Self {
            entries: Arc::new(entries),
        }
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.get(key)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.entries
    }
}

impl From<Map<String, Value>> for ProcessorConfig {
    fn from(entries: Map<String, Value>) -> Self {
        Self::new(entries)
    }
}

impl From<ProcessorConfig> for Map<String, Value> {
    fn from(config: ProcessorConfig) -> Self {
        Arc::try_unwrap(config.entries).unwrap_or_else(|shared| (*shared).clone())
    }
}

pub trait Processor: Send + Sync {
    /// Stable component name, used in logs and on the command line.
    fn name(&self) -> &'static str;

    fn config(&self) -> &ProcessorConfig;

    /// Identity transform. Never reads or writes a field of `data`.
    fn process(&self, data: Payload) -> Payload;
}

/// Declares a stub processor type with the shared constructor and the
/// identity `process`.
macro_rules! stub_processor {
    ($(#[$meta:meta])* $ty:ident, $name:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Default)]
        pub struct $ty {
            config: $crate::processor::ProcessorConfig,
        }

        impl $ty {
            pub fn new(config: Option<$crate::processor::ProcessorConfig>) -> Self {
                Self {
                    config: config.unwrap_or_default(),
                }
            }
        }

        impl $crate::processor::Processor for $ty {
            fn name(&self) -> &'static str {
                $name
            }

            fn config(&self) -> &$crate::processor::ProcessorConfig {
                &self.config
            }

            fn process(
                &self,
                data: $crate::processor::Payload,
            ) -> $crate::processor::Payload {
                tracing::trace!(component = $name, keys = data.len(), "passing payload through");
                data
            }
        }
    };
}

pub(crate) use stub_processor;

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    super::stub_processor!(Probe, "probe");

    fn map(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            other => panic!("expected object, got {other}"),
        }
    }

    #[test]
    fn test_default_config_is_empty() {
        let probe = Probe::new(None);
        assert!(probe.config().is_empty());
        assert_eq!(probe.config().len(), 0);
    }

    #[test]
    fn test_config_is_stored_verbatim() {
        let entries = map(json!({
            "endpoint": "wss://example.invalid",
            "retries": 3,
            "nested": {"enabled": true, "tags": ["a", "b"]}
        }));
        let probe = Probe::new(Some(ProcessorConfig::new(entries.clone())));

        assert_eq!(probe.config().as_map(), &entries);
        assert_eq!(probe.config().get("retries"), Some(&json!(3)));
    }

    #[test]
    fn test_default_instances_do_not_share_state() {
        let a = Probe::new(None);
        let b = Probe::default();
        assert_eq!(a.config(), b.config());
        assert!(!Arc::ptr_eq(&a.config().entries, &b.config().entries));
    }

    #[test]
    fn test_process_returns_input_unchanged() {
        let probe = Probe::new(None);
        let payload = map(json!({
            "player": "大谷",
            "stats": {"hr": 54, "avg": 0.310},
            "null_field": null,
            "list": [1, "two", 3.0]
        }));

        assert_eq!(probe.process(payload.clone()), payload);
        assert_eq!(probe.process(Payload::new()), Payload::new());
    }

    #[test]
    fn test_config_serde_is_a_plain_map() {
        let config = ProcessorConfig::new(map(json!({"a": 1})));
        let encoded = serde_json::to_value(&config).unwrap();
        assert_eq!(encoded, json!({"a": 1}));

        let decoded: ProcessorConfig = serde_json::from_value(encoded).unwrap();
        assert_eq!(decoded, config);
    }
}

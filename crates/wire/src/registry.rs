//! Type-code registry.
//!
//! Type codes are assigned by the deployment, not by this crate. A `Registry`
//! tells the decoder which layout each leading byte selects. It is built once
//! at startup, either in code or from a TOML table listing the codes of each
//! kind:
//!
//! ```toml
//! [codes]
//! signal = [1]
//! event_in = [10, 11, 12, 13]
//! stats_in = [40]
//! ```

use serde::Deserialize;
use thiserror::Error;

use crate::decode::{DecodeError, decode};
use crate::message::{MessageKind, TypeCode, WireMessage};

/// Errors raised while loading a [`Registry`].
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid registry config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("type code {code} registered as both {first:?} and {second:?}")]
    DuplicateCode {
        code: TypeCode,
        first: MessageKind,
        second: MessageKind,
    },
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct CodeTable {
    signal: Vec<TypeCode>,
    time: Vec<TypeCode>,
    event_in: Vec<TypeCode>,
    mock_event_from_device: Vec<TypeCode>,
    game_start_in: Vec<TypeCode>,
    stats_in: Vec<TypeCode>,
    event_to_server: Vec<TypeCode>,
    message_to_device: Vec<TypeCode>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RegistryFile {
    #[serde(default)]
    codes: CodeTable,
}

/// Mapping from leading byte to message layout.
#[derive(Debug, Clone)]
pub struct Registry {
    kinds: [Option<MessageKind>; 256],
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

impl Registry {
    /// Empty registry; every code decodes as `UnknownMessageType`.
    pub fn new() -> Self {
        Self { kinds: [None; 256] }
    }

    /// Register `code`, replacing any previous entry.
    pub fn register(&mut self, code: TypeCode, kind: MessageKind) {
        self.kinds[usize::from(code)] = Some(kind);
    }

    /// Builder form of [`Registry::register`].
    pub fn with(mut self, code: TypeCode, kind: MessageKind) -> Self {
        self.register(code, kind);
        self
    }

    pub fn lookup(&self, code: TypeCode) -> Option<MessageKind> {
        self.kinds[usize::from(code)]
    }

    pub fn len(&self) -> usize {
        self.kinds.iter().filter(|k| k.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Load a registry from a TOML document.
    ///
    /// A code listed under two kinds, or twice under the same kind, is an error.
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        let file: RegistryFile = toml::from_str(source)?;
        let table = file.codes;

        let groups = [
            (MessageKind::Signal, table.signal),
            (MessageKind::Time, table.time),
            (MessageKind::EventIn, table.event_in),
            (MessageKind::MockEventFromDevice, table.mock_event_from_device),
            (MessageKind::GameStartIn, table.game_start_in),
            (MessageKind::StatsIn, table.stats_in),
            (MessageKind::EventToServer, table.event_to_server),
            (MessageKind::MessageToDevice, table.message_to_device),
        ];

        let mut registry = Self::new();
        for (kind, codes) in groups {
            for code in codes {
                if let Some(first) = registry.lookup(code) {
                    return Err(ConfigError::DuplicateCode {
                        code,
                        first,
                        second: kind,
                    });
                }
                registry.register(code, kind);
            }
        }

        tracing::info!(codes = registry.len(), "loaded message registry");
        Ok(registry)
    }

    /// Decode `bytes` against this registry.
    pub fn decode(&self, bytes: &[u8]) -> Result<WireMessage, DecodeError> {
        decode(bytes, self)
    }
}

// libmifare/src/reader/builder.rs

use crate::reader::config::ReaderConfig;
use crate::reader::handle::{Configured, KeyConfig, Reader, Uninitialized};
use crate::transport::Transport;
use crate::types::{Key, KeySlot};
use crate::utils::CancellationToken;
use crate::{Error, Result};

/// Helper to construct a Reader with optional configuration.
#[derive(Default)]
pub struct ReaderBuilder {
    transport: Option<Box<dyn Transport>>,
    config: ReaderConfig,
    keys: KeyConfig,
    cancel: Option<CancellationToken>,
}

impl ReaderBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Provide an already-created transport instance (e.g. MockTransport)
    pub fn with_transport(mut self, transport: Box<dyn Transport>) -> Self {
        self.transport = Some(transport);
        self
    }

    pub fn with_config(mut self, config: ReaderConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_key_a(mut self, key: Key) -> Self {
        self.keys.key_a = key;
        self
    }

    pub fn with_key_b(mut self, key: Key) -> Self {
        self.keys.key_b = key;
        self
    }

    pub fn with_active_key(mut self, slot: KeySlot) -> Self {
        self.keys.active = slot;
        self
    }

    /// Share a cancellation token created elsewhere (e.g. by a signal
    /// handler) instead of a fresh one.
    pub fn with_cancellation_token(mut self, token: CancellationToken) -> Self {
        self.cancel = Some(token);
        self
    }

    /// Consume the builder and return an uninitialized Reader.
    /// Requires a transport to be provided; otherwise returns TransportUnavailable.
    pub fn build_uninitialized(self) -> Result<Reader<Uninitialized>> {
        let transport = self.transport.ok_or(Error::TransportUnavailable)?;
        Ok(Reader::from_parts(
            transport,
            self.config,
            self.keys,
            self.cancel.unwrap_or_default(),
        ))
    }

    /// Build and run SAM configuration in one step.
    pub fn build_configured(self) -> Result<Reader<Configured>> {
        self.build_uninitialized()?.configure()
    }
}

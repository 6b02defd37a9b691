// libmifare/src/reader/handle.rs

use std::marker::PhantomData;
use std::time::Instant;

use log::{debug, trace};

use crate::card::{Target, operations, payload};
use crate::constants::{BAUD_ISO14443A, DISCOVERY_RESPONSE_LEN, SAM_RESPONSE_LEN};
use crate::protocol::{Command, responses};
use crate::reader::config::ReaderConfig;
use crate::transport::{ReaderStatus, Transport};
use crate::types::{BlockData, Key, KeySlot, PageData};
use crate::utils::{CancellationToken, cancel_check_interval};
use crate::{Error, Result};

/// Type-state markers
pub struct Uninitialized;
pub struct Configured;

/// Key material for Classic authentication.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct KeyConfig {
    pub key_a: Key,
    pub key_b: Key,
    pub active: KeySlot,
}

impl KeyConfig {
    /// Key in the currently selected slot
    pub fn active_key(&self) -> &Key {
        match self.active {
            KeySlot::A => &self.key_a,
            KeySlot::B => &self.key_b,
        }
    }
}

/// Reader session. Owns the transport, keys and the last discovered
/// target; every scratch buffer lives inside a single operation call.
///
/// The SAM configuration state is enforced at compile time: block I/O is
/// only available on `Reader<Configured>`.
pub struct Reader<State = Uninitialized> {
    transport: Box<dyn Transport>,
    config: ReaderConfig,
    keys: KeyConfig,
    target: Option<Target>,
    cancel: CancellationToken,
    _state: PhantomData<State>,
}

impl<State> Reader<State> {
    pub fn config(&self) -> &ReaderConfig {
        &self.config
    }

    /// Handle to this session's cancellation flag. Cancelling it makes a
    /// pending or future discovery wait return `Error::Cancelled`.
    pub fn cancellation_token(&self) -> CancellationToken {
        self.cancel.clone()
    }

    /// Send a command and read its response frame. No status polling:
    /// the reader is expected to answer right after the ACK.
    pub(crate) fn exchange(&mut self, cmd: &Command, response_len: usize) -> Result<Vec<u8>> {
        self.send(cmd)?;
        self.receive(response_len)
    }

    fn send(&mut self, cmd: &Command) -> Result<()> {
        let payload = cmd.encode();
        #[cfg(feature = "diagnostics")]
        trace!("tx {}", crate::utils::HexView::spaced(&payload));

        if !self.transport.send_command(&payload)? {
            debug!("command {:#04x} not acknowledged", cmd.command_code());
            return Err(Error::TransportUnavailable);
        }
        Ok(())
    }

    fn receive(&mut self, response_len: usize) -> Result<Vec<u8>> {
        let frame = self.transport.read_response(response_len)?;
        #[cfg(feature = "diagnostics")]
        trace!("rx {}", crate::utils::HexView::spaced(&frame));
        Ok(frame)
    }
}

impl Reader<Uninitialized> {
    /// Create a reader session over an existing transport with default
    /// configuration and factory keys.
    pub fn new_with_transport(transport: Box<dyn Transport>) -> Self {
        Self::from_parts(
            transport,
            ReaderConfig::default(),
            KeyConfig::default(),
            CancellationToken::new(),
        )
    }

    pub(crate) fn from_parts(
        transport: Box<dyn Transport>,
        config: ReaderConfig,
        keys: KeyConfig,
        cancel: CancellationToken,
    ) -> Self {
        Self {
            transport,
            config,
            keys,
            target: None,
            cancel,
            _state: PhantomData,
        }
    }

    /// Run SAMConfiguration (normal mode, 1s timeout, IRQ) once and return
    /// a configured reader on success. No retry.
    pub fn configure(mut self) -> Result<Reader<Configured>> {
        let frame = self.exchange(&Command::SamConfiguration, SAM_RESPONSE_LEN)?;
        responses::decode_sam_configuration(&frame)?;
        debug!("SAM configured");

        Ok(Reader {
            transport: self.transport,
            config: self.config,
            keys: self.keys,
            target: None,
            cancel: self.cancel,
            _state: PhantomData,
        })
    }
}

impl Reader<Configured> {
    /// List a single ISO14443A target and classify it.
    ///
    /// Blocks until the reader reports ready, the configured discovery
    /// timeout elapses (`Error::Timeout`), or the cancellation token is
    /// set (`Error::Cancelled`). The previous target is dropped first, so
    /// a failed discovery leaves the session without a target.
    pub fn detect_target(&mut self) -> Result<&Target> {
        self.target = None;

        let cmd = Command::InListPassiveTarget {
            max_targets: 1,
            baud_rate: BAUD_ISO14443A,
        };
        self.send(&cmd)?;

        debug!("waiting for target");
        self.wait_ready()?;

        let frame = self.receive(DISCOVERY_RESPONSE_LEN)?;
        let found = responses::decode_in_list_passive_target(&frame)?;
        let target = Target::from(found);
        debug!(
            "found {} target, uid={} sens_res={:04x} sel_res={:02x}",
            target.card_type(),
            target.uid().to_hex(),
            target.sens_res().as_u16(),
            target.sel_res().as_u8()
        );

        Ok(self.target.insert(target))
    }

    fn wait_ready(&mut self) -> Result<()> {
        // None when the timeout is too large to represent: wait until cancelled
        let deadline = Instant::now().checked_add(self.config.discovery_timeout);
        loop {
            self.check_cancelled()?;
            if self.transport.poll_status()? == ReaderStatus::Ready {
                return Ok(());
            }
            let now = Instant::now();
            if deadline.is_some_and(|d| now >= d) {
                debug!(
                    "no target within {}ms",
                    self.config.discovery_timeout.as_millis()
                );
                return Err(Error::Timeout);
            }
            trace!("reader busy");
            // never sleep past the deadline
            let next_poll = match (now.checked_add(self.config.poll_interval), deadline) {
                (Some(t), Some(d)) => Some(t.min(d)),
                (t, d) => t.or(d),
            };
            self.sleep_until(next_poll)?;
        }
    }

    /// Sleep until `wake`, in slices short enough to notice a cancel.
    fn sleep_until(&self, wake: Option<Instant>) -> Result<()> {
        let Some(wake) = wake else {
            std::thread::sleep(cancel_check_interval());
            return Ok(());
        };
        loop {
            self.check_cancelled()?;
            let slice = wake.saturating_duration_since(Instant::now());
            if slice.is_zero() {
                return Ok(());
            }
            std::thread::sleep(slice.min(cancel_check_interval()));
        }
    }

    fn check_cancelled(&self) -> Result<()> {
        if self.cancel.is_cancelled() {
            debug!("discovery cancelled");
            return Err(Error::Cancelled);
        }
        Ok(())
    }

    /// Last discovered target, if any. Cards can leave the field without
    /// notice; re-run `detect_target` before relying on it.
    pub fn target(&self) -> Option<&Target> {
        self.target.as_ref()
    }

    pub fn keys(&self) -> &KeyConfig {
        &self.keys
    }

    pub fn set_keys(&mut self, key_a: Key, key_b: Key) {
        self.keys.key_a = key_a;
        self.keys.key_b = key_b;
    }

    /// Select which key slot authenticates subsequent Classic accesses.
    pub fn use_key(&mut self, slot: KeySlot) {
        self.keys.active = slot;
    }

    /// Authenticate `block` on the current Classic target with the active key.
    pub fn authenticate(&mut self, block: u8) -> Result<()> {
        operations::auth::authenticate(self, block)
    }

    pub fn read_classic_block(&mut self, address: u8) -> Result<BlockData> {
        operations::classic::read_block(self, address)
    }

    pub fn write_classic_block(&mut self, address: u8, data: &BlockData) -> Result<()> {
        operations::classic::write_block(self, address, data)
    }

    pub fn read_ultralight_page(&mut self, address: u8) -> Result<PageData> {
        operations::ultralight::read_page(self, address)
    }

    pub fn write_ultralight_page(&mut self, address: u8, data: &PageData) -> Result<()> {
        operations::ultralight::write_page(self, address, data)
    }

    /// Re-detect the target and write `payload` from block/page 4 onwards.
    pub fn write_payload(&mut self, payload: &[u8]) -> Result<()> {
        payload::write_payload(self, payload)
    }

    /// Re-detect the target and read `len` payload bytes back.
    pub fn read_payload(&mut self, len: usize) -> Result<Vec<u8>> {
        payload::read_payload(self, len)
    }
}

// libmifare/src/test_support/simulated.rs

use crate::constants::{
    BLOCKS_PER_SECTOR, CLASSIC_BLOCK_LEN, MAX_BLOCKS, MIFARE_CMD_AUTH_A, MIFARE_CMD_AUTH_B,
    MIFARE_CMD_READ, MIFARE_CMD_WRITE, MIFARE_ULTRALIGHT_CMD_WRITE, PN532_CMD_IN_DATA_EXCHANGE,
    PN532_CMD_IN_LIST_PASSIVE_TARGET, PN532_CMD_SAM_CONFIGURATION, ULTRALIGHT_PAGE_LEN,
};
use crate::test_support::response_frame;
use crate::transport::{ReaderStatus, Transport};
use crate::types::{CardType, Key, is_sector_trailer};
use crate::{Error, Result};

/// PN532 error status returned for rejected card operations.
const STATUS_MIFARE_ERROR: u8 = 0x14;
const SECTORS: usize = (MAX_BLOCKS / BLOCKS_PER_SECTOR) as usize;

/// In-memory PN532 with one card in its field.
///
/// Classic cards keep per-sector keys; writing a trailer replaces the
/// sector's key A (bytes 0..6) and key B (bytes 10..16). Access bits are
/// stored but not enforced. Responses are zero-padded to the length the
/// host asks for, the way a fixed-length bus read behaves.
#[derive(Debug, Clone)]
pub struct SimulatedCard {
    sens_res: [u8; 2],
    sel_res: u8,
    uid: Vec<u8>,
    memory: Vec<[u8; CLASSIC_BLOCK_LEN]>,
    keys: Vec<(Key, Key)>,
    authenticated: Option<u8>,
    present: bool,
    busy_polls: usize,
    busy_left: usize,
    pending: Option<Vec<u8>>,
    /// Every command payload received, in order
    pub commands: Vec<Vec<u8>>,
}

impl SimulatedCard {
    pub fn new(sens_res: [u8; 2], sel_res: u8, uid: &[u8]) -> Self {
        Self {
            sens_res,
            sel_res,
            uid: uid.to_vec(),
            memory: vec![[0u8; CLASSIC_BLOCK_LEN]; MAX_BLOCKS as usize],
            keys: vec![(Key::DEFAULT, Key::DEFAULT); SECTORS],
            authenticated: None,
            present: true,
            busy_polls: 0,
            busy_left: 0,
            pending: None,
            commands: Vec::new(),
        }
    }

    /// MIFARE Classic 1K with factory keys
    pub fn classic(uid: &[u8]) -> Self {
        Self::new([0x00, 0x04], 0x08, uid)
    }

    pub fn ultralight(uid: &[u8]) -> Self {
        Self::new([0x00, 0x44], 0x00, uid)
    }

    pub fn card_type(&self) -> CardType {
        CardType::classify(
            crate::types::SensRes::from_bytes(self.sens_res),
            crate::types::SelRes::new(self.sel_res),
        )
    }

    /// Remove or return the card to the field.
    pub fn set_present(&mut self, present: bool) {
        self.present = present;
    }

    /// Number of Busy polls reported before each response becomes ready.
    pub fn set_busy_polls(&mut self, polls: usize) {
        self.busy_polls = polls;
    }

    pub fn set_sector_keys(&mut self, sector: usize, key_a: Key, key_b: Key) {
        if let Some(slot) = self.keys.get_mut(sector) {
            *slot = (key_a, key_b);
        }
    }

    /// Raw contents of a Classic block, or of four Ultralight pages when
    /// read through `page`.
    pub fn block(&self, address: u8) -> [u8; CLASSIC_BLOCK_LEN] {
        self.memory[address as usize % MAX_BLOCKS as usize]
    }

    pub fn page(&self, address: u8) -> [u8; ULTRALIGHT_PAGE_LEN] {
        let mut page = [0u8; ULTRALIGHT_PAGE_LEN];
        page.copy_from_slice(&self.block(address)[..ULTRALIGHT_PAGE_LEN]);
        page
    }

    /// Commands sent with InDataExchange carrying the given MIFARE opcode.
    pub fn exchanges_with(&self, opcode: u8) -> Vec<&[u8]> {
        self.commands
            .iter()
            .filter(|c| c.len() > 2 && c[0] == PN532_CMD_IN_DATA_EXCHANGE && c[2] == opcode)
            .map(|c| &c[..])
            .collect()
    }

    fn respond(&mut self, frame: Vec<u8>) {
        self.busy_left = self.busy_polls;
        self.pending = Some(frame);
    }

    fn status(code: u8) -> Vec<u8> {
        response_frame(PN532_CMD_IN_DATA_EXCHANGE + 1, &[code])
    }

    fn data(bytes: &[u8]) -> Vec<u8> {
        let mut body = vec![0x00];
        body.extend_from_slice(bytes);
        response_frame(PN532_CMD_IN_DATA_EXCHANGE + 1, &body)
    }

    fn is_classic(&self) -> bool {
        self.card_type() == CardType::Classic
    }

    fn handle_exchange(&mut self, cmd: &[u8]) -> Vec<u8> {
        let (opcode, address) = match cmd {
            [_, _, op, addr, ..] => (*op, *addr),
            _ => return Self::status(STATUS_MIFARE_ERROR),
        };
        if address >= MAX_BLOCKS {
            return Self::status(STATUS_MIFARE_ERROR);
        }
        let sector = address / BLOCKS_PER_SECTOR;

        match opcode {
            MIFARE_CMD_AUTH_A | MIFARE_CMD_AUTH_B if self.is_classic() => {
                let (key_a, key_b) = self.keys[sector as usize];
                let expected = if opcode == MIFARE_CMD_AUTH_A { key_a } else { key_b };
                let key_ok = cmd.get(4..10) == Some(&expected.as_bytes()[..]);
                let uid_ok = cmd.get(10..) == Some(&self.uid[..]);
                if key_ok && uid_ok {
                    self.authenticated = Some(sector);
                    Self::status(0x00)
                } else {
                    self.authenticated = None;
                    Self::status(STATUS_MIFARE_ERROR)
                }
            }
            MIFARE_CMD_READ if self.is_classic() => {
                if self.authenticated != Some(sector) {
                    return Self::status(STATUS_MIFARE_ERROR);
                }
                let block = self.memory[address as usize];
                Self::data(&block)
            }
            MIFARE_CMD_READ => {
                // four consecutive pages, wrapping past the last one
                let mut out = Vec::with_capacity(CLASSIC_BLOCK_LEN);
                for i in 0..4 {
                    out.extend_from_slice(&self.page((address + i) % MAX_BLOCKS));
                }
                Self::data(&out)
            }
            MIFARE_CMD_WRITE if self.is_classic() => {
                if self.authenticated != Some(sector) {
                    return Self::status(STATUS_MIFARE_ERROR);
                }
                let Some(data) = cmd.get(4..4 + CLASSIC_BLOCK_LEN) else {
                    return Self::status(STATUS_MIFARE_ERROR);
                };
                self.memory[address as usize].copy_from_slice(data);
                if is_sector_trailer(address) {
                    let mut a = [0u8; 6];
                    let mut b = [0u8; 6];
                    a.copy_from_slice(&data[..6]);
                    b.copy_from_slice(&data[10..16]);
                    self.keys[sector as usize] = (Key::from_bytes(a), Key::from_bytes(b));
                }
                Self::status(0x00)
            }
            MIFARE_ULTRALIGHT_CMD_WRITE if !self.is_classic() => {
                let Some(data) = cmd.get(4..4 + ULTRALIGHT_PAGE_LEN) else {
                    return Self::status(STATUS_MIFARE_ERROR);
                };
                self.memory[address as usize][..ULTRALIGHT_PAGE_LEN].copy_from_slice(data);
                Self::status(0x00)
            }
            _ => Self::status(STATUS_MIFARE_ERROR),
        }
    }
}

impl Transport for SimulatedCard {
    fn send_command(&mut self, command: &[u8]) -> Result<bool> {
        self.commands.push(command.to_vec());
        self.pending = None;

        match command.first().copied() {
            Some(PN532_CMD_SAM_CONFIGURATION) => {
                self.respond(response_frame(PN532_CMD_SAM_CONFIGURATION + 1, &[]))
            }
            Some(PN532_CMD_IN_LIST_PASSIVE_TARGET) => {
                self.authenticated = None;
                if self.present {
                    let mut data = vec![0x01, 0x01];
                    data.extend_from_slice(&self.sens_res);
                    data.push(self.sel_res);
                    data.push(self.uid.len() as u8);
                    data.extend_from_slice(&self.uid);
                    self.respond(response_frame(PN532_CMD_IN_LIST_PASSIVE_TARGET + 1, &data));
                }
            }
            Some(PN532_CMD_IN_DATA_EXCHANGE) if self.present => {
                let frame = self.handle_exchange(command);
                self.respond(frame);
            }
            // card gone: the reader times out talking to it
            Some(PN532_CMD_IN_DATA_EXCHANGE) => self.respond(Self::status(0x01)),
            _ => return Ok(false),
        }
        Ok(true)
    }

    fn poll_status(&mut self) -> Result<ReaderStatus> {
        if self.pending.is_none() {
            return Ok(ReaderStatus::Busy);
        }
        if self.busy_left > 0 {
            self.busy_left -= 1;
            return Ok(ReaderStatus::Busy);
        }
        Ok(ReaderStatus::Ready)
    }

    fn read_response(&mut self, expected_len: usize) -> Result<Vec<u8>> {
        let mut frame = self.pending.take().ok_or(Error::Timeout)?;
        if frame.len() < expected_len {
            frame.resize(expected_len, 0);
        }
        Ok(frame)
    }
}

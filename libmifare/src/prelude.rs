// libmifare/src/prelude.rs

pub use crate::card::{PlannedWrite, Target, plan_classic, plan_ultralight};
pub use crate::reader::{Configured, Reader, ReaderBuilder, ReaderConfig, Uninitialized};
pub use crate::transport::{ReaderStatus, Transport};
pub use crate::{
    BlockData, CardType, Error, Key, KeySlot, PageData, ResponseError, Result, SelRes, SensRes,
    Uid,
};

// Re-export small utilities for convenience
pub use crate::utils::{CancellationToken, bytes_to_hex, bytes_to_hex_spaced, ms};

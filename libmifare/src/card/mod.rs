// libmifare/src/card/mod.rs

use crate::protocol::DiscoveredTarget;
use crate::types::{CardType, SelRes, SensRes, Uid};

pub mod operations;
pub mod payload;

pub use payload::{PlannedWrite, classic_capacity, plan_classic, plan_ultralight, ultralight_capacity};

/// A target found by discovery. Only valid until the card leaves the field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Target {
    uid: Uid,
    sens_res: SensRes,
    sel_res: SelRes,
    card_type: CardType,
}

impl Target {
    pub fn new(uid: Uid, sens_res: SensRes, sel_res: SelRes) -> Self {
        Self {
            uid,
            sens_res,
            sel_res,
            card_type: CardType::classify(sens_res, sel_res),
        }
    }

    pub fn uid(&self) -> &Uid {
        &self.uid
    }
    pub fn sens_res(&self) -> SensRes {
        self.sens_res
    }
    pub fn sel_res(&self) -> SelRes {
        self.sel_res
    }
    pub fn card_type(&self) -> CardType {
        self.card_type
    }
}

impl From<DiscoveredTarget> for Target {
    fn from(d: DiscoveredTarget) -> Self {
        Self::new(d.uid, d.sens_res, d.sel_res)
    }
}

use libmifare::constants::BAUD_ISO14443A;
use libmifare::protocol::Command;
use libmifare::types::{BlockData, Key, KeySlot, PageData, Uid};

use crate::common::fixtures::{self, CLASSIC_UID};

#[test]
fn sam_configuration_bytes() {
    assert_eq!(
        Command::SamConfiguration.encode(),
        fixtures::hex_bytes("14 01 14 01")
    );
}

#[test]
fn discovery_bytes() {
    let cmd = Command::InListPassiveTarget {
        max_targets: 1,
        baud_rate: BAUD_ISO14443A,
    };
    assert_eq!(cmd.encode(), fixtures::hex_bytes("4a 01 00"));
}

#[test]
fn authenticate_carries_key_then_uid() {
    let uid = Uid::try_from(&CLASSIC_UID[..]).unwrap();
    let cmd = Command::Authenticate {
        slot: KeySlot::B,
        block: 0x0B,
        key: Key::from_bytes([0xA1, 0xA2, 0xA3, 0xA4, 0xA5, 0xA6]),
        uid,
    };
    assert_eq!(
        cmd.encode(),
        fixtures::hex_bytes("40 01 61 0b a1 a2 a3 a4 a5 a6 de ad be ef")
    );
}

#[test]
fn read_and_write_bytes() {
    assert_eq!(
        Command::Read { address: 0x3F }.encode(),
        fixtures::hex_bytes("40 01 30 3f")
    );

    let block = Command::WriteBlock {
        address: 4,
        data: BlockData::from_chunk(b"hello"),
    }
    .encode();
    assert_eq!(block.len(), 20);
    assert_eq!(&block[..4], &fixtures::hex_bytes("40 01 a0 04")[..]);
    assert_eq!(&block[4..9], b"hello");

    let page = Command::WritePage {
        address: 5,
        data: PageData::from_bytes(*b"abcd"),
    }
    .encode();
    assert_eq!(page, fixtures::hex_bytes("40 01 a2 05 61 62 63 64"));
}

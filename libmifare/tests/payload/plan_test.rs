use libmifare::card::{classic_capacity, plan_classic, plan_ultralight, ultralight_capacity};
use libmifare::types::{BlockData, is_sector_trailer};
use libmifare::Error;
use proptest::prelude::*;

use crate::common::fixtures;

#[test]
fn ten_bytes_fill_first_sector() {
    let payload = fixtures::sample_payload(10);
    let plan = plan_classic(&payload).unwrap();

    let addrs: Vec<u8> = plan.iter().map(|w| w.address).collect();
    assert_eq!(addrs, vec![4, 5, 6, 7]);

    let first = plan[0].data.as_bytes();
    assert_eq!(&first[..10], &payload[..]);
    assert_eq!(&first[10..], &[0u8; 6]);
    assert_eq!(plan[1].data, BlockData::ZERO);
    assert_eq!(plan[2].data, BlockData::ZERO);
    assert_eq!(
        plan[3].data.as_bytes(),
        &fixtures::hex_bytes("d3f7d3f7d3f7 7f0788 40 ffffffffffff")[..]
    );
}

#[test]
fn capacity_boundaries() {
    assert!(plan_classic(&vec![0u8; classic_capacity()]).is_ok());
    assert!(matches!(
        plan_classic(&vec![0u8; classic_capacity() + 1]),
        Err(Error::PayloadTooLarge { .. })
    ));
    assert!(plan_ultralight(&vec![0u8; ultralight_capacity()]).is_ok());
    assert!(plan_ultralight(&vec![0u8; ultralight_capacity() + 1]).is_err());
}

proptest! {
    #[test]
    fn trailers_only_ever_get_the_footer(len in 0usize..=720) {
        let payload = fixtures::sample_payload(len);
        for w in plan_classic(&payload).unwrap() {
            if is_sector_trailer(w.address) {
                prop_assert_eq!(w.data, BlockData::TRAILER_FOOTER);
            }
        }
    }

    #[test]
    fn ultralight_pages_are_contiguous_from_four(len in 0usize..=240) {
        let plan = plan_ultralight(&fixtures::sample_payload(len)).unwrap();
        for (i, w) in plan.iter().enumerate() {
            prop_assert_eq!(w.address as usize, 4 + i);
        }
    }
}

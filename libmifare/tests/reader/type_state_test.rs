use libmifare::reader::{Reader, ReaderBuilder, ReaderConfig};
use libmifare::test_support::{self, SimulatedCard};
use libmifare::transport::mock::MockTransport;
use libmifare::{Error, KeySlot, ms};

use crate::common;

#[test]
fn configure_transitions_to_configured() {
    common::init_logging();
    let card = SimulatedCard::classic(&common::fixtures::CLASSIC_UID);
    let reader = Reader::new_with_transport(Box::new(card));
    let configured = reader.configure().unwrap();
    assert!(configured.target().is_none());
}

#[test]
fn builder_applies_config_and_keys() {
    let reader = ReaderBuilder::new()
        .with_transport(test_support::boxed_mock_with_responses(vec![
            test_support::sam_ok_frame(),
        ]))
        .with_config(ReaderConfig::default().with_discovery_timeout(ms(250)))
        .with_key_b(common::fixtures::nfc_public_key())
        .with_active_key(KeySlot::B)
        .build_configured()
        .unwrap();

    assert_eq!(reader.config().discovery_timeout, ms(250));
    assert_eq!(
        reader.keys().active_key(),
        &common::fixtures::nfc_public_key()
    );
}

#[test]
fn configure_surfaces_transport_errors() {
    // nothing queued: the mock times out on the SAM read
    let reader = Reader::new_with_transport(Box::new(MockTransport::new()));
    assert!(matches!(reader.configure(), Err(Error::Timeout)));
}

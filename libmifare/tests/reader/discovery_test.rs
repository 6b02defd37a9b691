use std::thread;
use std::time::{Duration, Instant};

use libmifare::reader::{Configured, Reader, ReaderBuilder, ReaderConfig};
use libmifare::test_support::{self, SimulatedCard};
use libmifare::transport::mock::MockTransport;
use libmifare::transport::ReaderStatus;
use libmifare::{CardType, Error, ms};

use crate::common::{self, fixtures};

#[test]
fn detect_classic_deadbeef() {
    common::init_logging();
    let mut reader =
        test_support::configured_mock_reader(vec![fixtures::classic_discovery_frame()]).unwrap();

    let target = reader.detect_target().unwrap();
    assert_eq!(target.card_type(), CardType::Classic);
    assert_eq!(target.uid().as_bytes(), &fixtures::CLASSIC_UID);
    assert_eq!(target.sel_res().as_u8(), 0x08);
}

#[test]
fn detect_against_simulated_ultralight() {
    let mut card = SimulatedCard::ultralight(&fixtures::ULTRALIGHT_UID);
    card.set_busy_polls(3);
    let (mut reader, card) = test_support::simulated_reader(card).unwrap();

    let target = reader.detect_target().unwrap();
    assert_eq!(target.card_type(), CardType::Ultralight);
    assert_eq!(target.uid().len(), 7);
    assert_eq!(card.borrow().commands.last().unwrap(), &vec![0x4A, 0x01, 0x00]);
}

#[test]
fn detect_reports_zero_tags() {
    let empty = test_support::response_frame(0x4B, &[0x00]);
    let mut reader = test_support::configured_mock_reader(vec![empty]).unwrap();
    assert!(matches!(
        reader.detect_target(),
        Err(Error::NoTarget { found: 0 })
    ));
}

#[test]
fn detect_times_out_when_never_ready() {
    let mut mock = MockTransport::new();
    mock.push_response(test_support::sam_ok_frame());
    mock.set_idle_status(ReaderStatus::Busy);

    let config = ReaderConfig::default()
        .with_poll_interval(ms(1))
        .with_discovery_timeout(ms(30));
    let mut reader = ReaderBuilder::new()
        .with_transport(Box::new(mock))
        .with_config(config)
        .build_configured()
        .unwrap();

    let started = Instant::now();
    assert!(matches!(reader.detect_target(), Err(Error::Timeout)));
    assert!(started.elapsed() >= ms(30));
    assert!(reader.target().is_none());
}

#[test]
fn detect_without_card_times_out() {
    let mut card = SimulatedCard::classic(&fixtures::CLASSIC_UID);
    card.set_present(false);
    let config = ReaderConfig::default()
        .with_poll_interval(ms(1))
        .with_discovery_timeout(ms(20));
    let mut reader = ReaderBuilder::new()
        .with_transport(Box::new(card))
        .with_config(config)
        .build_configured()
        .unwrap();
    assert!(matches!(reader.detect_target(), Err(Error::Timeout)));
}

#[test]
fn cancel_before_detect() {
    let mut mock = MockTransport::new();
    mock.push_response(test_support::sam_ok_frame());
    mock.set_idle_status(ReaderStatus::Busy);
    let mut reader = ReaderBuilder::new()
        .with_transport(Box::new(mock))
        .build_configured()
        .unwrap();

    reader.cancellation_token().cancel();
    assert!(matches!(reader.detect_target(), Err(Error::Cancelled)));
}

#[test]
fn cancel_from_another_thread() {
    let mut mock = MockTransport::new();
    mock.push_response(test_support::sam_ok_frame());
    mock.set_idle_status(ReaderStatus::Busy);
    // long timeout so only cancellation can end the wait
    let config = ReaderConfig::default()
        .with_poll_interval(ms(1))
        .with_discovery_timeout(Duration::from_secs(30));
    let mut reader = ReaderBuilder::new()
        .with_transport(Box::new(mock))
        .with_config(config)
        .build_configured()
        .unwrap();

    let token = reader.cancellation_token();
    let canceller = thread::spawn(move || {
        thread::sleep(ms(20));
        token.cancel();
    });

    let started = Instant::now();
    assert!(matches!(reader.detect_target(), Err(Error::Cancelled)));
    assert!(started.elapsed() < Duration::from_secs(30));
    canceller.join().unwrap();
}

fn always_busy_reader(config: ReaderConfig) -> Reader<Configured> {
    let mut mock = MockTransport::new();
    mock.push_response(test_support::sam_ok_frame());
    mock.set_idle_status(ReaderStatus::Busy);
    ReaderBuilder::new()
        .with_transport(Box::new(mock))
        .with_config(config)
        .build_configured()
        .unwrap()
}

#[test]
fn timeout_shorter_than_poll_interval_is_honored() {
    let poll_interval = Duration::from_secs(1);
    let mut reader = always_busy_reader(
        ReaderConfig::default()
            .with_poll_interval(poll_interval)
            .with_discovery_timeout(ms(50)),
    );

    let started = Instant::now();
    assert!(matches!(reader.detect_target(), Err(Error::Timeout)));
    let elapsed = started.elapsed();
    assert!(elapsed >= ms(50));
    assert!(elapsed < poll_interval, "waited {:?}", elapsed);
}

#[test]
fn cancel_lands_within_a_long_poll_interval() {
    let poll_interval = Duration::from_secs(1);
    let mut reader = always_busy_reader(
        ReaderConfig::default()
            .with_poll_interval(poll_interval)
            .with_discovery_timeout(Duration::from_secs(30)),
    );

    let token = reader.cancellation_token();
    let canceller = thread::spawn(move || {
        thread::sleep(ms(20));
        token.cancel();
    });

    let started = Instant::now();
    assert!(matches!(reader.detect_target(), Err(Error::Cancelled)));
    let elapsed = started.elapsed();
    assert!(elapsed < poll_interval, "waited {:?}", elapsed);
    canceller.join().unwrap();
}

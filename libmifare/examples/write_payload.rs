//! Write a text payload to a simulated Classic card and read it back.
//!
//! RUST_LOG=debug cargo run --example write_payload -- "hello card"

use anyhow::{Context, Result};
use libmifare::prelude::*;
use libmifare::test_support::SimulatedCard;

fn main() -> Result<()> {
    env_logger::init();

    let text = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "hello from libmifare".to_string());

    let card = SimulatedCard::classic(&[0xDE, 0xAD, 0xBE, 0xEF]);
    let mut reader = ReaderBuilder::new()
        .with_transport(Box::new(card))
        .build_configured()
        .context("configure reader")?;

    let target = reader.detect_target().context("detect target")?;
    println!("{} uid={}", target.card_type(), target.uid().to_hex());

    for w in plan_classic(text.as_bytes())? {
        println!("  block {:02}: {}", w.address, w.data.to_hex());
    }
    reader.write_payload(text.as_bytes()).context("write payload")?;

    // the sector footer sets key A to the NFC key; key B stays at the factory value
    reader.use_key(KeySlot::B);
    let back = reader.read_payload(text.len()).context("read payload")?;
    println!("read back: {}", String::from_utf8_lossy(&back));
    Ok(())
}

// libmifare/src/protocol/responses/mod.rs
//
// Per-command decoders. Each takes the raw response frame exactly as the
// transport returned it and reads its fields at the fixed offsets named
// in `constants`.

pub mod discovery;
pub mod exchange;
pub mod sam;

pub use discovery::{DiscoveredTarget, decode_in_list_passive_target};
pub use exchange::{decode_authenticate, decode_classic_read, decode_status, decode_ultralight_read};
pub use sam::decode_sam_configuration;

// Telephony manager integration
pub mod ami;
pub mod playback;

pub use ami::{AmiClient, StoplistNotifier};
pub use playback::derive_playback;

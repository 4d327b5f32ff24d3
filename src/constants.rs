//! Constants recovered from the official mobile client.
//!
//! These are protocol data, not configuration: changing any of them breaks
//! parity with the traffic the API expects from a real device.

/// Pre-shared HMAC-SHA256 key compiled into the iOS client, as the 32
/// ASCII bytes the client feeds the keyed hash.
pub const HMAC_KEY: &[u8] = b"56037f4af22fb6960f3cd014e2ec71b3";

/// Timezone string the client concatenates into every signed message,
/// regardless of the device's actual timezone.
pub const TIMEZONE: &str = "Europe/Paris";

/// iOS bundle identifier reported to the anti-bot verifier.
pub const IOS_BUNDLE_ID: &str = "AlexisBarreyat.BeReal";

/// App version the spoofed client claims to be.
pub const IOS_VERSION: &str = "4.23.0";

/// iOS version the spoofed device claims to run. The leading component
/// drives the Darwin kernel version derivation.
pub const PLATFORM_VERSION: &str = "17.6.1";

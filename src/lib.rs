//! # bereal-auth-rs
//!
//! Authentication primitives for the private BeReal mobile API: time-bound
//! request signatures and synthetic Arkose Labs challenge documents.
//!
//! The API refuses traffic that does not look like the official iOS app.
//! Two artifacts make a request pass: a `bereal-signature` header binding
//! the device identifier to the current second, and, on endpoints gated by
//! the Arkose enforcement SDK, a completed challenge whose device
//! telemetry resembles a real handset. This crate produces both artifacts;
//! performing the HTTP requests and driving the embedded browser surface
//! stay with the caller.
//!
//! ## Example
//!
//! ```
//! use bereal_auth_rs::{ArkoseChallengeBuilder, ChallengeEnvironment, signature};
//! use url::Url;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! // Header value for a signed API request.
//! let token = signature::sign("my-device-id")?;
//! assert!(!token.is_empty());
//!
//! // Challenge document for an Arkose-gated endpoint. The caller loads
//! // the URI in a WebView and intercepts the `?arkoseToken=` redirect.
//! let environment = ChallengeEnvironment::new(Url::parse("https://localhost/feed")?);
//! let document = ArkoseChallengeBuilder::new(environment)
//!     .build("public-key", "data-exchange-blob", "my-device-id");
//! assert!(document.starts_with("data:text/html;base64,"));
//! # Ok(())
//! # }
//! ```

pub mod challenges;
pub mod constants;
pub mod signature;

pub use crate::challenges::ChallengeEnvironment;
pub use crate::challenges::arkose::ArkoseChallengeBuilder;
pub use crate::challenges::device::{DeviceProfile, IPHONE_15_PRO_MAX};
pub use crate::signature::{SIGNATURE_HEADER, SignatureError};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

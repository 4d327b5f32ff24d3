//! Spoofed hardware identity.
//!
//! The verifier cross-checks hardware fields against each other, so every
//! value describing the claimed handset lives in one profile: a model code
//! must not claim one phone while the kernel architecture claims another.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::constants::PLATFORM_VERSION;

/// One internally consistent hardware identity presented to the verifier.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeviceProfile {
    /// Regulatory model code, e.g. `A2849`.
    pub model: String,
    /// Product identifier, e.g. `iPhone15,3`.
    pub product: String,
    pub brand: String,
    pub manufacturer: String,
    /// Userland architecture token.
    pub arch: String,
    /// Architecture suffix of the kernel banner, tied to the SoC.
    pub kernel_arch: String,
    pub cpu_cores: u32,
    /// iOS version string; its leading component drives the kernel
    /// version derivation.
    pub platform_version: String,
}

/// Default identity: iPhone 15 Pro Max (United States).
///
/// T8130 is the Apple A17 Pro SoC that ships in this handset.
pub static IPHONE_15_PRO_MAX: Lazy<DeviceProfile> = Lazy::new(|| DeviceProfile {
    model: "A2849".into(),
    product: "iPhone15,3".into(),
    brand: "Apple".into(),
    manufacturer: "Apple".into(),
    arch: "arm64e".into(),
    kernel_arch: "RELEASE_ARM64_T8130".into(),
    cpu_cores: 8,
    platform_version: PLATFORM_VERSION.into(),
});

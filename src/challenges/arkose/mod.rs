//! Arkose Labs challenge document synthesis.
//!
//! Risky API endpoints are gated behind an Arkose enforcement challenge
//! that expects device telemetry from the official iOS SDK. This module
//! forges that telemetry: it builds a self-contained HTML document that
//! loads the Arkose client script, answers its `onDataRequest` callback
//! with a fingerprint payload describing the spoofed handset, and
//! redirects back to the caller's origin with the completion token.
//!
//! The document is returned as a `data:text/html;base64,` URI so the
//! caller can load it directly in an embedded browser surface and
//! intercept the `?arkoseToken=` redirect.

mod kernel;
mod telemetry;

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use chrono::Utc;
use log::debug;
use serde_json::{Value, json};
use sha2::{Digest, Sha256};
use url::Position;
use uuid::Uuid;

use crate::challenges::ChallengeEnvironment;
use crate::challenges::device::{DeviceProfile, IPHONE_15_PRO_MAX};
use crate::constants::{IOS_BUNDLE_ID, IOS_VERSION};

/// Arkose client script loaded by the generated document.
const ARKOSE_API_URL: &str = "https://client-api.arkoselabs.com/v2/api.js";

/// Version the official Arkose mobile SDK reports about itself.
const SDK_BUILD_VERSION: &str = "2.4.0(2.4.0)";

/// Codec identifiers the official SDK probes for its codec hash.
const CODECS: [&str; 5] = ["mp4a.40.2", "vorbis", "opus", "theora", "vorbis"];

/// Key prefix shared by every fingerprint field.
const FIELD_PREFIX: &str = "mobile_sdk__";

const STYLE: &str = concat!(
    "<style>html,body{display:flex;justify-content:center;align-items:center;",
    "background:black;height:100%;width:100%;overflow:hidden;position:fixed;",
    "margin:0;padding:0;color:#fff}.spin{transition: opacity .175s; ",
    "animation: spin 1s linear infinite}",
    "@keyframes spin{to{transform:rotate(360deg)}}</style>",
);

const SPINNER: &str = concat!(
    r#"<svg class="spin" xmlns="http://www.w3.org/2000/svg" width="32" height="32" "#,
    r#"viewBox="0 0 24 24"><path fill="currentColor" "#,
    r#"d="M12 4V2A10 10 0 0 0 2 12h2a8 8 0 0 1 8-8"/></svg>"#,
);

/// Builds the self-contained challenge document handed to an embedded
/// browser surface.
///
/// Randomized fields (kernel banner, UUID-derived hashes) rotate on every
/// build so repeated challenges never present a static, trivially
/// blockable fingerprint; deterministic fields stay stable for the same
/// environment.
#[derive(Debug, Clone)]
pub struct ArkoseChallengeBuilder {
    environment: ChallengeEnvironment,
    profile: DeviceProfile,
}

impl ArkoseChallengeBuilder {
    pub fn new(environment: ChallengeEnvironment) -> Self {
        Self {
            environment,
            profile: IPHONE_15_PRO_MAX.clone(),
        }
    }

    /// Present a different hardware identity.
    pub fn with_profile(mut self, profile: DeviceProfile) -> Self {
        self.profile = profile;
        self
    }

    /// Build the challenge document for the current wall-clock second.
    ///
    /// `public_key` and `data_exchange` come from a prior API exchange and
    /// pass through opaquely; nothing about their grammar is validated.
    pub fn build(&self, public_key: &str, data_exchange: &str, device_id: &str) -> String {
        self.build_at(public_key, data_exchange, device_id, Utc::now().timestamp())
    }

    /// Build with an explicit telemetry timestamp.
    pub fn build_at(
        &self,
        public_key: &str,
        data_exchange: &str,
        device_id: &str,
        timestamp: i64,
    ) -> String {
        debug!("building arkose challenge document at timestamp {timestamp}");

        let html = self.document(public_key, data_exchange, device_id, timestamp);
        format!("data:text/html;base64,{}", BASE64.encode(html))
    }

    fn document(
        &self,
        public_key: &str,
        data_exchange: &str,
        device_id: &str,
        timestamp: i64,
    ) -> String {
        // Equivalent of location.origin + location.pathname: the page the
        // embedded surface navigates back to once the challenge completes.
        let callback = &self.environment.origin[..Position::AfterPath];

        let fields = self
            .data_request_fields(device_id, timestamp)
            .into_iter()
            .map(|(name, value)| format!("[p+\"{name}\"]:{value}"))
            .collect::<Vec<_>>()
            .join(",\n");

        let mut script = String::from(
            "function setup(enforcement){\nenforcement.setConfig({\nselector:'#challenge',\npublicKey:",
        );
        script.push_str(&conv(&json!(public_key)));
        script.push_str(",\nmode:'inline',\ndata:{blob:");
        script.push_str(&conv(&json!(data_exchange)));
        script.push_str(
            "},\nisSDK:true,\naccessibilitySettings:{lockFocusToModal:true},\nonCompleted({token}){\nlocation.href=`",
        );
        script.push_str(callback);
        script.push_str(
            "?arkoseToken=${token}`\n},\nonShow(){\ndocument.querySelector('.spin').style.opacity=0\n},\nonDataRequest(){\nconst p=\"",
        );
        script.push_str(FIELD_PREFIX);
        script.push_str("\"\nenforcement.dataResponse(btoa(JSON.stringify({\n");
        script.push_str(&fields);
        script.push_str("\n})))\n}\n})\n}");

        let mut html = String::from(
            r#"<html><head><meta name="viewport" content="width=device-width, initial-scale=1,maximum-scale=1,user-scalable=0">"#,
        );
        html.push_str(STYLE);
        html.push_str(&format!(
            r#"<script crossorigin="anonymous" data-callback="setup" src="{ARKOSE_API_URL}" async defer></script>"#,
        ));
        html.push_str("<script>");
        html.push_str(&script);
        html.push_str("</script>");
        html.push_str(r#"</head><body id="challenge">"#);
        html.push_str(SPINNER);
        html.push_str("</body></html>");
        html
    }

    /// Fingerprint fields answered to the SDK's `onDataRequest` callback,
    /// in the order the official client emits them. Values are fragments
    /// of JavaScript source, already serialized via [`conv`].
    fn data_request_fields(&self, device_id: &str, timestamp: i64) -> Vec<(&'static str, String)> {
        let profile = &self.profile;

        // Hash inputs use the conv rendering, quotes included; the
        // official SDK hashes the serialized text, not the raw list.
        let locales = conv(&json!(self.environment.languages));
        let codecs = conv(&json!(CODECS));

        let kernel = kernel::synthesize(&profile.platform_version, &profile.kernel_arch);
        let gpu = format!("{0},{0} {1}", profile.brand, Uuid::new_v4());
        let ubiquity_token = sha256_hex(&Uuid::new_v4().to_string());

        vec![
            ("os_version", conv(&json!(profile.platform_version))),
            ("userAgentModified", conv(&json!(""))),
            ("biometrics_proximity", conv(&json!("false,0"))),
            ("build_version", conv(&json!(SDK_BUILD_VERSION))),
            ("product", conv(&json!(profile.product))),
            ("device_orientation", conv(&json!("Un"))),
            ("battery_status", conv(&json!("Full"))),
            ("battery_capacity", conv(&json!(100))),
            ("device", conv(&json!(profile.product))),
            ("app_id", conv(&json!(IOS_BUNDLE_ID))),
            ("screen_width", conv(&json!(self.environment.viewport_width))),
            ("app_version", conv(&json!(IOS_VERSION))),
            ("brand", conv(&json!(profile.brand))),
            // The one field the official client leaves as a bare array.
            ("storage_info", "[]".into()),
            ("manufacturer", conv(&json!(profile.manufacturer))),
            (
                "screen_height",
                conv(&json!(self.environment.viewport_height)),
            ),
            (
                "errors",
                conv(&json!([
                    "mobile_sdk__app_signing_credential",
                    "Data collection is not from within an app on device",
                ])),
            ),
            ("id_for_vendor", conv(&json!(device_id))),
            ("language", conv(&json!("en"))),
            ("screen_brightness", conv(&json!(100))),
            ("app_signing_credential", conv(&json!(""))),
            ("locale_hash", conv(&json!(sha256_hex(&locales)))),
            ("codec_hash", conv(&json!(sha256_hex(&codecs)))),
            ("device_name", conv(&json!(sha256_hex(device_id)))),
            ("cpu_cores", conv(&json!(profile.cpu_cores))),
            ("icloud_ubiquity_token", conv(&json!(ubiquity_token))),
            ("bio_fingerprint", conv(&json!(3))),
            ("gpu", conv(&json!(gpu))),
            ("device_arch", conv(&json!(profile.arch))),
            ("model", conv(&json!(profile.model))),
            ("kernel", conv(&json!(kernel))),
            ("country_region", conv(&json!("US"))),
            ("timezone_offset", conv(&json!(0))),
            (
                "biometric_orientation",
                conv(&json!(telemetry::orientation_series(timestamp))),
            ),
            (
                "biometric_motion",
                conv(&json!(telemetry::motion_series(timestamp))),
            ),
        ]
    }
}

/// Serialize a value the way the verifier's embedded script expects.
///
/// Scalars are plain JSON. Sequences become the JSON *string* of a
/// bracketed comma-join: `["a","b"]` renders as `"[a,b]"`. The official
/// SDK feeds that exact text to its hashers, so a standard JSON array
/// here would change the hashed bytes.
fn conv(value: &Value) -> String {
    let rendered = match value {
        Value::Array(items) => {
            let joined = items
                .iter()
                .map(join_piece)
                .collect::<Vec<_>>()
                .join(",");
            Value::String(format!("[{joined}]"))
        }
        other => other.clone(),
    };

    serde_json::to_string(&rendered).expect("scalar serialization cannot fail")
}

// Mirrors Array.prototype.join: strings render bare, everything else via
// its display form.
fn join_piece(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

fn sha256_hex(input: &str) -> String {
    hex::encode(Sha256::digest(input.as_bytes()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use url::Url;

    fn builder() -> ArkoseChallengeBuilder {
        ArkoseChallengeBuilder::new(ChallengeEnvironment::new(
            Url::parse("https://app.local/feed").unwrap(),
        ))
    }

    #[test]
    fn conv_reproduces_the_wire_quirk() {
        assert_eq!(conv(&json!(["a", "b"])), r#""[a,b]""#);
        assert_eq!(conv(&json!([1, 2, 3])), r#""[1,2,3]""#);
        assert_eq!(
            conv(&json!(["mp4a.40.2", "vorbis"])),
            r#""[mp4a.40.2,vorbis]""#
        );
        assert_eq!(conv(&json!("plain")), r#""plain""#);
        assert_eq!(conv(&json!("with \"quotes\"")), r#""with \"quotes\"""#);
        assert_eq!(conv(&json!(100)), "100");
        assert_eq!(conv(&json!(false)), "false");
    }

    #[test]
    fn payload_covers_every_fingerprint_field() {
        let fields = builder().data_request_fields("device-1", 1700000000);
        assert_eq!(fields.len(), 35);

        let names: Vec<&str> = fields.iter().map(|(name, _)| *name).collect();
        for expected in [
            "os_version",
            "product",
            "kernel",
            "locale_hash",
            "codec_hash",
            "device_name",
            "icloud_ubiquity_token",
            "biometric_orientation",
            "biometric_motion",
        ] {
            assert!(names.contains(&expected), "missing field {expected}");
        }
    }

    #[test]
    fn hardware_fields_agree_with_the_profile() {
        let fields = builder().data_request_fields("device-1", 1700000000);
        let value = |name: &str| -> String {
            fields
                .iter()
                .find(|(field, _)| *field == name)
                .map(|(_, value)| value.clone())
                .unwrap()
        };

        assert_eq!(value("model"), r#""A2849""#);
        assert_eq!(value("product"), r#""iPhone15,3""#);
        assert_eq!(value("device"), value("product"));
        assert_eq!(value("device_arch"), r#""arm64e""#);
        assert_eq!(value("cpu_cores"), "8");
        assert!(value("kernel").contains("RELEASE_ARM64_T8130"));
        assert_eq!(value("storage_info"), "[]");
    }

    #[test]
    fn data_uri_round_trips_to_a_document() {
        let uri = builder().build_at("pk", "blob", "device-1", 1700000000);
        let encoded = uri.strip_prefix("data:text/html;base64,").unwrap();
        let html = String::from_utf8(BASE64.decode(encoded).unwrap()).unwrap();
        assert!(html.starts_with("<html>"));
        assert!(html.ends_with("</body></html>"));
    }
}

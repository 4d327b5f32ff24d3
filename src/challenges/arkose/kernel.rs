//! Darwin kernel banner synthesis.
//!
//! The verifier can correlate repeated kernel strings across attempts, so
//! every challenge gets a freshly randomized banner instead of a fixed
//! literal. Only the Darwin major/minor stay tied to the claimed iOS
//! version; the build date and xnu build number are noise.

use chrono::{Datelike, Utc};
use rand::Rng;
use rand::seq::SliceRandom;

const WEEKDAYS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];
const MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Produce a plausible `Darwin Kernel Version ...` banner for the claimed
/// platform version and SoC architecture token.
pub(crate) fn synthesize(platform_version: &str, kernel_arch: &str) -> String {
    let mut rng = rand::thread_rng();

    let weekday = WEEKDAYS.choose(&mut rng).unwrap_or(&WEEKDAYS[0]);
    let month = MONTHS.choose(&mut rng).unwrap_or(&MONTHS[0]);
    let day = rng.gen_range(1..=31u32);
    let hour = rng.gen_range(0..24u32);
    let minute = rng.gen_range(0..60u32);
    let second = rng.gen_range(0..60u32);
    let year = Utc::now().year();

    let build = [
        rng.gen_range(10000..=12000u32),
        rng.gen_range(50..=150),
        rng.gen_range(10..=99),
        rng.gen_range(100..=999),
        rng.gen_range(0..=9),
    ]
    .map(|part| part.to_string())
    .join(".");
    let tilde = rng.gen_range(1..=5u32);

    let (major, minor) = darwin_version(platform_version);

    format!(
        "Darwin Kernel Version {major}.{minor}.0: {weekday} {month} {day:02} \
         {hour:02}:{minute:02}:{second:02} PDT {year}; root:xnu-{build}~{tilde}/{kernel_arch}"
    )
}

/// Darwin 23 shipped with iOS 17; each iOS major shifts the Darwin major
/// in lockstep. The minor is carried over from the platform version.
fn darwin_version(platform_version: &str) -> (i32, String) {
    let mut parts = platform_version.split('.');
    let os_major: i32 = parts
        .next()
        .and_then(|component| component.parse().ok())
        .unwrap_or(17);
    let minor = parts.next().unwrap_or("6").to_string();

    (23 + (17 - os_major), minor)
}

#[cfg(test)]
mod tests {
    use super::*;
    use regex::Regex;

    #[test]
    fn kernel_version_tracks_the_platform_version() {
        assert!(
            synthesize("17.6.1", "RELEASE_ARM64_T8130")
                .starts_with("Darwin Kernel Version 23.6.0: ")
        );
        assert!(
            synthesize("16.7.8", "RELEASE_ARM64_T8120")
                .starts_with("Darwin Kernel Version 24.7.0: ")
        );
    }

    #[test]
    fn banner_matches_the_darwin_grammar() {
        let re = Regex::new(concat!(
            r"^Darwin Kernel Version \d+\.\d+\.0: ",
            r"(Sun|Mon|Tue|Wed|Thu|Fri|Sat) ",
            r"(Jan|Feb|Mar|Apr|May|Jun|Jul|Aug|Sep|Oct|Nov|Dec) ",
            r"\d{2} \d{2}:\d{2}:\d{2} PDT \d{4}; ",
            r"root:xnu-\d{5}\.\d{2,3}\.\d{2}\.\d{3}\.\d~[1-5]/RELEASE_ARM64_T8130$",
        ))
        .unwrap();

        for _ in 0..32 {
            let banner = synthesize("17.6.1", "RELEASE_ARM64_T8130");
            assert!(re.is_match(&banner), "unexpected banner: {banner}");
        }
    }

    #[test]
    fn consecutive_banners_differ() {
        assert_ne!(
            synthesize("17.6.1", "RELEASE_ARM64_T8130"),
            synthesize("17.6.1", "RELEASE_ARM64_T8130"),
        );
    }

    #[test]
    fn malformed_platform_versions_fall_back_to_the_default() {
        assert!(
            synthesize("not-a-version", "RELEASE_ARM64_T8130")
                .starts_with("Darwin Kernel Version 23.6.0: ")
        );
    }
}

//! Pre-recorded motion telemetry.
//!
//! Both series were captured once from a real handset lying face-up on a
//! table. The verifier scores their statistical shape, not just their
//! format, so the samples are embedded verbatim as recorded; only the
//! leading timestamp is stamped fresh per challenge.

/// Device-orientation samples as `offset,alpha,beta,gamma` groups.
const ORIENTATION_TAIL: &str = concat!(
    "0,0.00,-0.00,-0.00;26,30.00,-0.00,-0.00;78,30.00,-0.00,-0.00;",
    "138,30.00,-0.00,-0.00;312,30.00,-0.00,-0.00;376,30.00,-0.00,-0.00;",
    "434,30.00,-0.00,-0.00;534,30.00,-0.00,-0.00;643,30.00,-0.00,-0.00;",
    "747,30.00,-0.00,-0.00;834,30.00,-0.00,-0.00;934,30.00,-0.00,-0.00;",
    "1034,30.00,-0.00,-0.00;1135,30.00,-0.00,-0.00;1234,30.00,-0.00,-0.00;",
    "1334,30.00,-0.00,-0.00;1434,30.00,-0.00,-0.00;1534,30.00,-0.00,-0.00;",
    "1635,30.00,-0.00,-0.00;1739,30.00,-0.00,-0.00;1834,30.00,-0.00,-0.00;",
    "1935,30.00,-0.00,-0.00;2034,30.00,-0.00,-0.00;2135,30.00,-0.00,-0.00;",
    "2235,30.00,-0.00,-0.00;2334,30.00,-0.00,-0.00;2434,30.00,-0.00,-0.00;",
    "2535,30.00,-0.00,-0.00;2634,30.00,-0.00,-0.00;2735,30.00,-0.00,-0.00;",
    "2834,30.00,-0.00,-0.00;2935,30.00,-0.00,-0.00;3035,30.00,-0.00,-0.00;",
    "3135,30.00,-0.00,-0.00;3234,30.00,-0.00,-0.00;3334,30.00,-0.00,-0.00;",
    "3435,30.00,-0.00,-0.00;3535,30.00,-0.00,-0.00;3634,30.00,-0.00,-0.00;",
    "3735,30.00,-0.00,-0.00;3834,30.00,-0.00,-0.00;3935,30.00,-0.00,-0.00;",
    "4035,30.00,-0.00,-0.00;4135,30.00,-0.00,-0.00;4235,30.00,-0.00,-0.00;",
    "4334,30.00,-0.00,-0.00;4435,30.00,-0.00,-0.00;4724,30.00,-0.00,-0.00;",
    "4726,30.00,-0.00,-0.00;4737,30.00,-0.00,-0.00;",
);

/// Device-motion samples: sample offset followed by acceleration,
/// gravity-included acceleration, and rotation-rate triples.
const MOTION_TAIL: &str = concat!(
    "0,0.00,0.00,0.00,0.00,0.00,-9.81,0.00,0.00,0.00;",
    "26,0.00,0.00,0.00,0.00,-4.91,-8.50,0.00,286.33,-76.72;",
    "78,0.00,0.00,0.00,0.00,-4.91,-8.50,0.00,0.00,0.00;",
    "138,0.00,0.00,0.00,0.00,-4.91,-8.50,0.00,0.00,0.00;",
    "312,0.00,0.00,0.00,0.00,-4.91,-8.50,0.00,0.00,0.00;",
    "376,0.00,0.00,0.00,0.00,-4.91,-8.50,0.00,0.00,0.00;",
    "434,0.00,0.00,0.00,0.00,-4.91,-8.50,0.00,0.00,0.00;",
    "534,0.00,0.00,0.00,0.00,-4.91,-8.50,0.00,0.00,0.00;",
    "643,0.00,0.00,0.00,0.00,-4.91,-8.50,0.00,0.00,0.00;",
    "747,0.00,0.00,0.00,0.00,-4.91,-8.50,0.00,0.00,0.00;",
    "834,0.00,0.00,0.00,0.00,-4.91,-8.50,0.00,0.00,0.00;",
    "934,0.00,0.00,0.00,0.00,-4.91,-8.50,0.00,0.00,0.00;",
    "1034,0.00,0.00,0.00,0.00,-4.91,-8.50,0.00,0.00,0.00;",
    "1135,0.00,0.00,0.00,0.00,-4.91,-8.50,0.00,0.00,0.00;",
    "1234,0.00,0.00,0.00,0.00,-4.91,-8.50,0.00,0.00,0.00;",
    "1334,0.00,0.00,0.00,0.00,-4.91,-8.50,0.00,0.00,0.00;",
    "1434,0.00,0.00,0.00,0.00,-4.91,-8.50,0.00,0.00,0.00;",
    "1534,0.00,0.00,0.00,0.00,-4.91,-8.50,0.00,0.00,0.00;",
    "1635,0.00,0.00,0.00,0.00,-4.91,-8.50,0.00,0.00,0.00;",
    "1739,0.00,0.00,0.00,0.00,-4.91,-8.50,0.00,0.00,0.00;",
    "1834,0.00,0.00,0.00,0.00,-4.91,-8.50,0.00,0.00,0.00;",
    "1935,0.00,0.00,0.00,0.00,-4.91,-8.50,0.00,0.00,0.00;",
    "2034,0.00,0.00,0.00,0.00,-4.91,-8.50,0.00,0.00,0.00;",
    "2135,0.00,0.00,0.00,0.00,-4.91,-8.50,0.00,0.00,0.00;",
    "2235,0.00,0.00,0.00,0.00,-4.91,-8.50,0.00,0.00,0.00;",
    "2334,0.00,0.00,0.00,0.00,-4.91,-8.50,0.00,0.00,0.00;",
    "2434,0.00,0.00,0.00,0.00,-4.91,-8.50,0.00,0.00,0.00;",
    "2535,0.00,0.00,0.00,0.00,-4.91,-8.50,0.00,0.00,0.00;",
    "2634,0.00,0.00,0.00,0.00,-4.91,-8.50,0.00,0.00,0.00;",
    "2735,0.00,0.00,0.00,0.00,-4.91,-8.50,0.00,0.00,0.00;",
    "2834,0.00,0.00,0.00,0.00,-4.91,-8.50,0.00,0.00,0.00;",
    "2935,0.00,0.00,0.00,0.00,-4.91,-8.50,0.00,0.00,0.00;",
    "3035,0.00,0.00,0.00,0.00,-4.91,-8.50,0.00,0.00,0.00;",
    "3135,0.00,0.00,0.00,0.00,-4.91,-8.50,0.00,0.00,0.00;",
    "3234,0.00,0.00,0.00,0.00,-4.91,-8.50,0.00,0.00,0.00;",
    "3334,0.00,0.00,0.00,0.00,-4.91,-8.50,0.00,0.00,0.00;",
    "3435,0.00,0.00,0.00,0.00,-4.91,-8.50,0.00,0.00,0.00;",
    "3535,0.00,0.00,0.00,0.00,-4.91,-8.50,0.00,0.00,0.00;",
    "3634,0.00,0.00,0.00,0.00,-4.91,-8.50,0.00,0.00,0.00;",
    "3735,0.00,0.00,0.00,0.00,-4.91,-8.50,0.00,0.00,0.00;",
    "3834,0.00,0.00,0.00,0.00,-4.91,-8.50,0.00,0.00,0.00;",
    "3935,0.00,0.00,0.00,0.00,-4.91,-8.50,0.00,0.00,0.00;",
    "4035,0.00,0.00,0.00,0.00,-4.91,-8.50,0.00,0.00,0.00;",
    "4135,0.00,0.00,0.00,0.00,-4.91,-8.50,0.00,0.00,0.00;",
    "4235,0.00,0.00,0.00,0.00,-4.91,-8.50,0.00,0.00,0.00;",
    "4334,0.00,0.00,0.00,0.00,-4.91,-8.50,0.00,0.00,0.00;",
    "4435,0.00,0.00,0.00,0.00,-4.91,-8.50,0.00,0.00,0.00;",
    "4724,0.00,0.00,0.00,0.00,-4.91,-8.50,0.00,0.00,0.00;",
    "4726,0.00,0.00,0.00,0.00,-4.91,-8.50,0.00,0.00,0.00;",
    "4737,0.00,0.00,0.00,0.00,-4.91,-8.50,0.00,0.00,0.00;",
);

/// Orientation series with `timestamp` stamped at the head.
pub(crate) fn orientation_series(timestamp: i64) -> String {
    format!("1;{timestamp};{ORIENTATION_TAIL}")
}

/// Motion series with `timestamp` stamped at the head.
pub(crate) fn motion_series(timestamp: i64) -> String {
    format!("1;{timestamp};{MOTION_TAIL}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn series_carry_the_timestamp_at_their_head() {
        let orientation = orientation_series(1700000000);
        assert!(orientation.starts_with("1;1700000000;0,0.00,-0.00,-0.00;"));

        let motion = motion_series(1700000000);
        assert!(motion.starts_with("1;1700000000;0,0.00,0.00,0.00,0.00,0.00,-9.81,0.00,0.00,0.00;"));
    }

    #[test]
    fn recorded_tails_are_independent_of_the_timestamp() {
        let first = orientation_series(1).strip_prefix("1;1;").unwrap().to_string();
        let second = orientation_series(2).strip_prefix("1;2;").unwrap().to_string();
        assert_eq!(first, second);
        assert!(first.ends_with(';'));
    }

    #[test]
    fn both_series_cover_the_same_sample_offsets() {
        let offsets = |series: &str| -> Vec<String> {
            series
                .split(';')
                .skip(2)
                .filter(|group| !group.is_empty())
                .map(|group| group.split(',').next().unwrap_or_default().to_string())
                .collect()
        };
        assert_eq!(
            offsets(&orientation_series(0)),
            offsets(&motion_series(0)),
        );
    }
}

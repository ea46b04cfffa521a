use std::cmp::Ordering;

use java_version::{JavaVersion, VersionError, compare_versions, parse_version};

#[test]
fn parse_then_render_reproduces_fields_for_non_zero_patch() {
    let identifiers = [None, Some("ea"), Some("rc1"), Some("b147")];

    for huge in [0, 1, 2] {
        for major in [0, 5, 8, 12] {
            for minor in [0, 1, 10] {
                for patch in [1, 5, 9, 10, 45, 100] {
                    for identifier in identifiers {
                        let built = JavaVersion::new(huge, major, minor, patch, identifier).unwrap();
                        let reparsed = JavaVersion::parse(&built.to_version_string()).unwrap();
                        assert_eq!(reparsed, built, "{built}");
                    }
                }
            }
        }
    }
}

#[test]
fn explicit_zero_patch_is_not_rendered() {
    let parsed = JavaVersion::parse("1.8.0_00").unwrap();

    assert_eq!(parsed.patch(), 0);
    assert_eq!(parsed.to_version_string(), "1.8.0");
    assert_eq!(parsed, JavaVersion::parse("1.8").unwrap());
}

#[test]
fn ordering_is_transitive_and_total_over_sample() {
    let samples: Vec<JavaVersion> = [
        "0.0", "0.0-ea", "1.5", "1.6.0_45", "1.6.0_45-b06", "1.7.0-ea", "1.7.0-rc", "1.7.0",
        "1.7.0_80", "1.8", "1.8.0_05", "1.8.0_25-ea", "1.8.0_25", "1.8.1", "2.0",
    ]
    .iter()
    .map(|s| JavaVersion::parse(s).unwrap())
    .collect();

    for a in &samples {
        for b in &samples {
            let forward = a.cmp(b);
            assert_eq!(forward.reverse(), b.cmp(a));
            assert_eq!(forward == Ordering::Equal, a == b);

            for c in &samples {
                if a < b && b < c {
                    assert!(a < c, "{a} < {b} < {c}");
                }
            }
        }
    }
}

#[test]
fn release_outranks_pre_release_with_same_numbers() {
    let release = JavaVersion::parse("1.8.0").unwrap();
    let early_access = JavaVersion::parse("1.8.0-ea").unwrap();

    assert_eq!(
        compare_versions(Some(&release), Some(&early_access)),
        Ok(Ordering::Greater)
    );
    assert_eq!(
        compare_versions(Some(&early_access), None),
        Err(VersionError::NullComparison)
    );
}

#[test]
fn missing_and_malformed_input_are_distinct_errors() {
    assert_eq!(parse_version(None), Err(VersionError::MissingInput));
    assert_eq!(
        parse_version(Some("garbage")),
        Err(VersionError::Malformed("garbage".to_string()))
    );
}

#[test]
fn min_value_is_below_every_release() {
    for raw in ["0.0", "0.0.0_01", "1.8", "1.8.0_25"] {
        assert!(JavaVersion::MIN_VALUE <= JavaVersion::parse(raw).unwrap());
    }
}

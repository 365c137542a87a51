//! Property tests for content fingerprints.

use proptest::prelude::*;

use docker_deploy::domain::value_objects::Fingerprint;

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Every fingerprint is 16 lowercase hex characters.
    #[test]
    fn property_fingerprint_shape(content in proptest::collection::vec(any::<u8>(), 0..4096)) {
        let fingerprint = Fingerprint::from_bytes(&content);
        prop_assert_eq!(fingerprint.as_str().len(), 16);
        prop_assert!(fingerprint
            .as_str()
            .chars()
            .all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c)));
    }

    /// PROPERTY: Streaming and in-memory hashing agree.
    #[test]
    fn property_reader_matches_bytes(content in proptest::collection::vec(any::<u8>(), 0..16384)) {
        let from_reader = Fingerprint::from_reader(content.as_slice()).unwrap();
        prop_assert_eq!(from_reader, Fingerprint::from_bytes(&content));
    }

    /// PROPERTY: Appending a byte changes the fingerprint.
    #[test]
    fn property_content_change_detected(
        content in proptest::collection::vec(any::<u8>(), 0..1024),
        extra in any::<u8>()
    ) {
        let mut changed = content.clone();
        changed.push(extra);
        prop_assert_ne!(Fingerprint::from_bytes(&content), Fingerprint::from_bytes(&changed));
    }
}

use proptest::prelude::*;
use rnta_fs::NormalizedPath;

proptest! {
    #[test]
    fn test_normalization_invariants(s in "\\PC*") {
        let path = NormalizedPath::new(&s);
        let as_str = path.as_str();

        prop_assert!(!as_str.contains('\\'));
        prop_assert!(!as_str.contains("//"));

        // Cleaning is idempotent
        let roundtripped = NormalizedPath::new(path.to_native());
        prop_assert_eq!(path, roundtripped);
    }

    #[test]
    fn test_join_then_relative_is_identity(segs in prop::collection::vec("[a-z]{1,8}", 1..5)) {
        let base = NormalizedPath::new("/root/base");
        let rel = segs.join("/");
        let joined = base.join(&rel);
        prop_assert_eq!(joined.relative_to(&base), rel);
    }
}

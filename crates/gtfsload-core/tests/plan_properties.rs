//! Property-based tests for archive naming and batch plan construction.
//!
//! Randomized feed names exercise the archive filter and both plan modes to
//! protect the CSV contract against refactors of the scanning logic.

use std::path::Path;

use proptest::{
    collection::vec,
    prelude::{prop_assert, prop_assert_eq, Strategy},
    proptest,
    string::string_regex,
    test_runner::{Config as ProptestConfig, FileFailurePersistence},
};

use gtfsload_core::plan::{is_feed_archive, BatchPlan, PlanMode};

const PLAN_PROP_CASES: u32 = 256;
const PLAN_PROP_MAX_SHRINK_ITERS: u32 = 1024;

fn archive_stem_strategy() -> impl Strategy<Value = String> {
    string_regex("[A-Za-z0-9_-]{1,24}").unwrap()
}

fn bucket_strategy() -> impl Strategy<Value = String> {
    string_regex("[a-z0-9][a-z0-9-]{2,31}").unwrap()
}

fn plan_proptest_config() -> ProptestConfig {
    ProptestConfig {
        cases: PLAN_PROP_CASES,
        max_shrink_iters: PLAN_PROP_MAX_SHRINK_ITERS,
        // Integration tests do not have a nearby lib.rs/main.rs, so set an
        // explicit persistence root for reproducible counterexamples.
        failure_persistence: Some(Box::new(FileFailurePersistence::WithSource(
            "plan-property-regressions",
        ))),
        ..ProptestConfig::default()
    }
}

proptest! {
    #![proptest_config(plan_proptest_config())]

    #[test]
    fn test_conventional_archive_names_accepted(stem in archive_stem_strategy()) {
        let name = format!("{stem}.zip");
        prop_assert!(is_feed_archive(&name), "rejected: {}", name);
    }

    #[test]
    fn test_missing_zip_suffix_rejected(stem in archive_stem_strategy()) {
        prop_assert!(!is_feed_archive(&stem), "accepted without suffix: {}", stem);
    }

    #[test]
    fn test_uppercase_extension_rejected(stem in archive_stem_strategy()) {
        let name = format!("{stem}.ZIP");
        prop_assert!(!is_feed_archive(&name), "accepted: {}", name);
    }

    #[test]
    fn test_space_in_stem_rejected(stem in archive_stem_strategy()) {
        let name = format!("{stem} copy.zip");
        prop_assert!(!is_feed_archive(&name), "accepted: {}", name);
    }

    #[test]
    fn test_fetch_rows_embed_bucket_and_name(
        bucket in bucket_strategy(),
        stem in archive_stem_strategy(),
    ) {
        let name = format!("{stem}.zip");
        let plan = BatchPlan::fetch(&bucket, std::slice::from_ref(&name));

        let row = &plan.entries()[0];
        prop_assert_eq!(row.mode, PlanMode::Fetch);
        prop_assert_eq!(&row.project, &stem);
        prop_assert_eq!(
            &row.location,
            &format!("https://{bucket}.s3.amazonaws.com/{name}")
        );
    }

    #[test]
    fn test_upload_rows_join_feeds_dir(stem in archive_stem_strategy()) {
        let name = format!("{stem}.zip");
        let plan = BatchPlan::upload(Path::new("fixtures/feeds"), std::slice::from_ref(&name));

        let row = &plan.entries()[0];
        prop_assert_eq!(row.mode, PlanMode::Upload);
        prop_assert_eq!(&row.project, &stem);
        prop_assert_eq!(&row.location, &format!("fixtures/feeds/{name}"));
    }

    #[test]
    fn test_plans_preserve_order_and_length(stems in vec(archive_stem_strategy(), 0..8)) {
        let names: Vec<String> = stems.iter().map(|stem| format!("{stem}.zip")).collect();
        let plan = BatchPlan::upload(Path::new("feeds"), &names);

        prop_assert_eq!(plan.len(), names.len());
        prop_assert_eq!(plan.is_empty(), names.is_empty());
        let projects: Vec<&str> = plan.entries().iter().map(|row| row.project.as_str()).collect();
        let expected: Vec<&str> = stems.iter().map(String::as_str).collect();
        prop_assert_eq!(projects, expected);
    }
}

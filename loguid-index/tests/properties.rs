//! Property tests over randomly generated listings.
//!
//! Log names are generated as `LOGUID/STEM` so every name maps back to the
//! loguid it was listed under.

use std::collections::BTreeSet;

use loguid_index::core::index::LogIndex;
use loguid_index::core::queries::{duplicates, only, shared};
use loguid_index::test_support::listing;
use proptest::prelude::*;

fn entries() -> impl Strategy<Value = Vec<(String, String)>> {
    prop::collection::vec(("[a-d]{1,2}", "[a-z]{1,3}\\.log"), 0..24).prop_map(|pairs| {
        pairs
            .into_iter()
            .map(|(loguid, stem)| {
                let log = format!("{loguid}/{stem}");
                (loguid, log)
            })
            .collect()
    })
}

fn parse(entries: &[(String, String)]) -> LogIndex {
    let pairs: Vec<(&str, &str)> = entries
        .iter()
        .map(|(loguid, log)| (loguid.as_str(), log.as_str()))
        .collect();
    LogIndex::parse(&listing(&pairs))
}

fn shared_ids(a: &LogIndex, b: &LogIndex) -> BTreeSet<String> {
    shared(a, b).into_iter().map(|row| row.loguid).collect()
}

fn only_ids(location: &LogIndex, other: &LogIndex) -> BTreeSet<String> {
    only(location, other)
        .into_iter()
        .filter_map(|log| log.split_once('/').map(|(loguid, _)| loguid.to_string()))
        .collect()
}

proptest! {
    #[test]
    fn parse_is_idempotent(local in entries()) {
        prop_assert_eq!(parse(&local), parse(&local));
    }

    #[test]
    fn every_listed_log_is_indexed(local in entries()) {
        let index = parse(&local);
        for (loguid, log) in &local {
            let logs = index.get(loguid).expect("loguid indexed");
            prop_assert!(logs.contains(log));
        }
        for (_, logs) in index.iter() {
            prop_assert!(!logs.is_empty());
            prop_assert!(logs.windows(2).all(|pair| pair[0] < pair[1]));
        }
    }

    #[test]
    fn shared_is_symmetric(local in entries(), nas in entries()) {
        let (local, nas) = (parse(&local), parse(&nas));
        prop_assert_eq!(shared_ids(&local, &nas), shared_ids(&nas, &local));
    }

    #[test]
    fn shared_and_only_partition_loguids(local in entries(), nas in entries()) {
        let (local, nas) = (parse(&local), parse(&nas));
        let both = shared_ids(&local, &nas);
        let only_local = only_ids(&local, &nas);
        let only_nas = only_ids(&nas, &local);

        let all: BTreeSet<&str> = local.loguids().chain(nas.loguids()).collect();
        for loguid in all {
            let hits = [&both, &only_local, &only_nas]
                .into_iter()
                .filter(|set| set.contains(loguid))
                .count();
            prop_assert_eq!(hits, 1, "loguid {} in {} result sets", loguid, hits);
        }
    }

    #[test]
    fn duplicates_have_two_or_more_logs(local in entries()) {
        let index = parse(&local);
        let found: BTreeSet<String> = duplicates(&index).into_iter().map(|dup| dup.loguid).collect();
        for (loguid, logs) in index.iter() {
            prop_assert_eq!(found.contains(loguid), logs.len() > 1);
        }
    }
}

//! Mock detection and include partitioning.

use std::collections::HashSet;

use runnergen_core::lang::conventions::is_mock_basename;
use runnergen_core::lang::framework::is_framework_include;

use crate::records::{IncludeRef, IncludeSet, MockRef};

/// Keep the include paths whose basename starts with `mock` (any case). Angle brackets are ignored.
pub fn find_mocks(include_paths: &[String]) -> Vec<String> {
    include_paths
        .iter()
        .filter(|path| {
            let basename = path.rsplit('/').next().unwrap_or(path);
            is_mock_basename(basename.trim_start_matches('<'))
        })
        .cloned()
        .collect()
}

/// Split discovered includes into plain testfile includes and mocks.
///
/// Framework self-includes land in neither list, and an include is never in both. Mocks are keyed by mock name and
/// plain includes by [`IncludeRef::identity`], so two directory spellings of one header keep only the first.
pub fn partition_includes(includes: &IncludeSet, framework: &str) -> (Vec<IncludeRef>, Vec<MockRef>) {
    let mut seen_plain = HashSet::new();
    let mut seen_mocks = HashSet::new();
    let mut plain = Vec::new();
    let mut mocks = Vec::new();

    for include in includes.refs() {
        if is_framework_include(&include.path, framework) {
            continue;
        }
        if include.is_mock() {
            let mock = MockRef(include);
            if seen_mocks.insert(mock.name()) {
                mocks.push(mock);
            }
        } else if seen_plain.insert(include.identity()) {
            plain.push(include);
        }
    }

    (plain, mocks)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::records::IncludeKind;
    use runnergen_core::lang::framework::DEFAULT_FRAMEWORK;

    fn set(local: &[&str], system: &[&str]) -> IncludeSet {
        IncludeSet {
            local: local.iter().map(|s| s.to_string()).collect(),
            system: system.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[test]
    fn test_find_mocks_by_basename() {
        let paths = vec![
            "mockFoo".to_string(),
            "sub/MockBar".to_string(),
            "mocks/baz".to_string(),
            "calc".to_string(),
        ];
        assert_eq!(find_mocks(&paths), vec!["mockFoo".to_string(), "sub/MockBar".to_string()]);
    }

    #[test]
    fn test_find_mocks_system_paths() {
        let paths = vec!["<mockClock.h>".to_string(), "<sys/mockTimer.h>".to_string(), "<stdint.h>".to_string()];
        assert_eq!(find_mocks(&paths), vec!["<mockClock.h>".to_string(), "<sys/mockTimer.h>".to_string()]);
    }

    #[test]
    fn test_partition_excludes_mocks_from_plain() {
        let (plain, mocks) = partition_includes(&set(&["calc", "mockFoo", "MOCK_bar"], &[]), DEFAULT_FRAMEWORK);
        assert_eq!(plain, vec![IncludeRef::local("calc")]);
        let names: Vec<String> = mocks.iter().map(MockRef::name).collect();
        assert_eq!(names, vec!["mockFoo", "MOCK_bar"]);
    }

    #[test]
    fn test_partition_drops_framework_includes() {
        let (plain, mocks) = partition_includes(&set(&["unity", "cmock", "unity_fixture", "calc"], &[]), DEFAULT_FRAMEWORK);
        assert_eq!(plain, vec![IncludeRef::local("calc")]);
        assert!(mocks.is_empty());
    }

    #[test]
    fn test_partition_deduplicates() {
        let (plain, mocks) = partition_includes(&set(&["calc", "mockFoo", "calc", "mockFoo"], &[]), DEFAULT_FRAMEWORK);
        assert_eq!(plain.len(), 1);
        assert_eq!(mocks.len(), 1);
    }

    #[test]
    fn test_partition_same_mock_in_two_directories_is_one_mock() {
        let (plain, mocks) =
            partition_includes(&set(&["drivers/mockUart", "mockUart", "calc"], &[]), DEFAULT_FRAMEWORK);
        assert_eq!(mocks, vec![MockRef(IncludeRef::local("drivers/mockUart"))]);
        assert_eq!(mocks[0].symbol(), "mockUart");
        assert_eq!(plain, vec![IncludeRef::local("calc")]);
    }

    #[test]
    fn test_partition_local_and_system_spelling_of_one_mock() {
        let (_, mocks) = partition_includes(&set(&["mockClock"], &["<mockClock.h>"]), DEFAULT_FRAMEWORK);
        assert_eq!(mocks.len(), 1);
        assert_eq!(mocks[0].include().kind, IncludeKind::Local);
    }

    #[test]
    fn test_partition_plain_includes_deduplicated_by_basename() {
        let (plain, _) = partition_includes(&set(&["calc", "lib/calc"], &[]), DEFAULT_FRAMEWORK);
        assert_eq!(plain, vec![IncludeRef::local("calc")]);
    }

    #[test]
    fn test_partition_system_mocks_with_and_without_directory() {
        let (plain, mocks) =
            partition_includes(&set(&[], &["<mockClock.h>", "<sys/mockTimer.h>"]), DEFAULT_FRAMEWORK);
        assert!(plain.is_empty());
        let names: Vec<String> = mocks.iter().map(MockRef::name).collect();
        assert_eq!(names, vec!["mockClock", "mockTimer"]);
    }

    #[test]
    fn test_partition_keeps_system_includes() {
        let (plain, _) = partition_includes(&set(&["calc"], &["<stdint.h>"]), DEFAULT_FRAMEWORK);
        assert_eq!(plain, vec![IncludeRef::local("calc"), IncludeRef::system("<stdint.h>")]);
    }
}

use mongodist::models::feature::{Feature, FeatureSet};
use mongodist::models::platform::{BitSize, OperatingSystem, PlatformDescriptor};
use mongodist::version::catalog::{self, RELEASES, Release};
use mongodist::version::resolver::resolve;
use mongodist::version::{Alias, FeatureAwareVersion, MongoVersion};
use std::str::FromStr;
use std::thread;

#[test]
fn test_every_release_resolves_by_its_own_path() {
    for record in RELEASES.iter() {
        let version = MongoVersion::from_str(record.download_path).unwrap();
        assert_eq!(version, MongoVersion::Release(record.key));
        assert_eq!(version.as_in_download_path(), record.download_path);
    }
}

#[test]
fn test_aliases_follow_promoted_release() {
    assert_eq!(Alias::Production.as_in_download_path(), "4.2.10");
    assert_eq!(Alias::Legacy.as_in_download_path(), "3.6.5");
    assert_eq!(Alias::V3_4.as_in_download_path(), "3.4.15");
    assert!(Alias::V3_4.enabled(Feature::NoSolarisSupport));
}

#[test]
fn test_features_grow_per_release_not_per_rule() {
    // 64 bit only arrives with 3.4 and stays explicit on every later release
    let only_64: Vec<Release> = Release::all()
        .filter(|release| release.enabled(Feature::Only64Bit))
        .collect();
    assert_eq!(only_64.first(), Some(&Release::V3_4_3));
    assert!(only_64.contains(&Release::LatestNightly));

    // Text search was only a switch during 2.4 and 2.5
    assert!(Release::V2_5_4.enabled(Feature::TextSearch));
    assert!(!Release::V2_6_0.enabled(Feature::TextSearch));
}

#[test]
fn test_testable_versions_have_windows_64_builds() {
    let windows = PlatformDescriptor::new(OperatingSystem::Windows, BitSize::B64);
    for release in catalog::testable_versions("1.0").unwrap() {
        assert!(resolve(&release, windows).has_published_build());
    }
}

#[test]
fn test_snapshot_mutation_is_isolated() {
    let mut snapshot = Alias::Production.features();
    snapshot.insert(Feature::TextSearch);

    assert!(!Alias::Production.enabled(Feature::TextSearch));
    assert_ne!(snapshot, Release::V4_2_10.features());
}

#[test]
fn test_concurrent_reads() {
    let handles: Vec<_> = (0..8)
        .map(|_| {
            thread::spawn(|| {
                let platform = PlatformDescriptor::new(OperatingSystem::Linux, BitSize::B64);
                Release::all()
                    .map(|release| resolve(&release, platform).features)
                    .fold(FeatureSet::empty(), FeatureSet::union)
            })
        })
        .collect();

    let expected = FeatureSet::of(&Feature::ALL);
    for handle in handles {
        assert_eq!(handle.join().unwrap(), expected);
    }
}

use genesis_core::kit::KitRef;
use genesis_prereqs::version::Version;

#[test]
fn test_parse_name_only() {
    let kit: KitRef = "shield".parse().unwrap();
    assert_eq!(kit.name, "shield");
    assert_eq!(kit.version, None);
    assert_eq!(kit.to_string(), "shield");
}

#[test]
fn test_parse_name_and_version() {
    let kit: KitRef = "shield/6.3.0".parse().unwrap();
    assert_eq!(kit.name, "shield");
    assert_eq!(kit.version, Some(Version::new(6, 3, 0, 0)));
    assert_eq!(kit.to_string(), "shield/6.3.0");
}

#[test]
fn test_trailing_slash_means_no_version() {
    let kit: KitRef = "shield/".parse().unwrap();
    assert_eq!(kit.version, None);
}

#[test]
fn test_missing_name_is_usage_error() {
    let err = "/6.3.0".parse::<KitRef>().unwrap_err();
    assert_eq!(err.exit_code(), 3);
    assert!("".parse::<KitRef>().is_err());
}

#[test]
fn test_bad_version_is_usage_error() {
    let err = "shield/latest".parse::<KitRef>().unwrap_err();
    assert_eq!(err.exit_code(), 3);
    assert!(err.to_string().contains("latest"));
}

#[test]
fn test_archive_paths() {
    assert!(KitRef::is_archive_path("shield-6.3.0.tar.gz"));
    assert!(KitRef::is_archive_path("./kits/shield.tgz"));
    assert!(!KitRef::is_archive_path("shield/6.3.0"));
}

use std::fs;
use std::path::Path;

use pretty_assertions::assert_eq;
use tempfile::TempDir;

use ffprofile::error::AppError;
use ffprofile::registry::{ProfileRegistry, REGISTRY_FILE};

const SEEDED_INI: &str = "\
[Install4F96D1932A9F858E]
Default=main.default-release
Locked=1

[Profile0]
Name=default-release
IsRelative=1
Path=main.default-release
Default=1

[Profile2]
Name=work
IsRelative=1
Path=abcd0000abcd0000.work
ZoomLevel=110

[General]
StartWithLastProfile=1
Version=2

";

fn seeded() -> (TempDir, ProfileRegistry) {
    let dir = TempDir::new().expect("tempdir");
    fs::write(dir.path().join(REGISTRY_FILE), SEEDED_INI).expect("write ini");
    fs::create_dir(dir.path().join("main.default-release")).expect("default dir");
    fs::create_dir(dir.path().join("abcd0000abcd0000.work")).expect("work dir");
    let registry = ProfileRegistry::new(dir.path());
    (dir, registry)
}

fn registry_bytes(root: &Path) -> Vec<u8> {
    fs::read(root.join(REGISTRY_FILE)).expect("read ini")
}

fn names(registry: &ProfileRegistry) -> Vec<String> {
    registry
        .list()
        .expect("list")
        .profiles
        .into_iter()
        .map(|record| record.name)
        .collect()
}

#[test]
fn missing_registry_lists_nothing() {
    let dir = TempDir::new().expect("tempdir");
    let listing = ProfileRegistry::new(dir.path()).list().expect("list");

    assert!(!listing.registry_found);
    assert!(listing.profiles.is_empty());
}

#[test]
fn lists_profiles_sorted_by_name() {
    let (dir, registry) = seeded();
    fs::write(
        dir.path().join(REGISTRY_FILE),
        format!("{SEEDED_INI}[Profile5]\nName=alpha\nIsRelative=1\nPath=x.alpha\n"),
    )
    .expect("append profile");

    assert_eq!(names(&registry), ["alpha", "default-release", "work"]);

    let listing = registry.list().expect("list");
    let default = &listing.profiles[1];
    assert!(default.is_default);
    assert_eq!(default.display_path, "main.default-release");
    assert_ne!(default.created_at, "Unknown");
}

#[test]
fn missing_directory_degrades_to_raw_path() {
    let (dir, registry) = seeded();
    fs::remove_dir(dir.path().join("abcd0000abcd0000.work")).expect("remove dir");

    let listing = registry.list().expect("list must not fail");
    let work = listing
        .profiles
        .iter()
        .find(|record| record.name == "work")
        .expect("work listed");
    assert_eq!(work.display_path, "abcd0000abcd0000.work");
    assert_eq!(work.created_at, "Unknown");
}

#[test]
fn absolute_paths_are_not_joined_to_root() {
    let dir = TempDir::new().expect("tempdir");
    let elsewhere = TempDir::new().expect("tempdir");
    fs::write(
        dir.path().join(REGISTRY_FILE),
        format!(
            "[Profile0]\nName=portable\nIsRelative=0\nPath={}\n",
            elsewhere.path().display()
        ),
    )
    .expect("write ini");

    let listing = ProfileRegistry::new(dir.path()).list().expect("list");
    assert_eq!(listing.profiles[0].location, elsewhere.path());
    assert!(!listing.profiles[0].is_relative);
}

#[test]
fn create_seeds_directory_and_registers_it() {
    let (dir, registry) = seeded();
    let record = registry.create("Side Project").expect("create");

    assert_eq!(record.section, "Profile3");
    assert!(record.path.ends_with(".side-project"));
    assert!(record.is_relative);
    assert!(!record.is_default);
    assert_eq!(record.location, dir.path().join(&record.path));

    let mut files = fs::read_dir(&record.location)
        .expect("read profile dir")
        .map(|entry| entry.expect("entry").file_name().to_string_lossy().to_string())
        .collect::<Vec<_>>();
    files.sort();
    assert_eq!(files, ["prefs.js", "times.json", "user.js"]);

    let prefs = fs::read_to_string(record.location.join("prefs.js")).expect("prefs");
    assert_eq!(prefs.matches("user_pref(\"browser.startup.").count(), 2);
    assert_eq!(
        fs::read_to_string(record.location.join("user.js")).expect("user.js"),
        ""
    );

    let times: serde_json::Value = serde_json::from_str(
        &fs::read_to_string(record.location.join("times.json")).expect("times"),
    )
    .expect("times json");
    let created = times["created"].as_i64().expect("created");
    assert_eq!(times["reset"].as_i64(), Some(created));
    assert!(created > 1_600_000_000_000_000, "expected microseconds");

    let ini = String::from_utf8(registry_bytes(dir.path())).expect("utf8");
    assert!(ini.contains(&format!(
        "[Profile3]\nName=Side Project\nIsRelative=1\nPath={}\n",
        record.path
    )));
    assert!(names(&registry).contains(&"Side Project".to_string()));
}

#[test]
fn create_without_registry_starts_at_profile0() {
    let dir = TempDir::new().expect("tempdir");
    let root = dir.path().join("firefox");
    let registry = ProfileRegistry::new(&root);

    let record = registry.create("first").expect("create");
    assert_eq!(record.section, "Profile0");
    assert!(root.join(REGISTRY_FILE).exists());
    assert_eq!(names(&registry), ["first"]);
}

#[test]
fn invalid_names_change_nothing() {
    let (dir, registry) = seeded();
    let before = registry_bytes(dir.path());
    let entries_before = fs::read_dir(dir.path()).expect("read root").count();

    for bad in ["", "work!", "a/b", "dots.are.bad", "-_ -"] {
        assert!(matches!(
            registry.create(bad),
            Err(AppError::InvalidInput(_))
        ));
    }
    assert!(matches!(
        registry.rename("work", "no way?"),
        Err(AppError::InvalidInput(_))
    ));

    assert_eq!(registry_bytes(dir.path()), before);
    assert_eq!(
        fs::read_dir(dir.path()).expect("read root").count(),
        entries_before
    );
}

#[test]
fn rename_updates_name_only() {
    let (dir, registry) = seeded();
    let record = registry.rename("work", "Office").expect("rename");

    assert_eq!(record.name, "Office");
    assert_eq!(record.path, "abcd0000abcd0000.work");
    assert!(dir.path().join("abcd0000abcd0000.work").is_dir());

    let listed = names(&registry);
    assert!(listed.contains(&"Office".to_string()));
    assert!(!listed.contains(&"work".to_string()));

    let ini = String::from_utf8(registry_bytes(dir.path())).expect("utf8");
    assert!(ini.contains("ZoomLevel=110"));
    assert!(ini.contains("[Install4F96D1932A9F858E]\nDefault=main.default-release\nLocked=1\n"));
}

#[test]
fn rename_to_same_or_empty_is_refused() {
    let (dir, registry) = seeded();
    let before = registry_bytes(dir.path());

    assert!(matches!(
        registry.rename("work", "work"),
        Err(AppError::Guarded(_))
    ));
    assert!(matches!(registry.rename("work", ""), Err(AppError::Guarded(_))));
    assert_eq!(registry_bytes(dir.path()), before);
}

#[test]
fn rename_unknown_profile_is_not_found() {
    let (_dir, registry) = seeded();
    assert!(matches!(
        registry.rename("ghost", "spirit"),
        Err(AppError::NotFound(_))
    ));
}

#[test]
fn default_profile_is_protected() {
    let (dir, registry) = seeded();
    let before = registry_bytes(dir.path());

    assert!(matches!(
        registry.rename("default-release", "renamed"),
        Err(AppError::Guarded(_))
    ));
    assert!(matches!(
        registry.delete("default-release", true),
        Err(AppError::Guarded(_))
    ));

    assert_eq!(registry_bytes(dir.path()), before);
    assert!(dir.path().join("main.default-release").is_dir());
}

#[test]
fn unconfirmed_delete_changes_nothing() {
    let (dir, registry) = seeded();
    let before = registry_bytes(dir.path());

    assert!(matches!(
        registry.delete("work", false),
        Err(AppError::Guarded(_))
    ));
    assert_eq!(registry_bytes(dir.path()), before);
    assert!(dir.path().join("abcd0000abcd0000.work").is_dir());
}

#[test]
fn delete_removes_entry_and_directory() {
    let (dir, registry) = seeded();
    let work_dir = dir.path().join("abcd0000abcd0000.work");
    fs::write(work_dir.join("places.sqlite"), b"data").expect("profile data");

    let record = registry.delete("work", true).expect("delete");
    assert_eq!(record.section, "Profile2");
    assert!(!work_dir.exists());
    assert_eq!(names(&registry), ["default-release"]);

    let ini = String::from_utf8(registry_bytes(dir.path())).expect("utf8");
    assert!(!ini.contains("[Profile2]"));
    assert!(ini.contains("[General]\nStartWithLastProfile=1\nVersion=2\n"));
}

#[test]
fn delete_tolerates_missing_directory() {
    let (dir, registry) = seeded();
    fs::remove_dir(dir.path().join("abcd0000abcd0000.work")).expect("remove dir");

    registry.delete("work", true).expect("delete");
    assert_eq!(names(&registry), ["default-release"]);
}

#[test]
fn duplicate_names_act_on_first_section() {
    let dir = TempDir::new().expect("tempdir");
    fs::write(
        dir.path().join(REGISTRY_FILE),
        "[Profile0]\nName=twin\nPath=one\n\n[Profile1]\nName=twin\nPath=two\n\n",
    )
    .expect("write ini");
    let registry = ProfileRegistry::new(dir.path());

    assert_eq!(registry.find("twin").expect("find").section, "Profile0");

    let renamed = registry.rename("twin", "first").expect("rename");
    assert_eq!(renamed.section, "Profile0");

    let deleted = registry.delete("twin", true).expect("delete");
    assert_eq!(deleted.section, "Profile1");
    assert_eq!(names(&registry), ["first"]);
}

#[test]
fn gap_in_numbering_allocates_past_max() {
    let (_dir, registry) = seeded();
    assert_eq!(registry.create("next").expect("create").section, "Profile3");
    assert_eq!(registry.create("after").expect("create").section, "Profile4");
}

#[test]
fn create_after_rewrite_preserves_foreign_sections() {
    let (dir, registry) = seeded();
    registry.create("extra").expect("create");

    let ini = String::from_utf8(registry_bytes(dir.path())).expect("utf8");
    assert!(ini.starts_with(
        "[Install4F96D1932A9F858E]\nDefault=main.default-release\nLocked=1\n\n[Profile0]\n"
    ));
    assert!(ini.contains("ZoomLevel=110"));
    assert!(!dir.path().join("profiles.ini.tmp").exists());
}

#[test]
fn malformed_registry_is_reported() {
    let dir = TempDir::new().expect("tempdir");
    fs::write(dir.path().join(REGISTRY_FILE), "Name=stray\n").expect("write ini");

    assert!(matches!(
        ProfileRegistry::new(dir.path()).list(),
        Err(AppError::Registry(_))
    ));
}

#[test]
fn names_with_outer_spaces_are_rejected() {
    let (dir, registry) = seeded();
    let before = registry_bytes(dir.path());

    for bad in ["work ", " padded", " both "] {
        assert!(matches!(
            registry.create(bad),
            Err(AppError::InvalidInput(_))
        ));
    }
    assert!(matches!(
        registry.rename("work", "office "),
        Err(AppError::InvalidInput(_))
    ));
    assert_eq!(registry_bytes(dir.path()), before);
}

#[test]
fn created_name_lists_back_verbatim() {
    let (_dir, registry) = seeded();
    let record = registry.create("Inner  Spaces").expect("create");

    assert!(names(&registry).contains(&record.name));
    assert_eq!(registry.find("Inner  Spaces").expect("find").path, record.path);
}

#[test]
fn delete_refuses_paths_that_reach_the_root() {
    let dir = TempDir::new().expect("tempdir");
    let root = dir.path().join("firefox");
    fs::create_dir_all(root.join("other.keepme")).expect("other dir");
    let ini = format!(
        "[Profile0]\nName=empty\nPath=\n\n\
         [Profile1]\nName=dot\nIsRelative=1\nPath=.\n\n\
         [Profile2]\nName=parent\nIsRelative=1\nPath=..\n\n\
         [Profile3]\nName=absolute\nIsRelative=0\nPath={}\n\n\
         [Profile4]\nName=keep\nIsRelative=1\nPath=other.keepme\n\n",
        dir.path().display()
    );
    fs::write(root.join(REGISTRY_FILE), &ini).expect("write ini");
    let registry = ProfileRegistry::new(&root);

    for name in ["empty", "dot", "parent", "absolute"] {
        assert!(
            matches!(registry.delete(name, true), Err(AppError::Registry(_))),
            "{name} should be refused"
        );
    }

    assert_eq!(fs::read_to_string(root.join(REGISTRY_FILE)).expect("ini"), ini);
    assert!(root.join("other.keepme").is_dir());
}

#[test]
fn launchable_requires_existing_directory() {
    let (dir, registry) = seeded();
    assert!(registry.find_launchable("work").is_ok());

    fs::remove_dir(dir.path().join("abcd0000abcd0000.work")).expect("remove dir");
    assert!(matches!(
        registry.find_launchable("work"),
        Err(AppError::NotFound(_))
    ));
}

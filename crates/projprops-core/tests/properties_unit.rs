use projprops_core::properties::{
    comment_for, find_project_dir, ProjectProperties, PROPERTIES_FILE, PROPERTY_SDK, PROPERTY_TARGET,
};
use std::fs;
use tempfile::TempDir;

const HEADER: &str = "# This file is automatically generated by Android Tools.\n\
# Do not modify this file -- YOUR CHANGES WILL BE ERASED!\n\
# For customized properties when using Ant, set new values\n\
# in a \"build.properties\" file.\n\n";

#[test]
fn load_missing_directory_returns_none() {
    let tmp = TempDir::new().unwrap();
    assert!(ProjectProperties::load(tmp.path().join("does-not-exist")).is_none());
}

#[test]
fn load_path_to_file_returns_none() {
    let tmp = TempDir::new().unwrap();
    let file = tmp.path().join(PROPERTIES_FILE);
    fs::write(&file, "target=android-10\n").unwrap();
    assert!(ProjectProperties::load(&file).is_none());
}

#[test]
fn load_directory_without_property_file_returns_none() {
    let tmp = TempDir::new().unwrap();
    assert!(ProjectProperties::load(tmp.path()).is_none());
}

#[test]
fn load_malformed_file_returns_none() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join(PROPERTIES_FILE), "target android-10\n").unwrap();
    assert!(ProjectProperties::load(tmp.path()).is_none());
}

#[test]
fn load_does_not_modify_file() {
    let tmp = TempDir::new().unwrap();
    let file = tmp.path().join(PROPERTIES_FILE);
    let original = "# hand written\nfoo=bar\n";
    fs::write(&file, original).unwrap();

    let mut props = ProjectProperties::load(tmp.path()).unwrap();
    props.set_property("foo", "baz");

    assert_eq!(fs::read_to_string(&file).unwrap(), original);
}

#[test]
fn load_reads_all_pairs() {
    let tmp = TempDir::new().unwrap();
    fs::write(
        tmp.path().join(PROPERTIES_FILE),
        "target=android-10\nsdk-folder=/opt/sdk\nfoo=bar\n",
    )
    .unwrap();

    let props = ProjectProperties::load(tmp.path()).unwrap();
    assert_eq!(props.get_property(PROPERTY_TARGET), Some("android-10"));
    assert_eq!(props.get_property(PROPERTY_SDK), Some("/opt/sdk"));
    assert_eq!(props.get_property("foo"), Some("bar"));
    assert_eq!(props.get_property("unset"), None);
    assert_eq!(props.len(), 3);
    assert_eq!(props.location(), tmp.path());
}

#[test]
fn create_is_empty_and_touches_nothing() {
    let tmp = TempDir::new().unwrap();
    let props = ProjectProperties::create(tmp.path());
    assert!(props.is_empty());
    assert_eq!(props.get_property(PROPERTY_TARGET), None);
    assert_eq!(props.get_property(""), None);
    assert!(!tmp.path().join(PROPERTIES_FILE).exists());
}

#[test]
fn create_accepts_nonexistent_path() {
    let props = ProjectProperties::create("/nonexistent/project");
    assert_eq!(props.path(), std::path::Path::new("/nonexistent/project/default.properties"));
}

#[test]
fn set_property_last_write_wins() {
    let mut props = ProjectProperties::create("proj");
    props.set_property("target", "android-8");
    props.set_property("target", "android-10");
    assert_eq!(props.get_property("target"), Some("android-10"));
    assert_eq!(props.len(), 1);
}

#[test]
fn set_property_accepts_empty_strings() {
    let mut props = ProjectProperties::create("proj");
    props.set_property("", "");
    assert_eq!(props.get_property(""), Some(""));
}

#[test]
fn remove_property_returns_old_value() {
    let mut props = ProjectProperties::create("proj");
    props.set_property("foo", "bar");
    assert_eq!(props.remove_property("foo"), Some("bar".to_string()));
    assert_eq!(props.remove_property("foo"), None);
    assert!(props.is_empty());
}

#[test]
fn comment_table() {
    assert_eq!(comment_for("target"), Some("# Project target."));
    assert_eq!(
        comment_for("sdk-folder"),
        Some("# location of the SDK. Only used by Ant.")
    );
    assert_eq!(comment_for("foo"), None);
}

#[test]
fn save_empty_store_writes_only_header() {
    let tmp = TempDir::new().unwrap();
    ProjectProperties::create(tmp.path()).save().unwrap();
    let content = fs::read_to_string(tmp.path().join(PROPERTIES_FILE)).unwrap();
    assert_eq!(content, HEADER);
}

#[test]
fn save_target_is_preceded_by_comment() {
    let tmp = TempDir::new().unwrap();
    let mut props = ProjectProperties::create(tmp.path());
    props.set_property("target", "android-10");
    props.save().unwrap();

    let content = fs::read_to_string(tmp.path().join(PROPERTIES_FILE)).unwrap();
    assert!(content.contains("# Project target.\ntarget=android-10\n"));
}

#[test]
fn save_unknown_key_has_no_comment() {
    let tmp = TempDir::new().unwrap();
    let mut props = ProjectProperties::create(tmp.path());
    props.set_property("foo", "bar");
    props.save().unwrap();

    let content = fs::read_to_string(tmp.path().join(PROPERTIES_FILE)).unwrap();
    assert_eq!(content, format!("{HEADER}foo=bar\n"));
}

#[test]
fn save_writes_entries_in_key_order() {
    let mut props = ProjectProperties::create("proj");
    props.set_property("target", "android-10");
    props.set_property("apk.name", "demo");
    props.set_property("sdk-folder", "/opt/sdk");

    let expected = format!(
        "{HEADER}apk.name=demo\n\
         # location of the SDK. Only used by Ant.\n\
         sdk-folder=/opt/sdk\n\
         # Project target.\n\
         target=android-10\n"
    );
    assert_eq!(props.render(), expected);
}

#[test]
fn save_overwrites_previous_content() {
    let tmp = TempDir::new().unwrap();
    fs::write(
        tmp.path().join(PROPERTIES_FILE),
        "target=android-8\nstale=value\n",
    )
    .unwrap();

    let mut props = ProjectProperties::load(tmp.path()).unwrap();
    props.remove_property("stale");
    props.set_property("target", "android-10");
    props.save().unwrap();

    let reloaded = ProjectProperties::load(tmp.path()).unwrap();
    assert_eq!(reloaded.get_property("stale"), None);
    assert_eq!(reloaded.get_property("target"), Some("android-10"));
}

#[test]
fn save_into_missing_directory_fails() {
    let tmp = TempDir::new().unwrap();
    let props = ProjectProperties::create(tmp.path().join("missing"));
    assert!(props.save().is_err());
}

#[test]
fn save_then_load_round_trips() {
    let tmp = TempDir::new().unwrap();
    let mut props = ProjectProperties::create(tmp.path());
    props.set_property("target", "Google Inc.:Google APIs:8");
    props.set_property("sdk-folder", "/opt/android sdk");
    props.set_property("key.store", "release.keystore");
    props.set_property("empty", "");
    props.save().unwrap();

    let loaded = ProjectProperties::load(tmp.path()).unwrap();
    assert_eq!(loaded, props);
}

#[test]
fn render_matches_saved_bytes() {
    let tmp = TempDir::new().unwrap();
    let mut props = ProjectProperties::create(tmp.path());
    props.set_property("target", "android-10");
    props.save().unwrap();

    let content = fs::read_to_string(props.path()).unwrap();
    assert_eq!(content, props.render());
}

#[test]
fn find_project_dir_walks_up() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join(PROPERTIES_FILE), "").unwrap();
    let nested = tmp.path().join("src").join("com").join("example");
    fs::create_dir_all(&nested).unwrap();

    assert_eq!(find_project_dir(&nested), Some(tmp.path().to_path_buf()));
    assert_eq!(find_project_dir(tmp.path()), Some(tmp.path().to_path_buf()));
}

#[test]
fn find_project_dir_ignores_directory_named_like_the_file() {
    let tmp = TempDir::new().unwrap();
    let project = tmp.path().join("project");
    fs::create_dir_all(project.join(PROPERTIES_FILE)).unwrap();
    fs::write(tmp.path().join(PROPERTIES_FILE), "").unwrap();

    assert_eq!(find_project_dir(&project), Some(tmp.path().to_path_buf()));
}

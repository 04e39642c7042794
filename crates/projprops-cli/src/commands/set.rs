use std::path::Path;

use miette::Result;

use projprops_core::properties::ProjectProperties;
use projprops_util::progress::{status, status_warn};
use projprops_util::props::is_valid_key;

pub fn exec(project_dir: &Path, key: &str, value: &str) -> Result<()> {
    if !is_valid_key(key) {
        status_warn(
            "Warning",
            &format!("'{key}' will not load back; use letters, digits, '.', '_' or '-'"),
        );
    }
    if value.contains(['\n', '\r']) {
        status_warn("Warning", "line breaks in the value will corrupt the file");
    }

    // An existing file that fails to parse must not be replaced by an empty store.
    let mut props = if ProjectProperties::create(project_dir).path().exists() {
        super::load_existing(project_dir)?
    } else {
        ProjectProperties::create(project_dir)
    };
    let previous = props.get_property(key).map(str::to_string);
    props.set_property(key, value);
    props.save()?;

    match previous {
        Some(old) if old == value => status("Unchanged", &format!("{key}={value}")),
        Some(old) => status("Updated", &format!("{key}: {old} -> {value}")),
        None => status("Added", &format!("{key}={value}")),
    }
    Ok(())
}

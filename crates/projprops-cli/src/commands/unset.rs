use std::path::Path;

use miette::Result;

use projprops_util::progress::{status, status_warn};

pub fn exec(project_dir: &Path, key: &str) -> Result<()> {
    let mut props = super::load_existing(project_dir)?;
    if props.remove_property(key).is_none() {
        status_warn("Skipped", &format!("'{key}' is not set"));
        return Ok(());
    }
    props.save()?;
    status("Removed", key);
    Ok(())
}

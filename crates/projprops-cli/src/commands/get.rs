use std::path::Path;

use miette::Result;

use projprops_util::errors::PropsError;

pub fn exec(project_dir: &Path, key: &str) -> Result<()> {
    let props = super::load_existing(project_dir)?;
    let value = props.get_property(key).ok_or_else(|| PropsError::Generic {
        message: format!("Property '{key}' is not set"),
    })?;
    println!("{value}");
    Ok(())
}

use std::path::Path;

use miette::Result;

use projprops_core::properties::PROPERTY_SDK;

/// Keys whose values are local filesystem paths.
const PATH_KEYS: &[&str] = &[PROPERTY_SDK];

pub fn exec(project_dir: &Path, reveal: bool) -> Result<()> {
    let props = super::load_existing(project_dir)?;
    let mask = super::global_config().display.mask_paths && !reveal;

    if props.is_empty() {
        println!("No properties set.");
        println!("  {}", props.path().display());
        return Ok(());
    }

    println!("{} ({} entries):", props.path().display(), props.len());
    for (key, value) in props.iter() {
        let display_value = if mask && PATH_KEYS.contains(&key) {
            "********"
        } else {
            value
        };
        println!("  {key} = {display_value}");
    }
    Ok(())
}

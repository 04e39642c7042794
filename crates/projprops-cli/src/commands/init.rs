use std::path::Path;

use miette::Result;

use projprops_core::properties::{ProjectProperties, PROPERTY_SDK, PROPERTY_TARGET};
use projprops_util::errors::PropsError;
use projprops_util::progress::status;

pub fn exec(
    project_dir: &Path,
    target: Option<&str>,
    sdk: Option<&str>,
    force: bool,
) -> Result<()> {
    if !project_dir.is_dir() {
        return Err(PropsError::Project {
            message: format!("{} is not a directory", project_dir.display()),
        }
        .into());
    }

    let mut props = ProjectProperties::create(project_dir);
    if props.path().exists() && !force {
        return Err(PropsError::Project {
            message: format!(
                "{} already exists (use --force to overwrite)",
                props.path().display()
            ),
        }
        .into());
    }

    for (key, value) in super::global_config().defaults {
        props.set_property(key, value);
    }
    if let Some(target) = target {
        props.set_property(PROPERTY_TARGET, target);
    }
    if let Some(sdk) = sdk {
        props.set_property(PROPERTY_SDK, sdk);
    }

    props.save()?;
    status("Created", &props.path().display().to_string());
    Ok(())
}

//! Command dispatch and handler modules.

mod get;
mod init;
mod list;
mod set;
mod show;
mod unset;

use std::path::{Path, PathBuf};

use miette::Result;

use projprops_core::config::GlobalConfig;
use projprops_core::properties::{find_project_dir, ProjectProperties, PROPERTIES_FILE};
use projprops_util::errors::{PropsError, PropsResult};

use crate::cli::{Cli, Command};

/// Route a parsed CLI invocation to the appropriate command handler.
pub fn dispatch(cli: Cli) -> Result<()> {
    let project_dir = project_dir(cli.dir.as_deref())?;
    match cli.command {
        Command::Init { target, sdk, force } => {
            init::exec(&project_dir, target.as_deref(), sdk.as_deref(), force)
        }
        Command::Get { key } => get::exec(&project_dir, &key),
        Command::Set { key, value } => set::exec(&project_dir, &key, &value),
        Command::Unset { key } => unset::exec(&project_dir, &key),
        Command::List { reveal } => list::exec(&project_dir, reveal),
        Command::Show => show::exec(&project_dir),
    }
}

/// The explicit `--dir`, else the nearest ancestor of the cwd holding a
/// property file, else the cwd itself.
fn project_dir(dir: Option<&Path>) -> PropsResult<PathBuf> {
    if let Some(dir) = dir {
        return Ok(dir.to_path_buf());
    }
    let cwd = std::env::current_dir().map_err(PropsError::Io)?;
    Ok(find_project_dir(&cwd).unwrap_or(cwd))
}

/// Load the project's properties, failing if there is no usable file.
fn load_existing(project_dir: &Path) -> PropsResult<ProjectProperties> {
    ProjectProperties::load(project_dir).ok_or_else(|| {
        PropsError::Project {
            message: format!(
                "No readable {PROPERTIES_FILE} in {}",
                project_dir.display()
            ),
        }
        .into()
    })
}

fn global_config() -> GlobalConfig {
    GlobalConfig::load().unwrap_or_else(|e| {
        tracing::warn!("Failed to load global config, using defaults: {e}");
        GlobalConfig::default()
    })
}

//! Project properties persisted in `default.properties`.
//!
//! The file is owned by the tooling: every [`ProjectProperties::save`]
//! rewrites it from scratch with a fixed header, so hand edits are lost.

use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use projprops_util::errors::PropsError;
use projprops_util::props::parse_property_file;

/// Property holding the project's build target.
pub const PROPERTY_TARGET: &str = "target";
/// Property holding the SDK location.
pub const PROPERTY_SDK: &str = "sdk-folder";

/// Name of the property file inside a project directory.
pub const PROPERTIES_FILE: &str = "default.properties";

const PROP_HEADER: &str = "# This file is automatically generated by Android Tools.\n\
                           # Do not modify this file -- YOUR CHANGES WILL BE ERASED!\n\
                           # For customized properties when using Ant, set new values\n\
                           # in a \"build.properties\" file.\n\n";

static COMMENTS: &[(&str, &str)] = &[
    (PROPERTY_TARGET, "# Project target."),
    (PROPERTY_SDK, "# location of the SDK. Only used by Ant."),
];

/// Returns the comment line written above `key`, if it is a well-known key.
pub fn comment_for(key: &str) -> Option<&'static str> {
    COMMENTS
        .iter()
        .find(|(name, _)| *name == key)
        .map(|(_, comment)| *comment)
}

/// Walk up from `start` to the nearest directory holding a property file.
pub fn find_project_dir(start: &Path) -> Option<PathBuf> {
    start
        .ancestors()
        .find(|dir| dir.join(PROPERTIES_FILE).is_file())
        .map(Path::to_path_buf)
}

/// Build properties of a single project directory.
///
/// Obtain one with [`ProjectProperties::load`] or [`ProjectProperties::create`].
/// Changes stay in memory until [`ProjectProperties::save`] is called.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectProperties {
    location: PathBuf,
    properties: BTreeMap<String, String>,
}

impl ProjectProperties {
    /// Loads `default.properties` from the project directory `dir`.
    ///
    /// Returns `None` if `dir` is not a directory, has no property file, or
    /// the file cannot be parsed. The filesystem is never modified.
    pub fn load(dir: impl AsRef<Path>) -> Option<Self> {
        let dir = dir.as_ref();
        if !dir.is_dir() {
            tracing::debug!("{} is not a directory", dir.display());
            return None;
        }
        let file = dir.join(PROPERTIES_FILE);
        if !file.is_file() {
            tracing::debug!("No {PROPERTIES_FILE} in {}", dir.display());
            return None;
        }
        let properties = parse_property_file(&file)?;
        tracing::debug!(
            "Loaded {} properties from {}",
            properties.len(),
            file.display()
        );
        Some(Self {
            location: dir.to_path_buf(),
            properties,
        })
    }

    /// Creates an empty store for `dir`. Nothing is written until [`save`](Self::save).
    pub fn create(dir: impl AsRef<Path>) -> Self {
        Self {
            location: dir.as_ref().to_path_buf(),
            properties: BTreeMap::new(),
        }
    }

    /// Sets a property, replacing any previous value.
    pub fn set_property(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.properties.insert(name.into(), value.into());
    }

    /// Returns the value of a property, or `None` if it is not set.
    pub fn get_property(&self, name: &str) -> Option<&str> {
        self.properties.get(name).map(String::as_str)
    }

    /// Removes a property from memory, returning its previous value.
    pub fn remove_property(&mut self, name: &str) -> Option<String> {
        self.properties.remove(name)
    }

    /// The project directory this store belongs to.
    pub fn location(&self) -> &Path {
        &self.location
    }

    /// Full path of the property file.
    pub fn path(&self) -> PathBuf {
        self.location.join(PROPERTIES_FILE)
    }

    /// Iterate over properties in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.properties
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.properties.len()
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    /// Writes the property file, replacing whatever was there.
    ///
    /// Properties that are on disk but no longer in memory are dropped.
    /// The write is not atomic: on failure the file may be left truncated.
    pub fn save(&self) -> Result<(), PropsError> {
        let path = self.path();
        let mut writer = BufWriter::new(File::create(&path)?);
        writer.write_all(self.render().as_bytes())?;
        writer.flush()?;
        tracing::debug!("Saved {} properties to {}", self.len(), path.display());
        Ok(())
    }

    /// The exact text [`save`](Self::save) would write.
    pub fn render(&self) -> String {
        let mut out = String::from(PROP_HEADER);
        for (key, value) in &self.properties {
            if let Some(comment) = comment_for(key) {
                out.push_str(comment);
                out.push('\n');
            }
            out.push_str(key);
            out.push('=');
            out.push_str(value);
            out.push('\n');
        }
        out
    }
}

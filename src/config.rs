use anyhow::{anyhow, Result};
use serde::Deserialize;
use std::fs::File;
use std::path::{Path, PathBuf};

/// The optional project file read from the source directory.
const PROJECT_FILE: &str = "scriven.yaml";

/// The feed author, as configured in the project file.
#[derive(Clone, Debug, Deserialize)]
pub struct Author {
    pub name: String,

    #[serde(default)]
    pub email: Option<String>,
}

/// The raw project file. Every field is optional; [`Config`] supplies the
/// defaults.
#[derive(Default, Deserialize)]
struct Project {
    title: Option<String>,
    home_page: Option<String>,
    header_template: Option<PathBuf>,
    output_directory: Option<PathBuf>,
    author: Option<Author>,
}

/// Resolved build configuration. Every field has a default, so a bare
/// directory of `.md` files with a `heading.html` builds without any
/// project file at all.
pub struct Config {
    /// The directory scanned for `.md` post sources.
    pub source_directory: PathBuf,

    /// The directory the pages, index, and feed are written to. Defaults
    /// to the source directory, matching the in-place layout of a plain
    /// blog checkout.
    pub output_directory: PathBuf,

    /// The header template prepended to every generated page.
    pub header_template: PathBuf,

    /// The site title, used for the feed.
    pub title: String,

    /// The URL prefix for post pages, used for feed links. May be empty.
    pub home_page: String,

    /// The feed author, if any.
    pub author: Option<Author>,
}

impl Config {
    /// Loads the configuration for `source_directory`, reading
    /// `scriven.yaml` from it when present and falling back to defaults
    /// otherwise. Relative paths in the project file resolve against the
    /// source directory.
    pub fn from_directory(source_directory: &Path) -> Result<Config> {
        let path = source_directory.join(PROJECT_FILE);
        let project: Project = match path.exists() {
            true => serde_yaml::from_reader(open(&path, "project")?)?,
            false => Project::default(),
        };

        Ok(Config {
            output_directory: match project.output_directory {
                Some(dir) => source_directory.join(dir),
                None => source_directory.to_owned(),
            },
            header_template: source_directory.join(
                project
                    .header_template
                    .unwrap_or_else(|| PathBuf::from("heading.html")),
            ),
            title: project.title.unwrap_or_else(|| String::from("Blog")),
            home_page: project.home_page.unwrap_or_default(),
            author: project.author,
            source_directory: source_directory.to_owned(),
        })
    }
}

fn open(path: &Path, kind: &str) -> Result<File> {
    match File::open(path) {
        Err(e) => Err(anyhow!(
            "Opening {} file `{}`: {}",
            kind,
            path.display(),
            e
        )),
        Ok(file) => Ok(file),
    }
}

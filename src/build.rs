//! Exports the [`build_site`] function which stitches together the
//! high-level steps of building the output site: reading the header
//! template, extracting metadata from each source ([`crate::post`]),
//! rendering bodies ([`crate::markdown`]), writing the pages and the index
//! ([`crate::write`]), and generating the Atom feed ([`crate::feed`]).

use crate::config::Config;
use crate::feed::{self, FeedConfig};
use crate::markdown;
use crate::post::{Error as PostError, Post};
use crate::write::Writer;
use atom_syndication::Error as AtomError;
use std::fmt;
use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};

const MARKDOWN_EXTENSION: &str = ".md";

/// Builds the site from a [`Config`]. Each source file is read, its
/// metadata extracted, its body rendered, and its page written before the
/// next file is touched; the index and feed are written once every source
/// has been processed. The first failure aborts the run, leaving any pages
/// already written in place.
pub fn build_site(config: &Config) -> Result<()> {
    let header = read_header(&config.header_template)?;
    std::fs::create_dir_all(&config.output_directory)?;
    let writer = Writer {
        header: &header,
        output_directory: &config.output_directory,
    };

    let mut posts: Vec<Post> = Vec::new();
    for result in std::fs::read_dir(&config.source_directory)? {
        let entry = result?;
        let os_file_name = entry.file_name();
        let file_name = os_file_name.to_string_lossy();
        if !file_name.ends_with(MARKDOWN_EXTENSION) {
            continue;
        }

        use std::io::Read;
        let mut contents = String::new();
        File::open(entry.path())?.read_to_string(&mut contents)?;

        let output_name = format!(
            "{}.html",
            file_name.trim_end_matches(MARKDOWN_EXTENSION)
        );
        let post =
            Post::extract(&output_name, &contents).map_err(|err| Error::Post {
                file_name: file_name.to_string(),
                err,
            })?;

        let mut body = String::new();
        markdown::to_html(&mut body, &contents);
        writer.write_post(&post, &body)?;
        posts.push(post);
    }

    writer.write_index(&mut posts)?;

    feed::write_feed(
        FeedConfig {
            title: config.title.clone(),
            home_page: config.home_page.clone(),
            author: config.author.clone(),
        },
        &posts,
        File::create(config.output_directory.join("feed.atom"))?,
    )?;

    Ok(())
}

// Loads the header template contents. The template is read once and
// prepended verbatim to every generated page.
fn read_header(path: &Path) -> Result<String> {
    use std::io::Read;
    let annotate = |err| Error::HeaderTemplate {
        path: path.to_owned(),
        err,
    };

    let mut contents = String::new();
    File::open(path)
        .map_err(annotate)?
        .read_to_string(&mut contents)
        .map_err(annotate)?;
    Ok(contents)
}

type Result<T> = std::result::Result<T, Error>;

/// The error type for building a site. Every variant is fatal; nothing is
/// caught or retried, and output written before the failure stays on disk.
#[derive(Debug)]
pub enum Error {
    /// Returned when the header template can't be read.
    HeaderTemplate { path: PathBuf, err: io::Error },

    /// Returned when a source document fails metadata extraction. Carries
    /// the source file name so the message identifies the offending file.
    Post { file_name: String, err: PostError },

    /// Returned for errors writing the feed.
    Feed(AtomError),

    /// Returned for other I/O errors.
    Io(io::Error),
}

impl fmt::Display for Error {
    /// Implements [`fmt::Display`] for [`Error`].
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::HeaderTemplate { path, err } => {
                write!(f, "Opening header template `{}`: {}", path.display(), err)
            }
            Error::Post { file_name, err } => {
                write!(f, "{}: {}", file_name, err)
            }
            Error::Feed(err) => err.fmt(f),
            Error::Io(err) => err.fmt(f),
        }
    }
}

impl std::error::Error for Error {
    /// Implements [`std::error::Error`] for [`Error`].
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::HeaderTemplate { path: _, err } => Some(err),
            Error::Post { file_name: _, err } => Some(err),
            Error::Feed(err) => Some(err),
            Error::Io(err) => Some(err),
        }
    }
}

impl From<io::Error> for Error {
    /// Converts [`io::Error`]s into [`Error`]. This allows us to use the
    /// `?` operator for fallible I/O operations.
    fn from(err: io::Error) -> Error {
        Error::Io(err)
    }
}

impl From<AtomError> for Error {
    /// Converts [`AtomError`]s into [`Error`]. This allows us to use the
    /// `?` operator when writing the feed.
    fn from(err: AtomError) -> Error {
        Error::Feed(err)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use std::fs;

    const HEADER: &str = "<head><title>blog</title></head><body><div>";

    fn setup(sources: &[(&str, &str)]) -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("heading.html"), HEADER).unwrap();
        for (name, contents) in sources {
            fs::write(dir.path().join(name), contents).unwrap();
        }
        dir
    }

    fn build(dir: &tempfile::TempDir) -> Result<()> {
        build_site(&Config::from_directory(dir.path()).unwrap())
    }

    #[test]
    fn test_build_site() {
        let dir =
            setup(&[("post1.md", "# Hello\n01/02/23\n\nBody *text*.\n")]);
        build(&dir).unwrap();

        let page =
            fs::read_to_string(dir.path().join("post1.html")).unwrap();
        assert!(page.starts_with(HEADER));
        assert!(page.contains(r#"<a href="post1.html">Hello</a>"#));
        assert!(page.contains(r#"<div id="post_date">January 2, 2023</div>"#));

        // The title and date must appear only in the wrapper markup, never
        // in the rendered-body region.
        let body = page.splitn(2, r#"<div id="generated">"#).nth(1).unwrap();
        assert!(body.contains("<em>text</em>"));
        assert!(!body.contains("Hello"));
        assert!(!body.contains("01/02/23"));

        let index = fs::read_to_string(dir.path().join("index.html")).unwrap();
        assert!(index.starts_with("<html>"));
        assert!(index.contains(r#"<a href="post1.html">Hello</a>"#));
        assert!(dir.path().join("feed.atom").is_file());
    }

    #[test]
    fn test_index_orders_posts_by_date() {
        let dir = setup(&[
            ("march.md", "# March\n03/01/23\n"),
            ("january.md", "# January\n01/01/23\n"),
        ]);
        build(&dir).unwrap();

        let index = fs::read_to_string(dir.path().join("index.html")).unwrap();
        assert!(
            index.find("january.html").unwrap()
                < index.find("march.html").unwrap()
        );
    }

    #[test]
    fn test_bad_date_aborts_and_names_the_file() {
        let dir = setup(&[("broken.md", "# Title\nnot-a-date\n")]);
        let err = build(&dir).unwrap_err();
        assert!(err.to_string().contains("broken.md"), "got: {}", err);
        assert!(!dir.path().join("index.html").exists());
        assert!(!dir.path().join("broken.html").exists());
    }

    #[test]
    fn test_missing_header_template_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let err =
            build_site(&Config::from_directory(dir.path()).unwrap())
                .unwrap_err();
        assert!(err.to_string().contains("heading.html"), "got: {}", err);
    }

    #[test]
    fn test_ignores_non_markdown_files() {
        let dir = setup(&[("post1.md", "# Hello\n01/02/23\n")]);
        fs::write(dir.path().join("notes.txt"), "not a post").unwrap();
        build(&dir).unwrap();
        assert!(!dir.path().join("notes.html").exists());
    }
}

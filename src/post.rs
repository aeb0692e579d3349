//! Defines the [`Post`] type and the extraction of its metadata from the
//! first two blocks of a source document. Every source must open with a
//! heading whose first text span is the post title, followed by a block
//! whose first text span is the post date.

use crate::markdown;
use chrono::NaiveDate;
use pulldown_cmark::{Event, Parser, Tag};
use std::fmt;

/// The strict format for the date line of a post: month/day/2-digit-year,
/// e.g. `01/02/23`.
pub const DATE_FORMAT: &str = "%m/%d/%y";

/// One blog entry: the metadata rendered into wrapper markup on its own
/// page and repeated on the index. The body HTML is rendered separately
/// and never held here.
#[derive(Clone, Debug, PartialEq)]
pub struct Post {
    /// The first text span of the document's title heading.
    pub title: String,

    /// The date parsed from the second block's first text span.
    pub date: NaiveDate,

    /// The output file name: the source base name with an `.html`
    /// extension.
    pub file_name: String,
}

impl Post {
    /// Extracts a [`Post`] from a source document. `file_name` is the
    /// output file name the post page will be written to (and linked from).
    pub fn extract(file_name: &str, input: &str) -> Result<Post> {
        let (title, date_text) = leading_spans(input)?;
        let date = NaiveDate::parse_from_str(&date_text, DATE_FORMAT)
            .map_err(|err| Error::DateParse {
                text: date_text,
                err,
            })?;
        Ok(Post {
            title,
            date,
            file_name: file_name.to_owned(),
        })
    }
}

/// Returns the first text span of the document's first block, which must
/// be a heading, and the first text span of whatever block follows it.
fn leading_spans(input: &str) -> Result<(String, String)> {
    let mut events = Parser::new_ext(input, markdown::options());

    match events.next() {
        Some(Event::Start(Tag::Heading(_))) => {}
        _ => return Err(Error::MissingTitle),
    }

    let mut title = None;
    for ev in &mut events {
        match ev {
            Event::Text(text) if title.is_none() => {
                title = Some(text.into_string())
            }
            Event::End(Tag::Heading(_)) => break,
            _ => {}
        }
    }
    let title = title.ok_or(Error::MissingTitle)?;

    let date = events
        .find_map(|ev| match ev {
            Event::Text(text) => Some(text.into_string()),
            _ => None,
        })
        .ok_or(Error::MissingDate)?;

    Ok((title, date))
}

/// Represents the result of a [`Post`] extraction.
pub type Result<T> = std::result::Result<T, Error>;

/// Represents an error extracting a [`Post`] from a source document.
#[derive(Debug)]
pub enum Error {
    /// Returned when the document's first block is not a heading with a
    /// text span.
    MissingTitle,

    /// Returned when no text span follows the title heading.
    MissingDate,

    /// Returned when the date line doesn't match [`DATE_FORMAT`].
    DateParse {
        text: String,
        err: chrono::ParseError,
    },
}

impl fmt::Display for Error {
    /// Displays an [`Error`] as human-readable text.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::MissingTitle => {
                write!(f, "first block must be a heading containing the title")
            }
            Error::MissingDate => {
                write!(f, "missing date line after the title heading")
            }
            Error::DateParse { text, err } => {
                write!(f, "invalid date `{}`: {}", text, err)
            }
        }
    }
}

impl std::error::Error for Error {
    /// Implements the [`std::error::Error`] trait for [`Error`].
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::MissingTitle => None,
            Error::MissingDate => None,
            Error::DateParse { text: _, err } => Some(err),
        }
    }
}

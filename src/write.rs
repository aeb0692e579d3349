//! Responsible for assembling and writing the output HTML files: one page
//! per [`Post`] plus the date-ordered index. Pages are plain string
//! concatenation around the rendered body; the only markup produced here
//! is the shared title-link/date-block pair.

use crate::post::Post;
use chrono::NaiveDate;
use std::fs::File;
use std::io::{self, Write as _};
use std::path::Path;

/// Writes post pages and the index to the output directory from rendered
/// [`Post`] bodies.
pub struct Writer<'a> {
    /// The shared page header markup, read once at startup and prepended
    /// verbatim to every generated page.
    pub header: &'a str,

    /// The directory in which the post pages and the index are written.
    pub output_directory: &'a Path,
}

impl Writer<'_> {
    /// Writes a single post page: header, title block, date block, and the
    /// rendered body. Overwrites any existing file of the same name.
    pub fn write_post(&self, post: &Post, body: &str) -> io::Result<()> {
        let mut w = File::create(self.output_directory.join(&post.file_name))?;
        w.write_all(self.header.as_bytes())?;
        write_entry(&mut w, post)?;
        w.write_all(b"<br><div id=\"generated\">")?;
        w.write_all(body.as_bytes())?;
        w.write_all(b"</div></div></body></html>")?;
        Ok(())
    }

    /// Writes the index page listing every post, sorted ascending by date.
    /// The sort is stable, so posts sharing a date keep discovery order.
    pub fn write_index(&self, posts: &mut [Post]) -> io::Result<()> {
        posts.sort_by(|a, b| a.date.cmp(&b.date));

        let mut w = File::create(self.output_directory.join("index.html"))?;
        w.write_all(b"<html>")?;
        w.write_all(self.header.as_bytes())?;
        for post in posts.iter() {
            write_entry(&mut w, post)?;
        }
        w.write_all(b"</div></body></html>")?;
        Ok(())
    }
}

/// Writes the title-link and date-block pair shared between a post's own
/// page and its index entry.
fn write_entry<W: io::Write>(w: &mut W, post: &Post) -> io::Result<()> {
    write!(
        w,
        r#"<div id="post_name"><a href="{}">{}</a></div><div id="post_date">{}</div>"#,
        post.file_name,
        post.title,
        format_date(&post.date),
    )
}

/// Formats a date as it appears on pages: full month name, day without a
/// leading zero, 4-digit year (e.g. `January 2, 2023`).
pub fn format_date(date: &NaiveDate) -> String {
    date.format("%B %-d, %Y").to_string()
}

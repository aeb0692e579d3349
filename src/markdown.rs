use crate::htmlrenderer;
use pulldown_cmark::{Options, Parser};

/// The number of leading text emissions every post body suppresses: the
/// title span and the date span, both re-rendered into wrapper markup by
/// [`crate::write`].
pub const SUPPRESSED_SPANS: usize = 2;

/// Returns the extension options used for every parse of a post source.
/// Metadata extraction and body rendering must observe the same event
/// stream, so both go through this one option set.
pub fn options() -> Options {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_FOOTNOTES);
    options.insert(Options::ENABLE_SMART_PUNCTUATION);
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_TASKLISTS);
    options
}

/// Converts a post body from markdown to HTML, writing the result into
/// `out`. The first [`SUPPRESSED_SPANS`] text emissions render as empty;
/// see [`crate::htmlrenderer`] for the rationale.
pub fn to_html(out: &mut String, markdown: &str) {
    htmlrenderer::push_html(
        out,
        Parser::new_ext(markdown, options()),
        SUPPRESSED_SPANS,
    );
}

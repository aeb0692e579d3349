//! Implements a custom [`push_html`] that can suppress the leading text
//! emissions of a document. [`pulldown_cmark::html::push_html`] renders
//! every text span it sees, but the title and date lines of a post are
//! re-rendered into the page's wrapper markup, so their raw text must not
//! also appear in the body HTML.

use pulldown_cmark::{html, CowStr, Event};

/// Tracks how many text emissions remain to be suppressed. The counter is
/// scoped to a single render pass; a fresh [`Suppressor`] must be used for
/// each document.
struct Suppressor {
    remaining: usize,
}

impl Suppressor {
    fn new(count: usize) -> Self {
        Suppressor { remaining: count }
    }

    /// Replaces the next [`Event::Text`] with empty text while the counter
    /// is non-zero. Every other event kind passes through untouched.
    fn convert<'a>(&mut self, ev: Event<'a>) -> Event<'a> {
        match ev {
            Event::Text(_) if self.remaining > 0 => {
                self.remaining -= 1;
                Event::Text(CowStr::from(""))
            }
            _ => ev,
        }
    }
}

/// Converts [`Event`]s into an HTML string much like
/// [`pulldown_cmark::html::push_html`] except that the first `suppress`
/// text emissions (in document order) render as empty. A document with
/// fewer text emissions than `suppress` renders nothing for the ones that
/// exist; that is not an error.
pub fn push_html<'a, I>(out: &mut String, events: I, suppress: usize)
where
    I: Iterator<Item = Event<'a>>,
{
    let mut suppressor = Suppressor::new(suppress);
    html::push_html(out, events.map(move |ev| suppressor.convert(ev)));
}

//! Support for creating an Atom feed from the list of posts.

use crate::config::Author;
use crate::post::Post;
use atom_syndication::{Entry, Error as AtomError, Feed, FixedDateTime, Link, Person};
use chrono::{FixedOffset, NaiveDate, TimeZone, Utc};
use std::io::Write;

/// Bundled configuration for creating a feed.
pub struct FeedConfig {
    /// The feed title.
    pub title: String,

    /// The URL prefix for post pages; also serves as the feed ID. May be
    /// empty, in which case entry links degrade to bare file names.
    pub home_page: String,

    /// The feed author, if configured.
    pub author: Option<Author>,
}

/// Creates a feed from some configuration ([`FeedConfig`]) and a list of
/// [`Post`]s and writes the result to a [`std::io::Write`]. This function
/// takes ownership of the provided [`FeedConfig`].
pub fn write_feed<W: Write>(
    config: FeedConfig,
    posts: &[Post],
    w: W,
) -> Result<(), AtomError> {
    feed(config, posts).write_to(w)?;
    Ok(())
}

fn feed(config: FeedConfig, posts: &[Post]) -> Feed {
    let entries: Vec<Entry> = posts.iter().map(|p| entry(&config, p)).collect();

    let mut feed = Feed::default();
    feed.set_title(config.title);
    feed.set_id(config.home_page.clone());
    feed.set_updated(
        FixedOffset::east(0).from_utc_datetime(&Utc::now().naive_utc()),
    );
    feed.set_authors(author_to_people(config.author.as_ref()));
    feed.set_links(vec![alternate_link(config.home_page)]);
    feed.set_entries(entries);
    feed
}

fn entry(config: &FeedConfig, post: &Post) -> Entry {
    let url = post_url(&config.home_page, &post.file_name);
    let date = midnight(post.date);

    let mut entry = Entry::default();
    entry.set_id(url.clone());
    entry.set_title(post.title.clone());
    entry.set_updated(date);
    entry.set_published(Some(date));
    entry.set_authors(author_to_people(config.author.as_ref()));
    entry.set_links(vec![alternate_link(url)]);
    entry
}

/// Posts carry a calendar date but Atom timestamps are fully precise, so
/// every entry is stamped at midnight UTC of its post date.
fn midnight(date: NaiveDate) -> FixedDateTime {
    FixedOffset::east(0).from_utc_datetime(&date.and_hms(0, 0, 0))
}

fn post_url(home_page: &str, file_name: &str) -> String {
    if home_page.is_empty() || home_page.ends_with('/') {
        format!("{}{}", home_page, file_name)
    } else {
        format!("{}/{}", home_page, file_name)
    }
}

fn alternate_link(href: String) -> Link {
    let mut link = Link::default();
    link.set_href(href);
    link.set_rel("alternate");
    link
}

fn author_to_people(author: Option<&Author>) -> Vec<Person> {
    match author {
        Some(author) => {
            let mut person = Person::default();
            person.set_name(author.name.clone());
            person.set_email(author.email.clone());
            vec![person]
        }
        None => Vec::new(),
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn post(file_name: &str, title: &str, y: i32, m: u32, d: u32) -> Post {
        Post {
            title: title.to_owned(),
            date: NaiveDate::from_ymd_opt(y, m, d).unwrap(),
            file_name: file_name.to_owned(),
        }
    }

    #[test]
    fn test_post_url_joins_on_slash() {
        assert_eq!(
            post_url("https://example.com", "a.html"),
            "https://example.com/a.html"
        );
        assert_eq!(
            post_url("https://example.com/", "a.html"),
            "https://example.com/a.html"
        );
        assert_eq!(post_url("", "a.html"), "a.html");
    }

    #[test]
    fn test_write_feed_lists_every_post() {
        let posts = vec![
            post("one.html", "One", 2023, 1, 1),
            post("two.html", "Two", 2023, 3, 1),
        ];

        let mut out = Vec::new();
        write_feed(
            FeedConfig {
                title: String::from("Test Blog"),
                home_page: String::from("https://example.com/"),
                author: None,
            },
            &posts,
            &mut out,
        )
        .unwrap();

        let xml = String::from_utf8(out).unwrap();
        assert!(xml.contains("Test Blog"));
        assert!(xml.contains("One"));
        assert!(xml.contains("https://example.com/one.html"));
        assert!(xml.contains("https://example.com/two.html"));
    }
}

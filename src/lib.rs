//! The library code for the `scriven` static blog generator. The
//! architecture can be generally broken down into two distinct steps:
//!
//! 1. Extracting post metadata from the markdown sources ([`crate::post`])
//! 2. Rendering bodies and writing output pages ([`crate::markdown`],
//!    [`crate::write`])
//!
//! The one unusual piece is the rendering pass: every post page re-renders
//! its title and date lines into wrapper markup, so the body renderer
//! suppresses the first two text spans of the document to keep them from
//! appearing twice ([`crate::htmlrenderer`]). Everything else is a linear
//! batch: discover the sources, process them one at a time, then write the
//! index and the feed from the accumulated post list ([`crate::build`]).

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]

pub mod build;
pub mod config;
pub mod feed;
pub mod htmlrenderer;
pub mod markdown;
pub mod post;
pub mod write;

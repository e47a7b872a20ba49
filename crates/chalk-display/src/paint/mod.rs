//! Painters turn a [`PresentationNode`](crate::PresentationNode) into output
//! for a particular display.
//!
//! - [`paint_text`] - Boxed plain-text tables for terminals
//! - [`paint_html`] - Escaped HTML markup

mod html;
mod text;

pub use html::{HtmlStyle, escape_html, paint_html};
pub use text::{TextStyle, paint_text};

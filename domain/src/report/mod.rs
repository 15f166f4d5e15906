//! Job analysis report
//!
//! The [`Report`] is the output artifact of one run. It is only built once
//! every [`Section`] has text, so a partially-populated report never exists.

mod entities;

pub use entities::{Report, Section};

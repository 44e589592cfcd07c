//! # Kugiri
//!
//! Kugiri finds phrase boundaries (positions where a soft line break or a
//! zero-width space can be inserted) in Japanese, Chinese, and Thai text,
//! which use no spaces between words. Segmentation is driven by pretrained
//! additive score tables in the BudouX format, evaluated over a six-character
//! sliding window, and runs as a pull-based streaming state machine: one
//! span per call, no allocation, no failure modes.
//!
//! ## Examples
//!
//! ```
//! use kugiri::{Language, Segmenter};
//!
//! let text = "次の決闘がまもなく始まる！";
//! let mut seg = Segmenter::new(text.as_bytes());
//!
//! let mut phrases = Vec::new();
//! while let Some(span) = seg.next(Language::Ja) {
//!     phrases.push(&text[span.range()]);
//! }
//! assert_eq!(phrases, ["次の", "決闘が", "まもなく", "始まる！"]);
//! ```
//!
//! The emitted spans always tile the input exactly, even when the input is
//! not valid UTF-8; malformed bytes are carried along inside the spans.
#![deny(missing_docs)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod language;
pub mod model;
mod models;
pub mod segmenter;
mod utf8;
mod window;

#[cfg(feature = "compile")]
#[cfg_attr(docsrs, doc(cfg(feature = "compile")))]
pub mod compile;

#[cfg(feature = "compile")]
#[cfg_attr(docsrs, doc(cfg(feature = "compile")))]
pub mod errors;


pub use language::Language;
pub use segmenter::{Segmenter, Span, Spans, SpansWith};

/// Version number of this library.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

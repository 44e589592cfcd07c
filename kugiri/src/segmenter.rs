//! Streaming phrase-boundary segmenter.

use std::ops::Range;

use crate::language::Language;
use crate::model::Model;
use crate::utf8;
use crate::window::Window;

/// A byte range of the input, delimited by two phrase boundaries (or by a
/// boundary and an input endpoint).
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Span {
    /// Offset in bytes from the beginning of the input.
    pub offset: usize,
    /// Length in bytes. Always positive for an emitted span.
    pub length: usize,
}

impl Span {
    /// The span as a byte range, convenient for slicing the input.
    #[inline(always)]
    pub const fn range(&self) -> Range<usize> {
        self.offset..self.offset + self.length
    }
}

/// Streaming segmenter over a borrowed byte slice.
///
/// The segmenter decodes the input incrementally and emits one span per
/// call to [`next`](Self::next). It allocates nothing, holds no resources
/// beyond the borrow of the input, and never fails: malformed UTF-8 is
/// carried through as opaque bytes and ends up covered by the surrounding
/// spans, so the emitted spans always tile the input exactly.
///
/// The input does not need to be NUL-terminated or complete; a truncated
/// multi-byte sequence at the tail is folded into the final span.
pub struct Segmenter<'a> {
    input: &'a [u8],
    /// Byte offset of the next undecoded character.
    cursor: usize,
    /// Byte offset just past the previously emitted span.
    last_boundary: usize,
    window: Window,
}

impl<'a> Segmenter<'a> {
    /// Creates a segmenter over `input`.
    pub fn new(input: &'a [u8]) -> Self {
        Self {
            input,
            cursor: 0,
            last_boundary: 0,
            window: Window::default(),
        }
    }

    /// Rebinds the segmenter to a new input, resetting all state.
    pub fn reset(&mut self, input: &'a [u8]) {
        self.input = input;
        self.cursor = 0;
        self.last_boundary = 0;
        self.window.clear();
    }

    /// Returns the next span for the given language.
    ///
    /// Returns `None` once the input is exhausted; further calls keep
    /// returning `None`.
    #[inline]
    pub fn next(&mut self, lang: Language) -> Option<Span> {
        self.next_with(lang.model())
    }

    /// Returns the next span, scoring boundaries with an explicit model.
    ///
    /// The language-tagged entry points all dispatch through this; it is
    /// public so that callers can plug in their own score tables.
    pub fn next_with(&mut self, model: &Model) -> Option<Span> {
        loop {
            // Decode one code point and shift it into the window. The
            // recorded offset is that of the code point's first byte.
            let (cp, size) = utf8::decode_one(self.input, self.cursor);
            self.window.push(cp, self.cursor);
            self.cursor += size;

            let start = self.last_boundary;
            if self.window.current_cp() != 0 {
                let end = self.window.current_offset();
                // A positive score predicts a boundary just before the
                // current character. The guard on `end > start` keeps the
                // first valid character from emitting an empty span.
                if model.score(self.window.cps()) > 0 && end > start {
                    self.last_boundary = end;
                    return Some(Span {
                        offset: start,
                        length: end - start,
                    });
                }
            } else if self.cursor >= self.input.len() {
                // The window has drained past the last character. Emit
                // whatever remains as the trailing span, then pin the state
                // so every later call lands here and returns None.
                if start < self.input.len() {
                    let length = self.input.len() - start;
                    self.cursor = self.input.len();
                    self.last_boundary = self.input.len();
                    return Some(Span {
                        offset: start,
                        length,
                    });
                }
                return None;
            }
        }
    }

    /// Returns the next span of Japanese text.
    #[cfg(feature = "ja")]
    #[inline]
    pub fn next_ja(&mut self) -> Option<Span> {
        self.next(Language::Ja)
    }

    /// Returns the next span of Japanese text, using the KNBC-trained model.
    #[cfg(feature = "ja-knbc")]
    #[inline]
    pub fn next_ja_knbc(&mut self) -> Option<Span> {
        self.next(Language::JaKnbc)
    }

    /// Returns the next span of Thai text.
    #[cfg(feature = "th")]
    #[inline]
    pub fn next_th(&mut self) -> Option<Span> {
        self.next(Language::Th)
    }

    /// Returns the next span of Simplified Chinese text.
    #[cfg(feature = "zh-hans")]
    #[inline]
    pub fn next_zh_hans(&mut self) -> Option<Span> {
        self.next(Language::ZhHans)
    }

    /// Returns the next span of Traditional Chinese text.
    #[cfg(feature = "zh-hant")]
    #[inline]
    pub fn next_zh_hant(&mut self) -> Option<Span> {
        self.next(Language::ZhHant)
    }

    /// Converts the segmenter into an iterator of spans for `lang`.
    pub fn spans(self, lang: Language) -> Spans<'a> {
        Spans {
            segmenter: self,
            lang,
        }
    }

    /// Converts the segmenter into an iterator of spans scored with an
    /// explicit model, the iterator counterpart of
    /// [`next_with`](Self::next_with).
    pub fn spans_with<'m>(self, model: &'m Model) -> SpansWith<'a, 'm> {
        SpansWith {
            segmenter: self,
            model,
        }
    }
}

/// Iterator of spans, created by [`Segmenter::spans`].
pub struct Spans<'a> {
    segmenter: Segmenter<'a>,
    lang: Language,
}

impl Iterator for Spans<'_> {
    type Item = Span;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.segmenter.next(self.lang)
    }
}

/// Iterator of spans over a caller-supplied model, created by
/// [`Segmenter::spans_with`].
pub struct SpansWith<'a, 'm> {
    segmenter: Segmenter<'a>,
    model: &'m Model,
}

impl Iterator for SpansWith<'_, '_> {
    type Item = Span;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.segmenter.next_with(self.model)
    }
}

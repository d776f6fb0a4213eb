//! # Note Events
//!
//! The output of the compiler: an ordered, immutable table of playback events.
//!
//! ## Types
//! - [`Note`] - one event: frequency ratio and duration in milliseconds
//! - [`Melody`] - fixed-capacity `[Note; N]`, built in `const` contexts
//! - [`NoteSequence`] - heap-backed table for scores only known at runtime
//!
//! Neither sequence type exposes a way to change its notes after assembly.
//! Both dereference to `[Note]` for iteration and indexing.

use serde::ser::{Serialize, Serializer};
use std::ops::Deref;

/// A resolved playback event.
///
/// # Fields
/// - `ratio`: frequency relative to the reference pitch (1.0 = A4). `0.0` is a rest.
/// - `duration_ms`: how long the event lasts
///
/// # Example
/// ```
/// use ems::Note;
///
/// let la = Note { ratio: 1.0, duration_ms: 500 };
/// assert_eq!(la.frequency(440.0), 440.0);
/// assert!(Note::REST.is_rest());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    pub ratio: f32,
    pub duration_ms: u32,
}

impl Note {
    /// Silence with no duration. Fills unused slots of an oversized [`Melody`].
    pub const REST: Note = Note {
        ratio: 0.0,
        duration_ms: 0,
    };

    pub fn is_rest(&self) -> bool {
        self.ratio == 0.0
    }

    /// Frequency in Hz given the frequency of the reference pitch.
    pub fn frequency(&self, reference_hz: f32) -> f32 {
        self.ratio * reference_hz
    }
}

/// A fixed-capacity note table.
///
/// Produced by [`parse_array`](crate::parse_array) and the [`ems!`](crate::ems)
/// macro, usually in a `const` or `static`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Melody<const N: usize> {
    notes: [Note; N],
}

impl<const N: usize> Melody<N> {
    pub(crate) const fn from_array(notes: [Note; N]) -> Self {
        Self { notes }
    }

    pub const fn len(&self) -> usize {
        N
    }

    pub const fn is_empty(&self) -> bool {
        N == 0
    }

    pub const fn as_slice(&self) -> &[Note] {
        &self.notes
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Note> {
        self.notes.iter()
    }
}

impl<const N: usize> Deref for Melody<N> {
    type Target = [Note];

    fn deref(&self) -> &[Note] {
        &self.notes
    }
}

impl<'a, const N: usize> IntoIterator for &'a Melody<N> {
    type Item = &'a Note;
    type IntoIter = std::slice::Iter<'a, Note>;

    fn into_iter(self) -> Self::IntoIter {
        self.notes.iter()
    }
}

impl<const N: usize> IntoIterator for Melody<N> {
    type Item = Note;
    type IntoIter = std::array::IntoIter<Note, N>;

    fn into_iter(self) -> Self::IntoIter {
        self.notes.into_iter()
    }
}

impl<const N: usize> Serialize for Melody<N> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.notes.iter())
    }
}

/// A note table sized at runtime.
///
/// Produced by [`compile`](crate::compile) and
/// [`compile_with_capacity`](crate::compile_with_capacity).
#[derive(Debug, Clone, PartialEq, Default, serde::Serialize)]
#[serde(transparent)]
pub struct NoteSequence {
    notes: Box<[Note]>,
}

impl NoteSequence {
    pub(crate) fn new(notes: Vec<Note>) -> Self {
        Self {
            notes: notes.into_boxed_slice(),
        }
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    pub fn as_slice(&self) -> &[Note] {
        &self.notes
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Note> {
        self.notes.iter()
    }

    /// Total playing time of the sequence in milliseconds.
    pub fn total_duration_ms(&self) -> u64 {
        self.notes.iter().map(|n| n.duration_ms as u64).sum()
    }
}

impl Deref for NoteSequence {
    type Target = [Note];

    fn deref(&self) -> &[Note] {
        &self.notes
    }
}

impl<'a> IntoIterator for &'a NoteSequence {
    type Item = &'a Note;
    type IntoIter = std::slice::Iter<'a, Note>;

    fn into_iter(self) -> Self::IntoIter {
        self.notes.iter()
    }
}

impl<const N: usize> From<Melody<N>> for NoteSequence {
    fn from(melody: Melody<N>) -> Self {
        Self::new(melody.notes.to_vec())
    }
}

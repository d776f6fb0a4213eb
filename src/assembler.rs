//! # Sequence Assembler
//!
//! Drives the header reader once, then the note scanner across the body,
//! resolving each note into a [`Note`] until the body is exhausted or the
//! output is full.
//!
//! ## Two-Pass Pipeline
//! 1. [`count_notes`] scans the body and fixes the capacity `N`
//! 2. [`parse_array`] (const) or [`compile`] (runtime) fills that many notes
//!
//! ## Capacity
//! The capacity is authoritative. Input beyond it is discarded without
//! error. Slots a score cannot fill stay [`Note::REST`].

use crate::header::read_header;
use crate::note::{Melody, Note, NoteSequence};
use crate::scanner::{count_notes, next_note};

/// Resolved notes of a score, in score order.
///
/// Usable both in `const` contexts (through [`Events::next_event`]) and as
/// an ordinary [`Iterator`].
#[derive(Debug, Clone)]
pub struct Events<'a> {
    bytes: &'a [u8],
    pos: usize,
    tempo: u32,
}

impl<'a> Events<'a> {
    pub const fn new(score: &'a str) -> Self {
        let bytes = score.as_bytes();
        let (tempo, pos) = read_header(bytes, 0);
        Self { bytes, pos, tempo }
    }

    /// Tempo the events are resolved against.
    pub const fn tempo(&self) -> u32 {
        self.tempo
    }

    pub const fn next_event(&mut self) -> Option<Note> {
        match next_note(self.bytes, self.pos) {
            Some((state, next)) => {
                self.pos = next;
                Some(state.resolve(self.tempo))
            }
            None => {
                self.pos = self.bytes.len();
                None
            }
        }
    }
}

impl Iterator for Events<'_> {
    type Item = Note;

    fn next(&mut self) -> Option<Note> {
        self.next_event()
    }
}

/// Parse a score into a fixed-capacity [`Melody`].
///
/// `N` is normally [`count_notes`] of the same score. A smaller `N`
/// truncates; a larger one pads with [`Note::REST`].
///
/// # Example
/// ```
/// use ems::{count_notes, parse_array, Melody};
///
/// const SCORE: &str = "(120) 1, 3, 5, 1`_";
/// const MELODY: Melody<{ count_notes(SCORE) }> = parse_array(SCORE);
///
/// assert_eq!(MELODY.len(), 4);
/// assert_eq!(MELODY[0].duration_ms, 500);
/// assert_eq!(MELODY[3].duration_ms, 1000);
/// assert_eq!(MELODY[3].ratio, MELODY[0].ratio * 2.0);
/// ```
pub const fn parse_array<const N: usize>(score: &str) -> Melody<N> {
    let mut notes = [Note::REST; N];
    let mut events = Events::new(score);
    let mut written = 0;
    while written < N {
        match events.next_event() {
            Some(note) => {
                notes[written] = note;
                written += 1;
            }
            None => break,
        }
    }
    Melody::from_array(notes)
}

/// Compile a score into a [`NoteSequence`] at runtime.
///
/// This is the main entry point for scores that are not known at build time.
///
/// # Example
/// ```
/// use ems::compile;
///
/// let notes = compile("(60) 6, 0- 6`-");
/// assert_eq!(notes.len(), 3);
/// assert_eq!(notes[0].ratio, 1.0);
/// assert_eq!(notes[0].duration_ms, 1000);
/// assert!(notes[1].is_rest());
/// assert_eq!(notes[2].ratio, 2.0);
/// ```
pub fn compile(score: &str) -> NoteSequence {
    compile_with_capacity(score, count_notes(score))
}

/// Compile a score into at most `capacity` notes.
///
/// Notes past the capacity are dropped silently.
pub fn compile_with_capacity(score: &str, capacity: usize) -> NoteSequence {
    let notes: Vec<Note> = Events::new(score).take(capacity).collect();
    NoteSequence::new(notes)
}

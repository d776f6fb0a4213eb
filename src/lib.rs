//! # EMS: Embedded Music Score
//!
//! Compiles numbered (cipher) notation into a table of playback events for
//! monophonic players such as a PWM buzzer loop.
//!
//! ```text
//! (200) 1, 2- 3- `5_ 1s`,
//! ^^^^^ ^^^^^^^^^^^^^^^^^
//! tempo notes
//! ```
//!
//! Each [`Note`] carries a frequency ratio relative to A4 (0 for rests) and
//! a duration in milliseconds. Scores are resolved in two passes: count the
//! notes, then fill a table of exactly that size. Both passes are `const fn`,
//! so a score literal can be compiled at build time with [`ems!`].
//!
//! ## Notation
//! | Symbol | Meaning |
//! |--------|---------|
//! | `(N)`  | tempo header, N beats per minute (default 120) |
//! | `0`    | rest |
//! | `1`-`7`| Do Re Mi Fa Sol La Si |
//! | `s` / `b` | sharp / flat |
//! | `` ` `` before the digit | one octave down |
//! | `` ` `` after the digit | one octave up |
//! | `,` `-` `.` `_` | 1, 1/2, 1/4, 2 beats (accumulated) |
//!
//! A note with no duration mark lasts 0 ms. Anything unrecognized is skipped.
//!
//! ## Example
//! ```rust
//! use ems::ems;
//!
//! let melody: &[ems::Note] = ems!("(120) 1, 1, 5, 5, 6, 6, 5_");
//!
//! assert_eq!(melody.len(), 7);
//! assert_eq!(melody[6].duration_ms, 1000);
//! for note in melody {
//!     let hz = note.frequency(440.0);
//!     // drive the buzzer at `hz` for `note.duration_ms`
//!     # let _ = hz;
//! }
//! ```

pub mod assembler;
pub mod config;
pub mod duration;
pub mod error;
pub mod format;
pub mod header;
pub mod note;
pub mod pitch;
pub mod scanner;

pub use assembler::{compile, compile_with_capacity, parse_array, Events};
pub use config::OutputConfig;
pub use error::*;
pub use format::{render, OutputFormat};
pub use header::{read_tempo, DEFAULT_TEMPO};
pub use note::{Melody, Note, NoteSequence};
pub use scanner::count_notes;

/// Compile a score literal at build time into a `&'static [Note]`.
///
/// The score is counted and parsed during constant evaluation; nothing of
/// the score text is needed at runtime.
///
/// # Example
/// ```
/// let notes: &'static [ems::Note] = ems::ems!("1,2,3,");
/// assert_eq!(notes.len(), 3);
/// ```
#[macro_export]
macro_rules! ems {
    ($score:expr) => {{
        const SCORE: &str = $score;
        static NOTES: $crate::Melody<{ $crate::count_notes(SCORE) }> = $crate::parse_array(SCORE);
        NOTES.as_slice()
    }};
}

//! # Note Scanner
//!
//! The per-note grammar shared by the note counter and the sequence assembler.
//!
//! ## Grammar
//! ```text
//! note          := octave_down? digit modifier*
//! octave_down   := '`'
//! digit         := '0'..'7'          ; 0 = rest, 1..7 = Do..Si
//! modifier      := 's' | 'b'         ; +1 / -1 semitone
//!                | '`'               ; +1 octave
//!                | ',' | '-' | '.' | '_'   ; +1 / +0.5 / +0.25 / +2 beats
//! ```
//!
//! ## Pitch vs Duration Modifiers
//! The backtick is both the octave-down prefix and the octave-up suffix.
//! Which one it means depends on parse state only:
//! - Before the digit it is a prefix.
//! - After the digit, before any duration modifier, it raises the octave.
//! - Once a duration modifier has been seen (duration phase), any pitch
//!   modifier (`` ` ``, `s`, `b`) ends the note without being consumed,
//!   so a backtick there becomes the prefix of the next note.
//!
//! Both [`count_notes`] and the assembler step through the body with
//! [`next_note`], so they always agree on where notes begin and end.

use crate::duration::duration_ms;
use crate::header::read_header;
use crate::note::Note;
use crate::pitch::ratio;

pub(crate) const OCTAVE_MARK: u8 = b'`';
pub(crate) const SHARP: u8 = b's';
pub(crate) const FLAT: u8 = b'b';

/// A single classified character of the note body
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum Symbol {
    Degree(u8),     // 0-7
    OctaveMark,     // `
    Sharp,          // s
    Flat,           // b
    Duration(f32),  // , - . _
    Separator,      // anything else
}

pub(crate) const fn classify(c: u8) -> Symbol {
    match c {
        b'0'..=b'7' => Symbol::Degree(c - b'0'),
        OCTAVE_MARK => Symbol::OctaveMark,
        SHARP => Symbol::Sharp,
        FLAT => Symbol::Flat,
        b',' => Symbol::Duration(1.0),
        b'-' => Symbol::Duration(0.5),
        b'.' => Symbol::Duration(0.25),
        b'_' => Symbol::Duration(2.0),
        _ => Symbol::Separator,
    }
}

/// Whether `c` begins a new note: a scale-degree digit or the octave-down prefix.
pub(crate) const fn is_note_start(c: u8) -> bool {
    matches!(classify(c), Symbol::Degree(_) | Symbol::OctaveMark)
}

/// Parse state of one note, discarded once the note is resolved.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct NoteState {
    pub degree: u8,
    pub octave: i32,
    pub semitones: i32,
    pub beats: f32,
    pub in_duration_phase: bool,
}

impl NoteState {
    const fn new() -> Self {
        Self {
            degree: 0,
            octave: 0,
            semitones: 0,
            beats: 0.0,
            in_duration_phase: false,
        }
    }

    pub(crate) const fn resolve(&self, tempo: u32) -> Note {
        Note {
            ratio: ratio(self.degree, self.octave, self.semitones),
            duration_ms: duration_ms(self.beats, tempo),
        }
    }
}

/// Scan forward from `pos` to the next note and consume it.
///
/// Separators before the note are skipped. Returns the note's parse state
/// and the cursor just past its last consumed modifier, or `None` when the
/// body holds no further note.
pub(crate) const fn next_note(bytes: &[u8], pos: usize) -> Option<(NoteState, usize)> {
    let mut i = pos;
    while i < bytes.len() && !is_note_start(bytes[i]) {
        i += 1;
    }
    if i >= bytes.len() {
        return None;
    }

    let mut state = NoteState::new();

    if bytes[i] == OCTAVE_MARK {
        state.octave = state.octave.saturating_sub(1);
        i += 1;
    }

    // A missing digit leaves the note as a rest; the character stays unconsumed
    if i < bytes.len() {
        if let Symbol::Degree(degree) = classify(bytes[i]) {
            state.degree = degree;
            i += 1;
        }
    }

    while i < bytes.len() {
        match classify(bytes[i]) {
            Symbol::OctaveMark | Symbol::Sharp | Symbol::Flat if state.in_duration_phase => break,
            Symbol::OctaveMark => state.octave = state.octave.saturating_add(1),
            Symbol::Sharp => state.semitones = state.semitones.saturating_add(1),
            Symbol::Flat => state.semitones = state.semitones.saturating_sub(1),
            Symbol::Duration(beats) => {
                state.beats += beats;
                state.in_duration_phase = true;
            }
            Symbol::Degree(_) | Symbol::Separator => break,
        }
        i += 1;
    }

    Some((state, i))
}

/// Number of notes a score will produce.
///
/// This is the capacity of the fixed-size sequence built by
/// [`parse_array`](crate::parse_array). It steps through the same grammar
/// as the assembler without resolving pitch or duration.
///
/// # Example
/// ```
/// use ems::count_notes;
///
/// assert_eq!(count_notes("(120)1,2,3,"), 3);
/// assert_eq!(count_notes("`1,`2,"), 2);
/// assert_eq!(count_notes(""), 0);
/// ```
pub const fn count_notes(score: &str) -> usize {
    let bytes = score.as_bytes();
    let (_, mut pos) = read_header(bytes, 0);
    let mut count = 0;
    while let Some((_, next)) = next_note(bytes, pos) {
        count += 1;
        pos = next;
    }
    count
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scan(body: &str) -> Vec<NoteState> {
        let bytes = body.as_bytes();
        let mut pos = 0;
        let mut notes = Vec::new();
        while let Some((state, next)) = next_note(bytes, pos) {
            notes.push(state);
            pos = next;
        }
        notes
    }

    #[test]
    fn test_classify() {
        assert_eq!(classify(b'0'), Symbol::Degree(0));
        assert_eq!(classify(b'7'), Symbol::Degree(7));
        assert_eq!(classify(b'8'), Symbol::Separator);
        assert_eq!(classify(b'`'), Symbol::OctaveMark);
        assert_eq!(classify(b'_'), Symbol::Duration(2.0));
        assert_eq!(classify(b' '), Symbol::Separator);
    }

    #[test]
    fn test_note_start() {
        assert!(is_note_start(b'1'));
        assert!(is_note_start(b'`'));
        assert!(!is_note_start(b's'));
        assert!(!is_note_start(b','));
        assert!(!is_note_start(b'9'));
    }

    #[test]
    fn test_single_note_modifiers() {
        let notes = scan("5s`,-");
        assert_eq!(notes.len(), 1);
        assert_eq!(notes[0].degree, 5);
        assert_eq!(notes[0].semitones, 1);
        assert_eq!(notes[0].octave, 1);
        assert_eq!(notes[0].beats, 1.5);
        assert!(notes[0].in_duration_phase);
    }

    #[test]
    fn test_octave_down_prefix() {
        let notes = scan("`6,");
        assert_eq!(notes.len(), 1);
        assert_eq!(notes[0].degree, 6);
        assert_eq!(notes[0].octave, -1);
    }

    #[test]
    fn test_backtick_after_duration_starts_next_note() {
        let notes = scan("1,`2,");
        assert_eq!(notes.len(), 2);
        assert_eq!(notes[0].octave, 0);
        assert_eq!(notes[1].degree, 2);
        assert_eq!(notes[1].octave, -1);
    }

    #[test]
    fn test_accidental_after_duration_is_not_consumed() {
        // The stray `s` is skipped as a separator, not attached to either note
        let notes = scan("1,s2,");
        assert_eq!(notes.len(), 2);
        assert_eq!(notes[0].semitones, 0);
        assert_eq!(notes[1].semitones, 0);
    }

    #[test]
    fn test_backtick_before_duration_raises_octave() {
        let notes = scan("1`,2,");
        assert_eq!(notes.len(), 2);
        assert_eq!(notes[0].octave, 1);
        assert_eq!(notes[1].octave, 0);
    }

    #[test]
    fn test_adjacent_digits_are_separate_notes() {
        let notes = scan("123");
        assert_eq!(notes.len(), 3);
        assert!(notes.iter().all(|n| n.beats == 0.0));
    }

    #[test]
    fn test_prefix_without_digit_is_rest() {
        let notes = scan("` 1,");
        assert_eq!(notes.len(), 2);
        assert_eq!(notes[0].degree, 0);
        assert_eq!(notes[0].octave, -1);
        assert_eq!(notes[1].degree, 1);
    }

    #[test]
    fn test_separators_end_modifier_run() {
        let notes = scan("1 ,2");
        assert_eq!(notes.len(), 2);
        assert_eq!(notes[0].beats, 0.0);
        assert_eq!(notes[1].beats, 0.0);
    }

    #[test]
    fn test_count_matches_scan() {
        for body in ["", "1,2,3,", "`1``,2s`-3b.", "1,`2,`3,", "0_ 0_", "``1", "abc 8 9"] {
            assert_eq!(count_notes(body), scan(body).len(), "body: {:?}", body);
        }
    }

    #[test]
    fn test_count_skips_header() {
        // Header digits are not notes
        assert_eq!(count_notes("(120)1,"), 1);
        assert_eq!(count_notes("(1234567)"), 0);
    }

    #[test]
    fn test_count_prefix_not_double_counted() {
        assert_eq!(count_notes("`1,`2,`3,"), 3);
        assert_eq!(count_notes("1`,1``,"), 2);
    }

    #[test]
    fn test_long_modifier_runs() {
        let mut body = String::from("1");
        body.push_str(&"s".repeat(10_000));
        body.push_str(&"`".repeat(10_000));
        body.push(',');
        let notes = scan(&body);
        assert_eq!(notes.len(), 1);
        assert_eq!(notes[0].semitones, 10_000);
        assert_eq!(notes[0].octave, 10_000);
        assert_eq!(notes[0].beats, 1.0);
    }

    #[test]
    fn test_count_handles_multibyte_text() {
        assert_eq!(count_notes("1, — 2, ♪ 3,"), 3);
    }
}

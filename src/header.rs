//! # Score Header
//!
//! A score may open with a parenthesized tempo section: `(200)`. Everything
//! after the header is the note body.
//!
//! The header is read best-effort:
//! - No `(` at the start of the score: the default tempo (120 BPM) applies
//!   and the cursor is left untouched.
//! - Digits are accumulated until the first non-digit. Anything after them
//!   up to the closing `)` is skipped.
//! - An unterminated header stops right after its digits, so the body that
//!   follows is still scanned.
//! - An empty or zero tempo falls back to the default.

/// Tempo used when a score has no header, in beats per minute.
pub const DEFAULT_TEMPO: u32 = 120;

pub(crate) const HEADER_OPEN: u8 = b'(';
pub(crate) const HEADER_CLOSE: u8 = b')';

/// Read the optional tempo header at `pos`.
///
/// Returns the tempo and the cursor position where the body begins.
pub(crate) const fn read_header(bytes: &[u8], pos: usize) -> (u32, usize) {
    if pos >= bytes.len() || bytes[pos] != HEADER_OPEN {
        return (DEFAULT_TEMPO, pos);
    }

    let mut i = pos + 1;
    let mut tempo: u32 = 0;
    while i < bytes.len() && bytes[i].is_ascii_digit() {
        tempo = tempo.saturating_mul(10).saturating_add((bytes[i] - b'0') as u32);
        i += 1;
    }
    let after_digits = i;

    while i < bytes.len() && bytes[i] != HEADER_CLOSE {
        i += 1;
    }
    let body_start = if i < bytes.len() { i + 1 } else { after_digits };

    if tempo == 0 {
        tempo = DEFAULT_TEMPO;
    }
    (tempo, body_start)
}

/// Tempo declared by a score's header, or [`DEFAULT_TEMPO`] when absent.
///
/// # Example
/// ```
/// use ems::read_tempo;
///
/// assert_eq!(read_tempo("(200) 1, 2, 3,"), 200);
/// assert_eq!(read_tempo("1, 2, 3,"), 120);
/// ```
pub const fn read_tempo(score: &str) -> u32 {
    read_header(score.as_bytes(), 0).0
}

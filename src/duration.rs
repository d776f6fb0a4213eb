//! Duration resolution: beats and tempo to milliseconds.

/// Milliseconds in one minute.
const MS_PER_MINUTE: f32 = 60_000.0;

/// Length of one beat at `tempo` BPM, in milliseconds.
pub const fn ms_per_beat(tempo: u32) -> f32 {
    MS_PER_MINUTE / tempo as f32
}

/// Duration of `beats` beats at `tempo` BPM, rounded down to whole milliseconds.
///
/// A note without duration modifiers has zero beats and resolves to 0 ms.
/// A tempo of 0 also yields 0 ms.
///
/// # Example
/// ```
/// use ems::duration::duration_ms;
///
/// assert_eq!(duration_ms(1.5, 120), 750);
/// assert_eq!(duration_ms(0.0, 120), 0);
/// ```
pub const fn duration_ms(beats: f32, tempo: u32) -> u32 {
    if tempo == 0 {
        return 0;
    }
    (ms_per_beat(tempo) * beats) as u32
}

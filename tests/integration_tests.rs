//! Integration tests for the EMS compiler
//!
//! Tests the full pipeline from score text to note tables, both at runtime
//! and during constant evaluation.

use assert_approx_eq::assert_approx_eq;
use ems::pitch::semitone_ratio;
use ems::{compile, compile_with_capacity, count_notes, ems, parse_array, Melody, Note};

const DEMO: &str = include_str!("../scores/demo.ems");

#[test]
fn test_end_to_end_scale() {
    let notes = compile("(120)1,2,3,4,5,6,7,1`,");
    assert_eq!(notes.len(), 8);
    assert!(notes.iter().all(|n| n.duration_ms == 500));
    for pair in notes.windows(2) {
        assert!(pair[1].ratio > pair[0].ratio, "ratios should increase");
    }
    assert_eq!(notes[7].ratio, notes[0].ratio * 2.0);
}

#[test]
fn test_default_tempo() {
    let notes = compile("1,2,");
    assert_eq!(notes[0].duration_ms, 500);
    assert_eq!(notes[1].duration_ms, 500);
}

#[test]
fn test_reference_ratio() {
    let notes = compile("1,");
    assert_approx_eq!(notes[0].ratio, 2f32.powf(-9.0 / 12.0), 1e-5);
    assert_approx_eq!(notes[0].frequency(440.0), 261.63, 0.01);
}

#[test]
fn test_octave_scaling() {
    let notes = compile("1, 1`,");
    assert_eq!(notes[1].ratio, notes[0].ratio * 2.0);
}

#[test]
fn test_enharmonic_equivalence() {
    let notes = compile("7s, 1`,");
    assert_eq!(notes[0].ratio, notes[1].ratio);
}

#[test]
fn test_rest_ignores_modifiers() {
    let notes = compile("0, 0s`, `0b-, 0``_ `0b-");
    assert_eq!(notes.len(), 5);
    assert!(notes.iter().all(|n| n.ratio == 0.0));
    // `0b-, carries a half beat and a full beat
    assert_eq!(notes[2].duration_ms, 750);
    assert_eq!(notes[3].duration_ms, 1000);
    assert_eq!(notes[4].duration_ms, 250);
}

#[test]
fn test_duration_accumulation() {
    let notes = compile("(120)1,-");
    assert_eq!(notes[0].duration_ms, 750);
}

#[test]
fn test_missing_duration_is_zero() {
    let notes = compile("1 2 3");
    assert_eq!(notes.len(), 3);
    assert!(notes.iter().all(|n| n.duration_ms == 0));
}

#[test]
fn test_ambiguity_boundary() {
    let notes = compile("1,`1,");
    assert_eq!(notes.len(), 2);
    // First note keeps its octave, second is lowered
    let plain = compile("1,");
    assert_eq!(notes[0], plain[0]);
    assert_eq!(notes[1].ratio, plain[0].ratio / 2.0);
    assert_eq!(notes[1].duration_ms, 500);
}

#[test]
fn test_truncation() {
    let score = "1,2,3,4,5,";
    assert_eq!(count_notes(score), 5);

    let notes = compile_with_capacity(score, 3);
    assert_eq!(notes.len(), 3);
    assert_eq!(notes.as_slice(), &compile(score)[..3]);

    let melody: Melody<3> = parse_array(score);
    assert_eq!(melody.as_slice(), notes.as_slice());
}

#[test]
fn test_count_parse_agreement() {
    let scores = [
        "",
        "(120)",
        "(",
        "()",
        "`",
        "``",
        "```1",
        "1`,`1`,``1``",
        "0_`0_s0_b",
        "1,,,,`2---3...4____",
        "(90)1s`b`,-._2",
        "1 2\t3\n4 | 5 ; 6 / 7",
        "89 abc 1, xyz 2,",
        "(60 1, 2, 3,",
        "(12x)`7b,",
        "♪ 1, — 2, ♫",
        DEMO,
    ];
    for score in scores {
        assert_eq!(
            compile(score).len(),
            count_notes(score),
            "count/parse mismatch for {:?}",
            score
        );
    }
}

#[test]
fn test_deterministic() {
    assert_eq!(compile(DEMO), compile(DEMO));
}

#[test]
fn test_demo_score() {
    let notes = compile(DEMO);
    assert_eq!(notes.len(), 73);
    assert_eq!(notes.total_duration_ms(), 29_700);

    // 2s`,, at 200 bpm: 2 beats of 300 ms
    assert_eq!(notes[0].duration_ms, 600);
    assert_eq!(notes[0].ratio, semitone_ratio(6));
    // 1s`,
    assert_eq!(notes[1].duration_ms, 300);
    assert_eq!(notes[1].ratio, semitone_ratio(4));
    // 7,, closes the score: 7,,,
    let last = notes[notes.len() - 1];
    assert_eq!(last.duration_ms, 900);
    assert_eq!(last.ratio, compile("7,")[0].ratio);
}

#[test]
fn test_ems_macro() {
    let notes: &'static [Note] = ems!("(60) 6, 0- 6`_");
    assert_eq!(notes.len(), 3);
    assert_eq!(
        notes[0],
        Note {
            ratio: 1.0,
            duration_ms: 1000,
        }
    );
    assert_eq!(
        notes[1],
        Note {
            ratio: 0.0,
            duration_ms: 500,
        }
    );
    assert_eq!(
        notes[2],
        Note {
            ratio: 2.0,
            duration_ms: 2000,
        }
    );
}

#[test]
fn test_ems_macro_demo_matches_runtime() {
    let notes = ems!(include_str!("../scores/demo.ems"));
    assert_eq!(notes, compile(DEMO).as_slice());
}

#[test]
fn test_const_capacity() {
    const N: usize = count_notes(DEMO);
    const MELODY: Melody<N> = parse_array(DEMO);
    assert_eq!(N, 73);
    assert_eq!(MELODY.len(), 73);
    assert_eq!(MELODY[72].duration_ms, 900);
}

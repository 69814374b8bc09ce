//! ABC notation parser.
//!
//! Scans notation text character by character and extracts the ordered
//! sequence of notes and rests. Everything that carries no pitch
//! information for synthesis (headers, chord annotations, bar structure,
//! decorations) is skipped.

use crate::types::NoteEvent;

/// Header line prefixes recognized and skipped by the parser.
pub const HEADER_PREFIXES: [&str; 6] = ["X:", "T:", "M:", "L:", "R:", "K:"];

/// Parses notation text into an ordered sequence of note events.
///
/// Left-to-right order is preserved; no events are merged or reordered.
/// Text with no recognizable notes yields an empty vector rather than an
/// error; rejecting that is the synthesizer's concern.
pub fn parse(notation: &str) -> Vec<NoteEvent> {
    let mut events = Vec::new();

    for line in notation.split('\n') {
        if HEADER_PREFIXES.iter().any(|p| line.starts_with(p)) {
            continue;
        }
        if line.trim().is_empty() {
            continue;
        }
        parse_line(line, &mut events);
    }

    events
}

fn parse_line(line: &str, events: &mut Vec<NoteEvent>) {
    let chars: Vec<char> = line.chars().collect();
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];

        // Chord annotations are quoted spans with no synthesis meaning.
        if c == '"' {
            i += 1;
            while i < chars.len() && chars[i] != '"' {
                i += 1;
            }
            i += 1;
            continue;
        }

        // Bar lines, repeats, and brackets.
        if matches!(c, '|' | ':' | '[' | ']') {
            i += 1;
            continue;
        }

        if c == ' ' {
            i += 1;
            continue;
        }

        // Decorations and ornament markers.
        if matches!(c, '{' | '}' | '~' | '!' | '+' | '.') {
            i += 1;
            continue;
        }

        if is_pitch_char(c) {
            i += 1;

            // Accidentals after the letter carry no pitch here.
            while i < chars.len() && matches!(chars[i], '^' | '_' | '=') {
                i += 1;
            }

            let mut octave_shift = 0i32;
            while i < chars.len() && matches!(chars[i], '\'' | ',') {
                if chars[i] == '\'' {
                    octave_shift += 1;
                } else {
                    octave_shift -= 1;
                }
                i += 1;
            }

            let mut duration = 1.0f32;
            if i < chars.len() && chars[i].is_ascii_digit() {
                duration = chars[i].to_digit(10).unwrap() as f32;
                i += 1;
            }
            if i < chars.len() && chars[i] == '/' {
                i += 1;
                match chars.get(i).and_then(|d| d.to_digit(10)) {
                    // A zero divisor falls back to the default halving.
                    Some(divisor) if divisor > 0 => {
                        duration /= divisor as f32;
                        i += 1;
                    }
                    Some(_) => {
                        duration /= 2.0;
                        i += 1;
                    }
                    None => duration /= 2.0,
                }
            }

            if c == 'z' {
                events.push(NoteEvent::rest(duration));
            } else {
                events.push(NoteEvent::note(letter_to_pitch(c, octave_shift), duration));
            }
            continue;
        }

        i += 1;
    }
}

fn is_pitch_char(c: char) -> bool {
    matches!(c, 'A'..='G' | 'a'..='g' | 'z')
}

/// Converts a pitch letter to its MIDI note number.
///
/// Upper case letters sit in the octave starting at middle C (C = 60),
/// lower case one octave above (c = 72). Octave markers shift by 12
/// semitones each; the result is clamped to the MIDI range.
fn letter_to_pitch(letter: char, octave_shift: i32) -> u8 {
    let base: i32 = match letter {
        'C' => 60,
        'D' => 62,
        'E' => 64,
        'F' => 65,
        'G' => 67,
        'A' => 69,
        'B' => 71,
        'c' => 72,
        'd' => 74,
        'e' => 76,
        'f' => 77,
        'g' => 79,
        'a' => 81,
        'b' => 83,
        _ => 60,
    };
    (base + octave_shift * 12).clamp(0, 127) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_line_skipped_notes_extracted() {
        let events = parse("K:Emin\nABC2 z\n");
        assert_eq!(
            events,
            vec![
                NoteEvent::note(69, 1.0),
                NoteEvent::note(71, 1.0),
                NoteEvent::note(60, 2.0),
                NoteEvent::rest(1.0),
            ]
        );
    }

    #[test]
    fn all_header_prefixes_skipped() {
        let notation = "X:1\nT:Tune\nM:4/4\nL:1/8\nR:reel\nK:Emin\n";
        assert!(parse(notation).is_empty());
    }

    #[test]
    fn chord_annotations_skipped() {
        let events = parse("\"Em\"E F \"D\"G\n");
        assert_eq!(
            events,
            vec![
                NoteEvent::note(64, 1.0),
                NoteEvent::note(65, 1.0),
                NoteEvent::note(67, 1.0),
            ]
        );
    }

    #[test]
    fn bars_repeats_and_decorations_skipped() {
        let events = parse("|: ~A .B :|\n");
        assert_eq!(
            events,
            vec![NoteEvent::note(69, 1.0), NoteEvent::note(71, 1.0)]
        );
    }

    #[test]
    fn octave_markers_shift_pitch() {
        assert_eq!(parse("c'\n"), vec![NoteEvent::note(84, 1.0)]);
        assert_eq!(parse("C,\n"), vec![NoteEvent::note(48, 1.0)]);
        assert_eq!(parse("c''\n"), vec![NoteEvent::note(96, 1.0)]);
    }

    #[test]
    fn extreme_octaves_clamp_to_midi_range() {
        let events = parse("b''''\n");
        assert_eq!(events[0].pitch, 127);
        let events = parse("C,,,,,,\n");
        assert_eq!(events[0].pitch, 0);
    }

    #[test]
    fn durations_multiplier_and_divisor() {
        assert_eq!(parse("A2\n")[0].duration, 2.0);
        assert_eq!(parse("A/\n")[0].duration, 0.5);
        assert_eq!(parse("A/4\n")[0].duration, 0.25);
        assert_eq!(parse("A3/2\n")[0].duration, 1.5);
    }

    #[test]
    fn accidentals_after_letter_ignored() {
        assert_eq!(parse("A^2\n"), vec![NoteEvent::note(69, 2.0)]);
    }

    #[test]
    fn rest_duration_parsed() {
        let events = parse("z2 z/\n");
        assert_eq!(events, vec![NoteEvent::rest(2.0), NoteEvent::rest(0.5)]);
    }

    #[test]
    fn garbage_yields_no_events() {
        assert!(parse("?? @@ ## 123\n").is_empty());
        assert!(parse("").is_empty());
    }

    #[test]
    fn parsing_is_idempotent() {
        let notation = "X:1\nK:Emin\n|: \"Em\"E F G A|B2 c d:|\n";
        assert_eq!(parse(notation), parse(notation));
    }
}

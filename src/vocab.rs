//! Character vocabulary for the notation scorer.
//!
//! The scorer operates on integer indices, not characters. This module owns
//! the fixed bijection between the ABC notation character set and the index
//! space the scorer is trained on, plus the slightly narrower set of
//! characters the generator is allowed to emit.

use std::collections::{BTreeSet, HashMap, HashSet};

use once_cell::sync::Lazy;

/// Characters the vocabulary is built from. Duplicates collapse; indices are
/// assigned in sorted code-point order so the mapping is stable across runs.
const VOCAB_CHARS: &str = "ABCDEFGabcdefgz|:[]()',-/0123456789\nMKLTXtCQPVwHhOu+.~!$&*;?@%^_`";

/// Vocabulary members the generator must not emit. `$` and `&` are reserved
/// for chord-quoting constructs the synthesis path cannot interpret.
const RESERVED_OUTPUT_CHARS: [char; 2] = ['$', '&'];

static VOCABULARY: Lazy<Vocabulary> = Lazy::new(Vocabulary::new);

/// Fixed bijection between notation characters and scorer indices.
///
/// Built once, never mutated. Safe to share across concurrent requests.
#[derive(Debug)]
pub struct Vocabulary {
    chars: Vec<char>,
    index: HashMap<char, usize>,
    valid_output: HashSet<char>,
}

impl Vocabulary {
    fn new() -> Self {
        let chars: Vec<char> = VOCAB_CHARS.chars().collect::<BTreeSet<char>>().into_iter().collect();
        let index = chars.iter().enumerate().map(|(i, &c)| (c, i)).collect();
        let valid_output = chars
            .iter()
            .copied()
            .filter(|c| !RESERVED_OUTPUT_CHARS.contains(c))
            .collect();
        Self {
            chars,
            index,
            valid_output,
        }
    }

    /// Returns the scorer index for a character, or None if it is not a
    /// vocabulary member.
    pub fn index_of(&self, c: char) -> Option<usize> {
        self.index.get(&c).copied()
    }

    /// Returns the character at a scorer index, or None if out of range.
    pub fn char_of(&self, index: usize) -> Option<char> {
        self.chars.get(index).copied()
    }

    /// Number of characters in the vocabulary.
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    /// True when the vocabulary is empty (never, for the built-in set).
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// True when the generator is allowed to emit this character.
    pub fn is_valid_output(&self, c: char) -> bool {
        self.valid_output.contains(&c)
    }

    /// Fraction of characters in `text` belonging to the valid-output set.
    ///
    /// Used as the quality gate on scorer-driven generation. Empty text
    /// scores 0.0.
    pub fn valid_output_ratio(&self, text: &str) -> f32 {
        let total = text.chars().count();
        if total == 0 {
            return 0.0;
        }
        let valid = text.chars().filter(|&c| self.is_valid_output(c)).count();
        valid as f32 / total as f32
    }
}

/// Returns the process-wide vocabulary instance.
///
/// Constructed lazily on first use and shared by reference thereafter.
pub fn vocabulary() -> &'static Vocabulary {
    &VOCABULARY
}

//! Lexical heuristics for speaker gender and register
//!
//! Hindi marks grammatical gender on verbs and adjectives ("गया" vs "गई",
//! "अच्छा" vs "अच्छी") and register on pronouns ("आप" vs "तुम"). This module
//! counts how many known markers of each kind appear in a text and picks the
//! side with strictly more evidence. Ties, including no evidence at all,
//! produce `None` so that callers can fall back to asking the user.
//!
//! # Example
//!
//! ```
//! use indic_translate::classifier::{Formality, Gender, detect_formality, detect_gender};
//!
//! assert_eq!(detect_gender("मैं गया था और मैंने खाया"), Some(Gender::Male));
//! assert_eq!(detect_formality("क्या आप ठीक हैं?"), Some(Formality::Formal));
//! assert_eq!(detect_gender("मैं गया और तुम गई"), None);
//! ```

use std::cmp::Ordering;
use std::fmt;

/// Masculine verb and adjective forms.
///
/// `हूँ`, `है`, `hoon` and `hai` are listed for both genders and cancel out.
#[rustfmt::skip]
pub const MALE_PATTERNS: &[&str] = &[
    // Past tense
    "गया", "था", "खाया", "आया", "गए", "थे", "लिया", "दिया",
    // Present and future
    "हूँ", "है", "होगा", "करूंगा", "जाऊंगा",
    // Adjectives
    "अच्छा", "बुरा", "नया", "पुराना", "छोटा", "बड़ा",
    // Transliterated
    "gaya", "tha", "khaya", "aaya", "gae", "the", "liya", "diya",
    "hoon", "hai", "hoga", "karunga", "jaunga",
    "achha", "bura", "naya", "purana", "chota", "bada",
];

/// Feminine verb and adjective forms.
#[rustfmt::skip]
pub const FEMALE_PATTERNS: &[&str] = &[
    // Past tense
    "गई", "थी", "खाई", "आई", "गईं", "थीं", "ली", "दी",
    // Present and future
    "हूँ", "है", "होगी", "करूंगी", "जाऊंगी",
    // Adjectives
    "अच्छी", "बुरी", "नई", "पुरानी", "छोटी", "बड़ी",
    // Transliterated
    "gayi", "thi", "khayi", "aayi", "gain", "thin", "li", "di",
    "hoon", "hai", "hogi", "karungi", "jaungi",
    "achhi", "buri", "nayi", "purani", "choti", "badi",
];

/// Honorific pronouns and polite terms.
#[rustfmt::skip]
pub const FORMAL_PATTERNS: &[&str] = &[
    "आप", "आपका", "आपको", "आपकी", "आपके", "आपसे",
    "जी", "जी हाँ", "जी नहीं", "कृपया", "धन्यवाद",
    "महोदय", "महोदया", "श्रीमान", "श्रीमती",
    "aap", "aapka", "aapko", "aapki", "aapke", "aapse",
    "ji", "ji haan", "ji nahin", "kripaya", "dhanyawad",
    "mahoday", "mahodaya", "shriman", "shrimati",
    "sir", "madam", "please", "thank you", "kindly",
];

/// Intimate pronouns and casual terms.
#[rustfmt::skip]
pub const INFORMAL_PATTERNS: &[&str] = &[
    "तू", "तुझे", "तुझको", "तेरा", "तेरी", "तेरे",
    "तुम", "तुम्हें", "तुम्हारा", "तुम्हारी", "तुम्हारे",
    "यार", "दोस्त", "भाई", "बहन",
    "tu", "tujhe", "tujhko", "tera", "teri", "tere",
    "tum", "tumhen", "tumhara", "tumhari", "tumhare",
    "yaar", "dost", "bhai", "bahan",
    "hey", "hi", "dude", "bro",
];

/// Grammatical gender of the speaker, as expected by the translation provider
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Register of the text, used as the translation `mode`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Formality {
    Formal,
    Informal,
}

impl Formality {
    pub fn as_str(&self) -> &'static str {
        match self {
            Formality::Formal => "formal",
            Formality::Informal => "informal",
        }
    }
}

impl fmt::Display for Formality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Both heuristic guesses for one text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Classification {
    pub gender: Option<Gender>,
    pub formality: Option<Formality>,
}

/// Count the patterns that occur anywhere in `text`.
///
/// Each pattern contributes at most one, however often it repeats. `text` is
/// expected to be lower-cased already.
pub fn count_matches(text: &str, patterns: &[&str]) -> usize {
    patterns
        .iter()
        .filter(|pattern| text.contains(**pattern))
        .count()
}

/// Pick the side with strictly more matches, or `None` on a tie.
fn pick<T>(text: &str, first: (&[&str], T), second: (&[&str], T)) -> Option<T> {
    let first_count = count_matches(text, first.0);
    let second_count = count_matches(text, second.0);

    // A strict winner always has a count above zero
    match first_count.cmp(&second_count) {
        Ordering::Greater => Some(first.1),
        Ordering::Less => Some(second.1),
        Ordering::Equal => None,
    }
}

/// Guess the speaker's gender from verb and adjective endings.
pub fn detect_gender(text: &str) -> Option<Gender> {
    let text = text.to_lowercase();
    pick(
        &text,
        (MALE_PATTERNS, Gender::Male),
        (FEMALE_PATTERNS, Gender::Female),
    )
}

/// Guess the register from pronouns and honorifics.
pub fn detect_formality(text: &str) -> Option<Formality> {
    let text = text.to_lowercase();
    pick(
        &text,
        (FORMAL_PATTERNS, Formality::Formal),
        (INFORMAL_PATTERNS, Formality::Informal),
    )
}

/// Run both heuristics. The axes do not influence each other.
pub fn classify(text: &str) -> Classification {
    Classification {
        gender: detect_gender(text),
        formality: detect_formality(text),
    }
}

//! Built-in dictionary of common ASL signs.
//!
//! [`DICTIONARY`] backs the searchable dictionary: every entry gets a card
//! from [`crate::render::card`] and a record in `aslDictionaryData.json`.
//! [`CHART_ONLY`] covers signs that only appear on the printed charts the
//! extractor crops; they feed extraction metadata but get no generated card.

use serde::{Deserialize, Serialize};

/// Relative signing difficulty, also the card styling key.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

/// One dictionary sign with its descriptive metadata.
#[derive(Clone, Copy, Debug)]
pub struct SignEntry {
    /// Snake-case word key, also the output file stem.
    pub word: &'static str,
    pub category: &'static str,
    pub difficulty: Difficulty,
    /// How the sign is performed.
    pub description: &'static str,
    /// When the sign is used.
    pub usage: &'static str,
}

use Difficulty::{Easy, Medium};

/// The 53 signs exposed by the searchable dictionary, grouped by category.
pub const DICTIONARY: [SignEntry; 53] = [
    // Greetings and polite expressions.
    SignEntry { word: "hello", category: "greetings", difficulty: Easy, description: "Flat hand at forehead, move forward slightly", usage: "Standard greeting in ASL" },
    SignEntry { word: "thank_you", category: "greetings", difficulty: Easy, description: "Flat hand touches chin, moves forward", usage: "Express gratitude" },
    SignEntry { word: "please", category: "greetings", difficulty: Easy, description: "Flat hand circles on chest", usage: "Polite request" },
    SignEntry { word: "sorry", category: "greetings", difficulty: Easy, description: "Fist on chest, circular motion", usage: "Apologize or express sympathy" },
    SignEntry { word: "goodbye", category: "greetings", difficulty: Easy, description: "Wave hand or finger wiggle", usage: "Farewell greeting" },
    SignEntry { word: "nice_to_meet_you", category: "greetings", difficulty: Medium, description: "Compound phrase: NICE + MEET + YOU", usage: "First time meeting someone" },
    // Family and relationships.
    SignEntry { word: "mother", category: "family", difficulty: Easy, description: "Thumb touches chin", usage: "Female parent" },
    SignEntry { word: "father", category: "family", difficulty: Easy, description: "Thumb touches forehead", usage: "Male parent" },
    SignEntry { word: "sister", category: "family", difficulty: Medium, description: "L-hand at chin, moves down to meet other L-hand", usage: "Female sibling" },
    SignEntry { word: "brother", category: "family", difficulty: Medium, description: "L-hand at forehead, moves down to meet other L-hand", usage: "Male sibling" },
    SignEntry { word: "family", category: "family", difficulty: Medium, description: "F-hands form a circle", usage: "Related people group" },
    SignEntry { word: "friend", category: "family", difficulty: Medium, description: "Index fingers hook together twice", usage: "Close companion" },
    // Food and drink.
    SignEntry { word: "eat", category: "food", difficulty: Easy, description: "Fingertips to mouth repeatedly", usage: "Consume food" },
    SignEntry { word: "drink", category: "food", difficulty: Easy, description: "C-hand to mouth, tilt up", usage: "Consume liquid" },
    SignEntry { word: "water", category: "food", difficulty: Easy, description: "W-hand taps chin", usage: "Clear liquid, H2O" },
    SignEntry { word: "milk", category: "food", difficulty: Easy, description: "Squeeze fist alternately", usage: "Dairy beverage" },
    SignEntry { word: "coffee", category: "food", difficulty: Medium, description: "S-hand grinds on top of other S-hand", usage: "Caffeinated beverage" },
    SignEntry { word: "bread", category: "food", difficulty: Medium, description: "Knife hand slices other hand", usage: "Baked staple food" },
    // Colors.
    SignEntry { word: "red", category: "colors", difficulty: Easy, description: "Index finger brushes lips downward", usage: "Color of blood, fire" },
    SignEntry { word: "blue", category: "colors", difficulty: Easy, description: "B-hand shakes slightly", usage: "Color of sky, ocean" },
    SignEntry { word: "green", category: "colors", difficulty: Easy, description: "G-hand shakes slightly", usage: "Color of grass, plants" },
    SignEntry { word: "yellow", category: "colors", difficulty: Easy, description: "Y-hand shakes slightly", usage: "Color of sun, banana" },
    SignEntry { word: "black", category: "colors", difficulty: Easy, description: "Index finger across forehead", usage: "Absence of color" },
    SignEntry { word: "white", category: "colors", difficulty: Medium, description: "Five-hand on chest, pull out to closed hand", usage: "Color of snow, milk" },
    // Numbers.
    SignEntry { word: "one", category: "numbers", difficulty: Easy, description: "Index finger extended up", usage: "Number 1, single item" },
    SignEntry { word: "two", category: "numbers", difficulty: Easy, description: "Index and middle finger extended", usage: "Number 2, pair" },
    SignEntry { word: "three", category: "numbers", difficulty: Easy, description: "Thumb, index, and middle finger extended", usage: "Number 3, trio" },
    SignEntry { word: "five", category: "numbers", difficulty: Easy, description: "All five fingers extended", usage: "Number 5, hand count" },
    SignEntry { word: "ten", category: "numbers", difficulty: Easy, description: "Thumb up, shake slightly", usage: "Number 10, decimal base" },
    // Time and calendar.
    SignEntry { word: "today", category: "time", difficulty: Medium, description: "NOW + DAY combination", usage: "Current day" },
    SignEntry { word: "tomorrow", category: "time", difficulty: Medium, description: "Thumbs-up moves forward from cheek", usage: "Next day" },
    SignEntry { word: "yesterday", category: "time", difficulty: Medium, description: "Thumbs-up moves back from cheek", usage: "Previous day" },
    SignEntry { word: "time", category: "time", difficulty: Easy, description: "Index finger taps wrist", usage: "Clock time, duration" },
    SignEntry { word: "week", category: "time", difficulty: Medium, description: "One-hand slides across other palm", usage: "Seven day period" },
    SignEntry { word: "month", category: "time", difficulty: Medium, description: "One-hand slides down other index finger", usage: "Calendar month" },
    // Common verbs.
    SignEntry { word: "go", category: "verbs", difficulty: Easy, description: "Index fingers point and move forward", usage: "Move, travel, leave" },
    SignEntry { word: "come", category: "verbs", difficulty: Easy, description: "Index fingers point and move toward body", usage: "Move toward speaker" },
    SignEntry { word: "see", category: "verbs", difficulty: Easy, description: "V-hand from eyes moves forward", usage: "Visual perception" },
    SignEntry { word: "help", category: "verbs", difficulty: Medium, description: "Fist on flat palm, lift together", usage: "Assist, support" },
    SignEntry { word: "work", category: "verbs", difficulty: Medium, description: "S-hands tap wrists together", usage: "Employment, labor" },
    SignEntry { word: "play", category: "verbs", difficulty: Medium, description: "Y-hands shake alternately", usage: "Recreation, games" },
    // Question words.
    SignEntry { word: "what", category: "questions", difficulty: Easy, description: "Index finger shakes side to side", usage: "Question word for things" },
    SignEntry { word: "where", category: "questions", difficulty: Easy, description: "Index finger shakes back and forth", usage: "Question word for location" },
    SignEntry { word: "when", category: "questions", difficulty: Medium, description: "Index finger circles around other index finger", usage: "Question word for time" },
    SignEntry { word: "who", category: "questions", difficulty: Medium, description: "Index finger circles around lips", usage: "Question word for person" },
    SignEntry { word: "why", category: "questions", difficulty: Medium, description: "Touch forehead, then Y-hand shakes", usage: "Question word for reason" },
    SignEntry { word: "how", category: "questions", difficulty: Medium, description: "Bent hands turn up together", usage: "Question word for method" },
    // Personal pronouns.
    SignEntry { word: "i", category: "pronouns", difficulty: Easy, description: "Index finger points to chest", usage: "First person singular" },
    SignEntry { word: "you", category: "pronouns", difficulty: Easy, description: "Index finger points to person", usage: "Second person" },
    SignEntry { word: "he", category: "pronouns", difficulty: Easy, description: "Point to male person or side", usage: "Third person masculine" },
    SignEntry { word: "she", category: "pronouns", difficulty: Easy, description: "Point to female person or side", usage: "Third person feminine" },
    SignEntry { word: "we", category: "pronouns", difficulty: Medium, description: "Index finger arcs from self to others", usage: "First person plural" },
    SignEntry { word: "they", category: "pronouns", difficulty: Medium, description: "Point to multiple people or sweep", usage: "Third person plural" },
];

/// Signs that appear on the printed charts but not in the dictionary proper.
pub const CHART_ONLY: [SignEntry; 19] = [
    SignEntry { word: "yes", category: "responses", difficulty: Easy, description: "Fist nods up and down", usage: "Affirmative response" },
    SignEntry { word: "no", category: "responses", difficulty: Easy, description: "Index and middle finger close on thumb", usage: "Negative response" },
    SignEntry { word: "love", category: "emotions", difficulty: Easy, description: "Cross arms over chest", usage: "Deep affection" },
    SignEntry { word: "baby", category: "family", difficulty: Easy, description: "Cradling motion with arms", usage: "Infant, young child" },
    SignEntry { word: "sleep", category: "actions", difficulty: Easy, description: "Hand to side of head, eyes closed", usage: "Rest, sleep" },
    SignEntry { word: "study", category: "actions", difficulty: Medium, description: "Bent hand moves toward open palm", usage: "Learn, study" },
    SignEntry { word: "read", category: "actions", difficulty: Easy, description: "V-hand moves down open palm", usage: "Read text" },
    SignEntry { word: "write", category: "actions", difficulty: Easy, description: "Pinched fingers write on palm", usage: "Write text" },
    SignEntry { word: "finished", category: "actions", difficulty: Medium, description: "Five-hands flip down", usage: "Completed, done" },
    SignEntry { word: "good", category: "descriptive", difficulty: Easy, description: "Flat hand from chin moves down", usage: "Positive quality" },
    SignEntry { word: "bad", category: "descriptive", difficulty: Easy, description: "Flat hand flips down from chin", usage: "Negative quality" },
    SignEntry { word: "happy", category: "emotions", difficulty: Easy, description: "Flat hands brush up chest", usage: "Joyful feeling" },
    SignEntry { word: "sad", category: "emotions", difficulty: Easy, description: "Five-hands slide down face", usage: "Sorrowful feeling" },
    SignEntry { word: "hot", category: "descriptive", difficulty: Medium, description: "Claw hand turns away from mouth", usage: "High temperature" },
    SignEntry { word: "cold", category: "descriptive", difficulty: Easy, description: "S-hands shake (shivering)", usage: "Low temperature" },
    SignEntry { word: "big", category: "descriptive", difficulty: Easy, description: "L-hands spread apart", usage: "Large size" },
    SignEntry { word: "small", category: "descriptive", difficulty: Easy, description: "Flat hands close together", usage: "Little size" },
    SignEntry { word: "beautiful", category: "descriptive", difficulty: Medium, description: "Five-hand circles face, closes to O", usage: "Aesthetically pleasing" },
    SignEntry { word: "more", category: "descriptive", difficulty: Easy, description: "Fingertips tap together", usage: "Additional amount" },
];

/// Look up a sign by word key across both tables.
pub fn lookup(word: &str) -> Option<&'static SignEntry> {
    DICTIONARY
        .iter()
        .chain(CHART_ONLY.iter())
        .find(|e| e.word == word)
}

/// Accent color for a category (front-end palette).
pub fn category_color(category: &str) -> &'static str {
    match category {
        "greetings" => "#10B981",
        "family" => "#F59E0B",
        "food" => "#EF4444",
        "colors" => "#8B5CF6",
        "numbers" => "#3B82F6",
        "time" => "#06B6D4",
        "verbs" => "#F97316",
        "questions" => "#EC4899",
        "pronouns" => "#6366F1",
        _ => "#6B7280",
    }
}

/// Dictionary categories with their expected entry counts, in table order.
pub fn category_counts() -> Vec<(&'static str, usize)> {
    let mut counts: Vec<(&'static str, usize)> = Vec::new();
    for entry in &DICTIONARY {
        match counts.iter_mut().find(|(c, _)| *c == entry.category) {
            Some((_, n)) => *n += 1,
            None => counts.push((entry.category, 1)),
        }
    }
    counts
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use super::*;

    #[test]
    fn dictionary_has_53_unique_words() {
        let words: BTreeSet<_> = DICTIONARY.iter().map(|e| e.word).collect();
        assert_eq!(words.len(), 53);
    }

    #[test]
    fn chart_only_does_not_shadow_dictionary_words() {
        let dict: BTreeSet<_> = DICTIONARY.iter().map(|e| e.word).collect();
        for entry in &CHART_ONLY {
            assert!(!dict.contains(entry.word), "{} is in both tables", entry.word);
        }
    }

    #[test]
    fn category_counts_match_the_published_breakdown() {
        let counts = category_counts();
        let expected = [
            ("greetings", 6),
            ("family", 6),
            ("food", 6),
            ("colors", 6),
            ("numbers", 5),
            ("time", 6),
            ("verbs", 6),
            ("questions", 6),
            ("pronouns", 6),
        ];
        assert_eq!(counts, expected);
    }

    #[test]
    fn lookup_reaches_both_tables() {
        assert_eq!(lookup("hello").unwrap().category, "greetings");
        assert_eq!(lookup("yes").unwrap().category, "responses");
        assert!(lookup("xylophone").is_none());
    }

    #[test]
    fn every_dictionary_category_has_an_accent_color() {
        for entry in &DICTIONARY {
            assert_ne!(category_color(entry.category), "#6B7280");
        }
        assert_eq!(category_color("responses"), "#6B7280");
    }

    #[test]
    fn difficulty_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Difficulty::Easy).unwrap(), "\"easy\"");
        let d: Difficulty = serde_json::from_str("\"medium\"").unwrap();
        assert_eq!(d, Difficulty::Medium);
    }
}

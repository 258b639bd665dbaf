//! SVG card assembly for alphabet letters and dictionary words.
//!
//! Cards are plain SVG documents in a fixed 150x150 viewBox; the front end
//! serves them as-is, and [`crate::render::raster`] can rasterize them to PNG.

use std::fmt::Write as _;

use crate::catalog::alphabet::LetterSign;
use crate::catalog::dictionary::{Difficulty, SignEntry, category_color};

/// Card edge length in pixels, both styles.
pub const CARD_SIZE: u32 = 150;

/// Build the illustrated card for one alphabet letter.
pub fn letter_card_svg(sign: &LetterSign) -> String {
    let mut body = String::new();
    for layer in sign.layers {
        let _ = writeln!(body, "    {layer}");
    }

    format!(
        r##"<svg xmlns="http://www.w3.org/2000/svg" width="150" height="150" viewBox="0 0 150 150">
    <rect width="150" height="150" fill="#f8fafc" stroke="#e2e8f0" stroke-width="2"/>
{body}    <text x="75" y="140" text-anchor="middle" font-family="Arial, sans-serif" font-size="14" font-weight="bold" fill="#374151">ASL {name}</text>
</svg>
"##,
        name = sign.letter.to_ascii_uppercase(),
    )
}

/// Build the emoji-glyph card for one alphabet letter.
pub fn emoji_card_svg(sign: &LetterSign) -> String {
    format!(
        r##"<svg xmlns="http://www.w3.org/2000/svg" width="150" height="150" viewBox="0 0 150 150">
    <rect width="150" height="150" fill="#f8fafc" stroke="#e2e8f0" stroke-width="2"/>
    <text x="75" y="85" text-anchor="middle" font-family="Arial, sans-serif" font-size="60" fill="#000">{emoji}</text>
    <text x="75" y="145" text-anchor="middle" font-family="Arial, sans-serif" font-size="14" font-weight="bold" fill="#374151">ASL {name}</text>
</svg>
"##,
        emoji = sign.emoji,
        name = sign.letter.to_ascii_uppercase(),
    )
}

/// Build the card for one dictionary word: category-colored ring, generic
/// hand illustration, word label, category badge, difficulty marker.
pub fn word_card_svg(entry: &SignEntry) -> String {
    let color = category_color(entry.category);
    let (stroke_width, opacity) = difficulty_style(entry.difficulty);
    let label = title_case(entry.word);
    let badge = title_case(entry.category);
    let marker = difficulty_letter(entry.difficulty);

    format!(
        r##"<?xml version="1.0" encoding="UTF-8"?>
<svg width="150" height="150" viewBox="0 0 150 150" xmlns="http://www.w3.org/2000/svg">
  <circle cx="75" cy="75" r="70" fill="{color}" fill-opacity="0.1" stroke="{color}" stroke-width="2"/>
  <g transform="translate(75, 75)" opacity="{opacity}">
    <path d="M-25,-30 Q-30,-25 -30,-15 L-30,20 Q-25,25 -20,25 L20,25 Q25,20 25,15 L25,-15 Q25,-25 20,-30 Z" fill="#FFDBAC" stroke="#D4A574" stroke-width="{stroke_width}"/>
    <ellipse cx="-20" cy="0" rx="8" ry="15" fill="#FFDBAC" stroke="#D4A574" stroke-width="{stroke_width}"/>
    <rect x="-10" y="-35" width="6" height="25" rx="3" fill="#FFDBAC" stroke="#D4A574" stroke-width="{stroke_width}"/>
    <rect x="-2" y="-40" width="6" height="30" rx="3" fill="#FFDBAC" stroke="#D4A574" stroke-width="{stroke_width}"/>
    <rect x="6" y="-35" width="6" height="25" rx="3" fill="#FFDBAC" stroke="#D4A574" stroke-width="{stroke_width}"/>
    <rect x="14" y="-30" width="5" height="20" rx="2.5" fill="#FFDBAC" stroke="#D4A574" stroke-width="{stroke_width}"/>
    <path d="M-15,10 Q0,15 15,10" stroke="#D4A574" stroke-width="1" fill="none" opacity="0.6"/>
    <path d="M-10,18 Q0,20 10,18" stroke="#D4A574" stroke-width="1" fill="none" opacity="0.6"/>
  </g>
  <text x="75" y="135" text-anchor="middle" font-family="Arial, sans-serif" font-size="12" font-weight="bold" fill="{color}">{label}</text>
  <rect x="5" y="5" width="50" height="18" rx="9" fill="{color}" fill-opacity="0.2" stroke="{color}" stroke-width="1"/>
  <text x="30" y="16" text-anchor="middle" font-family="Arial, sans-serif" font-size="9" font-weight="bold" fill="{color}">{badge}</text>
  <circle cx="130" cy="20" r="8" fill="{color}" fill-opacity="0.3"/>
  <text x="130" y="24" text-anchor="middle" font-family="Arial, sans-serif" font-size="8" font-weight="bold" fill="{color}">{marker}</text>
</svg>
"##,
    )
}

fn difficulty_style(difficulty: Difficulty) -> (u32, &'static str) {
    match difficulty {
        Difficulty::Easy => (2, "0.9"),
        Difficulty::Medium => (3, "0.8"),
        Difficulty::Hard => (4, "0.7"),
    }
}

fn difficulty_letter(difficulty: Difficulty) -> char {
    match difficulty {
        Difficulty::Easy => 'E',
        Difficulty::Medium => 'M',
        Difficulty::Hard => 'H',
    }
}

/// `nice_to_meet_you` -> `Nice To Meet You`.
fn title_case(word: &str) -> String {
    word.split('_')
        .filter(|part| !part.is_empty())
        .map(|part| {
            let mut chars = part.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

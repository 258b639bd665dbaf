//! Batch generation of the built-in alphabet and dictionary cards.

use std::path::PathBuf;

use anyhow::Context as _;
use tracing::info;

use crate::catalog::alphabet::LETTERS;
use crate::catalog::dictionary::DICTIONARY;
use crate::foundation::error::{SignError, SignResult};
use crate::manifest::DictionaryManifest;
use crate::render::{card, raster};

/// File name of the dictionary metadata manifest, written into each root.
pub const MANIFEST_FILE: &str = "aslDictionaryData.json";

/// Alphabet card rendering style.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AlphabetStyle {
    /// Layered hand illustration.
    Illustrated,
    /// Large emoji glyph.
    Emoji,
}

/// Write the 26 alphabet cards into `<root>/alphabet/` under every root.
///
/// With `rasterize`, a 150x150 PNG is written next to each SVG.
pub fn generate_alphabet(
    roots: &[PathBuf],
    style: AlphabetStyle,
    rasterize: bool,
) -> SignResult<usize> {
    if roots.is_empty() {
        return Err(SignError::validation("at least one output root is required"));
    }

    let mut written = 0usize;
    for sign in &LETTERS {
        let svg = match style {
            AlphabetStyle::Illustrated => card::letter_card_svg(sign),
            AlphabetStyle::Emoji => card::emoji_card_svg(sign),
        };
        for root in roots {
            let dir = root.join("alphabet");
            std::fs::create_dir_all(&dir)
                .with_context(|| format!("create output dir '{}'", dir.display()))?;
            let path = dir.join(format!("{}.svg", sign.letter));
            std::fs::write(&path, &svg)
                .with_context(|| format!("write svg '{}'", path.display()))?;
        }
        if rasterize {
            let img = raster::svg_to_rgba(svg.as_bytes(), card::CARD_SIZE, card::CARD_SIZE)?;
            for root in roots {
                let path = root.join("alphabet").join(format!("{}.png", sign.letter));
                raster::write_png(
                    &path,
                    img.as_raw(),
                    img.width(),
                    img.height(),
                    image::ColorType::Rgba8,
                )?;
            }
        }
        written += 1;
    }

    info!(written, ?style, "alphabet cards generated");
    Ok(written)
}

/// Write the 53 dictionary cards into `<root>/dictionary/` under every root,
/// plus the metadata manifest at `<root>/aslDictionaryData.json`.
pub fn generate_dictionary(roots: &[PathBuf], rasterize: bool) -> SignResult<usize> {
    if roots.is_empty() {
        return Err(SignError::validation("at least one output root is required"));
    }

    let mut written = 0usize;
    for entry in &DICTIONARY {
        let svg = card::word_card_svg(entry);
        for root in roots {
            let dir = root.join("dictionary");
            std::fs::create_dir_all(&dir)
                .with_context(|| format!("create output dir '{}'", dir.display()))?;
            let path = dir.join(format!("{}.svg", entry.word));
            std::fs::write(&path, &svg)
                .with_context(|| format!("write svg '{}'", path.display()))?;
        }
        if rasterize {
            let img = raster::svg_to_rgba(svg.as_bytes(), card::CARD_SIZE, card::CARD_SIZE)?;
            for root in roots {
                let path = root.join("dictionary").join(format!("{}.png", entry.word));
                raster::write_png(
                    &path,
                    img.as_raw(),
                    img.width(),
                    img.height(),
                    image::ColorType::Rgba8,
                )?;
            }
        }
        written += 1;
    }

    let manifest = DictionaryManifest::from_entries(&DICTIONARY);
    for root in roots {
        manifest.write(&root.join(MANIFEST_FILE))?;
    }

    info!(written, "dictionary cards and manifest generated");
    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alphabet_writes_26_svgs_per_root() {
        let dir = tempfile::tempdir().unwrap();
        let roots = [dir.path().join("a"), dir.path().join("b")];
        let written =
            generate_alphabet(&roots, AlphabetStyle::Illustrated, false).unwrap();
        assert_eq!(written, 26);
        for root in &roots {
            for letter in 'a'..='z' {
                assert!(root.join("alphabet").join(format!("{letter}.svg")).exists());
            }
        }
    }

    #[test]
    fn dictionary_writes_cards_and_manifest() {
        let dir = tempfile::tempdir().unwrap();
        let roots = [dir.path().to_path_buf()];
        let written = generate_dictionary(&roots, false).unwrap();
        assert_eq!(written, 53);
        assert!(dir.path().join("dictionary/hello.svg").exists());

        let manifest =
            DictionaryManifest::from_path(&dir.path().join(MANIFEST_FILE)).unwrap();
        manifest.validate().unwrap();
        assert_eq!(manifest.total_signs, 53);
    }

    #[test]
    fn empty_root_list_is_rejected() {
        assert!(generate_alphabet(&[], AlphabetStyle::Emoji, false).is_err());
        assert!(generate_dictionary(&[], false).is_err());
    }
}

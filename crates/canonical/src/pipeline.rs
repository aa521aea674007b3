use std::borrow::Cow;

use unicode_normalization::UnicodeNormalization;

use crate::config::NormalizeConfig;
use crate::error::CanonicalError;

/// U+0307, left behind when `İ` is lowercased to `i\u{0307}`.
const COMBINING_DOT_ABOVE: char = '\u{0307}';

/// Normalize a term or query with the default configuration.
///
/// Total over every input: the empty string maps to the empty string and no
/// input is rejected.
///
/// ```rust
/// use canonical::normalize;
///
/// assert_eq!(normalize("Şükür"), "sukur");
/// assert_eq!(normalize("İSTİKBÂL"), "istikbâl");
/// assert_eq!(normalize(""), "");
/// ```
pub fn normalize(input: &str) -> String {
    fold(input, &NormalizeConfig::default())
}

/// Normalize with an explicit configuration.
pub fn normalize_with(input: &str, cfg: &NormalizeConfig) -> Result<String, CanonicalError> {
    cfg.validate()?;
    Ok(fold(input, cfg))
}

/// A configuration that has already been validated.
///
/// Holders can normalize any number of strings without re-checking the
/// config or handling an error per call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Normalizer {
    cfg: NormalizeConfig,
}

impl Normalizer {
    pub fn new(cfg: NormalizeConfig) -> Result<Self, CanonicalError> {
        cfg.validate()?;
        Ok(Self { cfg })
    }

    pub fn config(&self) -> &NormalizeConfig {
        &self.cfg
    }

    pub fn normalize(&self, input: &str) -> String {
        fold(input, &self.cfg)
    }
}

fn fold(input: &str, cfg: &NormalizeConfig) -> String {
    // When enabled, composition runs first so decomposed diacritics reach the fold as one char.
    let composed: Cow<str> = if cfg.compose_unicode {
        Cow::Owned(input.nfc().collect::<String>())
    } else {
        Cow::Borrowed(input)
    };

    let mut out = String::with_capacity(composed.len());
    for ch in composed.chars() {
        if cfg.lowercase {
            // Lowercasing can expand one char into several (İ -> i + U+0307).
            for lower in ch.to_lowercase() {
                push_folded(lower, cfg, &mut out);
            }
        } else {
            push_folded(ch, cfg, &mut out);
        }
    }
    out
}

fn push_folded(ch: char, cfg: &NormalizeConfig, out: &mut String) {
    if !cfg.fold_diacritics {
        out.push(ch);
        return;
    }
    if ch == COMBINING_DOT_ABOVE && out.ends_with('i') {
        return;
    }
    out.push(fold_char(ch));
}

/// Map one of the six Turkish diacritic letters to its ASCII base letter.
fn fold_char(ch: char) -> char {
    match ch {
        'ğ' => 'g',
        'ü' => 'u',
        'ş' => 's',
        'ö' => 'o',
        'ç' => 'c',
        'Ğ' => 'G',
        'Ü' => 'U',
        'Ş' => 'S',
        'Ö' => 'O',
        'Ç' => 'C',
        'İ' => 'I',
        other => other,
    }
}

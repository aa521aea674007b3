// Decoding of the TDK `gts_id` response.
//
// The endpoint answers with a JSON array of dictionary entries ("madde") for
// a known word and with `{"error": "..."}` otherwise. Only the first entry is
// used. Meanings may carry inline HTML, which is removed.
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Deserialize;
use serde_json::Value;

use crate::types::DefinitionResult;

static HTML_TAG: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"</?[^>]+(>|$)").expect("HTML tag pattern is valid"));

#[derive(Debug, Deserialize)]
struct Madde {
    #[serde(default, rename = "anlamlarListe")]
    meanings: Option<Vec<Anlam>>,
    #[serde(default)]
    telaffuz: Option<String>,
}

#[derive(Debug, Deserialize)]
struct Anlam {
    #[serde(default)]
    anlam: Option<String>,
    #[serde(default, rename = "orneklerListe")]
    examples: Option<Vec<Ornek>>,
}

#[derive(Debug, Deserialize)]
struct Ornek {
    #[serde(default)]
    ornek: Option<String>,
}

/// Remove HTML tags, including a tag left open at the end of the text.
pub fn strip_html(text: &str) -> String {
    HTML_TAG.replace_all(text, "").into_owned()
}

/// Decode a `gts_id` response body into a definition.
///
/// Returns `None` for the not-found object, an empty array, or any shape we
/// do not recognise.
pub fn parse_tdk_response(value: Value) -> Option<DefinitionResult> {
    let first = match value {
        Value::Array(items) => items.into_iter().next()?,
        _ => return None,
    };
    let madde: Madde = serde_json::from_value(first).ok()?;

    let anlamlar = madde.meanings.unwrap_or_default();
    let meanings = anlamlar
        .iter()
        .filter_map(|a| a.anlam.as_deref())
        .map(|anlam| strip_html(anlam).trim().to_string())
        .collect();
    let examples = anlamlar
        .into_iter()
        .flat_map(|a| a.examples.unwrap_or_default())
        .filter_map(|o| o.ornek)
        .collect();
    let pronunciation = madde.telaffuz.filter(|p| !p.trim().is_empty());

    Some(DefinitionResult {
        meanings,
        pronunciation,
        examples,
    })
}

use serde::{Deserialize, Serialize};

/// A definition returned by the external dictionary.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DefinitionResult {
    /// Plain-text meanings, HTML removed, in dictionary order.
    pub meanings: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pronunciation: Option<String>,
    /// Usage examples collected across all meanings, in order.
    #[serde(default)]
    pub examples: Vec<String>,
}

const MEANINGS_LABEL: &str = "Anlamları";
const PRONUNCIATION_LABEL: &str = "Telaffuz";
const EXAMPLES_LABEL: &str = "Örnek";
const NO_MEANINGS: &str = "Yok";

/// Render a definition as labelled sections separated by blank lines.
///
/// ```
/// use lookup::{format_definition, DefinitionResult};
///
/// let def = DefinitionResult {
///     meanings: vec!["uydu".into()],
///     pronunciation: None,
///     examples: vec![],
/// };
/// assert_eq!(format_definition(&def), "Anlamları | uydu");
/// ```
pub fn format_definition(def: &DefinitionResult) -> String {
    let mut out = format!("{MEANINGS_LABEL} | ");
    if def.meanings.is_empty() {
        out.push_str(NO_MEANINGS);
    } else {
        out.push_str(&def.meanings.join(", "));
    }

    if let Some(pronunciation) = def.pronunciation.as_deref() {
        out.push_str(&format!("\n\n{PRONUNCIATION_LABEL} | {pronunciation}"));
    }

    if !def.examples.is_empty() {
        out.push_str(&format!("\n\n{EXAMPLES_LABEL} | {}", def.examples.join("; ")));
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_definition_has_all_sections() {
        let def = DefinitionResult {
            meanings: vec!["Olgunlaşma".into(), "Yetkinleşme".into()],
            pronunciation: Some("tekemmü:l".into()),
            examples: vec!["Birinci örnek.".into(), "İkinci örnek.".into()],
        };
        assert_eq!(
            format_definition(&def),
            "Anlamları | Olgunlaşma, Yetkinleşme\n\n\
             Telaffuz | tekemmü:l\n\n\
             Örnek | Birinci örnek.; İkinci örnek."
        );
    }

    #[test]
    fn missing_meanings_render_as_yok() {
        let def = DefinitionResult::default();
        assert_eq!(format_definition(&def), "Anlamları | Yok");
    }

    #[test]
    fn examples_without_pronunciation() {
        let def = DefinitionResult {
            meanings: vec!["ölüm".into()],
            pronunciation: None,
            examples: vec!["Ecel geldi cihana.".into()],
        };
        assert_eq!(
            format_definition(&def),
            "Anlamları | ölüm\n\nÖrnek | Ecel geldi cihana."
        );
    }

    #[test]
    fn serializes_without_absent_pronunciation() {
        let def = DefinitionResult {
            meanings: vec!["uydu".into()],
            pronunciation: None,
            examples: vec![],
        };
        let json = serde_json::to_string(&def).expect("serialize");
        assert_eq!(json, r#"{"meanings":["uydu"],"examples":[]}"#);
    }
}

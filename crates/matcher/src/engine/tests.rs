use super::*;
use std::sync::Mutex;
use std::time::Duration;

use canonical::NormalizeConfig;

use crate::metrics::{set_search_metrics, SearchMetrics};
use crate::types::OutcomeKind;

const GLOSSARY: &str = r#"[
    {"tekemmül": "olgunlaşma"},
    {"techir": "erteleme"},
    {"ecel, mevt": "ölüm"},
    {"peyk": "uydu"},
    {"şükran": "teşekkür, minnet"},
    {"zail": "geçici", "avdet": "dönüş"}
]"#;

fn glossary() -> EntryStore {
    EntryStore::from_json_str(GLOSSARY).expect("valid glossary")
}

fn old_terms(outcome: &SearchOutcome) -> Vec<String> {
    outcome
        .matches()
        .expect("search should run")
        .rows()
        .map(|(old, _)| old.to_string())
        .collect()
}

#[test]
fn end_to_end_scenario_matches_new_term() {
    let store = EntryStore::from_json_str(
        r#"[{"tekemmül": "olgunlaşma"}, {"techir": "erteleme"}]"#,
    )
    .expect("valid glossary");
    let outcome = search("er", &store);
    let rows: Vec<(&str, &str)> = outcome.matches().expect("matches").rows().collect();
    assert_eq!(rows, vec![("techir", "erteleme")]);
}

#[test]
fn case_variants_all_match() {
    let store = glossary();
    for query in ["PEYK", "Peyk", "peyk"] {
        assert_eq!(old_terms(&search(query, &store)), vec!["peyk"], "query {query}");
    }
}

#[test]
fn substring_of_old_term_matches() {
    let store = glossary();
    assert!(old_terms(&search("ey", &store)).contains(&"peyk".to_string()));
}

#[test]
fn synonym_token_matches_whole_entry() {
    let store = glossary();
    let outcome = search("mevt", &store);
    let rows: Vec<(&str, &str)> = outcome.matches().expect("matches").rows().collect();
    assert_eq!(rows, vec![("ecel, mevt", "ölüm")]);
}

#[test]
fn query_spanning_separator_matches_whole_field() {
    let store = glossary();
    assert_eq!(old_terms(&search("ecel, me", &store)), vec!["ecel, mevt"]);
}

#[test]
fn diacritic_free_query_matches_accented_terms() {
    let store = glossary();
    assert_eq!(old_terms(&search("olum", &store)), vec!["ecel, mevt"]);
    assert_eq!(old_terms(&search("TEŞEKKÜR", &store)), vec!["şükran"]);
    assert_eq!(old_terms(&search("sukran", &store)), vec!["şükran"]);
}

#[test]
fn empty_and_whitespace_queries_are_no_active_query() {
    let store = glossary();
    for query in ["", "   ", "\t\n"] {
        assert_eq!(search(query, &store), SearchOutcome::NoActiveQuery);
    }
}

#[test]
fn zero_matches_is_empty_result_not_sentinel() {
    let store = glossary();
    let outcome = search("xyz", &store);
    assert_eq!(outcome.kind(), OutcomeKind::NoMatches);
    assert!(outcome.matches().expect("search ran").is_empty());
}

#[test]
fn query_is_trimmed_before_matching() {
    let store = glossary();
    assert_eq!(old_terms(&search("  peyk  ", &store)), vec!["peyk"]);
}

#[test]
fn results_preserve_store_order() {
    let store = EntryStore::from_json_str(
        r#"[{"alfa": "bir"}, {"beta": "iki"}, {"gama": "bir daha"}]"#,
    )
    .expect("valid glossary");
    assert_eq!(old_terms(&search("bir", &store)), vec!["alfa", "gama"]);
}

#[test]
fn single_character_query_matches_every_containing_term() {
    let store = glossary();
    let hits = old_terms(&search("k", &store));
    assert_eq!(hits, vec!["tekemmül", "peyk", "şükran"]);
}

#[test]
fn multi_field_record_matches_as_unit() {
    let store = glossary();
    let outcome = search("donus", &store);
    let rows: Vec<(&str, &str)> = outcome.matches().expect("matches").rows().collect();
    assert_eq!(rows, vec![("zail", "geçici"), ("avdet", "dönüş")]);
    assert_eq!(outcome.hit_count(), 1);
}

#[test]
fn search_is_idempotent() {
    let store = glossary();
    let matcher = Matcher::new(store);
    let first = matcher.search("e");
    let second = matcher.search("e");
    assert_eq!(first, second);
}

#[test]
fn failed_load_is_unavailable_for_every_query() {
    let matcher = Matcher::from_load(Err(LoadError::Unreachable("offline".into())));
    assert!(!matcher.is_available());
    for query in ["peyk", "", "   ", "x"] {
        match matcher.search(query) {
            SearchOutcome::Unavailable(LoadError::Unreachable(msg)) => assert_eq!(msg, "offline"),
            other => panic!("expected unavailable, got {other:?}"),
        }
    }
}

#[test]
fn matcher_and_free_function_agree() {
    let store = glossary();
    let matcher = Matcher::new(store.clone());
    for query in ["er", "mevt", "Ş", "xyz", ""] {
        assert_eq!(matcher.search(query), search(query, &store));
    }
}

#[test]
fn combining_mark_does_not_block_base_letter_match() {
    let store = EntryStore::from_json_str("[{\"a\u{0307}b\": \"x\"}]").expect("valid glossary");
    let outcome = search("a", &store);
    assert_eq!(outcome.hit_count(), 1);
}

#[test]
fn custom_separator_splits_synonyms() {
    let store = EntryStore::from_json_str(r#"[{"ecel; mevt": "ölüm"}]"#).expect("valid");
    let matcher = Matcher::new(store)
        .with_config(MatchConfig {
            synonym_separator: ';',
            ..MatchConfig::default()
        })
        .expect("valid config");
    assert_eq!(matcher.search("mevt").hit_count(), 1);
}

#[test]
fn config_without_fold_is_diacritic_sensitive() {
    let matcher = Matcher::new(glossary())
        .with_config(MatchConfig {
            normalizer: NormalizeConfig {
                fold_diacritics: false,
                ..NormalizeConfig::default()
            },
            ..MatchConfig::default()
        })
        .expect("valid config");
    assert_eq!(matcher.search("olum").kind(), OutcomeKind::NoMatches);
    assert_eq!(matcher.search("ölüm").hit_count(), 1);
}

#[test]
fn invalid_config_rejected() {
    let err = Matcher::new(glossary())
        .with_config(MatchConfig {
            synonym_separator: 'a',
            ..MatchConfig::default()
        })
        .expect_err("invalid separator");
    assert!(matches!(err, MatchError::InvalidConfig(_)));
}

#[test]
fn entry_predicate_uses_normalized_query() {
    let normalizer = Normalizer::default();
    let entry = Entry::new("ecel, mevt", "ölüm");
    assert!(entry_matches(&entry, "olu", &normalizer));
    assert!(entry_matches(&entry, "mevt", &normalizer));
    assert!(!entry_matches(&entry, "peyk", &normalizer));
}

#[derive(Default)]
struct RecordingMetrics {
    calls: Mutex<Vec<(OutcomeKind, usize)>>,
}

impl SearchMetrics for RecordingMetrics {
    fn record_search(&self, kind: OutcomeKind, _latency: Duration, hit_count: usize) {
        self.calls
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push((kind, hit_count));
    }
}

#[test]
fn metrics_recorder_sees_each_search() {
    let recorder = Arc::new(RecordingMetrics::default());
    let installed: Arc<dyn SearchMetrics> = recorder.clone();
    set_search_metrics(Some(installed));

    let matcher = Matcher::new(glossary());
    matcher.search("peyk");
    matcher.search("   ");

    set_search_metrics(None);

    let calls = recorder.calls.lock().expect("lock").clone();
    // Other tests may run concurrently with the recorder installed.
    assert!(calls.contains(&(OutcomeKind::Matched, 1)));
    assert!(calls.contains(&(OutcomeKind::NoActiveQuery, 0)));
}

//! Keyword gate behavior.

use fuzzline::{QueryGate, DEFAULT_KEYWORDS};

#[test]
fn test_default_gate_accepts_questions() {
    let gate = QueryGate::default();
    assert!(gate.accept("What evicts the entry?"));
    assert!(gate.accept("how do I deploy"));
    assert!(gate.accept("Explain: eviction"));
}

#[test]
fn test_default_gate_rejects_chatter() {
    let gate = QueryGate::default();
    assert!(!gate.accept("xyzzy plugh"));
    assert!(!gate.accept("lol nice"));
    assert!(!gate.accept(""));
}

#[test]
fn test_single_word_keyword_needs_whole_token() {
    let gate = QueryGate::new(["how"]);
    assert!(gate.accept("so, how?"));
    assert!(!gate.accept("however it goes"));
    assert!(!gate.accept("showhow"));
}

#[test]
fn test_multi_word_keyword_is_substring() {
    let gate = QueryGate::new(["how to"]);
    assert!(gate.accept("how to deploy"));
    // Substring containment crosses word boundaries.
    assert!(gate.accept("show tomorrow"));
    assert!(!gate.accept("how do I"));
}

#[test]
fn test_mentions_do_not_count() {
    let gate = QueryGate::new(["what"]);
    assert!(!gate.accept("<@123> @what"));
    assert!(gate.accept("<@123> what now"));
}

#[test]
fn test_empty_list_accepts_everything() {
    assert!(QueryGate::new(Vec::<String>::new()).accept("xyzzy"));
    assert!(QueryGate::accept_all().accept(""));
}

#[test]
fn test_keywords_are_normalized() {
    let gate = QueryGate::new(["  HOW ", ""]);
    assert_eq!(gate.keywords(), &["how".to_string()]);
    assert_eq!(QueryGate::default().keywords().len(), DEFAULT_KEYWORDS.len());
}

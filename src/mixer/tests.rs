use super::*;

fn t(title: &str, bpm: i32) -> AudioTrack {
    AudioTrack::mp3(title, vec!["Tester".into()], 200, bpm, 320)
}

#[test]
fn first_load_lands_on_deck_a() {
    let mut engine = MixingEngine::new(false, 5);
    let deck = engine.load_track_to_deck(&t("A", 120)).unwrap();

    assert_eq!(deck, Deck::A);
    assert_eq!(engine.active_deck(), Deck::A);
    assert_eq!(engine.deck_track(Deck::A).unwrap().title(), "A");
    assert!(engine.deck_track(Deck::B).is_none());

    let loaded = engine.deck_track(Deck::A).unwrap();
    assert!(loaded.is_loaded());
    assert!(loaded.is_beatgrid_ready());
}

#[test]
fn second_load_switches_decks_and_frees_the_old_active_one() {
    let mut engine = MixingEngine::new(false, 5);
    engine.load_track_to_deck(&t("A", 120)).unwrap();
    let deck = engine.load_track_to_deck(&t("B", 122)).unwrap();

    assert_eq!(deck, Deck::B);
    assert_eq!(engine.active_deck(), Deck::B);
    assert_eq!(engine.deck_track(Deck::B).unwrap().title(), "B");
    assert!(engine.deck_track(Deck::A).is_none());
}

#[test]
fn loads_keep_alternating_between_decks() {
    let mut engine = MixingEngine::new(false, 5);
    engine.load_track_to_deck(&t("A", 120)).unwrap();
    engine.load_track_to_deck(&t("B", 120)).unwrap();
    let deck = engine.load_track_to_deck(&t("C", 120)).unwrap();

    assert_eq!(deck, Deck::A);
    assert_eq!(engine.deck_track(Deck::A).unwrap().title(), "C");
    assert!(engine.deck_track(Deck::B).is_none());
}

#[test]
fn auto_sync_pulls_out_of_tolerance_bpm_to_the_floor_average() {
    let mut engine = MixingEngine::new(true, 5);
    engine.load_track_to_deck(&t("B", 128)).unwrap();
    engine.load_track_to_deck(&t("C", 90)).unwrap();

    // |128 - 90| > 5, so C is installed at (128 + 90) / 2.
    assert_eq!(engine.deck_track(engine.active_deck()).unwrap().bpm(), 109);
}

#[test]
fn auto_sync_leaves_in_tolerance_bpm_alone() {
    let mut engine = MixingEngine::new(true, 5);
    engine.load_track_to_deck(&t("A", 128)).unwrap();
    engine.load_track_to_deck(&t("B", 125)).unwrap();

    assert_eq!(engine.deck_track(engine.active_deck()).unwrap().bpm(), 125);
}

#[test]
fn auto_sync_never_applies_to_the_first_load() {
    let mut engine = MixingEngine::new(true, 5);
    engine.load_track_to_deck(&t("A", 90)).unwrap();
    assert_eq!(engine.deck_track(Deck::A).unwrap().bpm(), 90);
}

#[test]
fn syncing_mutates_the_deck_clone_not_the_source() {
    let mut engine = MixingEngine::new(true, 5);
    engine.load_track_to_deck(&t("A", 128)).unwrap();

    let source = t("B", 90);
    engine.load_track_to_deck(&source).unwrap();
    assert_eq!(source.bpm(), 90);
}

#[test]
fn can_mix_is_false_with_an_empty_active_deck() {
    let engine = MixingEngine::new(false, 5);
    assert!(!engine.can_mix(&t("A", 120)));
}

#[test]
fn can_mix_compares_against_the_active_deck_within_tolerance() {
    let mut engine = MixingEngine::new(false, 5);
    engine.load_track_to_deck(&t("A", 120)).unwrap();

    assert!(engine.can_mix(&t("B", 125)));
    assert!(engine.can_mix(&t("B", 115)));
    assert!(!engine.can_mix(&t("B", 126)));
}

#[test]
fn sync_bpm_without_an_active_track_is_a_noop() {
    let engine = MixingEngine::new(false, 5);
    let mut candidate = t("A", 90);
    engine.sync_bpm(&mut candidate);
    assert_eq!(candidate.bpm(), 90);
}

#[test]
fn clone_failure_leaves_both_decks_untouched() {
    let mut engine = MixingEngine::new(false, 5);
    engine.load_track_to_deck(&t("A", 120)).unwrap();

    let unclonable = AudioTrack::mp3("", vec![], 10, 100, 128);
    assert!(engine.load_track_to_deck(&unclonable).is_err());

    assert_eq!(engine.active_deck(), Deck::A);
    assert_eq!(engine.deck_track(Deck::A).unwrap().title(), "A");
    assert!(engine.deck_track(Deck::B).is_none());
}

#[test]
fn status_renders_deck_slots_and_active_index() {
    let mut engine = MixingEngine::new(false, 5);
    engine.load_track_to_deck(&t("A", 120)).unwrap();

    let rendered = engine.status().to_string();
    assert!(rendered.contains("Deck 0: A"));
    assert!(rendered.contains("Deck 1: [EMPTY]"));
    assert!(rendered.contains("Active Deck: 0"));
}

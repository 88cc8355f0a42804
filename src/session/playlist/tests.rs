use super::*;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::collections::HashSet;

const SAMPLE: &str = r#"{
    "Math": {
        "Algebra": [{"q": "a1", "a": "-"}, {"q": "a2", "a": "-"}],
        "Geometry": [{"q": "g1", "a": "-"}, {"q": "g2", "a": "-"}, {"q": "g3", "a": "-"}]
    },
    "History": {
        "Rome": [{"q": "r1", "a": "-"}]
    }
}"#;

fn questions(deck: &Deck, playlist: &Playlist) -> Vec<String> {
    playlist
        .iter()
        .map(|id| deck.get(id).unwrap().question.clone())
        .collect()
}

#[test]
fn empty_selection_builds_empty_playlist() {
    let deck = Deck::from_json(SAMPLE).unwrap();
    let playlist = Playlist::build(&deck, &[] as &[ChapterKey]);
    assert!(playlist.is_empty());
}

#[test]
fn concatenates_chapters_in_given_order() {
    let deck = Deck::from_json(SAMPLE).unwrap();
    let chapters = [
        ChapterKey::new("History", "Rome"),
        ChapterKey::new("Math", "Algebra"),
    ];
    let playlist = Playlist::build(&deck, &chapters);
    assert_eq!(questions(&deck, &playlist), ["r1", "a1", "a2"]);
}

#[test]
fn skips_unknown_chapters() {
    let deck = Deck::from_json(SAMPLE).unwrap();
    let chapters = [
        ChapterKey::new("Math", "Calculus"),
        ChapterKey::new("Math", "Geometry"),
    ];
    let playlist = Playlist::build(&deck, &chapters);
    assert_eq!(questions(&deck, &playlist), ["g1", "g2", "g3"]);
}

#[test]
fn shuffle_is_a_permutation() {
    let deck = Deck::from_json(SAMPLE).unwrap();
    let chapters: Vec<ChapterKey> = deck.chapter_keys().collect();
    let original = Playlist::build(&deck, &chapters);
    let mut shuffled = original.clone();
    shuffled.shuffle_with(&mut StdRng::seed_from_u64(99));

    assert_eq!(shuffled.len(), original.len());
    let before: HashSet<CardId> = original.iter().collect();
    let after: HashSet<CardId> = shuffled.iter().collect();
    assert_eq!(before, after);
}

#[test]
fn shuffle_handles_tiny_playlists() {
    let deck = Deck::from_json(SAMPLE).unwrap();
    let mut empty = Playlist::build(&deck, &[] as &[ChapterKey]);
    empty.shuffle();
    assert!(empty.is_empty());

    let mut single = Playlist::build(&deck, &[ChapterKey::new("History", "Rome")]);
    single.shuffle();
    assert_eq!(questions(&deck, &single), ["r1"]);
}

#[test]
fn shuffle_positions_are_uniform() {
    let deck = Deck::from_json(SAMPLE).unwrap();
    let chapters: Vec<ChapterKey> = deck.chapter_keys().collect();
    let original = Playlist::build(&deck, &chapters);
    let n = original.len();
    let runs = 60_000;

    let mut counts = vec![vec![0usize; n]; n];
    let mut rng = rand::thread_rng();
    for _ in 0..runs {
        let mut playlist = original.clone();
        playlist.shuffle_with(&mut rng);
        for (position, id) in playlist.iter().enumerate() {
            let element = original.iter().position(|o| o == id).unwrap();
            counts[element][position] += 1;
        }
    }

    let expected = runs as f64 / n as f64;
    for row in &counts {
        for &count in row {
            let deviation = (count as f64 - expected).abs() / expected;
            assert!(deviation < 0.05, "Biased shuffle: {:?}", counts);
        }
    }
}

#[test]
fn seeded_shuffle_is_reproducible() {
    let deck = Deck::from_json(SAMPLE).unwrap();
    let chapters: Vec<ChapterKey> = deck.chapter_keys().collect();
    let mut first = Playlist::build(&deck, &chapters);
    let mut second = first.clone();
    first.shuffle_with(&mut StdRng::seed_from_u64(7));
    second.shuffle_with(&mut StdRng::seed_from_u64(7));
    assert_eq!(first, second);
}

use crate::{Alphabet, AlphabetError, SENTINEL};

#[test]
fn symbols_follow_letter_order() {
    let alpha = Alphabet::new("mississippi").unwrap();

    assert_eq!(alpha.symbol_count(), 5);
    assert_eq!(alpha.symbol('i'), Some(1));
    assert_eq!(alpha.symbol('m'), Some(2));
    assert_eq!(alpha.symbol('p'), Some(3));
    assert_eq!(alpha.symbol('s'), Some(4));
    assert_eq!(alpha.symbol('x'), None);
}

#[test]
fn map_string_appends_sentinel() {
    let seq = Alphabet::map_string("abba").unwrap();

    assert_eq!(seq.symbols(), &[1, 2, 2, 1, SENTINEL]);
    assert_eq!(seq.len(), 5);
    assert_eq!(seq.text_len(), 4);
    assert!(!seq.is_empty());
}

#[test]
fn empty_text_is_just_the_sentinel() {
    let seq = Alphabet::map_string("").unwrap();

    assert_eq!(seq.symbols(), &[SENTINEL]);
    assert!(seq.is_empty());
    assert_eq!(seq.alphabet().symbol_count(), 1);
}

#[test]
fn decode_shows_sentinel() {
    let seq = Alphabet::map_string("banana").unwrap();

    assert_eq!(seq.to_string(), "banana$");
    assert_eq!(seq.alphabet().decode(&seq.symbols()[3..]), "ana$");
}

#[test]
fn sentinel_has_no_letter() {
    let alpha = Alphabet::new("ab").unwrap();

    assert_eq!(alpha.letter(SENTINEL), None);
    assert_eq!(alpha.letter(1), Some('a'));
    assert_eq!(alpha.letter(3), None);
}

#[test]
fn encode_rejects_unknown_letters() {
    let alpha = Alphabet::new("acgt").unwrap();

    assert_eq!(alpha.encode("gatc"), Ok(vec![3, 1, 4, 2]));
    assert_eq!(alpha.encode("gaxc"), Err(AlphabetError::UnknownLetter('x')));
    assert_eq!(alpha.encode("a\0"), Err(AlphabetError::UnknownLetter('\0')));
}

#[test]
fn nul_is_reserved() {
    assert_eq!(
        Alphabet::new("ab\0c").unwrap_err(),
        AlphabetError::ReservedSentinel
    );
}

#[test]
fn too_many_letters() {
    let text: String = (0..300u32).filter_map(|i| char::from_u32(0x100 + i)).collect();

    assert_eq!(
        Alphabet::new(&text).unwrap_err(),
        AlphabetError::TooManyLetters(300)
    );
}

#[test]
fn largest_alphabet_fits() {
    let text: String = (0..255u32).filter_map(|i| char::from_u32(0x100 + i)).collect();
    let alpha = Alphabet::new(&text).unwrap();

    assert_eq!(alpha.symbol_count(), 256);
    assert_eq!(alpha.symbol('\u{1fe}'), Some(255));
}

#[test]
fn unicode_letters() {
    let seq = Alphabet::map_string("ßäß").unwrap();

    assert_eq!(seq.symbols(), &[1, 2, 1, SENTINEL]);
    assert_eq!(seq.to_string(), "ßäß$");
}

use fuel_digest::{Direction, PhraseDictionary, PhraseEntry, Translator};

fn translator(pairs: &[(&str, &str)]) -> Translator {
    let entries = pairs.iter().map(|(s, t)| PhraseEntry::new(*s, *t)).collect();
    Translator::new(&PhraseDictionary::new(entries))
}

#[test]
fn longest_phrase_takes_precedence() {
    let t = translator(&[("Середня", "Average"), ("Середня ціна", "Average Price")]);
    assert_eq!(
        t.translate("Середня ціна палива", Direction::ToTarget),
        "Average Price палива"
    );
}

#[test]
fn longest_phrase_takes_precedence_regardless_of_definition_order() {
    let t = translator(&[("Середня ціна", "Average Price"), ("Середня", "Average")]);
    assert_eq!(
        t.translate("Середня ціна палива", Direction::ToTarget),
        "Average Price палива"
    );
}

#[test]
fn capitalisation_of_the_match_is_preserved() {
    let t = translator(&[("ціна", "price")]);
    assert_eq!(t.translate("Ціна", Direction::ToTarget), "Price");
    assert_eq!(t.translate("ціна", Direction::ToTarget), "price");
}

#[test]
fn no_substitution_inside_a_longer_word() {
    let t = Translator::builtin();
    assert_eq!(t.translate("Газпром", Direction::ToTarget), "Газпром");
    assert_eq!(t.translate("Діагностика", Direction::ToTarget), "Діагностика");
}

#[test]
fn translated_text_is_stable_under_a_second_pass() {
    let t = Translator::builtin();
    for text in [
        "Середні ціни на пальне по Україні",
        "Ціна, грн.",
        "Бензин A-95 преміум",
        "Газ автомобільний",
        "Дата / Зміна / Вартість",
    ] {
        let once = t.translate(text, Direction::ToTarget);
        assert_eq!(t.translate(&once, Direction::ToTarget), once, "{text}");

        let back = t.translate(&once, Direction::ToSource);
        assert_eq!(t.translate(&back, Direction::ToSource), back, "{once}");
    }
}

#[test]
fn chained_keys_are_not_idempotent() {
    // "b" is both a translation and a key in the same direction
    let t = translator(&[("b", "c"), ("a", "b")]);
    let once = t.translate("a", Direction::ToTarget);
    assert_eq!(once, "b");
    assert_eq!(t.translate(&once, Direction::ToTarget), "c");
}

#[test]
fn round_trip_may_lose_information() {
    let t = Translator::builtin();

    let english = t.translate("Ціна, грн", Direction::ToTarget);
    assert_eq!(english, "Price, UAH");

    // "грн" and "грн." share "UAH"; the inverse keeps the later one, and
    // the capitalised "UAH" titlecases it
    let back = t.translate(&english, Direction::ToSource);
    assert_eq!(back, "Ціна, Грн.");
    assert_ne!(back, "Ціна, грн");
}

#[test]
fn builtin_dictionary_reports_its_collision() {
    let dictionary = PhraseDictionary::builtin();
    assert!(dictionary
        .collisions()
        .iter()
        .any(|c| c.target == "UAH" && c.overwritten == "грн" && c.kept == "грн."));
    assert_eq!(dictionary.lookup("UAH", Direction::ToSource), Some("грн."));
}

#[test]
fn strict_dictionary_rejects_collisions() {
    let entries = vec![PhraseEntry::new("грн", "UAH"), PhraseEntry::new("грн.", "UAH")];
    assert!(matches!(
        PhraseDictionary::strict(entries),
        Err(fuel_digest::Error::DictionaryCollision { .. })
    ));
}

#[test]
fn english_to_ukrainian_direction() {
    let t = Translator::builtin();
    assert_eq!(
        t.translate("Average fuel prices in Ukraine", Direction::ToSource),
        "Середні ціни на пальне по Україні"
    );
    assert_eq!(t.translate("Fuel type", Direction::ToSource), "Вид палива");
}

#[test]
fn direction_from_locale_and_name() {
    assert_eq!(Direction::for_locale("uk-UA"), Direction::ToSource);
    assert_eq!(Direction::for_locale("en-US"), Direction::ToTarget);
    assert_eq!("ua".parse::<Direction>().ok(), Some(Direction::ToSource));
    assert!("fr".parse::<Direction>().is_err());
}

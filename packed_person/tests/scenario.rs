use packed_person::prelude::*;

const NAME: &str = "aaaaaaaaaaaaa_bbbbbbbbbbbbb_cccccccccccccc_";

#[test]
fn full_person_roundtrip() {
    assert_eq!(NAME.len(), 43);
    assert!(GamePerson::SIZE <= 64);

    let options = [
        with_name(NAME),
        with_coordinates(i32::MIN, i32::MAX, 0),
        with_gold(i32::MAX),
        with_mana(1000),
        with_health(1000),
        with_respect(10),
        with_strength(10),
        with_experience(10),
        with_level(10),
        with_house(),
        with_family(),
        with_type(PersonType::Builder),
    ];

    let person = GamePerson::new(options);

    assert_eq!(person.name(), &NAME[..42]);
    assert_eq!(person.x(), i32::MIN);
    assert_eq!(person.y(), i32::MAX);
    assert_eq!(person.z(), 0);
    assert_eq!(person.gold(), i32::MAX);
    assert_eq!(person.mana(), 1000);
    assert_eq!(person.health(), 1000);
    assert_eq!(person.respect(), 10);
    assert_eq!(person.strength(), 10);
    assert_eq!(person.experience(), 10);
    assert_eq!(person.level(), 10);
    assert!(person.has_house());
    assert!(person.has_family());
    assert!(!person.has_gun());
    assert_eq!(person.person_type(), PersonType::Builder);
    assert_eq!(person.size_in_bytes(), 64);
}

#[test]
fn reversed_options_give_same_record() {
    let options = vec![
        with_name("pell"),
        with_coordinates(7, 8, 9),
        with_gold(-1),
        with_mana(1),
        with_health(1022),
        with_respect(1),
        with_strength(2),
        with_experience(3),
        with_level(4),
        with_gun(),
        with_type(PersonType::Blacksmith),
    ];
    let forward = GamePerson::new(options.iter().copied());
    let backward = GamePerson::new(options.into_iter().rev());
    assert_eq!(forward, backward);
}

#[test]
fn record_survives_byte_copy() {
    let person = GamePerson::builder()
        .options([with_name("tamsin"), with_health(512), with_family()])
        .build();
    let bytes = person.as_bytes().to_vec();
    let copy = GamePerson::from_bytes(&bytes).unwrap();
    assert_eq!(copy, person);
    assert_eq!(copy.name(), "tamsin");
}

#[test]
fn unchecked_overflow_corrupts_neighbours() {
    // Baseline behaviour without range checks: the extra bit of 16 lands in
    // strength.
    let person = GamePerson::new([with_respect(16), with_strength(3)]);
    assert_eq!(person.strength(), 3);

    let person = GamePerson::new([with_strength(2), with_respect(16)]);
    assert_eq!(person.respect(), 0);
    assert_eq!(person.strength(), 3);

    let person = GamePerson::new([with_mana(0), with_health(2048)]);
    assert_eq!(person.health(), 0);
    assert_eq!(person.mana(), 0);
    assert_eq!(person.as_bytes()[20] & 0b0011_1100, 0b0000_1000);
}

#[test]
fn checked_options_refuse_overflow() {
    assert!(try_with_respect(16).is_err());
    assert!(try_with_health(2048).is_err());
    let err = GamePerson::builder().try_option(try_with_mana(5000)).unwrap_err();
    assert_eq!(err.to_string(), "mana value 5000 is out of range (max 1023)");
}

#[test]
fn truncated_multibyte_name_is_lossy() {
    // 41 ASCII bytes then a 2-byte character split at the boundary
    let name = format!("{}é", "x".repeat(41));
    let person = GamePerson::new([with_name(&name)]);
    assert_eq!(person.name_bytes().len(), 42);
    assert!(person.name().ends_with('\u{FFFD}'));
}

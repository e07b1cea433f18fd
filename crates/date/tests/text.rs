use date_time::{Date, InvalidDate, Weekday};

#[test]
fn end_to_end_slash() {
    let d: Date = "15/6/2023".parse().unwrap();
    assert_eq!(d.day(), 15);
    assert_eq!(d.month(), 6);
    assert_eq!(d.year(), 2023);
    assert_eq!(d.weekday(), Weekday::Thursday);
    assert_eq!(d.to_string(), "15 June 2023 Thursday");
}

#[test]
fn rejects_illegal_dates() {
    assert!(matches!(
        Date::parse_slash("31/2/2023"),
        Err(InvalidDate::NoSuchDate { .. })
    ));
    assert!(matches!(
        Date::parse_slash("29/2/2023"),
        Err(InvalidDate::NoSuchDate { .. })
    ));
    assert!(Date::parse_slash("29/2/2024").is_ok());
}

#[test]
fn separator_count_checked_before_values() {
    assert!(matches!(
        Date::parse_slash("99/99"),
        Err(InvalidDate::WrongFormat { .. })
    ));
    assert!(matches!(
        Date::parse_token("99.99.99.99"),
        Err(InvalidDate::WrongFormat { .. })
    ));
}

#[test]
fn token_reads_first_word_only() {
    let d = Date::parse_token("24.12.2023 rest of the line").unwrap();
    assert_eq!(d.to_string(), "24 December 2023 Sunday");
}

#[test]
fn slash_roundtrip_for_random_dates() {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    let mut rng = StdRng::seed_from_u64(2024);
    for _ in 0..1000 {
        let d = Date::random(&mut rng);
        assert_eq!(Date::parse_slash(&d.to_slash_string()).unwrap(), d);
        assert_eq!(Date::parse_token(&d.to_slash_string()).unwrap(), d);
    }
}

#[test]
fn timestamp_goes_through_ctime_text() {
    let d = Date::from_timestamp(1_709_596_800).unwrap();
    assert_eq!(d.to_string(), "5 March 2024 Tuesday");
    assert_eq!(Date::from_ctime("Tue Mar  5 00:00:00 2024").unwrap(), d);
}

#[test]
fn errors_have_messages() {
    let err = Date::parse_slash("31/2/2023").unwrap_err();
    assert!(err.to_string().starts_with("there is no such date"));
    let err = Date::parse_token("2023").unwrap_err();
    assert!(err.to_string().starts_with("wrong input format"));
}

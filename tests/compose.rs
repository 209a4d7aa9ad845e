use chrono::NaiveDate;
use persogen::models::DocumentFormat;
use persogen::processing::Placeholders;
use persogen::validation::RESTRICTED_ALPHABET;
use persogen::{compose, MachineReadableZone, MrzError, MrzVerifier};
use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn sample_card() {
    let text = compose(
        "L01X",
        "12345",
        ymd(1990, 5, 15),
        ymd(2030, 5, 15),
        ymd(2024, 5, 15),
    )
    .unwrap();
    let lines: Vec<&str> = text.split('\n').collect();

    assert_eq!(lines.len(), 3);
    assert!(lines[0].starts_with("IDD<<L01X12345"));
    assert_eq!(&lines[0][14..15], "2");
    assert_eq!(&lines[0][15..], "<".repeat(15));
    assert_eq!(lines[2], "MUSTERMANN<<ERIKA<<<<<<<<<<<<<");
}

#[test]
fn first_character_z_always_fails() {
    for code in ["Z01X", "ZLLL", "Z000"] {
        let result = compose(
            code,
            "12345",
            ymd(1990, 5, 15),
            ymd(2030, 5, 15),
            ymd(2024, 5, 15),
        );
        assert!(matches!(result, Err(MrzError::InvalidFirstCharacter { .. })));
    }
}

#[test]
fn lowercase_document_number_fails() {
    let result = compose(
        "L01X",
        "1234x",
        ymd(1990, 5, 15),
        ymd(2030, 5, 15),
        ymd(2024, 5, 15),
    );
    assert!(matches!(result, Err(MrzError::InvalidCharacter { character: 'x', .. })));
}

#[test]
fn placeholders_compose_and_verify() {
    let today = ymd(2026, 10, 16);
    let mut rng = StdRng::seed_from_u64(2024);
    for _ in 0..100 {
        let p = Placeholders::generate(&mut rng, today).unwrap();
        let mrz = MachineReadableZone::new(
            p.authority_code.as_str(),
            p.document_number.as_str(),
            p.birth_date,
            p.expiry_date,
            p.issuing_date,
        )
        .unwrap();
        let result = MrzVerifier::new().verify(&mrz.to_string()).unwrap();
        assert!(result.is_valid, "{}: {:?}", mrz, result.issues);
    }
}

fn restricted_string(len: usize) -> impl Strategy<Value = String> {
    let chars: Vec<char> = RESTRICTED_ALPHABET.chars().collect();
    prop::collection::vec(prop::sample::select(chars), len)
        .prop_map(|cs| cs.into_iter().collect())
}

fn authority_code() -> impl Strategy<Value = String> {
    (prop::sample::select("LMNPRTVWXY".chars().collect::<Vec<_>>()), restricted_string(3))
        .prop_map(|(first, rest)| format!("{}{}", first, rest))
}

fn date() -> impl Strategy<Value = NaiveDate> {
    (1900i32..2100, 1u32..=12, 1u32..=28).prop_map(|(y, m, d)| ymd(y, m, d))
}

proptest! {
    #[test]
    fn lines_are_always_thirty_wide(
        code in authority_code(),
        number in restricted_string(5),
        birth in date(),
        expiry in date(),
        issued in date(),
    ) {
        let mrz = MachineReadableZone::new(&code, &number, birth, expiry, issued).unwrap();
        let format = DocumentFormat::TD1;
        prop_assert_eq!(mrz.lines().len(), format.mrz_lines());
        for line in mrz.lines() {
            prop_assert_eq!(line.len(), format.mrz_chars_per_line());
        }
    }

    #[test]
    fn composition_is_idempotent(
        code in authority_code(),
        number in restricted_string(5),
        birth in date(),
        expiry in date(),
        issued in date(),
    ) {
        let a = compose(&code, &number, birth, expiry, issued).unwrap();
        let b = compose(&code, &number, birth, expiry, issued).unwrap();
        prop_assert_eq!(a, b);
    }

    #[test]
    fn composed_output_verifies(
        code in authority_code(),
        number in restricted_string(5),
        birth in date(),
        expiry in date(),
        issued in date(),
    ) {
        let text = compose(&code, &number, birth, expiry, issued).unwrap();
        let result = MrzVerifier::new().verify(&text).unwrap();
        prop_assert!(result.is_valid, "{:?}", result.issues);
    }
}

#![allow(clippy::unwrap_used)]

use paircode::{
    add_check_char, compute_check_char, generate_pairing_code, int_to_pairing_code,
    is_valid_pairing_code, is_valid_pairing_code_char, normalize, pairing_code_to_int,
    BITS_PER_CHARACTER, MIN_PAIRING_CODE_LENGTH, PAIRING_CODE_CHARS,
};

const VALID_PAIRING_CODES: [&str; 6] = [
    "NESTUS",
    "TW1TRE",
    "KS7WD2",
    "G532DM",
    "WFFAYAM6W9S9YWXFB62",
    "KLSHDFP987Y2934P58R7USJHDFKLJSHDKLAJHSDGV",
];

fn check_pairing_code_chars(code: &str) {
    for ch in code.chars() {
        assert!(
            PAIRING_CODE_CHARS.contains(ch),
            "invalid character '{ch}' in {code}"
        );
    }
}

/// Replace the character at `index` with the one whose value is XOR 0x1F.
fn mutate_pairing_code(code: &str, index: usize) -> String {
    let mut chars: Vec<char> = code.chars().collect();
    let index = index % chars.len();
    let value = PAIRING_CODE_CHARS.find(chars[index]).unwrap() ^ 0x1F;
    chars[index] = PAIRING_CODE_CHARS.as_bytes()[value] as char;
    chars.into_iter().collect()
}

#[test]
fn valid_codes_pass_and_mutations_fail() {
    for (mutation_index, code) in VALID_PAIRING_CODES.iter().enumerate() {
        assert!(is_valid_pairing_code(code), "{code} should be valid");

        let mutated = mutate_pairing_code(code, mutation_index);
        assert_ne!(&mutated, code);
        assert!(!is_valid_pairing_code(&mutated), "{mutated} should be invalid");
    }
}

#[test]
fn every_single_character_substitution_is_detected() {
    for code in VALID_PAIRING_CODES {
        for index in 0..code.len() {
            for replacement in PAIRING_CODE_CHARS.chars() {
                if code.as_bytes()[index] as char == replacement {
                    continue;
                }
                let mut mutated: Vec<char> = code.chars().collect();
                mutated[index] = replacement;
                let mutated: String = mutated.into_iter().collect();
                assert!(!is_valid_pairing_code(&mutated), "{mutated} should be invalid");
            }
        }
    }
}

#[test]
fn char_classification_matches_alphabet() {
    for byte in 0u8..0x7F {
        let ch = char::from(byte);
        let expected = PAIRING_CODE_CHARS.contains(ch.to_ascii_uppercase());
        assert_eq!(
            is_valid_pairing_code_char(ch),
            expected,
            "unexpected result for {ch:?}"
        );
    }
}

#[test]
fn check_char_reproduces_corpus() {
    for code in VALID_PAIRING_CODES {
        let (body, check) = code.split_at(code.len() - 1);
        assert_eq!(
            compute_check_char(body).unwrap().to_string(),
            check,
            "check char for {body}"
        );
        assert_eq!(add_check_char(body).unwrap(), code);
    }
}

#[test]
fn int_encode_decode_all_five_char_codes() {
    const LENGTH: usize = 5;
    let count: u64 = 1 << ((LENGTH - 1) * BITS_PER_CHARACTER as usize);

    for value in 0..count {
        let code = int_to_pairing_code(value, LENGTH).unwrap();
        assert_eq!(code.len(), LENGTH);
        check_pairing_code_chars(&code);
        assert_eq!(pairing_code_to_int(&code).unwrap(), value);
    }
}

#[test]
fn normalization() {
    // I, O, Q, Z -> 1, 0, 0, 2
    assert_eq!(normalize("HZOWQI"), "H20W01");
    // ' ', '\t', '\r', '\n', '-', '.' are dropped
    assert_eq!(normalize("  H\r\n\nR-D-W6.7\t"), "HRDW67");
}

#[test]
fn generation() {
    for length in MIN_PAIRING_CODE_LENGTH..20 {
        for _ in 0..100 {
            let code = generate_pairing_code(length).unwrap();
            assert_eq!(code.len(), length);
            check_pairing_code_chars(&code);
            assert!(is_valid_pairing_code(&code), "{code} should be valid");
        }
    }
}

//! 随机配对码生成

use rand::rngs::OsRng;
use rand::{CryptoRng, Rng};

use crate::charset::PAIRING_CODE_CHARS;
use crate::code::check_length;
use crate::error::Result;
use crate::verhoeff::add_check_char;

/// 使用系统随机源生成长度为 `length` 的配对码（含校验位）
///
/// 每次调用独立取随机数，可在多线程中并发调用。
///
/// # Example
/// ```
/// use paircode::{generate_pairing_code, is_valid_pairing_code};
/// let code = generate_pairing_code(6).unwrap();
/// assert_eq!(code.len(), 6);
/// assert!(is_valid_pairing_code(&code));
/// ```
///
/// # Errors
/// `length` 小于最小长度时返回 [`crate::Error::InvalidLength`]，超过最大长度时返回
/// [`crate::Error::LengthTooLong`]。
pub fn generate_pairing_code(length: usize) -> Result<String> {
    generate_pairing_code_with_rng(length, &mut OsRng)
}

/// 使用指定随机源生成配对码
///
/// # Errors
/// `length` 小于最小长度时返回 [`crate::Error::InvalidLength`]，超过最大长度时返回
/// [`crate::Error::LengthTooLong`]。
pub fn generate_pairing_code_with_rng<R: Rng + CryptoRng>(
    length: usize,
    rng: &mut R,
) -> Result<String> {
    check_length(length)?;

    let charset = PAIRING_CODE_CHARS.as_bytes();
    let body: String = (0..length - 1)
        .map(|_| char::from(charset[rng.gen_range(0..charset.len())]))
        .collect();
    add_check_char(&body)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::code::{is_valid_pairing_code, MAX_PAIRING_CODE_LENGTH, MIN_PAIRING_CODE_LENGTH};
    use crate::error::Error;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_generate_length() {
        for len in MIN_PAIRING_CODE_LENGTH..20 {
            let code = generate_pairing_code(len).unwrap();
            assert_eq!(code.len(), len);
            assert!(is_valid_pairing_code(&code));
        }
    }

    #[test]
    fn test_generate_too_short() {
        assert_eq!(
            generate_pairing_code(1),
            Err(Error::InvalidLength { min: 2, got: 1 })
        );
        assert!(generate_pairing_code(0).is_err());
    }

    #[test]
    fn test_generate_too_long() {
        let code = generate_pairing_code(MAX_PAIRING_CODE_LENGTH).unwrap();
        assert_eq!(code.len(), MAX_PAIRING_CODE_LENGTH);
        assert!(is_valid_pairing_code(&code));

        assert_eq!(
            generate_pairing_code(MAX_PAIRING_CODE_LENGTH + 1),
            Err(Error::LengthTooLong {
                max: MAX_PAIRING_CODE_LENGTH,
                got: MAX_PAIRING_CODE_LENGTH + 1
            })
        );
        assert!(generate_pairing_code(usize::MAX).is_err());
    }

    #[test]
    fn test_seeded_rng_is_deterministic() {
        let mut a = StdRng::seed_from_u64(7);
        let mut b = StdRng::seed_from_u64(7);
        assert_eq!(
            generate_pairing_code_with_rng(12, &mut a).unwrap(),
            generate_pairing_code_with_rng(12, &mut b).unwrap()
        );
    }

    #[test]
    fn test_generate_uniqueness() {
        let codes: std::collections::HashSet<String> = (0..1000)
            .map(|_| generate_pairing_code(10).unwrap())
            .collect();
        // 45 bit 随机空间，1000 个几乎不会碰撞
        assert!(codes.len() > 990);
    }

    #[test]
    fn test_generate_concurrently() {
        let handles: Vec<_> = (0..4)
            .map(|_| {
                std::thread::spawn(|| {
                    (0..100)
                        .map(|_| generate_pairing_code(8).unwrap())
                        .all(|code| is_valid_pairing_code(&code))
                })
            })
            .collect();
        for handle in handles {
            assert!(handle.join().unwrap());
        }
    }
}

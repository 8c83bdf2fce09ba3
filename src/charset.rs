//! 字符集定义
//!
//! 32 字符 Base32 变体：0-9 + A-Y (去掉 I, O, Q)。
//! I/O/Q/Z 不在字符集内，规范化时分别映射为 1/0/0/2。

/// 字符集，字符的值 (0-31) 即其下标
pub const PAIRING_CODE_CHARS: &str = "0123456789ABCDEFGHJKLMNPRSTUVWXY";

/// 每个字符承载的 bit 数
pub const BITS_PER_CHARACTER: u32 = 5;

/// 字符集字节视图
const CHARSET: &[u8; 32] = b"0123456789ABCDEFGHJKLMNPRSTUVWXY";

/// 无效字符标记
const INVALID: u8 = 0xFF;

/// ASCII 反查表，小写字母与大写共用同一个值
const VALUE_LOOKUP: [u8; 128] = {
    let mut lookup = [INVALID; 128];
    let mut i = 0;
    while i < CHARSET.len() {
        let c = CHARSET[i];
        lookup[c as usize] = i as u8;
        lookup[c.to_ascii_lowercase() as usize] = i as u8;
        i += 1;
    }
    lookup
};

/// 规范化别名表：易混淆字符 -> 字符集内字符
pub const ALIASES: [(u8, u8); 4] = [(b'I', b'1'), (b'O', b'0'), (b'Q', b'0'), (b'Z', b'2')];

/// 规范化时直接丢弃的空白与标点
pub const IGNORED_CHARS: [u8; 6] = [b' ', b'\t', b'\r', b'\n', b'-', b'.'];

/// 字符转值 (0-31)，大小写不敏感，无效字符返回 None
#[inline]
#[must_use]
pub fn char_to_value(c: u8) -> Option<u8> {
    VALUE_LOOKUP
        .get(usize::from(c))
        .copied()
        .filter(|&v| v != INVALID)
}

/// 值转字符 (大写)
#[inline]
#[must_use]
pub fn value_to_char(v: u8) -> Option<u8> {
    CHARSET.get(usize::from(v)).copied()
}

/// 验证字符是否在字符集内（先转大写）
#[inline]
#[must_use]
pub fn is_valid_char(c: u8) -> bool {
    char_to_value(c).is_some()
}

/// 规范化单个字符
///
/// 可忽略字符返回 None；其余字符转大写后按别名表替换，
/// 不认识的字符原样保留，交给后续校验拒绝。
#[must_use]
pub fn normalize_char(c: u8) -> Option<u8> {
    if IGNORED_CHARS.contains(&c) {
        return None;
    }
    let upper = c.to_ascii_uppercase();
    let mapped = ALIASES
        .iter()
        .find(|&&(from, _)| from == upper)
        .map_or(upper, |&(_, to)| to);
    Some(mapped)
}

/// 规范化用户输入的配对码
///
/// 只统一字符本身，不保证长度或校验位正确。
///
/// # Example
/// ```
/// use paircode::normalize;
/// assert_eq!(normalize("hzo-wqi"), "H20W01");
/// ```
#[must_use]
pub fn normalize(input: &str) -> String {
    input
        .chars()
        .filter_map(|ch| match u8::try_from(ch).ok().filter(u8::is_ascii) {
            Some(byte) => normalize_char(byte).map(char::from),
            None => Some(ch),
        })
        .collect()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_charset_length() {
        assert_eq!(PAIRING_CODE_CHARS.len(), 32);
        assert_eq!(PAIRING_CODE_CHARS.as_bytes(), CHARSET);
    }

    #[test]
    fn test_excluded_chars() {
        // I, O, Q, Z 应被排除
        assert!(char_to_value(b'I').is_none());
        assert!(char_to_value(b'O').is_none());
        assert!(char_to_value(b'Q').is_none());
        assert!(char_to_value(b'Z').is_none());
    }

    #[test]
    fn test_valid_chars() {
        assert_eq!(char_to_value(b'0'), Some(0));
        assert_eq!(char_to_value(b'9'), Some(9));
        assert_eq!(char_to_value(b'A'), Some(10));
        assert_eq!(char_to_value(b'H'), Some(17));
        assert_eq!(char_to_value(b'J'), Some(18));
        assert_eq!(char_to_value(b'Y'), Some(31));
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(char_to_value(b'a'), char_to_value(b'A'));
        assert_eq!(char_to_value(b'y'), char_to_value(b'Y'));
        assert!(!is_valid_char(b'z'));
    }

    #[test]
    fn test_non_ascii_rejected() {
        assert!(!is_valid_char(0x80));
        assert!(!is_valid_char(0xFF));
    }

    #[test]
    fn test_round_trip() {
        for v in 0..32u8 {
            let c = value_to_char(v).unwrap();
            assert_eq!(char_to_value(c), Some(v));
        }
        assert!(value_to_char(32).is_none());
    }

    #[test]
    fn test_alias_targets_in_charset() {
        for (from, to) in ALIASES {
            assert!(!is_valid_char(from));
            assert!(is_valid_char(to));
        }
    }

    #[test]
    fn test_normalize() {
        assert_eq!(normalize("HZOWQI"), "H20W01");
        assert_eq!(normalize("  H\r\n\nR-D-W6.7\t"), "HRDW67");
        assert_eq!(normalize("nest-us"), "NESTUS");
    }

    #[test]
    fn test_normalize_passes_unknown_through() {
        assert_eq!(normalize("AB!C"), "AB!C");
        assert_eq!(normalize("Aé"), "Aé");
    }
}

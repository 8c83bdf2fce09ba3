//! 整数与配对码互转
//!
//! 数据部分按 5 bit 一个字符打包，高位字符在前，末尾追加校验位。

use tracing::debug;

use crate::charset::{char_to_value, value_to_char, BITS_PER_CHARACTER};
use crate::code::{check_length, verify_pairing_code};
use crate::error::{Error, Result};
use crate::verhoeff::add_check_char;

/// 单字符掩码
const CHAR_MASK: u64 = (1 << BITS_PER_CHARACTER) - 1;

/// 将整数编码为长度为 `length` 的配对码（含校验位）
///
/// 数据部分宽度超过 64 bit 时高位补 `'0'`。
///
/// # Example
/// ```
/// use paircode::{int_to_pairing_code, pairing_code_to_int};
/// let code = int_to_pairing_code(1_000_000, 6).unwrap();
/// assert_eq!(pairing_code_to_int(&code).unwrap(), 1_000_000);
/// ```
///
/// # Errors
/// `length` 小于最小长度时返回 [`Error::InvalidLength`]，超过最大长度时返回
/// [`Error::LengthTooLong`]；
/// `value` 超出 `(length - 1) * 5` bit 时返回 [`Error::ValueOutOfRange`]。
pub fn int_to_pairing_code(value: u64, length: usize) -> Result<String> {
    check_length(length)?;

    let data_len = length - 1;
    if !fits(value, data_len) {
        debug!(value, length, "value does not fit pairing code");
        return Err(Error::ValueOutOfRange { value, length });
    }

    let mut body = vec![b'0'; data_len];
    let mut rest = value;
    for slot in body.iter_mut().rev() {
        if rest == 0 {
            break;
        }
        // 已按 5 bit 掩码截断
        #[allow(clippy::cast_possible_truncation)]
        let v = (rest & CHAR_MASK) as u8;
        *slot = value_to_char(v).ok_or(Error::InvalidChar(char::from(v)))?;
        rest >>= BITS_PER_CHARACTER;
    }

    let body: String = body.into_iter().map(char::from).collect();
    add_check_char(&body)
}

/// 将配对码解码为整数
///
/// 先完整校验配对码（长度、字符集、校验位），再按 32 进制读取数据部分。
///
/// # Errors
/// 配对码无效时返回校验错误；数据部分超出 64 bit 时返回
/// [`Error::IntegerOverflow`]。
pub fn pairing_code_to_int(code: &str) -> Result<u64> {
    verify_pairing_code(code)?;

    let body = &code.as_bytes()[..code.len() - 1];
    let mut value: u64 = 0;
    for &c in body {
        let v = char_to_value(c).ok_or(Error::InvalidChar(char::from(c)))?;
        if value >> (u64::BITS - BITS_PER_CHARACTER) != 0 {
            debug!(code, "pairing code wider than 64 bits");
            return Err(Error::IntegerOverflow(code.to_string()));
        }
        value = (value << BITS_PER_CHARACTER) | u64::from(v);
    }
    Ok(value)
}

/// `value` 是否能放进 `data_len` 个字符
fn fits(value: u64, data_len: usize) -> bool {
    let bits = data_len.saturating_mul(BITS_PER_CHARACTER as usize);
    bits >= u64::BITS as usize || value >> bits == 0
}

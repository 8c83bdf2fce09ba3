//! 校验位计算
//!
//! Verhoeff 校验算法的 32 进制版本：在二面体群 D16 (16 边形，32 个元素)
//! 上做乘法，配合一个固定置换。可检出全部单字符替换错误与相邻字符互换错误。

use crate::charset::{char_to_value, value_to_char};
use crate::error::{Error, Result};

/// 多边形边数，群阶为其两倍
const POLYGON_SIZE: u8 = 16;

/// 进制 (群阶)
const BASE: u8 = POLYGON_SIZE * 2;

/// 位置置换表，第 i 位字符经过 i 次置换后参与运算
const PERM_TABLE: [u8; BASE as usize] = [
    7, 2, 1, 30, 16, 20, 27, 11, 31, 6, 8, 13, 29, 5, 10, 21, 22, 3, 24, 0, 23, 25, 12, 9, 28, 14,
    4, 15, 17, 18, 19, 26,
];

/// 二面体群 D_n 乘法
///
/// `0..n` 为旋转，`n..2n` 为翻转。
const fn dihedral_multiply(x: u8, y: u8, n: u8) -> u8 {
    let x = x % (n * 2);
    let y = y % (n * 2);
    match (x < n, y < n) {
        (true, true) => (x + y) % n,
        (true, false) => ((x + (y - n)) % n) + n,
        (false, true) => ((n + (x - n) - y) % n) + n,
        (false, false) => (n + (x - n) - (y - n)) % n,
    }
}

/// 二面体群求逆：旋转取反，翻转自逆
const fn dihedral_invert(val: u8, n: u8) -> u8 {
    if val > 0 && val < n {
        n - val
    } else {
        val
    }
}

/// 对 `val` 连续应用 `iterations` 次置换
fn permute(val: u8, iterations: usize) -> u8 {
    let mut val = val % BASE;
    for _ in 0..iterations {
        val = PERM_TABLE[usize::from(val)];
    }
    val
}

/// 计算校验位
///
/// `body` 为不含校验位的配对码，大小写不敏感。空串的校验位为 `'0'`。
///
/// # Errors
/// `body` 含字符集外字符时返回 [`Error::InvalidChar`]。
///
/// # Example
/// ```
/// use paircode::compute_check_char;
/// assert_eq!(compute_check_char("NESTU").unwrap(), 'S');
/// ```
pub fn compute_check_char(body: &str) -> Result<char> {
    let mut c = 0u8;
    for (i, ch) in body.chars().rev().enumerate() {
        let val = ascii_value(ch).ok_or(Error::InvalidChar(ch))?;
        c = dihedral_multiply(c, permute(val, i + 1), POLYGON_SIZE);
    }
    let check = dihedral_invert(c, POLYGON_SIZE);
    value_to_char(check)
        .map(char::from)
        .ok_or(Error::InvalidChar(char::from(check)))
}

/// 追加校验位
///
/// # Errors
/// `body` 含字符集外字符时返回 [`Error::InvalidChar`]。
pub fn add_check_char(body: &str) -> Result<String> {
    let check = compute_check_char(body)?;
    let mut code = String::with_capacity(body.len() + 1);
    code.push_str(body);
    code.push(check);
    Ok(code)
}

/// 仅验证末位校验位（不检查最小长度）
///
/// 空串或含非法字符时返回 false。
#[must_use]
pub fn validate_check_char(code: &str) -> bool {
    let mut chars = code.chars();
    let Some(last) = chars.next_back() else {
        return false;
    };
    let Some(got) = ascii_value(last) else {
        return false;
    };
    compute_check_char(chars.as_str())
        .ok()
        .and_then(ascii_value)
        .is_some_and(|expected| expected == got)
}

/// 字符转值；非 ASCII 一律无效
fn ascii_value(ch: char) -> Option<u8> {
    u8::try_from(ch).ok().and_then(char_to_value)
}

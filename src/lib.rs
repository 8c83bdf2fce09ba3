//! paircode - 配对码编解码库
//!
//! 将设备配对口令编码为便于人工输入的短字符串：32 字符字符集，
//! 每字符 5 bit，末尾附加 Verhoeff-32 校验位，可检出单字符错误与相邻互换。
//!
//! # 配对码格式
//!
//! ```text
//! ┌─────────────────────────────┬──────────┐
//! │  Data (N-1 chars, 5 bit/ch) │  Check   │
//! │  高位字符在前               │  1 char  │
//! └─────────────────────────────┴──────────┘
//!        字符集: 0-9 A-Y (无 I, O, Q)
//! ```
//!
//! # Example
//!
//! ```
//! use paircode::{
//!     generate_pairing_code, is_valid_pairing_code, normalize, PairingCode,
//!     STANDARD_PAIRING_CODE_LENGTH,
//! };
//!
//! // 生成
//! let code = generate_pairing_code(STANDARD_PAIRING_CODE_LENGTH).unwrap();
//! assert!(is_valid_pairing_code(&code));
//!
//! // 用户输入先规范化再校验
//! let typed = normalize(" nest-us ");
//! assert!(is_valid_pairing_code(&typed));
//!
//! // 整数互转
//! let code = PairingCode::from_int(42, 6).unwrap();
//! assert_eq!(code.to_int().unwrap(), 42);
//! ```

pub mod charset;
pub mod code;
pub mod error;
pub mod generate;
pub mod packing;
pub mod verhoeff;

#[cfg(feature = "ffi")]
pub mod ffi;

// Re-exports
pub use charset::{is_valid_char, normalize, BITS_PER_CHARACTER, PAIRING_CODE_CHARS};
pub use code::{
    check_length, is_valid_pairing_code, verify_pairing_code, PairingCode,
    MAX_PAIRING_CODE_LENGTH, MIN_PAIRING_CODE_LENGTH, STANDARD_PAIRING_CODE_LENGTH,
};
pub use error::{Error, Result};
pub use generate::{generate_pairing_code, generate_pairing_code_with_rng};
pub use packing::{int_to_pairing_code, pairing_code_to_int};
pub use verhoeff::{add_check_char, compute_check_char, validate_check_char};

/// 判断单个字符是否属于字符集（大小写不敏感）
///
/// 仅按 ASCII 转大写：非 ASCII 字符一律无效，即使其 Unicode 大写形式
/// 落在字符集内（如 `'ſ'` 的大写为 `'S'`）
#[must_use]
pub fn is_valid_pairing_code_char(ch: char) -> bool {
    u8::try_from(ch).is_ok_and(is_valid_char)
}

//! 配对码校验与 `PairingCode` 类型
//!
//! 配对码结构: N-1 个数据字符 + 1 个校验位，N >= [`MIN_PAIRING_CODE_LENGTH`]

use tracing::debug;

use crate::charset::{is_valid_char, normalize};
use crate::error::{Error, Result};
use crate::verhoeff::compute_check_char;

/// 最小长度：1 个数据字符 + 1 个校验位
pub const MIN_PAIRING_CODE_LENGTH: usize = 2;

/// 常用长度 (5 个数据字符 + 1 个校验位)
pub const STANDARD_PAIRING_CODE_LENGTH: usize = 6;

/// 构造配对码时允许的最大长度
pub const MAX_PAIRING_CODE_LENGTH: usize = 128;

/// 检查待构造配对码的长度是否在 `MIN..=MAX` 之内
///
/// # Errors
/// 过短返回 [`Error::InvalidLength`]，过长返回 [`Error::LengthTooLong`]。
pub fn check_length(length: usize) -> Result<()> {
    if length < MIN_PAIRING_CODE_LENGTH {
        debug!(length, "rejected pairing code length");
        return Err(Error::InvalidLength {
            min: MIN_PAIRING_CODE_LENGTH,
            got: length,
        });
    }
    if length > MAX_PAIRING_CODE_LENGTH {
        debug!(length, "rejected pairing code length");
        return Err(Error::LengthTooLong {
            max: MAX_PAIRING_CODE_LENGTH,
            got: length,
        });
    }
    Ok(())
}

/// 判断字符串是否为合法配对码
///
/// 用于校验不可信的用户输入，任何失败都只返回 false。
#[must_use]
pub fn is_valid_pairing_code(code: &str) -> bool {
    verify_pairing_code(code).is_ok()
}

/// 校验配对码并给出失败原因
///
/// 依次检查长度、字符集、校验位。大小写不敏感，不做规范化。
///
/// # Errors
/// 长度不足返回 [`Error::InvalidLength`]，含非法字符返回
/// [`Error::InvalidChar`]，校验位不匹配返回 [`Error::ChecksumMismatch`]。
pub fn verify_pairing_code(code: &str) -> Result<()> {
    let len = code.chars().count();
    if len < MIN_PAIRING_CODE_LENGTH {
        return Err(Error::InvalidLength {
            min: MIN_PAIRING_CODE_LENGTH,
            got: len,
        });
    }

    if let Some(c) = code
        .chars()
        .find(|&c| u8::try_from(c).map_or(true, |b| !is_valid_char(b)))
    {
        return Err(Error::InvalidChar(c));
    }

    // 以上已确认全部为 ASCII，按字节切分安全
    let (body, last) = code.split_at(code.len() - 1);
    let expected = compute_check_char(body)?;
    let got = char::from(last.as_bytes()[0].to_ascii_uppercase());
    if got != expected {
        return Err(Error::ChecksumMismatch { expected, got });
    }

    Ok(())
}

/// 已校验的配对码（大写，含校验位）
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PairingCode {
    /// 大写 ASCII，末位为校验位
    code: String,
}

impl PairingCode {
    /// 严格解析：大小写不敏感，不做别名替换或去除空白
    ///
    /// # Example
    /// ```
    /// use paircode::PairingCode;
    /// let code = PairingCode::parse("nestus").unwrap();
    /// assert_eq!(code.as_str(), "NESTUS");
    /// assert_eq!(code.check_char(), 'S');
    /// ```
    ///
    /// # Errors
    /// 见 [`verify_pairing_code`]
    pub fn parse(s: &str) -> Result<Self> {
        verify_pairing_code(s)?;
        Ok(Self {
            code: s.to_ascii_uppercase(),
        })
    }

    /// 先规范化再解析，适用于用户手工输入
    ///
    /// # Errors
    /// 见 [`verify_pairing_code`]
    pub fn parse_normalized(s: &str) -> Result<Self> {
        Self::parse(&normalize(s))
    }

    /// 为数据部分追加校验位并构造配对码
    ///
    /// # Errors
    /// 数据部分为空时返回 [`Error::InvalidLength`]，过长时返回
    /// [`Error::LengthTooLong`]，含非法字符时返回 [`Error::InvalidChar`]
    pub fn from_body(body: &str) -> Result<Self> {
        check_length(body.chars().count().saturating_add(1))?;
        let check = compute_check_char(body)?;
        let mut code = body.to_ascii_uppercase();
        code.push(check);
        Ok(Self { code })
    }

    /// 将整数编码为指定长度的配对码
    ///
    /// # Errors
    /// 见 [`crate::packing::int_to_pairing_code`]
    pub fn from_int(value: u64, length: usize) -> Result<Self> {
        let code = crate::packing::int_to_pairing_code(value, length)?;
        Ok(Self { code })
    }

    /// 随机生成指定长度的配对码
    ///
    /// # Errors
    /// 见 [`crate::generate::generate_pairing_code`]
    pub fn generate(length: usize) -> Result<Self> {
        let code = crate::generate::generate_pairing_code(length)?;
        Ok(Self { code })
    }

    /// 解码为整数
    ///
    /// # Errors
    /// 数据部分超过 64 bit 时返回 [`Error::IntegerOverflow`]
    pub fn to_int(&self) -> Result<u64> {
        crate::packing::pairing_code_to_int(&self.code)
    }

    /// 完整配对码
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.code
    }

    /// 数据部分（去除校验位）
    #[must_use]
    pub fn data(&self) -> &str {
        &self.code[..self.code.len() - 1]
    }

    /// 校验位
    #[must_use]
    pub fn check_char(&self) -> char {
        char::from(self.code.as_bytes()[self.code.len() - 1])
    }

    /// 总长度（含校验位）
    #[must_use]
    pub fn len(&self) -> usize {
        self.code.len()
    }

    /// 合法配对码至少 2 个字符，恒为 false
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.code.is_empty()
    }
}

impl std::fmt::Display for PairingCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.code)
    }
}

impl std::str::FromStr for PairingCode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse_normalized(s)
    }
}

impl TryFrom<String> for PairingCode {
    type Error = Error;

    fn try_from(s: String) -> Result<Self> {
        Self::parse(&s)
    }
}

impl From<PairingCode> for String {
    fn from(code: PairingCode) -> Self {
        code.code
    }
}

impl AsRef<str> for PairingCode {
    fn as_ref(&self) -> &str {
        &self.code
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for PairingCode {
    fn serialize<S: serde::Serializer>(
        &self,
        serializer: S,
    ) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.code)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for PairingCode {
    fn deserialize<D: serde::Deserializer<'de>>(
        deserializer: D,
    ) -> std::result::Result<Self, D::Error> {
        let s = <String as serde::Deserialize>::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}

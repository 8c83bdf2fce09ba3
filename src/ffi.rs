//! C FFI 导出
//!
//! 提供 C ABI 接口供 C/ObjC/Swift/JNI 等调用。
//! 所有字符串输出写入调用方提供的缓冲区，以 NUL 结尾。

// FFI 模块需要 unsafe 代码
#![allow(unsafe_code)]

use std::ffi::{c_char, CStr};
use std::ptr;

use crate::charset::{is_valid_char, normalize};
use crate::code::is_valid_pairing_code;
use crate::error::Error;
use crate::generate::generate_pairing_code;
use crate::packing::{int_to_pairing_code, pairing_code_to_int};
use crate::verhoeff::{add_check_char, compute_check_char};

/// FFI 错误码
#[repr(i32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PairCodeError {
    Success = 0,
    NullPointer = -1,
    InvalidUtf8 = -2,
    BufferTooSmall = -3,
    InvalidChar = -4,
    InvalidLength = -5,
    ChecksumMismatch = -6,
    ValueOutOfRange = -7,
    IntegerOverflow = -8,
}

impl From<&Error> for PairCodeError {
    fn from(err: &Error) -> Self {
        match err {
            Error::InvalidChar(_) => Self::InvalidChar,
            Error::InvalidLength { .. } | Error::LengthTooLong { .. } => Self::InvalidLength,
            Error::ChecksumMismatch { .. } => Self::ChecksumMismatch,
            Error::ValueOutOfRange { .. } => Self::ValueOutOfRange,
            Error::IntegerOverflow(_) => Self::IntegerOverflow,
        }
    }
}

/// 读取 C 字符串
///
/// # Safety
/// `s` 非空时必须是有效的 NUL 结尾字符串
unsafe fn read_str<'a>(s: *const c_char) -> Result<&'a str, PairCodeError> {
    if s.is_null() {
        return Err(PairCodeError::NullPointer);
    }
    CStr::from_ptr(s)
        .to_str()
        .map_err(|_| PairCodeError::InvalidUtf8)
}

/// 写入 NUL 结尾字符串
///
/// # Safety
/// `out` 必须指向至少 `out_len` 字节的可写内存
unsafe fn write_str(text: &str, out: *mut c_char, out_len: usize) -> i32 {
    if out.is_null() {
        return PairCodeError::NullPointer as i32;
    }
    let bytes = text.as_bytes();
    if bytes.len() + 1 > out_len {
        return PairCodeError::BufferTooSmall as i32;
    }
    ptr::copy_nonoverlapping(bytes.as_ptr(), out.cast::<u8>(), bytes.len());
    *out.add(bytes.len()) = 0;
    PairCodeError::Success as i32
}

/// 将库结果写入缓冲区或转换为错误码
///
/// # Safety
/// 同 [`write_str`]
unsafe fn write_result(result: crate::Result<String>, out: *mut c_char, out_len: usize) -> i32 {
    match result {
        Ok(text) => write_str(&text, out, out_len),
        Err(err) => PairCodeError::from(&err) as i32,
    }
}

/// 验证字符是否在字符集内（大小写不敏感）
#[no_mangle]
pub extern "C" fn paircode_is_valid_char(ch: c_char) -> bool {
    // c_char 可能为有符号类型，按位转换
    #[allow(clippy::cast_sign_loss)]
    let byte = ch as u8;
    is_valid_char(byte)
}

/// 验证配对码
///
/// # Safety
/// - `code` 必须是有效的 C 字符串或 NULL
#[no_mangle]
pub unsafe extern "C" fn paircode_is_valid(code: *const c_char) -> bool {
    read_str(code).is_ok_and(is_valid_pairing_code)
}

/// 规范化用户输入
///
/// # Safety
/// - `input` 必须是有效的 C 字符串
/// - `out` 必须指向至少 `out_len` 字节的缓冲区
#[no_mangle]
pub unsafe extern "C" fn paircode_normalize(
    input: *const c_char,
    out: *mut c_char,
    out_len: usize,
) -> i32 {
    match read_str(input) {
        Ok(s) => write_str(&normalize(s), out, out_len),
        Err(err) => err as i32,
    }
}

/// 计算校验位
///
/// # Safety
/// - `body` 必须是有效的 C 字符串
/// - `out` 必须指向 1 字节可写内存
#[no_mangle]
pub unsafe extern "C" fn paircode_compute_check_char(body: *const c_char, out: *mut c_char) -> i32 {
    if out.is_null() {
        return PairCodeError::NullPointer as i32;
    }
    let body = match read_str(body) {
        Ok(s) => s,
        Err(err) => return err as i32,
    };
    match compute_check_char(body) {
        Ok(check) => {
            // 校验位必定为 ASCII
            #[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
            let byte = check as u8 as c_char;
            *out = byte;
            PairCodeError::Success as i32
        }
        Err(err) => PairCodeError::from(&err) as i32,
    }
}

/// 追加校验位
///
/// # Safety
/// - `body` 必须是有效的 C 字符串
/// - `out` 必须指向至少 `out_len` 字节的缓冲区（`strlen(body) + 2`）
#[no_mangle]
pub unsafe extern "C" fn paircode_add_check_char(
    body: *const c_char,
    out: *mut c_char,
    out_len: usize,
) -> i32 {
    match read_str(body) {
        Ok(s) => write_result(add_check_char(s), out, out_len),
        Err(err) => err as i32,
    }
}

/// 整数编码为配对码
///
/// # Safety
/// - `out` 必须指向至少 `out_len` 字节的缓冲区（`length + 1`）
#[no_mangle]
pub unsafe extern "C" fn paircode_from_int(
    value: u64,
    length: usize,
    out: *mut c_char,
    out_len: usize,
) -> i32 {
    write_result(int_to_pairing_code(value, length), out, out_len)
}

/// 配对码解码为整数
///
/// # Safety
/// - `code` 必须是有效的 C 字符串
/// - `out` 必须指向可写的 `u64`
#[no_mangle]
pub unsafe extern "C" fn paircode_to_int(code: *const c_char, out: *mut u64) -> i32 {
    if out.is_null() {
        return PairCodeError::NullPointer as i32;
    }
    let code = match read_str(code) {
        Ok(s) => s,
        Err(err) => return err as i32,
    };
    match pairing_code_to_int(code) {
        Ok(value) => {
            *out = value;
            PairCodeError::Success as i32
        }
        Err(err) => PairCodeError::from(&err) as i32,
    }
}

/// 随机生成配对码
///
/// # Safety
/// - `out` 必须指向至少 `out_len` 字节的缓冲区（`length + 1`）
#[no_mangle]
pub unsafe extern "C" fn paircode_generate(length: usize, out: *mut c_char, out_len: usize) -> i32 {
    write_result(generate_pairing_code(length), out, out_len)
}

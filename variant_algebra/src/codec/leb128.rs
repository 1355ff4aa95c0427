// Copyright 2026 the Variant Algebra Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! LEB128 varints for element counts and integer payloads.

use alloc::vec::Vec;

use crate::codec::DecodeError;

/// Reads an unsigned LEB128 value, advancing `offset` past it.
pub(crate) fn read_u64(bytes: &[u8], offset: &mut usize) -> Result<u64, DecodeError> {
    let mut value = 0_u64;
    for i in 0..10_u32 {
        let b = next_byte(bytes, offset)?;
        let payload = b & 0x7f;
        // The 10th byte may only carry the top bit of a u64.
        if i == 9 && payload > 1 {
            return Err(DecodeError::InvalidVarint);
        }
        value |= u64::from(payload) << (7 * i);
        if b & 0x80 == 0 {
            return Ok(value);
        }
    }
    Err(DecodeError::InvalidVarint)
}

/// Reads a signed LEB128 value, advancing `offset` past it.
pub(crate) fn read_i64(bytes: &[u8], offset: &mut usize) -> Result<i64, DecodeError> {
    let mut value = 0_i64;
    for i in 0..10_u32 {
        let b = next_byte(bytes, offset)?;
        let payload = b & 0x7f;
        // The 10th byte must be a pure sign extension.
        if i == 9 && payload != 0x00 && payload != 0x7f {
            return Err(DecodeError::InvalidVarint);
        }
        value |= i64::from(payload) << (7 * i);
        if b & 0x80 == 0 {
            let shift = 7 * (i + 1);
            if shift < 64 && b & 0x40 != 0 {
                value |= !0_i64 << shift;
            }
            return Ok(value);
        }
    }
    Err(DecodeError::InvalidVarint)
}

fn next_byte(bytes: &[u8], offset: &mut usize) -> Result<u8, DecodeError> {
    let b = *bytes.get(*offset).ok_or(DecodeError::UnexpectedEof)?;
    *offset = offset.checked_add(1).ok_or(DecodeError::OutOfBounds)?;
    Ok(b)
}

/// Appends `value` as unsigned LEB128.
pub(crate) fn write_u64(out: &mut Vec<u8>, mut value: u64) {
    while value >= 0x80 {
        out.push(u8::try_from(value & 0x7f).unwrap_or(0) | 0x80);
        value >>= 7;
    }
    out.push(u8::try_from(value).unwrap_or(0));
}

/// Appends `value` as signed LEB128.
pub(crate) fn write_i64(out: &mut Vec<u8>, mut value: i64) {
    loop {
        let b = low_seven(value);
        value >>= 7;
        let sign_clear = b & 0x40 == 0;
        if (value == 0 && sign_clear) || (value == -1 && !sign_clear) {
            out.push(b);
            return;
        }
        out.push(b | 0x80);
    }
}

fn low_seven(value: i64) -> u8 {
    u8::try_from(value & 0x7f).unwrap_or(0)
}

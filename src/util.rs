//
// Copyright (c) 2016 KAMADA Ken'ichi.
// All rights reserved.
//
// Redistribution and use in source and binary forms, with or without
// modification, are permitted provided that the following conditions
// are met:
// 1. Redistributions of source code must retain the above copyright
//    notice, this list of conditions and the following disclaimer.
// 2. Redistributions in binary form must reproduce the above copyright
//    notice, this list of conditions and the following disclaimer in the
//    documentation and/or other materials provided with the distribution.
//
// THIS SOFTWARE IS PROVIDED BY THE AUTHOR AND CONTRIBUTORS ``AS IS'' AND
// ANY EXPRESS OR IMPLIED WARRANTIES, INCLUDING, BUT NOT LIMITED TO, THE
// IMPLIED WARRANTIES OF MERCHANTABILITY AND FITNESS FOR A PARTICULAR PURPOSE
// ARE DISCLAIMED.  IN NO EVENT SHALL THE AUTHOR OR CONTRIBUTORS BE LIABLE
// FOR ANY DIRECT, INDIRECT, INCIDENTAL, SPECIAL, EXEMPLARY, OR CONSEQUENTIAL
// DAMAGES (INCLUDING, BUT NOT LIMITED TO, PROCUREMENT OF SUBSTITUTE GOODS
// OR SERVICES; LOSS OF USE, DATA, OR PROFITS; OR BUSINESS INTERRUPTION)
// HOWEVER CAUSED AND ON ANY THEORY OF LIABILITY, WHETHER IN CONTRACT, STRICT
// LIABILITY, OR TORT (INCLUDING NEGLIGENCE OR OTHERWISE) ARISING IN ANY WAY
// OUT OF THE USE OF THIS SOFTWARE, EVEN IF ADVISED OF THE POSSIBILITY OF
// SUCH DAMAGE.
//

use crate::error::DateTimeError;

const ASCII_0: u8 = 0x30;
const ASCII_9: u8 = 0x39;

// This function must not be called with more than 4 bytes.
pub fn atou16(bytes: &[u8]) -> Result<u16, DateTimeError> {
    debug_assert!(bytes.len() <= 4);
    if bytes.is_empty() {
        return Err(DateTimeError::InvalidFormat("Not a number"));
    }
    let mut n = 0;
    for &c in bytes {
        n = n * 10 + ctou32(c)? as u16;
    }
    Ok(n)
}

pub fn ctou32(c: u8) -> Result<u32, DateTimeError> {
    if c < ASCII_0 || ASCII_9 < c {
        return Err(DateTimeError::InvalidFormat("Not a number"));
    }
    Ok((c - ASCII_0) as u32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn atou16_misc() {
        assert_ok!(atou16(b"0"), 0);
        assert_ok!(atou16(b"0010"), 10);
        assert_ok!(atou16(b"9999"), 9999);
        assert_err_pat!(atou16(b""), DateTimeError::InvalidFormat(_));
        assert_err_pat!(atou16(b"/"), DateTimeError::InvalidFormat(_));
        assert_err_pat!(atou16(b":"), DateTimeError::InvalidFormat(_));
        assert_err_pat!(atou16(b"-1"), DateTimeError::InvalidFormat(_));
    }

    #[test]
    fn ctou32_digits() {
        assert_ok!(ctou32(b'0'), 0);
        assert_ok!(ctou32(b'9'), 9);
        assert_err_pat!(ctou32(b' '), DateTimeError::InvalidFormat(_));
    }
}

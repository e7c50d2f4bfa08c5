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

use std::fmt;
use std::mem;

// Byte order is selected by generics (byteorder::BigEndian or
// byteorder::LittleEndian) to avoid run-time dispatching.  The loaders
// below return None when the range is out of the buffer.

/// The byte order of the TIFF structure inside the Exif data.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum ByteOrder {
    /// "MM", also known as Motorola byte order.
    BigEndian,
    /// "II", also known as Intel byte order.
    LittleEndian,
}

impl ByteOrder {
    /// Returns the byte alignment code: 0 for Motorola, 1 for Intel.
    #[inline]
    pub fn code(self) -> u8 {
        match self {
            ByteOrder::BigEndian => 0,
            ByteOrder::LittleEndian => 1,
        }
    }

    /// Returns true for the Intel byte order.
    #[inline]
    pub fn is_little_endian(self) -> bool {
        self == ByteOrder::LittleEndian
    }
}

impl fmt::Display for ByteOrder {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            ByteOrder::BigEndian => f.pad("Motorola"),
            ByteOrder::LittleEndian => f.pad("Intel"),
        }
    }
}

macro_rules! generate_load {
    ($name:ident, $int_type:ident, $read_func:ident) => (
        pub fn $name<E>(buf: &[u8], offset: usize) -> Option<$int_type>
        where
            E: byteorder::ByteOrder,
        {
            let end = offset.checked_add(mem::size_of::<$int_type>())?;
            buf.get(offset..end).map(E::$read_func)
        }
    )
}

generate_load!(load_u16, u16, read_u16);
generate_load!(load_u32, u32, read_u32);

/// Returns `len` bytes starting at `offset`, or None if the range
/// does not fit in the buffer.
#[inline]
pub fn subslice(buf: &[u8], offset: usize, len: usize) -> Option<&[u8]> {
    buf.get(offset..offset.checked_add(len)?)
}

#[cfg(test)]
mod tests {
    use byteorder::{BigEndian, LittleEndian};

    use super::*;

    #[test]
    fn loadu16() {
        assert_eq!(load_u16::<BigEndian>(&[0x01, 0x02], 0), Some(0x0102));
        assert_eq!(load_u16::<BigEndian>(&[0x01, 0x02, 0x03], 1), Some(0x0203));
        assert_eq!(load_u16::<LittleEndian>(&[0x01, 0x02], 0), Some(0x0201));
        assert_eq!(load_u16::<LittleEndian>(&[0x01, 0x02, 0x03], 1), Some(0x0302));
    }

    #[test]
    fn loadu32() {
        assert_eq!(load_u32::<BigEndian>(&[0x01, 0x02, 0x03, 0x04], 0),
                   Some(0x01020304));
        assert_eq!(load_u32::<BigEndian>(&[0x01, 0x02, 0x03, 0x04, 0x05], 1),
                   Some(0x02030405));
        assert_eq!(load_u32::<LittleEndian>(&[0x01, 0x02, 0x03, 0x04], 0),
                   Some(0x04030201));
        assert_eq!(load_u32::<LittleEndian>(&[0x01, 0x02, 0x03, 0x04, 0x05], 1),
                   Some(0x05040302));
    }

    #[test]
    fn out_of_range() {
        assert_eq!(load_u16::<BigEndian>(&[0x01, 0x02], 1), None);
        assert_eq!(load_u16::<BigEndian>(&[], 0), None);
        assert_eq!(load_u32::<LittleEndian>(&[0x01, 0x02, 0x03], 0), None);
        assert_eq!(load_u32::<LittleEndian>(&[0x01, 0x02, 0x03, 0x04], 5), None);
    }

    #[test]
    fn wrap_around() {
        assert_eq!(load_u16::<BigEndian>(&[0x01, 0x02], usize::MAX), None);
        assert_eq!(load_u32::<BigEndian>(&[0x01, 0x02], usize::MAX - 1), None);
        assert_eq!(subslice(b"abc", usize::MAX, 2), None);
    }

    #[test]
    fn subslice_range() {
        assert_eq!(subslice(b"abcd", 1, 2), Some(&b"bc"[..]));
        assert_eq!(subslice(b"abcd", 4, 0), Some(&b""[..]));
        assert_eq!(subslice(b"abcd", 3, 2), None);
    }

    #[test]
    fn byte_order_code() {
        assert_eq!(ByteOrder::BigEndian.code(), 0);
        assert_eq!(ByteOrder::LittleEndian.code(), 1);
        assert!(ByteOrder::LittleEndian.is_little_endian());
        assert_eq!(format!("{:>9}", ByteOrder::BigEndian), " Motorola");
    }
}

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

use byteorder::{BigEndian, LittleEndian};

use crate::{
    endian::subslice,
    error::DateTimeError,
    util::{atou16, ctou32},
    value::{get_type_info, Type},
    Tag, Value,
};

// Location of the value of an IFD entry.  A value that fits in 4 bytes
// is embedded in the "value offset" element of the entry; otherwise the
// element holds the offset of the value in the TIFF data.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ValueRef {
    Inline([u8; 4]),
    Offset(usize),
}

// Parsed TIFF field (IFD entry) whose value has not been decoded yet.
// The range of an Offset value has been checked against the TIFF data
// when the entry was created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IfdEntry {
    pub tag: Tag,
    pub typ: Type,
    pub count: u32,
    // Length of the value in bytes (unit length * count).
    pub len: usize,
    pub value: ValueRef,
}

impl IfdEntry {
    // Returns the raw bytes of the value.
    pub fn bytes<'a>(&'a self, data: &'a [u8]) -> Option<&'a [u8]> {
        match self.value {
            ValueRef::Inline(ref buf) => buf.get(..self.len),
            ValueRef::Offset(ofs) => subslice(data, ofs, self.len),
        }
    }

    pub fn decode(&self, data: &[u8], le: bool) -> Option<Value> {
        if le {
            self.decode_with::<LittleEndian>(data)
        } else {
            self.decode_with::<BigEndian>(data)
        }
    }

    // Converts the raw bytes into a real value.
    pub fn decode_with<E>(&self, data: &[u8]) -> Option<Value>
    where
        E: byteorder::ByteOrder,
    {
        let (_unitlen, parser) = get_type_info::<E>(self.typ);
        self.bytes(data).map(parser)
    }
}

/// A struct used to parse a DateTime field.
///
/// # Examples
/// ```
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// use exif_info::DateTime;
/// let dt = DateTime::from_ascii(b"2016:05:04 03:02:01")?;
/// assert_eq!(dt.year, 2016);
/// assert_eq!(dt.to_string(), "2016-05-04 03:02:01");
/// # Ok(()) }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateTime {
    pub year: u16,
    pub month: u8,
    pub day: u8,
    pub hour: u8,
    pub minute: u8,
    pub second: u8,
    /// The subsecond data in nanoseconds.  If the Exif attribute has
    /// more sigfinicant digits, they are rounded down.
    pub nanosecond: Option<u32>,
}

impl DateTime {
    /// Parse an ASCII data of a DateTime field.  The range of a number
    /// is not validated, so, for example, 13 may be returned as the month.
    ///
    /// If the value is blank, `DateTimeError::Blank` is returned.
    pub fn from_ascii(data: &[u8]) -> Result<DateTime, DateTimeError> {
        if data == b"    :  :     :  :  " || data == b"                   " {
            return Err(DateTimeError::Blank("DateTime is blank"));
        } else if data.len() < 19 {
            return Err(DateTimeError::InvalidFormat("DateTime too short"));
        } else if !(data[4] == b':'
            && data[7] == b':'
            && data[10] == b' '
            && data[13] == b':'
            && data[16] == b':')
        {
            return Err(DateTimeError::InvalidFormat("Invalid DateTime delimiter"));
        }
        Ok(DateTime {
            year: atou16(&data[0..4])?,
            month: atou16(&data[5..7])? as u8,
            day: atou16(&data[8..10])? as u8,
            hour: atou16(&data[11..13])? as u8,
            minute: atou16(&data[14..16])? as u8,
            second: atou16(&data[17..19])? as u8,
            nanosecond: None,
        })
    }

    /// Parses an SubsecTime-like field.
    pub fn parse_subsec(&mut self, data: &[u8]) -> Result<(), DateTimeError> {
        let mut subsec = 0;
        let mut ndigits = 0;
        for &c in data {
            if c == b' ' {
                break;
            }
            subsec = subsec * 10 + ctou32(c)?;
            ndigits += 1;
            if ndigits >= 9 {
                break;
            }
        }
        if ndigits == 0 {
            self.nanosecond = None;
        } else {
            for _ in ndigits..9 {
                subsec *= 10;
            }
            self.nanosecond = Some(subsec);
        }
        Ok(())
    }
}

impl fmt::Display for DateTime {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02} {:02}:{:02}:{:02}",
            self.year, self.month, self.day, self.hour, self.minute, self.second
        )
    }
}

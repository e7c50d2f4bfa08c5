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

use num_traits::ToPrimitive;

/// Field types of TIFF IFD entries [EXIF23 4.6.2].
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, enumn::N)]
#[repr(u16)]
pub enum Type {
    Byte = 1,
    Ascii = 2,
    Short = 3,
    Long = 4,
    Rational = 5,
    SByte = 6,
    Undefined = 7,
    SShort = 8,
    SLong = 9,
    SRational = 10,
    Float = 11,
    Double = 12,
}

impl Type {
    /// Returns the type for a type code, or None for codes this crate
    /// does not know.
    #[inline]
    pub fn from_code(code: u16) -> Option<Type> {
        Type::n(code)
    }

    /// Returns the length in bytes of a single element of this type.
    #[inline]
    pub fn unit_len(self) -> usize {
        get_type_info::<byteorder::BigEndian>(self).0
    }
}

/// A decoded value of a TIFF field.
///
/// The endianness of the source data has already been resolved, so a
/// `Value` is self-contained.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Vector of 8-bit unsigned integers.
    Byte(Vec<u8>),
    /// A string made of the bytes up to the first null character,
    /// with trailing whitespace removed.  Bytes that are not valid
    /// UTF-8 are replaced with U+FFFD.
    Ascii(String),
    /// Vector of 16-bit unsigned integers.
    Short(Vec<u16>),
    /// Vector of 32-bit unsigned integers.
    Long(Vec<u32>),
    /// Vector of unsigned rationals.
    /// An unsigned rational number is a pair of 32-bit unsigned integers.
    Rational(Vec<Rational>),
    /// Vector of 8-bit signed integers.  Unused in the Exif specification.
    SByte(Vec<i8>),
    /// Vector of 8-bit bytes.
    Undefined(Vec<u8>),
    /// Vector of 16-bit signed integers.  Unused in the Exif specification.
    SShort(Vec<i16>),
    /// Vector of 32-bit signed integers.
    SLong(Vec<i32>),
    /// Vector of signed rationals.
    /// A signed rational number is a pair of 32-bit signed integers.
    SRational(Vec<SRational>),
    /// Vector of 32-bit (single precision) floating-point numbers.
    /// Unused in the Exif specification.
    Float(Vec<f32>),
    /// Vector of 64-bit (double precision) floating-point numbers.
    /// Unused in the Exif specification.
    Double(Vec<f64>),
}

impl Value {
    /// Returns the value as an unsigned integer if the type is any of
    /// the integer types and the value at `index` is non-negative and
    /// fits in a `u32`.
    ///
    /// # Examples
    /// ```
    /// use exif_info::Value;
    /// assert_eq!(Value::Short(vec![1, 2]).get_uint(1), Some(2));
    /// assert_eq!(Value::SLong(vec![-1]).get_uint(0), None);
    /// assert_eq!(Value::Ascii("1".to_string()).get_uint(0), None);
    /// ```
    pub fn get_uint(&self, index: usize) -> Option<u32> {
        match *self {
            Value::Byte(ref v) => v.get(index).and_then(ToPrimitive::to_u32),
            Value::Short(ref v) => v.get(index).and_then(ToPrimitive::to_u32),
            Value::Long(ref v) => v.get(index).copied(),
            Value::SByte(ref v) => v.get(index).and_then(ToPrimitive::to_u32),
            Value::SShort(ref v) => v.get(index).and_then(ToPrimitive::to_u32),
            Value::SLong(ref v) => v.get(index).and_then(ToPrimitive::to_u32),
            _ => None,
        }
    }

    /// Returns the value as a `u16` if `get_uint` succeeds and the
    /// value fits.
    pub fn get_u16(&self, index: usize) -> Option<u16> {
        self.get_uint(index).and_then(|v| v.to_u16())
    }

    /// Returns the value as a floating-point number.  Integer, rational,
    /// and floating-point types are converted; a rational with a zero
    /// denominator yields 0.0.
    ///
    /// # Examples
    /// ```
    /// use exif_info::{Rational, Value};
    /// let v = Value::Rational(vec![Rational::from((1, 4)), (3, 0).into()]);
    /// assert_eq!(v.get_f64(0), Some(0.25));
    /// assert_eq!(v.get_f64(1), Some(0.0));
    /// assert_eq!(v.get_f64(2), None);
    /// ```
    pub fn get_f64(&self, index: usize) -> Option<f64> {
        match *self {
            Value::Rational(ref v) => v.get(index).map(Rational::to_f64),
            Value::SRational(ref v) => v.get(index).map(SRational::to_f64),
            Value::Float(ref v) => v.get(index).and_then(ToPrimitive::to_f64),
            Value::Double(ref v) => v.get(index).copied(),
            Value::Byte(ref v) => v.get(index).and_then(ToPrimitive::to_f64),
            Value::Short(ref v) => v.get(index).and_then(ToPrimitive::to_f64),
            Value::Long(ref v) => v.get(index).and_then(ToPrimitive::to_f64),
            Value::SByte(ref v) => v.get(index).and_then(ToPrimitive::to_f64),
            Value::SShort(ref v) => v.get(index).and_then(ToPrimitive::to_f64),
            Value::SLong(ref v) => v.get(index).and_then(ToPrimitive::to_f64),
            Value::Ascii(_) | Value::Undefined(_) => None,
        }
    }

    /// Returns the string if the value is of the ASCII type.
    pub fn as_str(&self) -> Option<&str> {
        match *self {
            Value::Ascii(ref s) => Some(s.as_str()),
            _ => None,
        }
    }
}

/// An unsigned rational number, which is a pair of 32-bit unsigned integers.
#[derive(Copy, Clone, PartialEq, Eq)]
pub struct Rational { pub num: u32, pub denom: u32 }

impl Rational {
    /// Converts the value to an f64.  A zero denominator yields 0.0.
    #[inline]
    pub fn to_f64(&self) -> f64 {
        if self.denom == 0 {
            return 0.0;
        }
        self.num as f64 / self.denom as f64
    }
}

impl From<(u32, u32)> for Rational {
    fn from(t: (u32, u32)) -> Rational {
        Rational { num: t.0, denom: t.1 }
    }
}

impl fmt::Debug for Rational {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Rational({}/{})", self.num, self.denom)
    }
}

impl fmt::Display for Rational {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}/{}", self.num, self.denom)
    }
}

/// A signed rational number, which is a pair of 32-bit signed integers.
#[derive(Copy, Clone, PartialEq, Eq)]
pub struct SRational { pub num: i32, pub denom: i32 }

impl SRational {
    /// Converts the value to an f64.  A zero denominator yields 0.0.
    #[inline]
    pub fn to_f64(&self) -> f64 {
        if self.denom == 0 {
            return 0.0;
        }
        self.num as f64 / self.denom as f64
    }
}

impl From<(i32, i32)> for SRational {
    fn from(t: (i32, i32)) -> SRational {
        SRational { num: t.0, denom: t.1 }
    }
}

impl fmt::Debug for SRational {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "SRational({}/{})", self.num, self.denom)
    }
}

impl fmt::Display for SRational {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}/{}", self.num, self.denom)
    }
}

// The parser receives exactly (unit length * count) bytes.
type Parser = fn(&[u8]) -> Value;

// Return the length of a single value and the parser of the type.
pub fn get_type_info<E>(typ: Type) -> (usize, Parser)
where
    E: byteorder::ByteOrder,
{
    match typ {
        Type::Byte => (1, parse_byte),
        Type::Ascii => (1, parse_ascii),
        Type::Short => (2, parse_short::<E>),
        Type::Long => (4, parse_long::<E>),
        Type::Rational => (8, parse_rational::<E>),
        Type::SByte => (1, parse_sbyte),
        Type::Undefined => (1, parse_undefined),
        Type::SShort => (2, parse_sshort::<E>),
        Type::SLong => (4, parse_slong::<E>),
        Type::SRational => (8, parse_srational::<E>),
        Type::Float => (4, parse_float::<E>),
        Type::Double => (8, parse_double::<E>),
    }
}

fn parse_byte(data: &[u8]) -> Value {
    Value::Byte(data.to_vec())
}

fn parse_ascii(data: &[u8]) -> Value {
    let end = data.iter().position(|&b| b == b'\0').unwrap_or(data.len());
    let s = String::from_utf8_lossy(&data[..end]);
    Value::Ascii(s.trim_end().to_string())
}

fn parse_short<E>(data: &[u8]) -> Value
where
    E: byteorder::ByteOrder,
{
    Value::Short(data.chunks_exact(2).map(E::read_u16).collect())
}

fn parse_long<E>(data: &[u8]) -> Value
where
    E: byteorder::ByteOrder,
{
    Value::Long(data.chunks_exact(4).map(E::read_u32).collect())
}

fn parse_rational<E>(data: &[u8]) -> Value
where
    E: byteorder::ByteOrder,
{
    let val = data.chunks_exact(8)
        .map(|c| Rational { num: E::read_u32(&c[..4]), denom: E::read_u32(&c[4..]) })
        .collect();
    Value::Rational(val)
}

fn parse_sbyte(data: &[u8]) -> Value {
    Value::SByte(data.iter().map(|&b| b as i8).collect())
}

fn parse_undefined(data: &[u8]) -> Value {
    Value::Undefined(data.to_vec())
}

fn parse_sshort<E>(data: &[u8]) -> Value
where
    E: byteorder::ByteOrder,
{
    Value::SShort(data.chunks_exact(2).map(E::read_i16).collect())
}

fn parse_slong<E>(data: &[u8]) -> Value
where
    E: byteorder::ByteOrder,
{
    Value::SLong(data.chunks_exact(4).map(E::read_i32).collect())
}

fn parse_srational<E>(data: &[u8]) -> Value
where
    E: byteorder::ByteOrder,
{
    let val = data.chunks_exact(8)
        .map(|c| SRational { num: E::read_i32(&c[..4]), denom: E::read_i32(&c[4..]) })
        .collect();
    Value::SRational(val)
}

// TIFF and Rust use IEEE 754 format, so no conversion is required.
fn parse_float<E>(data: &[u8]) -> Value
where
    E: byteorder::ByteOrder,
{
    Value::Float(data.chunks_exact(4).map(E::read_f32).collect())
}

fn parse_double<E>(data: &[u8]) -> Value
where
    E: byteorder::ByteOrder,
{
    Value::Double(data.chunks_exact(8).map(E::read_f64).collect())
}

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

use thiserror::Error;

/// An error type returned when parsing Exif data.
///
/// The variants are ordered by how far the parser got before giving up.
/// Only `Corrupt` indicates damaged data; `NoExif` is the normal outcome
/// for a JPEG file without Exif attributes.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// Exif attribute information was not found in JPEG data.
    #[error("no Exif data found")]
    NoExif,
    /// The TIFF header starts with neither "II" nor "MM".
    #[error("unknown byte alignment in TIFF header")]
    UnknownByteAlign,
    /// Input data was malformed or truncated.  The message names the
    /// check that failed.
    #[error("corrupt Exif data: {0}")]
    Corrupt(&'static str),
}

impl Error {
    /// Returns the stable numeric code of this error kind.
    ///
    /// # Examples
    /// ```
    /// use exif_info::Error;
    /// assert_eq!(Error::NoExif.code(), 1983);
    /// assert_eq!(Error::Corrupt("Truncated IFD").code(), 1985);
    /// ```
    pub fn code(&self) -> u16 {
        match *self {
            Error::NoExif => 1983,
            Error::UnknownByteAlign => 1984,
            Error::Corrupt(_) => 1985,
        }
    }
}

/// An error type returned when parsing a DateTime-like ASCII value.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum DateTimeError {
    /// The value is blank, which means "unknown" and should be treated
    /// the same as the absence of the field.
    #[error("blank value: {0}")]
    Blank(&'static str),
    /// The value does not follow the expected layout.
    #[error("invalid format: {0}")]
    InvalidFormat(&'static str),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display() {
        assert_eq!(Error::NoExif.to_string(), "no Exif data found");
        assert_eq!(Error::Corrupt("Truncated IFD count").to_string(),
                   "corrupt Exif data: Truncated IFD count");
        assert_eq!(DateTimeError::Blank("DateTime is blank").to_string(),
                   "blank value: DateTime is blank");
    }

    #[test]
    fn codes_are_distinct() {
        assert_eq!(Error::NoExif.code(), 1983);
        assert_eq!(Error::UnknownByteAlign.code(), 1984);
        assert_eq!(Error::Corrupt("x").code(), 1985);
    }
}

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

use tracing::debug;

use crate::error::Error;
use crate::exif::ExifInfo;
use crate::jpeg;
use crate::tiff;

/// A struct to parse the Exif attributes and
/// create an `ExifInfo` instance that holds the results.
///
/// # Examples
/// ```
/// use exif_info::{Error, Reader};
/// let reader = Reader::new();
/// assert_eq!(reader.read_from_jpeg(b"\xff\xd8\xff\xd9"), Err(Error::NoExif));
/// ```
#[derive(Debug, Default)]
pub struct Reader {}

impl Reader {
    /// Constructs a new `Reader`.
    pub fn new() -> Self {
        Self {}
    }

    /// Parses the Exif attributes from raw TIFF data, which follows
    /// the Exif identifier code in an APP1 segment.
    pub fn read_raw(&self, data: &[u8]) -> Result<ExifInfo, Error> {
        let mut parser = tiff::Parser::new();
        parser.parse(data)?;
        debug!(entries = parser.entries.len(), "Parsed TIFF structure");
        Ok(ExifInfo::from_parser(&parser, data))
    }

    /// Parses the payload of an APP1 segment starting with the Exif
    /// identifier code.  If the code is missing, `Error::NoExif` is
    /// returned.
    pub fn read_exif_segment(&self, payload: &[u8]) -> Result<ExifInfo, Error> {
        match payload.strip_prefix(&jpeg::EXIF_ID[..]) {
            Some(data) => self.read_raw(data),
            None => Err(Error::NoExif),
        }
    }

    /// Locates the Exif segment in JPEG data and parses it.
    pub fn read_from_jpeg(&self, data: &[u8]) -> Result<ExifInfo, Error> {
        let attr = jpeg::get_exif_attr(data)?;
        self.read_raw(attr)
    }
}

/// Parses the Exif attributes in a complete JPEG file.
///
/// # Examples
/// ```
/// use exif_info::Error;
/// assert_eq!(exif_info::parse(b"not a jpeg"), Err(Error::NoExif));
/// assert_eq!(exif_info::parse(b"\xff\xd8\xff\xe1\x00\x0aExif\0\0XX")
///                .map_err(|e| e.code()),
///            Err(1984));
/// ```
pub fn parse(data: &[u8]) -> Result<ExifInfo, Error> {
    Reader::new().read_from_jpeg(data)
}

/// Parses the payload of an APP1 segment, which begins with
/// "Exif\0\0" followed by the TIFF data.
pub fn parse_exif_segment(payload: &[u8]) -> Result<ExifInfo, Error> {
    Reader::new().read_exif_segment(payload)
}

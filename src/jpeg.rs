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

use byteorder::BigEndian;
use tracing::debug;

use crate::endian::load_u16;
use crate::error::Error;

mod marker {
    // The first byte of a marker.
    pub const P:    u8 = 0xff;
    // Marker codes.
    pub const Z:    u8 = 0x00;		// Not a marker but a byte stuffing.
    pub const TEM:  u8 = 0x01;
    pub const RST0: u8 = 0xd0;
    pub const RST7: u8 = 0xd7;
    pub const SOI:  u8 = 0xd8;
    pub const EOI:  u8 = 0xd9;
    pub const APP1: u8 = 0xe1;
}

// SOI marker as the JPEG header.
const JPEG_SIG: [u8; 2] = [marker::P, marker::SOI];

// Exif identifier code "Exif\0\0". [EXIF23 4.7.2]
pub const EXIF_ID: [u8; 6] = [0x45, 0x78, 0x69, 0x66, 0x00, 0x00];

/// Get the Exif attribute information segment from JPEG data.
///
/// The returned slice follows the Exif identifier code and ends at the
/// end of the APP1 segment.  Absence of the segment is reported as
/// `Error::NoExif`.
pub fn get_exif_attr(data: &[u8]) -> Result<&[u8], Error> {
    if !is_jpeg(data) {
        return Err(Error::NoExif);
    }
    let mut pos = JPEG_SIG.len();
    loop {
        // Find a marker prefix.  Discard non-ff bytes, which appear if
        // we are in the scan data after SOS or we are out of sync.
        let prefix = match data[pos..].iter().position(|&b| b == marker::P) {
            Some(n) => pos + n,
            None => return Err(Error::NoExif),
        };
        // Get a marker code, skipping fill bytes.
        let code_at = match data[prefix..].iter().position(|&b| b != marker::P) {
            Some(n) => prefix + n,
            None => return Err(Error::NoExif),
        };
        let code = data[code_at];
        pos = code_at + 1;
        // Continue or return early on stand-alone markers.
        match code {
            marker::Z | marker::TEM | marker::RST0..=marker::RST7 |
            marker::SOI => continue,
            marker::EOI => return Err(Error::NoExif),
            _ => {},
        }
        // Read marker segments.
        let seglen = match load_u16::<BigEndian>(data, pos) {
            Some(len) => len as usize,
            None => return Err(Error::NoExif),
        };
        let seg = &data[pos + 2..];
        if code == marker::APP1 && seg.starts_with(&EXIF_ID) {
            if seglen < 2 + EXIF_ID.len() || seglen - 2 > seg.len() {
                return Err(Error::Corrupt("Invalid Exif segment length"));
            }
            debug!(offset = pos - 2, len = seglen, "Found Exif segment");
            return Ok(&seg[EXIF_ID.len()..seglen - 2]);
        }
        if seglen < 2 || seglen - 2 > seg.len() {
            // The rest of the data cannot be walked.
            return Err(Error::NoExif);
        }
        pos += seglen;
    }
}

pub fn is_jpeg(buf: &[u8]) -> bool {
    buf.starts_with(&JPEG_SIG)
}

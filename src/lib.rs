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

//! This is a pure-Rust library to extract commonly used Exif
//! attributes from JPEG images.
//!
//! The APP1 segment carrying the Exif data is located in the JPEG
//! data, the TIFF structure in it is walked through the 0th IFD, the
//! Exif IFD, and the GPS IFD, and the recognized fields are stored
//! into a flat `ExifInfo` record.  Fields that are absent keep their
//! cleared values (zero or an empty string).
//!
//! # Examples
//!
//! ```
//! use exif_info::{ExifInfo, Error};
//!
//! fn describe(jpeg: &[u8]) -> Result<String, Error> {
//!     let info = exif_info::parse(jpeg)?;
//!     Ok(format!("{} {} f/{}", info.make, info.model, info.f_number))
//! }
//!
//! assert_eq!(describe(b"\xff\xd8\xff\xd9"), Err(Error::NoExif));
//!
//! // A record can also be reused.
//! let mut info = ExifInfo::default();
//! assert!(info.parse_from(b"\xff\xd8\xff\xd9").is_err());
//! ```
//!
//! Each error also has a stable numeric code; see `Error::code`.
//!
//! # Logging
//!
//! Diagnostics are emitted through the `tracing` crate at the debug and
//! trace levels.  Nothing is printed unless the application installs
//! a subscriber.

pub use endian::ByteOrder;
pub use error::{DateTimeError, Error};
pub use exif::{Coord, ExifInfo, Geolocation};
pub use ifd::DateTime;
pub use jpeg::get_exif_attr as get_exif_attr_from_jpeg;
pub use reader::{parse, parse_exif_segment, Reader};
pub use tag::{Context, Tag};
pub use value::{Rational, SRational, Type, Value};

#[cfg(test)]
#[macro_use]
mod tmacro;

mod endian;
mod error;
mod exif;
mod ifd;
mod jpeg;
mod reader;
mod tag;
mod tiff;
mod util;
mod value;

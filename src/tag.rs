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

/// A tag of a TIFF/Exif field.
///
/// Some tags have different meanings depending on the context where they
/// appear.  For example, tag number 1 in the GPS IFD is GPSLatitudeRef
/// but it has no meaning in the primary IFD.  So `Tag` carries the
/// context (the IFD it was found in) as well as the number.
///
/// This is not an enum so that unknown tag numbers can be represented
/// without a special variant.
///
/// # Examples
/// ```
/// use exif_info::{Context, Tag};
/// assert_eq!(Tag::Make, Tag(Context::Tiff, 0x10f));
/// assert_eq!(Tag::Make.to_string(), "Make");
/// assert_eq!(Tag(Context::Exif, 0xffff).to_string(), "Tag(Exif, 65535)");
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Tag(pub Context, pub u16);

impl Tag {
    /// Returns the context of the tag.
    #[inline]
    pub fn context(self) -> Context {
        self.0
    }

    /// Returns the tag number.
    #[inline]
    pub fn number(self) -> u16 {
        self.1
    }

    /// Returns the name of the tag if this crate maps it to a field
    /// of `ExifInfo` (or follows it as a sub-IFD pointer).
    #[inline]
    pub fn name(self) -> Option<&'static str> {
        get_name(self)
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match get_name(*self) {
            Some(name) => f.pad(name),
            None => f.pad(&format!("Tag({:?}, {})", self.0, self.1)),
        }
    }
}

/// An enum that indicates the IFD in which a tag appears.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Context {
    /// The 0th IFD (TIFF attributes).
    Tiff,
    /// The Exif IFD.
    Exif,
    /// The GPS IFD.
    Gps,
}

macro_rules! generate_well_known_tag_constants {
    (
        $( |$ctx:path| $(
            $( #[$attr:meta] )*
            ($name:ident, $num:expr, $desc:expr)
        ),+, )+
    ) => (
        #[allow(non_upper_case_globals)]
        impl Tag {
            $($(
                $( #[$attr] )*
                #[doc = $desc]
                pub const $name: Tag = Tag($ctx, $num);
            )+)+
        }

        fn get_name(tag: Tag) -> Option<&'static str> {
            match tag {
                $($(
                    Tag::$name => Some(stringify!($name)),
                )+)+
                _ => None,
            }
        }
    )
}

// Tag constant names do not follow the Rust naming conventions but
// the Exif field names: camel cases and all-capital acronyms.
generate_well_known_tag_constants!(
    // Exif-specific IFDs [EXIF23 4.6.3].
    |Context::Tiff|

    /// A pointer to the Exif IFD.  It is followed by the parser and
    /// not mapped to a field.
    (ExifIFDPointer, 0x8769, "Exif IFD pointer"),
    /// A pointer to the GPS IFD.  It is followed by the parser and
    /// not mapped to a field.
    (GPSInfoIFDPointer, 0x8825, "GPS Info IFD pointer"),

    // TIFF primary and thumbnail attributes [EXIF23 4.6.4 Table 4,
    // 4.6.8 Table 17, and 4.6.8 Table 21].
    (BitsPerSample, 0x102, "Number of bits per component"),
    (ImageDescription, 0x10e, "Image title"),
    (Make, 0x10f, "Manufacturer of image input equipment"),
    (Model, 0x110, "Model of image input equipment"),
    (Orientation, 0x112, "Orientation of image"),
    (Software, 0x131, "Software used"),
    (DateTime, 0x132, "File change date and time"),
    (Copyright, 0x8298, "Copyright holder"),

    // Exif IFD attributes [EXIF23 4.6.5 Table 7 and 4.6.8 Table 18].
    |Context::Exif|

    (ExposureTime, 0x829a, "Exposure time"),
    (FNumber, 0x829d, "F number"),
    (ExposureProgram, 0x8822, "Exposure program"),
    (PhotographicSensitivity, 0x8827, "Photographic sensitivity"),
    (DateTimeOriginal, 0x9003, "Date and time of original data generation"),
    (DateTimeDigitized, 0x9004, "Date and time of digital data generation"),
    (ShutterSpeedValue, 0x9201, "Shutter speed"),
    (ExposureBiasValue, 0x9204, "Exposure bias"),
    (SubjectDistance, 0x9206, "Subject distance"),
    (MeteringMode, 0x9207, "Metering mode"),
    (LightSource, 0x9208, "Light source"),
    (Flash, 0x9209, "Flash"),
    (FocalLength, 0x920a, "Lens focal length"),
    (SubSecTimeOriginal, 0x9291, "DateTimeOriginal subseconds"),
    (PixelXDimension, 0xa002, "Valid image width"),
    (PixelYDimension, 0xa003, "Valid image height"),
    (WhiteBalance, 0xa403, "White balance"),
    (FocalLengthIn35mmFilm, 0xa405, "Focal length in 35 mm film"),

    // GPS attributes [EXIF23 4.6.6 Table 15 and 4.6.8 Table 19].
    |Context::Gps|

    (GPSLatitudeRef, 0x1, "North or south latitude"),
    (GPSLatitude, 0x2, "Latitude"),
    (GPSLongitudeRef, 0x3, "East or West Longitude"),
    (GPSLongitude, 0x4, "Longitude"),
    (GPSAltitudeRef, 0x5, "Altitude reference"),
    (GPSAltitude, 0x6, "Altitude"),
);

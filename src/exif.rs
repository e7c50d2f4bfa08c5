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

use tracing::{debug, trace};

use crate::{
    endian::ByteOrder,
    error::Error,
    ifd::{DateTime, IfdEntry},
    reader,
    tiff::Parser,
    Tag, Value,
};

/// A struct that holds the parsed Exif attributes.
///
/// A `ExifInfo` created by `default()` is in the cleared state: all
/// numbers are zero and all strings are empty.  Parsing fills in the
/// fields whose tags are present in the data and leaves the rest at
/// their cleared values.
///
/// # Examples
/// ```
/// use exif_info::ExifInfo;
/// let mut info = ExifInfo::default();
/// // Not a JPEG file; the record stays cleared.
/// assert!(info.parse_from(b"GIF89a").is_err());
/// assert_eq!(info, ExifInfo::default());
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExifInfo {
    /// Byte order of the TIFF structure, or None if nothing was parsed.
    pub byte_order: Option<ByteOrder>,
    /// Image description.
    pub image_description: String,
    /// Camera manufacturer's name.
    pub make: String,
    /// Camera model.
    pub model: String,
    /// Image orientation: 1 for the upper left, 3 for the lower right,
    /// 6 for the upper right, 8 for the lower left, 0 if unspecified.
    pub orientation: u16,
    /// Number of bits per component.
    pub bits_per_sample: u16,
    /// Software used.
    pub software: String,
    /// File change date and time.
    pub date_time: String,
    /// Original file date and time.
    pub date_time_original: String,
    /// Digitization date and time.
    pub date_time_digitized: String,
    /// Sub-second time that the original picture was taken.
    pub sub_sec_time_original: String,
    /// Copyright information.
    pub copyright: String,
    /// Exposure time in seconds.
    pub exposure_time: f64,
    /// F-number (F/stop).
    pub f_number: f64,
    /// ISO speed.
    pub iso_speed_ratings: u16,
    /// Shutter speed in APEX units (log2 of the reciprocal of the
    /// exposure time).  May be negative.
    pub shutter_speed_value: f64,
    /// Exposure bias in EV.
    pub exposure_bias_value: f64,
    /// Exposure program.
    pub exposure_program: u16,
    /// White balance: 0 for auto, 1 for manual.
    pub white_balance: u16,
    /// Distance to the focus point in meters.
    pub subject_distance: f64,
    /// Focal length of the lens in millimeters.
    pub focal_length: f64,
    /// Focal length in 35 mm film equivalent.
    pub focal_length_in_35mm: u16,
    /// Flash status: 0 for no flash, others for flash used.
    pub flash: u16,
    /// Metering mode: 1 for average, 2 for center weighted average,
    /// 3 for spot, 4 for multi-spot, 5 for multi-segment, 6 for partial,
    /// 255 for other.
    pub metering_mode: u16,
    /// Light source.
    pub light_source: u16,
    /// Image width reported in the Exif data.
    pub image_width: u32,
    /// Image height reported in the Exif data.
    pub image_height: u32,
    /// GPS information.
    pub geolocation: Geolocation,
}

/// GPS information embedded in the Exif data.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Geolocation {
    /// Latitude in decimal degrees; negative for the south.
    pub latitude: f64,
    /// Longitude in decimal degrees; negative for the west.
    pub longitude: f64,
    /// Latitude as degrees, minutes, and seconds.
    pub lat_components: Coord,
    /// Longitude as degrees, minutes, and seconds.
    pub lon_components: Coord,
    /// Altitude in meters.  Its sign is not adjusted; see `altitude_ref`.
    pub altitude: f64,
    /// 0 for above the sea level, 1 for below the sea level.
    pub altitude_ref: u8,
}

/// A coordinate in degrees, minutes, and seconds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coord {
    pub degrees: f64,
    pub minutes: f64,
    pub seconds: f64,
    /// 'N', 'S', 'E', or 'W'; '\0' if the reference tag is absent.
    pub direction: char,
}

impl Default for Coord {
    fn default() -> Self {
        Coord { degrees: 0.0, minutes: 0.0, seconds: 0.0, direction: '\0' }
    }
}

impl Coord {
    /// Converts the coordinate to decimal degrees.  The value is negated
    /// for the south and the west.
    ///
    /// # Examples
    /// ```
    /// use exif_info::Coord;
    /// let c = Coord { degrees: 40.0, minutes: 30.0, seconds: 36.0,
    ///                 direction: 'W' };
    /// assert!((c.decimal() - -40.51).abs() < 1e-9);
    /// ```
    pub fn decimal(&self) -> f64 {
        let deg = self.degrees + self.minutes / 60.0 + self.seconds / 3600.0;
        match self.direction {
            'S' | 'W' => -deg,
            _ => deg,
        }
    }
}

impl ExifInfo {
    /// Resets all fields to the cleared state.
    #[inline]
    pub fn clear(&mut self) {
        *self = ExifInfo::default();
    }

    /// Parses the Exif attributes in JPEG data into this record.
    ///
    /// The record is cleared first.  If an error occurred, the record
    /// is left in the cleared state.
    pub fn parse_from(&mut self, data: &[u8]) -> Result<(), Error> {
        self.clear();
        *self = reader::parse(data)?;
        Ok(())
    }

    /// Returns DateTimeOriginal with SubSecTimeOriginal as a `DateTime`.
    ///
    /// Returns None if the field is absent, blank, or malformed.
    ///
    /// # Examples
    /// ```
    /// use exif_info::ExifInfo;
    /// let mut info = ExifInfo::default();
    /// assert!(info.date_time_original_parsed().is_none());
    /// info.date_time_original = "2013:02:14 18:31:07".to_string();
    /// info.sub_sec_time_original = "25".to_string();
    /// let dt = info.date_time_original_parsed().unwrap();
    /// assert_eq!(dt.to_string(), "2013-02-14 18:31:07");
    /// assert_eq!(dt.nanosecond, Some(250_000_000));
    /// ```
    pub fn date_time_original_parsed(&self) -> Option<DateTime> {
        let mut dt = DateTime::from_ascii(self.date_time_original.as_bytes()).ok()?;
        if dt.parse_subsec(self.sub_sec_time_original.as_bytes()).is_err() {
            dt.nanosecond = None;
        }
        Some(dt)
    }

    // Builds the record from the entries collected by the parser.
    pub(crate) fn from_parser(parser: &Parser, data: &[u8]) -> ExifInfo {
        let mut info = ExifInfo {
            byte_order: parser.byte_order,
            ..ExifInfo::default()
        };
        let le = parser.little_endian();
        for entry in &parser.entries {
            info.apply(entry, data, le);
        }
        // The reference tags may appear before or after the values.
        let geo = &mut info.geolocation;
        geo.latitude = geo.lat_components.decimal();
        geo.longitude = geo.lon_components.decimal();
        info
    }

    fn apply(&mut self, entry: &IfdEntry, data: &[u8], le: bool) {
        if entry.tag.name().is_none() {
            trace!(tag = %entry.tag, "Skipping unknown tag");
            return;
        }
        let value = match entry.decode(data, le) {
            Some(value) => value,
            None => return,
        };
        let geo = &mut self.geolocation;
        let applied = match entry.tag {
            Tag::ImageDescription => set_str(&mut self.image_description, &value),
            Tag::Make => set_str(&mut self.make, &value),
            Tag::Model => set_str(&mut self.model, &value),
            Tag::Orientation => set(&mut self.orientation, value.get_u16(0)),
            Tag::BitsPerSample => set(&mut self.bits_per_sample, value.get_u16(0)),
            Tag::Software => set_str(&mut self.software, &value),
            Tag::DateTime => set_str(&mut self.date_time, &value),
            Tag::Copyright => set_str(&mut self.copyright, &value),

            Tag::ExposureTime => set(&mut self.exposure_time, value.get_f64(0)),
            Tag::FNumber => set(&mut self.f_number, value.get_f64(0)),
            Tag::ExposureProgram => set(&mut self.exposure_program, value.get_u16(0)),
            Tag::PhotographicSensitivity =>
                set(&mut self.iso_speed_ratings, value.get_u16(0)),
            Tag::DateTimeOriginal => set_str(&mut self.date_time_original, &value),
            Tag::DateTimeDigitized => set_str(&mut self.date_time_digitized, &value),
            Tag::ShutterSpeedValue =>
                set(&mut self.shutter_speed_value, value.get_f64(0)),
            Tag::ExposureBiasValue =>
                set(&mut self.exposure_bias_value, value.get_f64(0)),
            Tag::SubjectDistance => set(&mut self.subject_distance, value.get_f64(0)),
            Tag::MeteringMode => set(&mut self.metering_mode, value.get_u16(0)),
            Tag::LightSource => set(&mut self.light_source, value.get_u16(0)),
            Tag::Flash => set(&mut self.flash, value.get_u16(0)),
            Tag::FocalLength => set(&mut self.focal_length, value.get_f64(0)),
            Tag::SubSecTimeOriginal =>
                set_str(&mut self.sub_sec_time_original, &value),
            Tag::PixelXDimension => set(&mut self.image_width, value.get_uint(0)),
            Tag::PixelYDimension => set(&mut self.image_height, value.get_uint(0)),
            Tag::WhiteBalance => set(&mut self.white_balance, value.get_u16(0)),
            Tag::FocalLengthIn35mmFilm =>
                set(&mut self.focal_length_in_35mm, value.get_u16(0)),

            Tag::GPSLatitudeRef =>
                set(&mut geo.lat_components.direction, direction(&value)),
            Tag::GPSLatitude => {
                let coord = dms(&value, geo.lat_components);
                set(&mut geo.lat_components, coord)
            }
            Tag::GPSLongitudeRef =>
                set(&mut geo.lon_components.direction, direction(&value)),
            Tag::GPSLongitude => {
                let coord = dms(&value, geo.lon_components);
                set(&mut geo.lon_components, coord)
            }
            Tag::GPSAltitudeRef =>
                set(&mut geo.altitude_ref, value.get_uint(0).and_then(|v| u8::try_from(v).ok())),
            Tag::GPSAltitude => set(&mut geo.altitude, value.get_f64(0)),
            _ => true,
        };
        if !applied {
            debug!(
                tag = %entry.tag,
                typ = ?entry.typ,
                count = entry.count,
                "Ignoring field of unexpected type"
            );
        }
    }
}

fn set<T>(field: &mut T, value: Option<T>) -> bool {
    match value {
        Some(v) => {
            *field = v;
            true
        }
        None => false,
    }
}

fn set_str(field: &mut String, value: &Value) -> bool {
    set(field, value.as_str().map(str::to_string))
}

fn direction(value: &Value) -> Option<char> {
    value.as_str().and_then(|s| s.chars().next())
}

// Replaces the degrees, minutes, and seconds of `coord`, keeping the
// direction.
fn dms(value: &Value, coord: Coord) -> Option<Coord> {
    Some(Coord {
        degrees: value.get_f64(0)?,
        minutes: value.get_f64(1)?,
        seconds: value.get_f64(2)?,
        ..coord
    })
}

#[cfg(test)]
mod tests {
    use crate::ifd::ValueRef;
    use crate::value::Type;

    use super::*;

    fn entry(tag: Tag, typ: Type, count: u32, value: [u8; 4]) -> IfdEntry {
        IfdEntry { tag, typ, count, len: typ.unit_len() * count as usize,
                   value: ValueRef::Inline(value) }
    }

    #[test]
    fn cleared() {
        let info = ExifInfo::default();
        assert_eq!(info.byte_order, None);
        assert_eq!(info.make, "");
        assert_eq!(info.exposure_time, 0.0);
        assert_eq!(info.image_width, 0);
        assert_eq!(info.geolocation.lat_components.direction, '\0');
        assert_eq!(info.geolocation.latitude, 0.0);
    }

    #[test]
    fn clear_twice() {
        let mut info = ExifInfo::default();
        info.make = "Canon".to_string();
        info.geolocation.altitude = 12.5;
        info.clear();
        let once = info.clone();
        info.clear();
        assert_eq!(info, once);
        assert_eq!(info, ExifInfo::default());
    }

    #[test]
    fn gps_decimal() {
        let mut c = Coord { degrees: 40.0, minutes: 26.0, seconds: 46.0,
                            direction: 'N' };
        assert!((c.decimal() - 40.4461111).abs() < 1e-6);
        c.direction = 'S';
        assert!((c.decimal() + 40.4461111).abs() < 1e-6);
        c.direction = 'E';
        assert!(c.decimal() > 0.0);
        c.direction = 'W';
        assert!(c.decimal() < 0.0);
        c.direction = '\0';
        assert!(c.decimal() > 0.0);
    }

    #[test]
    fn coercion() {
        let mut info = ExifInfo::default();
        // Orientation as LONG instead of SHORT (big endian).
        info.apply(&entry(Tag::Orientation, Type::Long, 1, *b"\0\0\0\x06"),
                   b"", false);
        assert_eq!(info.orientation, 6);
        // PixelXDimension as SHORT instead of LONG (little endian).
        info.apply(&entry(Tag::PixelXDimension, Type::Short, 1, *b"\xa0\x0f\0\0"),
                   b"", true);
        assert_eq!(info.image_width, 4000);
    }

    #[test]
    fn mismatch_keeps_default() {
        let mut info = ExifInfo::default();
        // Make as SHORT; Orientation as ASCII; a value too big for u16.
        info.apply(&entry(Tag::Make, Type::Short, 1, *b"\0\x01\0\0"), b"", false);
        info.apply(&entry(Tag::Orientation, Type::Ascii, 2, *b"6\0\0\0"), b"", false);
        info.apply(&entry(Tag::Flash, Type::Long, 1, *b"\0\x01\0\0"), b"", false);
        // Altitude reference as a negative SSHORT.
        info.apply(&entry(Tag::GPSAltitudeRef, Type::SShort, 1, *b"\xff\xff\0\0"),
                   b"", false);
        assert_eq!(info, ExifInfo::default());
    }

    #[test]
    fn unknown_tag() {
        let mut info = ExifInfo::default();
        info.apply(&entry(Tag(crate::Context::Tiff, 0x1234), Type::Short, 1,
                          *b"\0\x01\0\0"), b"", false);
        assert_eq!(info, ExifInfo::default());
    }

    #[test]
    fn duplicate_last_wins() {
        let mut info = ExifInfo::default();
        info.apply(&entry(Tag::Model, Type::Ascii, 2, *b"A\0\0\0"), b"", false);
        info.apply(&entry(Tag::Model, Type::Ascii, 2, *b"B\0\0\0"), b"", false);
        assert_eq!(info.model, "B");
    }

    #[test]
    fn date_time_original_parsed() {
        let mut info = ExifInfo::default();
        info.date_time_original = "    :  :     :  :  ".to_string();
        assert_pat!(info.date_time_original_parsed(), None);
        info.date_time_original = "2020:01:02 03:04:05".to_string();
        info.sub_sec_time_original = "x".to_string();
        let dt = info.date_time_original_parsed().unwrap();
        assert_eq!(dt.second, 5);
        assert_eq!(dt.nanosecond, None);
    }
}

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

use byteorder::{BigEndian, LittleEndian};
use tracing::{debug, trace};

use crate::endian::{load_u16, load_u32, ByteOrder};
use crate::error::Error;
use crate::ifd::{IfdEntry, ValueRef};
use crate::tag::{Context, Tag};
use crate::value::{get_type_info, Type};

// TIFF header magic numbers [EXIF23 4.5.2].
const TIFF_BE: u16 = 0x4d4d;
const TIFF_LE: u16 = 0x4949;
const TIFF_FORTY_TWO: u16 = 0x002a;

// Length of an IFD entry: tag, type, count, and value offset.
const IFD_ENTRY_LEN: usize = 12;

/// Walks the TIFF structure of Exif data and collects the IFD entries
/// of the 0th IFD, the Exif IFD, and the GPS IFD.
///
/// Values are not decoded here; each entry records where its value is,
/// after the range has been checked.
#[derive(Debug, Default)]
pub struct Parser {
    pub entries: Vec<IfdEntry>,
    pub byte_order: Option<ByteOrder>,
}

// Offsets of the child IFDs found in the 0th IFD.
#[derive(Debug, Default, PartialEq, Eq)]
struct ChildIfds {
    exif: Option<usize>,
    gps: Option<usize>,
}

impl Parser {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if the data is in the little-endian byte order.
    #[inline]
    pub fn little_endian(&self) -> bool {
        self.byte_order.map_or(false, ByteOrder::is_little_endian)
    }

    /// Parses the TIFF data that follows the Exif identifier code.
    pub fn parse(&mut self, data: &[u8]) -> Result<(), Error> {
        // Check the byte order and call the real parser.
        let order = load_u16::<BigEndian>(data, 0)
            .ok_or(Error::Corrupt("Truncated TIFF header"))?;
        match order {
            TIFF_BE => {
                self.byte_order = Some(ByteOrder::BigEndian);
                self.parse_sub::<BigEndian>(data)
            }
            TIFF_LE => {
                self.byte_order = Some(ByteOrder::LittleEndian);
                self.parse_sub::<LittleEndian>(data)
            }
            _ => Err(Error::UnknownByteAlign),
        }
    }

    fn parse_sub<E>(&mut self, data: &[u8]) -> Result<(), Error>
    where
        E: byteorder::ByteOrder,
    {
        // Parse the rest of the header (42 and the IFD offset).
        let magic = load_u16::<E>(data, 2)
            .ok_or(Error::Corrupt("Truncated TIFF header"))?;
        if magic != TIFF_FORTY_TWO {
            return Err(Error::Corrupt("Invalid forty two"));
        }
        let ifd0_offset = load_u32::<E>(data, 4)
            .ok_or(Error::Corrupt("Truncated TIFF header"))? as usize;
        debug!(
            byte_order = ?self.byte_order,
            ifd0_offset = ifd0_offset,
            "Parsing TIFF structure"
        );

        // The depth is fixed: the child IFDs are visited after the 0th
        // IFD has been consumed, and pointers in them are not followed.
        let children = self.parse_ifd::<E>(data, ifd0_offset, Context::Tiff)?;
        if let Some(ofs) = children.exif {
            self.parse_ifd::<E>(data, ofs, Context::Exif)?;
        }
        if let Some(ofs) = children.gps {
            self.parse_ifd::<E>(data, ofs, Context::Gps)?;
        }
        Ok(())
    }

    // Parse IFD [EXIF23 4.6.2].  The offset to the next IFD is not read
    // because the 1st IFD only describes the thumbnail.
    fn parse_ifd<E>(
        &mut self,
        data: &[u8],
        offset: usize,
        ctx: Context,
    ) -> Result<ChildIfds, Error>
    where
        E: byteorder::ByteOrder,
    {
        // Count (the number of the entries).
        let count = load_u16::<E>(data, offset)
            .ok_or(Error::Corrupt("Truncated IFD count"))? as usize;

        // Array of entries.  (count * 12) never overflows.
        if data.len() - offset - 2 < count * IFD_ENTRY_LEN {
            return Err(Error::Corrupt("Truncated IFD"));
        }
        debug!(context = ?ctx, offset = offset, count = count, "Parsing IFD");

        let mut children = ChildIfds::default();
        for i in 0..count {
            let entry = match Self::parse_ifd_entry::<E>(
                data, offset + 2 + i * IFD_ENTRY_LEN, ctx)? {
                Some(entry) => entry,
                None => continue,
            };
            match entry.tag {
                Tag::ExifIFDPointer => {
                    children.exif = Some(Self::child_offset::<E>(data, &entry)?)
                }
                Tag::GPSInfoIFDPointer => {
                    children.gps = Some(Self::child_offset::<E>(data, &entry)?)
                }
                _ => self.entries.push(entry),
            }
        }
        Ok(children)
    }

    fn parse_ifd_entry<E>(
        data: &[u8],
        offset: usize,
        ctx: Context,
    ) -> Result<Option<IfdEntry>, Error>
    where
        E: byteorder::ByteOrder,
    {
        // The size of entry has been checked in parse_ifd().
        let field = |at: usize| {
            load_u32::<E>(data, at).ok_or(Error::Corrupt("Truncated IFD"))
        };
        let tag = load_u16::<E>(data, offset).ok_or(Error::Corrupt("Truncated IFD"))?;
        let typ = load_u16::<E>(data, offset + 2).ok_or(Error::Corrupt("Truncated IFD"))?;
        let cnt = field(offset + 4)?;
        let valofs_at = offset + 8;
        let tag = Tag(ctx, tag);

        let typ = match Type::from_code(typ) {
            Some(typ) => typ,
            None => {
                trace!(tag = %tag, typ = typ, "Skipping entry of unknown type");
                return Ok(None);
            }
        };
        let (unitlen, _parser) = get_type_info::<E>(typ);
        let vallen = unitlen
            .checked_mul(cnt as usize)
            .ok_or(Error::Corrupt("Invalid entry count"))?;
        let value = if vallen <= 4 {
            let mut buf = [0u8; 4];
            buf.copy_from_slice(&data[valofs_at..valofs_at + 4]);
            ValueRef::Inline(buf)
        } else {
            let ofs = field(valofs_at)? as usize;
            if data.len() < ofs || data.len() - ofs < vallen {
                return Err(Error::Corrupt("Truncated field value"));
            }
            ValueRef::Offset(ofs)
        };
        Ok(Some(IfdEntry { tag, typ, count: cnt, len: vallen, value }))
    }

    fn child_offset<E>(data: &[u8], pointer: &IfdEntry) -> Result<usize, Error>
    where
        E: byteorder::ByteOrder,
    {
        // A pointer field has type == LONG and count == 1, so the
        // value (IFD offset) must be embedded in the "value offset"
        // element of the field.
        pointer
            .decode_with::<E>(data)
            .and_then(|v| v.get_uint(0))
            .map(|ofs| ofs as usize)
            .ok_or(Error::Corrupt("Invalid pointer"))
    }
}

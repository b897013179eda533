//! Codec - payload conventions between engine memory and the host.
//!
//! - Strings arrive as `(offset, length)`: one byte is one character.
//! - Numeric arrays arrive as `(offset, count)` of little-endian `u32`.
//! - Grid area ids leave as letter strings so adjacent names in a
//!   `grid-template-areas` value never merge into one token.
//!
//! # Narrow text
//!
//! [`decode_narrow`] does NOT decode UTF-8. Each byte maps to the code point
//! of the same value (U+0000..U+00FF), so a multi-byte sequence renders as
//! one character per byte. The engine only sends single-byte text; changing
//! this means changing the engine's encoder too.

use crate::error::CodecError;

/// Bytes per numeric array element.
pub const U32_STRIDE: usize = 4;

fn region(buffer: &[u8], offset: usize, len: usize) -> Result<&[u8], CodecError> {
    let end = offset
        .checked_add(len)
        .ok_or(CodecError::Overflow { offset, count: len })?;
    buffer.get(offset..end).ok_or(CodecError::OutOfBounds {
        offset,
        len,
        available: buffer.len(),
    })
}

// =============================================================================
// Decoding
// =============================================================================

/// Read `length` bytes at `offset`, one character per byte.
pub fn decode_narrow(buffer: &[u8], offset: usize, length: usize) -> Result<String, CodecError> {
    let bytes = region(buffer, offset, length)?;
    Ok(bytes.iter().map(|&b| char::from(b)).collect())
}

/// Borrowed view over little-endian `u32` values in engine memory.
///
/// No copy is made; values are assembled on access. The offset need not be
/// 4-byte aligned.
#[derive(Debug, Clone, Copy)]
pub struct U32View<'a> {
    bytes: &'a [u8],
}

impl<'a> U32View<'a> {
    pub fn len(&self) -> usize {
        self.bytes.len() / U32_STRIDE
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<u32> {
        let start = index.checked_mul(U32_STRIDE)?;
        let chunk = self.bytes.get(start..start.checked_add(U32_STRIDE)?)?;
        Some(u32::from_le_bytes(chunk.try_into().ok()?))
    }

    pub fn iter(&self) -> impl Iterator<Item = u32> + 'a {
        self.bytes
            .chunks_exact(U32_STRIDE)
            .map(|c| u32::from_le_bytes([c[0], c[1], c[2], c[3]]))
    }
}

/// View `count` little-endian `u32` values starting at `offset`.
pub fn decode_u32_array(
    buffer: &[u8],
    offset: usize,
    count: usize,
) -> Result<U32View<'_>, CodecError> {
    let len = count
        .checked_mul(U32_STRIDE)
        .ok_or(CodecError::Overflow { offset, count })?;
    let bytes = region(buffer, offset, len)?;
    Ok(U32View { bytes })
}

// =============================================================================
// Encoding
// =============================================================================

/// Encode a grid area id as letters, one per decimal digit (0→a .. 9→j).
///
/// `encode_area_id(19) == "bj"`.
pub fn encode_area_id(id: u32) -> String {
    id.to_string()
        .bytes()
        .map(|digit| char::from(b'a' + (digit - b'0')))
        .collect()
}

/// Build a `grid-template-areas` value from row-major area ids.
///
/// Produces `height` quoted rows of `width` tokens, each token followed by a
/// space: ids `[0, 1, 2, 3]` at 2x2 give `"a b ""c d "`.
pub fn grid_template_areas(ids: &U32View<'_>, width: usize, height: usize) -> String {
    let mut template = String::new();
    for row in 0..height {
        template.push('"');
        for col in 0..width {
            if let Some(id) = ids.get(row * width + col) {
                template.push_str(&encode_area_id(id));
            }
            template.push(' ');
        }
        template.push('"');
    }
    template
}

/// Build a track list of fractional weights: `[1, 2, 3]` gives `"1fr 2fr 3fr "`.
pub fn fr_tracks(weights: impl IntoIterator<Item = u32>) -> String {
    let mut tracks = String::new();
    for weight in weights {
        tracks.push_str(&weight.to_string());
        tracks.push_str("fr ");
    }
    tracks
}

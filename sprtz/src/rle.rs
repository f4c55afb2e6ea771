//! 4-bit run-length coding of the pixel plane.
//!
//! ```text
//! short run, 1..15 pixels:   [count:4][value:4]
//! long run, 1..255 pixels:   0xF0 [count:8] [value:4][pad:4 = 0]
//! ```
//!
//! Runs never cross a row boundary when encoding, so a solid 8 pixel wide
//! row is always the single byte `(8 << 4) | value`. The decoder does not
//! care about rows and accepts runs spanning several of them.
//!
//! A short run of fifteen zeros would be the byte 0xF0, which reads as the
//! long run marker. The encoder writes that run in long form instead.

use crate::constants::{
    LONG_RUN_LENGTH, LONG_RUN_MARKER, LONG_RUN_MAX, MAX_PIXEL_VALUE, SHORT_RUN_MAX,
};
use crate::error::SprtzError;

/// Upper bound on the compressed size of `pixel_count` pixels.
pub fn estimate_compressed_size(pixel_count: usize) -> usize {
    pixel_count * LONG_RUN_LENGTH
}

/// Compresses row-major `pixels`, `row_width` pixels per row.
///
/// A `row_width` of 0 treats the whole buffer as one row.
pub fn compress(pixels: &[u8], row_width: usize) -> Result<Vec<u8>, SprtzError> {
    if let Some((index, &value)) = pixels
        .iter()
        .enumerate()
        .find(|(_, value)| **value > MAX_PIXEL_VALUE)
    {
        return Err(SprtzError::InvalidPixelValue { index, value });
    }

    let row_width = if row_width == 0 {
        pixels.len().max(1)
    } else {
        row_width
    };

    let mut res = Vec::with_capacity(pixels.len());

    for row in pixels.chunks(row_width) {
        let mut index = 0;

        while index < row.len() {
            let value = row[index];
            let run = row[index..]
                .iter()
                .take(LONG_RUN_MAX)
                .take_while(|&&p| p == value)
                .count();

            write_run(&mut res, run, value);
            index += run;
        }
    }

    Ok(res)
}

fn write_run(out: &mut Vec<u8>, count: usize, value: u8) {
    let collides_with_marker = count == SHORT_RUN_MAX && value == 0;

    if count <= SHORT_RUN_MAX && !collides_with_marker {
        out.push(((count as u8) << 4) | value);
    } else {
        out.extend([LONG_RUN_MARKER, count as u8, value << 4]);
    }
}

/// Expands `data` and requires exactly `expected` pixels.
pub fn decompress(data: &[u8], expected: usize) -> Result<Vec<u8>, SprtzError> {
    let mut res = Vec::with_capacity(expected);
    let mut offset = 0;

    while offset < data.len() {
        let byte = data[offset];

        let (count, value, length) = if byte == LONG_RUN_MARKER {
            if offset + LONG_RUN_LENGTH > data.len() {
                return Err(SprtzError::TruncatedRun { offset });
            }

            let packed = data[offset + 2];

            if packed & 0x0F != 0 {
                return Err(SprtzError::InvalidRunPadding { offset });
            }

            (data[offset + 1] as usize, packed >> 4, LONG_RUN_LENGTH)
        } else {
            ((byte >> 4) as usize, byte & 0x0F, 1)
        };

        if count == 0 {
            return Err(SprtzError::EmptyRun { offset });
        }

        if res.len() + count > expected {
            return Err(SprtzError::MismatchedDecompressedSize {
                expect: expected,
                have: res.len() + count,
            });
        }

        res.resize(res.len() + count, value);
        offset += length;
    }

    if res.len() != expected {
        return Err(SprtzError::MismatchedDecompressedSize {
            expect: expected,
            have: res.len(),
        });
    }

    Ok(res)
}

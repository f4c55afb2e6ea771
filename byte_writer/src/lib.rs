//! Little-endian append buffer used by the binary writers.
//!
//! Offsets are byte positions into [`ByteWriter::data`], so a field can be
//! written as a placeholder and patched once its value is known.

#[derive(Debug, Default, Clone)]
pub struct ByteWriter {
    pub data: Vec<u8>,
}

impl ByteWriter {
    pub fn new() -> Self {
        Self { data: Vec::new() }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
        }
    }

    pub fn get_offset(&self) -> usize {
        self.data.len()
    }

    pub fn append_u8(&mut self, i: u8) {
        self.data.push(i);
    }

    pub fn append_u16(&mut self, i: u16) {
        self.data.extend(i.to_le_bytes());
    }

    pub fn append_u32(&mut self, i: u32) {
        self.data.extend(i.to_le_bytes());
    }

    pub fn append_u8_slice(&mut self, i: &[u8]) {
        self.data.extend_from_slice(i);
    }

    /// Writes `s` prefixed with its length as a `u8`.
    ///
    /// Strings longer than 255 bytes are cut at the last char boundary that fits.
    pub fn append_short_string(&mut self, s: &str) {
        let s = truncate_at_boundary(s, u8::MAX as usize);

        self.append_u8(s.len() as u8);
        self.append_u8_slice(s.as_bytes());
    }

    /// Writes `s` prefixed with its length as a little-endian `u16`.
    pub fn append_long_string(&mut self, s: &str) {
        let s = truncate_at_boundary(s, u16::MAX as usize);

        self.append_u16(s.len() as u16);
        self.append_u8_slice(s.as_bytes());
    }

    pub fn replace(&mut self, start: usize, slice: &[u8]) {
        self.data[start..(start + slice.len())].copy_from_slice(slice);
    }

    pub fn replace_with_u32(&mut self, start: usize, val: u32) {
        self.replace(start, &val.to_le_bytes());
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.data
    }
}

fn truncate_at_boundary(s: &str, max: usize) -> &str {
    if s.len() <= max {
        return s;
    }

    let mut end = max;

    while !s.is_char_boundary(end) {
        end -= 1;
    }

    &s[..end]
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn little_endian() {
        let mut writer = ByteWriter::new();

        writer.append_u16(0x0201);
        writer.append_u32(0x0605_0403);

        assert_eq!(writer.data, [1, 2, 3, 4, 5, 6]);
        assert_eq!(writer.get_offset(), 6);
    }

    #[test]
    fn patch_placeholder() {
        let mut writer = ByteWriter::new();

        writer.append_u8(0xAA);
        let size_offset = writer.get_offset();
        writer.append_u32(0);
        writer.append_u8_slice(&[9, 9]);

        writer.replace_with_u32(size_offset, 2);

        assert_eq!(writer.into_bytes(), [0xAA, 2, 0, 0, 0, 9, 9]);
    }

    #[test]
    fn length_prefixed_strings() {
        let mut writer = ByteWriter::new();

        writer.append_short_string("Forest");
        writer.append_long_string("ab");

        assert_eq!(writer.data[0], 6);
        assert_eq!(&writer.data[1..7], b"Forest");
        assert_eq!(&writer.data[7..9], &[2, 0]);
        assert_eq!(&writer.data[9..], b"ab");
    }

    #[test]
    fn short_string_truncates_on_char_boundary() {
        let mut writer = ByteWriter::new();
        // 128 two-byte chars, 256 bytes
        let long = "é".repeat(128);

        writer.append_short_string(&long);

        assert_eq!(writer.data[0], 254);
        assert!(std::str::from_utf8(&writer.data[1..]).is_ok());
    }
}

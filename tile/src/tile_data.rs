use std::fmt;

use crate::{rotation_to_degrees, rotation_to_radians, TileFlags};

const TILE_ID_SHIFT: u16 = 5;
const TILE_ID_MASK: u16 = 0x7FF;
const FLAGS_MASK: u16 = 0x001F;

const COLLISION_BIT: u16 = 0;
const FLIP_X_BIT: u16 = 1;
const FLIP_Y_BIT: u16 = 2;
const ROTATION_SHIFT: u16 = 3;

/// 16-bit packed tile.
///
/// ```text
/// [15:5] tile id   (0..2047)
/// [4:3]  rotation  (quarter turns)
/// [2]    flip y
/// [1]    flip x
/// [0]    collision
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct TileData(pub u16);

impl TileData {
    pub fn new(tile_id: u16) -> Self {
        let mut res = Self::default();
        res.set_tile_id(tile_id);
        res
    }

    pub fn with_transform(
        tile_id: u16,
        flip_x: bool,
        flip_y: bool,
        rotation: u8,
        collision: bool,
    ) -> Self {
        let mut res = Self::new(tile_id);

        res.set_flip_x(flip_x);
        res.set_flip_y(flip_y);
        res.set_rotation(rotation);
        res.set_collision(collision);

        res
    }

    pub fn packed(&self) -> u16 {
        self.0
    }

    pub fn tile_id(&self) -> u16 {
        (self.0 >> TILE_ID_SHIFT) & TILE_ID_MASK
    }

    /// Ids above 2047 wrap.
    pub fn set_tile_id(&mut self, tile_id: u16) {
        self.0 = (self.0 & FLAGS_MASK) | ((tile_id & TILE_ID_MASK) << TILE_ID_SHIFT);
    }

    pub fn flip_x(&self) -> bool {
        self.bit(FLIP_X_BIT)
    }

    pub fn set_flip_x(&mut self, flip: bool) {
        self.set_bit(FLIP_X_BIT, flip);
    }

    pub fn flip_y(&self) -> bool {
        self.bit(FLIP_Y_BIT)
    }

    pub fn set_flip_y(&mut self, flip: bool) {
        self.set_bit(FLIP_Y_BIT, flip);
    }

    /// 0 = 0°, 1 = 90°, 2 = 180°, 3 = 270°
    pub fn rotation(&self) -> u8 {
        ((self.0 >> ROTATION_SHIFT) & 0x3) as u8
    }

    pub fn set_rotation(&mut self, rotation: u8) {
        self.0 = (self.0 & !(0x3 << ROTATION_SHIFT)) | (((rotation & 0x3) as u16) << ROTATION_SHIFT);
    }

    pub fn collision(&self) -> bool {
        self.bit(COLLISION_BIT)
    }

    pub fn set_collision(&mut self, collision: bool) {
        self.set_bit(COLLISION_BIT, collision);
    }

    pub fn flags(&self) -> TileFlags {
        TileFlags::from_bits_truncate((self.0 & FLAGS_MASK) as u8)
    }

    pub fn set_flags(&mut self, flags: TileFlags) {
        self.0 = (self.0 & !FLAGS_MASK) | flags.bits() as u16;
    }

    pub fn is_empty(&self) -> bool {
        self.tile_id() == 0
    }

    /// Zeroes the whole value, flags included.
    pub fn clear(&mut self) {
        self.0 = 0;
    }

    /// Takes every flag from `other` and keeps this tile's id.
    pub fn copy_properties_from(&mut self, other: &TileData) {
        self.0 = (self.0 & !FLAGS_MASK) | (other.0 & FLAGS_MASK);
    }

    pub fn rotation_degrees(&self) -> f32 {
        rotation_to_degrees(self.rotation())
    }

    pub fn rotation_radians(&self) -> f32 {
        rotation_to_radians(self.rotation())
    }

    fn bit(&self, bit: u16) -> bool {
        (self.0 >> bit) & 0x1 == 1
    }

    fn set_bit(&mut self, bit: u16, value: bool) {
        if value {
            self.0 |= 1 << bit;
        } else {
            self.0 &= !(1 << bit);
        }
    }
}

impl From<u16> for TileData {
    fn from(value: u16) -> Self {
        Self(value)
    }
}

impl From<TileData> for u16 {
    fn from(value: TileData) -> Self {
        value.0
    }
}

impl fmt::Display for TileData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "TileData(EMPTY)");
        }

        write!(
            f,
            "TileData(id={}, flipX={}, flipY={}, rot={}°, col={})",
            self.tile_id(),
            self.flip_x() as u8,
            self.flip_y() as u8,
            self.rotation_degrees() as u32,
            self.collision() as u8
        )
    }
}

use std::fmt;

use crate::{rotation_to_degrees, rotation_to_radians, TileData, TileExFlags, ZORDER_NORMAL};

const TILE_ID_SHIFT: u32 = 20;
const TILE_ID_MASK: u32 = 0xFFF;
const PALETTE_SHIFT: u32 = 12;
const PALETTE_MASK: u32 = 0xFF;
const ZORDER_SHIFT: u32 = 9;
const ZORDER_MASK: u32 = 0x7;
const FLIP_Y_BIT: u32 = 8;
const FLIP_X_BIT: u32 = 7;
const ROTATION_SHIFT: u32 = 5;
const COLLISION_BIT: u32 = 4;
const TRANSFORM_SHIFT: u32 = 4;
const TRANSFORM_MASK: u32 = 0x1F;
const RESERVED_MASK: u32 = 0xF;

/// 32-bit packed tile with palette selection and draw priority.
///
/// ```text
/// [31:20] tile id        (0..4095)
/// [19:12] palette index  (0..255)
/// [11:9]  z-order        (0 = back, 7 = front)
/// [8]     flip y
/// [7]     flip x
/// [6:5]   rotation       (quarter turns)
/// [4]     collision
/// [3:0]   reserved
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct TileDataEx(pub u32);

impl TileDataEx {
    pub fn new(tile_id: u16) -> Self {
        let mut res = Self::default();
        res.set_tile_id(tile_id);
        res
    }

    pub fn with_palette(tile_id: u16, palette_index: u8, z_order: u8) -> Self {
        let mut res = Self::new(tile_id);

        res.set_palette_index(palette_index);
        res.set_z_order(z_order);

        res
    }

    pub fn with_transform(
        tile_id: u16,
        palette_index: u8,
        z_order: u8,
        flip_x: bool,
        flip_y: bool,
        rotation: u8,
        collision: bool,
    ) -> Self {
        let mut res = Self::with_palette(tile_id, palette_index, z_order);

        res.set_flip_x(flip_x);
        res.set_flip_y(flip_y);
        res.set_rotation(rotation);
        res.set_collision(collision);

        res
    }

    pub fn packed(&self) -> u32 {
        self.0
    }

    pub fn tile_id(&self) -> u16 {
        ((self.0 >> TILE_ID_SHIFT) & TILE_ID_MASK) as u16
    }

    /// Ids above 4095 wrap.
    pub fn set_tile_id(&mut self, tile_id: u16) {
        self.set_field(TILE_ID_SHIFT, TILE_ID_MASK, tile_id as u32);
    }

    pub fn palette_index(&self) -> u8 {
        ((self.0 >> PALETTE_SHIFT) & PALETTE_MASK) as u8
    }

    pub fn set_palette_index(&mut self, palette_index: u8) {
        self.set_field(PALETTE_SHIFT, PALETTE_MASK, palette_index as u32);
    }

    pub fn z_order(&self) -> u8 {
        ((self.0 >> ZORDER_SHIFT) & ZORDER_MASK) as u8
    }

    /// Values above 7 wrap.
    pub fn set_z_order(&mut self, z_order: u8) {
        self.set_field(ZORDER_SHIFT, ZORDER_MASK, z_order as u32);
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

    pub fn rotation(&self) -> u8 {
        ((self.0 >> ROTATION_SHIFT) & 0x3) as u8
    }

    pub fn set_rotation(&mut self, rotation: u8) {
        self.set_field(ROTATION_SHIFT, 0x3, rotation as u32);
    }

    pub fn collision(&self) -> bool {
        self.bit(COLLISION_BIT)
    }

    pub fn set_collision(&mut self, collision: bool) {
        self.set_bit(COLLISION_BIT, collision);
    }

    pub fn transform_flags(&self) -> TileExFlags {
        TileExFlags::from_bits_truncate(((self.0 >> TRANSFORM_SHIFT) & TRANSFORM_MASK) as u8)
    }

    pub fn set_transform_flags(&mut self, flags: TileExFlags) {
        self.set_field(TRANSFORM_SHIFT, TRANSFORM_MASK, flags.bits() as u32);
    }

    pub fn reserved(&self) -> u8 {
        (self.0 & RESERVED_MASK) as u8
    }

    pub fn set_reserved(&mut self, value: u8) {
        self.set_field(0, RESERVED_MASK, value as u32);
    }

    pub fn is_empty(&self) -> bool {
        self.tile_id() == 0
    }

    /// Zeroes the whole value, palette and flags included.
    pub fn clear(&mut self) {
        self.0 = 0;
    }

    /// Takes z-order, transform and reserved bits from `other`, keeps this
    /// tile's id and palette index.
    pub fn copy_properties_from(&mut self, other: &TileDataEx) {
        let tile_id = self.tile_id();
        let palette_index = self.palette_index();

        self.0 = other.0;
        self.set_tile_id(tile_id);
        self.set_palette_index(palette_index);
    }

    pub fn rotation_degrees(&self) -> f32 {
        rotation_to_degrees(self.rotation())
    }

    pub fn rotation_radians(&self) -> f32 {
        rotation_to_radians(self.rotation())
    }

    /// Upgrades a 16-bit tile. Palette is 0 and z-order is [`ZORDER_NORMAL`].
    pub fn from_tile_data(tile: TileData) -> Self {
        let mut res = Self::from_tile_data16(tile.packed());
        res.set_z_order(ZORDER_NORMAL);
        res
    }

    /// Upgrades a raw 16-bit value. Palette and z-order are both 0.
    pub fn from_tile_data16(packed: u16) -> Self {
        let tile = TileData(packed);

        Self::with_transform(
            tile.tile_id(),
            0,
            0,
            tile.flip_x(),
            tile.flip_y(),
            tile.rotation(),
            tile.collision(),
        )
    }

    /// Narrows to the 16-bit layout.
    ///
    /// This is lossy without notice: tile ids above 2047 wrap to 11 bits, and
    /// palette index, z-order and reserved bits are dropped. Use
    /// [`TileDataEx::to_tile_data16_checked`] to find out whether anything was lost.
    pub fn to_tile_data16(&self) -> u16 {
        self.to_tile_data().packed()
    }

    pub fn to_tile_data(&self) -> TileData {
        TileData::with_transform(
            self.tile_id(),
            self.flip_x(),
            self.flip_y(),
            self.rotation(),
            self.collision(),
        )
    }

    /// Same as [`TileDataEx::to_tile_data16`], also returning `true` when the
    /// narrowing dropped information.
    pub fn to_tile_data16_checked(&self) -> (u16, bool) {
        let lossy = self.tile_id() > crate::TILE_MAX_ID
            || self.palette_index() != 0
            || self.z_order() != 0
            || self.reserved() != 0;

        (self.to_tile_data16(), lossy)
    }

    fn set_field(&mut self, shift: u32, mask: u32, value: u32) {
        self.0 = (self.0 & !(mask << shift)) | ((value & mask) << shift);
    }

    fn bit(&self, bit: u32) -> bool {
        (self.0 >> bit) & 0x1 == 1
    }

    fn set_bit(&mut self, bit: u32, value: bool) {
        self.set_field(bit, 0x1, value as u32);
    }
}

impl From<TileData> for TileDataEx {
    fn from(value: TileData) -> Self {
        Self::from_tile_data(value)
    }
}

impl From<u32> for TileDataEx {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

impl From<TileDataEx> for u32 {
    fn from(value: TileDataEx) -> Self {
        value.0
    }
}

impl fmt::Display for TileDataEx {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "TileDataEx(EMPTY)");
        }

        write!(
            f,
            "TileDataEx(id={}, pal={}, z={}, flipX={}, flipY={}, rot={}°, col={})",
            self.tile_id(),
            self.palette_index(),
            self.z_order(),
            self.flip_x() as u8,
            self.flip_y() as u8,
            self.rotation_degrees() as u32,
            self.collision() as u8
        )
    }
}

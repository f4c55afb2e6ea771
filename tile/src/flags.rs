use bitflags::bitflags;

bitflags! {
    /// Low 5 bits of a [`TileData`](crate::TileData).
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct TileFlags: u8 {
        const COLLISION = 1 << 0;
        const FLIP_X = 1 << 1;
        const FLIP_Y = 1 << 2;
        const ROTATE_90 = 1 << 3;
        const ROTATE_180 = 1 << 4;
    }
}

bitflags! {
    /// Bits 8:4 of a [`TileDataEx`](crate::TileDataEx), shifted down to bit 0.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct TileExFlags: u8 {
        const COLLISION = 1 << 0;
        const ROTATE_90 = 1 << 1;
        const ROTATE_180 = 1 << 2;
        const FLIP_X = 1 << 3;
        const FLIP_Y = 1 << 4;
    }
}

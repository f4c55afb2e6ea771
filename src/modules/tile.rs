use eyre::eyre;
use ::tile::{TileData, TileDataEx};

/// Accepts decimal or `0x` hexadecimal.
pub fn parse_packed(s: &str) -> eyre::Result<u32> {
    let res = match s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        Some(hex) => u32::from_str_radix(hex, 16),
        None => s.parse::<u32>(),
    };

    res.map_err(|err| eyre!("Cannot parse packed tile `{}`: {}", s, err))
}

/// Human readable form of a packed tile, 16-bit unless `extended`.
pub fn describe_tile(packed: u32, extended: bool) -> eyre::Result<String> {
    if extended {
        let tile = TileDataEx::from(packed);
        let (narrow, lossy) = tile.to_tile_data16_checked();

        return Ok(format!(
            "{tile} reserved={}\n16-bit: {:#06x}{}",
            tile.reserved(),
            narrow,
            if lossy { " (lossy)" } else { "" }
        ));
    }

    let packed = u16::try_from(packed)
        .map_err(|_| eyre!("{packed:#x} does not fit a 16-bit tile, use --extended"))?;
    let tile = TileData::from(packed);

    Ok(format!(
        "{tile}\n32-bit: {:#010x}",
        TileDataEx::from_tile_data(tile).packed()
    ))
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn parse() {
        assert_eq!(parse_packed("0x00AB").unwrap(), 0xAB);
        assert_eq!(parse_packed("171").unwrap(), 171);
        assert!(parse_packed("0xZZ").is_err());
        assert!(parse_packed("-1").is_err());
    }

    #[test]
    fn describe_16() {
        let tile = TileData::with_transform(3, true, false, 1, false);
        let res = describe_tile(tile.packed() as u32, false).unwrap();

        assert!(res.starts_with("TileData(id=3, flipX=1, flipY=0, rot=90°, col=0)"));
        assert!(describe_tile(0x1_0000, false).is_err());
    }

    #[test]
    fn describe_32() {
        let tile = TileDataEx::with_transform(8, 2, 3, false, false, 2, true);
        let res = describe_tile(tile.packed(), true).unwrap();

        assert!(res.starts_with("TileDataEx(id=8, pal=2, z=3, flipX=0, flipY=0, rot=180°, col=1)"));
        assert!(res.ends_with("(lossy)"));
    }
}

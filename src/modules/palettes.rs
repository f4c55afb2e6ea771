use std::path::Path;

use palette::StandardPaletteLibrary;

/// One line per palette, optionally limited to a category name.
pub fn palette_listing(
    library: &StandardPaletteLibrary,
    category: Option<&str>,
) -> eyre::Result<Vec<String>> {
    let ids = match category {
        Some(name) => library.palettes_by_category_name(name)?,
        None => library.enumerate_palettes().map(|info| info.id).collect(),
    };

    Ok(ids
        .into_iter()
        .filter_map(|id| library.palette_info(id))
        .map(|info| {
            format!(
                "{:>2}  {:<16} {:<8} {}",
                info.id,
                info.name,
                info.category.as_str(),
                info.description
            )
        })
        .collect())
}

/// `.pal` is written as binary, anything else as JSON.
pub fn export_palettes(library: &StandardPaletteLibrary, path: &Path) -> eyre::Result<()> {
    library.write_to_file(path.to_path_buf())?;

    Ok(())
}

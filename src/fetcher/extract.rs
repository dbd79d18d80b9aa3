//! Zip archive extraction

use std::fs::File;
use std::path::Path;

use crate::error::Result;

/// Extract a zip archive into `dest`, preserving its directory layout
pub(crate) fn extract_zip(archive: &Path, dest: &Path) -> Result<()> {
    let file = File::open(archive)?;
    let mut zip = zip::ZipArchive::new(file)?;
    std::fs::create_dir_all(dest)?;

    for i in 0..zip.len() {
        let mut entry = zip.by_index(i)?;
        // entries whose names would escape dest are skipped
        let Some(rel) = entry.enclosed_name() else {
            continue;
        };
        let out = dest.join(rel);
        if entry.is_dir() {
            std::fs::create_dir_all(&out)?;
        } else {
            if let Some(parent) = out.parent() {
                std::fs::create_dir_all(parent)?;
            }
            let mut writer = File::create(&out)?;
            std::io::copy(&mut entry, &mut writer)?;
        }
    }

    tracing::info!(entries = zip.len(), dest = %dest.display(), "extracted archive");
    Ok(())
}

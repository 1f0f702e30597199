use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::core::data::pixel_buffer::PixelBuffer;
use crate::presenters::file::ppm::encode_ppm;

/// Writes `buffer` to `filepath` as PPM, creating missing parent directories.
pub fn write_ppm(buffer: &PixelBuffer, filepath: impl AsRef<Path>) -> std::io::Result<()> {
    let filepath = filepath.as_ref();

    if let Some(parent) = filepath.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }

    let mut writer = BufWriter::new(File::create(filepath)?);
    encode_ppm(buffer, &mut writer)?;
    writer.flush()
}

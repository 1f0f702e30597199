use std::io::Write;

use crate::core::data::pixel_buffer::PixelBuffer;

/// Encodes `buffer` as a binary (P6) PPM image.
pub fn encode_ppm(buffer: &PixelBuffer, mut writer: impl Write) -> std::io::Result<()> {
    let width = buffer.pixel_rect().width();
    let height = buffer.pixel_rect().height();

    // PPM header: P6 means binary RGB, then width, height and max_colour
    writeln!(writer, "P6")?;
    writeln!(writer, "{} {}", width, height)?;
    writeln!(writer, "255")?;
    writer.write_all(buffer.buffer())?;

    Ok(())
}

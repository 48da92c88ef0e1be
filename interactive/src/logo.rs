use std::fs::File;
use std::path::Path;

use thiserror::Error;

use gl_wrapper::texture::TextureFormats;

pub struct Logo {
    pub width: u32,
    pub height: u32,
    pub format: TextureFormats,
    pub data: Vec<u8>,
}

pub fn load(path: Option<&Path>) -> Result<Logo, LogoError> {
    match path {
        Some(path) => decode_png(path),
        None => Ok(placeholder()),
    }
}

fn decode_png(path: &Path) -> Result<Logo, LogoError> {
    let decoder = png::Decoder::new(File::open(path)?);
    let mut reader = decoder.read_info()?;

    let mut buf = vec![0; reader.output_buffer_size()];
    let info = reader.next_frame(&mut buf)?;
    buf.truncate(info.buffer_size());

    if info.bit_depth != png::BitDepth::Eight {
        return Err(LogoError::UnsupportedBitDepth(info.bit_depth));
    }

    let format = match info.color_type {
        png::ColorType::Rgb => TextureFormats::Rgb8,
        png::ColorType::Rgba => TextureFormats::Rgba8,
        other => return Err(LogoError::UnsupportedColorType(other)),
    };

    Ok(Logo {
        width: info.width,
        height: info.height,
        format,
        data: buf,
    })
}

/// Stand-in disc drawn when no PNG is supplied.
fn placeholder() -> Logo {
    const WIDTH: u32 = 256;
    const HEIGHT: u32 = 128;

    let mut data = Vec::with_capacity((WIDTH * HEIGHT * 4) as usize);

    for y in 0..HEIGHT {
        for x in 0..WIDTH {
            let u = (x as f32 + 0.5) / WIDTH as f32 * 2.0 - 1.0;
            let v = (y as f32 + 0.5) / HEIGHT as f32 * 2.0 - 1.0;

            let in_disc = (u / 0.9).powi(2) + (v / 0.6).powi(2) <= 1.0;
            let in_hole = (u / 0.3).powi(2) + (v / 0.2).powi(2) <= 1.0;

            if in_disc && !in_hole {
                data.extend_from_slice(&[235, 235, 235, 255]);
            } else {
                data.extend_from_slice(&[0, 0, 0, 0]);
            }
        }
    }

    Logo {
        width: WIDTH,
        height: HEIGHT,
        format: TextureFormats::Rgba8,
        data,
    }
}

#[derive(Debug, Error)]
pub enum LogoError {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Decoding(#[from] png::DecodingError),
    #[error("unsupported PNG color type {0:?}")]
    UnsupportedColorType(png::ColorType),
    #[error("unsupported PNG bit depth {0:?}")]
    UnsupportedBitDepth(png::BitDepth),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn placeholder_has_valid_dimensions() {
        let logo = placeholder();

        assert_eq!(
            logo.data.len(),
            (logo.width * logo.height * logo.format.channels() as u32) as usize
        );
    }

    #[test]
    fn placeholder_is_not_empty() {
        let logo = placeholder();

        assert!(logo.data.chunks(4).any(|p| p[3] != 0));
        assert!(logo.data.chunks(4).any(|p| p[3] == 0));
    }
}

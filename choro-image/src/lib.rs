pub mod error;

use std::io::Cursor;

use base64::{prelude::BASE64_STANDARD, Engine};
use error::ChoroImageError;
use image::ImageFormat;
use serde::{de, ser, Deserialize, Deserializer, Serialize, Serializer};

const PNG_DATA_URL_PREFIX: &str = "data:image/png;base64,";

/// Row-major RGBA8 raster. Serializes as a png data url, with an empty
/// string standing in for an image without pixels.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct RgbaImage {
    pub width: u32,
    pub height: u32,
    pub data: Vec<u8>,
}

impl RgbaImage {
    /// Allocate a fully transparent image
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            data: vec![0; (width * height * 4) as usize],
        }
    }

    pub fn to_image(&self) -> Option<image::RgbaImage> {
        image::RgbaImage::from_raw(self.width, self.height, self.data.clone())
    }

    pub fn from_image(img: &image::RgbaImage) -> Self {
        Self {
            width: img.width(),
            height: img.height(),
            data: img.to_vec(),
        }
    }

    /// Returns the RGBA value of the pixel at (x, y), or None when out of bounds
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let offset = ((y * self.width + x) * 4) as usize;
        let px = self.data.get(offset..offset + 4)?;
        Some([px[0], px[1], px[2], px[3]])
    }

    /// Overwrite the pixel at (x, y). Out of bounds writes are ignored.
    pub fn put_pixel(&mut self, x: u32, y: u32, rgba: [u8; 4]) {
        if x >= self.width || y >= self.height {
            return;
        }
        let offset = ((y * self.width + x) * 4) as usize;
        if let Some(px) = self.data.get_mut(offset..offset + 4) {
            px.copy_from_slice(&rgba);
        }
    }

    pub fn to_png(&self) -> Result<Vec<u8>, ChoroImageError> {
        let img = self.to_image().ok_or(ChoroImageError::InvalidBufferSize {
            width: self.width,
            height: self.height,
            len: self.data.len(),
        })?;
        let mut bytes = Cursor::new(Vec::new());
        img.write_to(&mut bytes, ImageFormat::Png)?;
        Ok(bytes.into_inner())
    }

    /// Encode as an inline `data:image/png;base64,` url
    pub fn to_data_url(&self) -> Result<String, ChoroImageError> {
        let png = self.to_png()?;
        Ok(format!("{PNG_DATA_URL_PREFIX}{}", BASE64_STANDARD.encode(png)))
    }

    /// Decode an inline png data url
    pub fn from_data_url(s: &str) -> Result<Self, ChoroImageError> {
        let Some(data) = s.strip_prefix(PNG_DATA_URL_PREFIX) else {
            return Err(ChoroImageError::UnsupportedDataUrl(
                s.chars().take(32).collect(),
            ));
        };
        let decoded = BASE64_STANDARD.decode(data)?;
        let img = image::load_from_memory_with_format(&decoded, ImageFormat::Png)?;
        Ok(Self::from_image(&img.into_rgba8()))
    }

    fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

impl Serialize for RgbaImage {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if self.is_empty() {
            return serializer.serialize_str("");
        }
        let url = self.to_data_url().map_err(ser::Error::custom)?;
        serializer.serialize_str(&url)
    }
}

impl<'de> Deserialize<'de> for RgbaImage {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let url = String::deserialize(deserializer)?;
        if url.is_empty() {
            return Ok(Self::default());
        }
        Self::from_data_url(&url).map_err(de::Error::custom)
    }
}

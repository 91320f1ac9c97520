use bytes::Bytes;

use crate::{
    app::{
        models::api_error::ApiError,
        util::encoding::{estimate_data_url_bytes, extract_base64_from_data_url},
    },
    normalizer::service::normalize_image,
};

use super::normalize_options::NormalizeOptions;

#[derive(Debug, Clone)]
struct RawFile {
    data: Bytes,
    content_type: String,
}

/// One reference picker. Keeps the raw file so toggling "preserve original"
/// can re-process it.
#[derive(Debug, Clone)]
pub struct ReferenceSlot {
    raw_file: Option<RawFile>,
    data_url: Option<String>,
    byte_estimate: usize,
    preserve_original: bool,
}

impl Default for ReferenceSlot {
    fn default() -> Self {
        Self {
            raw_file: None,
            data_url: None,
            byte_estimate: 0,
            preserve_original: true,
        }
    }
}

impl ReferenceSlot {
    /// On error the slot keeps its previous contents.
    pub fn select_file(
        &mut self,
        data: Bytes,
        content_type: &str,
        options: &NormalizeOptions,
    ) -> Result<(), ApiError> {
        let image = normalize_image(&data, content_type, self.preserve_original, options)?;

        self.raw_file = Some(RawFile {
            data,
            content_type: content_type.to_string(),
        });
        self.byte_estimate = estimate_data_url_bytes(&image.data_url);
        self.data_url = Some(image.data_url);
        Ok(())
    }

    pub fn set_preserve_original(
        &mut self,
        preserve_original: bool,
        options: &NormalizeOptions,
    ) -> Result<(), ApiError> {
        self.preserve_original = preserve_original;

        let Some(raw_file) = self.raw_file.clone() else {
            return Ok(());
        };

        self.select_file(raw_file.data, &raw_file.content_type, options)
    }

    pub fn clear(&mut self) {
        self.raw_file = None;
        self.data_url = None;
        self.byte_estimate = 0;
    }

    pub fn inline_base64(&self) -> Option<&str> {
        self.data_url.as_deref().and_then(extract_base64_from_data_url)
    }

    pub fn data_url(&self) -> Option<&str> {
        self.data_url.as_deref()
    }

    pub fn byte_estimate(&self) -> usize {
        self.byte_estimate
    }

    pub fn preserve_original(&self) -> bool {
        self.preserve_original
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use image::{DynamicImage, ImageFormat, Rgb, RgbImage};

    use super::*;

    fn gradient_png() -> Bytes {
        let image = RgbImage::from_fn(300, 200, |x, y| Rgb([x as u8, y as u8, 128]));
        let mut bytes = Vec::new();
        DynamicImage::ImageRgb8(image)
            .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
            .unwrap();
        Bytes::from(bytes)
    }

    #[test]
    fn starts_empty_and_preserving() {
        let slot = ReferenceSlot::default();

        assert!(slot.preserve_original());
        assert_eq!(slot.inline_base64(), None);
        assert_eq!(slot.byte_estimate(), 0);
    }

    #[test]
    fn toggling_preserve_reprocesses_the_raw_file() {
        let options = NormalizeOptions::default();
        let mut slot = ReferenceSlot::default();

        slot.select_file(gradient_png(), "image/png", &options).unwrap();
        assert!(slot.data_url().unwrap().starts_with("data:image/png;base64,"));

        slot.set_preserve_original(false, &options).unwrap();
        assert!(slot.data_url().unwrap().starts_with("data:image/jpeg;base64,"));
        assert!(!slot.preserve_original());

        let base64 = slot.inline_base64().unwrap();
        assert_eq!(slot.byte_estimate(), base64.len() * 3 / 4);
    }

    #[test]
    fn rejected_files_leave_slot_untouched() {
        let options = NormalizeOptions::default();
        let mut slot = ReferenceSlot::default();
        slot.select_file(gradient_png(), "image/png", &options).unwrap();
        let before = slot.data_url().map(|url| url.to_string());

        assert!(slot
            .select_file(Bytes::from_static(b"text"), "text/plain", &options)
            .is_err());
        assert_eq!(slot.data_url().map(|url| url.to_string()), before);

        slot.clear();
        assert_eq!(slot.inline_base64(), None);
    }
}

use image::{codecs::jpeg::JpegEncoder, imageops::FilterType, ImageError, Rgb, RgbImage};

use crate::app::{
    models::api_error::ApiError,
    util::encoding::{estimate_data_url_bytes, to_data_url},
};

use super::{
    errors::NormalizerApiError,
    models::{normalize_options::NormalizeOptions, normalized_image::NormalizedImage},
};

pub const OUTPUT_MIME_TYPE: &str = "image/jpeg";

const INITIAL_QUALITY: u8 = 92;
const QUALITY_STEP: u8 = 7;
const MIN_QUALITY: u8 = 55;
const SHRINK_FACTOR: f64 = 0.85;
const MIN_SIDE: u32 = 64;
const SHRINK_STOP_SIDE: u32 = 128;

pub fn normalize_image(
    data: &[u8],
    content_type: &str,
    preserve_original: bool,
    options: &NormalizeOptions,
) -> Result<NormalizedImage, ApiError> {
    let mime_type = content_type.trim().to_lowercase();
    if !mime_type.starts_with("image/") {
        return Err(NormalizerApiError::InvalidImage.value());
    }
    if data.len() > options.max_upload_bytes {
        return Err(NormalizerApiError::FileTooLarge.value());
    }

    if preserve_original {
        return Ok(passthrough(data, &mime_type));
    }

    match reencode(data, options) {
        Ok(image) => Ok(image),
        Err(e) => {
            tracing::warn!("image normalization failed, keeping original: {}", e);
            Ok(passthrough(data, &mime_type))
        }
    }
}

/// Scales so the longest side fits `max_dimension`. Never upscales and keeps
/// each side at least 64px.
pub fn initial_dimensions(width: u32, height: u32, max_dimension: u32) -> (u32, u32) {
    let largest = width.max(height);
    let scale = match largest > max_dimension && largest > 0 {
        true => max_dimension as f64 / largest as f64,
        false => 1.0,
    };

    (scale_side(width, scale), scale_side(height, scale))
}

fn scale_side(side: u32, scale: f64) -> u32 {
    ((side as f64 * scale).round() as u32).max(MIN_SIDE)
}

fn passthrough(data: &[u8], mime_type: &str) -> NormalizedImage {
    let data_url = to_data_url(mime_type, data);
    let size = imagesize::blob_size(data).ok();

    NormalizedImage {
        byte_estimate: estimate_data_url_bytes(&data_url),
        data_url,
        mime_type: mime_type.to_string(),
        width: size.as_ref().map(|size| size.width as u32),
        height: size.as_ref().map(|size| size.height as u32),
        normalized: false,
    }
}

fn reencode(data: &[u8], options: &NormalizeOptions) -> Result<NormalizedImage, ImageError> {
    let source = flatten_alpha(image::load_from_memory(data)?);
    let (mut width, mut height) = initial_dimensions(source.width(), source.height(), options.max_dimension);
    let mut quality = INITIAL_QUALITY;

    loop {
        let rendered = render(&source, width, height, quality)?;
        if rendered.byte_estimate <= options.target_bytes {
            return Ok(rendered);
        }

        if quality > MIN_QUALITY {
            quality = quality.saturating_sub(QUALITY_STEP).max(MIN_QUALITY);
            continue;
        }

        width = scale_side(width, SHRINK_FACTOR);
        height = scale_side(height, SHRINK_FACTOR);
        if width <= SHRINK_STOP_SIDE || height <= SHRINK_STOP_SIDE {
            tracing::debug!("stopped shrinking at {}x{}, {} bytes", width, height, rendered.byte_estimate);
            return Ok(rendered);
        }
    }
}

fn render(source: &RgbImage, width: u32, height: u32, quality: u8) -> Result<NormalizedImage, ImageError> {
    let resized;
    let frame = match source.dimensions() == (width, height) {
        true => source,
        false => {
            resized = image::imageops::resize(source, width, height, FilterType::Triangle);
            &resized
        }
    };

    let mut bytes = Vec::new();
    let mut encoder = JpegEncoder::new_with_quality(&mut bytes, quality);
    encoder.encode_image(frame)?;

    let data_url = to_data_url(OUTPUT_MIME_TYPE, &bytes);

    Ok(NormalizedImage {
        byte_estimate: estimate_data_url_bytes(&data_url),
        data_url,
        mime_type: OUTPUT_MIME_TYPE.to_string(),
        width: Some(width),
        height: Some(height),
        normalized: true,
    })
}

/// JPEG has no alpha channel, so transparent pixels are composited on white.
fn flatten_alpha(image: image::DynamicImage) -> RgbImage {
    if !image.color().has_alpha() {
        return image.to_rgb8();
    }

    let rgba = image.to_rgba8();
    let (width, height) = rgba.dimensions();
    let mut flattened = RgbImage::new(width, height);

    for (x, y, pixel) in rgba.enumerate_pixels() {
        let alpha = u16::from(pixel[3]);
        let blend = |channel: u8| -> u8 {
            (((u16::from(channel) * alpha) + (255 * (255 - alpha))) / 255) as u8
        };
        flattened.put_pixel(x, y, Rgb([blend(pixel[0]), blend(pixel[1]), blend(pixel[2])]));
    }

    flattened
}

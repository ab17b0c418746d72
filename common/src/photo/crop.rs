//! Crop transformer.
//!
//! The selection is made on a scaled-down rendition of the photo, so the
//! rectangle is first mapped back to natural resolution, then the region is
//! resampled to a bounded size and encoded as JPEG.

use std::io::Cursor;

use image::codecs::jpeg::JpegEncoder;
use image::imageops::FilterType;
use image::{DynamicImage, GenericImageView, ImageDecoder, ImageError, ImageReader, RgbImage};

use super::data_url;
use crate::config::CropSettings;
use crate::error::CropError;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    fn is_drawable(&self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0
    }
}

/// Natural size of the source image and the size it occupied on screen
/// while the user was selecting.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CropGeometry {
    pub natural: Size,
    pub displayed: Size,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CropRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// Source region in natural coordinates and the output raster size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CropPlan {
    pub source: CropRect,
    pub output_width: u32,
    pub output_height: u32,
}

/// Maps `rect` (displayed coordinates) onto the natural image and bounds the
/// longer output side by `max_dimension`, keeping the aspect ratio.
pub fn plan_crop(
    geometry: &CropGeometry,
    rect: &CropRect,
    max_dimension: u32,
) -> Result<CropPlan, CropError> {
    let selected = Size::new(rect.width, rect.height);
    if !selected.is_drawable() || !geometry.displayed.is_drawable() {
        return Err(CropError::EmptyCrop);
    }

    let scale_x = geometry.natural.width / geometry.displayed.width;
    let scale_y = geometry.natural.height / geometry.displayed.height;
    let source = CropRect {
        x: rect.x * scale_x,
        y: rect.y * scale_y,
        width: rect.width * scale_x,
        height: rect.height * scale_y,
    };
    if !Size::new(source.width, source.height).is_drawable() {
        return Err(CropError::EmptyCrop);
    }

    let (output_width, output_height) =
        bounded_output(source.width, source.height, max_dimension);
    let plan = CropPlan {
        source,
        output_width,
        output_height,
    };
    log::debug!("crop plan: {:?}", plan);
    Ok(plan)
}

fn bounded_output(width: f64, height: f64, max_dimension: u32) -> (u32, u32) {
    let max = max_dimension as f64;
    let (mut width, mut height) = (width, height);
    if width > height && width > max {
        height = height * max / width;
        width = max;
    } else if height > max {
        width = width * max / height;
        height = max;
    }
    (to_pixels(width, max_dimension), to_pixels(height, max_dimension))
}

fn to_pixels(value: f64, max_dimension: u32) -> u32 {
    (value.round() as u32).clamp(1, max_dimension.max(1))
}

impl CropPlan {
    /// Re-targets the plan at a decoded raster of `width` x `height`.
    ///
    /// The source rectangle is rescaled when the raster differs from the
    /// natural size the plan was made for, then clipped to the raster; the
    /// output size follows what is left. `None` when nothing remains.
    pub fn fitted_to(
        &self,
        natural: Size,
        width: u32,
        height: u32,
        max_dimension: u32,
    ) -> Option<CropPlan> {
        let ratio = |raster: u32, planned: f64| {
            if planned > 0.0 { raster as f64 / planned } else { 1.0 }
        };
        let (sx, sy) = (ratio(width, natural.width), ratio(height, natural.height));

        let x0 = (self.source.x * sx).max(0.0);
        let y0 = (self.source.y * sy).max(0.0);
        let x1 = ((self.source.x + self.source.width) * sx).min(width as f64);
        let y1 = ((self.source.y + self.source.height) * sy).min(height as f64);
        if x1 <= x0 || y1 <= y0 {
            return None;
        }

        let source = CropRect {
            x: x0,
            y: y0,
            width: x1 - x0,
            height: y1 - y0,
        };
        if source == self.source {
            return Some(*self);
        }
        let (output_width, output_height) =
            bounded_output(source.width, source.height, max_dimension);
        log::debug!("crop plan refitted to {}x{} raster: {:?}", width, height, source);
        Some(CropPlan {
            source,
            output_width,
            output_height,
        })
    }

    /// Integer pixel region of the source, clipped to an image of
    /// `width` x `height`. `None` when nothing of the region is inside.
    pub fn pixel_region(&self, width: u32, height: u32) -> Option<(u32, u32, u32, u32)> {
        let clip = |value: f64, limit: u32| value.round().clamp(0.0, limit as f64) as u32;
        let x0 = clip(self.source.x, width);
        let y0 = clip(self.source.y, height);
        let x1 = clip(self.source.x + self.source.width, width);
        let y1 = clip(self.source.y + self.source.height, height);
        if x1 <= x0 || y1 <= y0 {
            return None;
        }
        Some((x0, y0, x1 - x0, y1 - y0))
    }
}

/// Crops `source` (any decodable image bytes) and returns the result as a
/// JPEG data URI.
///
/// Formats the raster library cannot read fail with
/// `CropError::Unsupported`; the caller may rasterize the plan another way.
pub fn crop_photo(
    source: &[u8],
    geometry: &CropGeometry,
    rect: &CropRect,
    settings: &CropSettings,
) -> Result<String, CropError> {
    if source.is_empty() {
        return Err(CropError::MissingSource);
    }
    let plan = plan_crop(geometry, rect, settings.max_dimension)?;

    let decoded = decode_upright(source)?;
    let (width, height) = decoded.dimensions();
    let plan = plan
        .fitted_to(geometry.natural, width, height, settings.max_dimension)
        .ok_or(CropError::EmptyCrop)?;
    let (x, y, w, h) = plan
        .pixel_region(width, height)
        .ok_or(CropError::EmptyCrop)?;

    let resized = decoded.crop_imm(x, y, w, h).resize_exact(
        plan.output_width,
        plan.output_height,
        FilterType::Lanczos3,
    );
    let rgb = flatten_on_white(resized);

    let mut encoded = Vec::new();
    JpegEncoder::new_with_quality(&mut encoded, settings.jpeg_quality)
        .encode_image(&rgb)
        .map_err(CropError::Encode)?;

    log::debug!(
        "cropped {}x{} region to {}x{} JPEG ({} bytes)",
        w,
        h,
        rgb.width(),
        rgb.height(),
        encoded.len()
    );
    Ok(data_url("image/jpeg", &encoded))
}

/// Decodes `source` and applies its EXIF orientation, so that the pixels
/// match what the browser displayed while the user was selecting.
fn decode_upright(source: &[u8]) -> Result<DynamicImage, CropError> {
    let reader = ImageReader::new(Cursor::new(source))
        .with_guessed_format()
        .map_err(|err| CropError::Surface(err.into()))?;
    let mut decoder = reader.into_decoder().map_err(decode_error)?;
    let orientation = decoder.orientation().map_err(decode_error)?;
    let mut image = DynamicImage::from_decoder(decoder).map_err(decode_error)?;
    image.apply_orientation(orientation);
    Ok(image)
}

fn decode_error(err: ImageError) -> CropError {
    match err {
        ImageError::Unsupported(_) => CropError::Unsupported(err),
        other => CropError::Surface(other),
    }
}

/// JPEG has no alpha channel: composite transparent pixels over white.
fn flatten_on_white(image: DynamicImage) -> RgbImage {
    let rgba = image.to_rgba8();
    let (w, h) = rgba.dimensions();
    let mut background = image::RgbaImage::from_pixel(w, h, image::Rgba([255, 255, 255, 255]));
    image::imageops::overlay(&mut background, &rgba, 0, 0);
    DynamicImage::ImageRgba8(background).to_rgb8()
}

#[cfg(test)]
mod tests {
    use super::*;
    use base64::{Engine as _, engine::general_purpose};
    use image::{ImageFormat, Rgb, Rgba, RgbaImage};

    fn geometry(natural: (f64, f64), displayed: (f64, f64)) -> CropGeometry {
        CropGeometry {
            natural: Size::new(natural.0, natural.1),
            displayed: Size::new(displayed.0, displayed.1),
        }
    }

    fn rect(x: f64, y: f64, width: f64, height: f64) -> CropRect {
        CropRect { x, y, width, height }
    }

    fn plan(natural: (f64, f64), displayed: (f64, f64), selected: CropRect) -> CropPlan {
        plan_crop(&geometry(natural, displayed), &selected, 400).unwrap()
    }

    fn png_bytes(image: DynamicImage) -> Vec<u8> {
        let mut cursor = Cursor::new(Vec::new());
        image.write_to(&mut cursor, ImageFormat::Png).unwrap();
        cursor.into_inner()
    }

    /// Left half red, right half blue.
    fn two_tone_image(width: u32, height: u32) -> RgbImage {
        RgbImage::from_fn(width, height, |x, _| {
            if x < width / 2 {
                Rgb([255, 0, 0])
            } else {
                Rgb([0, 0, 255])
            }
        })
    }

    fn two_tone(width: u32, height: u32) -> Vec<u8> {
        png_bytes(DynamicImage::ImageRgb8(two_tone_image(width, height)))
    }

    /// JPEG of `image` carrying an EXIF APP1 segment with the given
    /// orientation tag.
    fn jpeg_with_orientation(image: &RgbImage, orientation: u8) -> Vec<u8> {
        let mut jpeg = Vec::new();
        JpegEncoder::new_with_quality(&mut jpeg, 95)
            .encode_image(image)
            .unwrap();

        let mut app1 = vec![0xFF, 0xE1, 0x00, 0x22];
        app1.extend_from_slice(b"Exif\0\0");
        // Big-endian TIFF header, first IFD at offset 8.
        app1.extend_from_slice(&[b'M', b'M', 0x00, 0x2A, 0x00, 0x00, 0x00, 0x08]);
        // One entry: Orientation (0x0112), SHORT, count 1.
        app1.extend_from_slice(&[0x00, 0x01]);
        app1.extend_from_slice(&[0x01, 0x12, 0x00, 0x03, 0x00, 0x00, 0x00, 0x01]);
        app1.extend_from_slice(&[0x00, orientation, 0x00, 0x00]);
        app1.extend_from_slice(&[0x00, 0x00, 0x00, 0x00]);

        let mut out = jpeg[..2].to_vec();
        out.extend(app1);
        out.extend_from_slice(&jpeg[2..]);
        out
    }

    fn decode_data_url(url: &str) -> DynamicImage {
        let payload = url
            .strip_prefix("data:image/jpeg;base64,")
            .expect("JPEG data URI");
        let bytes = general_purpose::STANDARD.decode(payload).unwrap();
        image::load_from_memory(&bytes).unwrap()
    }

    fn assert_blue(image: &DynamicImage, x: u32, y: u32) {
        let Rgb([r, _, b]) = image.to_rgb8().get_pixel(x, y).to_owned();
        assert!(b > 200 && r < 60, "expected blue at ({x}, {y}), got r={r} b={b}");
    }

    fn assert_red(image: &DynamicImage, x: u32, y: u32) {
        let Rgb([r, _, b]) = image.to_rgb8().get_pixel(x, y).to_owned();
        assert!(r > 200 && b < 60, "expected red at ({x}, {y}), got r={r} b={b}");
    }

    #[test]
    fn maps_displayed_rect_to_natural_coordinates() {
        let plan = plan((2000.0, 1000.0), (1000.0, 500.0), rect(100.0, 50.0, 150.0, 100.0));
        assert_eq!(plan.source, rect(200.0, 100.0, 300.0, 200.0));
        assert_eq!((plan.output_width, plan.output_height), (300, 200));
    }

    #[test]
    fn wide_crop_is_bounded_by_width() {
        let plan = plan((2000.0, 1000.0), (1000.0, 500.0), rect(0.0, 0.0, 800.0, 400.0));
        assert_eq!((plan.output_width, plan.output_height), (400, 200));
    }

    #[test]
    fn square_and_tall_crops_are_bounded_by_height() {
        let square = plan((3000.0, 3000.0), (600.0, 600.0), rect(0.0, 0.0, 500.0, 500.0));
        assert_eq!((square.output_width, square.output_height), (400, 400));

        let tall = plan((1000.0, 4000.0), (250.0, 1000.0), rect(0.0, 0.0, 100.0, 800.0));
        assert_eq!((tall.output_width, tall.output_height), (50, 400));
    }

    #[test]
    fn small_crops_are_not_upscaled() {
        let plan = plan((300.0, 300.0), (300.0, 300.0), rect(10.0, 10.0, 120.0, 120.0));
        assert_eq!((plan.output_width, plan.output_height), (120, 120));
    }

    #[test]
    fn output_respects_bound_and_aspect_for_many_inputs() {
        let geometries = [
            geometry((4032.0, 3024.0), (640.0, 480.0)),
            geometry((1080.0, 1920.0), (270.0, 480.0)),
            geometry((500.0, 500.0), (500.0, 500.0)),
            geometry((6000.0, 1000.0), (600.0, 100.0)),
        ];
        let rects = [
            rect(0.0, 0.0, 100.0, 100.0),
            rect(12.5, 7.25, 37.0, 91.0),
            rect(3.0, 3.0, 93.0, 40.0),
            rect(0.0, 0.0, 1.0, 1.0),
        ];
        for g in &geometries {
            for r in &rects {
                let plan = plan_crop(g, r, 400).unwrap();
                assert!(plan.output_width.max(plan.output_height) <= 400, "{plan:?}");

                let expected = plan.source.width / plan.source.height;
                let actual = plan.output_width as f64 / plan.output_height as f64;
                let tolerance = expected / plan.output_width.min(plan.output_height) as f64 + 1e-9;
                assert!(
                    (actual - expected).abs() <= tolerance.max(expected * 0.02),
                    "aspect {actual} vs {expected} for {plan:?}"
                );
            }
        }
    }

    #[test]
    fn zero_sized_crop_is_rejected() {
        let g = geometry((800.0, 600.0), (400.0, 300.0));
        let empty = |r: CropRect, g: &CropGeometry| {
            matches!(plan_crop(g, &r, 400), Err(CropError::EmptyCrop))
        };
        assert!(empty(rect(0.0, 0.0, 0.0, 50.0), &g));
        assert!(empty(rect(0.0, 0.0, 50.0, 0.0), &g));

        let hidden = geometry((800.0, 600.0), (0.0, 0.0));
        assert!(empty(rect(0.0, 0.0, 50.0, 50.0), &hidden));
    }

    #[test]
    fn crops_and_encodes_a_real_image() {
        let source = two_tone(800, 600);
        let url = crop_photo(
            &source,
            &geometry((800.0, 600.0), (400.0, 300.0)),
            &rect(0.0, 0.0, 100.0, 100.0),
            &CropSettings::default(),
        )
        .unwrap();

        let out = decode_data_url(&url);
        assert_eq!(out.dimensions(), (200, 200));
        assert_red(&out, 100, 100);
    }

    #[test]
    fn large_selection_is_downscaled_to_the_bound() {
        let source = two_tone(1200, 900);
        let url = crop_photo(
            &source,
            &geometry((1200.0, 900.0), (600.0, 450.0)),
            &rect(50.0, 0.0, 450.0, 450.0),
            &CropSettings::default(),
        )
        .unwrap();
        assert_eq!(decode_data_url(&url).dimensions(), (400, 400));
    }

    #[test]
    fn exif_rotation_is_applied_before_cropping() {
        // Stored 200x100, shown rotated 90 degrees clockwise as 100x200 with
        // red on top and blue at the bottom.
        let source = jpeg_with_orientation(&two_tone_image(200, 100), 6);
        let shown = geometry((100.0, 200.0), (100.0, 200.0));
        let settings = CropSettings::default();

        let bottom = crop_photo(&source, &shown, &rect(0.0, 100.0, 100.0, 100.0), &settings);
        let bottom = decode_data_url(&bottom.unwrap());
        assert_eq!(bottom.dimensions(), (100, 100));
        assert_blue(&bottom, 50, 50);

        let top = crop_photo(&source, &shown, &rect(0.0, 0.0, 100.0, 100.0), &settings).unwrap();
        assert_red(&decode_data_url(&top), 50, 50);
    }

    #[test]
    fn clipped_region_keeps_its_aspect() {
        // The selection runs 50px past the right edge; only 50x100 remains.
        let source = two_tone(200, 100);
        let url = crop_photo(
            &source,
            &geometry((200.0, 100.0), (200.0, 100.0)),
            &rect(150.0, 0.0, 100.0, 100.0),
            &CropSettings::default(),
        )
        .unwrap();

        let out = decode_data_url(&url);
        assert_eq!(out.dimensions(), (50, 100));
        assert_blue(&out, 25, 50);
    }

    #[test]
    fn selection_follows_the_decoded_raster_when_sizes_differ() {
        // Reported natural size is twice the decoded one.
        let source = two_tone(200, 100);
        let url = crop_photo(
            &source,
            &geometry((400.0, 200.0), (400.0, 200.0)),
            &rect(200.0, 0.0, 200.0, 200.0),
            &CropSettings::default(),
        )
        .unwrap();

        let out = decode_data_url(&url);
        assert_eq!(out.dimensions(), (100, 100));
        assert_blue(&out, 50, 50);
    }

    #[test]
    fn refitting_is_identity_when_sizes_match() {
        let planned = plan((300.0, 300.0), (150.0, 150.0), rect(10.0, 10.0, 50.0, 50.0));
        let natural = Size::new(300.0, 300.0);
        assert_eq!(planned.fitted_to(natural, 300, 300, 400), Some(planned));

        let beyond = plan((300.0, 300.0), (150.0, 150.0), rect(160.0, 160.0, 20.0, 20.0));
        assert_eq!(beyond.fitted_to(natural, 300, 300, 400), None);
    }

    #[test]
    fn transparency_becomes_white() {
        let source = png_bytes(DynamicImage::ImageRgba8(RgbaImage::from_pixel(
            64,
            64,
            Rgba([0, 0, 0, 0]),
        )));
        let url = crop_photo(
            &source,
            &geometry((64.0, 64.0), (64.0, 64.0)),
            &rect(0.0, 0.0, 64.0, 64.0),
            &CropSettings::default(),
        )
        .unwrap();
        let Rgb([r, g, b]) = decode_data_url(&url).to_rgb8().get_pixel(32, 32).to_owned();
        assert!(r > 240 && g > 240 && b > 240);
    }

    #[test]
    fn missing_or_undecodable_source_fails() {
        let g = geometry((10.0, 10.0), (10.0, 10.0));
        let r = rect(0.0, 0.0, 10.0, 10.0);
        let settings = CropSettings::default();

        assert!(matches!(
            crop_photo(&[], &g, &r, &settings),
            Err(CropError::MissingSource)
        ));
        assert!(matches!(
            crop_photo(b"definitely not an image", &g, &r, &settings),
            Err(CropError::Unsupported(_))
        ));

        let mut truncated = two_tone(10, 10);
        truncated.truncate(40);
        assert!(matches!(
            crop_photo(&truncated, &g, &r, &settings),
            Err(CropError::Surface(_))
        ));
    }

    #[test]
    fn region_outside_the_image_is_empty() {
        let outside = plan((100.0, 100.0), (100.0, 100.0), rect(150.0, 150.0, 20.0, 20.0));
        assert_eq!(outside.pixel_region(100, 100), None);

        let partial = plan((100.0, 100.0), (100.0, 100.0), rect(90.0, 90.0, 20.0, 20.0));
        assert_eq!(partial.pixel_region(100, 100), Some((90, 90, 10, 10)));
    }
}

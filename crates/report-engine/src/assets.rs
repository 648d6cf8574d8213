//! Company logo loading. The logo is the one non-fatal dependency of the
//! pipeline: any fetch or decode failure is logged and the document renders
//! without it.

use base64::Engine;

use crate::style::{LOGO_MAX_HEIGHT, LOGO_MAX_WIDTH};

/// Assumed aspect ratio when an intrinsic size is unavailable.
pub const DEFAULT_ASPECT: f32 = 300.0 / 91.0;

/// A decoded logo bitmap plus its placed size within the header box.
#[derive(Clone)]
pub struct EmbeddedLogo {
    pub width_px: u32,
    pub height_px: u32,
    /// Raw RGB8 pixels, row-major.
    pub rgb: Vec<u8>,
    pub width_mm: f32,
    pub height_mm: f32,
}

/// Scale an aspect ratio into the logo bounding box, preserving it.
pub fn fit_logo_box(aspect: f32) -> (f32, f32) {
    let aspect = if aspect.is_finite() && aspect > 0.0 {
        aspect
    } else {
        DEFAULT_ASPECT
    };
    if aspect > LOGO_MAX_WIDTH / LOGO_MAX_HEIGHT {
        (LOGO_MAX_WIDTH, LOGO_MAX_WIDTH / aspect)
    } else {
        (LOGO_MAX_HEIGHT * aspect, LOGO_MAX_HEIGHT)
    }
}

/// Fetch and decode the logo. `None` on any failure; generation continues.
pub fn load_logo(url: &str) -> Option<EmbeddedLogo> {
    let bytes = match fetch(url) {
        Ok(bytes) => bytes,
        Err(err) => {
            tracing::warn!(url, %err, "logo fetch failed, rendering without logo");
            return None;
        }
    };

    let decoded = image::ImageReader::new(std::io::Cursor::new(&bytes))
        .with_guessed_format()
        .ok()?
        .decode();
    let img = match decoded {
        Ok(img) => img,
        Err(err) => {
            tracing::warn!(url, %err, "logo decode failed, rendering without logo");
            return None;
        }
    };

    let (width_px, height_px) = (img.width(), img.height());
    let aspect = width_px as f32 / height_px as f32;
    let (width_mm, height_mm) = fit_logo_box(aspect);

    Some(EmbeddedLogo {
        width_px,
        height_px,
        rgb: img.to_rgb8().into_raw(),
        width_mm,
        height_mm,
    })
}

fn fetch(url: &str) -> Result<Vec<u8>, String> {
    if let Some(rest) = url.strip_prefix("data:") {
        let payload = rest
            .split_once(',')
            .map(|(_, data)| data)
            .ok_or_else(|| "invalid data URL".to_string())?;
        return base64::engine::general_purpose::STANDARD
            .decode(payload)
            .map_err(|e| format!("base64 decode error: {e}"));
    }

    let response = ureq::get(url)
        .call()
        .map_err(|e| format!("HTTP request failed: {e}"))?;
    let mut bytes = Vec::new();
    std::io::Read::read_to_end(&mut response.into_reader(), &mut bytes)
        .map_err(|e| format!("failed to read response body: {e}"))?;
    Ok(bytes)
}

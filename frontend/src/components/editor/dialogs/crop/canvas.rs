//! Browser rasterization of a crop plan, for formats the image crate cannot
//! decode (HEIC and HEIF). The dialog `<img>` already shows the decoded
//! picture, so it is drawn onto a canvas of the planned output size.

use common::error::CropError;
use common::photo::CropPlan;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, HtmlImageElement};
use yew::NodeRef;

pub fn rasterize(
    image_ref: &NodeRef,
    plan: &CropPlan,
    jpeg_quality: u8,
) -> Result<String, CropError> {
    let image = image_ref
        .cast::<HtmlImageElement>()
        .ok_or(CropError::MissingSource)?;
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| CropError::Canvas("no document".into()))?;

    let canvas: HtmlCanvasElement = document
        .create_element("canvas")
        .map_err(js_error)?
        .dyn_into()
        .map_err(|_| CropError::Canvas("not a canvas".into()))?;
    canvas.set_width(plan.output_width);
    canvas.set_height(plan.output_height);

    let context: CanvasRenderingContext2d = canvas
        .get_context("2d")
        .map_err(js_error)?
        .ok_or_else(|| CropError::Canvas("2d context unavailable".into()))?
        .dyn_into()
        .map_err(|_| CropError::Canvas("unexpected context type".into()))?;

    let (width, height) = (plan.output_width as f64, plan.output_height as f64);
    // JPEG has no alpha.
    context.set_fill_style_str("#ffffff");
    context.fill_rect(0.0, 0.0, width, height);
    context
        .draw_image_with_html_image_element_and_sw_and_sh_and_dx_and_dy_and_dw_and_dh(
            &image,
            plan.source.x,
            plan.source.y,
            plan.source.width,
            plan.source.height,
            0.0,
            0.0,
            width,
            height,
        )
        .map_err(js_error)?;

    let quality = JsValue::from_f64(f64::from(jpeg_quality) / 100.0);
    let url = canvas
        .to_data_url_with_type_and_encoder_options("image/jpeg", &quality)
        .map_err(js_error)?;
    log::debug!(
        "canvas crop {}x{} ({} bytes)",
        plan.output_width,
        plan.output_height,
        url.len()
    );
    Ok(url)
}

fn js_error(err: JsValue) -> CropError {
    CropError::Canvas(format!("{:?}", err))
}

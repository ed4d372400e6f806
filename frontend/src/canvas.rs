//! Canvas painting for the overlay and zoom panels.
//!
//! Each panel is one sequential async operation: decode the data URL, read
//! the natural size, size the canvas, draw. A canvas cannot be sized before
//! the decode finishes, so nothing here touches the canvas until then.

use shared::{Detection, DrawTicket};
use shared::zoom::{self, ZoomPlan};
use thiserror::Error;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, HtmlImageElement};
use yew::NodeRef;

#[derive(Debug, Error)]
pub enum DrawError {
    #[error("canvas element is not mounted")]
    NotMounted,
    #[error("2d context unavailable")]
    NoContext,
    #[error("image decode failed: {0}")]
    Decode(String),
    #[error("canvas call failed: {0}")]
    Js(String),
    #[error("superseded by a newer result")]
    Superseded,
}

fn describe(value: &JsValue) -> String {
    value
        .dyn_ref::<js_sys::Error>()
        .map(|e| String::from(e.message()))
        .unwrap_or_else(|| format!("{:?}", value))
}

impl From<JsValue> for DrawError {
    fn from(value: JsValue) -> Self {
        DrawError::Js(describe(&value))
    }
}

pub async fn decode_image(src: &str) -> Result<HtmlImageElement, DrawError> {
    let image = HtmlImageElement::new()?;
    image.set_src(src);
    JsFuture::from(image.decode())
        .await
        .map_err(|e| DrawError::Decode(describe(&e)))?;
    Ok(image)
}

/// Fetches the canvas to paint on, unless the result this draw belongs to
/// has been replaced while the image was decoding.
fn mounted_canvas(canvas_ref: &NodeRef, ticket: &DrawTicket) -> Result<HtmlCanvasElement, DrawError> {
    if !ticket.is_current() {
        return Err(DrawError::Superseded);
    }
    canvas_ref
        .cast::<HtmlCanvasElement>()
        .ok_or(DrawError::NotMounted)
}

/// Resizes the canvas, which also resets its context, then returns a cleared 2d context.
fn sized_context(
    canvas: &HtmlCanvasElement,
    width: u32,
    height: u32,
) -> Result<CanvasRenderingContext2d, DrawError> {
    canvas.set_width(width);
    canvas.set_height(height);

    let ctx = canvas
        .get_context("2d")?
        .ok_or(DrawError::NoContext)?
        .dyn_into::<CanvasRenderingContext2d>()
        .map_err(|_| DrawError::NoContext)?;
    ctx.clear_rect(0.0, 0.0, width as f64, height as f64);
    Ok(ctx)
}

/// Blits the server-composited detections image at its natural resolution.
pub async fn draw_overlay(
    canvas_ref: &NodeRef,
    ticket: &DrawTicket,
    src: &str,
) -> Result<(), DrawError> {
    let image = decode_image(src).await?;
    let canvas = mounted_canvas(canvas_ref, ticket)?;
    let ctx = sized_context(&canvas, image.natural_width(), image.natural_height())?;

    ctx.draw_image_with_html_image_element(&image, 0.0, 0.0)?;
    log::debug!(
        "overlay drawn at {}x{}",
        image.natural_width(),
        image.natural_height()
    );
    Ok(())
}

/// Magnifies the first detection of the enhanced image, or paints the
/// "nothing found" message when there are no detections.
pub async fn draw_zoom(
    canvas_ref: &NodeRef,
    ticket: &DrawTicket,
    src: &str,
    detections: &[Detection],
) -> Result<(), DrawError> {
    let image = decode_image(src).await?;
    let canvas = mounted_canvas(canvas_ref, ticket)?;

    match zoom::plan_zoom(detections, image.natural_width(), image.natural_height()) {
        ZoomPlan::Crop {
            source,
            width,
            height,
            caption,
        } => {
            let ctx = sized_context(&canvas, width, height)?;
            ctx.draw_image_with_html_image_element_and_sw_and_sh_and_dx_and_dy_and_dw_and_dh(
                &image,
                source.x,
                source.y,
                source.width,
                source.height,
                0.0,
                0.0,
                width as f64,
                height as f64,
            )?;

            ctx.set_stroke_style_str(zoom::CAPTION_COLOR);
            ctx.set_line_width(zoom::CAPTION_LINE_WIDTH);
            ctx.set_font(zoom::CAPTION_FONT);
            ctx.set_fill_style_str(zoom::CAPTION_COLOR);
            let (x, y) = zoom::CAPTION_ORIGIN;
            ctx.fill_text(&caption, x, y)?;
            log::debug!("zoomed {:?} into {}x{}", source, width, height);
        }
        ZoomPlan::Empty { width, height } => {
            let ctx = sized_context(&canvas, width, height)?;
            ctx.set_font(zoom::EMPTY_FONT);
            ctx.set_fill_style_str(zoom::EMPTY_COLOR);
            ctx.set_text_align("center");
            ctx.set_text_baseline("middle");
            ctx.fill_text(
                zoom::EMPTY_MESSAGE,
                width as f64 / 2.0,
                height as f64 / 2.0,
            )?;
        }
    }
    Ok(())
}

//! Camera access and frame capture.
//!
//! ERROR HANDLING
//! ==============
//! Camera denial or absence is logged and leaves the preview black; the
//! shutter then produces nothing because the video has no dimensions.

#[cfg(test)]
#[path = "camera_test.rs"]
mod camera_test;

use booth::consts::CAMERA_IDEAL_PX;

/// `getUserMedia` video constraints: front camera, square ideal size.
pub fn video_constraints() -> serde_json::Value {
    serde_json::json!({
        "facingMode": "user",
        "width": CAMERA_IDEAL_PX,
        "height": CAMERA_IDEAL_PX,
    })
}

/// Ask for the camera and attach the stream to `video`.
///
/// # Errors
///
/// Returns a description of the failure when the browser has no media
/// devices or the user refuses access.
#[cfg(feature = "hydrate")]
pub async fn start_camera(video: &web_sys::HtmlVideoElement) -> Result<(), String> {
    use wasm_bindgen::JsCast;

    let window = web_sys::window().ok_or("no window")?;
    let devices = window.navigator().media_devices().map_err(|e| format!("{e:?}"))?;
    let video_constraints = js_sys::JSON::parse(&video_constraints().to_string()).map_err(|e| format!("{e:?}"))?;
    let constraints = web_sys::MediaStreamConstraints::new();
    constraints.set_video(&video_constraints);
    let promise = devices.get_user_media_with_constraints(&constraints).map_err(|e| format!("{e:?}"))?;
    let stream = wasm_bindgen_futures::JsFuture::from(promise)
        .await
        .map_err(|e| format!("{e:?}"))?
        .dyn_into::<web_sys::MediaStream>()
        .map_err(|e| format!("{e:?}"))?;
    video.set_src_object(Some(&stream));
    Ok(())
}

/// Draw the current video frame onto `canvas` as a mirrored square and
/// return it as a JPEG data URI. `None` while the video has no dimensions.
#[cfg(feature = "hydrate")]
pub fn capture_frame(video: &web_sys::HtmlVideoElement, canvas: &web_sys::HtmlCanvasElement) -> Option<String> {
    use booth::consts::PHOTO_MIME;
    use wasm_bindgen::JsCast;

    let plan = booth::capture::plan(video.video_width(), video.video_height())?;
    canvas.set_width(plan.output);
    canvas.set_height(plan.output);
    let ctx = canvas
        .get_context("2d")
        .ok()
        .flatten()?
        .dyn_into::<web_sys::CanvasRenderingContext2d>()
        .ok()?;
    let out = f64::from(plan.output);
    ctx.set_transform(1.0, 0.0, 0.0, 1.0, 0.0, 0.0).ok()?;
    ctx.translate(plan.translate_x, 0.0).ok()?;
    ctx.scale(plan.scale_x, 1.0).ok()?;
    ctx.draw_image_with_html_video_element_and_sw_and_sh_and_dx_and_dy_and_dw_and_dh(
        video,
        plan.crop.sx,
        plan.crop.sy,
        plan.crop.size,
        plan.crop.size,
        0.0,
        0.0,
        out,
        out,
    )
    .ok()?;
    canvas.to_data_url_with_type(PHOTO_MIME).ok()
}

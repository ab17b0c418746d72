//! Photo crop dialog: the uploaded image with a circular, draggable square
//! selection, a size slider and cancel/apply actions.

mod canvas;

pub use canvas::rasterize;

use common::photo::CropSession;
use yew::html::Scope;
use yew::prelude::*;

use crate::components::editor::helpers::event_value;
use crate::components::editor::{CvEditor, Msg};

const OVERLAY_STYLE: &str = "position:fixed;top:0;left:0;width:100vw;height:100vh;background:rgba(0,0,0,0.85);z-index:9999;display:flex;flex-direction:column;align-items:center;justify-content:center;";
const CLOSE_STYLE: &str = "position:absolute;top:24px;right:32px;z-index:10000;padding:0.5rem 1rem;font-size:1.5rem;background:#fff;border:none;border-radius:4px;cursor:pointer;";
const BUTTON_STYLE: &str = "padding:0.5rem 1rem;font-size:1rem;border:none;border-radius:4px;cursor:pointer;";

pub fn crop_dialog(component: &CvEditor, link: &Scope<CvEditor>) -> Html {
    let session = component.editor.crop();
    let Some(upload) = session.upload() else {
        return html! {};
    };
    let processing = session.is_processing();

    let selection_box = match session.selection() {
        Some((geometry, selection)) => {
            let max_side = geometry.displayed.width.min(geometry.displayed.height);
            let min_side = component.editor.crop_settings().min_selection.min(max_side);
            let box_style = format!(
                "position:absolute;left:{:.1}px;top:{:.1}px;width:{:.1}px;height:{:.1}px;\
                 border-radius:50%;border:2px solid #fff;box-shadow:0 0 0 9999px rgba(0,0,0,0.55);\
                 cursor:{};touch-action:none;",
                selection.x,
                selection.y,
                selection.size,
                selection.size,
                if processing { "default" } else { "move" },
            );
            let onpointerdown = link.callback(|e: PointerEvent| {
                if let Some(target) = e.target_dyn_into::<web_sys::Element>() {
                    target.set_pointer_capture(e.pointer_id()).ok();
                }
                Msg::DragStart {
                    x: e.client_x() as f64,
                    y: e.client_y() as f64,
                }
            });
            let onpointermove = link.callback(|e: PointerEvent| Msg::DragMove {
                x: e.client_x() as f64,
                y: e.client_y() as f64,
            });
            let slider = link.batch_callback(|e: InputEvent| {
                event_value(&e).parse::<f64>().ok().map(Msg::ResizeSelection)
            });
            Some((
                html! {
                    <div
                        class="crop-selection"
                        style={box_style}
                        onpointerdown={(!processing).then_some(onpointerdown)}
                        onpointermove={(!processing).then_some(onpointermove)}
                        onpointerup={link.callback(|_: PointerEvent| Msg::DragEnd)}
                        onpointercancel={link.callback(|_: PointerEvent| Msg::DragEnd)}
                    />
                },
                html! {
                    <label style="display:flex;align-items:center;gap:12px;color:#fff;margin-top:16px;">
                        <span>{"Taille"}</span>
                        <input
                            type="range"
                            min={format!("{:.0}", min_side)}
                            max={format!("{:.0}", max_side)}
                            step="1"
                            value={format!("{:.0}", selection.size)}
                            disabled={processing}
                            oninput={slider}
                        />
                    </label>
                },
            ))
        }
        None => None,
    };
    let (selection_box, slider) = selection_box.unzip();

    let apply_label = if processing { "Traitement..." } else { "Appliquer" };
    let can_apply = matches!(session, CropSession::Cropping { .. });

    html! {
        <div class="crop-dialog no-print" style={OVERLAY_STYLE}>
            <button
                onclick={link.callback(|_| Msg::CancelCrop)}
                disabled={processing}
                style={CLOSE_STYLE}
            >
                { "✕" }
            </button>
            <h2 style="color:#fff;margin:0 0 16px;font-family:Arial, sans-serif;">{"Recadrer la photo"}</h2>
            <div style="position:relative;overflow:hidden;line-height:0;user-select:none;">
                <img
                    ref={component.crop_image_ref.clone()}
                    src={upload.preview_url.clone()}
                    alt="Photo à recadrer"
                    draggable="false"
                    style="display:block;max-width:min(80vw, 480px);max-height:60vh;"
                    onload={link.callback(|_: Event| Msg::CropImageLoaded)}
                    onerror={link.callback(|_: Event| Msg::CropImageFailed)}
                />
                { selection_box.unwrap_or_default() }
            </div>
            { slider.unwrap_or_default() }
            <div style="display:flex;gap:12px;margin-top:24px;">
                <button
                    style={format!("{}background:#fff;color:#333;", BUTTON_STYLE)}
                    disabled={processing}
                    onclick={link.callback(|_| Msg::CancelCrop)}
                >
                    { "Annuler" }
                </button>
                <button
                    style={format!("{}background:#1976d2;color:#fff;", BUTTON_STYLE)}
                    disabled={!can_apply}
                    onclick={link.callback(|_| Msg::ApplyCrop)}
                >
                    {
                        if processing {
                            html! { <span class="spin" style="display:inline-block;width:14px;height:14px;margin-right:8px;border:3px solid #cfe3f7;border-top-color:#fff;border-radius:50%;animation:spin 1s linear infinite;vertical-align:middle;"></span> }
                        } else {
                            html! {}
                        }
                    }
                    { apply_label }
                </button>
            </div>
            <style>{r#"
                @keyframes spin { from { transform: rotate(0deg); } to { transform: rotate(360deg); } }
            "#}</style>
        </div>
    }
}

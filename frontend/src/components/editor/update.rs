//! Update function of the CV editor (Elm-style: state + message -> re-render
//! flag).
//!
//! CV changes go through `EditorState::update_cv`. The photo flow is
//! asynchronous in two places: reading the file bytes, and yielding one
//! frame between `ApplyCrop` and `RunCrop` so that the busy state is painted
//! before the synchronous crop work starts.

use common::photo::{CropGeometry, FileDescriptor, Size};
use common::preview::render_standalone;
use gloo_file::futures::read_as_bytes;
use web_sys::HtmlImageElement;
use yew::prelude::*;

use super::dialogs::crop::rasterize;
use super::helpers::{download, export_file_name, show_alert, show_toast};
use super::messages::Msg;
use super::state::CvEditor;

const PROCESSING_ERROR: &str = "Erreur lors du traitement de l'image";
const LOADING_ERROR: &str = "Erreur lors du chargement de l'image";

pub fn update(component: &mut CvEditor, ctx: &Context<CvEditor>, msg: Msg) -> bool {
    match msg {
        Msg::SetTab(tab) => {
            component.active_tab = tab;
            true
        }
        Msg::ToggleOptionalFields => {
            component.show_optional_fields = !component.show_optional_fields;
            true
        }
        Msg::UpdateCv(update) => {
            component.editor.update_cv(update);
            true
        }
        Msg::SetTemplate(template) => {
            component.editor.set_template(template);
            true
        }
        Msg::LoadSample => {
            component.editor.load_sample();
            show_toast("Exemple chargé.");
            true
        }
        Msg::OpenFileDialog => {
            if let Some(input) = component.file_input_ref.cast::<web_sys::HtmlInputElement>() {
                input.click();
            }
            false
        }
        Msg::FileSelected(file) => {
            let file = gloo_file::File::from(file);
            let descriptor = FileDescriptor {
                mime_type: file.raw_mime_type(),
                size: file.size(),
            };
            component.reset_file_input();
            if let Err(err) = component.editor.check_upload(&descriptor) {
                show_alert(&err.to_string());
                return false;
            }
            let link = ctx.link().clone();
            wasm_bindgen_futures::spawn_local(async move {
                match read_as_bytes(&file).await {
                    Ok(bytes) => link.send_message(Msg::FileRead {
                        file: descriptor,
                        bytes,
                    }),
                    Err(err) => link.send_message(Msg::FileReadFailed(err.to_string())),
                }
            });
            false
        }
        Msg::FileRead { file, bytes } => {
            if let Err(err) = component.editor.begin_upload(&file, bytes) {
                show_alert(&err.to_string());
            }
            component.drag_origin = None;
            true
        }
        Msg::FileReadFailed(err) => {
            log::warn!("file read failed: {}", err);
            show_alert(&format!("{}: {}", PROCESSING_ERROR, err));
            false
        }
        Msg::RemovePhoto => {
            component.editor.remove_photo();
            true
        }
        Msg::CropImageLoaded => {
            let Some(img) = component.crop_image_ref.cast::<HtmlImageElement>() else {
                return false;
            };
            let geometry = CropGeometry {
                natural: Size::new(img.natural_width() as f64, img.natural_height() as f64),
                displayed: Size::new(img.client_width() as f64, img.client_height() as f64),
            };
            log::debug!("crop image displayed: {:?}", geometry);
            component.editor.image_displayed(geometry);
            true
        }
        Msg::CropImageFailed => {
            component.editor.image_failed();
            component.drag_origin = None;
            show_alert(LOADING_ERROR);
            true
        }
        Msg::DragStart { x, y } => {
            component.drag_origin = Some((x, y));
            false
        }
        Msg::DragMove { x, y } => {
            let Some((last_x, last_y)) = component.drag_origin else {
                return false;
            };
            component.drag_origin = Some((x, y));
            component.editor.move_selection(x - last_x, y - last_y);
            true
        }
        Msg::DragEnd => {
            component.drag_origin = None;
            false
        }
        Msg::ResizeSelection(size) => {
            component.editor.resize_selection(size);
            true
        }
        Msg::ApplyCrop => {
            if let Err(err) = component.editor.begin_apply() {
                show_alert(&format!("{}: {}", PROCESSING_ERROR, err));
                return false;
            }
            component.drag_origin = None;
            let link = ctx.link().clone();
            wasm_bindgen_futures::spawn_local(async move {
                gloo_timers::future::TimeoutFuture::new(16).await;
                link.send_message(Msg::RunCrop);
            });
            true
        }
        Msg::RunCrop => {
            let image_ref = component.crop_image_ref.clone();
            let quality = component.editor.crop_settings().jpeg_quality;
            let result = component
                .editor
                .complete_apply_with(|plan| Some(rasterize(&image_ref, plan, quality)));
            match result {
                Ok(()) => show_toast("Photo mise à jour."),
                Err(err) => {
                    log::error!("crop failed: {}", err);
                    show_alert(&format!("{}: {}", PROCESSING_ERROR, err));
                }
            }
            true
        }
        Msg::CancelCrop => {
            component.editor.cancel_crop();
            component.drag_origin = None;
            true
        }
        Msg::Print => {
            if let Some(window) = web_sys::window() {
                if let Err(err) = window.print() {
                    log::error!("print failed: {:?}", err);
                }
            }
            false
        }
        Msg::ExportHtml => {
            let cv = component.editor.cv();
            let page = render_standalone(cv, component.editor.template());
            download(
                &export_file_name(&cv.personal_info.full_name()),
                "text/html;charset=utf-8",
                &page,
            );
            show_toast("CV exporté.");
            false
        }
    }
}

//! Browser-side helpers of the CV editor: user feedback, downloads and form
//! value extraction.

use gloo_file::{Blob, ObjectUrl};
use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

use super::styles::TOAST_STYLE;

const TOAST_MS: u32 = 3000;

/// Shows `message` in a toast that removes itself after three seconds.
pub fn show_toast(message: &str) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    let (Ok(toast), Some(body)) = (document.create_element("div"), document.body()) else {
        return;
    };
    let toast: HtmlElement = toast.unchecked_into();
    toast.set_text_content(Some(message));
    toast.set_class_name("no-print");
    set_styles(&toast, TOAST_STYLE);
    if body.append_child(&toast).is_err() {
        return;
    }
    wasm_bindgen_futures::spawn_local(async move {
        gloo_timers::future::TimeoutFuture::new(TOAST_MS).await;
        toast.remove();
    });
}

/// Applies inline `(property, value)` pairs; unknown properties are ignored
/// by the browser.
pub fn set_styles(element: &HtmlElement, properties: &[(&str, &str)]) {
    let style = element.style();
    for (property, value) in properties {
        if let Err(err) = style.set_property(property, value) {
            log::debug!("style {} rejected: {:?}", property, err);
        }
    }
}

/// Blocking alert, used for errors the user has to acknowledge.
pub fn show_alert(message: &str) {
    if let Some(window) = web_sys::window() {
        window.alert_with_message(message).ok();
    }
}

/// Offers `content` as a file download named `file_name`.
pub fn download(file_name: &str, mime_type: &str, content: &str) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    let url = ObjectUrl::from(Blob::new_with_options(content, Some(mime_type)));
    let Ok(anchor) = document.create_element("a") else {
        return;
    };
    let anchor: web_sys::HtmlAnchorElement = anchor.unchecked_into();
    anchor.set_href(&url);
    anchor.set_download(file_name);
    anchor.click();
    // The object URL is revoked when `url` drops; keep it until the browser
    // has started the download.
    wasm_bindgen_futures::spawn_local(async move {
        gloo_timers::future::TimeoutFuture::new(1000).await;
        drop(url);
    });
}

/// Value of the input, textarea or select that fired `event`.
pub fn event_value(event: &Event) -> String {
    let Some(target) = event.target() else {
        return String::new();
    };
    if let Some(input) = target.dyn_ref::<HtmlInputElement>() {
        input.value()
    } else if let Some(area) = target.dyn_ref::<HtmlTextAreaElement>() {
        area.value()
    } else if let Some(select) = target.dyn_ref::<HtmlSelectElement>() {
        select.value()
    } else {
        String::new()
    }
}

pub fn event_checked(event: &Event) -> bool {
    event
        .target()
        .and_then(|t| t.dyn_into::<HtmlInputElement>().ok())
        .is_some_and(|input| input.checked())
}

/// File name of the HTML export, derived from the person's name.
pub fn export_file_name(full_name: &str) -> String {
    let slug: String = full_name
        .split_whitespace()
        .map(|part| {
            part.chars()
                .filter(|c| c.is_alphanumeric() || *c == '-')
                .collect::<String>()
                .to_lowercase()
        })
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join("-");
    if slug.is_empty() {
        "cv.html".to_string()
    } else {
        format!("cv-{}.html", slug)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toast_style_sets_each_property_once() {
        let mut names: Vec<_> = TOAST_STYLE.iter().map(|(name, _)| *name).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), TOAST_STYLE.len());
        assert!(TOAST_STYLE.contains(&("position", "fixed")));
    }

    #[test]
    fn export_name_is_a_slug_of_the_full_name() {
        assert_eq!(export_file_name("Camille  Durand"), "cv-camille-durand.html");
        assert_eq!(export_file_name("Jean-Luc O'Neil"), "cv-jean-luc-oneil.html");
        assert_eq!(export_file_name("   "), "cv.html");
    }
}

//! View of the CV editor: toolbar, tabbed form and live preview side by side.

use common::preview::TemplateKind;
use yew::html::Scope;
use yew::prelude::*;

use super::dialogs::crop::crop_dialog;
use super::forms::{education_form, experience_form, languages_form, personal_form, skills_form};
use super::helpers::event_value;
use super::messages::Msg;
use super::state::{CvEditor, Tab};
use super::styles::EDITOR_CSS;
use crate::components::preview::CvPreview;
use crate::components::section_card::SectionCard;

pub fn view(component: &CvEditor, ctx: &Context<CvEditor>) -> Html {
    let link = ctx.link();
    html! {
        <div class="cv-editor-root">
            <style>{EDITOR_CSS}</style>
            { build_toolbar(component, link) }
            <div class="editor-layout">
                <section class="editor-pane no-print">
                    { build_tab_bar(component, link) }
                    { build_active_tab(component, link) }
                </section>
                <section class="preview-pane">
                    <CvPreview
                        cv={component.editor.cv().clone()}
                        template={component.editor.template()}
                    />
                </section>
            </div>
            { crop_dialog(component, link) }
        </div>
    }
}

fn build_toolbar(component: &CvEditor, link: &Scope<CvEditor>) -> Html {
    let current = component.editor.template();
    let onchange = link.callback(|e: Event| Msg::SetTemplate(TemplateKind::from_selector(&event_value(&e))));
    html! {
        <header class="toolbar no-print">
            <h1>{"Éditeur de CV"}</h1>
            <label>
                <span class="field-label">{"Modèle "}</span>
                <select {onchange}>
                    { for TemplateKind::ALL.iter().map(|kind| html! {
                        <option value={kind.as_str()} selected={*kind == current}>{ kind.label() }</option>
                    }) }
                </select>
            </label>
            { icon_button("auto_awesome", "Exemple", link.callback(|_| Msg::LoadSample)) }
            { icon_button("print", "Imprimer", link.callback(|_| Msg::Print)) }
            { icon_button("download", "Exporter HTML", link.callback(|_| Msg::ExportHtml)) }
        </header>
    }
}

fn build_tab_bar(component: &CvEditor, link: &Scope<CvEditor>) -> Html {
    html! {
        <div class="tab-bar">
            { for Tab::ALL.iter().map(|tab| {
                let tab = *tab;
                html! {
                    <button
                        class={classes!("tab-btn", (component.active_tab == tab).then_some("active"))}
                        onclick={link.callback(move |_| Msg::SetTab(tab))}
                    >
                        <i class="material-icons">{tab.icon()}</i>
                        <span>{tab.label()}</span>
                    </button>
                }
            }) }
        </div>
    }
}

fn build_active_tab(component: &CvEditor, link: &Scope<CvEditor>) -> Html {
    let tab = component.active_tab;
    let body = match tab {
        Tab::Personal => personal_form(component, link),
        Tab::Experience => experience_form(component, link),
        Tab::Education => education_form(component, link),
        Tab::Languages => languages_form(component, link),
        Tab::Skills => skills_form(component, link),
    };
    let title = match tab {
        Tab::Personal => "Informations personnelles",
        other => other.label(),
    };
    html! {
        <SectionCard title={title} icon={AttrValue::from(tab.icon())} key={tab.label()}>
            { body }
        </SectionCard>
    }
}

/// Toolbar button with a Material icon and a label.
fn icon_button(icon_name: &str, label: &str, on_click: Callback<MouseEvent>) -> Html {
    html! {
        <button class="icon-btn" onclick={on_click}>
            <i class="material-icons">{icon_name}</i>
            <span class="icon-label">{label}</span>
        </button>
    }
}

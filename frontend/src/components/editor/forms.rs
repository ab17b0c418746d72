//! Forms of the five editor tabs.
//!
//! Every edit produces a whole-field `CvUpdate`: personal fields one at a
//! time, lists as a complete replacement built with `common::model::list`.

use common::model::dates::is_month_year;
use common::model::list;
use common::model::{
    CvUpdate, Education, Experience, Gender, Language, Level, MaritalStatus, PersonalField,
    PersonalInfo, Skill,
};
use wasm_bindgen::JsCast;
use web_sys::HtmlInputElement;
use yew::html::Scope;
use yew::prelude::*;

use super::helpers::{event_checked, event_value};
use super::messages::Msg;
use super::state::CvEditor;

/// Callback replacing the entry at `index` after `apply` wrote the field
/// value into it.
fn edit_entry<T, E>(
    link: &Scope<CvEditor>,
    items: &[T],
    index: usize,
    wrap: fn(Vec<T>) -> CvUpdate,
    apply: fn(&mut T, String),
) -> Callback<E>
where
    T: Clone + 'static,
    E: AsRef<Event> + 'static,
{
    let items = items.to_vec();
    link.callback(move |e: E| {
        let value = event_value(e.as_ref());
        Msg::UpdateCv(wrap(list::replaced_at(&items, index, |item| apply(item, value))))
    })
}

fn add_entry<T: Clone + 'static>(
    link: &Scope<CvEditor>,
    items: &[T],
    wrap: fn(Vec<T>) -> CvUpdate,
    make: fn() -> T,
) -> Callback<MouseEvent> {
    let items = items.to_vec();
    link.callback(move |_| Msg::UpdateCv(wrap(list::appended(&items, make()))))
}

fn remove_entry<T: Clone + list::HasId + 'static>(
    link: &Scope<CvEditor>,
    items: &[T],
    index: usize,
    wrap: fn(Vec<T>) -> CvUpdate,
) -> Callback<MouseEvent> {
    let items = items.to_vec();
    let id = items[index].id().clone();
    link.callback(move |_| Msg::UpdateCv(wrap(list::removed(&items, &id))))
}

fn personal_input(
    link: &Scope<CvEditor>,
    label: &'static str,
    value: &str,
    field: fn(String) -> PersonalField,
) -> Html {
    let oninput = link.callback(move |e: InputEvent| {
        Msg::UpdateCv(CvUpdate::Personal(field(event_value(&e))))
    });
    text_field(label, value, oninput)
}

fn text_field(label: &'static str, value: &str, oninput: Callback<InputEvent>) -> Html {
    html! {
        <label class="field">
            <span class="field-label">{label}</span>
            <input type="text" value={value.to_string()} {oninput} />
        </label>
    }
}

fn text_area(label: &'static str, value: &str, oninput: Callback<InputEvent>) -> Html {
    html! {
        <label class="field">
            <span class="field-label">{label}</span>
            <textarea rows="4" value={value.to_string()} {oninput} />
        </label>
    }
}

/// Date input with a hint when the value does not look like `MM/YYYY`.
fn date_field(label: &'static str, value: &str, oninput: Callback<InputEvent>, disabled: bool) -> Html {
    let unconventional = !value.trim().is_empty() && !is_month_year(value);
    html! {
        <label class="field">
            <span class="field-label">{label}</span>
            <input
                type="text"
                placeholder="MM/AAAA"
                class={classes!("date-input", unconventional.then_some("unconventional"))}
                title={unconventional.then_some("Format conseillé : MM/AAAA")}
                value={value.to_string()}
                {disabled}
                {oninput}
            />
        </label>
    }
}

fn remove_button(onclick: Callback<MouseEvent>) -> Html {
    html! {
        <button class="icon-btn danger" title="Supprimer" {onclick}>
            <i class="material-icons">{"delete"}</i>
        </button>
    }
}

fn add_button(label: &'static str, onclick: Callback<MouseEvent>) -> Html {
    html! {
        <button class="add-btn" {onclick}>
            <i class="material-icons">{"add"}</i>
            <span>{label}</span>
        </button>
    }
}

fn photo_controls(component: &CvEditor, link: &Scope<CvEditor>, info: &PersonalInfo) -> Html {
    let accept = component.editor.upload_policy().accepted_types.join(",");
    let onchange = link.batch_callback(|e: Event| {
        e.target()
            .and_then(|t| t.dyn_into::<HtmlInputElement>().ok())
            .and_then(|input| input.files())
            .and_then(|files| files.get(0))
            .map(Msg::FileSelected)
    });
    let thumbnail = match info.photo.as_deref() {
        Some(src) => html! { <img class="photo-thumb" src={src.to_string()} alt="Photo" /> },
        None => html! { <div class="photo-thumb empty"><i class="material-icons">{"person"}</i></div> },
    };
    html! {
        <div class="photo-controls">
            { thumbnail }
            <div class="photo-actions">
                <button class="icon-btn wide" onclick={link.callback(|_| Msg::OpenFileDialog)}>
                    <i class="material-icons">{"photo_camera"}</i>
                    <span class="icon-label">{ if info.photo.is_some() { "Changer la photo" } else { "Ajouter une photo" } }</span>
                </button>
                if info.photo.is_some() {
                    <button class="icon-btn wide danger" onclick={link.callback(|_| Msg::RemovePhoto)}>
                        <i class="material-icons">{"delete"}</i>
                        <span class="icon-label">{"Retirer la photo"}</span>
                    </button>
                }
            </div>
            <input
                type="file"
                ref={component.file_input_ref.clone()}
                accept={accept}
                style="display:none"
                {onchange}
            />
        </div>
    }
}

fn enum_select<T: Copy + PartialEq + 'static>(
    link: &Scope<CvEditor>,
    label: &'static str,
    current: Option<T>,
    options: &[T],
    as_str: fn(T) -> &'static str,
    text: fn(T) -> &'static str,
    field: fn(Option<T>) -> PersonalField,
    parse: fn(&str) -> Option<T>,
) -> Html {
    let onchange = link.callback(move |e: Event| {
        Msg::UpdateCv(CvUpdate::Personal(field(parse(&event_value(&e)))))
    });
    html! {
        <label class="field">
            <span class="field-label">{label}</span>
            <select {onchange}>
                <option value="" selected={current.is_none()}>{"Non renseigné"}</option>
                { for options.iter().map(|option| html! {
                    <option value={as_str(*option)} selected={current == Some(*option)}>
                        { text(*option) }
                    </option>
                }) }
            </select>
        </label>
    }
}

pub fn personal_form(component: &CvEditor, link: &Scope<CvEditor>) -> Html {
    let info = &component.editor.cv().personal_info;
    html! {
        <div class="form-grid">
            { photo_controls(component, link, info) }
            { personal_input(link, "Prénom", &info.first_name, PersonalField::FirstName) }
            { personal_input(link, "Nom", &info.last_name, PersonalField::LastName) }
            { personal_input(link, "Titre", &info.title, PersonalField::Title) }
            { personal_input(link, "Email", &info.email, PersonalField::Email) }
            { personal_input(link, "Téléphone", &info.phone, PersonalField::Phone) }
            { personal_input(link, "Localisation", &info.location, PersonalField::Location) }
            {
                text_area(
                    "Résumé",
                    &info.summary,
                    link.callback(|e: InputEvent| Msg::UpdateCv(CvUpdate::Personal(PersonalField::Summary(event_value(&e))))),
                )
            }
            <button class="link-btn" onclick={link.callback(|_| Msg::ToggleOptionalFields)}>
                { if component.show_optional_fields { "Masquer les champs optionnels" } else { "Afficher les champs optionnels" } }
            </button>
            if component.show_optional_fields {
                { personal_input(link, "Date de naissance", &info.birth_date, PersonalField::BirthDate) }
                {
                    enum_select(
                        link, "Sexe", info.gender, &Gender::ALL,
                        Gender::as_str, Gender::label, PersonalField::Gender, Gender::parse_optional,
                    )
                }
                {
                    enum_select(
                        link, "État civil", info.marital_status, &MaritalStatus::ALL,
                        MaritalStatus::as_str, MaritalStatus::label, PersonalField::MaritalStatus,
                        MaritalStatus::parse_optional,
                    )
                }
                { personal_input(link, "Permis de conduire", &info.driving_license, PersonalField::DrivingLicense) }
                { personal_input(link, "LinkedIn", &info.linkedin, PersonalField::Linkedin) }
                { personal_input(link, "Autre", &info.custom_field, PersonalField::CustomField) }
            }
        </div>
    }
}

pub fn experience_form(component: &CvEditor, link: &Scope<CvEditor>) -> Html {
    let items = &component.editor.cv().experiences;
    let wrap: fn(Vec<Experience>) -> CvUpdate = CvUpdate::Experiences;
    let entries = items.iter().enumerate().map(|(index, exp)| {
        let on_current = {
            let items = items.clone();
            link.callback(move |e: Event| {
                let current = event_checked(&e);
                Msg::UpdateCv(CvUpdate::Experiences(list::replaced_at(&items, index, |x| {
                    x.current = current
                })))
            })
        };
        html! {
            <div class="entry-card" key={exp.id.as_str().to_string()}>
                <div class="entry-header">
                    <strong>{ if exp.position.trim().is_empty() { "Nouveau poste" } else { exp.position.as_str() } }</strong>
                    { remove_button(remove_entry(link, items, index, wrap)) }
                </div>
                { text_field("Poste", &exp.position, edit_entry(link, items, index, wrap, |x, v| x.position = v)) }
                { text_field("Entreprise", &exp.company, edit_entry(link, items, index, wrap, |x, v| x.company = v)) }
                <div class="field-row">
                    { date_field("Début", &exp.start_date, edit_entry(link, items, index, wrap, |x, v| x.start_date = v), false) }
                    { date_field("Fin", &exp.end_date, edit_entry(link, items, index, wrap, |x, v| x.end_date = v), exp.current) }
                </div>
                <label class="checkbox">
                    <input type="checkbox" checked={exp.current} onchange={on_current} />
                    <span>{"Poste actuel"}</span>
                </label>
                { text_area("Description", &exp.description, edit_entry(link, items, index, wrap, |x, v| x.description = v)) }
            </div>
        }
    });
    html! {
        <div class="entries">
            { for entries }
            { add_button("Ajouter une expérience", add_entry(link, items, wrap, Experience::new)) }
        </div>
    }
}

pub fn education_form(component: &CvEditor, link: &Scope<CvEditor>) -> Html {
    let items = &component.editor.cv().education;
    let wrap: fn(Vec<Education>) -> CvUpdate = CvUpdate::Education;
    let entries = items.iter().enumerate().map(|(index, edu)| {
        html! {
            <div class="entry-card" key={edu.id.as_str().to_string()}>
                <div class="entry-header">
                    <strong>{ if edu.degree.trim().is_empty() { "Nouvelle formation" } else { edu.degree.as_str() } }</strong>
                    { remove_button(remove_entry(link, items, index, wrap)) }
                </div>
                { text_field("Établissement", &edu.institution, edit_entry(link, items, index, wrap, |x, v| x.institution = v)) }
                { text_field("Diplôme", &edu.degree, edit_entry(link, items, index, wrap, |x, v| x.degree = v)) }
                { text_field("Domaine", &edu.field, edit_entry(link, items, index, wrap, |x, v| x.field = v)) }
                <div class="field-row">
                    { date_field("Début", &edu.start_date, edit_entry(link, items, index, wrap, |x, v| x.start_date = v), false) }
                    { date_field("Fin", &edu.end_date, edit_entry(link, items, index, wrap, |x, v| x.end_date = v), false) }
                </div>
                { text_area("Description", &edu.description, edit_entry(link, items, index, wrap, |x, v| x.description = v)) }
            </div>
        }
    });
    html! {
        <div class="entries">
            { for entries }
            { add_button("Ajouter une formation", add_entry(link, items, wrap, Education::new)) }
        </div>
    }
}

fn level_select(current: Level, label: fn(Level) -> &'static str, onchange: Callback<Event>) -> Html {
    html! {
        <select class="level-select" {onchange}>
            { for Level::all().map(|level| html! {
                <option value={level.value().to_string()} selected={level == current}>
                    { format!("{} - {}", level.value(), label(level)) }
                </option>
            }) }
        </select>
    }
}

fn parse_level(value: &str) -> Level {
    value.trim().parse::<i64>().map(Level::new).unwrap_or_default()
}

pub fn skills_form(component: &CvEditor, link: &Scope<CvEditor>) -> Html {
    let items = &component.editor.cv().skills;
    let wrap: fn(Vec<Skill>) -> CvUpdate = CvUpdate::Skills;
    let rows = items.iter().enumerate().map(|(index, skill)| {
        html! {
            <div class="rated-row" key={skill.id.as_str().to_string()}>
                <input
                    type="text"
                    placeholder="Compétence"
                    value={skill.name.clone()}
                    oninput={edit_entry(link, items, index, wrap, |x, v| x.name = v)}
                />
                { level_select(skill.level, Level::skill_label, edit_entry(link, items, index, wrap, |x, v| x.level = parse_level(&v))) }
                { remove_button(remove_entry(link, items, index, wrap)) }
            </div>
        }
    });
    html! {
        <div class="entries">
            { for rows }
            { add_button("Ajouter une compétence", add_entry(link, items, wrap, Skill::new)) }
        </div>
    }
}

pub fn languages_form(component: &CvEditor, link: &Scope<CvEditor>) -> Html {
    let items = &component.editor.cv().languages;
    let wrap: fn(Vec<Language>) -> CvUpdate = CvUpdate::Languages;
    let rows = items.iter().enumerate().map(|(index, language)| {
        html! {
            <div class="rated-row" key={language.id.as_str().to_string()}>
                <input
                    type="text"
                    placeholder="Langue"
                    value={language.name.clone()}
                    oninput={edit_entry(link, items, index, wrap, |x, v| x.name = v)}
                />
                { level_select(language.level, Level::language_label, edit_entry(link, items, index, wrap, |x, v| x.level = parse_level(&v))) }
                { remove_button(remove_entry(link, items, index, wrap)) }
            </div>
        }
    });
    html! {
        <div class="entries">
            { for rows }
            { add_button("Ajouter une langue", add_entry(link, items, wrap, Language::new)) }
        </div>
    }
}

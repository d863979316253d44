//! Форма создания контакта.
//!
//! Черновик хранится в `AppGlobalContext::form_states` под ключом таба,
//! поэтому переживает переключение вкладок. Контакт никуда не сохраняется.

use contracts::domain::a001_contact::{ContactDraft, ContactKind};
use contracts::shared::record_list::FilterCategory;
use contracts::shared::validation::{error_for, FieldError};
use leptos::logging::log;
use leptos::prelude::*;
use thaw::*;

use crate::layout::global_context::AppGlobalContext;
use crate::shared::icons::{icon, Icon};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::{page_id, PAGE_CAT_USECASE};

const FORM_KEY: &str = "a001_contact_new";

fn load_draft(ctx: &AppGlobalContext) -> ContactDraft {
    ctx.get_form_state(FORM_KEY)
        .and_then(|value| serde_json::from_value(value).ok())
        .unwrap_or_default()
}

fn text_field(
    id: &'static str,
    label: &'static str,
    placeholder: &'static str,
    draft: RwSignal<ContactDraft>,
    errors: RwSignal<Vec<FieldError>>,
    get: fn(&ContactDraft) -> String,
    set: fn(&mut ContactDraft, String),
) -> impl IntoView {
    let error = move || errors.with(|e| error_for(e, id).map(str::to_string));
    view! {
        <div class="form-group" class:form-group--error=move || error().is_some()>
            <label for=id>{label}</label>
            <input
                type="text"
                id=id
                placeholder=placeholder
                prop:value=move || draft.with(get)
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    draft.update(|d| set(d, value));
                }
            />
            {move || error().map(|message| view! { <div class="form-group__error">{message}</div> })}
        </div>
    }
}

#[component]
pub fn ContactCreateForm(on_close: Callback<()>) -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");

    let draft = RwSignal::new(load_draft(&ctx));
    let errors = RwSignal::new(Vec::<FieldError>::new());
    let created = RwSignal::new(None::<String>);

    Effect::new(move |_| {
        let state = draft.get();
        if state == ContactDraft::default() {
            ctx.clear_form_state(FORM_KEY);
            return;
        }
        match serde_json::to_value(&state) {
            Ok(value) => ctx.set_form_state(FORM_KEY.to_string(), value),
            Err(err) => log::warn!("contact draft not stored: {}", err),
        }
    });

    let submit = move |_| {
        let id = format!("c-{}", chrono::Utc::now().timestamp_millis());
        match draft.get_untracked().into_contact(id) {
            Ok(contact) => {
                log!("✅ Contact '{}' created ({}), not persisted", contact.name, contact.id);
                errors.set(Vec::new());
                created.set(Some(contact.name));
                draft.set(ContactDraft::default());
            }
            Err(found) => {
                log!("⚠️ Contact form has {} errors", found.len());
                created.set(None);
                errors.set(found);
            }
        }
    };

    let kind_options = ContactKind::ALL
        .iter()
        .map(|kind| {
            let code = kind.code();
            view! {
                <option value=code selected=move || draft.with(|d| d.kind.code() == code)>
                    {kind.label()}
                </option>
            }
        })
        .collect_view();

    view! {
        <PageFrame page_id=page_id(FORM_KEY, PAGE_CAT_USECASE) category=PAGE_CAT_USECASE>
            <div class="header">
                <div class="header__content">
                    <h1 class="header__title">"Nouveau contact"</h1>
                </div>
            </div>

            {move || created.get().map(|name| view! {
                <div class="alert alert--success">
                    {icon(Icon::CheckCircle)}
                    {format!("Contact « {} » créé.", name)}
                </div>
            })}

            <div class="details-form">
                {text_field("name", "Nom *", "Prénom Nom", draft, errors,
                    |d| d.name.clone(), |d, v| d.name = v)}
                {text_field("email", "E-mail *", "nom@societe.fr", draft, errors,
                    |d| d.email.clone(), |d, v| d.email = v)}
                {text_field("company", "Société", "Raison sociale", draft, errors,
                    |d| d.company.clone(), |d, v| d.company = v)}
                {text_field("phone", "Téléphone", "01 23 45 67 89", draft, errors,
                    |d| d.phone.clone(), |d, v| d.phone = v)}
                {text_field("city", "Ville", "Paris", draft, errors,
                    |d| d.city.clone(), |d, v| d.city = v)}

                <div class="form-group">
                    <label for="kind">"Type"</label>
                    <select
                        id="kind"
                        on:change=move |ev| {
                            let code = event_target_value(&ev);
                            if let Some(kind) = ContactKind::from_code(&code) {
                                draft.update(|d| d.kind = kind);
                            }
                        }
                    >
                        {kind_options}
                    </select>
                </div>
            </div>

            <div class="details-actions">
                <Button appearance=ButtonAppearance::Primary on_click=submit>
                    {icon(Icon::Save)}
                    "Créer"
                </Button>
                <Button on_click=move |_| on_close.run(())>"Fermer"</Button>
            </div>
        </PageFrame>
    }
}

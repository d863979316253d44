//! Мастер новой декларации: три шага, переход вперёд только без ошибок.

use contracts::domain::a005_tax_declaration::{
    DeclarationKind, DeclarationWizard, TaxDeclaration, WizardStep,
};
use contracts::shared::format::{format_date, format_money};
use contracts::shared::record_list::{FilterCategory, ListRecord};
use contracts::shared::validation::error_for;
use leptos::logging::log;
use leptos::prelude::*;
use thaw::*;

use crate::shared::icons::{icon, Icon};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::{page_id, PAGE_CAT_USECASE};

const WIZARD_KEY: &str = "a005_tax_declaration_new";

fn step_class(step: WizardStep, current: WizardStep) -> &'static str {
    if step == current {
        "wizard__step wizard__step--active"
    } else if step.index() < current.index() {
        "wizard__step wizard__step--done"
    } else {
        "wizard__step"
    }
}

fn field_error(wizard: RwSignal<DeclarationWizard>, field: &'static str) -> impl IntoView {
    move || {
        wizard.with(|w| {
            error_for(&w.errors, field)
                .map(|message| view! { <div class="form-group__error">{message.to_string()}</div> })
        })
    }
}

fn date_input(
    wizard: RwSignal<DeclarationWizard>,
    field: &'static str,
    label: &'static str,
    get: fn(&DeclarationWizard) -> String,
    set: fn(&mut DeclarationWizard, String),
) -> impl IntoView {
    view! {
        <div class="form-group">
            <label for=field>{label}</label>
            <input
                type="date"
                id=field
                prop:value=move || wizard.with(get)
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    wizard.update(|w| set(w, value));
                }
            />
            {field_error(wizard, field)}
        </div>
    }
}

fn period_step(wizard: RwSignal<DeclarationWizard>) -> AnyView {
    let kind_options = DeclarationKind::ALL
        .iter()
        .map(|kind| {
            let code = kind.code();
            view! {
                <option value=code selected=move || wizard.with(|w| w.kind.code() == code)>
                    {kind.label()}
                </option>
            }
        })
        .collect_view();

    view! {
        <div class="details-form">
            <div class="form-group">
                <label for="kind">"Type de déclaration"</label>
                <select
                    id="kind"
                    on:change=move |ev| {
                        let code = event_target_value(&ev);
                        wizard.update(|w| w.set_kind_code(&code));
                    }
                >
                    {kind_options}
                </select>
            </div>
            {date_input(wizard, "period_start", "Début de période",
                |w| w.period_start.clone(), |w, v| w.period_start = v)}
            {date_input(wizard, "period_end", "Fin de période",
                |w| w.period_end.clone(), |w, v| w.period_end = v)}
        </div>
    }
    .into_any()
}

fn amounts_step(wizard: RwSignal<DeclarationWizard>) -> AnyView {
    let preview = move || {
        wizard.with(|w| match w.tax_due() {
            Some(tax) => format!(
                "Montant estimé : {} (taux {} %)",
                format_money(tax),
                w.kind.default_rate()
            ),
            None => "Saisissez la base imposable pour calculer le montant.".to_string(),
        })
    };

    view! {
        <div class="details-form">
            <div class="form-group">
                <label for="taxable_base">"Base imposable (€)"</label>
                <input
                    type="text"
                    id="taxable_base"
                    placeholder="10 000,00"
                    prop:value=move || wizard.with(|w| w.taxable_base.clone())
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        wizard.update(|w| w.taxable_base = value);
                    }
                />
                {field_error(wizard, "taxable_base")}
            </div>
            <p class="detail__hint">{preview}</p>
        </div>
    }
    .into_any()
}

fn review_step(wizard: RwSignal<DeclarationWizard>) -> AnyView {
    let rows = wizard.with_untracked(|w| {
        vec![
            ("Type", w.kind.label().to_string()),
            ("Début de période", w.period_start.clone()),
            ("Fin de période", w.period_end.clone()),
            ("Base imposable", w.taxable_base.clone()),
            (
                "Montant dû",
                w.tax_due().map(format_money).unwrap_or_else(|| "-".to_string()),
            ),
        ]
    });

    view! {
        <dl class="record-detail__grid">
            {rows
                .into_iter()
                .map(|(label, value)| view! {
                    <div class="record-detail__field">
                        <dt>{label}</dt>
                        <dd>{value}</dd>
                    </div>
                })
                .collect_view()}
        </dl>
        {field_error(wizard, "step")}
    }
    .into_any()
}

#[component]
pub fn DeclarationWizardPage(on_close: Callback<()>) -> impl IntoView {
    let wizard = RwSignal::new(DeclarationWizard::default());
    let result = RwSignal::new(None::<TaxDeclaration>);
    let current_step = Memo::new(move |_| wizard.with(|w| w.step));

    let go_next = move |_| {
        let moved = wizard.try_update(|w| w.next()).unwrap_or(false);
        log!("🧭 Wizard next: moved={}", moved);
    };
    let go_back = move |_| wizard.update(|w| w.back());
    let submit = move |_| {
        let id = format!("d-{}", chrono::Utc::now().timestamp_millis());
        match wizard.try_update(|w| w.submit(id)) {
            Some(Ok(declaration)) => {
                log!("✅ Declaration draft {} prepared, not persisted", declaration.reference);
                result.set(Some(declaration));
            }
            Some(Err(errors)) => log!("⚠️ Wizard submit rejected: {} errors", errors.len()),
            None => {}
        }
    };
    let restart = move |_| {
        result.set(None);
        wizard.set(DeclarationWizard::default());
    };

    let steps = WizardStep::ALL
        .iter()
        .map(|step| {
            let step = *step;
            view! {
                <div class=move || step_class(step, current_step.get())>
                    <span class="wizard__step-index">{step.index() + 1}</span>
                    <span class="wizard__step-label">{step.label()}</span>
                </div>
            }
        })
        .collect_view();

    let body = move || match current_step.get() {
        WizardStep::Period => period_step(wizard),
        WizardStep::Amounts => amounts_step(wizard),
        WizardStep::Review => review_step(wizard),
    };

    let result_view = move || {
        result.get().map(|declaration| {
            view! {
                <div class="alert alert--success">
                    {icon(Icon::CheckCircle)}
                    <div>
                        <div>{format!("Brouillon « {} » préparé.", declaration.title())}</div>
                        <div>
                            {format!(
                                "Montant dû {} avant le {}.",
                                format_money(declaration.tax_due),
                                format_date(declaration.due_date),
                            )}
                        </div>
                    </div>
                </div>
                <div class="details-actions">
                    <Button appearance=ButtonAppearance::Primary on_click=restart>
                        {icon(Icon::Plus)}
                        "Nouvelle déclaration"
                    </Button>
                    <Button on_click=move |_| on_close.run(())>"Fermer"</Button>
                </div>
            }
        })
    };

    view! {
        <PageFrame page_id=page_id(WIZARD_KEY, PAGE_CAT_USECASE) category=PAGE_CAT_USECASE>
            <div class="header">
                <div class="header__content">
                    <h1 class="header__title">"Nouvelle déclaration"</h1>
                </div>
            </div>

            <div class="wizard__steps">{steps}</div>

            <Show when=move || result.with(Option::is_none) fallback=result_view>
                <div class="wizard__body">{body}</div>
                <div class="details-actions">
                    <Button
                        on_click=go_back
                        disabled=Signal::derive(move || current_step.get() == WizardStep::Period)
                    >
                        {icon(Icon::ArrowLeft)}
                        "Précédent"
                    </Button>
                    {move || {
                        if current_step.get() == WizardStep::Review {
                            view! {
                                <Button appearance=ButtonAppearance::Primary on_click=submit>
                                    {icon(Icon::Save)}
                                    "Valider"
                                </Button>
                            }
                            .into_any()
                        } else {
                            view! {
                                <Button appearance=ButtonAppearance::Primary on_click=go_next>
                                    "Suivant"
                                    {icon(Icon::ArrowRight)}
                                </Button>
                            }
                            .into_any()
                        }
                    }}
                    <Button on_click=move |_| on_close.run(())>"Annuler"</Button>
                </div>
            </Show>
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_class() {
        assert_eq!(
            step_class(WizardStep::Period, WizardStep::Amounts),
            "wizard__step wizard__step--done"
        );
        assert_eq!(
            step_class(WizardStep::Amounts, WizardStep::Amounts),
            "wizard__step wizard__step--active"
        );
        assert_eq!(step_class(WizardStep::Review, WizardStep::Amounts), "wizard__step");
    }
}

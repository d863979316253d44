use contracts::shared::record_list::{
    ActionRequest, ListRecord, NavigationIntent, RecordAction, TabMode,
};
use leptos::logging::log;
use leptos::prelude::*;
use thaw::*;

use crate::layout::global_context::AppGlobalContext;
use crate::shared::components::ui::badge::StatusBadge;
use crate::shared::icons::{icon, Icon};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::{page_id, PAGE_CAT_DETAIL};

fn intent_for(entity: &str, id: &str, mode: TabMode, title: &str) -> Option<NavigationIntent> {
    let action = match mode {
        TabMode::View => RecordAction::View,
        TabMode::Edit => RecordAction::Edit,
    };
    let request = ActionRequest {
        action,
        id: id.to_string(),
    };
    NavigationIntent::for_action(entity, &request, title)
}

/// Карточка записи во вкладке: просмотр или редактирование.
///
/// Дочерние элементы рисуются под полями (итоги, шкалы и т.п.).
#[component]
pub fn RecordDetail<R>(
    entity: &'static str,
    #[prop(into)] id: String,
    /// `None`, если записи с таким id нет
    record: Option<R>,
    mode: TabMode,
    on_close: Callback<()>,
    #[prop(optional)] children: Option<Children>,
) -> impl IntoView
where
    R: ListRecord + Clone + Send + Sync + 'static,
    R::Status: Send + Sync + 'static,
{
    let tabs_store = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let frame_id = page_id(entity, PAGE_CAT_DETAIL);

    let Some(record) = record else {
        log!("⚠️ {}: record '{}' not found", entity, id);
        return view! {
            <PageFrame page_id=frame_id category=PAGE_CAT_DETAIL>
                <div class="alert alert--error">
                    {icon(Icon::AlertTriangle)}
                    {format!("Enregistrement « {} » introuvable.", id)}
                </div>
                <div class="detail__actions">
                    <Button on_click=move |_| on_close.run(())>"Fermer"</Button>
                </div>
            </PageFrame>
        }
        .into_any();
    };

    let title = record.title();
    if let Some(intent) = intent_for(entity, &id, mode, &title) {
        Effect::new(move |_| tabs_store.update_tab_title(&intent.tab_key, &intent.title));
    }

    let status = record.status();
    let fields = record.detail_fields();
    let extras = children.map(|children| view! { <div class="detail__extras">{children()}</div> });

    let body = match mode {
        TabMode::View => {
            let rows = fields
                .into_iter()
                .map(|(label, value)| {
                    view! {
                        <div class="record-detail__field">
                            <dt>{label}</dt>
                            <dd>{value}</dd>
                        </div>
                    }
                })
                .collect_view();
            let edit_title = title.clone();
            let open_edit = move |_| {
                if let Some(intent) = intent_for(entity, &id, TabMode::Edit, &edit_title) {
                    tabs_store.navigate(&intent);
                }
            };
            view! {
                <dl class="record-detail__grid">{rows}</dl>
                {extras}
                <div class="detail__actions">
                    <Button appearance=ButtonAppearance::Primary on_click=open_edit>
                        {icon(Icon::Pencil)}
                        "Modifier"
                    </Button>
                    <Button on_click=move |_| on_close.run(())>"Fermer"</Button>
                </div>
            }
            .into_any()
        }
        TabMode::Edit => {
            let notice = RwSignal::new(None::<String>);
            let inputs = fields
                .into_iter()
                .map(|(label, value)| {
                    let value = RwSignal::new(value);
                    view! {
                        <div class="form__group">
                            <label class="form__label">{label}</label>
                            <Input value=value />
                        </div>
                    }
                })
                .collect_view();
            let save = move |_| {
                log!("💾 {}: edit of '{}' is not persisted", entity, id);
                notice.set(Some(
                    "Les modifications ne sont pas enregistrées : aucun service n'est connecté."
                        .to_string(),
                ));
            };
            view! {
                {move || notice.get().map(|text| view! {
                    <div class="alert alert--info">{text}</div>
                })}
                <div class="form">{inputs}</div>
                {extras}
                <div class="detail__actions">
                    <Button appearance=ButtonAppearance::Primary on_click=save>
                        {icon(Icon::Save)}
                        "Enregistrer"
                    </Button>
                    <Button on_click=move |_| on_close.run(())>"Annuler"</Button>
                </div>
            }
            .into_any()
        }
    };

    view! {
        <PageFrame page_id=frame_id category=PAGE_CAT_DETAIL>
            <div class="header">
                <div class="header__content">
                    <h1 class="header__title">{title}</h1>
                    <StatusBadge status=status />
                </div>
            </div>
            {body}
        </PageFrame>
    }
    .into_any()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_intent_for_mode() {
        let view = intent_for("a004_invoice", "3", TabMode::View, "Facture #2024-003");
        assert_eq!(
            view.map(|i| i.tab_key),
            Some("a004_invoice_detail_3".to_string())
        );
        let edit = intent_for("a004_invoice", "3", TabMode::Edit, "Facture #2024-003");
        assert_eq!(
            edit.map(|i| i.title),
            Some("Modifier : Facture #2024-003".to_string())
        );
    }
}

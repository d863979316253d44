//! Универсальная страница-список: поиск, фильтр по категориям, раскрытие строки
//! и кнопки действий. Состояние целиком живёт в `RecordList<R>`, компонент
//! только рисует его и передаёт действия навигации.

use contracts::shared::record_list::{
    ActionOutcome, ActionRequest, FilterCategory, ListRecord, NavigationIntent, RecordAction,
    RecordList,
};
use leptos::children::ToChildren;
use leptos::logging::log;
use leptos::prelude::*;
use thaw::*;

use crate::layout::global_context::AppGlobalContext;
use crate::shared::components::confirm_dialog::ConfirmDialog;
use crate::shared::components::filter_panel::{FilterPanel, FilterTag};
use crate::shared::components::ui::badge::{Badge, StatusBadge};
use crate::shared::icons::{icon, Icon};
use crate::shared::list_utils::{highlight_matches, SearchInput};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::{page_id, PAGE_CAT_LIST};

/// Колонка таблицы: заголовок и функция, достающая текст ячейки из записи
pub struct Column<R> {
    pub header: &'static str,
    pub value: fn(&R) -> String,
    /// Подсвечивать совпадения с поиском
    pub highlight: bool,
    /// Выравнивание по правому краю
    pub numeric: bool,
}

impl<R> Clone for Column<R> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<R> Copy for Column<R> {}

impl<R> Column<R> {
    pub fn text(header: &'static str, value: fn(&R) -> String) -> Self {
        Self {
            header,
            value,
            highlight: false,
            numeric: false,
        }
    }

    /// Колонка, по которой идёт поиск: совпадения подсвечиваются
    pub fn searchable(header: &'static str, value: fn(&R) -> String) -> Self {
        Self {
            highlight: true,
            ..Self::text(header, value)
        }
    }

    pub fn numeric(header: &'static str, value: fn(&R) -> String) -> Self {
        Self {
            numeric: true,
            ..Self::text(header, value)
        }
    }
}

#[component]
pub fn RecordTable<R>(
    /// Префикс сущности, например `a004_invoice`
    entity: &'static str,
    title: &'static str,
    records: Vec<R>,
    columns: Vec<Column<R>>,
    /// Действия, доступные для строки
    actions: fn(&R) -> Vec<RecordAction>,
    #[prop(optional)] search_placeholder: &'static str,
    /// Кнопка создания: (ключ таба, подпись)
    #[prop(optional)]
    create_action: Option<(&'static str, &'static str)>,
) -> impl IntoView
where
    R: ListRecord + Clone + Send + Sync + 'static,
    R::Category: Send + Sync,
    R::Status: Send + Sync + 'static,
{
    let tabs_store = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let frame_id = page_id(entity, PAGE_CAT_LIST);

    let list = match RecordList::try_new(records) {
        Ok(list) => RwSignal::new(list),
        Err(err) => {
            log::error!("{}: record collection rejected: {}", entity, err);
            return view! {
                <PageFrame page_id=frame_id category=PAGE_CAT_LIST>
                    <div class="alert alert--error">
                        {icon(Icon::AlertTriangle)}
                        {format!("Impossible d'afficher la liste : {}", err)}
                    </div>
                </PageFrame>
            }
            .into_any();
        }
    };

    let total = list.with_untracked(|l| l.len());
    let filters_expanded = RwSignal::new(true);
    let notice = RwSignal::new(None::<String>);
    let confirm_open = RwSignal::new(false);

    let search_value = Signal::derive(move || list.with(|l| l.filter().search.clone()));
    let active_count = Signal::derive(move || list.with(|l| l.active_filters_count()));
    let summary = Signal::derive(move || {
        list.with(|l| format!("{} / {} enregistrements", l.visible_count(), l.len()))
    });

    // Навигация для просмотра/редактирования, остальное пока без обработчика
    let dispatch = move |request: ActionRequest| {
        let record_title = list.with_untracked(|l| {
            l.find(&request.id)
                .map(|r| r.title())
                .unwrap_or_else(|| request.id.clone())
        });
        match NavigationIntent::for_action(entity, &request, &record_title) {
            Some(intent) => tabs_store.navigate(&intent),
            None => {
                log!(
                    "🛠️ {}: action '{}' on '{}' has no handler yet",
                    entity,
                    request.action.code(),
                    request.id
                );
                notice.set(Some(format!(
                    "{} : « {} » n'est pas encore disponible.",
                    request.action.label(),
                    record_title
                )));
            }
        }
    };

    let on_action = Callback::new(move |(action, id): (RecordAction, String)| {
        match list.try_update(|l| l.request_action(action, &id)) {
            Some(ActionOutcome::Dispatch(request)) => dispatch(request),
            Some(ActionOutcome::NeedsConfirmation(_)) => confirm_open.set(true),
            Some(ActionOutcome::Ignored) | None => {}
        }
    });

    // Диалог закрыт без подтверждения: снимаем ожидающее действие
    Effect::new(move |_| {
        if !confirm_open.get() && list.with_untracked(|l| l.pending_action().is_some()) {
            list.update(|l| l.cancel_pending());
        }
    });

    let on_confirm = Callback::new(move |_| {
        let request = list.try_update(|l| l.confirm_pending()).flatten();
        confirm_open.set(false);
        if let Some(request) = request {
            dispatch(request);
        }
    });

    let confirm_title = Signal::derive(move || {
        list.with(|l| {
            l.pending_action()
                .map(|r| format!("{} ?", r.action.label()))
                .unwrap_or_default()
        })
    });
    let confirm_message = Signal::derive(move || {
        list.with(|l| {
            l.pending_action()
                .map(|r| {
                    let record_title = l.find(&r.id).map(|rec| rec.title()).unwrap_or_default();
                    format!("« {} » : cette opération ne peut pas être annulée.", record_title)
                })
                .unwrap_or_default()
        })
    });
    let confirm_label = Signal::derive(move || {
        list.with(|l| {
            l.pending_action()
                .map(|r| r.action.label().to_string())
                .unwrap_or_default()
        })
    });

    let category_chips = move || {
        list.with(|l| {
            l.category_counts()
                .into_iter()
                .map(|(category, count)| {
                    let code = category.code();
                    let selected = l.filter().is_category_selected(code);
                    view! {
                        <button
                            class="filter-chip"
                            class:filter-chip--active=selected
                            on:click=move |_| list.update(|l| l.toggle_category(code))
                        >
                            {category.label()}
                            <span class="filter-chip__count">{count}</span>
                        </button>
                    }
                })
                .collect_view()
        })
    };

    let filter_tags = ChildrenFn::to_children(move || {
        move || {
            list.with(|l| {
                let mut tags = Vec::new();
                if let Some(label) = search_tag_label(&l.filter().search) {
                    tags.push(
                        view! {
                            <FilterTag
                                label=label
                                on_remove=Callback::new(move |_| {
                                    list.update(|l| l.set_search_query(""))
                                })
                            />
                        }
                        .into_any(),
                    );
                }
                for code in l.filter().selected_categories.iter().cloned() {
                    let label = R::Category::from_code(&code)
                        .map(|c| c.label().to_string())
                        .unwrap_or_else(|| code.clone());
                    tags.push(
                        view! {
                            <FilterTag
                                label=label
                                on_remove=Callback::new(move |_| {
                                    list.update(|l| l.toggle_category(&code))
                                })
                            />
                        }
                        .into_any(),
                    );
                }
                if !tags.is_empty() {
                    tags.push(
                        view! {
                            <button
                                class="filter-panel__clear"
                                on:click=move |_| list.update(|l| l.clear_filters())
                            >
                                "Tout effacer"
                            </button>
                        }
                        .into_any(),
                    );
                }
                tags
            })
        }
    });

    // развернуть + колонки + статус + действия
    let col_span = (columns.len() + 3).to_string();
    let header_cells = columns
        .iter()
        .map(|col| {
            let class = if col.numeric {
                "table__header-cell table__header-cell--numeric"
            } else {
                "table__header-cell"
            };
            view! { <th class=class>{col.header}</th> }
        })
        .collect_view();

    let rows = move || {
        list.with(|l| {
            let visible = l.visible_records();
            if visible.is_empty() {
                return view! {
                    <tr class="table__row table__row--empty">
                        <td class="table__cell" colspan=col_span.clone()>
                            "Aucun enregistrement ne correspond aux filtres"
                        </td>
                    </tr>
                }
                .into_any();
            }
            let query = l.filter().search.clone();
            visible
                .into_iter()
                .map(|record| {
                    render_row(
                        record,
                        &columns,
                        actions,
                        &query,
                        l.is_expanded(record.id()),
                        &col_span,
                        list,
                        on_action,
                    )
                })
                .collect_view()
                .into_any()
        })
    };

    let create_button = create_action.map(|(key, label)| {
        view! {
            <Button
                appearance=ButtonAppearance::Primary
                on_click=move |_| tabs_store.open_tab(key, label)
            >
                {icon(Icon::Plus)}
                {label}
            </Button>
        }
    });

    view! {
        <PageFrame page_id=frame_id category=PAGE_CAT_LIST>
            <div class="header">
                <div class="header__content">
                    <h1 class="header__title">{title}</h1>
                    <Badge>{total}</Badge>
                </div>
                <div class="header__actions">{create_button}</div>
            </div>

            {move || notice.get().map(|text| view! {
                <div class="alert alert--info">
                    <span>{text}</span>
                    <button class="alert__close" on:click=move |_| notice.set(None)>
                        {icon(Icon::Close)}
                    </button>
                </div>
            })}

            <FilterPanel
                is_expanded=filters_expanded
                active_filters_count=active_count
                summary=summary
                filter_tags=filter_tags
            >
                <div class="filter-panel__row">
                    <SearchInput
                        value=search_value
                        on_change=Callback::new(move |text: String| {
                            list.update(|l| l.set_search_query(text))
                        })
                        debounce_ms=tabs_store.search_debounce_ms()
                        placeholder=search_placeholder
                    />
                    <div class="filter-panel__chips">{category_chips}</div>
                </div>
            </FilterPanel>

            <div class="table">
                <table class="table__data table--striped">
                    <thead class="table__head">
                        <tr>
                            <th class="table__header-cell table__header-cell--expand"></th>
                            {header_cells}
                            <th class="table__header-cell">"Statut"</th>
                            <th class="table__header-cell table__header-cell--actions">"Actions"</th>
                        </tr>
                    </thead>
                    <tbody>{rows}</tbody>
                </table>
            </div>

            <ConfirmDialog
                open=confirm_open
                title=confirm_title
                message=confirm_message
                confirm_label=confirm_label
                on_confirm=on_confirm
            />
        </PageFrame>
    }
    .into_any()
}

#[allow(clippy::too_many_arguments)]
/// Подпись тега поиска: запрос как его ввёл пользователь.
fn search_tag_label(search: &str) -> Option<String> {
    (!search.is_empty()).then(|| format!("Recherche : « {} »", search))
}

fn render_row<R>(
    record: &R,
    columns: &[Column<R>],
    actions: fn(&R) -> Vec<RecordAction>,
    query: &str,
    expanded: bool,
    col_span: &str,
    list: RwSignal<RecordList<R>>,
    on_action: Callback<(RecordAction, String)>,
) -> AnyView
where
    R: ListRecord + Send + Sync + 'static,
    R::Status: Send + Sync + 'static,
{
    let id = record.id().to_string();

    let cells = columns
        .iter()
        .map(|col| {
            let text = (col.value)(record);
            let content = if col.highlight {
                highlight_matches(&text, query)
            } else {
                view! { <span>{text}</span> }.into_any()
            };
            let class = if col.numeric {
                "table__cell table__cell--numeric"
            } else {
                "table__cell"
            };
            view! { <td class=class>{content}</td> }
        })
        .collect_view();

    let buttons = actions(record)
        .into_iter()
        .map(|action| {
            let id = id.clone();
            view! {
                <button
                    class="button button--icon"
                    class:button--danger=action.is_destructive()
                    title=action.label()
                    on:click=move |ev| {
                        ev.stop_propagation();
                        on_action.run((action, id.clone()));
                    }
                >
                    {icon(Icon::for_action(action))}
                </button>
            }
        })
        .collect_view();

    let detail = expanded.then(|| {
        let fields = record
            .detail_fields()
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
        view! {
            <tr class="table__detail-row">
                <td colspan=col_span.to_string()>
                    <dl class="record-detail__grid">{fields}</dl>
                </td>
            </tr>
        }
    });

    let chevron = if expanded {
        Icon::ChevronDown
    } else {
        Icon::ChevronRight
    };

    view! {
        <tr
            class="table__row"
            class:table__row--expanded=expanded
            on:click=move |_| list.update(|l| l.toggle_expand(&id))
        >
            <td class="table__cell table__cell--expand">{icon(chevron)}</td>
            {cells}
            <td class="table__cell">
                <StatusBadge status=record.status() />
            </td>
            <td class="table__cell table__cell--actions">{buttons}</td>
        </tr>
        {detail}
    }
    .into_any()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_tag_label_shows_query_as_typed() {
        assert_eq!(search_tag_label(""), None);
        assert_eq!(
            search_tag_label("Garage "),
            Some("Recherche : « Garage  »".to_string())
        );
        assert_eq!(search_tag_label(" "), Some("Recherche : «   »".to_string()));
    }
}

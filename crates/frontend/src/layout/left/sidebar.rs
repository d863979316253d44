//! Sidebar component with collapsible menu groups

use crate::layout::global_context::AppGlobalContext;
use crate::layout::tabs::tab_label_for_key;
use crate::shared::icons::{icon, Icon};
use leptos::prelude::*;

#[derive(Clone, Debug, PartialEq)]
struct MenuGroup {
    id: &'static str,
    label: &'static str,
    icon: Icon,
    items: Vec<(&'static str, &'static str, Icon)>, // (tab key, label, icon)
}

fn item(key: &'static str, icon: Icon) -> (&'static str, &'static str, Icon) {
    (key, tab_label_for_key(key), icon)
}

fn get_menu_groups() -> Vec<MenuGroup> {
    vec![
        MenuGroup {
            id: "dashboards",
            label: "Tableaux de bord",
            icon: Icon::BarChart,
            items: vec![item("d400_overview", Icon::BarChart)],
        },
        MenuGroup {
            id: "crm",
            label: "CRM et juridique",
            icon: Icon::Users,
            items: vec![
                item("a001_contact", Icon::Users),
                item("a001_contact_new", Icon::Plus),
                item("a002_contract", Icon::FileText),
            ],
        },
        MenuGroup {
            id: "finance",
            label: "Finance et comptabilité",
            icon: Icon::Wallet,
            items: vec![
                item("a003_cost_center", Icon::PieChart),
                item("a004_invoice", Icon::Receipt),
            ],
        },
        MenuGroup {
            id: "fiscal",
            label: "Fiscalité et conformité",
            icon: Icon::Landmark,
            items: vec![
                item("a005_tax_declaration", Icon::Landmark),
                item("a005_tax_declaration_new", Icon::Plus),
                item("a006_compliance_item", Icon::ShieldCheck),
            ],
        },
        MenuGroup {
            id: "hr",
            label: "Ressources humaines",
            icon: Icon::Briefcase,
            items: vec![
                item("a007_payroll_entry", Icon::Wallet),
                item("a008_work_schedule", Icon::Calendar),
            ],
        },
        MenuGroup {
            id: "inventory",
            label: "Stocks",
            icon: Icon::Package,
            items: vec![item("a009_stock_item", Icon::Package)],
        },
    ]
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");

    // Изначально раскрыт только блок с дашбордом
    let expanded_groups = RwSignal::new(vec!["dashboards".to_string()]);

    let groups = get_menu_groups();

    view! {
        <div class="app-sidebar__content">
            {groups.into_iter().map(|group| {
                let group_id = group.id.to_string();
                let group_id_for_exp = group_id.clone();
                let group_id_for_click = group_id.clone();

                view! {
                    <div>
                        // Parent item
                        <div
                            class="app-sidebar__item"
                            style:padding-left="12px"
                            on:click=move |_| {
                                let gid = group_id_for_click.clone();
                                expanded_groups.update(move |items| {
                                    if let Some(pos) = items.iter().position(|x| x == &gid) {
                                        items.remove(pos);
                                    } else {
                                        items.push(gid);
                                    }
                                });
                            }
                        >
                            <div class="app-sidebar__item-content">
                                {icon(group.icon)}
                                <span>{group.label}</span>
                            </div>
                            <div
                                class="app-sidebar__chevron"
                                class:app-sidebar__chevron--expanded=move || expanded_groups.get().contains(&group_id_for_exp)
                            >
                                {icon(Icon::ChevronRight)}
                            </div>
                        </div>

                        // Children
                        {
                            let gid_show = group_id.clone();
                            let items_stored = StoredValue::new(group.items.clone());
                            view! {
                                <Show when=move || expanded_groups.get().contains(&gid_show)>
                                    <div class="app-sidebar__children">
                                        {items_stored.get_value().into_iter().map(|(id, label, item_icon)| {
                                            view! {
                                                <div
                                                    class="app-sidebar__item"
                                                    class:app-sidebar__item--active=move || {
                                                        ctx.active.get().as_deref() == Some(id)
                                                    }
                                                    style:padding-left="10px"
                                                    on:click=move |_| {
                                                        ctx.open_tab(id, label);
                                                    }
                                                >
                                                    <div class="app-sidebar__item-content">
                                                        {icon(item_icon)}
                                                        <span>{label}</span>
                                                    </div>
                                                </div>
                                            }
                                        }).collect_view()}
                                    </div>
                                </Show>
                            }
                        }
                    </div>
                }
            }).collect_view()}
        </div>
    }
}

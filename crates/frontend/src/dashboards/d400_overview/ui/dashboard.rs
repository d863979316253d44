use contracts::domain::{a004_invoice, a006_compliance_item, a009_stock_item};
use contracts::shared::format::{format_money, format_number_int};
use contracts::shared::status::{BadgeTone, StatusBadge as _};
use leptos::prelude::*;

use crate::dashboards::d400_overview::kpi::{InvoiceKpi, OverviewKpis};
use crate::domain;
use crate::layout::global_context::AppGlobalContext;
use crate::layout::tabs::tab_label_for_key;
use crate::shared::components::stat_card::StatCard;
use crate::shared::icons::{icon, Icon};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::{page_id, PAGE_CAT_DASHBOARD};

const DASHBOARD_KEY: &str = "d400_overview";

fn open_list(ctx: AppGlobalContext, key: &'static str) -> Callback<()> {
    Callback::new(move |_| ctx.open_tab(key, tab_label_for_key(key)))
}

fn invoice_card(kpi: InvoiceKpi, on_click: Callback<()>) -> impl IntoView {
    let subtitle = format!("{} facture(s)", kpi.count);
    view! {
        <StatCard
            label=format!("Factures : {}", kpi.status.label())
            icon_name=Icon::Receipt
            value=format_money(kpi.total)
            tone=kpi.status.tone()
            subtitle=Some(subtitle)
            on_click=on_click
        />
    }
}

/// Обзор: ключевые показатели по разделам, клик открывает список
#[component]
pub fn OverviewDashboard() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");

    let kpis = match OverviewKpis::compute(
        domain::a004_invoice::sample::records(),
        &domain::a006_compliance_item::sample::records(),
        &domain::a007_payroll_entry::sample::records(),
        &domain::a009_stock_item::sample::records(),
    ) {
        Ok(kpis) => kpis,
        Err(err) => {
            log::error!("overview: sample data rejected: {}", err);
            return view! {
                <PageFrame page_id=page_id(DASHBOARD_KEY, PAGE_CAT_DASHBOARD) category=PAGE_CAT_DASHBOARD>
                    <div class="alert alert--error">
                        {icon(Icon::AlertTriangle)}
                        {format!("Indicateurs indisponibles : {}", err)}
                    </div>
                </PageFrame>
            }
            .into_any();
        }
    };

    let compliance_tone = if kpis.open_compliance == 0 {
        BadgeTone::Success
    } else {
        BadgeTone::Warning
    };
    let stock_tone = match (kpis.out_of_stock, kpis.low_stock) {
        (0, 0) => BadgeTone::Success,
        (0, _) => BadgeTone::Warning,
        _ => BadgeTone::Error,
    };

    let open_invoices = open_list(ctx, a004_invoice::ENTITY);
    let invoice_cards = kpis
        .invoices
        .iter()
        .filter(|k| k.count > 0)
        .cloned()
        .map(|k| invoice_card(k, open_invoices))
        .collect_view();

    view! {
        <PageFrame page_id=page_id(DASHBOARD_KEY, PAGE_CAT_DASHBOARD) category=PAGE_CAT_DASHBOARD>
            <div class="header">
                <div class="header__content">
                    <h1 class="header__title">"Vue d'ensemble"</h1>
                </div>
            </div>

            <div class="dashboard__grid">
                <StatCard
                    label="Encours clients"
                    icon_name=Icon::Wallet
                    value=format_money(kpis.outstanding)
                    tone=BadgeTone::Primary
                    subtitle=Some("Factures envoyées et en retard".to_string())
                    on_click=open_invoices
                />
                <StatCard
                    label="Conformité"
                    icon_name=Icon::ShieldCheck
                    value=format!("{} / {}", kpis.open_compliance, kpis.compliance_total)
                    tone=compliance_tone
                    subtitle=Some("Obligations à traiter".to_string())
                    on_click=open_list(ctx, a006_compliance_item::ENTITY)
                />
                <StatCard
                    label="Masse salariale"
                    icon_name=Icon::Users
                    value=format_money(kpis.payroll_employer_cost)
                    tone=BadgeTone::Neutral
                    subtitle=Some("Coût employeur cumulé".to_string())
                    on_click=open_list(ctx, contracts::domain::a007_payroll_entry::ENTITY)
                />
                <StatCard
                    label="Stocks à réapprovisionner"
                    icon_name=Icon::Package
                    value=format_number_int((kpis.low_stock + kpis.out_of_stock) as f64)
                    tone=stock_tone
                    subtitle=Some(format!("dont {} en rupture", kpis.out_of_stock))
                    on_click=open_list(ctx, a009_stock_item::ENTITY)
                />
            </div>

            <h2 class="dashboard__section-title">"Factures par statut"</h2>
            <div class="dashboard__grid">{invoice_cards}</div>
        </PageFrame>
    }
    .into_any()
}

//! Tab content registry - маппинг tab.key → View
//!
//! Статические ключи (списки, формы, дашборды) разбираются явным `match`,
//! ключи записей `{entity}_detail_{id}` / `{entity}_edit_{id}` через
//! `parse_record_tab_key`.

use crate::dashboards::OverviewDashboard;
use crate::domain::a001_contact::ui::{ContactCreateForm, ContactDetail, ContactList};
use crate::domain::a002_contract::ui::{ContractDetail, ContractList};
use crate::domain::a003_cost_center::ui::{CostCenterDetail, CostCenterList};
use crate::domain::a004_invoice::ui::{InvoiceDetail, InvoiceList};
use crate::domain::a005_tax_declaration::ui::{
    DeclarationWizardPage, TaxDeclarationDetail, TaxDeclarationList,
};
use crate::domain::a006_compliance_item::ui::{ComplianceItemDetail, ComplianceItemList};
use crate::domain::a007_payroll_entry::ui::{PayrollEntryDetail, PayrollEntryList};
use crate::domain::a008_work_schedule::ui::{WorkScheduleDetail, WorkScheduleList};
use crate::domain::a009_stock_item::ui::{StockItemDetail, StockItemList};
use crate::layout::global_context::AppGlobalContext;
use contracts::domain::{
    a001_contact, a002_contract, a003_cost_center, a004_invoice, a005_tax_declaration,
    a006_compliance_item, a007_payroll_entry, a008_work_schedule, a009_stock_item,
};
use contracts::shared::record_list::parse_record_tab_key;
use leptos::logging::log;
use leptos::prelude::*;

/// Рендерит контент таба по его ключу.
///
/// `tabs_store` нужен detail-страницам, чтобы закрыть собственный таб.
pub fn render_tab_content(key: &str, tabs_store: AppGlobalContext) -> AnyView {
    match key {
        // ═══════════════════════════════════════════════════════════════════
        // Dashboards
        // ═══════════════════════════════════════════════════════════════════
        "d400_overview" => {
            log!("✅ Creating OverviewDashboard");
            view! { <OverviewDashboard /> }.into_any()
        }

        // ═══════════════════════════════════════════════════════════════════
        // Списки
        // ═══════════════════════════════════════════════════════════════════
        a001_contact::ENTITY => view! { <ContactList /> }.into_any(),
        a002_contract::ENTITY => view! { <ContractList /> }.into_any(),
        a003_cost_center::ENTITY => view! { <CostCenterList /> }.into_any(),
        a004_invoice::ENTITY => view! { <InvoiceList /> }.into_any(),
        a005_tax_declaration::ENTITY => view! { <TaxDeclarationList /> }.into_any(),
        a006_compliance_item::ENTITY => view! { <ComplianceItemList /> }.into_any(),
        a007_payroll_entry::ENTITY => view! { <PayrollEntryList /> }.into_any(),
        a008_work_schedule::ENTITY => view! { <WorkScheduleList /> }.into_any(),
        a009_stock_item::ENTITY => view! { <StockItemList /> }.into_any(),

        // ═══════════════════════════════════════════════════════════════════
        // Формы и мастера
        // ═══════════════════════════════════════════════════════════════════
        "a001_contact_new" => {
            let key_for_close = key.to_string();
            view! {
                <ContactCreateForm
                    on_close=Callback::new(move |_| tabs_store.close_tab(&key_for_close))
                />
            }
            .into_any()
        }
        "a005_tax_declaration_new" => {
            let key_for_close = key.to_string();
            view! {
                <DeclarationWizardPage
                    on_close=Callback::new(move |_| tabs_store.close_tab(&key_for_close))
                />
            }
            .into_any()
        }

        // ═══════════════════════════════════════════════════════════════════
        // Записи: просмотр и редактирование
        // ═══════════════════════════════════════════════════════════════════
        k => render_record_tab(k, tabs_store),
    }
}

fn render_record_tab(key: &str, tabs_store: AppGlobalContext) -> AnyView {
    let Some(record_key) = parse_record_tab_key(key) else {
        log!("⚠️ Unknown tab type: {}", key);
        return view! { <div class="placeholder">{"Page inconnue"}</div> }.into_any();
    };

    let id = record_key.id.to_string();
    let mode = record_key.mode;
    let key_for_close = key.to_string();
    let on_close: Callback<()> = Callback::new(move |_| tabs_store.close_tab(&key_for_close));
    log!("✅ Creating {} page for {} ({:?})", record_key.entity, id, mode);

    match record_key.entity {
        a001_contact::ENTITY => {
            view! { <ContactDetail id=id mode=mode on_close=on_close /> }.into_any()
        }
        a002_contract::ENTITY => {
            view! { <ContractDetail id=id mode=mode on_close=on_close /> }.into_any()
        }
        a003_cost_center::ENTITY => {
            view! { <CostCenterDetail id=id mode=mode on_close=on_close /> }.into_any()
        }
        a004_invoice::ENTITY => {
            view! { <InvoiceDetail id=id mode=mode on_close=on_close /> }.into_any()
        }
        a005_tax_declaration::ENTITY => {
            view! { <TaxDeclarationDetail id=id mode=mode on_close=on_close /> }.into_any()
        }
        a006_compliance_item::ENTITY => {
            view! { <ComplianceItemDetail id=id mode=mode on_close=on_close /> }.into_any()
        }
        a007_payroll_entry::ENTITY => {
            view! { <PayrollEntryDetail id=id mode=mode on_close=on_close /> }.into_any()
        }
        a008_work_schedule::ENTITY => {
            view! { <WorkScheduleDetail id=id mode=mode on_close=on_close /> }.into_any()
        }
        a009_stock_item::ENTITY => {
            view! { <StockItemDetail id=id mode=mode on_close=on_close /> }.into_any()
        }
        other => {
            log!("⚠️ Unknown record entity: {}", other);
            view! { <div class="placeholder">{"Page inconnue"}</div> }.into_any()
        }
    }
}

use contracts::domain::a003_cost_center::ENTITY;
use contracts::shared::record_list::TabMode;
use leptos::prelude::*;

use crate::domain::a003_cost_center::sample;
use crate::shared::components::record_detail::RecordDetail;

/// Ширина полосы расхода бюджета; перерасход обрезается до 100 %
fn gauge_width(percent: f64) -> f64 {
    percent.clamp(0.0, 100.0)
}

#[component]
pub fn CostCenterDetail(
    #[prop(into)] id: String,
    mode: TabMode,
    on_close: Callback<()>,
) -> impl IntoView {
    let record = sample::records().into_iter().find(|c| c.id == id);
    let consumption = record.as_ref().map(|c| c.consumption_percent());

    view! {
        <RecordDetail entity=ENTITY id=id record=record mode=mode on_close=on_close>
            {consumption.map(|percent| {
                let over_budget = percent > 100.0;
                view! {
                    <div class="budget-gauge" class:budget-gauge--over=over_budget>
                        <div class="budget-gauge__label">
                            {format!("Budget consommé : {:.0} %", percent)}
                        </div>
                        <div class="budget-gauge__track">
                            <div
                                class="budget-gauge__bar"
                                style=format!("width: {:.1}%", gauge_width(percent))
                            ></div>
                        </div>
                    </div>
                }
            })}
        </RecordDetail>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gauge_width_is_clamped() {
        assert_eq!(gauge_width(73.0), 73.0);
        assert_eq!(gauge_width(108.1), 100.0);
        assert_eq!(gauge_width(-5.0), 0.0);
    }
}

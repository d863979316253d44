use contracts::domain::a008_work_schedule::{ScheduleStatus, WorkSchedule, ENTITY};
use contracts::shared::format::format_date;
use contracts::shared::record_list::{FilterCategory, RecordAction};
use leptos::prelude::*;

use crate::domain::a008_work_schedule::sample;
use crate::shared::components::record_table::{Column, RecordTable};

fn row_actions(schedule: &WorkSchedule) -> Vec<RecordAction> {
    match schedule.status {
        ScheduleStatus::Planned => vec![
            RecordAction::View,
            RecordAction::Edit,
            RecordAction::Delete,
        ],
        ScheduleStatus::Published => vec![
            RecordAction::View,
            RecordAction::Edit,
            RecordAction::Archive,
        ],
        ScheduleStatus::Archived => vec![RecordAction::View],
    }
}

#[component]
pub fn WorkScheduleList() -> impl IntoView {
    let columns = vec![
        Column::searchable("Salarié", |s: &WorkSchedule| s.employee.clone()),
        Column::searchable("Équipe", |s: &WorkSchedule| s.team.clone()),
        Column::searchable("Date", |s: &WorkSchedule| format_date(s.date)),
        Column::text("Horaires", |s: &WorkSchedule| {
            format!("{} - {}", s.start_time, s.end_time)
        }),
        Column::text("Poste", |s: &WorkSchedule| s.shift.label().to_string()),
    ];

    view! {
        <RecordTable
            entity=ENTITY
            title="Plannings"
            records=sample::records()
            columns=columns
            actions=row_actions
            search_placeholder="Salarié, équipe, date..."
        />
    }
}

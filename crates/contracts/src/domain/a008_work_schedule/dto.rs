use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;

use crate::shared::format::format_date;
use crate::shared::record_list::{FilterCategory, ListRecord};
use crate::shared::status::{BadgeTone, StatusBadge};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShiftKind {
    Day,
    Night,
    Weekend,
}

impl FilterCategory for ShiftKind {
    const ALL: &'static [Self] = &[ShiftKind::Day, ShiftKind::Night, ShiftKind::Weekend];

    fn code(&self) -> &'static str {
        match self {
            ShiftKind::Day => "day",
            ShiftKind::Night => "night",
            ShiftKind::Weekend => "weekend",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            ShiftKind::Day => "Jour",
            ShiftKind::Night => "Nuit",
            ShiftKind::Weekend => "Week-end",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScheduleStatus {
    Planned,
    Published,
    Archived,
}

impl StatusBadge for ScheduleStatus {
    fn label(&self) -> &'static str {
        match self {
            ScheduleStatus::Planned => "Planifié",
            ScheduleStatus::Published => "Publié",
            ScheduleStatus::Archived => "Archivé",
        }
    }

    fn tone(&self) -> BadgeTone {
        match self {
            ScheduleStatus::Planned => BadgeTone::Warning,
            ScheduleStatus::Published => BadgeTone::Success,
            ScheduleStatus::Archived => BadgeTone::Neutral,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkSchedule {
    pub id: String,
    pub employee: String,
    pub team: String,
    pub date: NaiveDate,
    /// Часы в формате HH:MM
    pub start_time: String,
    pub end_time: String,
    pub shift: ShiftKind,
    pub status: ScheduleStatus,
}

impl ListRecord for WorkSchedule {
    type Category = ShiftKind;
    type Status = ScheduleStatus;

    fn id(&self) -> &str {
        &self.id
    }

    fn category(&self) -> ShiftKind {
        self.shift
    }

    fn status(&self) -> ScheduleStatus {
        self.status
    }

    fn search_fields(&self) -> Vec<Cow<'_, str>> {
        vec![
            Cow::Borrowed(self.employee.as_str()),
            Cow::Borrowed(self.team.as_str()),
            Cow::Owned(format_date(self.date)),
        ]
    }

    fn title(&self) -> String {
        format!("{} {}", self.employee, format_date(self.date))
    }

    fn detail_fields(&self) -> Vec<(&'static str, String)> {
        vec![
            ("Salarié", self.employee.clone()),
            ("Équipe", self.team.clone()),
            ("Date", format_date(self.date)),
            ("Horaires", format!("{} - {}", self.start_time, self.end_time)),
            ("Poste", self.shift.label().to_string()),
            ("Statut", self.status.label().to_string()),
        ]
    }
}

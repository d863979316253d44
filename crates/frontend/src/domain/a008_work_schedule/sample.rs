use chrono::NaiveDate;
use contracts::domain::a008_work_schedule::{ScheduleStatus, ShiftKind, WorkSchedule};

use crate::domain::ymd;

fn shift(
    id: &str,
    employee: &str,
    team: &str,
    date: NaiveDate,
    hours: (&str, &str),
    shift: ShiftKind,
    status: ScheduleStatus,
) -> WorkSchedule {
    WorkSchedule {
        id: id.to_string(),
        employee: employee.to_string(),
        team: team.to_string(),
        date,
        start_time: hours.0.to_string(),
        end_time: hours.1.to_string(),
        shift,
        status,
    }
}

#[rustfmt::skip]
pub fn records() -> Vec<WorkSchedule> {
    use ScheduleStatus::*;
    use ShiftKind::*;
    vec![
        shift("1", "Thomas Leroy", "Fournil", ymd(2024, 6, 3), ("04:00", "12:00"), Night, Published),
        shift("2", "Luc Martin", "Fournil", ymd(2024, 6, 3), ("06:00", "14:00"), Day, Published),
        shift("3", "Julie Morel", "Boutique Bellecour", ymd(2024, 6, 3), ("07:00", "15:00"), Day, Published),
        shift("4", "Julie Morel", "Boutique Bellecour", ymd(2024, 6, 8), ("08:00", "13:00"), Weekend, Planned),
        shift("5", "Thomas Leroy", "Fournil", ymd(2024, 6, 9), ("03:00", "10:00"), Weekend, Planned),
        shift("6", "Nadia Benali", "Administration", ymd(2024, 5, 27), ("09:00", "17:00"), Day, Archived),
    ]
}

//! Month-keyed garden calendar tasks
//!
//! The canonical table follows a Northern-Hemisphere temperate cadence with
//! exactly three tasks per month.

use chrono::{Datelike, Month, NaiveDate};

use crate::catalog::PlantCatalog;
use crate::models::{CalendarTask, TaskPriority, TaskType};
use crate::zones::season_for_month;

use TaskPriority::{High, Low, Medium};
use TaskType::{Feeding, Harvesting, Maintenance, Monitoring, Planning, Planting, Preparation};

struct TaskTemplate {
    title: &'static str,
    task_type: TaskType,
    priority: TaskPriority,
}

const fn task(title: &'static str, task_type: TaskType, priority: TaskPriority) -> TaskTemplate {
    TaskTemplate {
        title,
        task_type,
        priority,
    }
}

const MONTHLY_TASKS: [[TaskTemplate; 3]; 12] = [
    // January
    [
        task("Order seeds and plan garden layout", Planning, High),
        task("Check stored bulbs and tubers for rot", Monitoring, Medium),
        task("Clean and sharpen garden tools", Maintenance, Low),
    ],
    // February
    [
        task("Start indoor seeds", Planting, High),
        task("Prepare seed-starting mix", Preparation, Medium),
        task("Clean greenhouse", Maintenance, Medium),
    ],
    // March
    [
        task("Direct sow peas and spinach", Planting, High),
        task("Test and amend soil", Preparation, High),
        task("Prune fruit trees before bud break", Maintenance, Medium),
    ],
    // April
    [
        task("Harden off seedlings", Preparation, High),
        task("Plant cool-season crops", Planting, High),
        task("Apply compost to beds", Feeding, Medium),
    ],
    // May
    [
        task("Transplant tomatoes and peppers", Planting, High),
        task("Install stakes and trellises", Maintenance, Medium),
        task("Watch for aphids on new growth", Monitoring, Medium),
    ],
    // June
    [
        task("Mulch beds to retain moisture", Maintenance, High),
        task("Harvest early greens and peas", Harvesting, Medium),
        task("Side-dress heavy feeders", Feeding, Medium),
    ],
    // July
    [
        task("Water deeply during heat waves", Maintenance, High),
        task("Harvest summer vegetables", Harvesting, High),
        task("Scout for hornworms and beetles", Monitoring, Medium),
    ],
    // August
    [
        task("Sow fall crops", Planting, High),
        task("Harvest and preserve produce", Harvesting, High),
        task("Save seeds from open-pollinated plants", Harvesting, Low),
    ],
    // September
    [
        task("Plant garlic and spring bulbs", Planting, High),
        task("Harvest winter squash", Harvesting, Medium),
        task("Divide perennials", Maintenance, Medium),
    ],
    // October
    [
        task("Plant cover crops", Planting, Medium),
        task("Clean up spent plants", Maintenance, High),
        task("Protect tender plants from frost", Preparation, High),
    ],
    // November
    [
        task("Mulch perennials for winter", Maintenance, High),
        task("Store harvested root crops", Harvesting, Medium),
        task("Drain and store hoses", Maintenance, Low),
    ],
    // December
    [
        task("Review this year's garden journal", Planning, Medium),
        task("Water evergreens before the ground freezes", Maintenance, Medium),
        task("Browse seed catalogs", Planning, Low),
    ],
];

const MONTHS: [Month; 12] = [
    Month::January,
    Month::February,
    Month::March,
    Month::April,
    Month::May,
    Month::June,
    Month::July,
    Month::August,
    Month::September,
    Month::October,
    Month::November,
    Month::December,
];

/// Month for a zero-based index (0 = January)
pub fn month_from_index(month_index: u32) -> Option<Month> {
    MONTHS.get(month_index as usize).copied()
}

/// Zero-based index for a month
pub fn month_index(month: Month) -> u32 {
    month.number_from_month() - 1
}

/// The three canonical tasks for `month`
pub fn tasks_for_month(month: Month) -> Vec<CalendarTask> {
    MONTHLY_TASKS[month_index(month) as usize]
        .iter()
        .map(|template| CalendarTask {
            title: template.title.to_string(),
            task_type: template.task_type,
            priority: template.priority,
            description: None,
            date: None,
        })
        .collect()
}

/// Tasks for a zero-based month index; `None` when the index is past December
pub fn tasks_for_month_index(month_index: u32) -> Option<Vec<CalendarTask>> {
    month_from_index(month_index).map(tasks_for_month)
}

/// Canonical tasks for the month of `date`, dated the first of that month
pub fn tasks_for_date(date: NaiveDate) -> Vec<CalendarTask> {
    let first_of_month = date.with_day(1);
    tasks_for_month_index(date.month0())
        .unwrap_or_default()
        .into_iter()
        .map(|task| CalendarTask {
            date: first_of_month,
            ..task
        })
        .collect()
}

/// One planting task per catalog plant whose window includes the season of
/// `month`. Easy plants (difficulty 2 or less) get high priority.
pub fn planting_tasks(catalog: &PlantCatalog, month: Month) -> Vec<CalendarTask> {
    let season = season_for_month(month);
    catalog
        .by_season(season)
        .into_iter()
        .map(|plant| CalendarTask {
            title: format!("Plant {}", plant.name),
            task_type: TaskType::Planting,
            priority: if plant.difficulty <= 2 { High } else { Medium },
            description: plant.growing_tips.first().cloned(),
            date: None,
        })
        .collect()
}

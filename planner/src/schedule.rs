//! Fatigue-aware daily study scheduler.
//!
//! DESIGN
//! ======
//! A 0/1 knapsack over one session per subject, sized in minutes. Session
//! length grows with complexity and its value with priority. When a session is
//! added to a partial plan that already holds `k` sessions, its value is scaled
//! by `1 - FATIGUE_PENALTY * k`, so later sessions in a long day are worth
//! less.
//!
//! TRADE-OFFS
//! ==========
//! The fatigue term depends on the sub-solution being extended, which breaks
//! the optimal-substructure property of plain knapsack. The result is a good
//! plan rather than a provably optimal one. Only two DP rows are kept since
//! each row depends solely on the previous one.

#[cfg(test)]
#[path = "schedule_test.rs"]
mod schedule_test;

use serde::Serialize;

use crate::subject::Subject;

/// Value lost per session already in the plan.
pub const FATIGUE_PENALTY: f64 = 0.1;

/// Minutes every session takes before complexity is added.
pub const BASE_SESSION_MINUTES: u32 = 30;

/// Extra minutes per complexity step.
pub const MINUTES_PER_COMPLEXITY: u32 = 10;

/// Longest day the planner considers; larger limits are clamped to this.
pub const MAX_DAY_MINUTES: u32 = 24 * 60;

/// One planned study session.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Session {
    pub subject_id: i64,
    pub subject_name: String,
    pub duration_minutes: u32,
    /// Value before the fatigue penalty.
    pub base_value: f64,
}

impl Session {
    #[must_use]
    pub fn for_subject(subject: &Subject) -> Self {
        Self {
            subject_id: subject.id,
            subject_name: subject.name.clone(),
            duration_minutes: BASE_SESSION_MINUTES + u32::from(subject.complexity.0) * MINUTES_PER_COMPLEXITY,
            base_value: 6.0 - f64::from(subject.priority.0),
        }
    }
}

/// Sessions selected for one day.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct DailyPlan {
    /// Selected sessions, last subject first.
    pub sessions: Vec<Session>,
    pub total_minutes: u32,
    /// Sum of fatigue-adjusted session values.
    pub total_value: f64,
}

#[derive(Clone, Default)]
struct Cell {
    value: f64,
    picked: Vec<usize>,
}

/// Pick the sessions that fit in `time_limit_minutes`, clamped to
/// [`MAX_DAY_MINUTES`].
#[must_use]
pub fn plan_day(subjects: &[Subject], time_limit_minutes: u32) -> DailyPlan {
    let sessions = subjects.iter().map(Session::for_subject).collect::<Vec<_>>();
    let width = time_limit_minutes.min(MAX_DAY_MINUTES) as usize + 1;

    let mut previous = vec![Cell::default(); width];
    for (index, session) in sessions.iter().enumerate() {
        let duration = session.duration_minutes as usize;
        let mut current = Vec::with_capacity(width);
        for t in 0..width {
            let skip = &previous[t];
            if duration > t {
                current.push(skip.clone());
                continue;
            }
            let base = &previous[t - duration];
            #[allow(clippy::cast_precision_loss)]
            let fatigue = FATIGUE_PENALTY * base.picked.len() as f64;
            let take_value = session.base_value * (1.0 - fatigue) + base.value;
            if take_value > skip.value {
                let mut picked = base.picked.clone();
                picked.push(index);
                current.push(Cell { value: take_value, picked });
            } else {
                current.push(skip.clone());
            }
        }
        previous = current;
    }

    let best = previous.pop().unwrap_or_default();
    let selected = best
        .picked
        .iter()
        .rev()
        .filter_map(|&index| sessions.get(index).cloned())
        .collect::<Vec<_>>();
    let total_minutes = selected.iter().map(|s| s.duration_minutes).sum();

    DailyPlan { sessions: selected, total_minutes, total_value: best.value }
}

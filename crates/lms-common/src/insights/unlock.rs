use crate::api::insights::UnlockProgress;
use crate::ActivityCounts;

pub const REQUIRED_ENROLLMENTS: u32 = 5;
pub const REQUIRED_COMPLETIONS: u32 = 3;

/// Insights unlock once both counters reach their thresholds.
pub fn is_unlocked(counts: ActivityCounts) -> bool {
    counts.enrolled >= REQUIRED_ENROLLMENTS && counts.completed >= REQUIRED_COMPLETIONS
}

pub fn progress(counts: ActivityCounts) -> UnlockProgress {
    UnlockProgress {
        enrolled: counts.enrolled,
        completed: counts.completed,
        required_enrollments: REQUIRED_ENROLLMENTS,
        required_completions: REQUIRED_COMPLETIONS,
    }
}

fn courses(n: u32) -> &'static str {
    if n == 1 {
        "course"
    } else {
        "courses"
    }
}

/// Actionable hint telling a locked learner what is still missing.
pub fn locked_message(counts: ActivityCounts) -> String {
    let enroll = REQUIRED_ENROLLMENTS.saturating_sub(counts.enrolled);
    let complete = REQUIRED_COMPLETIONS.saturating_sub(counts.completed);

    match (enroll, complete) {
        (0, 0) => "Career insights are unlocked".to_string(),
        (e, 0) => format!(
            "Enroll in {e} more {} to unlock career insights",
            courses(e)
        ),
        (0, c) => format!(
            "Complete {c} more {} to unlock career insights",
            courses(c)
        ),
        (e, c) => format!(
            "Enroll in {e} more {} and complete {c} more {} to unlock career insights",
            courses(e),
            courses(c)
        ),
    }
}

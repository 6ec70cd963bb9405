//! Daily-budget adjustment policy
//!
//! Pure numeric rules for automated scale-up/cut recommendations. Multiple
//! adjustments for one campaign are applied sequentially, each off the prior
//! result; clamping happens once, after the last adjustment.

/// Minimum daily budget in currency units after any automated mutation
pub const MIN_DAILY_BUDGET: f64 = 5.0;

/// Percentage applied when an action omits its magnitude
pub const DEFAULT_CHANGE_PERCENT: i32 = 20;

/// Apply a single percentage change to a budget value
///
/// `factor = percent / 100`; increases add `current * factor`, cuts subtract it.
pub fn apply_percent_change(current: f64, percent: i32, increase: bool) -> f64 {
    let factor = f64::from(percent) / 100.0;
    if increase {
        current + current * factor
    } else {
        current - current * factor
    }
}

/// Clamp a computed daily budget to the policy floor and the campaign ceiling
///
/// The floor applies unconditionally; the ceiling only when the campaign has
/// a positive total budget.
pub fn clamp_daily_budget(value: f64, budget_total: f64) -> f64 {
    let mut clamped = value.max(MIN_DAILY_BUDGET);
    if budget_total > 0.0 {
        clamped = clamped.min(budget_total);
    }
    clamped
}

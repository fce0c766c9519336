/// Wall-clock collaborator.
///
/// The single point through which components read time. Both systems compare
/// whole-second timestamps, so the accessor yields epoch seconds directly;
/// injecting a controlled clock keeps the update logic deterministic.
pub trait ClockOracle {
    /// Seconds since the Unix epoch.
    fn now_epoch_seconds(&self) -> u64;
}

/// Balances within this many minor units of zero are treated as settled when
/// partitioning per viewer. Filters residue carried in from historical data;
/// it is not a tolerance for real outstanding debt.
pub const SETTLED_EPSILON: i64 = 1;

/// An expense without an owning group must name at least this many
/// participants in its split.
pub const MIN_UNGROUPED_PARTICIPANTS: usize = 2;

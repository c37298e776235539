// =============================================================================
// DONATION STATUS
// =============================================================================

/// Status written on submission, the donation is still unclaimed
pub const STATUS_AVAILABLE: &str = "Available";

/// Status written once a recipient has picked the donation up
pub const STATUS_COLLECTED: &str = "Collected";

/// Selector value that disables a category or status filter
pub const FILTER_ALL: &str = "All";

/// Status selector options, in display order
pub const STATUS_OPTIONS: [&str; 3] = [FILTER_ALL, STATUS_AVAILABLE, STATUS_COLLECTED];

use super::status::Status;

type S = Status;

/// Transitions offered by the web console.
pub fn console_transitions(status: Status) -> &'static [Status] {
    match status {
        S::Draft => &[S::Pending],
        S::Pending => &[S::Approved, S::Rejected],
        S::Approved => &[S::Scheduled],
        S::Scheduled => &[S::InProgress, S::Cancelled],
        S::InProgress => &[S::Completed, S::Cancelled],
        S::Completed => &[],
        S::Rejected => &[S::Pending],
        S::Cancelled => &[],
    }
}

/// Same as the console table, except an approved task may be cancelled
/// before it is scheduled.
pub fn backend_transitions(status: Status) -> &'static [Status] {
    match status {
        S::Approved => &[S::Scheduled, S::Cancelled],
        other => console_transitions(other),
    }
}

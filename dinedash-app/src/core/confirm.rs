//! Confirmation prompt for destructive actions

/// Asks the user a yes/no question
///
/// Closures `Fn(&str) -> bool` implement it, which is what tests use.
pub trait Confirm: Send + Sync {
    fn confirm(&self, message: &str) -> bool;
}

impl<F> Confirm for F
where
    F: Fn(&str) -> bool + Send + Sync,
{
    fn confirm(&self, message: &str) -> bool {
        self(message)
    }
}

/// Fixed answer without asking (`--yes`)
#[derive(Debug, Clone, Copy)]
pub struct AutoConfirm(pub bool);

impl Confirm for AutoConfirm {
    fn confirm(&self, message: &str) -> bool {
        tracing::debug!(answer = self.0, "Auto-answered: {}", message);
        self.0
    }
}

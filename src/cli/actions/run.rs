use crate::cli::actions::{Action, interactive, oneshot};
use anyhow::Result;

/// Execute the provided action.
// This is the single dispatch point for all CLI actions.
/// # Errors
/// Returns an error if the action fails.
pub async fn execute(action: Action) -> Result<()> {
    match action {
        Action::Interactive(args) => interactive::execute(args).await,
        Action::Oneshot(args) => oneshot::execute(args).await,
    }
}

pub mod dispatcher;
pub mod navigator;

use crate::app::action::Action;
use tokio::sync::mpsc;

// Collaborators run inside synchronous menu calls, so feedback is never awaited.
pub(crate) fn send_feedback(tx: &mpsc::Sender<Action>, action: Action) {
    if let Err(err) = tx.try_send(action) {
        tracing::warn!(%err, "dropping feedback action");
    }
}

//! Status-change notification.

use alloc::boxed::Box;

use super::GameStatus;

/// Callback invoked with the new status after each status change.
///
/// It runs synchronously on the caller's thread and must not call back into
/// the game.
pub type StatusListener = Box<dyn FnMut(GameStatus) + Send>;

#[derive(Default)]
pub(super) struct Notifier {
    listener: Option<StatusListener>,
}

impl Notifier {
    pub(super) fn set(&mut self, listener: StatusListener) {
        self.listener = Some(listener);
    }

    pub(super) fn fire(&mut self, status: GameStatus) {
        log::info!("game status changed to {status:?}");
        if let Some(listener) = self.listener.as_mut() {
            listener(status);
        }
    }
}

// Level-triggered stop flag shared by the long-running loops.

use tokio::sync::watch;

/// Creates the stop flag. Sending `true` stops every loop holding a receiver,
/// including loops that subscribe or start polling after the send.
pub fn channel() -> (watch::Sender<bool>, watch::Receiver<bool>) {
    watch::channel(false)
}

/// Resolves once shutdown has been requested, whether before or during the wait.
/// A dropped sender never resolves it.
pub async fn requested(shutdown: &mut watch::Receiver<bool>) {
    loop {
        let stop = *shutdown.borrow_and_update();
        if stop {
            return;
        }
        if shutdown.changed().await.is_err() {
            std::future::pending::<()>().await;
        }
    }
}

use tokio::sync::oneshot;

/// One-shot completion signal for the surface that started the sign-in.
///
/// `notify` consumes the notifier, so firing twice is unrepresentable.
/// Dropping it unfired is a contract violation and gets logged; paths that
/// legitimately end before dispatch call `release` instead.
pub struct RegistrationNotifier {
    tx: Option<oneshot::Sender<bool>>,
}

/// Receiving half; awaits the boolean completion signal.
pub struct RegistrationSignal {
    rx: oneshot::Receiver<bool>,
}

impl RegistrationNotifier {
    pub fn channel() -> (Self, RegistrationSignal) {
        let (tx, rx) = oneshot::channel();
        (Self { tx: Some(tx) }, RegistrationSignal { rx })
    }

    /// Deliver the completion signal.
    pub fn notify(mut self, success: bool) {
        if let Some(tx) = self.tx.take()
            && tx.send(success).is_err()
        {
            log::debug!("Sign-in completion signal dropped by the receiver");
        }
    }

    /// Release the notifier without firing it. Only for sessions that never
    /// reach dispatch.
    pub fn release(mut self) {
        self.tx.take();
    }
}

impl Drop for RegistrationNotifier {
    fn drop(&mut self) {
        if self.tx.take().is_some() {
            log::warn!("RegistrationNotifier dropped without delivering a signal");
        }
    }
}

impl RegistrationSignal {
    /// Await the signal. `None` when the session ended before dispatch.
    pub async fn wait(self) -> Option<bool> {
        self.rx.await.ok()
    }
}

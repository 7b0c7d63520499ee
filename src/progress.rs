use std::io::Write;
use std::time::{Duration, Instant};
use tokio::sync::oneshot;
use tokio::task::JoinHandle;

/// Elapsed-time indicator painted on stderr while a request is in flight.
///
/// `finish` signals the repaint task and waits for it to exit, so the
/// indicator has stopped writing before the caller prints anything else.
pub struct Progress {
    stop: oneshot::Sender<()>,
    handle: JoinHandle<()>,
}

impl Progress {
    /// Spawn the repaint task
    pub fn start() -> Self {
        let (stop, mut stopped) = oneshot::channel::<()>();

        let handle = tokio::spawn(async move {
            let started = Instant::now();
            let mut tick = tokio::time::interval(Duration::from_millis(100));

            loop {
                tokio::select! {
                    _ = &mut stopped => break,
                    _ = tick.tick() => {
                        let elapsed = started.elapsed().as_secs();
                        eprint!("\rProcessing ({elapsed}s)...");
                        let _ = std::io::stderr().flush();
                    }
                }
            }

            // Erase the indicator line before any further output is written
            eprint!("\r{:32}\r", "");
            let _ = std::io::stderr().flush();
        });

        Self { stop, handle }
    }

    /// Stop the repaint task and wait until it has ceased writing
    pub async fn finish(self) {
        let _ = self.stop.send(());
        let _ = self.handle.await;
    }
}

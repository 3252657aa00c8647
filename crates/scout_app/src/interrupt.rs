use std::sync::mpsc;
use std::thread;

/// Reports whether the user has hit Ctrl-C since the last check.
///
/// The signal is caught on a dedicated thread and forwarded over a channel
/// so the update loop can fold it in as an ordinary stop, severing the
/// stream transport instead of tearing the process down mid-session.
pub struct InterruptWatch {
    rx: mpsc::Receiver<()>,
}

impl InterruptWatch {
    pub fn spawn() -> Self {
        let (tx, rx) = mpsc::channel();
        thread::spawn(move || {
            let runtime = tokio::runtime::Builder::new_current_thread()
                .enable_io()
                .build()
                .expect("tokio runtime");
            runtime.block_on(async {
                if tokio::signal::ctrl_c().await.is_ok() {
                    let _ = tx.send(());
                }
            });
        });
        Self { rx }
    }

    pub fn triggered(&self) -> bool {
        self.rx.try_recv().is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn triggered_reports_each_signal_once() {
        let (tx, rx) = mpsc::channel();
        let watch = InterruptWatch { rx };

        assert!(!watch.triggered());
        tx.send(()).unwrap();
        assert!(watch.triggered());
        assert!(!watch.triggered());
    }
}

use crate::config::{Config, BOT_NAME};
use crate::error::CycleError;
use crate::file_logger::FileLogger;
use crate::history::History;
use crate::message::Message;
use crate::notifier::{self, Notifier};
use crate::scheduler::Cycle;
use crate::screen::{self, Screen};
use crate::selector::{Selector, SelectorSettings};
use chrono::Local;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{info, warn};

/// One select-and-emit cycle: pick a message, then hand it to every sink.
pub struct CycleService {
    selector: Selector<StdRng>,
    history: History,
    screen: Box<dyn Screen>,
    logger: FileLogger,
    notifier: Box<dyn Notifier>,
}

impl CycleService {
    pub fn new(
        selector: Selector<StdRng>,
        history: History,
        screen: Box<dyn Screen>,
        logger: FileLogger,
        notifier: Box<dyn Notifier>,
    ) -> Self {
        Self {
            selector,
            history,
            screen,
            logger,
            notifier,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(
            Selector::new(SelectorSettings::from(config), StdRng::from_entropy()),
            History::open(&config.history_file, config.history_size),
            screen::detect(config.plain),
            FileLogger::new(&config.log_file, BOT_NAME),
            notifier::detect(config.notify),
        )
    }

    /// Every sink is best effort: a closed stdout, an unwritable log or a
    /// failing notifier is reported and the cycle still completes, so the
    /// schedule moves on to the next interval.
    pub fn perform_cycle(&mut self) -> Message {
        let now = Local::now();
        let message = self.selector.select(&mut self.history);
        info!(
            kind = ?message.kind,
            language = %message.language,
            promo_counter = self.selector.promo_counter(),
            "Selected: {}",
            message.text
        );

        if let Err(e) = self.screen.show(&message, now) {
            warn!("Terminal output failed: {}", e);
        }
        self.logger.log(now, &message.text);
        self.notifier.notify(&message);

        message
    }
}

impl Cycle for CycleService {
    fn run_cycle(&mut self) -> Result<(), CycleError> {
        self.perform_cycle();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Language;
    use crate::config::LanguageMode;
    use crate::scheduler;
    use chrono::{DateTime, Local};
    use std::cell::RefCell;
    use std::fs;
    use std::io;
    use std::path::Path;
    use std::rc::Rc;
    use std::time::Duration;
    use tempfile::tempdir;
    use tokio::time::sleep;

    struct Captured(Rc<RefCell<Vec<String>>>);

    impl Screen for Captured {
        fn render(&self, message: &Message, _at: DateTime<Local>) -> String {
            message.text.clone()
        }

        fn show(&self, message: &Message, at: DateTime<Local>) -> io::Result<()> {
            self.0.borrow_mut().push(self.render(message, at));
            Ok(())
        }
    }

    struct Broken;

    impl Screen for Broken {
        fn render(&self, message: &Message, _at: DateTime<Local>) -> String {
            message.text.clone()
        }

        fn show(&self, _message: &Message, _at: DateTime<Local>) -> io::Result<()> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "stdout closed"))
        }
    }

    struct CountingNotifier(Rc<RefCell<usize>>);

    impl Notifier for CountingNotifier {
        fn notify(&self, _message: &Message) {
            *self.0.borrow_mut() += 1;
        }
    }

    fn selector() -> Selector<StdRng> {
        Selector::new(
            SelectorSettings {
                language: LanguageMode::Fixed(Language::English),
                dynamic: true,
                promo_min: 8,
                promo_max: 15,
            },
            StdRng::seed_from_u64(9),
        )
    }

    #[test]
    fn test_cycle_reaches_every_sink() {
        let dir = tempdir().unwrap();
        let shown = Rc::new(RefCell::new(Vec::new()));
        let notified = Rc::new(RefCell::new(0));
        let mut service = CycleService::new(
            selector(),
            History::new(dir.path().join("history.txt"), 50),
            Box::new(Captured(shown.clone())),
            FileLogger::new(dir.path().join("m0tive.log"), BOT_NAME),
            Box::new(CountingNotifier(notified.clone())),
        );

        let first = service.perform_cycle();
        let second = service.perform_cycle();
        assert_ne!(first.text, second.text);

        assert_eq!(*shown.borrow(), vec![first.text.clone(), second.text.clone()]);
        assert_eq!(*notified.borrow(), 2);

        let log = fs::read_to_string(dir.path().join("m0tive.log")).unwrap();
        let lines: Vec<&str> = log.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].ends_with(&format!("[m0tive] {}", first.text)));

        let history = fs::read_to_string(dir.path().join("history.txt")).unwrap();
        assert_eq!(
            history.lines().collect::<Vec<_>>(),
            vec![first.text.as_str(), second.text.as_str()]
        );
    }

    fn broken_terminal_service(dir: &Path) -> CycleService {
        CycleService::new(
            selector(),
            History::new(dir.join("history.txt"), 50),
            Box::new(Broken),
            FileLogger::new(dir.join("m0tive.log"), BOT_NAME),
            Box::new(notifier::NoopNotifier),
        )
    }

    #[test]
    fn test_terminal_failure_still_logs() {
        let dir = tempdir().unwrap();
        let mut service = broken_terminal_service(dir.path());

        assert!(service.run_cycle().is_ok());
        let log = fs::read_to_string(dir.path().join("m0tive.log")).unwrap();
        assert_eq!(log.lines().count(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_closed_stdout_keeps_hourly_cadence() {
        let dir = tempdir().unwrap();
        let mut service = broken_terminal_service(dir.path());

        scheduler::run(
            &mut service,
            Duration::from_secs(3600),
            sleep(Duration::from_secs(60)),
        )
        .await;

        let log = fs::read_to_string(dir.path().join("m0tive.log")).unwrap();
        assert_eq!(log.lines().count(), 1);
        let history = fs::read_to_string(dir.path().join("history.txt")).unwrap();
        assert_eq!(history.lines().count(), 1);

        scheduler::run(
            &mut service,
            Duration::from_secs(60),
            sleep(Duration::from_secs(150)),
        )
        .await;

        let log = fs::read_to_string(dir.path().join("m0tive.log")).unwrap();
        assert_eq!(log.lines().count(), 1 + 3);
    }
}

use tracing::warn;

use super::message::compose_message;
use super::types::{Disposition, FailureHandler, FailurePolicy};
use crate::config::DessertConfig;

impl FailurePolicy {
    /// The handler implementing this policy, `None` for [`FailurePolicy::Raise`].
    ///
    /// Logged messages are composed with the separator and default message
    /// from `config`.
    pub fn handler(self, config: &DessertConfig) -> Option<FailureHandler> {
        match self {
            FailurePolicy::Raise => None,
            FailurePolicy::Log => {
                let separator = config.separator().to_string();
                let default_message = config.default_message().to_string();
                Some(FailureHandler::new(move |expr, parts| {
                    warn!(
                        event = "core.assert.failure_logged",
                        expr = %expr,
                        message = %compose_message(parts, &separator, &default_message),
                    );
                    Disposition::Handled
                }))
            }
            FailurePolicy::Silent => Some(FailureHandler::new(|_, _| Disposition::Handled)),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io;
    use std::sync::{Arc, Mutex};

    use super::*;
    use crate::config::AssertConfig;
    use crate::value::Value;

    #[derive(Clone, Default)]
    struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

    impl io::Write for CapturedLogs {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl CapturedLogs {
        fn contents(&self) -> String {
            String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
        }
    }

    fn log_with(config: &DessertConfig, parts: &[Value]) -> String {
        let logs = CapturedLogs::default();
        let writer = logs.clone();
        let subscriber = tracing_subscriber::fmt()
            .json()
            .with_writer(move || writer.clone())
            .finish();

        let handler = FailurePolicy::Log.handler(config).unwrap();
        let disposition = tracing::subscriber::with_default(subscriber, || {
            handler.handle(&Value::Bool(false), parts)
        });
        assert_eq!(disposition, Disposition::Handled);
        logs.contents()
    }

    #[test]
    fn test_raise_has_no_handler() {
        assert!(FailurePolicy::Raise
            .handler(&DessertConfig::default())
            .is_none());
    }

    #[test]
    fn test_log_and_silent_suppress() {
        for policy in [FailurePolicy::Log, FailurePolicy::Silent] {
            let handler = policy.handler(&DessertConfig::default()).unwrap();
            assert_eq!(
                handler.handle(&Value::Bool(false), &[Value::from("foo")]),
                Disposition::Handled,
                "{:?} should suppress failures",
                policy
            );
        }
    }

    #[test]
    fn test_log_uses_configured_message_format() {
        let config = DessertConfig {
            assert: AssertConfig {
                default_message: Some("check failed".to_string()),
                separator: Some("/".to_string()),
            },
            ..Default::default()
        };

        let logged = log_with(&config, &[Value::from("foo"), Value::from(1)]);
        assert!(logged.contains("core.assert.failure_logged"), "logs: {}", logged);
        assert!(logged.contains("foo/1"), "logs: {}", logged);

        let logged = log_with(&config, &[]);
        assert!(logged.contains("check failed"), "logs: {}", logged);
    }
}

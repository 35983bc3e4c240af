pub mod clock;
pub mod emitter;
pub mod escape;

use escape::escape;

/// Test lifecycle service messages understood by TeamCity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServiceMessage<'a> {
    TestStarted { name: &'a str },
    TestStdErr { name: &'a str, out: &'a str },
    TestFailed { name: &'a str },
    TestIgnored { name: &'a str },
    TestFinished { name: &'a str },
}

impl ServiceMessage<'_> {
    pub fn kind(&self) -> &'static str {
        match self {
            ServiceMessage::TestStarted { .. } => "testStarted",
            ServiceMessage::TestStdErr { .. } => "testStdErr",
            ServiceMessage::TestFailed { .. } => "testFailed",
            ServiceMessage::TestIgnored { .. } => "testIgnored",
            ServiceMessage::TestFinished { .. } => "testFinished",
        }
    }

    /// Renders the message line. `timestamp` is inserted verbatim; `name` and
    /// `out` are escaped.
    pub fn render(&self, timestamp: &str) -> String {
        match self {
            ServiceMessage::TestStdErr { name, out } => format!(
                "##teamcity[{} timestamp='{}' name='{}' out='{}']",
                self.kind(),
                timestamp,
                escape(name),
                escape(out)
            ),
            ServiceMessage::TestStarted { name }
            | ServiceMessage::TestFailed { name }
            | ServiceMessage::TestIgnored { name }
            | ServiceMessage::TestFinished { name } => format!(
                "##teamcity[{} timestamp='{}' name='{}']",
                self.kind(),
                timestamp,
                escape(name)
            ),
        }
    }
}

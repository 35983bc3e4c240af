use super::clock::Clock;
use super::ServiceMessage;
use crate::error::{Error, Result};
use crate::types::virtual_test::{Outcome, VirtualTest};
use std::io::Write;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EmitSummary {
    pub tests: usize,
    pub passed: usize,
    pub failed: usize,
    pub ignored: usize,
    pub lines: usize,
}

/// Writes the service message sequence for each virtual test:
/// `testStarted`, then `testIgnored`, or one `testStdErr` per issue followed
/// by `testFailed`, or `testFinished`.
pub struct Emitter<W, C> {
    out: W,
    clock: C,
    summary: EmitSummary,
}

impl<W: Write, C: Clock> Emitter<W, C> {
    pub fn new(out: W, clock: C) -> Self {
        Self {
            out,
            clock,
            summary: EmitSummary::default(),
        }
    }

    pub fn emit_all<'a, I>(&mut self, tests: I) -> Result<()>
    where
        I: IntoIterator<Item = &'a VirtualTest>,
    {
        for test in tests {
            self.emit(test)?;
        }
        Ok(())
    }

    pub fn emit(&mut self, test: &VirtualTest) -> Result<()> {
        let name = test.display_name();
        let name = name.as_str();

        self.send(ServiceMessage::TestStarted { name })?;
        match test.outcome() {
            Outcome::Ignored => {
                self.send(ServiceMessage::TestIgnored { name })?;
                self.summary.ignored += 1;
            }
            Outcome::Failed => {
                for issue in &test.issues {
                    self.send(ServiceMessage::TestStdErr { name, out: issue })?;
                }
                self.send(ServiceMessage::TestFailed { name })?;
                self.summary.failed += 1;
            }
            Outcome::Passed => {
                self.send(ServiceMessage::TestFinished { name })?;
                self.summary.passed += 1;
            }
        }
        self.summary.tests += 1;
        Ok(())
    }

    /// Flushes the sink and returns it with the run summary.
    pub fn finish(mut self) -> Result<(W, EmitSummary)> {
        self.out.flush().map_err(Error::Write)?;
        Ok((self.out, self.summary))
    }

    fn send(&mut self, message: ServiceMessage<'_>) -> Result<()> {
        let line = message.render(&self.clock.timestamp());
        writeln!(self.out, "{line}").map_err(Error::Write)?;
        self.summary.lines += 1;
        Ok(())
    }
}

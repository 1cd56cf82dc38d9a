//! Child-process execution

use std::path::PathBuf;
use std::process::Stdio;
use std::sync::Arc;

use tokio::io::{AsyncRead, AsyncReadExt, AsyncWriteExt};
use tokio::process::Command;
use tracing::{debug, warn};

use crate::clock::{http_date, Clock, SystemClock};
use crate::error::{RunnerError, RunnerResult};
use crate::options::{Invocation, InvocationOptions};

/// Fixed JSON body appended to every payload.
const PAYLOAD_BODY: &str = "{\"hello\": \"world\"}";

/// Extension of on-disk HTTP-message fixtures.
const FIXTURE_EXTENSION: &str = "httpMessage";

/// Build the bytes delivered to a driver's standard input: the fixture
/// template followed by the effective `Date:` header, a blank line, and the
/// fixed JSON body.
pub fn build_payload(fixture: &str, date: &str) -> String {
    format!("{fixture}Date: {date}\n\n{PAYLOAD_BODY}")
}

/// Executes driver invocations against fixtures in one directory.
///
/// The fixture directory and the clock are explicit so callers control both;
/// nothing here reads the process working directory or samples ambient time
/// behind the caller's back.
pub struct Runner {
    fixture_dir: PathBuf,
    clock: Arc<dyn Clock>,
}

impl Runner {
    /// A runner over `fixture_dir` using the system clock.
    pub fn new(fixture_dir: impl Into<PathBuf>) -> Self {
        Self::with_clock(fixture_dir, Arc::new(SystemClock))
    }

    /// A runner with an injected clock, for deterministic date headers.
    pub fn with_clock(fixture_dir: impl Into<PathBuf>, clock: Arc<dyn Clock>) -> Self {
        Self {
            fixture_dir: fixture_dir.into(),
            clock,
        }
    }

    /// On-disk path of a named fixture.
    pub fn fixture_path(&self, fixture_id: &str) -> PathBuf {
        self.fixture_dir
            .join(format!("{fixture_id}.{FIXTURE_EXTENSION}"))
    }

    /// Run one driver invocation against a named fixture.
    ///
    /// The effective date is sampled once: `options.date` when given, else
    /// the runner's clock. The driver's stdout and stderr are drained fully,
    /// concurrently with awaiting exit; the verdict is produced only after
    /// all three complete. Exit 0 resolves to the captured stdout; anything
    /// else to [`RunnerError::Driver`]. A spawn failure resolves to
    /// [`RunnerError::Spawn`], and — when a timeout was configured — an
    /// overdue driver is killed and resolves to [`RunnerError::Timeout`].
    pub async fn generate(
        &self,
        fixture_id: &str,
        options: &InvocationOptions,
    ) -> RunnerResult<String> {
        let path = self.fixture_path(fixture_id);
        let fixture = tokio::fs::read_to_string(&path)
            .await
            .map_err(|source| RunnerError::Fixture { path, source })?;

        let date = match &options.date {
            Some(date) => date.clone(),
            None => http_date(self.clock.now()),
        };
        let payload = build_payload(&fixture, &date);

        let invocation = Invocation::compose(options)?;
        debug!(command = %invocation.command_line(), "invoking driver");

        run_driver(&invocation, &payload, options).await
    }
}

async fn run_driver(
    invocation: &Invocation,
    payload: &str,
    options: &InvocationOptions,
) -> RunnerResult<String> {
    let mut child = Command::new(invocation.program())
        .args(invocation.args())
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .map_err(|source| RunnerError::Spawn {
            program: invocation.program().to_string(),
            source,
        })?;

    // The whole payload is known upfront: write it and close stdin so the
    // driver sees end of input. A driver may exit without consuming its
    // input; its exit status carries the verdict, so write errors here are
    // not themselves failures.
    if let Some(mut stdin) = child.stdin.take() {
        let _ = stdin.write_all(payload.as_bytes()).await;
        let _ = stdin.shutdown().await;
    }

    let stdout_pipe = child.stdout.take();
    let stderr_pipe = child.stderr.take();

    // Three completion signals joined: process exit plus a full drain of
    // each stream. Resolving on exit alone could lose buffered output, and
    // draining sequentially could deadlock against a full pipe.
    let wait_and_drain = async {
        tokio::try_join!(
            child.wait(),
            drain(stdout_pipe),
            drain(stderr_pipe)
        )
    };

    let (status, stdout_buf, stderr_buf) = match options.timeout {
        None => wait_and_drain.await?,
        Some(limit) => match tokio::time::timeout(limit, wait_and_drain).await {
            Ok(joined) => joined?,
            Err(_elapsed) => {
                warn!(command = %invocation.command_line(), ?limit, "driver overdue, killing");
                if let Err(source) = child.kill().await {
                    warn!(%source, "failed to kill overdue driver");
                }
                return Err(RunnerError::Timeout(limit));
            }
        },
    };

    let stdout = String::from_utf8_lossy(&stdout_buf).into_owned();
    let stderr = String::from_utf8_lossy(&stderr_buf).into_owned();

    if status.success() {
        debug!(bytes = stdout.len(), "driver succeeded");
        Ok(stdout)
    } else {
        // code() is None when the driver died to a signal.
        let code = status.code().unwrap_or(-1);
        Err(RunnerError::Driver {
            code,
            stdout,
            stderr,
        })
    }
}

async fn drain(pipe: Option<impl AsyncRead + Unpin>) -> std::io::Result<Vec<u8>> {
    let mut buf = Vec::new();
    if let Some(mut pipe) = pipe {
        pipe.read_to_end(&mut buf).await?;
    }
    Ok(buf)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payload_is_fixture_plus_date_trailer_and_body() {
        let payload = build_payload(
            "GET /foo HTTP/1.1\nHost: example.com\n",
            "Thu, 04 Jul 2019 12:30:00 GMT",
        );
        assert_eq!(
            payload,
            "GET /foo HTTP/1.1\nHost: example.com\nDate: Thu, 04 Jul 2019 12:30:00 GMT\n\n{\"hello\": \"world\"}"
        );
    }

    #[test]
    fn fixture_path_appends_http_message_extension() {
        let runner = Runner::new("/fixtures");
        assert_eq!(
            runner.fixture_path("default-test"),
            PathBuf::from("/fixtures/default-test.httpMessage")
        );
    }
}

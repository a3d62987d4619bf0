mod spawn;
mod tee;

use tokio::io::AsyncWriteExt;
use tokio::sync::mpsc;

use crate::cli::Args;
use crate::error::RunnerError;
use crate::filter::SuppressFilter;

pub async fn run(args: Args) -> Result<i32, RunnerError> {
    let mut cfg = crate::config::load(args.config.as_deref()).map_err(RunnerError::Config)?;
    if args.shell {
        cfg.child.shell = true;
    }

    let mut child = spawn::spawn(&args.command, cfg.child.shell)?;
    tracing::debug!(pid = child.id(), shell = cfg.child.shell, "child spawned");

    let stdout = child.stdout.take().unwrap();
    let stderr = child.stderr.take().unwrap();

    // line taps: both pipes feed one channel, which is the merged stream
    let (line_tx, mut line_rx) = mpsc::channel::<tee::LineTap>(1024);
    let _out_task = tee::pump(tee::Source::Stdout, stdout, line_tx.clone());
    let _err_task = tee::pump(tee::Source::Stderr, stderr, line_tx);

    let mut filter = SuppressFilter::new(cfg.filter.suppress_count);
    let mut out = tokio::io::stdout();

    while let Some(tap) = line_rx.recv().await {
        if filter.admit(&tap.line) {
            out.write_all(tap.line.as_bytes())
                .await
                .map_err(stdout_io)?;
            out.write_all(b"\n").await.map_err(stdout_io)?;
            out.flush().await.map_err(stdout_io)?;
        } else {
            tracing::debug!(source = %tap.source, line = %tap.line, "suppressed");
        }
    }

    // both pipes at EOF; reap the child
    let status = child
        .wait()
        .await
        .map_err(|e| RunnerError::Wait(e.to_string()))?;
    Ok(normalize_exit(status))
}

fn stdout_io(source: std::io::Error) -> RunnerError {
    RunnerError::StreamIo {
        stream: "stdout",
        source,
    }
}

fn normalize_exit(status: std::process::ExitStatus) -> i32 {
    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(code) = status.code() {
            code
        } else if let Some(sig) = status.signal() {
            128 + sig
        } else {
            1
        }
    }
    #[cfg(windows)]
    {
        status.code().unwrap_or(1)
    }
}

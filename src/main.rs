use std::io::{self, Write};
use std::process::ExitCode;
use chrono::Local;
use log::error;
use crate::initialization::init;
use crate::worker::{run, RunOutcome, WorkerError};

mod advisory;
mod config;
mod extraction;
mod gate;
mod initialization;
mod logging;
mod manager_jma;
mod manager_slack;
mod models;
#[cfg(test)]
mod test_support;
mod worker;

const SKIP_NOTICE: &str = "今日は実行対象日ではありません。終了します。";

fn main() -> ExitCode {

    // If initialization fails there is no logger, so stderr is all we have.
    let (args, config, mgr) = match init() {
        Ok(r) => r,
        Err(e) => {
            eprintln!("[エラー] Initialization failed: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let result = run(&config, &mgr, Local::now().date_naive(), args.force);

    report(result, &mut io::stdout(), &mut io::stderr())
}

/// Reports the outcome of a run and returns the process exit status.
/// Failures are written as a single '[エラー]' line.
///
/// # Arguments
///
/// * 'result' - outcome of the run
/// * 'out' - where the skip notice goes
/// * 'err' - where failures go
fn report(result: Result<RunOutcome, WorkerError>, out: &mut impl Write, err: &mut impl Write) -> ExitCode {
    match result {
        Ok(RunOutcome::Skipped) => {
            let _ = writeln!(out, "{}", SKIP_NOTICE);
            ExitCode::SUCCESS
        }
        Ok(RunOutcome::Delivered(_)) => ExitCode::SUCCESS,
        Err(e) => {
            let stage = match &e {
                WorkerError::FetchError(_) => "fetch",
                WorkerError::ExtractError(_) => "extract",
                WorkerError::NotifyError(_) => "notify",
            };
            error!("Run failed in {} stage: {}", stage, e);
            let detail = e.to_string().replace(['\r', '\n'], " ");
            let _ = writeln!(err, "[エラー] {}", detail);
            ExitCode::FAILURE
        }
    }
}

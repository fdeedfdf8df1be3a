//! `nslookup` 命令行入口

use std::io;
use std::process::ExitCode;

use log::{debug, error};
use nslookup::{reachability_timeout, run, ProbeOptions, Prober};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    // 日志写到 stderr，stdout 只保留报告本身
    env_logger::init();
    debug!("nslookup-rs {}", nslookup::version());

    let hostnames: Vec<String> = std::env::args_os()
        .skip(1)
        .map(|arg| arg.to_string_lossy().into_owned())
        .collect();

    let prober = Prober::new(ProbeOptions::default());
    let mut out = io::stdout().lock();

    match run(&hostnames, &prober, reachability_timeout(), &mut out).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            // stdout 已不可用（例如管道被关闭）
            error!("failed to write report: {e}");
            ExitCode::FAILURE
        }
    }
}

//! Unix：运行平台 `ping` 命令
//!
//! 每次只发一个请求（`-c 1`），进程句柄由我们持有：超时后 future 被丢弃，
//! `kill_on_drop` 随即结束 ping 进程，不会有残留的后台 ping。

use crate::error::ProbeError;
use crate::types::result::ProbeOutcome;
use crate::utils::conversion::parse_rtt;
use log::trace;
use std::net::IpAddr;
use std::process::{Output, Stdio};
use std::time::{Duration, Instant};
use tokio::process::Command;

/// 构造单次 ping 的命令行
///
/// ping 自身的等待时间按秒向上取整，真正的上限由调用方的超时保证
pub fn ping_command(ip: IpAddr, timeout: Duration) -> Command {
    let wait_secs = timeout.as_millis().div_ceil(1000).max(1).to_string();

    #[cfg(any(target_os = "macos", target_os = "ios", target_os = "freebsd"))]
    let command = {
        let mut command = Command::new(if ip.is_ipv6() { "ping6" } else { "ping" });
        command.args(["-n", "-c", "1"]);
        if ip.is_ipv4() {
            command.args(["-t", &wait_secs]);
        }
        command
    };

    #[cfg(not(any(target_os = "macos", target_os = "ios", target_os = "freebsd")))]
    let command = {
        let mut command = Command::new("ping");
        command.args(["-n", "-c", "1", "-W", &wait_secs]);
        if ip.is_ipv6() {
            command.arg("-6");
        }
        command
    };

    let mut command = command;
    command
        .arg(ip.to_string())
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .kill_on_drop(true);
    command
}

/// 运行一次 ping，在 `timeout` 内返回
///
/// # Errors
/// - `ProbeError::IcmpUnavailable`: ping 命令无法启动
/// - `ProbeError::Io`: 等待 ping 进程时出错
pub async fn echo(ip: IpAddr, timeout: Duration) -> Result<ProbeOutcome, ProbeError> {
    let start = Instant::now();
    let child = ping_command(ip, timeout)
        .spawn()
        .map_err(|e| ProbeError::IcmpUnavailable(format!("cannot spawn ping: {e}")))?;

    match tokio::time::timeout(timeout, child.wait_with_output()).await {
        Ok(Ok(output)) => {
            let outcome = outcome_from_output(&output, start.elapsed());
            trace!("ping {ip}: {outcome:?}");
            Ok(outcome)
        }
        Ok(Err(e)) => Err(ProbeError::Io(e)),
        // future 在这里被丢弃，子进程随之被 kill
        Err(_) => Ok(ProbeOutcome::Timeout),
    }
}

/// 根据 ping 的退出状态归类结果
///
/// 没有收到回应时各平台的退出码不一致（iputils 为 1，macOS 为 2），
/// 但都不写 stderr；权限不足、网络不可达等错误则一定写 stderr
pub fn outcome_from_output(output: &Output, elapsed: Duration) -> ProbeOutcome {
    if output.status.success() {
        let stdout = String::from_utf8_lossy(&output.stdout);
        return ProbeOutcome::Reply {
            rtt: parse_rtt(&stdout).unwrap_or(elapsed),
        };
    }

    let stderr = String::from_utf8_lossy(&output.stderr);
    let stderr = stderr.trim();
    if stderr.is_empty() {
        ProbeOutcome::Timeout
    } else {
        ProbeOutcome::Unavailable {
            reason: format!("ping exited with {}: {stderr}", output.status),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::os::unix::process::ExitStatusExt;
    use std::process::ExitStatus;

    fn output(code: i32, stdout: &str, stderr: &str) -> Output {
        Output {
            // wait status 的高字节是退出码
            status: ExitStatus::from_raw(code << 8),
            stdout: stdout.as_bytes().to_vec(),
            stderr: stderr.as_bytes().to_vec(),
        }
    }

    #[test]
    fn success_uses_reported_time() {
        let out = output(0, "64 bytes from 127.0.0.1: icmp_seq=1 ttl=64 time=0.045 ms\n", "");
        assert_eq!(
            outcome_from_output(&out, Duration::from_millis(900)),
            ProbeOutcome::Reply { rtt: Duration::from_micros(45) }
        );
    }

    #[test]
    fn silent_failure_is_timeout() {
        let out = output(1, "1 packets transmitted, 0 received, 100% packet loss\n", "");
        assert_eq!(outcome_from_output(&out, Duration::from_secs(1)), ProbeOutcome::Timeout);
    }

    #[test]
    fn failure_with_stderr_is_unavailable() {
        let out = output(2, "", "ping: socket: Operation not permitted\n");
        assert!(outcome_from_output(&out, Duration::ZERO).is_unavailable());
    }

    #[test]
    fn command_sends_single_request_to_target() {
        let command = ping_command(IpAddr::V4(std::net::Ipv4Addr::LOCALHOST), Duration::from_millis(1500));
        let args: Vec<String> = command
            .as_std()
            .get_args()
            .map(|arg| arg.to_string_lossy().into_owned())
            .collect();

        assert!(args.windows(2).any(|pair| pair == ["-c", "1"]));
        assert_eq!(args.last().map(String::as_str), Some("127.0.0.1"));
    }
}

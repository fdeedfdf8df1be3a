//! ICMP 的平台分派

use crate::error::ProbeError;
use crate::types::result::ProbeOutcome;
use std::net::IpAddr;
use std::time::Duration;

// 平台特定实现
#[cfg(not(windows))]
pub mod unix;
#[cfg(windows)]
pub mod windows;

/// 按平台执行一次 ICMP echo
///
/// # Errors
/// - `ProbeError::IcmpUnavailable`: ping 命令无法启动，或阻塞任务异常结束
/// - `ProbeError::Io`: 等待 ping 进程时出错
pub async fn echo(ip: IpAddr, timeout: Duration) -> Result<ProbeOutcome, ProbeError> {
    #[cfg(windows)]
    {
        // IcmpSendEcho 是阻塞调用，自身带超时
        tokio::task::spawn_blocking(move || windows::echo_blocking(ip, timeout))
            .await
            .map_err(|e| ProbeError::IcmpUnavailable(format!("ICMP task failed: {e}")))?
    }

    #[cfg(not(windows))]
    {
        unix::echo(ip, timeout).await
    }
}

/// 把一次 echo 调用的结果归类
///
/// 只有超时说明请求确实发出去了；其他错误都表示这次没能完成 ICMP，
/// 归为 `Unavailable`，让 `IcmpThenTcp` 改用 TCP
#[cfg(any(windows, test))]
pub(crate) fn classify_echo<E, F>(result: Result<Duration, E>, is_timeout: F) -> ProbeOutcome
where
    E: std::fmt::Display,
    F: FnOnce(&E) -> bool,
{
    match result {
        Ok(rtt) => ProbeOutcome::Reply { rtt },
        Err(e) if is_timeout(&e) => ProbeOutcome::Timeout,
        Err(e) => ProbeOutcome::Unavailable { reason: e.to_string() },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    fn timed_out(e: &io::Error) -> bool {
        e.kind() == io::ErrorKind::TimedOut
    }

    #[test]
    fn reply_keeps_round_trip_time() {
        let outcome = classify_echo::<io::Error, _>(Ok(Duration::from_millis(12)), timed_out);
        assert_eq!(outcome, ProbeOutcome::Reply { rtt: Duration::from_millis(12) });
    }

    #[test]
    fn timeout_stays_final() {
        let outcome = classify_echo(Err(io::Error::from(io::ErrorKind::TimedOut)), timed_out);
        assert_eq!(outcome, ProbeOutcome::Timeout);
    }

    #[test]
    fn other_failures_allow_tcp_fallback() {
        let outcome = classify_echo(
            Err(io::Error::new(io::ErrorKind::PermissionDenied, "access denied")),
            timed_out,
        );
        assert!(outcome.is_unavailable());
        assert_eq!(outcome, ProbeOutcome::Unavailable { reason: "access denied".into() });
    }
}

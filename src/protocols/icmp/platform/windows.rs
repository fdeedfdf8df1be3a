//! Windows：通过 winping 调用 IcmpSendEcho（无需管理员权限）

use super::classify_echo;
use crate::error::ProbeError;
use crate::types::result::ProbeOutcome;
use std::net::IpAddr;
use std::time::Duration;
use winping::{Buffer, Error, Pinger as WinPinger};

// 创建并配置 WinPinger
fn create_pinger(timeout: Duration) -> Result<WinPinger, ProbeError> {
    let mut pinger = WinPinger::new().map_err(|e| ProbeError::IcmpUnavailable(e.to_string()))?;
    let timeout_ms = u32::try_from(timeout.as_millis()).unwrap_or(u32::MAX);
    pinger.set_timeout(timeout_ms);
    Ok(pinger)
}

/// 阻塞地发送一次 echo
///
/// # Errors
/// - `ProbeError::IcmpUnavailable`: 无法创建 ICMP 句柄
pub fn echo_blocking(ip: IpAddr, timeout: Duration) -> Result<ProbeOutcome, ProbeError> {
    let pinger = create_pinger(timeout)?;
    let buffer = &mut Buffer::new();

    let result = pinger
        .send(ip, buffer)
        .map(|rtt| Duration::from_millis(u64::from(rtt)));
    Ok(classify_echo(result, |e| matches!(e, Error::Timeout)))
}

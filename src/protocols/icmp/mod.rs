//! ICMP echo 探测

pub mod platform;

use crate::error::ProbeError;
use crate::types::result::ProbeOutcome;
use crate::utils::validation::validate_timeout;
use std::future::Future;
use std::net::IpAddr;
use std::time::Duration;

/// `IcmpThenTcp` 策略中的 ICMP 一步
///
/// `Prober` 只通过这个 trait 发 echo，平台实现是 `PlatformEcho`
pub trait Echo {
    /// 对 `ip` 发送一次 echo，在 `timeout` 内给出结果
    fn echo(&self, ip: IpAddr, timeout: Duration) -> impl Future<Output = Result<ProbeOutcome, ProbeError>>;
}

/// 使用平台 ICMP 机制的 echo
#[derive(Clone, Copy, Debug, Default)]
pub struct PlatformEcho;

impl Echo for PlatformEcho {
    async fn echo(&self, ip: IpAddr, timeout: Duration) -> Result<ProbeOutcome, ProbeError> {
        echo(ip, timeout).await
    }
}

/// 对单个地址发送 ICMP echo，并在 `timeout` 内返回结果
///
/// Unix 上运行一次 `ping -c 1`，超时即结束该进程；Windows 上调用 IcmpSendEcho
///
/// # Errors
/// - `ProbeError::InvalidTimeout`: `timeout` 为零
/// - `ProbeError::IcmpUnavailable`: 平台无法执行 ICMP echo
pub async fn echo(ip: IpAddr, timeout: Duration) -> Result<ProbeOutcome, ProbeError> {
    let timeout = validate_timeout(timeout)?;
    platform::echo(ip, timeout).await
}

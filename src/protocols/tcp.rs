//! TCP 连接探测
//!
//! 与 ICMP 不同，TCP 探测不需要任何特权：连接建立成功，或者对端回了 RST
//! （连接被拒绝），都说明主机在线。

use crate::error::ProbeError;
use crate::types::result::ProbeOutcome;
use crate::utils::validation::validate_timeout;
use log::trace;
use std::io::ErrorKind;
use std::net::{IpAddr, SocketAddr};
use std::time::{Duration, Instant};
use tokio::net::TcpStream;

/// 在 `timeout` 内尝试与 `ip:port` 建立 TCP 连接
///
/// # Errors
/// - `ProbeError::InvalidTimeout`: `timeout` 为零
/// - `ProbeError::Timeout`: 超时时间内没有完成握手
/// - `ProbeError::Io`: 其他连接错误（网络不可达、权限不足等）
pub async fn connect(ip: IpAddr, port: u16, timeout: Duration) -> Result<ProbeOutcome, ProbeError> {
    let timeout = validate_timeout(timeout)?;
    let addr = SocketAddr::new(ip, port);
    let start = Instant::now();

    match tokio::time::timeout(timeout, TcpStream::connect(addr)).await {
        Ok(Ok(_stream)) => {
            let rtt = start.elapsed();
            trace!("tcp {addr}: connected in {rtt:?}");
            Ok(ProbeOutcome::Reply { rtt })
        }
        Ok(Err(e)) if e.kind() == ErrorKind::ConnectionRefused => {
            trace!("tcp {addr}: refused");
            Ok(ProbeOutcome::Refused)
        }
        Ok(Err(e)) => Err(ProbeError::Io(e)),
        Err(_) => Err(ProbeError::Timeout(timeout)),
    }
}

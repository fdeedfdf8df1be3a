//! 命令行驱动
//!
//! 逐个处理主机名：解析、探测、输出，严格按输入顺序，一个处理完再处理下一个。

use crate::protocols::{is_any_reachable, Probe};
use crate::resolver::resolve;
use crate::types::result::HostReport;
use log::debug;
use std::io::{self, Write};
use std::time::Duration;

/// 报告开头
pub const HEADER: &str = "==================== NSLookup ====================";
/// 报告结尾
pub const FOOTER: &str = "==================================================";
/// 没有传入任何主机名时的提示
pub const NO_HOSTNAME: &str = "No hostname specified!";

/// 处理单个主机名
///
/// 解析失败只影响这个主机名本身，得到一个 `NotFound` 报告
pub async fn lookup<P: Probe>(hostname: &str, probe: &P, timeout: Duration) -> HostReport {
    match resolve(hostname).await {
        Ok(addresses) => {
            let reachable = is_any_reachable(probe, &addresses, timeout).await;
            HostReport::resolved(hostname, addresses, reachable)
        }
        Err(e) => {
            debug!("{e:?}");
            HostReport::not_found(hostname)
        }
    }
}

/// 依次处理所有主机名，把报告写入 `out`
///
/// `Hostname:` 行在解析之前写出并 flush，慢速解析或探测时也能看到进度
///
/// # Errors
/// - 写入 `out` 失败时返回对应的 `io::Error`；解析与探测的失败都不会从这里返回
pub async fn run<S, P, W>(hostnames: &[S], probe: &P, timeout: Duration, out: &mut W) -> io::Result<()>
where
    S: AsRef<str>,
    P: Probe,
    W: Write,
{
    if hostnames.is_empty() {
        writeln!(out, "{NO_HOSTNAME}")?;
        return out.flush();
    }

    writeln!(out, "{HEADER}")?;
    for hostname in hostnames {
        let hostname = hostname.as_ref();
        debug!("processing {hostname:?}");
        writeln!(out, "Hostname: {hostname}")?;
        out.flush()?;

        let report = lookup(hostname, probe, timeout).await;
        write!(out, "{report}")?;
        out.flush()?;
    }
    writeln!(out, "{FOOTER}")?;
    out.flush()
}

//! Resolve hostnames to their addresses and report whether each host is reachable.
//!
//! 解析交给平台解析器，可达性用平台 ICMP echo（Unix 上是 `ping` 命令，
//! Windows 上是 IcmpSendEcho），ICMP 不可用时改用 TCP 连接。
//!
//! ```no_run
//! use nslookup::{run, reachability_timeout, ProbeOptions, Prober};
//!
//! # async fn demo() -> std::io::Result<()> {
//! let prober = Prober::new(ProbeOptions::default());
//! let mut out = Vec::new();
//! run(&["localhost"][..], &prober, reachability_timeout(), &mut out).await?;
//! # Ok(())
//! # }
//! ```

pub mod driver;
pub mod error;
pub mod protocols;
pub mod resolver;
pub mod types;
pub mod utils;

pub use driver::{lookup, run};
pub use error::{LookupError, ProbeError};
pub use protocols::icmp::{Echo, PlatformEcho};
pub use protocols::{is_any_reachable, Probe, Prober};
pub use resolver::resolve;
pub use types::options::{reachability_timeout, ProbeOptions, ProbeStrategy};
pub use types::result::{HostOutcome, HostReport, ProbeOutcome};

/// 获取 nslookup-rs 的版本号
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

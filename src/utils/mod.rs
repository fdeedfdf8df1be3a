//! 工具函数
pub mod conversion;
pub mod validation;

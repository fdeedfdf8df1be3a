//! 公共类型定义
pub mod options;
pub mod result;

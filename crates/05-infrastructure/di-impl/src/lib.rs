//! # 依赖注入具体实现
//!
//! 提供组件定义解析、定义注册表和切面的具体实现

pub mod aop;
pub mod definition;
pub mod provider;
pub mod registry;
pub mod settings;

pub use aop::*;
pub use definition::*;
pub use provider::*;
pub use registry::*;
pub use settings::*;

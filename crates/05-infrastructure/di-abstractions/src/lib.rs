//! # Dependency Injection Abstractions
//!
//! 依赖注入抽象层，定义组件定义解析和切面匹配的核心接口。
//!
//! ## 核心接口
//!
//! - [`BeanDefinition`] - 组件定义
//! - [`BeanDefinitionResolver`] - 组件定义解析器
//! - [`InjectionMetadataProvider`] - 注入元数据提供者
//! - [`Pointcut`] / [`Advice`] - 切点与通知

pub mod aop;
pub mod definition;
pub mod provider;
pub mod resolver;

pub use aop::*;
pub use definition::*;
pub use provider::*;
pub use resolver::*;

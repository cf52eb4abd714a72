//! # IoC Common
//!
//! 这个 crate 提供了依赖注入与切面模块共用的类型和工具。
//!
//! ## 核心组件
//!
//! - [`BeanClass`] - 组件类型描述（构造器、方法、字段、能力标记）
//! - [`Bean`] - 自描述组件 trait
//! - [`FactoryBean`] - 工厂组件能力
//! - [`Configurable`] - 可配置组件 trait
//!
//! ## 设计原则
//!
//! - 以显式的类型描述替代运行时反射
//! - 能力标记通过 `TypeId` 判断，而不是可赋值性检查

pub mod component;
pub mod configuration;
pub mod errors;
pub mod metadata;

pub use component::*;
pub use configuration::*;
pub use errors::*;
pub use metadata::*;

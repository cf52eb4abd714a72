//! 切面实现
//!
//! - [`Aspect`] - 切点与通知的组合
//! - [`NoOpAdvice`] - 直接放行的哨兵通知
//! - [`MethodNamePointcut`] / [`AnnotationPointcut`] - 内置切点

pub mod advice;
pub mod aspect;
pub mod pointcut;

pub use advice::*;
pub use aspect::*;
pub use pointcut::*;

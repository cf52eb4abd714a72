//! 切面抽象接口
//!
//! 切点对 (方法, 目标) 打分，通知定义方法调用前后的拦截行为。
//! 代理的生成与分发由外部负责。

use ioc_common::{AopError, MethodInfo, TypeInfo};
use std::any::Any;
use std::fmt::Debug;
use std::sync::Arc;

/// 被代理的目标对象描述
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Target {
    /// 目标类型
    pub type_info: TypeInfo,
    /// 目标组件名称
    pub bean_name: Option<String>,
}

impl Target {
    /// 创建目标描述
    pub fn new(type_info: TypeInfo) -> Self {
        Self {
            type_info,
            bean_name: None,
        }
    }

    /// 从类型创建目标描述
    pub fn of<T: 'static>() -> Self {
        Self::new(TypeInfo::of::<T>())
    }

    /// 设置组件名称
    pub fn with_bean_name(mut self, name: impl Into<String>) -> Self {
        self.bean_name = Some(name.into());
        self
    }
}

/// 切点 trait
///
/// 返回值的含义（布尔值或排序分数）由具体实现决定
pub trait Pointcut: Send + Sync {
    /// 对方法和目标进行匹配
    fn matches(&self, method: &MethodInfo, target: &Target) -> i32;
}

impl<F> Pointcut for F
where
    F: Fn(&MethodInfo, &Target) -> i32 + Send + Sync,
{
    fn matches(&self, method: &MethodInfo, target: &Target) -> i32 {
        self(method, target)
    }
}

/// 连接点
#[derive(Debug, Clone, Copy)]
pub struct JoinPoint<'a> {
    /// 被拦截的方法
    pub method: &'a MethodInfo,
    /// 被拦截的目标
    pub target: &'a Target,
}

impl<'a> JoinPoint<'a> {
    /// 创建连接点
    pub fn new(method: &'a MethodInfo, target: &'a Target) -> Self {
        Self { method, target }
    }

    /// 方法签名，例如 `OrderService.place`
    pub fn signature(&self) -> String {
        format!("{}.{}", self.target.type_info.short_name(), self.method.name)
    }
}

/// 通知执行结果
pub type AdviceResult = Result<Box<dyn Any + Send>, AopError>;

/// 通知 trait
pub trait Advice: Send + Sync + Debug {
    /// 通知名称
    fn name(&self) -> &str;

    /// 拦截调用，`proceed` 执行链上的下一个环节
    fn invoke(
        &self,
        join_point: &JoinPoint<'_>,
        proceed: &mut dyn FnMut() -> AdviceResult,
    ) -> AdviceResult;
}

/// 交给代理生成方的拦截回调
pub type Callback = Arc<dyn Advice>;

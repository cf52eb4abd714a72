//! 切面

use super::advice::NoOpAdvice;
use di_abstractions::{Callback, Pointcut, Target};
use ioc_common::MethodInfo;
use std::fmt;
use std::sync::Arc;
use tracing::debug;

/// 切面
///
/// 组合一个切点和一组有序的通知。通知列表总以共享的 [`NoOpAdvice`] 开头，
/// 其后按追加顺序排列用户通知。装配完成后交给代理工厂只读使用
pub struct Aspect {
    pointcut: Arc<dyn Pointcut>,
    advices: Vec<Callback>,
}

impl Aspect {
    /// 创建切面
    pub fn new(pointcut: Arc<dyn Pointcut>, advices: impl IntoIterator<Item = Callback>) -> Self {
        let mut aspect = Self {
            pointcut,
            advices: vec![NoOpAdvice::shared()],
        };
        aspect.add_advice(advices);
        debug!("创建切面, 通知数量: {}", aspect.advices.len());
        aspect
    }

    /// 追加通知，保持追加顺序
    pub fn add_advice(&mut self, advices: impl IntoIterator<Item = Callback>) {
        self.advices.extend(advices);
    }

    /// 以数组形式导出全部通知（含开头的空通知），供代理生成使用
    pub fn to_array_advice(&self) -> Vec<Callback> {
        self.advices.clone()
    }

    /// 对方法和目标进行匹配，结果完全由切点决定
    pub fn matches(&self, method: &MethodInfo, target: &Target) -> i32 {
        self.pointcut.matches(method, target)
    }
}

impl fmt::Debug for Aspect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Aspect")
            .field(
                "advices",
                &self.advices.iter().map(|a| a.name()).collect::<Vec<_>>(),
            )
            .field("pointcut", &"<pointcut>")
            .finish()
    }
}

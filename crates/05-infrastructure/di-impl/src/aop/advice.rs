//! 内置通知

use di_abstractions::{Advice, AdviceResult, Callback, JoinPoint};
use once_cell::sync::Lazy;
use std::sync::Arc;

static NO_OP_ADVICE: Lazy<Arc<NoOpAdvice>> = Lazy::new(|| Arc::new(NoOpAdvice));

/// 空通知
///
/// 不做任何拦截，直接执行下一个环节。每个切面的通知列表都以它开头
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NoOpAdvice;

impl NoOpAdvice {
    /// 共享的空通知实例
    pub fn shared() -> Callback {
        NO_OP_ADVICE.clone()
    }

    /// 回调是否为共享的空通知实例
    ///
    /// 按实例地址判断，名称相同的其他通知不算
    pub fn is_no_op(callback: &Callback) -> bool {
        Arc::as_ptr(callback).cast::<()>() == Arc::as_ptr(&*NO_OP_ADVICE).cast::<()>()
    }
}

impl Advice for NoOpAdvice {
    fn name(&self) -> &str {
        "NoOpAdvice"
    }

    fn invoke(
        &self,
        _join_point: &JoinPoint<'_>,
        proceed: &mut dyn FnMut() -> AdviceResult,
    ) -> AdviceResult {
        proceed()
    }
}

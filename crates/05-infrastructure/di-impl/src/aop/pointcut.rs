//! 内置切点

use di_abstractions::{Pointcut, Target};
use ioc_common::{Annotation, MethodInfo};

/// 匹配时的分数
pub const MATCHED: i32 = 1;
/// 不匹配时的分数
pub const NOT_MATCHED: i32 = 0;

/// 按方法名匹配的切点
///
/// 模式为精确的方法名，或以 `*` 结尾的前缀，例如 `find*`。单独的 `*` 匹配所有方法
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodNamePointcut {
    pattern: String,
}

impl MethodNamePointcut {
    /// 创建切点
    pub fn new(pattern: impl Into<String>) -> Self {
        Self {
            pattern: pattern.into(),
        }
    }

    fn is_match(&self, name: &str) -> bool {
        match self.pattern.strip_suffix('*') {
            Some(prefix) => name.starts_with(prefix),
            None => name == self.pattern,
        }
    }
}

impl Pointcut for MethodNamePointcut {
    fn matches(&self, method: &MethodInfo, _target: &Target) -> i32 {
        if self.is_match(&method.name) {
            MATCHED
        } else {
            NOT_MATCHED
        }
    }
}

/// 按方法注解匹配的切点
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnnotationPointcut {
    annotation: Annotation,
}

impl AnnotationPointcut {
    /// 创建切点
    pub fn new(annotation: Annotation) -> Self {
        Self { annotation }
    }
}

impl Pointcut for AnnotationPointcut {
    fn matches(&self, method: &MethodInfo, _target: &Target) -> i32 {
        if method.has_annotation(&self.annotation) {
            MATCHED
        } else {
            NOT_MATCHED
        }
    }
}

//! 组件定义解析器抽象接口
//!
//! 在注册阶段为每个类型决定注入策略

use crate::definition::BeanDefinition;
use ioc_common::{Bean, BeanClass, DependencyError};
use std::sync::Arc;

/// 组件定义解析器 trait
pub trait BeanDefinitionResolver: Send + Sync {
    /// 解析类型描述，生成组件定义
    fn resolve(&self, class: &BeanClass) -> Result<Arc<dyn BeanDefinition>, DependencyError>;

    /// 解析自描述组件
    fn resolve_bean<T: Bean>(&self) -> Result<Arc<dyn BeanDefinition>, DependencyError>
    where
        Self: Sized,
    {
        self.resolve(&T::bean_class())
    }
}

//! 组件基础接口定义
//!
//! 提供组件自描述和工厂组件能力

use crate::errors::DependencyError;
use crate::metadata::{BeanClass, TypeInfo};
use std::any::{Any, TypeId};
use std::sync::Arc;

/// 自描述组件 trait
///
/// 组件通过此 trait 声明自身的构造器、方法和字段，供定义解析使用
pub trait Bean: 'static {
    /// 组件的类型描述
    fn bean_class() -> BeanClass;
}

/// 工厂组件 trait
///
/// 实例化过程委托给用户定义工厂的组件。类型描述上通过
/// `BeanClass::implementing::<dyn FactoryBean>()` 声明此能力
pub trait FactoryBean: Send + Sync {
    /// 工厂产出的对象类型
    fn object_type(&self) -> TypeInfo;

    /// 创建对象
    fn create_object(&self) -> Result<Arc<dyn Any + Send + Sync>, DependencyError>;

    /// 产出的对象是否为单例
    fn is_singleton(&self) -> bool {
        true
    }
}

/// 类型描述是否声明了工厂组件能力
pub fn is_factory_bean(class: &BeanClass) -> bool {
    class.implements(TypeId::of::<dyn FactoryBean>())
}

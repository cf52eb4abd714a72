//! 注入元数据提供者抽象接口
//!
//! 负责从类型描述中找出被标记为注入点的构造器、方法和字段

use ioc_common::{BeanClass, ConstructorInfo, FieldInfo, MethodInfo};

/// 注入元数据提供者 trait
pub trait InjectionMetadataProvider: Send + Sync {
    /// 被标记为注入的构造器
    fn injected_constructor(&self, class: &BeanClass) -> Option<ConstructorInfo>;

    /// 被标记为注入的方法
    fn injected_methods(&self, class: &BeanClass) -> Vec<MethodInfo>;

    /// 被标记为注入的字段
    fn injected_fields(&self, class: &BeanClass) -> Vec<FieldInfo>;
}

impl<P: InjectionMetadataProvider + ?Sized> InjectionMetadataProvider for Box<P> {
    fn injected_constructor(&self, class: &BeanClass) -> Option<ConstructorInfo> {
        (**self).injected_constructor(class)
    }

    fn injected_methods(&self, class: &BeanClass) -> Vec<MethodInfo> {
        (**self).injected_methods(class)
    }

    fn injected_fields(&self, class: &BeanClass) -> Vec<FieldInfo> {
        (**self).injected_fields(class)
    }
}

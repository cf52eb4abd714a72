//! 组件定义抽象接口
//!
//! 描述一个组件类型应当如何被构造和注入

use ioc_common::{BeanClass, ConstructorInfo, FieldInfo, MethodInfo};
use std::collections::HashSet;
use std::fmt::Debug;

/// 注入方式
///
/// 优先级从高到低：方法 > 构造器 > 字段 > 无
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InjectType {
    /// 方法注入
    InjectMethod,
    /// 构造器注入
    InjectConstructor,
    /// 字段注入
    InjectField,
    /// 无需注入
    InjectNo,
}

/// 组件定义 trait
///
/// 每个注册的类型对应一个不可变的组件定义
pub trait BeanDefinition: Send + Sync + Debug {
    /// 组件类型描述
    fn bean_class(&self) -> &BeanClass;

    /// 选定的注入构造器
    fn inject_constructor(&self) -> Option<&ConstructorInfo>;

    /// 选定的注入字段，存在注入构造器时总为空
    fn inject_fields(&self) -> &HashSet<FieldInfo>;

    /// 注入方法
    fn method(&self) -> Option<&MethodInfo>;

    /// 是否为工厂组件
    fn is_factory_bean_type(&self) -> bool;

    /// 解析后的注入方式
    fn resolved_inject_mode(&self) -> InjectType {
        if self.method().is_some() {
            return InjectType::InjectMethod;
        }

        if self.inject_constructor().is_some() {
            return InjectType::InjectConstructor;
        }

        if !self.inject_fields().is_empty() {
            return InjectType::InjectField;
        }

        InjectType::InjectNo
    }
}

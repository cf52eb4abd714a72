//! 元数据定义
//!
//! 提供类型、字段、方法和构造器的描述信息。Rust 没有运行时反射，
//! 组件通过 [`BeanClass`] 显式声明自身的注入点。

use std::any::TypeId;
use std::borrow::Cow;
use std::collections::HashSet;
use std::fmt;
use std::hash::{Hash, Hasher};

/// 类型信息
#[derive(Debug, Clone)]
pub struct TypeInfo {
    /// 类型名称
    pub name: String,
    /// 类型ID
    pub id: TypeId,
    /// 模块路径
    pub module_path: String,
}

impl TypeInfo {
    /// 从类型获取类型信息
    pub fn of<T: ?Sized + 'static>() -> Self {
        let full_name = std::any::type_name::<T>();
        Self {
            name: short_type_name(full_name).to_string(),
            id: TypeId::of::<T>(),
            module_path: full_name.to_string(),
        }
    }

    /// 获取简短的类型名称（不包含模块路径和泛型参数）
    pub fn short_name(&self) -> &str {
        short_type_name(&self.name)
    }
}

/// 去掉泛型参数后取路径的最后一段，`alloc::vec::Vec<m::Bar>` 得到 `Vec`
fn short_type_name(full_name: &str) -> &str {
    let base = full_name.split('<').next().unwrap_or(full_name);
    base.rsplit("::").next().unwrap_or(base)
}

// 类型相等只看 TypeId，名称只用于展示
impl PartialEq for TypeInfo {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for TypeInfo {}

impl Hash for TypeInfo {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Display for TypeInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.module_path)
    }
}

/// 注解标记
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Annotation(Cow<'static, str>);

impl Annotation {
    /// 注入标记
    pub const INJECT: Annotation = Annotation(Cow::Borrowed("Inject"));

    /// 创建注解
    pub fn new(name: impl Into<Cow<'static, str>>) -> Self {
        Self(name.into())
    }

    /// 注解名称
    pub fn name(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Annotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "@{}", self.0)
    }
}

/// 字段信息
///
/// 字段以 (声明类型, 字段名) 作为身份。
#[derive(Debug, Clone)]
pub struct FieldInfo {
    /// 字段名
    pub name: String,
    /// 字段声明类型
    pub field_type: TypeInfo,
    /// 声明该字段的类型，由 [`BeanClass::with_field`] 填充
    pub declaring_type: Option<TypeId>,
    /// 字段上的注解
    pub annotations: Vec<Annotation>,
}

impl FieldInfo {
    /// 创建字段信息
    pub fn new(name: impl Into<String>, field_type: TypeInfo) -> Self {
        Self {
            name: name.into(),
            field_type,
            declaring_type: None,
            annotations: Vec::new(),
        }
    }

    /// 创建指定类型的字段信息
    pub fn of<T: ?Sized + 'static>(name: impl Into<String>) -> Self {
        Self::new(name, TypeInfo::of::<T>())
    }

    /// 添加注解
    pub fn annotated(mut self, annotation: Annotation) -> Self {
        self.annotations.push(annotation);
        self
    }

    /// 是否带有指定注解
    pub fn has_annotation(&self, annotation: &Annotation) -> bool {
        self.annotations.contains(annotation)
    }
}

impl PartialEq for FieldInfo {
    fn eq(&self, other: &Self) -> bool {
        self.declaring_type == other.declaring_type && self.name == other.name
    }
}

impl Eq for FieldInfo {}

impl Hash for FieldInfo {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.declaring_type.hash(state);
        self.name.hash(state);
    }
}

/// 方法信息
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MethodInfo {
    /// 方法名
    pub name: String,
    /// 参数类型列表
    pub parameter_types: Vec<TypeInfo>,
    /// 方法上的注解
    pub annotations: Vec<Annotation>,
}

impl MethodInfo {
    /// 创建方法信息
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            parameter_types: Vec::new(),
            annotations: Vec::new(),
        }
    }

    /// 追加参数类型
    pub fn with_parameter(mut self, parameter_type: TypeInfo) -> Self {
        self.parameter_types.push(parameter_type);
        self
    }

    /// 添加注解
    pub fn annotated(mut self, annotation: Annotation) -> Self {
        self.annotations.push(annotation);
        self
    }

    /// 参数个数
    pub fn parameter_count(&self) -> usize {
        self.parameter_types.len()
    }

    /// 是否带有指定注解
    pub fn has_annotation(&self, annotation: &Annotation) -> bool {
        self.annotations.contains(annotation)
    }
}

/// 构造器信息
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct ConstructorInfo {
    /// 参数类型列表
    pub parameter_types: Vec<TypeInfo>,
    /// 构造器上的注解
    pub annotations: Vec<Annotation>,
}

impl ConstructorInfo {
    /// 创建无参构造器
    pub fn new() -> Self {
        Self::default()
    }

    /// 追加参数类型
    pub fn with_parameter(mut self, parameter_type: TypeInfo) -> Self {
        self.parameter_types.push(parameter_type);
        self
    }

    /// 添加注解
    pub fn annotated(mut self, annotation: Annotation) -> Self {
        self.annotations.push(annotation);
        self
    }

    /// 是否带有指定注解
    pub fn has_annotation(&self, annotation: &Annotation) -> bool {
        self.annotations.contains(annotation)
    }
}

/// 组件类型描述
///
/// 相当于一份类型的反射快照：声明的构造器、方法、字段以及实现的能力标记。
#[derive(Debug, Clone)]
pub struct BeanClass {
    /// 类型信息
    pub type_info: TypeInfo,
    /// 声明的构造器
    pub constructors: Vec<ConstructorInfo>,
    /// 声明的方法
    pub methods: Vec<MethodInfo>,
    /// 声明的字段
    pub fields: Vec<FieldInfo>,
    capabilities: HashSet<TypeId>,
}

impl BeanClass {
    /// 创建类型描述
    pub fn new(type_info: TypeInfo) -> Self {
        Self {
            type_info,
            constructors: Vec::new(),
            methods: Vec::new(),
            fields: Vec::new(),
            capabilities: HashSet::new(),
        }
    }

    /// 从类型创建类型描述
    pub fn of<T: 'static>() -> Self {
        Self::new(TypeInfo::of::<T>())
    }

    /// 声明构造器
    pub fn with_constructor(mut self, constructor: ConstructorInfo) -> Self {
        self.constructors.push(constructor);
        self
    }

    /// 声明方法
    pub fn with_method(mut self, method: MethodInfo) -> Self {
        self.methods.push(method);
        self
    }

    /// 声明字段，字段的声明类型被设置为当前类型
    pub fn with_field(mut self, mut field: FieldInfo) -> Self {
        field.declaring_type = Some(self.type_info.id);
        self.fields.push(field);
        self
    }

    /// 声明实现了某个能力（通常是 `dyn Trait`）
    pub fn implementing<C: ?Sized + 'static>(mut self) -> Self {
        self.capabilities.insert(TypeId::of::<C>());
        self
    }

    /// 是否实现了指定能力
    pub fn implements(&self, capability: TypeId) -> bool {
        self.capabilities.contains(&capability)
    }

    /// 类型名称
    pub fn name(&self) -> &str {
        &self.type_info.module_path
    }
}

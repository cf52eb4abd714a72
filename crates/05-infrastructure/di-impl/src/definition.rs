//! 默认组件定义及其解析器

use crate::provider::AnnotationMetadataProvider;
use di_abstractions::{BeanDefinition, BeanDefinitionResolver, InjectionMetadataProvider};
use ioc_common::{
    is_factory_bean, BeanClass, ConstructorInfo, DependencyError, FieldInfo, MethodInfo, TypeInfo,
};
use std::collections::HashSet;
use std::sync::Arc;
use tracing::{debug, warn};

/// 默认组件定义
///
/// 构造器注入与字段注入互斥：选定了注入构造器时字段集合总为空
#[derive(Debug, Clone)]
pub struct DefaultBeanDefinition {
    bean_class: BeanClass,
    inject_constructor: Option<ConstructorInfo>,
    inject_fields: HashSet<FieldInfo>,
}

impl DefaultBeanDefinition {
    /// 使用默认的注解提供者解析类型描述
    pub fn new(class: BeanClass) -> Result<Self, DependencyError> {
        Self::with_provider(class, &AnnotationMetadataProvider::default())
    }

    /// 使用指定的元数据提供者解析类型描述
    pub fn with_provider<P>(class: BeanClass, provider: &P) -> Result<Self, DependencyError>
    where
        P: InjectionMetadataProvider + ?Sized,
    {
        let inject_constructor = provider.injected_constructor(&class);
        let inject_fields = match inject_constructor {
            Some(_) => HashSet::new(),
            None => Self::resolve_inject_fields(&class, provider)?,
        };

        Ok(Self {
            bean_class: class,
            inject_constructor,
            inject_fields,
        })
    }

    fn resolve_inject_fields<P>(
        class: &BeanClass,
        provider: &P,
    ) -> Result<HashSet<FieldInfo>, DependencyError>
    where
        P: InjectionMetadataProvider + ?Sized,
    {
        let inject_types = Self::resolve_inject_types(class, provider)?;

        // 任何声明类型属于可注入类型的字段都会被选中，不论其自身是否带有标记
        Ok(class
            .fields
            .iter()
            .filter(|field| inject_types.contains(&field.field_type))
            .cloned()
            .collect())
    }

    fn resolve_inject_types<P>(
        class: &BeanClass,
        provider: &P,
    ) -> Result<HashSet<TypeInfo>, DependencyError>
    where
        P: InjectionMetadataProvider + ?Sized,
    {
        let mut inject_types = HashSet::new();

        for method in provider.injected_methods(class) {
            let [parameter] = method.parameter_types.as_slice() else {
                warn!(
                    "注入方法参数个数不合法: {}.{} ({} 个参数)",
                    class.name(),
                    method.name,
                    method.parameter_count()
                );
                return Err(DependencyError::invalid_configuration(
                    class.name(),
                    format!(
                        "注入方法 {} 的参数必须只有一个, 实际为 {} 个",
                        method.name,
                        method.parameter_count()
                    ),
                ));
            };
            inject_types.insert(parameter.clone());
        }

        for field in provider.injected_fields(class) {
            inject_types.insert(field.field_type);
        }

        Ok(inject_types)
    }
}

impl BeanDefinition for DefaultBeanDefinition {
    fn bean_class(&self) -> &BeanClass {
        &self.bean_class
    }

    fn inject_constructor(&self) -> Option<&ConstructorInfo> {
        self.inject_constructor.as_ref()
    }

    fn inject_fields(&self) -> &HashSet<FieldInfo> {
        &self.inject_fields
    }

    fn method(&self) -> Option<&MethodInfo> {
        // 方法注入尚未支持
        None
    }

    fn is_factory_bean_type(&self) -> bool {
        is_factory_bean(&self.bean_class)
    }
}

/// 默认组件定义解析器
#[derive(Debug, Clone, Default)]
pub struct DefaultBeanDefinitionResolver<P = AnnotationMetadataProvider> {
    provider: P,
}

impl<P: InjectionMetadataProvider> DefaultBeanDefinitionResolver<P> {
    /// 使用指定的元数据提供者创建解析器
    pub fn new(provider: P) -> Self {
        Self { provider }
    }

    /// 元数据提供者
    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// 元数据提供者（可变）
    pub fn provider_mut(&mut self) -> &mut P {
        &mut self.provider
    }

    /// 解析为具体的组件定义类型
    pub fn resolve_definition(&self, class: &BeanClass) -> Result<DefaultBeanDefinition, DependencyError> {
        let definition = DefaultBeanDefinition::with_provider(class.clone(), &self.provider)?;
        debug!(
            "解析组件定义: {} -> {:?} (字段 {} 个, 工厂组件: {})",
            class.name(),
            definition.resolved_inject_mode(),
            definition.inject_fields().len(),
            definition.is_factory_bean_type()
        );
        Ok(definition)
    }
}

impl<P: InjectionMetadataProvider> BeanDefinitionResolver for DefaultBeanDefinitionResolver<P> {
    fn resolve(&self, class: &BeanClass) -> Result<Arc<dyn BeanDefinition>, DependencyError> {
        Ok(Arc::new(self.resolve_definition(class)?))
    }
}

//! 基于注解的注入元数据提供者

use crate::settings::{DefinitionSettings, DEFINITION_SETTINGS_PATH};
use di_abstractions::InjectionMetadataProvider;
use ioc_common::{
    Annotation, BeanClass, ConfigError, Configurable, ConstructorInfo, FieldInfo, MethodInfo,
};

/// 基于注解的注入元数据提供者
///
/// 带有任一注入标记注解的构造器、方法和字段被视为注入点
#[derive(Debug, Clone)]
pub struct AnnotationMetadataProvider {
    annotations: Vec<Annotation>,
}

impl AnnotationMetadataProvider {
    /// 使用默认的 `Inject` 注解创建
    pub fn new() -> Self {
        Self {
            annotations: vec![Annotation::INJECT],
        }
    }

    /// 使用指定注解创建
    pub fn with_annotations(annotations: Vec<Annotation>) -> Self {
        Self { annotations }
    }

    /// 当前的注入标记注解
    pub fn annotations(&self) -> &[Annotation] {
        &self.annotations
    }

    fn is_marked(&self, annotations: &[Annotation]) -> bool {
        annotations.iter().any(|a| self.annotations.contains(a))
    }
}

impl Default for AnnotationMetadataProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl InjectionMetadataProvider for AnnotationMetadataProvider {
    fn injected_constructor(&self, class: &BeanClass) -> Option<ConstructorInfo> {
        // 多个标记构造器的校验由上游负责，这里取第一个
        class
            .constructors
            .iter()
            .find(|c| self.is_marked(&c.annotations))
            .cloned()
    }

    fn injected_methods(&self, class: &BeanClass) -> Vec<MethodInfo> {
        class
            .methods
            .iter()
            .filter(|m| self.is_marked(&m.annotations))
            .cloned()
            .collect()
    }

    fn injected_fields(&self, class: &BeanClass) -> Vec<FieldInfo> {
        class
            .fields
            .iter()
            .filter(|f| self.is_marked(&f.annotations))
            .cloned()
            .collect()
    }
}

impl Configurable for AnnotationMetadataProvider {
    type Config = DefinitionSettings;

    fn configure(&mut self, config: Self::Config) -> Result<(), ConfigError> {
        config.validate()?;
        self.annotations = config.annotations();
        Ok(())
    }

    fn get_config_path() -> &'static str {
        DEFINITION_SETTINGS_PATH
    }
}

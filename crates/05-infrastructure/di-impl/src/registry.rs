//! 组件定义注册表
//!
//! 容器在注册阶段对每个类型解析一次定义，之后的实例化直接使用缓存的结果

use crate::definition::DefaultBeanDefinitionResolver;
use crate::provider::AnnotationMetadataProvider;
use crate::settings::{DefinitionSettings, DEFINITION_SETTINGS_PATH};
use dashmap::DashMap;
use di_abstractions::{BeanDefinition, BeanDefinitionResolver, InjectionMetadataProvider};
use ioc_common::{Bean, BeanClass, ConfigError, Configurable, DependencyError};
use std::any::TypeId;
use std::sync::Arc;
use tracing::info;

/// 组件定义注册表
pub struct BeanDefinitionRegistry<P = AnnotationMetadataProvider> {
    resolver: DefaultBeanDefinitionResolver<P>,
    definitions: DashMap<TypeId, Arc<dyn BeanDefinition>>,
    settings: DefinitionSettings,
}

impl BeanDefinitionRegistry<AnnotationMetadataProvider> {
    /// 使用默认配置创建注册表
    pub fn new() -> Self {
        Self::with_provider(AnnotationMetadataProvider::default())
    }

    /// 根据配置创建注册表
    pub fn from_settings(settings: DefinitionSettings) -> Result<Self, ConfigError> {
        let mut registry = Self::new();
        registry.configure(settings)?;
        Ok(registry)
    }
}

impl Default for BeanDefinitionRegistry<AnnotationMetadataProvider> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: InjectionMetadataProvider> BeanDefinitionRegistry<P> {
    /// 使用指定的元数据提供者创建注册表
    pub fn with_provider(provider: P) -> Self {
        Self {
            resolver: DefaultBeanDefinitionResolver::new(provider),
            definitions: DashMap::new(),
            settings: DefinitionSettings::default(),
        }
    }

    /// 当前配置
    pub fn settings(&self) -> &DefinitionSettings {
        &self.settings
    }

    /// 注册类型，返回其组件定义
    ///
    /// 启用缓存时，同一类型的重复注册（包括并发注册）只解析一次，
    /// 之后直接返回已解析的定义
    pub fn register(&self, class: &BeanClass) -> Result<Arc<dyn BeanDefinition>, DependencyError> {
        let type_id = class.type_info.id;
        if !self.settings.cache_definitions {
            let definition = self.resolve_logged(class)?;
            self.definitions.insert(type_id, definition.clone());
            return Ok(definition);
        }

        // 解析期间持有分片写锁，并发注册同一类型时只有一个线程执行解析
        let entry = self
            .definitions
            .entry(type_id)
            .or_try_insert_with(|| self.resolve_logged(class))?;
        Ok(entry.value().clone())
    }

    fn resolve_logged(&self, class: &BeanClass) -> Result<Arc<dyn BeanDefinition>, DependencyError> {
        let definition = self.resolver.resolve(class)?;
        info!(
            "注册组件定义: {} ({:?})",
            class.name(),
            definition.resolved_inject_mode()
        );
        Ok(definition)
    }

    /// 注册自描述组件
    pub fn register_bean<T: Bean>(&self) -> Result<Arc<dyn BeanDefinition>, DependencyError> {
        self.register(&T::bean_class())
    }

    /// 按类型获取组件定义
    pub fn get(&self, type_id: TypeId) -> Option<Arc<dyn BeanDefinition>> {
        self.definitions.get(&type_id).map(|entry| entry.value().clone())
    }

    /// 按类型获取组件定义，未注册时返回错误
    pub fn get_required<T: 'static>(&self) -> Result<Arc<dyn BeanDefinition>, DependencyError> {
        self.get(TypeId::of::<T>())
            .ok_or_else(|| DependencyError::ComponentNotRegistered {
                type_name: std::any::type_name::<T>().to_string(),
            })
    }

    /// 按类型名称获取组件定义，完整路径或简短名称均可
    pub fn get_by_name(&self, name: &str) -> Option<Arc<dyn BeanDefinition>> {
        self.definitions
            .iter()
            .find(|entry| {
                let type_info = &entry.value().bean_class().type_info;
                type_info.module_path == name || type_info.short_name() == name
            })
            .map(|entry| entry.value().clone())
    }

    /// 是否已注册
    pub fn contains(&self, type_id: TypeId) -> bool {
        self.definitions.contains_key(&type_id)
    }

    /// 所有已注册的组件定义
    pub fn definitions(&self) -> Vec<Arc<dyn BeanDefinition>> {
        self.definitions
            .iter()
            .map(|entry| entry.value().clone())
            .collect()
    }

    /// 已注册数量
    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    /// 是否为空
    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }

    /// 清空注册表
    pub fn clear(&self) {
        self.definitions.clear();
        info!("组件定义注册表已清空");
    }
}

impl Configurable for BeanDefinitionRegistry<AnnotationMetadataProvider> {
    type Config = DefinitionSettings;

    fn configure(&mut self, config: Self::Config) -> Result<(), ConfigError> {
        self.resolver.provider_mut().configure(config.clone())?;
        self.settings = config;
        // 注解变化后旧的解析结果不再可信
        self.definitions.clear();
        Ok(())
    }

    fn get_config_path() -> &'static str {
        DEFINITION_SETTINGS_PATH
    }
}

impl<P> std::fmt::Debug for BeanDefinitionRegistry<P> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BeanDefinitionRegistry")
            .field("definitions", &self.definitions.len())
            .field("settings", &self.settings)
            .finish()
    }
}

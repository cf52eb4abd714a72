//! 组件定义相关配置

use ioc_common::{Annotation, ConfigError, ConfigSection};
use serde::{Deserialize, Serialize};

/// 组件定义配置路径
pub const DEFINITION_SETTINGS_PATH: &str = "beans.definitions";

/// 组件定义配置
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DefinitionSettings {
    /// 视为注入标记的注解名称
    pub inject_annotations: Vec<String>,
    /// 是否缓存已解析的组件定义
    pub cache_definitions: bool,
}

impl Default for DefinitionSettings {
    fn default() -> Self {
        Self {
            inject_annotations: vec![Annotation::INJECT.name().to_string()],
            cache_definitions: true,
        }
    }
}

impl DefinitionSettings {
    /// 从根配置节中读取 `beans.definitions`
    pub fn from_section(root: &ConfigSection) -> Result<Self, ConfigError> {
        let settings: Self = root.section(DEFINITION_SETTINGS_PATH)?.bind()?;
        settings.validate()?;
        Ok(settings)
    }

    /// 校验配置
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.inject_annotations.is_empty() {
            return Err(ConfigError::validation("inject_annotations 不能为空"));
        }
        if self.inject_annotations.iter().any(|name| name.trim().is_empty()) {
            return Err(ConfigError::validation("inject_annotations 不能包含空名称"));
        }
        Ok(())
    }

    /// 注入标记注解列表
    pub fn annotations(&self) -> Vec<Annotation> {
        self.inject_annotations
            .iter()
            .map(|name| Annotation::new(name.trim().to_string()))
            .collect()
    }
}

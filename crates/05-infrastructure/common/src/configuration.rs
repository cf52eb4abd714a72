//! 配置相关的基础接口定义

use crate::errors::ConfigError;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

/// 可配置组件 trait
///
/// 需要配置的组件必须实现此 trait
pub trait Configurable: Send + Sync {
    /// 配置类型
    type Config: for<'de> Deserialize<'de> + Serialize + Clone + Send + Sync + 'static;

    /// 应用配置
    fn configure(&mut self, config: Self::Config) -> Result<(), ConfigError>;

    /// 获取配置路径
    fn get_config_path() -> &'static str;
}

/// 配置节
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConfigSection {
    /// 配置数据
    pub data: HashMap<String, serde_json::Value>,
}

impl ConfigSection {
    /// 创建新的配置节
    pub fn new() -> Self {
        Self::default()
    }

    /// 从 JSON 文件加载配置节
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }

    /// 从 JSON 字符串加载配置节
    pub fn from_json_str(content: &str) -> Result<Self, ConfigError> {
        let data = serde_json::from_str(content)?;
        Ok(Self { data })
    }

    /// 插入配置项
    pub fn insert(&mut self, key: impl Into<String>, value: serde_json::Value) {
        self.data.insert(key.into(), value);
    }

    /// 获取子配置节
    ///
    /// 路径以 `.` 分隔，例如 `beans.definitions`。路径不存在时返回空配置节
    pub fn section(&self, path: &str) -> Result<Self, ConfigError> {
        let mut segments = path.split('.');
        let Some(first) = segments.next() else {
            return Ok(self.clone());
        };

        let mut current = match self.data.get(first) {
            Some(value) => value,
            None => return Ok(Self::new()),
        };
        for segment in segments {
            match current.get(segment) {
                Some(value) => current = value,
                None => return Ok(Self::new()),
            }
        }

        let data = serde_json::from_value(current.clone())?;
        Ok(Self { data })
    }

    /// 绑定到具体类型
    pub fn bind<T>(&self) -> Result<T, ConfigError>
    where
        T: for<'de> Deserialize<'de>,
    {
        let value = serde_json::Value::Object(
            self.data
                .iter()
                .map(|(k, v)| (k.clone(), v.clone()))
                .collect(),
        );

        serde_json::from_value(value).map_err(|e| ConfigError::SerializationError { source: e })
    }
}

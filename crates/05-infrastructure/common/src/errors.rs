//! 错误类型定义

use thiserror::Error;

/// 配置错误类型
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("配置文件读取失败: {source}")]
    FileReadError {
        #[from]
        source: std::io::Error,
    },

    #[error("配置序列化失败: {source}")]
    SerializationError {
        #[from]
        source: serde_json::Error,
    },

    #[error("配置验证失败: {message}")]
    ValidationError { message: String },
}

impl ConfigError {
    /// 创建验证错误
    pub fn validation(message: impl Into<String>) -> Self {
        Self::ValidationError {
            message: message.into(),
        }
    }
}

/// 依赖注入错误类型
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DependencyError {
    /// 注入点声明不合法，例如注入方法的参数个数不为一
    #[error("注入配置无效: {type_name}, 原因: {message}")]
    InvalidConfiguration { type_name: String, message: String },

    #[error("组件未注册: {type_name}")]
    ComponentNotRegistered { type_name: String },
}

impl DependencyError {
    /// 创建注入配置无效错误
    pub fn invalid_configuration(type_name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidConfiguration {
            type_name: type_name.into(),
            message: message.into(),
        }
    }
}

/// 切面执行错误类型
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AopError {
    #[error("通知执行失败: {advice}, 原因: {message}")]
    AdviceFailed { advice: String, message: String },

    #[error("目标方法调用失败: {method}, 原因: {message}")]
    ProceedFailed { method: String, message: String },
}

//! 错误类型定义

use thiserror::Error;

/// 工厂函数返回的装箱错误
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// 配置错误类型
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("配置文件不存在: {path}")]
    FileNotFound { path: String },

    #[error("配置解析失败: {source}")]
    ParseError {
        #[from]
        source: config::ConfigError,
    },

    #[error("配置验证失败: {message}")]
    ValidationError { message: String },
}

/// 依赖注入错误类型
///
/// 容器初始化过程中出现的任何一个错误都会中止整个初始化。
#[derive(Error, Debug)]
pub enum DependencyError {
    #[error("构造函数选择不明确: {type_name}, 原因: {reason}")]
    AmbiguousConstructor { type_name: String, reason: String },

    #[error("没有满足依赖 {name} 的 Bean")]
    NoSuchBean { name: String },

    #[error("依赖 {name} 存在过多可用的 Bean: {candidates:?}")]
    AmbiguousDependency {
        name: String,
        candidates: Vec<String>,
    },

    #[error("组件创建失败: {type_name}, 原因: {source}")]
    ComponentCreationFailed { type_name: String, source: BoxError },

    #[error("初始化完整性校验失败, 未创建的组件: {remaining:?}")]
    IntegrityFailure { remaining: Vec<String> },

    #[error("循环依赖检测到: {dependency_chain}")]
    CircularDependency { dependency_chain: String },

    #[error("Bean 名称重复: {name}")]
    DuplicateBean { name: String },

    #[error("依赖解析失败: {type_name}, 原因: {message}")]
    DependencyResolutionFailed { type_name: String, message: String },

    #[error("组件扫描失败: {source}")]
    ScanFailed {
        #[from]
        source: ComponentError,
    },
}

impl DependencyError {
    /// 创建构造函数不明确错误
    pub fn ambiguous_constructor(type_name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::AmbiguousConstructor {
            type_name: type_name.into(),
            reason: reason.into(),
        }
    }

    /// 创建组件创建失败错误
    pub fn creation_failed(type_name: impl Into<String>, source: impl Into<BoxError>) -> Self {
        Self::ComponentCreationFailed {
            type_name: type_name.into(),
            source: source.into(),
        }
    }
}

/// 组件错误类型
#[derive(Error, Debug)]
pub enum ComponentError {
    #[error("组件扫描失败: {message}")]
    ScanError { message: String },

    #[error("不支持的扫描目标: {target}")]
    UnsupportedTarget { target: String },
}

impl ComponentError {
    /// 创建扫描错误
    pub fn scan_error(message: impl Into<String>) -> Self {
        Self::ScanError {
            message: message.into(),
        }
    }
}

/// 配置结果类型别名
pub type ConfigResult<T> = Result<T, ConfigError>;
/// 依赖注入结果类型别名
pub type DependencyResult<T> = Result<T, DependencyError>;

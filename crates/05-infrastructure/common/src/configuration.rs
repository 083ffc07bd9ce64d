//! 容器配置
//!
//! 配置来源按优先级从低到高：默认值、TOML 文件、`DI__` 前缀的环境变量。

use crate::errors::{ConfigError, ConfigResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::str::FromStr;
use tracing::debug;

/// 默认配置文件（不含扩展名）
pub const DEFAULT_CONFIG_FILE: &str = "config/container";

/// 默认环境变量前缀
pub const DEFAULT_ENV_PREFIX: &str = "DI";

/// 剩余组件的排序策略
///
/// 命令行、配置文件和环境变量都按 [`FromStr`] 解析，不区分大小写。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum OrderingStrategy {
    /// 两两比较的排序，只考虑直接依赖
    Comparator,
    /// 基于依赖图的拓扑排序，带循环依赖检测
    #[default]
    Topological,
}

impl fmt::Display for OrderingStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Comparator => f.write_str("comparator"),
            Self::Topological => f.write_str("topological"),
        }
    }
}

impl FromStr for OrderingStrategy {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "comparator" => Ok(Self::Comparator),
            "topological" => Ok(Self::Topological),
            _ => Err(ConfigError::ValidationError {
                message: format!("未知的排序策略: {s}"),
            }),
        }
    }
}

impl TryFrom<String> for OrderingStrategy {
    type Error = ConfigError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// 容器配置
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContainerConfig {
    /// 第二轮创建使用的排序策略
    pub ordering: OrderingStrategy,
    /// 扫描根（模块路径前缀）
    pub scan_targets: Vec<String>,
}

impl ContainerConfig {
    /// 从默认位置加载配置，文件不存在时只使用默认值和环境变量
    pub fn load() -> ConfigResult<Self> {
        Self::load_from(None, DEFAULT_ENV_PREFIX)
    }

    /// 从指定文件和环境变量前缀加载配置
    ///
    /// 显式指定的文件必须存在。
    pub fn load_from(path: Option<&Path>, env_prefix: &str) -> ConfigResult<Self> {
        let mut builder = config::Config::builder();

        builder = match path {
            Some(path) => {
                if !path.exists() {
                    return Err(ConfigError::FileNotFound {
                        path: path.display().to_string(),
                    });
                }
                debug!("加载容器配置文件: {}", path.display());
                builder.add_source(config::File::from(path))
            }
            None => builder.add_source(config::File::with_name(DEFAULT_CONFIG_FILE).required(false)),
        };

        let settings = builder
            .add_source(
                config::Environment::with_prefix(env_prefix)
                    .separator("__")
                    .list_separator(",")
                    .with_list_parse_key("scan_targets")
                    .try_parsing(true),
            )
            .build()?;

        let config: Self = settings.try_deserialize()?;
        config.validate()?;

        debug!("容器配置加载完成: {:?}", config);
        Ok(config)
    }

    /// 设置排序策略
    pub fn with_ordering(mut self, ordering: OrderingStrategy) -> Self {
        self.ordering = ordering;
        self
    }

    /// 添加扫描根
    pub fn add_scan_target(mut self, target: impl Into<String>) -> Self {
        self.scan_targets.push(target.into());
        self
    }

    /// 验证配置
    pub fn validate(&self) -> ConfigResult<()> {
        if self.scan_targets.iter().any(|target| target.trim().is_empty()) {
            return Err(ConfigError::ValidationError {
                message: "扫描根不能为空".to_string(),
            });
        }
        Ok(())
    }
}

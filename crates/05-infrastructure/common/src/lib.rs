//! # DI Common
//!
//! 这个 crate 提供了 SimpleDI 容器各层共用的基础类型。
//!
//! ## 核心内容
//!
//! - [`TypeKey`] - 类型标识（`TypeId` + 简短类型名）
//! - [`NamingConventions`] - Bean 命名约定
//! - [`ContainerConfig`] - 容器配置
//! - [`DependencyError`] - 容器初始化错误
//!
//! ## 设计原则
//!
//! - 显式注册代替运行时反射
//! - 初始化要么完整成功，要么整体失败
//! - 约定优于配置

pub mod configuration;
pub mod conventions;
pub mod errors;
pub mod metadata;

pub use configuration::*;
pub use conventions::*;
pub use errors::*;
pub use metadata::*;

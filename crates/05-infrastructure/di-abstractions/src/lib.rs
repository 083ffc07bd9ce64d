//! # Dependency Injection Abstractions
//!
//! 依赖注入抽象层，定义组件描述、注册表和容器各环节的接口。
//!
//! ## 核心接口
//!
//! - [`TypeDescriptor`] - 组件类型描述符
//! - [`BeanRegistry`] - 组件注册表
//! - [`ComponentScanner`] - 组件扫描器接口
//! - [`DependencyResolver`] - 依赖解析器接口
//! - [`OrderingPlanner`] - 创建顺序规划接口
//! - [`BeanContainer`] - 容器接口

pub mod container;
pub mod descriptor;
pub mod factory;
pub mod planner;
pub mod registry;
pub mod resolver;
pub mod scanner;

pub use container::*;
pub use descriptor::*;
pub use factory::*;
pub use planner::*;
pub use registry::*;
pub use resolver::*;
pub use scanner::*;

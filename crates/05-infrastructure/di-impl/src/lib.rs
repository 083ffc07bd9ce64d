//! # 依赖注入具体实现
//!
//! 提供构造函数选择、依赖解析、创建顺序规划、Bean 工厂、静态组件扫描器
//! 以及两轮初始化的容器实现。

pub mod container;
pub mod factory;
pub mod planner;
pub mod resolver;
pub mod scanner;
pub mod selector;

pub use container::{DiContainerBuilder, DiContainerImpl};
pub use factory::BeanFactory;
pub use planner::{planner_for, ComparatorOrderingPlanner, TopologicalOrderingPlanner};
pub use resolver::DefaultDependencyResolver;
pub use scanner::StaticComponentScanner;
pub use selector::select_constructor;

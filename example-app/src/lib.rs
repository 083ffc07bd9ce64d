//! # 示例应用程序
//!
//! 演示组件的登记、扫描和两轮装配。组件定义在 [`elements`] 模块下，
//! 默认扫描根为 `example_app::elements`。

pub mod elements;

use di_impl::StaticComponentScanner;

/// 默认扫描根
pub const DEFAULT_SCAN_ROOT: &str = "example_app::elements";

/// 登记示例应用的全部组件
pub fn component_scanner() -> StaticComponentScanner {
    let mut scanner = StaticComponentScanner::new("example-app");
    elements::register(&mut scanner);
    scanner
}

//! 示例组件

pub mod handlers;

use di_abstractions::{Constructor, TypeDescriptor};
use di_impl::StaticComponentScanner;

/// 动物
pub trait Animal: Send + Sync {
    /// 名字
    fn name(&self) -> String;
}

/// 交通工具
pub trait Vehicle: Send + Sync {
    /// 功率
    fn power(&self) -> u64;
}

/// 首选的动物实现
#[derive(Debug, Default)]
pub struct Dog;

impl Animal for Dog {
    fn name(&self) -> String {
        "Rex".to_string()
    }
}

/// 唯一的交通工具实现
#[derive(Debug, Default)]
pub struct Car;

impl Vehicle for Car {
    fn power(&self) -> u64 {
        124
    }
}

pub(crate) fn register(scanner: &mut StaticComponentScanner) {
    scanner.add(
        TypeDescriptor::builder::<Dog>()
            .primary()
            .constructor(Constructor::no_args(|| Dog))
            .provides::<dyn Animal>(|dog| dog),
    );
    scanner.add(
        TypeDescriptor::builder::<Car>()
            .constructor(Constructor::no_args(|| Car))
            .provides::<dyn Vehicle>(|car| car),
    );
    handlers::register(scanner);
}

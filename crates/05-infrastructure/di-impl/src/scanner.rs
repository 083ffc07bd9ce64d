//! 静态组件扫描器
//!
//! 组件在启动时显式登记到扫描器中，扫描时按模块路径前缀筛选，
//! 相当于在指定的包下查找组件。

use di_abstractions::{ComponentScanner, TypeDescriptor};
use di_common::ComponentError;
use tracing::{info, warn};

/// 基于显式登记表的组件扫描器
#[derive(Debug)]
pub struct StaticComponentScanner {
    name: String,
    descriptors: Vec<TypeDescriptor>,
}

impl StaticComponentScanner {
    /// 创建空的扫描器
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            descriptors: Vec::new(),
        }
    }

    /// 登记组件
    pub fn register(mut self, descriptor: impl Into<TypeDescriptor>) -> Self {
        self.add(descriptor);
        self
    }

    /// 登记组件
    pub fn add(&mut self, descriptor: impl Into<TypeDescriptor>) {
        self.descriptors.push(descriptor.into());
    }

    /// 已登记的组件数量
    pub fn len(&self) -> usize {
        self.descriptors.len()
    }

    /// 是否没有登记任何组件
    pub fn is_empty(&self) -> bool {
        self.descriptors.is_empty()
    }

    fn in_scan_root(module_path: &str, root: &str) -> bool {
        module_path == root
            || module_path
                .strip_prefix(root)
                .is_some_and(|rest| rest.starts_with("::"))
    }
}

impl ComponentScanner for StaticComponentScanner {
    fn scan(&self, target: &str) -> Result<Vec<TypeDescriptor>, ComponentError> {
        if !self.supports(target) {
            return Err(ComponentError::UnsupportedTarget {
                target: target.to_string(),
            });
        }

        let root = target.trim();
        info!("扫描组件: {}", root);

        let found: Vec<TypeDescriptor> = self
            .descriptors
            .iter()
            .filter(|descriptor| Self::in_scan_root(descriptor.module_path(), root))
            .cloned()
            .collect();

        for descriptor in &found {
            info!("发现组件: {}", descriptor.type_name());
        }
        if found.is_empty() {
            warn!("扫描根 {} 下没有发现组件", root);
        }

        Ok(found)
    }

    fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use di_abstractions::Constructor;

    mod elements {
        pub struct Dog;

        pub mod handlers {
            pub struct AnimalHandler;
        }
    }

    mod elsewhere {
        pub struct Stranger;
    }

    fn scanner() -> StaticComponentScanner {
        StaticComponentScanner::new("test")
            .register(
                TypeDescriptor::builder::<elements::Dog>()
                    .constructor(Constructor::no_args(|| elements::Dog)),
            )
            .register(
                TypeDescriptor::builder::<elements::handlers::AnimalHandler>()
                    .constructor(Constructor::no_args(|| elements::handlers::AnimalHandler)),
            )
            .register(
                TypeDescriptor::builder::<elsewhere::Stranger>()
                    .constructor(Constructor::no_args(|| elsewhere::Stranger)),
            )
    }

    fn scanned_names(scanner: &StaticComponentScanner, root: &str) -> Vec<String> {
        scanner
            .scan(root)
            .unwrap()
            .iter()
            .map(|descriptor| descriptor.bean_name().to_string())
            .collect()
    }

    #[test]
    fn test_scan_root_includes_nested_modules() {
        let scanner = scanner();
        let root = concat!(module_path!(), "::elements");
        assert_eq!(scanned_names(&scanner, root), vec!["dog", "animalHandler"]);
    }

    #[test]
    fn test_scan_root_is_a_path_prefix() {
        let scanner = scanner();
        let root = concat!(module_path!(), "::elem");
        assert!(scanned_names(&scanner, root).is_empty());
        assert_eq!(scanned_names(&scanner, module_path!()).len(), 3);
    }

    #[test]
    fn test_blank_target_unsupported() {
        let scanner = scanner();
        assert_eq!(scanner.len(), 3);
        assert!(matches!(
            scanner.scan("  "),
            Err(ComponentError::UnsupportedTarget { .. })
        ));
    }
}

//! 依赖解析器实现

use di_abstractions::{BeanInstance, BeanRegistry, DependencyResolver};
use di_common::{DependencyError, DependencyResult, TypeKey};
use tracing::debug;

/// 默认的依赖解析器
///
/// 解析顺序：
/// 1. 按参数类型的约定名称直接查找
/// 2. 在全部已创建的 Bean 中按能力匹配
/// 3. 多个匹配时只保留带首选标记的 Bean，必须恰好剩下一个
#[derive(Debug, Default, Clone, Copy)]
pub struct DefaultDependencyResolver;

impl DefaultDependencyResolver {
    /// 创建解析器
    pub fn new() -> Self {
        Self
    }
}

impl DependencyResolver for DefaultDependencyResolver {
    fn resolve(&self, key: &TypeKey, registry: &BeanRegistry) -> DependencyResult<BeanInstance> {
        let name = key.bean_name();

        if let Some(bean) = registry.get(&name) {
            debug!("按名称解析依赖: {} -> {}", key, bean.name);
            return bean.view(key).ok_or_else(|| {
                DependencyError::creation_failed(
                    key.short_name(),
                    format!(
                        "名称为 {} 的 Bean 类型为 {}, 不能作为 {} 注入",
                        bean.name,
                        bean.type_key.short_name(),
                        key.short_name()
                    ),
                )
            });
        }

        let candidates = registry.find_by_capability(key);
        let selected = match candidates.as_slice() {
            [] => return Err(DependencyError::NoSuchBean { name }),
            [only] => *only,
            _ => {
                let primaries: Vec<_> = candidates.iter().filter(|bean| bean.primary).collect();
                match primaries.as_slice() {
                    [primary] => **primary,
                    _ => {
                        return Err(DependencyError::AmbiguousDependency {
                            name,
                            candidates: candidates.iter().map(|bean| bean.name.clone()).collect(),
                        })
                    }
                }
            }
        };

        debug!("按类型解析依赖: {} -> {}", key, selected.name);
        selected
            .view(key)
            .ok_or_else(|| DependencyError::DependencyResolutionFailed {
                type_name: key.type_name.to_string(),
                message: format!("Bean {} 的视图转换失败", selected.name),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use di_abstractions::{BeanDefinition, Constructor, Dependencies, TypeDescriptor};
    use std::sync::Arc;

    trait Animal: Send + Sync {
        fn name(&self) -> &'static str;
    }

    struct Dog;
    struct Cat;
    struct Rock;

    impl Animal for Dog {
        fn name(&self) -> &'static str {
            "Rex"
        }
    }

    impl Animal for Cat {
        fn name(&self) -> &'static str {
            "Tom"
        }
    }

    fn dog(primary: bool) -> TypeDescriptor {
        let builder = TypeDescriptor::builder::<Dog>()
            .constructor(Constructor::no_args(|| Dog))
            .provides::<dyn Animal>(|dog| dog);
        (if primary { builder.primary() } else { builder }).build()
    }

    fn cat(primary: bool) -> TypeDescriptor {
        let builder = TypeDescriptor::builder::<Cat>()
            .constructor(Constructor::no_args(|| Cat))
            .provides::<dyn Animal>(|cat| cat);
        (if primary { builder.primary() } else { builder }).build()
    }

    fn registry_of(descriptors: &[TypeDescriptor]) -> BeanRegistry {
        let mut registry = BeanRegistry::new();
        for descriptor in descriptors {
            let instance = descriptor.constructors()[0]
                .invoke(&Dependencies::empty())
                .unwrap();
            registry
                .insert(BeanDefinition::new(descriptor, instance))
                .unwrap();
        }
        registry
    }

    fn resolve_animal(registry: &BeanRegistry) -> DependencyResult<Arc<dyn Animal>> {
        DefaultDependencyResolver::new()
            .resolve(&TypeKey::of::<dyn Animal>(), registry)
            .map(|view| view.downcast::<dyn Animal>().unwrap())
    }

    #[test]
    fn test_single_implementation() {
        let registry = registry_of(&[cat(false)]);
        assert_eq!(resolve_animal(&registry).unwrap().name(), "Tom");
    }

    #[test]
    fn test_primary_wins_regardless_of_order() {
        let registry = registry_of(&[dog(true), cat(false)]);
        assert_eq!(resolve_animal(&registry).unwrap().name(), "Rex");

        let registry = registry_of(&[cat(false), dog(true)]);
        assert_eq!(resolve_animal(&registry).unwrap().name(), "Rex");
    }

    #[test]
    fn test_no_primary_is_ambiguous() {
        let registry = registry_of(&[dog(false), cat(false)]);
        match resolve_animal(&registry) {
            Err(DependencyError::AmbiguousDependency { name, candidates }) => {
                assert_eq!(name, "animal");
                assert_eq!(candidates, vec!["dog".to_string(), "cat".to_string()]);
            }
            other => panic!("expected AmbiguousDependency, got {:?}", other.err()),
        }
    }

    #[test]
    fn test_two_primaries_are_ambiguous() {
        let registry = registry_of(&[dog(true), cat(true)]);
        assert!(matches!(
            resolve_animal(&registry),
            Err(DependencyError::AmbiguousDependency { .. })
        ));
    }

    #[test]
    fn test_no_implementation() {
        let rock = TypeDescriptor::builder::<Rock>()
            .constructor(Constructor::no_args(|| Rock))
            .build();
        let registry = registry_of(&[rock]);
        assert!(matches!(
            resolve_animal(&registry),
            Err(DependencyError::NoSuchBean { name }) if name == "animal"
        ));
    }

    #[test]
    fn test_concrete_type_found_by_name() {
        let registry = registry_of(&[dog(false), cat(false)]);
        let view = DefaultDependencyResolver::new()
            .resolve(&TypeKey::of::<Cat>(), &registry)
            .unwrap();
        assert!(view.downcast::<Cat>().is_some());
    }

    #[test]
    fn test_name_hit_with_incompatible_type() {
        // 名为 "cat" 的 Bean 实际是 Dog
        let mut registry = BeanRegistry::new();
        let dog_descriptor = dog(false);
        let instance = dog_descriptor.constructors()[0]
            .invoke(&Dependencies::empty())
            .unwrap();
        let mut bean = BeanDefinition::new(&dog_descriptor, instance);
        bean.name = "cat".to_string();
        registry.insert(bean).unwrap();

        let result = DefaultDependencyResolver::new().resolve(&TypeKey::of::<Cat>(), &registry);
        assert!(matches!(
            result,
            Err(DependencyError::ComponentCreationFailed { .. })
        ));
    }
}

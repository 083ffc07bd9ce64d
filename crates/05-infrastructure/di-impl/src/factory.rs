//! Bean 工厂

use di_abstractions::{
    BeanDefinition, BeanInstance, BeanRegistry, ConstructorDescriptor, Dependencies,
    TypeDescriptor,
};
use di_common::{DependencyError, DependencyResult};
use tracing::info;

/// Bean 工厂
///
/// 调用选定的构造函数并把结果以约定名称写入注册表。
#[derive(Debug, Default, Clone, Copy)]
pub struct BeanFactory;

impl BeanFactory {
    /// 创建 Bean 并注册
    pub fn create_and_register(
        registry: &mut BeanRegistry,
        descriptor: &TypeDescriptor,
        constructor: &ConstructorDescriptor,
        dependencies: Vec<BeanInstance>,
    ) -> DependencyResult<()> {
        if dependencies.len() != constructor.parameters().len() {
            return Err(DependencyError::DependencyResolutionFailed {
                type_name: descriptor.type_name().to_string(),
                message: format!(
                    "构造函数需要 {} 个参数, 实际提供 {} 个",
                    constructor.parameters().len(),
                    dependencies.len()
                ),
            });
        }

        let dependencies = Dependencies::new(constructor.parameters().to_vec(), dependencies);
        let instance = constructor.invoke(&dependencies).map_err(|source| {
            DependencyError::ComponentCreationFailed {
                type_name: descriptor.type_name().to_string(),
                source,
            }
        })?;

        registry.insert(BeanDefinition::new(descriptor, instance))?;
        info!("Bean 创建完成: {}", descriptor.bean_name());
        Ok(())
    }
}

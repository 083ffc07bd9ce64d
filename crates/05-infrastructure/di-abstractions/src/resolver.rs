//! 依赖解析抽象接口

use crate::factory::BeanInstance;
use crate::registry::BeanRegistry;
use di_common::{DependencyResult, TypeKey};

/// 依赖解析器 trait
///
/// 在已创建的 Bean 中为一个参数类型找到唯一的实例。
pub trait DependencyResolver: Send + Sync {
    /// 解析单个参数类型，返回该类型视图下的实例
    fn resolve(&self, key: &TypeKey, registry: &BeanRegistry) -> DependencyResult<BeanInstance>;

    /// 按顺序解析构造函数的全部参数
    fn resolve_all(
        &self,
        parameters: &[TypeKey],
        registry: &BeanRegistry,
    ) -> DependencyResult<Vec<BeanInstance>> {
        parameters
            .iter()
            .map(|key| self.resolve(key, registry))
            .collect()
    }
}

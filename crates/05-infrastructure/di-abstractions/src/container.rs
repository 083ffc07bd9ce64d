//! 依赖注入容器抽象接口

use crate::factory::BeanInstance;
use std::sync::Arc;

/// 依赖注入容器 trait
///
/// 容器在构建完成后只读，对外只暴露按名称获取 Bean 的能力。
pub trait BeanContainer: Send + Sync {
    /// 按名称获取 Bean
    fn get_bean(&self, name: &str) -> Option<BeanInstance>;

    /// 是否包含指定名称的 Bean
    fn contains_bean(&self, name: &str) -> bool {
        self.get_bean(name).is_some()
    }

    /// 所有 Bean 名称，按创建顺序排列
    fn bean_names(&self) -> Vec<String>;

    /// 按名称获取 Bean 并转换为 `T` 的视图
    fn get_bean_as<T>(&self, name: &str) -> Option<Arc<T>>
    where
        T: ?Sized + Send + Sync + 'static,
        Self: Sized;
}

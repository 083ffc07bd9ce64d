//! 创建顺序规划抽象接口

use crate::descriptor::{ConstructorDescriptor, TypeDescriptor};
use di_common::DependencyResult;

/// 待创建的组件及其已选定的构造函数
#[derive(Debug, Clone, Copy)]
pub struct PendingComponent<'a> {
    /// 组件描述符
    pub descriptor: &'a TypeDescriptor,
    /// 选定的构造函数
    pub constructor: &'a ConstructorDescriptor,
}

impl PendingComponent<'_> {
    /// `other` 的具体类型是否直接出现在本组件的构造参数中
    pub fn depends_on_type_of(&self, other: &PendingComponent<'_>) -> bool {
        self.constructor
            .parameters()
            .iter()
            .any(|key| key == other.descriptor.type_key())
    }

    /// `other` 是否能满足本组件的任意一个构造参数
    pub fn can_be_satisfied_by(&self, other: &PendingComponent<'_>) -> bool {
        self.constructor
            .parameters()
            .iter()
            .any(|key| other.descriptor.provides(key))
    }
}

/// 创建顺序规划器 trait
pub trait OrderingPlanner: Send + Sync {
    /// 返回 `pending` 的下标序列，依赖在前，被依赖者在后
    fn plan(&self, pending: &[PendingComponent<'_>]) -> DependencyResult<Vec<usize>>;

    /// 规划器名称
    fn name(&self) -> &str;
}

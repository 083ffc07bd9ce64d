//! 组件扫描器抽象接口
//!
//! 扫描器负责产出候选组件的描述符列表，容器不关心列表的来源。

use crate::descriptor::TypeDescriptor;
use di_common::ComponentError;

/// 组件扫描器 trait
pub trait ComponentScanner: Send + Sync {
    /// 扫描指定扫描根下的组件，返回顺序即发现顺序
    fn scan(&self, target: &str) -> Result<Vec<TypeDescriptor>, ComponentError>;

    /// 获取扫描器名称
    fn name(&self) -> &str;

    /// 检查是否支持指定的扫描目标
    fn supports(&self, target: &str) -> bool {
        !target.trim().is_empty()
    }
}

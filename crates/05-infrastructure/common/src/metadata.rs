//! 元数据定义
//!
//! 提供类型的标识信息

use crate::conventions::NamingConventions;
use std::any::TypeId;
use std::fmt;
use std::hash::{Hash, Hasher};

/// 类型标识
///
/// 既可以描述具体类型（`Dog`），也可以描述 trait 对象（`dyn Animal`）。
/// 相等性只由 `TypeId` 决定。
#[derive(Debug, Clone, Copy)]
pub struct TypeKey {
    /// 类型ID
    pub id: TypeId,
    /// 完整类型名称
    pub type_name: &'static str,
}

impl TypeKey {
    /// 从类型获取类型标识
    pub fn of<T: ?Sized + 'static>() -> Self {
        Self {
            id: TypeId::of::<T>(),
            type_name: std::any::type_name::<T>(),
        }
    }

    /// 获取简短的类型名称（不包含模块路径、泛型参数和 `dyn` 前缀）
    pub fn short_name(&self) -> &'static str {
        NamingConventions::simple_type_name(self.type_name)
    }

    /// 获取类型所在的模块路径
    pub fn module_path(&self) -> &'static str {
        NamingConventions::module_path(self.type_name)
    }

    /// 按命名约定得到的 Bean 名称
    pub fn bean_name(&self) -> String {
        NamingConventions::bean_name(self.short_name())
    }
}

impl PartialEq for TypeKey {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for TypeKey {}

impl Hash for TypeKey {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Display for TypeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.short_name())
    }
}

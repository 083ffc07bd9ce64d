//! 构造函数选择

use di_abstractions::{ConstructorDescriptor, TypeDescriptor};
use di_common::{DependencyError, DependencyResult};

/// 为组件选出唯一的构造函数
///
/// 只有一个构造函数时无条件选中；有多个时必须恰好一个带装配标记。
pub fn select_constructor(descriptor: &TypeDescriptor) -> DependencyResult<&ConstructorDescriptor> {
    match descriptor.constructors() {
        [] => Err(DependencyError::ambiguous_constructor(
            descriptor.type_name(),
            "没有声明任何构造函数",
        )),
        [only] => Ok(only),
        constructors => {
            let mut wired = constructors.iter().filter(|c| c.is_wire_selected());
            match (wired.next(), wired.next()) {
                (Some(selected), None) => Ok(selected),
                (None, _) => Err(DependencyError::ambiguous_constructor(
                    descriptor.type_name(),
                    "存在多个构造函数, 但没有构造函数带装配标记",
                )),
                (Some(_), Some(_)) => Err(DependencyError::ambiguous_constructor(
                    descriptor.type_name(),
                    "存在多个带装配标记的构造函数",
                )),
            }
        }
    }
}

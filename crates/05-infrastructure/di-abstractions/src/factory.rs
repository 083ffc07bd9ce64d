//! 组件工厂抽象
//!
//! 构造函数被注册为闭包，按位置接收已解析的依赖。

use di_common::{BoxError, DependencyError, TypeKey};
use std::any::Any;
use std::fmt;
use std::sync::Arc;

/// 类型擦除后的 Bean 句柄
///
/// 内部始终保存一个 `Arc<T>`，`T` 既可以是具体类型，也可以是 trait 对象，
/// 因此同一个 Bean 可以以多种视图出现。
#[derive(Clone)]
pub struct BeanInstance {
    inner: Arc<dyn Any + Send + Sync>,
    type_name: &'static str,
}

impl BeanInstance {
    /// 包装一个共享实例
    pub fn new<T>(value: Arc<T>) -> Self
    where
        T: ?Sized + Send + Sync + 'static,
    {
        Self {
            inner: Arc::new(value),
            type_name: std::any::type_name::<T>(),
        }
    }

    /// 以 `T` 的视图取出实例
    pub fn downcast<T>(&self) -> Option<Arc<T>>
    where
        T: ?Sized + Send + Sync + 'static,
    {
        self.inner.downcast_ref::<Arc<T>>().cloned()
    }

    /// 当前视图的类型名称
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }
}

impl fmt::Debug for BeanInstance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BeanInstance")
            .field("type_name", &self.type_name)
            .finish()
    }
}

/// 已解析的构造函数参数，按声明顺序排列
#[derive(Debug, Clone, Default)]
pub struct Dependencies {
    parameters: Vec<TypeKey>,
    values: Vec<BeanInstance>,
}

impl Dependencies {
    /// 创建参数列表
    pub fn new(parameters: Vec<TypeKey>, values: Vec<BeanInstance>) -> Self {
        Self { parameters, values }
    }

    /// 没有参数
    pub fn empty() -> Self {
        Self::default()
    }

    /// 获取第 `index` 个参数
    pub fn get<T>(&self, index: usize) -> Result<Arc<T>, DependencyError>
    where
        T: ?Sized + Send + Sync + 'static,
    {
        let wanted = std::any::type_name::<T>();
        let value = self
            .values
            .get(index)
            .ok_or_else(|| DependencyError::DependencyResolutionFailed {
                type_name: wanted.to_string(),
                message: format!("参数位置 {index} 超出范围, 共 {} 个参数", self.values.len()),
            })?;

        value
            .downcast::<T>()
            .ok_or_else(|| DependencyError::DependencyResolutionFailed {
                type_name: wanted.to_string(),
                message: format!(
                    "参数位置 {index} 的类型为 {}, 声明的参数类型为 {}",
                    value.type_name(),
                    self.parameters
                        .get(index)
                        .map_or("<unknown>", |key| key.type_name),
                ),
            })
    }

    /// 参数个数
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// 是否没有参数
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// 组件工厂函数类型
pub type ConstructorFn =
    Arc<dyn Fn(&Dependencies) -> Result<BeanInstance, BoxError> + Send + Sync>;

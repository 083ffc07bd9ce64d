//! 组件类型描述符
//!
//! 代替运行时反射：每个候选组件通过 [`TypeDescriptor::builder`] 显式声明
//! 自己的构造函数、标记以及可以被视为哪些接口。

use crate::factory::{BeanInstance, ConstructorFn, Dependencies};
use di_common::{BoxError, TypeKey};
use std::fmt;
use std::marker::PhantomData;
use std::sync::Arc;

/// 视图转换函数类型
pub type CastFn = Arc<dyn Fn(&BeanInstance) -> Option<BeanInstance> + Send + Sync>;

/// 组件能力：组件可以被视为的某个类型
#[derive(Clone)]
pub struct Capability {
    key: TypeKey,
    cast: CastFn,
}

impl Capability {
    /// 能力对应的类型
    pub fn key(&self) -> &TypeKey {
        &self.key
    }

    /// 将具体实例转换为该能力的视图
    pub fn cast(&self, instance: &BeanInstance) -> Option<BeanInstance> {
        (self.cast)(instance)
    }
}

impl fmt::Debug for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Capability")
            .field("key", &self.key.type_name)
            .field("cast", &"<function>")
            .finish()
    }
}

/// 构造函数描述
#[derive(Clone)]
pub struct ConstructorDescriptor {
    parameters: Vec<TypeKey>,
    wire_selected: bool,
    factory: ConstructorFn,
}

impl ConstructorDescriptor {
    /// 按声明顺序排列的参数类型
    pub fn parameters(&self) -> &[TypeKey] {
        &self.parameters
    }

    /// 是否带有装配标记
    pub fn is_wire_selected(&self) -> bool {
        self.wire_selected
    }

    /// 是否为无参构造函数
    pub fn is_no_arg(&self) -> bool {
        self.parameters.is_empty()
    }

    /// 调用构造函数
    pub fn invoke(&self, dependencies: &Dependencies) -> Result<BeanInstance, BoxError> {
        (self.factory)(dependencies)
    }
}

impl fmt::Debug for ConstructorDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConstructorDescriptor")
            .field(
                "parameters",
                &self.parameters.iter().map(TypeKey::short_name).collect::<Vec<_>>(),
            )
            .field("wire_selected", &self.wire_selected)
            .field("factory", &"<function>")
            .finish()
    }
}

/// 类型化的构造函数声明
///
/// ```
/// use di_abstractions::Constructor;
/// use std::sync::Arc;
///
/// trait Vehicle: Send + Sync {}
/// struct VehicleHandler(Arc<dyn Vehicle>);
///
/// let constructor = Constructor::new(|deps| Ok(VehicleHandler(deps.get::<dyn Vehicle>(0)?)))
///     .param::<dyn Vehicle>()
///     .wired();
/// # let _ = constructor;
/// ```
pub struct Constructor<T> {
    parameters: Vec<TypeKey>,
    wire_selected: bool,
    factory: Arc<dyn Fn(&Dependencies) -> Result<T, BoxError> + Send + Sync>,
}

impl<T> Constructor<T>
where
    T: Send + Sync + 'static,
{
    /// 使用工厂闭包创建构造函数声明
    pub fn new<F>(factory: F) -> Self
    where
        F: Fn(&Dependencies) -> Result<T, BoxError> + Send + Sync + 'static,
    {
        Self {
            parameters: Vec::new(),
            wire_selected: false,
            factory: Arc::new(factory),
        }
    }

    /// 无参构造函数
    pub fn no_args<F>(factory: F) -> Self
    where
        F: Fn() -> T + Send + Sync + 'static,
    {
        Self::new(move |_| Ok(factory()))
    }

    /// 追加一个参数类型
    pub fn param<P>(mut self) -> Self
    where
        P: ?Sized + 'static,
    {
        self.parameters.push(TypeKey::of::<P>());
        self
    }

    /// 标记为装配时使用的构造函数
    pub fn wired(mut self) -> Self {
        self.wire_selected = true;
        self
    }

    fn erase(self) -> ConstructorDescriptor {
        let factory = self.factory;
        ConstructorDescriptor {
            parameters: self.parameters,
            wire_selected: self.wire_selected,
            factory: Arc::new(move |deps: &Dependencies| {
                factory(deps).map(|value| BeanInstance::new(Arc::new(value)))
            }),
        }
    }
}

/// 组件类型描述符
#[derive(Clone)]
pub struct TypeDescriptor {
    type_key: TypeKey,
    bean_name: String,
    primary: bool,
    constructors: Vec<ConstructorDescriptor>,
    capabilities: Vec<Capability>,
}

impl TypeDescriptor {
    /// 开始描述类型 `T`
    pub fn builder<T>() -> TypeDescriptorBuilder<T>
    where
        T: Send + Sync + 'static,
    {
        TypeDescriptorBuilder::new()
    }

    /// 类型标识
    pub fn type_key(&self) -> &TypeKey {
        &self.type_key
    }

    /// 简短类型名
    pub fn type_name(&self) -> &'static str {
        self.type_key.short_name()
    }

    /// 所在模块路径
    pub fn module_path(&self) -> &'static str {
        self.type_key.module_path()
    }

    /// 按约定得到的 Bean 名称
    pub fn bean_name(&self) -> &str {
        &self.bean_name
    }

    /// 是否带有首选标记
    pub fn is_primary(&self) -> bool {
        self.primary
    }

    /// 声明的构造函数
    pub fn constructors(&self) -> &[ConstructorDescriptor] {
        &self.constructors
    }

    /// 组件能力，第一个总是组件自身的具体类型
    pub fn capabilities(&self) -> &[Capability] {
        &self.capabilities
    }

    /// 是否可以被视为 `key` 类型
    pub fn provides(&self, key: &TypeKey) -> bool {
        self.capabilities.iter().any(|capability| capability.key() == key)
    }

    /// 是否只有一个无参构造函数
    pub fn has_only_no_arg_constructor(&self) -> bool {
        matches!(self.constructors.as_slice(), [only] if only.is_no_arg())
    }
}

impl fmt::Debug for TypeDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TypeDescriptor")
            .field("type_name", &self.type_key.type_name)
            .field("bean_name", &self.bean_name)
            .field("primary", &self.primary)
            .field("constructors", &self.constructors)
            .field("capabilities", &self.capabilities)
            .finish()
    }
}

/// 类型描述符构建器
pub struct TypeDescriptorBuilder<T> {
    primary: bool,
    constructors: Vec<ConstructorDescriptor>,
    capabilities: Vec<Capability>,
    _marker: PhantomData<fn() -> T>,
}

impl<T> TypeDescriptorBuilder<T>
where
    T: Send + Sync + 'static,
{
    fn new() -> Self {
        Self {
            primary: false,
            constructors: Vec::new(),
            capabilities: vec![Capability {
                key: TypeKey::of::<T>(),
                cast: Arc::new(|bean: &BeanInstance| {
                    bean.downcast::<T>().map(BeanInstance::new)
                }),
            }],
            _marker: PhantomData,
        }
    }

    /// 标记为首选实现
    pub fn primary(mut self) -> Self {
        self.primary = true;
        self
    }

    /// 添加构造函数
    pub fn constructor(mut self, constructor: Constructor<T>) -> Self {
        self.constructors.push(constructor.erase());
        self
    }

    /// 声明组件可以被视为接口 `I`
    pub fn provides<I>(mut self, upcast: fn(Arc<T>) -> Arc<I>) -> Self
    where
        I: ?Sized + Send + Sync + 'static,
    {
        let key = TypeKey::of::<I>();
        if self.capabilities.iter().any(|capability| capability.key == key) {
            return self;
        }

        self.capabilities.push(Capability {
            key,
            cast: Arc::new(move |bean: &BeanInstance| {
                bean.downcast::<T>().map(|concrete| BeanInstance::new(upcast(concrete)))
            }),
        });
        self
    }

    /// 完成构建
    pub fn build(self) -> TypeDescriptor {
        let type_key = TypeKey::of::<T>();
        TypeDescriptor {
            bean_name: type_key.bean_name(),
            type_key,
            primary: self.primary,
            constructors: self.constructors,
            capabilities: self.capabilities,
        }
    }
}

impl<T> From<TypeDescriptorBuilder<T>> for TypeDescriptor
where
    T: Send + Sync + 'static,
{
    fn from(builder: TypeDescriptorBuilder<T>) -> Self {
        builder.build()
    }
}

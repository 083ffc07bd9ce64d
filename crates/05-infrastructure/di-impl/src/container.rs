//! 依赖注入容器实现
//!
//! 初始化分两轮进行：
//!
//! 1. 只有一个无参构造函数的组件按发现顺序直接创建
//! 2. 其余组件先选定构造函数，由规划器排序后依次解析依赖并创建
//!
//! 任意一步失败都会中止整个初始化，不会返回部分构建的容器。

use crate::factory::BeanFactory;
use crate::planner::planner_for;
use crate::resolver::DefaultDependencyResolver;
use crate::selector::select_constructor;
use di_abstractions::{
    BeanContainer, BeanInstance, BeanRegistry, ComponentScanner, DependencyResolver,
    OrderingPlanner, PendingComponent, TypeDescriptor,
};
use di_common::{
    ComponentError, ContainerConfig, DependencyError, DependencyResult, TypeKey,
};
use std::collections::HashSet;
use std::sync::Arc;
use tracing::{debug, info};

/// 具体的依赖注入容器实现
#[derive(Debug)]
pub struct DiContainerImpl {
    registry: BeanRegistry,
}

impl DiContainerImpl {
    /// 扫描指定扫描根并完成初始化
    pub fn scan(
        scanner: &dyn ComponentScanner,
        root: &str,
        config: &ContainerConfig,
    ) -> DependencyResult<Self> {
        info!("扫描根: {} (扫描器: {})", root, scanner.name());
        let descriptors = scanner.scan(root)?;
        let planner = planner_for(config.ordering);
        Self::initialize(descriptors, planner.as_ref(), &DefaultDependencyResolver)
    }

    /// 对候选组件执行两轮创建
    pub fn initialize(
        descriptors: Vec<TypeDescriptor>,
        planner: &dyn OrderingPlanner,
        resolver: &dyn DependencyResolver,
    ) -> DependencyResult<Self> {
        info!(
            "开始初始化容器, 候选组件 {} 个, 排序策略: {}",
            descriptors.len(),
            planner.name()
        );
        let mut registry = BeanRegistry::new();

        // 第一轮：无依赖的组件
        let mut pending = Vec::with_capacity(descriptors.len());
        for descriptor in descriptors {
            if descriptor.has_only_no_arg_constructor() {
                let constructor = select_constructor(&descriptor)?;
                BeanFactory::create_and_register(&mut registry, &descriptor, constructor, Vec::new())?;
            } else {
                pending.push(descriptor);
            }
        }
        debug!("第一轮完成, 已创建 {} 个, 剩余 {} 个", registry.len(), pending.len());

        // 第二轮：按规划顺序创建其余组件
        let components = pending
            .iter()
            .map(|descriptor| {
                select_constructor(descriptor).map(|constructor| PendingComponent {
                    descriptor,
                    constructor,
                })
            })
            .collect::<DependencyResult<Vec<_>>>()?;

        let order = planner.plan(&components)?;
        let mut consumed = vec![false; components.len()];

        for index in order {
            let Some(component) = components.get(index).filter(|_| !consumed[index]) else {
                return Err(Self::integrity_failure(&components, &consumed));
            };

            let dependencies =
                resolver.resolve_all(component.constructor.parameters(), &registry)?;
            BeanFactory::create_and_register(
                &mut registry,
                component.descriptor,
                component.constructor,
                dependencies,
            )?;
            consumed[index] = true;
        }

        if consumed.iter().any(|done| !done) {
            return Err(Self::integrity_failure(&components, &consumed));
        }

        info!("容器初始化完成, 共创建 {} 个 Bean", registry.len());
        Ok(Self { registry })
    }

    fn integrity_failure(components: &[PendingComponent<'_>], consumed: &[bool]) -> DependencyError {
        let remaining = components
            .iter()
            .zip(consumed)
            .filter(|(_, done)| !**done)
            .map(|(component, _)| component.descriptor.bean_name().to_string())
            .collect();
        DependencyError::IntegrityFailure { remaining }
    }

    /// 底层注册表
    pub fn registry(&self) -> &BeanRegistry {
        &self.registry
    }

    /// Bean 数量
    pub fn len(&self) -> usize {
        self.registry.len()
    }

    /// 是否没有任何 Bean
    pub fn is_empty(&self) -> bool {
        self.registry.is_empty()
    }
}

impl BeanContainer for DiContainerImpl {
    fn get_bean(&self, name: &str) -> Option<BeanInstance> {
        self.registry.get(name).map(|bean| bean.instance.clone())
    }

    fn contains_bean(&self, name: &str) -> bool {
        self.registry.contains(name)
    }

    fn bean_names(&self) -> Vec<String> {
        self.registry.names().map(str::to_string).collect()
    }

    fn get_bean_as<T>(&self, name: &str) -> Option<Arc<T>>
    where
        T: ?Sized + Send + Sync + 'static,
    {
        self.registry
            .get(name)?
            .view(&TypeKey::of::<T>())?
            .downcast::<T>()
    }
}

/// 容器构建器
pub struct DiContainerBuilder {
    config: ContainerConfig,
    descriptors: Vec<TypeDescriptor>,
    scan_targets: Vec<String>,
    scanner: Option<Box<dyn ComponentScanner>>,
    planner: Option<Box<dyn OrderingPlanner>>,
    resolver: Option<Box<dyn DependencyResolver>>,
}

impl DiContainerBuilder {
    /// 创建使用默认配置的构建器
    pub fn new() -> Self {
        Self {
            config: ContainerConfig::default(),
            descriptors: Vec::new(),
            scan_targets: Vec::new(),
            scanner: None,
            planner: None,
            resolver: None,
        }
    }

    /// 使用配置，配置中的扫描根会追加到扫描目标中
    pub fn with_config(mut self, config: ContainerConfig) -> Self {
        self.scan_targets.extend(config.scan_targets.iter().cloned());
        self.config = config;
        self
    }

    /// 直接登记组件，不经过扫描器
    pub fn register_component(mut self, descriptor: impl Into<TypeDescriptor>) -> Self {
        self.descriptors.push(descriptor.into());
        self
    }

    /// 添加扫描目标
    pub fn add_scan_target(mut self, target: impl Into<String>) -> Self {
        self.scan_targets.push(target.into());
        self
    }

    /// 配置扫描器
    pub fn with_scanner(mut self, scanner: Box<dyn ComponentScanner>) -> Self {
        self.scanner = Some(scanner);
        self
    }

    /// 替换创建顺序规划器，默认由配置决定
    pub fn with_planner(mut self, planner: Box<dyn OrderingPlanner>) -> Self {
        self.planner = Some(planner);
        self
    }

    /// 替换依赖解析器
    pub fn with_resolver(mut self, resolver: Box<dyn DependencyResolver>) -> Self {
        self.resolver = Some(resolver);
        self
    }

    /// 收集候选组件：先是直接登记的，再按扫描目标顺序追加扫描结果
    fn collect_descriptors(&mut self) -> DependencyResult<Vec<TypeDescriptor>> {
        let mut descriptors = std::mem::take(&mut self.descriptors);
        let mut seen: HashSet<TypeKey> = descriptors.iter().map(|d| *d.type_key()).collect();

        if self.scan_targets.is_empty() {
            return Ok(descriptors);
        }

        let scanner = self
            .scanner
            .as_deref()
            .ok_or_else(|| ComponentError::scan_error("配置了扫描目标, 但没有配置组件扫描器"))?;

        for target in &self.scan_targets {
            info!("扫描根: {} (扫描器: {})", target, scanner.name());
            for descriptor in scanner.scan(target)? {
                if seen.insert(*descriptor.type_key()) {
                    descriptors.push(descriptor);
                } else {
                    debug!("组件已存在, 跳过: {}", descriptor.type_name());
                }
            }
        }

        Ok(descriptors)
    }

    /// 构建容器
    pub fn build(mut self) -> DependencyResult<DiContainerImpl> {
        let descriptors = self.collect_descriptors()?;
        let planner = match self.planner.take() {
            Some(planner) => planner,
            None => planner_for(self.config.ordering),
        };
        let resolver: Box<dyn DependencyResolver> = match self.resolver.take() {
            Some(resolver) => resolver,
            None => Box::new(DefaultDependencyResolver),
        };

        DiContainerImpl::initialize(descriptors, planner.as_ref(), resolver.as_ref())
    }
}

impl Default for DiContainerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

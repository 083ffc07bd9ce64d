//! 示例组件的端到端装配测试
use di_abstractions::{BeanContainer, Constructor, TypeDescriptor};
use di_common::{ContainerConfig, DependencyError, OrderingStrategy};
use di_impl::{DiContainerBuilder, DiContainerImpl, StaticComponentScanner};
use example_app::elements::handlers::{AnimalHandler, Handler, VehicleHandler};
use example_app::elements::{Animal, Car, Dog};
use example_app::{component_scanner, DEFAULT_SCAN_ROOT};
use std::io::Write;
use std::sync::Arc;

/// 没有首选标记的第二个动物实现
mod zoo {
    use example_app::elements::Animal;

    pub struct Cat;

    impl Animal for Cat {
        fn name(&self) -> String {
            "Tom".to_string()
        }
    }
}

fn build(ordering: OrderingStrategy) -> anyhow::Result<DiContainerImpl> {
    let config = ContainerConfig::default().with_ordering(ordering);
    Ok(DiContainerImpl::scan(&component_scanner(), DEFAULT_SCAN_ROOT, &config)?)
}

fn actions(container: &DiContainerImpl) -> Vec<String> {
    ["animalHandler", "vehicleHandler"]
        .iter()
        .map(|name| container.get_bean_as::<dyn Handler>(name).unwrap().action())
        .collect()
}

#[test]
fn test_demo_scenario() -> anyhow::Result<()> {
    let container = build(OrderingStrategy::Topological)?;

    // 第一轮按发现顺序创建 dog 和 car
    assert_eq!(
        container.bean_names(),
        vec!["dog", "car", "animalHandler", "vehicleHandler"]
    );
    assert_eq!(
        actions(&container),
        vec!["Animal name: Rex", "Vehicle power: 124"]
    );

    // 同一个 Bean 可以按具体类型和接口类型取出
    assert!(container.get_bean_as::<AnimalHandler>("animalHandler").is_some());
    assert!(container.get_bean_as::<VehicleHandler>("vehicleHandler").is_some());
    assert_eq!(container.get_bean_as::<dyn Animal>("dog").unwrap().name(), "Rex");
    assert!(container.get_bean_as::<Car>("dog").is_none());
    assert!(container.get_bean("cat").is_none());
    Ok(())
}

#[test]
fn test_both_strategies_agree_on_demo() -> anyhow::Result<()> {
    let topological = build(OrderingStrategy::Topological)?;
    let comparator = build(OrderingStrategy::Comparator)?;

    assert_eq!(topological.bean_names(), comparator.bean_names());
    assert_eq!(actions(&topological), actions(&comparator));
    Ok(())
}

#[test]
fn test_second_animal_without_primary_is_ambiguous() {
    let mut scanner = component_scanner();
    scanner.add(
        TypeDescriptor::builder::<zoo::Cat>()
            .constructor(Constructor::no_args(|| zoo::Cat))
            .provides::<dyn Animal>(|cat| cat),
    );
    // Dog 带首选标记，Cat 不带，仍然能唯一确定
    let container = DiContainerBuilder::new()
        .with_scanner(Box::new(scanner))
        .add_scan_target(DEFAULT_SCAN_ROOT)
        .add_scan_target(module_path!())
        .build()
        .unwrap();
    assert_eq!(actions(&container)[0], "Animal name: Rex");

    // 去掉 Dog 的首选标记后出现歧义
    let scanner = StaticComponentScanner::new("zoo")
        .register(
            TypeDescriptor::builder::<Dog>()
                .constructor(Constructor::no_args(|| Dog))
                .provides::<dyn Animal>(|dog| dog),
        )
        .register(
            TypeDescriptor::builder::<zoo::Cat>()
                .constructor(Constructor::no_args(|| zoo::Cat))
                .provides::<dyn Animal>(|cat| cat),
        )
        .register(
            TypeDescriptor::builder::<AnimalHandler>().constructor(
                Constructor::new(|deps| Ok(AnimalHandler::new(deps.get::<dyn Animal>(0)?)))
                    .param::<dyn Animal>(),
            ),
        );
    let result = DiContainerBuilder::new()
        .with_scanner(Box::new(scanner))
        .add_scan_target(DEFAULT_SCAN_ROOT)
        .add_scan_target(module_path!())
        .build();

    match result {
        Err(DependencyError::AmbiguousDependency { name, candidates }) => {
            assert_eq!(name, "animal");
            assert_eq!(candidates, vec!["dog".to_string(), "cat".to_string()]);
        }
        other => panic!("expected AmbiguousDependency, got {:?}", other.err()),
    }
}

#[test]
fn test_missing_implementation_is_no_such_bean() {
    let scanner = StaticComponentScanner::new("no-animals")
        .register(
            TypeDescriptor::builder::<Car>()
                .constructor(Constructor::no_args(|| Car)),
        )
        .register(
            TypeDescriptor::builder::<AnimalHandler>().constructor(
                Constructor::new(|deps| Ok(AnimalHandler::new(deps.get::<dyn Animal>(0)?)))
                    .param::<dyn Animal>(),
            ),
        );

    let result = DiContainerImpl::scan(&scanner, DEFAULT_SCAN_ROOT, &ContainerConfig::default());
    assert!(matches!(
        result,
        Err(DependencyError::NoSuchBean { name }) if name == "animal"
    ));
}

#[test]
fn test_vehicle_handler_uses_wired_constructor() -> anyhow::Result<()> {
    let container = build(OrderingStrategy::Topological)?;
    let handler = container
        .get_bean_as::<VehicleHandler>("vehicleHandler")
        .unwrap();
    assert_eq!(handler.action(), "Vehicle power: 124");
    Ok(())
}

#[test]
fn test_builder_reads_config_file() -> anyhow::Result<()> {
    let mut file = tempfile::Builder::new().suffix(".toml").tempfile()?;
    writeln!(file, "ordering = \"comparator\"")?;
    writeln!(file, "scan_targets = [\"{DEFAULT_SCAN_ROOT}::handlers\", \"{DEFAULT_SCAN_ROOT}\"]")?;
    file.flush()?;

    let config = ContainerConfig::load_from(Some(file.path()), "DI_INTEGRATION_UNUSED")?;
    assert_eq!(config.ordering, OrderingStrategy::Comparator);

    let container = DiContainerBuilder::new()
        .with_scanner(Box::new(component_scanner()))
        .with_config(config)
        .build()?;

    // 处理器先被扫描到，但依然在第二轮创建
    assert_eq!(
        container.bean_names(),
        vec!["dog", "car", "animalHandler", "vehicleHandler"]
    );
    let dog: Arc<dyn Animal> = container.get_bean_as("dog").unwrap();
    assert_eq!(dog.name(), "Rex");
    Ok(())
}

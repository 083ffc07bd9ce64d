//! # 示例应用程序
//!
//! 扫描 `example_app::elements` 下的组件，完成装配后调用两个处理器。

use anyhow::Context;
use clap::Parser;
use di_abstractions::BeanContainer;
use di_common::{ContainerConfig, OrderingStrategy, DEFAULT_ENV_PREFIX};
use di_impl::DiContainerBuilder;
use example_app::elements::handlers::Handler;
use example_app::{component_scanner, DEFAULT_SCAN_ROOT};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// 命令行参数
#[derive(Parser, Debug)]
#[command(name = "example-app")]
#[command(about = "Lorn SimpleDI 示例应用")]
struct Args {
    /// 配置文件路径
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// 扫描根，配置文件中没有扫描根时使用
    #[arg(long)]
    scan_root: Option<String>,

    /// 创建顺序策略 (comparator | topological)
    #[arg(long)]
    ordering: Option<OrderingStrategy>,

    /// 日志级别
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // 初始化日志，RUST_LOG 优先
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.log_level)),
        )
        .init();

    info!("启动 Lorn SimpleDI 示例应用");

    let config = load_config(&args)?;
    let container = DiContainerBuilder::new()
        .with_scanner(Box::new(component_scanner()))
        .with_config(config)
        .build()
        .context("容器初始化失败")?;

    for name in ["animalHandler", "vehicleHandler"] {
        let handler = container
            .get_bean_as::<dyn Handler>(name)
            .with_context(|| format!("找不到 Bean: {name}"))?;
        println!("{}", handler.action());
    }

    info!("应用结束");
    Ok(())
}

/// 读取配置并应用命令行覆盖
fn load_config(args: &Args) -> anyhow::Result<ContainerConfig> {
    let mut config = match args.config.as_deref() {
        Some(path) => ContainerConfig::load_from(Some(path), DEFAULT_ENV_PREFIX),
        None => ContainerConfig::load(),
    }
    .context("加载配置失败")?;

    if let Some(ordering) = args.ordering {
        config = config.with_ordering(ordering);
    }
    if let Some(root) = &args.scan_root {
        config.scan_targets = vec![root.clone()];
    }
    if config.scan_targets.is_empty() {
        config = config.add_scan_target(DEFAULT_SCAN_ROOT);
    }

    info!(
        "排序策略: {}, 扫描根: {:?}",
        config.ordering, config.scan_targets
    );
    Ok(config)
}

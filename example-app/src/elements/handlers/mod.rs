//! 处理器组件

use super::{Animal, Vehicle};
use di_abstractions::{Constructor, Dependencies, TypeDescriptor};
use di_impl::StaticComponentScanner;
use std::sync::Arc;

/// 处理器
pub trait Handler: Send + Sync {
    /// 执行动作并返回输出
    fn action(&self) -> String;
}

/// 动物处理器
pub struct AnimalHandler {
    animal: Arc<dyn Animal>,
}

impl AnimalHandler {
    /// 使用注入的动物创建处理器
    pub fn new(animal: Arc<dyn Animal>) -> Self {
        Self { animal }
    }
}

impl Handler for AnimalHandler {
    fn action(&self) -> String {
        format!("Animal name: {}", self.animal.name())
    }
}

/// 交通工具处理器
///
/// 同时声明了无参构造函数和带装配标记的构造函数，装配时使用后者。
#[derive(Default)]
pub struct VehicleHandler {
    vehicle: Option<Arc<dyn Vehicle>>,
}

impl VehicleHandler {
    /// 使用注入的交通工具创建处理器
    pub fn new(vehicle: Arc<dyn Vehicle>) -> Self {
        Self {
            vehicle: Some(vehicle),
        }
    }
}

impl Handler for VehicleHandler {
    fn action(&self) -> String {
        match &self.vehicle {
            Some(vehicle) => format!("Vehicle power: {}", vehicle.power()),
            None => "Vehicle power: unknown".to_string(),
        }
    }
}

pub(crate) fn register(scanner: &mut StaticComponentScanner) {
    scanner.add(
        TypeDescriptor::builder::<AnimalHandler>()
            .constructor(
                Constructor::new(|deps: &Dependencies| {
                    Ok(AnimalHandler::new(deps.get::<dyn Animal>(0)?))
                })
                .param::<dyn Animal>(),
            )
            .provides::<dyn Handler>(|handler| handler),
    );
    scanner.add(
        TypeDescriptor::builder::<VehicleHandler>()
            .constructor(Constructor::no_args(VehicleHandler::default))
            .constructor(
                Constructor::new(|deps: &Dependencies| {
                    Ok(VehicleHandler::new(deps.get::<dyn Vehicle>(0)?))
                })
                .param::<dyn Vehicle>()
                .wired(),
            )
            .provides::<dyn Handler>(|handler| handler),
    );
}

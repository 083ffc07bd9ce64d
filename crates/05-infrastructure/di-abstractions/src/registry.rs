//! 组件注册表
//!
//! 以 Bean 名称为键保存已创建的单例，初始化期间每个名称只写入一次，
//! 初始化完成后只读。

use crate::descriptor::{Capability, TypeDescriptor};
use crate::factory::BeanInstance;
use di_common::{DependencyError, TypeKey};
use std::collections::HashMap;
use tracing::debug;

/// 已创建的 Bean
#[derive(Debug, Clone)]
pub struct BeanDefinition {
    /// Bean 名称
    pub name: String,
    /// 具体类型
    pub type_key: TypeKey,
    /// 是否为首选实现
    pub primary: bool,
    /// 具体类型视图下的实例
    pub instance: BeanInstance,
    capabilities: Vec<Capability>,
}

impl BeanDefinition {
    /// 根据描述符和新创建的实例生成 Bean 定义
    pub fn new(descriptor: &TypeDescriptor, instance: BeanInstance) -> Self {
        Self {
            name: descriptor.bean_name().to_string(),
            type_key: *descriptor.type_key(),
            primary: descriptor.is_primary(),
            instance,
            capabilities: descriptor.capabilities().to_vec(),
        }
    }

    /// 是否可以被视为 `key` 类型
    pub fn satisfies(&self, key: &TypeKey) -> bool {
        self.capabilities.iter().any(|capability| capability.key() == key)
    }

    /// 以 `key` 类型的视图取出实例
    pub fn view(&self, key: &TypeKey) -> Option<BeanInstance> {
        self.capabilities
            .iter()
            .find(|capability| capability.key() == key)
            .and_then(|capability| capability.cast(&self.instance))
    }
}

/// 组件注册表
#[derive(Debug, Default)]
pub struct BeanRegistry {
    beans: HashMap<String, BeanDefinition>,
    order: Vec<String>,
}

impl BeanRegistry {
    /// 创建空注册表
    pub fn new() -> Self {
        Self::default()
    }

    /// 注册 Bean，名称重复时拒绝
    pub fn insert(&mut self, bean: BeanDefinition) -> Result<(), DependencyError> {
        if self.beans.contains_key(&bean.name) {
            return Err(DependencyError::DuplicateBean { name: bean.name });
        }

        debug!("注册 Bean: {} ({})", bean.name, bean.type_key.type_name);
        self.order.push(bean.name.clone());
        self.beans.insert(bean.name.clone(), bean);
        Ok(())
    }

    /// 按名称获取
    pub fn get(&self, name: &str) -> Option<&BeanDefinition> {
        self.beans.get(name)
    }

    /// 是否包含指定名称
    pub fn contains(&self, name: &str) -> bool {
        self.beans.contains_key(name)
    }

    /// 按注册顺序遍历
    pub fn iter(&self) -> impl Iterator<Item = &BeanDefinition> + '_ {
        self.order.iter().filter_map(|name| self.beans.get(name))
    }

    /// 按注册顺序返回名称
    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.order.iter().map(String::as_str)
    }

    /// 所有可以被视为 `key` 类型的 Bean
    pub fn find_by_capability(&self, key: &TypeKey) -> Vec<&BeanDefinition> {
        self.iter().filter(|bean| bean.satisfies(key)).collect()
    }

    /// Bean 数量
    pub fn len(&self) -> usize {
        self.beans.len()
    }

    /// 是否为空
    pub fn is_empty(&self) -> bool {
        self.beans.is_empty()
    }
}

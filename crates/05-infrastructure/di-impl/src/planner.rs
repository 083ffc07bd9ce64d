//! 创建顺序规划器实现

use di_abstractions::{OrderingPlanner, PendingComponent};
use di_common::{DependencyError, DependencyResult, OrderingStrategy};
use std::cmp::Ordering;
use std::collections::HashMap;
use tracing::{debug, warn};

/// 根据配置创建规划器
pub fn planner_for(strategy: OrderingStrategy) -> Box<dyn OrderingPlanner> {
    match strategy {
        OrderingStrategy::Comparator => Box::new(ComparatorOrderingPlanner),
        OrderingStrategy::Topological => Box::new(TopologicalOrderingPlanner),
    }
}

/// 两两比较的排序规划器
///
/// A 的构造参数中出现 B 的具体类型时 A 排在 B 之后，否则 A 排在 B 之前。
/// 只看直接依赖，多层依赖链可能得到错误的顺序。
#[derive(Debug, Default, Clone, Copy)]
pub struct ComparatorOrderingPlanner;

impl ComparatorOrderingPlanner {
    fn compare(a: &PendingComponent<'_>, b: &PendingComponent<'_>) -> Ordering {
        if std::ptr::eq(a.descriptor, b.descriptor) {
            Ordering::Equal
        } else if a.depends_on_type_of(b) {
            Ordering::Greater
        } else {
            Ordering::Less
        }
    }
}

impl OrderingPlanner for ComparatorOrderingPlanner {
    fn plan(&self, pending: &[PendingComponent<'_>]) -> DependencyResult<Vec<usize>> {
        warn!("使用两两比较排序, 多层依赖链可能无法正确排序");

        // 比较器不满足全序，使用插入排序保证结果确定且不会 panic
        let mut order: Vec<usize> = (0..pending.len()).collect();
        for i in 1..order.len() {
            let mut j = i;
            while j > 0
                && Self::compare(&pending[order[j - 1]], &pending[order[j]]) == Ordering::Greater
            {
                order.swap(j - 1, j);
                j -= 1;
            }
        }

        debug!("比较排序结果: {:?}", names_of(pending, &order));
        Ok(order)
    }

    fn name(&self) -> &str {
        "comparator"
    }
}

/// 基于依赖图的拓扑排序规划器
///
/// B 能满足 A 的任意一个构造参数时，B 排在 A 之前。
/// 没有依赖关系的组件保持发现顺序。
#[derive(Debug, Default, Clone, Copy)]
pub struct TopologicalOrderingPlanner;

impl TopologicalOrderingPlanner {
    /// `dependencies[a]` 为 a 依赖的全部组件下标
    ///
    /// 组件创建前不在注册表中，不能满足自己的参数，因此不产生自环。
    fn build_graph(pending: &[PendingComponent<'_>]) -> Vec<Vec<usize>> {
        pending
            .iter()
            .enumerate()
            .map(|(dependent_index, dependent)| {
                pending
                    .iter()
                    .enumerate()
                    .filter(|(index, provider)| {
                        *index != dependent_index && dependent.can_be_satisfied_by(provider)
                    })
                    .map(|(index, _)| index)
                    .collect()
            })
            .collect()
    }

    /// 沿依赖边在剩余组件中找出一个环
    fn find_cycle(dependencies: &[Vec<usize>], remaining: &[bool]) -> Vec<usize> {
        let Some(start) = remaining.iter().position(|r| *r) else {
            return Vec::new();
        };

        let mut path = Vec::new();
        let mut seen_at = HashMap::new();
        let mut current = start;
        loop {
            if let Some(&position) = seen_at.get(&current) {
                let mut cycle = path[position..].to_vec();
                cycle.push(current);
                return cycle;
            }
            seen_at.insert(current, path.len());
            path.push(current);

            match dependencies[current].iter().find(|d| remaining[**d]) {
                Some(next) => current = *next,
                None => return path,
            }
        }
    }
}

impl OrderingPlanner for TopologicalOrderingPlanner {
    fn plan(&self, pending: &[PendingComponent<'_>]) -> DependencyResult<Vec<usize>> {
        let dependencies = Self::build_graph(pending);
        let mut in_degree: Vec<usize> = dependencies.iter().map(Vec::len).collect();
        let mut remaining = vec![true; pending.len()];
        let mut order = Vec::with_capacity(pending.len());

        while let Some(next) = (0..pending.len()).find(|&i| remaining[i] && in_degree[i] == 0) {
            remaining[next] = false;
            order.push(next);

            for (dependent, deps) in dependencies.iter().enumerate() {
                let edges = deps.iter().filter(|&&d| d == next).count();
                in_degree[dependent] -= edges;
            }
        }

        if order.len() < pending.len() {
            let cycle = Self::find_cycle(&dependencies, &remaining);
            let dependency_chain = names_of(pending, &cycle).join(" -> ");
            return Err(DependencyError::CircularDependency { dependency_chain });
        }

        debug!("拓扑排序结果: {:?}", names_of(pending, &order));
        Ok(order)
    }

    fn name(&self) -> &str {
        "topological"
    }
}

fn names_of(pending: &[PendingComponent<'_>], indices: &[usize]) -> Vec<String> {
    indices
        .iter()
        .map(|&i| pending[i].descriptor.bean_name().to_string())
        .collect()
}

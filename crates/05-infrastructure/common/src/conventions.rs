//! 约定规范定义
//!
//! Bean 名称完全由简短类型名推导：首字母小写，其余保持不变。

/// 命名约定规范
#[derive(Debug)]
pub struct NamingConventions;

impl NamingConventions {
    /// 从简短类型名得到 Bean 名称，例如 `VehicleHandler` -> `vehicleHandler`
    pub fn bean_name(simple_name: &str) -> String {
        let mut chars = simple_name.chars();
        match chars.next() {
            Some(first) => first.to_lowercase().chain(chars).collect(),
            None => String::new(),
        }
    }

    /// 从 `std::any::type_name` 的结果中提取简短类型名
    pub fn simple_type_name(type_name: &str) -> &str {
        let path = Self::strip_decorations(type_name);
        path.rsplit("::").next().unwrap_or(path)
    }

    /// 从 `std::any::type_name` 的结果中提取模块路径
    pub fn module_path(type_name: &str) -> &str {
        let path = Self::strip_decorations(type_name);
        path.rsplit_once("::").map_or("", |(module, _)| module)
    }

    /// 去掉 `dyn ` 前缀、额外的 trait 约束以及泛型参数
    fn strip_decorations(type_name: &str) -> &str {
        let name = type_name.trim();
        let name = name.strip_prefix("dyn ").unwrap_or(name);
        let end = name
            .find(|c: char| c == '<' || c == ' ')
            .unwrap_or(name.len());
        &name[..end]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bean_name() {
        assert_eq!(NamingConventions::bean_name("Dog"), "dog");
        assert_eq!(NamingConventions::bean_name("VehicleHandler"), "vehicleHandler");
        assert_eq!(NamingConventions::bean_name("URLLoader"), "uRLLoader");
        assert_eq!(NamingConventions::bean_name("x"), "x");
        assert_eq!(NamingConventions::bean_name(""), "");
    }

    #[test]
    fn test_bean_name_is_deterministic() {
        let first = NamingConventions::bean_name("AnimalHandler");
        let second = NamingConventions::bean_name("AnimalHandler");
        assert_eq!(first, second);
        assert_eq!(NamingConventions::bean_name(&first), first);
    }

    #[test]
    fn test_simple_type_name() {
        assert_eq!(
            NamingConventions::simple_type_name("example_app::elements::Dog"),
            "Dog"
        );
        assert_eq!(
            NamingConventions::simple_type_name("dyn example_app::elements::Animal"),
            "Animal"
        );
        assert_eq!(
            NamingConventions::simple_type_name("dyn app::Handler + core::marker::Send"),
            "Handler"
        );
        assert_eq!(
            NamingConventions::simple_type_name("app::Wrapper<alloc::string::String>"),
            "Wrapper"
        );
        assert_eq!(NamingConventions::simple_type_name("Dog"), "Dog");
    }

    #[test]
    fn test_module_path() {
        assert_eq!(
            NamingConventions::module_path("example_app::elements::handlers::AnimalHandler"),
            "example_app::elements::handlers"
        );
        assert_eq!(
            NamingConventions::module_path("dyn example_app::elements::Vehicle"),
            "example_app::elements"
        );
        assert_eq!(NamingConventions::module_path("Dog"), "");
    }
}

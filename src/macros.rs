#[macro_export]
macro_rules! container {
    // Empty container
    () => {
        $crate::Container::new()
    };

    // key => value pairs; duplicate keys are kept, order is preserved
    ($($key:expr => $value:expr),+ $(,)?) => {{
        let mut container = $crate::Container::new();
        $(
            container.push($crate::Entry::new($key, $crate::Value::from($value)));
        )+
        container
    }};
}

#[cfg(test)]
mod tests {
    use crate::{serialize_container, Container, Value};

    #[test]
    fn test_container_macro_empty() {
        assert_eq!(container!(), Container::new());
    }

    #[test]
    fn test_container_macro_scalars() {
        let container = container! {
            "name" => "Alice",
            "level" => 30,
            "scale" => 1.5,
            "admin" => true,
        };

        assert_eq!(container.len(), 4);
        assert_eq!(
            container.find_key("name").unwrap().value,
            Value::String("Alice".to_string())
        );
        assert_eq!(container.find_key("level").unwrap().value, Value::Int(30));
        assert_eq!(container.find_key("scale").unwrap().value, Value::Float(1.5));
        assert_eq!(container.find_key("admin").unwrap().value, Value::Bool(true));
    }

    #[test]
    fn test_container_macro_nested() {
        let container = container! {
            "outer" => container! { "inner" => 1 },
            "flag" => false
        };

        assert_eq!(serialize_container(&container), "outer=(inner=1),flag=false");
    }

    #[test]
    fn test_container_macro_duplicate_keys_kept() {
        let container = container! {
            "k" => 1,
            "k" => 2
        };

        let keys: Vec<_> = container.iter().map(|e| e.key.as_str()).collect();
        assert_eq!(keys, vec!["k", "k"]);
    }
}

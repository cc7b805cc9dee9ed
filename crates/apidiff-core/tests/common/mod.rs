use apidiff_core::model::{Alias, ModuleSnapshot, PackageSnapshot, Type, Union, Value};

#[allow(dead_code)]
pub fn int() -> Type {
    Type::named("Basics.Int", vec![])
}

#[allow(dead_code)]
pub fn float() -> Type {
    Type::named("Basics.Float", vec![])
}

#[allow(dead_code)]
pub fn string() -> Type {
    Type::named("String.String", vec![])
}

#[allow(dead_code)]
pub fn list(item: Type) -> Type {
    Type::named("List.List", vec![item])
}

/// Build a module from `(name, signature)` value pairs
#[allow(dead_code)]
pub fn module_with_values(name: &str, values: &[(&str, Type)]) -> ModuleSnapshot {
    let mut module = ModuleSnapshot::new(name);
    for (value, signature) in values {
        module
            .add_value(*value, Value::new(signature.clone()))
            .unwrap();
    }
    module
}

#[allow(dead_code)]
pub fn package(modules: Vec<ModuleSnapshot>) -> PackageSnapshot {
    PackageSnapshot::from_modules(modules).unwrap()
}

/// `type Pair v = (v, v)`
#[allow(dead_code)]
pub fn pair_alias(param: &str) -> Alias {
    Alias::new(&[param], Type::tuple(vec![Type::var(param), Type::var(param)]))
}

/// `type Shape = Circle Float | Rect Float Float`, optionally `| Square Float`
#[allow(dead_code)]
pub fn shape_union(with_square: bool) -> Union {
    let union = Union::new(&[])
        .with_variant("Circle", vec![float()])
        .with_variant("Rect", vec![float(), float()]);
    if with_square {
        union.with_variant("Square", vec![float()])
    } else {
        union
    }
}

/// Parse a package snapshot from a JSON fixture and check its invariants
#[allow(dead_code)]
pub fn package_from_json(value: serde_json::Value) -> PackageSnapshot {
    let package: PackageSnapshot = serde_json::from_value(value).unwrap();
    package.validate().unwrap();
    package
}

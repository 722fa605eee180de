//! Dotted type paths for diagnostic labels

/// Fully qualified dotted path of a value's type, e.g. `nlu_utils.config.Settings`
///
/// Built from [`std::any::type_name`], so the exact text is only suitable
/// for logs and debug output.
pub fn module_path_from_object<T: ?Sized>(value: &T) -> String {
    dotted(std::any::type_name_of_val(value))
}

/// Type-level form of [`module_path_from_object`]
pub fn module_path_of<T: ?Sized>() -> String {
    dotted(std::any::type_name::<T>())
}

fn dotted(type_name: &str) -> String {
    type_name.replace("::", ".")
}

pub mod numpy_bindings;

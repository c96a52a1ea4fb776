//! Shared resolver oracles, built once per test binary.

use boxlint::facts::MethodTable;
use once_cell::sync::Lazy;

use super::fixtures::{int, long, object};

/// `foo(int)` and `foo(Object)`: the pair where boxed and primitive
/// arguments bind to different declarations.
pub static FOO_OVERLOADS: Lazy<MethodTable> = Lazy::new(|| {
    let mut table = MethodTable::new();
    table.add_method("Demo#foo(int)", "foo", vec![int()]);
    table.add_method("Demo#foo(Object)", "foo", vec![object()]);
    table
});

/// A single `foo(long)`: both the boxed and the primitive argument land
/// on the same declaration.
pub static FOO_SINGLE_LONG: Lazy<MethodTable> = Lazy::new(|| {
    let mut table = MethodTable::new();
    table.add_method("Demo#foo(long)", "foo", vec![long()]);
    table
});

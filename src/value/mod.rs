// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Explicitly settable parameter values
//!
//! Only values that were explicitly set are emitted as call arguments, so an
//! unset `Value` never shows up in generated code even if its zero value looks
//! like a sensible default.

mod format;
mod settable;

pub use format::{format_float, format_string, format_tuple, format_tuple_list, ParamText};
pub use settable::Value;

/// A single float
pub type Float = Value<f64>;
/// A single integer
pub type Int = Value<i64>;
/// A boolean
pub type Bool = Value<bool>;
/// A quoted string
pub type Str = Value<String>;
/// An `[x, y]` tuple
pub type FloatXY = Value<[f64; 2]>;
/// An `[x, y, z]` tuple
pub type FloatXYZ = Value<[f64; 3]>;
/// A list of `[x, y]` points
pub type FloatsXY = Value<Vec<[f64; 2]>>;
/// A list of integer lists, such as polygon paths
pub type IntSets = Value<Vec<Vec<i64>>>;

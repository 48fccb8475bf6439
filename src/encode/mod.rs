// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Encoding of user-defined shape trees into [`Function`](crate::Function) call trees
//!
//! A type takes part in encoding by implementing [`Node`]: it lists its fields
//! in declaration order, and each [`Field`] registers which capabilities its
//! value provides (call name, module name, parameter value, or children).

mod capability;
mod encoder;
mod field;
mod node;
mod wrap;

pub use capability::{AutoName, FunctionNameProvider, ModuleName, ModuleNameProvider, ParameterProvider};
pub use encoder::{encode, encode_optional};
pub use field::Field;
pub use node::{short_type_name, Child, Node};
pub use wrap::Wrapper;

// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! OpenSCAD primitives, transformations, booleans and extrusions
//!
//! Each shape is a plain struct of [`Value`](crate::value::Value) fields.
//! Only the fields that are explicitly set are emitted:
//!
//! ```
//! use polyscad::shapes::Cylinder;
//! use polyscad::value::Float;
//!
//! let cylinder = Cylinder {
//!     h: Float::new(50.0),
//!     d1: Float::new(20.0),
//!     d2: Float::new(5.0),
//!     ..Default::default()
//! };
//! assert_eq!(polyscad::function_content(&cylinder).unwrap(), "cylinder(d1=20, d2=5, h=50);\n");
//! ```

mod boolean;
mod extrusion;
mod primitive2d;
mod primitive3d;
mod transform;

pub use boolean::{difference_with, union_with, Difference, Intersection, Union};
pub use extrusion::{LinearExtrude, RotateExtrude};
pub use primitive2d::{Circle, Polygon, Text};
pub use primitive3d::{Cube, Cylinder, Sphere};
pub use transform::{
    rotate_around, translate_to, Color, Minkowski, Mirror, Resize, Rotate, Scale, Translate,
};

/// Implement [`Wrapper`](crate::encode::Wrapper) for shapes with a `children` field.
/// The wrapped child goes first.
macro_rules! impl_wrapper {
    ($($shape:ty),+ $(,)?) => {
        $(
            impl $crate::encode::Wrapper for $shape {
                fn wrap(mut self, child: $crate::encode::Child) -> $crate::encode::Child {
                    self.children.insert(0, child);
                    $crate::encode::Child::new(self)
                }
            }
        )+
    };
}

pub(crate) use impl_wrapper;

// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! 3D primitives

use crate::encode::{Field, Node};
use crate::value::{Bool, Float, FloatXYZ, Int};

/// A cube
#[derive(Debug, Clone, Default)]
pub struct Cube {
    /// Only one of `size` or `size_xyz` may be set.
    pub size: Float,
    pub size_xyz: FloatXYZ,
    pub center: Bool,
}

impl Node for Cube {
    fn fields(&self) -> Vec<Field<'_>> {
        vec![
            Field::new("size").parameter(&self.size),
            Field::new("size_xyz").tag("size").parameter(&self.size_xyz),
            Field::new("center").parameter(&self.center),
        ]
    }
}

/// A sphere
#[derive(Debug, Clone, Default)]
pub struct Sphere {
    /// Only one of `r` or `d` should be set.
    pub r: Float,
    pub d: Float,

    pub fa: Float,
    pub fs: Float,
    pub fn_: Int,
}

impl Node for Sphere {
    fn fields(&self) -> Vec<Field<'_>> {
        vec![
            Field::new("r").parameter(&self.r),
            Field::new("d").parameter(&self.d),
            Field::new("fa").tag("$fa").parameter(&self.fa),
            Field::new("fs").tag("$fs").parameter(&self.fs),
            Field::new("fn_").tag("$fn").parameter(&self.fn_),
        ]
    }
}

/// A cylinder or cone
#[derive(Debug, Clone, Default)]
pub struct Cylinder {
    pub h: Float,
    pub r: Float,
    pub r1: Float,
    pub r2: Float,
    pub d: Float,
    pub d1: Float,
    pub d2: Float,
    pub center: Bool,

    pub fa: Float,
    pub fs: Float,
    pub fn_: Int,
}

impl Node for Cylinder {
    fn fields(&self) -> Vec<Field<'_>> {
        vec![
            Field::new("h").parameter(&self.h),
            Field::new("r").parameter(&self.r),
            Field::new("r1").parameter(&self.r1),
            Field::new("r2").parameter(&self.r2),
            Field::new("d").parameter(&self.d),
            Field::new("d1").parameter(&self.d1),
            Field::new("d2").parameter(&self.d2),
            Field::new("center").parameter(&self.center),
            Field::new("fa").tag("$fa").parameter(&self.fa),
            Field::new("fs").tag("$fs").parameter(&self.fs),
            Field::new("fn_").tag("$fn").parameter(&self.fn_),
        ]
    }
}

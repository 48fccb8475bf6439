// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Extrusions of 2D children

use super::impl_wrapper;
use crate::encode::{AutoName, Child, Field, Node};
use crate::value::{Bool, Float, FloatXY, Int};

/// Linear extrusion
#[derive(Debug, Default)]
pub struct LinearExtrude {
    pub name: AutoName,

    pub height: Float,
    pub twist: Float,
    pub center: Bool,
    pub slices: Int,

    /// Only one of `scale` or `scale_xy` should be set.
    pub scale: Float,
    pub scale_xy: FloatXY,

    pub fn_: Int,
    pub children: Vec<Child>,
}

impl Node for LinearExtrude {
    fn fields(&self) -> Vec<Field<'_>> {
        vec![
            Field::new("name")
                .tag("linear_extrude")
                .private()
                .function_name(&self.name),
            Field::new("height").parameter(&self.height),
            Field::new("twist").parameter(&self.twist),
            Field::new("center").parameter(&self.center),
            Field::new("slices").parameter(&self.slices),
            Field::new("scale").parameter(&self.scale),
            Field::new("scale_xy").tag("scale").parameter(&self.scale_xy),
            Field::new("fn_").tag("$fn").parameter(&self.fn_),
            Field::new("children").children(&self.children),
        ]
    }
}

/// Rotational extrusion around the Z axis
#[derive(Debug, Default)]
pub struct RotateExtrude {
    pub name: AutoName,

    pub convexity: Int,
    pub angle: Float,

    pub children: Vec<Child>,
}

impl Node for RotateExtrude {
    fn fields(&self) -> Vec<Field<'_>> {
        vec![
            Field::new("name")
                .tag("rotate_extrude")
                .private()
                .function_name(&self.name),
            Field::new("convexity").parameter(&self.convexity),
            Field::new("angle").parameter(&self.angle),
            Field::new("children").children(&self.children),
        ]
    }
}

impl_wrapper!(LinearExtrude, RotateExtrude);

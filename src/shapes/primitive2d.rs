// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! 2D primitives

use crate::encode::{Field, Node};
use crate::value::{Float, FloatsXY, Int, IntSets, Str};

/// A circle
#[derive(Debug, Clone, Default)]
pub struct Circle {
    /// Only one of `r` or `d` should be set.
    pub r: Float,
    pub d: Float,

    pub fa: Float,
    pub fs: Float,
    pub fn_: Int,
}

impl Node for Circle {
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

/// A polygon from points and optional paths
#[derive(Debug, Clone, Default)]
pub struct Polygon {
    pub points: FloatsXY,
    pub paths: IntSets,
    pub convexity: Int,
}

impl Node for Polygon {
    fn fields(&self) -> Vec<Field<'_>> {
        vec![
            Field::new("points").parameter(&self.points),
            Field::new("paths").parameter(&self.paths),
            Field::new("convexity").parameter(&self.convexity),
        ]
    }
}

/// Text
#[derive(Debug, Clone, Default)]
pub struct Text {
    pub text: Str,
    pub size: Float,
    pub font: Str,
    pub halign: Str,
    pub valign: Str,
    pub spacing: Float,
    pub direction: Str,
    pub language: Str,
    pub script: Str,

    pub fn_: Int,
}

impl Node for Text {
    fn fields(&self) -> Vec<Field<'_>> {
        vec![
            Field::new("text").parameter(&self.text),
            Field::new("size").parameter(&self.size),
            Field::new("font").parameter(&self.font),
            Field::new("halign").parameter(&self.halign),
            Field::new("valign").parameter(&self.valign),
            Field::new("spacing").parameter(&self.spacing),
            Field::new("direction").parameter(&self.direction),
            Field::new("language").parameter(&self.language),
            Field::new("script").parameter(&self.script),
            Field::new("fn_").tag("$fn").parameter(&self.fn_),
        ]
    }
}

// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Transformations

use super::impl_wrapper;
use crate::encode::{Child, Field, Node};
use crate::value::{Bool, Float, FloatXYZ};

/// Translate children by `v`
#[derive(Debug, Default)]
pub struct Translate {
    pub v: FloatXYZ,
    pub children: Vec<Child>,
}

impl Node for Translate {
    fn fields(&self) -> Vec<Field<'_>> {
        vec![
            Field::new("v").parameter(&self.v),
            Field::new("children").children(&self.children),
        ]
    }
}

/// A [`Translate`] to the given offsets
pub fn translate_to(x: f64, y: f64, z: f64) -> Translate {
    Translate {
        v: FloatXYZ::xyz(x, y, z),
        ..Default::default()
    }
}

/// Rotate children
#[derive(Debug, Default)]
pub struct Rotate {
    /// Only one of `a` or `a_xyz` may be set.
    pub a: Float,
    pub a_xyz: FloatXYZ,

    pub v: FloatXYZ,
    pub children: Vec<Child>,
}

impl Node for Rotate {
    fn fields(&self) -> Vec<Field<'_>> {
        vec![
            Field::new("a").parameter(&self.a),
            Field::new("a_xyz").tag("a").parameter(&self.a_xyz),
            Field::new("v").parameter(&self.v),
            Field::new("children").children(&self.children),
        ]
    }
}

/// A [`Rotate`] by `a` degrees around the axis `[x, y, z]`
pub fn rotate_around(a: f64, x: f64, y: f64, z: f64) -> Rotate {
    Rotate {
        a: Float::new(a),
        v: FloatXYZ::xyz(x, y, z),
        ..Default::default()
    }
}

/// Scale children by `v`
#[derive(Debug, Default)]
pub struct Scale {
    pub v: FloatXYZ,
    pub children: Vec<Child>,
}

impl Node for Scale {
    fn fields(&self) -> Vec<Field<'_>> {
        vec![
            Field::new("v").parameter(&self.v),
            Field::new("children").children(&self.children),
        ]
    }
}

/// Mirror children across the plane normal to `v`
#[derive(Debug, Default)]
pub struct Mirror {
    pub v: FloatXYZ,
    pub children: Vec<Child>,
}

impl Node for Mirror {
    fn fields(&self) -> Vec<Field<'_>> {
        vec![
            Field::new("v").parameter(&self.v),
            Field::new("children").children(&self.children),
        ]
    }
}

/// Color children
#[derive(Debug, Default)]
pub struct Color {
    pub c: FloatXYZ,
    pub alpha: Float,
    pub children: Vec<Child>,
}

impl Node for Color {
    fn fields(&self) -> Vec<Field<'_>> {
        vec![
            Field::new("c").parameter(&self.c),
            Field::new("alpha").parameter(&self.alpha),
            Field::new("children").children(&self.children),
        ]
    }
}

/// Resize children to `new_size`
#[derive(Debug, Default)]
pub struct Resize {
    pub new_size: FloatXYZ,
    pub auto: Bool,
    pub children: Vec<Child>,
}

impl Node for Resize {
    fn fields(&self) -> Vec<Field<'_>> {
        vec![
            Field::new("new_size").tag("newsize").parameter(&self.new_size),
            Field::new("auto").parameter(&self.auto),
            Field::new("children").children(&self.children),
        ]
    }
}

/// Minkowski sum of the children
#[derive(Debug, Default)]
pub struct Minkowski {
    pub children: Vec<Child>,
}

impl Node for Minkowski {
    fn fields(&self) -> Vec<Field<'_>> {
        vec![Field::new("children").children(&self.children)]
    }
}

impl_wrapper!(Translate, Rotate, Scale, Mirror, Color, Resize, Minkowski);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::function_content;
    use crate::shapes::{Circle, Cube, Sphere};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_apply_transforms() {
        let thing = Child::new(Cube {
            size: Float::new(5.0),
            ..Default::default()
        })
        .apply(Color {
            c: FloatXYZ::xyz(0.1, 0.2, 0.3),
            ..Default::default()
        })
        .apply(translate_to(10.0, 15.0, 20.0));

        assert_eq!(
            function_content(thing.node()).unwrap(),
            "translate(v=[10, 15, 20]) {\n  color(c=[0.1, 0.2, 0.3]) {\n    cube(size=5);\n  }\n}\n"
        );
    }

    #[test]
    fn test_rotate_forms() {
        let scalar = Child::new(Sphere::default()).apply(rotate_around(180.0, 1.0, 0.0, 0.0));
        assert_eq!(
            function_content(scalar.node()).unwrap(),
            "rotate(a=180, v=[1, 0, 0]) {\n  sphere();\n}\n"
        );

        let per_axis = Child::new(Sphere::default()).apply(Rotate {
            a_xyz: FloatXYZ::xyz(90.0, 0.0, 45.0),
            ..Default::default()
        });
        assert_eq!(
            function_content(per_axis.node()).unwrap(),
            "rotate(a=[90, 0, 45]) {\n  sphere();\n}\n"
        );
    }

    #[test]
    fn test_wrapped_child_goes_first() {
        let hull = Child::new(Cube::default()).apply(Minkowski {
            children: vec![Child::new(Sphere::default())],
        });
        assert_eq!(
            function_content(hull.node()).unwrap(),
            "minkowski() {\n  cube();\n  sphere();\n}\n"
        );
    }

    #[test]
    fn test_resize_tag() {
        let resized = Child::new(Circle::default()).apply(Resize {
            new_size: FloatXYZ::xyz(30.0, 60.0, 10.0),
            auto: Bool::new(true),
            ..Default::default()
        });
        assert_eq!(
            function_content(resized.node()).unwrap(),
            "resize(auto=true, newsize=[30, 60, 10]) {\n  circle();\n}\n"
        );
    }

    #[test]
    fn test_scale_and_mirror() {
        let shape = Child::new(Cube::default())
            .apply(Scale {
                v: FloatXYZ::xyz(2.0, 1.0, 1.0),
                ..Default::default()
            })
            .apply(Mirror {
                v: FloatXYZ::xyz(1.0, 0.0, 0.0),
                ..Default::default()
            });
        assert_eq!(
            function_content(shape.node()).unwrap(),
            "mirror(v=[1, 0, 0]) {\n  scale(v=[2, 1, 1]) {\n    cube();\n  }\n}\n"
        );
    }
}

// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Six-sided die with spherical dimples
//!
//! Every part of the die is its own module: a single `dimple`, each
//! `dimples_N` face, the `die_dimples` arrangement and the `die` itself.

use crate::encode::{Child, Field, ModuleName, Node};
use crate::error::{Result, ScadError};
use crate::shapes::{difference_with, rotate_around, translate_to, Cube, Sphere, Union};
use crate::value::Float;
use nalgebra::Vector3;

/// Pip offsets for faces with 0 through 6 dimples, in quarters of the face width
const DIMPLE_POSITIONS: [&[[f64; 2]]; 7] = [
    &[],
    &[[0.0, 0.0]],
    &[[-1.0, -1.0], [1.0, 1.0]],
    &[[-1.0, -1.0], [0.0, 0.0], [1.0, 1.0]],
    &[[-1.0, -1.0], [-1.0, 1.0], [1.0, -1.0], [1.0, 1.0]],
    &[[-1.0, -1.0], [-1.0, 1.0], [0.0, 0.0], [1.0, -1.0], [1.0, 1.0]],
    &[[-1.0, -1.0], [-1.0, 0.0], [-1.0, 1.0], [1.0, -1.0], [1.0, 0.0], [1.0, 1.0]],
];

/// Placement of one face of the die
struct FacePlacement {
    count: usize,
    angle: f64,
    axis: Vector3<f64>,
    /// Unit direction from the die's center to the face
    direction: Vector3<f64>,
}

fn face_placements() -> [FacePlacement; 6] {
    [
        FacePlacement {
            count: 1,
            angle: 0.0,
            axis: Vector3::zeros(),
            direction: Vector3::new(0.0, 0.0, -1.0),
        },
        FacePlacement {
            count: 2,
            angle: 90.0,
            axis: Vector3::new(0.0, 1.0, 0.0),
            direction: Vector3::new(-1.0, 0.0, 0.0),
        },
        FacePlacement {
            count: 3,
            angle: 90.0,
            axis: Vector3::new(1.0, 0.0, 0.0),
            direction: Vector3::new(0.0, 1.0, 0.0),
        },
        FacePlacement {
            count: 4,
            angle: 90.0,
            axis: Vector3::new(-1.0, 0.0, 0.0),
            direction: Vector3::new(0.0, -1.0, 0.0),
        },
        FacePlacement {
            count: 5,
            angle: 90.0,
            axis: Vector3::new(0.0, -1.0, 0.0),
            direction: Vector3::new(1.0, 0.0, 0.0),
        },
        FacePlacement {
            count: 6,
            angle: 180.0,
            axis: Vector3::new(0.0, 1.0, 0.0),
            direction: Vector3::new(0.0, 0.0, 1.0),
        },
    ]
}

/// A sphere cut out of a die face
#[derive(Debug, Clone, PartialEq)]
pub struct Dimple {
    pub name: ModuleName,
    /// How deep the dimple is
    pub depth: f64,
    /// Width of the dimple where it meets the face
    pub diameter: f64,
}

impl Dimple {
    pub fn new(depth: f64, diameter: f64) -> Self {
        Self {
            name: ModuleName::default(),
            depth,
            diameter,
        }
    }

    /// Radius of the sphere whose cap has this depth and diameter
    pub fn sphere_radius(&self) -> f64 {
        (self.depth.powi(2) + (self.diameter / 2.0).powi(2)) / (2.0 * self.depth)
    }
}

impl Node for Dimple {
    fn fields(&self) -> Vec<Field<'_>> {
        vec![Field::new("name").tag("dimple").module_name(&self.name)]
    }

    fn encode_instead(&self) -> Result<Option<Child>> {
        let radius = self.sphere_radius();
        let sphere = Sphere {
            r: Float::new(radius),
            ..Default::default()
        };

        Ok(Some(
            Child::new(sphere)
                .apply(translate_to(0.0, 0.0, radius - self.depth))
                .apply(rotate_around(180.0, 1.0, 0.0, 0.0)),
        ))
    }
}

/// The dimples of one face
#[derive(Debug, Clone, PartialEq)]
pub struct Dimples {
    pub name: ModuleName,
    pub dimple: Dimple,
    /// Width of the face the dimples are arranged on
    pub width: f64,
    /// Number of dimples, 0 through 6
    pub count: usize,
}

impl Node for Dimples {
    fn fields(&self) -> Vec<Field<'_>> {
        vec![Field::new("name").tag("dimples").module_name(&self.name)]
    }

    fn encode_instead(&self) -> Result<Option<Child>> {
        let layout = DIMPLE_POSITIONS.get(self.count).ok_or_else(|| {
            ScadError::substitution(
                self.type_name(),
                format!("Dimples count is {}, must be between 0 and 6", self.count),
            )
        })?;

        let quarter = self.width / 4.0;
        let children = layout
            .iter()
            .map(|[x, y]| {
                Child::new(self.dimple.clone()).apply(translate_to(x * quarter, y * quarter, 0.0))
            })
            .collect();

        Ok(Some(Child::new(Union { children })))
    }
}

/// All six faces of dimples for a die
#[derive(Debug, Clone, PartialEq)]
pub struct DieDimples {
    pub name: ModuleName,
    pub dimple: Dimple,
    pub width: f64,
}

impl Node for DieDimples {
    fn fields(&self) -> Vec<Field<'_>> {
        vec![Field::new("name").tag("die_dimples").module_name(&self.name)]
    }

    fn encode_instead(&self) -> Result<Option<Child>> {
        let children = face_placements()
            .iter()
            .map(|face| {
                let dimples = Dimples {
                    name: ModuleName::new(format!("dimples_{}", face.count)),
                    dimple: self.dimple.clone(),
                    width: self.width,
                    count: face.count,
                };
                let offset = face.direction * (self.width / 2.0);

                Child::new(dimples)
                    .apply(rotate_around(face.angle, face.axis.x, face.axis.y, face.axis.z))
                    .apply(translate_to(offset.x, offset.y, offset.z))
            })
            .collect();

        Ok(Some(Child::new(Union { children })))
    }
}

/// A die: a centered cube with dimples removed from each face
#[derive(Debug, Clone, PartialEq)]
pub struct Die {
    pub name: ModuleName,
    pub dimple: Dimple,
    /// Width of each face
    pub width: f64,
}

impl Default for Die {
    fn default() -> Self {
        Self {
            name: ModuleName::default(),
            dimple: Dimple::new(2.0, 10.0),
            width: 60.0,
        }
    }
}

impl Node for Die {
    fn fields(&self) -> Vec<Field<'_>> {
        vec![Field::new("name").tag("die").module_name(&self.name)]
    }

    fn encode_instead(&self) -> Result<Option<Child>> {
        let half = -self.width / 2.0;
        let cube = Cube {
            size: Float::new(self.width),
            ..Default::default()
        };
        let dimples = DieDimples {
            name: ModuleName::default(),
            dimple: self.dimple.clone(),
            width: self.width,
        };

        Ok(Some(
            Child::new(cube)
                .apply(translate_to(half, half, half))
                .apply(difference_with(vec![Child::new(dimples)])),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encode::encode;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_sphere_radius() {
        // depth 2, diameter 10: (4 + 25) / 4
        assert_eq!(Dimple::new(2.0, 10.0).sphere_radius(), 7.25);
    }

    #[test]
    fn test_dimple_module() {
        let function = encode(&Dimple::new(2.0, 10.0)).unwrap();
        assert_eq!(function.module_name.as_deref(), Some("dimple"));
        assert_eq!(
            function.render_module(),
            vec![
                "module dimple() {",
                "  rotate(a=180, v=[1, 0, 0]) {",
                "    translate(v=[0, 0, 5.25]) {",
                "      sphere(r=7.25);",
                "    }",
                "  }",
                "}",
                "dimple();",
            ]
        );
    }

    #[test]
    fn test_dimples_face() {
        let face = Dimples {
            name: ModuleName::new("dimples_2"),
            dimple: Dimple::new(2.0, 10.0),
            width: 60.0,
            count: 2,
        };
        let function = encode(&face).unwrap();

        assert_eq!(function.module_name.as_deref(), Some("dimples_2"));
        assert_eq!(
            function.render_call(),
            vec![
                "union() {",
                "  translate(v=[-15, -15, 0]) {",
                "    dimple();",
                "  }",
                "  translate(v=[15, 15, 0]) {",
                "    dimple();",
                "  }",
                "}",
            ]
        );
    }

    #[test]
    fn test_dimples_count_out_of_range() {
        let face = Dimples {
            name: ModuleName::default(),
            dimple: Dimple::new(2.0, 10.0),
            width: 60.0,
            count: 7,
        };
        assert!(matches!(
            encode(&face),
            Err(ScadError::Substitution { type_name: "Dimples", .. })
        ));
    }

    #[test]
    fn test_die_structure() {
        let function = encode(&Die::default()).unwrap();

        assert_eq!(function.module_name.as_deref(), Some("die"));
        assert_eq!(function.name, "difference");
        assert_eq!(
            function.use_directives("scad").unwrap(),
            vec!["use <die_dimples/die_dimples.scad>"]
        );

        let faces = function.children[1].deduplicate_modules().unwrap();
        let names: Vec<_> = faces
            .iter()
            .filter_map(|face| face.module_name.as_deref())
            .collect();
        assert_eq!(
            names,
            vec!["dimples_1", "dimples_2", "dimples_3", "dimples_4", "dimples_5", "dimples_6"]
        );
    }
}

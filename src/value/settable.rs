// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

use super::ParamText;
use crate::encode::ParameterProvider;
use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

/// A value paired with a flag recording whether it was explicitly provided
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Value<T> {
    value: T,
    set: bool,
}

impl<T> Value<T> {
    /// Create an explicitly set value
    pub fn new(value: T) -> Self {
        Self { value, set: true }
    }

    /// Explicitly set the value in place
    pub fn set(&mut self, value: T) {
        self.value = value;
        self.set = true;
    }

    pub fn is_set(&self) -> bool {
        self.set
    }

    /// The stored value; the zero value of `T` when never set
    pub fn value(&self) -> &T {
        &self.value
    }

    /// The stored value only if it was explicitly set
    pub fn get(&self) -> Option<&T> {
        self.set.then_some(&self.value)
    }
}

impl<T: ParamText> Value<T> {
    /// Rendered text and whether the value was set
    pub fn rendered_parameter(&self) -> (String, bool) {
        (self.value.param_text(), self.set)
    }
}

impl<T: ParamText> ParameterProvider for Value<T> {
    fn parameter_value(&self) -> (String, bool) {
        self.rendered_parameter()
    }
}

impl<T> From<T> for Value<T> {
    fn from(value: T) -> Self {
        Self::new(value)
    }
}

impl From<&str> for Value<String> {
    fn from(value: &str) -> Self {
        Self::new(value.to_string())
    }
}

impl Value<[f64; 2]> {
    pub fn xy(x: f64, y: f64) -> Self {
        Self::new([x, y])
    }
}

impl Value<[f64; 3]> {
    pub fn xyz(x: f64, y: f64, z: f64) -> Self {
        Self::new([x, y, z])
    }
}

impl From<Vector3<f64>> for Value<[f64; 3]> {
    fn from(v: Vector3<f64>) -> Self {
        Self::xyz(v.x, v.y, v.z)
    }
}

impl Value<Vec<[f64; 2]>> {
    /// Build absolute points from a starting point and successive relative moves
    pub fn relative(start: [f64; 2], moves: &[[f64; 2]]) -> Self {
        let mut current = start;
        let mut points = Vec::with_capacity(moves.len() + 1);
        points.push(current);
        for delta in moves {
            current = [current[0] + delta[0], current[1] + delta[1]];
            points.push(current);
        }
        Self::new(points)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::{Bool, Float, FloatXYZ, FloatsXY, Int, Str};

    #[test]
    fn test_unset_is_not_rendered() {
        let f = Float::default();
        assert!(!f.is_set());
        assert_eq!(*f.value(), 0.0);
        assert_eq!(f.get(), None);
        assert_eq!(f.rendered_parameter(), ("0".to_string(), false));

        let s = Str::default();
        assert!(!s.parameter_value().1);
    }

    #[test]
    fn test_explicit_default_looking_value_is_set() {
        let b = Bool::new(false);
        assert_eq!(b.rendered_parameter(), ("false".to_string(), true));

        let i = Int::new(0);
        assert_eq!(i.rendered_parameter(), ("0".to_string(), true));
    }

    #[test]
    fn test_set_in_place() {
        let mut f = Float::default();
        f.set(180.0);
        assert!(f.is_set());
        assert_eq!(f.parameter_value(), ("180".to_string(), true));
    }

    #[test]
    fn test_xyz_from_vector() {
        let v: FloatXYZ = Vector3::new(1.0, 0.5, -2.0).into();
        assert_eq!(v.rendered_parameter().0, "[1, 0.5, -2]");
    }

    #[test]
    fn test_relative_points() {
        // starting at [1, 1], move by 2 units at a time to form a square
        let square = FloatsXY::relative([1.0, 1.0], &[[-2.0, 0.0], [0.0, -2.0], [2.0, 0.0]]);
        assert_eq!(
            square.rendered_parameter().0,
            "[ [1, 1], [-1, 1], [-1, -1], [1, -1] ]"
        );
    }

    #[test]
    fn test_string_from_str() {
        let s: Str = "Liberation Sans".into();
        assert_eq!(s.rendered_parameter(), ("\"Liberation Sans\"".to_string(), true));
    }
}

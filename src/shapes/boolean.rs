// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Boolean operations

use super::impl_wrapper;
use crate::encode::{Child, Field, Node};

/// Union of the children
#[derive(Debug, Default)]
pub struct Union {
    pub children: Vec<Child>,
}

impl Node for Union {
    fn fields(&self) -> Vec<Field<'_>> {
        vec![Field::new("children").children(&self.children)]
    }
}

/// The first child minus all others
#[derive(Debug, Default)]
pub struct Difference {
    pub children: Vec<Child>,
}

impl Node for Difference {
    fn fields(&self) -> Vec<Field<'_>> {
        vec![Field::new("children").children(&self.children)]
    }
}

/// Intersection of the children
#[derive(Debug, Default)]
pub struct Intersection {
    pub children: Vec<Child>,
}

impl Node for Intersection {
    fn fields(&self) -> Vec<Field<'_>> {
        vec![Field::new("children").children(&self.children)]
    }
}

impl_wrapper!(Union, Difference, Intersection);

/// Wrapper that unions a child with `additions`
pub fn union_with(additions: Vec<Child>) -> Union {
    Union {
        children: additions,
    }
}

/// Wrapper that subtracts `subtractions` from a child
pub fn difference_with(subtractions: Vec<Child>) -> Difference {
    Difference {
        children: subtractions,
    }
}

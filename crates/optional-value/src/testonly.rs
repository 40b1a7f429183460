//! Test-only functionality shared among multiple test modules.

use std::collections::HashMap;

use crate::ZeroValue;

#[derive(Debug, Clone, Copy, Default, PartialEq, ZeroValue)]
#[zero_value(crate = crate)]
pub(crate) struct Point {
    pub x: i32,
    pub y: i32,
}

#[derive(Debug, Clone, Default, PartialEq, ZeroValue)]
#[zero_value(crate = crate)]
pub(crate) struct Segment {
    pub start: Point,
    pub end: Point,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, ZeroValue)]
#[zero_value(crate = crate)]
pub(crate) struct Meters(pub f64);

#[derive(Debug, Clone, Copy, PartialEq, ZeroValue)]
#[zero_value(crate = crate)]
pub(crate) struct Marker;

/// Not comparable because of the function pointer field; only `ZeroValue` can be used.
#[derive(Debug, Clone, ZeroValue)]
#[zero_value(crate = crate)]
pub(crate) struct Registry {
    pub entries: Vec<String>,
    pub weights: HashMap<String, u32>,
    #[zero_value(skip)]
    pub hasher: fn(&str) -> u64,
}

pub(crate) fn dummy_hasher(s: &str) -> u64 {
    s.len() as u64
}

#[derive(Debug, Clone, PartialEq, ZeroValue)]
#[zero_value(crate = crate)]
pub(crate) enum Shape {
    #[zero_value(zero)]
    Nothing,
    Circle {
        center: Point,
        radius: f64,
    },
    Polygon(Vec<Point>),
}

#[derive(Debug, Clone, PartialEq, ZeroValue)]
#[zero_value(crate = crate)]
pub(crate) enum Token {
    #[zero_value(zero)]
    Raw(String, #[zero_value(skip)] usize),
    Parsed {
        value: u64,
    },
}

#[derive(Debug, Clone, PartialEq, ZeroValue)]
#[zero_value(crate = crate)]
pub(crate) struct Pair<T>(pub T, pub T);

use copyctor::prelude::*;
use std::collections::BTreeMap;

///
/// Point
///

#[derive(Clone, Debug, Default, Eq, PartialEq, CopyConstructor)]
pub struct Point {
    pub x: i32,

    #[copy_constructor(exclude)]
    pub y: i32,
}

///
/// Doubler
/// copier used by `Sample`
///

pub struct Doubler;

impl Doubler {
    #[must_use]
    pub fn copy(values: &[u32]) -> Vec<u32> {
        values.iter().map(|v| v * 2).collect()
    }
}

///
/// Sample
///

#[derive(Clone, Debug, PartialEq, CopyConstructor)]
#[copy_constructor(depth = "Reference")]
pub struct Sample {
    pub label: String,

    #[copy_constructor(reference)]
    pub active: bool,

    #[copy_constructor(copy(using = "Doubler"))]
    pub values: Vec<u32>,

    #[copy_constructor(exclude)]
    pub cache: BTreeMap<String, u32>,
}

///
/// Wrapper
///

#[derive(Clone, Debug, PartialEq, CopyConstructor)]
pub struct Wrapper<T> {
    pub inner: T,

    #[copy_constructor(exclude)]
    pub previous: Option<T>,
}

///
/// Marker
///

#[derive(Debug, PartialEq, CopyConstructor)]
pub struct Marker;

///
/// Type
/// parameter name `type` falls back to `source`
///

#[derive(Debug, PartialEq, CopyConstructor)]
pub struct Type {
    pub r#type: String,
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn point_copies_x_and_resets_y() {
        let point = Point { x: 3, y: 4 };

        assert_eq!(Point::copy_from(&point), Point { x: 3, y: 0 });
    }

    #[test]
    fn sample_applies_each_policy() {
        let mut cache = BTreeMap::new();
        cache.insert("hits".to_string(), 7);
        let sample = Sample {
            label: "rgb".to_string(),
            active: true,
            values: vec![1, 2, 3],
            cache,
        };

        let copy = Sample::copy_from(&sample);
        assert_eq!(copy.label, "rgb");
        assert!(copy.active);
        assert_eq!(copy.values, vec![2, 4, 6]);
        assert!(copy.cache.is_empty());
        // the source is untouched
        assert_eq!(sample.values, vec![1, 2, 3]);
    }

    #[test]
    fn generic_wrapper_keeps_type_parameter() {
        let wrapper = Wrapper {
            inner: "now".to_string(),
            previous: Some("then".to_string()),
        };

        let copy = Wrapper::copy_from(&wrapper);
        assert_eq!(copy.inner, "now");
        assert_eq!(copy.previous, None);
    }

    #[test]
    fn unit_struct_copies_trivially() {
        assert_eq!(Marker::copy_from(&Marker), Marker);
    }

    #[test]
    fn keyword_parameter_names_fall_back() {
        let ty = Type {
            r#type: "alias".to_string(),
        };

        assert_eq!(Type::copy_from(&ty).r#type, "alias");
    }
}

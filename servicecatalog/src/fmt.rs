/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! `Display` support for model shapes.
//!
//! A shape renders as `{Name: value,Name: value}`, listing only the members that are set, in
//! declaration order, under their wire names. Lists render as `[a, b]`, maps as `{k=v, k2=v2}`.

use smithy_types::Instant;
use std::collections::BTreeMap;
use std::fmt;

/// A value that can appear on the right-hand side of `Name: value`.
pub(crate) trait Render {
    fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result;
}

macro_rules! render_with_display {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl $crate::fmt::Render for $ty {
                fn render(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                    ::std::fmt::Display::fmt(self, f)
                }
            }
        )+
    };
}
pub(crate) use render_with_display;

render_with_display!(String, bool, i32, Instant);

impl<T: Render> Render for Vec<T> {
    fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, item) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            item.render(f)?;
        }
        f.write_str("]")
    }
}

impl<K: Render, V: Render> Render for BTreeMap<K, V> {
    fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, (key, value)) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            key.render(f)?;
            f.write_str("=")?;
            value.render(f)?;
        }
        f.write_str("}")
    }
}

/// Writes the members of one shape that are present.
pub(crate) struct PresentFields<'a, 'b> {
    f: &'a mut fmt::Formatter<'b>,
    written: usize,
}

impl<'a, 'b> PresentFields<'a, 'b> {
    pub(crate) fn new(f: &'a mut fmt::Formatter<'b>) -> Result<Self, fmt::Error> {
        f.write_str("{")?;
        Ok(PresentFields { f, written: 0 })
    }

    pub(crate) fn field<T: Render>(&mut self, name: &str, value: &Option<T>) -> fmt::Result {
        let value = match value {
            Some(value) => value,
            None => return Ok(()),
        };
        if self.written > 0 {
            self.f.write_str(",")?;
        }
        self.written += 1;
        self.f.write_str(name)?;
        self.f.write_str(": ")?;
        value.render(self.f)
    }

    pub(crate) fn finish(self) -> fmt::Result {
        self.f.write_str("}")
    }
}

#[cfg(test)]
mod test {
    use super::{PresentFields, Render};
    use std::collections::BTreeMap;
    use std::fmt;

    struct Sample {
        name: Option<String>,
        count: Option<i32>,
        tags: Option<Vec<String>>,
        labels: Option<BTreeMap<String, Vec<String>>>,
    }

    impl fmt::Display for Sample {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            let mut out = PresentFields::new(f)?;
            out.field("Name", &self.name)?;
            out.field("Count", &self.count)?;
            out.field("Tags", &self.tags)?;
            out.field("Labels", &self.labels)?;
            out.finish()
        }
    }

    #[test]
    fn empty_shape_renders_braces() {
        let sample = Sample {
            name: None,
            count: None,
            tags: None,
            labels: None,
        };
        assert_eq!(sample.to_string(), "{}");
    }

    #[test]
    fn only_present_fields_are_rendered() {
        let sample = Sample {
            name: None,
            count: Some(3),
            tags: Some(vec!["a".to_owned(), "b".to_owned()]),
            labels: None,
        };
        assert_eq!(sample.to_string(), "{Count: 3,Tags: [a, b]}");
    }

    #[test]
    fn maps_render_in_key_order() {
        let mut labels = BTreeMap::new();
        labels.insert("z".to_owned(), vec!["1".to_owned()]);
        labels.insert("a".to_owned(), vec![]);
        let sample = Sample {
            name: Some("n".to_owned()),
            count: None,
            tags: None,
            labels: Some(labels),
        };
        assert_eq!(sample.to_string(), "{Name: n,Labels: {a=[], z=[1]}}");
    }

    #[test]
    fn vec_render_matches_display_of_elements() {
        struct Wrapper(Vec<bool>);
        impl fmt::Display for Wrapper {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                self.0.render(f)
            }
        }
        assert_eq!(Wrapper(vec![true, false]).to_string(), "[true, false]");
    }
}

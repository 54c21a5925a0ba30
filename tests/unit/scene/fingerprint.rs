use super::*;
use crate::{
    foundation::core::{Point, Rect},
    scene::model::Node,
};

#[test]
fn equal_trees_share_fingerprints() {
    let make = |o: f64| {
        SceneTree::new(vec![
            Node::rect("r", Rect::new(0.0, 0.0, 4.0, 4.0)).opacity(o),
            Node::text("t", Point::new(1.0, 2.0), "abc", 12.0),
        ])
    };
    let a = fingerprint_tree(&make(0.5)).unwrap();
    let b = fingerprint_tree(&make(0.5)).unwrap();
    let c = fingerprint_tree(&make(0.25)).unwrap();
    assert_eq!(a, b);
    assert_ne!(a, c);
}

#[test]
fn empty_tree_has_a_fingerprint() {
    let a = fingerprint_tree(&SceneTree::empty()).unwrap();
    assert_eq!(a, fingerprint_tree(&SceneTree::default()).unwrap());
}

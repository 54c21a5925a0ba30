use super::*;

fn sample_tree() -> SceneTree {
    SceneTree::new(vec![
        Node::group(
            "card",
            vec![
                Node::rect("bg", Rect::new(0.0, 0.0, 100.0, 50.0))
                    .rounded(8.0)
                    .fill(Rgba8Premul::opaque(255, 255, 255)),
                Node::text("label", Point::new(10.0, 30.0), "hi", 16.0)
                    .weight(700)
                    .opacity(0.5),
            ],
        )
        .opacity(0.5)
        .translate(20.0, 10.0),
        Node::circle("dot", Point::new(5.0, 5.0), 3.0).opacity(0.0),
    ])
}

#[test]
fn leaves_compose_opacity_and_transform() {
    let tree = sample_tree();
    let leaves = tree.leaves();
    assert_eq!(leaves.len(), 3);
    assert_eq!(leaves[0].path, "card/bg");
    assert_eq!(leaves[0].opacity, 0.5);
    assert_eq!(leaves[1].path, "card/label");
    assert_eq!(leaves[1].opacity, 0.25);
    assert_eq!(
        leaves[0].transform * Point::new(0.0, 0.0),
        Point::new(20.0, 10.0)
    );
}

#[test]
fn visible_leaves_skip_transparent_nodes() {
    let tree = sample_tree();
    let visible: Vec<_> = tree.visible_leaves().into_iter().map(|l| l.path).collect();
    assert_eq!(visible, vec!["card/bg", "card/label"]);
    assert!(!tree.is_transparent());
    assert!(SceneTree::empty().is_transparent());
}

#[test]
fn opacity_is_clamped() {
    let n = Node::rect("r", Rect::ZERO).opacity(3.0);
    assert_eq!(n.style.opacity, 1.0);
    let n = Node::rect("r", Rect::ZERO).opacity(-1.0);
    assert_eq!(n.style.opacity, 0.0);
    let n = Node::rect("r", Rect::ZERO).opacity(f64::NAN);
    assert_eq!(n.style.opacity, 0.0);
}

#[test]
fn style_scales_about_origin() {
    let style = Style {
        scale: 2.0,
        origin: Point::new(10.0, 10.0),
        ..Style::default()
    };
    assert_eq!(style.to_affine() * Point::new(10.0, 10.0), Point::new(10.0, 10.0));
    assert_eq!(style.to_affine() * Point::new(11.0, 10.0), Point::new(12.0, 10.0));
    assert_eq!(Style::default().to_affine(), Affine::IDENTITY);
}

#[test]
fn find_walks_id_paths() {
    let tree = sample_tree();
    assert!(matches!(
        tree.find("card/label").map(|n| &n.shape),
        Some(Shape::Text { weight: 700, .. })
    ));
    assert!(tree.find("card/missing").is_none());
    assert!(tree.find("dot").is_some());
}

#[test]
fn serializes_with_shape_tags() {
    let json = serde_json::to_value(sample_tree()).unwrap();
    assert_eq!(json["nodes"][0]["shape"]["kind"], "group");
    assert_eq!(json["nodes"][1]["shape"]["kind"], "circle");
}

use vectree::{
    LineCap, LineJoin, Node, NodeKind, PaintKind, Path, SpreadMethod, Tree, VectreeError,
};

fn parse(svg: &str) -> Tree {
    Tree::from_data(svg.as_bytes()).expect("fixture must parse")
}

/// Depth-first search for the first path node in a subtree.
fn find_path<'a>(node: Node<'a>) -> Option<Path<'a>> {
    if let Some(path) = node.as_path() {
        return Some(path);
    }
    let group = node.as_group()?;
    group.children().into_iter().find_map(find_path)
}

fn first_path(tree: &Tree) -> Path<'_> {
    tree.root()
        .children()
        .into_iter()
        .find_map(find_path)
        .expect("fixture must contain a path")
}

#[test]
fn parse_reports_size_and_content() {
    let tree = parse(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="100" height="100">
            <rect width="100" height="100" fill="red"/>
        </svg>"#,
    );

    let size = tree.size();
    assert_eq!(size.width, 100.0);
    assert_eq!(size.height, 100.0);
    assert!(!tree.is_empty());
    assert!(tree.root().child_count() > 0);
}

#[test]
fn groups_only_document_reports_empty() {
    let tree = parse(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="100" height="100">
            <g/>
            <g><g/></g>
        </svg>"#,
    );
    assert!(tree.is_empty());
}

#[test]
fn invalid_document_is_parse_failed() {
    let err = Tree::from_data(b"not an svg").unwrap_err();
    assert!(matches!(err, VectreeError::ParseFailed(_)));
}

#[test]
fn downcasting_matches_node_kind() {
    let tree = parse(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="100" height="100">
            <rect width="50" height="50" fill="red"/>
            <g opacity="0.5"><circle cx="75" cy="75" r="20" fill="blue"/></g>
        </svg>"#,
    );

    for child in tree.root().children() {
        match child.kind() {
            NodeKind::Group => {
                assert!(child.as_group().is_some());
                assert!(child.as_path().is_none());
                assert!(child.as_image().is_none());
                assert!(child.as_text().is_none());
            }
            NodeKind::Path => {
                assert!(child.as_path().is_some());
                assert!(child.as_group().is_none());
                assert!(child.as_image().is_none());
                assert!(child.as_text().is_none());
            }
            NodeKind::Image => assert!(child.as_image().is_some()),
            NodeKind::Text => assert!(child.as_text().is_some()),
        }
    }
}

#[test]
fn child_access_is_bounds_checked() {
    let tree = parse(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="100" height="100">
            <rect width="100" height="100" fill="red"/>
        </svg>"#,
    );
    let root = tree.root();

    assert!(root.child_at(0).is_some());
    assert!(root.child_at(root.child_count()).is_none());
    assert!(root.child_at(usize::MAX).is_none());
    assert_eq!(root.children().len(), root.child_count());
}

#[test]
fn path_segments_and_stroke_attributes() {
    let tree = parse(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="100" height="100">
            <path d="M10 10 L90 90" stroke="black" stroke-width="2"/>
        </svg>"#,
    );
    let path = first_path(&tree);

    assert!(path.is_visible());
    assert!(path.segment_count() >= 2);
    assert_eq!(path.segments().len(), path.segment_count());
    assert!(path.segment_at(path.segment_count()).is_none());

    match path.segment_at(0).expect("first segment") {
        vectree::PathSegment::MoveTo(p) => {
            assert_eq!(p.x, 10.0);
            assert_eq!(p.y, 10.0);
        }
        other => panic!("expected MoveTo, got {other:?}"),
    }

    assert!(!path.has_fill());
    assert!(path.has_stroke());
    let stroke = path.stroke().expect("stroke");
    assert_eq!(stroke.paint_kind(), PaintKind::Color);
    let color = stroke.color().expect("solid stroke color");
    assert_eq!((color.r, color.g, color.b, color.a), (0, 0, 0, 255));
    assert_eq!(stroke.width(), 2.0);
    assert_eq!(stroke.opacity(), 1.0);
    assert_eq!(stroke.line_cap(), LineCap::Butt);
    assert_eq!(stroke.line_join(), LineJoin::Miter);
    assert!(stroke.dash_array().is_empty());
    assert_eq!(stroke.dash_offset(), 0.0);
}

#[test]
fn dashed_stroke_exposes_dash_array() {
    let tree = parse(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="100" height="100">
            <path d="M0 50 L100 50" stroke="black" stroke-dasharray="4 2" stroke-dashoffset="1"/>
        </svg>"#,
    );
    let stroke = first_path(&tree).stroke().expect("stroke");

    assert_eq!(stroke.dash_array(), vec![4.0, 2.0]);
    assert_eq!(stroke.dash_offset(), 1.0);
}

#[test]
fn fill_color_and_rule() {
    let tree = parse(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="100" height="100">
            <rect width="100" height="100" fill="red"/>
        </svg>"#,
    );
    let path = first_path(&tree);

    assert!(path.has_fill());
    let fill = path.fill().expect("fill");
    assert_eq!(fill.paint_kind(), PaintKind::Color);
    let color = fill.color().expect("solid fill color");
    assert_eq!((color.r, color.g, color.b, color.a), (255, 0, 0, 255));
    assert_eq!(fill.rule(), vectree::FillRule::NonZero);
    assert_eq!(fill.opacity(), 1.0);
    assert!(fill.linear_gradient().is_none());
    assert!(fill.radial_gradient().is_none());
}

#[test]
fn linear_gradient_stops_are_indexable() {
    let tree = parse(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="100" height="100">
            <defs>
                <linearGradient id="lg">
                    <stop offset="0" stop-color="red"/>
                    <stop offset="1" stop-color="blue"/>
                </linearGradient>
            </defs>
            <rect width="100" height="100" fill="url(#lg)"/>
        </svg>"#,
    );
    let fill = first_path(&tree).fill().expect("fill");

    assert_eq!(fill.paint_kind(), PaintKind::LinearGradient);
    let lg = fill.linear_gradient().expect("linear gradient");
    assert_eq!(lg.id(), "lg");
    assert_eq!(lg.spread_method(), SpreadMethod::Pad);
    assert!(lg.x2() > lg.x1());

    assert_eq!(lg.stop_count(), 2);
    assert_eq!(lg.stops().len(), 2);
    let first = lg.stop_at(0).expect("first stop");
    let last = lg.stop_at(1).expect("second stop");
    assert_eq!(first.offset, 0.0);
    assert_eq!(last.offset, 1.0);
    assert_eq!((first.color.r, first.color.g, first.color.b), (255, 0, 0));
    assert_eq!((last.color.r, last.color.g, last.color.b), (0, 0, 255));
    assert!(lg.stop_at(2).is_none());
}

#[test]
fn stop_opacity_folds_into_color_alpha() {
    let tree = parse(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="100" height="100">
            <defs>
                <linearGradient id="lg">
                    <stop offset="0" stop-color="red" stop-opacity="0.5"/>
                    <stop offset="1" stop-color="blue"/>
                </linearGradient>
            </defs>
            <rect width="100" height="100" fill="url(#lg)"/>
        </svg>"#,
    );
    let lg = first_path(&tree)
        .fill()
        .and_then(|f| f.linear_gradient())
        .expect("linear gradient");

    let translucent = lg.stop_at(0).expect("first stop");
    assert_eq!(
        (translucent.color.r, translucent.color.g, translucent.color.b),
        (255, 0, 0)
    );
    assert!(
        (i32::from(translucent.color.a) - 128).abs() <= 1,
        "alpha {}",
        translucent.color.a
    );

    let opaque = lg.stop_at(1).expect("second stop");
    assert_eq!(opaque.color.a, 255);
}

#[test]
fn pattern_paint_is_classified_without_structure() {
    let tree = parse(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="100" height="100">
            <defs>
                <pattern id="p" width="10" height="10" patternUnits="userSpaceOnUse">
                    <rect width="10" height="10" fill="red"/>
                </pattern>
            </defs>
            <rect width="100" height="100" fill="url(#p)"/>
        </svg>"#,
    );
    let fill = first_path(&tree).fill().expect("fill");

    assert_eq!(fill.paint_kind(), PaintKind::Pattern);
    assert!(matches!(fill.paint(), vectree::Paint::Pattern));
    assert!(fill.color().is_none());
    assert!(fill.linear_gradient().is_none());
    assert!(fill.radial_gradient().is_none());
}

#[test]
fn radial_gradient_geometry() {
    let tree = parse(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="100" height="100">
            <defs>
                <radialGradient id="rg">
                    <stop offset="0" stop-color="white"/>
                    <stop offset="1" stop-color="black"/>
                </radialGradient>
            </defs>
            <rect width="100" height="100" fill="url(#rg)"/>
        </svg>"#,
    );
    let fill = first_path(&tree).fill().expect("fill");

    assert_eq!(fill.paint_kind(), PaintKind::RadialGradient);
    let rg = fill.radial_gradient().expect("radial gradient");
    assert_eq!(rg.id(), "rg");
    assert!(rg.r() > 0.0);
    assert_eq!(rg.stop_count(), 2);
    assert!(rg.stop_at(5).is_none());
}

#[test]
fn group_attributes_and_blend_mode() {
    let tree = parse(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="100" height="100">
            <g id="g1" opacity="0.5" style="mix-blend-mode:multiply">
                <rect width="100" height="100" fill="red"/>
            </g>
        </svg>"#,
    );

    let group = tree
        .root()
        .children()
        .into_iter()
        .find_map(|n| n.as_group())
        .expect("group survives parsing");

    assert_eq!(group.id(), "g1");
    assert!((group.opacity() - 0.5).abs() < 1e-6);
    assert_eq!(group.blend_mode(), vectree::BlendMode::Multiply);
    assert!(!group.has_mask());
    assert!(!group.has_clip_path());
    assert!(group.mask().is_none());
    assert!(group.clip_path().is_none());
}

#[test]
fn absolute_transform_composes_ancestors() {
    let tree = parse(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="100" height="100">
            <g transform="translate(10 20)">
                <rect width="10" height="10" fill="red"/>
            </g>
        </svg>"#,
    );
    let path = first_path(&tree);

    let abs = path.abs_transform();
    assert!((abs.e - 10.0).abs() < 1e-4);
    assert!((abs.f - 20.0).abs() < 1e-4);
    assert!(!abs.is_identity());
}

#[test]
fn mask_exposes_content_and_geometry() {
    let tree = parse(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="100" height="100">
            <defs>
                <mask id="m">
                    <rect width="100" height="100" fill="white"/>
                </mask>
            </defs>
            <g mask="url(#m)">
                <rect width="100" height="100" fill="red"/>
            </g>
        </svg>"#,
    );

    let group = tree
        .root()
        .children()
        .into_iter()
        .filter_map(|n| n.as_group())
        .find(|g| g.has_mask())
        .expect("masked group");

    let mask = group.mask().expect("mask");
    assert_eq!(mask.id(), "m");
    assert_eq!(mask.kind(), vectree::MaskKind::Luminance);
    assert!(mask.rect().width > 0.0);
    assert!(mask.rect().height > 0.0);
    assert!(mask.root().child_count() > 0);
    assert!(mask.nested_mask().is_none());
}

#[test]
fn clip_path_exposes_content() {
    let tree = parse(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="100" height="100">
            <defs>
                <clipPath id="c">
                    <rect width="50" height="50"/>
                </clipPath>
            </defs>
            <g clip-path="url(#c)">
                <rect width="100" height="100" fill="red"/>
            </g>
        </svg>"#,
    );

    let group = tree
        .root()
        .children()
        .into_iter()
        .filter_map(|n| n.as_group())
        .find(|g| g.has_clip_path())
        .expect("clipped group");

    let clip = group.clip_path().expect("clip path");
    assert_eq!(clip.id(), "c");
    assert!(clip.root().child_count() > 0);
}

#[test]
fn absent_id_is_empty_string() {
    let tree = parse(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="100" height="100">
            <rect width="100" height="100" fill="red"/>
        </svg>"#,
    );
    assert_eq!(first_path(&tree).id(), "");
    assert_eq!(tree.root().id(), "");
}

#[test]
fn text_nodes_expose_flattened_paths() {
    // Font resolution depends on the host; the contract under test is that a
    // surviving text node downcasts correctly and exposes its flattened
    // group, not that any particular font exists.
    let tree = parse(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="100" height="100">
            <text x="10" y="50" font-size="20">hi</text>
            <rect width="10" height="10" fill="red"/>
        </svg>"#,
    );

    for child in tree.root().children() {
        if child.kind() == NodeKind::Text {
            let text = child.as_text().expect("text downcast");
            assert!(child.as_path().is_none());
            let flattened = text.flattened();
            assert_eq!(flattened.children().len(), flattened.child_count());
        }
    }
}

#[test]
fn tree_is_send_and_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Tree>();
}

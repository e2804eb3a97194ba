use super::*;

fn widths(spec: LayoutSpec) -> (usize, usize, usize) {
    (spec.id_width, spec.name_width, spec.path_width)
}

#[test]
fn width_80_gives_surplus_to_name() {
    let spec = compute_layout(80);
    assert!(!spec.stacked);
    assert_eq!(widths(spec), (16, 44, 14));
}

#[test]
fn width_25_is_stacked() {
    assert!(compute_layout(25).stacked);
}

#[test]
fn exact_default_width_returns_defaults() {
    let spec = compute_layout(56);
    assert!(!spec.stacked);
    assert_eq!(widths(spec), (16, 20, 14));
}

#[test]
fn narrow_width_shrinks_id_before_name() {
    // deficit 6: id gives 4 (down to its minimum), name gives 2
    let spec = compute_layout(50);
    assert!(!spec.stacked);
    assert_eq!(widths(spec), (12, 18, 14));
}

#[test]
fn minimum_content_width_hits_every_minimum() {
    let spec = compute_layout(42);
    assert!(!spec.stacked);
    assert_eq!(widths(spec), (12, 14, 10));
    assert!(compute_layout(41).stacked);
}

#[test]
fn growth_stops_at_caps_and_wastes_the_rest() {
    // content 200: name +30, id +20, path +12, 88 columns unused
    let spec = compute_layout(206);
    assert_eq!(widths(spec), (36, 50, 26));
}

#[test]
fn name_cap_spills_into_id() {
    // content 90: surplus 40, name takes 30, id takes 10
    let spec = compute_layout(96);
    assert_eq!(widths(spec), (26, 50, 14));
}

#[test]
fn stacked_iff_too_narrow_and_tabular_fits_otherwise() {
    for w in 0..=400u16 {
        let spec = compute_layout(w);
        let expect_stacked = w < 20 || (w as usize) - 6 < 36;
        assert_eq!(spec.stacked, expect_stacked, "width {}", w);
        if !spec.stacked {
            let total = spec.id_width + spec.name_width + spec.path_width + SEPARATOR_WIDTH;
            assert!(total <= w as usize, "width {} total {}", w, total);
            assert!(spec.id_width >= 12 && spec.name_width >= 14 && spec.path_width >= 10);
        }
    }
}

// File: crates/scatter-core/tests/scale.rs
// Purpose: Scale factors and data-to-pixel mapping of a single 2-D plot.

use scatter_core::{scale_factor, AxisScale, Bounds, RectI32, ScatterPlot};

// 125 px cell leaves a 100 x 100 plot area after the 25 px label band.
const CELL: RectI32 = RectI32::from_ltwh(0, 0, 125, 125);

#[test]
fn factor_spreads_range_over_span() {
    assert_eq!(scale_factor(0.0, 10.0, 100), 10.0);
    assert_eq!(scale_factor(10.0, 0.0, 100), 10.0);
    assert_eq!(scale_factor(-2.0, 2.0, 100), 25.0);
}

#[test]
fn zero_range_degenerates_to_one() {
    assert_eq!(scale_factor(3.5, 3.5, 400), 1.0);
    let s = AxisScale::new(3.5, 3.5, 400);
    assert_eq!(s.factor, 1.0);
    assert_eq!(s.offset(3.5), 0.0);
}

#[test]
fn bounds_of_projection() {
    assert_eq!(Bounds::of(&[]), None);
    let b = Bounds::of(&[(1.0, -1.0), (-3.0, 4.0), (2.0, 0.5)]).unwrap();
    assert_eq!(b, Bounds { min_x: -3.0, min_y: -1.0, max_x: 2.0, max_y: 4.0 });
}

#[test]
fn single_point_maps_to_plot_origin() {
    let plot = ScatterPlot::new(vec![(3.0, 4.0)], CELL).unwrap();
    assert_eq!(plot.x_scale().factor, 1.0);
    assert_eq!(plot.y_scale().factor, 1.0);

    let area = plot.plot_area();
    assert_eq!(area, RectI32::from_ltwh(25, 0, 100, 100));
    assert_eq!(plot.to_px((3.0, 4.0)), (area.left, area.bottom));
}

#[test]
fn corners_map_with_y_inverted() {
    let plot = ScatterPlot::new(vec![(0.0, 0.0), (10.0, 10.0)], CELL).unwrap();
    let b = plot.bounds();
    assert_eq!((b.min_x, b.max_x, b.min_y, b.max_y), (0.0, 10.0, 0.0, 10.0));
    assert_eq!(plot.x_scale().factor, 10.0);
    assert_eq!(plot.y_scale().factor, 10.0);

    // Far corner is top-right on the surface, near corner bottom-left.
    assert_eq!(plot.to_px((10.0, 10.0)), (125, 0));
    assert_eq!(plot.to_px((0.0, 0.0)), (25, 100));
    assert_eq!(plot.to_px((5.0, 2.5)), (75, 75));
}

#[test]
fn pixels_round_to_nearest() {
    let plot = ScatterPlot::new(vec![(0.0, 0.0), (3.0, 3.0)], CELL).unwrap();
    // 100 / 3 px per unit: 1.0 -> 33.33, 2.0 -> 66.67
    assert_eq!(plot.to_px((1.0, 2.0)), (25 + 33, 100 - 67));
}

#[test]
fn points_stay_inside_their_plot_area() {
    let data = vec![(6.08804, 3.457729), (-0.957855, 0.631947), (-0.131799, -0.324218)];
    let plot = ScatterPlot::new(data.clone(), RectI32::from_ltwh(300, 40, 210, 180)).unwrap();
    let area = plot.plot_area();
    for p in data {
        let (x, y) = plot.to_px(p);
        assert!(area.contains(x, y), "{p:?} -> ({x}, {y}) outside {area:?}");
    }
}

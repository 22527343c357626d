use approx::assert_abs_diff_eq;
use pip_chart::ChartError;
use pip_chart::core::{ColumnPlacement, PipPricing, PricePlacement, ViewportState};

fn cent_pricing() -> PipPricing {
    PipPricing {
        initial: 0.01,
        increment: 0.01,
        minimum: 0.01,
    }
}

/// 20 pips over 400 px, 2 candles over 200 px, top row at pip 10.
fn build_viewport() -> ViewportState {
    let mut viewport = ViewportState::new(1.0, cent_pricing(), 20.0, 2.0).expect("viewport");
    viewport.set_current_pip_index(10);
    viewport.set_height_in_pixels(400.0);
    viewport.set_width_in_pixels(200.0);
    viewport
}

#[test]
fn height_setters_keep_pixels_per_pip_consistent() {
    let mut viewport = ViewportState::new(1.0, cent_pricing(), 24.0, 10.0).expect("viewport");

    viewport.set_height_in_pips(32.0).expect("positive pips");
    viewport.set_height_in_pixels(640.0);
    assert_abs_diff_eq!(viewport.pixels_per_pip(), 20.0);

    viewport.set_height_in_pips(16.0).expect("positive pips");
    assert_abs_diff_eq!(viewport.pixels_per_pip(), 40.0);
}

#[test]
fn width_setters_keep_candle_width_consistent() {
    let mut viewport = ViewportState::new(1.0, cent_pricing(), 24.0, 10.0).expect("viewport");

    viewport.set_width_in_pixels(500.0);
    assert_abs_diff_eq!(viewport.candle_width_px(), 50.0);

    viewport.set_width_in_candles(25.0).expect("positive candles");
    assert_abs_diff_eq!(viewport.candle_width_px(), 20.0);
}

#[test]
fn non_positive_pips_height_is_rejected() {
    let mut viewport = build_viewport();

    for invalid in [0.0, -3.0, f64::NAN, f64::INFINITY] {
        let err = viewport
            .set_height_in_pips(invalid)
            .expect_err("invalid pips height must fail");
        assert!(matches!(
            err,
            ChartError::InvalidParameter {
                name: "pips_height",
                ..
            }
        ));
    }
    assert_abs_diff_eq!(viewport.pixels_per_pip(), 20.0);
}

#[test]
fn non_positive_candles_shown_is_rejected() {
    let mut viewport = build_viewport();

    let err = viewport
        .set_width_in_candles(0.0)
        .expect_err("zero candles must fail");
    assert!(matches!(
        err,
        ChartError::InvalidParameter {
            name: "candles_shown",
            ..
        }
    ));
    assert!(ViewportState::new(1.0, cent_pricing(), 20.0, -1.0).is_err());
}

#[test]
fn negative_pixel_sizes_collapse_to_zero() {
    let mut viewport = build_viewport();
    viewport.set_height_in_pixels(-50.0);
    viewport.set_width_in_pixels(f64::INFINITY);

    assert_eq!(viewport.viewport_height_px(), 0.0);
    assert_eq!(viewport.pixels_per_pip(), 0.0);
    assert_eq!(viewport.viewport_width_px(), 0.0);
    assert_eq!(viewport.candle_width_px(), 0.0);
}

#[test]
fn price_to_pip_index_floors_relative_to_zero_price() {
    let viewport = build_viewport();

    assert_eq!(viewport.price_to_pip_index(1.0), 0);
    assert_eq!(viewport.price_to_pip_index(1.05), 5);
    assert_eq!(viewport.price_to_pip_index(1.1), 10);
    assert_eq!(viewport.price_to_pip_index(0.975), -3);
}

#[test]
fn pip_quoted_prices_land_on_their_own_row() {
    let pricing = PipPricing {
        initial: 0.000_1,
        increment: 0.000_1,
        minimum: 0.000_1,
    };
    let viewport = ViewportState::new(1.1, pricing, 20.0, 2.0).expect("viewport");

    assert_eq!(viewport.price_to_pip_index(1.1003), 3);
    assert_eq!(viewport.price_to_pip_index(1.1010), 10);
    assert_eq!(viewport.price_to_pip_index(1.0997), -3);
    // Prices between rows still floor.
    assert_eq!(viewport.price_to_pip_index(1.100_35), 3);
    assert_eq!(build_viewport().price_to_pip_index(1.2), 20);
}

#[test]
fn price_to_pixel_y_maps_rows_inside_window() {
    let viewport = build_viewport();

    assert_eq!(viewport.price_to_pixel_y(1.1), PricePlacement::OnScreen(0.0));
    assert_eq!(viewport.price_to_pixel_y(1.05), PricePlacement::OnScreen(100.0));
    assert_eq!(viewport.price_to_pixel_y(1.0), PricePlacement::OnScreen(200.0));
    assert_eq!(viewport.price_to_pixel_y(0.9), PricePlacement::OnScreen(400.0));
}

#[test]
fn price_to_pixel_y_tags_each_side_distinctly() {
    let viewport = build_viewport();

    let above = viewport.price_to_pixel_y(1.2);
    let below = viewport.price_to_pixel_y(0.85);
    assert_eq!(above, PricePlacement::Above);
    assert_eq!(below, PricePlacement::Below);

    // Equal fallback values must not make the sides indistinguishable.
    assert_ne!(above, below);
    assert_eq!(above.or_edges(-1.0, -1.0), -1.0);
    assert_eq!(below.on_screen(), None);
    assert_eq!(above.or_edges(400.0, 0.0), 0.0);
    assert_eq!(below.or_edges(400.0, 0.0), 400.0);
}

#[test]
fn price_to_pixel_y_is_offset_by_origin() {
    let mut viewport = build_viewport();
    viewport.set_origin(0.0, 128.0);

    assert_eq!(viewport.price_to_pixel_y(1.05), PricePlacement::OnScreen(228.0));
    assert_eq!(viewport.top_px(), 128.0);
    assert_eq!(viewport.bottom_px(), 528.0);
}

#[test]
fn price_range_spans_pips_height() {
    let viewport = build_viewport();
    let (min, max) = viewport.price_range();

    assert_abs_diff_eq!(max, 1.1, epsilon = 1e-12);
    assert_abs_diff_eq!(min, 0.9, epsilon = 1e-12);
    assert!(viewport.contains_price(0.9));
    assert!(viewport.contains_price(1.1));
    assert!(!viewport.contains_price(1.11));
}

#[test]
fn candle_index_to_pixel_x_marks_columns_outside_viewport() {
    let mut viewport = build_viewport();
    viewport.set_current_candle_index(3);

    assert_eq!(
        viewport.candle_index_to_pixel_x(2),
        ColumnPlacement::BeforeViewport
    );
    assert_eq!(
        viewport.candle_index_to_pixel_x(3),
        ColumnPlacement::OnScreen(0.0)
    );
    assert_eq!(
        viewport.candle_index_to_pixel_x(4),
        ColumnPlacement::OnScreen(100.0)
    );
    assert_eq!(
        viewport.candle_index_to_pixel_x(5),
        ColumnPlacement::OnScreen(200.0)
    );
    assert_eq!(
        viewport.candle_index_to_pixel_x(6),
        ColumnPlacement::AfterViewport
    );
}

#[test]
fn price_per_pip_snaps_to_minimum() {
    let pricing = PipPricing {
        initial: 0.03,
        increment: 0.02,
        minimum: 0.02,
    };
    let mut viewport = ViewportState::new(1.0, pricing, 20.0, 2.0).expect("viewport");

    viewport.decrease_price_per_pip();
    assert_eq!(viewport.price_per_pip(), 0.02);

    viewport.increase_price_per_pip();
    viewport.increase_price_per_pip();
    assert_abs_diff_eq!(viewport.price_per_pip(), 0.06, epsilon = 1e-12);
}

use pip_chart::core::{
    Candle, CandleStore, PipPricing, PricePlacement, ViewportState, visible_candles,
};
use pip_chart::interaction::{
    NavigationCommand, NavigationController, NavigationTuning, ZoomLevels,
};
use proptest::prelude::*;

fn viewport(price_per_pip: f64, pips_height: f64, top_pip: i64) -> ViewportState {
    let pricing = PipPricing {
        initial: price_per_pip,
        increment: price_per_pip,
        minimum: price_per_pip,
    };
    let mut viewport = ViewportState::new(1.0, pricing, pips_height, 20.0).expect("viewport");
    viewport.set_current_pip_index(top_pip);
    viewport.set_origin(0.0, 128.0);
    viewport.set_height_in_pixels(pips_height * 12.0);
    viewport.set_width_in_pixels(800.0);
    viewport
}

fn candle_strategy() -> impl Strategy<Value = Candle> {
    (0.5f64..1.5, 0.0f64..0.05, 0.0f64..1.0, 0.0f64..1.0).prop_map(
        |(low, span, open_factor, close_factor)| {
            let high = low + span;
            Candle::new(
                low + open_factor * span,
                high,
                low,
                low + close_factor * span,
            )
        },
    )
}

proptest! {
    #[test]
    fn pixels_per_pip_tracks_both_setters(
        height_px in 1.0f64..5_000.0,
        pips_height in 1.0f64..200.0
    ) {
        let mut viewport = viewport(0.0001, 24.0, 0);
        viewport.set_height_in_pixels(height_px);
        viewport.set_height_in_pips(pips_height).expect("positive pips");

        prop_assert!((viewport.pixels_per_pip() * pips_height - height_px).abs() < 1e-6);
    }

    #[test]
    fn row_prices_map_to_their_own_row(
        rows in -5_000i64..5_000,
        price_per_pip in prop::sample::select(vec![0.000_01, 0.000_1, 0.001, 0.01, 0.05])
    ) {
        let viewport = viewport(price_per_pip, 24.0, 0);
        let price = viewport.zero_price() + rows as f64 * price_per_pip;
        prop_assert_eq!(viewport.price_to_pip_index(price), rows);
    }

    #[test]
    fn side_tag_matches_pip_window(
        price in 0.0f64..2.0,
        price_per_pip in 0.0001f64..0.01,
        pips_height in 1u32..100,
        top_pip in -500i64..500
    ) {
        let viewport = viewport(price_per_pip, f64::from(pips_height), top_pip);
        let pip = viewport.price_to_pip_index(price);
        let bottom_pip = top_pip - i64::from(pips_height);

        match viewport.price_to_pixel_y(price) {
            PricePlacement::Above => prop_assert!(pip > top_pip),
            PricePlacement::Below => prop_assert!(pip < bottom_pip),
            PricePlacement::OnScreen(y) => {
                prop_assert!(pip >= bottom_pip && pip <= top_pip);
                prop_assert!(y >= viewport.top_px());
                prop_assert!(y <= viewport.bottom_px() + 1e-6);
            }
        }
    }

    #[test]
    fn visible_candles_are_ordered_and_well_formed(
        candles in prop::collection::vec(candle_strategy(), 0..64),
        current in 0usize..64,
        top_pip in 0i64..60
    ) {
        let store = CandleStore::new(candles);
        let mut viewport = viewport(0.01, 30.0, top_pip);
        viewport.set_current_candle_index(current);

        let visible = visible_candles(&store, &viewport);
        prop_assert_eq!(&visible, &visible_candles(&store, &viewport));

        for pair in visible.windows(2) {
            prop_assert!(pair[0].index < pair[1].index);
        }
        for candle in &visible {
            prop_assert!(candle.index >= current);
            prop_assert!(candle.index <= viewport.last_column_index());
            prop_assert!(candle.wick_top_px <= candle.wick_bottom_px);
            prop_assert!(candle.body_top_px < candle.body_bottom_px);
            prop_assert_eq!(Some(candle.candle), store.get(candle.index));
        }
    }

    #[test]
    fn pan_left_saturates_at_first_candle(
        start in 0usize..200,
        candles_per_move in 1usize..100
    ) {
        let tuning = NavigationTuning {
            pan_interval_ticks: 1,
            adjust_interval_ticks: 1,
            candles_per_move,
        };
        let zoom = ZoomLevels::new(vec![20.0], 0).expect("zoom");
        let mut controller = NavigationController::new(zoom, tuning).expect("controller");
        let mut viewport = viewport(0.0001, 24.0, 0);
        viewport.set_current_candle_index(start);

        controller.apply(&mut viewport, &[NavigationCommand::PanLeft]);
        prop_assert_eq!(
            viewport.current_candle_index(),
            start.saturating_sub(candles_per_move)
        );
    }
}

//! Domain-critical regression tests for mosaic-core.
//!
//! These tests are designed to catch specific classes of bugs, not just
//! confirm happy paths. Each test documents the regression it guards against.

#[cfg(test)]
mod domain_tests {
    use pretty_assertions::assert_eq;

    use crate::api::{generate, MosaicGenerator};
    use crate::color::Rgb;
    use crate::matcher::{assign_with, Assignment, StockLedger};
    use crate::output::OUT_OF_STOCK;
    use crate::palette::Palette;
    use crate::rank::{importance_scores, processing_order};
    use crate::raster::RasterBuffer;

    /// Deterministic pseudo-image: a smooth gradient with a repeating tile
    /// so that both distinct and tied luma values occur.
    fn test_image(size: usize) -> RasterBuffer {
        let pixels = (0..size * size)
            .map(|i| {
                let x = i % size;
                let y = i / size;
                Rgb::new(
                    ((x * 255) / size.max(1)) as u8,
                    ((y * 255) / size.max(1)) as u8,
                    (((x + y) % 4) * 60) as u8,
                )
            })
            .collect();
        RasterBuffer::new(pixels, size, size).unwrap()
    }

    fn brick_palette() -> Palette {
        Palette::from_hex(&[
            ("Black", "#1B2A34", 698),
            ("Bright Light Blue", "#AFDDFF", 57),
            ("Bright Light Orange", "#FFB064", 65),
            ("Dark Blue", "#0010B0", 121),
            ("Dark Bluish Gray", "#635F62", 141),
            ("Dark Brown", "#352100", 554),
            ("Dark Orange", "#B06010", 85),
            ("Dark Tan", "#958A73", 137),
            ("Light Bluish Gray", "#B7C3CD", 51),
            ("Medium Nougat", "#AA7D55", 29),
            ("Orange", "#FF5800", 74),
            ("Reddish Brown", "#694028", 250),
            ("Sand Blue", "#74869D", 52),
            ("Tan", "#DEC69C", 283),
            ("White", "#F4F4F4", 149),
        ])
        .unwrap()
    }

    // ========================================================================
    // Determinism
    // ========================================================================

    /// If this breaks, it means: some run-to-run state leaks between runs
    /// (stock carried over, unstable sort, hash-order iteration), so the same
    /// image and palette no longer produce the same bill of materials.
    #[test]
    fn test_repeated_runs_are_identical() {
        let raster = test_image(16);
        let palette = brick_palette();

        let first = generate(&raster, &palette).unwrap();
        let second = generate(&raster, &palette).unwrap();

        assert_eq!(first.assignments(), second.assignments());
        assert_eq!(first.ledger(), second.ledger());
        assert_eq!(first.to_rgb(), second.to_rgb());
        assert_eq!(first.summary(), second.summary());
    }

    /// If this breaks, it means: a run mutates the shared palette (interior
    /// mutability crept into the stock counts), so concurrent runs against
    /// one palette see each other's consumption.
    #[test]
    fn test_concurrent_runs_share_one_palette() {
        use std::sync::Arc;
        use std::thread;

        let palette = Arc::new(brick_palette());
        let raster = Arc::new(test_image(24));

        let handles: Vec<_> = (0..2)
            .map(|_| {
                let palette = Arc::clone(&palette);
                let raster = Arc::clone(&raster);
                thread::spawn(move || generate(&raster, &palette).unwrap())
            })
            .collect();
        let results: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();

        assert_eq!(results[0].assignments(), results[1].assignments());
        assert_eq!(results[0].ledger(), results[1].ledger());
        assert_eq!(results[0].summary(), results[1].summary());
        assert_eq!(palette.original_stock("Black"), Some(698));
        assert_eq!(palette.total_stock(), 2746);
    }

    // ========================================================================
    // Stock monotonicity
    // ========================================================================

    /// If this breaks, it means: the matcher restores or over-consumes stock,
    /// so remaining counts rise mid-run or exceed the original inventory.
    #[test]
    fn test_stock_never_increases_and_stays_in_bounds() {
        let raster = test_image(12);
        let palette = Palette::new([
            ("Dark", Rgb::new(20, 20, 20), 30),
            ("Mid", Rgb::new(128, 128, 128), 40),
            ("Light", Rgb::new(230, 230, 230), 25),
        ])
        .unwrap();
        let order = processing_order(raster.pixels());
        let mut previous = StockLedger::from_palette(&palette).as_slice().to_vec();
        let original = previous.clone();

        assign_with(
            raster.pixels(),
            &order,
            &palette,
            StockLedger::from_palette(&palette),
            |_, _, ledger| {
                for (i, &now) in ledger.as_slice().iter().enumerate() {
                    assert!(now <= previous[i], "stock for entry {i} increased");
                    assert!(now <= original[i], "stock for entry {i} above original");
                }
                previous = ledger.as_slice().to_vec();
            },
        );
    }

    // ========================================================================
    // Conservation
    // ========================================================================

    /// If this breaks, it means: the summary and the per-pixel assignments
    /// disagree, e.g. stock is consumed without a pixel receiving the color.
    #[test]
    fn test_used_plus_unassigned_equals_pixel_count() {
        for size in [1, 4, 9, 20] {
            let raster = test_image(size);
            let palette = Palette::new([
                ("Red", Rgb::new(200, 30, 30), 40),
                ("Green", Rgb::new(30, 200, 30), 40),
                ("Blue", Rgb::new(30, 30, 200), 40),
            ])
            .unwrap();

            let result = generate(&raster, &palette).unwrap();
            let summary = result.summary();

            let row_sum: u64 = summary.rows.iter().map(|r| r.used as u64).sum();
            assert_eq!(summary.total_used, row_sum);
            assert_eq!(
                summary.total_used as usize + summary.unassigned,
                size * size,
                "size {size}"
            );
            for row in &summary.rows {
                let counted = result
                    .assignments()
                    .iter()
                    .filter(|a| {
                        a.entry()
                            .map(|i| palette.entry(i).name() == row.name)
                            .unwrap_or(false)
                    })
                    .count();
                assert_eq!(counted as u32, row.used, "{}", row.name);
                assert_eq!(row.used + row.remaining, row.original);
            }
        }
    }

    // ========================================================================
    // Tie-break stability of the importance order
    // ========================================================================

    /// If this breaks, it means: the processing order uses an unstable sort
    /// or breaks luma ties by something other than row-major index, so which
    /// of two equally bright pixels gets the last unit of stock changes.
    #[test]
    fn test_equal_luma_served_in_row_major_order() {
        let teal = Rgb::new(0, 128, 128);
        let raster = RasterBuffer::new(vec![Rgb::BLACK, teal, Rgb::BLACK, teal], 2, 2).unwrap();

        let scores = importance_scores(raster.pixels());
        assert_eq!(scores[1], scores[3]);
        assert_eq!(processing_order(raster.pixels()), vec![1, 3, 0, 2]);

        // One unit of teal: the earlier pixel must win it.
        let palette = Palette::new([
            ("Teal", teal, 1),
            ("Black", Rgb::BLACK, 10),
        ])
        .unwrap();
        let result = generate(&raster, &palette).unwrap();
        assert_eq!(result.color_name_at(1, 0), Some("Teal"));
        assert_eq!(result.color_name_at(1, 1), Some("Black"));
    }

    // ========================================================================
    // Nearest-color correctness
    // ========================================================================

    /// If this breaks, it means: the distance metric is not Euclidean RGB or
    /// the scan does not pick the minimum.
    #[test]
    fn test_single_pixel_picks_euclidean_nearest() {
        let palette = brick_palette();
        for color in [
            Rgb::new(255, 90, 10),
            Rgb::new(180, 190, 210),
            Rgb::new(10, 20, 150),
            Rgb::new(240, 240, 240),
            Rgb::new(100, 60, 40),
        ] {
            let raster = RasterBuffer::new(vec![color], 1, 1).unwrap();
            let result = generate(&raster, &palette).unwrap();

            let expected = palette
                .entries()
                .iter()
                .min_by(|a, b| color.distance(a.rgb()).total_cmp(&color.distance(b.rgb())))
                .unwrap();
            assert_eq!(result.color_name_at(0, 0), Some(expected.name()), "{color}");
        }
    }

    /// If this breaks, it means: exact ties are resolved by something other
    /// than declared order (last-wins, name order, hash order), which makes
    /// mosaics differ between otherwise identical palettes.
    #[test]
    fn test_exact_tie_goes_to_declaration_order() {
        // Both candidates are exactly 20 away from the pixel, one along red,
        // one along blue.
        let pixel = Rgb::new(100, 100, 100);
        let warm = Rgb::new(120, 100, 100);
        let cool = Rgb::new(100, 100, 120);
        assert_eq!(pixel.distance(warm), pixel.distance(cool));

        let raster = RasterBuffer::new(vec![pixel], 1, 1).unwrap();

        let warm_first = Palette::new([("Warm", warm, u32::MAX as i64), ("Cool", cool, u32::MAX as i64)])
            .unwrap();
        assert_eq!(
            generate(&raster, &warm_first).unwrap().color_name_at(0, 0),
            Some("Warm")
        );

        let cool_first = Palette::new([("Cool", cool, u32::MAX as i64), ("Warm", warm, u32::MAX as i64)])
            .unwrap();
        assert_eq!(
            generate(&raster, &cool_first).unwrap().color_name_at(0, 0),
            Some("Cool")
        );
    }

    // ========================================================================
    // Exhaustion behavior
    // ========================================================================

    /// If this breaks, it means: exhaustion is treated as an error, or the
    /// wrong pixels go without a color. With K units for N² pixels, exactly
    /// the N² - K least important pixels must be unassigned.
    #[test]
    fn test_exhaustion_hits_least_important_pixels() {
        let size = 8;
        let raster = test_image(size);
        let palette = Palette::new([
            ("Ink", Rgb::new(30, 30, 30), 11),
            ("Paper", Rgb::new(240, 240, 240), 13),
        ])
        .unwrap();
        let k = palette.total_stock() as usize;
        assert!(k < size * size);

        let result = generate(&raster, &palette).unwrap();
        let order = processing_order(raster.pixels());

        assert_eq!(result.unassigned_count(), size * size - k);
        for (rank, &idx) in order.iter().enumerate() {
            let (x, y) = (idx % size, idx / size);
            let unassigned = result.assignment_at(x, y) == Some(Assignment::Unassigned);
            assert_eq!(unassigned, rank >= k, "pixel {idx} at rank {rank}");
        }
        assert!(result.ledger().is_exhausted());
        assert_eq!(result.summary().total_used as usize, k);
    }

    /// If this breaks, it means: an empty-stock entry is still being handed
    /// out, or an unassigned pixel is rendered with a palette color.
    #[test]
    fn test_zero_stock_palette_yields_black_mosaic() {
        let palette = Palette::new([("Gold", Rgb::new(255, 215, 0), 0)]).unwrap();
        let generator = MosaicGenerator::new(palette).resolution(3);
        let raster = test_image(3);

        let result = generator.generate(&raster).unwrap();
        assert_eq!(result.unassigned_count(), 9);
        assert!(result.to_rgb().iter().all(|&b| b == 0));
        assert!(result.summary().rows.is_empty());
        assert_eq!(result.color_name_at(2, 2), Some(OUT_OF_STOCK));
    }

    /// If this breaks, it means: a raster whose declared size overflows is
    /// accepted, and a run indexes past its empty pixel buffer.
    #[test]
    fn test_overflowing_raster_never_reaches_the_matcher() {
        use crate::raster::InputSizeError;

        let huge = 1usize << (usize::BITS / 2);
        assert!(matches!(
            RasterBuffer::new(Vec::new(), huge, huge),
            Err(InputSizeError::DimensionsOverflow { .. })
        ));
    }

    // ========================================================================
    // End-to-end scenario
    // ========================================================================

    /// If this breaks, it means: the ranking, matching or stock bookkeeping
    /// has drifted from the reference behavior on the smallest interesting
    /// case: two units of stock, four pixels, one nearest color stolen by a
    /// brighter pixel.
    #[test]
    fn test_two_by_two_scenario() {
        let palette = Palette::new([
            ("Red", Rgb::new(255, 0, 0), 1),
            ("Blue", Rgb::new(0, 0, 255), 1),
        ])
        .unwrap();
        let raster = RasterBuffer::new(
            vec![
                Rgb::new(255, 0, 0),
                Rgb::new(0, 0, 255),
                Rgb::new(250, 5, 5),
                Rgb::new(0, 0, 0),
            ],
            2,
            2,
        )
        .unwrap();

        assert_eq!(processing_order(raster.pixels()), vec![2, 0, 1, 3]);

        let result = generate(&raster, &palette).unwrap();
        assert_eq!(
            result.assignments(),
            &[
                Assignment::Color(1),
                Assignment::Unassigned,
                Assignment::Color(0),
                Assignment::Unassigned,
            ]
        );
        assert_eq!(
            result.remaining_stock().collect::<Vec<_>>(),
            vec![("Red", 0), ("Blue", 0)]
        );
        assert_eq!(result.summary().total_used, 2);
        assert_eq!(result.to_rgb(), vec![0, 0, 255, 0, 0, 0, 255, 0, 0, 0, 0, 0]);
    }
}

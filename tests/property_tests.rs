use std::collections::BTreeSet;

use proptest::prelude::*;
use u_facility::climb::{ClimbConfig, ClimbProblem};
use u_facility::cost::placement_cost;
use u_facility::facility::{place_facilities, FacilityProblem};
use u_facility::grid::{Cell, Grid, Placement};
use u_facility::neighbor::neighbors;
use u_facility::sink::RecordingSink;

// --- STRATEGIES ---

// A grid with random houses that always leaves room for the facilities.
prop_compose! {
    fn arb_grid()(
        height in 1usize..8,
        width in 1usize..8,
    )(
        height in Just(height),
        width in Just(width),
        num_facilities in 1usize..=((height * width).min(4)),
        house_cells in proptest::collection::vec((0..height, 0..width), 0..(height * width)),
    ) -> Grid {
        let mut grid = Grid::new(height, width, num_facilities).unwrap();
        let capacity = height * width;
        for (r, c) in house_cells {
            // Keep at least `num_facilities` cells free.
            if grid.houses().len() + num_facilities < capacity {
                grid.add_house(r, c);
            }
        }
        grid
    }
}

fn assert_valid(grid: &Grid, placement: &Placement) -> Result<(), TestCaseError> {
    prop_assert_eq!(placement.len(), grid.num_facilities());
    for cell in placement {
        prop_assert!(grid.in_bounds(cell), "{} out of bounds", cell);
        prop_assert!(!grid.is_house(cell), "{} on a house", cell);
    }
    Ok(())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn test_every_snapshot_is_valid(grid in arb_grid(), seed in any::<u64>()) {
        let mut grid = grid;
        let mut sink = RecordingSink::new();
        let result = place_facilities(&mut grid, &ClimbConfig::default().with_seed(seed), &mut sink)
            .unwrap();

        prop_assert_eq!(sink.frames.len(), result.iterations + 1);
        for frame in &sink.frames {
            assert_valid(&grid, &frame.facilities)?;
            prop_assert_eq!(frame.cost, placement_cost(grid.houses(), &frame.facilities));
        }
        assert_valid(&grid, &result.best)?;
    }

    #[test]
    fn test_costs_strictly_decrease(grid in arb_grid(), seed in any::<u64>()) {
        let mut grid = grid;
        let mut sink = RecordingSink::new();
        place_facilities(&mut grid, &ClimbConfig::default().with_seed(seed), &mut sink).unwrap();

        for pair in sink.frames.windows(2) {
            prop_assert!(pair[1].cost < pair[0].cost, "{} -> {}", pair[0].cost, pair[1].cost);
        }
    }

    #[test]
    fn test_converged_has_no_improving_move(grid in arb_grid(), seed in any::<u64>()) {
        let mut grid = grid;
        let result = place_facilities(
            &mut grid,
            &ClimbConfig::default().with_seed(seed),
            &mut RecordingSink::new(),
        )
        .unwrap();

        // Check by hand rather than through the problem's own neighborhood.
        for &from in &result.best {
            for to in neighbors(&grid, &result.best, from) {
                let moved = result.best.relocate(from, to);
                prop_assert!(placement_cost(grid.houses(), &moved) >= result.best_cost);
            }
        }
    }

    #[test]
    fn test_seeded_runs_identical(grid in arb_grid(), seed in any::<u64>()) {
        let mut a = grid.clone();
        let mut b = grid;
        let config = ClimbConfig::default().with_seed(seed);
        let mut sink_a = RecordingSink::new();
        let mut sink_b = RecordingSink::new();

        let ra = place_facilities(&mut a, &config, &mut sink_a).unwrap();
        let rb = place_facilities(&mut b, &config, &mut sink_b).unwrap();

        prop_assert_eq!(ra.best_cost, rb.best_cost);
        prop_assert_eq!(&ra.best, &rb.best);
        prop_assert_eq!(sink_a.frames, sink_b.frames);
    }

    #[test]
    fn test_cost_bounded_by_single_facility(
        houses in proptest::collection::btree_set((0usize..20, 0usize..20), 0..30),
        f in (0usize..20, 0usize..20),
        g in (0usize..20, 0usize..20),
    ) {
        let houses: BTreeSet<Cell> = houses.into_iter().map(Cell::from).collect();
        let one: Placement = [Cell::from(f)].into_iter().collect();
        let two: Placement = [Cell::from(f), Cell::from(g)].into_iter().collect();
        // Adding a facility never increases the cost.
        prop_assert!(placement_cost(&houses, &two) <= placement_cost(&houses, &one));
    }

    #[test]
    fn test_initial_solution_uses_free_cells(grid in arb_grid(), seed in any::<u64>()) {
        let problem = FacilityProblem::new(&grid);
        let mut rng = u_facility::random::create_rng(seed);
        let placement = problem.initial_solution(&mut rng).unwrap();
        assert_valid(&grid, &placement)?;
    }
}

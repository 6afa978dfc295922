use tracing::{debug, trace};

pub use error::{OutOfBounds, SeedError};
pub use pos::Position;
pub use rule::Rule;
pub use seed::Seed;
pub use universe::{Topology, Universe};

pub mod error;
pub mod pos;
pub mod rule;
pub mod seed;
pub mod universe;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Stepping,
    Done,
}

/// Receives the universe once per generation, before it is replaced by its successor.
pub trait Observer {
    fn observe(&mut self, generation: u64, universe: &Universe);
}

impl<F> Observer for F
where
    F: FnMut(u64, &Universe),
{
    fn observe(&mut self, generation: u64, universe: &Universe) {
        self(generation, universe)
    }
}

/// Ignores every generation.
impl Observer for () {
    fn observe(&mut self, _generation: u64, _universe: &Universe) {}
}

/// Evolves a universe for a fixed number of generations.
///
/// Two equally sized universes are kept; each tick reads one and writes the other, then the two
/// swap roles.
#[derive(Debug, Clone)]
pub struct Evolution {
    buffers: [Universe; 2],
    current: usize,
    rule: Rule,
    generation: u64,
    generations: u64,
}

impl Evolution {
    pub fn new(seed: Universe, generations: u64) -> Self {
        let next = Universe::new(seed.rows(), seed.cols(), seed.topology());

        Self {
            buffers: [seed, next],
            current: 0,
            rule: Rule::default(),
            generation: 0,
            generations,
        }
    }

    pub fn current(&self) -> &Universe {
        &self.buffers[self.current]
    }

    pub fn into_current(self) -> Universe {
        let [first, second] = self.buffers;

        if self.current == 0 { first } else { second }
    }

    /// Number of generations computed so far.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn generations(&self) -> u64 {
        self.generations
    }

    pub fn phase(&self) -> Phase {
        if self.generation < self.generations {
            Phase::Stepping
        } else {
            Phase::Done
        }
    }

    /// Computes one generation. Does nothing once every generation has been computed.
    pub fn tick<O>(&mut self, observer: &mut O) -> Phase
    where
        O: Observer + ?Sized,
    {
        if self.phase() == Phase::Done {
            return Phase::Done;
        }

        let [first, second] = &mut self.buffers;
        let (current, next) = if self.current == 0 {
            (&*first, second)
        } else {
            (&*second, first)
        };

        for (pos, alive) in current.enumerate_cells() {
            let alive_neighbor_count = current.neighbor_count(pos);
            next.set(pos, self.rule.next_state(alive, alive_neighbor_count));
        }

        trace!(
            generation = self.generation,
            live = current.live_count(),
            "computed generation"
        );

        observer.observe(self.generation, current);

        self.current = 1 - self.current;
        self.generation += 1;

        self.phase()
    }

    /// Ticks until done and returns the final universe.
    pub fn run<O>(&mut self, observer: &mut O) -> &Universe
    where
        O: Observer + ?Sized,
    {
        debug!(
            generations = self.generations,
            rows = self.current().rows(),
            cols = self.current().cols(),
            topology = %self.current().topology(),
            "starting evolution"
        );

        while self.tick(observer) == Phase::Stepping {}

        debug!(live = self.current().live_count(), "evolution done");

        self.current()
    }
}

#[cfg(test)]
mod tests {
    use itertools::Itertools;

    use super::*;

    fn universe_with(
        rows: usize,
        cols: usize,
        topology: Topology,
        live: &[(usize, usize)],
    ) -> Universe {
        let mut universe = Universe::new(rows, cols, topology);
        universe.populate(live.iter().copied()).unwrap();
        universe
    }

    fn live_cells(universe: &Universe) -> Vec<(usize, usize)> {
        universe
            .live_cells()
            .map(|pos| (pos.row, pos.col))
            .collect_vec()
    }

    const GLIDER: &[(usize, usize)] = &[(0, 1), (1, 2), (2, 0), (2, 1), (2, 2)];

    #[test]
    fn glider_moves_one_cell_diagonally() {
        let seed = universe_with(5, 5, Topology::Flat, GLIDER);
        let mut evolution = Evolution::new(seed, 4);

        let end = evolution.run(&mut ());

        assert_eq!(
            live_cells(end),
            vec![(1, 2), (2, 3), (3, 1), (3, 2), (3, 3)]
        );
        assert_eq!(end.to_string(), ".....\n..o..\n...o.\n.ooo.\n.....\n");
    }

    #[test]
    fn blinker_oscillates() {
        let seed = universe_with(5, 5, Topology::Flat, &[(2, 1), (2, 2), (2, 3)]);
        let mut evolution = Evolution::new(seed.clone(), 3);

        evolution.tick(&mut ());
        assert_eq!(live_cells(evolution.current()), vec![(1, 2), (2, 2), (3, 2)]);

        evolution.tick(&mut ());
        assert_eq!(evolution.current(), &seed);

        assert_eq!(evolution.tick(&mut ()), Phase::Done);
        assert_eq!(live_cells(evolution.current()), vec![(1, 2), (2, 2), (3, 2)]);
    }

    #[test]
    fn block_is_still_on_a_torus() {
        let seed = universe_with(4, 4, Topology::Toroidal, &[(1, 1), (1, 2), (2, 1), (2, 2)]);
        let mut evolution = Evolution::new(seed.clone(), 5);

        assert_eq!(evolution.run(&mut ()), &seed);
    }

    #[test]
    fn empty_universe_stays_empty() {
        for topology in [Topology::Flat, Topology::Toroidal] {
            let mut evolution = Evolution::new(Universe::new(6, 4, topology), 25);

            assert_eq!(evolution.run(&mut ()).live_count(), 0);
        }
    }

    #[test]
    fn zero_generations_keeps_seed() {
        let seed = universe_with(5, 5, Topology::Flat, GLIDER);
        let mut evolution = Evolution::new(seed.clone(), 0);

        assert_eq!(evolution.phase(), Phase::Done);
        assert_eq!(evolution.run(&mut ()), &seed);
        assert_eq!(evolution.generation(), 0);
        assert_eq!(live_cells(&evolution.into_current()), GLIDER);
    }

    #[test]
    fn empty_grid_evolves() {
        let mut evolution = Evolution::new(Universe::new(0, 0, Topology::Toroidal), 3);

        assert_eq!(evolution.run(&mut ()).to_string(), "");
        assert_eq!(evolution.generation(), 3);
    }

    #[test]
    fn observer_sees_each_generation_before_it_is_replaced() {
        let seed = universe_with(5, 5, Topology::Flat, GLIDER);
        let mut evolution = Evolution::new(seed.clone(), 4);

        let mut snapshots = Vec::new();
        let mut record = |generation: u64, universe: &Universe| {
            snapshots.push((generation, universe.clone()));
        };

        evolution.run(&mut record);

        assert_eq!(snapshots.len(), 4);
        assert_eq!(
            snapshots.iter().map(|(generation, _)| *generation).collect_vec(),
            vec![0, 1, 2, 3]
        );
        assert_eq!(snapshots[0].1, seed);
        assert!(snapshots.iter().all(|(_, universe)| universe.live_count() == 5));
        assert_ne!(&snapshots[3].1, evolution.current());
    }

    #[test]
    fn tick_after_done_is_a_no_op() {
        let seed = universe_with(3, 3, Topology::Flat, &[(1, 0), (1, 1), (1, 2)]);
        let mut evolution = Evolution::new(seed, 1);

        assert_eq!(evolution.phase(), Phase::Stepping);
        assert_eq!(evolution.tick(&mut ()), Phase::Done);

        let done = evolution.current().clone();
        let mut calls = 0;
        let mut count = |_: u64, _: &Universe| calls += 1;

        assert_eq!(evolution.tick(&mut count), Phase::Done);
        assert_eq!(calls, 0);
        assert_eq!(evolution.current(), &done);
        assert_eq!(evolution.generation(), 1);
    }
}

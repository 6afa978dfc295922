/// Neighbour counts that bring a dead cell to life or keep a live cell alive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rule {
    pub birth: Vec<usize>,
    pub survive: Vec<usize>,
}

impl Rule {
    pub fn next_state(&self, alive: bool, alive_neighbor_count: usize) -> bool {
        if alive {
            self.survive.contains(&alive_neighbor_count)
        } else {
            self.birth.contains(&alive_neighbor_count)
        }
    }
}

impl Default for Rule {
    fn default() -> Self {
        Self {
            birth: vec![3],
            survive: vec![2, 3],
        }
    }
}

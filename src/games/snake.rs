use std::collections::VecDeque;

use rand::Rng;

pub const GRID_SIZE: i32 = 20;
pub const POINTS_FOR_FOOD: u64 = 1;

/// Wall-clock interval between ticks while a session is running.
pub const TICK_MILLIS: u64 = 150;

/// The body can never cover more than the whole grid, so a session tops out
/// one food short of the cell count.
pub const MAX_AWARD: u64 = (GRID_SIZE as u64 * GRID_SIZE as u64 - 1) * POINTS_FOR_FOOD;

const START_CELL: Cell = Cell { x: 10, y: 10 };
const START_HEADING: Heading = Heading::Right;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

impl Cell {
    fn in_bounds(self) -> bool {
        return (0..GRID_SIZE).contains(&self.x) && (0..GRID_SIZE).contains(&self.y);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Heading {
    Up,
    Down,
    Left,
    Right,
}

impl Heading {
    pub fn opposite(self) -> Heading {
        return match self {
            Heading::Up => Heading::Down,
            Heading::Down => Heading::Up,
            Heading::Left => Heading::Right,
            Heading::Right => Heading::Left,
        };
    }

    fn shifted(self, cell: Cell) -> Cell {
        return match self {
            Heading::Up => Cell { y: cell.y - 1, ..cell },
            Heading::Down => Cell { y: cell.y + 1, ..cell },
            Heading::Left => Cell { x: cell.x - 1, ..cell },
            Heading::Right => Cell { x: cell.x + 1, ..cell },
        };
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    Moved,
    Ate,
    GameOver { award: u64 },
}

/// One snake session. The caller drives it with `tick` on a fixed interval
/// and `set_heading` on input; the session ends at the first collision.
pub struct SnakeGame {
    // Head first.
    body: VecDeque<Cell>,
    heading: Heading,
    food: Cell,
    score: u64,
    over: bool,
}

impl SnakeGame {
    pub fn start(rng: &mut impl Rng) -> Self {
        let body = VecDeque::from([START_CELL]);
        let food = random_free_cell(rng, &body);

        return SnakeGame {
            body,
            heading: START_HEADING,
            food,
            score: 0,
            over: false,
        };
    }

    /// Reversing straight into the body is rejected; any other heading takes
    /// effect on the next tick. No-op once the session is over.
    pub fn set_heading(&mut self, heading: Heading) {
        if self.over || heading == self.heading.opposite() {
            return;
        }

        self.heading = heading;
    }

    /// Advances the head one cell. Returns `None` for ticks after the
    /// session ended; `GameOver` (with the session's single point emission)
    /// is returned exactly once.
    pub fn tick(&mut self, rng: &mut impl Rng) -> Option<TickOutcome> {
        if self.over {
            return None;
        }

        let head = self.heading.shifted(self.head());
        let eats = head == self.food;

        // The tail cell vacates on a non-eating move, so it is not a
        // collision target this tick.
        let occupied = self.body.len() - usize::from(!eats);
        let hits_body = self.body.iter().take(occupied).any(|cell| *cell == head);

        if !head.in_bounds() || hits_body {
            self.over = true;
            return Some(TickOutcome::GameOver {
                award: self.score * POINTS_FOR_FOOD,
            });
        }

        self.body.push_front(head);

        if eats {
            self.score += 1;
            self.food = random_free_cell(rng, &self.body);
            return Some(TickOutcome::Ate);
        }

        self.body.pop_back();
        return Some(TickOutcome::Moved);
    }

    pub fn head(&self) -> Cell {
        return self.body[0];
    }

    pub fn body(&self) -> &VecDeque<Cell> {
        return &self.body;
    }

    pub fn heading(&self) -> Heading {
        return self.heading;
    }

    pub fn food(&self) -> Cell {
        return self.food;
    }

    pub fn score(&self) -> u64 {
        return self.score;
    }

    pub fn is_over(&self) -> bool {
        return self.over;
    }
}

/// Simple re-roll until the cell is off the body; the body never covers the
/// whole grid while the session is running.
fn random_free_cell(rng: &mut impl Rng, body: &VecDeque<Cell>) -> Cell {
    loop {
        let cell = Cell {
            x: rng.gen_range(0..GRID_SIZE),
            y: rng.gen_range(0..GRID_SIZE),
        };

        if !body.contains(&cell) {
            return cell;
        }
    }
}

#[cfg(test)]
impl SnakeGame {
    fn with_layout(body: Vec<Cell>, heading: Heading, food: Cell) -> Self {
        return SnakeGame {
            body: VecDeque::from(body),
            heading,
            food,
            score: 0,
            over: false,
        };
    }

    fn place_food(&mut self, food: Cell) {
        self.food = food;
    }
}

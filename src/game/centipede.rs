use super::*;
use crate::*;
use serde::Serialize;

/// The truncated centipede game.
///
/// Each player picks the round at which it stops. If both would play on
/// to the last round they share the cooperative ceiling `length`.
/// Otherwise the first mover stopping no later than the second mover
/// ends the game with an even split of `2·first − 2`, while a second
/// mover stopping strictly earlier takes `2·second + 1` and leaves the
/// first mover with `2·second − 3`.
///
/// | first \ second |    1    |    2    |    3    |    4    |    5    |    6    |
/// |----------------|---------|---------|---------|---------|---------|---------|
/// |        1       |  0,  0  |  0,  0  |  0,  0  |  0,  0  |  0,  0  |  0,  0  |
/// |        2       | -1,  3  |  2,  2  |  2,  2  |  2,  2  |  2,  2  |  2,  2  |
/// |        3       | -1,  3  |  1,  5  |  4,  4  |  4,  4  |  4,  4  |  4,  4  |
/// |        4       | -1,  3  |  1,  5  |  3,  7  |  6,  6  |  6,  6  |  6,  6  |
/// |        5       | -1,  3  |  1,  5  |  3,  7  |  5,  9  |  8,  8  |  8,  8  |
/// |        6       | -1,  3  |  1,  5  |  3,  7  |  5,  9  |  7, 11  |  L,  L  |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Centipede {
    length: usize,
}

impl Centipede {
    /// smallest payoff any player can receive
    pub const FLOOR: Utility = -1.;

    pub fn new(length: usize) -> Self {
        Self { length }
    }

    pub fn length(&self) -> usize {
        self.length
    }

    /// payoffs for (first mover, second mover)
    pub fn payoff(&self, first: Strategy, second: Strategy) -> Payoff {
        let a = u8::from(first) as Utility;
        let b = u8::from(second) as Utility;
        if first.is_max() && second.is_max() {
            (self.length as Utility, self.length as Utility)
        } else if first <= second {
            (2. * a - 2., 2. * a - 2.)
        } else {
            (2. * b - 3., 2. * b + 1.)
        }
    }

    /// payoff read from the slot belonging to `color`,
    /// assuming yellow plays first and blue plays second
    pub fn utility(&self, color: Color, yellow: Strategy, blue: Strategy) -> Utility {
        let (first, second) = self.payoff(yellow, blue);
        match color {
            Color::Yellow => first,
            Color::Blue => second,
        }
    }

    /// largest payoff any player can receive
    pub fn ceiling(&self) -> Utility {
        let top = u8::from(Strategy::MAX) as Utility;
        (2. * (top - 1.) + 1.).max(self.length as Utility)
    }
}

impl Default for Centipede {
    fn default() -> Self {
        Self::new(GAME_LENGTH)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn s(n: u8) -> Strategy {
        Strategy::try_from(n).unwrap()
    }

    #[test]
    fn cooperative_ceiling() {
        for length in [1, 6, 10, 25] {
            let game = Centipede::new(length);
            let l = length as Utility;
            assert_eq!(game.payoff(Strategy::MAX, Strategy::MAX), (l, l));
        }
    }

    #[test]
    fn diagonal_is_even_split() {
        let game = Centipede::default();
        for n in 1..=5 {
            let v = 2. * n as Utility - 2.;
            assert_eq!(game.payoff(s(n), s(n)), (v, v));
        }
    }

    #[test]
    fn swapping_seats_reverses_payoff_only_on_diagonal() {
        let game = Centipede::default();
        let mut broken = 0;
        for a in Strategy::all() {
            for b in Strategy::all() {
                let (x, y) = game.payoff(b, a);
                let swapped = game.payoff(a, b) == (y, x);
                assert_eq!(swapped, a == b, "payoff({}, {})", a, b);
                broken += usize::from(!swapped);
            }
        }
        assert_eq!(broken, Strategy::COUNT * Strategy::COUNT - Strategy::COUNT);
    }

    #[test]
    fn earlier_first_mover_splits_evenly() {
        let game = Centipede::default();
        assert_eq!(game.payoff(s(2), s(5)), (2., 2.));
        assert_eq!(game.payoff(s(1), s(6)), (0., 0.));
        assert_eq!(game.payoff(s(5), s(6)), (8., 8.));
    }

    #[test]
    fn earlier_second_mover_takes_more() {
        let game = Centipede::default();
        assert_eq!(game.payoff(s(3), s(2)), (1., 5.));
        assert_eq!(game.payoff(s(6), s(1)), (-1., 3.));
        assert_eq!(game.payoff(s(6), s(5)), (7., 11.));
    }

    #[test]
    fn rule_is_directional() {
        let game = Centipede::default();
        assert_eq!(game.payoff(s(1), s(2)), (0., 0.));
        assert_eq!(game.payoff(s(2), s(1)), (-1., 3.));
    }

    #[test]
    fn single_six_is_not_cooperative() {
        let game = Centipede::new(100);
        assert_eq!(game.payoff(s(6), s(4)), (5., 9.));
        assert_eq!(game.payoff(s(4), s(6)), (6., 6.));
    }

    #[test]
    fn payoffs_within_bounds() {
        let game = Centipede::default();
        for a in Strategy::all() {
            for b in Strategy::all() {
                let (x, y) = game.payoff(a, b);
                assert!(x >= Centipede::FLOOR && x <= game.ceiling());
                assert!(y >= Centipede::FLOOR && y <= game.ceiling());
            }
        }
    }

    #[test]
    fn utility_reads_color_slot() {
        let game = Centipede::default();
        assert_eq!(game.utility(Color::Yellow, s(3), s(2)), 1.);
        assert_eq!(game.utility(Color::Blue, s(3), s(2)), 5.);
    }
}

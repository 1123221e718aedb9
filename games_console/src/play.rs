use games::board::{write_grid, Direction};
use games::game::Game;
use std::fmt;
use std::io::{self, Write};

/// Player's command.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    Move(Direction),
    Quit
}

/// Parses a line typed by the player: `w`/`a`/`s`/`d`, `up`/`left`/`down`/`right` or `q`/`quit`.
pub fn parse_command(line: &str) -> Option<Command> {
    Some(match line.trim().to_ascii_lowercase().as_str() {
        "w" | "up" => Command::Move(Direction::Up),
        "a" | "left" => Command::Move(Direction::Left),
        "s" | "down" => Command::Move(Direction::Down),
        "d" | "right" => Command::Move(Direction::Right),
        "q" | "quit" => Command::Quit,
        _ => return None
    })
}

/// Displays the board of a game, `.` marks empty cells.
pub struct Rendered<'a>(pub &'a dyn Game);

impl fmt::Display for Rendered<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_grid(f, self.0.width(), |i, j| self.0.get(i, j))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct Summary {
    pub moves: usize,
    pub won: bool,
    pub stuck: bool,
    pub score: u64
}

/// Records in `summary` and reports to `out` whether `game` is won or stuck.
/// Returns `true` if the game is over.
fn check_finished(game: &dyn Game, summary: &mut Summary, out: &mut impl Write) -> io::Result<bool> {
    if game.has_won() {
        summary.won = true;
        writeln!(out, "You won!")?;
    } else if !game.can_move() {
        summary.stuck = true;
        writeln!(out, "Game over.")?;
    }
    Ok(summary.won || summary.stuck)
}

/// Plays `game` with given `commands` until the player quits, wins or cannot move.
/// Prints the board to `out` at the start and after each move.
pub fn play(game: &mut dyn Game, commands: impl IntoIterator<Item=Command>, out: &mut impl Write) -> io::Result<Summary> {
    let mut summary = Summary::default();
    write!(out, "{}", Rendered(game))?;
    let mut commands = commands.into_iter();
    while !check_finished(game, &mut summary, out)? {
        let Some(Command::Move(direction)) = commands.next() else { break };
        game.process_move(direction);
        summary.moves += 1;
        writeln!(out, "{direction}:")?;
        write!(out, "{}", Rendered(game))?;
    }
    summary.score = game.score();
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use games::fifteen::{GameOfFifteen, GameOfFifteenInitializer};
    use games::game2048::{Game2048, RandomGame2048Initializer};
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    struct Fixed(Vec<u8>);

    impl GameOfFifteenInitializer for Fixed {
        fn initial_permutation(&mut self, _width: usize) -> Vec<u8> { self.0.clone() }
    }

    #[test]
    fn test_parse_command() {
        assert_eq!(parse_command("w"), Some(Command::Move(Direction::Up)));
        assert_eq!(parse_command(" Left\n"), Some(Command::Move(Direction::Left)));
        assert_eq!(parse_command("s"), Some(Command::Move(Direction::Down)));
        assert_eq!(parse_command("RIGHT"), Some(Command::Move(Direction::Right)));
        assert_eq!(parse_command("q"), Some(Command::Quit));
        assert_eq!(parse_command("jump"), None);
        assert_eq!(parse_command(""), None);
    }

    #[test]
    fn test_render() {
        let mut game = GameOfFifteen::new(2, Fixed(vec![3, 1, 2])).unwrap();
        game.initialize().unwrap();
        assert_eq!(Rendered(&game).to_string(), "     3     1\n     2     .\n");
    }

    #[test]
    fn test_play_solved_at_start() {
        let mut game = GameOfFifteen::new(2, Fixed(vec![1, 2, 3])).unwrap();
        game.initialize().unwrap();
        let mut out = Vec::new();
        let summary = play(&mut game, [Command::Move(Direction::Down)], &mut out).unwrap();
        assert_eq!(summary, Summary { moves: 0, won: true, stuck: false, score: 0 });
        assert_eq!(String::from_utf8(out).unwrap(), "     1     2\n     3     .\nYou won!\n");
    }

    #[test]
    fn test_play_stuck_at_start() {
        let mut game = Game2048::new(1, RandomGame2048Initializer::new(ChaCha8Rng::seed_from_u64(3))).unwrap();
        game.initialize().unwrap();
        let mut out = Vec::new();
        let summary = play(&mut game, [Command::Move(Direction::Left)], &mut out).unwrap();
        assert_eq!(summary.moves, 0);
        assert!(summary.stuck);
        assert!(!summary.won);
        assert!(String::from_utf8(out).unwrap().ends_with("Game over.\n"));
    }

    #[test]
    fn test_play_without_commands() {
        let mut game = GameOfFifteen::new(2, Fixed(vec![3, 1, 2])).unwrap();
        game.initialize().unwrap();
        let mut out = Vec::new();
        assert_eq!(play(&mut game, std::iter::empty(), &mut out).unwrap(), Summary::default());
    }

    #[test]
    fn test_play_until_won() {
        let mut game = GameOfFifteen::new(2, Fixed(vec![3, 1, 2])).unwrap();
        game.initialize().unwrap();
        // rotating the tiles clockwise solves the puzzle after 8 moves
        let commands = [Direction::Down, Direction::Right, Direction::Up, Direction::Left, Direction::Down,
            Direction::Right, Direction::Up, Direction::Left, Direction::Down, Direction::Right, Direction::Up, Direction::Left]
            .map(Command::Move);
        let mut out = Vec::new();
        let summary = play(&mut game, commands, &mut out).unwrap();
        assert!(summary.won);
        assert_eq!(summary.moves, 8);
        assert!(String::from_utf8(out).unwrap().ends_with("You won!\n"));
    }

    #[test]
    fn test_play_stops_on_quit() {
        let mut game = Game2048::new(4, RandomGame2048Initializer::new(ChaCha8Rng::seed_from_u64(5))).unwrap();
        game.initialize().unwrap();
        let commands = [Command::Move(Direction::Left), Command::Quit, Command::Move(Direction::Right)];
        let mut out = Vec::new();
        let summary = play(&mut game, commands, &mut out).unwrap();
        assert_eq!(summary.moves, 1);
        assert!(!summary.won);
        assert!(!summary.stuck);
    }
}

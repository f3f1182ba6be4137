//! Turn-based match and session control.
//!
//! The engine owns both players and talks to them through a [`Console`].
//! A session is a sequence of matches: setup (names, fleets), then shots
//! alternating until one fleet is sunk, then a rematch prompt unless a
//! player has reached [`NUMBER_OF_WIN`] or someone typed `quit`.

use alloc::format;
use alloc::string::{String, ToString};
use alloc::vec::Vec;

use rand::rngs::SmallRng;
use rand::Rng;

use crate::{
    common::{FireError, InputError, ShotResult},
    config::{
        ALPHABET, FIRST_PLAYER_DRAW, HEIGHT, HINT_AFTER_MISSES, NUMBER_OF_PLAYERS,
        NUMBER_OF_WIN, SHIP_SIZES, WIDTH,
    },
    console::Console,
    parser::{self, Command},
    player::Player,
};

/// Where the current match stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    Running,
    Stop,
    Restart,
}

/// Two-player match engine.
pub struct GameEngine<C: Console> {
    console: C,
    rng: SmallRng,
    players: Vec<Player>,
    active: usize,
    state: GameState,
    quit_requested: bool,
}

impl<C: Console> GameEngine<C> {
    /// Engine with no players yet; they are created by the first setup.
    pub fn new(console: C, rng: SmallRng) -> Self {
        Self {
            console,
            rng,
            players: Vec::with_capacity(NUMBER_OF_PLAYERS),
            active: 0,
            state: GameState::Running,
            quit_requested: false,
        }
    }

    /// Engine around two players, `players[0]` moving first.
    ///
    /// [`GameEngine::start`] lays out fresh fleets. Calling
    /// [`GameEngine::play_turn`] directly requires both fleets to be placed
    /// already, since an empty fleet counts as lost.
    pub fn with_players(console: C, rng: SmallRng, players: [Player; 2]) -> Self {
        let mut engine = Self::new(console, rng);
        engine.players.extend(players);
        engine
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// Player currently acting (creating ships or firing).
    pub fn player(&self) -> Option<&Player> {
        self.players.get(self.active)
    }

    /// Player being fired at.
    pub fn opponent(&self) -> Option<&Player> {
        self.players.get(self.opponent_index())
    }

    pub fn console(&self) -> &C {
        &self.console
    }

    pub fn console_mut(&mut self) -> &mut C {
        &mut self.console
    }

    /// Hand the turn to the other player.
    pub fn switch_players(&mut self) {
        self.active = self.opponent_index();
    }

    /// Stop the current match and end the session.
    pub fn quit(&mut self) {
        log::info!("quit requested");
        self.state = GameState::Stop;
        self.quit_requested = true;
    }

    /// Abandon the current match and set up a new one with the same players.
    pub fn restart(&mut self) {
        log::info!("restart requested");
        self.state = GameState::Restart;
    }

    /// Run a whole session until a player reaches the win threshold, the
    /// players decline a rematch, or someone quits.
    pub fn start(&mut self) -> anyhow::Result<()> {
        loop {
            self.state = GameState::Running;
            self.console.notify("Initializing Game");
            self.setup()?;

            if self.state == GameState::Running {
                self.console.notify("Start of the Game");
                self.game_loop()?;
            }

            if self.quit_requested {
                break;
            }
            if self.state == GameState::Restart {
                continue;
            }
            if let Some(champion) = self.players.iter().find(|p| p.win_count() >= NUMBER_OF_WIN)
            {
                let text = format!(
                    "{} wins the session with {} victories",
                    champion,
                    champion.win_count()
                );
                log::info!("{}", text);
                self.console.notify(&text);
                break;
            }
            if !self.restart_loop()? {
                break;
            }
            self.restart();
        }
        Ok(())
    }

    /// Create missing players, reset existing ones, then let each lay out a
    /// fleet. Returns early if a command moved the state off `Running`.
    pub fn setup(&mut self) -> anyhow::Result<()> {
        for player in &mut self.players {
            player.reset();
        }
        while self.players.len() < NUMBER_OF_PLAYERS {
            match self.create_player()? {
                Some(player) => self.players.push(player),
                None => return Ok(()),
            }
        }

        for _ in 0..NUMBER_OF_PLAYERS {
            let text = format!(
                "\n* Player {} its time to create ships!",
                self.players[self.active]
            );
            self.console.notify(&text);
            for size in SHIP_SIZES {
                if !self.create_ship_loop(size)? {
                    return Ok(());
                }
            }
            // keep the next creator from seeing this fleet
            self.console.clear_display();
            self.switch_players();
        }
        Ok(())
    }

    fn create_player(&mut self) -> anyhow::Result<Option<Player>> {
        while self.state == GameState::Running {
            self.console.notify("Enter player name:");
            let Some(name) = self.prompt()? else {
                continue;
            };
            if name.is_empty() {
                self.console.notify_error(&InputError::EmptyName.to_string());
                continue;
            }
            let player = Player::new(name);
            self.console.notify(&format!("\nHello {}\n", player));
            return Ok(Some(player));
        }
        Ok(None)
    }

    /// Prompt the active player until a ship of `size` is placed. Returns
    /// `false` when interrupted by a state change.
    fn create_ship_loop(&mut self, size: usize) -> anyhow::Result<bool> {
        while self.state == GameState::Running {
            self.console.notify(&format!("* Add a {} tile long ship", size));
            self.console.notify(&format!(
                "* Choose coordinates and orientation {}-[orientation]",
                coordinate_range()
            ));
            self.console
                .notify("[orientation] -> one of the keys of the numeric keypad (excluding 5)");
            self.console
                .notify("example: A0-6 runs along row A, A0-9 runs diagonally towards D3");

            let Some(line) = self.prompt()? else {
                continue;
            };
            let (origin, orientation) = match parser::parse_placement(&line) {
                Ok(placement) => placement,
                Err(e) => {
                    self.console.notify_error(&e.to_string());
                    continue;
                }
            };
            match self.players[self.active].place_ship(origin, size, orientation) {
                Ok(()) => {
                    log::debug!(
                        "{} placed a {}-ship at {:?}",
                        self.players[self.active],
                        size,
                        origin
                    );
                    return Ok(true);
                }
                Err(e) => {
                    self.console.notify_error(&format!(
                        "Cannot build the ship on this location: {}",
                        e
                    ));
                }
            }
        }
        Ok(false)
    }

    /// Randomize who shoots first, then alternate turns while the match runs.
    pub fn game_loop(&mut self) -> anyhow::Result<()> {
        self.ensure_fleets()?;
        let swaps = self.rng.random_range(0..FIRST_PLAYER_DRAW);
        for _ in 0..swaps {
            self.switch_players();
        }
        log::info!("match started, {} shoots first", self.players[self.active]);

        while self.state == GameState::Running {
            self.play_turn()?;
        }
        Ok(())
    }

    /// One shot by the active player, win evaluation, then the turn passes.
    ///
    /// Returns `None` when a command interrupted the turn before a shot.
    /// Fails without prompting unless both players have a fleet.
    pub fn play_turn(&mut self) -> anyhow::Result<Option<ShotResult>> {
        self.ensure_fleets()?;
        self.console.notify("------");
        let text = format!("{} turn", self.players[self.active]);
        self.console.notify(&text);

        let shot = self.fire_loop()?;
        if shot.is_some() && self.has_win() {
            self.state = GameState::Stop;
        }
        self.switch_players();
        Ok(shot)
    }

    fn fire_loop(&mut self) -> anyhow::Result<Option<ShotResult>> {
        while self.state == GameState::Running {
            self.console
                .notify(&format!("* Choose coordinates {} :", coordinate_range()));
            let Some(line) = self.prompt()? else {
                continue;
            };
            let target = match parser::parse_target(&line) {
                Ok(target) => target,
                Err(e) => {
                    self.console.notify_error(&e.to_string());
                    continue;
                }
            };

            let opponent = self.opponent_index();
            let result = match self.players[opponent].receive_fire(target) {
                Ok(result) => result,
                Err(FireError::AlreadyFired(_)) => {
                    self.console.notify_error(&format!(
                        "This cell |{}| has already been fired at",
                        parser::to_display_coordinate(target)
                    ));
                    continue;
                }
                Err(e) => {
                    self.console.notify_error(&e.to_string());
                    continue;
                }
            };
            log::debug!(
                "{} fired at {:?}: {:?}",
                self.players[self.active],
                target,
                result
            );

            let shooter = &mut self.players[self.active];
            match result {
                ShotResult::Miss => {
                    shooter.add_miss();
                    let misses = shooter.missed_fire_count();
                    self.console.notify("- You miss !");
                    if misses >= HINT_AFTER_MISSES {
                        self.show_hint();
                    }
                }
                ShotResult::Hit => {
                    shooter.reset_miss();
                    self.console.notify("- You hit a Ship !");
                }
                ShotResult::Sunk => {
                    shooter.reset_miss();
                    self.console.notify("- You hit a Ship !");
                    self.console.notify("- The Ship has sank !");
                }
            }
            return Ok(Some(result));
        }
        Ok(None)
    }

    /// Ask whether to play again until a yes or no word is given.
    fn restart_loop(&mut self) -> anyhow::Result<bool> {
        loop {
            self.console.notify("* Restart [Y/N]:");
            let Some(line) = self.prompt()? else {
                if self.quit_requested {
                    return Ok(false);
                }
                if self.state == GameState::Restart {
                    return Ok(true);
                }
                continue;
            };
            match parser::parse_answer(&line) {
                Ok(answer) => return Ok(answer),
                Err(e) => self.console.notify_error(&e.to_string()),
            }
        }
    }

    /// `true` when the opponent has lost; the active player is credited.
    pub fn has_win(&mut self) -> bool {
        let opponent = self.opponent_index();
        if !self.players[opponent].loose() {
            return false;
        }
        self.players[self.active].add_win();
        let lost = format!("{} has lost all its ships", self.players[opponent]);
        let won = format!("{} is Victorious", self.players[self.active]);
        log::info!(
            "{}, {} now has {} wins",
            lost,
            self.players[self.active],
            self.players[self.active].win_count()
        );
        self.console.notify(&lost);
        self.console.notify(&won);
        true
    }

    /// Tell the active player where to look on the opponent's board.
    pub fn show_hint(&mut self) {
        let hint = self.opponent().and_then(Player::hint);
        match hint {
            Some(c) => {
                let text = format!(
                    "Hint: a ship is close to {}",
                    parser::to_display_coordinate(c)
                );
                self.console.notify(&text);
            }
            None => self.console.notify("No hint available yet"),
        }
    }

    /// Debug drawing of every board, ships included.
    pub fn draw(&mut self) {
        for player in &self.players {
            self.console.notify(&format!("Player {}", player));
            self.console.notify(&format!("{}", player.board()));
        }
    }

    /// Read one line, running it instead if it is a reserved command.
    fn prompt(&mut self) -> anyhow::Result<Option<String>> {
        let line = self.console.ask()?;
        match Command::parse(&line) {
            Some(command) => {
                self.run_command(command);
                Ok(None)
            }
            None => Ok(Some(line)),
        }
    }

    fn run_command(&mut self, command: Command) {
        log::debug!("command {:?}", command);
        match command {
            Command::Quit => self.quit(),
            Command::Restart => self.restart(),
            Command::Draw => self.draw(),
            Command::Player => {
                let text = match self.player() {
                    Some(player) => format!("Current player: {}", player),
                    None => String::from("No player yet"),
                };
                self.console.notify(&text);
            }
            Command::Hint => self.show_hint(),
        }
    }

    fn ensure_fleets(&self) -> anyhow::Result<()> {
        if self.players.len() < NUMBER_OF_PLAYERS {
            anyhow::bail!("a match needs {} players", NUMBER_OF_PLAYERS);
        }
        if let Some(player) = self.players.iter().find(|p| p.ships().is_empty()) {
            anyhow::bail!("{} has no fleet on the board", player);
        }
        Ok(())
    }

    fn opponent_index(&self) -> usize {
        (self.active + 1) % NUMBER_OF_PLAYERS
    }
}

/// Input format hint such as `[A-E][0-4]`.
fn coordinate_range() -> String {
    let last_row = ALPHABET[HEIGHT as usize - 1].to_ascii_uppercase();
    format!("[A-{}][0-{}]", last_row, WIDTH - 1)
}

//! Main game loop
//!
//! [`GameState`] is the whole engine state as one value. [`GameLoop`] owns
//! it together with the random source and runs one command at a time to
//! completion.

use serde::{Deserialize, Serialize};

use crate::action::{self, Action, ActionResult, chest, combat, help, items, look, movement};
use crate::entity::{Enemy, Player};
use crate::error::EngineError;
use crate::event::{Category, Event};
use crate::options::GameOptions;
use crate::rng::{GameRng, RandomSource};
use crate::world::{Room, WorldError, WorldMap};

/// Whether the game is still running
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GameStatus {
    #[default]
    Playing,
    Dead,
    Won,
}

impl GameStatus {
    pub fn is_over(self) -> bool {
        self != GameStatus::Playing
    }
}

/// Main game state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Room graph with its mutable contents
    pub world: WorldMap,

    /// The player
    pub player: Player,

    /// Enemies spawned for the room the player last entered by a normal
    /// move. Only one is ever fought at a time.
    pub enemies: Vec<Enemy>,

    /// Playing, dead or won
    pub status: GameStatus,

    /// Number of commands that changed state
    pub turns: u64,

    /// Events produced by the command in progress
    #[serde(skip)]
    events: Vec<Event>,
}

impl GameState {
    /// A new game with the player in the world's start room.
    pub fn new(world: WorldMap) -> Self {
        let player = Player::new(world.start().clone());
        let enemies = world
            .room(world.start().as_str())
            .map(|room| room.enemies().iter().copied().map(Enemy::new).collect())
            .unwrap_or_default();

        Self {
            world,
            player,
            enemies,
            status: GameStatus::Playing,
            turns: 0,
            events: Vec::new(),
        }
    }

    /// Queue a line of narration
    pub fn narrate(&mut self, category: Category, text: impl Into<String>) {
        self.events.push(Event::Narration {
            category,
            text: text.into(),
        });
    }

    /// Queue a state-change notification
    pub fn emit(&mut self, event: Event) {
        self.events.push(event);
    }

    /// The room the player is in
    pub fn current_room(&self) -> Result<&Room, WorldError> {
        self.world.room(self.player.current_room.as_str())
    }

    pub(crate) fn current_room_mut(&mut self) -> Result<&mut Room, WorldError> {
        self.world.room_mut(self.player.current_room.as_str())
    }

    /// The enemy that combat and health displays refer to
    pub fn engaged_enemy(&self) -> Option<&Enemy> {
        self.enemies.first()
    }

    pub fn is_over(&self) -> bool {
        self.status.is_over()
    }

    fn take_events(&mut self) -> Vec<Event> {
        std::mem::take(&mut self.events)
    }
}

/// Result of a game loop tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameLoopResult {
    /// Continue playing
    Continue,
    /// Player died
    PlayerDied,
    /// Player escaped
    PlayerWon,
}

/// Everything one command produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TurnOutcome {
    pub events: Vec<Event>,
    pub result: GameLoopResult,
}

impl TurnOutcome {
    /// Narration lines only, in order
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.events.iter().filter_map(Event::text)
    }
}

/// Game loop controller
#[derive(Debug)]
pub struct GameLoop<R: RandomSource = GameRng> {
    state: GameState,
    rng: R,
}

impl GameLoop<GameRng> {
    /// Build a game from a world and options: start room override and seed.
    pub fn from_options(world: WorldMap, options: &GameOptions) -> Result<Self, EngineError> {
        let world = match &options.start {
            Some(start) => world.with_start(start.as_str())?,
            None => world,
        };
        let rng = options.seed.map_or_else(GameRng::from_entropy, GameRng::new);
        tracing::info!(seed = rng.seed(), start = %world.start(), "new game");
        Ok(Self::new(GameState::new(world), rng))
    }
}

impl<R: RandomSource> GameLoop<R> {
    /// Create a game loop over an existing state
    pub fn new(state: GameState, rng: R) -> Self {
        Self { state, rng }
    }

    /// Read-only view of the game state
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Consume the game loop and return the owned game state
    pub fn into_state(self) -> GameState {
        self.state
    }

    /// Opening events: the welcome banner (if asked for), spawned enemies of
    /// the start room and its description.
    pub fn begin(&mut self, welcome: bool) -> Result<TurnOutcome, EngineError> {
        if welcome {
            help::welcome(&mut self.state);
        }
        let spawned: Vec<Event> = self
            .state
            .enemies
            .iter()
            .map(|e| Event::EnemySpawned {
                enemy: e.kind,
                max_hp: e.max_hp,
            })
            .collect();
        for event in spawned {
            self.state.emit(event);
        }
        let room = self.state.player.current_room.clone();
        self.state.emit(Event::RoomEntered { room });
        if let Err(err) = look::describe_room(&mut self.state) {
            self.state.take_events();
            return Err(err);
        }
        Ok(self.finish())
    }

    /// Parse and run one line of input
    pub fn execute_line(&mut self, line: &str) -> Result<TurnOutcome, EngineError> {
        self.tick(action::parse(line))
    }

    /// Run one command to completion
    pub fn tick(&mut self, action: Action) -> Result<TurnOutcome, EngineError> {
        tracing::debug!(?action, turn = self.state.turns, "executing command");

        if self.state.is_over() && !action.is_read_only() {
            tracing::warn!(?action, status = ?self.state.status, "command after game over");
            self.state.narrate(Category::Info, "The game is over.");
            return Ok(self.finish());
        }

        match self.execute(action) {
            Ok(ActionResult::NoTime) => {}
            Ok(ActionResult::Success | ActionResult::Died | ActionResult::Won) => {
                self.state.turns += 1;
            }
            Err(err) => {
                tracing::error!(%err, "engine data error");
                self.state.take_events();
                return Err(err);
            }
        }
        Ok(self.finish())
    }

    fn execute(&mut self, action: Action) -> Result<ActionResult, EngineError> {
        let state = &mut self.state;
        match action {
            Action::Look => look::do_look(state),
            Action::Move(direction) => movement::do_move(state, direction),
            Action::BadDirection(_) => Ok(movement::no_exit(state)),
            Action::Back => movement::go_back(state),
            Action::Take(item) => items::do_take(state, &item),
            Action::Use(item) => Ok(items::do_use(state, &item)),
            Action::Open(target) => chest::do_open(state, &target),
            Action::Inventory => Ok(items::show_inventory(state)),
            Action::Attack(enemy) => combat::do_attack(state, &mut self.rng, &enemy),
            Action::Flee => combat::attempt_run(state, &mut self.rng),
            Action::Help => Ok(help::do_help(state)),
            Action::Unrecognized(raw) => Ok(help::not_understood(state, &raw)),
        }
    }

    fn finish(&mut self) -> TurnOutcome {
        let result = match self.state.status {
            GameStatus::Playing => GameLoopResult::Continue,
            GameStatus::Dead => GameLoopResult::PlayerDied,
            GameStatus::Won => GameLoopResult::PlayerWon,
        };
        TurnOutcome {
            events: self.state.take_events(),
            result,
        }
    }
}

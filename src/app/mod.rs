//! Application wiring.
//!
//! [`App`] owns the wallet, the reward pipeline, and the session, and
//! routes events between them. Front-ends (the CLI here, a browser shell
//! originally) only talk to this container.

pub mod config;
pub mod connect;

pub use config::{ChainProfile, GameConfig};

use std::time::Instant;

use crate::{
    Error, Result,
    chain::Address,
    ports::{CollectibleMinter, TransactionGateway, WalletGateway},
    rewards::{RewardDue, RewardPipeline, StatusUpdate},
    session::{Session, TurnEvent},
};

/// The assembled application: wallet gate, game session, reward pipeline.
///
/// Game input is ignored until [`App::connect`] succeeds, matching the
/// original's wallet gate. Reward submission failures downgrade to status
/// text; only the connect flow surfaces hard errors.
pub struct App<W, T, M> {
    wallet: W,
    pipeline: RewardPipeline<T, M>,
    session: Session,
    chain: ChainProfile,
    player: Option<Address>,
}

impl<W, T, M> App<W, T, M>
where
    W: WalletGateway,
    T: TransactionGateway,
    M: CollectibleMinter,
{
    pub fn new(wallet: W, gateway: T, minter: M, chain: ChainProfile, game: GameConfig) -> Self {
        let session = Session::new(&game);
        Self::assemble(wallet, gateway, minter, chain, game, session)
    }

    /// Like [`App::new`] with a seeded opponent, for reproducible runs.
    pub fn with_seed(
        wallet: W,
        gateway: T,
        minter: M,
        chain: ChainProfile,
        game: GameConfig,
        seed: u64,
    ) -> Self {
        let session = Session::with_seed(&game, seed);
        Self::assemble(wallet, gateway, minter, chain, game, session)
    }

    fn assemble(
        wallet: W,
        gateway: T,
        minter: M,
        chain: ChainProfile,
        game: GameConfig,
        session: Session,
    ) -> Self {
        App {
            wallet,
            pipeline: RewardPipeline::new(gateway, minter, game.metadata_uri.clone()),
            session,
            chain,
            player: None,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut Session {
        &mut self.session
    }

    pub fn status(&self) -> &str {
        self.session.status()
    }

    pub fn is_connected(&self) -> bool {
        self.player.is_some()
    }

    /// When the driver should call [`App::tick`] next.
    pub fn next_wake(&self) -> Option<Instant> {
        self.session.next_wake()
    }

    /// Connect the wallet and negotiate the target network. On success the
    /// game opens for input; on failure a user-facing status line is set
    /// and the error returned.
    pub fn connect(&mut self) -> Result<Address> {
        match connect::establish(&mut self.wallet, &self.chain) {
            Ok(address) => {
                self.set_status(format!(
                    "Connected: {} on {}. Your turn (X)!",
                    address.short(),
                    self.chain.name
                ));
                self.player = Some(address.clone());
                Ok(address)
            }
            Err(e) => {
                let text = match &e {
                    Error::WalletUnavailable => {
                        "No wallet detected. Please install one to play.".to_string()
                    }
                    Error::ConnectionRejected => {
                        "Wallet connection rejected. Please connect to play.".to_string()
                    }
                    Error::NetworkMismatch { .. }
                    | Error::SwitchRejected { .. }
                    | Error::AddChainFailed { .. }
                    | Error::UnknownChain { .. } => format!(
                        "Could not configure {}. Please switch networks manually.",
                        self.chain.name
                    ),
                    other => format!("Connection failed: {other}"),
                };
                self.set_status(text);
                Err(e)
            }
        }
    }

    /// Handle a click on a cell. Ignored until connected.
    pub fn click(&mut self, position: usize) -> TurnEvent {
        if self.player.is_none() {
            return TurnEvent::Ignored;
        }
        let event = self.session.human_move(position);
        self.handle(event);
        event
    }

    /// Run scheduled work (the opponent's delayed move).
    pub fn tick(&mut self, now: Instant) -> TurnEvent {
        let event = self.session.tick(now);
        self.handle(event);
        event
    }

    /// Confirm pending reward transactions. Stale confirmations (from
    /// before a reset) are dropped instead of touching the status line.
    pub fn settle(&mut self) {
        for update in self.pipeline.settle() {
            self.session.apply_update(&update);
        }
    }

    /// Start a new game. Pending reward confirmations keep running; their
    /// updates will no longer reach the status line.
    pub fn reset(&mut self) {
        self.session.reset();
    }

    fn handle(&mut self, event: TurnEvent) {
        if let TurnEvent::GameOver {
            reward: Some(due), ..
        } = event
        {
            self.dispatch(&due);
        }
    }

    fn dispatch(&mut self, due: &RewardDue) {
        // click() gates on connection, so a win implies a player
        let Some(player) = self.player.clone() else {
            return;
        };
        for update in self.pipeline.dispatch(&player, due) {
            self.session.apply_update(&update);
        }
    }

    fn set_status(&mut self, text: String) {
        let update = StatusUpdate {
            generation: self.session.generation(),
            text,
        };
        self.session.apply_update(&update);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        adapters::{InMemoryChain, InMemoryCollectible, InMemoryWallet},
        chain::ChainId,
    };

    fn connected_app() -> (
        App<InMemoryWallet, InMemoryChain, InMemoryCollectible>,
        InMemoryChain,
    ) {
        let chain = ChainProfile::status_testnet();
        let wallet = InMemoryWallet::new(Address::new("0xfeedfacefeedface1234"), chain.chain_id);
        let ledger = InMemoryChain::new();
        let mut app = App::with_seed(
            wallet,
            ledger.clone(),
            InMemoryCollectible::new(),
            chain,
            GameConfig::new().with_think_delay(std::time::Duration::ZERO),
            42,
        );
        app.connect().unwrap();
        (app, ledger)
    }

    #[test]
    fn test_clicks_ignored_before_connect() {
        let chain = ChainProfile::status_testnet();
        let wallet = InMemoryWallet::new(Address::new("0xfeed"), chain.chain_id);
        let mut app = App::new(
            wallet,
            InMemoryChain::new(),
            InMemoryCollectible::new(),
            chain,
            GameConfig::new(),
        );

        assert_eq!(app.click(4), TurnEvent::Ignored);
        assert!(app.session().board().is_empty(4));
    }

    #[test]
    fn test_connect_sets_status_and_opens_game() {
        let (app, _) = connected_app();
        assert!(app.is_connected());
        assert!(app.status().starts_with("Connected: 0xfeed"));
        assert!(app.status().contains("Status Network Testnet"));
    }

    #[test]
    fn test_failed_connect_sets_status_text() {
        let chain = ChainProfile::status_testnet();
        let wallet =
            InMemoryWallet::new(Address::new("0xfeed"), chain.chain_id).rejecting_connection();
        let mut app = App::new(
            wallet,
            InMemoryChain::new(),
            InMemoryCollectible::new(),
            chain,
            GameConfig::new(),
        );

        assert!(app.connect().is_err());
        assert!(!app.is_connected());
        assert!(app.status().contains("rejected"));
    }

    #[test]
    fn test_click_then_tick_plays_a_round() {
        let (mut app, _) = connected_app();
        assert_eq!(app.click(4), TurnEvent::OpponentScheduled);
        assert!(matches!(
            app.tick(Instant::now()),
            TurnEvent::OpponentMoved { .. }
        ));
    }

    #[test]
    fn test_win_dispatches_reward() {
        let (mut app, ledger) = connected_app();
        let position = crate::game::Board::from_string("XX.OO....").unwrap();
        assert!(app.session_mut().load_position(position));

        match app.click(2) {
            TurnEvent::GameOver { reward, .. } => assert!(reward.is_some()),
            other => panic!("expected game over, got {other:?}"),
        }
        assert_eq!(ledger.count(), 1);
        assert_eq!(app.session().streak(), 1);
        assert!(app.status().contains("You won!"));

        app.settle();
        assert!(app.status().contains("recorded on-chain"));
    }

    #[test]
    fn test_mid_game_moves_submit_nothing() {
        let (mut app, ledger) = connected_app();
        app.click(4);
        app.tick(Instant::now());
        assert_eq!(ledger.count(), 0);
    }
}

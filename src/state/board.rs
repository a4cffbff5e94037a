//! Board state provided to components via context.

#[cfg(test)]
#[path = "board_test.rs"]
mod board_test;

use atlas::config::BoardConfig;
use atlas::controller::Controller;

use crate::util::storage::BrowserStorage;

pub type BoardController = Controller<BrowserStorage>;

/// The controller plus the configuration it was built from. Components read
/// map chrome settings (tiles, marker, search) from `config`.
#[derive(Clone, Debug)]
pub struct BoardState {
    pub controller: BoardController,
    pub config: BoardConfig,
}

impl BoardState {
    /// Build the controller and load the saved list from storage.
    pub fn new(config: BoardConfig) -> Self {
        let controller = Controller::new(BrowserStorage, &config);
        log::debug!("loaded {} saved locations", controller.store().len());
        Self { controller, config }
    }
}

impl Default for BoardState {
    fn default() -> Self {
        Self::new(BoardConfig::default())
    }
}

use refscale_core::display::Coin;

/// Coin picker state.
#[derive(Default)]
pub struct CoinState {
    pub selected: Option<Coin>,
}

impl CoinState {
    pub fn label(&self) -> String {
        Coin::selection_label(self.selected)
    }
}

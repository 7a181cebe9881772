//! SelectionState - Which square on the board is selected
//!
//! Owns the selection for a row of tiles. The tiles themselves only report
//! clicks; every change to the selection goes through [`SelectionState::select`].

use crate::domain::colour::Colour;

/// Selection owner for the square board
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SelectionState {
    tiles: Vec<Colour>,
    selected: Option<usize>,
}

impl SelectionState {
    /// Create a board with one tile per colour and nothing selected
    pub fn new(tiles: Vec<Colour>) -> Self {
        Self {
            tiles,
            selected: None,
        }
    }

    /// Select the tile at `index`. Returns `false` if there is no such tile.
    pub fn select(&mut self, index: usize) -> bool {
        if index >= self.tiles.len() {
            tracing::warn!(index, tiles = self.tiles.len(), "Ignoring selection of missing tile");
            return false;
        }
        if self.selected != Some(index) {
            tracing::debug!(index, colour = %self.tiles[index], "Tile selected");
        }
        self.selected = Some(index);
        true
    }

    pub fn is_selected(&self, index: usize) -> bool {
        self.selected == Some(index)
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn tiles(&self) -> &[Colour] {
        &self.tiles
    }

    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(names: &[&str]) -> SelectionState {
        SelectionState::new(
            names
                .iter()
                .map(|name| name.parse().expect("valid colour"))
                .collect(),
        )
    }

    #[test]
    fn nothing_selected_initially() {
        let state = board(&["blue", "green"]);
        assert_eq!(state.selected(), None);
        assert!(!state.is_selected(0));
        assert!(!state.is_selected(1));
    }

    #[test]
    fn selecting_moves_the_selection() {
        let mut state = board(&["blue", "green", "purple"]);
        assert!(state.select(1));
        assert!(state.is_selected(1));

        assert!(state.select(2));
        assert!(state.is_selected(2));
        assert!(!state.is_selected(1));

        let selected_count = (0..state.len()).filter(|&i| state.is_selected(i)).count();
        assert_eq!(selected_count, 1);
    }

    #[test]
    fn reselecting_keeps_selection() {
        let mut state = board(&["blue"]);
        assert!(state.select(0));
        assert!(state.select(0));
        assert_eq!(state.selected(), Some(0));
    }

    #[test]
    fn out_of_range_is_ignored() {
        let mut state = board(&["blue", "green"]);
        state.select(0);
        assert!(!state.select(5));
        assert_eq!(state.selected(), Some(0));

        let mut empty = SelectionState::default();
        assert!(empty.is_empty());
        assert!(!empty.select(0));
        assert_eq!(empty.selected(), None);
    }
}

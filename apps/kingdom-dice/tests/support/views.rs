//! Builders for AI decision views.

use kingdom_dice::domain::dice::{dice_from_faces, Die, Face};
use kingdom_dice::domain::player_view::TurnView;
use kingdom_dice::domain::state::{AiDifficulty, Player};

pub struct ViewBuilder {
    faces: Vec<Face>,
    locked: Vec<usize>,
    held: Vec<usize>,
    has_rolled: bool,
    target: u32,
    total: u32,
    turn: u32,
    opponent_best: u32,
}

impl Default for ViewBuilder {
    fn default() -> Self {
        Self {
            faces: vec![2, 3, 4, 6, 2, 3],
            locked: Vec::new(),
            held: Vec::new(),
            has_rolled: true,
            target: 10_000,
            total: 0,
            turn: 0,
            opponent_best: 0,
        }
    }
}

impl ViewBuilder {
    pub fn faces(mut self, faces: [Face; 6]) -> Self {
        self.faces = faces.to_vec();
        self
    }

    pub fn locked(mut self, indices: &[usize]) -> Self {
        self.locked = indices.to_vec();
        self
    }

    pub fn held(mut self, indices: &[usize]) -> Self {
        self.held = indices.to_vec();
        self
    }

    /// Every die committed, so the next decision is roll-or-end.
    pub fn all_committed(self) -> Self {
        self.locked(&[0, 1, 2, 3, 4, 5])
    }

    pub fn not_rolled(mut self) -> Self {
        self.has_rolled = false;
        self
    }

    pub fn scores(mut self, total: u32, turn: u32) -> Self {
        self.total = total;
        self.turn = turn;
        self
    }

    pub fn target(mut self, target: u32) -> Self {
        self.target = target;
        self
    }

    pub fn opponent_best(mut self, best: u32) -> Self {
        self.opponent_best = best;
        self
    }

    pub fn build(self) -> TurnView {
        let mut dice: Vec<Die> = dice_from_faces(&self.faces);
        for &i in &self.locked {
            dice[i].is_locked = true;
        }
        for &i in &self.held {
            dice[i].is_held = true;
        }
        let mut me = Player::computer(2, "Computer", AiDifficulty::Hard);
        me.total_score = self.total;
        me.turn_score = self.turn;
        TurnView {
            dice,
            has_rolled_this_turn: self.has_rolled,
            target_score: self.target,
            opponent_best_total: self.opponent_best,
            me,
        }
    }
}

pub fn view() -> ViewBuilder {
    ViewBuilder::default()
}

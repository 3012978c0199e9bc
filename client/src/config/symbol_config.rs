use common::config::Validate;
use common::tictactoe::Mark;
use serde::{Deserialize, Serialize};

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone, Copy)]
#[serde(default)]
pub struct SymbolConfig {
    pub human: char,
    pub computer: char,
    pub empty: char,
}

impl SymbolConfig {
    pub fn symbol_for(&self, mark: Mark) -> char {
        match mark {
            Mark::Human => self.human,
            Mark::Computer => self.computer,
            Mark::Empty => self.empty,
        }
    }
}

impl Validate for SymbolConfig {
    fn validate(&self) -> Result<(), String> {
        if self.human.is_whitespace() || self.human.is_control() {
            return Err("human symbol must be a visible character".to_string());
        }
        if self.computer.is_whitespace() || self.computer.is_control() {
            return Err("computer symbol must be a visible character".to_string());
        }
        if self.empty.is_control() {
            return Err("empty symbol must not be a control character".to_string());
        }
        if self.human == self.computer || self.human == self.empty || self.computer == self.empty {
            return Err(format!(
                "symbols must be distinct, got human '{}', computer '{}', empty '{}'",
                self.human, self.computer, self.empty
            ));
        }
        Ok(())
    }
}

impl Default for SymbolConfig {
    fn default() -> Self {
        Self {
            human: 'X',
            computer: 'O',
            empty: ' ',
        }
    }
}

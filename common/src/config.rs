pub const ANNOUNCE_LABEL: &str = "Command ==>";
pub const ANNOUNCE_MESSAGE: &str = "I am Hello";
pub const REVERSAL_INPUT: &str = "!oG ,olleH";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Printed before the message, separated by a single space.
    pub announce_label: String,
    pub announce_message: String,
    /// Printed reversed, after the greeting.
    pub reversal_input: String,
}

impl Config {
    pub fn announcement(&self) -> String {
        format!("{} {}", self.announce_label, self.announce_message)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            announce_label: ANNOUNCE_LABEL.to_string(),
            announce_message: ANNOUNCE_MESSAGE.to_string(),
            reversal_input: REVERSAL_INPUT.to_string(),
        }
    }
}

//! Game Log Records
//!
//! Structured description of one player action, e.g. "killed a monster and
//! gained 2000 gold, now holding 2500". Detailed enough that the log alone
//! shows what a player did, what they gained, and where it came from.

use std::fmt;

use serde::{Deserialize, Serialize};

/// One structured game event.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameLog {
    /// Server name
    pub server: String,
    /// Content area (`Battle`, `CashShop`, ...). The same code can mean
    /// different things in different content areas.
    pub content: String,
    /// Action code (`MonsterKilled`, `ItemSold`, ...)
    pub code: String,
    /// Account the action belongs to
    pub account_no: u64,
    /// Action-specific value 1
    pub param1: i32,
    /// Action-specific value 2
    pub param2: i32,
    /// Action-specific value 3
    pub param3: i32,
    /// Action-specific value 4
    pub param4: i32,
    /// Anything not expressible as a number
    pub param_str: String,
}

impl GameLog {
    /// Create a game log with no numeric parameters.
    pub fn new(
        server: impl Into<String>,
        content: impl Into<String>,
        code: impl Into<String>,
        account_no: u64,
    ) -> Self {
        Self {
            server: server.into(),
            content: content.into(),
            code: code.into(),
            account_no,
            param1: 0,
            param2: 0,
            param3: 0,
            param4: 0,
            param_str: String::new(),
        }
    }

    /// Set the four numeric parameters.
    pub fn with_params(mut self, params: [i32; 4]) -> Self {
        [self.param1, self.param2, self.param3, self.param4] = params;
        self
    }

    /// Set the free-text parameter.
    pub fn with_param_str(mut self, param_str: impl Into<String>) -> Self {
        self.param_str = param_str.into();
        self
    }

    /// Numeric parameters in order.
    pub fn params(&self) -> [i32; 4] {
        [self.param1, self.param2, self.param3, self.param4]
    }

    /// Serialize as a single JSON line for storage backends.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

impl fmt::Display for GameLog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}, {}, {}, AccountNo: {}, Params: ({}, {}, {}, {}), Str: {}",
            self.server,
            self.content,
            self.code,
            self.account_no,
            self.param1,
            self.param2,
            self.param3,
            self.param4,
            self.param_str,
        )
    }
}

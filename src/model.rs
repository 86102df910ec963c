use serde::{Deserialize, Serialize};

/// Upstream-reported jackpot for one game. The prize text is display copy
/// ("$20 Million"), not a parsed amount.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GrandPrizeResult {
    pub game_identifier: String,
    pub next_prize_text: String,
}

impl GrandPrizeResult {
    pub fn new(game_identifier: &str, next_prize_text: &str) -> Self {
        Self {
            game_identifier: game_identifier.to_string(),
            next_prize_text: next_prize_text.to_string(),
        }
    }
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct GrandPrizeResponse {
    pub grand_prize: GrandPrize,
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct GrandPrize {
    pub next_prize_text: String,
}

/// Body returned by `/api/GetGrandPrize`.
#[derive(Serialize, Debug, PartialEq, Eq)]
pub struct GrandPrizeSummary {
    #[serde(rename = "Powerball")]
    pub powerball: String,
    #[serde(rename = "MegaMillions")]
    pub mega_millions: String,
}

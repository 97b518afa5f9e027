// HenrikDev API endpoint builders.

pub const BASE_URL: &str = "https://api.henrikdev.xyz";

/// Competitive matches fetched per analysis (the provider caps the window).
pub const MATCH_WINDOW: usize = 10;

pub fn account(name: &str, tag: &str) -> String {
    format!("{}/valorant/v2/account/{}/{}", BASE_URL, name, tag)
}

pub fn mmr(region: &str, name: &str, tag: &str) -> String {
    format!("{}/valorant/v2/mmr/{}/{}/{}", BASE_URL, region, name, tag)
}

pub fn matches(region: &str, name: &str, tag: &str) -> String {
    format!(
        "{}/valorant/v3/matches/{}/{}/{}?mode=competitive&size={}",
        BASE_URL, region, name, tag, MATCH_WINDOW
    )
}

//! Token icon resolution.
//!
//! Maps a currency code to the URL of its SVG icon in the token-icons
//! repository. Most icons are named after the code verbatim; a few liquid
//! staking tokens use mixed case and live in an exception table.

use std::collections::HashMap;

use lazy_static::lazy_static;

/// Icon repository path, pinned to a known commit.
pub const TOKEN_ICON_BASE: &str =
    "https://raw.githubusercontent.com/Switcheo/token-icons/c884d9c223e70c70efae3ece3dc9eaffba28ca56/tokens";

lazy_static! {
    /// Codes whose icon filename does not match the code.
    static ref TOKEN_ICON_EXCEPTIONS: HashMap<&'static str, &'static str> = HashMap::from([
        ("RATOM", "rATOM.svg"),
        ("STATOM", "stATOM.svg"),
        ("STEVMOS", "stEVMOS.svg"),
        ("STLUNA", "stLUNA.svg"),
        ("STOSMO", "stOSMO.svg"),
    ]);
}

/// Icon filename for a currency code.
pub fn token_icon_file(code: &str) -> String {
    match TOKEN_ICON_EXCEPTIONS.get(code) {
        Some(file) => (*file).to_string(),
        None => format!("{}.svg", code),
    }
}

/// Full icon URL for a currency code.
///
/// Never fails. Whether the URL actually serves an image is the renderer's
/// concern.
pub fn token_icon_url(code: &str) -> String {
    format!("{}/{}", TOKEN_ICON_BASE, token_icon_file(code))
}

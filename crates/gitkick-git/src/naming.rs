use std::sync::LazyLock;

use regex::Regex;

/// Prefix shared by every fallback branch; `clean` deletes branches matching it.
pub const FALLBACK_BRANCH_PREFIX: &str = "kk-fallback";

/// `<letters>[/-]<digits>-<rest>`, e.g. `ccs-123-fix-bug` or `ccs/123-fix-bug`.
static TICKET_BRANCH: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([A-Za-z]+)[/-]([0-9]+)-(.+)$").expect("ticket branch pattern is valid")
});

/// Constructs the fallback branch name for a branch about to be squashed.
///
/// Example: `("ccs-1-fix", 1700000000)` → `"kk-fallback-ccs-1-fix-1700000000"`
pub fn fallback_branch_name(prefix: &str, branch: &str, timestamp: i64) -> String {
    format!("{prefix}-{branch}-{timestamp}")
}

/// Derives a commit message from a ticket-style branch name.
///
/// Examples:
/// - `"ccs-123-fix-login-bug"` → `"[ccs-123] fix login bug"`
/// - `"main"` → `"main"` (no ticket, used verbatim)
pub fn derive_commit_message(branch: &str) -> String {
    match TICKET_BRANCH.captures(branch) {
        Some(caps) => format!("[{}-{}] {}", &caps[1], &caps[2], caps[3].replace('-', " ")),
        None => branch.to_string(),
    }
}

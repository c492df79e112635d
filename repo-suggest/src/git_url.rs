//! Syntactic Git remote URL validation.
//!
//! This is deliberately a weak validator: it answers "could this string
//! plausibly be a clone URL?" without touching the network. It will accept
//! some hosts that don't resolve and reject some exotic but valid remotes.

use url::Url;

/// Schemes accepted for URL-form remotes.
const ALLOWED_SCHEMES: &[&str] = &["ssh", "git", "http", "https"];

/// Returns `true` if `input` is syntactically plausible as a Git remote.
///
/// Two forms are accepted:
/// - SSH shorthand `<user>@<host>:<path>`, where the path is non-empty and
///   contains no further colon.
/// - A URL with scheme `ssh`, `git`, `http`, or `https` and a non-empty path
///   beyond the leading slash.
///
/// In both forms the host must split on `.` into at least two non-empty
/// segments, which rejects bare hostnames and stray dots.
pub fn is_valid_git_url(input: &str) -> bool {
    if is_ssh_shorthand(input) {
        return true;
    }

    let Ok(parsed) = Url::parse(input) else {
        return false;
    };

    if !ALLOWED_SCHEMES.contains(&parsed.scheme()) {
        return false;
    }

    let Some(host) = parsed.host_str() else {
        return false;
    };
    if !has_dotted_host(host) {
        return false;
    }

    !parsed.path().trim_start_matches('/').is_empty()
}

/// Checks the `<user>@<host>:<path>` shorthand form.
fn is_ssh_shorthand(input: &str) -> bool {
    let Some((user, rest)) = input.split_once('@') else {
        return false;
    };
    if user.is_empty() {
        return false;
    }

    let Some((host, path)) = rest.split_once(':') else {
        return false;
    };
    if path.is_empty() || path.contains(':') {
        return false;
    }

    has_dotted_host(host)
}

/// Requires at least two non-empty dot-separated host segments.
fn has_dotted_host(host: &str) -> bool {
    let mut segments = 0;
    for segment in host.split('.') {
        if segment.is_empty() {
            return false;
        }
        segments += 1;
    }
    segments >= 2
}

//! Verdict classification for hiring-manager responses.

/// Tri-state outcome of the hiring-decision agent for one candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// Good fit: persist, notify, resolve.
    Invite,
    /// Not a fit: record in the rejection log, resolve.
    Reject,
    /// Neither signal present. The candidate stays pending so a later
    /// attempt can get a usable answer; transient agent noise must not
    /// permanently accept or exclude anyone.
    Undetermined,
}

/// Classifies a free-text verdict by literal, case-sensitive substring:
/// "yes" wins over "no", matching anywhere in the response (the agent
/// prompt constrains the format; this matcher deliberately does not).
pub fn classify(response: &str) -> Verdict {
    if response.contains("yes") {
        Verdict::Invite
    } else if response.contains("no") {
        Verdict::Reject
    } else {
        Verdict::Undetermined
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn yes_without_no_is_invite() {
        assert_eq!(classify("yes, strong match for the role"), Verdict::Invite);
    }

    #[test]
    fn no_without_yes_is_reject() {
        assert_eq!(classify("no. missing required experience"), Verdict::Reject);
    }

    #[test]
    fn neither_signal_is_undetermined() {
        assert_eq!(classify("the candidate profile is unclear"), Verdict::Undetermined);
        assert_eq!(classify(""), Verdict::Undetermined);
    }

    #[test]
    fn both_signals_resolve_to_invite() {
        // "yes" is checked first; a response containing both counts as
        // an accept.
        assert_eq!(classify("yes, though not perfect"), Verdict::Invite);
    }

    #[test]
    fn matching_is_case_sensitive() {
        assert_eq!(classify("YES"), Verdict::Undetermined);
        assert_eq!(classify("No match"), Verdict::Undetermined);
    }

    #[test]
    fn substring_matches_inside_words() {
        // Known quirk of the literal matcher, pinned on purpose.
        assert_eq!(classify("candidate has notable gaps"), Verdict::Reject);
    }
}

//! Catalog of known homework review statuses.

/// Verdict texts for every status code the Practicum API documents.
///
/// The table is fixed for the lifetime of the process; a code outside
/// this set is treated as a contract violation by the formatter.
pub const KNOWN_STATUSES: [(&str, &str); 3] = [
    ("approved", "Работа проверена: ревьюеру всё понравилось. Ура!"),
    ("reviewing", "Работа взята на проверку ревьюером."),
    ("rejected", "Работа проверена: у ревьюера есть замечания."),
];

/// Looks up the verdict text for a status code.
///
/// Returns `None` for undocumented codes; the caller decides how to fail.
#[must_use]
pub fn verdict_for(status: &str) -> Option<&'static str> {
    KNOWN_STATUSES
        .iter()
        .find(|(code, _)| *code == status)
        .map(|(_, verdict)| *verdict)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_documented_statuses_resolve() {
        assert_eq!(
            verdict_for("approved"),
            Some("Работа проверена: ревьюеру всё понравилось. Ура!")
        );
        assert_eq!(
            verdict_for("reviewing"),
            Some("Работа взята на проверку ревьюером.")
        );
        assert_eq!(
            verdict_for("rejected"),
            Some("Работа проверена: у ревьюера есть замечания.")
        );
    }

    #[test]
    fn test_unknown_status_is_absent() {
        assert_eq!(verdict_for("pending"), None);
        assert_eq!(verdict_for(""), None);
        assert_eq!(verdict_for("APPROVED"), None);
    }
}

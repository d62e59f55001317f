//! Header role inference
//!
//! The sheet schema is edited by people outside this system, so column
//! position cannot be relied upon — only fuzzy name matching survives
//! header renames and reorders. Each of the four roles is resolved
//! independently over its own ordered predicate list (first match wins),
//! and two roles may legitimately land on the same header: in sparse
//! schemas a participant column doubles as the team key.
//!
//! This is a best-effort heuristic, not a validated schema contract.
//! A missing `points` or `group_key` is a defined degraded state handled
//! downstream, never a hard failure here.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

static PARTICIPANT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)atleta|athlete|participante|participant|membro|member|aluno").unwrap()
});

static NAME: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)nome|name").unwrap());

static GENERIC_TITLE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)nome|name|title|titulo|modelo|produto").unwrap());

static IMAGE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)img|image|foto|pic|url|src|thumbnail").unwrap());

static POINTS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)ponto|point|score|nota|pts|total|dias|days").unwrap());

static GROUP: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)dupla|pair|equipe|team|time|grupo|group|participante").unwrap()
});

/// Semantic column assignment guessed from header names.
///
/// `title` resolves whenever at least one header exists (unconditional
/// first-header fallback); the other roles are optional.
#[derive(Debug, Clone, Default, Serialize)]
pub struct RoleMap {
    /// Column carrying a participant's name
    pub title: Option<String>,
    /// Column carrying an image/photo reference
    pub image: Option<String>,
    /// Column carrying the numeric score contribution
    pub points: Option<String>,
    /// Column carrying the team/grouping key
    pub group_key: Option<String>,
}

/// Guess which header plays which semantic role.
///
/// Title cascade: participant vocabulary first; then a name-like header
/// that is not also decorated with team vocabulary (so a "team name"
/// column is not mistaken for a person); then generic title vocabulary;
/// finally the first header unconditionally.
pub fn infer_roles(headers: &[String]) -> RoleMap {
    let title = first_match(headers, &PARTICIPANT)
        .or_else(|| {
            headers
                .iter()
                .find(|h| NAME.is_match(h) && !GROUP.is_match(h))
                .cloned()
        })
        .or_else(|| first_match(headers, &GENERIC_TITLE))
        .or_else(|| headers.first().cloned());

    RoleMap {
        title,
        image: first_match(headers, &IMAGE),
        points: first_match(headers, &POINTS),
        group_key: first_match(headers, &GROUP),
    }
}

fn first_match(headers: &[String], pattern: &Regex) -> Option<String> {
    headers.iter().find(|h| pattern.is_match(h)).cloned()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn headers(names: &[&str]) -> Vec<String> {
        names.iter().map(|n| n.to_string()).collect()
    }

    #[test]
    fn typical_schema_resolves_all_roles() {
        let roles = infer_roles(&headers(&["Dupla", "Atleta", "Foto", "Pontos"]));
        assert_eq!(roles.group_key.as_deref(), Some("Dupla"));
        assert_eq!(roles.title.as_deref(), Some("Atleta"));
        assert_eq!(roles.image.as_deref(), Some("Foto"));
        assert_eq!(roles.points.as_deref(), Some("Pontos"));
    }

    #[test]
    fn team_name_column_is_not_a_person() {
        let roles = infer_roles(&headers(&["Nome da Equipe", "Nome", "Total"]));
        assert_eq!(roles.title.as_deref(), Some("Nome"));
        assert_eq!(roles.group_key.as_deref(), Some("Nome da Equipe"));
        assert_eq!(roles.points.as_deref(), Some("Total"));
    }

    #[test]
    fn generic_title_vocabulary_is_a_fallback() {
        let roles = infer_roles(&headers(&["Produto", "Score"]));
        assert_eq!(roles.title.as_deref(), Some("Produto"));
        assert_eq!(roles.points.as_deref(), Some("Score"));
    }

    #[test]
    fn first_header_is_the_last_resort_title() {
        let roles = infer_roles(&headers(&["xyz", "abc"]));
        assert_eq!(roles.title.as_deref(), Some("xyz"));
        assert!(roles.image.is_none());
        assert!(roles.points.is_none());
        assert!(roles.group_key.is_none());
    }

    #[test]
    fn one_header_may_satisfy_two_roles() {
        // Sparse schema: the participant column doubles as the team key.
        let roles = infer_roles(&headers(&["Participante", "Dias"]));
        assert_eq!(roles.title.as_deref(), Some("Participante"));
        assert_eq!(roles.group_key.as_deref(), Some("Participante"));
        assert_eq!(roles.points.as_deref(), Some("Dias"));
    }

    #[test]
    fn no_headers_means_no_roles() {
        let roles = infer_roles(&[]);
        assert!(roles.title.is_none());
        assert!(roles.group_key.is_none());
    }
}

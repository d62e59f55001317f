//! Ranking engine
//!
//! Groups raw records into teams, accumulates per-member and per-team
//! scores, and assigns dense competition ranks. Every row carrying a team
//! key contributes its points to the team total even when no member name
//! is resolvable on that row, so a team total may exceed the sum of its
//! members' points — rows can contribute anonymously.

use std::collections::HashMap;

use serde::Serialize;

use crate::roles::RoleMap;
use crate::sheet::Record;

/// An individual contributor within a team, identified by raw title text.
#[derive(Debug, Clone, Serialize)]
pub struct Member {
    /// Name exactly as it appears in the sheet (identity within the team)
    pub raw_name: String,
    /// Title-cased display name
    pub name: String,
    /// First image reference seen for this member
    pub image: Option<String>,
    /// Accumulated points across this member's rows
    pub points: f64,
}

/// A team with its accumulated score and ordered members.
#[derive(Debug, Clone, Serialize)]
pub struct Team {
    /// Raw grouping-key value (team identity)
    pub key: String,
    /// Joined member display names, or a fallback label built from the key
    pub name: String,
    /// Sum of every contributing row's points
    pub total: f64,
    /// Distinct members in first-seen order
    pub members: Vec<Member>,
}

/// A team plus its computed competition rank.
#[derive(Debug, Clone, Serialize)]
pub struct Standing {
    pub rank: u32,
    pub team: Team,
}

/// Group records into ranked teams.
///
/// Returns an empty list when the `group_key` or `points` role is
/// unresolved — a degraded state, not an error. Rows with an empty team
/// key are excluded entirely; every remaining row's points accumulate
/// into its team total, and rows that also carry a title accumulate into
/// that member (creating it on first sight, backfilling a missing image
/// from the first row that supplies one).
///
/// Teams are ordered by total descending, first-seen order breaking
/// ties. Ranks are dense competition ranks: tied teams share a rank, and
/// the next strictly-smaller total takes its 1-based position in the
/// sorted sequence — so a rank can jump by more than one after a tie
/// block.
pub fn rank(records: &[Record], roles: &RoleMap) -> Vec<Standing> {
    let (Some(group_key), Some(points_key)) =
        (roles.group_key.as_deref(), roles.points.as_deref())
    else {
        return Vec::new();
    };

    let mut teams: Vec<TeamAccumulator> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for record in records {
        let key = record.get(group_key).map(String::as_str).unwrap_or("");
        if key.is_empty() {
            continue; // not attributable to any team
        }
        let points = parse_points(record.get(points_key).map(String::as_str).unwrap_or(""));

        let slot = match index.get(key) {
            Some(&slot) => slot,
            None => {
                index.insert(key.to_string(), teams.len());
                teams.push(TeamAccumulator::new(key));
                teams.len() - 1
            }
        };
        let team = &mut teams[slot];
        team.total += points;

        if let Some(title_key) = roles.title.as_deref() {
            let name = record.get(title_key).map(String::as_str).unwrap_or("");
            if !name.is_empty() {
                let image = roles
                    .image
                    .as_deref()
                    .and_then(|k| record.get(k))
                    .filter(|v| !v.is_empty())
                    .cloned();
                team.credit_member(name, image, points);
            }
        }
    }

    let mut teams: Vec<Team> = teams.into_iter().map(TeamAccumulator::finish).collect();
    // Stable sort keeps first-seen order among equal totals.
    teams.sort_by(|a, b| b.total.total_cmp(&a.total));

    let mut standings = Vec::with_capacity(teams.len());
    let mut rank = 1u32;
    let mut prev_total = 0.0f64;
    for (position, team) in teams.into_iter().enumerate() {
        if position > 0 && team.total < prev_total {
            rank = position as u32 + 1;
        }
        prev_total = team.total;
        standings.push(Standing { rank, team });
    }

    standings
}

/// Locale-tolerant points parsing: the first comma becomes a period,
/// anything still unparseable contributes zero.
fn parse_points(raw: &str) -> f64 {
    raw.replacen(',', ".", 1).parse().unwrap_or(0.0)
}

/// Title-case a raw name: lowercase the whole string, then uppercase the
/// first character of each space-separated token. Unicode case mapping,
/// so accented initials survive.
pub fn title_case(raw: &str) -> String {
    raw.to_lowercase()
        .split(' ')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}

struct TeamAccumulator {
    key: String,
    total: f64,
    members: Vec<MemberAccumulator>,
}

struct MemberAccumulator {
    raw_name: String,
    image: Option<String>,
    points: f64,
}

impl TeamAccumulator {
    fn new(key: &str) -> Self {
        Self {
            key: key.to_string(),
            total: 0.0,
            members: Vec::new(),
        }
    }

    /// Accumulate a row into the member identified by `raw_name`,
    /// creating it in first-seen order. Image backfill is first-wins.
    fn credit_member(&mut self, raw_name: &str, image: Option<String>, points: f64) {
        match self.members.iter_mut().find(|m| m.raw_name == raw_name) {
            Some(member) => {
                member.points += points;
                if member.image.is_none() {
                    member.image = image;
                }
            }
            None => self.members.push(MemberAccumulator {
                raw_name: raw_name.to_string(),
                image,
                points,
            }),
        }
    }

    fn finish(self) -> Team {
        let members: Vec<Member> = self
            .members
            .into_iter()
            .map(|m| Member {
                name: title_case(&m.raw_name),
                raw_name: m.raw_name,
                image: m.image,
                points: m.points,
            })
            .collect();

        let joined = members
            .iter()
            .map(|m| m.name.as_str())
            .collect::<Vec<_>>()
            .join(" & ");
        let name = if joined.is_empty() {
            format!("Dupla {}", self.key)
        } else {
            joined
        };

        Team {
            key: self.key,
            name,
            total: self.total,
            members,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sheet::build_records;
    use crate::sheet::tokenize;

    fn roles() -> RoleMap {
        RoleMap {
            title: Some("atleta".to_string()),
            image: Some("foto".to_string()),
            points: Some("pontos".to_string()),
            group_key: Some("dupla".to_string()),
        }
    }

    fn records_from(csv: &str) -> Vec<Record> {
        build_records(&tokenize(csv)).0
    }

    #[test]
    fn missing_required_role_yields_empty_standings() {
        let records = records_from("dupla,atleta,pontos\nA,ana,5");
        let mut no_points = roles();
        no_points.points = None;
        assert!(rank(&records, &no_points).is_empty());

        let mut no_group = roles();
        no_group.group_key = None;
        assert!(rank(&records, &no_group).is_empty());
    }

    #[test]
    fn rows_without_team_key_are_excluded() {
        let records = records_from("dupla,atleta,foto,pontos\n,ana,,5\nA,bia,,3");
        let standings = rank(&records, &roles());
        assert_eq!(standings.len(), 1);
        assert_eq!(standings[0].team.key, "A");
        assert_eq!(standings[0].team.total, 3.0);
    }

    #[test]
    fn same_member_accumulates_across_rows() {
        let records = records_from("dupla,atleta,foto,pontos\nA,ana,,5\nA,ana,,3");
        let standings = rank(&records, &roles());
        assert_eq!(standings[0].team.members.len(), 1);
        assert_eq!(standings[0].team.members[0].points, 8.0);
        assert_eq!(standings[0].team.total, 8.0);
    }

    #[test]
    fn anonymous_rows_count_toward_team_total() {
        // Rows with a team key but no resolvable title still contribute
        // to the team total, so the total exceeds the member sum.
        let records = records_from("dupla,atleta,foto,pontos\nA,ana,,5\nA,,,2");
        let standings = rank(&records, &roles());
        assert_eq!(standings[0].team.total, 7.0);
        assert_eq!(standings[0].team.members.len(), 1);
        assert_eq!(standings[0].team.members[0].points, 5.0);
    }

    #[test]
    fn image_backfill_is_first_wins() {
        let records = records_from(
            "dupla,atleta,foto,pontos\nA,ana,,1\nA,ana,first.jpg,1\nA,ana,second.jpg,1",
        );
        let standings = rank(&records, &roles());
        assert_eq!(
            standings[0].team.members[0].image.as_deref(),
            Some("first.jpg")
        );
    }

    #[test]
    fn locale_tolerant_points_parsing() {
        let records = records_from("dupla,atleta,foto,pontos\nA,ana,,\"12,5\"\nA,bia,,abc");
        let standings = rank(&records, &roles());
        assert_eq!(standings[0].team.total, 12.5);
        assert_eq!(standings[0].team.members[1].points, 0.0);
    }

    #[test]
    fn dense_ranks_with_ties() {
        let records = records_from(
            "dupla,atleta,foto,pontos\n\
             A,ana,,100\nB,bia,,100\nC,caio,,80\nD,duda,,80",
        );
        let standings = rank(&records, &roles());
        let ranks: Vec<u32> = standings.iter().map(|s| s.rank).collect();
        assert_eq!(ranks, vec![1, 1, 3, 3]);
        // Equal totals keep first-seen order.
        let keys: Vec<&str> = standings.iter().map(|s| s.team.key.as_str()).collect();
        assert_eq!(keys, vec!["A", "B", "C", "D"]);
    }

    #[test]
    fn display_name_joins_title_cased_members() {
        let records = records_from("dupla,atleta,foto,pontos\nA,jo\u{e3}o silva,,5\nA,MARIA,,3");
        let standings = rank(&records, &roles());
        assert_eq!(standings[0].team.name, "Jo\u{e3}o Silva & Maria");
    }

    #[test]
    fn memberless_team_gets_fallback_label() {
        let records = records_from("dupla,atleta,foto,pontos\nA,,,5");
        let standings = rank(&records, &roles());
        assert_eq!(standings[0].team.name, "Dupla A");
        assert!(standings[0].team.members.is_empty());
        assert_eq!(standings[0].team.total, 5.0);
    }

    #[test]
    fn title_case_handles_accented_initials() {
        assert_eq!(title_case("jo\u{e3}o silva"), "Jo\u{e3}o Silva");
        assert_eq!(title_case("ANA CLARA"), "Ana Clara");
        assert_eq!(title_case(""), "");
    }

    #[test]
    fn parse_points_edge_cases() {
        assert_eq!(parse_points("12,5"), 12.5);
        assert_eq!(parse_points("12.5"), 12.5);
        assert_eq!(parse_points("abc"), 0.0);
        assert_eq!(parse_points(""), 0.0);
    }
}

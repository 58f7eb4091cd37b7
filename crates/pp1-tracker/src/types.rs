use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use std::fmt::Display;

pub type Roster = Vec<String>;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamLineup {
    pub team: String,
    pub line1: Roster,
    pub pp1: Roster,
}

fn join_or_na(players: &[String]) -> String {
    if players.is_empty() {
        "N/A".to_string()
    } else {
        players.join(", ")
    }
}

impl Display for TeamLineup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} | Line 1: {} | PP1: {}",
            self.team,
            join_or_na(&self.line1),
            join_or_na(&self.pp1)
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangeNotification {
    pub team: String,
    pub added: Vec<String>,
    pub removed: Vec<String>,
}

impl Display for ChangeNotification {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "**PP1 Update for {}**", self.team)?;
        if !self.added.is_empty() {
            writeln!(f, "Added: {}", self.added.join(", "))?;
        }
        if !self.removed.is_empty() {
            writeln!(f, "Removed: {}", self.removed.join(", "))?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct PassSummary {
    pub finished_at: DateTime<Local>,
    pub lineups: Vec<TeamLineup>,
    pub unavailable: Vec<String>,
    pub notifications: Vec<ChangeNotification>,
}

impl Display for PassSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let rule = "=".repeat(80);
        writeln!(f, "\n{}", rule)?;
        for lineup in &self.lineups {
            writeln!(f, "{}", lineup)?;
        }
        if !self.unavailable.is_empty() {
            writeln!(f, "Unavailable: {}", self.unavailable.join(", "))?;
        }
        writeln!(f, "{}", rule)?;
        write!(
            f,
            "{} team(s) checked, {} change(s) reported at {}",
            self.lineups.len(),
            self.notifications.len(),
            self.finished_at.format("%Y-%m-%d %H:%M:%S")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notification_text() {
        let n = ChangeNotification {
            team: "Boston Bruins".into(),
            added: vec!["X".into()],
            removed: vec!["C".into(), "D".into()],
        };
        assert_eq!(
            n.to_string(),
            "**PP1 Update for Boston Bruins**\nAdded: X\nRemoved: C, D\n"
        );
    }

    #[test]
    fn test_notification_text_omits_empty_side() {
        let n = ChangeNotification {
            team: "Dallas Stars".into(),
            added: vec![],
            removed: vec!["Jason Robertson".into()],
        };
        assert_eq!(
            n.to_string(),
            "**PP1 Update for Dallas Stars**\nRemoved: Jason Robertson\n"
        );
    }

    #[test]
    fn test_lineup_display_uses_na_for_empty() {
        let lineup = TeamLineup {
            team: "Utah Mammoth".into(),
            line1: vec!["A".into(), "B".into(), "C".into()],
            pp1: vec![],
        };
        assert_eq!(lineup.to_string(), "Utah Mammoth | Line 1: A, B, C | PP1: N/A");
    }
}

//! Competition membership models

use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::constants::member_roles;

/// Role of a member inside a competition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MemberRole {
    Host,
    Member,
}

impl FromStr for MemberRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            member_roles::HOST => Ok(Self::Host),
            member_roles::MEMBER => Ok(Self::Member),
            other => Err(format!("unknown member role '{}'", other)),
        }
    }
}

impl std::fmt::Display for MemberRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Host => write!(f, "{}", member_roles::HOST),
            Self::Member => write!(f, "{}", member_roles::MEMBER),
        }
    }
}

/// Member of a competition; non-competitors are spectators
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompetitionMember {
    pub user_id: Uuid,
    pub competition_id: Uuid,
    pub display_name: String,
    pub role: MemberRole,
    pub is_competitor: bool,
    pub team_id: Option<Uuid>,
    pub team_name: Option<String>,
}

/// Competitor with income summed over the competition window
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankingMember {
    pub user_id: Uuid,
    pub display_name: String,
    pub total_income: Decimal,
    pub team_id: Option<Uuid>,
    pub team_name: Option<String>,
}

impl RankingMember {
    /// Build a ranking row for a competitor and their window income
    pub fn from_member(member: &CompetitionMember, total_income: Decimal) -> Self {
        Self {
            user_id: member.user_id,
            display_name: member.display_name.clone(),
            total_income,
            team_id: member.team_id,
            team_name: member.team_name.clone(),
        }
    }
}

/// Aggregated income of one team
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamStanding {
    pub team_id: Uuid,
    pub team_name: String,
    pub member_ids: Vec<Uuid>,
    pub total_income: Decimal,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_parse() {
        assert_eq!("host".parse::<MemberRole>().unwrap(), MemberRole::Host);
        assert_eq!("member".parse::<MemberRole>().unwrap(), MemberRole::Member);
        assert!("owner".parse::<MemberRole>().is_err());
        assert_eq!(MemberRole::Host.to_string(), "host");
    }
}

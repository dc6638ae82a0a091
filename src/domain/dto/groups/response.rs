use serde::Serialize;

use crate::domain::entities::groups::{Group, Manager, ManagerRole, Member};
use crate::utils::string_utils::format_datetime;

#[derive(Debug, Clone, Serialize)]
pub struct ManagerResponse {
    pub user: String,
    pub role: ManagerRole,
}

impl From<Manager> for ManagerResponse {
    fn from(m: Manager) -> Self {
        Self {
            user: m.user.to_hex(),
            role: m.role,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct MemberResponse {
    pub user: String,
    pub date: String,
}

impl From<Member> for MemberResponse {
    fn from(m: Member) -> Self {
        Self {
            user: m.user.to_hex(),
            date: format_datetime(&m.date),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct GroupResponse {
    pub id: String,
    pub name: String,
    pub code: String,
    pub description: Option<String>,
    pub managers: Vec<ManagerResponse>,
    pub members: Vec<MemberResponse>,
    pub member_requests: Vec<MemberResponse>,
    pub creator: String,
    pub date: String,
}

impl From<Group> for GroupResponse {
    fn from(g: Group) -> Self {
        Self {
            id: g.id.map(|id| id.to_hex()).unwrap_or_default(),
            name: g.name,
            code: g.code,
            description: g.description,
            managers: g.managers.into_iter().map(ManagerResponse::from).collect(),
            members: g.members.into_iter().map(MemberResponse::from).collect(),
            member_requests: g.member_requests.into_iter().map(MemberResponse::from).collect(),
            creator: g.creator.to_hex(),
            date: format_datetime(&g.date),
        }
    }
}

use chrono::NaiveDate;
use serde::Serialize;

use crate::domain::entities::profiles::{Education, Experience, Profile, Relation, Social};
use crate::utils::string_utils::format_datetime;

#[derive(Debug, Clone, Serialize)]
pub struct RelationResponse {
    pub user: String,
    pub date: String,
}

impl From<Relation> for RelationResponse {
    fn from(relation: Relation) -> Self {
        Self {
            user: relation.user.to_hex(),
            date: format_datetime(&relation.date),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ExperienceResponse {
    pub id: String,
    pub title: String,
    pub company: String,
    pub location: Option<String>,
    pub from: NaiveDate,
    pub to: Option<NaiveDate>,
    pub current: bool,
    pub description: Option<String>,
}

impl From<Experience> for ExperienceResponse {
    fn from(e: Experience) -> Self {
        Self {
            id: e.id.to_hex(),
            title: e.title,
            company: e.company,
            location: e.location,
            from: e.from,
            to: e.to,
            current: e.current,
            description: e.description,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct EducationResponse {
    pub id: String,
    pub school: String,
    pub degree: String,
    pub fieldofstudy: String,
    pub from: NaiveDate,
    pub to: Option<NaiveDate>,
    pub current: bool,
    pub description: Option<String>,
}

impl From<Education> for EducationResponse {
    fn from(e: Education) -> Self {
        Self {
            id: e.id.to_hex(),
            school: e.school,
            degree: e.degree,
            fieldofstudy: e.fieldofstudy,
            from: e.from,
            to: e.to,
            current: e.current,
            description: e.description,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ProfileResponse {
    pub id: String,
    pub user: String,
    pub company: Option<String>,
    pub website: Option<String>,
    pub location: Option<String>,
    pub status: String,
    pub skills: Vec<String>,
    pub bio: Option<String>,
    pub experience: Vec<ExperienceResponse>,
    pub education: Vec<EducationResponse>,
    pub social: Social,
    pub followers: Vec<RelationResponse>,
    pub followings: Vec<RelationResponse>,
    pub friends: Vec<RelationResponse>,
    pub friend_requests: Vec<RelationResponse>,
    pub date: String,
}

fn relations(list: Vec<Relation>) -> Vec<RelationResponse> {
    list.into_iter().map(RelationResponse::from).collect()
}

impl From<Profile> for ProfileResponse {
    fn from(p: Profile) -> Self {
        Self {
            id: p.id.map(|id| id.to_hex()).unwrap_or_default(),
            user: p.user.to_hex(),
            company: p.company,
            website: p.website,
            location: p.location,
            status: p.status,
            skills: p.skills,
            bio: p.bio,
            experience: p.experience.into_iter().map(ExperienceResponse::from).collect(),
            education: p.education.into_iter().map(EducationResponse::from).collect(),
            social: p.social,
            followers: relations(p.followers),
            followings: relations(p.followings),
            friends: relations(p.friends),
            friend_requests: relations(p.friend_requests),
            date: format_datetime(&p.date),
        }
    }
}

pub mod error;
pub mod normalize;
pub mod rank;
pub mod schema;
pub mod store;
pub mod types;

pub use error::ProfileError;
pub use normalize::{SkillGroup, SkillsInput};
pub use store::ProfileStore;
pub use types::{
    Certification, Education, Experience, PersonalInfo, Portfolio, Project, ProjectLinks, Skill,
};

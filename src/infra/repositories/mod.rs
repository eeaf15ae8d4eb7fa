pub mod sqlite_invitee_repo;
pub mod sqlite_template_repo;

pub mod postgres_invitee_repo;
pub mod postgres_template_repo;
